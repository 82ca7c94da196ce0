// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless visit to the gallery.
//!
//! Loads a catalog from JSON, mounts the gallery page, narrows the filter,
//! hovers a card, opens and closes the modal, then navigates home. Every
//! state transition is printed through a `GalleryTrace` sink.
//!
//! Run:
//! - `cargo run -p vista_demos --example gallery_session`

use core::ops::Range;
use std::time::Duration;

use kurbo::Rect;
use vista_gallery::{
    Catalog, Category, CategoryFilter, GalleryImage, GalleryPage, GalleryTrace, ImageId,
    ImageRequest, PageConfig, Route, Target,
};
use vista_modal::{CloseTrigger, ModalPhase, ScrollLock};
use vista_motion::Motion;

/// Prints every event.
#[derive(Debug, Default)]
struct Printer;

impl Printer {
    fn log(&self, message: std::fmt::Arguments<'_>) {
        println!("trace: {message}");
    }
}

impl GalleryTrace for Printer {
    fn category_changed(&mut self, filter: CategoryFilter, len: usize) {
        self.log(format_args!("filter -> {filter} ({len} images)"));
    }

    fn window_reset(&mut self, len: usize, range: Range<usize>) {
        self.log(format_args!("window reset: {range:?} of {len}"));
    }

    fn window_grew(&mut self, added: Range<usize>, len: usize) {
        self.log(format_args!("window grew: +{added:?} of {len}"));
    }

    fn entrance_scheduled(&mut self, cards: usize) {
        self.log(format_args!("{cards} cards rise in"));
    }

    fn modal_phase(&mut self, image: ImageId, phase: ModalPhase) {
        self.log(format_args!("modal {image}: {phase:?}"));
    }

    fn modal_closing(
        &mut self,
        image: ImageId,
        trigger: CloseTrigger,
        target: Rect,
        fallback: bool,
    ) {
        let kind = if fallback { "fallback" } else { "card" };
        self.log(format_args!(
            "modal {image} closing by {trigger:?} toward {kind} {target:?}"
        ));
    }

    fn navigated(&mut self, route: Route) {
        self.log(format_args!("navigate to {route}"));
    }
}

fn extra_images() -> Vec<GalleryImage> {
    let json = r#"[
        {"id": 10, "src": "https://images.pexels.com/photos/1450353/pexels-photo-1450353.jpeg",
         "alt": "Desert dunes", "location": "Sahara, Morocco", "category": "Nature",
         "width": 1200, "height": 800},
        {"id": 11, "src": "https://images.pexels.com/photos/208701/pexels-photo-208701.jpeg",
         "alt": "Coastal cliffs", "location": "Algarve, Portugal", "category": "Beaches",
         "width": 1200, "height": 900}
    ]"#;
    match serde_json::from_str(json) {
        Ok(images) => images,
        Err(err) => {
            eprintln!("skipping extra images: {err}");
            Vec::new()
        }
    }
}

/// Steps a 60 Hz frame clock up to `until` milliseconds.
fn run(
    page: &mut GalleryPage<Printer>,
    motion: &mut Motion<Target>,
    now: &mut Duration,
    until: u64,
) {
    while *now < Duration::from_millis(until) {
        *now += Duration::from_millis(16);
        let mut events = page.tick(*now, motion);
        for handle in motion.advance(*now) {
            events.extend(page.on_complete(handle));
        }
        for event in events {
            println!("event: {event:?}");
        }
    }
}

fn main() {
    let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
    let mut images = Catalog::builtin().images().to_vec();
    images.extend(extra_images());
    let catalog = match Catalog::from_images(images) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("invalid catalog: {err}");
            return;
        }
    };

    let lock = ScrollLock::new();
    let mut motion = Motion::<Target>::new();
    let mut now = Duration::ZERO;
    let mut page = GalleryPage::mount_with_trace(
        now,
        catalog,
        PageConfig::default(),
        lock.clone(),
        &mut motion,
        Printer,
    );

    run(&mut page, &mut motion, &mut now, 1_000);

    page.select_category(Category::Beaches.into(), &mut motion);
    for image in page.visible_images() {
        let request = ImageRequest::card(image);
        println!(
            "card {} {:?} ({}) sizes=\"{}\" -> {:?}px",
            image.id,
            image.alt,
            image.location_label(),
            request.sizes,
            request.resolve(&vista_gallery::DEFAULT_CANDIDATE_WIDTHS, viewport.width(), 2.0),
        );
    }

    let card = ImageId(6);
    page.grid_mut().pointer_enter(card, now, &mut motion);
    run(&mut page, &mut motion, &mut now, 1_200);

    let rect = Rect::new(660.0, 220.0, 1240.0, 655.0);
    if let Some(click) = page.grid().card(card).map(|c| c.click(Some(rect))) {
        page.click(click, viewport, &mut motion);
    }
    println!("scroll locked: {}", lock.is_locked());
    run(&mut page, &mut motion, &mut now, 2_200);

    page.request_close(CloseTrigger::CloseButton, Some(rect), viewport, &mut motion);
    run(&mut page, &mut motion, &mut now, 3_000);
    println!("scroll locked: {}", lock.is_locked());

    let mut history: Vec<Route> = Vec::new();
    page.navigate(Route::Landing, &mut history, &mut motion);
    println!("history: {history:?}, idle: {}", motion.is_idle());
}
