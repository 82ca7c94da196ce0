// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vista Gallery: headless logic for a two-page photo gallery site.
//!
//! The site has a landing screen ([`LandingPage`]) and a gallery route
//! ([`GalleryPage`]). The gallery filters a [`Catalog`] by category, renders
//! the result through a growing window ([`GalleryGrid`]), and opens a
//! shared-element modal when a card is clicked.
//!
//! Nothing here touches a real DOM, clock, or renderer. The host:
//!
//! - drives a [`vista_motion::Animator`] over [`Target`]s and routes every
//!   finished handle back to `on_complete`,
//! - calls `tick(now)` when [`GalleryPage::next_deadline`] passes,
//! - reports sentinel visibility and applies growth tickets on frames,
//! - implements [`Router`] for navigation.
//!
//! State transitions are reported to a [`GalleryTrace`] sink. With the
//! `tracing` feature, `TracingTrace` forwards them to `tracing`. With the
//! `serde` feature, catalogs load from JSON.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use vista_gallery::{Catalog, Category, GalleryPage, ImageId, PageConfig};
//! use vista_modal::ScrollLock;
//! use vista_motion::Motion;
//!
//! let mut motion = Motion::new();
//! let mut page = GalleryPage::mount(
//!     Duration::ZERO,
//!     Catalog::builtin(),
//!     PageConfig::default(),
//!     ScrollLock::new(),
//!     &mut motion,
//! );
//! assert_eq!(page.grid().visible().len(), 9);
//!
//! page.select_category(Category::Beaches.into(), &mut motion);
//! assert_eq!(page.grid().visible(), &[ImageId(1), ImageId(6)]);
//!
//! for handle in motion.advance(Duration::from_secs(2)) {
//!     page.on_complete(handle);
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod card;
mod catalog;
mod filters;
mod grid;
mod image;
mod landing;
mod overlay;
mod page;
mod route;
mod sizes;
mod target;
mod trace;

pub use card::{CardClick, CardConfig, ImageCard};
pub use catalog::{Catalog, CatalogError};
pub use filters::{ButtonVariant, GalleryFilters};
pub use grid::{GalleryGrid, GridConfig, GridEvent};
pub use image::{Category, CategoryFilter, GalleryImage, ImageId, ParseCategoryError};
pub use landing::{LANDING_TITLE, LandingPage, LandingPhase};
pub use overlay::{OverlayMode, TransitionOverlay};
pub use page::{GALLERY_TITLE, GalleryPage, PageConfig, PageEvent};
pub use route::{ParseRouteError, Route, Router};
pub use sizes::{DEFAULT_CANDIDATE_WIDTHS, ImageRequest, Loading, SizeRule, Sizes, pick_candidate};
pub use target::{LandingPart, PagePart, Target};
#[cfg(feature = "tracing")]
pub use trace::TracingTrace;
pub use trace::GalleryTrace;
