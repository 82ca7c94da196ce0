// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The authoritative image list.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashSet;

use crate::{Category, CategoryFilter, GalleryImage, ImageId};

/// Why a list of images was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// Two images share an id.
    DuplicateId(ImageId),
    /// An image has a zero width or height.
    EmptySize(ImageId),
    /// An image has an empty source URI.
    MissingSource(ImageId),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "image id {id} appears more than once"),
            Self::EmptySize(id) => write!(f, "image {id} has a zero width or height"),
            Self::MissingSource(id) => write!(f, "image {id} has no source"),
        }
    }
}

impl core::error::Error for CatalogError {}

/// A validated, ordered list of images.
///
/// Ids are unique and sizes positive. Order is the display order; filtering
/// preserves it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<GalleryImage>", into = "Vec<GalleryImage>"))]
pub struct Catalog {
    images: Vec<GalleryImage>,
}

impl Catalog {
    /// An empty catalog, as before images have loaded.
    #[must_use]
    pub const fn empty() -> Self {
        Self { images: Vec::new() }
    }

    /// Validates `images` and keeps their order.
    pub fn from_images(images: Vec<GalleryImage>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(images.len());
        for image in &images {
            if !seen.insert(image.id) {
                return Err(CatalogError::DuplicateId(image.id));
            }
            if image.width == 0 || image.height == 0 {
                return Err(CatalogError::EmptySize(image.id));
            }
            if image.src.is_empty() {
                return Err(CatalogError::MissingSource(image.id));
            }
        }
        Ok(Self { images })
    }

    /// The nine destinations the site ships with.
    #[must_use]
    pub fn builtin() -> Self {
        const PHOTOS: [(u32, &str, &str, &str, Category, u32, u32); 9] = [
            (
                1,
                "3601425",
                "Beach with palm trees",
                "Bali, Indonesia",
                Category::Beaches,
                1200,
                800,
            ),
            (
                2,
                "417074",
                "Mountain landscape",
                "Swiss Alps, Switzerland",
                Category::Mountains,
                800,
                1200,
            ),
            (3, "1519088", "City skyline", "Tokyo, Japan", Category::Cities, 1200, 900),
            (4, "2104882", "Nature landscape", "Yosemite, USA", Category::Nature, 1000, 1400),
            (
                5,
                "819764",
                "Historic architecture",
                "Rome, Italy",
                Category::Architecture,
                1200,
                800,
            ),
            (6, "1802268", "Tropical beach", "Maldives", Category::Beaches, 1200, 900),
            (7, "417173", "Mountain range", "Himalayas, Nepal", Category::Mountains, 1200, 800),
            (8, "374870", "City street", "New York, USA", Category::Cities, 800, 1200),
            (
                9,
                "2662116",
                "Forest landscape",
                "Black Forest, Germany",
                Category::Nature,
                1200,
                800,
            ),
        ];
        let images = PHOTOS
            .into_iter()
            .map(|(id, photo, alt, location, category, width, height)| GalleryImage {
                id: ImageId(id),
                src: alloc::format!(
                    "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg"
                ),
                alt: String::from(alt),
                location: String::from(location),
                category,
                width,
                height,
            })
            .collect();
        Self { images }
    }

    /// All images in display order.
    #[must_use]
    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    /// Looks up an image by id.
    #[must_use]
    pub fn get(&self, id: ImageId) -> Option<&GalleryImage> {
        self.images.iter().find(|i| i.id == id)
    }

    /// Number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` if there are no images.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Images passing `filter`, in display order.
    pub fn filtered(&self, filter: CategoryFilter) -> impl Iterator<Item = &GalleryImage> + '_ {
        self.images.iter().filter(move |i| filter.admits(i.category))
    }

    /// Ids of the images passing `filter`, in display order.
    #[must_use]
    pub fn filtered_ids(&self, filter: CategoryFilter) -> Vec<ImageId> {
        self.filtered(filter).map(|i| i.id).collect()
    }
}

impl TryFrom<Vec<GalleryImage>> for Catalog {
    type Error = CatalogError;

    fn try_from(images: Vec<GalleryImage>) -> Result<Self, Self::Error> {
        Self::from_images(images)
    }
}

impl From<Catalog> for Vec<GalleryImage> {
    fn from(catalog: Catalog) -> Self {
        catalog.images
    }
}
