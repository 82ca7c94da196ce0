// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gallery data model.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

/// Unique identifier of a [`GalleryImage`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ImageId(pub u32);

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The fixed set of photo categories, in filter-bar order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Coastlines and beaches.
    Beaches,
    /// Mountain landscapes.
    Mountains,
    /// Cityscapes and streets.
    Cities,
    /// Forests, parks and wild places.
    Nature,
    /// Buildings and monuments.
    Architecture,
}

impl Category {
    /// Every category, in filter-bar order.
    pub const ALL: [Self; 5] = [
        Self::Beaches,
        Self::Mountains,
        Self::Cities,
        Self::Nature,
        Self::Architecture,
    ];

    /// The display label, which is also the parse form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beaches => "Beaches",
            Self::Mountains => "Mountains",
            Self::Cities => "Cities",
            Self::Nature => "Nature",
            Self::Architecture => "Architecture",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| ParseCategoryError { label: s.into() })
    }
}

/// The category selection: everything, or a single category.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// No filtering.
    #[default]
    All,
    /// Only images of one category.
    Only(Category),
}

impl CategoryFilter {
    /// `All` followed by every category, in filter-bar order.
    pub const ALL: [Self; 6] = [
        Self::All,
        Self::Only(Category::Beaches),
        Self::Only(Category::Mountains),
        Self::Only(Category::Cities),
        Self::Only(Category::Nature),
        Self::Only(Category::Architecture),
    ];

    /// The display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(c) => c.label(),
        }
    }

    /// Returns `true` if images of `category` pass the filter.
    #[must_use]
    pub fn admits(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

/// A label that names no category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseCategoryError {
    label: String,
}

impl ParseCategoryError {
    /// The rejected label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category `{}`", self.label)
    }
}

impl core::error::Error for ParseCategoryError {}

/// One photo in the gallery.
///
/// Images are immutable once loaded. Sizes are validated to be positive when
/// the image enters a [`Catalog`](crate::Catalog).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GalleryImage {
    /// Unique id.
    pub id: ImageId,
    /// Source URI, resolved by the host's image service.
    pub src: String,
    /// Alternative text, also used as the modal description.
    pub alt: String,
    /// Where the photo was taken.
    pub location: String,
    /// The photo's category.
    pub category: Category,
    /// Intrinsic width in pixels.
    pub width: u32,
    /// Intrinsic height in pixels.
    pub height: u32,
}

impl GalleryImage {
    /// Width divided by height, or `1.0` for a degenerate size.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            return 1.0;
        }
        f64::from(self.width) / f64::from(self.height)
    }

    /// Accessible label for the card's location region.
    #[must_use]
    pub fn location_label(&self) -> String {
        alloc::format!("Location: {}", self.location)
    }
}
