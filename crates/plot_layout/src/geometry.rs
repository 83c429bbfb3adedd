//! Geometry primitives used by the plot layout
//!
//! Rectangles are stored as origin plus extent in floating point layout
//! coordinates. Sizes, margins and distances reported by the plot components
//! are whole pixels.

use serde::{Deserialize, Serialize};

/// A rectangle in layout coordinates
///
/// `right()` and `bottom()` are `x + width` and `y + height`. Setting a single
/// edge keeps the opposite edge where it is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutRect {
    /// Create a new rectangle
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle from its four edges
    pub fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Get the left edge
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Get the top edge
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Get the right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Move the left edge, keeping the right edge
    pub fn set_left(&mut self, left: f64) {
        self.width += self.x - left;
        self.x = left;
    }

    /// Move the top edge, keeping the bottom edge
    pub fn set_top(&mut self, top: f64) {
        self.height += self.y - top;
        self.y = top;
    }

    /// Move the right edge, keeping the left edge
    pub fn set_right(&mut self, right: f64) {
        self.width = right - self.x;
    }

    /// Move the bottom edge, keeping the top edge
    pub fn set_bottom(&mut self, bottom: f64) {
        self.height = bottom - self.y;
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    /// Replace origin and extent at once
    pub fn set_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        *self = Self::new(x, y, width, height);
    }

    /// A rectangle is valid when both extents are positive
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// A rectangle is empty when it covers no area
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Flip negative extents so that width and height are non-negative
    pub fn normalized(&self) -> Self {
        let mut r = *self;
        if r.width < 0.0 {
            r.x += r.width;
            r.width = -r.width;
        }
        if r.height < 0.0 {
            r.y += r.height;
            r.height = -r.height;
        }
        r
    }

    /// The overlapping area of two rectangles, empty if they do not overlap
    pub fn intersected(&self, other: &LayoutRect) -> Self {
        let a = self.normalized();
        let b = other.normalized();

        let left = a.left().max(b.left());
        let top = a.top().max(b.top());
        let right = a.right().min(b.right());
        let bottom = a.bottom().min(b.bottom());

        if right <= left || bottom <= top {
            return Self::default();
        }
        Self::from_ltrb(left, top, right, bottom)
    }

    /// The smallest rectangle containing both rectangles
    pub fn united(&self, other: &LayoutRect) -> Self {
        let a = self.normalized();
        let b = other.normalized();
        Self::from_ltrb(
            a.left().min(b.left()),
            a.top().min(b.top()),
            a.right().max(b.right()),
            a.bottom().max(b.bottom()),
        )
    }

    /// Bounding box of the region that remains after removing `other`
    ///
    /// The remaining region is in general not a rectangle (removing a corner
    /// leaves an L shape), so the result is the bounding box of up to four
    /// bands: above, below, left of and right of the overlap. When `other`
    /// covers the whole rectangle the result is empty.
    pub fn subtracted(&self, other: &LayoutRect) -> Self {
        let a = self.normalized();
        if a.is_empty() {
            return Self::default();
        }

        let overlap = a.intersected(other);
        if overlap.is_empty() {
            return a;
        }

        let bands = [
            Self::from_ltrb(a.left(), a.top(), a.right(), overlap.top()),
            Self::from_ltrb(a.left(), overlap.bottom(), a.right(), a.bottom()),
            Self::from_ltrb(a.left(), overlap.top(), overlap.left(), overlap.bottom()),
            Self::from_ltrb(overlap.right(), overlap.top(), a.right(), overlap.bottom()),
        ];

        bands
            .iter()
            .filter(|band| !band.is_empty())
            .fold(None, |acc: Option<LayoutRect>, band| {
                Some(match acc {
                    Some(bounds) => bounds.united(band),
                    None => *band,
                })
            })
            .unwrap_or_default()
    }
}

/// A width/height pair in whole pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSize {
    pub width: i32,
    pub height: i32,
}

impl LayoutSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Per-edge margins in whole pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Margins {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// The same margin on every edge
    pub fn uniform(margin: i32) -> Self {
        Self::new(margin, margin, margin, margin)
    }
}
