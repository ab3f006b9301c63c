//! Geometric primitives for layout analysis.
//!
//! This module provides the basic geometric types and operations used
//! throughout the layout analysis algorithms: points, sizes, axis-aligned
//! rectangles with signed overlap measures, and the stable bounding-box
//! orderings the segmentation pipeline relies on.
//!
//! Coordinates are in page space: the origin is the top-left corner and
//! the y axis grows downward.

use std::cmp::Ordering;

/// A 2D point in page space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A 2D extent (non-negative width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Create a new size.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Compute the covered area.
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Scale both dimensions by a factor.
    pub fn scale(&self, factor: f32) -> Size {
        Size::new(self.width * factor, self.height * factor)
    }
}

/// An axis-aligned rectangle in page space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X coordinate of the top-left corner
    pub x: f32,
    /// Y coordinate of the top-left corner
    pub y: f32,
    /// Width of the rectangle
    pub width: f32,
    /// Height of the rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from two corner points.
    ///
    /// # Examples
    ///
    /// ```
    /// use layout_oxide::geometry::Rect;
    ///
    /// let rect = Rect::from_points(10.0, 20.0, 110.0, 70.0);
    /// assert_eq!(rect.width, 100.0);
    /// assert_eq!(rect.height, 50.0);
    /// ```
    pub fn from_points(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }

    /// Create a rectangle covering `size` with its top-left corner at the
    /// page origin.
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Get the left edge x-coordinate.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the top edge y-coordinate.
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Get the bottom edge y-coordinate.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Get the center point of the rectangle.
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Compute the area of the rectangle.
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Signed length of the projected overlap on the x axis.
    ///
    /// Positive when the rectangles overlap horizontally, zero when they
    /// touch, negative when they are horizontally disjoint (the magnitude
    /// is the gap between them).
    ///
    /// # Examples
    ///
    /// ```
    /// use layout_oxide::geometry::Rect;
    ///
    /// let a = Rect::new(0.0, 0.0, 10.0, 4.0);
    /// let b = Rect::new(8.0, 0.0, 10.0, 4.0);
    /// let c = Rect::new(15.0, 0.0, 10.0, 4.0);
    ///
    /// assert_eq!(a.horizontal_overlap(&b), 2.0);
    /// assert_eq!(a.horizontal_overlap(&c), -5.0);
    /// ```
    pub fn horizontal_overlap(&self, other: &Rect) -> f32 {
        self.right().min(other.right()) - self.left().max(other.left())
    }

    /// Signed length of the projected overlap on the y axis.
    ///
    /// Same sign convention as [`horizontal_overlap`](Self::horizontal_overlap).
    pub fn vertical_overlap(&self, other: &Rect) -> f32 {
        self.bottom().min(other.bottom()) - self.top().max(other.top())
    }

    /// Horizontal overlap divided by the narrower of the two widths.
    ///
    /// A ratio of 1.0 means the narrower rectangle is fully covered
    /// horizontally by the other.
    pub fn horizontal_overlap_ratio(&self, other: &Rect) -> f32 {
        self.horizontal_overlap(other) / self.width.min(other.width)
    }

    /// Vertical overlap divided by the shorter of the two heights.
    pub fn vertical_overlap_ratio(&self, other: &Rect) -> f32 {
        self.vertical_overlap(other) / self.height.min(other.height)
    }

    /// Check if this rectangle intersects another with positive area.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.horizontal_overlap(other) > 0.0 && self.vertical_overlap(other) > 0.0
    }

    /// Compute the union of this rectangle with another.
    ///
    /// Returns the smallest rectangle containing both.
    ///
    /// # Examples
    ///
    /// ```
    /// use layout_oxide::geometry::Rect;
    ///
    /// let a = Rect::new(0.0, 0.0, 50.0, 50.0);
    /// let b = Rect::new(25.0, 25.0, 50.0, 50.0);
    /// let union = a.union(&b);
    ///
    /// assert_eq!(union.right(), 75.0);
    /// assert_eq!(union.bottom(), 75.0);
    /// ```
    pub fn union(&self, other: &Rect) -> Rect {
        let x0 = self.left().min(other.left());
        let y0 = self.top().min(other.top());
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        Rect::from_points(x0, y0, x1, y1)
    }

    /// Expand this rectangle in place to the minimum box enclosing both.
    pub fn union_with(&mut self, other: &Rect) {
        *self = self.union(other);
    }
}

/// Reading order: top-to-bottom with a same-row tolerance, then
/// left-to-right.
///
/// Two boxes whose vertical overlap exceeds half the smaller height are
/// treated as lying on the same visual row and compared by their left
/// edges; otherwise the higher box sorts first. Intended for use with
/// stable sorts so that input order breaks remaining ties.
pub fn cmp_reading_order(a: &Rect, b: &Rect) -> Ordering {
    if a.vertical_overlap(b) > 0.5 * a.height.min(b.height) {
        a.left().total_cmp(&b.left())
    } else {
        a.top().total_cmp(&b.top())
    }
}

/// Ascending left edge.
pub fn cmp_left_to_right(a: &Rect, b: &Rect) -> Ordering {
    a.left().total_cmp(&b.left())
}

/// Column order: ascending left edge, then ascending top edge.
pub fn cmp_columnwise(a: &Rect, b: &Rect) -> Ordering {
    a.left().total_cmp(&b.left()).then(a.top().total_cmp(&b.top()))
}
