//! Rectangles and axis-aligned segments as [`Point`] instantiations.
//!
//! These are aliases, not separate implementations: every predicate and
//! metric they support comes from the per-axis dispatch on [`Point`].

use core::ops::{Mul, Sub};

use crate::interval::Interval;
use crate::point::Point;

/// Axis-aligned rectangle: an interval on each axis.
pub type Rect<T> = Point<Interval<T>, Interval<T>>;

/// Horizontal segment: an x range at a fixed y.
pub type HSegment<T> = Point<Interval<T>, T>;

/// Vertical segment: a y range at a fixed x.
pub type VSegment<T> = Point<T, Interval<T>>;

impl<T: Copy> Point<Interval<T>, Interval<T>> {
    /// Lower-left corner.
    pub fn ll(&self) -> Point<T, T> {
        Point::new(self.x().lb(), self.y().lb())
    }

    /// Upper-right corner.
    pub fn ur(&self) -> Point<T, T> {
        Point::new(self.x().ub(), self.y().ub())
    }

    /// Area of the rectangle.
    pub fn area(&self) -> T
    where
        T: Sub<Output = T> + Mul<Output = T>,
    {
        self.x().length() * self.y().length()
    }
}
