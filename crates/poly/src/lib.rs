//! # Rectigon Poly
//!
//! Monotone polygon assembly and queries over [`rectigon_core`] points.
//!
//! This crate provides polygon construction from unordered point sets,
//! together with orientation, signed-area, and point-classification queries:
//!
//! - **General polygons**: [`create_xmono_polygon`], [`create_ymono_polygon`],
//!   [`Polygon`], [`point_in_polygon`], [`polygon_is_clockwise`]
//! - **Rectilinear polygons**: [`create_xmono_rpolygon`],
//!   [`create_ymono_rpolygon`], [`RPolygon`], [`point_in_rpolygon`],
//!   [`rpolygon_is_clockwise`]
//!
//! The construction functions reorder the caller's slice in place
//! (partition + sort, exclusive access for the duration of the call) and
//! assume the input admits a monotone decomposition; self-intersecting or
//! multiply-connected inputs are out of scope.
//!
//! ```rust
//! use rectigon_core::Point;
//! use rectigon_poly::{create_ymono_polygon, point_in_polygon, Polygon};
//!
//! let mut points = vec![
//!     Point::new(-2, 2),
//!     Point::new(0, -1),
//!     Point::new(-5, 1),
//!     Point::new(-2, 4),
//!     Point::new(0, -4),
//!     Point::new(-4, 3),
//! ];
//! create_ymono_polygon(&mut points);
//! let poly = Polygon::new(&points);
//! assert_eq!(poly.signed_area_x2(), 34);
//! assert!(!point_in_polygon(&points, &Point::new(6, 6)));
//! ```
//!
//! ## Feature flags
//!
//! - `serde`: serialization support for [`Polygon`] and [`RPolygon`]

use core::ops::{Add, AddAssign, Mul, Sub};

use num_traits::Zero;

pub mod polygon;
pub mod rpolygon;

// Re-exports
pub use polygon::{
    create_xmono_polygon, create_ymono_polygon, point_in_polygon, polygon_is_clockwise, Polygon,
};
pub use rpolygon::{
    create_xmono_rpolygon, create_ymono_rpolygon, point_in_rpolygon, rpolygon_is_clockwise,
    RPolygon,
};

/// Scalar requirement for the polygon algorithms: an ordered ring.
///
/// Satisfied by the primitive signed integers; blanket-implemented so any
/// type with the listed capabilities qualifies.
pub trait PolygonScalar:
    Copy
    + Ord
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + AddAssign
{
}

impl<T> PolygonScalar for T where
    T: Copy + Ord + Zero + Add<Output = T> + Sub<Output = T> + Mul<Output = T> + AddAssign
{
}

/// Reorders `xs` so that every element satisfying `pred` precedes every
/// element that does not, returning the partition point. Not stable; both
/// constructions sort the halves afterwards.
pub(crate) fn partition_in_place<T, F>(xs: &mut [T], pred: F) -> usize
where
    F: Fn(&T) -> bool,
{
    let mut at = 0;
    for idx in 0..xs.len() {
        if pred(&xs[idx]) {
            xs.swap(at, idx);
            at += 1;
        }
    }
    at
}
