//! # Rectigon Core
//!
//! Rectilinear computational-geometry primitives for CAD/VLSI-style layout
//! tooling.
//!
//! This crate provides the nested value types and the generic operation
//! protocol shared by the rest of the workspace:
//!
//! - **Dispatch protocol**: [`Overlaps`], [`Contains`], [`Intersect`],
//!   [`MinDist`], [`MinDistChange`], [`Enlarge`] — resolved per operand
//!   category at compile time, with free-function mirrors ([`overlap`],
//!   [`contain`], [`intersection`], [`min_dist`], [`min_dist_change`],
//!   [`enlarge`]).
//! - **Primitives**: [`Interval`], [`Point`], [`Vector2`], and the
//!   [`Rect`]/[`HSegment`]/[`VSegment`] instantiations.
//! - **Merge algebra**: [`MergeObj`], Manhattan-distance region merging in a
//!   45°-rotated frame.
//! - **Test data**: [`halton`] low-discrepancy generators.
//!
//! Axis types nest freely — an interval of intervals, a point of points, a
//! rectangle with a scalar third axis — and every operation keeps its
//! meaning through the nesting:
//!
//! ```rust
//! use rectigon_core::{Contains, Interval, Point};
//!
//! let rect = Point::new(Interval::new(4, 8), Interval::new(5, 7));
//! assert!(rect.contains(&Point::new(7, 6)));
//! assert_eq!(rect.area(), 8);
//!
//! // the same predicate on a 3-D box
//! let slab = Point::new(rect, 1000);
//! assert!(slab.contains(&Point::new(Point::new(7, 6), 1000)));
//! ```
//!
//! All types are plain `Copy` values; the only mutating operations are the
//! explicitly named assigning operators and the converging
//! `min_dist_change` family.
//!
//! ## Feature flags
//!
//! - `serde`: serialization support for the public value types

pub mod error;
pub mod halton;
pub mod interval;
pub mod merge;
pub mod point;
pub mod rect;
pub mod region;
pub mod vector2;

// Re-exports
pub use error::{Error, Result};
pub use interval::Interval;
pub use merge::MergeObj;
pub use point::Point;
pub use rect::{HSegment, Rect, VSegment};
pub use region::{contain, enlarge, intersection, min_dist, min_dist_change, overlap};
pub use region::{Contains, Enlarge, Intersect, MinDist, MinDistChange, Overlaps};
pub use vector2::Vector2;
