//! General monotone polygons.

use core::ops::AddAssign;

use rectigon_core::{Point, Vector2};

use crate::{partition_in_place, PolygonScalar};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polygon stored as an origin plus displacements-from-origin.
///
/// The vertex ordering invariant (simple, non-self-intersecting boundary) is
/// established by the construction functions, not re-checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon<T> {
    origin: Point<T, T>,
    vecs: Vec<Vector2<T, T>>,
}

impl<T: PolygonScalar> Polygon<T> {
    /// Builds a polygon from an ordered boundary point sequence.
    ///
    /// # Panics
    ///
    /// Panics if `pointset` is empty.
    pub fn new(pointset: &[Point<T, T>]) -> Self {
        assert!(!pointset.is_empty(), "polygon from empty point sequence");
        let origin = pointset[0];
        let vecs = pointset[1..].iter().map(|pt| *pt - origin).collect();
        Self { origin, vecs }
    }

    /// Fallible counterpart of [`Polygon::new`].
    pub fn try_new(pointset: &[Point<T, T>]) -> rectigon_core::Result<Self> {
        if pointset.is_empty() {
            return Err(rectigon_core::Error::EmptyPointSeq(
                "polygon construction".to_string(),
            ));
        }
        Ok(Self::new(pointset))
    }

    /// First vertex of the boundary.
    pub fn origin(&self) -> Point<T, T> {
        self.origin
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vecs.len() + 1
    }

    /// Twice the signed area, positive for an anticlockwise boundary under
    /// the y-up, x-right convention.
    ///
    /// Shoelace sum over the stored displacement vectors; the origin terms
    /// cancel, so no vertex positions are rebuilt.
    pub fn signed_area_x2(&self) -> T {
        let vs = &self.vecs;
        let n = vs.len();
        assert!(n >= 2, "signed area of a degenerate polygon");
        let mut res = vs[0].x() * vs[1].y() - vs[n - 1].x() * vs[n - 2].y();
        for idx in 1..n - 1 {
            res += vs[idx].x() * (vs[idx + 1].y() - vs[idx - 1].y());
        }
        res
    }

    /// Lower-left corner of the bounding box.
    pub fn lb(&self) -> Point<T, T> {
        let mut min_x = self.origin.x();
        let mut min_y = self.origin.y();
        for v in &self.vecs {
            let x = self.origin.x() + v.x();
            let y = self.origin.y() + v.y();
            if x < min_x {
                min_x = x;
            }
            if y < min_y {
                min_y = y;
            }
        }
        Point::new(min_x, min_y)
    }

    /// Upper-right corner of the bounding box.
    pub fn ub(&self) -> Point<T, T> {
        let mut max_x = self.origin.x();
        let mut max_y = self.origin.y();
        for v in &self.vecs {
            let x = self.origin.x() + v.x();
            let y = self.origin.y() + v.y();
            if x > max_x {
                max_x = x;
            }
            if y > max_y {
                max_y = y;
            }
        }
        Point::new(max_x, max_y)
    }
}

impl<T: PolygonScalar> AddAssign<Vector2<T, T>> for Polygon<T> {
    /// Translates the whole polygon; the displacement vectors are
    /// origin-relative and unaffected.
    fn add_assign(&mut self, rhs: Vector2<T, T>) {
        self.origin += rhs;
    }
}

/// Reorders `points` in place into a monotone polygon boundary with respect
/// to the given (primary, secondary) sort key.
///
/// The two extreme points split the set into the chains on either side of
/// their connecting displacement (cross-product sign test); each chain is
/// sorted along the key and the far chain reversed, closing the boundary.
fn create_mono_polygon<T, K, F>(points: &mut [Point<T, T>], key: F)
where
    T: PolygonScalar,
    K: Ord,
    F: Fn(&Point<T, T>) -> K,
{
    assert!(!points.is_empty(), "monotone polygon from empty sequence");

    let mut lo = 0;
    let mut hi = 0;
    for idx in 1..points.len() {
        if key(&points[idx]) < key(&points[lo]) {
            lo = idx;
        }
        if key(&points[idx]) >= key(&points[hi]) {
            hi = idx;
        }
    }
    let min_pt = points[lo];
    let max_pt = points[hi];
    let displace = max_pt - min_pt;

    let middle = partition_in_place(points, |pt| {
        displace.cross(&(*pt - min_pt)) <= T::zero()
    });
    log::debug!(
        "monotone split: {} of {} points on the first chain",
        middle,
        points.len()
    );
    points[..middle].sort_by_key(|pt| key(pt));
    points[middle..].sort_by_key(|pt| key(pt));
    points[middle..].reverse();
}

/// Reorders `points` in place into an x-monotone polygon boundary.
pub fn create_xmono_polygon<T: PolygonScalar>(points: &mut [Point<T, T>]) {
    create_mono_polygon(points, |pt| (pt.x(), pt.y()));
}

/// Reorders `points` in place into a y-monotone polygon boundary.
pub fn create_ymono_polygon<T: PolygonScalar>(points: &mut [Point<T, T>]) {
    create_mono_polygon(points, |pt| (pt.y(), pt.x()));
}

/// Crossing-number point-in-polygon test over an ordered boundary.
///
/// An edge counts when it straddles the query row under the half-open
/// `[lower, upper)` rule, so shared vertices are never double-counted; the
/// cross-product sign picks the side of the edge. Strictly interior points
/// return true, strictly exterior false; boundary classification follows the
/// same rule deterministically.
pub fn point_in_polygon<T: PolygonScalar>(pointset: &[Point<T, T>], ptq: &Point<T, T>) -> bool {
    let mut res = false;
    let mut pt0 = pointset[pointset.len() - 1];
    for &pt1 in pointset {
        if (pt1.y() <= ptq.y() && ptq.y() < pt0.y()) || (pt0.y() <= ptq.y() && ptq.y() < pt1.y()) {
            let det = (*ptq - pt0).cross(&(pt1 - pt0));
            if pt1.y() > pt0.y() {
                if det < T::zero() {
                    res = !res;
                }
            } else if det > T::zero() {
                res = !res;
            }
        }
        pt0 = pt1;
    }
    res
}

/// Orientation of an ordered boundary from the turn at its lexicographically
/// smallest vertex.
pub fn polygon_is_clockwise<T: PolygonScalar>(pointset: &[Point<T, T>]) -> bool {
    let n = pointset.len();
    let mut at = 0;
    for idx in 1..n {
        if pointset[idx] < pointset[at] {
            at = idx;
        }
    }
    let prev = if at == 0 { n - 1 } else { at - 1 };
    let next = if at + 1 == n { 0 } else { at + 1 };
    (pointset[at] - pointset[prev]).cross(&(pointset[next] - pointset[at])) < T::zero()
}
