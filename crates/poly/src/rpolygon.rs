//! Rectilinear monotone polygons.
//!
//! Vertices of a rectilinear polygon alternate corner directions; the
//! boundary implied by an ordered vertex sequence follows the axis-aligned
//! staircase between consecutive vertices. Construction, area, orientation,
//! and point classification all exploit the orthogonal edges to avoid the
//! cross products the general algorithms need.

use core::ops::AddAssign;

use rectigon_core::{Point, Vector2};

use crate::{partition_in_place, PolygonScalar};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectilinear polygon stored as an origin plus displacements-from-origin.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RPolygon<T> {
    origin: Point<T, T>,
    vecs: Vec<Vector2<T, T>>,
}

impl<T: PolygonScalar> RPolygon<T> {
    /// Builds a rectilinear polygon from an ordered vertex sequence.
    ///
    /// # Panics
    ///
    /// Panics if `pointset` is empty.
    pub fn new(pointset: &[Point<T, T>]) -> Self {
        assert!(!pointset.is_empty(), "rpolygon from empty point sequence");
        let origin = pointset[0];
        let vecs = pointset[1..].iter().map(|pt| *pt - origin).collect();
        Self { origin, vecs }
    }

    /// Fallible counterpart of [`RPolygon::new`].
    pub fn try_new(pointset: &[Point<T, T>]) -> rectigon_core::Result<Self> {
        if pointset.is_empty() {
            return Err(rectigon_core::Error::EmptyPointSeq(
                "rpolygon construction".to_string(),
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

    /// Signed area, positive for an anticlockwise boundary under the y-up,
    /// x-right convention. Exact for orthogonal edges, no halving needed.
    pub fn signed_area(&self) -> T {
        let vs = &self.vecs;
        assert!(!vs.is_empty(), "signed area of a degenerate rpolygon");
        let mut res = vs[0].x() * vs[0].y();
        for idx in 1..vs.len() {
            res += vs[idx].x() * (vs[idx].y() - vs[idx - 1].y());
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

impl<T: PolygonScalar> AddAssign<Vector2<T, T>> for RPolygon<T> {
    fn add_assign(&mut self, rhs: Vector2<T, T>) {
        self.origin += rhs;
    }
}

/// Shared monotone construction, phrased in its x-monotone model frame.
///
/// Partitions on the secondary coordinate relative to the key-minimal
/// vertex — no cross product is needed, since the edges are axis-aligned —
/// then sorts both chains along the key and reverses the far one. Returns
/// the orientation flag as seen in the model frame.
fn create_mono_rpolygon<T, K1, K2, F>(points: &mut [Point<T, T>], key: F) -> bool
where
    T: PolygonScalar,
    K1: Ord + Copy,
    K2: Ord + Copy,
    F: Fn(&Point<T, T>) -> (K1, K2),
{
    assert!(!points.is_empty(), "monotone rpolygon from empty sequence");

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
    let (_, lo_sec) = key(&points[lo]);
    let (_, hi_sec) = key(&points[hi]);

    let model_anticw = hi_sec <= lo_sec;
    let middle = if model_anticw {
        partition_in_place(points, |pt| key(pt).1 <= lo_sec)
    } else {
        partition_in_place(points, |pt| key(pt).1 >= lo_sec)
    };
    log::debug!(
        "rectilinear split: {} of {} points on the first chain, model-frame anticlockwise: {}",
        middle,
        points.len(),
        model_anticw
    );
    points[..middle].sort_by_key(|pt| key(pt));
    points[middle..].sort_by_key(|pt| key(pt));
    points[middle..].reverse();
    model_anticw
}

/// Reorders `points` in place into an x-monotone rectilinear boundary.
///
/// Returns true iff the resulting boundary is anticlockwise.
pub fn create_xmono_rpolygon<T: PolygonScalar>(points: &mut [Point<T, T>]) -> bool {
    create_mono_rpolygon(points, |pt| (pt.x(), pt.y()))
}

/// Reorders `points` in place into a y-monotone rectilinear boundary.
///
/// Returns true iff the resulting boundary is anticlockwise. Swapping the
/// axis roles mirrors the plane, so the model-frame flag reads inverted
/// here.
pub fn create_ymono_rpolygon<T: PolygonScalar>(points: &mut [Point<T, T>]) -> bool {
    !create_mono_rpolygon(points, |pt| (pt.y(), pt.x()))
}

/// Crossing-number point-in-polygon test for a rectilinear boundary.
///
/// Same half-open `[lower, upper)` row rule as the general test; with
/// axis-aligned edges the side of the edge reduces to an x comparison.
pub fn point_in_rpolygon<T: PolygonScalar>(pointset: &[Point<T, T>], ptq: &Point<T, T>) -> bool {
    let mut res = false;
    let mut pt0 = pointset[pointset.len() - 1];
    for &pt1 in pointset {
        if (pt1.y() <= ptq.y() && ptq.y() < pt0.y()) || (pt0.y() <= ptq.y() && ptq.y() < pt1.y()) {
            if pt1.x() > ptq.x() {
                res = !res;
            }
        }
        pt0 = pt1;
    }
    res
}

/// Orientation of an ordered rectilinear boundary.
///
/// Reads the turn at the lexicographically smallest vertex from the y
/// coordinate of its cyclic predecessor; consecutive equal-y vertices occur
/// only along horizontal edges, in which case the successor decides.
pub fn rpolygon_is_clockwise<T: PolygonScalar>(pointset: &[Point<T, T>]) -> bool {
    let n = pointset.len();
    let mut at = 0;
    for idx in 1..n {
        if pointset[idx] < pointset[at] {
            at = idx;
        }
    }
    let prev = if at == 0 { n - 1 } else { at - 1 };
    if pointset[at].y() < pointset[prev].y() {
        return false;
    }
    if pointset[at].y() > pointset[prev].y() {
        return true;
    }
    let next = if at + 1 == n { 0 } else { at + 1 };
    pointset[next].y() > pointset[at].y()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staircase() -> Vec<Point<i32, i32>> {
        // anticlockwise L-shape
        vec![
            Point::new(0, 0),
            Point::new(4, 0),
            Point::new(4, 2),
            Point::new(2, 2),
            Point::new(2, 4),
            Point::new(0, 4),
        ]
    }

    #[test]
    fn test_lshape_area_and_orientation() {
        let l = staircase();
        let poly = RPolygon::new(&l);
        assert_eq!(poly.signed_area(), 12);
        assert!(!rpolygon_is_clockwise(&l));

        let mut reversed = l.clone();
        reversed.reverse();
        assert_eq!(RPolygon::new(&reversed).signed_area(), -12);
        assert!(rpolygon_is_clockwise(&reversed));
    }

    #[test]
    fn test_lshape_point_classification() {
        let l = staircase();
        assert!(point_in_rpolygon(&l, &Point::new(1, 1)));
        assert!(point_in_rpolygon(&l, &Point::new(1, 3)));
        assert!(!point_in_rpolygon(&l, &Point::new(3, 3)));
        assert!(!point_in_rpolygon(&l, &Point::new(5, 1)));
    }

    #[test]
    fn test_translation() {
        let mut poly = RPolygon::new(&staircase());
        poly += Vector2::new(7, -2);
        assert_eq!(poly.origin(), Point::new(7, -2));
        assert_eq!(poly.signed_area(), 12);
    }

    #[test]
    fn test_bounding_corners() {
        let poly = RPolygon::new(&staircase());
        assert_eq!(poly.lb(), Point::new(0, 0));
        assert_eq!(poly.ub(), Point::new(4, 4));
    }

    #[test]
    fn test_try_new_empty() {
        let empty: Vec<Point<i32, i32>> = Vec::new();
        assert!(matches!(
            RPolygon::try_new(&empty),
            Err(rectigon_core::Error::EmptyPointSeq(_))
        ));
    }
}
