//! Manhattan-distance merge algebra.
//!
//! A [`MergeObj`] stores its location in a 45°-rotated frame (u = x + y,
//! v = x - y). The rotation makes L1 regions of the original plane
//! axis-aligned, so the interval algebra solves Manhattan geometry directly:
//! Chebyshev distance in (u, v) equals Manhattan distance in (x, y), and
//! growing both rotated axes grows a diamond in the original coordinates.

use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use num_traits::Num;

use crate::point::Point;
use crate::region::{Contains, Enlarge, Intersect, MinDist, Overlaps};
use crate::vector2::Vector2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point, segment, or region of the Manhattan merge algebra.
///
/// The rotated-frame point is private; only the merge-algebra operations are
/// exposed, never raw axis access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MergeObj<T1, T2 = T1> {
    point: Point<T1, T2>,
}

impl<T1, T2> MergeObj<T1, T2> {
    /// Creates a merge object from coordinates already expressed in the
    /// rotated frame.
    pub const fn new(u: T1, v: T2) -> Self {
        Self {
            point: Point::new(u, v),
        }
    }
}

impl<T> MergeObj<T, T>
where
    T: Add<Output = T> + Sub<Output = T> + Copy,
{
    /// Lifts an (x, y) location of the original frame into the rotated one.
    pub fn construct(xcoord: T, ycoord: T) -> Self {
        Self::new(xcoord + ycoord, xcoord - ycoord)
    }
}

impl<T1, T2, U> AddAssign<Vector2<U, U>> for MergeObj<T1, T2>
where
    T1: Add<U, Output = T1> + Copy,
    T2: Add<U, Output = T2> + Copy,
    U: Add<Output = U> + Sub<Output = U> + Copy,
{
    /// Translation by an original-frame vector, recomposed through the
    /// rotation.
    fn add_assign(&mut self, rhs: Vector2<U, U>) {
        self.point = Point::new(
            self.point.x() + (rhs.x() + rhs.y()),
            self.point.y() + (rhs.x() - rhs.y()),
        );
    }
}

impl<T1, T2, U> SubAssign<Vector2<U, U>> for MergeObj<T1, T2>
where
    T1: Sub<U, Output = T1> + Copy,
    T2: Sub<U, Output = T2> + Copy,
    U: Add<Output = U> + Sub<Output = U> + Copy,
{
    fn sub_assign(&mut self, rhs: Vector2<U, U>) {
        self.point = Point::new(
            self.point.x() - (rhs.x() + rhs.y()),
            self.point.y() - (rhs.x() - rhs.y()),
        );
    }
}

impl<T1, T2, U> Add<Vector2<U, U>> for MergeObj<T1, T2>
where
    MergeObj<T1, T2>: AddAssign<Vector2<U, U>>,
{
    type Output = MergeObj<T1, T2>;

    fn add(mut self, rhs: Vector2<U, U>) -> Self {
        self += rhs;
        self
    }
}

impl<T1, T2, U> Sub<Vector2<U, U>> for MergeObj<T1, T2>
where
    MergeObj<T1, T2>: SubAssign<Vector2<U, U>>,
{
    type Output = MergeObj<T1, T2>;

    fn sub(mut self, rhs: Vector2<U, U>) -> Self {
        self -= rhs;
        self
    }
}

impl<T1, T2, U1, U2> Overlaps<MergeObj<U1, U2>> for MergeObj<T1, T2>
where
    Point<T1, T2>: Overlaps<Point<U1, U2>>,
{
    fn overlaps(&self, other: &MergeObj<U1, U2>) -> bool {
        self.point.overlaps(&other.point)
    }
}

impl<T1, T2, U1, U2> Contains<MergeObj<U1, U2>> for MergeObj<T1, T2>
where
    Point<T1, T2>: Contains<Point<U1, U2>>,
{
    fn contains(&self, other: &MergeObj<U1, U2>) -> bool {
        self.point.contains(&other.point)
    }
}

impl<T1, T2, U1, U2> Intersect<MergeObj<U1, U2>> for MergeObj<T1, T2>
where
    T1: Intersect<U1>,
    T2: Intersect<U2>,
{
    type Output = MergeObj<T1::Output, T2::Output>;

    fn intersection_with(&self, other: &MergeObj<U1, U2>) -> Self::Output {
        MergeObj {
            point: self.point.intersection_with(&other.point),
        }
    }
}

impl<T1, T2, U1, U2> MinDist<MergeObj<U1, U2>> for MergeObj<T1, T2>
where
    T1: MinDist<U1> + Copy,
    T2: MinDist<U2, Distance = T1::Distance> + Copy,
    U1: Copy,
    U2: Copy,
    T1::Distance: Ord,
{
    type Distance = T1::Distance;

    /// Chebyshev composition in the rotated frame: the per-axis distances
    /// combine by maximum, which is Manhattan distance in the original
    /// frame.
    fn min_dist_with(&self, other: &MergeObj<U1, U2>) -> Self::Distance {
        let du = self.point.x().min_dist_with(&other.point.x());
        let dv = self.point.y().min_dist_with(&other.point.y());
        du.max(dv)
    }
}

impl<T1, T2, Alpha> Enlarge<Alpha> for MergeObj<T1, T2>
where
    T1: Enlarge<Alpha>,
    T2: Enlarge<Alpha>,
    Alpha: Copy,
{
    type Output = MergeObj<T1::Output, T2::Output>;

    /// Grows both rotated axes: a diamond in the original coordinates.
    fn enlarge_with(&self, alpha: Alpha) -> Self::Output {
        MergeObj {
            point: self.point.enlarge_with(alpha),
        }
    }
}

impl<T1, T2> MergeObj<T1, T2> {
    /// Merges two objects into the minimal region equidistant from both.
    ///
    /// Computes d = `min_dist_with(other)`, grows `self` by `d / 2` (integer
    /// floor) and `other` by the remainder, and returns the intersection.
    /// For odd d the floor split under-grows `self`, biasing the merged
    /// region toward `other` by one unit; that tie-break is part of the
    /// operation's contract.
    pub fn merge_with<D>(
        &self,
        other: &Self,
    ) -> MergeObj<<T1 as Enlarge<D>>::Output, <T2 as Enlarge<D>>::Output>
    where
        T1: MinDist<T1, Distance = D> + Enlarge<D> + Copy,
        T2: MinDist<T2, Distance = D> + Enlarge<D> + Copy,
        <T1 as Enlarge<D>>::Output: Intersect<Output = <T1 as Enlarge<D>>::Output>,
        <T2 as Enlarge<D>>::Output: Intersect<Output = <T2 as Enlarge<D>>::Output>,
        D: Num + Ord + Copy,
    {
        let alpha = self.min_dist_with(other);
        let half = alpha / (D::one() + D::one());
        let grown_self = self.enlarge_with(half);
        let grown_other = other.enlarge_with(alpha - half);
        grown_self.intersection_with(&grown_other)
    }
}

impl<T1: fmt::Display, T2: fmt::Display> fmt::Display for MergeObj<T1, T2> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::halton::Halton;
    use crate::interval::Interval;
    use crate::region::{min_dist, overlap};

    #[test]
    fn test_merge_obj_basics() {
        let r1 = MergeObj::construct(4, 5);
        let r2 = MergeObj::construct(7, 9);
        let v = Vector2::new(5, 6);

        assert_eq!(r1, MergeObj::new(9, -1));
        assert_ne!(r1, r2);
        assert_eq!((r1 - v) + v, r1);
        assert!(!overlap(&r1, &r2));
        assert_eq!(r1.min_dist_with(&r2), 7);
        assert_eq!(min_dist(&r1, &r2), 7);
        assert_eq!(min_dist(&r2, &r1), 7);
    }

    #[test]
    fn test_merge_with_splits_exactly() {
        let s1 = MergeObj::new(800, -400);
        let s2 = MergeObj::new(1400, -400);
        let merged = s1.merge_with(&s2);
        assert_eq!(
            merged,
            MergeObj::new(Interval::new(1100, 1100), Interval::new(-700, -100))
        );
    }

    #[test]
    fn test_merge_with_odd_distance_biases_toward_other() {
        let s1 = MergeObj::new(0, 0);
        let s2 = MergeObj::new(7, 0);
        let merged = s1.merge_with(&s2);
        // d = 7, half = 3: self grows to [-3, 3], other to [3, 11]
        assert_eq!(
            merged,
            MergeObj::new(Interval::new(3, 3), Interval::new(-3, 3))
        );
    }

    #[test]
    fn test_merged_region_is_equidistant_endpoint() {
        let s1 = MergeObj::new(800, -400);
        let s2 = MergeObj::new(1400, -400);
        let d = s1.min_dist_with(&s2);
        let merged = s1.merge_with(&s2);
        // the merged region touches both grown halves
        assert_eq!(merged.min_dist_with(&s1.enlarge_with(d / 2)), 0);
        assert_eq!(merged.min_dist_with(&s2.enlarge_with(d - d / 2)), 0);
    }

    #[test]
    fn test_min_dist_symmetry_on_halton_data() {
        let mut gen = Halton::new([2, 3], [11, 7]);
        let objs: Vec<MergeObj<i32, i32>> = (0..40)
            .map(|_| {
                let (x, y) = gen.pop();
                MergeObj::construct(x as i32, y as i32)
            })
            .collect();

        for a in &objs {
            for b in &objs {
                assert_eq!(a.min_dist_with(b), b.min_dist_with(a));
                assert_eq!(a.overlaps(b), b.overlaps(a));
            }
        }
    }

    #[test]
    fn test_merge_obj_nested_point_axes() {
        let a = Point::new(40000, 80000);
        let b = Point::new(50000, 60000);

        let m1 = MergeObj::new(a.translate(50000), a.translate(-50000));
        let m2 = MergeObj::new(b.translate(90000), b.translate(-90000));

        assert_ne!(m1, m2);
        assert!(!overlap(&m1, &m2));
        assert_eq!(m1.min_dist_with(&m2), m2.min_dist_with(&m1));
        assert_eq!(min_dist(&m1, &m2), min_dist(&m2, &m1));
    }
}
