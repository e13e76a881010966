//! Displacement pair with ring arithmetic and cross product.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2-axis displacement.
///
/// Axis types are independent so that nested displacements
/// (`Vector2<Vector2<T>, T>` for 3-D translations) work the same way flat
/// ones do. Ordering is lexicographic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector2<T1, T2 = T1> {
    x: T1,
    y: T2,
}

impl<T1, T2> Vector2<T1, T2> {
    /// Creates a displacement from its axis components.
    pub const fn new(x: T1, y: T2) -> Self {
        Self { x, y }
    }
}

impl<T1: Copy, T2: Copy> Vector2<T1, T2> {
    /// x component.
    #[inline]
    pub fn x(&self) -> T1 {
        self.x
    }

    /// y component.
    #[inline]
    pub fn y(&self) -> T2 {
        self.y
    }
}

impl<T> Vector2<T, T>
where
    T: Mul<Output = T> + Sub<Output = T> + Copy,
{
    /// Cross product `x1 * y2 - x2 * y1`.
    ///
    /// The sign gives the turn direction under the y-up, x-right convention.
    #[inline]
    pub fn cross(&self, other: &Self) -> T {
        self.x * other.y - other.x * self.y
    }
}

impl<T1, T2> Add for Vector2<T1, T2>
where
    T1: Add<Output = T1>,
    T2: Add<Output = T2>,
{
    type Output = Vector2<T1, T2>;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T1, T2> Sub for Vector2<T1, T2>
where
    T1: Sub<Output = T1>,
    T2: Sub<Output = T2>,
{
    type Output = Vector2<T1, T2>;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T1, T2> AddAssign for Vector2<T1, T2>
where
    T1: AddAssign,
    T2: AddAssign,
{
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl<T1, T2> SubAssign for Vector2<T1, T2>
where
    T1: SubAssign,
    T2: SubAssign,
{
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl<T1, T2> Neg for Vector2<T1, T2>
where
    T1: Neg<Output = T1>,
    T2: Neg<Output = T2>,
{
    type Output = Vector2<T1, T2>;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T1, T2, Alpha> Mul<Alpha> for Vector2<T1, T2>
where
    T1: Mul<Alpha, Output = T1>,
    T2: Mul<Alpha, Output = T2>,
    Alpha: Copy,
{
    type Output = Vector2<T1, T2>;

    fn mul(self, alpha: Alpha) -> Self {
        Self {
            x: self.x * alpha,
            y: self.y * alpha,
        }
    }
}

impl<T1, T2, Alpha> Div<Alpha> for Vector2<T1, T2>
where
    T1: Div<Alpha, Output = T1>,
    T2: Div<Alpha, Output = T2>,
    Alpha: Copy,
{
    type Output = Vector2<T1, T2>;

    /// Scalar division; truncates for integer axes.
    fn div(self, alpha: Alpha) -> Self {
        Self {
            x: self.x / alpha,
            y: self.y / alpha,
        }
    }
}

impl<T1, T2, Alpha> MulAssign<Alpha> for Vector2<T1, T2>
where
    T1: MulAssign<Alpha>,
    T2: MulAssign<Alpha>,
    Alpha: Copy,
{
    fn mul_assign(&mut self, alpha: Alpha) {
        self.x *= alpha;
        self.y *= alpha;
    }
}

impl<T1, T2, Alpha> DivAssign<Alpha> for Vector2<T1, T2>
where
    T1: DivAssign<Alpha>,
    T2: DivAssign<Alpha>,
    Alpha: Copy,
{
    fn div_assign(&mut self, alpha: Alpha) {
        self.x /= alpha;
        self.y /= alpha;
    }
}

impl<T1: fmt::Display, T2: fmt::Display> fmt::Display for Vector2<T1, T2> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector2_arithmetic() {
        let p = Vector2::new(3, 4);
        let q = Vector2::new(5, 6);

        assert_eq!(p + q, Vector2::new(8, 10));
        assert_ne!(p + q, Vector2::new(8, 2));
        assert_eq!(p - q, Vector2::new(-2, -2));
        assert_eq!(p * 2, Vector2::new(6, 8));
        assert_eq!((p + q) / 2, Vector2::new(4, 5));

        assert_ne!(p, q);
        assert_eq!(p + q, q + p);
        assert_eq!(p - q, -(q - p));
        assert_eq!(p + (q - p) / 2, (p + q) / 2);

        let r = Vector2::new(-4, 5);
        assert_eq!((p + q) + r, p + (q + r));
    }

    #[test]
    fn test_vector2_cross() {
        let p = Vector2::new(3, 4);
        let q = Vector2::new(5, 6);
        assert_eq!(p.cross(&q), 3 * 6 - 5 * 4);
        assert_eq!(p.cross(&p), 0);
        assert_eq!(p.cross(&q), -q.cross(&p));
    }

    #[test]
    fn test_vector2_assign_ops() {
        let mut v = Vector2::new(3, 4);
        v += Vector2::new(1, 1);
        assert_eq!(v, Vector2::new(4, 5));
        v -= Vector2::new(4, 5);
        assert_eq!(v, Vector2::new(0, 0));
        let mut w = Vector2::new(2, 3);
        w *= 3;
        assert_eq!(w, Vector2::new(6, 9));
        w /= 2;
        assert_eq!(w, Vector2::new(3, 4));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector2::new(3, 4).to_string(), "{3, 4}");
    }
}
