use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Represents a closed interval `[min, max]` on the real-number axis.
/// Build one from a `point()` and grow it with `extend()`; `min == max` is a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// A single point `[x, x]`.
    pub fn point(x: f32) -> Self {
        Interval { min: x, max: x }
    }

    /// Returns true if the two closed intervals share at least one point. Touching endpoints
    /// count as overlapping.
    /// ```
    /// use math::float::Interval;
    /// let unit = Interval::point(0.0).extend(1.0);
    /// assert!(unit.overlaps(&Interval::point(1.0).extend(2.0)));
    /// assert!(!unit.overlaps(&Interval::point(2.0).extend(3.0)));
    /// ```
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// Grows the interval so that it covers `x`.
    pub fn extend(self, x: f32) -> Self {
        Interval {
            min: self.min.min(x),
            max: self.max.max(x),
        }
    }

    /// Returns the left and right ends as a pair.
    pub fn as_pair(&self) -> (f32, f32) {
        (self.min, self.max)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(f, "[{:.p$}, {:.p$}]", self.min, self.max, p = precision)
    }
}

pub fn min_max(a: f32, b: f32) -> (f32, f32) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// An angle stored in radians. Build one with `Angle::new_rad()` / `Angle::new_deg()` (or the
/// crate-level shortcuts `math::new_rad()` / `math::new_deg()`) so that the unit is never
/// ambiguous at the call site.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Angle {
    radian: f32,
}

impl Angle {
    pub const ZERO: Angle = Angle { radian: 0.0 };

    pub fn new_rad(radian: f32) -> Self {
        Angle { radian }
    }
    pub fn new_deg(degree: f32) -> Self {
        Angle {
            radian: degree.to_radians(),
        }
    }
    pub fn to_rad(self) -> f32 {
        self.radian
    }
    pub fn to_deg(self) -> f32 {
        self.radian.to_degrees()
    }
    pub fn sin_cos(self) -> (f32, f32) {
        self.radian.sin_cos()
    }
    pub fn tan(self) -> f32 {
        self.radian.tan()
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle::new_rad(self.radian + rhs.radian)
    }
}
impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle::new_rad(self.radian - rhs.radian)
    }
}
impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle::new_rad(-self.radian)
    }
}
impl Mul<f32> for Angle {
    type Output = Angle;
    fn mul(self, s: f32) -> Angle {
        Angle::new_rad(self.radian * s)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(1);
        write!(f, "{:.p$}deg", self.to_deg(), p = precision)
    }
}

#[macro_export]
macro_rules! assert_le {
    ($left:expr, $right:expr) => {
        if $left > $right {
            panic!(
                "Assertion failed: {} <= {} (values: {} vs. {})",
                stringify!($left),
                stringify!($right),
                $left,
                $right
            )
        }
    };
}

#[macro_export]
macro_rules! assert_lt {
    ($left:expr, $right:expr) => {
        if $left >= $right {
            panic!(
                "Assertion failed: {} < {} (values: {} vs. {})",
                stringify!($left),
                stringify!($right),
                $left,
                $right
            )
        }
    };
}
