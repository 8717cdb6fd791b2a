use std::fmt;
use std::ops::Add;

/// Path cost under the min-plus semiring: (ℝ ∪ {+∞}, min, +).
///
/// Unreachable pairs hold [`Cost::UNREACHABLE`] (+∞). Extending an
/// unreachable path stays unreachable: IEEE-754 addition propagates the
/// infinity, so the sentinel survives arithmetic by contract rather than
/// by overflow.
///
/// Weights must be finite, non-NaN values; the sentinel is the only
/// non-finite cost a matrix may contain.
#[derive(Copy, Clone, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Cost(f32);

impl Cost {
    /// The empty path: identity for [`Cost::then`].
    pub const ZERO: Cost = Cost(0.0);

    /// No route exists: identity for [`Cost::min`], absorbing for
    /// [`Cost::then`].
    pub const UNREACHABLE: Cost = Cost(f32::INFINITY);

    /// Wrap an edge weight.
    #[inline(always)]
    pub fn new(weight: f32) -> Self {
        Self(weight)
    }

    /// The underlying scalar value.
    #[inline(always)]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether this cell holds the infinity sentinel.
    #[inline(always)]
    pub fn is_unreachable(self) -> bool {
        self.0 == f32::INFINITY
    }

    /// Semiring ⊗: concatenate two path legs.
    #[inline(always)]
    pub fn then(self, rhs: Cost) -> Cost {
        Cost(self.0 + rhs.0)
    }

    /// Semiring ⊕: keep the cheaper route. Ties keep `self`.
    #[inline(always)]
    pub fn min(self, rhs: Cost) -> Cost {
        if self.0 <= rhs.0 {
            self
        } else {
            rhs
        }
    }
}

impl Add for Cost {
    type Output = Cost;

    #[inline(always)]
    fn add(self, rhs: Cost) -> Cost {
        self.then(rhs)
    }
}

impl Default for Cost {
    #[inline(always)]
    fn default() -> Self {
        Cost::UNREACHABLE
    }
}

impl From<f32> for Cost {
    #[inline(always)]
    fn from(weight: f32) -> Self {
        Cost::new(weight)
    }
}

impl fmt::Debug for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unreachable() {
            write!(f, "Cost(inf)")
        } else {
            write!(f, "Cost({})", self.0)
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unreachable() {
            write!(f, "inf")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
