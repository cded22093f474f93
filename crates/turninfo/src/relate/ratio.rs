//! Fraction along a segment as a numerator/denominator pair.

use std::cmp::Ordering;

/// Position along a segment, `numerator / denominator`, denominator kept positive.
///
/// Comparisons cross-multiply, so `0/1`, `1/1` and their scaled forms compare exactly.
#[derive(Clone, Copy, Debug)]
pub struct SegmentRatio {
    numerator: f64,
    denominator: f64,
}

impl SegmentRatio {
    /// Pre: `denominator != 0`.
    pub fn new(numerator: f64, denominator: f64) -> Self {
        debug_assert!(denominator != 0.0, "segment ratio with zero denominator");
        if denominator < 0.0 {
            Self {
                numerator: -numerator,
                denominator: -denominator,
            }
        } else {
            Self {
                numerator,
                denominator,
            }
        }
    }
    #[inline]
    pub const fn zero() -> Self {
        Self {
            numerator: 0.0,
            denominator: 1.0,
        }
    }
    #[inline]
    pub const fn one() -> Self {
        Self {
            numerator: 1.0,
            denominator: 1.0,
        }
    }
    #[inline]
    pub fn numerator(&self) -> f64 {
        self.numerator
    }
    #[inline]
    pub fn denominator(&self) -> f64 {
        self.denominator
    }
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numerator == 0.0
    }
    #[inline]
    pub fn is_one(&self) -> bool {
        self.numerator == self.denominator
    }
    /// Exactly 0 or 1.
    #[inline]
    pub fn on_end(&self) -> bool {
        self.is_zero() || self.is_one()
    }
    /// In `[0, 1]`.
    #[inline]
    pub fn on_segment(&self) -> bool {
        self.numerator >= 0.0 && self.numerator <= self.denominator
    }
    /// In `(0, 1)`.
    #[inline]
    pub fn in_segment(&self) -> bool {
        self.numerator > 0.0 && self.numerator < self.denominator
    }
    /// Before the start.
    #[inline]
    pub fn left(&self) -> bool {
        self.numerator < 0.0
    }
    /// Beyond the end.
    #[inline]
    pub fn right(&self) -> bool {
        self.numerator > self.denominator
    }
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.numerator / self.denominator
    }
    /// Clamp into `[0, 1]`, mapping out-of-range values onto the exact ends.
    pub fn clamped(self) -> Self {
        if self.left() {
            Self::zero()
        } else if self.right() {
            Self::one()
        } else {
            self
        }
    }
}

impl Default for SegmentRatio {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for SegmentRatio {
    fn eq(&self, other: &Self) -> bool {
        self.numerator * other.denominator == other.numerator * self.denominator
    }
}

impl PartialOrd for SegmentRatio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.numerator * other.denominator).partial_cmp(&(other.numerator * self.denominator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_sign_and_compares_exactly() {
        let r = SegmentRatio::new(-3.0, -6.0);
        assert!(r.denominator() > 0.0);
        assert_eq!(r, SegmentRatio::new(1.0, 2.0));
        assert!(r.in_segment());
        assert_eq!(SegmentRatio::new(4.0, 4.0), SegmentRatio::one());
        assert!(SegmentRatio::new(4.0, 4.0).is_one());
        assert!(SegmentRatio::new(0.0, -2.0).is_zero());
        assert!(SegmentRatio::new(1.0, 3.0) < SegmentRatio::new(1.0, 2.0));
    }

    #[test]
    fn ends_and_outside() {
        let before = SegmentRatio::new(-1.0, 5.0);
        let after = SegmentRatio::new(6.0, 5.0);
        assert!(before.left() && !before.on_segment());
        assert!(after.right() && !after.on_segment());
        assert!(SegmentRatio::one().on_segment() && !SegmentRatio::one().in_segment());
        assert!(before.clamped().is_zero());
        assert!(after.clamped().is_one());
        assert!((SegmentRatio::new(3.0, 4.0).to_f64() - 0.75).abs() < 1e-15);
    }
}
