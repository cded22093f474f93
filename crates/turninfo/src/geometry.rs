//! Planar predicates shared by the side oracle and the segment relation.
//!
//! - `side_by_triangle`: tolerant orientation in {-1, 0, 1}.
//! - `side_value` / `DistanceMeasure`: raw line value, no tolerance. Used to
//!   break ties where the tolerant side reports collinear.
//! - `comparable_distance`: squared distance, for relative comparisons only.

use nalgebra::Vector2;

/// Cartesian point.
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Relative tolerance of `side_by_triangle`, scaled by the larger of the
    /// two products forming the determinant.
    pub eps_side: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_side: 1e-9 }
    }
}

/// Side of `p` w.r.t. the directed segment `p1 → p2`: 1 left, -1 right, 0 collinear.
///
/// Pre: none (a degenerate `p1 == p2` yields 0).
/// Post: 0 whenever `|det| <= eps * max(|dx1 dy2|, |dy1 dx2|)`.
pub fn side_by_triangle(p1: &Point, p2: &Point, p: &Point, eps: f64) -> i32 {
    let l = (p2.x - p1.x) * (p.y - p1.y);
    let r = (p2.y - p1.y) * (p.x - p1.x);
    let det = l - r;
    if det == 0.0 || det.abs() <= eps * l.abs().max(r.abs()) {
        0
    } else if det > 0.0 {
        1
    } else {
        -1
    }
}

/// Value of the infinite line through `p1 → p2` at `p` (`a x + b y + c`).
/// Positive on the left. Not normalized.
#[inline]
pub fn side_value(p1: &Point, p2: &Point, p: &Point) -> f64 {
    let a = p1.y - p2.y;
    let b = p2.x - p1.x;
    let c = -a * p1.x - b * p1.y;
    a * p.x + b * p.y + c
}

/// Signed measure of how far a point is off a line. Only its sign is meaningful.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DistanceMeasure {
    pub measure: f64,
}

impl DistanceMeasure {
    /// Measure of `p` w.r.t. the line `p1 → p2`; zero if the line is degenerate.
    pub fn of(p1: &Point, p2: &Point, p: &Point) -> Self {
        if p1 == p2 {
            return Self::default();
        }
        Self {
            measure: side_value(p1, p2, p),
        }
    }
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.measure == 0.0
    }
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.measure > 0.0
    }
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.measure < 0.0
    }
    /// Sign in {-1, 0, 1}.
    #[inline]
    pub fn sign(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.is_positive() {
            1
        } else {
            -1
        }
    }
}

/// Squared Euclidean distance.
#[inline]
pub fn comparable_distance(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// True if `v` is zero up to machine epsilon.
#[inline]
pub fn equals_zero(v: f64) -> bool {
    v.abs() <= f64::EPSILON
}

/// For collinear `a, b, c`: 1 if `c` lies beyond `b` in direction `a → b`,
/// -1 if it lies back towards `a`, 0 if it coincides with `b` (on the dominant axis).
pub fn direction_code(a: &Point, b: &Point, c: &Point) -> i32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let (line, point) = if dx.abs() >= dy.abs() {
        (dx, c.x - b.x)
    } else {
        (dy, c.y - b.y)
    };
    sign(line) * sign(point)
}

#[inline]
fn sign(v: f64) -> i32 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn side_axis_aligned() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 0.0];
        assert_eq!(side_by_triangle(&a, &b, &vector![0.5, 2.0], 1e-9), 1);
        assert_eq!(side_by_triangle(&a, &b, &vector![0.5, -2.0], 1e-9), -1);
        assert_eq!(side_by_triangle(&a, &b, &vector![3.0, 0.0], 1e-9), 0);
        // degenerate segment
        assert_eq!(side_by_triangle(&a, &a, &vector![3.0, 1.0], 1e-9), 0);
    }

    #[test]
    fn tolerant_side_vs_raw_measure() {
        // Offset far below the relative tolerance: side is collinear, measure is not.
        let a = vector![1.0, 0.0];
        let b = vector![2.0, 1.0 + 1e-12];
        let p = vector![2.0, 1.0];
        assert_eq!(side_by_triangle(&a, &b, &p, 1e-9), 0);
        let dm = DistanceMeasure::of(&a, &b, &p);
        assert!(dm.is_negative());
        assert_eq!(dm.sign(), -1);
        // With an exact tolerance the side agrees with the measure.
        assert_eq!(side_by_triangle(&a, &b, &p, 0.0), -1);
    }

    #[test]
    fn side_value_sign_matches_side_randomized_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let p1 = vector![rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)];
            let p2 = vector![rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)];
            let p = vector![rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)];
            let s = side_by_triangle(&p1, &p2, &p, 0.0);
            let dm = DistanceMeasure::of(&p1, &p2, &p);
            if s != 0 && dm.measure.abs() > 1e-9 {
                assert_eq!(s, dm.sign());
            }
        }
    }

    #[test]
    fn direction_code_collinear() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 1.0];
        assert_eq!(direction_code(&a, &b, &vector![2.0, 2.0]), 1);
        assert_eq!(direction_code(&a, &b, &vector![0.5, 0.5]), -1);
        assert_eq!(direction_code(&a, &b, &vector![1.0, 1.0]), 0);
        // vertical, y dominant
        let c = vector![0.0, 3.0];
        assert_eq!(direction_code(&a, &c, &vector![0.0, 1.0]), -1);
    }

    #[test]
    fn comparable_distance_is_squared() {
        let a = vector![1.0, 2.0];
        let b = vector![4.0, 6.0];
        assert!((comparable_distance(&a, &b) - 25.0).abs() < 1e-12);
        assert!(equals_zero(comparable_distance(&a, &a)));
    }
}
