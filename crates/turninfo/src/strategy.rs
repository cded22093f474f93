//! Strategies: the geometric primitives the turn handlers are generic over.

use crate::geometry::{side_by_triangle, DistanceMeasure, GeomCfg, Point};
use crate::relate::{relate_segments, SegmentRelation};
use crate::side::SideStrategy;

/// Side oracle plus segment relation, the full set of primitives needed by
/// `get_turn_info`.
pub trait UmbrellaStrategy: SideStrategy {
    fn relate(&self, a1: &Point, a2: &Point, b1: &Point, b2: &Point) -> SegmentRelation;
}

/// Floating-point Cartesian strategy. Stateless apart from its tolerances,
/// so one instance can be shared by any number of threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct CartesianStrategy {
    pub cfg: GeomCfg,
}

impl CartesianStrategy {
    pub fn new(cfg: GeomCfg) -> Self {
        Self { cfg }
    }
}

impl SideStrategy for CartesianStrategy {
    #[inline]
    fn side(&self, p1: &Point, p2: &Point, p: &Point) -> i32 {
        side_by_triangle(p1, p2, p, self.cfg.eps_side)
    }

    #[inline]
    fn distance_measure(&self, p1: &Point, p2: &Point, p: &Point) -> DistanceMeasure {
        DistanceMeasure::of(p1, p2, p)
    }
}

impl UmbrellaStrategy for CartesianStrategy {
    fn relate(&self, a1: &Point, a2: &Point, b1: &Point, b2: &Point) -> SegmentRelation {
        relate_segments(a1, a2, b1, b2, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relate::How;
    use nalgebra::vector;

    #[test]
    fn exact_tolerance_sees_micro_offsets() {
        let a = vector![1.0, 0.0];
        let b = vector![2.0, 1.0 + 1e-12];
        let p = vector![2.0, 1.0];
        assert_eq!(CartesianStrategy::default().side(&a, &b, &p), 0);
        let exact = CartesianStrategy::new(GeomCfg { eps_side: 0.0 });
        assert_eq!(exact.side(&a, &b, &p), -1);
    }

    #[test]
    fn relate_delegates_to_cartesian_relation() {
        let s = CartesianStrategy::default();
        let r = s.relate(
            &vector![0.0, 0.0],
            &vector![2.0, 0.0],
            &vector![1.0, -1.0],
            &vector![1.0, 1.0],
        );
        assert_eq!(r.dir.how, How::Cross);
        assert_eq!(r.points.count, 1);
    }
}
