//! Verification helpers: refine a collinear side using the untoleranced
//! distance measure, and decide collinear continuations.

use crate::geometry::{comparable_distance, Point};
use crate::side::{SideCalculator, SideStrategy};
use crate::subrange::SubRange;

use super::policy::VerifyPolicy;
use super::types::{Operand, Operation, Turn};

/// Everything a handler looks at besides the relation itself.
///
/// `range_p` is the handler's P; for a touch-interior with Q as the interior
/// segment the dispatcher passes the swapped situation.
pub(crate) struct Situation<'a, S> {
    pub range_p: SubRange<'a>,
    pub range_q: SubRange<'a>,
    pub sides: SideCalculator<'a, S>,
    pub strategy: &'a S,
    pub verify: VerifyPolicy,
}

impl<'a, S: SideStrategy> Situation<'a, S> {
    pub fn new(
        range_p: SubRange<'a>,
        range_q: SubRange<'a>,
        strategy: &'a S,
        verify: VerifyPolicy,
    ) -> Self {
        Self {
            range_p,
            range_q,
            sides: SideCalculator::new(range_p, range_q, strategy),
            strategy,
            verify,
        }
    }

    pub fn swapped(&self) -> Self {
        Self {
            range_p: self.range_q,
            range_q: self.range_p,
            sides: self.sides.swapped(),
            strategy: self.strategy,
            verify: self.verify,
        }
    }

    #[inline]
    pub fn has_pk(&self) -> bool {
        !self.range_p.is_last_segment()
    }
    #[inline]
    pub fn has_qk(&self) -> bool {
        !self.range_q.is_last_segment()
    }

    /// If `side` is collinear, the sign of the raw measure of
    /// `range_q[index_q]` w.r.t. `range_p[index_p] → range_p[index_p + 1]`.
    /// Stays 0 when that edge or point does not exist.
    pub fn verified_side(
        &self,
        side: i32,
        range_p: &SubRange<'a>,
        range_q: &SubRange<'a>,
        index_p: usize,
        index_q: usize,
    ) -> i32 {
        if !self.verify.use_side_verification || side != 0 {
            return side;
        }
        if index_p >= 1 && range_p.is_last_segment() {
            return 0;
        }
        if index_q >= 2 && range_q.is_last_segment() {
            return 0;
        }
        self.strategy
            .distance_measure(
                range_p.at(index_p),
                range_p.at(index_p + 1),
                range_q.at(index_q),
            )
            .sign()
    }

    /// Both continue collinearly past the turn: continue, unless verification
    /// finds which one actually bends left.
    ///
    /// `p_operand` is the operand `range_p` stands for in `ti`.
    pub fn both_collinear<E>(
        &self,
        p_operand: Operand,
        index_p: usize,
        index_q: usize,
        ti: &mut Turn<E>,
    ) {
        if self.verify.use_side_verification {
            self.set_both_verified(p_operand, index_p, index_q, ti);
        } else {
            ti.both(Operation::Continue);
        }
    }

    fn set_both_verified<E>(
        &self,
        p_operand: Operand,
        index_p: usize,
        index_q: usize,
        ti: &mut Turn<E>,
    ) {
        assert!(index_p > 0 && index_p <= 2, "index_p {index_p}");
        assert!(index_q > 0 && index_q <= 2, "index_q {index_q}");
        let (rp, rq) = (&self.range_p, &self.range_q);
        let p_in_range = index_p < rp.size();
        let q_in_range = index_q < rq.size();

        if p_in_range && q_in_range {
            let p_closer = distance_measure(&ti.point, rp.at(index_p))
                < distance_measure(&ti.point, rq.at(index_q));
            // Side of the closer continuation w.r.t. the other's edge.
            let dm = if p_closer {
                self.strategy
                    .distance_measure(rq.at(index_q - 1), rq.at(index_q), rp.at(index_p))
            } else {
                self.strategy
                    .distance_measure(rp.at(index_p - 1), rp.at(index_p), rq.at(index_q))
            };
            if !dm.is_zero() {
                let p_left = if p_closer {
                    dm.is_positive()
                } else {
                    dm.is_negative()
                };
                let (p_op, q_op) = if p_left {
                    (Operation::Union, Operation::Intersection)
                } else {
                    (Operation::Intersection, Operation::Union)
                };
                ti.set_op(p_operand, p_op);
                ti.set_op(p_operand.other(), q_op);
                return;
            }
        }
        ti.both(Operation::Continue);
    }
}

/// Squared distance, for "which is closer" only.
#[inline]
pub(crate) fn distance_measure(a: &Point, b: &Point) -> f64 {
    comparable_distance(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::CartesianStrategy;
    use nalgebra::vector;

    fn pts(c: &[[f64; 2]]) -> Vec<Point> {
        c.iter().map(|c| vector![c[0], c[1]]).collect()
    }

    #[test]
    fn verified_side_is_identity_without_verification() {
        let s = CartesianStrategy::default();
        let p = pts(&[[0.0, 0.0], [1.0, 0.0], [2.0, 1e-13]]);
        let q = pts(&[[0.0, 1.0], [1.0, 0.0], [2.0, -1.0]]);
        let (rp, rq) = (SubRange::new(&p).unwrap(), SubRange::new(&q).unwrap());
        let off = Situation::new(rp, rq, &s, VerifyPolicy::NOTHING);
        for side in [-1, 0, 1] {
            assert_eq!(off.verified_side(side, &rp, &rq, 0, 2), side);
        }
        let on = Situation::new(rp, rq, &s, VerifyPolicy::ALL);
        // nonzero sides are never touched
        assert_eq!(on.verified_side(1, &rp, &rq, 0, 2), 1);
        // (2,-1) is right of (0,0)->(1,0)
        assert_eq!(on.verified_side(0, &rp, &rq, 0, 2), -1);
        // (2,1e-13) is measurably left of p1 even if tolerantly collinear
        assert_eq!(on.verified_side(0, &rp, &rp, 0, 2), 1);
    }

    #[test]
    fn verified_side_stays_zero_at_boundaries() {
        let s = CartesianStrategy::default();
        let p = pts(&[[0.0, 0.0], [1.0, 0.0]]);
        let q = pts(&[[0.0, 1.0], [1.0, 0.0]]);
        let (rp, rq) = (SubRange::new(&p).unwrap(), SubRange::new(&q).unwrap());
        let on = Situation::new(rp, rq, &s, VerifyPolicy::ALL);
        assert_eq!(on.verified_side(0, &rp, &rq, 0, 2), 0);
        assert_eq!(on.verified_side(0, &rp, &rq, 1, 0), 0);
    }

    #[test]
    fn both_collinear_resolves_micro_offset() {
        let s = CartesianStrategy::default();
        // Both continue east from (1,0); Q's k is a hair above P's edge.
        let p = pts(&[[0.0, 0.0], [1.0, 0.0], [3.0, 0.0]]);
        let q = pts(&[[1.0, 1.0], [1.0, 0.0], [2.0, 1e-12]]);
        let (rp, rq) = (SubRange::new(&p).unwrap(), SubRange::new(&q).unwrap());

        let mut t: Turn = Turn::default();
        t.point = vector![1.0, 0.0];
        Situation::new(rp, rq, &s, VerifyPolicy::NOTHING).both_collinear(Operand::P, 2, 2, &mut t);
        assert_eq!(t.ops(), (Operation::Continue, Operation::Continue));

        // qk is closer; it lies left of p_j -> p_k, so Q goes left: union for Q
        Situation::new(rp, rq, &s, VerifyPolicy::ALL).both_collinear(Operand::P, 2, 2, &mut t);
        assert_eq!(t.ops(), (Operation::Intersection, Operation::Union));

        // same situation seen with the operands exchanged
        Situation::new(rq, rp, &s, VerifyPolicy::ALL).both_collinear(Operand::Q, 2, 2, &mut t);
        assert_eq!(t.ops(), (Operation::Intersection, Operation::Union));
    }

    #[test]
    fn both_collinear_continues_when_exactly_collinear() {
        let s = CartesianStrategy::default();
        let p = pts(&[[0.0, 0.0], [1.0, 0.0], [3.0, 0.0]]);
        let q = pts(&[[1.0, 1.0], [1.0, 0.0], [2.0, 0.0]]);
        let (rp, rq) = (SubRange::new(&p).unwrap(), SubRange::new(&q).unwrap());
        let mut t: Turn = Turn::default();
        t.point = vector![1.0, 0.0];
        Situation::new(rp, rq, &s, VerifyPolicy::ALL).both_collinear(Operand::P, 2, 2, &mut t);
        assert_eq!(t.ops(), (Operation::Continue, Operation::Continue));
    }
}
