//! Touch: both segments arrive at (or leave from) the intersection point.
//!
//! Branch labels BRL1..9 follow the regression drawings: B = both arrive,
//! then the sides of Qi/Qk w.r.t. P1 and where Pk lies between them.

use crate::relate::{DirInfo, IntersectionPoints};
use crate::side::SideStrategy;
use crate::subrange::SubRange;

use super::base::{opposite, same};
use super::types::{Method, Operand, Operation, Turn};
use super::verify::Situation;

/// `side1 == side2` and not opposite to `turn`.
#[inline]
pub(crate) fn between(side1: i32, side2: i32, turn: i32) -> bool {
    side1 == side2 && !opposite(side1, turn)
}

/// Near-parallel touch where Q continues from where P comes: block one side
/// and take union on the other if a measurable gap separates them.
pub(crate) fn handle_imperfect_touch<S: SideStrategy, E>(
    sit: &Situation<'_, S>,
    side_pk_q2: i32,
    ti: &mut Turn<E>,
) -> bool {
    if !sit.verify.use_handle_imperfect_touch {
        return false;
    }
    let has_distance = |r1: &SubRange<'_>, r2: &SubRange<'_>| {
        let d1 = sit.strategy.distance_measure(r1.at(0), r1.at(1), r2.at(1));
        let d2 = sit.strategy.distance_measure(r2.at(1), r2.at(2), r1.at(0));
        d1.measure > 0.0 && d2.measure > 0.0
    };

    if side_pk_q2 == -1 && has_distance(&sit.range_p, &sit.range_q) {
        // qj left of P1 and pi left of Q2: Q continues to the right
        ti.set_op(Operand::P, Operation::Blocked);
        ti.set_op(Operand::Q, Operation::Union);
        ti.touch_only = true;
        return true;
    }
    if side_pk_q2 == 1 && has_distance(&sit.range_q, &sit.range_p) {
        ti.set_op(Operand::P, Operation::Union);
        ti.set_op(Operand::Q, Operation::Blocked);
        ti.touch_only = true;
        return true;
    }
    false
}

pub(crate) fn touch<S: SideStrategy, E>(
    sit: &Situation<'_, S>,
    ti: &mut Turn<E>,
    info: &IntersectionPoints,
    dir: &DirInfo,
) {
    ti.assign_point_and_correct(Method::Touch, info, dir);

    let side = &sit.sides;
    let (rp, rq) = (&sit.range_p, &sit.range_q);
    let has_pk = sit.has_pk();
    let has_qk = sit.has_qk();

    let side_pk_q1 = if has_pk { side.pk_wrt_q1() } else { 0 };
    let side_qi_p1 = sit.verified_side(dir.sides.get(1, 0), rp, rq, 0, 0);
    let side_qk_p1 = if has_qk {
        sit.verified_side(side.qk_wrt_p1(), rp, rq, 0, 2)
    } else {
        0
    };

    if !opposite(side_qi_p1, side_qk_p1) {
        // Qi and Qk on the same side of P1, or collinear
        let side_pk_q2 = if has_pk && has_qk {
            side.pk_wrt_q2()
        } else {
            0
        };
        let side_pk_p = if has_pk { side.pk_wrt_p1() } else { 0 };
        let side_qk_q = if has_qk { side.qk_wrt_q1() } else { 0 };

        let q_turns_left = side_qk_q == 1;
        let block_q = side_qk_p1 == 0 && !same(side_qi_p1, side_qk_q);

        // Pk on the side of Qi/Qk, or Q fully collinear and P not turning right
        if side_pk_p == side_qi_p1
            || side_pk_p == side_qk_p1
            || (side_qi_p1 == 0 && side_qk_p1 == 0 && side_pk_p != -1)
        {
            if side_qk_p1 == 0
                && side_pk_q1 == 0
                && has_pk
                && has_qk
                && opposite(side.pi_wrt_q1(), side.qk_wrt_p2())
                && handle_imperfect_touch(sit, side_pk_q2, ti)
            {
                return;
            }
            // BRL2: collinear, lines join
            if side_pk_q2 == 0 && !block_q {
                sit.both_collinear(Operand::P, 2, 2, ti);
                return;
            }
            // BRL4, BRL8: collinear opposite, block P
            if side_pk_q1 == 0 {
                ti.set_op(Operand::P, Operation::Blocked);
                ti.set_op(
                    Operand::Q,
                    if block_q {
                        Operation::Blocked
                    } else if q_turns_left {
                        Operation::Intersection
                    } else {
                        Operation::Union
                    },
                );
                return;
            }
            // BRL3, BRL7: Pk between Qi and Qk
            if between(side_pk_q1, side_pk_q2, side_qk_q) {
                ti.ui_else_iu(q_turns_left);
                if block_q {
                    ti.set_op(Operand::Q, Operation::Blocked);
                }
                return;
            }
            // BRL1: Pk between Qk and P
            if side_pk_q2 == -side_qk_q {
                ti.ui_else_iu(!q_turns_left);
                ti.touch_only = true;
                return;
            }
            // BRL5, BRL9
            if side_pk_q1 == -side_qk_q {
                ti.uu_else_ii(!q_turns_left);
                if block_q {
                    ti.set_op(Operand::Q, Operation::Blocked);
                } else {
                    ti.touch_only = true;
                }
                return;
            }
            // No branch applies (P or Q folds back onto the shared line):
            // the turn stays a touch with both operations unset.
        } else {
            // Pk on the other side than Qi/Qk
            ti.set_op(
                Operand::P,
                if q_turns_left {
                    Operation::Intersection
                } else {
                    Operation::Union
                },
            );
            ti.set_op(
                Operand::Q,
                if block_q {
                    Operation::Blocked
                } else if side_qi_p1 == 1 || side_qk_p1 == 1 {
                    Operation::Union
                } else {
                    Operation::Intersection
                },
            );
            if !block_q {
                ti.touch_only = true;
            }
        }
    } else {
        // Qi and Qk on opposite sides of P1
        let side_pk_p = if has_pk {
            sit.verified_side(side.pk_wrt_p1(), rp, rp, 0, 2)
        } else {
            0
        };
        let right_to_left = side_qk_p1 == 1;

        // P turns towards Qi
        if side_pk_p == side_qi_p1 {
            if side_pk_q1 == 0 {
                // collinear opposite, block P
                ti.set_op(Operand::P, Operation::Blocked);
                ti.set_op(
                    Operand::Q,
                    if right_to_left {
                        Operation::Union
                    } else {
                        Operation::Intersection
                    },
                );
                return;
            }
            if side_pk_q1 == side_qk_p1 {
                ti.uu_else_ii(right_to_left);
                ti.touch_only = true;
                return;
            }
        }

        // P turns towards Qk
        if side_pk_p == side_qk_p1 {
            let side_pk_q2 = if has_pk && has_qk {
                side.pk_wrt_q2()
            } else {
                0
            };
            if side_pk_q2 == 0 {
                ti.both(Operation::Continue);
                return;
            }
            if side_pk_q2 == side_qk_p1 {
                ti.ui_else_iu(right_to_left);
                ti.touch_only = true;
                return;
            }
        }
        ti.ui_else_iu(!right_to_left);
    }
}
