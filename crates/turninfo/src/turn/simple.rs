//! Crossing, start and pass-through turns.

use crate::relate::{DirInfo, IntersectionPoints};
use crate::side::SideStrategy;

use super::types::{Method, Operand, Operation, Turn};
use super::verify::Situation;

/// Proper crossing: if Q comes from the left of P, union follows P.
pub(crate) fn crosses<E>(ti: &mut Turn<E>, info: &IntersectionPoints, dir: &DirInfo) {
    ti.assign_point(Method::Crosses, info, 0);
    let union = if dir.sides.get(1, 0) == 1 {
        Operand::P
    } else {
        Operand::Q
    };
    ti.set_op(union, Operation::Union);
    ti.set_op(union.other(), Operation::Intersection);
}

/// A linestring starts in the interior of the other segment. Returns false
/// when start turns are not verified.
pub(crate) fn start<S: SideStrategy, E>(
    sit: &Situation<'_, S>,
    ti: &mut Turn<E>,
    info: &IntersectionPoints,
    dir: &DirInfo,
) -> bool {
    if !sit.verify.use_start_turn {
        return false;
    }
    debug_assert!(dir.how_a != dir.how_b);
    debug_assert!(dir.how_a == -1 || dir.how_b == -1);
    debug_assert!(dir.how_a == 0 || dir.how_b == 0);

    if dir.how_b == -1 {
        // Q leaves from P's interior
        ti.ui_else_iu(sit.sides.qj_wrt_p1() == -1);
    } else if dir.how_a == -1 {
        // P leaves from Q's interior
        ti.ui_else_iu(sit.sides.pj_wrt_q1() == 1);
    }
    ti.assign_point_and_correct(Method::Start, info, dir);
    true
}

/// No decision: copy the point through, both continue.
pub(crate) fn only_convert<E>(ti: &mut Turn<E>, info: &IntersectionPoints) {
    ti.assign_point(Method::None, info, 0);
    ti.both(Operation::Continue);
}
