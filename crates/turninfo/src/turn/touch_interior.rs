//! Touch-interior: one segment ends in the interior of the other ("T").
//!
//! Named cases (comments below): Q crosses P's line at the touch (ML1), Q
//! turns back on the right (MR3) or left (ML3), Q turns the same way on the
//! side it came from (ML2, MR2), Q continues collinearly along P.

use crate::geometry::equals_zero;
use crate::relate::{DirInfo, IntersectionPoints};
use crate::side::SideStrategy;

use super::base::{opposite, same};
use super::types::{Method, Operand, Operation, Turn};
use super::verify::{distance_measure, Situation};

/// True if the touch-interior should be handled as a touch: the touching
/// points are not both on one side of the other's edges and the
/// intersection point coincides with `j` of the non-touching segment.
///
/// `sit.range_p` is the non-touching segment.
pub(crate) fn handle_as_touch<S: SideStrategy>(
    sit: &Situation<'_, S>,
    info: &IntersectionPoints,
) -> bool {
    if !sit.verify.use_handle_as_touch {
        return false;
    }
    let has_k = sit.has_pk() && sit.has_qk();
    let side = &sit.sides;
    if has_k
        && (same(side.pj_wrt_q1(), side.qj_wrt_p2()) || same(side.pj_wrt_q2(), side.qj_wrt_p1()))
    {
        // pj and qj should be collinear with both other segments
        return false;
    }
    equals_zero(distance_measure(&info.intersections[0], sit.range_p.at(1)))
}

/// Classify with `interior` as the segment whose interior is touched.
///
/// `sit` is arranged so `sit.range_p` is the interior segment; `interior`
/// names which operand of `ti` that is.
pub(crate) fn touch_interior<S: SideStrategy, E>(
    sit: &Situation<'_, S>,
    ti: &mut Turn<E>,
    info: &IntersectionPoints,
    dir: &DirInfo,
    interior: Operand,
) {
    ti.assign_point_and_correct(Method::TouchInterior, info, dir);

    let index_p = interior;
    let index_q = interior.other();
    let side = &sit.sides;

    let has_pk = sit.has_pk();
    let has_qk = sit.has_qk();
    let side_qi_p = dir.sides.get(index_q.index(), 0);
    let side_qk_p = if has_qk { side.qk_wrt_p1() } else { 0 };

    if side_qi_p == -side_qk_p {
        // ML1: Q crosses P's line. Union follows P (left to right) or Q.
        let union = if side_qk_p == -1 { index_p } else { index_q };
        ti.set_op(union, Operation::Union);
        ti.set_op(union.other(), Operation::Intersection);
        return;
    }

    let side_qk_q = if has_qk { side.qk_wrt_q1() } else { 0 };
    let side_pj_q2 = if has_qk { side.pj_wrt_q2() } else { 0 };

    if side_qi_p == -1 && side_qk_p == -1 && side_qk_q == 1 {
        // MR3: Q turns left on the right side of P
        ti.both(Operation::Intersection);
        ti.touch_only = true;
    } else if side_qi_p == 1 && side_qk_p == 1 && side_qk_q == -1 {
        if has_qk && side_pj_q2 == -1 {
            // ML3: Q turns right on the left side of P
            ti.both(Operation::Union);
        } else {
            // q2 collinear with p1: it does not turn back, block Q
            ti.set_op(index_p, Operation::Union);
            ti.set_op(index_q, Operation::Blocked);
        }
        ti.touch_only = true;
    } else if side_qi_p == side_qk_p && side_qi_p == side_qk_q {
        // ML2 / MR2: union takes the left turn
        let mut union = if side_qk_q == 1 { index_q } else { index_p };
        if has_qk && side_pj_q2 == 0 {
            // pj is collinear with q2 although the k sides differ
            union = union.other();
        }
        if has_pk && has_qk && opposite(side_pj_q2, side_qi_p) {
            let side_qj_p1 = side.qj_wrt_p1();
            let side_qj_p2 = side.qj_wrt_p2();
            if same(side_qj_p1, side_qj_p2) && opposite(side.pj_wrt_q1(), side_pj_q2) {
                union = union.other();
            }
        }
        ti.set_op(union, Operation::Union);
        ti.set_op(union.other(), Operation::Intersection);
        ti.touch_only = true;
    } else if side_qk_p == 0 {
        // Q continues collinearly along P
        if side_qk_q == side_qi_p {
            sit.both_collinear(index_p, 1, 2, ti);
        } else {
            // Opposite direction, never travelled: P follows Q's turn.
            ti.set_op(
                index_p,
                if side_qk_q == 1 {
                    Operation::Intersection
                } else {
                    Operation::Union
                },
            );
            ti.set_op(index_q, Operation::Blocked);
        }
    } else {
        ti.method = Method::Error;
    }
}
