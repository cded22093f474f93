//! Equal: P and Q share both endpoints of the current segment (or collinear
//! segments ending together) and continue in possibly different directions.

use crate::relate::IntersectionPoints;
use crate::side::SideStrategy;

use super::base::{non_opposite_to_index, opposite};
use super::types::{Method, Operand, Turn};
use super::verify::Situation;

pub(crate) fn equal<S: SideStrategy, E>(
    sit: &Situation<'_, S>,
    ti: &mut Turn<E>,
    info: &IntersectionPoints,
) {
    // intersection point in the "to" direction
    ti.assign_point(Method::Equal, info, non_opposite_to_index(info));

    let side = &sit.sides;
    let has_pk = sit.has_pk();
    let has_qk = sit.has_qk();

    let side_pk_q2 = if has_pk && has_qk {
        side.pk_wrt_q2()
    } else {
        0
    };
    let side_pk_p = if has_pk { side.pk_wrt_p1() } else { 0 };
    let side_qk_p = if has_qk { side.qk_wrt_p1() } else { 0 };

    if has_pk && has_qk && side_pk_p == side_qk_p {
        // Same turn (or both collinear): compare the second edges
        let side_qk_p2 = side.qk_wrt_p2();
        if opposite(side_qk_p2, side_pk_q2) {
            ti.ui_else_iu(side_pk_q2 == 1);
            return;
        }
    }

    // pk collinear with qj-qk and not continuing oppositely
    if side_pk_q2 == 0 && side_pk_p == side_qk_p {
        sit.both_collinear(Operand::P, 2, 2, ti);
        return;
    }

    if !opposite(side_pk_p, side_qk_p) {
        // pk left of q2 or collinear: union for P
        ti.ui_else_iu(side_pk_q2 != -1);
    } else {
        // opposite turns: union for P if it turns left (or goes straight)
        ti.ui_else_iu(side_pk_p != -1);
    }
}
