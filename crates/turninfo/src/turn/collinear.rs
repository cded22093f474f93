//! Collinear overlaps: same direction, opposite direction, and equal-opposite.
//!
//! Same direction, P or Q arrives inside the other. The operation follows
//! from `arrival_p * side`, where `side` is the turn of whichever segment
//! arrives (pk w.r.t. p1 if P arrives, qk w.r.t. q1 otherwise):
//!
//! ```text
//! arrival P   pk//p1  qk//q1   product   case    result
//!  1           1                1        CLL1    ui
//! -1                   1       -1        CLL2    iu
//!  1           1                1        CLR1    ui
//! -1                  -1        1        CLR2    ui
//!  1          -1               -1        CRL1    iu
//! -1                   1       -1        CRL2    iu
//!  1          -1               -1        CRR1    iu
//! -1                  -1        1        CRR2    ui
//!  1           0                0        CC1     cc
//! -1                   0        0        CC2     cc
//! ```
//!
//! Opposite direction, each arriving segment yields its own turn; the other
//! side is blocked:
//!
//! ```text
//! arrival P  arrival Q  pk//p1   qk//q1  case  result2  result
//!  1          1          1       -1      CLO1    ix      xu
//!  1          1          1        0      CLO2    ix      (xx)
//!  1          1          1        1      CLO3    ix      xi
//!  1          1          0       -1      CCO1    (xx)    xu
//!  1          1          0        0      CCO2    (xx)    (xx)
//!  1          1          0        1      CCO3    (xx)    xi
//!  1          1         -1       -1      CRO1    ux      xu
//!  1          1         -1        0      CRO2    ux      (xx)
//!  1          1         -1        1      CRO3    ux      xi
//! -1          1                  -1      CXO1    xu
//! -1          1                   0      CXO2    (xx)
//! -1          1                   1      CXO3    xi
//!  1         -1          1               CXO1    ix
//!  1         -1          0               CXO2    (xx)
//!  1         -1         -1               CXO3    ux
//! ```

use crate::geometry::equals_zero;
use crate::relate::{DirInfo, IntersectionPoints};
use crate::side::SideStrategy;

use super::base::non_opposite_to_index;
use super::policy::AssignPolicy;
use super::types::{Method, Operand, Operation, Turn, TurnSet};
use super::verify::{distance_measure, Situation};

/// True if a collinear overlap is really an equal: the far intersection
/// point coincides with `j` of the segment that arrives.
pub(crate) fn handle_as_equal<S: SideStrategy>(
    sit: &Situation<'_, S>,
    info: &IntersectionPoints,
    dir: &DirInfo,
) -> bool {
    if !sit.verify.use_handle_as_equal {
        return false;
    }
    let arrival_p = dir.arrival[0];
    let arrival_q = dir.arrival[1];
    if arrival_p * arrival_q != -1 || info.count != 2 {
        return false;
    }
    let dm = if arrival_p == 1 {
        distance_measure(&info.intersections[1], sit.range_q.at(1))
    } else {
        distance_measure(&info.intersections[1], sit.range_p.at(1))
    };
    equals_zero(dm)
}

pub(crate) fn collinear<S: SideStrategy, E>(
    sit: &Situation<'_, S>,
    ti: &mut Turn<E>,
    info: &IntersectionPoints,
    dir: &DirInfo,
) {
    ti.assign_point(Method::Collinear, info, non_opposite_to_index(info));

    let arrival_p = dir.arrival[0];
    debug_assert!(arrival_p != 0, "collinear with arrival 0 is an equal");

    let side_p = if sit.has_pk() { sit.sides.pk_wrt_p1() } else { 0 };
    let side_q = if sit.has_qk() { sit.sides.qk_wrt_q1() } else { 0 };
    let product = arrival_p * if arrival_p == 1 { side_p } else { side_q };

    if product == 0 {
        ti.both(Operation::Continue);
    } else {
        ti.ui_else_iu(product == 1);
    }
}

/// Sets the turn of the arriving `operand` from its own turn `side_rk_r`.
/// Returns false if nothing is to be emitted.
fn set_tp<E>(
    operand: Operand,
    side_rk_r: i32,
    tp: &mut Turn<E>,
    info: &IntersectionPoints,
    assign: &AssignPolicy,
) -> bool {
    let mut blocked = Operation::Blocked;
    match side_rk_r {
        1 => tp.set_op(operand, Operation::Intersection),
        -1 => tp.set_op(operand, Operation::Union),
        _ => {
            // no turn: two blocked operations carry no information
            if !assign.include_opposite {
                return false;
            }
            tp.set_op(operand, Operation::Opposite);
            blocked = Operation::Opposite;
        }
    }
    tp.set_op(operand.other(), blocked);
    // P arriving within Q belongs to the second intersection point and v.v.
    tp.assign_point(Method::Collinear, info, operand.other().index());
    true
}

pub(crate) fn collinear_opposite<S: SideStrategy, E: Clone>(
    sit: &Situation<'_, S>,
    template: &Turn<E>,
    out: &mut TurnSet<E>,
    info: &IntersectionPoints,
    dir: &DirInfo,
    assign: &AssignPolicy,
) {
    let mut tp = template.clone();
    let arrival_p = dir.arrival[0];
    let arrival_q = dir.arrival[1];

    if arrival_p == 1
        && sit.has_pk()
        && set_tp(Operand::P, sit.sides.pk_wrt_p1(), &mut tp, info, assign)
    {
        out.push(tp.clone());
    }
    if arrival_q == 1
        && sit.has_qk()
        && set_tp(Operand::Q, sit.sides.qk_wrt_q1(), &mut tp, info, assign)
    {
        out.push(tp.clone());
    }

    if assign.include_opposite
        && ((arrival_q == -1 && arrival_p == 0) || (arrival_p == -1 && arrival_q == 0))
    {
        tp.both(Operation::Opposite);
        for i in 0..info.count {
            tp.assign_point(Method::Collinear, info, i);
            out.push(tp.clone());
        }
    }
}

/// Equal segments traversed in opposite directions: nothing to decide, so
/// only emitted when opposite turns are requested.
pub(crate) fn equal_opposite<E: Clone>(
    template: &Turn<E>,
    out: &mut TurnSet<E>,
    info: &IntersectionPoints,
    assign: &AssignPolicy,
) {
    if !assign.include_opposite {
        return;
    }
    let mut tp = template.clone();
    tp.both(Operation::Opposite);
    for i in 0..info.count {
        tp.assign_point(Method::None, info, i);
        out.push(tp.clone());
    }
}
