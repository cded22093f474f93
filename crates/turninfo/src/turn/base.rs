//! Vocabulary shared by all handlers: side combinations, operation
//! combinators and point assignment.

use crate::relate::{DirInfo, IntersectionPoints, SegmentRatio};

use super::types::{Method, Operation, Turn};

/// Strictly opposite sides (`0` is opposite to nothing).
#[inline]
pub fn opposite(side1: i32, side2: i32) -> bool {
    side1 * side2 == -1
}

/// Same side, not collinear.
#[inline]
pub fn same(side1: i32, side2: i32) -> bool {
    side1 * side2 == 1
}

impl<E> Turn<E> {
    /// Both operands get `op`.
    #[inline]
    pub fn both(&mut self, op: Operation) {
        self.operations[0].operation = op;
        self.operations[1].operation = op;
    }

    /// P union and Q intersection if `condition`, else the reverse.
    #[inline]
    pub fn ui_else_iu(&mut self, condition: bool) {
        let (p, q) = if condition {
            (Operation::Union, Operation::Intersection)
        } else {
            (Operation::Intersection, Operation::Union)
        };
        self.operations[0].operation = p;
        self.operations[1].operation = q;
    }

    /// Both union if `condition`, else both intersection.
    #[inline]
    pub fn uu_else_ii(&mut self, condition: bool) {
        self.both(if condition {
            Operation::Union
        } else {
            Operation::Intersection
        });
    }

    /// Take intersection point `index` with its raw fractions.
    pub(crate) fn assign_point(&mut self, method: Method, info: &IntersectionPoints, index: usize) {
        assert!(index < info.count, "intersection index {index} of {}", info.count);
        self.method = method;
        self.point = info.intersections[index];
        self.operations[0].fraction = info.fractions[index].ra;
        self.operations[1].fraction = info.fractions[index].rb;
    }

    /// Take intersection point 0; an arriving operand gets fraction exactly 1,
    /// a departing one exactly 0.
    pub(crate) fn assign_point_and_correct(
        &mut self,
        method: Method,
        info: &IntersectionPoints,
        dir: &DirInfo,
    ) {
        self.method = method;
        self.point = info.intersections[0];
        for i in 0..2 {
            self.operations[i].fraction = match dir.arrival[i] {
                1 => SegmentRatio::one(),
                -1 => SegmentRatio::zero(),
                _ if i == 0 => info.fractions[0].ra,
                _ => info.fractions[0].rb,
            };
        }
    }
}

/// Index of the intersection point further along Q.
#[inline]
pub(crate) fn non_opposite_to_index(info: &IntersectionPoints) -> usize {
    if info.fractions[0].rb < info.fractions[1].rb {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relate::{Fraction, How, SideInfo};
    use nalgebra::vector;

    const SIDES: [i32; 3] = [-1, 0, 1];

    #[test]
    fn side_products_are_symmetric_and_exclusive() {
        for a in SIDES {
            for b in SIDES {
                assert_eq!(opposite(a, b), opposite(b, a));
                assert_eq!(same(a, b), same(b, a));
                assert!(!(opposite(a, b) && same(a, b)));
            }
        }
        assert!(!opposite(0, 0));
        assert!(!same(0, 0));
    }

    #[test]
    fn combinators() {
        let mut t: Turn = Turn::default();
        t.ui_else_iu(true);
        assert_eq!(t.ops(), (Operation::Union, Operation::Intersection));
        t.ui_else_iu(false);
        assert_eq!(t.ops(), (Operation::Intersection, Operation::Union));
        t.uu_else_ii(true);
        assert_eq!(t.ops(), (Operation::Union, Operation::Union));
        t.uu_else_ii(false);
        assert_eq!(t.ops(), (Operation::Intersection, Operation::Intersection));
        t.both(Operation::Blocked);
        assert_eq!(t.ops(), (Operation::Blocked, Operation::Blocked));
    }

    fn info(ra: SegmentRatio, rb: SegmentRatio) -> IntersectionPoints {
        IntersectionPoints {
            count: 1,
            intersections: [vector![1.0, 2.0], vector![0.0, 0.0]],
            fractions: [Fraction { ra, rb }, Fraction::default()],
        }
    }

    #[test]
    fn correction_makes_arrival_fractions_exact() {
        // raw fractions a hair off the ends
        let almost_one = SegmentRatio::new(0.999_999_999_999, 1.0);
        let almost_zero = SegmentRatio::new(1e-15, 1.0);
        let i = info(almost_one, almost_zero);
        let dir = DirInfo::new(How::Touch, SideInfo::default(), 1, -1, 1, 1);
        let mut t: Turn = Turn::default();
        t.assign_point_and_correct(Method::Touch, &i, &dir);
        assert_eq!(t.method, Method::Touch);
        assert_eq!(t.point, vector![1.0, 2.0]);
        assert!(t.operations[0].fraction.is_one());
        assert!(t.operations[1].fraction.is_zero());

        let dir0 = DirInfo::new(How::Touch, SideInfo::default(), 0, 0, 1, 1);
        t.assign_point_and_correct(Method::Touch, &i, &dir0);
        assert_eq!(t.operations[0].fraction, almost_one);
        assert_eq!(t.operations[1].fraction, almost_zero);
    }

    #[test]
    fn non_opposite_index_takes_larger_rb() {
        let mut i = info(SegmentRatio::zero(), SegmentRatio::new(1.0, 3.0));
        i.count = 2;
        i.fractions[1] = Fraction {
            ra: SegmentRatio::one(),
            rb: SegmentRatio::new(2.0, 3.0),
        };
        assert_eq!(non_opposite_to_index(&i), 1);
        i.fractions[1].rb = SegmentRatio::zero();
        assert_eq!(non_opposite_to_index(&i), 0);
    }
}
