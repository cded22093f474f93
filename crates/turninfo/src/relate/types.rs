//! Result records of relating two segments `a = p_i → p_j` and `b = q_i → q_j`.

use crate::geometry::{direction_code, Point};
use crate::side::{SideCalculator, SideStrategy};

use super::ratio::SegmentRatio;

/// How two segments relate. Each variant maps to a single-character code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum How {
    /// `'d'`: no common point.
    Disjoint,
    /// `'s'`: one segment starts in the interior of the other.
    Start,
    /// `'m'`: one segment ends in the interior of the other.
    TouchInterior,
    /// `'i'`: proper crossing.
    Cross,
    /// `'t'`: both segments end at the same point.
    Touch,
    /// `'c'`: collinear overlap.
    Collinear,
    /// `'e'`: collinear with both endpoints in common.
    Equal,
    /// `'0'`: at least one zero-length segment.
    Degenerate,
    /// `'a'`: one segment ends where the other starts.
    Angle,
    /// `'f'`: both segments start at the same point.
    From,
}

impl How {
    pub fn as_char(self) -> char {
        match self {
            How::Disjoint => 'd',
            How::Start => 's',
            How::TouchInterior => 'm',
            How::Cross => 'i',
            How::Touch => 't',
            How::Collinear => 'c',
            How::Equal => 'e',
            How::Degenerate => '0',
            How::Angle => 'a',
            How::From => 'f',
        }
    }

    pub fn from_char(c: char) -> Option<How> {
        Some(match c {
            'd' => How::Disjoint,
            's' => How::Start,
            'm' => How::TouchInterior,
            'i' => How::Cross,
            't' => How::Touch,
            'c' => How::Collinear,
            'e' => How::Equal,
            '0' => How::Degenerate,
            'a' => How::Angle,
            'f' => How::From,
            _ => return None,
        })
    }
}

/// Sides of the endpoints of one segment w.r.t. the other.
///
/// `get(0, e)`: side of `a_e` w.r.t. `b`; `get(1, e)`: side of `b_e` w.r.t. `a`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SideInfo {
    sides: [[i32; 2]; 2],
}

impl SideInfo {
    pub fn new(a_wrt_b: [i32; 2], b_wrt_a: [i32; 2]) -> Self {
        Self {
            sides: [a_wrt_b, b_wrt_a],
        }
    }
    #[inline]
    pub fn get(&self, segment: usize, endpoint: usize) -> i32 {
        self.sides[segment][endpoint]
    }
    /// Both endpoints of `segment` strictly on the same side of the other segment.
    pub fn same(&self, segment: usize) -> bool {
        self.sides[segment][0] * self.sides[segment][1] == 1
    }
    pub fn collinear(&self) -> bool {
        self.sides.iter().flatten().all(|&s| s == 0)
    }
}

/// Fractions of one intersection point along `a` (`ra`) and `b` (`rb`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Fraction {
    pub ra: SegmentRatio,
    pub rb: SegmentRatio,
}

/// Zero, one or two intersection points with their fractions.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntersectionPoints {
    pub count: usize,
    pub intersections: [Point; 2],
    pub fractions: [Fraction; 2],
}

impl IntersectionPoints {
    pub(crate) fn push(&mut self, point: Point, ra: SegmentRatio, rb: SegmentRatio) {
        debug_assert!(self.count < 2);
        self.intersections[self.count] = point;
        self.fractions[self.count] = Fraction { ra, rb };
        self.count += 1;
    }
}

/// Direction information for the first intersection point.
///
/// `arrival[i]`: 1 if segment i arrives at the point (it is its end),
/// -1 if it departs from it, 0 if neither or both (equal/degenerate).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirInfo {
    pub how: How,
    pub opposite: bool,
    pub how_a: i32,
    pub how_b: i32,
    pub dir_a: i32,
    pub dir_b: i32,
    pub sides: SideInfo,
    pub arrival: [i32; 2],
}

impl DirInfo {
    pub fn new(how: How, sides: SideInfo, how_a: i32, how_b: i32, dir_a: i32, dir_b: i32) -> Self {
        Self {
            how,
            opposite: false,
            how_a,
            how_b,
            dir_a,
            dir_b,
            sides,
            arrival: [how_a, how_b],
        }
    }

    pub fn collinear(how: How, sides: SideInfo, opposite: bool, arrival: [i32; 2]) -> Self {
        Self {
            how,
            opposite,
            how_a: 0,
            how_b: 0,
            dir_a: 0,
            dir_b: 0,
            sides,
            arrival,
        }
    }

    pub fn disjoint() -> Self {
        Self::new(How::Disjoint, SideInfo::default(), 0, 0, 0, 0)
    }
}

/// Full relation of two segments: intersection points plus direction info.
#[derive(Clone, Copy, Debug)]
pub struct SegmentRelation {
    pub points: IntersectionPoints,
    pub dir: DirInfo,
}

impl SegmentRelation {
    pub fn disjoint() -> Self {
        Self {
            points: IntersectionPoints::default(),
            dir: DirInfo::disjoint(),
        }
    }

    /// True if the intersection point is `p_j` and `p_k` folds back over `p_i → p_j`.
    pub fn is_spike_p<S: SideStrategy>(&self, sides: &SideCalculator<'_, S>) -> bool {
        if sides.range_p().is_last_segment() || sides.range_q().is_last_segment() {
            return false;
        }
        if sides.pk_wrt_p1() != 0 || !self.is_ip_j(0) {
            return false;
        }
        let qk_p1 = sides.qk_wrt_p1();
        let qk_p2 = sides.qk_wrt_p2();
        if qk_p1 != -qk_p2 {
            return false;
        }
        if qk_p1 == 0 {
            // qk collinear with both; pk must go backwards
            let p = sides.range_p();
            return direction_code(p.at(0), p.at(1), p.at(2)) == -1;
        }
        true
    }

    /// Mirror of `is_spike_p` for `q`.
    pub fn is_spike_q<S: SideStrategy>(&self, sides: &SideCalculator<'_, S>) -> bool {
        if sides.range_p().is_last_segment() || sides.range_q().is_last_segment() {
            return false;
        }
        if sides.qk_wrt_q1() != 0 || !self.is_ip_j(1) {
            return false;
        }
        let pk_q1 = sides.pk_wrt_q1();
        let pk_q2 = sides.pk_wrt_q2();
        if pk_q1 != -pk_q2 {
            return false;
        }
        if pk_q1 == 0 {
            let q = sides.range_q();
            return direction_code(q.at(0), q.at(1), q.at(2)) == -1;
        }
        true
    }

    fn is_ip_j(&self, operand: usize) -> bool {
        let arrival = self.dir.arrival[operand];
        if self.dir.dir_a == 0 && self.dir.dir_b == 0 {
            if self.points.count == 2 {
                arrival != -1
            } else {
                arrival == 0
            }
        } else {
            arrival == 1
        }
    }
}
