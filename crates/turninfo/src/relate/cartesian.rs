//! Cartesian relation of two segments `a1 → a2` and `b1 → b2`.

use crate::geometry::Point;
use crate::side::SideStrategy;

use super::ratio::SegmentRatio;
use super::types::{DirInfo, How, IntersectionPoints, SegmentRelation, SideInfo};

/// Relate segment `a` to segment `b`.
///
/// Sides come from `strategy` (tolerant); fractions are exact ratios of
/// Cramer's determinants, snapped to the segment ends where the tolerant side
/// reports the endpoint as collinear, so the method code agrees with `sides`.
pub fn relate_segments<S: SideStrategy>(
    a1: &Point,
    a2: &Point,
    b1: &Point,
    b2: &Point,
    strategy: &S,
) -> SegmentRelation {
    let a_is_point = a1 == a2;
    let b_is_point = b1 == b2;
    if a_is_point && b_is_point {
        return if a1 == b1 {
            degenerate(a1, SideInfo::default())
        } else {
            SegmentRelation::disjoint()
        };
    }

    let mut sides = SideInfo::new(
        [strategy.side(b1, b2, a1), strategy.side(b1, b2, a2)],
        [strategy.side(a1, a2, b1), strategy.side(a1, a2, b2)],
    );
    if sides.same(0) || sides.same(1) {
        return SegmentRelation::disjoint();
    }
    if a_is_point {
        return if on_extent(a1, b1, b2) {
            degenerate(a1, sides)
        } else {
            SegmentRelation::disjoint()
        };
    }
    if b_is_point {
        return if on_extent(b1, a1, a2) {
            degenerate(b1, sides)
        } else {
            SegmentRelation::disjoint()
        };
    }

    let (dxa, dya) = (a2.x - a1.x, a2.y - a1.y);
    let (dxb, dyb) = (b2.x - b1.x, b2.y - b1.y);

    if !sides.collinear() {
        let d = dxa * dyb - dya * dxb;
        if d != 0.0 {
            let (wx, wy) = (a1.x - b1.x, a1.y - b1.y);
            let ra = SegmentRatio::new(dxb * wy - dyb * wx, d);
            let rb = SegmentRatio::new(dxa * wy - dya * wx, d);
            return crossing(a1, a2, b1, b2, sides, ra, rb);
        }
        // parallel by determinant although the tolerant sides disagree
        sides = SideInfo::default();
    }

    if dxa.abs() + dxb.abs() >= dya.abs() + dyb.abs() {
        collinear(a1, a2, b1, b2, a1.x, a2.x, b1.x, b2.x, sides)
    } else {
        collinear(a1, a2, b1, b2, a1.y, a2.y, b1.y, b2.y, sides)
    }
}

fn degenerate(point: &Point, sides: SideInfo) -> SegmentRelation {
    let mut points = IntersectionPoints::default();
    points.push(*point, SegmentRatio::zero(), SegmentRatio::zero());
    SegmentRelation {
        points,
        dir: DirInfo::new(How::Degenerate, sides, 0, 0, 0, 0),
    }
}

/// `p` within the bounding extent of `s1 → s2` on the dominant axis.
fn on_extent(p: &Point, s1: &Point, s2: &Point) -> bool {
    let (lo, hi, v) = if (s2.x - s1.x).abs() >= (s2.y - s1.y).abs() {
        (s1.x.min(s2.x), s1.x.max(s2.x), p.x)
    } else {
        (s1.y.min(s2.y), s1.y.max(s2.y), p.y)
    };
    v >= lo && v <= hi
}

fn snap(r: SegmentRatio, side_at_start: i32, side_at_end: i32) -> SegmentRatio {
    if side_at_start == 0 {
        SegmentRatio::zero()
    } else if side_at_end == 0 {
        SegmentRatio::one()
    } else {
        r.clamped()
    }
}

fn crossing(
    a1: &Point,
    a2: &Point,
    b1: &Point,
    b2: &Point,
    sides: SideInfo,
    ra: SegmentRatio,
    rb: SegmentRatio,
) -> SegmentRelation {
    let ra = snap(ra, sides.get(0, 0), sides.get(0, 1));
    let rb = snap(rb, sides.get(1, 0), sides.get(1, 1));

    let point = if ra.is_zero() {
        *a1
    } else if ra.is_one() {
        *a2
    } else if rb.is_zero() {
        *b1
    } else if rb.is_one() {
        *b2
    } else {
        a1 + (a2 - a1) * ra.to_f64()
    };

    let (ra0, ra1, rb0, rb1) = (ra.is_zero(), ra.is_one(), rb.is_zero(), rb.is_one());
    let dir = if ra0 && rb0 {
        side_dir(How::From, sides, a1, a2, b2, -1, -1)
    } else if ra1 && rb1 {
        side_dir(How::Touch, sides, a1, a2, b1, 1, 1)
    } else if ra1 && rb0 {
        angle(sides, 1, 1, -1)
    } else if ra0 && rb1 {
        angle(sides, 0, -1, 1)
    } else if rb0 {
        starts_from_middle(sides, false)
    } else if ra0 {
        starts_from_middle(sides, true)
    } else if rb1 {
        let dir = if sides.get(1, 0) == 1 { 1 } else { -1 };
        DirInfo::new(How::TouchInterior, sides, 0, 1, dir, dir)
    } else if ra1 {
        let dir = if sides.get(0, 0) == 1 { 1 } else { -1 };
        DirInfo::new(How::TouchInterior, sides, 1, 0, dir, dir)
    } else {
        side_dir(How::Cross, sides, a1, a2, b2, -1, -1)
    };

    let mut points = IntersectionPoints::default();
    points.push(point, ra, rb);
    SegmentRelation { points, dir }
}

/// Direction from the side of `s` (an endpoint of `b`) w.r.t. the line of `a`.
fn side_dir(
    how: How,
    sides: SideInfo,
    a1: &Point,
    a2: &Point,
    s: &Point,
    how_a: i32,
    how_b: i32,
) -> DirInfo {
    let cross = (a2.x - a1.x) * (s.y - a1.y) - (a2.y - a1.y) * (s.x - a1.x);
    if cross > 0.0 {
        DirInfo::new(how, sides, how_a, how_b, -1, 1)
    } else {
        DirInfo::new(how, sides, how_a, how_b, 1, -1)
    }
}

fn angle(sides: SideInfo, endpoint: usize, how_a: i32, how_b: i32) -> DirInfo {
    let dir = if sides.get(1, endpoint) == 1 { 1 } else { -1 };
    DirInfo::new(How::Angle, sides, how_a, how_b, dir, dir)
}

fn starts_from_middle(sides: SideInfo, a_starts: bool) -> DirInfo {
    let mut dir = if sides.get(1, 1) == 1 { 1 } else { -1 };
    if a_starts {
        dir = -dir;
        DirInfo::new(How::Start, sides, -1, 0, -dir, dir)
    } else {
        DirInfo::new(How::Start, sides, 0, -1, -dir, dir)
    }
}

/// Position of `c` relative to `b1 → b2` on one axis: 0 before, 1 at `b1`,
/// 2 inside, 3 at `b2`, 4 after (in the direction of `b`).
fn position_value(c: f64, b1: f64, b2: f64) -> i32 {
    if c == b1 {
        return 1;
    }
    if c == b2 {
        return 3;
    }
    let forward = b2 > b1;
    let before = if forward { c < b1 } else { c > b1 };
    let after = if forward { c > b2 } else { c < b2 };
    if before {
        0
    } else if after {
        4
    } else {
        2
    }
}

/// 1 if the segment ends strictly inside the other, 0 if on its end, else -1.
fn arrival_value(to: SegmentRatio) -> i32 {
    if to.in_segment() {
        1
    } else if to.on_segment() {
        0
    } else {
        -1
    }
}

#[derive(Default)]
struct Positions {
    on_end: u32,
    outside: u32,
}

impl Positions {
    fn add(&mut self, r: &SegmentRatio) {
        if r.on_end() {
            self.on_end += 1;
        } else if !r.in_segment() {
            self.outside += 1;
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn collinear(
    a1: &Point,
    a2: &Point,
    b1: &Point,
    b2: &Point,
    oa1: f64,
    oa2: f64,
    ob1: f64,
    ob2: f64,
    sides: SideInfo,
) -> SegmentRelation {
    let length_a = oa2 - oa1;
    let length_b = ob2 - ob1;
    if length_a == 0.0 || length_b == 0.0 {
        // projected onto a point: the segments are too short to order
        return SegmentRelation::disjoint();
    }

    let fix = |r: SegmentRatio, position: i32| match position {
        1 => SegmentRatio::zero(),
        3 => SegmentRatio::one(),
        _ => r,
    };
    let ra_from = fix(
        SegmentRatio::new(oa1 - ob1, length_b),
        position_value(oa1, ob1, ob2),
    );
    let ra_to = fix(
        SegmentRatio::new(oa2 - ob1, length_b),
        position_value(oa2, ob1, ob2),
    );
    let rb_from = fix(
        SegmentRatio::new(ob1 - oa1, length_a),
        position_value(ob1, oa1, oa2),
    );
    let rb_to = fix(
        SegmentRatio::new(ob2 - oa1, length_a),
        position_value(ob2, oa1, oa2),
    );

    if (ra_from.left() && ra_to.left()) || (ra_from.right() && ra_to.right()) {
        return SegmentRelation::disjoint();
    }

    // a1, b1, a2, b2; a b endpoint only if strictly inside a
    let mut points = IntersectionPoints::default();
    let mut on_a = [SegmentRatio::zero(); 2];
    if ra_from.on_segment() {
        on_a[points.count] = SegmentRatio::zero();
        points.push(*a1, SegmentRatio::zero(), ra_from);
    }
    if rb_from.in_segment() {
        on_a[points.count] = rb_from;
        points.push(*b1, rb_from, SegmentRatio::zero());
    }
    if ra_to.on_segment() && points.count < 2 {
        on_a[points.count] = SegmentRatio::one();
        points.push(*a2, SegmentRatio::one(), ra_to);
    }
    if rb_to.in_segment() && points.count < 2 {
        on_a[points.count] = rb_to;
        points.push(*b2, rb_to, SegmentRatio::one());
    }
    if points.count == 2 && on_a[1] < on_a[0] {
        points.intersections.swap(0, 1);
        points.fractions.swap(0, 1);
    }

    let opposite = (length_a < 0.0) != (length_b < 0.0);
    let arrival = [arrival_value(ra_to), arrival_value(rb_to)];

    let mut a = Positions::default();
    a.add(&ra_from);
    a.add(&ra_to);
    let mut b = Positions::default();
    b.add(&rb_from);
    b.add(&rb_to);

    let how = if a.on_end == 1 && b.on_end == 1 && a.outside == 1 && b.outside == 1 {
        // end-to-end collinear touch
        if !opposite {
            How::Angle
        } else if arrival[0] == 0 {
            How::Touch
        } else {
            How::From
        }
    } else if a.on_end == 2 && b.on_end == 2 {
        How::Equal
    } else {
        How::Collinear
    };

    SegmentRelation {
        points,
        dir: DirInfo::collinear(how, sides, opposite, arrival),
    }
}
