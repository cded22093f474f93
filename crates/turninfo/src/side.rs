//! Side oracle: named, memoized side queries between two segment windows.
//!
//! Naming follows `x_wrt_y1` = side of point `x` w.r.t. the first edge
//! `y_i → y_j` of window `y`, and `x_wrt_y2` = w.r.t. its second edge
//! `y_j → y_k`. All values are in {-1, 0, 1}.

use std::cell::Cell;

use crate::geometry::{DistanceMeasure, Point};
use crate::subrange::SubRange;

/// Orientation and distance-measure primitives.
pub trait SideStrategy {
    /// Side of `p` w.r.t. `p1 → p2` in {-1, 0, 1}.
    fn side(&self, p1: &Point, p2: &Point, p: &Point) -> i32;
    /// Untoleranced measure of `p` w.r.t. the line `p1 → p2`.
    fn distance_measure(&self, p1: &Point, p2: &Point, p: &Point) -> DistanceMeasure;
}

#[derive(Clone, Copy, Debug)]
enum Query {
    PkP1,
    PkQ1,
    PkQ2,
    QkP1,
    QkP2,
    QkQ1,
    PjQ1,
    PjQ2,
    QjP1,
    QjP2,
    PiQ1,
}

const QUERY_COUNT: usize = 11;

/// Memoizing side calculator over the P and Q windows.
///
/// Queries involving `pk`/`qk` panic when the window has no `k`; callers
/// guard them with `is_last_segment`.
pub struct SideCalculator<'a, S> {
    p: SubRange<'a>,
    q: SubRange<'a>,
    strategy: &'a S,
    memo: [Cell<Option<i32>>; QUERY_COUNT],
}

impl<'a, S: SideStrategy> SideCalculator<'a, S> {
    pub fn new(p: SubRange<'a>, q: SubRange<'a>, strategy: &'a S) -> Self {
        Self {
            p,
            q,
            strategy,
            memo: Default::default(),
        }
    }

    /// Same queries with the roles of P and Q exchanged.
    pub fn swapped(&self) -> SideCalculator<'a, S> {
        SideCalculator::new(self.q, self.p, self.strategy)
    }

    #[inline]
    pub fn range_p(&self) -> &SubRange<'a> {
        &self.p
    }
    #[inline]
    pub fn range_q(&self) -> &SubRange<'a> {
        &self.q
    }

    fn cached(&self, query: Query, a: &Point, b: &Point, c: &Point) -> i32 {
        let slot = &self.memo[query as usize];
        if let Some(side) = slot.get() {
            return side;
        }
        let side = self.strategy.side(a, b, c);
        debug_assert!((-1..=1).contains(&side));
        slot.set(Some(side));
        side
    }

    pub fn pk_wrt_p1(&self) -> i32 {
        let p = &self.p;
        self.cached(Query::PkP1, p.at(0), p.at(1), p.at(2))
    }
    pub fn pk_wrt_q1(&self) -> i32 {
        self.cached(Query::PkQ1, self.q.at(0), self.q.at(1), self.p.at(2))
    }
    pub fn pk_wrt_q2(&self) -> i32 {
        self.cached(Query::PkQ2, self.q.at(1), self.q.at(2), self.p.at(2))
    }
    pub fn qk_wrt_p1(&self) -> i32 {
        self.cached(Query::QkP1, self.p.at(0), self.p.at(1), self.q.at(2))
    }
    pub fn qk_wrt_p2(&self) -> i32 {
        self.cached(Query::QkP2, self.p.at(1), self.p.at(2), self.q.at(2))
    }
    pub fn qk_wrt_q1(&self) -> i32 {
        let q = &self.q;
        self.cached(Query::QkQ1, q.at(0), q.at(1), q.at(2))
    }
    pub fn pj_wrt_q1(&self) -> i32 {
        self.cached(Query::PjQ1, self.q.at(0), self.q.at(1), self.p.at(1))
    }
    pub fn pj_wrt_q2(&self) -> i32 {
        self.cached(Query::PjQ2, self.q.at(1), self.q.at(2), self.p.at(1))
    }
    pub fn qj_wrt_p1(&self) -> i32 {
        self.cached(Query::QjP1, self.p.at(0), self.p.at(1), self.q.at(1))
    }
    pub fn qj_wrt_p2(&self) -> i32 {
        self.cached(Query::QjP2, self.p.at(1), self.p.at(2), self.q.at(1))
    }
    pub fn pi_wrt_q1(&self) -> i32 {
        self.cached(Query::PiQ1, self.q.at(0), self.q.at(1), self.p.at(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::CartesianStrategy;
    use nalgebra::vector;

    /// Counts `side` calls to observe memoization.
    struct Counting {
        inner: CartesianStrategy,
        calls: Cell<usize>,
    }

    impl SideStrategy for Counting {
        fn side(&self, p1: &Point, p2: &Point, p: &Point) -> i32 {
            self.calls.set(self.calls.get() + 1);
            self.inner.side(p1, p2, p)
        }
        fn distance_measure(&self, p1: &Point, p2: &Point, p: &Point) -> DistanceMeasure {
            self.inner.distance_measure(p1, p2, p)
        }
    }

    #[test]
    fn named_queries_and_memo() {
        // P goes east then turns left; Q comes from the north and continues south-east.
        let p = [vector![0.0, 0.0], vector![2.0, 0.0], vector![2.0, 2.0]];
        let q = [vector![1.0, 1.0], vector![1.0, 0.0], vector![3.0, -1.0]];
        let strategy = Counting {
            inner: CartesianStrategy::default(),
            calls: Cell::new(0),
        };
        let sides = SideCalculator::new(
            SubRange::new(&p).unwrap(),
            SubRange::new(&q).unwrap(),
            &strategy,
        );
        assert_eq!(sides.pk_wrt_p1(), 1);
        assert_eq!(sides.qk_wrt_p1(), -1);
        assert_eq!(sides.qj_wrt_p1(), 0);
        assert_eq!(sides.pk_wrt_q1(), 1);
        assert_eq!(sides.pi_wrt_q1(), -1);
        assert_eq!(strategy.calls.get(), 5);
        assert_eq!(sides.pk_wrt_p1(), 1);
        assert_eq!(strategy.calls.get(), 5);

        let swapped = sides.swapped();
        // qk w.r.t. p1 in swapped roles is pk w.r.t. q1
        assert_eq!(swapped.qk_wrt_p1(), sides.pk_wrt_q1());
        assert_eq!(swapped.pk_wrt_q2(), sides.qk_wrt_p2());
    }
}
