//! Borrowed window `i, j, (k)` around one segment of a ring or linestring.
//!
//! The handlers only ever look at the segment `i → j` and, if present, the
//! next distinct vertex `k`. A window without `k` is the last segment of an
//! open linestring.

use crate::error::TurnError;
use crate::geometry::Point;

/// View over the points `i`, `j` and optionally `k`. Never owns points.
#[derive(Clone, Copy, Debug)]
pub struct SubRange<'a> {
    points: [&'a Point; 3],
    size: usize,
}

impl<'a> SubRange<'a> {
    /// Window from 2 (`i, j`) or 3 (`i, j, k`) consecutive points.
    pub fn new(points: &'a [Point]) -> Result<Self, TurnError> {
        match points.len() {
            2 => Ok(Self {
                points: [&points[0], &points[1], &points[1]],
                size: 2,
            }),
            3 => Ok(Self {
                points: [&points[0], &points[1], &points[2]],
                size: 3,
            }),
            n => Err(TurnError::InvalidWindow(n)),
        }
    }

    /// Window around segment `segment` (from `ring[segment]` to `ring[segment + 1]`).
    ///
    /// `k` is the first point after `j` that differs from `j`. A closed ring
    /// (first == last) wraps around; an open linestring has no `k` on its last segment.
    pub fn in_ring(ring: &'a [Point], segment: usize) -> Result<Self, TurnError> {
        if ring.len() < 2 || segment + 1 >= ring.len() {
            return Err(TurnError::InvalidWindow(ring.len()));
        }
        let pi = &ring[segment];
        let pj = &ring[segment + 1];
        let closed = ring.len() > 2 && ring.first() == ring.last();
        let mut k = None;
        let n = ring.len();
        // At most one full lap; a closed ring repeats its first point at the end.
        for step in 1..n {
            let mut idx = segment + 1 + step;
            if idx >= n {
                if !closed {
                    break;
                }
                // skip the duplicated closing point
                idx = (idx - n) + 1;
                if idx >= n {
                    break;
                }
            }
            if ring[idx] != *pj {
                k = Some(&ring[idx]);
                break;
            }
        }
        Ok(match k {
            Some(pk) => Self {
                points: [pi, pj, pk],
                size: 3,
            },
            None => Self {
                points: [pi, pj, pj],
                size: 2,
            },
        })
    }

    /// Point `index` (0 = i, 1 = j, 2 = k). Panics if `index >= size()`.
    #[inline]
    pub fn at(&self, index: usize) -> &'a Point {
        assert!(
            index < self.size,
            "sub-range index {index} out of range {}",
            self.size
        );
        self.points[index]
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// True if there is no `k`.
    #[inline]
    pub fn is_last_segment(&self) -> bool {
        self.size < 3
    }
}
