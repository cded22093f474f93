//! Random segment-window pairs on a small integer grid (replay tokens).
//!
//! Purpose
//! - Stress the turn handlers with the configurations floating-point
//!   overlay gets wrong: shared vertices, collinear runs, folds, and points
//!   a hair off a line.
//!
//! Model
//! - P's window `i, j, k` is drawn on the grid `[-h, h]²` with distinct
//!   consecutive points.
//! - With probability `contact_rate`, Q's `j` is snapped onto one of P's
//!   points, so touches and collinear cases are common; otherwise it is
//!   drawn like the rest.
//! - Q's points then get an optional uniform jitter in `[-jitter, jitter]`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::TurnError;
use crate::geometry::Point;
use crate::subrange::SubRange;

/// Sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleCfg {
    /// Grid coordinates are drawn from `-half_extent..=half_extent` (at least 1).
    pub half_extent: i32,
    /// Max absolute jitter on Q's coordinates; 0 keeps Q on the grid.
    pub jitter: f64,
    /// Probability that Q's `j` coincides with a point of P.
    pub contact_rate: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            half_extent: 2,
            jitter: 0.0,
            contact_rate: 0.5,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Two 3-point windows sharing a neighbourhood.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowPair {
    pub p: [Point; 3],
    pub q: [Point; 3],
}

impl WindowPair {
    /// Borrowed windows for `get_turn_info`.
    pub fn ranges(&self) -> Result<(SubRange<'_>, SubRange<'_>), TurnError> {
        Ok((SubRange::new(&self.p)?, SubRange::new(&self.q)?))
    }
}

fn grid_point<R: Rng>(rng: &mut R, h: i32) -> Point {
    Point::new(rng.gen_range(-h..=h) as f64, rng.gen_range(-h..=h) as f64)
}

/// A grid point different from `prev`.
fn next_point<R: Rng>(rng: &mut R, h: i32, prev: &Point) -> Point {
    loop {
        let p = grid_point(rng, h);
        if p != *prev {
            return p;
        }
    }
}

/// Draw one window pair.
pub fn draw_window_pair(cfg: SampleCfg, tok: ReplayToken) -> WindowPair {
    let mut rng = tok.to_std_rng();
    let h = cfg.half_extent.max(1);

    let pi = grid_point(&mut rng, h);
    let pj = next_point(&mut rng, h, &pi);
    let pk = next_point(&mut rng, h, &pj);
    let p = [pi, pj, pk];

    let qj = if rng.gen_bool(cfg.contact_rate.clamp(0.0, 1.0)) {
        p[rng.gen_range(0..3)]
    } else {
        grid_point(&mut rng, h)
    };
    let qi = next_point(&mut rng, h, &qj);
    let qk = next_point(&mut rng, h, &qj);
    let mut q = [qi, qj, qk];

    let jitter = cfg.jitter.abs();
    if jitter > 0.0 {
        for pt in q.iter_mut() {
            pt.x += rng.gen_range(-jitter..=jitter);
            pt.y += rng.gen_range(-jitter..=jitter);
        }
    }
    WindowPair { p, q }
}

/// `count` consecutive draws for `seed`, with their tokens.
pub fn draw_window_pairs(
    cfg: SampleCfg,
    seed: u64,
    count: u64,
) -> impl Iterator<Item = (ReplayToken, WindowPair)> {
    (0..count).map(move |index| {
        let tok = ReplayToken { seed, index };
        (tok, draw_window_pair(cfg, tok))
    })
}
