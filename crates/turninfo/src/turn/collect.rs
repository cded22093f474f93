//! All-pairs turn collection between two rings or linestrings.
//!
//! No sectioning or bounding-box pruning: every segment of P is tested
//! against every segment of Q. Turns are reported where segments arrive
//! (`'f'`, `'a'` produce nothing under the default assign policy), so a
//! vertex contact shows up once.

use tracing::debug;

use crate::error::TurnError;
use crate::geometry::Point;
use crate::strategy::UmbrellaStrategy;
use crate::subrange::SubRange;

use super::dispatch::get_turn_info;
use super::policy::TurnCfg;
use super::types::Turn;

/// Segment indices a collected turn came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SegmentPair {
    pub seg_p: usize,
    pub seg_q: usize,
}

/// Turns between `ring_p` and `ring_q`, in segment order of P then Q.
///
/// A ring is closed when its first point repeats at the end; otherwise it
/// is treated as an open linestring.
pub fn collect_turns<S: UmbrellaStrategy>(
    ring_p: &[Point],
    ring_q: &[Point],
    strategy: &S,
    cfg: &TurnCfg,
) -> Result<Vec<Turn<SegmentPair>>, TurnError> {
    let mut out = Vec::new();
    for seg_p in 0..ring_p.len().saturating_sub(1) {
        let range_p = SubRange::in_ring(ring_p, seg_p)?;
        for seg_q in 0..ring_q.len().saturating_sub(1) {
            let range_q = SubRange::in_ring(ring_q, seg_q)?;
            let template = Turn {
                ext: SegmentPair { seg_p, seg_q },
                ..Turn::default()
            };
            out.extend(get_turn_info(&range_p, &range_q, &template, strategy, cfg)?);
        }
    }
    debug!(
        segments_p = ring_p.len().saturating_sub(1),
        segments_q = ring_q.len().saturating_sub(1),
        turns = out.len(),
        "collected turns"
    );
    Ok(out)
}
