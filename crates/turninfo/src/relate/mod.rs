//! Segment relation: the intersection provider behind the turn handlers.
//!
//! Purpose
//! - Classify how two segments meet (single-character method code), report
//!   0..=2 intersection points with exact fractions along both segments,
//!   and the arrival/departure of each segment at the first point.
//!
//! Conventions
//! - `a` is the P segment `p_i → p_j`, `b` the Q segment `q_i → q_j`.
//! - Fractions are `SegmentRatio`s so "exactly at an endpoint" is a
//!   comparison of two floats, not an epsilon test.
//! - Other providers can be plugged in via `UmbrellaStrategy::relate`.

mod cartesian;
mod ratio;
mod types;

pub use cartesian::relate_segments;
pub use ratio::SegmentRatio;
pub use types::{DirInfo, Fraction, How, IntersectionPoints, SegmentRelation, SideInfo};
