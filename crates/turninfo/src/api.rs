//! Curated API for callers.
//!
//! Prefer these re-exports over deep module paths; the module layout below
//! is free to change.

// Geometry and strategies
pub use crate::geometry::{
    comparable_distance, side_by_triangle, side_value, DistanceMeasure, GeomCfg, Point,
};
pub use crate::side::{SideCalculator, SideStrategy};
pub use crate::strategy::{CartesianStrategy, UmbrellaStrategy};
pub use crate::subrange::SubRange;
// Segment relation
pub use crate::relate::{
    relate_segments, DirInfo, Fraction, How, IntersectionPoints, SegmentRatio, SegmentRelation,
    SideInfo,
};
// Turns
pub use crate::turn::{
    collect_turns, get_turn_info, get_turn_info_with, AssignPolicy, ErrorMode, GeometryPair,
    Method, Operand, Operation, Route, SegmentPair, Turn, TurnCfg, TurnOperation, TurnSet,
    VerifyPolicy,
};
// Random configurations
pub use crate::sample::{
    draw_window_pair, draw_window_pairs, ReplayToken, SampleCfg, WindowPair,
};
pub use crate::error::TurnError;
