//! Turn classification for polygon overlay.
//!
//! Given two segments `P: pi → pj` and `Q: qi → qj` that intersect, plus the
//! next vertices `pk`, `qk` of their rings, decide what a traversal must do
//! at each intersection point: which side continues for union, which for
//! intersection, which is blocked.
//!
//! Layout
//! - `geometry`, `side`, `strategy`: predicates and the side oracle.
//! - `relate`: reference Cartesian segment relation (method codes, points).
//! - `turn`: turn records, policies, handlers and the dispatcher.
//! - `sample`: deterministic random window pairs for robustness sweeps.
//!
//! API Policy
//! - `api` is the curated surface for callers; module paths may move.

pub mod api;
pub mod error;
pub mod geometry;
pub mod relate;
pub mod sample;
pub mod side;
pub mod strategy;
pub mod subrange;
pub mod turn;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::TurnError;
pub use geometry::{GeomCfg, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::TurnError;
    pub use crate::geometry::{GeomCfg, Point};
    pub use crate::strategy::{CartesianStrategy, UmbrellaStrategy};
    pub use crate::subrange::SubRange;
    pub use crate::turn::{
        get_turn_info, AssignPolicy, ErrorMode, Method, Operation, Turn, TurnCfg, TurnSet,
        VerifyPolicy,
    };
}
