//! Turn classification for one pair of segments.
//!
//! Purpose
//! - Given the relation between segment `P: i → j` and `Q: i → j` plus the
//!   following vertices `k`, emit 0..=2 turns, each carrying a `Method` and
//!   one `Operation` per operand (what a traversal does at that point).
//! - The handlers (`crosses`, `touch`, `touch_interior`, `equal`,
//!   `collinear`, `collinear_opposite`, `equal_opposite`, `start`,
//!   `only_convert`) are private; `get_turn_info` routes to them.
//!
//! Conventions
//! - Sides are `1` left, `-1` right, `0` collinear, always w.r.t. the
//!   directed segment named in the accessor (`pk_wrt_q1` = side of `pk`
//!   w.r.t. `qi → qj`).
//! - Floating-point disambiguation is controlled by `VerifyPolicy`; with
//!   `VerifyPolicy::NOTHING` the handlers trust the tolerant sides only.
//! - Touch-interior tags a turn it cannot classify `Method::Error`; what
//!   happens next is up to `ErrorMode`. A touch where a segment folds back
//!   onto the shared line is emitted undecided (`Turn::is_undecided`).
//!
//! Code cross-refs: `get_turn_info`, `Route`, `TurnCfg`, `Turn`, `TurnSet`.

mod base;
mod collect;
mod collinear;
mod dispatch;
mod equal;
pub mod policy;
mod simple;
mod touch;
mod touch_interior;
mod types;
mod verify;

pub use base::{opposite, same};
pub use collect::{collect_turns, SegmentPair};
pub use dispatch::{get_turn_info, get_turn_info_with, Route};
pub use policy::{AssignPolicy, ErrorMode, GeometryPair, TurnCfg, VerifyPolicy};
pub use types::{Method, Operand, Operation, Turn, TurnOperation, TurnSet};
