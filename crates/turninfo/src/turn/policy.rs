//! Verification and assignment policies, plus the per-call configuration.

/// Which floating-point disambiguation passes the handlers run.
///
/// With every flag off the handlers trust the raw side values; the
/// verification branches then reduce to the plain assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifyPolicy {
    pub use_side_verification: bool,
    pub use_start_turn: bool,
    pub use_handle_as_touch: bool,
    pub use_handle_as_equal: bool,
    pub use_handle_imperfect_touch: bool,
}

impl VerifyPolicy {
    pub const NOTHING: VerifyPolicy = VerifyPolicy {
        use_side_verification: false,
        use_start_turn: false,
        use_handle_as_touch: false,
        use_handle_as_equal: false,
        use_handle_imperfect_touch: false,
    };

    pub const ALL: VerifyPolicy = VerifyPolicy {
        use_side_verification: true,
        use_start_turn: true,
        use_handle_as_touch: true,
        use_handle_as_equal: true,
        use_handle_imperfect_touch: true,
    };

    /// Area/area overlay verifies everything; overlays involving lines don't.
    pub fn for_pair(pair: GeometryPair) -> VerifyPolicy {
        match pair {
            GeometryPair::AreaArea => VerifyPolicy::ALL,
            GeometryPair::LineArea | GeometryPair::LineLine => VerifyPolicy::NOTHING,
        }
    }
}

impl Default for VerifyPolicy {
    fn default() -> Self {
        VerifyPolicy::ALL
    }
}

/// Kinds of overlay the turns feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryPair {
    AreaArea,
    LineArea,
    LineLine,
}

/// Which extra, decision-free turns are emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AssignPolicy {
    /// Turns for angle (`'a'`) and from (`'f'`) relations.
    pub include_no_turn: bool,
    /// Turns for zero-length segments (`'0'`).
    pub include_degenerate: bool,
    /// Opposite turns for equal-opposite and collinear-opposite overlaps.
    pub include_opposite: bool,
    /// Turns where a linestring starts on the other geometry (`'s'`).
    pub include_start_turn: bool,
}

impl AssignPolicy {
    pub const NULL: AssignPolicy = AssignPolicy {
        include_no_turn: false,
        include_degenerate: false,
        include_opposite: false,
        include_start_turn: false,
    };

    pub const ONLY_START_TURNS: AssignPolicy = AssignPolicy {
        include_no_turn: false,
        include_degenerate: false,
        include_opposite: false,
        include_start_turn: true,
    };
}

/// What the dispatcher does with a turn tagged `Method::Error`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorMode {
    /// Emit the tagged turn and log a warning.
    #[default]
    Emit,
    /// Skip the turn and log a warning.
    Drop,
    /// Abort with `TurnError::Unclassified`.
    Fail,
}

/// Configuration of one `get_turn_info` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnCfg {
    pub verify: VerifyPolicy,
    pub assign: AssignPolicy,
    pub on_error: ErrorMode,
}

impl TurnCfg {
    pub fn for_pair(pair: GeometryPair) -> Self {
        Self {
            verify: VerifyPolicy::for_pair(pair),
            ..Self::default()
        }
    }
    pub fn with_assign(self, assign: AssignPolicy) -> Self {
        Self { assign, ..self }
    }
    pub fn with_error_mode(self, on_error: ErrorMode) -> Self {
        Self { on_error, ..self }
    }
}
