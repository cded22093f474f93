//! Dispatcher: routes a segment relation to the handler(s) and collects the
//! emitted turns.
//!
//! Routing is a small state machine. Two handlers may hand over to another
//! one, each at most once per call:
//! - touch-interior → touch (`handle_as_touch`)
//! - collinear → equal (arrival 0 or `handle_as_equal`); the emitted turn
//!   keeps `Method::Collinear`
//! - start → convert (start turns not emitted)

use tracing::{trace, warn};

use crate::error::TurnError;
use crate::relate::{DirInfo, How, IntersectionPoints, SegmentRelation};
use crate::side::SideStrategy;
use crate::strategy::UmbrellaStrategy;
use crate::subrange::SubRange;

use super::collinear::{collinear, collinear_opposite, equal_opposite, handle_as_equal};
use super::equal::equal;
use super::policy::{AssignPolicy, ErrorMode, TurnCfg};
use super::simple::{crosses, only_convert, start};
use super::touch::touch;
use super::touch_interior::{handle_as_touch, touch_interior};
use super::types::{Method, Operand, Turn, TurnSet};
use super::verify::Situation;

/// Handler selected for a relation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Start,
    /// Touch-interior with the given operand as the interior segment.
    TouchInterior(Operand),
    Cross,
    Touch,
    Collinear,
    CollinearOpposite,
    Equal { via_collinear: bool },
    EqualOpposite,
    Convert,
}

impl Route {
    /// First route for `dir`, or `None` if no turn can result.
    pub fn initial(dir: &DirInfo, assign: &AssignPolicy) -> Option<Route> {
        match dir.how {
            How::Disjoint => None,
            How::Start => Some(Route::Start),
            How::TouchInterior => Some(if dir.arrival[1] == 1 {
                // Q arrives in the interior of P
                Route::TouchInterior(Operand::P)
            } else {
                Route::TouchInterior(Operand::Q)
            }),
            How::Cross => Some(Route::Cross),
            How::Touch => Some(Route::Touch),
            How::Collinear if dir.opposite => Some(Route::CollinearOpposite),
            How::Collinear => Some(Route::Collinear),
            How::Equal if dir.opposite => Some(Route::EqualOpposite),
            How::Equal => Some(Route::Equal {
                via_collinear: false,
            }),
            How::Degenerate => assign.include_degenerate.then_some(Route::Convert),
            How::Angle | How::From => assign.include_no_turn.then_some(Route::Convert),
        }
    }

    /// Method code of the handler, for diagnostics.
    pub fn code(self) -> char {
        match self {
            Route::Start => 's',
            Route::TouchInterior(_) => 'm',
            Route::Cross => 'i',
            Route::Touch => 't',
            Route::Collinear | Route::CollinearOpposite => 'c',
            Route::Equal { .. } | Route::EqualOpposite => 'e',
            Route::Convert => '0',
        }
    }
}

/// Classify the turns between the first segments of `range_p` and `range_q`.
///
/// The relation is computed with `strategy`. `template` is cloned into every
/// emitted turn, so its `ext` fields survive. Returns 0, 1 or 2 turns; `Err`
/// only for an unclassified turn under `ErrorMode::Fail`.
pub fn get_turn_info<S: UmbrellaStrategy, E: Clone>(
    range_p: &SubRange<'_>,
    range_q: &SubRange<'_>,
    template: &Turn<E>,
    strategy: &S,
    cfg: &TurnCfg,
) -> Result<TurnSet<E>, TurnError> {
    let relation = strategy.relate(range_p.at(0), range_p.at(1), range_q.at(0), range_q.at(1));
    get_turn_info_with(&relation, range_p, range_q, template, strategy, cfg)
}

/// As `get_turn_info`, for a relation computed by another provider.
pub fn get_turn_info_with<S: SideStrategy, E: Clone>(
    relation: &SegmentRelation,
    range_p: &SubRange<'_>,
    range_q: &SubRange<'_>,
    template: &Turn<E>,
    strategy: &S,
    cfg: &TurnCfg,
) -> Result<TurnSet<E>, TurnError> {
    let mut out = TurnSet::new();
    let Some(mut route) = Route::initial(&relation.dir, &cfg.assign) else {
        return Ok(out);
    };
    let sit = Situation::new(*range_p, *range_q, strategy, cfg.verify);
    let mut hopped = false;
    while let Some(next) = step(route, &sit, template, relation, cfg, &mut out)? {
        assert!(!hopped, "second re-dispatch, {route:?} -> {next:?}");
        trace!(from = ?route, to = ?next, "re-dispatch");
        hopped = true;
        route = next;
    }
    Ok(out)
}

/// Run the handler of `route`; returns the route to hand over to, if any.
fn step<S: SideStrategy, E: Clone>(
    route: Route,
    sit: &Situation<'_, S>,
    template: &Turn<E>,
    relation: &SegmentRelation,
    cfg: &TurnCfg,
    out: &mut TurnSet<E>,
) -> Result<Option<Route>, TurnError> {
    let info: &IntersectionPoints = &relation.points;
    let dir: &DirInfo = &relation.dir;
    let mut tp = template.clone();
    match route {
        Route::Start => {
            if cfg.assign.include_start_turn && start(sit, &mut tp, info, dir) {
                emit(out, tp, route, cfg.on_error)?;
            } else if cfg.assign.include_no_turn {
                return Ok(Some(Route::Convert));
            }
        }
        Route::TouchInterior(interior) => {
            let swapped;
            let s = match interior {
                Operand::P => sit,
                Operand::Q => {
                    swapped = sit.swapped();
                    &swapped
                }
            };
            if handle_as_touch(s, info) {
                return Ok(Some(Route::Touch));
            }
            touch_interior(s, &mut tp, info, dir, interior);
            emit(out, tp, route, cfg.on_error)?;
        }
        Route::Cross => {
            crosses(&mut tp, info, dir);
            emit(out, tp, route, cfg.on_error)?;
        }
        Route::Touch => {
            touch(sit, &mut tp, info, dir);
            emit(out, tp, route, cfg.on_error)?;
        }
        Route::Collinear => {
            if dir.arrival[0] == 0 || handle_as_equal(sit, info, dir) {
                return Ok(Some(Route::Equal {
                    via_collinear: true,
                }));
            }
            collinear(sit, &mut tp, info, dir);
            emit(out, tp, route, cfg.on_error)?;
        }
        Route::CollinearOpposite => {
            collinear_opposite(sit, template, out, info, dir, &cfg.assign);
        }
        Route::Equal { via_collinear } => {
            equal(sit, &mut tp, info);
            if via_collinear {
                tp.method = Method::Collinear;
            }
            emit(out, tp, route, cfg.on_error)?;
        }
        Route::EqualOpposite => {
            equal_opposite(template, out, info, &cfg.assign);
        }
        Route::Convert => {
            if info.count > 0 {
                only_convert(&mut tp, info);
                emit(out, tp, route, cfg.on_error)?;
            }
        }
    }
    Ok(None)
}

fn emit<E>(
    out: &mut TurnSet<E>,
    turn: Turn<E>,
    route: Route,
    on_error: ErrorMode,
) -> Result<(), TurnError> {
    if turn.method != Method::Error {
        out.push(turn);
        return Ok(());
    }
    let (how, x, y) = (route.code(), turn.point.x, turn.point.y);
    match on_error {
        ErrorMode::Emit => {
            warn!(%how, x, y, "unclassified turn, emitted with error method");
            out.push(turn);
        }
        ErrorMode::Drop => {
            warn!(%how, x, y, "unclassified turn dropped");
        }
        ErrorMode::Fail => return Err(TurnError::Unclassified { how, x, y }),
    }
    Ok(())
}
