//! JSON records read and written by the runner.

use serde::{Deserialize, Serialize};
use turninfo::api::{Point, Turn};

/// One input case: two windows (2 or 3 points each), or two rings with
/// `--rings`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Case {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub p: Vec<[f64; 2]>,
    pub q: Vec<[f64; 2]>,
}

pub fn points(coords: &[[f64; 2]]) -> Vec<Point> {
    coords.iter().map(|c| Point::new(c[0], c[1])).collect()
}

/// A turn in compact form: method and operations as one-character codes.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct TurnRecord {
    pub point: [f64; 2],
    pub method: char,
    /// `"ui"` = union for P, intersection for Q.
    pub operations: String,
    pub fractions: [f64; 2],
    pub touch_only: bool,
    /// Segment indices of P and Q, for ring input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<[usize; 2]>,
}

impl TurnRecord {
    pub fn from_turn<E>(turn: &Turn<E>, segments: Option<[usize; 2]>) -> Self {
        Self {
            point: [turn.point.x, turn.point.y],
            method: turn.method.as_char(),
            operations: turn.ops_code(),
            fractions: [
                turn.operations[0].fraction.to_f64(),
                turn.operations[1].fraction.to_f64(),
            ],
            touch_only: turn.touch_only,
            segments,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CaseResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Relation code of the first segments (`'d'`, `'t'`, ...); absent for rings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub how: Option<char>,
    pub turns: Vec<TurnRecord>,
}
