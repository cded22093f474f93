//! `classify`: turns for each case of a JSON input file.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use turninfo::api::{
    collect_turns, get_turn_info_with, CartesianStrategy, SubRange, Turn, TurnCfg,
    UmbrellaStrategy,
};

use crate::io::{points, Case, CaseResult, TurnRecord};
use crate::provenance::{ensure_parent, write_sidecar, Payload};

pub fn classify_case(
    case: &Case,
    rings: bool,
    strategy: &CartesianStrategy,
    cfg: &TurnCfg,
) -> Result<CaseResult> {
    let label = case.name.as_deref().unwrap_or("<unnamed>");
    let (p, q) = (points(&case.p), points(&case.q));
    if rings {
        let turns = collect_turns(&p, &q, strategy, cfg)
            .with_context(|| format!("case {label}"))?;
        return Ok(CaseResult {
            name: case.name.clone(),
            how: None,
            turns: turns
                .iter()
                .map(|t| TurnRecord::from_turn(t, Some([t.ext.seg_p, t.ext.seg_q])))
                .collect(),
        });
    }
    let rp = SubRange::new(&p).with_context(|| format!("case {label}: window p"))?;
    let rq = SubRange::new(&q).with_context(|| format!("case {label}: window q"))?;
    let relation = strategy.relate(rp.at(0), rp.at(1), rq.at(0), rq.at(1));
    let set = get_turn_info_with(&relation, &rp, &rq, &Turn::<()>::default(), strategy, cfg)
        .with_context(|| format!("case {label}"))?;
    Ok(CaseResult {
        name: case.name.clone(),
        how: Some(relation.dir.how.as_char()),
        turns: set.iter().map(|t| TurnRecord::from_turn(t, None)).collect(),
    })
}

/// Classify every case of `input` and write the results to `out`, plus a
/// provenance sidecar.
pub fn run(
    input: &Path,
    out: &Path,
    rings: bool,
    strategy: &CartesianStrategy,
    cfg: &TurnCfg,
    params: Value,
    tag: Option<String>,
) -> Result<Vec<CaseResult>> {
    let text =
        fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let cases: Vec<Case> =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", input.display()))?;
    let results = cases
        .iter()
        .map(|case| classify_case(case, rings, strategy, cfg))
        .collect::<Result<Vec<_>>>()?;
    let turns: usize = results.iter().map(|r| r.turns.len()).sum();
    tracing::info!(cases = results.len(), turns, rings, "classified");

    ensure_parent(out)?;
    fs::write(out, serde_json::to_vec_pretty(&results)?)
        .with_context(|| format!("writing {}", out.display()))?;
    write_sidecar(
        out,
        Payload::new(
            json!({
                "input": input.to_string_lossy(),
                "rings": rings,
                "turn": params
            }),
            tag,
        ),
    )?;
    Ok(results)
}
