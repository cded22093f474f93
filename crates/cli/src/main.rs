mod classify;
mod io;
mod provenance;
mod sweep;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use turninfo::api::{
    AssignPolicy, CartesianStrategy, ErrorMode, GeomCfg, GeometryPair, SampleCfg, TurnCfg,
};

#[derive(Parser)]
#[command(name = "turninfo")]
#[command(about = "Classify overlay turns between segment windows")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify turns for the cases of a JSON file
    Classify {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Treat p and q as rings or linestrings and test all segment pairs
        #[arg(long)]
        rings: bool,
        #[command(flatten)]
        turn: TurnArgs,
    },
    /// Classify seeded random grid configurations and compare with the
    /// unverified classification
    Sweep {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 10_000)]
        count: u64,
        #[command(flatten)]
        sample: SampleArgs,
        #[command(flatten)]
        turn: TurnArgs,
        /// Also write the summary here (with a provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PairArg {
    AreaArea,
    LineArea,
    LineLine,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ErrorArg {
    Emit,
    Drop,
    Fail,
}

#[derive(Args, Clone, Debug)]
struct TurnArgs {
    /// Overlay kind; selects the verification policy
    #[arg(long, value_enum, default_value_t = PairArg::AreaArea)]
    pair: PairArg,
    /// Emit turns for angle and from relations
    #[arg(long)]
    include_no_turn: bool,
    /// Emit turns for zero-length segments
    #[arg(long)]
    include_degenerate: bool,
    /// Emit opposite turns
    #[arg(long)]
    include_opposite: bool,
    /// Emit start turns
    #[arg(long)]
    include_start_turn: bool,
    /// What to do with unclassifiable turns
    #[arg(long, value_enum, default_value_t = ErrorArg::Emit)]
    on_error: ErrorArg,
    /// Relative tolerance of the side oracle
    #[arg(long, default_value_t = GeomCfg::default().eps_side)]
    eps_side: f64,
}

impl TurnArgs {
    fn cfg(&self) -> TurnCfg {
        let pair = match self.pair {
            PairArg::AreaArea => GeometryPair::AreaArea,
            PairArg::LineArea => GeometryPair::LineArea,
            PairArg::LineLine => GeometryPair::LineLine,
        };
        let on_error = match self.on_error {
            ErrorArg::Emit => ErrorMode::Emit,
            ErrorArg::Drop => ErrorMode::Drop,
            ErrorArg::Fail => ErrorMode::Fail,
        };
        TurnCfg::for_pair(pair)
            .with_assign(AssignPolicy {
                include_no_turn: self.include_no_turn,
                include_degenerate: self.include_degenerate,
                include_opposite: self.include_opposite,
                include_start_turn: self.include_start_turn,
            })
            .with_error_mode(on_error)
    }

    fn strategy(&self) -> CartesianStrategy {
        CartesianStrategy::new(GeomCfg {
            eps_side: self.eps_side,
        })
    }

    fn params(&self) -> Value {
        json!({
            "pair": format!("{:?}", self.pair),
            "include_no_turn": self.include_no_turn,
            "include_degenerate": self.include_degenerate,
            "include_opposite": self.include_opposite,
            "include_start_turn": self.include_start_turn,
            "on_error": format!("{:?}", self.on_error),
            "eps_side": self.eps_side
        })
    }
}

#[derive(Args, Clone, Copy, Debug)]
struct SampleArgs {
    /// Grid coordinates range over -half_extent..=half_extent
    #[arg(long, default_value_t = SampleCfg::default().half_extent)]
    half_extent: i32,
    /// Max jitter on Q's coordinates
    #[arg(long, default_value_t = SampleCfg::default().jitter)]
    jitter: f64,
    /// Probability that Q's j lands on a point of P
    #[arg(long, default_value_t = SampleCfg::default().contact_rate)]
    contact_rate: f64,
}

impl From<SampleArgs> for SampleCfg {
    fn from(a: SampleArgs) -> Self {
        SampleCfg {
            half_extent: a.half_extent,
            jitter: a.jitter,
            contact_rate: a.contact_rate,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Classify {
            input,
            out,
            rings,
            turn,
        } => {
            tracing::info!(input = %input.display(), out = %out.display(), tag = ?cmd.tag, "classify");
            classify::run(
                &input,
                &out,
                rings,
                &turn.strategy(),
                &turn.cfg(),
                turn.params(),
                cmd.tag,
            )
            .map(|_| ())
        }
        Action::Sweep {
            seed,
            count,
            sample,
            turn,
            out,
        } => run_sweep(seed, count, sample, &turn, out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn run_sweep(
    seed: u64,
    count: u64,
    sample: SampleArgs,
    turn: &TurnArgs,
    out: Option<PathBuf>,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(seed, count, tag = ?tag, "sweep");
    let summary = sweep::sweep(sample.into(), seed, count, &turn.strategy(), &turn.cfg())?;
    let text = serde_json::to_string_pretty(&summary)?;
    println!("{text}");
    if let Some(out) = out {
        provenance::ensure_parent(&out)?;
        fs::write(&out, &text).with_context(|| format!("writing {}", out.display()))?;
        let params = json!({
            "seed": seed,
            "count": count,
            "sample": {
                "half_extent": sample.half_extent,
                "jitter": sample.jitter,
                "contact_rate": sample.contact_rate
            },
            "turn": turn.params()
        });
        provenance::write_sidecar(&out, provenance::Payload::new(params, tag))?;
    }
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": turninfo::VERSION,
        "tag": tag,
        "defaults": {
            "eps_side": GeomCfg::default().eps_side,
            "turn": format!("{:?}", TurnCfg::default()),
        }
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use turninfo::api::VerifyPolicy;

    #[test]
    fn flags_map_onto_turn_cfg() {
        let cmd = Cmd::try_parse_from([
            "turninfo",
            "classify",
            "--input",
            "in.json",
            "--out",
            "out.json",
            "--pair",
            "line-line",
            "--include-opposite",
            "--on-error",
            "fail",
        ])
        .unwrap();
        let Action::Classify { turn, rings, .. } = cmd.action else {
            panic!("expected classify");
        };
        assert!(!rings);
        let cfg = turn.cfg();
        assert_eq!(cfg.verify, VerifyPolicy::NOTHING);
        assert!(cfg.assign.include_opposite);
        assert!(!cfg.assign.include_start_turn);
        assert_eq!(cfg.on_error, ErrorMode::Fail);
        assert_eq!(turn.strategy().cfg.eps_side, 1e-9);
    }

    #[test]
    fn sweep_defaults() {
        let cmd = Cmd::try_parse_from(["turninfo", "--tag", "t1", "sweep"]).unwrap();
        assert_eq!(cmd.tag.as_deref(), Some("t1"));
        let Action::Sweep {
            seed,
            count,
            sample,
            out,
            ..
        } = cmd.action
        else {
            panic!("expected sweep");
        };
        assert_eq!((seed, count), (0, 10_000));
        assert_eq!(SampleCfg::from(sample), SampleCfg::default());
        assert!(out.is_none());
    }
}
