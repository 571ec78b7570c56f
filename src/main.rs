use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use rank_footrule::calculator::FootruleCalculator;
use rank_footrule::demo::run_demo;
use rank_footrule::input::{load_score_table, resolve_ranking};
use rank_footrule::logging::init_logging;
use rank_footrule::model::config::{FootruleConfig, MetricReduction, ValidationPolicy};
use rank_footrule::pipeline::stage2_ranks::derived_ranking;
use rank_footrule::pipeline::stage4_report::{ReportFormat, render_reports, write_reports};
use rank_footrule::report::ReportData;

/// Spearman footrule distance between a proposed ranking and per-metric scores.
#[derive(Debug, Parser)]
#[command(name = "rank-footrule", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log validation and progress messages (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute the distance for a score table
    Run(RunArgs),
    /// Print the two built-in worked scenarios
    Demo(DemoArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// JSON object of item -> scores (.gz accepted)
    #[arg(long)]
    scores: PathBuf,

    /// Comma-separated proposed ranking, best first
    #[arg(long, conflicts_with = "ranking_file")]
    ranking: Option<String>,

    /// File with one ranked item per line
    #[arg(long)]
    ranking_file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ReductionArg::FirstPair)]
    reduction: ReductionArg,

    /// Fail on any validation finding instead of warning
    #[arg(long)]
    strict: bool,

    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// Write footrule.txt, footrule.json and displacements.tsv here
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct DemoArgs {
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReductionArg {
    FirstPair,
    AgainstBase,
    AgainstProposed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

#[derive(Debug, Clone)]
struct RunConfig {
    scores_path: PathBuf,
    ranking: Option<String>,
    ranking_file: Option<PathBuf>,
    footrule: FootruleConfig,
    format: ReportFormat,
    out_dir: Option<PathBuf>,
}

impl From<RunArgs> for RunConfig {
    fn from(args: RunArgs) -> Self {
        let mut footrule = if args.strict {
            FootruleConfig::strict_v1()
        } else {
            FootruleConfig::reference_v1()
        };
        footrule.reduction = args.reduction.into();
        RunConfig {
            scores_path: args.scores,
            ranking: args.ranking,
            ranking_file: args.ranking_file,
            footrule,
            format: args.format.into(),
            out_dir: args.out,
        }
    }
}

impl From<ReductionArg> for MetricReduction {
    fn from(arg: ReductionArg) -> Self {
        match arg {
            ReductionArg::FirstPair => MetricReduction::FirstPair,
            ReductionArg::AgainstBase => MetricReduction::AgainstBase,
            ReductionArg::AgainstProposed => MetricReduction::AgainstProposed,
        }
    }
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Run(args) => run_scores(&RunConfig::from(args)),
        Command::Demo(args) => {
            let reports = run_demo(FootruleConfig::reference_v1()).map_err(|e| e.to_string())?;
            let rendered = render_reports(&reports, args.format.into()).map_err(|e| e.to_string())?;
            print!("{rendered}");
            Ok(())
        }
    }
}

fn run_scores(config: &RunConfig) -> Result<(), String> {
    let table = load_score_table(&config.scores_path).map_err(|e| e.to_string())?;

    let explicit = resolve_ranking(config.ranking.as_deref(), config.ranking_file.as_deref())
        .map_err(|e| e.to_string())?;
    let ranking_derived = explicit.is_none();
    let ranking = match explicit {
        Some(ranking) => ranking,
        None => {
            info!("no ranking given; using the ordering implied by metric 0");
            derived_ranking(&table)
        }
    };

    log_policy(config.footrule.policy, config.footrule.reduction);
    let calculator = FootruleCalculator::new(config.footrule.clone());
    let outcome = calculator
        .compute(&table, &ranking)
        .map_err(|e| e.to_string())?;

    let reports = vec![ReportData {
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        label: config
            .scores_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned()),
        ranking,
        ranking_derived,
        scores: table,
        outcome,
    }];

    match &config.out_dir {
        Some(dir) => write_reports(&reports, dir).map_err(|e| e.to_string())?,
        None => {
            let rendered = render_reports(&reports, config.format).map_err(|e| e.to_string())?;
            print!("{rendered}");
        }
    }
    Ok(())
}

fn log_policy(policy: ValidationPolicy, reduction: MetricReduction) {
    match policy {
        ValidationPolicy::Advisory => info!("advisory validation; reduction {}", reduction.name()),
        ValidationPolicy::Strict => info!("strict validation; reduction {}", reduction.name()),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
