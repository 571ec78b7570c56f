use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("rank-footrule").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_parse_run_defaults() {
    let cli = parse(&["run", "--scores", "scores.json"]);
    let Command::Run(args) = cli.command else {
        panic!("expected run");
    };
    let config = RunConfig::from(args);
    assert_eq!(config.scores_path, PathBuf::from("scores.json"));
    assert_eq!(config.footrule.policy, ValidationPolicy::Advisory);
    assert_eq!(config.footrule.reduction, MetricReduction::FirstPair);
    assert_eq!(config.format, ReportFormat::Text);
    assert!(config.out_dir.is_none());
}

#[test]
fn test_parse_run_strict_against_proposed() {
    let cli = parse(&[
        "run",
        "--scores",
        "s.json",
        "--ranking",
        "A,B",
        "--reduction",
        "against-proposed",
        "--strict",
        "--format",
        "json",
    ]);
    let Command::Run(args) = cli.command else {
        panic!("expected run");
    };
    let config = RunConfig::from(args);
    assert_eq!(config.footrule.policy, ValidationPolicy::Strict);
    assert_eq!(config.footrule.reduction, MetricReduction::AgainstProposed);
    assert_eq!(config.ranking.as_deref(), Some("A,B"));
    assert_eq!(config.format, ReportFormat::Json);
}

#[test]
fn test_ranking_sources_conflict() {
    let res = Cli::try_parse_from([
        "rank-footrule",
        "run",
        "--scores",
        "s.json",
        "--ranking",
        "A",
        "--ranking-file",
        "r.txt",
    ]);
    assert!(res.is_err());
}

#[test]
fn test_parse_demo_verbose() {
    let cli = parse(&["demo", "-v"]);
    assert!(cli.verbose);
    assert!(matches!(cli.command, Command::Demo(_)));
}
