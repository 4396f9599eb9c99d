//! Command line parsing

use clap::Parser;
use kube_suggest::{Cli, Config, OutputFormat};

#[test]
fn test_defaults() {
    let cli = Cli::try_parse_from(["kube-suggest"]).unwrap();

    assert!(!cli.version);
    assert!(!cli.demo);
    assert_eq!(cli.limit, 3);
    assert_eq!(cli.output, OutputFormat::Report);
    assert!(cli.manifests.is_none());
}

#[test]
fn test_short_flags() {
    let cli = Cli::try_parse_from(["kube-suggest", "-v", "-d", "-q", "-n", "dev"]).unwrap();

    assert!(cli.version);
    assert!(cli.demo);
    assert!(cli.quiet);
    assert_eq!(cli.namespace.as_deref(), Some("dev"));
}

#[test]
fn test_long_flags() {
    let cli = Cli::try_parse_from([
        "kube-suggest",
        "--version",
        "--demo",
        "--verbose",
        "--context",
        "kind-dev",
        "--manifests",
        "deploy/",
        "--limit",
        "5",
        "--output",
        "json",
    ])
    .unwrap();

    assert!(cli.version);
    assert!(cli.demo);
    assert!(cli.verbose);
    assert_eq!(cli.context.as_deref(), Some("kind-dev"));
    assert_eq!(cli.manifests.as_deref(), Some(std::path::Path::new("deploy/")));
    assert_eq!(cli.limit, 5);
    assert_eq!(cli.output, OutputFormat::Json);

    let config = Config::from_cli(&cli).unwrap();
    assert_eq!(config.limit, 5);
}

#[test]
fn test_rejects_unknown_output() {
    assert!(Cli::try_parse_from(["kube-suggest", "--output", "yaml"]).is_err());
}

#[test]
fn test_zero_limit_is_invalid_config() {
    let cli = Cli::try_parse_from(["kube-suggest", "--limit", "0"]).unwrap();
    assert!(Config::from_cli(&cli).is_err());
}
