use std::path::PathBuf;

use clap::Parser;

/// Kubernetes cost suggestions
///
/// Inspects the Deployments in your cluster and prints the actions that
/// would save the most money each month.
#[derive(Parser, Debug)]
#[command(name = "kube-suggest", author, about, styles=get_styles())]
pub struct Cli {
    /// Print the version and exit
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Show a sample report without connecting to a cluster
    #[arg(short, long)]
    pub demo: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress log output to stderr (logs still written to file)
    #[arg(short, long)]
    pub quiet: bool,

    /// Provide context name
    ///
    /// Use if you have multiple clusters in your kubeconfig
    #[arg(long)]
    pub context: Option<String>,

    /// Only analyse workloads in this namespace
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Analyse Deployment manifests from a YAML file or directory instead of a live cluster
    #[arg(long, value_name = "PATH")]
    pub manifests: Option<PathBuf>,

    /// Maximum number of suggestions to show
    #[arg(long, default_value_t = 3)]
    pub limit: usize,

    /// Output format: report (default), table or json
    #[arg(long, value_name = "FORMAT", default_value = "report")]
    pub output: OutputFormat,
}

/// Output format for the suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text report
    Report,
    /// Display results in an interactive table (TUI)
    Table,
    /// Output results as JSON
    Json,
}

/// Set color and variants for help description
///
/// Thanks to [Praveen Perera](https://stackoverflow.com/a/76916424)
fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
        )
        .header(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
        )
        .literal(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
        )
        .invalid(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .error(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .valid(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
        )
        .placeholder(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))),
        )
}
