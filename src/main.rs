use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use decision_rules::adapters::{
    CanonicalCsvWriter, JsonReportRenderer, LenientCsvParser, LocalFileSource, TextReportRenderer,
};
use decision_rules::application::{
    EvaluateDecisionCommand, EvaluateDecisionHandler, LoadTableHandler, LoadTableQuery,
    NormalizeTableCommand, NormalizeTableHandler,
};
use decision_rules::config::{AppConfig, LoggingConfig, OutputFormat};
use decision_rules::domain::analysis::DecisionRule;
use decision_rules::domain::foundation::OptimismDegree;
use decision_rules::ports::ReportRenderer;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Location that means "read standard input".
const STDIN_MARKER: &str = "-";

#[derive(Debug, Parser)]
#[command(
    name = "decision-rules",
    version,
    about = "Classical decision rules over two-state payoff tables."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate a payoff table with every decision rule.
    Evaluate(EvaluateArgs),
    /// Print a payoff table in canonical CSV form.
    Normalize(NormalizeArgs),
    /// List the available decision rules.
    Rules,
}

#[derive(Debug, Parser)]
struct EvaluateArgs {
    /// CSV file to read (default: standard input, also "-").
    path: Option<String>,

    /// Hurwitz optimism degree in [0, 1] (default: configured value, 0.5).
    #[arg(long, short = 'd')]
    degree: Option<OptimismDegree>,

    /// Also run the Savage (minimax regret) rule.
    #[arg(long, default_value_t = false)]
    savage: bool,

    /// Run a single rule (pessimistic, optimistic, laplace, hurwitz, savage).
    #[arg(long, short = 'r')]
    rule: Option<DecisionRule>,

    /// Output format (text, json).
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
}

#[derive(Debug, Parser)]
struct NormalizeArgs {
    /// CSV file to read (default: standard input, also "-").
    path: Option<String>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {:#}", e);
            return ExitCode::from(2);
        }
    };

    init_tracing(&config.logging);

    if let Err(e) = run(cli, &config) {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn load_config() -> anyhow::Result<AppConfig> {
    let config = AppConfig::load().context("load configuration")?;
    config.validate().context("validate configuration")?;
    Ok(config)
}

/// Logs go to stderr so stdout carries only the report. `RUST_LOG` wins over
/// the configured filter.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    match cli.cmd {
        Command::Evaluate(args) => cmd_evaluate(args, config),
        Command::Normalize(args) => cmd_normalize(args, config),
        Command::Rules => cmd_rules(config),
    }
}

fn cmd_evaluate(args: EvaluateArgs, config: &AppConfig) -> anyhow::Result<()> {
    let csv = read_input(args.path.as_deref(), config)?;

    let degree = match args.degree {
        Some(degree) => degree,
        None => config.evaluation.degree()?,
    };
    // A bare `--rule hurwitz` follows --degree and the configured default.
    let rule = args.rule.map(|rule| match rule {
        DecisionRule::Hurwitz { .. } => DecisionRule::hurwitz(degree),
        other => other,
    });

    let mut cmd = EvaluateDecisionCommand::new(csv)
        .with_degree(degree)
        .with_savage(args.savage || config.features.include_savage);
    if let Some(rule) = rule {
        cmd = cmd.only(rule);
    }

    let handler = EvaluateDecisionHandler::new(Arc::new(LenientCsvParser::new()));
    let report = handler.handle(cmd);

    let format = args.format.map(OutputFormat::from).unwrap_or(config.output.format);
    let renderer: Box<dyn ReportRenderer> = match format {
        OutputFormat::Json => Box::new(JsonReportRenderer::new()),
        OutputFormat::Text if config.output.show_table => Box::new(TextReportRenderer::new()),
        OutputFormat::Text => Box::new(TextReportRenderer::new().without_table()),
    };

    let rendered = renderer.render(&report);
    if rendered.ends_with('\n') {
        print!("{}", rendered);
    } else {
        println!("{}", rendered);
    }
    Ok(())
}

fn cmd_normalize(args: NormalizeArgs, config: &AppConfig) -> anyhow::Result<()> {
    let csv = read_input(args.path.as_deref(), config)?;

    let handler = NormalizeTableHandler::new(
        Arc::new(LenientCsvParser::new()),
        Arc::new(CanonicalCsvWriter::new()),
    );
    print!("{}", handler.handle(NormalizeTableCommand { csv }));
    Ok(())
}

fn cmd_rules(config: &AppConfig) -> anyhow::Result<()> {
    let degree = config.evaluation.degree()?;
    for rule in DecisionRule::all(degree) {
        println!("{:<12} {}", rule.name(), rule);
    }
    Ok(())
}

/// Reads table text from a file location, or stdin when none is given.
fn read_input(path: Option<&str>, config: &AppConfig) -> anyhow::Result<String> {
    match path {
        None | Some(STDIN_MARKER) => {
            debug!("Reading table text from stdin");
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("read table from stdin")?;
            Ok(text)
        }
        Some(location) => {
            let mut source =
                LocalFileSource::with_fallback_dirs(config.evaluation.fallback_dirs_list());
            if config.evaluation.search_executable_dirs {
                source = source.with_executable_dirs();
            }

            let handler = LoadTableHandler::new(Arc::new(source));
            let text = handler
                .handle(LoadTableQuery {
                    location: location.to_string(),
                })
                .with_context(|| format!("load table {}", location))?;
            Ok(text)
        }
    }
}
