use anyhow::Context;
use clap::{Parser, Subcommand};
use edmig_common::formatter::DumpFormat;
use edmig_common::naming::{NamingStrategy, NamingStrategyKind};
use edmig_engine::case::ConflictCase;
use edmig_engine::cli;
use edmig_engine::config::{ConfigLoader, ConfigOverrides, EdmigConfig};
use edmig_engine::resolution::{ConflictResolver, DiagnosticRenderer};
use edmig_engine::session::{ConsoleSession, HeadlessSession, OperatorSession};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "edmig", version, about = "Editable migration conflict resolver")]
struct Args {
    /// Config file (defaults to ./edmig.yaml, then ~/.edmig/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Naming strategy used to compute new editable names
    #[arg(long, global = true, value_enum)]
    strategy: Option<NamingStrategyKind>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the editable described by a case file
    Resolve {
        case: PathBuf,

        /// Never prompt; unresolved editables stay unresolved
        #[arg(long, short = 'n')]
        no_interaction: bool,

        /// Format used to dump editable data
        #[arg(long, value_enum)]
        dump_format: Option<DumpFormat>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the name each candidate of a case file would get
    Names { case: PathBuf },
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides {
            naming_strategy: self.strategy,
            ..Default::default()
        };
        if let Command::Resolve {
            no_interaction,
            dump_format,
            ..
        } = &self.command
        {
            overrides.no_interaction = *no_interaction;
            overrides.dump_format = *dump_format;
        }
        overrides
    }
}

async fn load_config(args: &Args) -> anyhow::Result<EdmigConfig> {
    ConfigLoader::load(args.config.as_deref(), &args.overrides())
        .await
        .context("Failed to load configuration")
}

async fn load_case(path: &Path) -> anyhow::Result<ConflictCase> {
    ConflictCase::load(path)
        .await
        .with_context(|| format!("Failed to load case {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr; stdout carries the operator report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args).await?;
    let strategy: Box<dyn NamingStrategy> = config.naming_strategy.strategy();

    match args.command {
        Command::Names { case } => {
            let case = load_case(&case).await?;
            for (i, candidate) in case.candidates.iter().enumerate() {
                println!("[{}] {}", i, strategy.name_for(candidate));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Resolve { case, json, .. } => {
            let case = load_case(&case).await?;
            let renderer = DiagnosticRenderer::new(config.dump_format.dumper())
                .with_separator_width(config.separator_width);
            let resolver = ConflictResolver::with_renderer(strategy.as_ref(), renderer);

            let interactive = !config.no_interaction && std::io::stdin().is_terminal();
            info!(
                "Resolving '{}' on document {} ({})",
                case.failure.name,
                case.document.id,
                if interactive { "interactive" } else { "batch" }
            );
            let mut session: Box<dyn OperatorSession> = if interactive {
                Box::new(ConsoleSession::stdio())
            } else {
                Box::new(HeadlessSession::stdout())
            };

            let outcome = match cli::run_case(&resolver, session.as_mut(), case) {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!("Resolution aborted: {}", e);
                    return Err(e.into());
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", cli::format_outcome(&outcome));
            }

            Ok(if outcome.is_settled() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            })
        }
    }
}
