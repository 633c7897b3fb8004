//! oxide-cond CLI
//!
//! Command-line tool for compiling JSON condition definitions to SQL.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use oxide_condition::dialect::DialectKind;
use oxide_condition::{CompilerConfig, ConditionCompiler};

/// Compile Yii-style condition definitions to parameterized SQL.
#[derive(Parser)]
#[command(name = "oxide-cond")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Identifier quoting dialect (generic, mysql, plain).
    #[arg(short, long, env = "OXIDE_COND_DIALECT")]
    dialect: Option<String>,

    /// JSON compiler configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Placeholder prefix.
    #[arg(short, long)]
    param_prefix: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a JSON definition; reads stdin when none is given.
    Build {
        /// The definition, e.g. '["IN", "id", [1, 2, 3]]'.
        definition: Option<String>,
    },

    /// List the operator keywords the definition syntax understands.
    Operators,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let compiler = ConditionCompiler::from_config(load_config(&cli)?);

    match cli.command {
        Commands::Build { definition } => {
            let json = match definition {
                Some(json) => json,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read definition from stdin")?;
                    buf
                }
            };
            debug!(definition = %json.trim(), "Compiling definition");

            let condition = compiler.parser().parse_json_str(&json)?;
            let (sql, params) = compiler.build_condition(&condition)?;

            let mut bound = Map::new();
            for (placeholder, param) in params.into_params() {
                bound.insert(placeholder, serde_json::to_value(&param.value)?);
            }
            println!("{sql}");
            println!("{}", Value::Object(bound));
        }

        Commands::Operators => {
            for keyword in compiler.parser().operators() {
                println!("{keyword}");
            }
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<CompilerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            info!("Using configuration from {}", path.display());
            CompilerConfig::from_json(&json)?
        }
        None => CompilerConfig::default(),
    };

    if let Some(name) = &cli.dialect {
        let dialect =
            DialectKind::from_name(name).ok_or_else(|| anyhow!("Unknown dialect: {name}"))?;
        config = config.with_dialect(dialect);
    }
    if let Some(prefix) = &cli.param_prefix {
        config = config.with_param_prefix(prefix);
    }

    debug!(?config, "Compiler configuration");
    Ok(config)
}
