//! # Solcraft CLI
//!
//! Command-line interface for the contract builder.
//!
//! ## Usage
//!
//! ```bash
//! # Generate Solidity from a saved canvas
//! solcraft emit canvas.json --name Vault --out Vault.sol
//!
//! # Presets work wherever a canvas file is expected
//! solcraft emit token --name Coin
//!
//! # Recover a canvas from existing Solidity
//! solcraft parse Token.sol > canvas.json
//!
//! # List starter canvases, or emit one
//! solcraft preset
//! solcraft preset token
//!
//! # Run the deployment pipeline
//! solcraft pipeline canvas.json --stages import,compile --compiler-url http://localhost:9000
//!
//! # Start the builder UI
//! solcraft serve --listen 0.0.0.0:8080
//! ```

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use solcraft::{
    Canvas, EmitOptions, SolcraftError, parser,
    pipeline::{self, Pipeline, PipelineConfig, PipelineInput, StageStatus},
    presets,
    server::{self, ServerConfig},
    validate,
};

/// Solcraft - Visual Solidity contract builder
#[derive(Parser, Debug)]
#[command(name = "solcraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate Solidity from a canvas JSON file
    Emit {
        /// Canvas file (`{"components": [...]}`) or a preset name
        canvas: PathBuf,

        /// Write to FILE instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Contract name
        #[arg(long, default_value = "GeneratedContract")]
        name: String,

        /// SPDX licence identifier
        #[arg(long, default_value = "MIT")]
        license: String,

        /// Pragma version constraint
        #[arg(long, default_value = "^0.8.20")]
        pragma: String,
    },

    /// Recognise components in a Solidity file and print the canvas as JSON
    Parse {
        /// Solidity source file
        source: PathBuf,
    },

    /// Print diagnostics for a canvas JSON file
    Check {
        /// Canvas file or a preset name
        canvas: PathBuf,
    },

    /// List the component palette
    Library,

    /// List starter canvases, or emit one
    Preset {
        /// Preset name (omit to list)
        name: Option<String>,

        /// Print the canvas JSON instead of Solidity
        #[arg(long)]
        json: bool,
    },

    /// Run the import/compile/test/deploy/verify pipeline
    Pipeline {
        /// Canvas JSON file, a preset name, or a `.sol` file used as-is
        input: PathBuf,

        /// Pipeline config JSON; flags below override it
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Comma-separated stages (default: all)
        #[arg(long)]
        stages: Option<String>,

        /// Compilation service base URL
        #[arg(long)]
        compiler_url: Option<String>,

        /// Deployment service base URL
        #[arg(long)]
        deployer_url: Option<String>,

        /// Contract name
        #[arg(long)]
        name: Option<String>,
    },

    /// Start the HTTP server with the builder UI
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8080")]
        listen: String,

        /// Compilation service base URL
        #[arg(long)]
        compiler_url: Option<String>,

        /// Deployment service base URL
        #[arg(long)]
        deployer_url: Option<String>,

        /// Service request timeout in seconds
        #[arg(long, default_value = "30")]
        timeout: u64,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), SolcraftError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Emit {
            canvas,
            out,
            name,
            license,
            pragma,
        } => {
            let canvas = canvas_or_preset(&canvas)?;
            for diagnostic in validate::check(canvas.components()) {
                eprintln!("{}", diagnostic);
            }
            let options = EmitOptions {
                contract_name: name,
                license,
                pragma,
            };
            let source = canvas.emit_with(&options);
            match out {
                Some(path) => {
                    std::fs::write(&path, source)?;
                    info!(path = %path.display(), "wrote contract");
                }
                None => print!("{}", source),
            }
        }

        Commands::Parse { source } => {
            let text = std::fs::read_to_string(&source)?;
            let outcome = parser::parse(&text);
            eprintln!(
                "Recognised {} components, skipped {} lines",
                outcome.components.len(),
                outcome.skipped
            );
            let canvas = Canvas::from_components(outcome.components)?;
            println!("{}", serde_json::to_string_pretty(&canvas)?);
        }

        Commands::Check { canvas } => {
            let canvas = canvas_or_preset(&canvas)?;
            let diagnostics = validate::check(canvas.components());
            if diagnostics.is_empty() {
                println!("No problems found.");
                return Ok(());
            }
            for diagnostic in &diagnostics {
                println!("{}", diagnostic);
            }
            if validate::has_errors(&diagnostics) {
                return Err(SolcraftError::InvalidInput(
                    "canvas would not compile".to_string(),
                ));
            }
        }

        Commands::Library => {
            for entry in solcraft::canvas::component_library() {
                println!(
                    "  {:<20} {:<10} {} {}",
                    entry.original_id,
                    entry.component_type.to_string(),
                    entry.icon,
                    entry.label
                );
            }
        }

        Commands::Preset { name, json } => {
            let Some(name) = name else {
                println!("Available presets:");
                for name in presets::list_presets() {
                    println!("  {:<8} {}", name, presets::describe(name).unwrap_or_default());
                }
                return Ok(());
            };

            let canvas = presets::by_name(&name).ok_or_else(|| {
                SolcraftError::InvalidInput(format!(
                    "Unknown preset '{}'. Run without arguments to see available options.",
                    name
                ))
            })?;
            if json {
                println!("{}", serde_json::to_string_pretty(&canvas)?);
            } else {
                print!("{}", canvas.emit());
            }
        }

        Commands::Pipeline {
            input,
            config,
            stages,
            compiler_url,
            deployer_url,
            name,
        } => {
            let mut config = match config {
                Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
                None => PipelineConfig::default(),
            };
            if let Some(list) = stages {
                config.stages = pipeline::parse_stages(&list)?;
            }
            if compiler_url.is_some() {
                config.compiler_url = compiler_url;
            }
            if deployer_url.is_some() {
                config.deployer_url = deployer_url;
            }
            if let Some(name) = name {
                config.contract_name = name;
            }

            let input = if input.extension().is_some_and(|ext| ext == "sol") {
                PipelineInput::Solidity(std::fs::read_to_string(&input)?)
            } else {
                PipelineInput::Canvas(canvas_or_preset(&input)?)
            };

            let pipeline = Pipeline::from_config(&config)?;
            let runtime = tokio::runtime::Runtime::new()?;
            let report =
                runtime.block_on(pipeline.run(input, &config.stages, &config.contract_name));

            for outcome in &report.stages {
                let mark = match outcome.status {
                    StageStatus::Succeeded => "ok",
                    StageStatus::Failed => "FAILED",
                    StageStatus::Skipped => "skipped",
                };
                println!("{:<8} {:<8} {}", outcome.stage.as_str(), mark, outcome.message);
            }
            if let Some(deployment) = &report.deployment {
                println!("\nContract address: {}", deployment.contract_address);
            }
            if !report.succeeded() {
                return Err(SolcraftError::InvalidInput("pipeline failed".to_string()));
            }
        }

        Commands::Serve {
            listen,
            compiler_url,
            deployer_url,
            timeout,
        } => {
            let config = ServerConfig {
                listen_addr: listen,
                compiler_url,
                deployer_url,
                timeout_secs: timeout,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))?;
        }
    }

    Ok(())
}

/// Resolve a canvas argument. A preset name is used only when no file of
/// that name exists.
fn canvas_or_preset(arg: &Path) -> Result<Canvas, SolcraftError> {
    if let Some(name) = arg.to_str()
        && !arg.exists()
        && presets::is_preset(name)
    {
        info!(preset = name, "using preset canvas");
        return presets::by_name(name)
            .ok_or_else(|| SolcraftError::InvalidInput(format!("Unknown preset '{}'", name)));
    }
    load_canvas(arg)
}

/// Read a canvas JSON file.
fn load_canvas(path: &Path) -> Result<Canvas, SolcraftError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
