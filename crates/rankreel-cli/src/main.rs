//! rankreel CLI — run tools, print their descriptors, and manage config.
//!
//! Usage:
//!   rankreel series --end 10     — Summarize IMDB top series 1..10
//!   rankreel call <tool> --args  — Run any registered tool with JSON args
//!   rankreel describe [tool]     — Print tool-call descriptors
//!   rankreel tools               — List registered tools
//!   rankreel onboard             — Create a default configuration
//!   rankreel status              — Show current configuration

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rankreel_core::config::{Config, RAPID_API_KEY_ENV};
use rankreel_core::tools::imdb::TopSeriesTool;
use rankreel_core::tools::{builtin_definitions, ToolRegistry};

#[derive(Parser)]
#[command(
    name = "rankreel",
    version,
    about = "Run rankreel tools from the command line"
)]
struct Cli {
    /// Config file to use instead of ~/.rankreel/config.json
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a rank range of the IMDB top series list
    Series {
        /// Start of the rank range
        #[arg(short, long, default_value = "1")]
        start: String,
        /// End of the rank range (exclusive)
        #[arg(short, long)]
        end: String,
    },

    /// Run a registered tool by name
    Call {
        /// Tool name (e.g., "imdb_top_series")
        tool: String,
        /// Tool arguments as a JSON object
        #[arg(short, long, default_value = "{}")]
        args: String,
    },

    /// Print tool-call descriptors as JSON
    Describe {
        /// Only this tool (default: all)
        tool: Option<String>,
    },

    /// List built-in tools
    Tools,

    /// Create or reset the default configuration
    Onboard,

    /// Show configuration status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries tool output.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Series { start, end } => {
            let args = HashMap::from([
                ("start".to_string(), Value::String(start)),
                ("end".to_string(), Value::String(end)),
            ]);
            cmd_call(config_path, "imdb_top_series", args).await?
        }
        Commands::Call { tool, args } => {
            let args: HashMap<String, Value> =
                serde_json::from_str(&args).context("--args must be a JSON object")?;
            cmd_call(config_path, &tool, args).await?
        }
        Commands::Describe { tool } => cmd_describe(tool.as_deref())?,
        Commands::Tools => cmd_tools()?,
        Commands::Onboard => cmd_onboard()?,
        Commands::Status => cmd_status(config_path)?,
    }

    Ok(())
}

// ── Shared Setup ────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(p) => Config::load_from(p).with_context(|| format!("reading {}", p.display()))?,
        None => Config::load().context("reading default config")?,
    };
    Ok(config.apply_env())
}

fn validate_config(config: &Config) -> Result<()> {
    if let Err(errors) = config.validate() {
        eprintln!("\n  \x1b[31m❌ Configuration errors:\x1b[0m");
        for e in &errors {
            eprintln!("     • {}", e);
        }
        eprintln!();
        anyhow::bail!("Fix the above {} error(s)", errors.len());
    }
    Ok(())
}

/// Build the registry with every tool the config can support.
fn setup_tools(config: &Config) -> Result<ToolRegistry> {
    let client = reqwest::Client::new();
    let mut tools = ToolRegistry::new();

    tools.register(Box::new(TopSeriesTool::new(client, &config.tools.rapid_api)?));

    Ok(tools)
}

// ── Tool Commands ───────────────────────────────────────────────────

async fn cmd_call(config_path: Option<&Path>, tool: &str, args: HashMap<String, Value>) -> Result<()> {
    let config = load_config(config_path)?;
    validate_config(&config)?;
    let tools = setup_tools(&config)?;

    tracing::debug!(tool, args = ?args, "Dispatching tool call");
    let output = tools.run(tool, args).await?;
    println!("{}", output);
    Ok(())
}

/// Descriptors are static, so no config or API key is needed.
fn cmd_describe(tool: Option<&str>) -> Result<()> {
    let defs = builtin_definitions();

    let json = match tool {
        Some(name) => {
            let def = defs
                .iter()
                .find(|d| d.function.name == name)
                .with_context(|| format!("tool '{}' not found", name))?;
            serde_json::to_string_pretty(def)?
        }
        None => serde_json::to_string_pretty(&defs)?,
    };
    println!("{}", json);
    Ok(())
}

fn cmd_tools() -> Result<()> {
    println!();
    for def in builtin_definitions() {
        println!("  🔧 {} — {}", def.function.name, def.function.description);
    }
    println!();
    Ok(())
}

// ── Onboard Command ─────────────────────────────────────────────────

fn cmd_onboard() -> Result<()> {
    let path = Config::write_default_template()?;
    println!();
    println!("  ✅ Configuration created at:");
    println!("     {}", path.display());
    println!();
    println!("  Next steps:");
    println!("  1. Add your RapidAPI key to the config file (or export {})", RAPID_API_KEY_ENV);
    println!("  2. Run `rankreel series --end 10`");
    println!();
    Ok(())
}

// ── Status Command ──────────────────────────────────────────────────

fn cmd_status(config_path: Option<&Path>) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::default_path);
    let config = load_config(config_path)?;
    let rapid = &config.tools.rapid_api;

    println!();
    println!("  🎬 rankreel status");
    println!("  ─────────────────────────────────────");

    if path.exists() {
        println!("  Config:    {}", path.display());
    } else {
        println!("  Config:    ⚠️  Not found (run `rankreel onboard`)");
    }

    match config.validate() {
        Ok(()) => println!("  RapidAPI:  ✅ key configured"),
        Err(errors) => {
            for e in errors {
                println!("  RapidAPI:  ❌ {}", e);
            }
        }
    }

    println!("  Endpoint:  {} (host {})", rapid.imdb_base_url, rapid.imdb_host);
    println!();
    Ok(())
}
