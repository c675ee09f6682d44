//! rankreel-core: tool adapters for agent tool-calling.
//!
//! - [`config`] — Typed configuration loading from JSON, with env overrides
//! - [`tools`] — `Tool` trait, registry, the shared RapidAPI client, and
//!   the `imdb_top_series` tool
//!
//! # Quick Start
//!
//! ```no_run
//! use std::collections::HashMap;
//! use rankreel_core::config::Config;
//! use rankreel_core::tools::imdb::TopSeriesTool;
//! use rankreel_core::tools::ToolRegistry;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let config = Config::load()?.apply_env();
//! let client = reqwest::Client::new();
//!
//! let mut tools = ToolRegistry::new();
//! tools.register(Box::new(TopSeriesTool::new(client, &config.tools.rapid_api)?));
//!
//! let mut params = HashMap::new();
//! params.insert("end".to_string(), serde_json::json!("10"));
//! let summary = tools.run("imdb_top_series", params).await?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod tools;
