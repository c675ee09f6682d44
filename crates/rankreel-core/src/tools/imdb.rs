//! IMDB rankings via the RapidAPI "IMDB Top 100" endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::debug;

use super::rapidapi::RapidApiClient;
use super::{function_definition, Tool, ToolDefinition, ToolError};
use crate::config::RapidApiConfig;

const SERIES_PATH: &str = "/series/";
const DEFAULT_START: i64 = 1;

const NAME: &str = "imdb_top_series";
const DESCRIPTION: &str = "Query the latest top start-to-end series ranked by Imdb";

fn parameters_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "start": {
                "type": "string",
                "description": "start of the rank range of the Imdb series",
                "default": "1"
            },
            "end": {
                "type": "string",
                "description": "end of the rank range of the Imdb series"
            }
        },
        "required": ["end"]
    })
}

/// Summarizes a slice of the IMDB top series list.
///
/// `start` and `end` index the response array directly and `end` is
/// exclusive, so the default `start` of 1 skips the first entry.
pub struct TopSeriesTool {
    api: RapidApiClient,
}

impl TopSeriesTool {
    pub fn new(client: Client, config: &RapidApiConfig) -> Result<Self, ToolError> {
        let api = RapidApiClient::new(
            client,
            &config.api_key,
            &config.imdb_host,
            &config.imdb_base_url,
            "IMDB top series",
        )?;
        Ok(Self { api })
    }

    /// The tool-call descriptor, available without an API key.
    pub fn definition() -> ToolDefinition {
        function_definition(NAME, DESCRIPTION, parameters_schema())
    }
}

#[async_trait]
impl Tool for TopSeriesTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn parameters(&self) -> Value {
        parameters_schema()
    }

    async fn run(&self, args: HashMap<String, Value>) -> Result<String, ToolError> {
        let start = rank_arg(&args, "start")?.unwrap_or(DEFAULT_START);
        let end = rank_arg(&args, "end")?.ok_or(ToolError::MissingArgument("end"))?;

        debug!(start, end, "Fetching IMDB top series");

        let response = self.api.get_json(SERIES_PATH).await?;
        summarize(&response, start, end)
    }
}

/// Read an integer argument given either as a numeric string or a JSON integer.
fn rank_arg(args: &HashMap<String, Value>, name: &'static str) -> Result<Option<i64>, ToolError> {
    let Some(value) = args.get(name) else {
        return Ok(None);
    };

    let parsed = match value {
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Number(n) => n.as_i64(),
        _ => None,
    };

    parsed.map(Some).ok_or_else(|| ToolError::InvalidArgument {
        name,
        value: value.to_string(),
    })
}

/// Format entries `start..end` of `response` into the summary line.
fn summarize(response: &Value, start: i64, end: i64) -> Result<String, ToolError> {
    let items = response.as_array().ok_or_else(|| {
        ToolError::UnexpectedShape(format!("expected a JSON array of series, got {}", kind(response)))
    })?;

    let entries = (start..end)
        .map(|index| -> Result<String, ToolError> {
            let item = item_at(items, index)?;
            Ok(format!(
                "{}, {}, {}, published in {}",
                field(item, index, "title")?,
                field(item, index, "genre")?,
                field(item, index, "rating")?,
                field(item, index, "year")?,
            ))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(format!("Top {start}-{end} series ranked by IMDB are: {}", entries.join(";")))
}

/// Negative indices count back from the end of the list.
fn item_at(items: &[Value], index: i64) -> Result<&Value, ToolError> {
    let len = items.len();
    let resolved = if index < 0 { index + len as i64 } else { index };

    usize::try_from(resolved)
        .ok()
        .and_then(|i| items.get(i))
        .ok_or(ToolError::IndexOutOfRange { index, len })
}

fn field(item: &Value, index: i64, name: &'static str) -> Result<String, ToolError> {
    let object = item.as_object().ok_or_else(|| {
        ToolError::UnexpectedShape(format!("item {index} is {}, expected an object", kind(item)))
    })?;
    let value = object
        .get(name)
        .ok_or(ToolError::MissingField { index, field: name })?;
    Ok(display_value(value))
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "True".into(),
        Value::Bool(false) => "False".into(),
        Value::Null => "None".into(),
        other => other.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
