//! Plugin protocol types
//!
//! Hosts that load the plugin as an executable send one JSON request per
//! line on stdin and read one JSON response per line from stdout.

use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::command::Arguments;
use super::registry::{ExamplePlugin, Plugin};
use crate::console::Console;

/// A message sent to the plugin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginRequest {
    /// The operation to perform
    pub operation: String,

    /// Operation-specific parameters
    #[serde(default)]
    pub params: Value,
}

impl PluginRequest {
    pub fn new(operation: impl Into<String>, params: impl Into<Value>) -> Self {
        Self {
            operation: operation.into(),
            params: params.into(),
        }
    }
}

/// A response from the plugin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginResponse {
    /// Whether the operation succeeded
    pub success: bool,

    /// Result data (if success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Error message (if failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PluginResponse {
    pub fn success(data: impl Into<Value>) -> Self {
        Self {
            success: true,
            data: Some(data.into()),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Answers a single request
pub fn handle(plugin: &ExamplePlugin, request: &PluginRequest, console: &mut Console) -> PluginResponse {
    match request.operation.as_str() {
        "test" => PluginResponse::success(true),

        "info" => match serde_json::to_value(plugin.info()) {
            Ok(info) => PluginResponse::success(info),
            Err(e) => PluginResponse::error(format!("Failed to serialize info: {}", e)),
        },

        "commands" => {
            let items: Vec<_> = plugin
                .ordered_commands()
                .iter()
                .map(|c| serde_json::json!({ "name": c.name(), "help": c.help() }))
                .collect();
            PluginResponse::success(items)
        }

        "help" => {
            let Some(name) = request.params.get("command").and_then(Value::as_str) else {
                return PluginResponse::error("help requires a 'command' parameter");
            };
            match plugin.get(name) {
                Some(command) => PluginResponse::success(command.help()),
                None => PluginResponse::error(format!("Unknown command: {}", name)),
            }
        }

        operation => {
            if plugin.get(operation).is_none() {
                return PluginResponse::error(format!("Unknown operation: {}", operation));
            }

            let args = match Arguments::from_value(request.params.clone()) {
                Ok(args) => args,
                Err(e) => return PluginResponse::error(e.to_string()),
            };

            match plugin.invoke(operation, &args, console) {
                Ok(result) => PluginResponse::success(result.unwrap_or(Value::Null)),
                Err(e) => PluginResponse::error(e.to_string()),
            }
        }
    }
}

/// Serves newline-delimited requests until EOF, returning how many were answered
pub fn serve<R: BufRead, W: Write>(
    plugin: &ExamplePlugin,
    input: R,
    mut output: W,
    console: &mut Console,
) -> io::Result<usize> {
    let mut handled = 0;

    for raw in input.split(b'\n') {
        let mut raw = raw?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }

        let response = match String::from_utf8(raw) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => match serde_json::from_str::<PluginRequest>(&line) {
                Ok(request) => handle(plugin, &request, console),
                Err(e) => PluginResponse::error(format!("Invalid request: {}", e)),
            },
            Err(e) => PluginResponse::error(format!("Invalid request: {}", e)),
        };

        let json = serde_json::to_string(&response)?;
        writeln!(output, "{}", json)?;
        output.flush()?;
        handled += 1;
    }

    Ok(handled)
}
