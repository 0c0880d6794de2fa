//! Command interface
//!
//! A command is a name, a line of help text, and an operation taking a
//! keyword bag of JSON arguments.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::console::Console;
use crate::error::PluginError;

/// Keyword arguments passed to a command
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Arguments(Map<String, Value>);

impl Arguments {
    /// Creates an empty argument bag
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builds arguments from a JSON value (`null` means no arguments)
    pub fn from_value(value: Value) -> Result<Self, PluginError> {
        match value {
            Value::Null => Ok(Self::new()),
            Value::Object(map) => Ok(Self(map)),
            other => Err(PluginError::InvalidArguments(format!(
                "expected a JSON object, got {}",
                other
            ))),
        }
    }

    /// Adds an argument, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Gets an argument by name
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Arguments {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Interface for all plugin commands
pub trait Command: Send + Sync {
    /// Command name used for lookup
    fn name(&self) -> &str;

    /// One-line help text
    fn help(&self) -> &str;

    /// Runs the command, writing user-facing output to `console`.
    ///
    /// Invalid input is reported on the console and yields `Ok(None)`;
    /// `Err` is reserved for failures of the console itself.
    fn execute(&self, args: &Arguments, console: &mut Console)
        -> Result<Option<Value>, PluginError>;
}

/// Name and help text shared by every concrete command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseCommand {
    name: &'static str,
    help: &'static str,
}

impl BaseCommand {
    pub const fn new(name: &'static str, help: &'static str) -> Self {
        Self { name, help }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn help(&self) -> &str {
        self.help
    }
}
