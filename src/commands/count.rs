//! `count` command
//!
//! Counts from 1 up to `max` (default 5). Bounds above the configured limit
//! are clamped with a warning; non-numeric or non-positive bounds are
//! reported and the command returns nothing.

use std::num::IntErrorKind;

use serde_json::Value;
use thiserror::Error;

use crate::config::CountConfig;
use crate::console::{Console, Tone};
use crate::error::PluginError;
use crate::plugin::{Arguments, BaseCommand, Command};

/// Rejected `max` values; the messages are shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
enum BoundError {
    #[error("Please provide a valid number")]
    NotANumber,

    #[error("Please provide a positive number")]
    NotPositive,
}

/// Removes `_` separators; each must sit between two digits ("1_000")
fn strip_digit_separators(s: &str) -> Result<String, BoundError> {
    let bytes = s.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'_' {
            let before = i.checked_sub(1).and_then(|j| bytes.get(j));
            let after = bytes.get(i + 1);
            if !matches!((before, after), (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit())
            {
                return Err(BoundError::NotANumber);
            }
        }
    }

    Ok(s.replace('_', ""))
}

/// Coerces a loosely typed JSON value to an integer
fn coerce(value: &Value) -> Result<i64, BoundError> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if n.as_u64().is_some() {
                Ok(i64::MAX)
            } else {
                match n.as_f64() {
                    Some(f) if f.is_finite() => Ok(f.trunc() as i64),
                    _ => Err(BoundError::NotANumber),
                }
            }
        }
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::String(s) => match strip_digit_separators(s.trim())?.parse::<i64>() {
            Ok(i) => Ok(i),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(i64::MAX),
                IntErrorKind::NegOverflow => Ok(i64::MIN),
                _ => Err(BoundError::NotANumber),
            },
        },
        _ => Err(BoundError::NotANumber),
    }
}

/// Counts from 1 to a specified number
pub struct CountCommand {
    base: BaseCommand,
    config: CountConfig,
}

impl CountCommand {
    pub const NAME: &'static str = "count";

    pub fn new() -> Self {
        Self::with_config(CountConfig::default())
    }

    pub fn with_config(config: CountConfig) -> Self {
        Self {
            base: BaseCommand::new(Self::NAME, "Count from 1 to a specified number"),
            config,
        }
    }

    fn resolve_bound(&self, args: &Arguments) -> Result<i64, BoundError> {
        let bound = match args.get("max") {
            Some(value) => coerce(value)?,
            None => self.config.default_max,
        };

        if bound < 1 {
            return Err(BoundError::NotPositive);
        }

        Ok(bound)
    }
}

impl Default for CountCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for CountCommand {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn help(&self) -> &str {
        self.base.help()
    }

    fn execute(
        &self,
        args: &Arguments,
        console: &mut Console,
    ) -> Result<Option<Value>, PluginError> {
        let mut bound = match self.resolve_bound(args) {
            Ok(bound) => bound,
            Err(e) => {
                console.styled(Tone::Error, &e.to_string())?;
                return Ok(None);
            }
        };

        if bound > self.config.limit {
            console.styled(
                Tone::Warning,
                &format!("That's a big number! Limiting to {}", self.config.limit),
            )?;
            bound = self.config.limit;
        }

        console.line(&format!("🔢 Counting to {}:", bound))?;
        for i in 1..=bound {
            console.line(&format!("  {}", i))?;
        }
        console.line(&format!("✅ Finished counting to {}!", bound))?;

        Ok(Some(Value::from(bound)))
    }
}
