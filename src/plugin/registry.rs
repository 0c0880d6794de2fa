//! Plugin interface and the example plugin
//!
//! The plugin owns a registry mapping command names to commands. The
//! registry stays empty until [`Plugin::initialize`] runs; callers only ever
//! see copies of it.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use super::command::{Arguments, Command};
use super::info::PluginInfo;
use crate::commands::{CountCommand, GreetCommand};
use crate::config::PluginConfig;
use crate::console::Console;
use crate::error::PluginError;

/// Command registry keyed by command name
pub type CommandMap = HashMap<String, Arc<dyn Command>>;

/// Interface for all plugins
pub trait Plugin {
    /// Static plugin metadata, available before initialization
    fn info(&self) -> PluginInfo;

    /// Populates the command registry
    fn initialize(&mut self) -> Result<(), PluginError>;

    /// Returns a copy of the command registry
    fn commands(&self) -> CommandMap;
}

/// Example plugin providing `greet` and `count`
pub struct ExamplePlugin {
    config: PluginConfig,
    commands: CommandMap,
}

impl ExamplePlugin {
    pub const NAME: &'static str = "example-plugin";

    /// Creates an uninitialized plugin with default configuration
    pub fn new() -> Self {
        Self::with_config(PluginConfig::default())
    }

    /// Creates an uninitialized plugin with the given configuration
    pub fn with_config(config: PluginConfig) -> Self {
        Self {
            config,
            commands: HashMap::new(),
        }
    }

    /// Loads configuration (see [`PluginConfig::load`]) and initializes the plugin
    pub fn load(config_path: Option<&Path>) -> Result<Self, PluginError> {
        let config = PluginConfig::load(config_path)?;
        let mut plugin = Self::with_config(config);
        plugin.initialize()?;
        Ok(plugin)
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Returns true once the registry has been populated
    pub fn is_initialized(&self) -> bool {
        !self.commands.is_empty()
    }

    /// Gets a registered command by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.commands.get(name).cloned()
    }

    /// Registered commands in descriptor order
    pub fn ordered_commands(&self) -> Vec<Arc<dyn Command>> {
        self.info()
            .commands
            .iter()
            .filter_map(|name| self.get(name))
            .collect()
    }

    /// Runs a command by name
    pub fn invoke(
        &self,
        name: &str,
        args: &Arguments,
        console: &mut Console,
    ) -> Result<Option<Value>, PluginError> {
        let command = self
            .commands
            .get(name)
            .ok_or_else(|| PluginError::UnknownCommand(name.to_string()))?;

        command.execute(args, console)
    }

    /// Checks that the registry matches the declared command list
    pub fn verify(&self) -> Result<(), PluginError> {
        let mut declared = self.info().commands;
        let mut registered: Vec<String> = self.commands.keys().cloned().collect();
        declared.sort();
        registered.sort();

        if declared != registered {
            return Err(PluginError::RegistryMismatch {
                declared,
                registered,
            });
        }

        Ok(())
    }
}

impl Default for ExamplePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for ExamplePlugin {
    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: Self::NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "An example plugin demonstrating VoltMind's plugin system".to_string(),
            author: "VoltMind Team".to_string(),
            commands: vec![
                GreetCommand::NAME.to_string(),
                CountCommand::NAME.to_string(),
            ],
            entry_point: Self::NAME.to_string(),
        }
    }

    fn initialize(&mut self) -> Result<(), PluginError> {
        let greet: Arc<dyn Command> =
            Arc::new(GreetCommand::with_config(self.config.greet.clone()));
        let count: Arc<dyn Command> =
            Arc::new(CountCommand::with_config(self.config.count.clone()));

        self.commands = [greet, count]
            .into_iter()
            .map(|command| (command.name().to_string(), command))
            .collect();

        self.verify()
    }

    fn commands(&self) -> CommandMap {
        self.commands.clone()
    }
}
