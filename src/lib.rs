//! Example Plugin - A demonstration plugin for the VoltMind CLI
//!
//! Provides two toy commands (`greet` and `count`) together with the
//! descriptor and interfaces a VoltMind host loader expects. The same plugin
//! can be embedded as a library or spawned as an executable that speaks the
//! JSON plugin protocol.

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod plugin;
pub mod cli;

pub use commands::{CountCommand, GreetCommand};
pub use console::{Console, Tone};
pub use error::PluginError;
pub use plugin::{Arguments, Command, ExamplePlugin, Plugin, PluginInfo};
