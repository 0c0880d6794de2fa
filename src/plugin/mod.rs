//! # Plugin Contract
//!
//! The interfaces a VoltMind host loader expects from a plugin, and the
//! example plugin that satisfies them.
//!
//! ## Host Contract
//!
//! A host must be able to:
//! 1. Instantiate the plugin
//! 2. Call [`Plugin::initialize`]
//! 3. Query metadata via [`Plugin::info`]
//! 4. Query commands via [`Plugin::commands`] and invoke them by name with
//!    keyword arguments
//!
//! ## Protocol
//!
//! When loaded as an executable, the plugin answers JSON requests on stdin:
//!
//! ```text
//! Host                          Plugin Binary
//!  │                               │
//!  ├── Spawn: example-plugin       │
//!  │                               │
//!  ├── Stdin: {"operation": "greet", "params": {"name": "Ada"}}
//!  │                               │
//!  └── Stdout: {"success": true, "data": "Hello there, Ada! Nice to see you!"}
//! ```
//!
//! `example-plugin --manifest` prints the [`PluginInfo`] descriptor.
//!
//! ## Key Types
//!
//! - [`PluginInfo`] - Plugin descriptor
//! - [`Command`] - Trait for a named command with help text
//! - [`Plugin`] - Trait for a plugin aggregating commands
//! - [`ExamplePlugin`] - The example plugin
//! - [`PluginRequest`] / [`PluginResponse`] - Protocol messages

mod command;
mod info;
mod protocol;
mod registry;

pub use command::{Arguments, BaseCommand, Command};
pub use info::PluginInfo;
pub use protocol::{handle, serve, PluginRequest, PluginResponse};
pub use registry::{CommandMap, ExamplePlugin, Plugin};
