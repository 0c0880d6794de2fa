//! Plugin descriptor

use serde::{Deserialize, Serialize};

/// Plugin metadata, as printed by `--manifest`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Plugin name (e.g., "example-plugin")
    pub name: String,

    /// Semantic version
    pub version: String,

    /// Human-readable description
    pub description: String,

    /// Plugin author
    pub author: String,

    /// Names of the commands the plugin provides
    pub commands: Vec<String>,

    /// Executable the host spawns to load the plugin
    pub entry_point: String,
}
