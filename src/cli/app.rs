//! Main CLI application structure

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use crate::console::Console;
use crate::plugin::{serve, Arguments, ExamplePlugin, Plugin};

#[derive(Parser)]
#[command(name = "example-plugin")]
#[command(author, version, about = "Example plugin for the VoltMind CLI")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print the plugin manifest as JSON and exit
    #[arg(long)]
    pub manifest: bool,

    /// Path to a TOML configuration file
    #[arg(long, global = true, env = "EXAMPLE_PLUGIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Disable colored console output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Without a command, serve protocol requests from stdin
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show plugin metadata
    Info,

    /// List available commands
    List,

    /// Run a command
    Call {
        /// Command name
        command: String,

        /// Keyword arguments as a JSON object
        params: Option<String>,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("Example plugin starting");

    // Manifest never depends on configuration
    if cli.manifest {
        let manifest = serde_json::to_string(&ExamplePlugin::new().info())
            .context("Failed to serialize manifest")?;
        println!("{}", manifest);
        return Ok(());
    }

    let plugin = ExamplePlugin::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let config = plugin.config();
    let color = config.console.color && !cli.no_color;
    output.verbose_ctx(
        "config",
        &format!(
            "greet.default_style={}, count.limit={}, console.color={}",
            config.greet.default_style.as_str(),
            config.count.limit,
            config.console.color
        ),
    );
    output.verbose_ctx("init", &format!("Registered {} commands", plugin.commands().len()));

    match cli.command {
        None => serve_stdio(&plugin, &output, color)?,
        Some(Commands::Info) => info(&plugin, &output),
        Some(Commands::List) => list(&plugin, &output),
        Some(Commands::Call { command, params }) => {
            call(&plugin, &output, color, &command, params.as_deref())?
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}

/// Answers protocol requests on stdin; console output goes to stderr
fn serve_stdio(plugin: &ExamplePlugin, output: &Output, color: bool) -> Result<()> {
    let mut console = Console::stderr(color && io::stderr().is_terminal());
    let stdin = io::stdin();

    let handled = serve(plugin, stdin.lock(), io::stdout().lock(), &mut console)
        .context("Failed to serve plugin requests")?;

    output.verbose_ctx("serve", &format!("Answered {} requests", handled));
    Ok(())
}

fn info(plugin: &ExamplePlugin, output: &Output) {
    let info = plugin.info();

    if output.is_json() {
        output.data(&info);
    } else {
        println!("Plugin: {}", info.name);
        println!("Version: {}", info.version);
        println!("Description: {}", info.description);
        println!("Author: {}", info.author);
        println!("Commands: {}", info.commands.join(", "));
        println!("Entry point: {}", info.entry_point);
    }
}

fn list(plugin: &ExamplePlugin, output: &Output) {
    let commands = plugin.ordered_commands();

    if output.is_json() {
        let items: Vec<_> = commands
            .iter()
            .map(|c| serde_json::json!({ "name": c.name(), "help": c.help() }))
            .collect();
        output.data(&items);
    } else {
        println!("Available commands:");
        println!("{:<12} HELP", "NAME");
        println!("{}", "-".repeat(70));
        for command in commands {
            println!("{:<12} {}", command.name(), command.help());
        }
    }
}

fn call(
    plugin: &ExamplePlugin,
    output: &Output,
    color: bool,
    name: &str,
    params: Option<&str>,
) -> Result<()> {
    if plugin.get(name).is_none() {
        anyhow::bail!("Unknown command: {}", name);
    }

    let args = match params {
        Some(raw) => {
            let value: serde_json::Value =
                serde_json::from_str(raw).context("Failed to parse params as JSON")?;
            Arguments::from_value(value)?
        }
        None => Arguments::new(),
    };
    output.verbose_ctx("call", &format!("Running '{}' with {:?}", name, args));

    // Keep stdout clean for the JSON result
    let mut console = if output.is_json() {
        Console::stderr(color && io::stderr().is_terminal())
    } else {
        Console::stdout(color && io::stdout().is_terminal())
    };

    let result = plugin
        .invoke(name, &args, &mut console)
        .with_context(|| format!("Command '{}' failed", name))?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "command": name,
            "result": result,
        }));
    } else if result.is_none() {
        output.verbose_ctx("call", &format!("'{}' returned no result", name));
    }

    Ok(())
}
