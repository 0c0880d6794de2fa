//! `greet` command
//!
//! Greets someone in one of three styles:
//! - formal: "Good day, {name}. I hope you are well."
//! - casual: "Hey {name}! What's up?"
//! - friendly (default): "Hello there, {name}! Nice to see you!"

use serde_json::Value;

use crate::config::{GreetConfig, GreetStyle};
use crate::console::{Console, Tone};
use crate::error::PluginError;
use crate::plugin::{Arguments, BaseCommand, Command};

const SIGNATURE: &str = "This message is brought to you by the Example Plugin!";

/// Greets with a custom message
pub struct GreetCommand {
    base: BaseCommand,
    config: GreetConfig,
}

impl GreetCommand {
    pub const NAME: &'static str = "greet";

    pub fn new() -> Self {
        Self::with_config(GreetConfig::default())
    }

    pub fn with_config(config: GreetConfig) -> Self {
        Self {
            base: BaseCommand::new(
                Self::NAME,
                "Greet with a custom message from the example plugin",
            ),
            config,
        }
    }

    /// Renders the greeting template for a style
    pub fn message(name: &str, style: GreetStyle) -> String {
        match style {
            GreetStyle::Formal => format!("Good day, {}. I hope you are well.", name),
            GreetStyle::Casual => format!("Hey {}! What's up?", name),
            GreetStyle::Friendly => format!("Hello there, {}! Nice to see you!", name),
        }
    }

    fn resolve_name(&self, args: &Arguments) -> String {
        match args.get("name") {
            None | Some(Value::Null) => self.config.default_name.clone(),
            Some(Value::String(name)) => name.clone(),
            Some(other) => other.to_string(),
        }
    }

    fn resolve_style(&self, args: &Arguments) -> GreetStyle {
        match args.get("style") {
            None | Some(Value::Null) => self.config.default_style,
            Some(Value::String(tag)) => GreetStyle::from_tag(tag),
            Some(_) => GreetStyle::Friendly,
        }
    }
}

impl Default for GreetCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for GreetCommand {
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
        let name = self.resolve_name(args);
        let style = self.resolve_style(args);
        let message = Self::message(&name, style);

        console.styled(Tone::Emphasis, &format!("🤖 {}", message))?;
        console.styled(Tone::Muted, SIGNATURE)?;

        Ok(Some(Value::String(message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn greet(args: Arguments) -> (Option<Value>, Vec<String>) {
        let mut console = Console::buffered();
        let result = GreetCommand::new().execute(&args, &mut console).unwrap();
        (result, console.captured_lines())
    }

    #[test]
    fn default_greeting() {
        let (result, lines) = greet(Arguments::new());

        assert_eq!(result, Some(json!("Hello there, Friend! Nice to see you!")));
        assert_eq!(
            lines,
            vec![
                "🤖 Hello there, Friend! Nice to see you!",
                "This message is brought to you by the Example Plugin!",
            ]
        );
    }

    #[test]
    fn formal_greeting() {
        let (result, _) = greet(Arguments::new().with("name", "Ada").with("style", "formal"));
        assert_eq!(result, Some(json!("Good day, Ada. I hope you are well.")));
    }

    #[test]
    fn casual_greeting() {
        let (result, _) = greet(Arguments::new().with("name", "Ada").with("style", "casual"));
        assert_eq!(result, Some(json!("Hey Ada! What's up?")));
    }

    #[test]
    fn unknown_style_falls_back_to_friendly() {
        let (result, _) = greet(Arguments::new().with("name", "Ada").with("style", "pirate"));
        assert_eq!(result, Some(json!("Hello there, Ada! Nice to see you!")));

        let (result, _) = greet(Arguments::new().with("style", 7));
        assert_eq!(result, Some(json!("Hello there, Friend! Nice to see you!")));
    }

    #[test]
    fn non_string_name_uses_json_text() {
        let (result, _) = greet(Arguments::new().with("name", 42).with("style", "casual"));
        assert_eq!(result, Some(json!("Hey 42! What's up?")));
    }

    #[test]
    fn configured_defaults_apply() {
        let command = GreetCommand::with_config(GreetConfig {
            default_name: "Team".to_string(),
            default_style: GreetStyle::Formal,
        });
        let mut console = Console::buffered();

        let result = command.execute(&Arguments::new(), &mut console).unwrap();
        assert_eq!(result, Some(json!("Good day, Team. I hope you are well.")));
    }

    #[test]
    fn name_and_help() {
        let command = GreetCommand::new();
        assert_eq!(command.name(), "greet");
        assert_eq!(
            command.help(),
            "Greet with a custom message from the example plugin"
        );
    }

    proptest! {
        #[test]
        fn returned_text_matches_template(
            name in "[A-Za-z][A-Za-z .'-]{0,30}",
            style in prop::sample::select(vec!["formal", "casual", "friendly"]),
        ) {
            let (result, lines) = greet(Arguments::new().with("name", name.clone()).with("style", style));

            let expected = match style {
                "formal" => format!("Good day, {}. I hope you are well.", name),
                "casual" => format!("Hey {}! What's up?", name),
                _ => format!("Hello there, {}! Nice to see you!", name),
            };
            prop_assert_eq!(result, Some(Value::String(expected.clone())));
            prop_assert_eq!(&lines[0], &format!("🤖 {}", expected));
        }
    }
}
