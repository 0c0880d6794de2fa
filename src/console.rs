//! Styled line output for commands
//!
//! Commands never print directly. They write whole lines through a
//! [`Console`], which decides where the text goes and whether it is colored.

use std::io::{self, Write};

use crossterm::style::Stylize;

/// Visual tone of a console line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    /// Bold blue
    Emphasis,
    /// Dimmed
    Muted,
    /// Red
    Error,
    /// Yellow
    Warning,
}

enum Sink {
    Stdout,
    Stderr,
    Buffer(Vec<u8>),
    Writer(Box<dyn Write + Send>),
}

/// Line-oriented output sink
pub struct Console {
    sink: Sink,
    color: bool,
}

impl Console {
    /// Console writing to stdout
    pub fn stdout(color: bool) -> Self {
        Self {
            sink: Sink::Stdout,
            color,
        }
    }

    /// Console writing to stderr
    pub fn stderr(color: bool) -> Self {
        Self {
            sink: Sink::Stderr,
            color,
        }
    }

    /// Console capturing output in memory, uncolored unless [`Console::with_color`] is used
    pub fn buffered() -> Self {
        Self {
            sink: Sink::Buffer(Vec::new()),
            color: false,
        }
    }

    /// Console writing to an arbitrary sink
    pub fn writer(sink: impl Write + Send + 'static, color: bool) -> Self {
        Self {
            sink: Sink::Writer(Box::new(sink)),
            color,
        }
    }

    /// Overrides colorization
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Returns true if lines are colorized
    pub fn is_colored(&self) -> bool {
        self.color
    }

    /// Writes a plain line
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        self.styled(Tone::Plain, text)
    }

    /// Writes a line in the given tone
    pub fn styled(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        let rendered = if self.color {
            match tone {
                Tone::Plain => text.to_string(),
                Tone::Emphasis => text.bold().blue().to_string(),
                Tone::Muted => text.dim().to_string(),
                Tone::Error => text.red().to_string(),
                Tone::Warning => text.yellow().to_string(),
            }
        } else {
            text.to_string()
        };

        match &mut self.sink {
            Sink::Stdout => writeln!(io::stdout().lock(), "{}", rendered),
            Sink::Stderr => writeln!(io::stderr().lock(), "{}", rendered),
            Sink::Buffer(buf) => writeln!(buf, "{}", rendered),
            Sink::Writer(w) => writeln!(w, "{}", rendered),
        }
    }

    /// Returns captured text for a buffered console
    pub fn captured(&self) -> Option<String> {
        match &self.sink {
            Sink::Buffer(buf) => Some(String::from_utf8_lossy(buf).into_owned()),
            _ => None,
        }
    }

    /// Returns captured lines for a buffered console
    pub fn captured_lines(&self) -> Vec<String> {
        self.captured()
            .map(|text| text.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
