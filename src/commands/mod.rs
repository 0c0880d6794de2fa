//! # Commands
//!
//! The two commands provided by the example plugin.
//!
//! | Command | Arguments | Returns |
//! |---------|-----------|---------|
//! | `greet` | `name` (default "Friend"), `style` (`formal`, `casual`, `friendly`) | Greeting text |
//! | `count` | `max` (default 5, clamped to 100) | The bound counted to |

mod count;
mod greet;

pub use count::CountCommand;
pub use greet::GreetCommand;
