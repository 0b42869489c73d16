//! REPL (Read-Eval-Print Loop) module
//!
//! ## Module Structure
//!
//! - **command.rs**: Command definitions and conversion to AppEvent
//! - **parser.rs**: String parsing for `@` and `:` prefixes
//! - **input.rs**: Line loop over stdin/stdout
//!
//! ## Usage in main.rs
//!
//! ```rust,ignore
//! let stdin = std::io::stdin();
//! lexmood::repl::input::run(&mut app, stdin.lock(), std::io::stdout())?;
//! ```

pub mod command;
pub mod input;
pub mod parser;

pub use command::ReplCommand;
pub use parser::parse_repl_input;
