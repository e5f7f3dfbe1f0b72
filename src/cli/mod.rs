//! Terminal front-end: argument parsing and the stdin/stdout console.

pub mod args;
pub mod console;

pub use args::Cli;
pub use console::StdConsole;
