//! Command-line front end: argument parsing and one handler per subcommand.

pub mod commands;
pub mod parser;
