pub mod alias;
pub mod commands;
pub mod config;
pub mod env;
pub mod list;
pub mod state;

pub use state::ShellContext;
