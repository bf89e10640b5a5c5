mod args;
mod commands;
mod config_cmd;
mod form;
mod install;
mod plan;
mod util;

pub use args::Cli;
