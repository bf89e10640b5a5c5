//! Configuration for the wayfare travel planner.
//!
//! Settings are layered in this order:
//! - built-in defaults
//! - the JSON file at `~/.wayfare/config`
//! - environment variables (a `.env` file is loaded into the environment first)
//!
//! Only the hosted backend has a required setting: its API key.

mod builder;
mod constants;
mod defaults;
mod environment;
mod loader;
mod types;
mod validation;

pub use types::{
    BackendKind, Config, ContextSettings, DaemonSettings, HostedSettings, HttpSettings,
    PipelineSettings,
};

#[cfg(test)]
pub(crate) use constants::{
    DEFAULT_CONTEXT_BASE_URL, DEFAULT_DAEMON_MODEL, DEFAULT_HOSTED_BASE_URL, DEFAULT_HOSTED_MODEL,
};
