pub mod commands;
pub mod parser;

use crate::config::Config;
use crate::models::identity::Identity;
use crate::render::OutputFormat;

/// Everything a command needs after flags and configuration are merged.
pub struct Context {
    pub cfg: Config,
    pub identity: Identity,
    pub format: OutputFormat,
}
