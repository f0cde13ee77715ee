//! HRCore library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! role-scoped query / form core the binary is built on.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod render;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::Context;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use models::identity::Identity;
use models::role::Role;
use render::OutputFormat;

/// Merge flags over the loaded configuration.
pub fn build_context(cli: &Cli, mut cfg: Config) -> AppResult<Context> {
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db_path(custom_db)
            .to_string_lossy()
            .to_string();
    }

    let role_code = cli.role.as_deref().unwrap_or(&cfg.default_role);
    let role = Role::from_code(role_code).ok_or_else(|| AppError::InvalidRole(role_code.into()))?;

    let format = OutputFormat::from_code(cli.format.as_deref().unwrap_or(&cfg.default_format))?;

    Ok(Context {
        identity: Identity::declared(role),
        format,
        cfg,
    })
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &Context) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::View => cli::commands::view::handle(ctx),
        Commands::Employee { action } => cli::commands::employee::handle(action, ctx),
        Commands::Department { action } => cli::commands::department::handle(action, ctx),
        Commands::Position { action } => cli::commands::position::handle(action, ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, ctx),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // init writes the configuration, it must not depend on reading it
    if matches!(cli.command, Commands::Init) {
        return cli::commands::init::handle(&cli);
    }

    let cfg = Config::load()?;
    let ctx = build_context(&cli, cfg)?;
    dispatch(&cli, &ctx)
}
