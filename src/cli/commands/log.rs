use crate::cli::Context;
use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = open_pool(ctx)?;
        LogLogic::print_log(&pool)?;
    }

    Ok(())
}
