use crate::cli::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{error, success};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:\n");
            ConfigLogic::print(&ctx.cfg)?;
        }

        if *edit_config {
            let path = Config::config_file();
            match ConfigLogic::edit(&path, editor.as_deref()) {
                Ok(used) => success(format!(
                    "Configuration file edited successfully using '{}'",
                    used
                )),
                Err(e) => error(e),
            }
        }
    }

    Ok(())
}
