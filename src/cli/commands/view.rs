use crate::cli::Context;
use crate::cli::commands::{open_pool, print_role_banner};
use crate::core::view::ViewLogic;
use crate::errors::AppResult;
use crate::render;

/// Handle the `view` command: every panel, errors shown in place.
pub fn handle(ctx: &Context) -> AppResult<()> {
    let mut pool = open_pool(ctx)?;
    let panels = ViewLogic::compose(&mut pool, &ctx.identity);

    print_role_banner(ctx);
    print!("{}", render::render_panels(&panels, ctx.format)?);
    Ok(())
}
