pub mod config;
pub mod db;
pub mod department;
pub mod employee;
pub mod init;
pub mod log;
pub mod position;
pub mod view;

use crate::cli::Context;
use crate::core::form::{FormInput, FormLogic};
use crate::core::view::{Panel, ViewLogic};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entity::Entity;
use crate::models::operation::Operation;
use crate::models::status::Status;
use crate::render::{self, OutputFormat};
use crate::ui::messages;
use std::path::Path;

/// Open the configured database; only `init` may create it.
pub(crate) fn open_pool(ctx: &Context) -> AppResult<DbPool> {
    let path = &ctx.cfg.database;
    if !Path::new(path).exists() {
        return Err(AppError::DatabaseNotFound(path.clone()));
    }
    Ok(DbPool::open_existing(path)?)
}

/// Collect `(field, value)` pairs into a form, skipping absent optionals.
pub(crate) fn form_of(pairs: &[(&str, Option<&str>)]) -> FormInput {
    pairs
        .iter()
        .filter_map(|(k, v)| v.map(|v| (k.to_string(), v.to_string())))
        .collect()
}

/// Shown above tables, like the role line at the top of the console.
pub(crate) fn print_role_banner(ctx: &Context) {
    if ctx.format == OutputFormat::Table {
        messages::info(format!("Logged in as: {}", ctx.identity.role));
    }
}

pub(crate) fn show_panel(ctx: &Context, entity: Entity) -> AppResult<()> {
    let mut pool = open_pool(ctx)?;
    let Panel { content, .. } = ViewLogic::panel(&mut pool, &ctx.identity, entity);

    print_role_banner(ctx);
    let rows = content.map_err(AppError::Rejected)?;
    print!("{}", render::render_rowset(&rows, ctx.format)?);
    Ok(())
}

pub(crate) fn submit(ctx: &Context, entity: Entity, op: Operation, input: &FormInput) -> AppResult<()> {
    let mut pool = open_pool(ctx)?;
    report(FormLogic::submit(&mut pool, &ctx.identity, entity, op, input))
}

/// Successes print; failures end the command with a non-zero exit,
/// printed once by `main`.
pub(crate) fn report(status: Option<Status>) -> AppResult<()> {
    match status {
        None => Ok(()),
        Some(s) if s.is_success() => {
            messages::success(&s.message);
            Ok(())
        }
        Some(s) => Err(AppError::Rejected(s.message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_status_becomes_rejection() {
        let err = report(Some(Status::failure("Delete failed. Check employee ID."))).unwrap_err();
        assert!(matches!(err, AppError::Rejected(ref m) if m == "Delete failed. Check employee ID."));
        assert_eq!(err.to_string(), "Delete failed. Check employee ID.");
    }

    #[test]
    fn success_and_no_op_are_ok() {
        assert!(report(Some(Status::success("Employee updated successfully!"))).is_ok());
        assert!(report(None).is_ok());
    }
}
