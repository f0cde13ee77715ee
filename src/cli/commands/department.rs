use crate::cli::Context;
use crate::cli::commands::{form_of, show_panel, submit};
use crate::cli::parser::DepartmentAction;
use crate::core::form::fields;
use crate::errors::AppResult;
use crate::models::entity::Entity;
use crate::models::operation::Operation;

pub fn handle(action: &DepartmentAction, ctx: &Context) -> AppResult<()> {
    match action {
        DepartmentAction::List => show_panel(ctx, Entity::Department),

        DepartmentAction::Add { name, location } => {
            let input = form_of(&[
                (fields::NAME, Some(name.as_str())),
                (fields::LOCATION, Some(location.as_str())),
            ]);
            submit(ctx, Entity::Department, Operation::Create, &input)
        }
    }
}
