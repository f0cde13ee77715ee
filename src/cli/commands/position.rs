use crate::cli::Context;
use crate::cli::commands::{form_of, show_panel, submit};
use crate::cli::parser::PositionAction;
use crate::core::form::fields;
use crate::errors::AppResult;
use crate::models::entity::Entity;
use crate::models::operation::Operation;

pub fn handle(action: &PositionAction, ctx: &Context) -> AppResult<()> {
    match action {
        PositionAction::List => show_panel(ctx, Entity::Position),

        PositionAction::Add {
            title,
            salary_min,
            salary_max,
            department,
        } => {
            let input = form_of(&[
                (fields::TITLE, Some(title.as_str())),
                (fields::SALARY_MIN, Some(salary_min.as_str())),
                (fields::SALARY_MAX, Some(salary_max.as_str())),
                (fields::DEPARTMENT, department.as_deref()),
            ]);
            submit(ctx, Entity::Position, Operation::Create, &input)
        }
    }
}
