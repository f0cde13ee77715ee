use crate::cli::Context;
use crate::cli::commands::{form_of, show_panel, submit};
use crate::cli::parser::EmployeeAction;
use crate::core::form::fields;
use crate::errors::AppResult;
use crate::models::entity::Entity;
use crate::models::operation::Operation;

pub fn handle(action: &EmployeeAction, ctx: &Context) -> AppResult<()> {
    match action {
        EmployeeAction::List => show_panel(ctx, Entity::Employee),

        EmployeeAction::Add {
            first_name,
            last_name,
            email,
            hire_date,
            department,
            position,
        } => {
            let input = form_of(&[
                (fields::FIRST_NAME, Some(first_name.as_str())),
                (fields::LAST_NAME, Some(last_name.as_str())),
                (fields::EMAIL, Some(email.as_str())),
                (fields::HIRE_DATE, hire_date.as_deref()),
                (fields::DEPARTMENT, department.as_deref()),
                (fields::POSITION, position.as_deref()),
            ]);
            submit(ctx, Entity::Employee, Operation::Create, &input)
        }

        EmployeeAction::Update { id, email } => {
            let input = form_of(&[
                (fields::EMPLOYEE_ID, Some(id.as_str())),
                (fields::NEW_EMAIL, email.as_deref()),
            ]);
            submit(ctx, Entity::Employee, Operation::Update, &input)
        }

        EmployeeAction::Delete { id } => {
            let input = form_of(&[(fields::EMPLOYEE_ID, Some(id.as_str()))]);
            submit(ctx, Entity::Employee, Operation::Delete, &input)
        }
    }
}
