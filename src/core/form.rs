//! Entity form controller: one submission in, at most one statement
//! executed, at most one status out.

use crate::core::query::Mutation;
use crate::db::access::DataAccess;
use crate::errors::{AppError, AppResult};
use crate::models::department::NewDepartment;
use crate::models::employee::NewEmployee;
use crate::models::entity::Entity;
use crate::models::identity::Identity;
use crate::models::operation::Operation;
use crate::models::position::NewPosition;
use crate::models::status::Status;
use crate::utils::date;
use std::collections::BTreeMap;

/// Raw form values as typed by the user, keyed by field name.
pub type FormInput = BTreeMap<String, String>;

pub mod fields {
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const EMAIL: &str = "email";
    pub const HIRE_DATE: &str = "hire_date";
    pub const DEPARTMENT: &str = "department";
    pub const POSITION: &str = "position";
    pub const EMPLOYEE_ID: &str = "employee_id";
    pub const NEW_EMAIL: &str = "new_email";
    pub const NAME: &str = "name";
    pub const LOCATION: &str = "location";
    pub const TITLE: &str = "title";
    pub const SALARY_MIN: &str = "salary_min";
    pub const SALARY_MAX: &str = "salary_max";
}

pub struct FormLogic;

impl FormLogic {
    /// Run one submission end to end.
    ///
    /// Returns `None` when there was nothing to do (blank "new value" on an
    /// update): no statement runs and no message should be shown.
    pub fn submit<D: DataAccess + ?Sized>(
        dal: &mut D,
        identity: &Identity,
        entity: Entity,
        op: Operation,
        input: &FormInput,
    ) -> Option<Status> {
        if !identity.role.offers(op) {
            return Some(Status::failure(format!(
                "{} {} is not available for role {}.",
                op.label(),
                entity.label(),
                identity.role
            )));
        }

        let mutation = match Self::parse(entity, op, input) {
            Ok(Some(m)) => m,
            Ok(None) => return None,
            Err(e) => return Some(Status::failure(e.to_string())),
        };

        let statement = mutation.statement();
        let outcome = dal.execute(statement.sql, &statement.params);

        if outcome.success {
            Some(Status::success(success_message(entity, op)))
        } else {
            Some(Status::failure(
                outcome
                    .error
                    .unwrap_or_else(|| fallback_message(entity, op).to_string()),
            ))
        }
    }

    /// Validate raw input into a mutation. `Ok(None)` is the blank-update no-op.
    pub fn parse(entity: Entity, op: Operation, input: &FormInput) -> AppResult<Option<Mutation>> {
        let mutation = match (entity, op) {
            (Entity::Employee, Operation::Create) => Mutation::CreateEmployee(NewEmployee {
                first_name: text(input, fields::FIRST_NAME),
                last_name: text(input, fields::LAST_NAME),
                email: text(input, fields::EMAIL),
                hire_date: hire_date(input)?,
                department: text(input, fields::DEPARTMENT),
                position: text(input, fields::POSITION),
            }),
            (Entity::Employee, Operation::Update) => {
                let email = text(input, fields::NEW_EMAIL);
                if email.trim().is_empty() {
                    return Ok(None);
                }
                Mutation::UpdateEmployeeEmail {
                    employee_id: identifier(input, fields::EMPLOYEE_ID)?,
                    email,
                }
            }
            (Entity::Employee, Operation::Delete) => Mutation::DeleteEmployee {
                employee_id: identifier(input, fields::EMPLOYEE_ID)?,
            },
            (Entity::Department, Operation::Create) => Mutation::CreateDepartment(NewDepartment {
                name: text(input, fields::NAME),
                location: text(input, fields::LOCATION),
            }),
            (Entity::Position, Operation::Create) => Mutation::CreatePosition(NewPosition {
                title: text(input, fields::TITLE),
                salary_min: amount(input, fields::SALARY_MIN)?,
                salary_max: amount(input, fields::SALARY_MAX)?,
                department: text(input, fields::DEPARTMENT),
            }),
            (entity, op) => {
                return Err(AppError::Unsupported(format!(
                    "{} {}",
                    op.label(),
                    entity.label()
                )));
            }
        };

        Ok(Some(mutation))
    }
}

fn text(input: &FormInput, field: &str) -> String {
    input.get(field).cloned().unwrap_or_default()
}

fn raw<'a>(input: &'a FormInput, field: &str) -> &'a str {
    input.get(field).map(|s| s.trim()).unwrap_or("")
}

fn invalid(field: &str, value: &str) -> AppError {
    AppError::InvalidNumber {
        field: field.to_string(),
        value: if value.is_empty() {
            "(missing)".to_string()
        } else {
            value.to_string()
        },
    }
}

/// Row identifiers start at 1.
fn identifier(input: &FormInput, field: &str) -> AppResult<i64> {
    let value = raw(input, field);
    match value.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(invalid(field, value)),
    }
}

fn amount(input: &FormInput, field: &str) -> AppResult<f64> {
    let value = raw(input, field);
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(n),
        _ => Err(invalid(field, value)),
    }
}

/// Blank means today.
fn hire_date(input: &FormInput) -> AppResult<chrono::NaiveDate> {
    let value = raw(input, fields::HIRE_DATE);
    if value.is_empty() {
        return Ok(date::today());
    }
    date::parse_date(value).ok_or_else(|| AppError::InvalidDate(value.to_string()))
}

// ---------------------------
// Status messages
// ---------------------------

fn success_message(entity: Entity, op: Operation) -> String {
    format!("{} {} successfully!", entity.label(), op.past_tense())
}

/// Shown when the statement failed and the driver gave no message.
fn fallback_message(entity: Entity, op: Operation) -> &'static str {
    match (entity, op) {
        (Entity::Employee, Operation::Create) => {
            "Failed to add employee. Ensure department and position exist."
        }
        (Entity::Employee, Operation::Update) => "Update failed. Check employee ID.",
        (Entity::Employee, Operation::Delete) => "Delete failed. Check employee ID.",
        (Entity::Department, Operation::Create) => "Failed to add department.",
        (Entity::Position, Operation::Create) => "Failed to add position. Ensure department exists.",
        _ => "Operation failed.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::access::ExecOutcome;
    use crate::models::role::Role;
    use crate::models::rowset::{RowSet, Value};

    /// Records every statement and answers with a canned outcome.
    struct Recorder {
        outcome: ExecOutcome,
        executed: Vec<(String, Vec<Value>)>,
    }

    impl Recorder {
        fn answering(outcome: ExecOutcome) -> Self {
            Self {
                outcome,
                executed: Vec::new(),
            }
        }
    }

    impl DataAccess for Recorder {
        fn fetch(&mut self, _sql: &str, _params: &[Value]) -> AppResult<RowSet> {
            Ok(RowSet::default())
        }

        fn execute(&mut self, sql: &str, params: &[Value]) -> ExecOutcome {
            self.executed.push((sql.to_string(), params.to_vec()));
            self.outcome.clone()
        }
    }

    fn form(pairs: &[(&str, &str)]) -> FormInput {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn admin() -> Identity {
        Identity::declared(Role::Admin)
    }

    #[test]
    fn blank_update_is_a_silent_no_op() {
        let mut dal = Recorder::answering(ExecOutcome::ok());
        for email in ["", "   "] {
            let input = form(&[(fields::EMPLOYEE_ID, "1"), (fields::NEW_EMAIL, email)]);
            let status = FormLogic::submit(&mut dal, &admin(), Entity::Employee, Operation::Update, &input);
            assert!(status.is_none());
        }
        // blank wins even over an invalid id
        let input = form(&[(fields::EMPLOYEE_ID, "abc")]);
        assert!(FormLogic::submit(&mut dal, &admin(), Entity::Employee, Operation::Update, &input).is_none());
        assert!(dal.executed.is_empty());
    }

    #[test]
    fn update_without_driver_error_uses_fallback() {
        let mut dal = Recorder::answering(ExecOutcome::no_rows());
        let input = form(&[(fields::EMPLOYEE_ID, "999"), (fields::NEW_EMAIL, "x@example.com")]);

        let status = FormLogic::submit(&mut dal, &admin(), Entity::Employee, Operation::Update, &input)
            .unwrap();

        assert!(!status.is_success());
        assert!(status.message.contains("Check employee ID."));
        assert_eq!(dal.executed.len(), 1);
        assert_eq!(
            dal.executed[0].1,
            vec![Value::from("x@example.com"), Value::Integer(999)]
        );
    }

    #[test]
    fn driver_error_is_surfaced_verbatim() {
        let mut dal = Recorder::answering(ExecOutcome::failed("CHECK constraint failed: positions"));
        let input = form(&[
            (fields::TITLE, "Engineer"),
            (fields::SALARY_MIN, "9000"),
            (fields::SALARY_MAX, "100"),
        ]);

        let status = FormLogic::submit(&mut dal, &admin(), Entity::Position, Operation::Create, &input)
            .unwrap();

        assert_eq!(status, Status::failure("CHECK constraint failed: positions"));
    }

    #[test]
    fn success_messages_name_entity_and_operation() {
        let mut dal = Recorder::answering(ExecOutcome::ok());

        let s = FormLogic::submit(
            &mut dal,
            &admin(),
            Entity::Department,
            Operation::Create,
            &form(&[(fields::NAME, "Engineering"), (fields::LOCATION, "Berlin")]),
        );
        assert_eq!(s, Some(Status::success("Department added successfully!")));

        let s = FormLogic::submit(
            &mut dal,
            &admin(),
            Entity::Employee,
            Operation::Delete,
            &form(&[(fields::EMPLOYEE_ID, "4")]),
        );
        assert_eq!(s, Some(Status::success("Employee deleted successfully!")));
    }

    #[test]
    fn create_employee_fallback_mentions_lookups() {
        let mut dal = Recorder::answering(ExecOutcome::no_rows());
        let status = FormLogic::submit(
            &mut dal,
            &admin(),
            Entity::Employee,
            Operation::Create,
            &form(&[(fields::FIRST_NAME, "Ada"), (fields::HIRE_DATE, "2024-01-02")]),
        )
        .unwrap();
        assert_eq!(
            status.message,
            "Failed to add employee. Ensure department and position exist."
        );
    }

    #[test]
    fn numeric_fields_are_validated_before_execution() {
        let mut dal = Recorder::answering(ExecOutcome::ok());

        for id in ["0", "-3", "abc", ""] {
            let status = FormLogic::submit(
                &mut dal,
                &admin(),
                Entity::Employee,
                Operation::Delete,
                &form(&[(fields::EMPLOYEE_ID, id)]),
            )
            .unwrap();
            assert!(!status.is_success(), "id {id:?}");
            assert!(status.message.contains(fields::EMPLOYEE_ID));
        }

        let status = FormLogic::submit(
            &mut dal,
            &admin(),
            Entity::Position,
            Operation::Create,
            &form(&[(fields::TITLE, "x"), (fields::SALARY_MIN, "-1"), (fields::SALARY_MAX, "10")]),
        )
        .unwrap();
        assert!(status.message.contains(fields::SALARY_MIN));

        assert!(dal.executed.is_empty());
    }

    #[test]
    fn bad_hire_date_is_rejected() {
        let mut dal = Recorder::answering(ExecOutcome::ok());
        let status = FormLogic::submit(
            &mut dal,
            &admin(),
            Entity::Employee,
            Operation::Create,
            &form(&[(fields::HIRE_DATE, "02/01/2024")]),
        )
        .unwrap();
        assert!(!status.is_success());
        assert!(status.message.contains("02/01/2024"));
        assert!(dal.executed.is_empty());
    }

    #[test]
    fn blank_hire_date_defaults_to_today() {
        let m = FormLogic::parse(Entity::Employee, Operation::Create, &form(&[]))
            .unwrap()
            .unwrap();
        match m {
            Mutation::CreateEmployee(e) => assert_eq!(e.hire_date, date::today()),
            other => panic!("unexpected mutation {other:?}"),
        }
    }

    #[test]
    fn employee_role_cannot_create_or_delete() {
        let mut dal = Recorder::answering(ExecOutcome::ok());
        let me = Identity::declared(Role::Employee);

        let status = FormLogic::submit(
            &mut dal,
            &me,
            Entity::Employee,
            Operation::Delete,
            &form(&[(fields::EMPLOYEE_ID, "1")]),
        )
        .unwrap();
        assert!(!status.is_success());
        assert!(status.message.contains("not available"));
        assert!(dal.executed.is_empty());

        for entity in Entity::ALL {
            let status = FormLogic::submit(
                &mut dal,
                &me,
                entity,
                Operation::Create,
                &form(&[
                    (fields::FIRST_NAME, "Ada"),
                    (fields::LAST_NAME, "Lovelace"),
                    (fields::EMAIL, "ada@example.com"),
                    (fields::NAME, "Engineering"),
                    (fields::TITLE, "Engineer"),
                    (fields::SALARY_MIN, "1"),
                    (fields::SALARY_MAX, "2"),
                ]),
            )
            .unwrap();
            assert!(!status.is_success());
            assert!(status.message.contains("not available"), "{}", status.message);
        }
        assert!(dal.executed.is_empty());

        let status = FormLogic::submit(
            &mut dal,
            &me,
            Entity::Employee,
            Operation::Update,
            &form(&[(fields::EMPLOYEE_ID, "1"), (fields::NEW_EMAIL, "me@example.com")]),
        )
        .unwrap();
        assert!(status.is_success());
        assert_eq!(dal.executed.len(), 1);
    }

    #[test]
    fn unsupported_pairs_fail_without_executing() {
        let mut dal = Recorder::answering(ExecOutcome::ok());
        let status = FormLogic::submit(
            &mut dal,
            &admin(),
            Entity::Department,
            Operation::Delete,
            &form(&[(fields::EMPLOYEE_ID, "1")]),
        )
        .unwrap();
        assert_eq!(status.message, "Delete Department is not supported.");
        assert!(dal.executed.is_empty());
    }
}
