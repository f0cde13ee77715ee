//! Role-scoped query shaping.
//!
//! Every SQL string the console issues lives in this module. Reads are
//! picked from `(Entity, Role)`, writes from a `Mutation` variant. Values
//! are always bound as positional parameters, never interpolated.

use crate::models::department::NewDepartment;
use crate::models::employee::NewEmployee;
use crate::models::entity::Entity;
use crate::models::identity::Identity;
use crate::models::operation::Operation;
use crate::models::position::NewPosition;
use crate::models::rowset::Value;

const EMPLOYEES_ALL: &str = r#"
    SELECT e.employee_id, e.first_name, e.last_name, e.email, e.hire_date,
           d.name AS department, p.title AS position
    FROM employees e
    LEFT JOIN departments d ON e.department_id = d.department_id
    LEFT JOIN positions p ON e.position_id = p.position_id
    ORDER BY e.employee_id
"#;

const EMPLOYEES_SELF: &str = r#"
    SELECT e.employee_id, e.first_name, e.last_name, e.email, e.hire_date,
           d.name AS department, p.title AS position
    FROM employees e
    LEFT JOIN departments d ON e.department_id = d.department_id
    LEFT JOIN positions p ON e.position_id = p.position_id
    WHERE e.employee_id = ?1
"#;

const DEPARTMENTS_ALL: &str = r#"
    SELECT d.department_id, d.name, d.location,
           e.first_name || ' ' || e.last_name AS manager
    FROM departments d
    LEFT JOIN employees e ON d.manager_id = e.employee_id
    ORDER BY d.department_id
"#;

const DEPARTMENTS_SELF: &str = r#"
    SELECT d.department_id, d.name, d.location
    FROM departments d
    JOIN employees e ON d.department_id = e.department_id
    WHERE e.employee_id = ?1
"#;

const POSITIONS_ALL: &str = r#"
    SELECT p.position_id, p.title, p.salary_range_min, p.salary_range_max,
           d.name AS department
    FROM positions p
    LEFT JOIN departments d ON p.department_id = d.department_id
    ORDER BY p.position_id
"#;

const POSITIONS_SELF: &str = r#"
    SELECT p.position_id, p.title, p.salary_range_min, p.salary_range_max,
           d.name AS department
    FROM positions p
    JOIN employees e ON p.position_id = e.position_id
    LEFT JOIN departments d ON p.department_id = d.department_id
    WHERE e.employee_id = ?1
"#;

// Name lookups resolve to NULL on a miss. Duplicate names pick the lowest id.
const INSERT_EMPLOYEE: &str = r#"
    INSERT INTO employees (first_name, last_name, email, hire_date, department_id, position_id)
    VALUES (?1, ?2, ?3, ?4,
            (SELECT department_id FROM departments WHERE name = ?5 ORDER BY department_id LIMIT 1),
            (SELECT position_id FROM positions WHERE title = ?6 ORDER BY position_id LIMIT 1))
"#;

const INSERT_DEPARTMENT: &str = "INSERT INTO departments (name, location) VALUES (?1, ?2)";

const INSERT_POSITION: &str = r#"
    INSERT INTO positions (title, salary_range_min, salary_range_max, department_id)
    VALUES (?1, ?2, ?3,
            (SELECT department_id FROM departments WHERE name = ?4 ORDER BY department_id LIMIT 1))
"#;

const UPDATE_EMPLOYEE_EMAIL: &str = "UPDATE employees SET email = ?1 WHERE employee_id = ?2";

const DELETE_EMPLOYEE: &str = "DELETE FROM employees WHERE employee_id = ?1";

/// SQL text plus the parameters in the exact order its placeholders expect.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: &'static str,
    pub params: Vec<Value>,
}

/// The read issued to fill one panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadQuery {
    pub entity: Entity,
    pub statement: Statement,
}

impl ReadQuery {
    pub fn for_panel(entity: Entity, identity: &Identity) -> Self {
        let sql = match (entity, identity.role.sees_all()) {
            (Entity::Employee, true) => EMPLOYEES_ALL,
            (Entity::Employee, false) => EMPLOYEES_SELF,
            (Entity::Department, true) => DEPARTMENTS_ALL,
            (Entity::Department, false) => DEPARTMENTS_SELF,
            (Entity::Position, true) => POSITIONS_ALL,
            (Entity::Position, false) => POSITIONS_SELF,
        };

        let params = if identity.role.sees_all() {
            Vec::new()
        } else {
            vec![Value::Integer(identity.self_id)]
        };

        Self {
            entity,
            statement: Statement { sql, params },
        }
    }

    /// True when the query only returns rows tied to the caller's own id.
    pub fn is_self_scoped(&self) -> bool {
        !self.statement.params.is_empty()
    }
}

/// Every write the console knows how to issue.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    CreateEmployee(NewEmployee),
    CreateDepartment(NewDepartment),
    CreatePosition(NewPosition),
    UpdateEmployeeEmail { employee_id: i64, email: String },
    DeleteEmployee { employee_id: i64 },
}

impl Mutation {
    pub fn entity(&self) -> Entity {
        match self {
            Mutation::CreateEmployee(_)
            | Mutation::UpdateEmployeeEmail { .. }
            | Mutation::DeleteEmployee { .. } => Entity::Employee,
            Mutation::CreateDepartment(_) => Entity::Department,
            Mutation::CreatePosition(_) => Entity::Position,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Mutation::CreateEmployee(_)
            | Mutation::CreateDepartment(_)
            | Mutation::CreatePosition(_) => Operation::Create,
            Mutation::UpdateEmployeeEmail { .. } => Operation::Update,
            Mutation::DeleteEmployee { .. } => Operation::Delete,
        }
    }

    pub fn statement(&self) -> Statement {
        match self {
            Mutation::CreateEmployee(e) => Statement {
                sql: INSERT_EMPLOYEE,
                params: vec![
                    Value::from(e.first_name.as_str()),
                    Value::from(e.last_name.as_str()),
                    Value::from(e.email.as_str()),
                    Value::from(e.hire_date.format("%Y-%m-%d").to_string()),
                    Value::from(e.department.as_str()),
                    Value::from(e.position.as_str()),
                ],
            },
            Mutation::CreateDepartment(d) => Statement {
                sql: INSERT_DEPARTMENT,
                params: vec![Value::from(d.name.as_str()), Value::from(d.location.as_str())],
            },
            Mutation::CreatePosition(p) => Statement {
                sql: INSERT_POSITION,
                params: vec![
                    Value::from(p.title.as_str()),
                    Value::Real(p.salary_min),
                    Value::Real(p.salary_max),
                    Value::from(p.department.as_str()),
                ],
            },
            Mutation::UpdateEmployeeEmail { employee_id, email } => Statement {
                sql: UPDATE_EMPLOYEE_EMAIL,
                params: vec![Value::from(email.as_str()), Value::Integer(*employee_id)],
            },
            Mutation::DeleteEmployee { employee_id } => Statement {
                sql: DELETE_EMPLOYEE,
                params: vec![Value::Integer(*employee_id)],
            },
        }
    }
}
