use crate::models::operation::Operation;
use serde::Serialize;
use std::fmt;

/// Self-declared console role. Nothing verifies it: it only shapes
/// which queries are issued and which forms are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Admin,
    HrManager,
    Employee,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::HrManager => "HR Manager",
            Role::Employee => "Employee",
        }
    }

    /// Accepts the CLI codes as well as the display labels, case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "hr-manager" | "hr_manager" | "hrmanager" | "hr manager" | "hr" => Some(Role::HrManager),
            "employee" => Some(Role::Employee),
            _ => None,
        }
    }

    /// Admin and HR Manager read full listings; Employee only sees rows
    /// tied to its own identifier.
    pub fn sees_all(&self) -> bool {
        matches!(self, Role::Admin | Role::HrManager)
    }

    /// Whether the form for `op` is offered to this role.
    pub fn offers(&self, op: Operation) -> bool {
        match op {
            Operation::Update => true,
            Operation::Create | Operation::Delete => self.sees_all(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_and_labels() {
        assert_eq!(Role::from_code("admin"), Some(Role::Admin));
        assert_eq!(Role::from_code("HR Manager"), Some(Role::HrManager));
        assert_eq!(Role::from_code("hr-manager"), Some(Role::HrManager));
        assert_eq!(Role::from_code(" Employee "), Some(Role::Employee));
        assert_eq!(Role::from_code("root"), None);
    }

    #[test]
    fn employee_is_only_offered_updates() {
        assert!(Role::Employee.offers(Operation::Update));
        assert!(!Role::Employee.offers(Operation::Create));
        assert!(!Role::Employee.offers(Operation::Delete));

        for role in [Role::Admin, Role::HrManager] {
            assert!(role.offers(Operation::Create));
            assert!(role.offers(Operation::Update));
            assert!(role.offers(Operation::Delete));
        }
    }
}
