use crate::models::role::Role;

/// Placeholder for "the currently logged-in employee". There is no login:
/// every Employee-role session acts as this id.
pub const SELF_EMPLOYEE_ID: i64 = 1;

/// Who is driving the console: the declared role plus the employee id that
/// self-scoped queries filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub role: Role,
    pub self_id: i64,
}

impl Identity {
    pub fn declared(role: Role) -> Self {
        Self {
            role,
            self_id: SELF_EMPLOYEE_ID,
        }
    }
}
