use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Entity {
    Employee,
    Department,
    Position,
}

impl Entity {
    /// Panel order used by the view.
    pub const ALL: [Entity; 3] = [Entity::Employee, Entity::Department, Entity::Position];

    pub fn label(&self) -> &'static str {
        match self {
            Entity::Employee => "Employee",
            Entity::Department => "Department",
            Entity::Position => "Position",
        }
    }

    /// Panel title (plural).
    pub fn title(&self) -> &'static str {
        match self {
            Entity::Employee => "Employees",
            Entity::Department => "Departments",
            Entity::Position => "Positions",
        }
    }

    /// Backing table name
    pub fn table(&self) -> &'static str {
        match self {
            Entity::Employee => "employees",
            Entity::Department => "departments",
            Entity::Position => "positions",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
