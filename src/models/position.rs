/// Validated input of the "add position" form. Salary bounds are already
/// checked to be non-negative; their ordering is left to the database.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPosition {
    pub title: String,
    pub salary_min: f64,
    pub salary_max: f64,
    pub department: String,
}
