use chrono::NaiveDate;

/// Validated input of the "add employee" form.
///
/// `department` and `position` are the names typed by the user; they are
/// resolved to ids inside the insert statement itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub hire_date: NaiveDate,
    pub department: String,
    pub position: String,
}
