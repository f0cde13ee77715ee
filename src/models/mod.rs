pub mod department;
pub mod employee;
pub mod entity;
pub mod identity;
pub mod operation;
pub mod position;
pub mod role;
pub mod rowset;
pub mod status;
