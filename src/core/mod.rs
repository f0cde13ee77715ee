pub mod config;
pub mod form;
pub mod log;
pub mod query;
pub mod view;
