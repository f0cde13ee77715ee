pub mod access;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod stats;
pub mod store;

pub use access::{DataAccess, ExecOutcome};
pub use pool::DbPool;
