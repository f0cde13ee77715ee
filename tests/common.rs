#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use hrcore::core::form::{FormInput, FormLogic, fields};
use hrcore::db::initialize::init_db;
use hrcore::db::pool::DbPool;
use hrcore::models::entity::Entity;
use hrcore::models::identity::Identity;
use hrcore::models::operation::Operation;
use hrcore::models::role::Role;
use hrcore::models::status::Status;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hrc() -> Command {
    cargo_bin_cmd!("hrcore")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hrcore.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the schema through the CLI, without touching the user's config
pub fn init_cli_db(db_path: &str) {
    hrc()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Migrated in-memory database for library-level tests
pub fn memory_pool() -> DbPool {
    let mut pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&mut pool.conn).expect("run migrations");
    pool
}

pub fn form(pairs: &[(&str, &str)]) -> FormInput {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn admin() -> Identity {
    Identity::declared(Role::Admin)
}

pub fn submit(
    pool: &mut DbPool,
    identity: &Identity,
    entity: Entity,
    op: Operation,
    pairs: &[(&str, &str)],
) -> Option<Status> {
    FormLogic::submit(pool, identity, entity, op, &form(pairs))
}

pub fn add_department(pool: &mut DbPool, name: &str, location: &str) {
    let status = submit(
        pool,
        &admin(),
        Entity::Department,
        Operation::Create,
        &[(fields::NAME, name), (fields::LOCATION, location)],
    )
    .expect("status");
    assert!(status.is_success(), "{}", status.message);
}

pub fn add_position(pool: &mut DbPool, title: &str, min: &str, max: &str, department: &str) {
    let status = submit(
        pool,
        &admin(),
        Entity::Position,
        Operation::Create,
        &[
            (fields::TITLE, title),
            (fields::SALARY_MIN, min),
            (fields::SALARY_MAX, max),
            (fields::DEPARTMENT, department),
        ],
    )
    .expect("status");
    assert!(status.is_success(), "{}", status.message);
}

pub fn add_employee(pool: &mut DbPool, first: &str, last: &str, department: &str, position: &str) {
    let email = format!("{}.{}@example.com", first, last).to_lowercase();
    let status = submit(
        pool,
        &admin(),
        Entity::Employee,
        Operation::Create,
        &[
            (fields::FIRST_NAME, first),
            (fields::LAST_NAME, last),
            (fields::EMAIL, &email),
            (fields::HIRE_DATE, "2024-01-15"),
            (fields::DEPARTMENT, department),
            (fields::POSITION, position),
        ],
    )
    .expect("status");
    assert!(status.is_success(), "{}", status.message);
}
