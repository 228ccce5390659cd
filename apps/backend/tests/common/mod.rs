#![allow(dead_code)]

// Logging is auto-installed for every test binary that declares `mod common;`
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

pub const TEST_SECRET: &str = "test_secret_key_for_integration_tests";
pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "1234";
