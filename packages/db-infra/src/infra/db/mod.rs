pub mod core;

pub use core::{bootstrap_db, connect_db, orchestrate_migration, sanitize_db_url};
