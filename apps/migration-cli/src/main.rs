use clap::Parser;
use db_infra::config::db::DbSettings;
use db_infra::orchestrate_migration;
use migration::MigrationCommand;

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Document service database migration tool")]
struct Args {
    /// Migration command to run: up | down | fresh | reset | refresh | status
    command: MigrationCommand,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("migration=info,db_infra=info,sqlx=warn")
        .init();

    let args = Args::parse();

    // Connection parameters come from DB_HOST / DB_PORT / DB_USER / DB_PASSWORD / DB_NAME
    let settings = match DbSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = orchestrate_migration(&settings, args.command).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
