//! Applies the `reports` table schema.
//!
//! Connects to `DATABASE_URL` (read from the environment or `.env`) and hands
//! control to the sea-orm-migration CLI. `migrator up` creates the `reports`
//! table with its JSONB activity columns and the month/worker index;
//! `migrator down` drops it again. `migrator status` lists what has been
//! applied and `migrator fresh` rebuilds from an empty schema.

use fieldreport_db::migration::Migrator;
use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    cli::run_cli(Migrator).await;
}
