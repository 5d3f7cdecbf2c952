//! Schema migration command.
//!
//! Idempotent: creates the quotes table and index only when missing.

use quotebook_storage::PgStorage;

pub(crate) async fn run(database_url: &str) -> anyhow::Result<()> {
    let storage = PgStorage::new(database_url).await?;
    storage.close().await;
    println!("Migration complete!");
    Ok(())
}
