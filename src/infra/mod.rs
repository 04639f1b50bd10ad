use crate::adapters::persistence::PostgresPersistence;
use crate::infra::db::init_db;

pub mod app;
pub mod config;
pub mod db;
pub mod sessions;
pub mod setup;

pub async fn postgres_persistence(database_url: &str) -> anyhow::Result<PostgresPersistence> {
    let pool = init_db(database_url).await?;
    Ok(PostgresPersistence::new(pool))
}
