//! One-off tool to provision an admin account.
//!
//! Usage: create_admin <email> <password>

use dotenvy::dotenv;

use nexus_site::application::{password::hash_password, validators::normalize_email};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let mut args = std::env::args().skip(1);
    let (Some(email), Some(password)) = (args.next(), args.next()) else {
        eprintln!("Usage: create_admin <email> <password>");
        std::process::exit(2);
    };

    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;
    let pool = nexus_site::infra::db::init_db(&database_url).await?;

    let email = normalize_email(&email);
    let password_hash = hash_password(password).await?;

    let result = sqlx::query(
        "INSERT INTO admins (id, email, password_hash) VALUES ($1, $2, $3) \
         ON CONFLICT (email) DO NOTHING",
    )
    .bind(uuid::Uuid::new_v4())
    .bind(&email)
    .bind(&password_hash)
    .execute(&pool)
    .await?;

    if result.rows_affected() == 1 {
        println!("Admin account created for {email}");
    } else {
        println!("An admin with email {email} already exists, nothing changed");
    }

    Ok(())
}
