use anyhow::Context;
use clap::Subcommand;
use serde_json::json;
use sqlx::postgres::PgPoolOptions;
use sqlx::Executor;

use crate::cli::OutputFormat;
use crate::database::DatabaseManager;

const SCHEMA_SQL: &str = include_str!("../../../sql/schema.sql");

#[derive(Subcommand)]
pub enum InitCommands {
    #[command(about = "Apply the database schema to the configured database")]
    Schema {
        #[arg(long, help = "Create the database first if it does not exist")]
        create_db: bool,
    },
}

pub async fn handle(cmd: InitCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        InitCommands::Schema { create_db } => {
            let database = DatabaseManager::database_name()?;

            if create_db {
                ensure_database_exists(&database).await?;
            }

            let pool = DatabaseManager::pool()
                .await
                .context("failed to connect to the configured database")?;
            pool.execute(SCHEMA_SQL)
                .await
                .context("failed to apply schema.sql")?;

            match output_format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&json!({
                            "database": database,
                            "schema": "applied"
                        }))?
                    );
                }
                OutputFormat::Text => {
                    println!("Applied schema to database '{}'", database);
                }
            }

            Ok(())
        }
    }
}

/// Connect to the maintenance database and CREATE DATABASE if missing
async fn ensure_database_exists(database: &str) -> anyhow::Result<()> {
    let admin_url = DatabaseManager::admin_connection_string()?;
    let admin_pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&admin_url)
        .await
        .context("failed to connect to the maintenance database")?;

    let exists: Option<(i32,)> = sqlx::query_as("SELECT 1 FROM pg_database WHERE datname = $1")
        .bind(database)
        .fetch_optional(&admin_pool)
        .await?;

    if exists.is_none() {
        let query = format!("CREATE DATABASE {}", quote_identifier(database));
        admin_pool.execute(query.as_str()).await?;
        println!("Created database '{}'", database);
    }

    admin_pool.close().await;
    Ok(())
}

/// Quote SQL identifier to prevent injection
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_identifier("academy"), "\"academy\"");
        assert_eq!(quote_identifier("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn schema_is_embedded() {
        assert!(SCHEMA_SQL.contains("CREATE TABLE IF NOT EXISTS users"));
        assert!(SCHEMA_SQL.contains("CREATE TABLE IF NOT EXISTS enrollments"));
    }
}
