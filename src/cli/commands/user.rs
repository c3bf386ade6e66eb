use anyhow::Context;
use clap::Subcommand;
use serde_json::json;

use crate::auth::password;
use crate::cli::OutputFormat;
use crate::database::models::user::ROLE_ADMIN;
use crate::database::store::user::{NewUser, UserStore};
use crate::database::DatabaseManager;

#[derive(Subcommand)]
pub enum UserCommands {
    #[command(about = "Create a local admin user, or promote an existing one")]
    CreateAdmin {
        #[arg(help = "Username for the admin account")]
        username: String,

        #[arg(help = "Password for the admin account")]
        password: String,
    },
}

pub async fn handle(cmd: UserCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        UserCommands::CreateAdmin { username, password } => {
            let pool = DatabaseManager::pool()
                .await
                .context("failed to connect to the configured database")?;

            let hash = password::hash_password(&password)
                .map_err(|e| anyhow::anyhow!("failed to hash password: {}", e))?;

            let user = match UserStore::by_username(&pool, &username).await? {
                Some(existing) => UserStore::promote_to_admin(&pool, existing.id, &hash)
                    .await?
                    .context("user vanished during promotion")?,
                None => {
                    UserStore::insert(
                        &pool,
                        NewUser {
                            username: username.clone(),
                            auth_type: "local".to_string(),
                            password: Some(hash),
                            kakao_id: None,
                            authorizations: Some(json!({ "role": ROLE_ADMIN })),
                        },
                    )
                    .await?
                }
            };

            match output_format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&json!({
                            "id": user.id,
                            "username": user.username,
                            "role": user.role(),
                        }))?
                    );
                }
                OutputFormat::Text => {
                    println!("Admin user '{}' ready (id: {})", user.username, user.id);
                }
            }

            Ok(())
        }
    }
}
