use crate::cli::build_store;
use crate::config::AppConfig;
use crate::services::user_service::{created_message, CreateUser};
use crate::services::UserService;

/// Same validation and outcomes as `POST /api/users`
pub async fn handle(config: AppConfig, username: String, password: String, email: String) -> anyhow::Result<()> {
    let store = build_store(&config).await?;
    let request = CreateUser {
        username: Some(username),
        password: Some(password),
        email: Some(email),
    };

    let user = UserService::new(store).create(&request).await?;
    println!("{}", created_message(&user.username));
    Ok(())
}
