mod accounts;
mod app;
mod auth;
mod config;
mod dashboard;
mod db;
mod entries;
mod error;
mod expenses;
mod extract;
mod ledger;
#[cfg(test)]
mod memory;
mod money;
mod savings;
mod state;

use crate::{config::AppConfig, state::AppState};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "fintrack=debug,axum=info,tower_http=info,sqlx=warn".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env()?;
    let db = db::connect(&config).await?;
    db::migrate(&db).await?;

    let app = app::build_app(AppState::from_pool(db, config.clone()));
    app::serve(app, &config).await
}
