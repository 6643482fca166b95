use axum::{
    Router,
    routing::{get, post, put},
};
use std::env;
use tower_http::cors::CorsLayer;

use expense_tracker_server::config::Config;
use expense_tracker_server::expenses::{self, AppState};
use expense_tracker_server::store::ExpenseStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // load environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string())
                .as_str(),
        )
        .init();

    let config = Config::from_env()?;

    let store = ExpenseStore::open(&config.data_path).await?;
    tracing::info!(data_path = %config.data_path, "expense store initialized");

    let state = AppState {
        store,
        categories: config.categories.clone(),
    };

    // The UI is a separate process; permissive CORS keeps the boundary open
    // for whatever toolkit it runs in.
    let app = Router::new()
        .route(
            "/expenses",
            post(expenses::create_expense).get(expenses::list_expenses),
        )
        .route("/expenses/total", get(expenses::total_value))
        .route(
            "/expenses/{id}",
            put(expenses::update_expense).delete(expenses::delete_expense),
        )
        .route("/categories", get(expenses::list_categories))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server running on http://{}", bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}
