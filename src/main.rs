mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, router::router, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let app = router().with_state(AppState::new(db, config.favorite_scope));

    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;

    tracing::info!("Listening on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
