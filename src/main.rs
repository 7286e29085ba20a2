use log::{error, info};
use tokio::net::TcpListener;
use news_data_proxy::{
    config::Config,
    api::routes::create_router,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Load configuration
    let config = Config::load().inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    let server_addr = config.server_addr;

    // Create application state
    let app_state = AppState::from_config(&config);

    // Build the router with routes
    let app = create_router(app_state);

    // Create the listener
    let listener = TcpListener::bind(server_addr).await?;

    info!("[server]: Server is running at http://{}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
