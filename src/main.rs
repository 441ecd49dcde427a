use sales_service::config::SalesConfig;
use sales_service::productdetails::ProductCatalog;
use sales_service::router::create_app_router;
use sales_service::sales::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    // Load configuration
    let config = SalesConfig::load()?;
    info!(
        port = config.port,
        payment_base_url = %config.payment_base_url,
        every_n_item = config.discounts.every_n_item_count,
        "Configuration loaded"
    );

    let catalog = match &config.catalog_path {
        Some(path) => ProductCatalog::from_json_file(path)?,
        None => ProductCatalog::with_demo_products(),
    };
    info!(products = catalog.len(), "Product catalog ready");

    // Initialize application state
    let state = Arc::new(AppState::in_memory(&config, Arc::new(catalog)));

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Configure the server address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server running on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
