//! HostelMS web application
//!
//! Main application entry point

use tracing::info;

use HostelMS::{
    config::Settings,
    database::{create_pool, run_migrations, seed, PoolConfig},
    handlers,
    state::AppState,
    utils::logging,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard must outlive the server loop
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting HostelMS...");

    info!("Connecting to database...");
    let pool_config = PoolConfig::from_settings(&settings);
    let pool = create_pool(&pool_config).await?;

    run_migrations(&pool).await?;

    // Management command surface: `hostelms seed` populates demo data
    if std::env::args().nth(1).as_deref() == Some("seed") {
        let summary = seed::create_sample_data(&pool).await?;
        info!(
            "Seed complete: {} users, {} students, {} hostels, {} wings, {} floors, {} rooms, {} applications, {} complaints",
            summary.users,
            summary.students,
            summary.hostels,
            summary.wings,
            summary.floors,
            summary.rooms,
            summary.applications,
            summary.complaints
        );
        return Ok(());
    }

    let state = AppState::new(settings.clone(), pool);
    let app = handlers::router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HostelMS is ready, listening on {}", addr);

    axum::serve(listener, app).await?;

    info!("HostelMS has been shut down.");

    Ok(())
}
