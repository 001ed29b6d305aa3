use anyhow::Context;
use axum::http::Method;
use clap::Parser;
use parlor_config::Config;
use parlor_core::scrape::ScrapeService;
use parlor_server::routes::create_router;
use parlor_server::state::AppState;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "parlor-server", about = "Parlor media catalog API server")]
struct Args {
    /// Bind address, overriding BIND_ADDR.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,parlor_server=debug,parlor_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = Config::load().context("failed to load configuration")?;
    let bind_addr = args.bind.unwrap_or_else(|| config.server.bind_addr.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await
        .context("failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("failed to run migrations")?;

    let scrape = ScrapeService::new(
        config.providers.tmdb_api_key.clone(),
        config.providers.omdb_api_key.clone(),
        config.providers.upstream_timeout,
    )
    .context("failed to build scrape service")?;

    let state = AppState::new(pool, scrape, config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    let app = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    info!(%bind_addr, "parlor-server listening");

    axum::serve(listener, app)
        .await
        .context("server exited with an error")?;

    Ok(())
}
