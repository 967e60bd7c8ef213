//! PostPal API server binary.

use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "postpal_server", about = "PostPal API server")]
struct Args {
    /// Port to listen on. Overrides the `BIND_ADDR` port when set.
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// PostgreSQL connection URL. Overrides `DATABASE_URL` when set.
    #[arg(long)]
    database_url: Option<String>,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,postpal_api=debug,postpal_core=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let mut config = postpal_api::config::ApiConfig::from_env();
    if let Some(url) = args.database_url {
        config.pg_connection_url = url;
    }
    if let Some(port) = args.port {
        config.bind_addr = format!("0.0.0.0:{port}");
    }

    info!(
        bind_addr = %config.bind_addr,
        max_connections = args.max_connections,
        "starting postpal_server"
    );

    let pool = PgPoolOptions::new()
        .max_connections(args.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&config.pg_connection_url)
        .await?;

    info!("running database migrations");
    postpal_api::migrate(&pool).await?;

    let state = postpal_api::AppState {
        pool,
        config: config.clone(),
    };

    let app = postpal_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
