use dotenvy::dotenv;
use sqlx::sqlite::SqlitePoolOptions;
use std::net::SocketAddr;
use tracing::{info, warn};

use marketplace::config::Config;
use marketplace::database::schema;
use marketplace::web;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt::init();

    let config = Config::load();

    // 2. Database
    info!("Connecting to database: {}", config.database_url);
    let pool = SqlitePoolOptions::new()
        .connect(&config.database_url)
        .await
        .expect("Cannot connect to database");

    schema::init_schema(&pool)
        .await
        .expect("Cannot create schema");
    if config.seed_demo {
        schema::seed_demo_data(&pool)
            .await
            .expect("Cannot seed demo data");
        info!("Demo catalog seeded");
    }

    // 3. Router
    let app = web::router(pool);

    // 4. Serve, falling back to the next port when taken
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Cannot parse host/port");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback: SocketAddr = format!("{}:{}", config.host, config.port + 1)
                .parse()
                .expect("Cannot parse fallback host/port");
            warn!("Cannot bind {}: {}. Trying fallback {}", addr, e, fallback);
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("Cannot bind fallback port")
        }
    };

    match listener.local_addr() {
        Ok(bound) => info!("🚀 Serving on http://{}", bound),
        Err(e) => warn!("Listening on unknown address: {}", e),
    }

    axum::serve(listener, app).await.expect("Server error");
}
