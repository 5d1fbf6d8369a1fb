use server_http::{build_router, AppState};
use shared::config::Config;
use std::sync::Arc;
use storage_memory::MemoryTicketStore;
use ticketd::{fixtures, operations::TicketService};
use tracing::{info, Level};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("Starting ticketd HTTP server...");

    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    // Load configuration from environment variables
    let config = Config::from_env();

    // The store lives for the lifetime of the process and is injected
    // into the request handlers through the application state
    let store = Arc::new(MemoryTicketStore::new());
    let tickets = Arc::new(TicketService::new(store));

    if config.seed_demo {
        let demo = fixtures::demo_tickets();
        info!("Seeding {} demo tickets", demo.len());
        tickets
            .seed(demo)
            .await
            .expect("Failed to seed demo tickets");
    }

    // Initialize state and build router
    let state = AppState::new(tickets);
    let router = build_router(state, &config);

    // Start server
    let listener = tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port))
        .await
        .unwrap();

    info!(
        "HTTP server listening on http://{}:{}",
        config.host, config.port
    );
    info!(
        "Try: curl 'http://localhost:{}/?method=allTickets'",
        config.port
    );

    // Graceful shutdown handler
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    info!("Server shutdown complete");
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }

    info!("Shutting down gracefully...");
}
