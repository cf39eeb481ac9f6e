use chess_tutor::api::router::create_router;
use chess_tutor::api::state::AppState;
use chess_tutor::config::AppConfig;

#[tokio::main]
async fn main() {
    // Handle --health-check flag for container HEALTHCHECK.
    if std::env::args().any(|a| a == "--health-check") {
        match health_check().await {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("Health check failed: {e}");
                std::process::exit(1);
            }
        }
    }

    // Initialize tracing (structured logging).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chess_tutor=info,tower_http=info".into()),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("server stopped: {e}");
        std::process::exit(1);
    }
}

async fn run() -> std::io::Result<()> {
    let config = AppConfig::from_env();
    let bind_addr = config.bind_addr();
    let max_sessions = config.max_sessions;
    let state = AppState::new(config);

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        max_sessions,
        "chess-tutor v{} listening on {bind_addr}",
        env!("CARGO_PKG_VERSION")
    );

    axum::serve(listener, app).await
}

/// Lightweight health check: send raw HTTP/1.1 request and check for 200 OK.
async fn health_check() -> Result<(), Box<dyn std::error::Error>> {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let port = std::env::var("PORT").unwrap_or_else(|_| "8082".to_string());
    let mut stream = tokio::net::TcpStream::connect(format!("127.0.0.1:{port}")).await?;
    let request =
        format!("GET /health HTTP/1.1\r\nHost: 127.0.0.1:{port}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await?;
    let mut buf = vec![0u8; 1024];
    let n = stream.read(&mut buf).await?;
    let response = String::from_utf8_lossy(&buf[..n]);
    match response.lines().next() {
        Some(status) if status.starts_with("HTTP/1.1 200") => Ok(()),
        status => Err(format!("Unexpected response: {}", status.unwrap_or("")).into()),
    }
}
