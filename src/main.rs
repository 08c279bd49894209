use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Progress goes to stderr so stdout stays clean for the report.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "scrycsv=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = scrycsv::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
