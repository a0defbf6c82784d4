use quizfunnel::{app::App, config::FunnelConfig, error::user_friendly_message, logging, Result};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}", user_friendly_message(&e));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    logging::init();

    let config = FunnelConfig::load_or_create()?;
    let mut app = App::new(config)?;
    app.init()?;

    let result = app.run().await;
    // Restore before any error is printed
    app.restore()?;
    tracing::info!("application finished");
    result
}
