use anyhow::Result;
use tokio::io::BufReader;
use tracing::info;

use tercuman::clipboard::ClipboardChain;
use tercuman::config::Config;
use tercuman::repl::Repl;
use tercuman::session::{SessionState, TranslationSession};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so they stay out of the prompt
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tercuman=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        "Starting translation session against {} (model: {}, locale: {})",
        config.api_url,
        config.default_model,
        config.locale.tag()
    );

    let state = SessionState {
        selected_model: config.default_model,
        ..SessionState::default()
    };
    let mut session = TranslationSession::with_state(config.client()?, config.locale, state);

    // Optional page path, e.g. /translate/tur_Latn/eng_Latn
    if let Some(path) = std::env::args().nth(1) {
        session.apply_page_path(&path);
        info!("Opened {}", session.page_path());
    }

    let mut repl = Repl::new(session, ClipboardChain::platform_default());
    let mut stdout = tokio::io::stdout();
    repl.run(BufReader::new(tokio::io::stdin()), &mut stdout).await?;

    info!("Session ended");
    Ok(())
}
