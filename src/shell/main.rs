use std::sync::Arc;

use consultations::modules::assessments::adapters::outbound::results_in_memory::InMemoryAssessmentResults;
use consultations::modules::consultations::adapters::outbound::ledger_in_memory::InMemorySlotLedger;
use consultations::modules::directory::adapters::outbound::directory_in_memory::InMemoryDirectory;
use consultations::modules::workshops::adapters::outbound::registrations_in_memory::InMemoryWorkshopRegistrations;
use consultations::shared::infrastructure::notifier::Notifier;
use consultations::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use consultations::shared::infrastructure::notifier::telegram::TelegramNotifier;
use consultations::shell::config::Config;
use consultations::shell::http::router;
use consultations::shell::seed::Seed;
use consultations::shell::state::{AppState, StateSettings, Stores};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load()?;
    let seed = Seed::load(&config.seed_path)?;
    tracing::info!(
        users = seed.users.len(),
        topics = seed.topics.len(),
        workshops = seed.workshops.len(),
        event_day = %config.calendar.today(),
        "seed loaded"
    );

    let notifier: Arc<dyn Notifier> = match &config.telegram_bot_token {
        Some(token) => Arc::new(TelegramNotifier::new(
            config.telegram_api_base.clone(),
            token.clone(),
            config.notify_timeout,
        )?),
        None => {
            tracing::warn!("TELEGRAM_BOT_TOKEN not set, expert notifications stay in memory");
            Arc::new(InMemoryNotifier::new())
        }
    };

    let stores = Stores {
        directory: Arc::new(InMemoryDirectory::with_records(seed.users, seed.topics)),
        ledger: Arc::new(InMemorySlotLedger::new()),
        workshops: Arc::new(InMemoryWorkshopRegistrations::new(seed.workshops)),
        results: Arc::new(InMemoryAssessmentResults::new()),
    };
    let settings = StateSettings {
        calendar: config.calendar,
        notify_timeout: config.notify_timeout,
        workshop_limit: config.workshop_limit,
    };
    let app = router(AppState::build(stores, notifier, settings));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("HTTP API: http://{address}, GraphQL endpoint: http://{address}/gql");
    axum::serve(listener, app).await?;
    Ok(())
}
