use crate::{
    adapters::http::app_state::AppState,
    application::ports::sheets::SheetsPort,
    infra::{
        config::AppConfig, google_auth::GoogleAuthenticator, http_client,
        sheets_client::GoogleSheetsClient,
    },
    use_cases::waitlist::WaitlistUseCases,
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let http = http_client::build_client();

    let auth = Arc::new(GoogleAuthenticator::new(
        http.clone(),
        config.google_client_email.clone(),
        &config.google_private_key,
    )?);

    let sheets = Arc::new(GoogleSheetsClient::new(
        http,
        auth,
        config.google_sheet_id.clone(),
    ));

    let waitlist = WaitlistUseCases::new(
        sheets as Arc<dyn SheetsPort>,
        config.sheet_tab.clone(),
    );

    Ok(AppState {
        config: Arc::new(config),
        waitlist: Arc::new(waitlist),
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "koala_waitlist=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs)
    let file = File::create("app.log").expect("cannot create log file");
    let json_layer = fmt::layer()
        .json()
        .with_writer(file)
        .with_current_span(true)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
