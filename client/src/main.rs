use std::process::ExitCode;
use std::sync::Arc;

use swap_client::config::init_config;
use swap_client::providers::Providers;
use swap_client::services::api::ApiClient;
use swap_client::ui::SwapDeskUi;
use swap_client::{debug, App};

fn main() -> ExitCode {
    let _log_guard = debug::init();

    let config = match init_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            eprintln!("swapdesk: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(api_url = %config.api_url, "Starting swap desk");

    let providers = Providers::new(config);
    let api = Arc::new(ApiClient::new(&config.api_url, providers.auth.clone()));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Swap Desk")
            .with_inner_size([1180.0, 720.0])
            .with_min_inner_size([800.0, 480.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Swap Desk",
        options,
        Box::new(move |cc| {
            let app = App::new(providers, api);
            Ok(Box::new(SwapDeskUi::new(cc, app)))
        }),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Window closed with error");
            ExitCode::FAILURE
        }
    }
}
