//! Stream player entry point.

use stream_player::app::App;
use stream_player::config::{AppConfig, ConfigSource};
use stream_player::logging::init_logging;
use stream_player::models::StreamPageData;
use stream_player::session::provider_from_config;
use tracing::{error, info, warn};

fn main() {
    let (config, source) = AppConfig::load();

    if let Err(e) = init_logging(&config) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    match &source {
        ConfigSource::File(path) => info!("[CONFIG] Loaded {}", path.display()),
        ConfigSource::Defaults => info!("[CONFIG] No config file found, using defaults"),
    }
    for key in &config.ignored_keys {
        warn!("[CONFIG] Ignoring unknown key '{}'", key);
    }

    let page = match StreamPageData::load_from_file(&config.page_data_path) {
        Ok(page) => page,
        Err(e) => {
            error!(
                "[CONFIG] Failed to load page data from {}: {}",
                config.page_data_path.display(),
                e
            );
            std::process::exit(1);
        }
    };

    let provider = match provider_from_config(&config) {
        Ok(provider) => provider,
        Err(e) => {
            error!("[CONFIG] {}", e);
            std::process::exit(1);
        }
    };

    let title = format!("{} - {}", page.host.username, page.stream.name);
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([480.0, 480.0])
            .with_title(&title),
        ..Default::default()
    };

    let result = eframe::run_native(
        "stream-player",
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_theme(egui::Theme::Dark);

            let mut style = (*cc.egui_ctx.style()).clone();
            style.visuals.window_fill = egui::Color32::from_rgb(15, 23, 42);
            style.visuals.panel_fill = egui::Color32::from_rgb(15, 23, 42);
            cc.egui_ctx.set_style(style);

            Ok(Box::new(App::new(config, page, provider)))
        }),
    );

    if let Err(e) = result {
        error!("[APP] Window closed with error: {}", e);
        std::process::exit(1);
    }
}
