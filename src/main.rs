#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

#[cfg(not(target_arch = "wasm32"))]
use photo_markup::{EditorConfig, MarkupApp};

#[cfg(not(target_arch = "wasm32"))]
const CONFIG_ENV: &str = "PHOTO_MARKUP_CONFIG";

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> EditorConfig {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return EditorConfig::default();
    };
    match EditorConfig::load(&path) {
        Ok(config) => {
            log::info!("Loaded config from {}", path);
            config
        }
        Err(err) => {
            log::error!("Failed to load config from {}: {}", path, err);
            EditorConfig::default()
        }
    }
}

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = load_config();
    let image = std::env::args().nth(1).and_then(|path| {
        photo_markup::image_loader::load_image_file(&path)
            .map_err(|err| log::error!("Failed to load {}: {}", path, err))
            .ok()
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([320.0, 240.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };
    eframe::run_native(
        "Photo Markup",
        native_options,
        Box::new(|cc| {
            let app = MarkupApp::new(cc, config, image).with_on_done(|operations| {
                match serde_json::to_string(operations) {
                    Ok(json) => println!("{json}"),
                    Err(err) => log::error!("Failed to serialize operations: {}", err),
                }
            });
            Ok(Box::new(app))
        }),
    )
}

// The editor is only wired up as a native app.
#[cfg(target_arch = "wasm32")]
fn main() {}
