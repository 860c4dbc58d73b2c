//! Finboard - A personal finance dashboard
//!
//! This is the main entry point for the Finboard desktop application.

use dashboard::{DashboardConfig, FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore};
use gpui::prelude::*;
use gpui::{Application, WindowOptions, px, size};
use gpui_component::TitleBar;
use log::{error, info, warn};
use std::sync::Arc;

mod app;
mod components;
mod input;
mod views;

use app::FinboardApp;

/// Open the persistent store, falling back to memory so the app still starts
fn open_store() -> Arc<dyn KeyValueStore> {
    match FileKeyValueStore::open_default() {
        Ok(store) => {
            info!("Storage at {}", store.path().display());
            Arc::new(store)
        }
        Err(e) => {
            warn!("Failed to open persistent storage: {:#}, using in-memory", e);
            Arc::new(InMemoryKeyValueStore::new())
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    // Bootstrap config directory
    if let Err(e) = config::init() {
        error!("Failed to initialize config directory: {}", e);
    }

    let settings = DashboardConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load settings: {:#}, using defaults", e);
        DashboardConfig::default()
    });
    let store = open_store();

    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx| {
            gpui_component::init(cx);
            cx.bind_keys(input::bindings());

            let window_options = WindowOptions {
                window_bounds: Some(gpui::WindowBounds::Windowed(gpui::Bounds {
                    origin: gpui::Point::default(),
                    size: size(px(1200.), px(800.)),
                })),
                titlebar: Some(TitleBar::title_bar_options()),
                ..Default::default()
            };

            let opened = cx.open_window(window_options, |window, cx| {
                cx.new(|cx| FinboardApp::new(store, settings, window, cx))
            });

            match opened {
                Ok(_) => info!("Finboard started successfully"),
                Err(e) => {
                    error!("Failed to open window: {:#}", e);
                    cx.quit();
                }
            }
        });
}
