pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

/// Wire the browser-backed services once per WASM instantiation.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(LogComponent::Presentation("Initialize"), "stock chart ready");
}
