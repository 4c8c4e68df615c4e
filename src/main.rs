//! Iceberg Voyage entry point
//!
//! Initializes logging and runs the windowed scene.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use iceberg_voyage::Settings;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::default();
    log::info!(
        "Iceberg Voyage starting ({}x{}, {} quality)...",
        settings.window_width,
        settings.window_height,
        settings.quality.as_str()
    );
    log::info!("Keys: S/W zoom iceberg, A/D nudge boat, Enter resets, click to sail");

    if let Err(e) = iceberg_voyage::platform::run(settings) {
        log::error!("Fatal: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Native-only binary; the library still builds for wasm32
}
