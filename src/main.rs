/// Scroll view demo entry point.
///
/// Usage: `scrollview-demo [SESSION.json]`. Without an argument the built-in
/// session is replayed. Each frame is printed as one JSON line.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use scrollview::{AppConfig, ContentView, Session};
    use web_time::Instant;

    let config = AppConfig::load_from_default_path().unwrap_or_default();

    env_logger::Builder::new()
        .filter_level(config.preferences.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let session = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => match Session::load(&path) {
            Ok(session) => session,
            Err(e) => {
                eprintln!("Failed to load session {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => {
            log::info!("No session given, replaying the built-in one");
            Session::builtin()
        }
    };

    let mut view = ContentView::new(&config);
    log::info!(
        "{} items, content {} in viewport {}",
        view.item_count(),
        view.content_height(),
        config.demo.viewport_height
    );
    log::debug!("Items: {}", view.item_labels().join(", "));

    for record in session.replay(&mut view, Instant::now()) {
        match serde_json::to_string(&record) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                eprintln!("Failed to encode frame: {}", e);
                std::process::exit(1);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
