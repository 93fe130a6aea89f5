/// Replays a scripted editor session and prints the emitted intents.
///
/// Usage: `roi-replay <script.json> [config.json]`
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use roi_editor::{EditorConfig, ReplayError, SessionScript};
    use std::path::PathBuf;

    fn run(script_path: PathBuf, config_path: Option<PathBuf>) -> Result<(), ReplayError> {
        let config = match config_path {
            Some(path) => EditorConfig::load_from_path(&path)?,
            None => EditorConfig::load_from_default_path().unwrap_or_default(),
        };

        // RUST_LOG takes precedence over the configured level
        env_logger::Builder::new()
            .filter_level(config.preferences.log_level.to_level_filter())
            .parse_default_env()
            .init();
        log::debug!("Log level: {}", config.preferences.log_level.name());

        let script = SessionScript::load(&script_path)?;
        let report = roi_editor::replay::run(script, &config);

        for action in &report.actions {
            println!("{}", serde_json::to_string(action)?);
        }
        println!("{}", serde_json::to_string_pretty(&report.polygons)?);
        Ok(())
    }

    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let Some(script_path) = args.next() else {
        eprintln!("Usage: roi-replay <script.json> [config.json]");
        std::process::exit(2);
    };

    if let Err(e) = run(script_path, args.next()) {
        eprintln!("Replay error: {}", e);
        std::process::exit(1);
    }
}

// WASM builds embed the library; there is no command-line entry point
#[cfg(target_arch = "wasm32")]
fn main() {}
