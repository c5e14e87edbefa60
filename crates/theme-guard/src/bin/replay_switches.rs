//! Replays a sequence of theme switches through the guard.
//!
//! Usage:
//! `cargo run --bin theme-guard-replay -- <config-dir> <installed,themes> <licensed|unlicensed|offline> <initial|-> [switch ...]`
//!
//! Prints one JSON line per guard decision. Set `RUST_LOG=debug` for guard logs.

use std::path::PathBuf;
use std::sync::Arc;

use theme_guard::host::{LogNotificationSink, MemoryPreferenceManager, StaticLicenseOracle};
use theme_guard::{
    load_or_create_guard_config, GuardBus, GuardError, GuardResult, PreferenceManager,
    PreferenceValue, ThemeGuard,
};

const USAGE: &str = "usage: theme-guard-replay <config-dir> <installed,themes> \
                     <licensed|unlicensed|offline> <initial|-> [switch ...]";

fn main() {
    let _ = dotenvy::dotenv();
    env_logger::init();

    if let Err(error) = run(std::env::args().skip(1).collect()) {
        eprintln!("{error}");
        eprintln!("{USAGE}");
        std::process::exit(1);
    }
}

fn run(args: Vec<String>) -> GuardResult<()> {
    let [config_dir, installed, license, initial, switches @ ..] = args.as_slice() else {
        return Err(GuardError::Config("missing arguments".to_string()));
    };

    let config = load_or_create_guard_config(&PathBuf::from(config_dir))?;
    let installed: Vec<PreferenceValue> = installed
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(PreferenceValue::from)
        .collect();
    let initial = (initial != "-").then(|| PreferenceValue::from(initial.as_str()));
    let oracle = match license.as_str() {
        "licensed" => StaticLicenseOracle::licensed(true),
        "unlicensed" => StaticLicenseOracle::licensed(false),
        "offline" => StaticLicenseOracle::unavailable(),
        other => {
            return Err(GuardError::Config(format!("unknown license state: {other}")));
        }
    };

    let manager = Arc::new(MemoryPreferenceManager::new(installed, initial));
    let bus = GuardBus::new(64);
    let mut events = bus.subscribe();
    let guard = Arc::new(
        ThemeGuard::new(
            &config,
            manager.clone(),
            Arc::new(oracle),
            Arc::new(LogNotificationSink::new()),
        )
        .with_bus(bus),
    );
    guard.register();

    for switch in switches {
        manager.set_current_value(&PreferenceValue::from(switch.as_str()))?;
        while let Ok(event) = events.try_recv() {
            let line = serde_json::to_string(&event)
                .map_err(|error| GuardError::Host(format!("failed to encode event: {error}")))?;
            println!("{line}");
        }
    }

    tracing::info!(
        "final theme {:?}, last approved {:?}",
        manager.current_value(),
        guard.last_approved()
    );
    Ok(())
}
