use mdsite_cli::build_site;
use mdsite_config::Config;
use std::{env, path::PathBuf, process};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(Config::default_path);
    log::info!("Config path: {}", config_path.display());

    let config = match Config::load_from_path(&config_path) {
        Ok(Some(config)) => config,
        Ok(None) => {
            log::info!("No config file found, using defaults");
            Config::default()
        }
        Err(e) => {
            log::error!("Config::load_from_path() failed with error: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            let program_name = env::args().next().unwrap_or_else(|| "mdsite".to_string());
            eprintln!("Usage: {} [config-path]", program_name);
            process::exit(1);
        }
    };

    if let Err(err) = build_site(&config) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }

    log::info!("Site written to {}", config.public_dir.display());
}
