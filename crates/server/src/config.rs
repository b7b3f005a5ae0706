use shared_types::PortalConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<PortalConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml` and store the parsed portal configuration in the global
/// `OnceLock`. Only the first call has effect.
///
/// If the file is missing or unparseable, built-in defaults are used.
pub fn load_portal_config() {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_config(&contents),
        Err(e) => {
            tracing::warn!("{CONFIG_PATH} not found ({e}), using built-in portal config");
            PortalConfig::default()
        }
    });
}

/// Get the loaded configuration. Returns defaults if
/// `load_portal_config()` hasn't been called yet.
pub fn portal_config() -> &'static PortalConfig {
    static DEFAULT: OnceLock<PortalConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(PortalConfig::default))
}

fn parse_config(contents: &str) -> PortalConfig {
    match toml::from_str::<PortalConfig>(contents) {
        Ok(config) => {
            tracing::info!(
                telemetry = config.features.telemetry,
                school = %config.school.name,
                "portal config loaded"
            );
            config
        }
        Err(e) => {
            tracing::warn!("failed to parse {CONFIG_PATH}: {e}, using built-in portal config");
            PortalConfig::default()
        }
    }
}
