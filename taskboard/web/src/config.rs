use serde::Deserialize;
use std::str::FromStr;
use std::sync::OnceLock;
use taskboard_core::FormRules;
use tracing::Level;

const EMBEDDED_CONFIG: &str = include_str!("../board.toml");

/// TOML overrides captured when the app is built. The browser has no
/// process environment, so overrides are baked in at compile time.
const BUILD_OVERRIDES: Option<&str> = option_env!("TASKBOARD_OVERRIDES");

static CONFIG: OnceLock<BoardConfig> = OnceLock::new();

/// Board configuration, loaded from the embedded `board.toml` with any
/// `TASKBOARD_OVERRIDES` set at build time layered on top.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub title: String,
    pub log_level: String,
    pub rules: FormRules,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            title: "Project Board".to_string(),
            log_level: "info".to_string(),
            rules: FormRules::default(),
        }
    }
}

impl BoardConfig {
    /// Load configuration from the embedded defaults and build-time overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::from_sources(EMBEDDED_CONFIG, BUILD_OVERRIDES)
    }

    fn from_sources(base: &str, overrides: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(base, config::FileFormat::Toml));
        if let Some(overrides) = overrides {
            builder =
                builder.add_source(config::File::from_str(overrides, config::FileFormat::Toml));
        }

        builder.build()?.try_deserialize()
    }

    #[cfg(test)]
    fn from_toml(toml: &str) -> Result<Self, config::ConfigError> {
        Self::from_sources(toml, None)
    }

    /// The configured log level, falling back to `INFO` when unrecognized
    pub fn level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }
}

/// Loads the configuration once for the lifetime of the application.
pub fn init() -> Result<&'static BoardConfig, config::ConfigError> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let config = BoardConfig::load()?;
    Ok(CONFIG.get_or_init(|| config))
}

/// The loaded configuration, or the defaults if [`init`] never ran.
pub fn current() -> &'static BoardConfig {
    CONFIG.get_or_init(BoardConfig::default)
}
