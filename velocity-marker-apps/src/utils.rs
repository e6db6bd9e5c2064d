use std::path::PathBuf;

use tracing::warn;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

const VELOCITY_MARKER_CONFIG_ENV_NAME: &str = "VELOCITY_MARKER_CONFIG_PATH";

/// Get config path from input or env VELOCITY_MARKER_CONFIG_PATH
pub fn get_config_path(config: Option<PathBuf>) -> Option<PathBuf> {
    if config.is_some() {
        config
    } else {
        std::env::var(VELOCITY_MARKER_CONFIG_ENV_NAME)
            .map(|s| {
                warn!("### ENV VAR {} is used ###", s);
                PathBuf::from(s)
            })
            .ok()
    }
}

/// Initializes the tracing subscriber from RUST_LOG, defaulting to info.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(LevelFilter::INFO.into()),
        )
        .init();
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_get_config_path() {
        let path = get_config_path(Some(PathBuf::from("a.toml")));
        assert!(path.is_some());
        assert_eq!(path.unwrap(), PathBuf::from("a.toml"));
        //
        std::env::set_var(VELOCITY_MARKER_CONFIG_ENV_NAME, "b.toml");
        let path = get_config_path(Some(PathBuf::from("a.toml")));
        assert!(path.is_some());
        assert_eq!(path.unwrap(), PathBuf::from("a.toml"));
        std::env::remove_var(VELOCITY_MARKER_CONFIG_ENV_NAME);

        let path = get_config_path(None);
        assert!(path.is_none());

        std::env::set_var(VELOCITY_MARKER_CONFIG_ENV_NAME, "b.toml");
        let path = get_config_path(None);
        assert!(path.is_some());
        assert_eq!(path.unwrap(), PathBuf::from("b.toml"));
        std::env::remove_var(VELOCITY_MARKER_CONFIG_ENV_NAME);
    }
}
