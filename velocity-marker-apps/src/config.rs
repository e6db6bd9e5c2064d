use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use velocity_marker::TwistMarkerConfig;

use crate::Error;

/// Configuration for the `velocity_marker` node binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VelocityMarkerConfig {
    /// ROS2 node name.
    #[serde(default = "default_node_name")]
    pub node_name: String,
    /// ROS2 node namespace.
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Marker publisher settings.
    #[serde(default)]
    pub twist_marker: TwistMarkerConfig,
}

fn default_node_name() -> String {
    "velocity_marker".to_owned()
}

fn default_namespace() -> String {
    "/".to_owned()
}

impl Default for VelocityMarkerConfig {
    fn default() -> Self {
        Self {
            node_name: default_node_name(),
            namespace: default_namespace(),
            twist_marker: TwistMarkerConfig::default(),
        }
    }
}

impl VelocityMarkerConfig {
    pub fn try_new<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_str(
            &std::fs::read_to_string(&path)
                .map_err(|e| Error::NoFile(path.as_ref().to_owned(), e))?,
            path,
        )
    }

    pub fn from_str<P: AsRef<Path>>(s: &str, path: P) -> Result<Self, Error> {
        let config: VelocityMarkerConfig =
            toml::from_str(s).map_err(|e| Error::TomlParseFailure(path.as_ref().to_owned(), e))?;
        debug!("{config:?}");
        Ok(config)
    }
}
