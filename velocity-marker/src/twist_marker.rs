use std::{fmt, sync::Arc, time::Duration};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::{
    marker::{init_marker, vector_to_marker},
    msg::{
        geometry_msgs::{Twist, TwistStamped},
        visualization_msgs::Marker,
    },
    utils, Error, Node,
};

/// Topic both markers are published on.
pub const MARKER_TOPIC: &str = "velocity_twist_marker";

/// Configuration for [`TwistMarkerPublisher`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TwistMarkerConfig {
    /// Reference frame id stamped on both markers.
    #[serde(default = "default_base_frame")]
    pub base_frame: String,
    /// Inbound topic name for velocity commands.
    #[serde(default = "default_twist_topic")]
    pub twist_topic: String,
    /// Subscribe to `geometry_msgs/TwistStamped` instead of `geometry_msgs/Twist`.
    #[serde(default)]
    pub is_stamped: bool,
    /// Multiplier for the linear-velocity marker length.
    #[serde(default = "default_scale")]
    pub velocity_scale: f64,
    /// Multiplier for the angular-velocity marker length.
    #[serde(default = "default_scale", alias = "anglular_velocity_scale")]
    pub angular_velocity_scale: f64,
    /// Marker publish rate in ticks per second.
    #[serde(default = "default_publish_frequency")]
    pub publish_frequency: f64,
}

fn default_base_frame() -> String {
    "world".to_owned()
}

fn default_twist_topic() -> String {
    "cmd_vel".to_owned()
}

fn default_scale() -> f64 {
    1.0
}

fn default_publish_frequency() -> f64 {
    10.0
}

impl Default for TwistMarkerConfig {
    fn default() -> Self {
        Self {
            base_frame: default_base_frame(),
            twist_topic: default_twist_topic(),
            is_stamped: false,
            velocity_scale: default_scale(),
            angular_velocity_scale: default_scale(),
            publish_frequency: default_publish_frequency(),
        }
    }
}

/// The pair of arrow markers derived from one velocity command.
#[derive(Debug, Clone)]
pub struct TwistMarkers {
    velocity: Marker,
    angular_velocity: Marker,
}

impl TwistMarkers {
    /// Creates the marker pair, namespaces "velocity" and "angular_velocity".
    pub fn new(base_frame: &str) -> Self {
        Self {
            velocity: init_marker(base_frame, "velocity"),
            angular_velocity: init_marker(base_frame, "angular_velocity"),
        }
    }

    /// Rebuilds both markers from `twist`.
    pub fn update(&mut self, twist: &Twist, velocity_scale: f64, angular_velocity_scale: f64) {
        vector_to_marker(&mut self.velocity, &twist.linear, velocity_scale);
        vector_to_marker(&mut self.angular_velocity, &twist.angular, angular_velocity_scale);
    }

    /// The linear-velocity marker.
    pub fn velocity(&self) -> &Marker {
        &self.velocity
    }

    /// The angular-velocity marker.
    pub fn angular_velocity(&self) -> &Marker {
        &self.angular_velocity
    }
}

/// Publishes arrow markers visualizing the most recent velocity command at
/// a fixed rate.
pub struct TwistMarkerPublisher {
    marker_publisher: ros2_client::Publisher<Marker>,
    twist: Arc<RwLock<Twist>>,
    markers: TwistMarkers,
    config: TwistMarkerConfig,
    // keep not to be dropped
    _node: Node,
}

impl TwistMarkerPublisher {
    /// Creates a new `TwistMarkerPublisher` and starts draining the
    /// velocity-command subscription into its shared state.
    pub fn new(node: Node, config: TwistMarkerConfig) -> Result<Self, Error> {
        let marker_topic = node.create_topic::<Marker>(MARKER_TOPIC)?;
        let marker_publisher = node.create_publisher(&marker_topic)?;

        let twist = Arc::new(RwLock::new(Twist::default()));
        if config.is_stamped {
            let topic = node.create_topic::<TwistStamped>(&config.twist_topic)?;
            let subscription = node.create_subscription::<TwistStamped>(&topic)?;
            utils::subscribe_thread(subscription, twist.clone(), |message| message.twist);
        } else {
            let topic = node.create_topic::<Twist>(&config.twist_topic)?;
            let subscription = node.create_subscription::<Twist>(&topic)?;
            utils::subscribe_thread(subscription, twist.clone(), |message| message);
        }
        node.run_spin_task();

        let markers = TwistMarkers::new(&config.base_frame);
        Ok(Self {
            marker_publisher,
            twist,
            markers,
            config,
            _node: node,
        })
    }

    /// A snapshot of the most recently received velocity command.
    pub fn current_command(&self) -> Twist {
        self.twist.read().clone()
    }

    /// Rebuilds both markers from the current command and publishes them.
    pub fn publish_once(&mut self) -> Result<(), Error> {
        let twist = self.current_command();
        self.markers.update(
            &twist,
            self.config.velocity_scale,
            self.config.angular_velocity_scale,
        );
        for marker in [self.markers.velocity(), self.markers.angular_velocity()] {
            self.marker_publisher
                .publish(marker.clone())
                .map_err(|e| Error::Connection {
                    message: format!("ros2-client publish error: {e:?}"),
                })?;
        }
        Ok(())
    }

    /// Publishes the marker pair at the configured rate until the returned
    /// future is dropped.
    pub async fn run(&mut self) {
        let period = Duration::from_secs_f64(1.0 / self.config.publish_frequency);
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if let Err(e) = self.publish_once() {
                error!("{e}");
            }
        }
    }
}

impl fmt::Debug for TwistMarkerPublisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwistMarkerPublisher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::msg::geometry_msgs::Vector3;

    #[test]
    fn test_config_defaults() {
        let config: TwistMarkerConfig = toml::from_str("").unwrap();
        assert_eq!(config.base_frame, "world");
        assert_eq!(config.twist_topic, "cmd_vel");
        assert!(!config.is_stamped);
        assert_approx_eq!(config.velocity_scale, 1.0);
        assert_approx_eq!(config.angular_velocity_scale, 1.0);
        assert_approx_eq!(config.publish_frequency, 10.0);
    }

    #[test]
    fn test_config_accepts_misspelled_scale_alias() {
        let config: TwistMarkerConfig = toml::from_str("anglular_velocity_scale = 2.5").unwrap();
        assert_approx_eq!(config.angular_velocity_scale, 2.5);
    }

    #[test]
    fn test_config_rejects_unknown_keys() {
        assert!(toml::from_str::<TwistMarkerConfig>("no_such_option = 1").is_err());
    }

    #[test]
    fn test_update_reflects_only_the_latest_command() {
        let mut markers = TwistMarkers::new("world");
        let first = Twist {
            linear: Vector3 {
                x: 1.0,
                y: 0.0,
                z: 0.0,
            },
            angular: Vector3 {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            },
        };
        let second = Twist {
            linear: Vector3 {
                x: 0.0,
                y: 3.0,
                z: 0.0,
            },
            angular: Vector3 {
                x: 0.0,
                y: 0.0,
                z: 0.5,
            },
        };
        markers.update(&first, 1.0, 1.0);
        markers.update(&second, 2.0, 4.0);

        // Only `second` is visible, scaled per component.
        assert_approx_eq!(markers.velocity().scale.x, 6.0);
        assert_approx_eq!(markers.angular_velocity().scale.x, 2.0);
        let q = markers.velocity().pose.orientation.clone();
        // +y direction: quarter turn around z.
        assert_approx_eq!(q.z * q.w, 0.5);
    }

    #[test]
    fn test_update_scales_each_component_with_its_own_factor() {
        let mut markers = TwistMarkers::new("map");
        let twist = Twist {
            linear: Vector3 {
                x: 0.0,
                y: 0.0,
                z: 2.0,
            },
            angular: Vector3 {
                x: 0.0,
                y: 1.0,
                z: 0.0,
            },
        };
        markers.update(&twist, 0.5, 3.0);
        assert_approx_eq!(markers.velocity().scale.x, 1.0);
        assert_approx_eq!(markers.angular_velocity().scale.x, 3.0);
        assert_eq!(markers.velocity().header.frame_id, "map");
        assert_eq!(markers.angular_velocity().header.frame_id, "map");
    }
}
