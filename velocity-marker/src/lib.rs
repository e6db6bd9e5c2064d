//! Visualization markers for ROS2 velocity commands.
//!
//! Subscribes to a velocity-command topic ([`geometry_msgs/Twist`] or
//! [`geometry_msgs/TwistStamped`]) and republishes the most recent command
//! as a pair of RViz arrow markers (linear and angular velocity) at a fixed
//! rate.
//!
//! [`geometry_msgs/Twist`]: msg::geometry_msgs::Twist
//! [`geometry_msgs/TwistStamped`]: msg::geometry_msgs::TwistStamped
#![warn(
    future_incompatible,
    missing_docs,
    rust_2018_idioms,
    single_use_lifetimes,
    unreachable_pub
)]
#![warn(clippy::default_trait_access, clippy::wildcard_imports)]

mod error;
mod marker;
mod node;
mod twist_marker;
mod utils;

pub mod msg;

pub use crate::{error::*, marker::*, node::*, twist_marker::*};
// re-export
pub use ros2_client;
