use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use velocity_marker::{Node, NodeOptions, TwistMarkerPublisher, MARKER_TOPIC};
use velocity_marker_apps::{
    utils::{get_config_path, init_tracing},
    VelocityMarkerConfig,
};

/// Publishes RViz arrow markers visualizing velocity commands.
#[derive(Parser, Debug)]
#[command(name = env!("CARGO_BIN_NAME"))]
struct Opt {
    /// Path to the setting file.
    #[arg(short, long)]
    config_path: Option<PathBuf>,
    /// Reference frame id stamped on both markers.
    #[arg(long)]
    base_frame: Option<String>,
    /// Inbound topic name for velocity commands.
    #[arg(long)]
    twist_topic: Option<String>,
    /// Subscribe to geometry_msgs/TwistStamped instead of geometry_msgs/Twist.
    #[arg(long)]
    is_stamped: Option<bool>,
    /// Multiplier for the linear-velocity marker length.
    #[arg(long)]
    velocity_scale: Option<f64>,
    /// Multiplier for the angular-velocity marker length.
    #[arg(long)]
    angular_velocity_scale: Option<f64>,
    /// Marker publish rate in ticks per second.
    #[arg(long)]
    publish_frequency: Option<f64>,
    /// Prints the default setting as TOML.
    #[arg(long)]
    show_default_config: bool,
}

/// Settings from the command line take priority over the setting file.
fn resolve_config(opt: &Opt) -> Result<VelocityMarkerConfig> {
    let mut config = match get_config_path(opt.config_path.clone()) {
        Some(path) => VelocityMarkerConfig::try_new(path)?,
        None => VelocityMarkerConfig::default(),
    };
    let twist_marker = &mut config.twist_marker;
    if let Some(base_frame) = &opt.base_frame {
        twist_marker.base_frame.clone_from(base_frame);
    }
    if let Some(twist_topic) = &opt.twist_topic {
        twist_marker.twist_topic.clone_from(twist_topic);
    }
    if let Some(is_stamped) = opt.is_stamped {
        twist_marker.is_stamped = is_stamped;
    }
    if let Some(velocity_scale) = opt.velocity_scale {
        twist_marker.velocity_scale = velocity_scale;
    }
    if let Some(angular_velocity_scale) = opt.angular_velocity_scale {
        twist_marker.angular_velocity_scale = angular_velocity_scale;
    }
    if let Some(publish_frequency) = opt.publish_frequency {
        twist_marker.publish_frequency = publish_frequency;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let opt = Opt::parse();
    debug!("opt: {opt:?}");

    if opt.show_default_config {
        print!("{}", toml::to_string(&VelocityMarkerConfig::default())?);
        return Ok(());
    }

    let config = resolve_config(&opt)?;
    let node = Node::new(
        &config.node_name,
        &config.namespace,
        NodeOptions::new().enable_rosout(true),
    )?;
    let mut publisher = TwistMarkerPublisher::new(node, config.twist_marker.clone())?;
    info!(
        "subscribing to {} ({}), publishing markers on {}",
        config.twist_marker.twist_topic,
        if config.twist_marker.is_stamped {
            "geometry_msgs/TwistStamped"
        } else {
            "geometry_msgs/Twist"
        },
        MARKER_TOPIC,
    );

    tokio::select! {
        () = publisher.run() => {}
        _ = tokio::signal::ctrl_c() => info!("shutting down"),
    }
    Ok(())
}
