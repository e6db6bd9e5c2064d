use std::time::Duration;

use velocity_marker::{
    msg::geometry_msgs::{Twist, Vector3},
    Node, NodeOptions,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let node = Node::new("twist_pub", "/", NodeOptions::new().enable_rosout(true))?;
    let topic = node.create_topic::<Twist>("cmd_vel")?;
    let publisher = node.create_publisher::<Twist>(&topic)?;
    node.run_spin_task();

    let mut count = 0u32;
    loop {
        let t = f64::from(count) * 0.1;
        let msg = Twist {
            linear: Vector3 {
                x: 0.5 * t.sin(),
                y: 0.0,
                z: 0.0,
            },
            angular: Vector3 {
                x: 0.0,
                y: 0.0,
                z: 0.3 * t.cos(),
            },
        };
        publisher
            .publish(msg.clone())
            .map_err(|e| anyhow::format_err!("ros2-client publish error: {e:?}"))?;
        println!("{count}, {msg:?}");
        tokio::time::sleep(Duration::from_millis(100)).await;
        count += 1;
    }
}
