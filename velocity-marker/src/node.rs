use std::{
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use parking_lot::{Mutex, MutexGuard};
use ros2_client::{Context, Name, NodeName};
use rustdds::{policy, QosPolicies, QosPolicyBuilder};

use crate::{msg::MessageType, Error};

// re-export
pub use ros2_client::NodeOptions;

/// ROS2 node. This is a wrapper around [`ros2_client::Node`].
#[derive(Clone)]
pub struct Node {
    inner: Arc<NodeInner>,
}

struct NodeInner {
    node: Mutex<ros2_client::Node>,
    has_spin_task: AtomicBool,
}

impl Node {
    /// Creates a new ROS2 node.
    pub fn new(name: &str, namespace: &str, options: NodeOptions) -> Result<Self, Error> {
        let ctx = Context::new().map_err(anyhow::Error::from)?;
        Self::with_context(&ctx, name, namespace, options)
    }

    /// Creates a new ROS2 node with [`ros2_client::Context`].
    pub fn with_context(
        ctx: &Context,
        name: &str,
        namespace: &str,
        options: NodeOptions,
    ) -> Result<Self, Error> {
        let name = NodeName::new(namespace, name).map_err(anyhow::Error::from)?;
        let node = ctx.new_node(name, options).map_err(anyhow::Error::from)?;
        Ok(Self {
            inner: Arc::new(NodeInner {
                node: Mutex::new(node),
                has_spin_task: AtomicBool::new(false),
            }),
        })
    }

    /// Gets the underlying `ros2_client::Node`.
    pub fn ros2(&self) -> MutexGuard<'_, ros2_client::Node> {
        self.inner.node.lock()
    }

    /// Spawns a task to service ROS2 discovery and other background traffic.
    pub fn run_spin_task(&self) {
        if self.inner.has_spin_task.swap(true, Ordering::Relaxed) {
            return;
        }
        match self.ros2().spinner() {
            Ok(spinner) => {
                tokio::spawn(async move {
                    if let Err(e) = spinner.spin().await {
                        tracing::error!("ros2-client spinner error: {e:?}");
                    }
                });
            }
            Err(e) => tracing::error!("failed to create ros2-client spinner: {e:?}"),
        }
    }

    /// Creates a ROS2 topic for the message type `T`.
    pub fn create_topic<T: MessageType>(&self, topic: &str) -> Result<rustdds::Topic, Error> {
        let name = parse_topic_name(topic)?;
        let topic = self
            .ros2()
            .create_topic(&name, T::message_type_name(), &default_qos())
            .map_err(anyhow::Error::from)?;
        Ok(topic)
    }

    /// Creates a publisher on `topic` with the topic's QoS.
    pub fn create_publisher<T>(
        &self,
        topic: &rustdds::Topic,
    ) -> Result<ros2_client::Publisher<T>, Error>
    where
        T: MessageType + ros2_client::Message,
    {
        let publisher = self
            .ros2()
            .create_publisher(topic, None)
            .map_err(anyhow::Error::from)?;
        Ok(publisher)
    }

    /// Creates a subscription on `topic` with the topic's QoS.
    pub fn create_subscription<T>(
        &self,
        topic: &rustdds::Topic,
    ) -> Result<ros2_client::Subscription<T>, Error>
    where
        T: MessageType + ros2_client::Message + 'static,
    {
        let subscription = self
            .ros2()
            .create_subscription(topic, None)
            .map_err(anyhow::Error::from)?;
        Ok(subscription)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node").finish_non_exhaustive()
    }
}

// History depth 1: every publish is a full state snapshot, so only the
// latest sample matters.
fn default_qos() -> QosPolicies {
    QosPolicyBuilder::new()
        .reliability(policy::Reliability::Reliable {
            max_blocking_time: rustdds::Duration::from_millis(100),
        })
        .history(policy::History::KeepLast { depth: 1 })
        .build()
}

fn parse_topic_name(topic: &str) -> Result<Name, Error> {
    let full = if topic.starts_with('/') {
        topic.to_owned()
    } else {
        format!("/{topic}")
    };
    // `full` always starts with '/', so the split cannot fail.
    let (namespace, base_name) = full.rsplit_once('/').unwrap_or(("", &full));
    let namespace = if namespace.is_empty() { "/" } else { namespace };
    let name = Name::new(namespace, base_name).map_err(anyhow::Error::from)?;
    Ok(name)
}
