use thiserror::Error;

/// Error type of this crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Failed to exchange a message with the ROS2 graph.
    #[error("velocity-marker: Connection error : {}", message)]
    Connection {
        /// Transport-level detail.
        message: String,
    },
    /// Any other error.
    #[error("velocity-marker: Other: {:?}", .0)]
    Other(#[from] anyhow::Error),
}
