use std::sync::Arc;

use futures::StreamExt;
use parking_lot::RwLock;

/// Spawns a task that drains `subscription` into `data`, last write wins.
///
/// The task exits when `data` has no other owner left.
pub(crate) fn subscribe_thread<T, U>(
    subscription: ros2_client::Subscription<T>,
    data: Arc<RwLock<U>>,
    mut f: impl FnMut(T) -> U + Send + 'static,
) where
    T: ros2_client::Message + Send + Sync + 'static,
    U: Send + Sync + 'static,
{
    tokio::spawn(async move {
        let mut stream = Box::pin(subscription.async_stream());
        while Arc::strong_count(&data) > 1 {
            match stream.next().await {
                Some(Ok((message, _info))) => *data.write() = f(message),
                Some(Err(e)) => tracing::error!("ros2-client take error: {e:?}"),
                None => break,
            }
        }
    });
}
