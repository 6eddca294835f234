//! In-flight request coalescing
//!
//! [`CoalescingGateway`] wraps another gateway so that identical requests
//! issued while one is already outstanding (a double-submitted form, say)
//! share that single outbound call instead of starting their own.

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt, Shared};
use std::collections::HashMap;
use std::fmt::Write;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};
use vakyalok_application::{CompletionGateway, CompletionResult, GatewayError, SendOptions};
use vakyalok_domain::Conversation;

type SharedCall = Shared<BoxFuture<'static, CompletionResult>>;
type InFlight = Arc<Mutex<HashMap<String, SharedCall>>>;

/// Gateway decorator that merges concurrent identical requests.
///
/// Two requests are identical when model override, parameter override and
/// every message match. Every waiter receives a clone of the one result.
/// The shared call runs on a spawned task and its key is released as soon
/// as that task finishes, whether or not anyone is still waiting, so a
/// later identical request goes out again.
///
/// Must be used from within a tokio runtime.
pub struct CoalescingGateway<G> {
    inner: Arc<G>,
    in_flight: InFlight,
}

impl<G: CompletionGateway + 'static> CoalescingGateway<G> {
    pub fn new(inner: Arc<G>) -> Self {
        Self {
            inner,
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn inner(&self) -> &Arc<G> {
        &self.inner
    }

    /// Number of distinct requests currently outstanding
    pub fn in_flight_count(&self) -> usize {
        lock(&self.in_flight).len()
    }

    fn join_or_start(&self, conversation: &Conversation, options: &SendOptions) -> SharedCall {
        let key = request_key(conversation, options);
        let mut in_flight = lock(&self.in_flight);

        if let Some(call) = in_flight.get(&key) {
            debug!(
                messages = conversation.len(),
                "Joining identical in-flight completion request"
            );
            return call.clone();
        }

        let inner = Arc::clone(&self.inner);
        let release = ReleaseKey {
            registry: Arc::clone(&self.in_flight),
            key: key.clone(),
        };
        let conversation = conversation.clone();
        let options = options.clone();

        // The call runs on its own task so it completes, and frees its key,
        // even when every waiter has been dropped.
        let task = tokio::spawn(async move {
            let _release = release;
            inner.send_with(&conversation, &options).await
        });

        let call = async move {
            task.await.unwrap_or_else(|e| {
                warn!("Coalesced completion task did not finish: {}", e);
                Err(GatewayError::network())
            })
        }
        .boxed()
        .shared();

        in_flight.insert(key, call.clone());
        call
    }
}

/// Removes an in-flight entry when the task owning it ends, panics included.
struct ReleaseKey {
    registry: InFlight,
    key: String,
}

impl Drop for ReleaseKey {
    fn drop(&mut self) {
        lock(&self.registry).remove(&self.key);
    }
}

#[async_trait]
impl<G: CompletionGateway + 'static> CompletionGateway for CoalescingGateway<G> {
    async fn send_with(
        &self,
        conversation: &Conversation,
        options: &SendOptions,
    ) -> CompletionResult {
        self.join_or_start(conversation, options).await
    }
}

fn lock(in_flight: &InFlight) -> std::sync::MutexGuard<'_, HashMap<String, SharedCall>> {
    in_flight.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Length-prefixed encoding of everything that makes two requests identical.
fn request_key(conversation: &Conversation, options: &SendOptions) -> String {
    let model = options.model.as_ref().map(|m| m.as_str()).unwrap_or("");
    let mut key = format!("{}:{}|{:?}", model.len(), model, options.params);
    for message in conversation {
        let _ = write!(
            key,
            "|{}:{}:{}",
            message.role(),
            message.content().len(),
            message.content()
        );
    }
    key
}
