//! Remote subtrees.
//!
//! A [`RemoteNode`] is just a reference: an id and a URL. The content behind it is loaded by a
//! [`RemoteLoader`], a single-shot state machine that starts in [`LoadState::Loading`] and makes
//! at most one transition, to either [`LoadState::Loaded`] or [`LoadState::Failed`].
//!
//! Failures never propagate past the loader: a failed load carries the fallback tree, which is
//! rendered in place of just that subtree.

use crate::error::LoadError;
use crate::fetch::Fetch;
use crate::view::{ViewId, ViewNode};
use crossbeam::channel::{self, Receiver, Sender};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::mem;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use url::Url;

/// A reference to a view document at a URL.
///
/// Unlike [`ViewNode`], both fields are required on the wire and the id is encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemoteNode {
    pub id: ViewId,
    pub url: Url,
}

impl RemoteNode {
    pub fn new(url: Url) -> RemoteNode {
        RemoteNode {
            id: ViewId::new(),
            url,
        }
    }
}

/// The state of a remote load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// The fetch hasn't resolved yet.
    Loading,
    /// The document was fetched and decoded.
    Loaded(Arc<ViewNode>),
    /// The fetch or the decode failed; `fallback` is shown instead.
    Failed {
        fallback: Arc<ViewNode>,
        error: LoadError,
    },
}

impl LoadState {
    fn failed(error: LoadError) -> LoadState {
        LoadState::Failed {
            fallback: Arc::new(ViewNode::fallback()),
            error,
        }
    }

    /// Returns true for `Loaded` and `Failed`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LoadState::Loading)
    }
}

/// Notification that a loader reached its terminal state.
#[derive(Debug, Clone, PartialEq)]
pub struct Settled {
    pub node: RemoteNode,
    pub state: LoadState,
}

/// Fetches and decodes the document at `url`.
///
/// Unlike a [`RemoteLoader`], this returns the error to the caller; it's what hosts use for
/// top-level documents, where there is nothing to fall back to.
pub async fn load_document(fetcher: &dyn Fetch, url: &Url) -> Result<ViewNode, LoadError> {
    let bytes = fetcher.fetch(url).await?;
    Ok(ViewNode::from_slice(&bytes)?)
}

#[derive(Debug)]
struct Inner {
    state: LoadState,
    subscribers: Vec<Sender<Settled>>,
}

/// Loader state shared with the fetch task.
#[derive(Debug)]
struct Shared {
    node: RemoteNode,
    inner: Mutex<Inner>,
}

impl Shared {
    /// Performs the terminal transition. Returns false if one already happened.
    fn settle(&self, next: LoadState) -> bool {
        let subscribers = {
            let mut inner = self.inner.lock();
            if inner.state.is_terminal() {
                tracing::debug!(id = %self.node.id, "ignoring transition of a settled loader");
                return false;
            }
            inner.state = next.clone();
            mem::take(&mut inner.subscribers)
        };

        for subscriber in subscribers {
            // subscribers that went away don't care
            let _ = subscriber.send(Settled {
                node: self.node.clone(),
                state: next.clone(),
            });
        }
        true
    }
}

/// Loads one remote subtree.
///
/// The fetch task is owned by the loader and aborted when the loader is dropped.
#[derive(Debug)]
pub struct RemoteLoader {
    node: RemoteNode,
    shared: Arc<Shared>,
    task: JoinHandle<()>,
}

impl RemoteLoader {
    /// Creates a loader and immediately starts fetching on the given runtime.
    pub fn spawn(node: RemoteNode, fetcher: Arc<dyn Fetch>, runtime: &Handle) -> RemoteLoader {
        let shared = Arc::new(Shared {
            node: node.clone(),
            inner: Mutex::new(Inner {
                state: LoadState::Loading,
                subscribers: Vec::new(),
            }),
        });

        let task = runtime.spawn({
            let shared = Arc::clone(&shared);
            let url = node.url.clone();
            async move {
                let next = match load_document(&*fetcher, &url).await {
                    Ok(document) => {
                        tracing::debug!(id = %shared.node.id, %url, "remote view loaded");
                        LoadState::Loaded(Arc::new(document))
                    }
                    Err(error) => {
                        tracing::warn!(id = %shared.node.id, %url, "remote view failed to load: {}", error);
                        LoadState::failed(error)
                    }
                };
                shared.settle(next);
            }
        });

        RemoteLoader { node, shared, task }
    }

    pub fn id(&self) -> ViewId {
        self.node.id
    }

    pub fn url(&self) -> &Url {
        &self.node.url
    }

    /// Returns the current state.
    pub fn state(&self) -> LoadState {
        self.shared.inner.lock().state.clone()
    }

    /// Subscribes to the terminal transition.
    ///
    /// The returned receiver yields exactly one [`Settled`] notification; if the loader has
    /// already settled, it is available immediately.
    pub fn subscribe(&self) -> Receiver<Settled> {
        let (sender, receiver) = channel::bounded(1);
        self.subscribe_with(sender);
        receiver
    }

    /// Like [`subscribe`](Self::subscribe), but delivers into an existing channel. Used to funnel
    /// many loaders into a single receiver.
    pub fn subscribe_with(&self, sender: Sender<Settled>) {
        let settled = {
            let mut inner = self.shared.inner.lock();
            if !inner.state.is_terminal() {
                inner.subscribers.push(sender);
                return;
            }
            inner.state.clone()
        };

        let _ = sender.send(Settled {
            node: self.node.clone(),
            state: settled,
        });
    }
}

impl Drop for RemoteLoader {
    fn drop(&mut self) {
        self.task.abort();
    }
}
