use crate::backend::Backend;
use crate::config::RenderConfig;
use crate::error::{DecodeError, LoadError};
use crate::fetch::Fetch;
use crate::remote::{load_document, LoadState, RemoteLoader, RemoteNode, Settled};
use crate::render::{RemoteSource, RenderInstruction, Renderer};
use crate::view::ViewNode;
use crossbeam::channel::{self, Receiver, Sender, TryRecvError};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::runtime::Handle;
use url::Url;

/// Patches for a backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    /// Sets the whole view hierarchy.
    SetRoot(RenderInstruction),
    /// Replaces the content of every remote subtree referencing `node`.
    Replace {
        node: RemoteNode,
        content: RenderInstruction,
    },
}

/// Starts one loader per remote node, the first time the node is rendered.
///
/// Nodes are keyed by id and URL together; a reused id pointing somewhere else gets its own
/// loader.
struct LoaderRegistry {
    loaders: Mutex<HashMap<RemoteNode, RemoteLoader>>,
    fetcher: Arc<dyn Fetch>,
    runtime: Handle,
    settled_send: Sender<Settled>,
}

impl RemoteSource for LoaderRegistry {
    fn state(&self, node: &RemoteNode) -> LoadState {
        let mut loaders = self.loaders.lock();
        let loader = loaders.entry(node.clone()).or_insert_with(|| {
            tracing::debug!(id = %node.id, url = %node.url, "starting remote load");
            let loader = RemoteLoader::spawn(node.clone(), Arc::clone(&self.fetcher), &self.runtime);
            loader.subscribe_with(self.settled_send.clone());
            loader
        });
        loader.state()
    }
}

/// Connects a view document to a backend.
///
/// The host owns the document, the loaders of its remote subtrees, and the last rendered
/// instruction tree. Loaders settle on the runtime's threads; their notifications queue up until
/// [`poll`](Host::poll) is called from whichever thread the backend expects updates on.
pub struct Host {
    document: ViewNode,
    config: RenderConfig,
    loaders: LoaderRegistry,
    settled_recv: Receiver<Settled>,
    rendered: Option<RenderInstruction>,
    patches: VecDeque<Patch>,
}

impl Host {
    /// Creates a new Host.
    ///
    /// Nothing is rendered (and nothing fetched) until you call `render_root`.
    pub fn new(
        document: ViewNode,
        config: RenderConfig,
        fetcher: Arc<dyn Fetch>,
        runtime: Handle,
    ) -> Host {
        let (settled_send, settled_recv) = channel::unbounded();

        Host {
            document,
            config,
            loaders: LoaderRegistry {
                loaders: Mutex::new(HashMap::new()),
                fetcher,
                runtime,
                settled_send,
            },
            settled_recv,
            rendered: None,
            patches: VecDeque::new(),
        }
    }

    /// Creates a host for a local document.
    pub fn from_slice(
        bytes: &[u8],
        config: RenderConfig,
        fetcher: Arc<dyn Fetch>,
        runtime: Handle,
    ) -> Result<Host, DecodeError> {
        let document = ViewNode::from_slice(bytes)?;
        Ok(Host::new(document, config, fetcher, runtime))
    }

    /// Creates a host for a document at a URL. Failing to load it is an error.
    pub async fn load(
        url: &Url,
        config: RenderConfig,
        fetcher: Arc<dyn Fetch>,
        runtime: Handle,
    ) -> Result<Host, LoadError> {
        let document = load_document(&*fetcher, url).await?;
        Ok(Host::new(document, config, fetcher, runtime))
    }

    pub fn document(&self) -> &ViewNode {
        &self.document
    }

    /// The last rendered tree, with settled remote subtrees patched in.
    pub fn rendered(&self) -> Option<&RenderInstruction> {
        self.rendered.as_ref()
    }

    /// Number of remote loads that haven't settled yet.
    pub fn pending_loads(&self) -> usize {
        self.loaders
            .loaders
            .lock()
            .values()
            .filter(|loader| !loader.state().is_terminal())
            .count()
    }

    /// Renders the document, starting loads for remote subtrees, and queues a `SetRoot` patch.
    pub fn render_root(&mut self) -> &RenderInstruction {
        let root = Renderer::new(&self.config, &self.loaders).render(&self.document);
        self.patches.push_back(Patch::SetRoot(root.clone()));
        self.rendered.insert(root)
    }

    /// Receives all settled loads and queues a `Replace` patch for each.
    ///
    /// Never blocks. Returns the number of patches queued. Does nothing until the root has been
    /// rendered; loads that settle before that stay queued.
    pub fn poll(&mut self) -> usize {
        let rendered = match &mut self.rendered {
            Some(rendered) => rendered,
            None => return 0,
        };

        let mut queued = 0;
        loop {
            let settled = match self.settled_recv.try_recv() {
                Ok(settled) => settled,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            };

            // loaded content may itself contain remote subtrees; rendering starts those too
            let content = Renderer::new(&self.config, &self.loaders).render_state(&settled.state);

            if rendered.replace_remote(&settled.node, &content) == 0 {
                tracing::debug!(id = %settled.node.id, "settled remote view is not in the tree");
                continue;
            }
            self.patches.push_back(Patch::Replace {
                node: settled.node,
                content,
            });
            queued += 1;
        }
        queued
    }

    /// Returns an iterator over queued patches.
    ///
    /// Does not drain the queue immediately.
    /// Calling `next` will always remove a patch from the queue.
    pub fn patches(&mut self) -> impl Iterator<Item = Patch> + '_ {
        struct PatchIterator<'a>(&'a mut VecDeque<Patch>);
        impl<'a> Iterator for PatchIterator<'a> {
            type Item = Patch;
            fn next(&mut self) -> Option<Patch> {
                self.0.pop_front()
            }
        }

        PatchIterator(&mut self.patches)
    }

    /// Polls, then hands every queued patch to the backend.
    ///
    /// Stops at the first backend error; patches after it stay queued.
    pub fn apply<B: Backend>(&mut self, backend: &mut B) -> Result<(), B::Error> {
        self.poll();
        while let Some(patch) = self.patches.pop_front() {
            let result = match &patch {
                Patch::SetRoot(root) => backend.set_root(root),
                Patch::Replace { node, content } => backend.replace(node, content),
            };
            if let Err(err) = result {
                self.patches.push_front(patch);
                return Err(err);
            }
        }
        Ok(())
    }
}
