//! Declarative view documents.
//!
//! # Conceptual overview
//! A view document is a JSON tree of view nodes. Each node has a type (a stack, some text, an
//! image, a navigation link, ...), an optional value, optional style properties, and children.
//! Documents are decoded once and never mutated; the renderer maps them onto
//! [`RenderInstruction`]s, a toolkit-neutral tree that a [`Backend`] turns into native views.
//!
//! ## Nodes
//! There is one node type, [`ViewNode`], rather than one type per kind of view. A node may carry
//! children in several collections (`subviews`, `content`, `destination`, `destinationUrl`,
//! `label`); the renderer picks the one that matters for the node's kind and ignores the others.
//! Unknown kinds are not errors: they decode to no kind and render as nothing, so older renderers
//! can display newer documents.
//!
//! ## Properties
//! [`Properties`] is a fixed set of optional style attributes. An absent property means "use the
//! host default", and the defaults themselves come from a [`RenderConfig`] that is passed into the
//! renderer explicitly. A property that fails validation is dropped on its own; it never takes
//! the rest of the document down with it.
//!
//! ## Remote subtrees
//! A navigation link's destination may be a [`RemoteNode`]: an id and a URL. When such a node is
//! first rendered by a [`Host`], a [`RemoteLoader`] starts fetching it. Until the load settles the
//! subtree renders as an in-progress placeholder; afterwards it renders either the loaded
//! document or a fixed fallback tree (a vertical stack with the text "Error"). Each loader
//! settles exactly once.
//!
//! ## Hosts and Backends
//! A [`Host`] owns a document and the loaders of its remote subtrees. Rendering the root produces
//! a `SetRoot` patch; every settled load produces a `Replace` patch for just that subtree. The
//! host never blocks: loads complete on a tokio runtime, and their results wait in a channel
//! until the host is polled from the UI thread.

pub mod alignment;
pub mod backend;
pub mod color;
pub mod config;
pub mod error;
pub mod fetch;
mod host;
mod insets;
pub mod properties;
pub mod remote;
pub mod render;
mod view;

pub use backend::{Backend, ImageResolution, ImageResolver};
pub use config::RenderConfig;
pub use error::{DecodeError, LoadError, RenderSkip, TransportError};
pub use fetch::{Fetch, HttpFetcher};
pub use host::{Host, Patch};
pub use insets::EdgeInsets;
pub use properties::Properties;
pub use remote::{load_document, LoadState, RemoteLoader, RemoteNode, Settled};
pub use render::{ImageSource, Modifier, RemoteSource, RenderInstruction, Renderer};
pub use view::{ImageSourceKind, Kind, NodeValue, ViewId, ViewNode};
