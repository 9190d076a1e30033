//! Display nodes: the root visual element a viewer hands to its host

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::surface::DisplaySurface;

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a display node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl NodeId {
    fn next() -> Self {
        NodeId(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

struct NodeInner {
    id: NodeId,
    class: &'static str,
    surface: RefCell<Box<dyn DisplaySurface>>,
}

/// Shared handle to a viewer's root visual element.
///
/// Clones share identity: the host keeps a clone in its layout tree while
/// the viewer keeps the original. Not `Send`; nodes live on the UI thread.
#[derive(Clone)]
pub struct DisplayNode(Rc<NodeInner>);

impl DisplayNode {
    pub fn new(class: &'static str, surface: Box<dyn DisplaySurface>) -> Self {
        Self(Rc::new(NodeInner {
            id: NodeId::next(),
            class,
            surface: RefCell::new(surface),
        }))
    }

    pub fn id(&self) -> NodeId {
        self.0.id
    }

    /// Style class the host can target
    pub fn class(&self) -> &'static str {
        self.0.class
    }

    /// Whether both handles point at the same node
    pub fn ptr_eq(&self, other: &DisplayNode) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Viewer nodes never accept text input
    pub fn is_editable(&self) -> bool {
        false
    }

    /// Viewer nodes are skipped by the host's input focus order
    pub fn is_focusable(&self) -> bool {
        false
    }

    /// Borrow the surface for reading
    pub fn surface(&self) -> Ref<'_, Box<dyn DisplaySurface>> {
        self.0.surface.borrow()
    }

    pub(crate) fn surface_mut(&self) -> RefMut<'_, Box<dyn DisplaySurface>> {
        self.0.surface.borrow_mut()
    }
}

impl PartialEq for DisplayNode {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for DisplayNode {}

impl fmt::Debug for DisplayNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayNode")
            .field("id", &self.0.id)
            .field("class", &self.0.class)
            .finish_non_exhaustive()
    }
}
