//! Focus path resolution.
//!
//! The focus stack is the chain of active containers below the active view,
//! ending in the active leaf (or an empty slot). Entries hold the child names
//! leading from the view to each node rather than references, so the
//! dispatcher can borrow one node mutably at a time.

use crate::view::Drawable;

/// One node on the focus path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusEntry {
    path: Vec<String>,
    present: bool,
}

impl FocusEntry {
    pub fn present(path: Vec<String>) -> Self {
        Self { path, present: true }
    }

    /// An active name whose slot is empty or unregistered.
    pub fn absent(path: Vec<String>) -> Self {
        Self {
            path,
            present: false,
        }
    }

    /// Child names from the active view. Empty for the view itself.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Name of this node within its parent, `None` for the view.
    pub fn name(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }
}

/// Root-to-leaf focus path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusStack {
    entries: Vec<FocusEntry>,
}

impl FocusStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one level below the current leaf.
    pub fn push(&mut self, entry: FocusEntry) {
        self.entries.push(entry);
    }

    /// Empty the stack, keeping its allocation for the next dispatch.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Root first.
    pub fn iter(&self) -> std::slice::Iter<'_, FocusEntry> {
        self.entries.iter()
    }

    /// The deepest entry.
    pub fn leaf(&self) -> Option<&FocusEntry> {
        self.entries.last()
    }
}

impl<'a> IntoIterator for &'a FocusStack {
    type Item = &'a FocusEntry;
    type IntoIter = std::slice::Iter<'a, FocusEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Follow `path` down from `root` through nested containers.
///
/// Returns `None` if any step is missing, empty, or passes through a leaf.
pub fn resolve<'a>(root: &'a dyn Drawable, path: &[String]) -> Option<&'a dyn Drawable> {
    let mut node = root;
    for name in path {
        node = node.as_container()?.view().child(name)?;
    }
    Some(node)
}

pub fn resolve_mut<'a>(
    root: &'a mut (dyn Drawable + 'static),
    path: &[String],
) -> Option<&'a mut (dyn Drawable + 'static)> {
    let mut node = root;
    for name in path {
        node = node.as_container_mut()?.view_mut().child_mut(name)?;
    }
    Some(node)
}
