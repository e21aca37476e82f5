use super::table::RouteEntry;

/// The currently active route
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    current_path: Option<String>,
    current_entry: Option<RouteEntry>,
    redirected_from: Option<String>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the active entry (after redirects)
    pub fn current_path(&self) -> Option<&str> {
        self.current_path.as_deref()
    }

    pub fn current_entry(&self) -> Option<&RouteEntry> {
        self.current_entry.as_ref()
    }

    /// Requested path when the last resolution went through a redirect
    pub fn redirected_from(&self) -> Option<&str> {
        self.redirected_from.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.current_entry.is_none()
    }

    /// Replace the active entry, returning the previous one
    pub(crate) fn commit(
        &mut self,
        entry: RouteEntry,
        redirected_from: Option<String>,
    ) -> Option<RouteEntry> {
        self.current_path = Some(entry.path.clone());
        self.redirected_from = redirected_from;
        self.current_entry.replace(entry)
    }
}

/// Delivered to observers on every successful navigation
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub from: Option<RouteEntry>,
    pub to: RouteEntry,
    /// Normalized path that was asked for
    pub requested: String,
}

impl Transition {
    pub fn redirected(&self) -> bool {
        self.requested != self.to.path
    }
}
