use std::fmt;
use std::sync::Arc;

use super::stack::{NavigationFrame, NavigationStack};
use super::state::{NavigationState, Transition};
use super::table::{RouteEntry, RouteTable};
use crate::error::{Result, RouterError};

/// Callback invoked synchronously after every successful resolution
pub type Observer = Box<dyn FnMut(&Transition)>;

/// Handle returned by [`Router::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Resolves navigation requests against a route table and tracks the active route
///
/// Owned by the application's composition root and passed by reference to
/// whatever needs to navigate.
pub struct Router {
    table: Arc<RouteTable>,
    state: NavigationState,
    history: NavigationStack,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl Router {
    pub fn new(table: Arc<RouteTable>) -> Self {
        Self::with_history(table, NavigationStack::default())
    }

    pub fn with_history(table: Arc<RouteTable>, history: NavigationStack) -> Self {
        Self {
            table,
            state: NavigationState::new(),
            history,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Resolve `path` (following redirects) and make it the active route
    ///
    /// On failure the navigation state is left untouched and no observer runs.
    pub fn resolve(&mut self, path: &str) -> Result<RouteEntry> {
        let table = Arc::clone(&self.table);
        let resolution = match table.resolve(path) {
            Ok(resolution) => resolution,
            Err(e) => {
                tracing::warn!(path, error = %e, "navigation rejected");
                return Err(e);
            }
        };

        let requested = resolution.requested().to_string();
        let redirected_from = resolution.redirected().then(|| requested.clone());
        let to = resolution.entry.clone();

        tracing::debug!(
            requested = %requested,
            resolved = %to.path,
            hops = resolution.chain.len() - 1,
            "navigation resolved"
        );

        let from = self.state.commit(to.clone(), redirected_from);
        let transition = Transition {
            from,
            to: to.clone(),
            requested,
        };
        self.notify(&transition);

        Ok(to)
    }

    /// Entry point for UI triggers: resolve and record the previous route in history
    pub fn navigate(&mut self, path: &str) -> Result<RouteEntry> {
        let previous = self.state.current_path().map(str::to_owned);
        let entry = self.resolve(path)?;

        if let Some(previous) = previous
            && previous != entry.path
        {
            self.history.push(NavigationFrame::new(previous));
        }

        Ok(entry)
    }

    /// Navigate to the entry carrying `name`
    pub fn navigate_named(&mut self, name: &str) -> Result<RouteEntry> {
        let path = self
            .table
            .find_by_name(name)
            .map(|entry| entry.path.clone())
            .ok_or_else(|| RouterError::UnknownRouteName {
                name: name.to_string(),
            })?;

        self.navigate(&path)
    }

    /// Return to the previously active route; `Ok(None)` when history is empty
    pub fn back(&mut self) -> Result<Option<RouteEntry>> {
        match self.history.pop() {
            Some(frame) => self.resolve(&frame.path).map(Some),
            None => Ok(None),
        }
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Transition) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if the subscription was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn current(&self) -> Option<&RouteEntry> {
        self.state.current_entry()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn table(&self) -> &Arc<RouteTable> {
        &self.table
    }

    pub fn history(&self) -> &NavigationStack {
        &self.history
    }

    fn notify(&mut self, transition: &Transition) {
        for (_, observer) in self.observers.iter_mut() {
            observer(transition);
        }
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.table.len())
            .field("state", &self.state)
            .field("history", &self.history.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}
