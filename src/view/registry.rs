use std::collections::HashMap;

use super::placeholder::PlaceholderView;
use super::renderer::ViewRenderer;
use crate::config::RouteConfig;
use crate::navigation::{RouteTable, ViewId};

/// Renderers keyed by the view ids route entries refer to
#[derive(Default)]
pub struct ViewRegistry {
    renderers: HashMap<ViewId, Box<dyn ViewRenderer>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a placeholder renderer for every view the table references
    pub fn from_config(config: &RouteConfig, table: &RouteTable) -> Self {
        let mut registry = Self::new();
        for view_id in table.view_ids() {
            let meta = config.view_meta(view_id.as_str());
            registry.register(
                view_id.clone(),
                PlaceholderView::from_meta(view_id.as_str(), meta),
            );
        }
        registry
    }

    /// Returns the renderer previously registered under `view_id`, if any
    pub fn register<R>(&mut self, view_id: ViewId, renderer: R) -> Option<Box<dyn ViewRenderer>>
    where
        R: ViewRenderer + 'static,
    {
        self.renderers.insert(view_id, Box::new(renderer))
    }

    pub fn get_mut(&mut self, view_id: &ViewId) -> Option<&mut (dyn ViewRenderer + 'static)> {
        self.renderers.get_mut(view_id).map(|r| r.as_mut())
    }

    pub fn contains(&self, view_id: &ViewId) -> bool {
        self.renderers.contains_key(view_id)
    }

    /// View ids the table references that have no renderer
    pub fn missing_for(&self, table: &RouteTable) -> Vec<ViewId> {
        table
            .view_ids()
            .into_iter()
            .filter(|id| !self.contains(id))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{feeds_config, workspace_config};

    #[test]
    fn test_from_config_covers_every_view() {
        let config = workspace_config();
        let table = config.build_table().unwrap();
        let registry = ViewRegistry::from_config(&config, &table);

        assert_eq!(registry.len(), 5);
        assert!(registry.missing_for(&table).is_empty());
    }

    #[test]
    fn test_missing_views_reported() {
        let config = feeds_config();
        let table = config.build_table().unwrap();
        let mut registry = ViewRegistry::new();
        registry.register(ViewId::new("Home"), PlaceholderView::new("Home"));

        let missing: Vec<String> = registry
            .missing_for(&table)
            .iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(missing, vec!["About", "RSS", "Settings"]);
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = ViewRegistry::new();
        let id = ViewId::new("Tasks");

        assert!(registry.register(id.clone(), PlaceholderView::new("Tasks")).is_none());
        assert!(registry.register(id.clone(), PlaceholderView::new("Todo")).is_some());
        assert_eq!(registry.get_mut(&id).unwrap().title(), "Todo");
    }
}
