use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Result, RouterError};
use crate::navigation::{NavigationStack, RouteEntry, RouteTable};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    pub version: String,
    pub app: AppConfig,
    #[serde(default = "default_start")]
    pub start: String,
    #[serde(default)]
    pub views: HashMap<String, ViewMeta>,
    pub routes: Vec<RouteSpec>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

fn default_start() -> String {
    "/".to_string()
}

fn default_history_size() -> usize {
    crate::navigation::stack::DEFAULT_HISTORY_SIZE
}

/// Display metadata for a view id, used by the explorer
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ViewMeta {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A route as written in YAML; exactly one of `view` / `redirect` must be set
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteSpec {
    pub path: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub view: Option<String>,
    #[serde(default)]
    pub redirect: Option<String>,
}

impl RouteSpec {
    pub fn to_entry(&self) -> Result<RouteEntry> {
        let entry = match (&self.view, &self.redirect) {
            (Some(view), None) => RouteEntry::view(&self.path, view),
            (None, Some(to)) => RouteEntry::redirect(&self.path, to),
            _ => {
                return Err(RouterError::Config(format!(
                    "Route '{}' must define exactly one of 'view' or 'redirect'",
                    self.path
                )));
            }
        };

        Ok(match &self.name {
            Some(name) => entry.with_name(name),
            None => entry,
        })
    }
}

impl RouteConfig {
    /// Convert the declared routes into a validated table
    pub fn build_table(&self) -> Result<RouteTable> {
        let entries = self
            .routes
            .iter()
            .map(RouteSpec::to_entry)
            .collect::<Result<Vec<_>>>()?;

        RouteTable::new(entries)
    }

    pub fn history(&self) -> NavigationStack {
        NavigationStack::new(self.app.history_size)
    }

    pub fn view_meta(&self, view_id: &str) -> Option<&ViewMeta> {
        self.views.get(view_id)
    }
}
