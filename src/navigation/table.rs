use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

use super::path;
use crate::error::{Result, RouterError};

/// Stable identifier of a renderable view unit supplied by the application
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a route points at: a view, or another path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    View(ViewId),
    Redirect(String),
}

/// One path-to-view (or path-to-path) mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    pub name: Option<String>,
    pub target: RouteTarget,
}

impl RouteEntry {
    pub fn view(path: impl Into<String>, view: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            target: RouteTarget::View(ViewId::new(view)),
        }
    }

    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            target: RouteTarget::Redirect(to.into()),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self.target, RouteTarget::Redirect(_))
    }

    pub fn view_id(&self) -> Option<&ViewId> {
        match &self.target {
            RouteTarget::View(id) => Some(id),
            RouteTarget::Redirect(_) => None,
        }
    }

    pub fn redirect_to(&self) -> Option<&str> {
        match &self.target {
            RouteTarget::Redirect(to) => Some(to),
            RouteTarget::View(_) => None,
        }
    }
}

impl fmt::Display for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            RouteTarget::View(id) => write!(f, "{} [{}]", self.path, id)?,
            RouteTarget::Redirect(to) => write!(f, "{} -> {}", self.path, to)?,
        }
        if let Some(name) = &self.name {
            write!(f, " ({})", name)?;
        }
        Ok(())
    }
}

/// Outcome of a table lookup: the terminal entry plus every path visited
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<'a> {
    pub entry: &'a RouteEntry,
    /// Requested path first, terminal entry's path last
    pub chain: Vec<String>,
}

impl Resolution<'_> {
    pub fn requested(&self) -> &str {
        &self.chain[0]
    }

    pub fn redirected(&self) -> bool {
        self.chain.len() > 1
    }
}

/// Ordered, validated, immutable table of routes
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    /// Normalized path -> position of the first entry with that path
    by_path: HashMap<String, usize>,
}

impl RouteTable {
    /// Build a table, normalizing every path and rejecting duplicate paths,
    /// duplicate names, dangling redirects and redirect cycles
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self> {
        let mut normalized = Vec::with_capacity(entries.len());
        let mut by_path = HashMap::with_capacity(entries.len());
        let mut names = HashSet::new();

        for entry in entries {
            let path = path::normalize(&entry.path)?;
            let target = match entry.target {
                RouteTarget::Redirect(to) => RouteTarget::Redirect(path::normalize(&to)?),
                view => view,
            };

            if by_path.contains_key(&path) {
                return Err(RouterError::DuplicatePath { path });
            }
            if let Some(name) = &entry.name
                && !names.insert(name.clone())
            {
                return Err(RouterError::DuplicateName { name: name.clone() });
            }

            by_path.insert(path.clone(), normalized.len());
            normalized.push(RouteEntry {
                path,
                name: entry.name,
                target,
            });
        }

        let table = Self {
            entries: normalized,
            by_path,
        };

        for entry in &table.entries {
            if let RouteTarget::Redirect(to) = &entry.target
                && !table.by_path.contains_key(to)
            {
                return Err(RouterError::DanglingRedirect {
                    from: entry.path.clone(),
                    to: to.clone(),
                });
            }
        }

        // Every redirect must terminate at a view
        for entry in table.entries.iter().filter(|e| e.is_redirect()) {
            table.resolve(&entry.path)?;
        }

        tracing::debug!(routes = table.entries.len(), "route table built");
        Ok(table)
    }

    /// Resolve a path to its terminal entry without touching any navigation state
    pub fn resolve(&self, raw: &str) -> Result<Resolution<'_>> {
        // A path that cannot be normalized can never match an entry
        let requested = path::normalize(raw).map_err(|_| RouterError::NotFound {
            path: raw.to_string(),
        })?;

        let mut visited = HashSet::from([requested.clone()]);
        let mut chain = vec![requested.clone()];
        let mut current = requested;

        loop {
            let entry = self
                .lookup(&current)
                .ok_or_else(|| RouterError::NotFound {
                    path: current.clone(),
                })?;

            match &entry.target {
                RouteTarget::View(_) => return Ok(Resolution { entry, chain }),
                RouteTarget::Redirect(to) => {
                    chain.push(to.clone());
                    if !visited.insert(to.clone()) {
                        return Err(RouterError::RedirectCycle { chain });
                    }
                    current = to.clone();
                }
            }
        }
    }

    /// Exact lookup of a normalized path, without following redirects
    pub fn lookup(&self, path: &str) -> Option<&RouteEntry> {
        self.by_path.get(path).map(|&idx| &self.entries[idx])
    }

    pub fn find_by_name(&self, name: &str) -> Option<&RouteEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name.as_deref() == Some(name))
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn position(&self, path: &str) -> Option<usize> {
        self.by_path.get(path).copied()
    }

    /// Distinct view ids referenced by the table, in table order
    pub fn view_ids(&self) -> Vec<&ViewId> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .filter_map(RouteEntry::view_id)
            .filter(|id| seen.insert(*id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
