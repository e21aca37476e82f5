use std::collections::HashMap;

use super::schema::{AppConfig, RouteConfig, RouteSpec, ViewMeta};
use crate::navigation::stack::DEFAULT_HISTORY_SIZE;

/// Default keybindings for the route explorer
pub fn default_keybindings() -> HashMap<String, String> {
    let mut bindings = HashMap::new();

    // Global
    bindings.insert("q".to_string(), "quit".to_string());
    bindings.insert("?".to_string(), "help".to_string());
    bindings.insert("Ctrl+c".to_string(), "quit".to_string());

    // Route list
    bindings.insert("j".to_string(), "down".to_string());
    bindings.insert("k".to_string(), "up".to_string());
    bindings.insert("Down".to_string(), "down".to_string());
    bindings.insert("Up".to_string(), "up".to_string());
    bindings.insert("g".to_string(), "top".to_string());
    bindings.insert("G".to_string(), "bottom".to_string());
    bindings.insert("Enter".to_string(), "select".to_string());
    bindings.insert("l".to_string(), "select".to_string());

    // History
    bindings.insert("Esc".to_string(), "back".to_string());
    bindings.insert("h".to_string(), "back".to_string());
    bindings.insert("Backspace".to_string(), "back".to_string());

    // Path prompt
    bindings.insert(":".to_string(), "goto".to_string());
    bindings.insert("/".to_string(), "goto".to_string());

    bindings
}

fn route(path: &str, view: &str) -> RouteSpec {
    RouteSpec {
        path: path.to_string(),
        name: None,
        view: Some(view.to_string()),
        redirect: None,
    }
}

fn named(path: &str, name: &str, view: &str) -> RouteSpec {
    RouteSpec {
        name: Some(name.to_string()),
        ..route(path, view)
    }
}

fn meta(title: &str, description: &str) -> ViewMeta {
    ViewMeta {
        title: Some(title.to_string()),
        description: Some(description.to_string()),
    }
}

/// Project workspace table: `/` redirects to the dashboard
pub fn workspace_config() -> RouteConfig {
    let mut views = HashMap::new();
    views.insert("Dashboard".to_string(), meta("Dashboard", "Overview of recent activity"));
    views.insert("Projects".to_string(), meta("Projects", "All projects in the workspace"));
    views.insert("Tasks".to_string(), meta("Tasks", "Open and completed tasks"));
    views.insert("Team".to_string(), meta("Team", "Workspace members"));
    views.insert("Settings".to_string(), meta("Settings", "Workspace preferences"));

    RouteConfig {
        version: "v1".to_string(),
        app: AppConfig {
            name: "Workspace".to_string(),
            description: Some("Dashboard, projects, tasks and team".to_string()),
            history_size: DEFAULT_HISTORY_SIZE,
        },
        start: "/".to_string(),
        views,
        routes: vec![
            RouteSpec {
                path: "/".to_string(),
                name: None,
                view: None,
                redirect: Some("/dashboard".to_string()),
            },
            route("/dashboard", "Dashboard"),
            route("/projects", "Projects"),
            route("/tasks", "Tasks"),
            route("/team", "Team"),
            route("/settings", "Settings"),
        ],
    }
}

/// Feed reader table with named routes
pub fn feeds_config() -> RouteConfig {
    let mut views = HashMap::new();
    views.insert("Home".to_string(), meta("Home", "Latest downloads"));
    views.insert("About".to_string(), meta("About", "Version and project information"));
    views.insert("RSS".to_string(), meta("RSS", "Subscribed feeds and parse rules"));
    views.insert("Settings".to_string(), meta("Settings", "Downloader and notification settings"));

    RouteConfig {
        version: "v1".to_string(),
        app: AppConfig {
            name: "Feeds".to_string(),
            description: None,
            history_size: DEFAULT_HISTORY_SIZE,
        },
        start: "/".to_string(),
        views,
        routes: vec![
            named("/", "Home", "Home"),
            named("/about", "About", "About"),
            named("/rss", "Matrix", "RSS"),
            named("/settings", "Ntfy", "Settings"),
        ],
    }
}
