use anyhow::{Context, Result};
use std::path::Path;

use super::schema::RouteConfig;

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<RouteConfig> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read route file: {:?}", path.as_ref()))?;

        Self::load_from_string(&content)
    }

    pub fn load_from_string(content: &str) -> Result<RouteConfig> {
        let config: RouteConfig =
            serde_yaml::from_str(content).context("Failed to parse YAML route table")?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_minimal_config() {
        let yaml = r#"
version: v1
app:
  name: "Test App"
routes:
  - path: /
    redirect: /dashboard
  - path: /dashboard
    view: Dashboard
"#;

        let result = ConfigLoader::load_from_string(yaml);
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(config.version, "v1");
        assert_eq!(config.app.name, "Test App");
        assert_eq!(config.app.history_size, 50);
        assert_eq!(config.start, "/");
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[0].redirect.as_deref(), Some("/dashboard"));
    }

    #[test]
    fn test_load_named_routes_and_views() {
        let yaml = r#"
version: v1
app:
  name: "Feeds"
  history_size: 10
start: /rss
views:
  RSS:
    title: "RSS Feeds"
    description: "Subscribed feeds"
routes:
  - path: /
    name: Home
    view: Home
  - path: /rss
    name: Matrix
    view: RSS
"#;

        let config = ConfigLoader::load_from_string(yaml).unwrap();
        assert_eq!(config.start, "/rss");
        assert_eq!(config.app.history_size, 10);
        assert_eq!(config.routes[1].name.as_deref(), Some("Matrix"));
        assert_eq!(
            config.view_meta("RSS").unwrap().title.as_deref(),
            Some("RSS Feeds")
        );

        let table = config.build_table().unwrap();
        assert_eq!(table.find_by_name("Matrix").unwrap().path, "/rss");
    }

    #[test]
    fn test_load_rejects_malformed_yaml() {
        let result = ConfigLoader::load_from_string("version: [v1");
        assert!(result.is_err());
    }

    #[test]
    fn test_demo_tables_match_builtins() {
        let workspace = ConfigLoader::load_from_string(include_str!("../../demos/workspace.yaml"))
            .unwrap()
            .build_table()
            .unwrap();
        let builtin = crate::config::workspace_config().build_table().unwrap();
        assert_eq!(workspace.entries(), builtin.entries());

        let feeds = ConfigLoader::load_from_string(include_str!("../../demos/feeds.yaml"))
            .unwrap()
            .build_table()
            .unwrap();
        let builtin = crate::config::feeds_config().build_table().unwrap();
        assert_eq!(feeds.entries(), builtin.entries());
    }

    #[test]
    fn test_demo_duplicate_table_rejected() {
        let config =
            ConfigLoader::load_from_string(include_str!("../../demos/broken-duplicate.yaml"))
                .unwrap();
        let err = config.build_table().unwrap_err();
        assert!(err.to_string().contains("/settings"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = ConfigLoader::load_from_file("/definitely/not/here.yaml");
        assert!(result.unwrap_err().to_string().contains("Failed to read"));
    }
}
