use anyhow::{Context, Result, anyhow};

use super::schema::{RouteConfig, RouteSpec};
use crate::navigation::ViewId;

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(config: &RouteConfig) -> Result<()> {
        // Validate version
        if config.version != "v1" {
            return Err(anyhow!(
                "Unsupported config version: {}. Expected: v1",
                config.version
            ));
        }

        // Validate app name
        if config.app.name.trim().is_empty() {
            return Err(anyhow!("App name cannot be empty"));
        }

        if config.app.history_size == 0 {
            return Err(anyhow!("history_size must be greater than 0"));
        }

        // Validate routes exist
        if config.routes.is_empty() {
            return Err(anyhow!("No routes defined in config"));
        }

        for (idx, route) in config.routes.iter().enumerate() {
            Self::validate_route(route)
                .with_context(|| format!("Invalid route at index {} ({})", idx, route.path))?;
        }

        // Duplicate paths/names, dangling redirects and cycles
        let table = config.build_table().context("Invalid route table")?;

        table
            .resolve(&config.start)
            .with_context(|| format!("Start path '{}' does not resolve", config.start))?;

        let referenced: Vec<&str> = table.view_ids().into_iter().map(ViewId::as_str).collect();
        for view_id in config.views.keys() {
            if !referenced.contains(&view_id.as_str()) {
                tracing::warn!(view = %view_id, "view metadata is not referenced by any route");
            }
        }

        Ok(())
    }

    fn validate_route(route: &RouteSpec) -> Result<()> {
        if route.path.trim().is_empty() {
            return Err(anyhow!("Route path cannot be empty"));
        }

        match (&route.view, &route.redirect) {
            (Some(_), Some(_)) => {
                return Err(anyhow!(
                    "Route can only define one of 'view' or 'redirect'"
                ));
            }
            (None, None) => {
                return Err(anyhow!("Route must define either 'view' or 'redirect'"));
            }
            (Some(view), None) if view.trim().is_empty() => {
                return Err(anyhow!("Route view cannot be empty"));
            }
            (None, Some(to)) if to.trim().is_empty() => {
                return Err(anyhow!("Route redirect cannot be empty"));
            }
            _ => {}
        }

        if let Some(name) = &route.name
            && name.trim().is_empty()
        {
            return Err(anyhow!("Route name cannot be empty when present"));
        }

        Ok(())
    }
}
