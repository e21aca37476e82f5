use clap::{Parser, ValueEnum};
use serde_json::json;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use viewroute::{
    app::App,
    config::{ConfigLoader, ConfigValidator, RouteConfig, feeds_config, workspace_config},
    navigation::RouteTarget,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Builtin {
    /// Dashboard, projects, tasks, team, settings (`/` redirects to `/dashboard`)
    Workspace,
    /// Home, about, RSS, settings with named routes
    Feeds,
}

#[derive(Parser)]
#[command(name = "viewroute")]
#[command(about = "Declarative path router with a terminal route explorer", long_about = None)]
struct Cli {
    /// Path to a YAML route table (defaults to a built-in table)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Built-in route table to use when no CONFIG is given
    #[arg(long, value_enum, default_value = "workspace")]
    builtin: Builtin,

    /// Validate the route table and exit (don't run TUI)
    #[arg(long)]
    validate: bool,

    /// Resolve a path and print where it lands (repeatable, doesn't run TUI)
    #[arg(long, value_name = "PATH")]
    resolve: Vec<String>,

    /// Print --resolve results as JSON lines
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Write logs to this file (the TUI never logs to the terminal)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let interactive = !cli.validate && cli.resolve.is_empty();
    init_tracing(cli.log_file.as_deref(), interactive)?;

    // Load route table; status lines go to stderr so --resolve --json keeps stdout clean
    let config = match &cli.config {
        Some(path) => {
            eprintln!("Loading routes from: {:?}", path);
            match ConfigLoader::load_from_file(path) {
                Ok(cfg) => {
                    eprintln!("✓ Routes loaded successfully");
                    cfg
                }
                Err(e) => {
                    eprintln!("✗ Failed to load routes: {}", e);
                    eprintln!("\nError details: {:?}", e);
                    std::process::exit(1);
                }
            }
        }
        None => match cli.builtin {
            Builtin::Workspace => workspace_config(),
            Builtin::Feeds => feeds_config(),
        },
    };

    // Validate route table
    if let Err(e) = ConfigValidator::validate(&config) {
        eprintln!("✗ Route table validation failed: {}", e);
        eprintln!("\nFull error chain:");
        for cause in e.chain() {
            eprintln!("  - {}", cause);
        }
        std::process::exit(1);
    }
    tracing::info!(app = %config.app.name, routes = config.routes.len(), "route table valid");

    if cli.verbose {
        print_summary(&config);
    }

    if cli.validate {
        println!("✓ Route table is valid!");
        return Ok(());
    }

    if !cli.resolve.is_empty() {
        let mut stdout = io::stdout().lock();
        let all_found = resolve_paths(&mut stdout, &config, &cli.resolve, cli.json)?;
        if !all_found {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Run TUI
    let app = App::new(&config).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    let terminal = ratatui::init();
    let result = app
        .run(terminal)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e));
    ratatui::restore();
    result
}

fn init_tracing(log_file: Option<&Path>, interactive: bool) -> color_eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "viewroute=info".into());

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None if !interactive => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
        None => {}
    }

    Ok(())
}

fn print_summary(config: &RouteConfig) {
    eprintln!("\nRoute Summary:");
    eprintln!("  App: {}", config.app.name);
    eprintln!("  Start path: {}", config.start);
    eprintln!("  Routes: {}", config.routes.len());
    for route in &config.routes {
        let target = match (&route.view, &route.redirect) {
            (Some(view), _) => format!("[{}]", view),
            (None, Some(to)) => format!("-> {}", to),
            (None, None) => "?".to_string(),
        };
        match &route.name {
            Some(name) => eprintln!("    - {} {} ({})", route.path, target, name),
            None => eprintln!("    - {} {}", route.path, target),
        }
    }
    eprintln!();
}

/// Write the resolution chain of each path; false if any path is not found
fn resolve_paths(
    out: &mut impl Write,
    config: &RouteConfig,
    paths: &[String],
    as_json: bool,
) -> color_eyre::Result<bool> {
    let table = config.build_table()?;
    let mut all_found = true;

    for path in paths {
        match table.resolve(path) {
            Ok(resolution) => {
                let view = match &resolution.entry.target {
                    RouteTarget::View(id) => id.to_string(),
                    RouteTarget::Redirect(to) => to.clone(),
                };
                if as_json {
                    let line = json!({
                        "requested": path,
                        "chain": resolution.chain,
                        "path": resolution.entry.path,
                        "name": resolution.entry.name,
                        "view": view,
                    });
                    writeln!(out, "{}", serde_json::to_string(&line)?)?;
                } else {
                    writeln!(out, "✓ {}  [{}]", resolution.chain.join(" -> "), view)?;
                }
            }
            Err(e) => {
                all_found = false;
                if as_json {
                    let line = json!({ "requested": path, "error": e.to_string() });
                    writeln!(out, "{}", serde_json::to_string(&line)?)?;
                } else {
                    writeln!(out, "✗ {}", e)?;
                }
            }
        }
    }

    Ok(all_found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn run(config: &RouteConfig, paths: &[&str], as_json: bool) -> (bool, String) {
        let paths: Vec<String> = paths.iter().map(|p| p.to_string()).collect();
        let mut out = Vec::new();
        let all_found = resolve_paths(&mut out, config, &paths, as_json).unwrap();
        (all_found, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_resolve_json_lines() {
        let (all_found, output) = run(&workspace_config(), &["/", "/missing"], true);
        assert!(!all_found);

        let lines: Vec<Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);

        assert_eq!(lines[0]["requested"], "/");
        assert_eq!(lines[0]["chain"], serde_json::json!(["/", "/dashboard"]));
        assert_eq!(lines[0]["path"], "/dashboard");
        assert_eq!(lines[0]["view"], "Dashboard");
        assert!(lines[0].get("error").is_none());

        assert_eq!(lines[1]["requested"], "/missing");
        assert!(lines[1]["error"].as_str().unwrap().contains("/missing"));
    }

    #[test]
    fn test_resolve_all_found() {
        let (all_found, output) = run(&feeds_config(), &["/rss", "/settings/"], true);
        assert!(all_found);

        let rss: Value = serde_json::from_str(output.lines().next().unwrap()).unwrap();
        assert_eq!(rss["name"], "Matrix");
        assert_eq!(rss["view"], "RSS");
    }

    #[test]
    fn test_resolve_text_output() {
        let (all_found, output) = run(&workspace_config(), &["/", "/nope"], false);
        assert!(!all_found);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "✓ / -> /dashboard  [Dashboard]");
        assert!(lines[1].starts_with("✗ "));
        assert!(lines[1].contains("/nope"));
    }
}
