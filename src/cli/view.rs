//! Default command: scan the SOPS root and show the selected views.

use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::cli::{output, Cli};
use crate::core::analysis::Analysis;
use crate::core::config::Config;
use crate::core::constants;
use crate::core::graph::{Graph, GraphFormat};
use crate::core::scan::Scanner;
use crate::core::views::{HierarchyView, KeyListing, MatrixView, Summary};
use crate::error::{ConfigError, GraphError, Result};
use crate::render::graph::{self as graph_render, GraphRenderer};
use crate::render::{KeyRenderer, MatrixRenderer, Renderer, Theme, TreeRenderer};

/// Settings after merging flags, environment, config file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub root: PathBuf,
    pub key_types: Vec<String>,
    pub graph_format: GraphFormat,
    pub graph_output: String,
}

impl Settings {
    /// Merge command-line values over the config file.
    ///
    /// `--root` already carries the environment fallback through clap.
    pub fn resolve(cli: &Cli, config: Config) -> Result<Self> {
        let graph_format = match cli.graph_format {
            Some(format) => format,
            None => config.graph_format()?,
        };
        let graph_output = cli
            .graph_output
            .clone()
            .unwrap_or_else(|| config.graph.output.clone());
        if graph_output.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "graph-output",
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        Ok(Self {
            root: cli
                .root
                .clone()
                .or(config.root)
                .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_ROOT)),
            key_types: config.keys.types,
            graph_format,
            graph_output,
        })
    }
}

/// Which views to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub tree: bool,
    pub matrix: bool,
    pub keys: bool,
    pub graph: bool,
}

impl Selection {
    /// The tree is the default when no view flag is given.
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.all {
            return Self {
                tree: true,
                matrix: true,
                keys: true,
                graph: true,
            };
        }
        Self {
            tree: !(cli.table || cli.keys || cli.graph),
            matrix: cli.table,
            keys: cli.keys,
            graph: cli.graph,
        }
    }
}

/// JSON document for `--json`. Unselected views are omitted.
#[derive(Debug, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy: Option<HierarchyView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<MatrixView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<KeyListing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<Graph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
}

impl Report {
    pub fn build(analysis: &Analysis, selection: Selection, with_summary: bool) -> Self {
        Self {
            hierarchy: selection.tree.then(|| analysis.hierarchy_view()),
            matrix: selection.matrix.then(|| analysis.matrix_view()),
            keys: selection.keys.then(|| analysis.key_listing()),
            graph: selection.graph.then(|| analysis.graph()),
            summary: with_summary.then(|| analysis.summary()),
        }
    }
}

/// Scan, resolve and print.
pub fn execute(cli: &Cli) -> Result<()> {
    if cli.basic {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let config = Config::load(cli.config.as_deref())?;
    let settings = Settings::resolve(cli, config)?;

    if !settings.root.is_dir() {
        return Err(ConfigError::RootNotFound(settings.root).into());
    }

    let selection = Selection::from_cli(cli);
    debug!(root = %settings.root.display(), ?selection, "scanning");

    let hierarchy = Scanner::new(&settings.root, settings.key_types.clone()).scan();
    let analysis = Analysis::new(hierarchy);

    if cli.json {
        let report = Report::build(&analysis, selection, !cli.no_summary);
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    let theme = Theme::detect(cli.basic);
    let mut renderers: Vec<Box<dyn Renderer>> = Vec::new();
    if selection.tree {
        renderers.push(Box::new(TreeRenderer));
    }
    if selection.matrix {
        renderers.push(Box::new(MatrixRenderer));
    }
    if selection.keys {
        renderers.push(Box::new(KeyRenderer));
    }

    for renderer in &renderers {
        debug!(view = renderer.name(), "rendering");
        print!("{}", renderer.render(&analysis, &theme));
        output::blank();
    }

    if selection.graph {
        export_graph(&analysis, &theme, &settings);
        output::blank();
    }

    if !cli.no_summary {
        print_summary(&analysis.summary());
    }
    Ok(())
}

/// Export the graph. Failures are reported and never abort the run.
fn export_graph(analysis: &Analysis, theme: &Theme, settings: &Settings) {
    let source = GraphRenderer.render(analysis, theme);
    match graph_render::export(&source, settings.graph_format, &settings.graph_output) {
        Ok(path) => {
            info!(path = %path.display(), "graph exported");
            output::success(&format!(
                "graph written to {}",
                output::path(&path.display().to_string())
            ));
        }
        Err(GraphError::ToolMissing) => {
            output::warn("graphviz `dot` not found, skipping graph export");
            output::hint("install graphviz, or use --graph-format dot");
        }
        Err(e) => output::error(&e.to_string()),
    }
}

fn print_summary(summary: &Summary) {
    output::section("Summary");
    output::kv("Users", summary.users);
    output::kv("Machines", summary.machines);
    output::kv("Groups", summary.groups);
    output::kv("Secrets", summary.secrets);
    output::kv("User grants", summary.user_grants);
    output::kv("Machine grants", summary.machine_grants);
    output::kv("Group grants", summary.group_grants);
    output::kv("Access records", summary.access_records);
}
