//! Graphviz rendering and export.
//!
//! [`GraphRenderer`] emits DOT source for the graph model. [`export`] writes
//! it to disk, piping it through the Graphviz `dot` executable for anything
//! other than the `dot` format.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, trace};

use crate::core::analysis::Analysis;
use crate::core::constants;
use crate::core::graph::{Edge, EdgeKind, Graph, GraphFormat, Node, NodeKind};
use crate::error::GraphError;
use crate::render::theme::Theme;
use crate::render::Renderer;

#[derive(Debug, Clone, Copy, Default)]
pub struct GraphRenderer;

impl Renderer for GraphRenderer {
    fn name(&self) -> &'static str {
        "graph"
    }

    /// DOT source. The theme does not apply to graph output.
    fn render(&self, analysis: &Analysis, _theme: &Theme) -> String {
        to_dot(&analysis.graph())
    }
}

/// Serialize a graph as a DOT digraph with one cluster per node kind.
pub fn to_dot(graph: &Graph) -> String {
    let mut out = String::new();
    out.push_str("digraph SOPS_Hierarchy {\n");
    out.push_str("  rankdir=TB;\n");
    out.push_str("  node [shape=box, style=\"rounded,filled\"];\n");

    for kind in [
        NodeKind::User,
        NodeKind::Machine,
        NodeKind::Group,
        NodeKind::Secret,
    ] {
        let nodes: Vec<&Node> = graph.nodes.iter().filter(|n| n.kind == kind).collect();
        if nodes.is_empty() {
            continue;
        }
        out.push('\n');
        out.push_str(&format!("  subgraph cluster_{} {{\n", cluster_name(kind)));
        out.push_str(&format!(
            "    label=\"{}\";\n    style=filled;\n    color=lightgrey;\n",
            cluster_label(kind)
        ));
        for node in nodes {
            out.push_str(&format!("    {}\n", node_statement(node)));
        }
        out.push_str("  }\n");
    }

    if !graph.edges.is_empty() {
        out.push('\n');
    }
    for edge in &graph.edges {
        out.push_str(&format!("  {}\n", edge_statement(edge)));
    }

    out.push_str("}\n");
    out
}

fn cluster_name(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::User => "users",
        NodeKind::Machine => "machines",
        NodeKind::Group => "groups",
        NodeKind::Secret => "secrets",
    }
}

fn cluster_label(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::User => "Users",
        NodeKind::Machine => "Machines",
        NodeKind::Group => "Groups",
        NodeKind::Secret => "Secrets",
    }
}

fn node_statement(node: &Node) -> String {
    let (shape, fill) = match node.kind {
        NodeKind::User => ("ellipse", "lightblue"),
        NodeKind::Machine => ("box", "lightyellow"),
        NodeKind::Group => ("diamond", "lightgreen"),
        NodeKind::Secret => ("cylinder", "lightcoral"),
    };
    let mut label = escape(&node.name);
    if let Some(preview) = &node.key_preview {
        label.push_str(&format!("\\n[{}]", escape(preview)));
    }
    format!(
        "\"{}\" [label=\"{}\", shape={}, fillcolor={}];",
        escape(&node.id),
        label,
        shape,
        fill
    )
}

fn edge_statement(edge: &Edge) -> String {
    let attrs = match (edge.kind, edge.source) {
        (EdgeKind::Member, NodeKind::Machine) => "label=\"member\", color=orange",
        (EdgeKind::Member, _) => "label=\"member\", color=blue",
        (EdgeKind::Access, NodeKind::User) => "label=\"access\", color=green, style=dashed",
        (EdgeKind::Access, NodeKind::Machine) => {
            "label=\"access\", color=purple, style=dashed"
        }
        (EdgeKind::Access, _) => "label=\"access\", color=darkgreen, style=bold",
    };
    format!(
        "\"{}\" -> \"{}\" [{}];",
        escape(&edge.from),
        escape(&edge.to),
        attrs
    )
}

/// Escape a DOT double-quoted string.
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Write the graph as `<output>.<ext>` and return the written path.
///
/// The `dot` format is written directly; every other format is rendered by
/// the Graphviz executable, which must be on `PATH`.
pub fn export(source: &str, format: GraphFormat, output: &str) -> Result<PathBuf, GraphError> {
    let path = PathBuf::from(format!("{}.{}", output, format.extension()));

    if !format.needs_graphviz() {
        fs::write(&path, source).map_err(GraphError::Write)?;
        debug!(path = %path.display(), "wrote dot source");
        return Ok(path);
    }

    let dot = which::which(constants::GRAPHVIZ_BIN).map_err(|_| GraphError::ToolMissing)?;
    trace!(bin = %dot.display(), format = %format, "rendering with graphviz");

    let mut child = Command::new(dot)
        .arg(format!("-T{}", format.extension()))
        .arg("-o")
        .arg(&path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| GraphError::RenderFailed(format!("failed to spawn dot: {}", e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(source.as_bytes()).map_err(GraphError::Write)?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| GraphError::RenderFailed(format!("dot command failed: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GraphError::RenderFailed(stderr.trim().to_string()));
    }

    debug!(path = %path.display(), "rendered graph");
    Ok(path)
}
