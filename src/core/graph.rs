//! Graph model of a hierarchy.
//!
//! Enumerates every known entity as a node and every membership or grant as
//! a directed edge. Edges only connect known nodes.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::core::domain::{PrincipalId, PrincipalKind};
use crate::core::hierarchy::Hierarchy;

/// Number of key characters shown in a principal's node label.
const KEY_PREVIEW_LEN: usize = 8;

/// Output format of a graph export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GraphFormat {
    Png,
    Svg,
    Pdf,
    Dot,
}

impl GraphFormat {
    /// File extension, also the Graphviz `-T` argument.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
            Self::Dot => "dot",
        }
    }

    /// Whether producing this format needs the Graphviz executable.
    pub fn needs_graphviz(&self) -> bool {
        !matches!(self, Self::Dot)
    }
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for GraphFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "pdf" => Ok(Self::Pdf),
            "dot" => Ok(Self::Dot),
            other => Err(format!(
                "unsupported format '{}' (expected png, svg, pdf or dot)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    User,
    Machine,
    Group,
    Secret,
}

impl NodeKind {
    fn prefix(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Machine => "machine",
            Self::Group => "group",
            Self::Secret => "secret",
        }
    }
}

impl From<PrincipalKind> for NodeKind {
    fn from(kind: PrincipalKind) -> Self {
        match kind {
            PrincipalKind::User => Self::User,
            PrincipalKind::Machine => Self::Machine,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Stable identifier, e.g. `user_alice`.
    pub id: String,
    pub kind: NodeKind,
    pub name: String,
    /// Truncated first public key, for principals that have one.
    pub key_preview: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Principal → group.
    Member,
    /// Principal → secret or group → secret.
    Access,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
    /// Kind of the source node, used to colour edges.
    pub source: NodeKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

pub fn node_id(kind: NodeKind, name: &str) -> String {
    format!("{}_{}", kind.prefix(), name)
}

fn key_preview(key: &str) -> String {
    let head: String = key.chars().take(KEY_PREVIEW_LEN).collect();
    format!("{}...", head)
}

fn principal_node_id(id: &PrincipalId) -> String {
    node_id(id.kind.into(), &id.name)
}

impl Graph {
    /// Build the graph for a hierarchy.
    ///
    /// Nodes come in the order users, machines, groups, secrets (each by
    /// name); edges list memberships before grants.
    pub fn from_hierarchy(hierarchy: &Hierarchy) -> Self {
        let mut graph = Graph::default();

        for principal in hierarchy.catalog.iter() {
            graph.nodes.push(Node {
                id: principal_node_id(principal.id()),
                kind: principal.kind().into(),
                name: principal.name().to_string(),
                key_preview: principal.public_keys().first().map(|key| key_preview(key)),
            });
        }
        for group in hierarchy.membership.groups() {
            graph.nodes.push(Node {
                id: node_id(NodeKind::Group, group),
                kind: NodeKind::Group,
                name: group.clone(),
                key_preview: None,
            });
        }
        for secret in hierarchy.grants.secrets() {
            graph.nodes.push(Node {
                id: node_id(NodeKind::Secret, secret),
                kind: NodeKind::Secret,
                name: secret.clone(),
                key_preview: None,
            });
        }

        for group in hierarchy.membership.groups() {
            for member in hierarchy.membership.members_of(group) {
                if hierarchy.is_known(member) {
                    graph.edges.push(Edge {
                        from: principal_node_id(member),
                        to: node_id(NodeKind::Group, group),
                        kind: EdgeKind::Member,
                        source: member.kind.into(),
                    });
                }
            }
        }

        for (secret, grants) in hierarchy.grants.iter() {
            let to = node_id(NodeKind::Secret, secret);
            for principal in grants.principals().filter(|id| hierarchy.is_known(id)) {
                graph.edges.push(Edge {
                    from: principal_node_id(principal),
                    to: to.clone(),
                    kind: EdgeKind::Access,
                    source: principal.kind.into(),
                });
            }
            for group in grants.groups().filter(|g| hierarchy.is_known_group(g)) {
                graph.edges.push(Edge {
                    from: node_id(NodeKind::Group, group),
                    to: to.clone(),
                    kind: EdgeKind::Access,
                    source: NodeKind::Group,
                });
            }
        }

        graph
    }

    pub fn nodes_of(&self, kind: NodeKind) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(move |node| node.kind == kind)
    }
}
