//! Hierarchy tree renderer.
//!
//! Shows resolved access: each principal lists the groups it belongs to and
//! every secret it can reach, annotated `direct`, `via <groups>` or both.

use crate::core::analysis::Analysis;
use crate::core::domain::{AccessRecord, PrincipalKind};
use crate::core::views::{GrantRow, GroupView, PrincipalView};
use crate::render::theme::Theme;
use crate::render::Renderer;

/// A labelled node with ordered children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Append a child and return it for further nesting.
    pub fn push(&mut self, child: TreeNode) -> &mut TreeNode {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Append a leaf.
    pub fn leaf(&mut self, label: impl Into<String>) {
        self.children.push(TreeNode::new(label));
    }

    /// Render with box-drawing connectors.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.label);
        out.push('\n');
        write_children(&mut out, &self.children, "");
        out
    }
}

fn write_children(out: &mut String, children: &[TreeNode], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let (connector, extension) = if last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(&child.label);
        out.push('\n');
        write_children(out, &child.children, &format!("{}{}", prefix, extension));
    }
}

/// Renders the hierarchy view as a tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeRenderer;

impl Renderer for TreeRenderer {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn render(&self, analysis: &Analysis, theme: &Theme) -> String {
        let view = analysis.hierarchy_view();
        let mut root = TreeNode::new(format!(
            "{}{}",
            theme.icon("🔐"),
            theme.title("SOPS Access Control Hierarchy")
        ));

        if !view.users.is_empty() {
            let section = root.push(TreeNode::new(format!(
                "{}{}",
                theme.icon("👥"),
                theme.heading("Users")
            )));
            for user in &view.users {
                section.push(principal_node(user, theme));
            }
        }

        if !view.machines.is_empty() {
            let section = root.push(TreeNode::new(format!(
                "{}{}",
                theme.icon("🖥️ "),
                theme.heading("Machines")
            )));
            for machine in &view.machines {
                section.push(principal_node(machine, theme));
            }
        }

        if !view.groups.is_empty() {
            let section = root.push(TreeNode::new(format!(
                "{}{}",
                theme.icon("🏢"),
                theme.heading("Groups")
            )));
            for group in &view.groups {
                section.push(group_node(group, theme));
            }
        }

        if !view.secrets.is_empty() {
            let section = root.push(TreeNode::new(format!(
                "{}{}",
                theme.icon("🔒"),
                theme.heading("Secrets")
            )));
            for row in &view.secrets {
                section.push(secret_node(row, theme));
            }
        }

        root.render()
    }
}

/// `direct`, `via a, b` or `direct + via a, b`, styled per part.
pub fn attribution(record: &AccessRecord, theme: &Theme) -> String {
    let groups = record
        .via_groups()
        .iter()
        .map(|g| theme.inherited(g))
        .collect::<Vec<_>>()
        .join(", ");
    match (record.is_direct(), record.is_inherited()) {
        (true, false) => theme.direct("direct"),
        (true, true) => format!("{} + via {}", theme.direct("direct"), groups),
        (false, _) => format!("via {}", groups),
    }
}

fn paint_principal(kind: PrincipalKind, name: &str, theme: &Theme) -> String {
    match kind {
        PrincipalKind::User => theme.user(name),
        PrincipalKind::Machine => theme.machine(name),
    }
}

fn principal_node(view: &PrincipalView, theme: &Theme) -> TreeNode {
    let mut node = TreeNode::new(paint_principal(view.id.kind, &view.id.name, theme));

    if !view.public_keys.is_empty() {
        let keys = node.push(TreeNode::new(theme.dim("Public keys")));
        for key in &view.public_keys {
            keys.leaf(theme.key(key));
        }
    }

    if !view.groups.is_empty() {
        let groups = view
            .groups
            .iter()
            .map(|g| theme.group(g))
            .collect::<Vec<_>>()
            .join(", ");
        node.leaf(format!("{} {}", theme.dim("Groups:"), groups));
    }

    for access in &view.secrets {
        node.leaf(format!(
            "{}{} ({})",
            theme.icon("🔓"),
            theme.heading(&access.secret),
            attribution(&access.access, theme)
        ));
    }

    node
}

fn group_node(view: &GroupView, theme: &Theme) -> TreeNode {
    let mut node = TreeNode::new(theme.group(&view.name));

    if !view.users.is_empty() {
        let users = node.push(TreeNode::new(theme.dim("Users")));
        for user in &view.users {
            users.leaf(format!("{}{}", theme.icon("👤"), theme.user(user)));
        }
    }
    if !view.machines.is_empty() {
        let machines = node.push(TreeNode::new(theme.dim("Machines")));
        for machine in &view.machines {
            machines.leaf(format!("{}{}", theme.icon("🖥️ "), theme.machine(machine)));
        }
    }
    if !view.secrets.is_empty() {
        let secrets = node.push(TreeNode::new(theme.dim("Secrets")));
        for secret in &view.secrets {
            secrets.leaf(format!("{}{}", theme.icon("🔓"), theme.inherited(secret)));
        }
    }

    node
}

fn secret_node(row: &GrantRow, theme: &Theme) -> TreeNode {
    let mut node = TreeNode::new(theme.secret(&row.secret));
    if row.is_empty() {
        return node;
    }

    let access = node.push(TreeNode::new(theme.dim("Access granted to")));
    for user in &row.users {
        access.leaf(format!("User: {}", theme.user(user)));
    }
    for machine in &row.machines {
        access.leaf(format!("Machine: {}", theme.machine(machine)));
    }
    for group in &row.groups {
        access.leaf(format!("Group: {}", theme.group(group)));
    }
    node
}
