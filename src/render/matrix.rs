//! Secret access matrix: one row per secret, raw direct grants only.

use crate::core::analysis::Analysis;
use crate::render::table::Table;
use crate::render::theme::Theme;
use crate::render::Renderer;

const EMPTY_CELL: &str = "-";

#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixRenderer;

impl Renderer for MatrixRenderer {
    fn name(&self) -> &'static str {
        "matrix"
    }

    fn render(&self, analysis: &Analysis, theme: &Theme) -> String {
        let matrix = analysis.matrix_view();
        let mut table = Table::new(["Secret", "Users", "Machines", "Groups"]);

        for row in &matrix.rows {
            table.push(vec![
                theme.secret(&row.secret),
                cell(&row.users, |name| theme.user(name)),
                cell(&row.machines, |name| theme.machine(name)),
                cell(&row.groups, |name| theme.group(name)),
            ]);
        }

        format!(
            "{}{}\n{}",
            theme.icon("📊"),
            theme.title("Secret Access Matrix"),
            table.render()
        )
    }
}

fn cell(names: &[String], paint: impl Fn(&str) -> String) -> String {
    if names.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        names
            .iter()
            .map(|name| paint(name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
