//! Public key table.
//!
//! One row per key. The entity name and type appear on the first row of each
//! principal only; principals without keys are omitted.

use crate::core::analysis::Analysis;
use crate::core::domain::PrincipalKind;
use crate::render::table::Table;
use crate::render::theme::Theme;
use crate::render::Renderer;

#[derive(Debug, Clone, Copy, Default)]
pub struct KeyRenderer;

impl Renderer for KeyRenderer {
    fn name(&self) -> &'static str {
        "keys"
    }

    fn render(&self, analysis: &Analysis, theme: &Theme) -> String {
        let listing = analysis.key_listing();
        let mut table = Table::new(["Entity", "Type", "Public Key"]);

        for entry in listing.with_keys() {
            let name = match entry.id.kind {
                PrincipalKind::User => theme.user(&entry.id.name),
                PrincipalKind::Machine => theme.machine(&entry.id.name),
            };
            for (i, key) in entry.keys.iter().enumerate() {
                if i == 0 {
                    table.push(vec![
                        name.clone(),
                        entry.id.kind.label().to_string(),
                        theme.key(key),
                    ]);
                } else {
                    table.push(vec![String::new(), String::new(), theme.key(key)]);
                }
            }
        }

        format!(
            "{}{}\n{}",
            theme.icon("🔑"),
            theme.title("Public Keys"),
            table.render()
        )
    }
}
