//! Renderers.
//!
//! Each renderer turns an [`Analysis`] into text. They hold no state and
//! never touch the filesystem; graph export lives in [`graph::export`].

pub mod graph;
pub mod keys;
pub mod matrix;
pub mod table;
pub mod theme;
pub mod tree;

use crate::core::analysis::Analysis;

pub use graph::GraphRenderer;
pub use keys::KeyRenderer;
pub use matrix::MatrixRenderer;
pub use theme::Theme;
pub use tree::TreeRenderer;

/// A view of an analysis.
pub trait Renderer {
    /// Short identifier, used in logs.
    fn name(&self) -> &'static str;

    /// Render the view.
    fn render(&self, analysis: &Analysis, theme: &Theme) -> String;
}
