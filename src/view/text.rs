//! Plain-text board rendering.

use super::{BoardView, Renderer};

/// Renders a board as one line of tokens plus a control line.
///
/// Held tokens are wrapped in `[ ]`, free tokens in `( )`:
///
/// ```text
/// [A] (B) [A]
/// > Roll
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&mut self, view: &BoardView<'_>) -> String {
        let tokens: Vec<String> = view
            .tokens
            .iter()
            .map(|t| {
                if t.held {
                    format!("[{}]", t.face)
                } else {
                    format!("({})", t.face)
                }
            })
            .collect();

        let mut out = tokens.join(" ");
        out.push('\n');
        if view.celebrate {
            out.push_str("*** match! ***\n");
        }
        out.push_str("> ");
        out.push_str(view.control.as_str());
        out.push('\n');
        out
    }
}
