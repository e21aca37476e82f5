use ratatui::{Frame, layout::Rect};

use crate::navigation::RouteEntry;

/// A renderable view unit the router can activate
///
/// The router only knows views by id; the application supplies the renderer.
pub trait ViewRenderer {
    fn render(&mut self, frame: &mut Frame, area: Rect, entry: &RouteEntry);
    fn title(&self) -> &str;
}
