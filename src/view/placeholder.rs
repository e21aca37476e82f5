use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::renderer::ViewRenderer;
use crate::config::ViewMeta;
use crate::navigation::RouteEntry;

/// Generic view showing the route it was activated for
pub struct PlaceholderView {
    title: String,
    description: Option<String>,
}

impl PlaceholderView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn from_meta(view_id: &str, meta: Option<&ViewMeta>) -> Self {
        let title = meta
            .and_then(|m| m.title.clone())
            .unwrap_or_else(|| view_id.to_string());
        let view = Self::new(title);
        match meta.and_then(|m| m.description.clone()) {
            Some(description) => view.with_description(description),
            None => view,
        }
    }
}

impl ViewRenderer for PlaceholderView {
    fn render(&mut self, frame: &mut Frame, area: Rect, entry: &RouteEntry) {
        let label = Style::default().fg(Color::DarkGray);

        let mut lines = vec![
            Line::from(Span::styled(
                self.title.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("path  ", label),
                Span::raw(entry.path.as_str()),
            ]),
        ];

        if let Some(name) = &entry.name {
            lines.push(Line::from(vec![
                Span::styled("name  ", label),
                Span::raw(name.as_str()),
            ]));
        }

        if let Some(description) = &self.description {
            lines.push(Line::default());
            lines.push(Line::from(description.as_str()));
        }

        let widget = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.title.as_str()),
            );
        frame.render_widget(widget, area);
    }

    fn title(&self) -> &str {
        &self.title
    }
}
