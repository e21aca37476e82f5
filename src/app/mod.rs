// Module for types and helper structs
mod types;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use crate::{
    config::RouteConfig,
    error::{Result, RouterError},
    input::{Command, Keymap},
    navigation::{RouteEntry, RouteTarget, Router, Transition},
    view::ViewRegistry,
};
use types::{MessageType, PathPrompt, StatusMessage, describe_transition};

/// Terminal route explorer: lists the route table and renders the active view
pub struct App {
    running: bool,
    app_name: String,
    router: Router,
    views: ViewRegistry,
    keymap: Keymap,

    // Route list state
    selected_index: usize,
    list_state: ListState,

    // Path prompt and messages
    prompt: PathPrompt,
    status: Option<StatusMessage>,
    show_help: bool,

    // Written by the router observer
    last_transition: Rc<RefCell<Option<Transition>>>,

    needs_render: bool,
}

impl App {
    pub fn new(config: &RouteConfig) -> Result<Self> {
        let table = Arc::new(config.build_table()?);
        let mut router = Router::with_history(Arc::clone(&table), config.history());

        let last_transition = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&last_transition);
        router.subscribe(move |transition: &Transition| {
            *sink.borrow_mut() = Some(transition.clone());
        });

        let views = ViewRegistry::from_config(config, &table);
        for missing in views.missing_for(&table) {
            tracing::warn!(view = %missing, "no renderer registered for view");
        }

        let mut app = Self {
            running: true,
            app_name: config.app.name.clone(),
            router,
            views,
            keymap: Keymap::with_defaults().map_err(RouterError::Config)?,
            selected_index: 0,
            list_state: ListState::default(),
            prompt: PathPrompt::default(),
            status: None,
            show_help: false,
            last_transition,
            needs_render: true,
        };

        app.router.navigate(&config.start)?;
        app.sync_selection();

        Ok(app)
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        self.running = true;

        while self.running {
            // Auto-dismiss messages
            if self.status.as_ref().is_some_and(StatusMessage::expired) {
                self.status = None;
                self.needs_render = true;
            }

            if self.needs_render {
                self.list_state.select(Some(self.selected_index));
                terminal.draw(|frame| self.render(frame))?;
                self.needs_render = false;
            }

            // Poll for user input with timeout
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key);
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        self.needs_render = true;

        // Any key closes the help overlay
        if self.show_help {
            self.show_help = false;
            return;
        }

        if self.prompt.active {
            match key.code {
                KeyCode::Esc => self.prompt.cancel(),
                KeyCode::Enter => {
                    let path = self.prompt.submit();
                    self.navigate_to(&path);
                }
                KeyCode::Backspace => self.prompt.pop_char(),
                KeyCode::Char(c) => self.prompt.push_char(c),
                _ => {}
            }
            return;
        }

        let Some(command) = self.keymap.command_for(&key) else {
            return;
        };

        let last_index = self.router.table().len().saturating_sub(1);
        match command {
            Command::Quit => self.running = false,
            Command::Help => self.show_help = true,
            Command::Up => self.selected_index = self.selected_index.saturating_sub(1),
            Command::Down => self.selected_index = (self.selected_index + 1).min(last_index),
            Command::Top => self.selected_index = 0,
            Command::Bottom => self.selected_index = last_index,
            Command::Select => {
                if let Some(entry) = self.router.table().entries().get(self.selected_index) {
                    let path = entry.path.clone();
                    self.navigate_to(&path);
                }
            }
            Command::Back => match self.router.back() {
                Ok(Some(_)) => {
                    self.sync_selection();
                    self.status = self.transition_message();
                }
                Ok(None) => self.status = Some(StatusMessage::info("History is empty")),
                Err(e) => self.status = Some(StatusMessage::error(e.to_string())),
            },
            Command::Goto => self.prompt.activate(),
        }
    }

    /// Navigate and report the outcome; on failure the active view stays as it was
    fn navigate_to(&mut self, path: &str) {
        match self.router.navigate(path) {
            Ok(_) => {
                self.sync_selection();
                self.status = self.transition_message();
            }
            Err(e) => self.status = Some(StatusMessage::error(e.to_string())),
        }
    }

    fn transition_message(&self) -> Option<StatusMessage> {
        self.last_transition
            .borrow()
            .as_ref()
            .map(|t| StatusMessage::info(describe_transition(t)))
    }

    fn sync_selection(&mut self) {
        if let Some(idx) = self
            .router
            .current()
            .and_then(|entry| self.router.table().position(&entry.path))
        {
            self.selected_index = idx;
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Routes + view
            Constraint::Length(3), // Prompt / status
        ])
        .split(area);

        let body = Layout::horizontal([Constraint::Percentage(40), Constraint::Min(0)])
            .split(chunks[1]);

        self.render_header(frame, chunks[0]);
        self.render_routes(frame, body[0]);
        self.render_view(frame, body[1]);
        self.render_statusbar(frame, chunks[2]);

        if self.show_help {
            self.render_help(frame, area);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                self.app_name.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
        ];

        // Breadcrumb from history
        for nav_frame in self.router.history().frames() {
            spans.push(Span::styled(
                nav_frame.path.as_str(),
                Style::default().fg(Color::White),
            ));
            spans.push(Span::raw(" > "));
        }

        if let Some(current) = self.router.state().current_path() {
            spans.push(Span::styled(
                current,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        let header =
            Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, area);
    }

    fn render_routes(&mut self, frame: &mut Frame, area: Rect) {
        let active = self.router.state().current_path();

        let items: Vec<ListItem> = self
            .router
            .table()
            .entries()
            .iter()
            .map(|entry| route_item(entry, active == Some(entry.path.as_str())))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Routes"))
            .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
            .highlight_symbol("> ");

        self.list_state.select(Some(self.selected_index));
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_view(&mut self, frame: &mut Frame, area: Rect) {
        let Some(entry) = self.router.current().cloned() else {
            let empty = Paragraph::new("No active route")
                .block(Block::default().borders(Borders::ALL).title("View"));
            frame.render_widget(empty, area);
            return;
        };

        let renderer = match entry.view_id() {
            Some(id) => self.views.get_mut(id),
            None => None,
        };

        match renderer {
            Some(renderer) => renderer.render(frame, area, &entry),
            None => {
                let missing = Paragraph::new(format!("No view registered for {}", entry))
                    .style(Style::default().fg(Color::Red))
                    .block(Block::default().borders(Borders::ALL).title("View"));
                frame.render_widget(missing, area);
            }
        }
    }

    fn render_statusbar(&self, frame: &mut Frame, area: Rect) {
        let widget = if self.prompt.active {
            Paragraph::new(format!("{}_", self.prompt.input))
                .style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Go to path - Enter to navigate, Esc to cancel")
                        .border_style(Style::default().fg(Color::Yellow)),
                )
        } else {
            let (text, color) = match &self.status {
                Some(msg) if msg.message_type == MessageType::Error => {
                    (msg.message.clone(), Color::Red)
                }
                Some(msg) => (msg.message.clone(), Color::Green),
                None => (
                    "?: help  :: go to path  Enter: open  Esc: back  q: quit".to_string(),
                    Color::DarkGray,
                ),
            };
            Paragraph::new(text)
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL))
        };

        frame.render_widget(widget, area);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .keymap
            .help_lines()
            .into_iter()
            .map(|(keys, description)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<22}", keys),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(description),
                ])
            })
            .collect();

        let popup = centered_rect(60, lines.len() as u16 + 2, area);
        let help = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Keys - press any key to close"),
        );

        frame.render_widget(Clear, popup);
        frame.render_widget(help, popup);
    }
}

fn route_item(entry: &RouteEntry, active: bool) -> ListItem<'static> {
    let marker = if active { "● " } else { "  " };
    let target = match &entry.target {
        RouteTarget::View(id) => format!("[{}]", id),
        RouteTarget::Redirect(to) => format!("→ {}", to),
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::Green)),
        Span::styled(
            entry.path.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(target, Style::default().fg(Color::DarkGray)),
    ];
    if let Some(name) = &entry.name {
        spans.push(Span::styled(
            format!(" ({})", name),
            Style::default().fg(Color::Cyan),
        ));
    }

    ListItem::new(Line::from(spans))
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{feeds_config, workspace_config};
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_path(app: &mut App, path: &str) {
        app.handle_key(KeyEvent::new(KeyCode::Char(':'), KeyModifiers::SHIFT));
        for c in path.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn current_path(app: &App) -> &str {
        app.router().current().unwrap().path.as_str()
    }

    #[test]
    fn test_starts_on_redirect_target() {
        let app = App::new(&workspace_config()).unwrap();
        assert_eq!(current_path(&app), "/dashboard");
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_typed_missing_path_keeps_view() {
        let mut app = App::new(&workspace_config()).unwrap();
        type_path(&mut app, "/missing");

        assert_eq!(current_path(&app), "/dashboard");
        let status = app.status.as_ref().unwrap();
        assert_eq!(status.message_type, MessageType::Error);
        assert!(status.message.contains("/missing"));
    }

    #[test]
    fn test_typed_path_navigates() {
        let mut app = App::new(&workspace_config()).unwrap();
        type_path(&mut app, "team/");

        assert_eq!(current_path(&app), "/team");
        assert_eq!(app.selected_index, 4);
        assert!(!app.prompt.active);
    }

    #[test]
    fn test_select_and_back() {
        let mut app = App::new(&workspace_config()).unwrap();

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(current_path(&app), "/projects");

        press(&mut app, KeyCode::Esc);
        assert_eq!(current_path(&app), "/dashboard");
        assert_eq!(app.selected_index, 1);

        press(&mut app, KeyCode::Esc);
        let status = app.status.as_ref().unwrap();
        assert_eq!(status.message, "History is empty");
    }

    #[test]
    fn test_selecting_redirect_follows_it() {
        let mut app = App::new(&workspace_config()).unwrap();
        press(&mut app, KeyCode::Char('G'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(current_path(&app), "/settings");

        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(current_path(&app), "/dashboard");
        assert!(app.status.as_ref().unwrap().message.contains("redirected from /"));
    }

    #[test]
    fn test_help_and_quit() {
        let mut app = App::new(&feeds_config()).unwrap();

        app.handle_key(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT));
        assert!(app.show_help);
        // Any key closes help without acting on it
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(app.running);

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_render_shows_routes_and_active_view() {
        let mut app = App::new(&feeds_config()).unwrap();
        type_path(&mut app, "/rss");

        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Feeds"));
        assert!(text.contains("/settings"));
        assert!(text.contains("(Matrix)"));
        assert!(text.contains("Subscribed feeds"));
    }
}
