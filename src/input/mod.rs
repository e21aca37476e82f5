// Input handling module for explorer commands and key parsing
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use std::str::FromStr;

/// Non-character keys that can be bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedKey {
    Enter,
    Esc,
    Backspace,
    Tab,
    Up,
    Down,
    Home,
    End,
}

impl NamedKey {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "enter" | "return" => Some(NamedKey::Enter),
            "esc" | "escape" => Some(NamedKey::Esc),
            "backspace" => Some(NamedKey::Backspace),
            "tab" => Some(NamedKey::Tab),
            "up" => Some(NamedKey::Up),
            "down" => Some(NamedKey::Down),
            "home" => Some(NamedKey::Home),
            "end" => Some(NamedKey::End),
            _ => None,
        }
    }

    fn code(&self) -> KeyCode {
        match self {
            NamedKey::Enter => KeyCode::Enter,
            NamedKey::Esc => KeyCode::Esc,
            NamedKey::Backspace => KeyCode::Backspace,
            NamedKey::Tab => KeyCode::Tab,
            NamedKey::Up => KeyCode::Up,
            NamedKey::Down => KeyCode::Down,
            NamedKey::Home => KeyCode::Home,
            NamedKey::End => KeyCode::End,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            NamedKey::Enter => "Enter",
            NamedKey::Esc => "Esc",
            NamedKey::Backspace => "Backspace",
            NamedKey::Tab => "Tab",
            NamedKey::Up => "Up",
            NamedKey::Down => "Down",
            NamedKey::Home => "Home",
            NamedKey::End => "End",
        }
    }
}

/// Represents a parsed key from a binding table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKey {
    /// Single character key, matched exactly (so `g` and `G` differ)
    Simple(char),
    /// Control + character combination
    Ctrl(char),
    Named(NamedKey),
}

impl ActionKey {
    /// Parse a key string
    ///
    /// Supports formats:
    /// - Single char: "j", "G", "?"
    /// - Ctrl combination: "ctrl+c", "Ctrl+C" (case insensitive)
    /// - Named keys: "Enter", "Esc", "Up", "Space", ...
    ///
    /// # Examples
    /// ```
    /// use viewroute::input::ActionKey;
    ///
    /// let key = ActionKey::parse("j").unwrap();
    /// assert_eq!(key, ActionKey::Simple('j'));
    ///
    /// let key = ActionKey::parse("ctrl+c").unwrap();
    /// assert_eq!(key, ActionKey::Ctrl('c'));
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if s.is_empty() {
            return Err("Key cannot be empty".to_string());
        }

        // Check for ctrl+ prefix (case insensitive)
        if let Some(stripped) = s.to_lowercase().strip_prefix("ctrl+") {
            let mut chars = stripped.chars();
            return match (chars.next(), chars.next()) {
                (Some(ch), None) if ch.is_ascii_alphanumeric() => Ok(ActionKey::Ctrl(ch)),
                (Some(_), None) => Err(format!(
                    "Invalid Ctrl combination '{}': character must be alphanumeric",
                    s
                )),
                _ => Err(format!(
                    "Invalid Ctrl combination '{}': expected single character after 'ctrl+'",
                    s
                )),
            };
        }

        if s.eq_ignore_ascii_case("space") {
            return Ok(ActionKey::Simple(' '));
        }

        if let Some(named) = NamedKey::parse(s) {
            return Ok(ActionKey::Named(named));
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(ActionKey::Simple(ch)),
            _ => Err(format!(
                "Invalid key format '{}': expected single character, 'ctrl+X' or a key name",
                s
            )),
        }
    }

    /// Check if a KeyEvent matches this ActionKey
    pub fn matches(&self, key: &KeyEvent) -> bool {
        match self {
            ActionKey::Simple(ch) => {
                // Shift is implied by the character itself ('G', '?', ':')
                matches!(key.code, KeyCode::Char(c) if c == *ch)
                    && key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
            }
            ActionKey::Ctrl(ch) => {
                matches!(key.code, KeyCode::Char(c) if c.to_ascii_lowercase() == *ch)
                    && key.modifiers.contains(KeyModifiers::CONTROL)
            }
            ActionKey::Named(named) => key.code == named.code() && key.modifiers.is_empty(),
        }
    }

    /// Format the key for display in UI
    pub fn display(&self) -> String {
        match self {
            ActionKey::Simple(' ') => "Space".to_string(),
            ActionKey::Simple(ch) => ch.to_string(),
            ActionKey::Ctrl(ch) => format!("Ctrl+{}", ch.to_ascii_uppercase()),
            ActionKey::Named(named) => named.label().to_string(),
        }
    }
}

/// What the explorer does in response to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Command {
    Quit,
    Help,
    Up,
    Down,
    Top,
    Bottom,
    Select,
    Back,
    Goto,
}

impl Command {
    pub fn description(&self) -> &'static str {
        match self {
            Command::Quit => "Quit",
            Command::Help => "Toggle help",
            Command::Up => "Previous route",
            Command::Down => "Next route",
            Command::Top => "First route",
            Command::Bottom => "Last route",
            Command::Select => "Navigate to selected route",
            Command::Back => "Go back in history",
            Command::Goto => "Type a path to navigate to",
        }
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "up" => Ok(Command::Up),
            "down" => Ok(Command::Down),
            "top" => Ok(Command::Top),
            "bottom" => Ok(Command::Bottom),
            "select" => Ok(Command::Select),
            "back" => Ok(Command::Back),
            "goto" => Ok(Command::Goto),
            other => Err(format!("Unknown command: {}", other)),
        }
    }
}

/// Key bindings resolved to commands
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(ActionKey, Command)>,
}

impl Keymap {
    pub fn from_bindings(bindings: &HashMap<String, String>) -> Result<Self, String> {
        let mut parsed = Vec::with_capacity(bindings.len());
        for (key, command) in bindings {
            let action_key =
                ActionKey::parse(key).map_err(|e| format!("Invalid key '{}': {}", key, e))?;
            let command = command.parse::<Command>()?;
            parsed.push((action_key, command));
        }
        parsed.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.display().cmp(&b.0.display())));
        Ok(Self { bindings: parsed })
    }

    pub fn with_defaults() -> Result<Self, String> {
        Self::from_bindings(&crate::config::default_keybindings())
            .map_err(|e| format!("Default keybindings are invalid: {}", e))
    }

    pub fn command_for(&self, key: &KeyEvent) -> Option<Command> {
        self.bindings
            .iter()
            .find(|(action_key, _)| action_key.matches(key))
            .map(|(_, command)| *command)
    }

    /// One line per command: all keys bound to it, and what it does
    pub fn help_lines(&self) -> Vec<(String, &'static str)> {
        let mut lines: Vec<(String, &'static str)> = Vec::new();
        let mut last: Option<Command> = None;
        for (key, command) in &self.bindings {
            if last == Some(*command)
                && let Some(line) = lines.last_mut()
            {
                line.0.push_str(", ");
                line.0.push_str(&key.display());
                continue;
            }
            lines.push((key.display(), command.description()));
            last = Some(*command);
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        assert_eq!(ActionKey::parse("j").unwrap(), ActionKey::Simple('j'));
        assert_eq!(ActionKey::parse("G").unwrap(), ActionKey::Simple('G'));
        assert_eq!(ActionKey::parse(":").unwrap(), ActionKey::Simple(':'));
        assert_eq!(ActionKey::parse("Space").unwrap(), ActionKey::Simple(' '));
    }

    #[test]
    fn test_parse_ctrl() {
        assert_eq!(ActionKey::parse("ctrl+c").unwrap(), ActionKey::Ctrl('c'));
        assert_eq!(ActionKey::parse("Ctrl+C").unwrap(), ActionKey::Ctrl('c'));
        assert_eq!(ActionKey::parse("CTRL+D").unwrap(), ActionKey::Ctrl('d'));
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(
            ActionKey::parse("Enter").unwrap(),
            ActionKey::Named(NamedKey::Enter)
        );
        assert_eq!(
            ActionKey::parse("escape").unwrap(),
            ActionKey::Named(NamedKey::Esc)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(ActionKey::parse("").is_err());
        assert!(ActionKey::parse("ctrl+").is_err());
        assert!(ActionKey::parse("ctrl+ll").is_err());
        assert!(ActionKey::parse("ctrl+?").is_err());
        assert!(ActionKey::parse("invalid").is_err());
    }

    #[test]
    fn test_matches_case_sensitive_chars() {
        let top = ActionKey::Simple('g');
        let bottom = ActionKey::Simple('G');

        let lower = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE);
        let upper = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);

        assert!(top.matches(&lower));
        assert!(!top.matches(&upper));
        assert!(bottom.matches(&upper));
        assert!(!bottom.matches(&lower));
    }

    #[test]
    fn test_matches_ctrl() {
        let ctrl_key = ActionKey::Ctrl('c');
        let plain = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        let ctrl = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        assert!(!ctrl_key.matches(&plain));
        assert!(ctrl_key.matches(&ctrl));
        assert!(!ActionKey::Simple('c').matches(&ctrl));
    }

    #[test]
    fn test_display() {
        assert_eq!(ActionKey::Simple('j').display(), "j");
        assert_eq!(ActionKey::Ctrl('c').display(), "Ctrl+C");
        assert_eq!(ActionKey::Named(NamedKey::Esc).display(), "Esc");
    }

    #[test]
    fn test_default_keymap() {
        let keymap = Keymap::with_defaults().unwrap();

        let cases = [
            (KeyCode::Char('q'), KeyModifiers::NONE, Command::Quit),
            (KeyCode::Char('c'), KeyModifiers::CONTROL, Command::Quit),
            (KeyCode::Char('j'), KeyModifiers::NONE, Command::Down),
            (KeyCode::Down, KeyModifiers::NONE, Command::Down),
            (KeyCode::Enter, KeyModifiers::NONE, Command::Select),
            (KeyCode::Esc, KeyModifiers::NONE, Command::Back),
            (KeyCode::Char(':'), KeyModifiers::SHIFT, Command::Goto),
            (KeyCode::Char('G'), KeyModifiers::SHIFT, Command::Bottom),
        ];
        for (code, modifiers, expected) in cases {
            let event = KeyEvent::new(code, modifiers);
            assert_eq!(keymap.command_for(&event), Some(expected), "{:?}", code);
        }

        let unbound = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(keymap.command_for(&unbound), None);
    }

    #[test]
    fn test_unknown_command_rejected() {
        let mut bindings = HashMap::new();
        bindings.insert("x".to_string(), "explode".to_string());
        assert!(Keymap::from_bindings(&bindings).is_err());
    }

    #[test]
    fn test_help_lines_group_keys() {
        let keymap = Keymap::with_defaults().unwrap();
        let lines = keymap.help_lines();

        let quit = lines
            .iter()
            .find(|(_, description)| *description == "Quit")
            .unwrap();
        assert!(quit.0.contains("q"));
        assert!(quit.0.contains("Ctrl+C"));
        // One line per command
        assert_eq!(lines.len(), 9);
    }
}
