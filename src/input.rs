//! Key handling for the action menu
//!
//! Each key press maps to at most one menu action. Keys that map to
//! nothing are invalid choices and the caller ignores them.

use crate::manager::Action;
use crate::settings::Settings;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key bindings configuration - supports multiple keys per action
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub play: Vec<KeyCode>,
    pub reserve: Vec<KeyCode>,
    pub use_reserved: Vec<KeyCode>,
    pub swap_one: Vec<KeyCode>,
    pub swap_many: Vec<KeyCode>,
    pub quit: Vec<KeyCode>,
}

impl KeyBindings {
    /// Parse a key string into KeyCode
    fn parse_key(s: &str) -> Option<KeyCode> {
        let lower = s.to_lowercase();
        let code = match lower.as_str() {
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "space" => KeyCode::Char(' '),
            "enter" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "esc" | "escape" => KeyCode::Esc,
            _ => {
                let mut chars = lower.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };
        Some(code)
    }

    /// Parse a list of key strings into KeyCodes, dropping unknown names
    fn parse_keys(keys: &[String]) -> Vec<KeyCode> {
        keys.iter()
            .filter_map(|s| {
                let code = Self::parse_key(s);
                if code.is_none() {
                    tracing::warn!("Ignoring unknown key binding {:?}", s);
                }
                code
            })
            .collect()
    }

    /// Create keybindings from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            play: Self::parse_keys(&settings.keys.play),
            reserve: Self::parse_keys(&settings.keys.reserve),
            use_reserved: Self::parse_keys(&settings.keys.use_reserved),
            swap_one: Self::parse_keys(&settings.keys.swap_one),
            swap_many: Self::parse_keys(&settings.keys.swap_many),
            quit: Self::parse_keys(&settings.keys.quit),
        }
    }

    /// Resolve a key press to a menu action
    pub fn action_for(&self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        let code = normalize_key(key.code);
        [
            (&self.play, Action::Play),
            (&self.reserve, Action::Reserve),
            (&self.use_reserved, Action::UseReserved),
            (&self.swap_one, Action::SwapOne),
            (&self.swap_many, Action::SwapMany),
            (&self.quit, Action::Quit),
        ]
        .into_iter()
        .find(|(codes, _)| codes.contains(&code))
        .map(|(_, action)| action)
    }

    /// Keys bound to an action, for the menu hint
    pub fn keys_for(&self, action: Action) -> &[KeyCode] {
        match action {
            Action::Play => &self.play,
            Action::Reserve => &self.reserve,
            Action::UseReserved => &self.use_reserved,
            Action::SwapOne => &self.swap_one,
            Action::SwapMany => &self.swap_many,
            Action::Quit => &self.quit,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Short label for a key code
pub fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        other => format!("{:?}", other),
    }
}

/// Normalize key codes for consistent handling
fn normalize_key(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}
