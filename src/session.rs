use serde::{Deserialize, Serialize};

use crate::store::Notice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Presentation flags. Shares nothing with the mailbox; each command
/// touches one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSession {
    pub sidebar_open: bool,
    pub compose_open: bool,
    pub settings_open: bool,
    pub theme: Theme,
}

impl Default for UiSession {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            compose_open: false,
            settings_open: false,
            theme: Theme::Light,
        }
    }
}

impl UiSession {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn open_compose(&mut self) -> Notice {
        self.compose_open = true;
        Notice::success("Compose window opened")
    }

    pub fn close_compose(&mut self) {
        self.compose_open = false;
    }

    pub fn toggle_settings(&mut self) -> Notice {
        self.settings_open = !self.settings_open;
        Notice::info("Settings opened")
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = UiSession::default();
        assert!(s.sidebar_open);
        assert!(!s.compose_open);
        assert!(!s.settings_open);
        assert_eq!(s.theme, Theme::Light);
    }

    #[test]
    fn each_command_touches_one_field() {
        let mut s = UiSession::default();

        s.toggle_sidebar();
        assert_eq!(
            s,
            UiSession {
                sidebar_open: false,
                ..UiSession::default()
            }
        );

        s.open_compose();
        assert!(s.compose_open);
        assert!(!s.sidebar_open);
        s.open_compose();
        assert!(s.compose_open);
        s.close_compose();
        assert!(!s.compose_open);

        s.toggle_settings();
        assert!(s.settings_open);
        s.toggle_settings();
        assert!(!s.settings_open);

        s.set_theme(Theme::Dark);
        assert_eq!(s.theme, Theme::Dark);
        assert!(!s.sidebar_open);
    }

    #[test]
    fn theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }
}
