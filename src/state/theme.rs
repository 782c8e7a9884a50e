//! Theme context

use ratatui::style::Color;
use tracing::warn;

use crate::error::PouparResult;
use crate::storage::client_storage::THEME;
use crate::storage::ClientStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Self::Dark => Palette {
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                highlight: Color::LightBlue,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                coins: Color::Yellow,
            },
            Self::Light => Palette {
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                highlight: Color::Magenta,
                success: Color::Green,
                warning: Color::Rgb(180, 120, 0),
                error: Color::Red,
                coins: Color::Rgb(180, 120, 0),
            },
        }
    }
}

/// Colours used by the views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub coins: Color,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeContext {
    theme: Theme,
}

impl ThemeContext {
    /// Read the stored theme; unknown values fall back to dark
    pub fn load(storage: &ClientStorage) -> Self {
        let theme = match storage.get(THEME) {
            Some(value) => Theme::parse(value).unwrap_or_else(|| {
                warn!(value, "unknown stored theme");
                Theme::default()
            }),
            None => Theme::default(),
        };
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// Switch theme and persist the choice
    pub fn toggle(&mut self, storage: &mut ClientStorage) -> PouparResult<Theme> {
        self.theme = self.theme.toggled();
        storage.set(THEME, self.theme.as_str())?;
        Ok(self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_toggle_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("client_storage.json");

        let mut storage = ClientStorage::open(path.clone()).unwrap();
        let mut ctx = ThemeContext::load(&storage);
        assert_eq!(ctx.theme(), Theme::Dark);
        assert_eq!(ctx.toggle(&mut storage).unwrap(), Theme::Light);

        let reopened = ClientStorage::open(path).unwrap();
        assert_eq!(ThemeContext::load(&reopened).theme(), Theme::Light);
    }

    #[test]
    fn test_unknown_value_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = ClientStorage::open(temp_dir.path().join("s.json")).unwrap();
        storage.set(THEME, "sepia").unwrap();
        assert_eq!(ThemeContext::load(&storage).theme(), Theme::Dark);
    }
}
