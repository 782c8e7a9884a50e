//! Application routes
//!
//! Every page the shell can display, addressed by the same paths the web
//! client uses.

use std::fmt;

/// A page of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Auth,
    Expenses,
    Dreams,
    Simulator,
    Investments,
    Wallet,
    BillReader,
    Chat,
    Dashboard,
    Settings,
    Games,
    Music,
    News,
    Partners,
    Contact,
}

impl Route {
    pub fn all() -> &'static [Self] {
        &[
            Self::Home,
            Self::Auth,
            Self::Expenses,
            Self::Dreams,
            Self::Simulator,
            Self::Investments,
            Self::Wallet,
            Self::BillReader,
            Self::Chat,
            Self::Dashboard,
            Self::Settings,
            Self::Games,
            Self::Music,
            Self::News,
            Self::Partners,
            Self::Contact,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Auth => "/auth",
            Self::Expenses => "/expenses",
            Self::Dreams => "/dreams",
            Self::Simulator => "/simulator",
            Self::Investments => "/investments",
            Self::Wallet => "/wallet",
            Self::BillReader => "/bill-reader",
            Self::Chat => "/chat",
            Self::Dashboard => "/dashboard",
            Self::Settings => "/settings",
            Self::Games => "/games",
            Self::Music => "/music",
            Self::News => "/news",
            Self::Partners => "/partners",
            Self::Contact => "/contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Início",
            Self::Auth => "Entrar",
            Self::Expenses => "Despesas",
            Self::Dreams => "Sonhos",
            Self::Simulator => "Simulador",
            Self::Investments => "Investimentos",
            Self::Wallet => "Carteira",
            Self::BillReader => "Faturas",
            Self::Chat => "Lumin AI",
            Self::Dashboard => "Dashboard",
            Self::Settings => "Definições",
            Self::Games => "Jogos",
            Self::Music => "Música",
            Self::News => "Notícias",
            Self::Partners => "Parceiros",
            Self::Contact => "Contacto",
        }
    }

    /// Resolve a path to a route; unknown paths yield `None`
    pub fn from_path(path: &str) -> Option<Self> {
        Self::all().iter().copied().find(|r| r.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_resolve_back() {
        for route in Route::all() {
            assert_eq!(Route::from_path(route.path()), Some(*route));
        }
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(Route::from_path("/nowhere"), None);
        assert_eq!(Route::from_path("dreams"), None);
    }
}
