//! Voice command catalogue
//!
//! Commands are static; each lists the routes where it is offered.

use super::route::Route;

/// Where a command applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteContext {
    /// Offered on every route
    Wildcard,
    /// Offered on one route path
    Path(&'static str),
}

impl RouteContext {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Wildcard => true,
            Self::Path(p) => *p == path,
        }
    }
}

/// What happens when the command is executed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceAction {
    Navigate(Route),
    GoBack,
    SavingTips,
    Help,
    ToggleMusic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceCommand {
    pub command: &'static str,
    pub description: &'static str,
    pub context: &'static [RouteContext],
    pub action: VoiceAction,
}

impl VoiceCommand {
    /// Whether this command is offered on the given route path
    pub fn applies_to(&self, path: &str) -> bool {
        self.context.iter().any(|c| c.matches(path))
    }

    pub fn is_global(&self) -> bool {
        self.context.contains(&RouteContext::Wildcard)
    }
}

use RouteContext::{Path, Wildcard};

pub static VOICE_COMMANDS: &[VoiceCommand] = &[
    VoiceCommand {
        command: "Abrir faturas",
        description: "Navega para o leitor de faturas",
        context: &[Path("/"), Path("/dashboard")],
        action: VoiceAction::Navigate(Route::BillReader),
    },
    VoiceCommand {
        command: "Análise financeira",
        description: "Mostra análise detalhada das suas finanças",
        context: &[Path("/"), Path("/dashboard"), Path("/expenses")],
        action: VoiceAction::Navigate(Route::Dashboard),
    },
    VoiceCommand {
        command: "Como economizar",
        description: "Exibe dicas personalizadas de economia",
        context: &[Wildcard],
        action: VoiceAction::SavingTips,
    },
    VoiceCommand {
        command: "Voltar",
        description: "Retorna para a página anterior",
        context: &[Wildcard],
        action: VoiceAction::GoBack,
    },
    VoiceCommand {
        command: "Mostrar simulador",
        description: "Abre o simulador de poupança",
        context: &[Path("/"), Path("/expenses"), Path("/dreams")],
        action: VoiceAction::Navigate(Route::Simulator),
    },
    VoiceCommand {
        command: "Ajuda",
        description: "Mostra ajuda sobre a página atual",
        context: &[Wildcard],
        action: VoiceAction::Help,
    },
    VoiceCommand {
        command: "Ativar música",
        description: "Ativa/desativa música de fundo",
        context: &[Wildcard],
        action: VoiceAction::ToggleMusic,
    },
];
