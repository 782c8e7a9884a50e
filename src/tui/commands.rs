//! Command definitions for the command palette

use crate::models::Route;

/// A command that can be executed
#[derive(Debug, Clone)]
pub struct Command {
    /// Command name (what user types)
    pub name: &'static str,
    pub description: &'static str,
    /// Keyboard shortcut (if any)
    pub shortcut: Option<&'static str>,
    pub action: CommandAction,
}

/// Actions that commands can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    // Navigation
    Navigate(Route),
    GoBack,

    // Dialogs
    NewGoal,
    Premium,
    Terms,
    Language,

    // Audio
    ToggleMusic,
    NextTrack,
    ToggleMute,
    ToggleListening,

    // General
    ToggleTheme,
    Refresh,
    Help,
    Quit,
}

/// All available commands
pub static COMMANDS: &[Command] = &[
    Command {
        name: "inicio",
        description: "Página inicial",
        shortcut: None,
        action: CommandAction::Navigate(Route::Home),
    },
    Command {
        name: "dashboard",
        description: "Painel financeiro",
        shortcut: None,
        action: CommandAction::Navigate(Route::Dashboard),
    },
    Command {
        name: "sonhos",
        description: "Objetivos e poupanças",
        shortcut: None,
        action: CommandAction::Navigate(Route::Dreams),
    },
    Command {
        name: "jogos",
        description: "Jogos e recompensas",
        shortcut: None,
        action: CommandAction::Navigate(Route::Games),
    },
    Command {
        name: "noticias",
        description: "Notícias financeiras",
        shortcut: None,
        action: CommandAction::Navigate(Route::News),
    },
    Command {
        name: "carteira",
        description: "Carteira e moedas",
        shortcut: None,
        action: CommandAction::Navigate(Route::Wallet),
    },
    Command {
        name: "faturas",
        description: "Leitor de faturas",
        shortcut: None,
        action: CommandAction::Navigate(Route::BillReader),
    },
    Command {
        name: "lumin",
        description: "Assistente Lumin AI",
        shortcut: None,
        action: CommandAction::Navigate(Route::Chat),
    },
    Command {
        name: "musica",
        description: "Leitor de música",
        shortcut: None,
        action: CommandAction::Navigate(Route::Music),
    },
    Command {
        name: "definicoes",
        description: "Definições da conta",
        shortcut: None,
        action: CommandAction::Navigate(Route::Settings),
    },
    Command {
        name: "voltar",
        description: "Página anterior",
        shortcut: Some("Backspace"),
        action: CommandAction::GoBack,
    },
    Command {
        name: "objetivo",
        description: "Criar um novo objetivo",
        shortcut: Some("g"),
        action: CommandAction::NewGoal,
    },
    Command {
        name: "premium",
        description: "Subscrever POUPAR+ Premium",
        shortcut: Some("p"),
        action: CommandAction::Premium,
    },
    Command {
        name: "termos",
        description: "Termos e condições",
        shortcut: Some("t"),
        action: CommandAction::Terms,
    },
    Command {
        name: "idioma",
        description: "Idioma da narração",
        shortcut: Some("L"),
        action: CommandAction::Language,
    },
    Command {
        name: "play",
        description: "Tocar/pausar música",
        shortcut: Some("Space"),
        action: CommandAction::ToggleMusic,
    },
    Command {
        name: "proxima",
        description: "Próxima faixa",
        shortcut: Some("."),
        action: CommandAction::NextTrack,
    },
    Command {
        name: "mudo",
        description: "Silenciar/ativar som",
        shortcut: Some("m"),
        action: CommandAction::ToggleMute,
    },
    Command {
        name: "voz",
        description: "Comandos de voz",
        shortcut: Some("v"),
        action: CommandAction::ToggleListening,
    },
    Command {
        name: "tema",
        description: "Alternar tema claro/escuro",
        shortcut: Some("T"),
        action: CommandAction::ToggleTheme,
    },
    Command {
        name: "atualizar",
        description: "Recarregar perfil",
        shortcut: Some("r"),
        action: CommandAction::Refresh,
    },
    Command {
        name: "ajuda",
        description: "Mostrar atalhos",
        shortcut: Some("?"),
        action: CommandAction::Help,
    },
    Command {
        name: "sair",
        description: "Sair da aplicação",
        shortcut: Some("q"),
        action: CommandAction::Quit,
    },
];

/// Find a command by name
pub fn find_command(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|cmd| cmd.name == name)
}

/// Commands whose name or description contains the query
pub fn filter_commands(query: &str) -> Vec<&'static Command> {
    if query.is_empty() {
        return COMMANDS.iter().collect();
    }
    let query = query.to_lowercase();
    COMMANDS
        .iter()
        .filter(|cmd| {
            cmd.name.contains(&query) || cmd.description.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_command() {
        let cmd = find_command("objetivo").unwrap();
        assert_eq!(cmd.action, CommandAction::NewGoal);
        assert!(find_command("nonexistent").is_none());
    }

    #[test]
    fn test_filter_matches_description() {
        let results = filter_commands("MÚSICA");
        assert!(results.iter().any(|c| c.name == "play"));
        assert!(results.iter().any(|c| c.name == "musica"));
        assert_eq!(filter_commands("").len(), COMMANDS.len());
    }
}
