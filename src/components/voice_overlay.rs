//! Voice command hints for the current page

use crate::models::{VoiceCommand, VOICE_COMMANDS};

/// Commands offered on `route_path`, in catalogue order
pub fn relevant_commands(route_path: &str) -> Vec<&'static VoiceCommand> {
    VOICE_COMMANDS
        .iter()
        .filter(|cmd| cmd.applies_to(route_path))
        .collect()
}

/// Overlay state, recomputed from the route on each render
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceOverlay {
    commands: Vec<&'static VoiceCommand>,
}

impl VoiceOverlay {
    /// The overlay for `route_path`, or `None` while not listening
    pub fn visible(listening: bool, route_path: &str) -> Option<Self> {
        listening.then(|| Self {
            commands: relevant_commands(route_path),
        })
    }

    pub fn commands(&self) -> &[&'static VoiceCommand] {
        &self.commands
    }

    /// Command bound to digit `n` (1-based)
    pub fn command_for_digit(&self, n: usize) -> Option<&'static VoiceCommand> {
        n.checked_sub(1).and_then(|i| self.commands.get(i)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(commands: &[&'static VoiceCommand]) -> Vec<&'static str> {
        commands.iter().map(|c| c.command).collect()
    }

    #[test]
    fn test_wallet_shows_wildcard_commands() {
        assert_eq!(
            names(&relevant_commands("/wallet")),
            vec!["Como economizar", "Voltar", "Ajuda", "Ativar música"]
        );
    }

    #[test]
    fn test_unlisted_route_gets_only_globals() {
        let commands = relevant_commands("/partners");
        assert!(commands.iter().all(|c| c.is_global()));
        assert_eq!(commands.len(), 4);
    }

    #[test]
    fn test_home_keeps_catalogue_order() {
        assert_eq!(
            names(&relevant_commands("/")),
            vec![
                "Abrir faturas",
                "Análise financeira",
                "Como economizar",
                "Voltar",
                "Mostrar simulador",
                "Ajuda",
                "Ativar música"
            ]
        );
    }

    #[test]
    fn test_hidden_when_not_listening() {
        assert!(VoiceOverlay::visible(false, "/").is_none());

        let overlay = VoiceOverlay::visible(true, "/dreams").unwrap();
        assert_eq!(overlay.command_for_digit(1).map(|c| c.command), Some("Como economizar"));
        assert_eq!(overlay.command_for_digit(0), None);
        assert_eq!(overlay.command_for_digit(9), None);
    }
}
