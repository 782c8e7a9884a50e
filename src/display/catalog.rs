//! Route, voice command and tutorial listings

use tabled::Tabled;

use super::render_table;
use crate::components::voice_overlay::relevant_commands;
use crate::models::{Route, VoiceCommand, TUTORIAL_STEPS, VOICE_COMMANDS};
use crate::models::tutorial::total_reward;

#[derive(Tabled)]
struct RouteRow {
    #[tabled(rename = "Path")]
    path: &'static str,
    #[tabled(rename = "Page")]
    title: &'static str,
}

/// Every page the shell can show
pub fn format_route_list() -> String {
    render_table(Route::all().iter().map(|route| RouteRow {
        path: route.path(),
        title: route.title(),
    }))
}

#[derive(Tabled)]
struct VoiceRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Command")]
    command: &'static str,
    #[tabled(rename = "Description")]
    description: &'static str,
    #[tabled(rename = "Where")]
    scope: String,
}

fn scope_label(command: &VoiceCommand) -> String {
    if command.is_global() {
        return "everywhere".to_string();
    }
    Route::all()
        .iter()
        .filter(|route| command.applies_to(route.path()))
        .map(|route| route.path())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Voice commands offered on `route`, or the whole catalogue
///
/// The numbering matches the digits used to trigger commands while the
/// overlay is listening.
pub fn format_voice_commands(route: Option<Route>) -> String {
    let commands: Vec<&VoiceCommand> = match route {
        Some(route) => relevant_commands(route.path()),
        None => VOICE_COMMANDS.iter().collect(),
    };

    if commands.is_empty() {
        return "No voice commands available.".to_string();
    }

    render_table(commands.into_iter().enumerate().map(|(i, command)| VoiceRow {
        index: i + 1,
        command: command.command,
        description: command.description,
        scope: scope_label(command),
    }))
}

#[derive(Tabled)]
struct TutorialRow {
    #[tabled(rename = "Step")]
    step: usize,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Coins")]
    coins: u32,
    #[tabled(rename = "XP")]
    experience: u32,
    #[tabled(rename = "Opens")]
    opens: &'static str,
}

/// The onboarding steps with their rewards and a total line
pub fn format_tutorial() -> String {
    let mut output = render_table(TUTORIAL_STEPS.iter().enumerate().map(|(i, step)| {
        TutorialRow {
            step: i + 1,
            title: format!("{} {}", step.kind.icon(), step.title),
            coins: step.reward.coins,
            experience: step.reward.experience,
            opens: step.path.map(|r| r.path()).unwrap_or("-"),
        }
    }));

    let total = total_reward();
    output.push_str(&format!(
        "\nTotal: {} coins, {} XP\n",
        total.coins, total.experience
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_list_has_every_path() {
        let output = format_route_list();
        for route in Route::all() {
            assert!(output.contains(route.path()));
        }
        assert!(output.contains("Sonhos"));
    }

    #[test]
    fn test_voice_commands_for_wallet_are_wildcards() {
        let output = format_voice_commands(Some(Route::Wallet));
        assert!(output.contains("Como economizar"));
        assert!(output.contains("Voltar"));
        assert!(output.contains("Ajuda"));
        assert!(output.contains("Ativar música"));
        assert!(!output.contains("Abrir faturas"));
    }

    #[test]
    fn test_voice_commands_home_lists_scoped() {
        let output = format_voice_commands(Some(Route::Home));
        assert!(output.contains("Abrir faturas"));
        assert!(output.contains("Mostrar simulador"));
    }

    #[test]
    fn test_full_catalogue_shows_scope() {
        let output = format_voice_commands(None);
        assert!(output.contains("everywhere"));
        assert!(output.contains("/dashboard"));
    }

    #[test]
    fn test_tutorial_total() {
        let output = format_tutorial();
        let total = total_reward();
        assert!(output.contains(&format!("Total: {} coins", total.coins)));
        assert!(output.contains("Bem-vindo ao POUPAR+!"));
    }
}
