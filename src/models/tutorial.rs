//! Onboarding tutorial catalogue
//!
//! Three fixed steps, each granting a coin/experience reward when completed.

use super::route::Route;

/// Rewards granted for completing a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reward {
    pub coins: u32,
    pub experience: u32,
}

/// Which step this is; drives the icon shown next to the title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialStepKind {
    Welcome,
    Simulator,
    Wallet,
}

impl TutorialStepKind {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Welcome => "★",
            Self::Simulator => "∑",
            Self::Wallet => "¤",
        }
    }
}

/// A single tutorial step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorialStep {
    pub kind: TutorialStepKind,
    pub title: &'static str,
    pub description: &'static str,
    pub reward: Reward,
    pub path: Option<Route>,
    pub narration: &'static str,
}

/// Spoken when the last step has been completed
pub const CLOSING_NARRATION: &str = "Parabéns! Agora você está pronto para começar sua jornada de economia inteligente. Estou aqui para ajudar sempre que precisar!";

pub static TUTORIAL_STEPS: [TutorialStep; 3] = [
    TutorialStep {
        kind: TutorialStepKind::Welcome,
        title: "Bem-vindo ao POUPAR+!",
        description: "Vamos te ajudar a economizar dinheiro de forma divertida e inteligente. Siga este tutorial para ganhar suas primeiras recompensas!",
        reward: Reward {
            coins: 50,
            experience: 100,
        },
        path: None,
        narration: "Olá! Sou o Lumin, seu assistente financeiro inteligente. Vou te guiar através da nossa aplicação para que você aproveite ao máximo todas as funcionalidades. Vamos começar?",
    },
    TutorialStep {
        kind: TutorialStepKind::Simulator,
        title: "Simulador de Economia",
        description: "Use nosso simulador para descobrir quanto pode poupar em suas contas. Clique no card 'Simulador' para começar.",
        reward: Reward {
            coins: 100,
            experience: 200,
        },
        path: Some(Route::Simulator),
        narration: "No simulador, você pode calcular suas potenciais economias em faturas de energia e telecomunicações. É uma ferramenta poderosa que já ajudou milhares de usuários a economizar.",
    },
    TutorialStep {
        kind: TutorialStepKind::Wallet,
        title: "Sua Carteira Digital",
        description: "Acompanhe suas economias e conquistas na carteira. Visite a seção 'Carteira' para ver seu progresso.",
        reward: Reward {
            coins: 100,
            experience: 200,
        },
        path: Some(Route::Wallet),
        narration: "Na sua carteira digital, você pode acompanhar seus POUPAR Coins acumulados e trocar por recompensas reais. Cada economia que você faz se transforma em coins!",
    },
];

/// Total reward for finishing the whole tutorial
pub fn total_reward() -> Reward {
    TUTORIAL_STEPS.iter().fold(
        Reward {
            coins: 0,
            experience: 0,
        },
        |acc, step| Reward {
            coins: acc.coins + step.reward.coins,
            experience: acc.experience + step.reward.experience,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_shape() {
        assert_eq!(TUTORIAL_STEPS.len(), 3);
        assert_eq!(TUTORIAL_STEPS[0].path, None);
        assert_eq!(TUTORIAL_STEPS[2].path, Some(Route::Wallet));
    }

    #[test]
    fn test_total_reward() {
        let total = total_reward();
        assert_eq!(total.coins, 250);
        assert_eq!(total.experience, 500);
    }
}
