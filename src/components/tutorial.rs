//! Onboarding tutorial for new accounts
//!
//! Opens once per session for a user on level 1 with no experience. Each
//! step's reward is committed to the backend before moving on, and only one
//! commit may be in flight at a time.

use tracing::{error, info};

use super::effect::{Effect, Notice};
use crate::error::PouparError;
use crate::models::tutorial::CLOSING_NARRATION;
use crate::models::{SoundCue, TutorialStep, UserProfile, TUTORIAL_STEPS};
use crate::services::{ApiRequest, TutorialProgress, USER_QUERY_KEY};

#[derive(Debug, Clone, Default)]
pub struct TutorialFlow {
    open: bool,
    started: bool,
    current_step: usize,
    in_flight: bool,
}

impl TutorialFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn step(&self) -> &'static TutorialStep {
        &TUTORIAL_STEPS[self.current_step.min(TUTORIAL_STEPS.len() - 1)]
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step + 1 == TUTORIAL_STEPS.len()
    }

    pub fn button_label(&self) -> &'static str {
        if self.in_flight {
            "Processando..."
        } else if self.is_last_step() {
            "Concluir"
        } else {
            "Próximo"
        }
    }

    /// Open for a brand-new user, at most once per session
    pub fn maybe_activate(&mut self, user: &UserProfile) -> Vec<Effect> {
        if self.started || !user.is_fresh() {
            return Vec::new();
        }
        self.started = true;
        self.open = true;
        info!(username = %user.username, "starting tutorial");
        vec![Effect::Speak(TUTORIAL_STEPS[0].narration.to_string())]
    }

    /// Commit the current step's reward
    ///
    /// Returns `None` while a commit is already running or the tutorial is
    /// closed.
    pub fn advance(&mut self) -> Option<Effect> {
        if !self.open || self.in_flight {
            return None;
        }
        self.in_flight = true;

        let step = self.step();
        Some(Effect::Request(ApiRequest::TutorialProgress(TutorialProgress {
            step: self.current_step,
            coins_earned: step.reward.coins,
            experience_earned: step.reward.experience,
        })))
    }

    pub fn on_commit_succeeded(&mut self) -> Vec<Effect> {
        self.in_flight = false;
        let reward = self.step().reward;

        let mut effects = vec![
            Effect::InvalidateQuery(USER_QUERY_KEY),
            Effect::Notify(Notice::success(
                "Parabéns!",
                format!(
                    "Você ganhou {} POUPAR Coins e {} XP!",
                    reward.coins, reward.experience
                ),
            )),
            Effect::PlaySound(SoundCue::Coin),
        ];

        if self.current_step + 1 < TUTORIAL_STEPS.len() {
            self.current_step += 1;
            effects.push(Effect::Speak(self.step().narration.to_string()));
        } else {
            self.open = false;
            info!("tutorial finished");
            effects.push(Effect::Speak(CLOSING_NARRATION.to_string()));
        }
        effects
    }

    /// Keep the step so the user can retry
    pub fn on_commit_failed(&mut self, err: &PouparError) -> Vec<Effect> {
        self.in_flight = false;
        error!(step = self.current_step, "failed to save tutorial progress: {}", err);
        vec![Effect::Notify(Notice::error(
            "Erro ao avançar",
            "Não foi possível salvar seu progresso. Por favor, tente novamente.",
        ))]
    }

    /// Close unless a commit is running; returns whether it closed
    pub fn dismiss(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.open = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_user() -> UserProfile {
        UserProfile {
            username: "joana".into(),
            level: 1,
            experience: 0,
            coins: 0,
        }
    }

    #[test]
    fn test_opens_once_per_session() {
        let mut flow = TutorialFlow::new();
        let effects = flow.maybe_activate(&fresh_user());
        assert!(flow.is_open());
        assert_eq!(
            effects,
            vec![Effect::Speak(TUTORIAL_STEPS[0].narration.to_string())]
        );

        assert!(flow.dismiss());
        assert!(flow.maybe_activate(&fresh_user()).is_empty());
        assert!(!flow.is_open());
    }

    #[test]
    fn test_experienced_user_skips_tutorial() {
        let mut flow = TutorialFlow::new();
        let user = UserProfile {
            experience: 10,
            ..fresh_user()
        };
        assert!(flow.maybe_activate(&user).is_empty());
        assert!(!flow.is_open());
    }

    #[test]
    fn test_advance_is_guarded() {
        let mut flow = TutorialFlow::new();
        assert!(flow.advance().is_none());

        flow.maybe_activate(&fresh_user());
        let effect = flow.advance();
        assert_eq!(
            effect,
            Some(Effect::Request(ApiRequest::TutorialProgress(TutorialProgress {
                step: 0,
                coins_earned: 50,
                experience_earned: 100,
            })))
        );
        assert!(flow.advance().is_none());
        assert!(!flow.dismiss());
        assert_eq!(flow.button_label(), "Processando...");
    }

    #[test]
    fn test_success_effects_in_order() {
        let mut flow = TutorialFlow::new();
        flow.maybe_activate(&fresh_user());
        flow.advance();

        let effects = flow.on_commit_succeeded();
        assert_eq!(effects[0], Effect::InvalidateQuery("/api/user"));
        assert!(matches!(&effects[1], Effect::Notify(n) if n.message.contains("50 POUPAR Coins")));
        assert_eq!(effects[2], Effect::PlaySound(SoundCue::Coin));
        assert_eq!(
            effects[3],
            Effect::Speak(TUTORIAL_STEPS[1].narration.to_string())
        );
        assert_eq!(flow.current_step(), 1);
        assert!(!flow.is_in_flight());
    }

    #[test]
    fn test_failure_keeps_step_and_allows_retry() {
        let mut flow = TutorialFlow::new();
        flow.maybe_activate(&fresh_user());
        flow.advance();

        let effects = flow.on_commit_failed(&PouparError::api(500, "boom"));
        assert!(matches!(&effects[0], Effect::Notify(n) if n.title == "Erro ao avançar"));
        assert_eq!(flow.current_step(), 0);
        assert!(flow.is_open());
        assert!(flow.advance().is_some());
    }

    #[test]
    fn test_last_step_closes_with_farewell() {
        let mut flow = TutorialFlow::new();
        flow.maybe_activate(&fresh_user());
        for _ in 0..2 {
            flow.advance();
            flow.on_commit_succeeded();
        }
        assert!(flow.is_last_step());
        assert_eq!(flow.button_label(), "Concluir");

        flow.advance();
        let effects = flow.on_commit_succeeded();
        assert!(!flow.is_open());
        assert_eq!(
            effects.last(),
            Some(&Effect::Speak(CLOSING_NARRATION.to_string()))
        );
        assert!(flow.advance().is_none());
    }
}
