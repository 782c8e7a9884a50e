//! View-state machines behind the screens and dialogs
//!
//! Each component owns its state and exposes transitions that return
//! [`Effect`]s or outcomes instead of performing I/O. The TUI renders them
//! and executes the effects.

pub mod cookie_banner;
pub mod effect;
pub mod gesture;
pub mod goal_wizard;
pub mod premium;
pub mod savings;
pub mod terms;
pub mod tutorial;
pub mod voice_overlay;

pub use cookie_banner::CookieBanner;
pub use effect::{Effect, Notice, NoticeKind};
pub use gesture::{GestureAction, GestureRouter, PageTransition, Swipe, SwipeDetector};
pub use goal_wizard::{GoalWizard, WizardEffect, WizardOutcome, WizardStep};
pub use premium::{PaymentMethod, PremiumModal};
pub use savings::SavingsProjection;
pub use terms::TermsModal;
pub use tutorial::TutorialFlow;
pub use voice_overlay::{relevant_commands, VoiceOverlay};
