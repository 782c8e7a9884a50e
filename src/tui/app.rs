//! Application state for the TUI
//!
//! The App struct owns the contexts and component state machines, runs the
//! effects they return and routes backend completions back to them.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::components::{
    CookieBanner, Effect, GestureAction, GestureRouter, Notice, PageTransition, PremiumModal,
    Swipe, SwipeDetector, TermsModal, TutorialFlow, WizardEffect,
};
use crate::config::Settings;
use crate::error::PouparError;
use crate::models::{Goal, Money, Route, VoiceAction};
use crate::services::{
    ApiCompletion, ApiRequest, ApiResponse, Dispatch, QueryCache, USER_QUERY_KEY,
};
use crate::state::{AudioContext, Session, ThemeContext};
use crate::storage::ClientStorage;

use super::dialogs::goal_wizard::GoalWizardForm;
use super::widgets::{Notification, NotificationQueue};

/// Entries of the navigation menu
pub const MENU_ITEMS: [(&str, Route); 5] = [
    ("Início", Route::Home),
    ("Faturas", Route::BillReader),
    ("Dashboard", Route::Dashboard),
    ("Lumin AI", Route::Chat),
    ("Definições", Route::Settings),
];

const SAVING_TIP: &str = "Defina um objetivo, automatize a sua poupança mensal e reveja as faturas de energia e telecomunicações todos os meses.";

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    Menu,
    #[default]
    Main,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    CommandPalette,
    GoalWizard,
    Tutorial,
    Premium,
    Terms,
    Language,
}

/// What an in-flight request was for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingRequest {
    Recommendation,
    TutorialProgress,
    FetchUser,
    AcceptTerms,
}

impl PendingRequest {
    fn of(request: &ApiRequest) -> Self {
        match request {
            ApiRequest::Recommendation { .. } => Self::Recommendation,
            ApiRequest::TutorialProgress(_) => Self::TutorialProgress,
            ApiRequest::FetchUser => Self::FetchUser,
            ApiRequest::AcceptTerms => Self::AcceptTerms,
        }
    }
}

/// A goal created in this session and how much has been put towards it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedGoal {
    pub goal: Goal,
    pub saved: Money,
}

/// Main application state
pub struct App {
    /// Application settings
    pub settings: Settings,

    /// Persisted client-side flags
    pub storage: ClientStorage,

    dispatcher: Box<dyn Dispatch>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Page being shown
    pub route: Route,
    history: Vec<Route>,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Highlighted menu entry
    pub menu_index: usize,

    /// Sheet menu visibility in the compact layout
    pub mobile_menu_open: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    pub audio: AudioContext,
    pub theme: ThemeContext,
    pub session: Session,
    pub queries: QueryCache,

    pub gestures: GestureRouter,
    pub swipe: SwipeDetector,
    pub transition: Option<PageTransition>,

    pub cookie_banner: CookieBanner,
    pub tutorial: TutorialFlow,
    pub terms: TermsModal,
    pub terms_scroll: u16,
    pub premium: PremiumModal,
    pub goal_wizard: Option<GoalWizardForm>,
    wizard_request: Option<Uuid>,

    /// Goals created this session
    pub goals: Vec<TrackedGoal>,
    pub selected_goal_index: usize,

    /// Whether the music player shows the progress bar
    pub player_expanded: bool,

    pub notifications: NotificationQueue,

    /// Status message to display
    pub status_message: Option<String>,

    /// Command palette input
    pub command_input: String,

    /// Selected command index in palette
    pub selected_command_index: usize,

    /// Highlighted entry in the language selector
    pub language_index: usize,

    pending: HashMap<Uuid, PendingRequest>,

    /// Date used as "today" by the goal wizard
    pub today: NaiveDate,
}

impl App {
    /// Create a new App instance
    pub fn new(settings: Settings, storage: ClientStorage, dispatcher: Box<dyn Dispatch>) -> Self {
        let mut queries = QueryCache::new();
        queries.invalidate(USER_QUERY_KEY);

        Self {
            audio: AudioContext::new(&settings),
            theme: ThemeContext::load(&storage),
            cookie_banner: CookieBanner::load(&storage),
            settings,
            storage,
            dispatcher,
            should_quit: false,
            route: Route::Home,
            history: Vec::new(),
            focused_panel: FocusedPanel::default(),
            menu_index: 0,
            mobile_menu_open: false,
            active_dialog: ActiveDialog::default(),
            session: Session::new(),
            queries,
            gestures: GestureRouter::new().with_refresh(),
            swipe: SwipeDetector::new(),
            transition: None,
            tutorial: TutorialFlow::new(),
            terms: TermsModal::new(),
            terms_scroll: 0,
            premium: PremiumModal::new(),
            goal_wizard: None,
            wizard_request: None,
            goals: Vec::new(),
            selected_goal_index: 0,
            player_expanded: false,
            notifications: NotificationQueue::new(),
            status_message: None,
            command_input: String::new(),
            selected_command_index: 0,
            language_index: 0,
            pending: HashMap::new(),
            today: Local::now().date_naive(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notifications.push(Notification::from(notice));
    }

    /// Navigate to a page, remembering the current one for "back"
    pub fn navigate(&mut self, route: Route) {
        self.mobile_menu_open = false;
        if route == self.route {
            return;
        }
        debug!(from = %self.route, to = %route, "navigate");
        self.history.push(self.route);
        self.route = route;
        self.transition = Some(PageTransition::begin(Instant::now()));
        if let Some(index) = MENU_ITEMS.iter().position(|(_, r)| *r == route) {
            self.menu_index = index;
        }
    }

    /// Return to the previous page; returns false when there is none
    pub fn go_back(&mut self) -> bool {
        match self.history.pop() {
            Some(route) => {
                self.route = route;
                self.transition = Some(PageTransition::begin(Instant::now()));
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Toggle focus between the menu and the page
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Menu => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Menu,
        };
    }

    pub fn menu_up(&mut self) {
        self.menu_index = self.menu_index.saturating_sub(1);
    }

    pub fn menu_down(&mut self) {
        if self.menu_index + 1 < MENU_ITEMS.len() {
            self.menu_index += 1;
        }
    }

    /// Open the highlighted menu entry
    pub fn select_menu_item(&mut self) {
        if let Some((_, route)) = MENU_ITEMS.get(self.menu_index) {
            self.navigate(*route);
        }
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match dialog {
            ActiveDialog::CommandPalette => {
                self.command_input.clear();
                self.selected_command_index = 0;
            }
            ActiveDialog::Terms => {
                self.terms.open();
                self.terms_scroll = 0;
            }
            ActiveDialog::Premium => {
                self.premium = PremiumModal::new();
            }
            ActiveDialog::Language => {
                self.language_index = crate::state::LANGUAGES
                    .iter()
                    .position(|(code, _)| *code == self.audio.language())
                    .unwrap_or(0);
            }
            _ => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog; a pending tutorial takes its place
    pub fn close_dialog(&mut self) {
        self.active_dialog = if self.tutorial.is_open() {
            ActiveDialog::Tutorial
        } else {
            ActiveDialog::None
        };
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Start a backend request and remember what it was for
    pub fn dispatch(&mut self, request: ApiRequest) -> Uuid {
        let kind = PendingRequest::of(&request);
        let id = self.dispatcher.dispatch(request);
        debug!(%id, ?kind, "request dispatched");
        self.pending.insert(id, kind);
        id
    }

    /// Number of requests that have not completed yet
    pub fn pending_requests(&self) -> usize {
        self.pending.len()
    }

    /// Execute effects in order
    pub fn run_effects(&mut self, effects: impl IntoIterator<Item = Effect>) {
        for effect in effects {
            match effect {
                Effect::Speak(text) => self.audio.speak(&text),
                Effect::PlaySound(cue) => self.audio.play_sound(cue),
                Effect::Notify(notice) => self.notify(notice),
                Effect::InvalidateQuery(key) => self.queries.invalidate(key),
                Effect::Request(request) => {
                    self.dispatch(request);
                }
            }
        }
    }

    /// Periodic update: refetch stale queries and advance playback
    pub fn tick(&mut self, elapsed: Duration) {
        for key in self.queries.take_stale() {
            if key == USER_QUERY_KEY {
                self.dispatch(ApiRequest::FetchUser);
            } else {
                warn!(%key, "no fetcher for query");
                self.queries.mark_failed(&key);
            }
        }

        self.audio.tick(elapsed);
        self.notifications.remove_expired();

        if let Some(transition) = self.transition {
            if !transition.is_active(Instant::now()) {
                self.transition = None;
            }
        }
    }

    /// Route a finished request back to whoever started it
    pub fn on_api_completion(&mut self, completion: ApiCompletion) {
        let ApiCompletion { id, result } = completion;
        let Some(kind) = self.pending.remove(&id) else {
            debug!(%id, "dropping completion for unknown request");
            return;
        };

        match kind {
            PendingRequest::Recommendation => self.on_recommendation(id, result),
            PendingRequest::TutorialProgress => {
                let effects = match result {
                    Ok(_) => self.tutorial.on_commit_succeeded(),
                    Err(e) => self.tutorial.on_commit_failed(&e),
                };
                self.run_effects(effects);
                if !self.tutorial.is_open() && self.active_dialog == ActiveDialog::Tutorial {
                    self.close_dialog();
                }
            }
            PendingRequest::FetchUser => match result {
                Ok(ApiResponse::User(user)) => {
                    self.queries.mark_fresh(USER_QUERY_KEY);
                    let effects = self.tutorial.maybe_activate(&user);
                    self.session.set_user(user);
                    self.run_effects(effects);
                    if self.tutorial.is_open() && !self.has_dialog() {
                        self.active_dialog = ActiveDialog::Tutorial;
                    }
                }
                Ok(other) => self.user_fetch_failed(PouparError::Json(format!(
                    "unexpected response: {:?}",
                    other
                ))),
                Err(e) => self.user_fetch_failed(e),
            },
            PendingRequest::AcceptTerms => {
                self.terms.settle(&result);
                if result.is_ok() {
                    self.notify(Notice::success("Termos aceites", "Obrigado por aceitar os termos."));
                }
                if self.active_dialog == ActiveDialog::Terms {
                    self.close_dialog();
                }
            }
        }
    }

    fn user_fetch_failed(&mut self, err: PouparError) {
        warn!("failed to load user profile: {}", err);
        self.queries.mark_failed(USER_QUERY_KEY);
        self.session.set_error(err.to_string());
    }

    fn on_recommendation(&mut self, id: Uuid, result: Result<ApiResponse, PouparError>) {
        if self.wizard_request != Some(id) {
            debug!(%id, "dropping recommendation for a closed wizard");
            return;
        }
        self.wizard_request = None;

        let Some(form) = self.goal_wizard.as_mut() else {
            return;
        };
        match result {
            Ok(ApiResponse::Recommendation(response)) => {
                if form.wizard.apply_recommendation(&response, self.today) {
                    form.load_from_draft();
                }
            }
            Ok(other) => form.wizard.recommendation_failed(&PouparError::Json(format!(
                "unexpected response: {:?}",
                other
            ))),
            Err(e) => form.wizard.recommendation_failed(&e),
        }
    }

    /// Open a fresh goal wizard
    pub fn open_goal_wizard(&mut self) {
        self.goal_wizard = Some(GoalWizardForm::new(self.today));
        self.wizard_request = None;
        self.open_dialog(ActiveDialog::GoalWizard);
    }

    /// Run a field update's side effect from the wizard
    pub fn on_wizard_effect(&mut self, effect: Option<WizardEffect>) {
        if let Some(WizardEffect::RequestRecommendation { prompt, .. }) = effect {
            let id = self.dispatch(ApiRequest::Recommendation { prompt });
            self.wizard_request = Some(id);
        }
    }

    /// Close the wizard; a late recommendation is then ignored
    pub fn cancel_goal_wizard(&mut self) {
        self.goal_wizard = None;
        self.wizard_request = None;
        self.close_dialog();
    }

    /// The wizard finished with a valid goal
    pub fn complete_goal(&mut self, goal: Goal) {
        info!(name = %goal.name, target = %goal.target_amount, "goal created");
        self.notify(Notice::success(
            "Objetivo criado!",
            format!("{}: {} por mês", goal.name, goal.monthly_contribution),
        ));
        self.goals.push(TrackedGoal {
            goal,
            saved: Money::zero(),
        });
        self.selected_goal_index = self.goals.len() - 1;
        self.cancel_goal_wizard();
        self.navigate(Route::Dreams);
    }

    /// Record one monthly contribution on the selected goal
    pub fn contribute_to_selected_goal(&mut self) {
        if let Some(tracked) = self.goals.get_mut(self.selected_goal_index) {
            tracked.saved = tracked.saved + tracked.goal.monthly_contribution;
            let message = format!("{} poupados em {}", tracked.saved, tracked.goal.name);
            self.set_status(message);
        }
    }

    /// Commit the current tutorial step
    pub fn advance_tutorial(&mut self) {
        if let Some(effect) = self.tutorial.advance() {
            self.run_effects([effect]);
        }
    }

    pub fn dismiss_tutorial(&mut self) {
        if self.tutorial.dismiss() {
            self.close_dialog();
        }
    }

    /// Press "accept" in the terms dialog
    pub fn accept_terms(&mut self) {
        if let Some(effect) = self.terms.accept() {
            self.run_effects([effect]);
        }
    }

    pub fn decline_terms(&mut self) {
        if self.terms.decline() {
            self.close_dialog();
        }
    }

    pub fn subscribe_premium(&mut self) {
        if !self.premium.can_subscribe() {
            return;
        }
        match self.premium.subscribe() {
            Ok(notice) => {
                self.notify(notice);
                self.close_dialog();
            }
            Err(notice) => self.notify(notice),
        }
    }

    pub fn accept_cookies(&mut self) {
        if let Err(e) = self.cookie_banner.accept(&mut self.storage) {
            warn!("failed to store cookie consent: {}", e);
            self.set_status(format!("Erro ao guardar preferência: {}", e));
        }
    }

    pub fn decline_cookies(&mut self) {
        if let Err(e) = self.cookie_banner.decline(&mut self.storage) {
            warn!("failed to store cookie consent: {}", e);
            self.set_status(format!("Erro ao guardar preferência: {}", e));
        }
    }

    pub fn toggle_theme(&mut self) {
        match self.theme.toggle(&mut self.storage) {
            Ok(theme) => self.set_status(format!("Tema: {}", theme.as_str())),
            Err(e) => {
                warn!("failed to store theme: {}", e);
                self.set_status(format!("Erro ao guardar tema: {}", e));
            }
        }
    }

    /// Mark the user profile stale; it is refetched on the next tick
    pub fn refresh(&mut self) {
        self.queries.invalidate(USER_QUERY_KEY);
        self.set_status("A atualizar...");
    }

    pub fn handle_swipe(&mut self, swipe: Swipe) {
        match self.gestures.handle(swipe, self.route.path()) {
            Some(GestureAction::Navigate(route)) => self.navigate(route),
            Some(GestureAction::Refresh) => self.refresh(),
            None => {}
        }
    }

    /// Carry out a voice command; listening stops afterwards
    pub fn execute_voice_action(&mut self, action: VoiceAction) {
        self.audio.set_listening(false);
        match action {
            VoiceAction::Navigate(route) => self.navigate(route),
            VoiceAction::GoBack => {
                if !self.go_back() {
                    self.set_status("Não há página anterior");
                }
            }
            VoiceAction::SavingTips => {
                self.run_effects([
                    Effect::Speak(SAVING_TIP.to_string()),
                    Effect::Notify(Notice::info("Como economizar", SAVING_TIP)),
                ]);
            }
            VoiceAction::Help => self.open_dialog(ActiveDialog::Help),
            VoiceAction::ToggleMusic => self.audio.toggle_music(),
        }
    }
}
