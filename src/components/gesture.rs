//! Swipe navigation between the gamified pages
//!
//! Left/right swipes step through [`ROUTE_ORDER`]; a downward swipe refreshes
//! the page when it registered a refresh handler. Swipes come from mouse drags
//! (see [`SwipeDetector`]) or from keyboard shortcuts.

use std::time::{Duration, Instant};

use crate::models::Route;

/// Pages reachable by swiping, in order
pub const ROUTE_ORDER: [Route; 4] = [Route::Dreams, Route::Games, Route::News, Route::Wallet];

/// Length of the fade shown after a route change
pub const TRANSITION: Duration = Duration::from_millis(200);

/// Minimum horizontal drag, in columns
const MIN_HORIZONTAL_CELLS: u16 = 8;
/// Minimum vertical drag, in rows
const MIN_VERTICAL_CELLS: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureAction {
    Navigate(Route),
    Refresh,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GestureRouter {
    refresh: bool,
}

impl GestureRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the downward swipe
    pub fn with_refresh(mut self) -> Self {
        self.refresh = true;
        self
    }

    /// Map a swipe on `current_path` to an action
    ///
    /// Paths outside [`ROUTE_ORDER`] ignore horizontal swipes, and the ends of
    /// the order do not wrap.
    pub fn handle(&self, swipe: Swipe, current_path: &str) -> Option<GestureAction> {
        match swipe {
            Swipe::Down => self.refresh.then_some(GestureAction::Refresh),
            Swipe::Up => None,
            Swipe::Left | Swipe::Right => {
                let index = ROUTE_ORDER.iter().position(|r| r.path() == current_path)?;
                let target = if swipe == Swipe::Left {
                    ROUTE_ORDER.get(index + 1)
                } else {
                    index.checked_sub(1).and_then(|i| ROUTE_ORDER.get(i))
                };
                target.map(|route| GestureAction::Navigate(*route))
            }
        }
    }
}

/// Turns a mouse drag into a swipe
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeDetector {
    origin: Option<(u16, u16)>,
}

impl SwipeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, column: u16, row: u16) {
        self.origin = Some((column, row));
    }

    /// Finish the drag; short drags produce nothing
    pub fn release(&mut self, column: u16, row: u16) -> Option<Swipe> {
        let (start_col, start_row) = self.origin.take()?;
        let dx = i32::from(column) - i32::from(start_col);
        let dy = i32::from(row) - i32::from(start_row);

        // Terminal cells are about twice as tall as they are wide
        if dx.abs() >= dy.abs() * 2 {
            if dx.unsigned_abs() < u32::from(MIN_HORIZONTAL_CELLS) {
                return None;
            }
            Some(if dx < 0 { Swipe::Left } else { Swipe::Right })
        } else {
            if dy.unsigned_abs() < u32::from(MIN_VERTICAL_CELLS) {
                return None;
            }
            Some(if dy > 0 { Swipe::Down } else { Swipe::Up })
        }
    }

    pub fn cancel(&mut self) {
        self.origin = None;
    }
}

/// Fade-in after navigation; purely visual
#[derive(Debug, Clone, Copy)]
pub struct PageTransition {
    started: Instant,
}

impl PageTransition {
    pub fn begin(now: Instant) -> Self {
        Self { started: now }
    }

    pub fn is_active(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) < TRANSITION
    }

    /// Opacity in [0, 1]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / TRANSITION.as_secs_f32()).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_left_moves_forward() {
        let router = GestureRouter::new();
        assert_eq!(
            router.handle(Swipe::Left, "/games"),
            Some(GestureAction::Navigate(Route::News))
        );
        assert_eq!(router.handle(Swipe::Left, "/wallet"), None);
    }

    #[test]
    fn test_swipe_right_moves_back() {
        let router = GestureRouter::new();
        assert_eq!(router.handle(Swipe::Right, "/dreams"), None);
        assert_eq!(
            router.handle(Swipe::Right, "/wallet"),
            Some(GestureAction::Navigate(Route::News))
        );
    }

    #[test]
    fn test_other_routes_ignore_swipes() {
        let router = GestureRouter::new().with_refresh();
        assert_eq!(router.handle(Swipe::Left, "/dashboard"), None);
        assert_eq!(router.handle(Swipe::Right, "/"), None);
        assert_eq!(router.handle(Swipe::Down, "/dashboard"), Some(GestureAction::Refresh));
    }

    #[test]
    fn test_refresh_needs_handler() {
        assert_eq!(GestureRouter::new().handle(Swipe::Down, "/news"), None);
        assert_eq!(
            GestureRouter::new().with_refresh().handle(Swipe::Down, "/news"),
            Some(GestureAction::Refresh)
        );
    }

    #[test]
    fn test_detector_directions() {
        let mut detector = SwipeDetector::new();
        detector.press(40, 10);
        assert_eq!(detector.release(20, 11), Some(Swipe::Left));

        detector.press(20, 10);
        assert_eq!(detector.release(40, 10), Some(Swipe::Right));

        detector.press(20, 5);
        assert_eq!(detector.release(21, 12), Some(Swipe::Down));
    }

    #[test]
    fn test_detector_ignores_clicks() {
        let mut detector = SwipeDetector::new();
        assert_eq!(detector.release(5, 5), None);
        detector.press(10, 10);
        assert_eq!(detector.release(12, 10), None);
    }

    #[test]
    fn test_transition_length() {
        let start = Instant::now();
        let transition = PageTransition::begin(start);
        assert!(transition.is_active(start + Duration::from_millis(100)));
        assert!(!transition.is_active(start + Duration::from_millis(200)));
        assert_eq!(transition.progress(start + Duration::from_secs(1)), 1.0);
    }
}
