//! Rules engine trait for the tableau.
//!
//! The game implements `RulesEngine` to define:
//! - What actions are legal
//! - How actions modify the game
//! - When the game is over

use crate::core::action::Action;

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// All eight runs completed.
    Won,
    /// Not won, and no move or deal is possible.
    Stalled,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Empty if nothing can be done
/// - `apply_action`: Returns `false` and changes nothing for an illegal action
/// - `is_terminal`: Return None if the game continues
pub trait RulesEngine {
    /// Enumerate every legal action.
    ///
    /// Moves come first, in column order, then `Deal` if the stock allows.
    fn legal_actions(&self) -> Vec<Action>;

    /// Apply an action, returning whether it was legal.
    fn apply_action(&mut self, action: &Action) -> bool;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Is `action` legal right now?
    fn is_legal(&self, action: &Action) -> bool {
        self.legal_actions().contains(action)
    }

    /// Suggest something to do: the first legal move, else a deal.
    fn hint(&self) -> Option<Action> {
        self.legal_actions().into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counter that can be bumped twice, then stalls.
    struct Countdown(u8);

    impl RulesEngine for Countdown {
        fn legal_actions(&self) -> Vec<Action> {
            if self.0 > 0 {
                vec![Action::Deal]
            } else {
                vec![]
            }
        }

        fn apply_action(&mut self, action: &Action) -> bool {
            if !self.is_legal(action) {
                return false;
            }
            self.0 -= 1;
            true
        }

        fn is_terminal(&self) -> Option<GameResult> {
            (self.0 == 0).then_some(GameResult::Stalled)
        }
    }

    #[test]
    fn test_default_methods() {
        let mut engine = Countdown(2);

        assert_eq!(engine.hint(), Some(Action::Deal));
        assert!(!engine.is_legal(&Action::move_run(0, 0, 1)));
        assert!(engine.apply_action(&Action::Deal));
        assert!(engine.apply_action(&Action::Deal));
        assert!(!engine.apply_action(&Action::Deal));
        assert_eq!(engine.hint(), None);
        assert_eq!(engine.is_terminal(), Some(GameResult::Stalled));
    }
}
