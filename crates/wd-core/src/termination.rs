//! Win/loss evaluation
//!
//! A loss is either *conditional*, when a gauge or the reputation has
//! dropped to zero or below, or *unconditional*, when the player picked a
//! narrative dead end. Both render the same game-over screen and produce
//! [`Outcome::GameOver`], which every caller must pass straight up.

use strum::{Display, EnumIter};

use crate::dog::Dog;
use crate::io::Display as Screen;
use crate::owner::Owner;

/// Why a run ended early
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum LossReason {
    /// Hunger reached zero
    Starved,
    /// Thirst reached zero
    Dehydrated,
    /// Reputation reached zero
    Disgraced,
    /// The dog ran off after a ball
    LostChasingBall,
    /// The dog swam out to sea
    LostSwimming,
    /// The dog bit someone
    AnimalControl,
}

impl LossReason {
    pub const fn description(self) -> &'static str {
        match self {
            LossReason::Starved => "your dog starved",
            LossReason::Dehydrated => "your dog collapsed from thirst",
            LossReason::Disgraced => "your reputation hit rock bottom",
            LossReason::LostChasingBall => "your dog ran after a ball and you lost them",
            LossReason::LostSwimming => "your dog swam away and you lost them",
            LossReason::AnimalControl => "someone called Animal Control on you",
        }
    }

    /// True for losses that ignore gauge values
    pub const fn is_forced(self) -> bool {
        matches!(
            self,
            LossReason::LostChasingBall | LossReason::LostSwimming | LossReason::AnimalControl
        )
    }
}

/// Result of an event step, a stage, or a single action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    StageClear,
    GameOver(LossReason),
}

impl Outcome {
    pub const fn is_game_over(self) -> bool {
        matches!(self, Outcome::GameOver(_))
    }
}

/// The two kinds of termination check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Fires only if a threshold is already breached
    Conditional,
    /// Always fires with the given reason
    Unconditional(LossReason),
}

impl Termination {
    /// Evaluate the check, rendering the game-over screen if it fires
    pub fn evaluate(self, dog: &Dog, owner: &Owner, display: &mut dyn Screen) -> Outcome {
        let reason = match self {
            Termination::Conditional => match threshold_breach(dog, owner) {
                Some(reason) => reason,
                None => return Outcome::Continue,
            },
            Termination::Unconditional(reason) => {
                debug_assert!(reason.is_forced(), "{reason} is a threshold loss");
                reason
            }
        };

        tracing::warn!(
            %reason,
            hunger = dog.hunger,
            thirst = dog.thirst,
            reputation = owner.reputation,
            "game over"
        );
        display.game_over(reason, dog, owner);
        Outcome::GameOver(reason)
    }
}

/// Which threshold, if any, is breached. Hunger is checked first, then
/// thirst, then reputation.
pub fn threshold_breach(dog: &Dog, owner: &Owner) -> Option<LossReason> {
    if dog.hunger <= 0 {
        Some(LossReason::Starved)
    } else if dog.thirst <= 0 {
        Some(LossReason::Dehydrated)
    } else if owner.reputation <= 0 {
        Some(LossReason::Disgraced)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dog::FurColor;
    use crate::testing::{Rendered, RecordingDisplay};
    use proptest::prelude::*;

    fn pair(hunger: i32, thirst: i32, reputation: i32) -> (Dog, Owner) {
        let mut dog = Dog::new("Rex", FurColor::Brown);
        dog.hunger = hunger;
        dog.thirst = thirst;
        let mut owner = Owner::new("Erin", 30).unwrap();
        owner.reputation = reputation;
        (dog, owner)
    }

    #[test]
    fn test_conditional_quiet_when_healthy() {
        let (dog, owner) = pair(50, 50, 1);
        let mut display = RecordingDisplay::default();
        assert_eq!(
            Termination::Conditional.evaluate(&dog, &owner, &mut display),
            Outcome::Continue
        );
        assert!(display.frames.is_empty());
    }

    #[test]
    fn test_conditional_cause_order() {
        let (dog, owner) = pair(0, 0, 0);
        assert_eq!(threshold_breach(&dog, &owner), Some(LossReason::Starved));
        let (dog, owner) = pair(10, -5, 0);
        assert_eq!(threshold_breach(&dog, &owner), Some(LossReason::Dehydrated));
        let (dog, owner) = pair(10, 5, 0);
        assert_eq!(threshold_breach(&dog, &owner), Some(LossReason::Disgraced));
    }

    #[test]
    fn test_unconditional_fires_at_full_health() {
        let (dog, owner) = pair(1000, 1000, 1000);
        let mut display = RecordingDisplay::default();
        let outcome = Termination::Unconditional(LossReason::LostSwimming)
            .evaluate(&dog, &owner, &mut display);
        assert_eq!(outcome, Outcome::GameOver(LossReason::LostSwimming));
        assert_eq!(
            display.frames,
            vec![Rendered::GameOver {
                reason: LossReason::LostSwimming,
                hunger: 1000,
                thirst: 1000,
                reputation: 1000,
            }]
        );
    }

    #[test]
    fn test_forced_reasons() {
        assert!(LossReason::AnimalControl.is_forced());
        assert!(!LossReason::Disgraced.is_forced());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "threshold loss")]
    fn test_unconditional_rejects_threshold_reason() {
        let (dog, owner) = pair(50, 50, 20);
        let mut display = RecordingDisplay::default();
        Termination::Unconditional(LossReason::Starved).evaluate(&dog, &owner, &mut display);
    }

    proptest! {
        #[test]
        fn conditional_fires_iff_threshold_breached(
            hunger in -100i32..200,
            thirst in -100i32..200,
            reputation in -200i32..200,
        ) {
            let (dog, owner) = pair(hunger, thirst, reputation);
            let mut display = RecordingDisplay::default();
            let outcome = Termination::Conditional.evaluate(&dog, &owner, &mut display);
            let breached = hunger <= 0 || thirst <= 0 || reputation <= 0;
            prop_assert_eq!(outcome.is_game_over(), breached);
            prop_assert_eq!(display.frames.len(), usize::from(breached));
        }
    }
}
