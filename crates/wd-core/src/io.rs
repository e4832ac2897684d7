//! Display and input collaborators
//!
//! The core never prints or reads on its own. Everything the player sees
//! goes through [`Display`], and every answer comes back through [`Input`].

use std::ops::RangeInclusive;

use crate::dog::Dog;
use crate::error::GameError;
use crate::owner::Owner;
use crate::scene::Scene;
use crate::stage::Stage;
use crate::termination::LossReason;

/// Answer to a two-way prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    First,
    Second,
}

impl Choice {
    /// Map a menu number (1 or 2) to a choice
    pub const fn from_number(n: i32) -> Option<Self> {
        match n {
            1 => Some(Choice::First),
            2 => Some(Choice::Second),
            _ => None,
        }
    }
}

/// Everything needed to draw the dog in its surroundings
#[derive(Debug, Clone, Copy)]
pub struct SceneView<'a> {
    pub stage: Stage,
    pub dog: &'a Dog,
    pub owner: &'a Owner,
    pub scene: &'a Scene,
}

/// Renders game state. Implementations must draw the values they are
/// given and never cache them.
pub trait Display {
    /// Title screen shown once before registration
    fn header(&mut self);

    /// Announce the start of a stage
    fn stage_banner(&mut self, stage: Stage);

    /// Draw the dog, its props, and the owner's standing
    fn scene(&mut self, view: SceneView<'_>);

    /// One line of narration
    fn message(&mut self, text: &str);

    /// Gauge and reputation panel
    fn stats(&mut self, dog: &Dog, owner: &Owner);

    fn stage_clear(&mut self, stage: Stage, dog: &Dog, owner: &Owner);

    fn game_over(&mut self, reason: LossReason, dog: &Dog, owner: &Owner);
}

/// Blocking player input. Implementations re-ask until the answer is
/// valid; an `Err` means no answer can ever arrive.
pub trait Input {
    /// Offer two labelled options
    fn choose(&mut self, first: &str, second: &str) -> Result<Choice, GameError>;

    /// Ask for an integer within `bounds`
    fn integer(&mut self, prompt: &str, bounds: RangeInclusive<i32>) -> Result<i32, GameError>;

    /// Ask for free text
    fn text(&mut self, prompt: &str) -> Result<String, GameError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_numbers() {
        assert_eq!(Choice::from_number(1), Some(Choice::First));
        assert_eq!(Choice::from_number(2), Some(Choice::Second));
        assert_eq!(Choice::from_number(0), None);
        assert_eq!(Choice::from_number(3), None);
    }
}
