//! The player walking the dog
//!
//! Each `action_*` method narrates an event, asks the player to pick one
//! of two responses, and applies the consequences to the dog and owner.
//! Some branches only lose if a threshold has already been crossed
//! ([`Termination::Conditional`]); others always end the run
//! ([`Termination::Unconditional`]).

use crate::consts::{
    ANIMAL_CONTROL_REPUTATION, LITTER_PENALTY, MAX_AGE, MEAL_AMOUNT, MIN_OWNER_AGE,
    PICKUP_BONUS, RESCUE_BONUS, STARTING_REPUTATION,
};
use crate::dog::Dog;
use crate::error::GameError;
use crate::event::EventContext;
use crate::io::{Choice, Input};
use crate::termination::{LossReason, Outcome, Termination};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub name: String,
    pub age: i32,
    /// Carries over from stage to stage
    pub reputation: i32,
}

impl Owner {
    /// Create an owner. Anyone under 18 is turned away.
    pub fn new(name: impl Into<String>, age: i32) -> Result<Self, GameError> {
        if age < MIN_OWNER_AGE {
            return Err(GameError::AgeIneligible { age });
        }
        Ok(Self {
            name: name.into(),
            age,
            reputation: STARTING_REPUTATION,
        })
    }

    /// Ask for name and age. A preset name skips the name prompt.
    pub fn register(input: &mut dyn Input, preset_name: Option<&str>) -> Result<Self, GameError> {
        let name = match preset_name {
            Some(name) => name.to_string(),
            None => input.text("What is your name?")?,
        };
        let age = input.integer("How old are you?", 0..=MAX_AGE)?;
        Self::new(name, age)
    }

    /// The dog is starving: feed it or ignore it.
    ///
    /// Hunger drops before the question is asked. Feeding gives the same
    /// amount back; ignoring keeps the loss.
    pub fn action_feed(
        &mut self,
        dog: &mut Dog,
        ctx: &mut EventContext<'_>,
    ) -> Result<Outcome, GameError> {
        dog.hunger -= MEAL_AMOUNT;
        ctx.say(&format!("{} is starving...", dog.name));
        ctx.display.stats(dog, self);

        match ctx.input.choose("feed", "ignore")? {
            Choice::First => {
                dog.eat(self, ctx);
                Ok(Outcome::Continue)
            }
            Choice::Second => {
                ctx.say(&format!("Poor {} is too hungry.", dog.name));
                Ok(self.settle(dog, ctx))
            }
        }
    }

    /// The dog is thirsty: hydrate it or ignore it. Mirrors [`Self::action_feed`].
    pub fn action_drink(
        &mut self,
        dog: &mut Dog,
        ctx: &mut EventContext<'_>,
    ) -> Result<Outcome, GameError> {
        dog.thirst -= MEAL_AMOUNT;
        ctx.say(&format!("{} is thirsty...", dog.name));
        ctx.display.stats(dog, self);

        match ctx.input.choose("hydrate", "ignore")? {
            Choice::First => {
                dog.drink(self, ctx);
                Ok(Outcome::Continue)
            }
            Choice::Second => {
                ctx.say(&format!("Poor {} is too thirsty.", dog.name));
                Ok(self.settle(dog, ctx))
            }
        }
    }

    /// Something is in the way: approach it or leave it alone.
    pub fn action_encounter(
        &mut self,
        dog: &mut Dog,
        ctx: &mut EventContext<'_>,
    ) -> Result<Outcome, GameError> {
        let label = ctx.scene.distraction_label();
        let glyph = ctx.scene.distraction.unwrap_or("");
        ctx.say(&format!("You encountered a {label}{glyph}!"));

        match ctx.input.choose("approach", "leave it alone")? {
            Choice::First => {
                ctx.say(&format!("You approached the {label}."));
                dog.encounter(self, ctx);
                Ok(Termination::Conditional.evaluate(dog, self, ctx.display))
            }
            Choice::Second => {
                ctx.say(&format!("You ran away from the {label}."));
                ctx.display.stats(dog, self);
                Ok(Outcome::Continue)
            }
        }
    }

    /// Poop or litter on the ground: pick it up or pretend not to see it.
    pub fn action_trash(
        &mut self,
        dog: &mut Dog,
        ctx: &mut EventContext<'_>,
    ) -> Result<Outcome, GameError> {
        let label = ctx.scene.trash_label();
        let glyph = ctx.scene.trash.unwrap_or("");
        ctx.say(&format!("You found a {label}{glyph}"));

        match ctx.input.choose("pick it up", "ignore")? {
            Choice::First => {
                self.reputation += PICKUP_BONUS;
                ctx.say("Congrats!");
                ctx.say("You gained reputation.");
            }
            Choice::Second => {
                self.reputation -= LITTER_PENALTY;
                ctx.say("People are staring...");
                ctx.say("Your reputation has been lowered.");
            }
        }
        Ok(self.settle(dog, ctx))
    }

    /// A ball rolls by. Letting the dog chase it loses the dog.
    pub fn action_ball(
        &mut self,
        dog: &mut Dog,
        ctx: &mut EventContext<'_>,
    ) -> Result<Outcome, GameError> {
        let glyph = ctx.scene.distraction.unwrap_or("");
        ctx.say(&format!("You found a ball{glyph}"));

        let chase = format!("let {} chase the ball", dog.name);
        let lead = format!("lead {} away", dog.name);
        match ctx.input.choose(&chase, &lead)? {
            Choice::First => {
                ctx.say(&format!("{} chased the ball!", dog.name));
                ctx.say(&format!("{} kept running towards the ball.", dog.name));
                ctx.say(&format!("{} kept running and you lost them!", dog.name));
                Ok(Termination::Unconditional(LossReason::LostChasingBall).evaluate(
                    dog,
                    self,
                    ctx.display,
                ))
            }
            Choice::Second => {
                ctx.say(&format!("You led {} away from the ball.", dog.name));
                ctx.say(&format!("{} is sad, but you can keep walking.", dog.name));
                dog.walk(self, ctx);
                Ok(Outcome::Continue)
            }
        }
    }

    /// The dog jumped into the ocean. Only swimming after it saves the run.
    pub fn action_swim(
        &mut self,
        dog: &mut Dog,
        ctx: &mut EventContext<'_>,
    ) -> Result<Outcome, GameError> {
        let glyph = ctx.scene.distraction.unwrap_or("");
        ctx.say(&format!("{} jumped into the ocean!!{glyph}", dog.name));

        match ctx.input.choose("leave it be", "swim after it!!!")? {
            Choice::First => {
                ctx.say(&format!("You let {} swim into the ocean!", dog.name));
                ctx.say(&format!("{} just kept swimming.", dog.name));
                ctx.say(&format!("{} kept swimming and you lost them!", dog.name));
                Ok(Termination::Unconditional(LossReason::LostSwimming).evaluate(
                    dog,
                    self,
                    ctx.display,
                ))
            }
            Choice::Second => {
                self.reputation += RESCUE_BONUS;
                ctx.say(&format!("You swam after {}!!!", dog.name));
                ctx.say("You rescued your dog!");
                ctx.display.stats(dog, self);
                Ok(Outcome::Continue)
            }
        }
    }

    /// A stranger approaches. Letting the dog bark ends in a bite.
    pub fn action_human(
        &mut self,
        dog: &mut Dog,
        ctx: &mut EventContext<'_>,
    ) -> Result<Outcome, GameError> {
        ctx.say("You encountered a human.");

        let approach = format!("let {} slowly approach", dog.name);
        let bark = format!("let {} bark", dog.name);
        match ctx.input.choose(&approach, &bark)? {
            Choice::First => {
                ctx.say(&format!("You let {} slowly approach the person.", dog.name));
                dog.be_friendly(self, ctx);
                Ok(Outcome::Continue)
            }
            Choice::Second => {
                dog.bark(self, ctx);
                ctx.say(&format!("{} BIT THE PERSON!!!", dog.name));
                ctx.say("Someone called Animal Control on you...");
                self.reputation = ANIMAL_CONTROL_REPUTATION;
                Ok(Termination::Unconditional(LossReason::AnimalControl).evaluate(
                    dog,
                    self,
                    ctx.display,
                ))
            }
        }
    }

    /// Conditional check followed by the stats panel when play goes on
    fn settle(&self, dog: &Dog, ctx: &mut EventContext<'_>) -> Outcome {
        let outcome = Termination::Conditional.evaluate(dog, self, ctx.display);
        if !outcome.is_game_over() {
            ctx.display.stats(dog, self);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dog::FurColor;
    use crate::scene::{BALL, Scene};
    use crate::stage::Stage;
    use crate::testing::{Harness, Rendered, ScriptedInput, ScriptedRng};

    fn setup() -> (Dog, Owner) {
        (
            Dog::new("Rex", FurColor::Black),
            Owner::new("Erin", 30).unwrap(),
        )
    }

    fn harness(answers: &[i32]) -> Harness {
        let mut input = ScriptedInput::new();
        for &n in answers {
            input = input.choice(n);
        }
        Harness::new(Stage::Street, input, ScriptedRng::new([0, 0, 0]))
    }

    #[test]
    fn test_age_gate() {
        assert!(matches!(
            Owner::new("Kid", 17),
            Err(GameError::AgeIneligible { age: 17 })
        ));
        let owner = Owner::new("Adult", 18).unwrap();
        assert_eq!(owner.reputation, 20);
    }

    #[test]
    fn test_register_with_preset_name() {
        let mut input = ScriptedInput::new().integer(42);
        let owner = Owner::register(&mut input, Some("Yuna")).unwrap();
        assert_eq!(owner.name, "Yuna");
        assert_eq!(owner.age, 42);
    }

    #[test]
    fn test_feed_round_trip() {
        let (mut dog, mut owner) = setup();
        let mut h = harness(&[1]);
        let mut scene = Scene::new();
        let outcome = owner.action_feed(&mut dog, &mut h.context(&mut scene)).unwrap();
        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(dog.hunger, 50);
        // the panel shown before the question already has the drained gauge
        assert!(h.display.frames.contains(&Rendered::Stats {
            hunger: 20,
            thirst: 50,
            reputation: 20
        }));
    }

    #[test]
    fn test_ignore_feed_keeps_loss() {
        let (mut dog, mut owner) = setup();
        let mut h = harness(&[2]);
        let mut scene = Scene::new();
        let outcome = owner.action_feed(&mut dog, &mut h.context(&mut scene)).unwrap();
        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(dog.hunger, 20);
    }

    #[test]
    fn test_ignore_feed_starves_hungry_dog() {
        let (mut dog, mut owner) = setup();
        dog.hunger = 30;
        let mut h = harness(&[2]);
        let mut scene = Scene::new();
        let outcome = owner.action_feed(&mut dog, &mut h.context(&mut scene)).unwrap();
        assert_eq!(outcome, Outcome::GameOver(LossReason::Starved));
        assert_eq!(dog.hunger, 0);
    }

    #[test]
    fn test_ignore_drink_dehydrates() {
        let (mut dog, mut owner) = setup();
        dog.thirst = 10;
        let mut h = harness(&[2]);
        let mut scene = Scene::new();
        let outcome = owner.action_drink(&mut dog, &mut h.context(&mut scene)).unwrap();
        assert_eq!(outcome, Outcome::GameOver(LossReason::Dehydrated));
        assert_eq!(dog.thirst, -20);
    }

    #[test]
    fn test_drink_round_trip() {
        let (mut dog, mut owner) = setup();
        let mut h = harness(&[1]);
        let mut scene = Scene::new();
        owner.action_drink(&mut dog, &mut h.context(&mut scene)).unwrap();
        assert_eq!(dog.thirst, 50);
        assert_eq!(dog.action, "drinking");
    }

    #[test]
    fn test_trash_ignore_at_boundary() {
        let (mut dog, mut owner) = setup();
        owner.reputation = 21;
        let mut h = harness(&[2]);
        let mut scene = Scene::new();
        let outcome = owner.action_trash(&mut dog, &mut h.context(&mut scene)).unwrap();
        assert_eq!(owner.reputation, 1);
        assert_eq!(outcome, Outcome::Continue);

        let mut h = harness(&[2]);
        let outcome = owner.action_trash(&mut dog, &mut h.context(&mut scene)).unwrap();
        assert_eq!(owner.reputation, -19);
        assert_eq!(outcome, Outcome::GameOver(LossReason::Disgraced));
    }

    #[test]
    fn test_trash_pickup() {
        let (mut dog, mut owner) = setup();
        let mut h = harness(&[1]);
        let mut scene = Scene::new();
        owner.action_trash(&mut dog, &mut h.context(&mut scene)).unwrap();
        assert_eq!(owner.reputation, 30);
        assert!(h.display.messages().contains(&"Congrats!".to_string()));
    }

    #[test]
    fn test_leave_encounter_alone() {
        let (mut dog, mut owner) = setup();
        owner.reputation = 0;
        let mut h = harness(&[2]);
        let mut scene = Scene {
            distraction_label: Some("dog"),
            ..Scene::default()
        };
        let outcome = owner
            .action_encounter(&mut dog, &mut h.context(&mut scene))
            .unwrap();
        // no check on this branch, even with reputation already at zero
        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(owner.reputation, 0);
        assert!(h
            .display
            .messages()
            .contains(&"You ran away from the dog.".to_string()));
    }

    #[test]
    fn test_ball_chase_is_fatal_at_full_health() {
        let (mut dog, mut owner) = setup();
        dog.hunger = 500;
        owner.reputation = 500;
        let mut h = harness(&[1]);
        let mut scene = Scene {
            distraction: Some(BALL),
            ..Scene::default()
        };
        let outcome = owner.action_ball(&mut dog, &mut h.context(&mut scene)).unwrap();
        assert_eq!(outcome, Outcome::GameOver(LossReason::LostChasingBall));
    }

    #[test]
    fn test_ball_lead_away_walks() {
        let (mut dog, mut owner) = setup();
        let mut h = harness(&[2]);
        let mut scene = Scene::new();
        let outcome = owner.action_ball(&mut dog, &mut h.context(&mut scene)).unwrap();
        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(dog.action, "walking");
    }

    #[test]
    fn test_swim() {
        let (mut dog, mut owner) = setup();
        let mut h = harness(&[2]);
        let mut scene = Scene::new();
        let outcome = owner.action_swim(&mut dog, &mut h.context(&mut scene)).unwrap();
        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(owner.reputation, 70);

        let mut h = harness(&[1]);
        let outcome = owner.action_swim(&mut dog, &mut h.context(&mut scene)).unwrap();
        assert_eq!(outcome, Outcome::GameOver(LossReason::LostSwimming));
    }

    #[test]
    fn test_human() {
        let (mut dog, mut owner) = setup();
        let mut h = harness(&[1]);
        let mut scene = Scene::new();
        let outcome = owner.action_human(&mut dog, &mut h.context(&mut scene)).unwrap();
        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(owner.reputation, 40);

        let mut h = harness(&[2]);
        let outcome = owner.action_human(&mut dog, &mut h.context(&mut scene)).unwrap();
        assert_eq!(outcome, Outcome::GameOver(LossReason::AnimalControl));
        assert_eq!(owner.reputation, -100);
        assert_eq!(dog.action, "barking");
    }

    #[test]
    fn test_closed_input_propagates() {
        let (mut dog, mut owner) = setup();
        let mut h = harness(&[]);
        let mut scene = Scene::new();
        let err = owner
            .action_trash(&mut dog, &mut h.context(&mut scene))
            .unwrap_err();
        assert!(matches!(err, GameError::InputClosed));
    }
}
