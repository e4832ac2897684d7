//! The dog being walked
//!
//! Every action performs one state change and then redraws the scene.
//! Some actions change the owner's reputation: the owner is passed in as
//! `&mut Owner` for exactly that purpose.

use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

use crate::consts::{
    ATTACK_PENALTY, BARK_PENALTY, FRIENDLY_BONUS, MEAL_AMOUNT, STARTING_GAUGE,
};
use crate::error::{GameError, InputError};
use crate::event::EventContext;
use crate::io::Input;
use crate::owner::Owner;
use crate::rng::RandomSource;
use crate::scene::{DRINKS, FOODS, POOP};
use crate::stage::Stage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumCount)]
#[strum(serialize_all = "lowercase")]
pub enum FurColor {
    Black,
    #[default]
    Brown,
    Gold,
    Ash,
    White,
}

impl FurColor {
    /// Map a 1-based menu number to a color
    pub fn from_menu(n: i32) -> Option<Self> {
        usize::try_from(n.checked_sub(1)?)
            .ok()
            .and_then(|i| Self::iter().nth(i))
    }

    /// The "1: black   2: brown ..." menu line
    pub fn menu() -> String {
        Self::iter()
            .enumerate()
            .map(|(i, c)| format!("{}: {}", i + 1, c))
            .collect::<Vec<_>>()
            .join("   ")
    }
}

/// What happened when the dog met something
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum Encounter {
    Bark,
    Friendly,
    Attack,
}

impl Encounter {
    /// Pick one outcome with equal odds
    pub fn roll(rng: &mut dyn RandomSource) -> Self {
        match rng.rn2(Self::COUNT as u32) {
            0 => Encounter::Bark,
            1 => Encounter::Friendly,
            _ => Encounter::Attack,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    pub name: String,
    pub fur: FurColor,
    pub hunger: i32,
    pub thirst: i32,
    /// Last action, shown as "<name> is <action>..."
    pub action: String,
}

impl Dog {
    pub fn new(name: impl Into<String>, fur: FurColor) -> Self {
        Self {
            name: name.into(),
            fur,
            hunger: STARTING_GAUGE,
            thirst: STARTING_GAUGE,
            action: String::new(),
        }
    }

    /// Ask the player for a name and fur color
    pub fn adopt(input: &mut dyn Input) -> Result<Self, GameError> {
        let name = input.text("What is your dog's name?")?;
        let prompt = format!("Choose a fur color\n> {}", FurColor::menu());
        let max = FurColor::COUNT as i32;
        let n = input.integer(&prompt, 1..=max)?;
        let fur = FurColor::from_menu(n).ok_or(InputError::OutOfRange { value: n, min: 1, max })?;
        Ok(Self::new(name, fur))
    }

    /// Later stages start with an already hungrier, thirstier dog
    pub fn apply_stage_decay(&mut self, stage: Stage) {
        self.hunger -= stage.decay();
        self.thirst -= stage.decay();
    }

    pub fn walk(&mut self, owner: &mut Owner, ctx: &mut EventContext<'_>) {
        self.action = "walking".to_string();
        ctx.render(self, owner);
    }

    pub fn poop(&mut self, owner: &mut Owner, ctx: &mut EventContext<'_>) {
        self.action = "pooping".to_string();
        ctx.scene.trash = Some(POOP);
        ctx.render(self, owner);
    }

    pub fn eat(&mut self, owner: &mut Owner, ctx: &mut EventContext<'_>) {
        self.action = "eating".to_string();
        self.hunger += MEAL_AMOUNT;
        ctx.scene.food = ctx.rng.choose(&FOODS).copied();
        ctx.render(self, owner);
    }

    pub fn drink(&mut self, owner: &mut Owner, ctx: &mut EventContext<'_>) {
        self.action = "drinking".to_string();
        self.thirst += MEAL_AMOUNT;
        ctx.scene.food = ctx.rng.choose(&DRINKS).copied();
        ctx.render(self, owner);
    }

    pub fn attack(&mut self, owner: &mut Owner, ctx: &mut EventContext<'_>) {
        self.action = format!("attacking the {}💥💥", ctx.scene.distraction_label());
        owner.reputation -= ATTACK_PENALTY;
        ctx.render(self, owner);
    }

    pub fn bark(&mut self, owner: &mut Owner, ctx: &mut EventContext<'_>) {
        self.action = "barking".to_string();
        owner.reputation -= BARK_PENALTY;
        ctx.render(self, owner);
    }

    pub fn be_friendly(&mut self, owner: &mut Owner, ctx: &mut EventContext<'_>) {
        self.action = "acting cute".to_string();
        owner.reputation += FRIENDLY_BONUS;
        ctx.render(self, owner);
    }

    /// React to whatever the owner approached
    pub fn encounter(&mut self, owner: &mut Owner, ctx: &mut EventContext<'_>) -> Encounter {
        let outcome = Encounter::roll(&mut *ctx.rng);
        tracing::debug!(dog = %self.name, %outcome, "encounter");
        match outcome {
            Encounter::Bark => self.bark(owner, ctx),
            Encounter::Friendly => self.be_friendly(owner, ctx),
            Encounter::Attack => self.attack(owner, ctx),
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::GameRng;
    use crate::scene::Scene;
    use crate::testing::{Harness, Rendered, ScriptedInput, ScriptedRng};

    fn setup() -> (Dog, Owner) {
        (
            Dog::new("Rex", FurColor::Gold),
            Owner::new("Erin", 30).unwrap(),
        )
    }

    #[test]
    fn test_new_dog_gauges() {
        let dog = Dog::new("Rex", FurColor::Ash);
        assert_eq!(dog.hunger, 50);
        assert_eq!(dog.thirst, 50);
        assert!(dog.action.is_empty());
    }

    #[test]
    fn test_fur_menu() {
        assert_eq!(FurColor::from_menu(1), Some(FurColor::Black));
        assert_eq!(FurColor::from_menu(5), Some(FurColor::White));
        assert_eq!(FurColor::from_menu(0), None);
        assert_eq!(FurColor::from_menu(6), None);
        assert_eq!(
            FurColor::menu(),
            "1: black   2: brown   3: gold   4: ash   5: white"
        );
    }

    #[test]
    fn test_adopt() {
        let mut input = ScriptedInput::new().text("Biscuit").integer(3);
        let dog = Dog::adopt(&mut input).unwrap();
        assert_eq!(dog.name, "Biscuit");
        assert_eq!(dog.fur, FurColor::Gold);
    }

    /// Answers integers without looking at the bounds
    struct Careless(i32);

    impl Input for Careless {
        fn choose(&mut self, _: &str, _: &str) -> Result<crate::io::Choice, GameError> {
            Err(GameError::InputClosed)
        }

        fn integer(&mut self, _: &str, _: std::ops::RangeInclusive<i32>) -> Result<i32, GameError> {
            Ok(self.0)
        }

        fn text(&mut self, _: &str) -> Result<String, GameError> {
            Ok("Rex".to_string())
        }
    }

    #[test]
    fn test_adopt_rejects_out_of_menu_fur() {
        let err = Dog::adopt(&mut Careless(9)).unwrap_err();
        assert!(matches!(
            err,
            GameError::Input(InputError::OutOfRange { value: 9, min: 1, max: 5 })
        ));
        assert_eq!(err.exit_code(), 74);
        assert_eq!(Dog::adopt(&mut Careless(5)).unwrap().fur, FurColor::White);
    }

    #[test]
    fn test_stage_decay() {
        let (mut dog, _) = setup();
        dog.apply_stage_decay(Stage::City);
        assert_eq!((dog.hunger, dog.thirst), (10, 10));
    }

    #[test]
    fn test_eat_and_drink_are_uncapped() {
        let (mut dog, mut owner) = setup();
        let mut h = Harness::new(Stage::Backyard, ScriptedInput::new(), GameRng::new(1));
        let mut scene = Scene::new();
        let mut ctx = h.context(&mut scene);
        for _ in 0..3 {
            dog.eat(&mut owner, &mut ctx);
            dog.drink(&mut owner, &mut ctx);
        }
        assert_eq!(dog.hunger, 140);
        assert_eq!(dog.thirst, 140);
        assert!(DRINKS.contains(&scene.food.unwrap()));
        assert_eq!(h.display.scenes(), 6);
    }

    #[test]
    fn test_eat_picks_food() {
        let (mut dog, mut owner) = setup();
        let mut h = Harness::new(Stage::Backyard, ScriptedInput::new(), ScriptedRng::new([4]));
        let mut scene = Scene::new();
        dog.eat(&mut owner, &mut h.context(&mut scene));
        assert_eq!(scene.food, Some(FOODS[4]));
        assert_eq!(dog.action, "eating");
    }

    #[test]
    fn test_poop_sets_trash() {
        let (mut dog, mut owner) = setup();
        let mut h = Harness::new(Stage::Backyard, ScriptedInput::new(), ScriptedRng::new([]));
        let mut scene = Scene::new();
        dog.poop(&mut owner, &mut h.context(&mut scene));
        assert_eq!(scene.trash, Some(POOP));
        assert_eq!((dog.hunger, dog.thirst, owner.reputation), (50, 50, 20));
        assert!(matches!(
            h.display.frames.last(),
            Some(Rendered::Scene { trash: Some(POOP), .. })
        ));
    }

    #[test]
    fn test_reputation_actions() {
        let (mut dog, mut owner) = setup();
        let mut h = Harness::new(Stage::City, ScriptedInput::new(), ScriptedRng::new([]));
        let mut scene = Scene {
            distraction_label: Some("pigeon"),
            ..Scene::default()
        };
        let mut ctx = h.context(&mut scene);

        dog.be_friendly(&mut owner, &mut ctx);
        assert_eq!(owner.reputation, 40);
        dog.bark(&mut owner, &mut ctx);
        assert_eq!(owner.reputation, 30);
        dog.attack(&mut owner, &mut ctx);
        assert_eq!(owner.reputation, -20);
        assert_eq!(dog.action, "attacking the pigeon💥💥");
    }

    #[test]
    fn test_encounter_follows_rng() {
        let (mut dog, mut owner) = setup();
        let mut h = Harness::new(
            Stage::DogPark,
            ScriptedInput::new(),
            ScriptedRng::new([2, 0, 1]),
        );
        let mut scene = Scene::new();
        let mut ctx = h.context(&mut scene);
        assert_eq!(dog.encounter(&mut owner, &mut ctx), Encounter::Attack);
        assert_eq!(dog.encounter(&mut owner, &mut ctx), Encounter::Bark);
        assert_eq!(dog.encounter(&mut owner, &mut ctx), Encounter::Friendly);
        assert_eq!(owner.reputation, 20 - 50 - 10 + 20);
    }

    #[test]
    fn test_encounter_is_uniform() {
        let mut rng = GameRng::new(2024);
        let mut counts = [0usize; Encounter::COUNT];
        let samples = 30_000;
        for _ in 0..samples {
            counts[Encounter::roll(&mut rng) as usize] += 1;
        }
        for count in counts {
            let share = count as f64 / samples as f64;
            assert!((share - 1.0 / 3.0).abs() < 0.02, "share {share}");
        }
    }
}
