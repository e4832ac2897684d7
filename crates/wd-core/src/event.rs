//! Scripted events and the per-stage sequencer
//!
//! Each stage runs a fixed list of [`EventKind`]s. An event step puts its
//! props in the scene, hands control to the matching owner action, and
//! leaves the scene empty again for the next step.

use strum::{Display, EnumIter};

use crate::dog::Dog;
use crate::error::GameError;
use crate::io::{Display as Screen, Input, SceneView};
use crate::owner::Owner;
use crate::rng::RandomSource;
use crate::scene::{BALL, CIGARETTE, HUMANS, OTHER_DOGS, PIGEON, Scene, WAVE, WILD_ANIMALS};
use crate::stage::Stage;
use crate::termination::Outcome;

/// One scripted encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum EventKind {
    Poop,
    Starve,
    Thirst,
    Trash,
    WildAnimal,
    Ball,
    AnotherDog,
    Swim,
    Pigeon,
    Human,
}

impl EventKind {
    /// Set up the props for this event and resolve it
    pub fn run(
        self,
        dog: &mut Dog,
        owner: &mut Owner,
        ctx: &mut EventContext<'_>,
    ) -> Result<Outcome, GameError> {
        match self {
            EventKind::Poop => {
                dog.poop(owner, ctx);
                ctx.scene.trash_label = Some("poop");
                owner.action_trash(dog, ctx)
            }
            EventKind::Starve => owner.action_feed(dog, ctx),
            EventKind::Thirst => owner.action_drink(dog, ctx),
            EventKind::Trash => {
                ctx.scene.trash = Some(CIGARETTE);
                ctx.scene.trash_label = Some("trash");
                owner.action_trash(dog, ctx)
            }
            EventKind::WildAnimal => {
                ctx.scene.distraction = ctx.rng.choose(&WILD_ANIMALS).copied();
                ctx.scene.distraction_label = Some("wild animal");
                owner.action_encounter(dog, ctx)
            }
            EventKind::Ball => {
                ctx.scene.distraction = Some(BALL);
                owner.action_ball(dog, ctx)
            }
            EventKind::AnotherDog => {
                ctx.scene.distraction = ctx.rng.choose(&OTHER_DOGS).copied();
                ctx.scene.distraction_label = Some("dog");
                owner.action_encounter(dog, ctx)
            }
            EventKind::Swim => {
                ctx.scene.distraction = Some(WAVE);
                owner.action_swim(dog, ctx)
            }
            EventKind::Pigeon => {
                ctx.scene.distraction = Some(PIGEON);
                ctx.scene.distraction_label = Some("pigeon");
                owner.action_encounter(dog, ctx)
            }
            EventKind::Human => {
                ctx.scene.distraction = ctx.rng.choose(&HUMANS).copied();
                ctx.scene.distraction_label = Some("human");
                owner.action_human(dog, ctx)
            }
        }
    }
}

/// The player-facing collaborators shared by every stage
pub struct Collaborators<'a> {
    pub rng: &'a mut dyn RandomSource,
    pub display: &'a mut dyn Screen,
    pub input: &'a mut dyn Input,
}

impl<'a> Collaborators<'a> {
    pub fn new(
        rng: &'a mut dyn RandomSource,
        display: &'a mut dyn Screen,
        input: &'a mut dyn Input,
    ) -> Self {
        Self {
            rng,
            display,
            input,
        }
    }

    /// Context for one event step in `stage`, drawing on `scene`
    pub fn context<'b>(&'b mut self, stage: Stage, scene: &'b mut Scene) -> EventContext<'b> {
        EventContext {
            stage,
            scene,
            rng: &mut *self.rng,
            display: &mut *self.display,
            input: &mut *self.input,
        }
    }
}

/// Everything an event step may read or change besides the dog and owner
pub struct EventContext<'a> {
    pub stage: Stage,
    pub scene: &'a mut Scene,
    pub rng: &'a mut dyn RandomSource,
    pub display: &'a mut dyn Screen,
    pub input: &'a mut dyn Input,
}

impl EventContext<'_> {
    /// Redraw the dog with the current scene
    pub fn render(&mut self, dog: &Dog, owner: &Owner) {
        self.display.scene(SceneView {
            stage: self.stage,
            dog,
            owner,
            scene: &*self.scene,
        });
    }

    /// Narrate one line
    pub fn say(&mut self, text: &str) {
        self.display.message(text);
    }
}

/// Runs a stage's events in order
///
/// Owns the scene. Each step gets it through a lease, so it is empty when
/// a step starts and empty again when it returns, even on game over.
#[derive(Debug, Default)]
pub struct EventSequencer {
    scene: Scene,
}

impl EventSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Run a single event step
    pub fn run_event(
        &mut self,
        kind: EventKind,
        stage: Stage,
        dog: &mut Dog,
        owner: &mut Owner,
        io: &mut Collaborators<'_>,
    ) -> Result<Outcome, GameError> {
        tracing::debug!(%stage, event = %kind, "event start");
        let mut scene = self.scene.lease();
        let mut ctx = io.context(stage, &mut scene);
        let outcome = kind.run(dog, owner, &mut ctx)?;
        tracing::debug!(
            event = %kind,
            hunger = dog.hunger,
            thirst = dog.thirst,
            reputation = owner.reputation,
            ?outcome,
            "event done"
        );
        Ok(outcome)
    }

    /// Run every event of `stage`. Stops at the first game over;
    /// otherwise the stage is cleared.
    pub fn run_stage(
        &mut self,
        stage: Stage,
        dog: &mut Dog,
        owner: &mut Owner,
        io: &mut Collaborators<'_>,
    ) -> Result<Outcome, GameError> {
        for &kind in stage.events() {
            let outcome = self.run_event(kind, stage, dog, owner, io)?;
            if outcome.is_game_over() {
                return Ok(outcome);
            }
        }
        Ok(Outcome::StageClear)
    }
}
