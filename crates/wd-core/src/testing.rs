//! Test doubles for the display, input and random collaborators.
//!
//! - [`ScriptedInput`] answers prompts from a queue and reports the
//!   stream as closed once the queue runs dry.
//! - [`RecordingDisplay`] keeps a plain-data copy of every frame.
//! - [`ScriptedRng`] returns preset rolls so random outcomes can be forced.
//! - [`Harness`] bundles the three for driving single events.

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use crate::dog::Dog;
use crate::error::GameError;
use crate::event::{Collaborators, EventContext};
use crate::io::{Choice, Display, Input, SceneView};
use crate::owner::Owner;
use crate::rng::RandomSource;
use crate::scene::Scene;
use crate::stage::Stage;
use crate::termination::LossReason;

/// A queued answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Integer(i32),
    Choice(Choice),
}

/// Input that replays queued answers in order
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<Answer>,
    /// Every prompt asked so far
    pub prompts: Vec<String>,
    /// Integer answers rejected for being out of bounds
    pub rejected: usize,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: &str) -> Self {
        self.answers.push_back(Answer::Text(text.to_string()));
        self
    }

    pub fn integer(mut self, n: i32) -> Self {
        self.answers.push_back(Answer::Integer(n));
        self
    }

    /// Queue a menu answer, 1 or 2
    pub fn choice(mut self, n: i32) -> Self {
        let choice = Choice::from_number(n)
            .unwrap_or_else(|| panic!("menu answers are 1 or 2, got {n}"));
        self.answers.push_back(Answer::Choice(choice));
        self
    }

    /// Queue a dog adoption: name then fur menu number
    pub fn dog(self, name: &str, fur: i32) -> Self {
        self.text(name).integer(fur)
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: String) -> Result<Answer, GameError> {
        self.prompts.push(prompt);
        self.answers.pop_front().ok_or(GameError::InputClosed)
    }
}

impl Input for ScriptedInput {
    fn choose(&mut self, first: &str, second: &str) -> Result<Choice, GameError> {
        match self.next(format!("1: {first}  2: {second}"))? {
            Answer::Choice(choice) => Ok(choice),
            other => panic!("expected a menu answer for {first:?}/{second:?}, got {other:?}"),
        }
    }

    fn integer(&mut self, prompt: &str, bounds: RangeInclusive<i32>) -> Result<i32, GameError> {
        loop {
            match self.next(prompt.to_string())? {
                Answer::Integer(n) if bounds.contains(&n) => return Ok(n),
                Answer::Integer(_) => self.rejected += 1,
                other => panic!("expected an integer for {prompt:?}, got {other:?}"),
            }
        }
    }

    fn text(&mut self, prompt: &str) -> Result<String, GameError> {
        match self.next(prompt.to_string())? {
            Answer::Text(text) => Ok(text),
            other => panic!("expected text for {prompt:?}, got {other:?}"),
        }
    }
}

/// A rendered frame, reduced to the values that were on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Header,
    StageBanner(Stage),
    Scene {
        stage: Stage,
        action: String,
        hunger: i32,
        thirst: i32,
        reputation: i32,
        trash: Option<&'static str>,
        food: Option<&'static str>,
        distraction: Option<&'static str>,
    },
    Message(String),
    Stats {
        hunger: i32,
        thirst: i32,
        reputation: i32,
    },
    StageClear {
        stage: Stage,
        hunger: i32,
        thirst: i32,
        reputation: i32,
    },
    GameOver {
        reason: LossReason,
        hunger: i32,
        thirst: i32,
        reputation: i32,
    },
}

/// Display that records every frame
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub frames: Vec<Rendered>,
}

impl RecordingDisplay {
    pub fn messages(&self) -> Vec<String> {
        self.frames
            .iter()
            .filter_map(|f| match f {
                Rendered::Message(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of scene renders
    pub fn scenes(&self) -> usize {
        self.frames
            .iter()
            .filter(|f| matches!(f, Rendered::Scene { .. }))
            .count()
    }

    /// Stages whose banner was shown
    pub fn banners(&self) -> Vec<Stage> {
        self.frames
            .iter()
            .filter_map(|f| match f {
                Rendered::StageBanner(stage) => Some(*stage),
                _ => None,
            })
            .collect()
    }

    pub fn game_over(&self) -> Option<LossReason> {
        self.frames.iter().find_map(|f| match f {
            Rendered::GameOver { reason, .. } => Some(*reason),
            _ => None,
        })
    }
}

impl Display for RecordingDisplay {
    fn header(&mut self) {
        self.frames.push(Rendered::Header);
    }

    fn stage_banner(&mut self, stage: Stage) {
        self.frames.push(Rendered::StageBanner(stage));
    }

    fn scene(&mut self, view: SceneView<'_>) {
        self.frames.push(Rendered::Scene {
            stage: view.stage,
            action: view.dog.action.clone(),
            hunger: view.dog.hunger,
            thirst: view.dog.thirst,
            reputation: view.owner.reputation,
            trash: view.scene.trash,
            food: view.scene.food,
            distraction: view.scene.distraction,
        });
    }

    fn message(&mut self, text: &str) {
        self.frames.push(Rendered::Message(text.to_string()));
    }

    fn stats(&mut self, dog: &Dog, owner: &Owner) {
        self.frames.push(Rendered::Stats {
            hunger: dog.hunger,
            thirst: dog.thirst,
            reputation: owner.reputation,
        });
    }

    fn stage_clear(&mut self, stage: Stage, dog: &Dog, owner: &Owner) {
        self.frames.push(Rendered::StageClear {
            stage,
            hunger: dog.hunger,
            thirst: dog.thirst,
            reputation: owner.reputation,
        });
    }

    fn game_over(&mut self, reason: LossReason, dog: &Dog, owner: &Owner) {
        self.frames.push(Rendered::GameOver {
            reason,
            hunger: dog.hunger,
            thirst: dog.thirst,
            reputation: owner.reputation,
        });
    }
}

/// Random source that replays preset rolls, then returns 0
#[derive(Debug, Default)]
pub struct ScriptedRng {
    rolls: VecDeque<u32>,
}

impl ScriptedRng {
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedRng {
    fn rn2(&mut self, n: u32) -> u32 {
        match self.rolls.pop_front() {
            Some(roll) => {
                assert!(roll < n.max(1), "scripted roll {roll} out of range 0..{n}");
                roll
            }
            None => 0,
        }
    }
}

/// Collaborators owned in one place
pub struct Harness {
    pub stage: Stage,
    pub display: RecordingDisplay,
    pub input: ScriptedInput,
    pub rng: Box<dyn RandomSource>,
}

impl Harness {
    pub fn new(stage: Stage, input: ScriptedInput, rng: impl RandomSource + 'static) -> Self {
        Self {
            stage,
            display: RecordingDisplay::default(),
            input,
            rng: Box::new(rng),
        }
    }

    pub fn collaborators(&mut self) -> Collaborators<'_> {
        Collaborators::new(&mut *self.rng, &mut self.display, &mut self.input)
    }

    /// Context for calling dog and owner actions directly
    pub fn context<'a>(&'a mut self, scene: &'a mut Scene) -> EventContext<'a> {
        EventContext {
            stage: self.stage,
            scene,
            rng: &mut *self.rng,
            display: &mut self.display,
            input: &mut self.input,
        }
    }
}
