//! wd-core: Core stage and event logic for Walk Your Dog
//!
//! This crate contains all game logic. Rendering and reading answers are
//! delegated to the [`Display`] and [`Input`] collaborators, so the whole
//! walk can be driven from tests.

pub mod consts;
pub mod dog;
pub mod event;
pub mod io;
pub mod options;
pub mod owner;
pub mod prompt;
pub mod scene;
pub mod stage;
pub mod termination;
pub mod testing;

mod error;
mod gameloop;
mod rng;

pub use dog::{Dog, Encounter, FurColor};
pub use error::{GameError, InputError};
pub use event::{Collaborators, EventContext, EventKind, EventSequencer};
pub use gameloop::{RunOutcome, StageRunner, play};
pub use io::{Choice, Display, Input, SceneView};
pub use options::{GameOptions, OptionsError};
pub use owner::Owner;
pub use prompt::Prompter;
pub use rng::{GameRng, RandomSource};
pub use scene::{Scene, SceneLease};
pub use stage::{Backdrop, Stage};
pub use termination::{LossReason, Outcome, Termination};
