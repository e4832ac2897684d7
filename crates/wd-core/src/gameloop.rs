//! Main game loop
//!
//! Registers the owner, then walks a fresh dog through the five stages in
//! order. A game over in any event ends the whole run.

use strum::IntoEnumIterator;

use crate::dog::Dog;
use crate::error::GameError;
use crate::event::{Collaborators, EventSequencer};
use crate::options::GameOptions;
use crate::owner::Owner;
use crate::stage::Stage;
use crate::termination::{LossReason, Outcome};

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// All five stages cleared
    Completed { owner: Owner },
    /// The run ended early
    GameOver {
        stage: Stage,
        reason: LossReason,
        owner: Owner,
    },
}

impl RunOutcome {
    pub fn owner(&self) -> &Owner {
        match self {
            RunOutcome::Completed { owner } | RunOutcome::GameOver { owner, .. } => owner,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed { .. })
    }

    /// Process exit code: 0 for a full walk, 1 for a game over
    pub fn exit_code(&self) -> u8 {
        match self {
            RunOutcome::Completed { .. } => 0,
            RunOutcome::GameOver { .. } => 1,
        }
    }
}

/// Drives the stages of one run
pub struct StageRunner<'a> {
    io: Collaborators<'a>,
    sequencer: EventSequencer,
}

impl<'a> StageRunner<'a> {
    pub fn new(io: Collaborators<'a>) -> Self {
        Self {
            io,
            sequencer: EventSequencer::new(),
        }
    }

    /// Play one stage with a newly adopted dog
    pub fn run_stage(&mut self, stage: Stage, owner: &mut Owner) -> Result<Outcome, GameError> {
        tracing::info!(%stage, reputation = owner.reputation, "stage start");
        self.io.display.stage_banner(stage);

        let mut dog = Dog::adopt(&mut *self.io.input)?;
        dog.apply_stage_decay(stage);

        let outcome = self
            .sequencer
            .run_stage(stage, &mut dog, owner, &mut self.io)?;
        if outcome.is_game_over() {
            return Ok(outcome);
        }

        tracing::info!(
            %stage,
            hunger = dog.hunger,
            thirst = dog.thirst,
            reputation = owner.reputation,
            "stage clear"
        );
        self.io.display.stage_clear(stage, &dog, owner);
        Ok(Outcome::StageClear)
    }

    /// Play every stage in order
    pub fn run(&mut self, mut owner: Owner) -> Result<RunOutcome, GameError> {
        for stage in Stage::iter() {
            if let Outcome::GameOver(reason) = self.run_stage(stage, &mut owner)? {
                tracing::info!(%stage, %reason, "run lost");
                return Ok(RunOutcome::GameOver {
                    stage,
                    reason,
                    owner,
                });
            }
        }
        tracing::info!(reputation = owner.reputation, "run completed");
        Ok(RunOutcome::Completed { owner })
    }
}

/// Play a whole session: header, owner registration, then the stages
pub fn play(options: &GameOptions, mut io: Collaborators<'_>) -> Result<RunOutcome, GameError> {
    if options.header {
        io.display.header();
    }
    let owner = Owner::register(&mut *io.input, options.name.as_deref())?;
    tracing::info!(owner = %owner.name, age = owner.age, "owner registered");
    StageRunner::new(io).run(owner)
}
