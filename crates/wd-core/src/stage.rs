//! Stages of a walk
//!
//! Five fixed stages, each with its own backdrop and scripted event list.

use strum::{Display, EnumCount, EnumIter};

use crate::consts::STAGE_DECAY;
use crate::event::EventKind;

/// Background band drawn above and below the dog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Backdrop {
    Sky,
    NightSky,
    Ocean,
    Dirt,
    Concrete,
    Grass,
    Sand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumCount)]
pub enum Stage {
    Backyard,
    Street,
    DogPark,
    Beach,
    City,
}

impl Stage {
    /// Zero-based position in the walk
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Stage::Backyard => "BACKYARD🏡🐛",
            Stage::Street => "STREET🌳🚗",
            Stage::DogPark => "DOG PARK🐾🦴",
            Stage::Beach => "BEACH🌴🌊",
            Stage::City => "CITY🗽✨",
        }
    }

    /// Upper band
    pub const fn sky(self) -> Backdrop {
        match self {
            Stage::Backyard | Stage::Street | Stage::DogPark => Backdrop::Sky,
            Stage::Beach => Backdrop::Ocean,
            Stage::City => Backdrop::NightSky,
        }
    }

    /// Lower band
    pub const fn ground(self) -> Backdrop {
        match self {
            Stage::Backyard => Backdrop::Dirt,
            Stage::Street | Stage::City => Backdrop::Concrete,
            Stage::DogPark => Backdrop::Grass,
            Stage::Beach => Backdrop::Sand,
        }
    }

    /// Hunger and thirst lost before the first event of this stage
    pub const fn decay(self) -> i32 {
        self.index() as i32 * STAGE_DECAY
    }

    /// Events run in this stage, in order
    pub const fn events(self) -> &'static [EventKind] {
        use EventKind::*;
        match self {
            Stage::Backyard => &[Poop, WildAnimal],
            Stage::Street => &[Poop, Starve, Ball],
            Stage::DogPark => &[Poop, Trash, AnotherDog],
            Stage::Beach => &[Poop, Thirst, Starve, Swim],
            Stage::City => &[Poop, Trash, Pigeon, Human],
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stage {}: {}", self.index() + 1, self.name())
    }
}
