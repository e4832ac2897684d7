//! Per-event scene props
//!
//! The scene holds whatever an event puts next to the dog: a piece of
//! trash, food in the bowl, something to chase. It is owned by the
//! [`EventSequencer`](crate::EventSequencer) and lent to one event step at
//! a time through a [`SceneLease`], which empties it when the step ends.

use std::ops::{Deref, DerefMut};

/// Glyph left behind by [`Dog::poop`](crate::Dog::poop)
pub const POOP: &str = "💩";
/// Litter found on the street
pub const CIGARETTE: &str = "🚬";
pub const BALL: &str = "⚽";
pub const WAVE: &str = "🌊";
pub const PIGEON: &str = "🐦";

pub const WILD_ANIMALS: [&str; 3] = ["🐈", "🦝", "🐪"];
pub const OTHER_DOGS: [&str; 3] = ["🐩", "🦮", "🐕‍🦺"];
pub const HUMANS: [&str; 2] = ["🧎", "🧍"];

pub const FOODS: [&str; 13] = [
    "🍊", "🍉", "🍓", "🍈", "🍅", "🍆", "🥒",
    "🥦", "🥕", "🍗", "🍖", "🥩", "🐟",
];
pub const DRINKS: [&str; 5] = ["🥛", "🥤", "🧉", "🍷", "🍺"];

/// Transient props rendered around the dog during one event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    pub trash: Option<&'static str>,
    pub food: Option<&'static str>,
    pub distraction: Option<&'static str>,
    /// What the trash is called in prompts ("poop", "trash")
    pub trash_label: Option<&'static str>,
    /// What the distraction is called in prompts and dog actions
    pub distraction_label: Option<&'static str>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every prop
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Lend the scene to one event step. It is cleared when the lease drops.
    pub fn lease(&mut self) -> SceneLease<'_> {
        debug_assert!(self.is_empty(), "scene leased while holding props: {self:?}");
        SceneLease { scene: self }
    }

    pub fn trash_label(&self) -> &'static str {
        self.trash_label.unwrap_or("")
    }

    pub fn distraction_label(&self) -> &'static str {
        self.distraction_label.unwrap_or("")
    }
}

/// Scoped access to the scene for a single event step
#[derive(Debug)]
pub struct SceneLease<'a> {
    scene: &'a mut Scene,
}

impl Deref for SceneLease<'_> {
    type Target = Scene;

    fn deref(&self) -> &Scene {
        self.scene
    }
}

impl DerefMut for SceneLease<'_> {
    fn deref_mut(&mut self) -> &mut Scene {
        self.scene
    }
}

impl Drop for SceneLease<'_> {
    fn drop(&mut self) {
        self.scene.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_scene_is_empty() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert_eq!(scene.trash_label(), "");
        assert_eq!(scene.distraction_label(), "");
    }

    #[test]
    fn test_lease_clears_on_drop() {
        let mut scene = Scene::new();
        {
            let mut lease = scene.lease();
            lease.trash = Some(CIGARETTE);
            lease.trash_label = Some("trash");
            lease.distraction = Some(PIGEON);
            lease.distraction_label = Some("pigeon");
            lease.food = Some(FOODS[0]);
            assert!(!lease.is_empty());
        }
        assert!(scene.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut scene = Scene {
            trash: Some(POOP),
            ..Scene::default()
        };
        scene.clear();
        assert!(scene.is_empty());
    }
}
