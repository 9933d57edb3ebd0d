//! Stats domain: character stat pools.

use bevy::prelude::*;

/// Hit points. Integer pool clamped to 0..=max.
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Applies a signed change and returns the amount actually applied.
    pub fn apply(&mut self, amount: i32) -> i32 {
        let next = (self.current + amount).clamp(0, self.max);
        let applied = next - self.current;
        self.current = next;
        applied
    }

    pub fn percent(&self) -> f32 {
        self.current as f32 / self.max as f32
    }
}

/// Magic points.
#[derive(Component, Debug, Clone)]
pub struct Mana {
    pub current: i32,
    pub max: i32,
}

impl Mana {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn apply(&mut self, amount: i32) -> i32 {
        let next = (self.current + amount).clamp(0, self.max);
        let applied = next - self.current;
        self.current = next;
        applied
    }

    pub fn percent(&self) -> f32 {
        self.current as f32 / self.max as f32
    }
}

/// Technique points. Starts empty, builds up in play.
#[derive(Component, Debug, Clone)]
pub struct Technique {
    pub current: i32,
    pub max: i32,
}

impl Technique {
    pub fn new(max: i32) -> Self {
        Self { current: 0, max }
    }

    pub fn apply(&mut self, amount: i32) -> i32 {
        let next = (self.current + amount).clamp(0, self.max);
        let applied = next - self.current;
        self.current = next;
        applied
    }

    pub fn percent(&self) -> f32 {
        self.current as f32 / self.max as f32
    }
}

/// Marks the player while standing on a damage floor.
#[derive(Component, Debug)]
pub struct OnDamageFloor {
    pub hazard: Entity,
}
