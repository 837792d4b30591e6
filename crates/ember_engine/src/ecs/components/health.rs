//! Health component for damageable entities

use crate::ecs::Component;

/// Hit points with a fixed maximum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthComponent {
    /// Current hit points
    pub current: u32,

    /// Maximum hit points
    pub max: u32,
}

impl Component for HealthComponent {}

impl HealthComponent {
    /// Create at full health
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Apply damage, saturating at zero
    pub fn damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// Heal, clamped to the maximum
    pub fn heal(&mut self, amount: u32) {
        self.current = (self.current + amount).min(self.max);
    }

    /// Whether the entity is out of hit points
    pub fn is_dead(&self) -> bool {
        self.current == 0
    }
}
