//! Player health tracking
//!
//! Health is an integer pair of current and maximum points with two rules:
//! - Healing never leaves current health above the maximum
//! - Damage is subtracted as-is, so current health can drop below zero
//!
//! There is no death state here. Whatever happens at zero or below is up to
//! the surrounding game.
//!
//! # Rust Learning Notes
//!
//! `Health` keeps its fields private so the clamp-on-heal rule cannot be
//! bypassed by writing `current` directly; the explicit setters exist for
//! hosts that restore or tune a character.

/// Represents a character's health points
///
/// # Example
///
/// ```
/// use rpg_player::stats::Health;
///
/// let mut health = Health::with_current(10, 50);
/// health.heal(100);
/// assert_eq!(health.current(), 50);
/// health.take_damage(70);
/// assert_eq!(health.current(), -20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Health {
    current: i32,
    max: i32,
}

impl Health {
    /// Creates a new Health instance with full health
    pub fn new(max: i32) -> Self {
        Health { current: max, max }
    }

    /// Creates a Health instance with explicit current and max values
    ///
    /// `current` is not clamped; a host may start a character above its max.
    pub fn with_current(current: i32, max: i32) -> Self {
        Health { current, max }
    }

    /// Returns the current health value
    pub fn current(&self) -> i32 {
        self.current
    }

    /// Returns the maximum health value
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Overwrites current health without clamping
    pub fn set_current(&mut self, current: i32) {
        self.current = current;
    }

    /// Overwrites max health
    ///
    /// Current health is left alone; the clamp only applies when healing.
    pub fn set_max(&mut self, max: i32) {
        self.max = max;
    }

    /// Heals health, capped at max health
    ///
    /// Returns the change in current health. This is normally the requested
    /// amount or less, but can be negative when current health was already
    /// above the max and the clamp pulls it down. Arithmetic saturates at the
    /// `i32` bounds.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let old_health = self.current;
        self.current = self.current.saturating_add(amount);
        if self.current > self.max {
            self.current = self.max;
        }
        self.current.saturating_sub(old_health)
    }

    /// Applies damage to health
    ///
    /// Not floored at zero: health may go negative, down to `i32::MIN`.
    pub fn take_damage(&mut self, amount: i32) {
        self.current = self.current.saturating_sub(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_full() {
        let health = Health::new(100);
        assert_eq!(health.current(), 100);
        assert_eq!(health.max(), 100);
    }

    #[test]
    fn test_default_is_zero() {
        let health = Health::default();
        assert_eq!(health.current(), 0);
        assert_eq!(health.max(), 0);
    }

    #[test]
    fn test_health_healing() {
        let mut health = Health::with_current(10, 100);
        let healed = health.heal(60);
        assert_eq!(healed, 60);
        assert_eq!(health.current(), 70);
    }

    #[test]
    fn test_health_overheal_caps() {
        let mut health = Health::with_current(10, 50);
        let healed = health.heal(100);
        assert_eq!(healed, 40);
        assert_eq!(health.current(), 50);
    }

    #[test]
    fn test_heal_pulls_down_health_above_max() {
        let mut health = Health::with_current(200, 0);
        let healed = health.heal(5);
        assert_eq!(health.current(), 0);
        assert_eq!(healed, -200);
    }

    #[test]
    fn test_damage_is_not_floored() {
        let mut health = Health::with_current(30, 100);
        health.take_damage(50);
        assert_eq!(health.current(), -20);
    }

    #[test]
    fn test_huge_heal_is_capped_without_overflow() {
        let mut health = Health::with_current(10, 100);
        let healed = health.heal(i32::MAX);
        assert_eq!(health.current(), 100);
        assert_eq!(healed, 90);
    }

    #[test]
    fn test_huge_damage_saturates() {
        let mut health = Health::with_current(-10, 100);
        health.take_damage(i32::MAX);
        assert_eq!(health.current(), i32::MIN);
    }

    #[test]
    fn test_heal_change_saturates() {
        let mut health = Health::with_current(i32::MIN, i32::MAX);
        let healed = health.heal(i32::MAX);
        assert_eq!(health.current(), -1);
        assert_eq!(healed, i32::MAX);
    }

    #[test]
    fn test_setters_do_not_clamp() {
        let mut health = Health::default();
        health.set_current(200);
        assert_eq!(health.current(), 200);

        health.set_max(50);
        assert_eq!(health.current(), 200);
        assert_eq!(health.max(), 50);
    }
}
