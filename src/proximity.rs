//! Enemy proximity capability
//!
//! The player does not know where enemies are. When it needs them (a stink
//! bomb going off) it asks a `ProximitySource` supplied at construction and
//! damages whatever comes back. Enemies are opaque: the only thing the player
//! can do to one is hurt it.
//!
//! # Rust Learning Notes
//!
//! `Enemy::take_damage` takes `&self`. Enemies are handles to something that
//! lives in the host's world, so any mutation behind them is the host's
//! concern (`Cell`, `RefCell`, a message queue, ...).

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use tracing::debug;

use crate::player::PlayerStatus;

/// Something the player can damage
pub trait Enemy {
    fn take_damage(&self, amount: i32);
}

impl<E: Enemy + ?Sized> Enemy for &E {
    fn take_damage(&self, amount: i32) {
        (**self).take_damage(amount);
    }
}

impl<E: Enemy + ?Sized> Enemy for Rc<E> {
    fn take_damage(&self, amount: i32) {
        (**self).take_damage(amount);
    }
}

impl<E: Enemy + ?Sized> Enemy for Box<E> {
    fn take_damage(&self, amount: i32) {
        (**self).take_damage(amount);
    }
}

// Lets `NoEnemies` name an enemy type that can never exist
impl Enemy for Infallible {
    fn take_damage(&self, _amount: i32) {
        match *self {}
    }
}

/// Answers "which enemies are near this player right now"
///
/// The returned sequence is finite and ordered; the player damages enemies
/// in exactly that order.
pub trait ProximitySource {
    type Enemy: Enemy;

    fn enemies_near(&self, player: &PlayerStatus) -> Vec<Self::Enemy>;
}

/// Proximity source for a player that is always alone
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEnemies;

impl ProximitySource for NoEnemies {
    type Enemy = Infallible;

    fn enemies_near(&self, _player: &PlayerStatus) -> Vec<Infallible> {
        Vec::new()
    }
}

/// Proximity source that always reports the same enemies
///
/// Useful for tests and scripted scenes. Enemies are cloned out on every
/// query, so use cheap handles such as `Rc<T>` or `&T`.
#[derive(Debug, Clone)]
pub struct FixedEnemies<E> {
    enemies: Vec<E>,
}

impl<E> Default for FixedEnemies<E> {
    fn default() -> Self {
        FixedEnemies {
            enemies: Vec::new(),
        }
    }
}

impl<E> FixedEnemies<E> {
    /// Creates a source that always returns these enemies, in order
    pub fn new(enemies: Vec<E>) -> Self {
        FixedEnemies { enemies }
    }

    /// Adds an enemy to the end of the list
    pub fn push(&mut self, enemy: E) {
        self.enemies.push(enemy);
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }
}

impl<E: Enemy + Clone> ProximitySource for FixedEnemies<E> {
    type Enemy = E;

    fn enemies_near(&self, _player: &PlayerStatus) -> Vec<E> {
        self.enemies.clone()
    }
}

/// Enemy that records every hit it takes
#[derive(Debug, Default)]
pub struct TrainingDummy {
    name: String,
    hits: RefCell<Vec<i32>>,
}

impl TrainingDummy {
    /// Creates a dummy that has not been hit yet
    pub fn new(name: impl Into<String>) -> Self {
        TrainingDummy {
            name: name.into(),
            hits: RefCell::new(Vec::new()),
        }
    }

    /// Convenience for sharing the dummy with a `FixedEnemies` source
    pub fn shared(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self::new(name))
    }

    /// Name used in logs
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every hit taken so far, oldest first
    pub fn hits(&self) -> Vec<i32> {
        self.hits.borrow().clone()
    }

    /// Sum of every hit taken, saturating at the `i32` bounds
    pub fn total_damage(&self) -> i32 {
        self.hits
            .borrow()
            .iter()
            .fold(0i32, |total, hit| total.saturating_add(*hit))
    }
}

impl Enemy for TrainingDummy {
    fn take_damage(&self, amount: i32) {
        debug!(enemy = %self.name, amount, "enemy hit");
        self.hits.borrow_mut().push(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_enemies_is_empty() {
        let source = NoEnemies;
        assert!(source.enemies_near(&PlayerStatus::default()).is_empty());
    }

    #[test]
    fn test_fixed_enemies_keeps_order() {
        let first = TrainingDummy::shared("first");
        let second = TrainingDummy::shared("second");
        let source = FixedEnemies::new(vec![first.clone(), second.clone()]);

        let near = source.enemies_near(&PlayerStatus::default());
        let names: Vec<&str> = near.iter().map(|enemy| enemy.name()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn test_training_dummy_records_hits() {
        let dummy = TrainingDummy::new("target");
        dummy.take_damage(100);
        dummy.take_damage(25);
        assert_eq!(dummy.hits(), vec![100, 25]);
        assert_eq!(dummy.total_damage(), 125);
    }

    #[test]
    fn test_total_damage_saturates() {
        let dummy = TrainingDummy::new("tank");
        dummy.take_damage(i32::MAX);
        dummy.take_damage(i32::MAX);
        assert_eq!(dummy.total_damage(), i32::MAX);
    }

    #[test]
    fn test_borrowed_enemies_forward_damage() {
        let dummy = TrainingDummy::new("borrowed");
        let mut source = FixedEnemies::default();
        source.push(&dummy);

        for enemy in source.enemies_near(&PlayerStatus::default()) {
            enemy.take_damage(7);
        }
        assert_eq!(dummy.hits(), vec![7]);
    }
}
