//! Combat-related components.

use bevy::prelude::*;
use serde::Deserialize;

use super::data::WeaponDefinition;

// Re-export from core to avoid duplication
pub use crate::core::{DamageEvent, DeathEvent};

/// Component for entities that can take damage.
///
/// Invariant: `0 <= current <= maximum` after every mutation. The default is
/// `0/0`, which reads as already dead until [`Health::initialize`] is called.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
    pub maximum: i32,
}

impl Health {
    /// Full health at `max` (negative values clamp to 0).
    pub fn new(max: i32) -> Self {
        let maximum = max.max(0);
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Health at an arbitrary point in its range, clamped into bounds.
    pub fn with_current(max: i32, current: i32) -> Self {
        let maximum = max.max(0);
        Self {
            current: current.clamp(0, maximum),
            maximum,
        }
    }

    /// Set the ceiling and refill to it. Called once on spawn.
    pub fn initialize(&mut self, max: i32) {
        *self = Self::new(max);
    }

    /// Remove `amount` health. Negative amounts are rejected, not treated as healing.
    pub fn apply_damage(&mut self, amount: i32) {
        if amount < 0 {
            return;
        }
        self.current = self.current.saturating_sub(amount).clamp(0, self.maximum);
    }

    /// Change the ceiling, keeping current health inside the new bounds.
    pub fn set_maximum(&mut self, max: i32) {
        self.maximum = max.max(0);
        self.current = self.current.clamp(0, self.maximum);
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Current health as a fraction of the maximum (0 when the maximum is 0).
    pub fn fraction(&self) -> f32 {
        if self.maximum <= 0 {
            return 0.0;
        }
        self.current as f32 / self.maximum as f32
    }
}

/// Weapon families. They differ only in their damage constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum WeaponKind {
    /// Light weapon.
    OneHandSword,
    /// Heavy weapon.
    Axe,
}

impl WeaponKind {
    pub fn base_damage(self) -> i32 {
        match self {
            WeaponKind::OneHandSword => 10,
            WeaponKind::Axe => 15,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WeaponKind::OneHandSword => "OneHandSword",
            WeaponKind::Axe => "Axe",
        }
    }
}

/// Weapon wielded by its entity. The entity itself is the weapon's owner.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Weapon {
    pub kind: WeaponKind,
    /// Configured damage; may be negative in bad data, see [`Weapon::calculate_damage`]
    pub base_damage: i32,
    /// Animation state to play instead of `<Kind>Attack`
    pub attack_animation: Option<String>,
}

impl Weapon {
    pub fn new(kind: WeaponKind) -> Self {
        Self {
            kind,
            base_damage: kind.base_damage(),
            attack_animation: None,
        }
    }

    pub fn with_base_damage(mut self, base_damage: i32) -> Self {
        self.base_damage = base_damage;
        self
    }

    pub fn from_definition(definition: &WeaponDefinition) -> Self {
        Self {
            kind: definition.kind,
            base_damage: definition.base_damage.unwrap_or_else(|| definition.kind.base_damage()),
            attack_animation: definition.attack_animation.clone(),
        }
    }

    /// Damage dealt per hit. Never negative.
    pub fn calculate_damage(&self) -> i32 {
        self.base_damage.max(0)
    }

    /// Name of the animation state the presentation layer should play.
    pub fn attack_animation_name(&self) -> String {
        match &self.attack_animation {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("{}Attack", self.kind.name()),
        }
    }
}

/// Combat state for an entity that swings a weapon.
#[derive(Component, Debug, Default)]
pub struct CombatState {
    /// Is currently mid-swing. Contact hits only count while this is set.
    pub is_attacking: bool,
}

impl CombatState {
    pub fn can_attack(&self) -> bool {
        !self.is_attacking
    }
}

/// A swing that has been started and lands when its timer finishes.
#[derive(Component, Debug)]
pub struct PendingAttack {
    pub target: Entity,
    pub timer: Timer,
}

/// Marker component for entities that have died (prevents multiple death events).
#[derive(Component, Debug)]
pub struct Dead;

/// Sent once per discrete attack action. The core does not gate these: the
/// sender has already decided that now is a valid moment to attack.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct AttackEvent {
    /// Entity wielding the weapon
    pub attacker: Entity,
    /// Entity being struck; `None` is a no-op
    pub target: Option<Entity>,
}

/// Sent by trigger detection when a weapon touches another entity.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ContactEvent {
    pub weapon_owner: Entity,
    pub other: Entity,
}

/// Sent by the input layer (mouse, keyboard, voice) when the player wants to swing.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct AttackIntent {
    pub attacker: Entity,
}

/// Sent when a swing begins, for the presentation layer to start the attack animation.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct SwingStarted {
    pub attacker: Entity,
    pub target: Entity,
    /// Animation state to play, see [`Weapon::attack_animation_name`]
    pub animation: String,
}

/// Replace the weapon wielded by `entity`.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct EquipWeapon {
    pub entity: Entity,
    pub weapon: Weapon,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_health_starts_full() {
        let health = Health::new(60);
        assert_eq!(health.current, 60);
        assert_eq!(health.maximum, 60);
        assert!(health.is_alive());
    }

    #[test]
    fn default_health_reads_as_dead() {
        let mut health = Health::default();
        assert!(!health.is_alive());

        health.initialize(30);
        assert_eq!(health.current, 30);
        assert!(health.is_alive());
    }

    #[test]
    fn negative_maximum_clamps_to_zero() {
        let health = Health::new(-10);
        assert_eq!(health.maximum, 0);
        assert_eq!(health.current, 0);
    }

    #[test]
    fn damage_clamps_at_zero() {
        let mut health = Health::new(100);
        health.apply_damage(30);
        assert_eq!(health.current, 70);

        health.apply_damage(500);
        assert_eq!(health.current, 0);
        assert!(!health.is_alive());
    }

    #[test]
    fn negative_damage_is_rejected() {
        let mut health = Health::with_current(50, 20);
        health.apply_damage(-5);
        assert_eq!(health.current, 20);

        health.apply_damage(i32::MIN);
        assert_eq!(health.current, 20);
    }

    #[test]
    fn zero_damage_leaves_health_unchanged() {
        let mut health = Health::with_current(50, 20);
        health.apply_damage(0);
        assert_eq!(health.current, 20);
    }

    #[test]
    fn huge_damage_does_not_overflow() {
        let mut health = Health::new(100);
        health.apply_damage(i32::MAX);
        assert_eq!(health.current, 0);
    }

    #[test]
    fn set_maximum_reclamps_current() {
        let mut health = Health::new(100);
        health.set_maximum(40);
        assert_eq!(health.current, 40);

        health.set_maximum(-3);
        assert_eq!(health.maximum, 0);
        assert_eq!(health.current, 0);
    }

    #[test]
    fn fraction_handles_zero_maximum() {
        assert_eq!(Health::default().fraction(), 0.0);
        assert_eq!(Health::with_current(50, 25).fraction(), 0.5);
    }

    #[test]
    fn weapon_kinds_have_fixed_damage() {
        assert_eq!(Weapon::new(WeaponKind::OneHandSword).calculate_damage(), 10);
        assert_eq!(Weapon::new(WeaponKind::Axe).calculate_damage(), 15);
    }

    #[test]
    fn configured_negative_damage_clamps_to_zero() {
        let axe = Weapon::new(WeaponKind::Axe).with_base_damage(-8);
        assert_eq!(axe.calculate_damage(), 0);
    }

    #[test]
    fn animation_name_defaults_to_kind() {
        let sword = Weapon::new(WeaponKind::OneHandSword);
        assert_eq!(sword.attack_animation_name(), "OneHandSwordAttack");

        let mut axe = Weapon::new(WeaponKind::Axe);
        axe.attack_animation = Some("HeavySwing".to_string());
        assert_eq!(axe.attack_animation_name(), "HeavySwing");

        axe.attack_animation = Some(String::new());
        assert_eq!(axe.attack_animation_name(), "AxeAttack");
    }

    #[test]
    fn weapon_from_definition_falls_back_to_kind_damage() {
        let definition = WeaponDefinition {
            name: "Rusty Axe".to_string(),
            kind: WeaponKind::Axe,
            base_damage: None,
            attack_animation: None,
        };
        assert_eq!(Weapon::from_definition(&definition).base_damage, 15);

        let definition = WeaponDefinition {
            base_damage: Some(22),
            ..definition
        };
        assert_eq!(Weapon::from_definition(&definition).base_damage, 22);
    }
}
