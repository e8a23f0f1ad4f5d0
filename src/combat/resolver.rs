//! Fight resolution - damage, death check, and retaliation.
//!
//! These functions only touch the `Health` values they are handed, so hosts
//! that do not run the ECS can call them directly. The systems in
//! `systems.rs` look the values up by entity and then call in here.

use super::components::{Health, Weapon};

/// The struck actor's counter-attack: how hard it hits back, and whom.
#[derive(Debug)]
pub struct Retaliation<'a> {
    pub attack_power: i32,
    /// `None` when the actor has no known owner to hit back at
    pub owner: Option<&'a mut Health>,
}

impl<'a> Retaliation<'a> {
    pub fn new(attack_power: i32, owner: Option<&'a mut Health>) -> Self {
        Self {
            attack_power,
            owner,
        }
    }

    pub fn against(attack_power: i32, owner: &'a mut Health) -> Self {
        Self::new(attack_power, Some(owner))
    }

    /// A target that cannot hit back.
    pub fn none() -> Self {
        Self::new(0, None)
    }
}

/// What a call to [`fight`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FightOutcome {
    /// Missing or already dead target. Nothing changed.
    Ignored,
    /// The target lived through the hit.
    Survived {
        /// Health the target lost
        dealt: i32,
        /// Health the owner lost to the counter-attack, if one happened
        retaliation: Option<i32>,
    },
    /// The hit took the target to 0. No counter-attack.
    Killed {
        /// Health the target lost
        dealt: i32,
    },
}

impl FightOutcome {
    pub fn killed(&self) -> bool {
        matches!(self, FightOutcome::Killed { .. })
    }

    pub fn dealt(&self) -> i32 {
        match self {
            FightOutcome::Ignored => 0,
            FightOutcome::Survived { dealt, .. } | FightOutcome::Killed { dealt } => *dealt,
        }
    }
}

/// Resolve one incoming hit on `target`.
///
/// Order:
/// 1. missing or dead target: no-op
/// 2. apply the damage (negative amounts are rejected by [`Health::apply_damage`])
/// 3. target now dead: stop, a killed target never hits back
/// 4. otherwise, if an owner is known and the hit carried damage, the owner
///    takes `attack_power`
///
/// Damage lands whether or not an owner is known; only step 4 depends on it.
pub fn fight(
    target: Option<&mut Health>,
    incoming_damage: i32,
    retaliation: Retaliation<'_>,
) -> FightOutcome {
    let Some(target) = target else {
        return FightOutcome::Ignored;
    };
    if !target.is_alive() {
        return FightOutcome::Ignored;
    }

    let before = target.current;
    target.apply_damage(incoming_damage);
    let dealt = before - target.current;

    if !target.is_alive() {
        return FightOutcome::Killed { dealt };
    }

    // A zero or rejected hit provokes nothing
    if incoming_damage <= 0 {
        return FightOutcome::Survived {
            dealt,
            retaliation: None,
        };
    }

    let Retaliation {
        attack_power,
        owner,
    } = retaliation;

    let retaliation = owner.map(|owner| {
        let owner_before = owner.current;
        owner.apply_damage(attack_power);
        owner_before - owner.current
    });

    FightOutcome::Survived { dealt, retaliation }
}

impl Weapon {
    /// Strike `target` with this weapon. Computes the damage and hands it to
    /// [`fight`]; a missing target is a no-op.
    pub fn attack(&self, target: Option<&mut Health>, retaliation: Retaliation<'_>) -> FightOutcome {
        fight(target, self.calculate_damage(), retaliation)
    }
}
