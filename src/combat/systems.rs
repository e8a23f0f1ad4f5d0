//! Combat systems - attack scheduling, contact gating, fight resolution.

use bevy::prelude::*;

use super::components::*;
use super::data::{load_weapon_definitions, WeaponRegistry};
use super::resolver::{FightOutcome, Retaliation};
use crate::core::GameState;
use crate::enemies::{AttackPower, RetaliationTarget};
use crate::player::Player;

/// System set ordering for combat.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CombatSet {
    Input,
    Action,
    Damage,
}

/// Everything that can be struck or struck back at.
type Combatants<'w, 's> = Query<
    'w,
    's,
    (
        &'static mut Health,
        Option<&'static AttackPower>,
        Option<&'static RetaliationTarget>,
    ),
>;

/// Configure combat systems.
pub fn setup_combat_systems(app: &mut App) {
    app
        // Resources
        .init_resource::<WeaponRegistry>()

        // Events
        .add_event::<AttackEvent>()
        .add_event::<ContactEvent>()
        .add_event::<AttackIntent>()
        .add_event::<EquipWeapon>()
        .add_event::<SwingStarted>()

        .add_systems(Startup, load_weapon_definitions)

        // System ordering
        .configure_sets(
            Update,
            (CombatSet::Input, CombatSet::Action, CombatSet::Damage)
                .chain()
                .run_if(in_state(GameState::InGame)),
        )

        .add_systems(Update, equip_weapons.in_set(CombatSet::Input))

        // Action systems
        .add_systems(
            Update,
            (tick_pending_attacks, forward_weapon_contacts).in_set(CombatSet::Action),
        )

        // Damage systems
        .add_systems(
            Update,
            (process_attacks, check_player_death)
                .chain()
                .in_set(CombatSet::Damage),
        );
}

/// Swap weapons on request.
fn equip_weapons(mut commands: Commands, mut events: EventReader<EquipWeapon>) {
    for event in events.read() {
        let Some(mut entity_commands) = commands.get_entity(event.entity) else {
            warn!("Tried to equip a weapon on missing entity {:?}", event.entity);
            continue;
        };

        info!("Equipped {} on {:?}", event.weapon.kind.name(), event.entity);
        entity_commands.insert(event.weapon.clone());
    }
}

/// Land swings whose wind-up has finished.
fn tick_pending_attacks(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(
        Entity,
        &mut PendingAttack,
        &mut CombatState,
        Option<&Health>,
        Has<Dead>,
    )>,
    targets: Query<(), With<Health>>,
    mut attack_events: EventWriter<AttackEvent>,
) {
    for (entity, mut pending, mut combat, health, dead) in query.iter_mut() {
        // A swinger that died mid wind-up drops the swing
        let alive = !dead && health.map_or(true, Health::is_alive);
        if alive {
            pending.timer.tick(time.delta());
            if !pending.timer.finished() {
                continue;
            }
        }

        // The target may have been removed while we were winding up
        let target = targets.contains(pending.target).then_some(pending.target);
        if alive && target.is_some() {
            attack_events.send(AttackEvent {
                attacker: entity,
                target,
            });
        }

        combat.is_attacking = false;
        commands.entity(entity).remove::<PendingAttack>();
    }
}

/// Turn weapon contacts into attacks, but only mid-swing.
fn forward_weapon_contacts(
    mut contacts: EventReader<ContactEvent>,
    states: Query<&CombatState>,
    mut attack_events: EventWriter<AttackEvent>,
) {
    for contact in contacts.read() {
        let swinging = states
            .get(contact.weapon_owner)
            .is_ok_and(|state| state.is_attacking);
        if !swinging {
            continue;
        }

        attack_events.send(AttackEvent {
            attacker: contact.weapon_owner,
            target: Some(contact.other),
        });
    }
}

/// Result of resolving a fight between entities.
struct Resolution {
    outcome: FightOutcome,
    owner: Option<Entity>,
    owner_died: bool,
}

impl Resolution {
    fn ignored() -> Self {
        Self {
            outcome: FightOutcome::Ignored,
            owner: None,
            owner_died: false,
        }
    }
}

/// Look up the target, its attack power and its owner, then strike with `weapon`.
///
/// An owner that no longer exists (or has no health) is treated as absent.
fn resolve_fight(actors: &mut Combatants, target: Entity, weapon: &Weapon) -> Resolution {
    let Ok((_, attack_power, retaliation_target)) = actors.get(target) else {
        return Resolution::ignored();
    };
    let attack_power = attack_power.map_or(0, |power| power.0);
    let owner = retaliation_target
        .and_then(|retaliation| retaliation.0)
        .filter(|&owner| owner != target);

    if let Some(owner) = owner {
        if let Ok([(mut target_health, ..), (mut owner_health, ..)]) =
            actors.get_many_mut([target, owner])
        {
            let outcome = weapon.attack(
                Some(&mut *target_health),
                Retaliation::against(attack_power, &mut *owner_health),
            );
            let owner_died = matches!(
                outcome,
                FightOutcome::Survived { retaliation: Some(lost), .. } if lost > 0
            ) && !owner_health.is_alive();

            return Resolution {
                outcome,
                owner: Some(owner),
                owner_died,
            };
        }
    }

    let Ok((mut target_health, ..)) = actors.get_mut(target) else {
        return Resolution::ignored();
    };

    Resolution {
        outcome: weapon.attack(Some(&mut *target_health), Retaliation::new(attack_power, None)),
        owner: None,
        owner_died: false,
    }
}

/// Strike targets with the attacker's weapon and report what happened.
fn process_attacks(
    mut commands: Commands,
    mut attack_events: EventReader<AttackEvent>,
    weapons: Query<&Weapon>,
    dead: Query<(), With<Dead>>,
    mut actors: Combatants,
    mut damage_events: EventWriter<DamageEvent>,
    mut death_events: EventWriter<DeathEvent>,
) {
    for attack in attack_events.read() {
        let Some(target) = attack.target else {
            continue;
        };
        let Ok(weapon) = weapons.get(attack.attacker) else {
            warn!("{:?} attacked without a weapon", attack.attacker);
            continue;
        };

        // Health is checked too, since `Dead` from this frame is still queued
        let attacker_alive = !dead.contains(attack.attacker)
            && actors
                .get(attack.attacker)
                .map_or(true, |(health, ..)| health.is_alive());
        if !attacker_alive {
            debug!("Dropped attack from dead {:?}", attack.attacker);
            continue;
        }

        let resolution = resolve_fight(&mut actors, target, weapon);

        match resolution.outcome {
            FightOutcome::Ignored => continue,
            FightOutcome::Survived { dealt, retaliation } => {
                damage_events.send(DamageEvent {
                    target,
                    source: attack.attacker,
                    amount: dealt,
                    retaliation: false,
                });

                if let (Some(lost @ 1..), Some(owner)) = (retaliation, resolution.owner) {
                    debug!("{:?} retaliated against {:?} for {}", target, owner, lost);
                    damage_events.send(DamageEvent {
                        target: owner,
                        source: target,
                        amount: lost,
                        retaliation: true,
                    });
                }
            }
            FightOutcome::Killed { dealt } => {
                damage_events.send(DamageEvent {
                    target,
                    source: attack.attacker,
                    amount: dealt,
                    retaliation: false,
                });
                commands.entity(target).insert(Dead);
                death_events.send(DeathEvent {
                    entity: target,
                    killed_by: Some(attack.attacker),
                });
            }
        }

        if let (true, Some(owner)) = (resolution.owner_died, resolution.owner) {
            commands.entity(owner).insert(Dead);
            death_events.send(DeathEvent {
                entity: owner,
                killed_by: Some(target),
            });
        }
    }
}

/// End the game when the player dies.
fn check_player_death(
    mut death_events: EventReader<DeathEvent>,
    player_query: Query<(), With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in death_events.read() {
        if player_query.contains(event.entity) {
            info!("Player died! Transitioning to Game Over...");
            next_state.set(GameState::GameOver);
        }
    }
}
