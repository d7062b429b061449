//! Tests for core vocabulary types: geometry, factions, weapon orders.

use glam::Vec2;

use crate::components::{Health, Weapon};
use crate::enums::FireOrder;
use crate::factions::{FactionId, HostilityTable};
use crate::types::Position;

// ---- Geometry ----

#[test]
fn test_distance_sq() {
    let a = Position::new(0.0, 0.0);
    let b = Position::new(3.0, 4.0);
    assert!((a.distance_sq_to(&b) - 25.0).abs() < 1e-6);
    assert!((b.distance_sq_to(&a) - 25.0).abs() < 1e-6);
}

#[test]
fn test_distance_sq_to_self_is_zero() {
    let a = Position::new(-7.5, 2.25);
    assert_eq!(a.distance_sq_to(&a), 0.0);
}

// ---- Factions ----

#[test]
fn test_hostility_is_symmetric() {
    let mut table = HostilityTable::new();
    table.declare_hostile(FactionId(1), FactionId(2));

    assert!(table.are_hostile(FactionId(1), FactionId(2)));
    assert!(table.are_hostile(FactionId(2), FactionId(1)));
}

#[test]
fn test_factions_default_neutral() {
    let table = HostilityTable::new();
    assert!(
        !table.are_hostile(FactionId(1), FactionId(2)),
        "Undeclared factions should not be hostile"
    );
}

#[test]
fn test_faction_never_hostile_to_itself() {
    let mut table = HostilityTable::new();
    table.declare_hostile(FactionId(3), FactionId(3));
    assert!(!table.are_hostile(FactionId(3), FactionId(3)));
}

#[test]
fn test_ceasefire_revokes_hostility() {
    let mut table = HostilityTable::new();
    table.declare_hostile(FactionId(1), FactionId(2));
    table.declare_neutral(FactionId(2), FactionId(1));
    assert!(!table.are_hostile(FactionId(1), FactionId(2)));
}

// ---- Weapon orders ----

#[test]
fn test_weapon_orders_are_idempotent() {
    let mut weapon = Weapon::new(10.0, 0.8);
    assert_eq!(weapon.order, FireOrder::Hold);

    let aim = Vec2::new(5.0, -3.0);
    weapon.start_firing_at(aim);
    weapon.start_firing_at(aim);
    assert_eq!(weapon.order, FireOrder::FireAt(aim));

    weapon.stop_firing();
    weapon.stop_firing();
    assert_eq!(weapon.order, FireOrder::Hold);
}

#[test]
fn test_weapon_retarget_replaces_order() {
    let mut weapon = Weapon::new(10.0, 0.8);
    weapon.start_firing_at(Vec2::new(1.0, 0.0));
    weapon.start_firing_at(Vec2::new(0.0, 1.0));
    assert_eq!(weapon.order, FireOrder::FireAt(Vec2::new(0.0, 1.0)));
}

// ---- Health ----

#[test]
fn test_health_alive_boundary() {
    let mut health = Health::new(100.0);
    assert!(health.is_alive());

    health.current = 0.0;
    assert!(!health.is_alive(), "Zero health means dead");
}

// ---- Wire shapes ----

#[test]
fn test_command_serializes_with_type_tag() {
    let cmd = crate::commands::PlayerCommand::OrderAttack {
        unit_id: 3,
        target_id: 9,
    };
    let json = serde_json::to_string(&cmd).unwrap();
    assert!(json.contains("\"type\":\"OrderAttack\""), "got {json}");
}
