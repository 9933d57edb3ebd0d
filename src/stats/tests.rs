//! Stats domain: tests for stat pool arithmetic.

use super::components::{Health, Mana, Technique};

#[test]
fn test_health_apply_clamps_at_zero() {
    let mut health = Health::new(100);
    let applied = health.apply(-250);

    assert_eq!(applied, -100);
    assert_eq!(health.current, 0);
}

#[test]
fn test_health_apply_clamps_at_max() {
    let mut health = Health::new(100);
    health.apply(-30);
    let applied = health.apply(80);

    assert_eq!(applied, 30);
    assert_eq!(health.current, 100);
}

#[test]
fn test_mana_starts_full() {
    let mana = Mana::new(120);
    assert_eq!(mana.current, 120);
    assert_eq!(mana.percent(), 1.0);
}

#[test]
fn test_technique_starts_empty_and_builds() {
    let mut technique = Technique::new(100);
    assert_eq!(technique.current, 0);

    let applied = technique.apply(35);
    assert_eq!(applied, 35);
    assert!((technique.percent() - 0.35).abs() < 1e-6);
}
