#![cfg(feature = "dev")]

use catclust_rs::internals::primitives::level::LevelKey;

#[test]
fn test_level_key_identity() {
    assert_eq!(LevelKey::new(0.0f64), LevelKey::new(-0.0f64));
    assert_eq!(LevelKey::new(3.5f64), LevelKey::new(3.5f64));
    assert_ne!(LevelKey::new(1.0f64), LevelKey::new(1.0f64 + f64::EPSILON));
    assert_ne!(LevelKey::new(2.0f64), LevelKey::new(-2.0f64));
}

#[test]
fn test_level_key_f32() {
    assert_eq!(LevelKey::new(0.0f32), LevelKey::new(-0.0f32));
    assert_ne!(LevelKey::new(1.0f32), LevelKey::new(1.5f32));
}
