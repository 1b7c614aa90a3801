//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Concrete unit kinds. Keys the model registry and snapshot views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    #[default]
    Soldier,
}

/// Projectile kinds a unit can spawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BulletKind {
    #[default]
    CannonBall,
}
