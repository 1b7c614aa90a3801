//! Model registry: engine-owned storage for unit geometry.
//!
//! Each unit kind registers its geometry exactly once, behind a guarded
//! check at first construction. The registry is owned by the engine, so
//! there is no global mutable state and no unchecked concurrent first-use.

use std::collections::HashMap;

use glam::Vec2;

use skirmish_core::enums::UnitKind;

/// One vertex of a registered model.
#[derive(Debug, Clone, Copy)]
pub struct ModelVertex {
    pub position: Vec2,
    pub uv: Vec2,
    pub color: [f32; 4],
}

/// A registered model: vertex list plus triangle indices.
#[derive(Debug, Clone)]
pub struct Model {
    pub vertices: Vec<ModelVertex>,
    pub indices: Vec<u32>,
}

/// Model ids for one unit kind.
#[derive(Debug, Clone, Copy)]
pub struct UnitModelSet {
    pub body: u32,
    pub turret: u32,
}

/// Registry of all models, keyed per unit kind.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    models: Vec<Model>,
    unit_models: HashMap<UnitKind, UnitModelSet>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a raw model and return its id.
    pub fn register(&mut self, model: Model) -> u32 {
        let id = self.models.len() as u32;
        self.models.push(model);
        id
    }

    /// Return the model set for a unit kind, running `build` only if the
    /// kind has not registered yet. Repeated construction of the same kind
    /// reuses the first registration.
    pub fn ensure_unit_models(
        &mut self,
        kind: UnitKind,
        build: impl FnOnce(&mut ModelRegistry) -> UnitModelSet,
    ) -> UnitModelSet {
        if let Some(set) = self.unit_models.get(&kind) {
            return *set;
        }
        let set = build(self);
        self.unit_models.insert(kind, set);
        set
    }

    pub fn model(&self, id: u32) -> Option<&Model> {
        self.models.get(id as usize)
    }

    /// Number of registered models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn has_kind(&self, kind: UnitKind) -> bool {
        self.unit_models.contains_key(&kind)
    }
}
