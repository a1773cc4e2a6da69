//! Generic in-memory entity store

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::core::entity::Entity;

/// Thread-safe in-memory store for one entity type.
///
/// Cloning is cheap and shares the underlying map.
#[derive(Clone)]
pub struct EntityStore<T: Entity> {
    data: Arc<RwLock<HashMap<Uuid, T>>>,
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn add(&self, entity: T) {
        self.data.write().unwrap().insert(entity.id(), entity);
    }

    pub fn get(&self, id: &Uuid) -> Option<T> {
        self.data.read().unwrap().get(id).cloned()
    }

    pub fn list(&self) -> Vec<T> {
        self.data.read().unwrap().values().cloned().collect()
    }

    pub fn update(&self, entity: T) {
        self.data.write().unwrap().insert(entity.id(), entity);
    }

    pub fn delete(&self, id: &Uuid) -> Option<T> {
        self.data.write().unwrap().remove(id)
    }

    pub fn count(&self) -> usize {
        self.data.read().unwrap().len()
    }

    /// Replace the whole collection, used when restoring a snapshot
    pub fn replace_all(&self, entities: Vec<T>) {
        let mut data = self.data.write().unwrap();
        data.clear();
        for entity in entities {
            data.insert(entity.id(), entity);
        }
    }
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
