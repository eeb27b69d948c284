use std::collections::HashMap;

use crate::core::models::BaseEntity;
use crate::errors::{Error, Result};

/// Id-keyed records of one kind. Ids are assigned on insert and never reused.
#[derive(Debug, Clone)]
pub struct Repository<T: BaseEntity> {
    kind: &'static str,
    items: HashMap<i64, T>,
    next_id: i64,
}

impl<T: BaseEntity> Repository<T> {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            items: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn insert(&mut self, mut entity: T) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        entity.set_id(id);
        self.items.entry(id).or_insert(entity)
    }

    /// Keeps the entity's own id; used when loading records that already have one.
    pub fn insert_with_id(&mut self, entity: T) -> Result<()> {
        let id = entity.id();
        if id <= 0 {
            return Err(Error::Parse(format!("{} id must be positive.", self.kind)));
        }
        if self.items.contains_key(&id) {
            return Err(Error::Parse(format!(
                "{} with id {} already exists.",
                self.kind, id
            )));
        }
        self.next_id = self.next_id.max(id + 1);
        self.items.insert(id, entity);
        Ok(())
    }

    pub fn get_mut(&mut self, id: i64) -> Result<&mut T> {
        let kind = self.kind;
        self.items
            .get_mut(&id)
            .ok_or(Error::NotFound { kind, id })
    }

    pub fn delete(&mut self, id: i64) -> Result<T> {
        self.items.remove(&id).ok_or(Error::NotFound {
            kind: self.kind,
            id,
        })
    }

    /// All records in ascending id order.
    pub fn values(&self) -> Vec<&T> {
        let mut v: Vec<&T> = self.items.values().collect();
        v.sort_by_key(|e| e.id());
        v
    }
}
