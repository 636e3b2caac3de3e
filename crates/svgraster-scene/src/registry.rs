//! Id registry and `use` reference resolution
//!
//! The registry tracks the node built under every `id` for the whole parse.
//! An entry follows its node: when an enclosing group is transformed, the
//! builder replays that transform on the entries registered inside it, so
//! a later `use` copies the node as it currently stands in the tree.
//! Resolving an id hands out a fresh deep duplicate, so nothing a caller
//! does to the result can reach the registered node.

use std::collections::HashMap;

use svgraster_core::SceneError;
use tracing::{debug, warn};

use crate::model::{SceneShape, Shape};

/// Handle to one registration, used to keep its entry in step with the
/// node it was taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    id: String,
    serial: u64,
}

#[derive(Debug, Clone)]
struct Entry {
    shape: Shape,
    serial: u64,
}

#[derive(Debug, Default, Clone)]
pub struct IdRegistry {
    entries: HashMap<String, Entry>,
    next_serial: u64,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `shape` under `id`.
    ///
    /// A later registration of the same id replaces the earlier one.
    pub fn register(&mut self, id: &str, shape: &Shape) -> Registration {
        let serial = self.next_serial;
        self.next_serial += 1;

        let entry = Entry {
            shape: shape.duplicate(),
            serial,
        };
        if self.entries.insert(id.to_string(), entry).is_some() {
            warn!("Id '{}' redefined, later references use the new node", id);
        } else {
            debug!("Registered id '{}' ({:?})", id, shape.shape_type());
        }

        Registration {
            id: id.to_string(),
            serial,
        }
    }

    /// Applies `update` to the entries of `registrations` that have not been
    /// replaced since.
    pub fn update(&mut self, registrations: &[Registration], mut update: impl FnMut(&mut Shape)) {
        for registration in registrations {
            match self.entries.get_mut(&registration.id) {
                Some(entry) if entry.serial == registration.serial => update(&mut entry.shape),
                _ => {}
            }
        }
    }

    /// Returns an independent duplicate of the node registered under the
    /// reference. A leading `#` is stripped.
    pub fn resolve(&self, reference: &str) -> Result<Shape, SceneError> {
        let id = reference.trim();
        let id = id.strip_prefix('#').unwrap_or(id);
        self.entries
            .get(id)
            .map(|entry| entry.shape.duplicate())
            .ok_or_else(|| SceneError::UnresolvedReference { id: id.to_string() })
    }
}
