use log::debug;

use crate::equality::structural::{equals, StructuralEq};

#[derive(Debug, Clone)]
pub struct ChangeTracker<T> {
    label: &'static str,
    last: Option<T>,
    changes: u64,
}

impl<T: StructuralEq + Clone> ChangeTracker<T> {
    pub fn new(label: &'static str) -> Self {
        ChangeTracker {
            label,
            last: None,
            changes: 0,
        }
    }

    pub fn observe(&mut self, value: &T) -> bool {
        if let Some(last) = &self.last {
            if equals(last, value) {
                return false;
            }
        }

        self.changes += 1;
        debug!("{} changed (change #{})", self.label, self.changes);
        self.last = Some(value.clone());
        true
    }

    pub fn current(&self) -> Option<&T> {
        self.last.as_ref()
    }

    pub fn change_count(&self) -> u64 {
        self.changes
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
