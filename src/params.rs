//! Live per-body revolution speeds, adjustable from the UI.
//!
//! The UI mutates speeds through `set` only; the frame loop reads them with
//! `get`. A write lands on the very next frame, with no smoothing across the
//! change. Keys are the registry's body names; anything else is rejected.

use crate::bodies::Registry;
use std::collections::HashMap;

pub struct ParameterStore {
    speeds: HashMap<String, f64>,
}

impl ParameterStore {
    pub fn from_registry(registry: &Registry) -> Self {
        let speeds = registry
            .iter()
            .map(|b| (b.name.clone(), b.default_speed))
            .collect();
        Self { speeds }
    }

    /// Updates a body's revolution speed. Negative values reverse the orbit
    /// direction. Returns false (keeping the previous value) for unknown
    /// names and non-finite values.
    pub fn set(&mut self, name: &str, value: f64) -> bool {
        if !value.is_finite() {
            log::warn!("ignoring non-finite revolution speed for {name}: {value}");
            return false;
        }
        match self.speeds.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => {
                log::warn!("ignoring revolution speed for unknown body {name:?}");
                false
            }
        }
    }

    pub fn get(&self, name: &str) -> f64 {
        self.speeds.get(name).copied().unwrap_or(0.0)
    }
}
