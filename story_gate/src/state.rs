//! Story state registry.
//!
//! The game-state layer names its flags and counters here and hands the shared handles to
//! whatever builds the condition trees. Writes made through the registry (or through any
//! handle it gave out) are visible to every condition built over that handle.
//!
//! `StateDef` is the plain-data form of a registry's values. It serves as both the initial
//! configuration and the save snapshot; reading or writing it to disk is left to the caller.

use std::collections::BTreeMap;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::counter::Counter;
use crate::error::StateError;
use crate::flag::Flag;

/// Named flag and counter values, in serializable form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    #[serde(default)]
    pub flags: BTreeMap<String, bool>,
    #[serde(default)]
    pub counters: BTreeMap<String, i64>,
}

/// Registry mapping names to shared `Flag` and `Counter` handles.
#[derive(Debug, Default)]
pub struct StoryState {
    flags: BTreeMap<String, Flag>,
    counters: BTreeMap<String, Counter>,
}

impl StoryState {
    pub fn new() -> StoryState {
        StoryState::default()
    }

    /// Build a registry with one handle per entry in `def`.
    pub fn from_def(def: &StateDef) -> StoryState {
        let flags = def
            .flags
            .iter()
            .map(|(name, value)| (name.clone(), Flag::new(*value)))
            .collect();
        let counters = def
            .counters
            .iter()
            .map(|(name, value)| (name.clone(), Counter::new(*value)))
            .collect();
        info!(
            "story state loaded: {} flags, {} counters",
            def.flags.len(),
            def.counters.len()
        );
        StoryState { flags, counters }
    }

    /// Register a new flag and return its handle.
    ///
    /// # Errors
    /// - `StateError::NameInUse` if a flag with this name already exists
    pub fn define_flag(&mut self, name: &str, initial: bool) -> Result<Flag, StateError> {
        if self.flags.contains_key(name) {
            return Err(StateError::NameInUse {
                kind: "flag",
                name: name.to_string(),
            });
        }
        let flag = Flag::new(initial);
        self.flags.insert(name.to_string(), flag.clone());
        info!("flag '{name}' defined (initial = {initial})");
        Ok(flag)
    }

    /// Register a new counter and return its handle.
    ///
    /// # Errors
    /// - `StateError::NameInUse` if a counter with this name already exists
    pub fn define_counter(&mut self, name: &str, initial: i64) -> Result<Counter, StateError> {
        if self.counters.contains_key(name) {
            return Err(StateError::NameInUse {
                kind: "counter",
                name: name.to_string(),
            });
        }
        let counter = Counter::new(initial);
        self.counters.insert(name.to_string(), counter.clone());
        info!("counter '{name}' defined (initial = {initial})");
        Ok(counter)
    }

    /// Shared handle to a named flag.
    ///
    /// # Errors
    /// - `StateError::UnknownFlag` if no flag has that name
    pub fn flag(&self, name: &str) -> Result<Flag, StateError> {
        self.flags
            .get(name)
            .cloned()
            .ok_or_else(|| StateError::UnknownFlag(name.to_string()))
    }

    /// Shared handle to a named counter.
    ///
    /// # Errors
    /// - `StateError::UnknownCounter` if no counter has that name
    pub fn counter(&self, name: &str) -> Result<Counter, StateError> {
        self.counters
            .get(name)
            .cloned()
            .ok_or_else(|| StateError::UnknownCounter(name.to_string()))
    }

    /// Write through to a named flag.
    ///
    /// # Errors
    /// - `StateError::UnknownFlag` if no flag has that name
    pub fn set_flag(&self, name: &str, value: bool) -> Result<(), StateError> {
        let flag = self.flags.get(name).ok_or_else(|| StateError::UnknownFlag(name.to_string()))?;
        debug!("flag '{name}' set to {value}");
        flag.set(value);
        Ok(())
    }

    /// Add `delta` (which may be negative) to a named counter and return the new value.
    ///
    /// # Errors
    /// - `StateError::UnknownCounter` if no counter has that name
    pub fn adjust_counter(&self, name: &str, delta: i64) -> Result<i64, StateError> {
        let counter = self
            .counters
            .get(name)
            .ok_or_else(|| StateError::UnknownCounter(name.to_string()))?;
        counter.add(delta);
        debug!("counter '{name}' adjusted by {delta} (now {})", counter.get());
        Ok(counter.get())
    }

    pub fn flag_names(&self) -> impl Iterator<Item = &str> {
        self.flags.keys().map(String::as_str)
    }

    pub fn counter_names(&self) -> impl Iterator<Item = &str> {
        self.counters.keys().map(String::as_str)
    }

    /// Capture the current value of every flag and counter.
    pub fn snapshot(&self) -> StateDef {
        StateDef {
            flags: self.flags.iter().map(|(name, f)| (name.clone(), f.get())).collect(),
            counters: self.counters.iter().map(|(name, c)| (name.clone(), c.get())).collect(),
        }
    }

    /// Write the values in `def` through the existing handles.
    ///
    /// Every name is checked before anything is written, so a failed restore leaves the
    /// registry untouched. Names present here but absent from `def` keep their values.
    ///
    /// # Errors
    /// - `StateError::UnknownFlag` / `StateError::UnknownCounter` for names never defined here
    pub fn restore(&self, def: &StateDef) -> Result<(), StateError> {
        if let Some(name) = def.flags.keys().find(|name| !self.flags.contains_key(*name)) {
            warn!("restore rejected: snapshot names undefined flag '{name}'");
            return Err(StateError::UnknownFlag(name.clone()));
        }
        if let Some(name) = def.counters.keys().find(|name| !self.counters.contains_key(*name)) {
            warn!("restore rejected: snapshot names undefined counter '{name}'");
            return Err(StateError::UnknownCounter(name.clone()));
        }

        for (name, value) in &def.flags {
            if let Some(flag) = self.flags.get(name) {
                flag.set(*value);
            }
        }
        for (name, value) in &def.counters {
            if let Some(counter) = self.counters.get(name) {
                counter.set(*value);
            }
        }
        info!(
            "story state restored: {} flags, {} counters",
            def.flags.len(),
            def.counters.len()
        );
        Ok(())
    }
}
