//! Rider profiles: a name plus the gear collection to pick from
//!
//! Gears are kept ordered by case-insensitive name and free of duplicates
//! under that ordering. A profile always owns at least one gear.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::models::gear::Gear;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    name: String,
    gears: Vec<Gear>,
}

impl Profile {
    /// Create a profile with its initial gear. A profile is never gear-less.
    pub fn new(name: impl Into<String>, gear: Gear) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(GridError::InvalidArgument("profile name cannot be empty".to_string()));
        }
        Ok(Self { name, gears: vec![gear] })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(GridError::InvalidArgument("profile name cannot be empty".to_string()));
        }
        self.name = name;
        Ok(())
    }

    /// Gears ordered by case-insensitive name.
    pub fn gears(&self) -> &[Gear] {
        &self.gears
    }

    pub fn gear_at(&self, index: usize) -> Result<&Gear> {
        self.gears
            .get(index)
            .ok_or(GridError::IndexOutOfRange { index, len: self.gears.len() })
    }

    /// Insert a gear keeping name order. Returns false (and leaves the
    /// collection unchanged) when a gear with the same name, ignoring case,
    /// is already owned.
    pub fn add_gear(&mut self, gear: Gear) -> bool {
        let key = gear.name().to_lowercase();
        match self.gears.binary_search_by(|g| g.name().to_lowercase().cmp(&key)) {
            Ok(_) => false,
            Err(pos) => {
                self.gears.insert(pos, gear);
                true
            }
        }
    }

    /// Remove the gear at `index`. The last remaining gear cannot be
    /// removed.
    pub fn remove_gear(&mut self, index: usize) -> Result<Gear> {
        if index >= self.gears.len() {
            return Err(GridError::IndexOutOfRange { index, len: self.gears.len() });
        }
        if self.gears.len() == 1 {
            return Err(GridError::IllegalState(
                "profile must keep at least one gear".to_string(),
            ));
        }
        Ok(self.gears.remove(index))
    }
}
