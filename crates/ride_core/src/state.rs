//! Single-active-grid state
//!
//! At most one grid is alive per process: the interactive caller creates one,
//! works on it, and destroys it before opening a map with other dimensions.
//! This module owns that contract. [`Grid`] itself stays a plain value, so
//! tests and embedders can hold their own instances without touching the
//! global slot.

use once_cell::sync::Lazy;
use std::sync::RwLock;

use crate::error::{GridError, Result};
use crate::grid::Grid;

/// The process-wide grid slot. Empty until `get_instance` fills it.
pub static ACTIVE_GRID: Lazy<RwLock<Option<Grid>>> = Lazy::new(|| RwLock::new(None));

/// Create the active grid if none is alive.
///
/// When a grid already exists it wins and the passed dimensions are ignored;
/// call [`destroy_instance`] first to start over with new dimensions.
pub fn get_instance(width: i32, length: i32) -> Result<()> {
    let mut slot = ACTIVE_GRID.write().expect("ACTIVE_GRID lock poisoned");
    if slot.is_none() {
        *slot = Some(Grid::new(width, length)?);
        log::info!("grid created: {}x{}", width, length);
    }
    Ok(())
}

/// Destroy the active grid. A later `get_instance` starts fresh.
pub fn destroy_instance() {
    let mut slot = ACTIVE_GRID.write().expect("ACTIVE_GRID lock poisoned");
    if slot.take().is_some() {
        log::info!("grid destroyed");
    }
}

/// Whether a grid is currently alive.
pub fn is_active() -> bool {
    ACTIVE_GRID.read().expect("ACTIVE_GRID lock poisoned").is_some()
}

/// Run a read-only closure against the active grid.
pub fn with_grid<T>(f: impl FnOnce(&Grid) -> Result<T>) -> Result<T> {
    let slot = ACTIVE_GRID.read().expect("ACTIVE_GRID lock poisoned");
    let grid = slot
        .as_ref()
        .ok_or_else(|| GridError::IllegalState("no active grid".to_string()))?;
    f(grid)
}

/// Run a mutating closure against the active grid.
pub fn with_grid_mut<T>(f: impl FnOnce(&mut Grid) -> Result<T>) -> Result<T> {
    let mut slot = ACTIVE_GRID.write().expect("ACTIVE_GRID lock poisoned");
    let grid = slot
        .as_mut()
        .ok_or_else(|| GridError::IllegalState("no active grid".to_string()))?;
    f(grid)
}
