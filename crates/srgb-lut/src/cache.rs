//! Process-wide table cache
//!
//! Each table is built on first use and then shared read-only for the rest of
//! the process. `OnceLock` guarantees that a single thread runs the builder
//! while concurrent callers wait, so nobody sees a half-filled table.

use std::sync::OnceLock;

use crate::table::{
    build_delinearization_table, build_linearization_table, DelinearizationTable,
    LinearizationTable,
};

/// Build state of a lazily initialized table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableState {
    /// Not requested yet.
    Unbuilt,
    /// Built; stays this way for the life of the process.
    Built,
}

/// A value built by `build` on first access.
pub struct LazyTable<T> {
    cell: OnceLock<T>,
    build: fn() -> T,
}

impl<T> LazyTable<T> {
    pub const fn new(build: fn() -> T) -> Self {
        Self {
            cell: OnceLock::new(),
            build,
        }
    }

    /// The table, building it if this is the first access.
    #[inline]
    pub fn get(&self) -> &T {
        self.cell.get_or_init(self.build)
    }

    pub fn state(&self) -> TableState {
        if self.cell.get().is_some() {
            TableState::Built
        } else {
            TableState::Unbuilt
        }
    }
}

static LINEARIZATION: LazyTable<LinearizationTable> = LazyTable::new(build_linearization_table);
static DELINEARIZATION: LazyTable<DelinearizationTable> =
    LazyTable::new(build_delinearization_table);

/// Shared sRGB to linear table.
#[inline]
pub fn linearization_table() -> &'static LinearizationTable {
    LINEARIZATION.get()
}

/// Shared linear to sRGB table.
#[inline]
pub fn delinearization_table() -> &'static DelinearizationTable {
    DELINEARIZATION.get()
}

pub fn linearization_state() -> TableState {
    LINEARIZATION.state()
}

pub fn delinearization_state() -> TableState {
    DELINEARIZATION.state()
}

/// Build both shared tables now instead of on first conversion.
pub fn warm_up() {
    linearization_table();
    delinearization_table();
}
