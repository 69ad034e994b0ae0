//! A single-threaded memo cell: unset, computing, cached

use std::cell::Cell;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State<T: Copy> {
    Unset,
    Computing,
    Cached(T),
}

/// Holds a value that is computed at most once
///
/// Interior mutability through `Cell` makes this `!Sync`; a cache built from
/// these cells must stay on one thread or be synchronised externally.
pub struct ComputeOnce<T: Copy> {
    state: Cell<State<T>>,
}

impl<T: Copy> ComputeOnce<T> {
    pub const fn new() -> Self {
        Self {
            state: Cell::new(State::Unset),
        }
    }

    /// Return the cached value, computing it with `init` on first use
    ///
    /// # Panics
    ///
    /// Panics if `init` tries to read this same cell.
    pub fn get_or_compute(&self, init: impl FnOnce() -> T) -> T {
        match self.state.get() {
            State::Cached(value) => value,
            State::Computing => panic!("ComputeOnce re-entered while computing its value"),
            State::Unset => {
                self.state.set(State::Computing);
                let value = init();
                self.state.set(State::Cached(value));
                value
            }
        }
    }

    pub fn get(&self) -> Option<T> {
        match self.state.get() {
            State::Cached(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_cached(&self) -> bool {
        matches!(self.state.get(), State::Cached(_))
    }
}

impl<T: Copy> Default for ComputeOnce<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for ComputeOnce<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state.get() {
            State::Unset => f.write_str("ComputeOnce(<unset>)"),
            State::Computing => f.write_str("ComputeOnce(<computing>)"),
            State::Cached(value) => f.debug_tuple("ComputeOnce").field(&value).finish(),
        }
    }
}
