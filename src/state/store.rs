use std::cell::{Cell, RefCell};

use log::debug;

use super::canvas::{CanvasAction, CanvasState};

/// Owns the canvas slice and serializes every change through `dispatch`.
#[derive(Debug, Default)]
pub struct Store {
    state: CanvasState,
    /// Bumped whenever a dispatch actually changes the state
    revision: u64,
}

impl Store {
    pub fn new(state: CanvasState) -> Self {
        Self { state, revision: 0 }
    }

    /// Read-only view of the current state
    pub fn state(&self) -> &CanvasState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Run an action through the reducer
    pub fn dispatch(&mut self, action: CanvasAction) {
        debug!("dispatch {:?}", action);

        if self.state.apply(action) {
            self.revision += 1;
        }
    }
}

/// A projection of the store recomputed only when the store has changed.
///
/// Works behind `&self` so it can be called from iced's `view`.
pub struct Selector<T> {
    project: fn(&CanvasState) -> T,
    cache: RefCell<Option<(u64, T)>>,
    computations: Cell<usize>,
}

impl<T: Clone + PartialEq> Selector<T> {
    pub fn new(project: fn(&CanvasState) -> T) -> Self {
        Self {
            project,
            cache: RefCell::new(None),
            computations: Cell::new(0),
        }
    }

    /// Current projection of `store`
    pub fn select(&self, store: &Store) -> T {
        let mut cache = self.cache.borrow_mut();

        match cache.as_mut() {
            Some((revision, value)) if *revision == store.revision() => value.clone(),
            Some((revision, value)) => {
                let fresh = self.compute(store);
                *revision = store.revision();
                // Keep the cached value when the projection is unchanged
                if *value != fresh {
                    *value = fresh;
                }
                value.clone()
            }
            None => {
                let fresh = self.compute(store);
                *cache = Some((store.revision(), fresh.clone()));
                fresh
            }
        }
    }

    /// How many times the projection has run
    pub fn computations(&self) -> usize {
        self.computations.get()
    }

    fn compute(&self, store: &Store) -> T {
        self.computations.set(self.computations.get() + 1);
        (self.project)(store.state())
    }
}
