//! Process-wide state cells.
//!
//! An [`Atom`] is a declaration; the value lives in a store owned by the UI
//! thread and is created the first time anything touches the atom. Every
//! reader of the same atom shares one [`Signal`], so a write through any
//! [`Setter`] re-renders every component that read it, wherever it sits in
//! the tree.
//!
//! ```rust
//! use ripple_core::*;
//!
//! static CLICKS: Atom<u64> = Atom::new("clicks", || 0);
//!
//! let (clicks, set_clicks) = use_atom(&CLICKS);
//! assert_eq!(clicks, 0);
//! set_clicks.update(|c| *c += 1);
//! assert_eq!(atom_signal(&CLICKS).peek(), 1);
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::{Signal, signal};

thread_local! {
    static STORE: RefCell<HashMap<(&'static str, TypeId), Box<dyn Any>>> =
        RefCell::new(HashMap::new());
}

pub struct Atom<T: 'static> {
    key: &'static str,
    init: fn() -> T,
}

impl<T> Atom<T> {
    pub const fn new(key: &'static str, init: fn() -> T) -> Self {
        Self { key, init }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }
}

/// Returns the shared cell backing `atom`, creating it on first access.
pub fn atom_signal<T: 'static>(atom: &Atom<T>) -> Signal<T> {
    let slot = (atom.key(), TypeId::of::<T>());
    let existing = STORE.with(|s| {
        s.borrow()
            .get(&slot)
            .and_then(|b| b.downcast_ref::<Signal<T>>())
            .cloned()
    });
    if let Some(sig) = existing {
        return sig;
    }

    let sig = signal((atom.init)());
    log::debug!("atom '{}' created", atom.key());
    STORE.with(|s| {
        s.borrow_mut().insert(slot, Box::new(sig.clone()));
    });
    sig
}

/// Write half of [`use_atom`].
pub struct Setter<T: 'static>(Signal<T>);

impl<T> Clone for Setter<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Setter<T> {
    pub fn set(&self, v: T) {
        self.0.set(v);
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.0.update(f);
    }
}

/// Reads `atom` (subscribing the current component) and returns a setter.
pub fn use_atom<T: Clone + 'static>(atom: &Atom<T>) -> (T, Setter<T>) {
    let sig = atom_signal(atom);
    (sig.get(), Setter(sig))
}
