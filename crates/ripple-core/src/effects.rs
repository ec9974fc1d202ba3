use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::{remember, scoped_effect};

#[derive(Clone)]
pub struct Dispose(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl Dispose {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(f)))))
    }

    /// Runs at most once (safe to call multiple times).
    pub fn run(&self) {
        let f = self.0.borrow_mut().take();
        if let Some(f) = f {
            f()
        }
    }
}

/// Helper to build the cleanup returned from an effect.
pub fn on_unmount(f: impl FnOnce() + 'static) -> Dispose {
    Dispose::new(f)
}

/// Runs `effect` once per component instance; its `Dispose` runs when the
/// instance unmounts.
pub fn mount_effect(effect: impl FnOnce() -> Dispose + 'static) {
    let installed = remember(|| Cell::new(false));
    if installed.replace(true) {
        return;
    }
    scoped_effect(move || {
        let d = effect();
        Box::new(move || d.run())
    });
}
