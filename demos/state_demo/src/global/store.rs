use std::rc::Rc;

use ripple_core::*;

pub static COUNT: Atom<u64> = Atom::new("count", || 0);

/// Reads the shared count (subscribing the caller) and returns it with the
/// increment operation.
pub fn use_count() -> (u64, Callback) {
    let (count, set_count) = use_atom(&COUNT);
    let increment_count: Callback = Rc::new(move || set_count.update(|c| *c += 1));
    (count, increment_count)
}
