//! Local state: the owner remembers the count and threads it down.
//!
//! Children never read the owner's signal. They get a plain `u64` and the
//! increment `Callback` as arguments, so a click re-renders the owner, and the
//! owner's re-render hands every child the new value.

mod button;
mod child_one;
mod child_two;

use std::rc::Rc;

use ripple_core::*;
use ripple_ui::Card;

use crate::global::GlobalComponent;

pub use button::Button;
pub use child_one::ChildOne;
pub use child_two::ChildTwo;

pub fn Local() -> View {
    component("Local", || {
        mount_effect(|| {
            log::debug!("local owner mounted");
            on_unmount(|| log::debug!("local owner unmounted"))
        });

        let count = remember_signal(|| 0u64);
        let increment_count: Callback = {
            let count = count.clone();
            Rc::new(move || count.update(|c| *c += 1))
        };
        let value = count.get();

        Card(format!("Parent ➡️ Child State: {value}")).with_children(vec![
            ripple_ui::Button("Increment count", move || count.update(|c| *c += 1)),
            ChildOne(value, increment_count.clone()),
            ChildTwo(value, increment_count),
            GlobalComponent("🔵"),
        ])
    })
}
