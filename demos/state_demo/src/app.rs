use ripple_core::*;
use ripple_ui::{Column, Heading, Surface};

use crate::global::Global;
use crate::local::Local;

/// Root build function: `local_owners` independent local demos, then the
/// global demo.
pub fn app(local_owners: usize) -> impl FnMut(&mut Scheduler) -> View + 'static {
    move |_s| {
        let mut children = vec![Heading("Local ➡️ vs Global 🌐 state")];
        children.extend((0..local_owners).map(|_| Local()));
        children.push(Global());
        Surface(Column().with_children(children))
    }
}
