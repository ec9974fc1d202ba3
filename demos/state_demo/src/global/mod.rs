//! Global state: every component reads the `COUNT` atom itself.

mod button;
mod component_one;
mod component_two;
mod global_component;
pub mod store;

use ripple_core::*;
use ripple_ui::Card;

pub use button::Button;
pub use component_one::ComponentOne;
pub use component_two::ComponentTwo;
pub use global_component::GlobalComponent;
pub use store::{COUNT, use_count};

pub fn Global() -> View {
    component("Global", || {
        let (count, _) = use_count();
        Card(format!("Global 🌐 State: {count}")).with_children(vec![
            Button(),
            ComponentOne(),
            ComponentTwo(),
            GlobalComponent("🟡"),
        ])
    })
}
