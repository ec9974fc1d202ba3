use ripple_core::*;
use ripple_ui::Card;

use super::Button;
use super::store::use_count;

/// A subscriber that can be dropped anywhere, including inside the local demo.
pub fn GlobalComponent(name: &str) -> View {
    component("GlobalComponent", || {
        let (count, _) = use_count();
        Card(format!("{name} Global Component: {count}")).child(Button())
    })
}
