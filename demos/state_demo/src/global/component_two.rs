use ripple_core::*;
use ripple_ui::Card;

use super::Button;
use super::store::use_count;

pub fn ComponentTwo() -> View {
    component("ComponentTwo", || {
        let (count, _) = use_count();
        Card(format!("Component Two: {count}")).child(Button())
    })
}
