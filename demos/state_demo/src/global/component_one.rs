use ripple_core::*;
use ripple_ui::Card;

use super::Button;
use super::store::use_count;

pub fn ComponentOne() -> View {
    component("ComponentOne", || {
        let (count, _) = use_count();
        Card(format!("Component One: {count}")).child(Button())
    })
}
