use ripple_core::*;
use ripple_ui::Card;

use super::Button;

pub fn ChildOne(count: u64, increment_count: Callback) -> View {
    component("ChildOne", move || {
        Card(format!("Child One: {count}")).child(Button(increment_count))
    })
}
