use ripple_core::*;
use ripple_ui::Card;

use super::Button;

pub fn ChildTwo(count: u64, increment_count: Callback) -> View {
    component("ChildTwo", move || {
        Card(format!("Child Two: {count}")).child(Button(increment_count))
    })
}
