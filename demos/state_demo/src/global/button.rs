use ripple_core::*;

use super::store::use_count;

pub fn Button() -> View {
    component("GlobalButton", || {
        let (_, increment_count) = use_count();
        ripple_ui::Button("Increment global count", move || increment_count())
    })
}
