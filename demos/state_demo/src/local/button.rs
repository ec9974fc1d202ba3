use ripple_core::*;

/// Leaf action: knows only the operation it was handed.
pub fn Button(increment_count: Callback) -> View {
    component("LocalButton", move || {
        ripple_ui::Button("Increment count", move || increment_count())
    })
}
