//! # State, Signals, and Components
//!
//! Ripple uses a small reactive core instead of an explicit widget tree with
//! mutable fields. There are four main pieces:
//!
//! - `Signal<T>` — observable, reactive value.
//! - `Atom<T>` — a process-wide signal declared as a `static`.
//! - `component` — a rendering entity with its own slots and subscriptions.
//! - `remember*` — lifecycle‑aware storage bound to a component.
//!
//! ## Signals
//!
//! `Signal<T>` is a cloneable handle to a piece of state:
//!
//! ```rust
//! use ripple_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! Reads participate in a dependency graph: when you call `get()` while a
//! component is rendering, future writes invalidate that component and the
//! host composes a new frame.
//!
//! ## Local state
//!
//! State that belongs to one subtree is remembered by the component that owns
//! it and handed to children as plain arguments:
//!
//! ```rust
//! use std::rc::Rc;
//! use ripple_core::*;
//!
//! fn Counter() -> View {
//!     component("Counter", || {
//!         let count = remember_signal(|| 0u64);
//!         let increment: Callback = {
//!             let count = count.clone();
//!             Rc::new(move || count.update(|c| *c += 1))
//!         };
//!         Label(count.get(), increment)
//!     })
//! }
//!
//! fn Label(count: u64, increment: Callback) -> View {
//!     View::new(0, ViewKind::Button { text: format!("{count}"), on_click: Some(increment) })
//! }
//! # let _ = Counter();
//! ```
//!
//! - `remember`, `remember_state` and `remember_signal` are order‑based: the
//!   Nth call inside a component always refers to the Nth stored value.
//! - Remembered values are dropped when their component unmounts.
//!
//! ## Global state
//!
//! An [`Atom`] is read with [`use_atom`] from anywhere in the tree; there is
//! no threading through intermediate components. See the [`atom`] module.
//!
//! ## Effects and cleanup
//!
//! ```rust
//! use ripple_core::*;
//!
//! fn Example() -> View {
//!     component("Example", || {
//!         mount_effect(|| {
//!             log::info!("Mounted Example");
//!             on_unmount(|| log::info!("Unmounted Example"))
//!         });
//!         View::new(0, ViewKind::Column)
//!     })
//! }
//! # let _ = Example();
//! ```

#![allow(non_snake_case)]

pub mod atom;
pub mod effects;
pub mod prelude;
pub mod reactive;
pub mod runtime;
pub mod scope;
pub mod semantics;
pub mod signal;
pub mod tests;
pub mod view;

pub use atom::*;
pub use effects::*;
pub use prelude::*;
pub use reactive::{ObserverId, SignalId};
pub use runtime::*;
pub use semantics::*;
pub use signal::*;
pub use view::*;
