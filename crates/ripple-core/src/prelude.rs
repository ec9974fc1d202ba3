pub use crate::atom::{Atom, Setter, atom_signal, use_atom};
pub use crate::effects::{Dispose, mount_effect, on_unmount};
pub use crate::runtime::{
    ComposeGuard, Frame, HitRegion, Scheduler, SemNode, component, remember, remember_signal,
    remember_state,
};
pub use crate::scope::{Scope, current_scope, scoped_effect};
pub use crate::semantics::{Role, Semantics};
pub use crate::signal::{Signal, signal};
pub use crate::view::{Callback, Scene, SceneNode, TextStyle, View, ViewId, ViewKind};
