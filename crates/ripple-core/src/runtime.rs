use std::any::Any;
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::reactive::{self, ObserverId};
use crate::scope::Scope;
use crate::{Callback, Scene, Signal, View, semantics::Role, signal};

thread_local! {
    pub static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
    static INVALIDATED: RefCell<BTreeSet<String>> = const { RefCell::new(BTreeSet::new()) };
}

/// A mounted component: its slots, its subscription and its lifetime.
struct Instance {
    name: &'static str,
    observer: ObserverId,
    scope: Scope,
    slots: Vec<Box<dyn Any>>,
    last_pass: u64,
    renders: u64,
}

#[derive(Default)]
struct Cursor {
    path: String,
    slot: usize,
    children: HashMap<&'static str, usize>,
}

impl Cursor {
    fn new(path: String) -> Self {
        Self {
            path,
            ..Self::default()
        }
    }
}

#[derive(Default)]
pub struct Composer {
    root: Cursor,
    root_slots: Vec<Box<dyn Any>>,
    stack: Vec<Cursor>,
    instances: HashMap<String, Instance>,
    pass: u64,
}

impl Composer {
    fn cursor_mut(&mut self) -> &mut Cursor {
        match self.stack.last_mut() {
            Some(c) => c,
            None => &mut self.root,
        }
    }

    /// Claims the next positional slot. `None` owner means the root table.
    fn next_slot(&mut self) -> (Option<String>, usize) {
        let owner = self.stack.last().map(|c| c.path.clone());
        let cursor = self.cursor_mut();
        let index = cursor.slot;
        cursor.slot += 1;
        (owner, index)
    }

    fn slots_mut(&mut self, owner: Option<&str>) -> Option<&mut Vec<Box<dyn Any>>> {
        match owner {
            None => Some(&mut self.root_slots),
            Some(path) => self.instances.get_mut(path).map(|i| &mut i.slots),
        }
    }

    fn child_path(&mut self, name: &'static str) -> String {
        let cursor = self.cursor_mut();
        let n = cursor.children.entry(name).or_insert(0);
        let path = format!("{}/{}#{}", cursor.path, name, n);
        *n += 1;
        path
    }

    fn enter(&mut self, path: &str) {
        let pass = self.pass;
        if let Some(inst) = self.instances.get_mut(path) {
            inst.last_pass = pass;
            inst.renders += 1;
        }
        self.stack.push(Cursor::new(path.to_string()));
    }

    fn begin_pass(&mut self) {
        self.pass += 1;
        self.root = Cursor::default();
        self.stack.clear();
    }

    fn sweep(&mut self, pass: u64) -> Vec<(String, Instance)> {
        let stale: Vec<String> = self
            .instances
            .iter()
            .filter(|(_, i)| i.last_pass != pass)
            .map(|(path, _)| path.clone())
            .collect();
        stale
            .into_iter()
            .filter_map(|path| self.instances.remove_entry(&path))
            .collect()
    }
}

/// Brackets one composition pass. Dropping it unmounts every component that
/// was not rendered during the pass.
pub struct ComposeGuard {
    pass: u64,
}

impl ComposeGuard {
    pub fn begin() -> Self {
        let pass = COMPOSER.with(|c| {
            let mut c = c.borrow_mut();
            c.begin_pass();
            c.pass
        });
        // this pass re-renders everything that was pending
        INVALIDATED.with(|inv| inv.borrow_mut().clear());
        ComposeGuard { pass }
    }
}

impl Drop for ComposeGuard {
    fn drop(&mut self) {
        let gone = COMPOSER.with(|c| c.borrow_mut().sweep(self.pass));
        for (path, inst) in gone {
            log::debug!("unmount {path} ({} renders)", inst.renders);
            INVALIDATED.with(|inv| inv.borrow_mut().remove(&path));
            inst.scope.dispose();
            drop(inst.slots);
        }
    }
}

/// Marks a component boundary.
///
/// `build` runs under the component's own observer, so every signal it reads
/// subscribes this component; a later write to any of them invalidates it.
/// The instance (and its remembered slots) lives until a composition pass no
/// longer renders it.
pub fn component(name: &'static str, build: impl FnOnce() -> View) -> View {
    let path = COMPOSER.with(|c| c.borrow_mut().child_path(name));
    let known = COMPOSER.with(|c| {
        c.borrow()
            .instances
            .get(&path)
            .map(|i| (i.observer, i.scope.clone()))
    });
    let (observer, scope) = match known {
        Some(known) => known,
        None => mount(name, &path),
    };

    struct Exit;
    impl Drop for Exit {
        fn drop(&mut self) {
            COMPOSER.with(|c| {
                c.borrow_mut().stack.pop();
            });
        }
    }
    COMPOSER.with(|c| c.borrow_mut().enter(&path));
    let _exit = Exit;

    scope.run(|| reactive::track(observer, build))
}

fn mount(name: &'static str, path: &str) -> (ObserverId, Scope) {
    let observer = reactive::new_observer({
        let path = path.to_string();
        move || invalidate(&path)
    });
    let scope = Scope::new();
    scope.add_disposer(move || reactive::remove_observer(observer));
    log::debug!("mount {path}");
    COMPOSER.with(|c| {
        c.borrow_mut().instances.insert(
            path.to_string(),
            Instance {
                name,
                observer,
                scope: scope.clone(),
                slots: Vec::new(),
                last_pass: 0,
                renders: 0,
            },
        );
    });
    (observer, scope)
}

fn invalidate(path: &str) {
    let fresh = INVALIDATED.with(|inv| inv.borrow_mut().insert(path.to_string()));
    if fresh {
        log::debug!("invalidated {path}");
    }
}

pub fn has_invalidations() -> bool {
    INVALIDATED.with(|inv| !inv.borrow().is_empty())
}

/// Drains the paths of components that need to re-render.
pub fn take_invalidations() -> Vec<String> {
    INVALIDATED.with(|inv| std::mem::take(&mut *inv.borrow_mut()).into_iter().collect())
}

pub fn mounted_components() -> usize {
    COMPOSER.with(|c| c.borrow().instances.len())
}

pub fn render_count(path: &str) -> Option<u64> {
    COMPOSER.with(|c| c.borrow().instances.get(path).map(|i| i.renders))
}

/// Mounted component paths whose name is `name`, sorted.
pub fn component_paths(name: &str) -> Vec<String> {
    COMPOSER.with(|c| {
        let c = c.borrow();
        let mut paths: Vec<String> = c
            .instances
            .iter()
            .filter(|(_, i)| i.name == name)
            .map(|(p, _)| p.clone())
            .collect();
        paths.sort();
        paths
    })
}

/// Slot-based remember (sequential composition only)
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Rc<T> {
    let (owner, index) = COMPOSER.with(|c| c.borrow_mut().next_slot());
    let existing = COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let slots = c.slots_mut(owner.as_deref())?;
        slots.get(index).map(|b| b.downcast_ref::<Rc<T>>().cloned())
    });
    match existing {
        Some(Some(rc)) => return rc,
        Some(None) => log::warn!(
            "remember: slot {} of '{}' type changed; replacing.",
            index,
            owner.as_deref().unwrap_or("/")
        ),
        None => {}
    }

    let rc: Rc<T> = Rc::new(init());
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        if let Some(slots) = c.slots_mut(owner.as_deref()) {
            let boxed: Box<dyn Any> = Box::new(rc.clone());
            if index < slots.len() {
                slots[index] = boxed;
            } else {
                slots.push(boxed);
            }
        }
    });
    rc
}

pub fn remember_state<T: 'static>(init: impl FnOnce() -> T) -> Rc<RefCell<T>> {
    remember(|| RefCell::new(init()))
}

/// A signal owned by the current component.
pub fn remember_signal<T: 'static>(init: impl FnOnce() -> T) -> Signal<T> {
    remember(|| signal(init())).as_ref().clone()
}

/// Frame — output of composition for a tick: scene + input/semantics.
pub struct Frame {
    pub scene: Scene,
    pub hit_regions: Vec<HitRegion>,
    pub semantics_nodes: Vec<SemNode>,
}

#[derive(Clone)]
pub struct HitRegion {
    pub id: u64,
    pub label: String,
    pub on_click: Option<Callback>,
}

/// Flattened semantics node produced by layout.
#[derive(Clone, Debug)]
pub struct SemNode {
    /// Stable id, shared with the associated `HitRegion` / `ViewId`.
    pub id: u64,
    pub role: Role,
    pub label: Option<String>,
    pub enabled: bool,
}

pub struct Scheduler {
    frames: u64,
    pub columns: usize,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            frames: 0,
            columns: 80,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn compose<F>(
        &mut self,
        mut build_root: F,
        layout_paint: impl Fn(&View, usize) -> (Scene, Vec<HitRegion>, Vec<SemNode>),
    ) -> Frame
    where
        F: FnMut(&mut Scheduler) -> View,
    {
        let root = {
            let _guard = ComposeGuard::begin();
            build_root(self)
        };
        self.frames += 1;
        let (scene, hits, sem) = layout_paint(&root, self.columns);

        Frame {
            scene,
            hit_regions: hits,
            semantics_nodes: sem,
        }
    }
}
