use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};

pub type SignalId = usize;

new_key_type! {
    /// Handle to a registered observer (usually a mounted component).
    pub struct ObserverId;
}

thread_local! {
    static CURRENT_OBSERVER: Cell<Option<ObserverId>> = const { Cell::new(None) };
    static GRAPH: RefCell<DepGraph> = RefCell::new(DepGraph::default());
    static NEXT_SIGNAL: Cell<SignalId> = const { Cell::new(1) };
}

#[derive(Default)]
struct DepGraph {
    // signal_id -> observers that depend on it
    edges: HashMap<SignalId, HashSet<ObserverId>>,
    // observer_id -> signals it depends on
    back: HashMap<ObserverId, HashSet<SignalId>>,
    observers: SlotMap<ObserverId, Rc<dyn Fn()>>,
    running: HashSet<ObserverId>,
}

impl DepGraph {
    fn remove_all_edges_for(&mut self, obs: ObserverId) {
        if let Some(signals) = self.back.remove(&obs) {
            for s in signals {
                if let Some(set) = self.edges.get_mut(&s) {
                    set.remove(&obs);
                    if set.is_empty() {
                        self.edges.remove(&s);
                    }
                }
            }
        }
    }

    fn remove_observer(&mut self, obs: ObserverId) {
        self.observers.remove(obs);
        self.remove_all_edges_for(obs);
        self.running.remove(&obs);
    }
}

/// Allocates a fresh id for a new signal.
pub fn next_signal_id() -> SignalId {
    NEXT_SIGNAL.with(|n| {
        let id = n.get();
        n.set(id + 1);
        id
    })
}

pub fn current_observer() -> Option<ObserverId> {
    CURRENT_OBSERVER.with(|co| co.get())
}

pub fn register_signal_read(sig: SignalId) {
    if let Some(obs) = current_observer() {
        GRAPH.with(|g| {
            let mut g = g.borrow_mut();
            // removed observers must not pick up new edges
            if !g.observers.contains_key(obs) {
                return;
            }
            g.edges.entry(sig).or_default().insert(obs);
            g.back.entry(obs).or_default().insert(sig);
        });
    }
}

/// Runs every observer that read `sig`, each at most once per change.
pub fn signal_changed(sig: SignalId) {
    let mut queue: VecDeque<ObserverId> = GRAPH.with(|g| {
        g.borrow()
            .edges
            .get(&sig)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    });

    while let Some(obs) = queue.pop_front() {
        let started = GRAPH.with(|g| {
            let mut g = g.borrow_mut();
            if g.running.contains(&obs) || !g.observers.contains_key(obs) {
                return false;
            }
            g.running.insert(obs);
            true
        });
        if !started {
            continue;
        }
        run_observer_now(obs);
        GRAPH.with(|g| {
            g.borrow_mut().running.remove(&obs);
        });
    }
}

pub fn new_observer(f: impl Fn() + 'static) -> ObserverId {
    GRAPH.with(|g| g.borrow_mut().observers.insert(Rc::new(f)))
}

/// Remove an observer and all of its dependency edges.
pub fn remove_observer(id: ObserverId) {
    GRAPH.with(|g| g.borrow_mut().remove_observer(id));
}

/// Re-runs the observer's callback under tracking.
pub fn run_observer_now(id: ObserverId) {
    let f = GRAPH.with(|g| g.borrow().observers.get(id).cloned());
    if let Some(f) = f {
        track(id, || f());
    }
}

/// Runs `f` with `obs` as the current observer. Edges recorded by earlier
/// runs are dropped first, so only reads made by this run remain.
pub fn track<R>(obs: ObserverId, f: impl FnOnce() -> R) -> R {
    GRAPH.with(|g| g.borrow_mut().remove_all_edges_for(obs));
    with_observer(Some(obs), f)
}

/// Runs `f` without recording any reads.
pub fn untracked<R>(f: impl FnOnce() -> R) -> R {
    with_observer(None, f)
}

fn with_observer<R>(obs: Option<ObserverId>, f: impl FnOnce() -> R) -> R {
    // restores the outer observer even if `f` unwinds
    struct Restore(Option<ObserverId>);
    impl Drop for Restore {
        fn drop(&mut self) {
            CURRENT_OBSERVER.with(|co| co.set(self.0));
        }
    }
    let _restore = Restore(CURRENT_OBSERVER.with(|co| co.replace(obs)));
    f()
}

/// Number of observers currently depending on `sig`.
pub fn subscriber_count(sig: SignalId) -> usize {
    GRAPH.with(|g| g.borrow().edges.get(&sig).map_or(0, |s| s.len()))
}
