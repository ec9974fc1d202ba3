#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::reactive;
    use crate::scope::*;
    use crate::*;

    static SHARED: Atom<u64> = Atom::new("tests.shared", || 0);
    static GREETING: Atom<String> = Atom::new("tests.greeting", || "hi".to_string());

    fn leaf(text: String) -> View {
        View::new(
            0,
            ViewKind::Text {
                text,
                style: TextStyle::Body,
            },
        )
    }

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_n_increments_yield_n() {
        for n in [0u64, 1, 7, 250] {
            let count = signal(0u64);
            for _ in 0..n {
                count.update(|c| *c += 1);
            }
            assert_eq!(count.get(), n);
        }
    }

    #[test]
    fn test_read_is_idempotent() {
        let count = signal(3u64);
        let reads: Vec<u64> = (0..5).map(|_| count.get()).collect();
        assert_eq!(reads, vec![3; 5]);
        assert_eq!(count.peek(), 3);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let id = sig.subscribe({
            let seen = seen.clone();
            move |v| seen.borrow_mut().push(*v)
        });

        sig.set(42);
        sig.update(|v| *v += 1);
        assert_eq!(*seen.borrow(), vec![42, 43]);

        assert!(sig.unsubscribe(id));
        assert!(!sig.unsubscribe(id));
        sig.set(0);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_observer_tracks_reads() {
        let sig = signal(1);
        let runs = Rc::new(Cell::new(0));
        let obs = reactive::new_observer({
            let sig = sig.clone();
            let runs = runs.clone();
            move || {
                sig.get();
                runs.set(runs.get() + 1);
            }
        });
        reactive::run_observer_now(obs);
        assert_eq!(runs.get(), 1);
        assert_eq!(reactive::subscriber_count(sig.id()), 1);

        sig.set(2);
        assert_eq!(runs.get(), 2);

        reactive::remove_observer(obs);
        assert_eq!(reactive::subscriber_count(sig.id()), 0);
        sig.set(3);
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn test_untracked_reads_do_not_subscribe() {
        let sig = signal(1);
        let obs = reactive::new_observer(|| {});
        reactive::track(obs, || {
            reactive::untracked(|| sig.get());
            assert_eq!(sig.peek(), 1);
        });
        assert_eq!(reactive::subscriber_count(sig.id()), 0);
        assert_eq!(reactive::current_observer(), None);
    }

    #[test]
    fn test_scope_explicit_dispose() {
        let order = Rc::new(RefCell::new(Vec::new()));

        let scope = Scope::new();
        for n in 0..3 {
            let order = order.clone();
            scope.add_disposer(move || order.borrow_mut().push(n));
        }

        assert!(order.borrow().is_empty());
        scope.dispose();
        assert_eq!(*order.borrow(), vec![2, 1, 0]);
    }

    #[test]
    fn test_scope_run_sets_current() {
        assert!(current_scope().is_none());
        let scope = Scope::new();
        scope.run(|| assert!(current_scope().is_some()));
        assert!(current_scope().is_none());
    }

    #[test]
    fn test_remember_is_stable_across_passes() {
        let build = || {
            component("Holder", || {
                let count = remember_signal(|| 10u64);
                let label = remember(|| "fixed".to_string());
                leaf(format!("{label}:{}", count.get()))
            })
        };

        let first = {
            let _g = ComposeGuard::begin();
            build()
        };
        let path = runtime::component_paths("Holder").remove(0);
        assert_eq!(path, "/Holder#0");

        {
            let _g = ComposeGuard::begin();
            build();
        }
        assert_eq!(render_count(&path), Some(2));
        assert!(matches!(first.kind, ViewKind::Text { ref text, .. } if text == "fixed:10"));
    }

    #[test]
    fn test_write_invalidates_only_readers() {
        let shared = signal(0u64);
        let render = |shared: &Signal<u64>| {
            let _g = ComposeGuard::begin();
            let reader = component("Reader", || leaf(shared.get().to_string()));
            let bystander = component("Bystander", || leaf("static".into()));
            View::new(0, ViewKind::Column).with_children(vec![reader, bystander])
        };

        render(&shared);
        assert!(!runtime::has_invalidations());

        shared.update(|v| *v += 1);
        assert_eq!(runtime::take_invalidations(), vec!["/Reader#0".to_string()]);
        assert!(!runtime::has_invalidations());
    }

    #[test]
    fn test_sibling_components_get_distinct_state() {
        let counters: Rc<RefCell<Vec<Signal<u64>>>> = Rc::new(RefCell::new(Vec::new()));
        let owner = |counters: &Rc<RefCell<Vec<Signal<u64>>>>| {
            component("Owner", || {
                let count = remember_signal(|| 0u64);
                counters.borrow_mut().push(count.clone());
                leaf(count.get().to_string())
            })
        };

        {
            let _g = ComposeGuard::begin();
            owner(&counters);
            owner(&counters);
        }
        let (a, b) = {
            let list = counters.borrow();
            (list[0].clone(), list[1].clone())
        };
        assert!(!a.ptr_eq(&b));

        a.update(|c| *c += 1);
        assert_eq!(a.peek(), 1);
        assert_eq!(b.peek(), 0);
        assert_eq!(
            runtime::component_paths("Owner"),
            vec!["/Owner#0".to_string(), "/Owner#1".to_string()]
        );
    }

    #[test]
    fn test_unmount_releases_subscription_and_runs_cleanup() {
        let show = signal(true);
        let shared = atom_signal(&SHARED);
        let unmounted = Rc::new(Cell::new(false));

        let compose = |show: bool| {
            let _g = ComposeGuard::begin();
            if show {
                let unmounted = unmounted.clone();
                component("Subscriber", move || {
                    mount_effect(move || on_unmount(move || unmounted.set(true)));
                    let (v, _) = use_atom(&SHARED);
                    leaf(v.to_string())
                });
            }
        };

        compose(show.peek());
        assert_eq!(reactive::subscriber_count(shared.id()), 1);
        assert_eq!(mounted_components(), 1);

        show.set(false);
        compose(show.peek());
        assert!(unmounted.get());
        assert_eq!(mounted_components(), 0);
        assert_eq!(reactive::subscriber_count(shared.id()), 0);

        shared.update(|v| *v += 1);
        assert!(!runtime::has_invalidations());
    }

    #[test]
    fn test_mount_effect_runs_once() {
        let mounts = Rc::new(Cell::new(0));
        for _ in 0..3 {
            let _g = ComposeGuard::begin();
            let mounts = mounts.clone();
            component("Once", move || {
                mount_effect(move || {
                    mounts.set(mounts.get() + 1);
                    on_unmount(|| {})
                });
                leaf(String::new())
            });
        }
        assert_eq!(mounts.get(), 1);
    }

    #[test]
    fn test_atom_is_shared_between_readers() {
        let (first, set) = use_atom(&SHARED);
        assert_eq!(first, 0);
        set.update(|v| *v += 1);
        set.update(|v| *v += 1);

        let (second, _) = use_atom(&SHARED);
        assert_eq!(second, 2);
        assert!(atom_signal(&SHARED).ptr_eq(&atom_signal(&SHARED)));
    }

    #[test]
    fn test_remember_state_persists_and_with_subscribes() {
        let name = signal(String::from("ripple"));
        let build = |name: &Signal<String>| {
            component("Borrower", || {
                let renders = remember_state(|| 0u32);
                *renders.borrow_mut() += 1;
                let len = name.with(|n| n.len());
                leaf(format!("{len}:{}", renders.borrow()))
            })
        };

        let first = {
            let _g = ComposeGuard::begin();
            build(&name)
        };
        let second = {
            let _g = ComposeGuard::begin();
            build(&name)
        };
        assert!(matches!(first.kind, ViewKind::Text { ref text, .. } if text == "6:1"));
        assert!(matches!(second.kind, ViewKind::Text { ref text, .. } if text == "6:2"));
        assert_eq!(reactive::subscriber_count(name.id()), 1);

        name.set("reactive".into());
        assert_eq!(runtime::take_invalidations(), vec!["/Borrower#0".to_string()]);
        assert_eq!(name.with(|n| n.clone()), "reactive");
    }

    #[test]
    fn test_atoms_with_distinct_keys_are_independent() {
        assert_eq!(GREETING.key(), "tests.greeting");
        let (greeting, set_greeting) = use_atom(&GREETING);
        assert_eq!(greeting, "hi");
        set_greeting.set("hello".into());
        assert_eq!(atom_signal(&SHARED).peek(), 0);
        assert_eq!(atom_signal(&GREETING).peek(), "hello");
    }

    #[test]
    fn test_dispose_runs_at_most_once() {
        let runs = Rc::new(Cell::new(0));
        let d = Dispose::new({
            let runs = runs.clone();
            move || runs.set(runs.get() + 1)
        });
        d.run();
        d.clone().run();
        assert_eq!(runs.get(), 1);
    }
}
