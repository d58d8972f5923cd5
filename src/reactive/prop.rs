//! `Prop<T>` and the thread-local reactive runtime.
//!
//! Widget properties live in a single-threaded runtime owned by the current
//! thread. Reading a prop inside a watcher (or a derived computation) subscribes
//! that watcher; writing the prop re-runs every subscriber. Handles are `Copy`
//! and only store an id, so they can be captured freely by hooks and scheduled
//! callbacks without borrowing the widget that created them.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;

use slotmap::{new_key_type, SlotMap};

// ---------------------------------------------------------------------------
// IDs
// ---------------------------------------------------------------------------

new_key_type! {
    /// Identifies a prop slot inside the runtime.
    pub struct PropId;

    /// Identifies a watcher slot inside the runtime.
    pub struct WatchId;
}

// ---------------------------------------------------------------------------
// Runtime internals
// ---------------------------------------------------------------------------

struct PropSlot {
    value: Box<dyn Any>,
    subscribers: HashSet<WatchId>,
}

struct WatchSlot {
    /// Taken out while running so the runtime is not borrowed across user code.
    callback: Option<Box<dyn FnMut()>>,
    sources: HashSet<PropId>,
}

pub(crate) struct Runtime {
    props: SlotMap<PropId, PropSlot>,
    watchers: SlotMap<WatchId, WatchSlot>,
    /// Watcher currently executing; reads are attributed to it.
    observer: Option<WatchId>,
    batch_depth: usize,
    queued: Vec<WatchId>,
    flushing: bool,
}

impl Runtime {
    fn new() -> Self {
        Self {
            props: SlotMap::with_key(),
            watchers: SlotMap::with_key(),
            observer: None,
            batch_depth: 0,
            queued: Vec::new(),
            flushing: false,
        }
    }

    fn is_active(&self, id: WatchId) -> bool {
        self.watchers.contains_key(id)
    }

    /// Remove a watcher and its subscriptions. The slot is returned so the
    /// caller can drop its callback after releasing the runtime.
    fn detach_watcher(&mut self, id: WatchId) -> Option<WatchSlot> {
        let slot = self.watchers.remove(id)?;
        for source in &slot.sources {
            if let Some(prop) = self.props.get_mut(*source) {
                prop.subscribers.remove(&id);
            }
        }
        Some(slot)
    }

    /// Remove a prop and forget it in every watcher that read it.
    fn detach_prop(&mut self, id: PropId) -> Option<Box<dyn Any>> {
        let slot = self.props.remove(id)?;
        for watcher in &slot.subscribers {
            if let Some(watcher) = self.watchers.get_mut(*watcher) {
                watcher.sources.remove(&id);
            }
        }
        Some(slot.value)
    }
}

thread_local! {
    pub(crate) static RUNTIME: RefCell<Runtime> = RefCell::new(Runtime::new());
}

// ---------------------------------------------------------------------------
// Prop
// ---------------------------------------------------------------------------

/// Create a reactive property holding `initial`.
pub fn create_prop<T: 'static>(initial: T) -> Prop<T> {
    let id = RUNTIME.with(|rt| {
        let mut rt = rt.borrow_mut();
        rt.props.insert(PropSlot {
            value: Box::new(initial),
            subscribers: HashSet::new(),
        })
    });
    Prop {
        id,
        _marker: PhantomData,
    }
}

/// A read/write reactive property. `Copy`, only stores an id.
pub struct Prop<T: 'static> {
    id: PropId,
    _marker: PhantomData<T>,
}

impl<T: 'static> Copy for Prop<T> {}
impl<T: 'static> Clone for Prop<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> fmt::Debug for Prop<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prop").field("id", &self.id).finish()
    }
}

impl<T: 'static> Prop<T> {
    /// The runtime slot backing this prop.
    pub fn id(&self) -> PropId {
        self.id
    }

    /// Clone the current value, subscribing the running watcher (if any).
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(T::clone)
    }

    /// Borrow the current value, subscribing the running watcher (if any).
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        RUNTIME.with(|rt| {
            {
                let mut rt = rt.borrow_mut();
                let rt = &mut *rt;
                if let Some(observer) = rt.observer {
                    if let Some(watcher) = rt.watchers.get_mut(observer) {
                        watcher.sources.insert(self.id);
                        rt.props[self.id].subscribers.insert(observer);
                    }
                }
            }
            let rt = rt.borrow();
            f(rt.props[self.id]
                .value
                .downcast_ref::<T>()
                .expect("prop type mismatch"))
        })
    }

    /// Clone the current value without subscribing anything.
    pub fn get_untracked(&self) -> T
    where
        T: Clone,
    {
        RUNTIME.with(|rt| {
            rt.borrow().props[self.id]
                .value
                .downcast_ref::<T>()
                .expect("prop type mismatch")
                .clone()
        })
    }

    /// Replace the value and notify subscribers.
    pub fn set(&self, value: T) {
        self.update(|slot| *slot = value);
    }

    /// Mutate the value in place and notify subscribers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let subscribers = RUNTIME.with(|rt| {
            let mut rt = rt.borrow_mut();
            let slot = &mut rt.props[self.id];
            f(slot.value.downcast_mut::<T>().expect("prop type mismatch"));
            slot.subscribers.iter().copied().collect::<Vec<_>>()
        });
        notify(subscribers);
    }
}

// ---------------------------------------------------------------------------
// Watchers
// ---------------------------------------------------------------------------

/// Run `f` now and again whenever a prop it read changes.
///
/// Returns a [`WatchId`] that can be passed to [`stop_watch`].
pub fn watch(f: impl FnMut() + 'static) -> WatchId {
    let id = RUNTIME.with(|rt| {
        let mut rt = rt.borrow_mut();
        rt.watchers.insert(WatchSlot {
            callback: Some(Box::new(f)),
            sources: HashSet::new(),
        })
    });
    run_watcher(id);
    id
}

/// Deactivate a watcher and detach it from every prop it was reading.
pub fn stop_watch(id: WatchId) {
    let slot = RUNTIME.with(|rt| rt.borrow_mut().detach_watcher(id));
    // Dropped outside the borrow: the callback may own handles that release
    // runtime slots of their own.
    drop(slot);
}

/// Free a prop. Reading it afterwards panics; writes to other props are
/// unaffected.
pub fn dispose_prop(id: PropId) {
    let value = RUNTIME.with(|rt| rt.borrow_mut().detach_prop(id));
    drop(value);
}

/// Free `props` and `watchers` when the runtime is reachable, and skip them
/// when it is already borrowed or torn down. Used from `Drop` impls.
pub(crate) fn release(props: &[PropId], watchers: &[WatchId]) {
    let released = RUNTIME.try_with(|rt| {
        let mut rt = rt.try_borrow_mut().ok()?;
        let watchers: Vec<WatchSlot> = watchers
            .iter()
            .filter_map(|id| rt.detach_watcher(*id))
            .collect();
        let values: Vec<Box<dyn Any>> = props
            .iter()
            .filter_map(|id| rt.detach_prop(*id))
            .collect();
        Some((watchers, values))
    });
    drop(released);
}

/// Coalesce prop writes made inside `f`; subscribers run once afterwards.
pub fn batch(f: impl FnOnce()) {
    RUNTIME.with(|rt| rt.borrow_mut().batch_depth += 1);

    f();

    let pending = RUNTIME.with(|rt| {
        let mut rt = rt.borrow_mut();
        rt.batch_depth -= 1;
        if rt.batch_depth > 0 {
            return Vec::new();
        }
        let mut seen = HashSet::new();
        rt.queued.drain(..).filter(|id| seen.insert(*id)).collect()
    });
    notify(pending);
}

/// Evaluate `f` with no observer, so reads inside it subscribe nothing.
pub(crate) fn untracked<R>(f: impl FnOnce() -> R) -> R {
    let previous = RUNTIME.with(|rt| rt.borrow_mut().observer.take());
    let result = f();
    RUNTIME.with(|rt| rt.borrow_mut().observer = previous);
    result
}

fn run_watcher(id: WatchId) {
    let callback = RUNTIME.with(|rt| {
        let mut rt = rt.borrow_mut();
        let rt = &mut *rt;
        let watcher = rt.watchers.get_mut(id)?;
        let sources: Vec<PropId> = watcher.sources.drain().collect();
        let callback = watcher.callback.take();
        for source in sources {
            if let Some(prop) = rt.props.get_mut(source) {
                prop.subscribers.remove(&id);
            }
        }
        callback
    });

    let Some(mut callback) = callback else {
        return;
    };

    let previous = RUNTIME.with(|rt| rt.borrow_mut().observer.replace(id));
    callback();
    let stopped = RUNTIME.with(|rt| {
        let mut rt = rt.borrow_mut();
        rt.observer = previous;
        match rt.watchers.get_mut(id) {
            Some(watcher) => {
                watcher.callback = Some(callback);
                None
            }
            None => Some(callback),
        }
    });
    drop(stopped);
}

fn notify(subscribers: Vec<WatchId>) {
    if subscribers.is_empty() {
        return;
    }

    // Inside a batch or an ongoing flush: queue and let the outer loop run them.
    let deferred = RUNTIME.with(|rt| {
        let mut rt = rt.borrow_mut();
        if rt.batch_depth > 0 || rt.flushing {
            rt.queued.extend(subscribers.iter().copied());
            true
        } else {
            rt.flushing = true;
            false
        }
    });
    if deferred {
        return;
    }

    let mut queue = subscribers;
    while !queue.is_empty() {
        for id in std::mem::take(&mut queue) {
            if RUNTIME.with(|rt| rt.borrow().is_active(id)) {
                run_watcher(id);
            }
        }
        RUNTIME.with(|rt| queue.append(&mut rt.borrow_mut().queued));
    }

    RUNTIME.with(|rt| rt.borrow_mut().flushing = false);
}

#[cfg(test)]
pub(crate) fn reset_runtime() {
    let previous = RUNTIME.with(|rt| std::mem::replace(&mut *rt.borrow_mut(), Runtime::new()));
    drop(previous);
}

/// Number of live props and watchers on this thread.
#[cfg(test)]
pub(crate) fn runtime_counts() -> (usize, usize) {
    RUNTIME.with(|rt| {
        let rt = rt.borrow();
        (rt.props.len(), rt.watchers.len())
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() {
        reset_runtime();
    }

    #[test]
    fn prop_reads_initial_value() {
        setup();
        let brand = create_prop(String::from("primary"));
        assert_eq!(brand.get(), "primary");
    }

    #[test]
    fn set_replaces_value() {
        setup();
        let outline = create_prop(false);
        outline.set(true);
        assert!(outline.get());
    }

    #[test]
    fn update_mutates_in_place() {
        setup();
        let classes = create_prop(vec!["btn"]);
        classes.update(|c| c.push("btn-link"));
        assert_eq!(classes.get(), vec!["btn", "btn-link"]);
    }

    #[test]
    fn watch_runs_immediately_and_on_change() {
        setup();
        let brand = create_prop(String::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_c = seen.clone();
        watch(move || seen_c.borrow_mut().push(brand.get()));
        brand.set("danger".into());
        assert_eq!(*seen.borrow(), vec![String::new(), "danger".to_owned()]);
    }

    #[test]
    fn untracked_read_does_not_subscribe() {
        setup();
        let visible = create_prop(true);
        let runs = Rc::new(Cell::new(0));
        let runs_c = runs.clone();
        watch(move || {
            let _ = visible.get_untracked();
            runs_c.set(runs_c.get() + 1);
        });
        visible.set(false);
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn watcher_retracks_conditional_reads() {
        setup();
        let outline = create_prop(false);
        let solid = create_prop("btn-primary");
        let outlined = create_prop("btn-outline-primary");
        let last = Rc::new(Cell::new(""));
        let last_c = last.clone();
        watch(move || {
            let class = if outline.get() { outlined.get() } else { solid.get() };
            last_c.set(class);
        });
        assert_eq!(last.get(), "btn-primary");

        outline.set(true);
        outlined.set("btn-outline-danger");
        assert_eq!(last.get(), "btn-outline-danger");

        // No longer read, so no re-run.
        solid.set("btn-info");
        assert_eq!(last.get(), "btn-outline-danger");
    }

    #[test]
    fn stopped_watcher_never_reruns() {
        setup();
        let brand = create_prop(0);
        let runs = Rc::new(Cell::new(0));
        let runs_c = runs.clone();
        let id = watch(move || {
            let _ = brand.get();
            runs_c.set(runs_c.get() + 1);
        });
        brand.set(1);
        stop_watch(id);
        brand.set(2);
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn batch_runs_subscribers_once() {
        setup();
        let brand = create_prop("");
        let outline = create_prop(false);
        let runs = Rc::new(Cell::new(0));
        let runs_c = runs.clone();
        watch(move || {
            let _ = (brand.get(), outline.get());
            runs_c.set(runs_c.get() + 1);
        });
        batch(|| {
            brand.set("info");
            outline.set(true);
            batch(|| brand.set("warning"));
        });
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn write_inside_watcher_propagates() {
        setup();
        let brand = create_prop("primary");
        let class = create_prop(String::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        watch(move || class.set(format!("alert-{}", brand.get())));
        let seen_c = seen.clone();
        watch(move || seen_c.borrow_mut().push(class.get()));

        brand.set("danger");
        assert_eq!(seen.borrow().last().map(String::as_str), Some("alert-danger"));
    }

    #[test]
    fn debug_shows_id() {
        setup();
        let prop = create_prop(1);
        let dbg = format!("{prop:?}");
        assert!(dbg.contains("Prop"));
        assert!(dbg.contains("id"));
    }

    #[test]
    fn stopped_watcher_frees_its_slot() {
        setup();
        let brand = create_prop(0);
        let id = watch(move || {
            let _ = brand.get();
        });
        assert_eq!(runtime_counts(), (1, 1));
        stop_watch(id);
        assert_eq!(runtime_counts(), (1, 0));
        brand.set(1);
    }

    #[test]
    fn disposed_props_are_reused() {
        setup();
        let first = create_prop(String::from("primary"));
        let runs = Rc::new(Cell::new(0));
        let runs_c = runs.clone();
        watch(move || {
            let _ = first.get();
            runs_c.set(runs_c.get() + 1);
        });
        dispose_prop(first.id());
        assert_eq!(runtime_counts(), (0, 1));

        for _ in 0..100 {
            let prop = create_prop(false);
            dispose_prop(prop.id());
        }
        let second = create_prop(1);
        assert_ne!(first.id(), second.id());
        second.set(2);
        assert_eq!(runs.get(), 1);
        assert_eq!(runtime_counts(), (1, 1));
    }

    #[test]
    fn release_skips_while_runtime_is_borrowed() {
        setup();
        let prop = create_prop(0);
        RUNTIME.with(|rt| {
            let _guard = rt.borrow();
            release(&[prop.id()], &[]);
        });
        assert_eq!(runtime_counts(), (1, 0));
        release(&[prop.id()], &[]);
        assert_eq!(runtime_counts(), (0, 0));
    }
}
