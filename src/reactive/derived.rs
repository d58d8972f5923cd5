//! Derived values: memoised computations over props.
//!
//! A [`Derived`] re-runs its computation whenever a prop it read changes, and
//! only notifies its own readers when the computed value actually differs. The
//! style binder uses these to keep brand classes in step with widget props.
//!
//! ```ignore
//! let brand = create_prop(String::from("danger"));
//! let class = create_derived(move || derive_class(&brand.get(), false, "alert"));
//! assert_eq!(class.get().as_deref(), Some("alert-danger"));
//! ```

use std::fmt;

use super::prop::{create_prop, untracked, watch, Prop, PropId, WatchId};

/// Read-only handle to a memoised computation. `Copy`.
pub struct Derived<T: 'static> {
    value: Prop<T>,
    watcher: WatchId,
}

impl<T: 'static> Copy for Derived<T> {}
impl<T: 'static> Clone for Derived<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> fmt::Debug for Derived<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Derived")
            .field("value", &self.value)
            .field("watcher", &self.watcher)
            .finish()
    }
}

impl<T: 'static> Derived<T> {
    /// Current value; subscribes the running watcher (if any).
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value.get()
    }

    /// Borrow the current value; subscribes the running watcher (if any).
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.value.with(f)
    }

    /// Current value without subscribing.
    pub fn get_untracked(&self) -> T
    where
        T: Clone,
    {
        self.value.get_untracked()
    }

    /// The prop slot holding the memoised value.
    pub fn value_id(&self) -> PropId {
        self.value.id()
    }

    /// The watcher keeping this value up to date.
    pub fn watcher(&self) -> WatchId {
        self.watcher
    }
}

/// Create a memoised value computed by `f`.
pub fn create_derived<T: Clone + PartialEq + 'static>(
    mut f: impl FnMut() -> T + 'static,
) -> Derived<T> {
    // Seed without an observer so a parent watcher does not pick up our reads.
    let value = create_prop(untracked(&mut f));
    let watcher = watch(move || {
        let next = f();
        if untracked(|| value.with(|current| current != &next)) {
            value.set(next);
        }
    });
    Derived { value, watcher }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::prop::{batch, reset_runtime, stop_watch};
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() {
        reset_runtime();
    }

    #[test]
    fn derived_tracks_source() {
        setup();
        let brand = create_prop("primary");
        let class = create_derived(move || format!("btn-{}", brand.get()));
        assert_eq!(class.get(), "btn-primary");
        brand.set("danger");
        assert_eq!(class.get(), "btn-danger");
    }

    #[test]
    fn derived_skips_unchanged_output() {
        setup();
        let brand = create_prop("primary");
        let has_brand = create_derived(move || !brand.get().is_empty());
        let runs = Rc::new(Cell::new(0));
        let runs_c = runs.clone();
        watch(move || {
            let _ = has_brand.get();
            runs_c.set(runs_c.get() + 1);
        });
        assert_eq!(runs.get(), 1);

        brand.set("danger");
        assert_eq!(runs.get(), 1);

        brand.set("");
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn derived_chain() {
        setup();
        let brand = create_prop("info");
        let class = create_derived(move || format!("alert-{}", brand.get()));
        let selector = create_derived(move || format!(".{}", class.get()));
        brand.set("warning");
        assert_eq!(selector.get(), ".alert-warning");
    }

    #[test]
    fn derived_over_two_props_in_batch() {
        setup();
        let brand = create_prop("primary");
        let outline = create_prop(false);
        let class = create_derived(move || {
            if outline.get() {
                format!("btn-outline-{}", brand.get())
            } else {
                format!("btn-{}", brand.get())
            }
        });
        batch(|| {
            brand.set("success");
            outline.set(true);
        });
        assert_eq!(class.get(), "btn-outline-success");
    }

    #[test]
    fn stopping_watcher_freezes_value() {
        setup();
        let brand = create_prop("primary");
        let class = create_derived(move || format!("card-{}", brand.get()));
        stop_watch(class.watcher());
        brand.set("danger");
        assert_eq!(class.get_untracked(), "card-primary");
    }
}
