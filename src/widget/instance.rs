//! The base capability set shared by every widget.
//!
//! [`WidgetInstance`] bundles the reactive props all widgets carry (brand,
//! outline, dismissible, visibility, test id) with the widget's [`Liveness`].
//! Widgets compose it rather than extend it, and hand clones of it to hooks and
//! deferred callbacks; clones share the same props and liveness.
//!
//! Every prop and watcher a widget creates through its instance belongs to the
//! instance's [`Scope`]. [`WidgetInstance::destroy`] stops the watchers; the
//! props are freed once the last clone is dropped.

use std::rc::Rc;

use crate::reactive::{create_prop, Derived, Prop, Scope, WatchId};
use crate::widget::lifecycle::Liveness;

/// Props and lifecycle flags of one widget instance.
#[derive(Debug, Clone)]
pub struct WidgetInstance {
    brand: Prop<String>,
    outline: Prop<bool>,
    dismissible: Prop<bool>,
    visible: Prop<bool>,
    test_id: Prop<Option<String>>,
    liveness: Liveness,
    scope: Rc<Scope>,
}

impl WidgetInstance {
    /// A visible, live instance with no brand and everything else off.
    pub fn new() -> Self {
        let scope = Rc::new(Scope::new());
        Self {
            brand: scope.own_prop(create_prop(String::new())),
            outline: scope.own_prop(create_prop(false)),
            dismissible: scope.own_prop(create_prop(false)),
            visible: scope.own_prop(create_prop(true)),
            test_id: scope.own_prop(create_prop(None)),
            liveness: Liveness::new(),
            scope,
        }
    }

    /// Tie a widget-specific prop to this instance.
    pub fn own_prop<T: 'static>(&self, prop: Prop<T>) -> Prop<T> {
        self.scope.own_prop(prop)
    }

    /// Tie a derived value to this instance; it stops updating on destroy.
    pub fn own_derived<T: 'static>(&self, derived: Derived<T>) -> Derived<T> {
        self.scope.own_derived(derived)
    }

    /// Tie a watcher to this instance; it is stopped on destroy.
    pub fn own_watch(&self, id: WatchId) -> WatchId {
        self.scope.own_watch(id)
    }

    /// Watchers still running on behalf of this widget.
    pub fn active_watchers(&self) -> usize {
        self.scope.watcher_count()
    }

    /// Current brand; empty when unbranded.
    pub fn brand(&self) -> String {
        self.brand.get()
    }

    pub fn set_brand(&self, brand: impl Into<String>) {
        self.brand.set(brand.into());
    }

    /// The brand prop, for derivations.
    pub fn brand_prop(&self) -> Prop<String> {
        self.brand
    }

    pub fn outline(&self) -> bool {
        self.outline.get()
    }

    pub fn set_outline(&self, outline: bool) {
        self.outline.set(outline);
    }

    /// The outline prop, for derivations.
    pub fn outline_prop(&self) -> Prop<bool> {
        self.outline
    }

    pub fn dismissible(&self) -> bool {
        self.dismissible.get()
    }

    pub fn set_dismissible(&self, dismissible: bool) {
        self.dismissible.set(dismissible);
    }

    pub fn test_id(&self) -> Option<String> {
        self.test_id.get()
    }

    pub fn set_test_id(&self, test_id: Option<String>) {
        self.test_id.set(test_id);
    }

    /// The test id prop, for derivations.
    pub fn test_id_prop(&self) -> Prop<Option<String>> {
        self.test_id
    }

    /// Whether the widget is visible. Tracked.
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// Hide the widget. Visibility never comes back within one instance.
    ///
    /// Returns `true` if this call changed the visibility.
    pub fn hide(&self) -> bool {
        if !self.visible.get_untracked() {
            return false;
        }
        self.visible.set(false);
        true
    }

    /// The shared liveness flag.
    pub fn liveness(&self) -> &Liveness {
        &self.liveness
    }

    pub fn is_destroyed(&self) -> bool {
        self.liveness.is_destroyed()
    }

    /// Framework teardown: the widget's element is gone.
    ///
    /// Owned watchers stop here. Props stay readable for hooks and handles
    /// still holding a clone.
    pub fn destroy(&self) {
        self.liveness.destroy();
        self.scope.stop();
    }
}

impl Default for WidgetInstance {
    fn default() -> Self {
        Self::new()
    }
}
