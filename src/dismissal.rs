//! Dismissal: fade a widget out, hide it, and notify the consumer.
//!
//! ```text
//!   Active ──dismiss──▶ Dismissing ──fade complete──▶ Hidden
//!      │                    │
//!      └──── teardown ──────┴──▶ Destroyed
//! ```
//!
//! `on_deactivate` runs synchronously inside [`DismissalController::dismiss`],
//! before the fade is scheduled. When the fade completes the widget's liveness
//! is checked first: a destroyed widget is left untouched and `on_deactivated`
//! never runs for it.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::event::interaction::Interaction;
use crate::event::timer::Scheduler;
use crate::widget::instance::WidgetInstance;
use crate::widget::traits::Hook;

/// Fade length used unless configured otherwise.
pub const DEFAULT_FADE: Duration = Duration::from_millis(300);

// ---------------------------------------------------------------------------
// Hooks
// ---------------------------------------------------------------------------

/// The pre- and post-dismissal hooks. Both default to no-ops.
#[derive(Clone, Default)]
pub struct DismissHooks {
    on_deactivate: Option<Hook>,
    on_deactivated: Option<Hook>,
}

impl DismissHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called before the fade starts (builder).
    pub fn on_deactivate(mut self, hook: impl Fn(&WidgetInstance, &Interaction) + 'static) -> Self {
        self.on_deactivate = Some(Rc::new(hook));
        self
    }

    /// Called after the widget has been hidden (builder).
    pub fn on_deactivated(mut self, hook: impl Fn(&WidgetInstance, &Interaction) + 'static) -> Self {
        self.on_deactivated = Some(Rc::new(hook));
        self
    }

    fn deactivate(&self, widget: &WidgetInstance, interaction: &Interaction) {
        if let Some(hook) = &self.on_deactivate {
            hook(widget, interaction);
        }
    }

    fn deactivated(&self, widget: &WidgetInstance, interaction: &Interaction) {
        if let Some(hook) = &self.on_deactivated {
            hook(widget, interaction);
        }
    }
}

impl fmt::Debug for DismissHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DismissHooks")
            .field("on_deactivate", &self.on_deactivate.is_some())
            .field("on_deactivated", &self.on_deactivated.is_some())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Phases and outcomes
// ---------------------------------------------------------------------------

/// Where a widget is in its dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissPhase {
    Active,
    Dismissing,
    Hidden,
    Destroyed,
}

/// Result of a dismiss request. Callers are free to ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissOutcome {
    /// Pre-hook ran and the fade is scheduled.
    Started,
    NotDismissible,
    /// A fade is already running or the widget is already hidden.
    AlreadyDismissed,
    Destroyed,
}

/// Result of a fade completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeOutcome {
    /// Widget hidden and post-hook called.
    Hidden,
    /// Widget destroyed mid-fade; nothing touched.
    Suppressed,
    /// No fade was in flight.
    Stale,
}

// ---------------------------------------------------------------------------
// DismissalController
// ---------------------------------------------------------------------------

/// Drives one widget through its dismissal.
#[derive(Debug, Clone)]
pub struct DismissalController {
    phase: Rc<Cell<DismissPhase>>,
    fade: Duration,
}

impl DismissalController {
    pub fn new() -> Self {
        Self {
            phase: Rc::new(Cell::new(DismissPhase::Active)),
            fade: DEFAULT_FADE,
        }
    }

    pub fn fade_duration(&self) -> Duration {
        self.fade
    }

    pub fn set_fade_duration(&mut self, fade: Duration) {
        self.fade = fade;
    }

    /// Current phase. Teardown takes precedence over everything but `Hidden`.
    pub fn phase(&self, widget: &WidgetInstance) -> DismissPhase {
        match self.phase.get() {
            DismissPhase::Hidden => DismissPhase::Hidden,
            _ if widget.is_destroyed() => DismissPhase::Destroyed,
            phase => phase,
        }
    }

    /// Start dismissing `widget`.
    ///
    /// Invalid requests are silent no-ops; the outcome only says why.
    pub fn dismiss(
        &self,
        widget: &WidgetInstance,
        hooks: &DismissHooks,
        interaction: &Interaction,
        scheduler: &mut dyn Scheduler,
    ) -> DismissOutcome {
        match self.phase(widget) {
            DismissPhase::Active => {}
            DismissPhase::Destroyed => {
                tracing::debug!("dismiss on destroyed widget ignored");
                return DismissOutcome::Destroyed;
            }
            DismissPhase::Dismissing | DismissPhase::Hidden => {
                tracing::debug!("dismiss already in progress or done");
                return DismissOutcome::AlreadyDismissed;
            }
        }
        if !widget.dismissible() {
            tracing::debug!("dismiss on non-dismissible widget ignored");
            return DismissOutcome::NotDismissible;
        }

        self.phase.set(DismissPhase::Dismissing);
        hooks.deactivate(widget, interaction);

        let controller = self.clone();
        let widget = widget.clone();
        let hooks = hooks.clone();
        let interaction = interaction.clone();
        scheduler.schedule(
            self.fade,
            Box::new(move || {
                controller.complete(&widget, &hooks, &interaction);
            }),
        );
        DismissOutcome::Started
    }

    /// Finish a fade. Safe to call any number of times.
    pub fn complete(
        &self,
        widget: &WidgetInstance,
        hooks: &DismissHooks,
        interaction: &Interaction,
    ) -> FadeOutcome {
        if self.phase.get() != DismissPhase::Dismissing {
            return FadeOutcome::Stale;
        }
        let completed = widget.liveness().guard(|| {
            self.phase.set(DismissPhase::Hidden);
            widget.hide();
            hooks.deactivated(widget, interaction);
        });
        match completed {
            Some(()) => FadeOutcome::Hidden,
            None => {
                tracing::debug!("fade completed after teardown, suppressed");
                FadeOutcome::Suppressed
            }
        }
    }
}

impl Default for DismissalController {
    fn default() -> Self {
        Self::new()
    }
}
