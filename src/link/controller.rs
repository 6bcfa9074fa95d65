//! Per-group state and the re-entrancy-guarded pass trigger.

use super::config::{LinkDefaults, Policy, SettingsPatch, StoredSettings};
use super::engine;
use crate::slider::SliderRef;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// One linked member set: settings, the defaults snapshot taken at attach,
/// and the guard flag that keeps the group's own writes from re-triggering
/// a pass.
pub(crate) struct LinkedGroup {
    pub(crate) members: Vec<SliderRef>,
    pub(crate) settings: RefCell<StoredSettings>,
    defaults: LinkDefaults,
    namespace: String,
    redistributing: Cell<bool>,
}

/// Clears the guard flag on every exit path, including unwinding.
struct FlagReset<'a>(&'a Cell<bool>);

impl Drop for FlagReset<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl LinkedGroup {
    pub(crate) fn new(
        members: Vec<SliderRef>,
        settings: SettingsPatch,
        defaults: LinkDefaults,
        namespace: String,
    ) -> Rc<Self> {
        let mut stored = StoredSettings::default();
        stored.merge(settings);
        Rc::new(Self {
            members,
            settings: RefCell::new(stored),
            defaults,
            namespace,
            redistributing: Cell::new(false),
        })
    }

    /// Subscribes a namespaced observer on every member.
    ///
    /// Observers hold only a weak back-reference, so dropping the group's
    /// last strong handle (detach) tears the whole graph down.
    pub(crate) fn observe(self: &Rc<Self>) {
        for (index, member) in self.members.iter().enumerate() {
            let group = Rc::downgrade(self);
            member.subscribe(
                &self.namespace,
                Rc::new(move |_value| {
                    if let Some(group) = group.upgrade() {
                        group.run(index);
                    }
                }),
            );
        }
    }

    /// Removes this group's observers from every member.
    pub(crate) fn release(&self) {
        for member in &self.members {
            member.unsubscribe(&self.namespace);
        }
    }

    /// Position of a slider within the member set, by widget identity.
    pub(crate) fn position_of(&self, slider: &SliderRef) -> Option<usize> {
        let key = widget_key(slider);
        self.members.iter().position(|m| widget_key(m) == key)
    }

    /// Runs one redistribution pass with `origin` as the changed member.
    ///
    /// Check-and-sets the guard first: notifications arriving while a pass
    /// is underway (from the pass's own writes) are ignored. The flag is
    /// cleared unconditionally when the pass ends, early-returns, or panics.
    pub(crate) fn run(&self, origin: usize) {
        if self.redistributing.replace(true) {
            return;
        }
        let _reset = FlagReset(&self.redistributing);

        let (total, policy) = self.resolved();
        engine::run_pass(&self.members, origin, total, policy);
    }

    /// Effective settings: stored overrides, falling back to the defaults
    /// snapshot where an option is absent or was cleared.
    fn resolved(&self) -> (f64, Policy) {
        let stored = self.settings.borrow();
        (
            stored.total.unwrap_or(self.defaults.total),
            stored.policy.unwrap_or(self.defaults.policy),
        )
    }
}

/// Identity of a widget behind a shared handle: the thin data pointer.
pub(crate) fn widget_key(slider: &SliderRef) -> usize {
    Rc::as_ptr(slider) as *const () as usize
}
