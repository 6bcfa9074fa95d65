//! The linked-sliders manager: defaults, registry, and the public surface.

use super::config::{LinkDefaults, Policy, SettingsPatch};
use super::controller::{widget_key, LinkedGroup};
use crate::slider::SliderRef;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

/// Attach failure. Reconfigure and detach never fail; on an unattached
/// slider they are silent no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinkError {
    /// The attach target does not expose slider behavior.
    #[error("slider functionality required before linking")]
    SliderRequired,

    /// The attach target is missing from the linked member set it was
    /// given, so it could never be the origin of a pass.
    #[error("attach target must be part of the linked member set")]
    OriginNotMember,
}

/// A linked-group operation addressed to one slider.
///
/// Equivalent to calling the corresponding [`LinkedSliders`] method
/// directly; useful when operations are queued or routed generically.
#[derive(Clone)]
pub enum Command {
    /// Attach linked-group behavior, with settings and the full member set.
    Attach {
        settings: SettingsPatch,
        members: Vec<SliderRef>,
    },

    /// Merge a settings patch and re-run one pass.
    Reconfigure { settings: SettingsPatch },

    /// Remove linked-group behavior, leaving slider values untouched.
    Detach,
}

/// Owns the global defaults and the registry of attached groups.
///
/// # Examples
///
/// ```ignore
/// let mut manager = LinkedSliders::new();
/// manager.set_defaults(SettingsPatch::new().with_policy(Policy::All));
///
/// let members = vec![red.clone(), green.clone(), blue.clone()];
/// manager.attach(&red, SettingsPatch::new().with_total(255.0), &members)?;
///
/// // Dragging any member now rebalances the others; later:
/// manager.detach(&red);
/// ```
pub struct LinkedSliders {
    defaults: LinkDefaults,
    groups: HashMap<usize, Rc<LinkedGroup>>,
    next_group_id: u64,
}

impl LinkedSliders {
    pub fn new() -> Self {
        Self {
            defaults: LinkDefaults::default(),
            groups: HashMap::new(),
            next_group_id: 0,
        }
    }

    /// Overrides the defaults used by all subsequently attached groups.
    ///
    /// `Patch::Clear` on a field restores its built-in default
    /// (total 100, policy [`Policy::Next`]). Groups already attached keep
    /// the defaults snapshot they were created with.
    pub fn set_defaults(&mut self, patch: SettingsPatch) -> &mut Self {
        self.defaults.apply(patch);
        self
    }

    /// Current manager-wide defaults.
    pub fn defaults(&self) -> LinkDefaults {
        self.defaults
    }

    /// Whether linked-group behavior is attached to this slider.
    pub fn is_attached(&self, slider: &SliderRef) -> bool {
        self.groups.contains_key(&widget_key(slider))
    }

    /// Attaches linked-group behavior to `slider`.
    ///
    /// `members` is the full linked set, `slider` included; an empty set is
    /// shorthand for a group of just `slider`. Every member is registered
    /// and observed, so attaching again through any of them is a no-op and
    /// reconfigure/detach can be addressed to any of them.
    ///
    /// Ends with one redistribution pass seeded as if `slider` had just
    /// changed, bringing an inconsistent initial configuration into
    /// compliance with the total immediately.
    pub fn attach(
        &mut self,
        slider: &SliderRef,
        settings: SettingsPatch,
        members: &[SliderRef],
    ) -> Result<(), LinkError> {
        if !slider.is_slider() {
            return Err(LinkError::SliderRequired);
        }
        if self.is_attached(slider) {
            return Ok(());
        }

        let members: Vec<SliderRef> = if members.is_empty() {
            vec![Rc::clone(slider)]
        } else {
            members.to_vec()
        };

        let namespace = format!("linked-sliders-{}", self.next_group_id);
        self.next_group_id += 1;

        let group = LinkedGroup::new(members, settings, self.defaults, namespace);
        let origin = group.position_of(slider).ok_or(LinkError::OriginNotMember)?;

        for member in &group.members {
            self.groups.insert(widget_key(member), Rc::clone(&group));
        }
        group.observe();
        group.run(origin);
        Ok(())
    }

    /// Merges `settings` into the group attached to `slider`, then re-runs
    /// one pass with `slider` as origin. No-op if `slider` is not attached.
    ///
    /// The merge honors the clear sentinel: a field set to
    /// [`Patch::Clear`](super::Patch::Clear) is removed from the stored
    /// settings rather than skipped, and later passes fall back to the
    /// group's defaults for it.
    pub fn reconfigure(&mut self, slider: &SliderRef, settings: SettingsPatch) {
        let Some(group) = self.groups.get(&widget_key(slider)) else {
            return;
        };
        group.settings.borrow_mut().merge(settings);
        if let Some(origin) = group.position_of(slider) {
            group.run(origin);
        }
    }

    /// Single-option sugar for [`reconfigure`](Self::reconfigure).
    pub fn set_total(&mut self, slider: &SliderRef, total: f64) {
        self.reconfigure(slider, SettingsPatch::new().with_total(total));
    }

    /// Single-option sugar for [`reconfigure`](Self::reconfigure).
    pub fn set_policy(&mut self, slider: &SliderRef, policy: Policy) {
        self.reconfigure(slider, SettingsPatch::new().with_policy(policy));
    }

    /// Removes linked-group behavior from the group `slider` belongs to.
    ///
    /// Unsubscribes the group's observers from every member and forgets the
    /// stored settings; the sliders' values and bounds are left untouched.
    /// No-op if `slider` is not attached.
    pub fn detach(&mut self, slider: &SliderRef) {
        let Some(group) = self.groups.remove(&widget_key(slider)) else {
            return;
        };
        group.release();
        for member in &group.members {
            self.groups.remove(&widget_key(member));
        }
    }

    /// Routes a [`Command`] to the corresponding operation.
    pub fn dispatch(&mut self, slider: &SliderRef, command: Command) -> Result<(), LinkError> {
        match command {
            Command::Attach { settings, members } => self.attach(slider, settings, &members),
            Command::Reconfigure { settings } => {
                self.reconfigure(slider, settings);
                Ok(())
            }
            Command::Detach => {
                self.detach(slider);
                Ok(())
            }
        }
    }
}

impl Default for LinkedSliders {
    fn default() -> Self {
        Self::new()
    }
}
