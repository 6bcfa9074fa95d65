//! Group settings: policies, defaults, and the settings patch/merge layer.

/// Rule selecting which member(s) absorb a value change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Policy {
    /// The following member absorbs the whole delta; clamped remainders
    /// carry forward through the group.
    Next,

    /// Like `Next`, scanning backwards.
    Prev,

    /// The scan starts at the first member, moving forward.
    First,

    /// The scan starts at the last member, moving backwards.
    Last,

    /// The delta is split evenly across all other members; the last-scanned
    /// member absorbs the rounding remainder so the sum stays exact.
    All,
}

impl Default for Policy {
    fn default() -> Self {
        Policy::Next
    }
}

impl Policy {
    /// Scan direction: `-1` for backwards policies, `+1` otherwise.
    pub(crate) fn direction(self) -> isize {
        match self {
            Policy::Prev | Policy::Last => -1,
            Policy::Next | Policy::First | Policy::All => 1,
        }
    }

    /// Index the scan starts from, given the origin position and group size.
    pub(crate) fn start_index(self, cur_index: usize, len: usize) -> usize {
        match self {
            Policy::First => 0,
            Policy::Last => len - 1,
            Policy::Next | Policy::Prev | Policy::All => cur_index,
        }
    }
}

/// One field of a partial settings update.
///
/// Distinguishes a field that is simply absent from an update (`Keep`) from
/// one explicitly cleared (`Clear`): clearing removes the stored option so
/// subsequent passes fall back to the group's defaults, while an absent
/// field leaves the stored option untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Patch<T> {
    /// Leave the stored option as it is.
    Keep,
    /// Remove the stored option; reads fall back to the defaults.
    Clear,
    /// Replace the stored option.
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Keep
    }
}

impl<T> Patch<T> {
    /// Applies this patch to a stored option slot.
    pub(crate) fn apply(self, slot: &mut Option<T>) {
        match self {
            Patch::Keep => {}
            Patch::Clear => *slot = None,
            Patch::Set(value) => *slot = Some(value),
        }
    }
}

/// Partial settings update for a group (or for the manager defaults).
///
/// # Examples
///
/// ```
/// use linked_sliders::link::{Policy, SettingsPatch};
///
/// let patch = SettingsPatch::new()
///     .with_total(80.0)
///     .with_policy(Policy::All);
///
/// // Explicitly clearing an option is different from omitting it:
/// let back_to_default = SettingsPatch::new().clearing_total();
/// # let _ = (patch, back_to_default);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettingsPatch {
    /// Target sum for the group.
    pub total: Patch<f64>,

    /// Absorption policy.
    pub policy: Patch<Policy>,
}

impl SettingsPatch {
    /// An empty patch (all fields `Keep`).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_total(mut self, total: f64) -> Self {
        self.total = Patch::Set(total);
        self
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = Patch::Set(policy);
        self
    }

    /// Removes the group's stored total; passes fall back to the defaults.
    pub fn clearing_total(mut self) -> Self {
        self.total = Patch::Clear;
        self
    }

    /// Removes the group's stored policy; passes fall back to the defaults.
    pub fn clearing_policy(mut self) -> Self {
        self.policy = Patch::Clear;
        self
    }
}

/// Manager-wide defaults, used wherever a group has no stored override.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkDefaults {
    /// Target sum for all linked sliders.
    pub total: f64,

    /// Absorption policy.
    pub policy: Policy,
}

impl Default for LinkDefaults {
    fn default() -> Self {
        Self {
            total: 100.0,
            policy: Policy::Next,
        }
    }
}

impl LinkDefaults {
    /// Applies a patch; `Clear` restores the built-in default for a field.
    pub(crate) fn apply(&mut self, patch: SettingsPatch) {
        let builtin = LinkDefaults::default();
        match patch.total {
            Patch::Keep => {}
            Patch::Clear => self.total = builtin.total,
            Patch::Set(total) => self.total = total,
        }
        match patch.policy {
            Patch::Keep => {}
            Patch::Clear => self.policy = builtin.policy,
            Patch::Set(policy) => self.policy = policy,
        }
    }
}

/// Per-group overrides; `None` falls back to the group's defaults snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct StoredSettings {
    pub(crate) total: Option<f64>,
    pub(crate) policy: Option<Policy>,
}

impl StoredSettings {
    /// Merges a patch into the stored settings.
    ///
    /// An explicit `Clear` deletes the stored option rather than being
    /// skipped by the merge; `Keep` fields are untouched.
    pub(crate) fn merge(&mut self, patch: SettingsPatch) {
        patch.total.apply(&mut self.total);
        patch.policy.apply(&mut self.policy);
    }
}
