//! The redistribution pass.

use super::config::Policy;
use crate::slider::SliderRef;

/// Runs one redistribution pass over `members`, with the member at
/// `cur_index` as the origin of the change.
///
/// Computes `remaining = total - sum(values)` and walks the group in the
/// policy's scan order, skipping the origin, until the remaining delta is
/// fully absorbed or every other member has been visited twice. Each write
/// is clamped to the member's bounds, and `remaining` shrinks only by the
/// amount actually absorbed, so a clamped member passes its shortfall on to
/// the next one in scan order.
///
/// If every reachable member is pinned at the bound in the needed direction
/// the pass ends with the sum short of `total`; that drift is accepted, not
/// an error.
///
/// Writes may synchronously re-notify observers; the caller holds the
/// group's re-entrancy guard for the duration of the pass.
pub(crate) fn run_pass(members: &[SliderRef], cur_index: usize, total: f64, policy: Policy) {
    if members.is_empty() {
        return;
    }

    let len = members.len();
    let mut remaining = total - members.iter().map(|m| m.value()).sum::<f64>();
    let dir = policy.direction();
    let mut index = policy.start_index(cur_index, len) as isize;

    for step in 0..2 * len {
        if index as usize != cur_index {
            let member = &members[index as usize];
            let value = member.value();
            let share = if policy == Policy::All {
                if step == len - 1 {
                    // Last scan position absorbs the rounding remainder,
                    // keeping the sum exact rather than approximate.
                    remaining
                } else {
                    (remaining / len.saturating_sub(step).max(1) as f64).floor()
                }
            } else {
                remaining
            };
            let new_value = (value + share).clamp(member.min(), member.max());
            member.set_value(new_value);
            remaining -= new_value - value;
            if remaining == 0.0 {
                break;
            }
        }
        index = (len as isize + index + dir) % len as isize;
    }
}
