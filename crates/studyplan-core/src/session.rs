//! Session chunking for a course's daily minutes.

use crate::policy::PlanPolicy;

/// Break `minutes` into study sessions.
///
/// Emits full sessions while they fit, then one shorter session if the
/// leftover reaches the minimum remainder. A shorter leftover is dropped,
/// so the sessions can sum to less than `minutes`; see
/// [`dropped_remainder`].
pub fn to_sessions(minutes: u32, policy: &PlanPolicy) -> Vec<u32> {
    let full = policy.session_minutes.max(1);
    let mut sessions = Vec::with_capacity((minutes / full) as usize + 1);
    let mut remaining = minutes;

    while remaining >= full {
        sessions.push(full);
        remaining -= full;
    }

    if remaining > 0 && remaining >= policy.min_session_remainder_minutes {
        sessions.push(remaining);
    }

    sessions
}

/// Minutes of `minutes` that [`to_sessions`] leaves unscheduled.
pub fn dropped_remainder(minutes: u32, policy: &PlanPolicy) -> u32 {
    minutes - to_sessions(minutes, policy).iter().sum::<u32>()
}
