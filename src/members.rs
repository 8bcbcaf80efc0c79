// 👥 Member transforms
// Records come back exactly as they went in, minus whatever is filtered out

use crate::entities::Member;
use tracing::debug;

/// Copy every member without the `age` field
pub fn omit_age_from_members(members: &[Member]) -> Vec<Member> {
    members
        .iter()
        .map(|member| Member {
            age: None,
            ..member.clone()
        })
        .collect()
}

/// Keep only current members, in input order
pub fn remove_inactive_members(members: &[Member]) -> Vec<Member> {
    let active: Vec<Member> = members
        .iter()
        .filter(|m| m.is_current())
        .cloned()
        .collect();

    debug!(
        total = members.len(),
        active = active.len(),
        "removed inactive members"
    );
    active
}
