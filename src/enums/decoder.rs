//! Value-to-member decoding
//!
//! Decoding is a linear scan of a member table in declaration order. The
//! first member whose value, truncated into the probe's width, equals the
//! probe wins. Duplicate values are allowed; later duplicates are never
//! returned.

use crate::halt::halt;
use crate::primitives::FixedInt;
use crate::width::Width;

use super::Member;

/// Finds the first member of `table` whose value matches `probe`.
///
/// Returns `None` if no member matches.
pub fn decode<W: Width, P: Width>(table: &[Member<W>], probe: FixedInt<P>) -> Option<&Member<W>> {
    let found = table
        .iter()
        .find(|member| probe.eq_truncating(member.value()));

    if found.is_none() {
        log::trace!("{:?} matches none of {} members", probe, table.len());
    }

    found
}

/// Like [`decode`], but halts when no member matches.
///
/// Use only where `probe` is known to be a member; a miss is a programming
/// error, not a recoverable condition.
#[track_caller]
pub fn decode_or_panic<W: Width, P: Width>(table: &[Member<W>], probe: FixedInt<P>) -> &Member<W> {
    match decode(table, probe) {
        Some(member) => member,
        None => halt(format_args!(
            "{:?} is not a member value ({} members)",
            probe,
            table.len()
        )),
    }
}
