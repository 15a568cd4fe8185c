//! Edit-reconciliation state machine
//!
//! Step pages can be entered with an `edit=<id>` marker identifying a
//! cart item being re-opened for modification. On entry the page has to
//! decide what to do with whatever session state is lying around, and
//! the decision is a pure function of (marker, session, ledger lookup):
//!
//! - marker matches the session's editing id: the in-progress edit is
//!   trusted and kept (a benign re-render must not clobber it)
//! - marker names a different, existing item: that item is loaded
//! - marker names a missing item: reset and proceed fresh, with a
//!   warning taken by the caller
//! - no marker while the session still carries an editing id: the
//!   shopper navigated away from an edit, reset
//! - no marker, no editing id: nothing to do
//!
//! The caller applies the returned decision; this module performs no
//! I/O and owns no state.

use crate::session::{BuilderState, EditSource};

/// Derived edit state of a step page after reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    /// Building a new cake; saving appends to the cart
    Fresh,
    /// Editing an existing cart item; saving updates it in place
    Editing,
}

/// The decision reconciliation arrives at
#[derive(Debug, Clone, PartialEq)]
pub enum Reconciliation<I> {
    /// Marker matches the session; keep the in-progress edit untouched
    KeepSession,
    /// Load this item into the session and continue editing
    LoadItem(I),
    /// Marker points at a missing item; reset and warn
    ResetMissing(String),
    /// Editing id left behind without a marker; reset
    ResetStale,
    /// Fresh build, nothing to reconcile
    Untouched,
}

/// Decides how a step page entered with `marker` reconciles `session`
///
/// `lookup` resolves a cart item id against the ledger; it is only
/// invoked when the marker differs from the session's editing id.
pub fn reconcile<I, F>(
    marker: Option<&str>,
    session: &BuilderState,
    lookup: F,
) -> Reconciliation<I>
where
    I: EditSource,
    F: FnOnce(&str) -> Option<I>,
{
    match (marker, session.editing_item_id.as_deref()) {
        (Some(marker), Some(editing)) if marker == editing => Reconciliation::KeepSession,
        (Some(marker), _) => match lookup(marker) {
            Some(item) => Reconciliation::LoadItem(item),
            None => Reconciliation::ResetMissing(marker.to_string()),
        },
        (None, Some(_)) => Reconciliation::ResetStale,
        (None, None) => Reconciliation::Untouched,
    }
}
