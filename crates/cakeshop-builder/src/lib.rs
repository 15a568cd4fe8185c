//! # Cakeshop Builder
//!
//! The configuration session of the cake wizard: the in-progress,
//! not-yet-finalized state of one cake being designed across the three
//! build steps (taste, appearance, packaging).
//!
//! This crate provides:
//! - Fully-typed preview payloads for each build step
//! - [`BuilderSession`], the write-through persisted state container
//! - Cake structure validation rules for the taste step
//! - The edit-reconciliation state machine that decides, on page entry,
//!   whether the session is a fresh build, a trusted in-progress edit,
//!   or stale state that must be reloaded or reset

pub mod preview;
pub mod reconcile;
pub mod session;
pub mod validate;

pub use preview::{
    AppearancePreview, CakeLayer, ImageElement, PackagingPreview, TastePreview, TextElement,
};
pub use reconcile::{reconcile, EditState, Reconciliation};
pub use session::{BuilderSession, BuilderState, EditSource};
pub use validate::{is_valid_structure, validate_structure, StructureIssue};
