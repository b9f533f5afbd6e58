#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # userdel-entities
//!
//! Reusable, agnostic domain entities for userdel.
//!
//! The entities only describe *who* is involved in an invocation and *what*
//! is known about them. Decisions are made in `userdel-core`.

pub mod account;
pub mod invocation;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
