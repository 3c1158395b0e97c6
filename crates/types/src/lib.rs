// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Data types for the wedding RSVP service.
//!
//! This crate contains the form model that guests fill in, the typed
//! [`ParticipantSubmission`](rsvp::ParticipantSubmission) that a valid form
//! converts into, and the rules that decide which conditional form fields
//! are visible.
//!
//! The types are shared between the controller (which re-validates every
//! submission it receives) and the guest-side client.

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    missing_debug_implementations,
    missing_docs,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_parens,
    unused_results,
    while_true
)]

pub mod rsvp;

mod imports {
    pub use serde::{Deserialize, Serialize};
    pub use validator::{Validate, ValidationError, ValidationErrors};
}
