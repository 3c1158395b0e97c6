// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! The RSVP form and the submission built from it.
//!
//! [`RsvpForm`] is the partial, untrusted shape a guest edits field by field.
//! Converting it with [`RsvpForm::to_submission`] either yields a
//! [`ParticipantSubmission`], where every conditional rule is carried by the
//! type itself, or a set of per-field [`ValidationErrors`](validator::ValidationErrors).

mod catering;
mod form;
mod form_field;
mod party_size;
mod schedule;
mod submission;
mod visibility;

pub use catering::{Catering, FoodContribution, HelpWithFood, KindOfFood};
pub use form::{field_messages, FamilyCountInput, RsvpForm};
pub use form_field::FormField;
pub use party_size::{Count, PartySize};
pub use schedule::{Arrival, Departure};
pub use submission::ParticipantSubmission;
pub use visibility::VisibleFields;
