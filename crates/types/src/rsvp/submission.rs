// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use super::{Arrival, Catering, Departure, FamilyCountInput, PartySize, RsvpForm};

/// A validated RSVP of a single participant.
///
/// Built from a guest's form by [`RsvpForm::to_submission`](super::RsvpForm::to_submission).
/// All text fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantSubmission {
    /// Given name
    pub first_name: String,
    /// Family name
    pub sur_name: String,
    /// Syntactically valid e-mail address
    pub email: String,
    /// Party size, carrying the family count where applicable
    pub party: PartySize,
    /// Catering contribution, carrying the food selection where applicable
    pub catering: Catering,
    /// Arrival slot
    pub arrival: Arrival,
    /// Departure slot
    pub departure: Departure,
    /// Optional note, `None` when left blank
    pub note: Option<String>,
}

impl From<&ParticipantSubmission> for RsvpForm {
    /// The wire form of a submission, without values of hidden fields
    fn from(submission: &ParticipantSubmission) -> Self {
        let family_count = match submission.party {
            PartySize::More { family_count } => Some(FamilyCountInput::from(family_count.get())),
            PartySize::One | PartySize::Two => None,
        };
        let contribution = submission.catering.contribution();

        RsvpForm {
            first_name: Some(submission.first_name.clone()),
            sur_name: Some(submission.sur_name.clone()),
            email: Some(submission.email.clone()),
            count: Some(submission.party.count()),
            family_count,
            help_with_food: Some(submission.catering.help_with_food()),
            kind_of_food: contribution.map(|contribution| contribution.kinds().collect()),
            kind_of_food_spec: contribution
                .and_then(|contribution| contribution.speciality())
                .map(ToOwned::to_owned),
            arrival: Some(submission.arrival),
            departure: Some(submission.departure),
            note: submission.note.clone(),
        }
    }
}
