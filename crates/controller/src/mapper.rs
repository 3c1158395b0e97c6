// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Maps a participant onto the columns of the Notion database

use notion_client::{FieldValue, Properties, PropertyDef, PropertyError, PropertyType};
use types::rsvp::{FormField, ParticipantSubmission};

/// Database columns in the order they are sent, with their type and the form field they are filled from
pub const COLUMNS: [(&str, PropertyType, FormField); 9] = [
    ("Jméno", PropertyType::Title, FormField::FirstName),
    ("Příjmení", PropertyType::RichText, FormField::SurName),
    ("E-mail", PropertyType::Email, FormField::Email),
    ("Množství", PropertyType::Number, FormField::Count),
    ("Jídlo", PropertyType::MultiSelect, FormField::KindOfFood),
    ("Specialita", PropertyType::RichText, FormField::KindOfFoodSpec),
    ("Příjezd", PropertyType::Select, FormField::Arrival),
    ("Odjezd", PropertyType::Select, FormField::Departure),
    ("Poznámka", PropertyType::RichText, FormField::Note),
];

/// Build the page properties of a participant
pub fn participant_properties(
    submission: &ParticipantSubmission,
) -> Result<Properties, PropertyError> {
    COLUMNS
        .iter()
        .map(|&(name, kind, field)| PropertyDef::new(name, kind, field_value(submission, field)))
        .collect()
}

fn field_value(submission: &ParticipantSubmission, field: FormField) -> FieldValue {
    let contribution = submission.catering.contribution();

    match field {
        FormField::FirstName => submission.first_name.as_str().into(),
        FormField::SurName => submission.sur_name.as_str().into(),
        FormField::Email => submission.email.as_str().into(),
        FormField::Count | FormField::FamilyCount => {
            FieldValue::Number(Some(f64::from(submission.party.head_count())))
        }
        FormField::HelpWithFood => <&str>::from(submission.catering.help_with_food()).into(),
        FormField::KindOfFood => FieldValue::List(contribution.map(|contribution| {
            contribution
                .kinds()
                .map(|kind| kind.to_string())
                .collect()
        })),
        FormField::KindOfFoodSpec => contribution.and_then(|c| c.speciality()).into(),
        FormField::Arrival => <&str>::from(submission.arrival).into(),
        FormField::Departure => <&str>::from(submission.departure).into(),
        FormField::Note => submission.note.as_deref().into(),
    }
}
