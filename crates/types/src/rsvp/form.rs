// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::num::NonZeroU32;
use std::str::FromStr;

use super::{
    Arrival, Catering, Count, Departure, FoodContribution, FormField, HelpWithFood, KindOfFood,
    ParticipantSubmission, PartySize,
};
use crate::imports::*;

const CODE_REQUIRED: &str = "required";
const CODE_EMAIL: &str = "email";
const CODE_RANGE: &str = "range";

const MSG_FIRST_NAME: &str = "Vyplň své jméno.";
const MSG_SUR_NAME: &str = "Vyplň své příjmení.";
const MSG_EMAIL_MISSING: &str = "Vyplň svůj e-mail.";
const MSG_EMAIL_INVALID: &str = "E-mail není vyplněn správně.";
const MSG_COUNT: &str = "Vyplň kolik vás přijede.";
const MSG_HELP_WITH_FOOD: &str = "Zaškrtni, jestli nám pomůžeš s jídlem.";
const MSG_KIND_OF_FOOD: &str = "Vyber s jakým jídlem nám chceš pomoct.";
const MSG_KIND_OF_FOOD_SPEC: &str = "Napiš jaké jídlo můžeš přivézt.";
const MSG_ARRIVAL: &str = "Vyber kdy přijedeš.";
const MSG_DEPARTURE: &str = "Vyber kdy odjedeš.";

/// The family count as entered in the form.
///
/// The form field is a text input, so the value arrives either as a JSON
/// number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FamilyCountInput {
    /// A JSON number
    Number(f64),
    /// Raw text from the input field
    Text(String),
}

impl FamilyCountInput {
    /// Returns `true` if nothing was entered
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Text(text) => text.trim().is_empty(),
        }
    }

    /// The entered value if it is a positive integer
    pub fn value(&self) -> Option<NonZeroU32> {
        match self {
            Self::Number(number) => {
                if number.fract() != 0.0 || *number < 1.0 || *number > f64::from(u32::MAX) {
                    return None;
                }

                NonZeroU32::new(*number as u32)
            }
            Self::Text(text) => NonZeroU32::from_str(text.trim()).ok(),
        }
    }
}

impl From<u32> for FamilyCountInput {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// The RSVP form as a guest fills it in.
///
/// Every field may be missing. Fields that are currently hidden (see
/// [`VisibleFields`](super::VisibleFields)) keep whatever value they had, but
/// are ignored when the form is turned into a [`ParticipantSubmission`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpForm {
    /// Given name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sur_name: Option<String>,
    /// Contact e-mail address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Party size choice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<Count>,
    /// Only relevant when `count` is [`Count::More`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_count: Option<FamilyCountInput>,
    /// Whether the guest helps with the catering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_with_food: Option<HelpWithFood>,
    /// Only relevant when `help_with_food` is [`HelpWithFood::Yes`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind_of_food: Option<Vec<KindOfFood>>,
    /// Only relevant when `kind_of_food` contains [`KindOfFood::Other`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind_of_food_spec: Option<String>,
    /// Arrival slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival: Option<Arrival>,
    /// Departure slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure: Option<Departure>,
    /// Free text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl RsvpForm {
    /// Validate the form and build the typed submission from it.
    ///
    /// Text fields are trimmed. On failure every invalid field gets an entry in
    /// the returned [`ValidationErrors`], keyed by its wire name.
    pub fn to_submission(&self) -> Result<ParticipantSubmission, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let first_name = required_text(
            &mut errors,
            FormField::FirstName,
            &self.first_name,
            MSG_FIRST_NAME,
        );
        let sur_name = required_text(&mut errors, FormField::SurName, &self.sur_name, MSG_SUR_NAME);
        let email = self.checked_email(&mut errors);
        let party = self.party_size(&mut errors);
        let catering = self.catering(&mut errors);
        let arrival = required(&mut errors, FormField::Arrival, self.arrival, MSG_ARRIVAL);
        let departure = required(
            &mut errors,
            FormField::Departure,
            self.departure,
            MSG_DEPARTURE,
        );
        let note = trimmed(&self.note);

        match (
            first_name, sur_name, email, party, catering, arrival, departure,
        ) {
            (
                Some(first_name),
                Some(sur_name),
                Some(email),
                Some(party),
                Some(catering),
                Some(arrival),
                Some(departure),
            ) if errors.is_empty() => Ok(ParticipantSubmission {
                first_name,
                sur_name,
                email,
                party,
                catering,
                arrival,
                departure,
                note,
            }),
            _ => Err(errors),
        }
    }

    /// A copy of this form with all text fields trimmed
    pub fn trimmed(&self) -> Self {
        Self {
            first_name: self.first_name.as_deref().map(|s| s.trim().to_owned()),
            sur_name: self.sur_name.as_deref().map(|s| s.trim().to_owned()),
            email: self.email.as_deref().map(|s| s.trim().to_owned()),
            family_count: self.family_count.clone().map(|input| match input {
                FamilyCountInput::Text(text) => FamilyCountInput::Text(text.trim().to_owned()),
                number => number,
            }),
            kind_of_food_spec: self
                .kind_of_food_spec
                .as_deref()
                .map(|s| s.trim().to_owned()),
            note: self.note.as_deref().map(|s| s.trim().to_owned()),
            ..self.clone()
        }
    }

    fn checked_email(&self, errors: &mut ValidationErrors) -> Option<String> {
        let email = match trimmed(&self.email) {
            Some(email) => email,
            None => {
                add_error(errors, FormField::Email, CODE_REQUIRED, MSG_EMAIL_MISSING);
                return None;
            }
        };

        if validator::validate_email(email.as_str()) {
            Some(email)
        } else {
            add_error(errors, FormField::Email, CODE_EMAIL, MSG_EMAIL_INVALID);
            None
        }
    }

    fn party_size(&self, errors: &mut ValidationErrors) -> Option<PartySize> {
        match self.count {
            None => {
                add_error(errors, FormField::Count, CODE_REQUIRED, MSG_COUNT);
                None
            }
            Some(Count::One) => Some(PartySize::One),
            Some(Count::Two) => Some(PartySize::Two),
            Some(Count::More) => match &self.family_count {
                Some(input) if !input.is_blank() => match input.value() {
                    Some(family_count) => Some(PartySize::More { family_count }),
                    None => {
                        add_error(errors, FormField::FamilyCount, CODE_RANGE, MSG_COUNT);
                        None
                    }
                },
                _ => {
                    add_error(errors, FormField::FamilyCount, CODE_REQUIRED, MSG_COUNT);
                    None
                }
            },
        }
    }

    fn catering(&self, errors: &mut ValidationErrors) -> Option<Catering> {
        match self.help_with_food {
            None => {
                add_error(
                    errors,
                    FormField::HelpWithFood,
                    CODE_REQUIRED,
                    MSG_HELP_WITH_FOOD,
                );
                None
            }
            Some(HelpWithFood::No) => Some(Catering::Declined),
            Some(HelpWithFood::Yes) => {
                let kinds = self.kind_of_food.as_deref().unwrap_or_default();

                if kinds.is_empty() {
                    add_error(
                        errors,
                        FormField::KindOfFood,
                        CODE_REQUIRED,
                        MSG_KIND_OF_FOOD,
                    );
                    return None;
                }

                let speciality = trimmed(&self.kind_of_food_spec);

                if kinds.contains(&KindOfFood::Other) && speciality.is_none() {
                    add_error(
                        errors,
                        FormField::KindOfFoodSpec,
                        CODE_REQUIRED,
                        MSG_KIND_OF_FOOD_SPEC,
                    );
                    return None;
                }

                FoodContribution::new(kinds.iter().copied(), speciality).map(Catering::Contributes)
            }
        }
    }
}

impl Validate for RsvpForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.to_submission().map(|_| ())
    }
}

/// Collect the first human readable message of every invalid form field
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<FormField, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, field_errors)| {
            let field = FormField::from_str(field).ok()?;
            let error = field_errors.first()?;
            let message = error
                .message
                .as_ref()
                .map(|message| message.to_string())
                .unwrap_or_else(|| error.code.to_string());

            Some((field, message))
        })
        .collect()
}

fn add_error(
    errors: &mut ValidationErrors,
    field: FormField,
    code: &'static str,
    message: &'static str,
) {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));

    errors.add(field.name(), error);
}

fn trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
}

fn required_text(
    errors: &mut ValidationErrors,
    field: FormField,
    value: &Option<String>,
    message: &'static str,
) -> Option<String> {
    let value = trimmed(value);

    if value.is_none() {
        add_error(errors, field, CODE_REQUIRED, message);
    }

    value
}

fn required<T>(
    errors: &mut ValidationErrors,
    field: FormField,
    value: Option<T>,
    message: &'static str,
) -> Option<T> {
    if value.is_none() {
        add_error(errors, field, CODE_REQUIRED, message);
    }

    value
}
