// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::imports::*;

/// The fields of the RSVP form, named as they appear on the wire.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FormField {
    /// Given name
    FirstName,
    /// Family name
    SurName,
    /// Contact e-mail address
    Email,
    /// Party size choice
    Count,
    /// Number of family members, only asked when [`FormField::Count`] is `more`
    FamilyCount,
    /// Whether the guest helps with the catering
    HelpWithFood,
    /// Selected kinds of food, only asked when the guest helps with the catering
    KindOfFood,
    /// Description of the `other` kind of food
    KindOfFoodSpec,
    /// Arrival slot
    Arrival,
    /// Departure slot
    Departure,
    /// Free text note
    Note,
}

impl FormField {
    /// Returns `true` for fields that are only shown depending on other answers
    pub fn is_conditional(&self) -> bool {
        matches!(
            self,
            Self::FamilyCount | Self::KindOfFood | Self::KindOfFoodSpec
        )
    }

    /// Wire name of the field
    pub fn name(&self) -> &'static str {
        (*self).into()
    }
}
