// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use std::num::NonZeroU32;

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::imports::*;

/// How many guests arrive, as chosen in the form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum Count {
    /// The guest comes alone
    #[serde(rename = "1")]
    #[strum(serialize = "1")]
    One,

    /// The guest comes with a partner
    #[serde(rename = "2")]
    #[strum(serialize = "2")]
    Two,

    /// The guest comes with their family, the exact number is asked separately
    #[serde(rename = "more")]
    #[strum(serialize = "more")]
    More,
}

/// Validated party size of a participant.
///
/// The family count only exists for [`PartySize::More`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartySize {
    /// A single guest
    One,
    /// A guest and their partner
    Two,
    /// A family
    More {
        /// Number of people arriving together
        family_count: NonZeroU32,
    },
}

impl PartySize {
    /// Number of people this participant stands for
    pub fn head_count(&self) -> u32 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::More { family_count } => family_count.get(),
        }
    }

    /// The form choice this party size was made from
    pub fn count(&self) -> Count {
        match self {
            Self::One => Count::One,
            Self::Two => Count::Two,
            Self::More { .. } => Count::More,
        }
    }

    /// Returns `true` if the guest arrives alone
    ///
    /// Used to address the guest in singular or plural.
    pub fn is_alone(&self) -> bool {
        matches!(self, Self::One)
    }
}
