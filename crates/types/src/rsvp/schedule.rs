// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::imports::*;

/// When the guest arrives
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
pub enum Arrival {
    /// Friday evening
    #[serde(rename = "pátek")]
    #[strum(serialize = "pátek")]
    Friday,

    /// Saturday before the ceremony
    #[serde(rename = "sobota")]
    #[strum(serialize = "sobota")]
    Saturday,
}

/// When the guest leaves
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
pub enum Departure {
    /// Right after the ceremony
    #[serde(rename = "v sobotu po obřadu")]
    #[strum(serialize = "v sobotu po obřadu")]
    SaturdayAfterCeremony,

    /// Saturday afternoon or evening
    #[serde(rename = "v sobotu odpoledne")]
    #[strum(serialize = "v sobotu odpoledne")]
    SaturdayEvening,

    /// Staying over night
    #[serde(rename = "v neděli")]
    #[strum(serialize = "v neděli")]
    Sunday,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn arrival_names() {
        assert_eq!(
            Arrival::iter().map(<&str>::from).collect::<Vec<_>>(),
            ["pátek", "sobota"]
        );
    }

    #[test]
    fn departure_names() {
        assert_eq!(
            Departure::from_str("v neděli"),
            Ok(Departure::Sunday)
        );
        assert_eq!(
            Departure::iter().map(<&str>::from).collect::<Vec<_>>(),
            ["v sobotu po obřadu", "v sobotu odpoledne", "v neděli"]
        );
    }
}
