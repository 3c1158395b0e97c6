// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use std::collections::BTreeSet;

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::imports::*;

/// Whether the guest helps with the catering
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HelpWithFood {
    /// The guest brings something
    Yes,
    /// The guest does not bring anything
    No,
}

/// Kinds of food a guest can bring along.
///
/// The serialized names are the option names of the downstream multi-select.
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
pub enum KindOfFood {
    /// A salad
    #[serde(rename = "salát")]
    #[strum(serialize = "salát")]
    Salad,

    /// A spread
    #[serde(rename = "pomazánka")]
    #[strum(serialize = "pomazánka")]
    Spread,

    /// Wedding cakes
    #[serde(rename = "koláčky")]
    #[strum(serialize = "koláčky")]
    Cakes,

    /// Sweet pastry
    #[serde(rename = "sladké pečení")]
    #[strum(serialize = "sladké pečení")]
    SweetBaking,

    /// Savoury pastry
    #[serde(rename = "slané pečení")]
    #[strum(serialize = "slané pečení")]
    SaltyBaking,

    /// Schnitzels
    #[serde(rename = "řízky")]
    #[strum(serialize = "řízky")]
    Steaks,

    /// Something else, described in a separate free text field
    #[serde(rename = "other")]
    #[strum(serialize = "other")]
    Other,
}

/// A non-empty selection of food a guest brings along.
///
/// The speciality text is present if and only if [`KindOfFood::Other`] is part
/// of the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodContribution {
    kinds: BTreeSet<KindOfFood>,
    speciality: Option<String>,
}

impl FoodContribution {
    /// Create a food contribution from the selected kinds and the speciality text.
    ///
    /// Returns `None` if no kind is selected, or if [`KindOfFood::Other`] is
    /// selected without a non-blank speciality. A speciality given without
    /// [`KindOfFood::Other`] is dropped.
    pub fn new<I>(kinds: I, speciality: Option<String>) -> Option<Self>
    where
        I: IntoIterator<Item = KindOfFood>,
    {
        let kinds: BTreeSet<KindOfFood> = kinds.into_iter().collect();

        if kinds.is_empty() {
            return None;
        }

        let speciality = if kinds.contains(&KindOfFood::Other) {
            let speciality = speciality
                .map(|s| s.trim().to_owned())
                .filter(|s| !s.is_empty())?;

            Some(speciality)
        } else {
            None
        };

        Some(Self { kinds, speciality })
    }

    /// The selected kinds of food, in declaration order
    pub fn kinds(&self) -> impl Iterator<Item = KindOfFood> + '_ {
        self.kinds.iter().copied()
    }

    /// Description of the [`KindOfFood::Other`] dish
    pub fn speciality(&self) -> Option<&str> {
        self.speciality.as_deref()
    }
}

/// Catering contribution of a participant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Catering {
    /// The guest does not bring any food
    Declined,
    /// The guest brings the contained food
    Contributes(FoodContribution),
}

impl Catering {
    /// The food contribution, if any
    pub fn contribution(&self) -> Option<&FoodContribution> {
        match self {
            Self::Declined => None,
            Self::Contributes(contribution) => Some(contribution),
        }
    }

    /// The yes/no choice this catering was made from
    pub fn help_with_food(&self) -> HelpWithFood {
        match self {
            Self::Declined => HelpWithFood::No,
            Self::Contributes(_) => HelpWithFood::Yes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn kind_of_food_names() {
        assert_eq!(KindOfFood::SweetBaking.as_ref(), "sladké pečení");
        assert_eq!(KindOfFood::from_str("řízky"), Ok(KindOfFood::Steaks));
        assert_eq!(KindOfFood::from_str("other"), Ok(KindOfFood::Other));

        let kinds: Vec<KindOfFood> =
            serde_json::from_str(r#"["salát", "koláčky", "other"]"#).unwrap();
        assert_eq!(
            kinds,
            vec![KindOfFood::Salad, KindOfFood::Cakes, KindOfFood::Other]
        );
    }

    #[test]
    fn empty_contribution() {
        assert_eq!(FoodContribution::new(Vec::<KindOfFood>::new(), None), None);
        assert_eq!(
            FoodContribution::new(Vec::<KindOfFood>::new(), Some("guláš".into())),
            None
        );
    }

    #[test]
    fn other_requires_speciality() {
        assert_eq!(FoodContribution::new([KindOfFood::Other], None), None);
        assert_eq!(
            FoodContribution::new([KindOfFood::Other], Some("   ".into())),
            None
        );

        let contribution =
            FoodContribution::new([KindOfFood::Other], Some("  guláš ".into())).unwrap();
        assert_eq!(contribution.speciality(), Some("guláš"));
    }

    #[test]
    fn speciality_without_other_is_dropped() {
        let contribution =
            FoodContribution::new([KindOfFood::Salad], Some("guláš".into())).unwrap();

        assert_eq!(contribution.speciality(), None);
        assert_eq!(contribution.kinds().collect::<Vec<_>>(), [KindOfFood::Salad]);
    }

    #[test]
    fn kinds_are_ordered_and_deduplicated() {
        let contribution = FoodContribution::new(
            [KindOfFood::Steaks, KindOfFood::Salad, KindOfFood::Steaks],
            None,
        )
        .unwrap();

        assert_eq!(
            contribution.kinds().collect::<Vec<_>>(),
            [KindOfFood::Salad, KindOfFood::Steaks]
        );
    }
}
