// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use super::{Count, FormField, HelpWithFood, KindOfFood, RsvpForm};

/// Which conditional fields of the form are currently shown.
///
/// Unconditional fields are always visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibleFields {
    /// `familyCount` is shown
    pub family_count: bool,
    /// `kindOfFood` is shown
    pub kind_of_food: bool,
    /// `kindOfFoodSpec` is shown
    pub kind_of_food_spec: bool,
}

impl VisibleFields {
    /// Derive the visible fields from the current answers
    pub fn of(form: &RsvpForm) -> Self {
        let family_count = form.count == Some(Count::More);
        let kind_of_food = form.help_with_food == Some(HelpWithFood::Yes);
        let kind_of_food_spec = kind_of_food
            && form
                .kind_of_food
                .as_deref()
                .map_or(false, |kinds| kinds.contains(&KindOfFood::Other));

        Self {
            family_count,
            kind_of_food,
            kind_of_food_spec,
        }
    }

    /// Returns `true` if the given field is shown
    pub fn is_visible(&self, field: FormField) -> bool {
        match field {
            FormField::FamilyCount => self.family_count,
            FormField::KindOfFood => self.kind_of_food,
            FormField::KindOfFoodSpec => self.kind_of_food_spec,
            _ => true,
        }
    }
}
