// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Prefilled forms shared by the tests of several crates

use types::rsvp::{Arrival, Count, Departure, HelpWithFood, KindOfFood, RsvpForm};

pub const FAMILY_COUNT: u32 = 4;

/// A valid form of a single guest who does not help with the food
pub fn complete_form() -> RsvpForm {
    RsvpForm {
        first_name: Some("Jana".into()),
        sur_name: Some("Nováková".into()),
        email: Some("jana@example.com".into()),
        count: Some(Count::One),
        help_with_food: Some(HelpWithFood::No),
        arrival: Some(Arrival::Friday),
        departure: Some(Departure::Sunday),
        ..Default::default()
    }
}

/// A valid form of a family bringing cakes and a speciality
pub fn family_form() -> RsvpForm {
    RsvpForm {
        count: Some(Count::More),
        family_count: Some(FAMILY_COUNT.into()),
        help_with_food: Some(HelpWithFood::Yes),
        kind_of_food: Some(vec![KindOfFood::Cakes, KindOfFood::Other]),
        kind_of_food_spec: Some("Guláš".into()),
        arrival: Some(Arrival::Saturday),
        departure: Some(Departure::SaturdayEvening),
        note: Some("Přijedeme vlakem".into()),
        ..complete_form()
    }
}
