// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! HTTP API of the controller
//!
//! Current Endpoints. See their respective function:
//! - `/api/addParticipant` ([POST](participants::add_participant))

pub mod participants;
pub mod response;

// Machine readable codes of invalid fields
const CODE_INVALID_EMAIL: &str = "invalid_email";
const CODE_OUT_OF_RANGE: &str = "out_of_range";
const CODE_VALUE_REQUIRED: &str = "value_required";
const CODE_INVALID_VALUE: &str = "invalid_value";
