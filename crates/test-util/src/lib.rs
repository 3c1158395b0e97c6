// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Test utility functions for use with the controller and the guest client
pub use ::serde_json;
pub use pretty_assertions::assert_eq;

pub use common::{complete_form, family_form, FAMILY_COUNT};
pub use server::TestServer;

pub mod common;
pub mod server;

/// Helper macro to compare a `[Serialize]` implementor with a JSON literal
///
/// Asserts that the left expression equals the right JSON literal when serialized.
///
/// # Examples
///
/// ```
/// use rsvp_test_util::assert_eq_json;
/// use serde::Serialize;
///
/// #[derive(Debug, Serialize)]
/// struct Guest {
///     name: String,
///     count: u64,
/// }
///
/// let jana = Guest {
///     name: "Jana".into(),
///     count: 2,
/// };
///
/// assert_eq_json!(
///     jana,
///     {
///         "name": "Jana",
///         "count": 2
///     }
/// );
/// ```
#[macro_export]
macro_rules! assert_eq_json {
    ($val:expr,$($json:tt)+) => {
        let val: $crate::serde_json::Value = $crate::serde_json::to_value(&$val).expect("Expected value to be serializable");

        $crate::assert_eq!(val, $crate::serde_json::json!($($json)+));
    };
}
