// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Typed Notion database properties
//!
//! A [`PropertyDef`] is built from a property name, a declared [`PropertyType`] and
//! a [`FieldValue`]. The declared type decides how the value is serialized into
//! a Notion property value object.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

/// The Notion property types supported when creating pages
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString, IntoStaticStr, Serialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PropertyType {
    Title,
    RichText,
    Email,
    Number,
    Select,
    MultiSelect,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PropertyError {
    #[error("Unknown property type '{0}'")]
    UnknownType(String),
    #[error("Property '{name}' of type '{kind}' cannot hold a {value} value")]
    TypeMismatch {
        name: String,
        kind: PropertyType,
        value: &'static str,
    },
}

/// Raw value of a property before it is shaped by its type
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(Option<String>),
    Number(Option<f64>),
    List(Option<Vec<String>>),
}

impl FieldValue {
    fn kind_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Number(_) => "number",
            Self::List(_) => "list",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(Some(value.into()))
    }
}

impl From<Option<&str>> for FieldValue {
    fn from(value: Option<&str>) -> Self {
        Self::Text(value.map(Into::into))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichText {
    Text { text: TextContent },
}

impl RichText {
    fn plain(content: Option<String>) -> Self {
        Self::Text {
            text: TextContent {
                content: content.unwrap_or_default(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextContent {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub name: String,
}

/// A property value object as expected by the Notion pages API
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title { title: Vec<RichText> },
    RichText { rich_text: Vec<RichText> },
    Email { email: String },
    Number { number: Option<f64> },
    Select { select: SelectOption },
    MultiSelect { multi_select: Vec<SelectOption> },
}

impl PropertyValue {
    pub fn kind(&self) -> PropertyType {
        match self {
            Self::Title { .. } => PropertyType::Title,
            Self::RichText { .. } => PropertyType::RichText,
            Self::Email { .. } => PropertyType::Email,
            Self::Number { .. } => PropertyType::Number,
            Self::Select { .. } => PropertyType::Select,
            Self::MultiSelect { .. } => PropertyType::MultiSelect,
        }
    }
}

/// A named property ready to be sent to Notion
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDef {
    name: String,
    value: PropertyValue,
}

impl PropertyDef {
    /// Shape `value` according to `kind`
    ///
    /// Missing text becomes an empty string, a missing list an empty list. A missing
    /// or non-finite number is sent as `null`.
    ///
    /// Fails if the kind of `value` does not fit the declared type.
    pub fn new(
        name: impl Into<String>,
        kind: PropertyType,
        value: FieldValue,
    ) -> Result<Self, PropertyError> {
        let name = name.into();

        let value = match (kind, value) {
            (PropertyType::Title, FieldValue::Text(text)) => PropertyValue::Title {
                title: vec![RichText::plain(text)],
            },
            (PropertyType::RichText, FieldValue::Text(text)) => PropertyValue::RichText {
                rich_text: vec![RichText::plain(text)],
            },
            (PropertyType::Email, FieldValue::Text(text)) => PropertyValue::Email {
                email: text.unwrap_or_default(),
            },
            (PropertyType::Select, FieldValue::Text(text)) => PropertyValue::Select {
                select: SelectOption {
                    name: text.unwrap_or_default(),
                },
            },
            (PropertyType::Number, FieldValue::Number(number)) => PropertyValue::Number {
                number: number.filter(|n| n.is_finite()),
            },
            (PropertyType::MultiSelect, FieldValue::List(items)) => PropertyValue::MultiSelect {
                multi_select: items
                    .unwrap_or_default()
                    .into_iter()
                    .map(|name| SelectOption { name })
                    .collect(),
            },
            (kind, value) => {
                return Err(PropertyError::TypeMismatch {
                    name,
                    kind,
                    value: value.kind_name(),
                })
            }
        };

        Ok(Self { name, value })
    }

    /// Like [`PropertyDef::new`] but with the type given by its Notion name (e.g. `rich_text`)
    pub fn from_type_name(
        name: impl Into<String>,
        type_name: &str,
        value: FieldValue,
    ) -> Result<Self, PropertyError> {
        let kind = PropertyType::from_str(type_name)
            .map_err(|_| PropertyError::UnknownType(type_name.into()))?;

        Self::new(name, kind, value)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PropertyType {
        self.value.kind()
    }

    pub fn value(&self) -> &PropertyValue {
        &self.value
    }
}

/// An ordered set of properties
///
/// Serializes into a JSON object keyed by the property names, keeping insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties(Vec<PropertyDef>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, property: PropertyDef) {
        self.0.push(property);
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyDef> {
        self.0.iter()
    }

    pub fn get(&self, name: &str) -> Option<&PropertyDef> {
        self.0.iter().find(|property| property.name == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<PropertyDef> for Properties {
    fn from_iter<T: IntoIterator<Item = PropertyDef>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for Properties {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;

        for property in &self.0 {
            map.serialize_entry(&property.name, &property.value)?;
        }

        map.end()
    }
}
