//! Parameter encoding for remote calls.
//!
//! The remote service reads an `application/x-www-form-urlencoded` body in
//! which free text is percent-encoded while identifiers, numbers, booleans
//! and embedded JSON are written verbatim. `Params` preserves insertion
//! order, so the body of a given call is deterministic.

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::form_urlencoded;
use uuid::Uuid;

use crate::error::ApiError;

/// A single parameter value, already rendered for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ParamValue {
    /// Natural textual form, written verbatim (ids, integers, booleans,
    /// enum names).
    Atom(String),
    /// Free text, percent-encoded on output.
    Text(String),
    /// Composite value serialized to JSON, written verbatim.
    Json(String),
}

/// Ordered set of named parameters for one remote call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(&'static str, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier, in canonical UUID text form.
    pub fn id(mut self, name: &'static str, id: impl Into<Uuid>) -> Self {
        self.entries
            .push((name, ParamValue::Atom(id.into().to_string())));
        self
    }

    pub fn int(mut self, name: &'static str, value: i32) -> Self {
        self.entries.push((name, ParamValue::Atom(value.to_string())));
        self
    }

    /// Booleans use the remote side's `True`/`False` spelling.
    pub fn boolean(mut self, name: &'static str, value: bool) -> Self {
        let text = if value { "True" } else { "False" };
        self.entries.push((name, ParamValue::Atom(text.to_owned())));
        self
    }

    /// Enumerated parameter, sent as its wire name.
    pub fn enumeration(mut self, name: &'static str, variant: &'static str) -> Self {
        self.entries.push((name, ParamValue::Atom(variant.to_owned())));
        self
    }

    /// Free-text parameter, percent-encoded on output.
    pub fn text(mut self, name: &'static str, value: &str) -> Self {
        self.entries.push((name, ParamValue::Text(value.to_owned())));
        self
    }

    /// Optional free text; an absent value encodes as an empty value.
    pub fn opt_text(mut self, name: &'static str, value: Option<&str>) -> Self {
        let value = value.unwrap_or_default();
        self.entries.push((name, ParamValue::Text(value.to_owned())));
        self
    }

    /// Composite value embedded as JSON text. Optional composites serialize
    /// to `null` when absent, matching the reference wire convention.
    pub fn json<T: Serialize + ?Sized>(
        mut self,
        name: &'static str,
        value: &T,
    ) -> Result<Self, ApiError> {
        let text = serde_json::to_string(value)
            .map_err(|source| ApiError::Encode { name, source })?;
        self.entries.push((name, ParamValue::Json(text)));
        Ok(self)
    }

    /// Date/time embedded as JSON (quoted RFC 3339).
    pub fn date_time(self, name: &'static str, value: DateTime<Utc>) -> Result<Self, ApiError> {
        self.json(name, &value)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical `name=value&name=value` body, in insertion order.
    pub fn encode(&self) -> String {
        let mut body = String::new();
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                body.push('&');
            }
            body.push_str(name);
            body.push('=');
            match value {
                ParamValue::Atom(text) | ParamValue::Json(text) => body.push_str(text),
                ParamValue::Text(text) => {
                    body.extend(form_urlencoded::byte_serialize(text.as_bytes()))
                }
            }
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use stocklink_core::{StockItemId, StockLocationId};

    fn item_id(s: &str) -> StockItemId {
        StockItemId::from_str(s).unwrap()
    }

    #[test]
    fn encodes_in_insertion_order() {
        let body = Params::new()
            .text("keyWord", "widget")
            .int("entriesPerPage", 50)
            .int("pageNumber", 1)
            .encode();
        assert_eq!(body, "keyWord=widget&entriesPerPage=50&pageNumber=1");
    }

    #[test]
    fn identifiers_render_as_bare_uuid_text() {
        let id = item_id("01890a5d-ac96-774b-bcce-b302099a8057");
        let body = Params::new().id("stockItemId", id).encode();
        assert_eq!(body, "stockItemId=01890a5d-ac96-774b-bcce-b302099a8057");
    }

    #[test]
    fn free_text_is_percent_encoded() {
        let body = Params::new().text("SKU", "blue widget & co").encode();
        assert_eq!(body, "SKU=blue+widget+%26+co");
    }

    #[test]
    fn booleans_use_the_reference_spelling() {
        let body = Params::new()
            .boolean("excludeComposites", true)
            .boolean("excludeVariations", false)
            .encode();
        assert_eq!(body, "excludeComposites=True&excludeVariations=False");
    }

    #[test]
    fn absent_optional_text_encodes_as_empty_value() {
        let body = Params::new().opt_text("changeSource", None).encode();
        assert_eq!(body, "changeSource=");
    }

    #[test]
    fn composite_values_embed_raw_json() {
        let ids = vec![
            item_id("01890a5d-ac96-774b-bcce-b302099a8057"),
            item_id("01890a5d-ac96-774b-bcce-b302099a8058"),
        ];
        let body = Params::new()
            .json("pkStockItemIds", &ids)
            .unwrap()
            .encode();
        assert_eq!(
            body,
            "pkStockItemIds=[\"01890a5d-ac96-774b-bcce-b302099a8057\",\
             \"01890a5d-ac96-774b-bcce-b302099a8058\"]"
        );
    }

    #[test]
    fn absent_optional_composite_encodes_as_json_null() {
        let location: Option<StockLocationId> = None;
        let body = Params::new().json("locationId", &location).unwrap().encode();
        assert_eq!(body, "locationId=null");
    }

    #[test]
    fn date_times_embed_as_quoted_json() {
        use chrono::TimeZone;

        let date = Utc.with_ymd_and_hms(2026, 1, 15, 8, 30, 0).unwrap();
        let body = Params::new().date_time("startDate", date).unwrap().encode();
        let expected = format!("startDate={}", serde_json::to_string(&date).unwrap());
        assert_eq!(body, expected);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: no raw space, `&` or `=` from a text value survives
            /// into the encoded body.
            #[test]
            fn text_values_never_leak_reserved_bytes(value in ".{0,64}") {
                let body = Params::new().text("q", &value).encode();
                let encoded = &body["q=".len()..];
                prop_assert!(!encoded.contains(' '));
                prop_assert!(!encoded.contains('&'));
                prop_assert!(!encoded.contains('='));
            }

            /// Property: encoding is deterministic.
            #[test]
            fn encoding_is_stable(value in ".{0,64}") {
                let a = Params::new().text("q", &value).encode();
                let b = Params::new().text("q", &value).encode();
                prop_assert_eq!(a, b);
            }
        }
    }
}
