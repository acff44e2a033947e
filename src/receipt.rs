//! Receipt validation.
//!
//! Submitted receipts are untrusted JSON. They are walked as a generic
//! `serde_json::Value` so that every missing or malformed field can be
//! reported by name (`total`, `items[3].price`, ...) instead of as a generic
//! deserialization failure. Nothing downstream of [`parse_receipt`] needs to
//! re-check a field.

use crate::{AmountError, Cents, Item, Receipt};
use chrono::{NaiveDate, NaiveTime};
use serde_json::{Map, Value};
use thiserror::Error;

/// A receipt field that is missing, has the wrong JSON type, or does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be a JSON object")]
    NotAnObject { field: String },

    #[error("missing required field `{field}`")]
    Missing { field: String },

    #[error("field `{field}` must be {expected}")]
    WrongType { field: String, expected: &'static str },

    #[error("field `{field}` has invalid amount {value:?}: {reason}")]
    InvalidAmount { field: String, value: String, reason: AmountError },

    #[error("field `purchaseDate` has invalid date {value:?} (expected YYYY-MM-DD)")]
    InvalidDate { value: String },

    #[error("field `purchaseTime` has invalid time {value:?} (expected HH:MM, 24-hour)")]
    InvalidTime { value: String },
}

impl ValidationError {
    /// Name of the offending field, e.g. `items[2].price`.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::NotAnObject { field }
            | ValidationError::Missing { field }
            | ValidationError::WrongType { field, .. }
            | ValidationError::InvalidAmount { field, .. } => field,
            ValidationError::InvalidDate { .. } => "purchaseDate",
            ValidationError::InvalidTime { .. } => "purchaseTime",
        }
    }
}

/// Failure to turn a request body into a [`Receipt`].
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// The body is not JSON at all.
    #[error("invalid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The body is JSON but not a valid receipt.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Parse a raw request body into a validated [`Receipt`].
pub fn parse_receipt_json(body: &[u8]) -> Result<Receipt, ReceiptError> {
    let value: Value = serde_json::from_slice(body)?;
    Ok(parse_receipt(&value)?)
}

/// Validate an untyped JSON document and build a [`Receipt`].
///
/// Fields are checked in document order (`retailer`, `total`, `purchaseDate`,
/// `purchaseTime`, `items`) and the first failure is returned. Unknown fields
/// are ignored.
pub fn parse_receipt(value: &Value) -> Result<Receipt, ValidationError> {
    let obj = value.as_object().ok_or_else(|| ValidationError::NotAnObject { field: "receipt".to_string() })?;

    let retailer = required_str(obj, "retailer", "retailer")?.to_string();
    let total = parse_amount("total", required_str(obj, "total", "total")?)?;
    let purchase_date = parse_date(required_str(obj, "purchaseDate", "purchaseDate")?)?;
    let purchase_time = parse_time(required_str(obj, "purchaseTime", "purchaseTime")?)?;

    let items = obj
        .get("items")
        .ok_or_else(|| ValidationError::Missing { field: "items".to_string() })?
        .as_array()
        .ok_or_else(|| ValidationError::WrongType { field: "items".to_string(), expected: "an array" })?
        .iter()
        .enumerate()
        .map(|(idx, item)| parse_item(idx, item))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Receipt { retailer, total, purchase_date, purchase_time, items })
}

fn parse_item(idx: usize, value: &Value) -> Result<Item, ValidationError> {
    let path = format!("items[{idx}]");
    let obj = value.as_object().ok_or_else(|| ValidationError::NotAnObject { field: path.clone() })?;

    let description_field = format!("{path}.shortDescription");
    let short_description = required_str(obj, "shortDescription", &description_field)?.to_string();

    let price_field = format!("{path}.price");
    let price = parse_amount(&price_field, required_str(obj, "price", &price_field)?)?;

    Ok(Item { short_description, price })
}

/// Look up `key` and require a JSON string. `field` is the name used in errors.
fn required_str<'v>(obj: &'v Map<String, Value>, key: &str, field: &str) -> Result<&'v str, ValidationError> {
    match obj.get(key) {
        None | Some(Value::Null) => Err(ValidationError::Missing { field: field.to_string() }),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(ValidationError::WrongType { field: field.to_string(), expected: "a string" }),
    }
}

fn parse_amount(field: &str, value: &str) -> Result<Cents, ValidationError> {
    value.parse().map_err(|reason| ValidationError::InvalidAmount {
        field: field.to_string(),
        value: value.to_string(),
        reason,
    })
}

fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDate { value: value.to_string() };
    if !regex!(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").is_match(value) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid())
}

fn parse_time(value: &str) -> Result<NaiveTime, ValidationError> {
    let invalid = || ValidationError::InvalidTime { value: value.to_string() };
    if !regex!(r"^[0-9]{2}:[0-9]{2}$").is_match(value) {
        return Err(invalid());
    }
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| invalid())
}
