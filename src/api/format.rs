use serde::Serialize;
use serde_json::{Map, Value};

use crate::database::models::{Contact, Group, JotContact, JotDaily, JotGroup, User};

/// Per-entity field visibility for the public wire format
pub trait Visible: Serialize {
    /// Fields stripped from every response carrying this entity.
    const EXCLUDE: &'static [&'static str];
}

impl Visible for Contact {
    const EXCLUDE: &'static [&'static str] = &["owner_id", "date_created", "last_edit"];
}

impl Visible for Group {
    const EXCLUDE: &'static [&'static str] = &["owner_id", "date_created", "last_edit"];
}

impl Visible for JotDaily {
    const EXCLUDE: &'static [&'static str] = &["owner_id", "date_created", "last_edit"];
}

// Association jots have no owner column to hide.
impl Visible for JotContact {
    const EXCLUDE: &'static [&'static str] = &["date_created", "last_edit"];
}

impl Visible for JotGroup {
    const EXCLUDE: &'static [&'static str] = &["date_created", "last_edit"];
}

impl Visible for User {
    const EXCLUDE: &'static [&'static str] = &["password_hash"];
}

/// Serialize a record and drop its excluded fields
pub fn to_api_value<T: Visible>(record: &T) -> Result<Value, serde_json::Error> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(Value::Object(strip_excluded(map, T::EXCLUDE))),
        other => Ok(other),
    }
}

pub fn to_api_values<T: Visible>(records: &[T]) -> Result<Vec<Value>, serde_json::Error> {
    records.iter().map(to_api_value).collect()
}

fn strip_excluded(mut map: Map<String, Value>, exclude: &[&str]) -> Map<String, Value> {
    for field in exclude {
        map.remove(*field);
    }
    map
}
