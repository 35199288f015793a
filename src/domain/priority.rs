use crate::error::{CustomizationError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Metafield namespace the admin app publishes the priority list under.
pub const METAFIELD_NAMESPACE: &str = "paymentCustomization";
/// Metafield key the admin app publishes the priority list under.
pub const METAFIELD_KEY: &str = "payment-added-value";
/// Metafield type of the published value.
pub const METAFIELD_TYPE: &str = "json";

/// One merchant-authored row of the priority list.
///
/// `priority` is carried for the merchant's benefit only. The resolver orders
/// by position in the list, never by this number.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct PriorityEntry {
    pub name: String,
    #[serde(
        default,
        deserialize_with = "lenient_priority",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<i64>,
}

impl PriorityEntry {
    pub fn new(name: impl Into<String>, priority: i64) -> Self {
        Self {
            name: name.into(),
            priority: Some(priority),
        }
    }

    /// Reads one element of the metafield array. Anything that is not an
    /// object with a string `name` yields `None`.
    fn from_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let name = object.get("name")?.as_str()?;
        Some(Self {
            name: name.to_string(),
            priority: object.get("priority").and_then(Value::as_i64),
        })
    }

    /// The name to match on, if the entry has one.
    pub fn usable_name(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(&self.name)
        }
    }
}

// A non-numeric priority must not make an otherwise usable entry unreadable.
fn lenient_priority<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_i64()))
}

/// The ordered priority list as published in the shop metafield.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct PriorityList {
    entries: Vec<PriorityEntry>,
}

impl PriorityList {
    pub fn new(entries: Vec<PriorityEntry>) -> Self {
        Self { entries }
    }

    /// Parses the raw metafield value.
    ///
    /// Anything other than a JSON array is a `MalformedConfiguration`.
    /// Elements that are not entries (null, scalars, objects without a string
    /// `name`) are skipped. A key repeated within one object keeps its last value.
    pub fn from_metafield_value(raw: &str) -> Result<Self> {
        let values: Vec<Value> =
            serde_json::from_str(raw).map_err(CustomizationError::MalformedConfiguration)?;
        let entries = values.iter().filter_map(PriorityEntry::from_json).collect();
        Ok(Self { entries })
    }

    /// Serializes the list into the compact JSON array stored in the metafield.
    /// Order is preserved as authored.
    pub fn to_metafield_value(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// Checks the list the way the admin API does before publishing it.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if entry.name.trim().is_empty() {
                return Err(CustomizationError::ValidationError(
                    "Payment method name must not be empty".to_string(),
                ));
            }
            let Some(priority) = entry.priority else {
                return Err(CustomizationError::ValidationError(format!(
                    "Payment method '{}' has no priority",
                    entry.name
                )));
            };
            if !seen.insert(priority) {
                return Err(CustomizationError::ValidationError(format!(
                    "Each payment method must have a unique priority (duplicate {})",
                    priority
                )));
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> &[PriorityEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PriorityEntry> {
        self.entries.iter()
    }
}

impl FromIterator<PriorityEntry> for PriorityList {
    fn from_iter<I: IntoIterator<Item = PriorityEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
