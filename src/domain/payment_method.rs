use serde::{Deserialize, Deserializer, Serialize};

/// A payment method offered at the current checkout.
///
/// Supplied by the checkout runtime on every invocation. `id` identifies the
/// method to the runtime; `name` is what merchant priority entries match on.
/// A missing or `null` field reads as empty so that partially-populated
/// entries still deserialize and are filtered out by
/// [`PaymentMethod::is_eligible`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct PaymentMethod {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

impl PaymentMethod {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// A method can be moved or hidden only if it has both an id and a name.
    pub fn is_eligible(&self) -> bool {
        !self.id.is_empty() && !self.name.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads the checkout's method list, dropping `null` elements.
pub(crate) fn skip_null_methods<'de, D>(deserializer: D) -> Result<Vec<PaymentMethod>, D::Error>
where
    D: Deserializer<'de>,
{
    let methods = Option::<Vec<Option<PaymentMethod>>>::deserialize(deserializer)?;
    Ok(methods.into_iter().flatten().flatten().collect())
}
