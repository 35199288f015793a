use super::payment_method::{PaymentMethod, skip_null_methods};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct Metafield {
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct Shop {
    #[serde(default)]
    pub metafield: Option<Metafield>,
}

/// The payload the checkout runtime hands the function on each invocation.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RunInput {
    #[serde(default)]
    pub shop: Option<Shop>,
    #[serde(default, deserialize_with = "skip_null_methods")]
    pub payment_methods: Vec<PaymentMethod>,
}

impl RunInput {
    pub fn new(metafield_value: Option<&str>, payment_methods: Vec<PaymentMethod>) -> Self {
        Self {
            shop: Some(Shop {
                metafield: Some(Metafield {
                    value: metafield_value.map(str::to_string),
                }),
            }),
            payment_methods,
        }
    }

    /// The raw priority configuration, if the shop has one.
    pub fn metafield_value(&self) -> Option<&str> {
        self.shop
            .as_ref()?
            .metafield
            .as_ref()?
            .value
            .as_deref()
    }
}
