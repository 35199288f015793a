use serde::{Deserialize, Serialize};

/// Reposition a payment method to `index` in the displayed list.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MoveOperation {
    pub payment_method_id: String,
    pub index: usize,
}

/// Remove a payment method from the displayed list.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HideOperation {
    pub payment_method_id: String,
}

/// An instruction for the checkout runtime.
///
/// Serialized externally tagged, e.g. `{"move":{"paymentMethodId":"1","index":0}}`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Move(MoveOperation),
    Hide(HideOperation),
}

impl Operation {
    pub fn move_to(payment_method_id: impl Into<String>, index: usize) -> Self {
        Self::Move(MoveOperation {
            payment_method_id: payment_method_id.into(),
            index,
        })
    }

    pub fn hide(payment_method_id: impl Into<String>) -> Self {
        Self::Hide(HideOperation {
            payment_method_id: payment_method_id.into(),
        })
    }

    pub fn payment_method_id(&self) -> &str {
        match self {
            Self::Move(op) => &op.payment_method_id,
            Self::Hide(op) => &op.payment_method_id,
        }
    }
}

/// The function's only output. An empty `operations` list means "no changes".
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct FunctionRunResult {
    pub operations: Vec<Operation>,
}

impl FunctionRunResult {
    pub fn no_changes() -> Self {
        Self::default()
    }

    pub fn is_no_changes(&self) -> bool {
        self.operations.is_empty()
    }
}

impl From<Vec<Operation>> for FunctionRunResult {
    fn from(operations: Vec<Operation>) -> Self {
        Self { operations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let result = FunctionRunResult::from(vec![
            Operation::move_to("B", 0),
            Operation::hide("C"),
        ]);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"operations":[{"move":{"paymentMethodId":"B","index":0}},{"hide":{"paymentMethodId":"C"}}]}"#
        );
    }

    #[test]
    fn test_no_changes_serialization() {
        let json = serde_json::to_string(&FunctionRunResult::no_changes()).unwrap();
        assert_eq!(json, r#"{"operations":[]}"#);
    }

    #[test]
    fn test_payment_method_id_accessor() {
        assert_eq!(Operation::move_to("A", 3).payment_method_id(), "A");
        assert_eq!(Operation::hide("Z").payment_method_id(), "Z");
    }
}
