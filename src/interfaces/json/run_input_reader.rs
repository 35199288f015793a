use crate::domain::input::RunInput;
use crate::error::Result;
use std::io::Read;

/// Reads the function input document the checkout runtime would supply.
pub struct RunInputReader<R: Read> {
    source: R,
}

impl<R: Read> RunInputReader<R> {
    /// Creates a new `RunInputReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Deserializes the whole document. Unlike the priority configuration, a
    /// malformed input document is a host error and is reported, not absorbed.
    pub fn read(self) -> Result<RunInput> {
        Ok(serde_json::from_reader(self.source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment_method::PaymentMethod;
    use crate::error::CustomizationError;

    #[test]
    fn test_read_valid_document() {
        let data = r#"{"shop":{"metafield":{"value":"[]"}},"paymentMethods":[{"id":"1","name":"Cash"}]}"#;
        let input = RunInputReader::new(data.as_bytes()).read().unwrap();
        assert_eq!(input.metafield_value(), Some("[]"));
        assert_eq!(input.payment_methods, vec![PaymentMethod::new("1", "Cash")]);
    }

    #[test]
    fn test_read_malformed_document() {
        let err = RunInputReader::new("{\"paymentMethods\":".as_bytes())
            .read()
            .unwrap_err();
        assert!(matches!(err, CustomizationError::JsonError(_)));
    }
}
