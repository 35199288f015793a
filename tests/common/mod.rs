use payment_customizer::domain::payment_method::PaymentMethod;
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde_json::{Value, json};

const NAMES: &[&str] = &[
    "Cash", "Card", "Crypto", "PayPal", "Bank Deposit", "Gift card", "Klarna", "",
];

/// Checkout methods drawn from a small name pool so that duplicates,
/// blanks and unmatched names all occur.
pub fn random_methods(rng: &mut StdRng, max_len: usize) -> Vec<PaymentMethod> {
    let len = rng.gen_range(0..=max_len);
    (0..len)
        .map(|i| {
            let id = if rng.gen_bool(0.1) {
                String::new()
            } else {
                format!("gid://shopify/PaymentMethod/{}", i)
            };
            let name = NAMES.choose(rng).copied().unwrap_or_default();
            PaymentMethod::new(id, name)
        })
        .collect()
}

/// A priority configuration array with the occasional junk element.
pub fn random_priority_config(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.gen_range(0..=max_len);
    let entries: Vec<Value> = (0..len)
        .map(|_| match rng.gen_range(0..10) {
            0 => Value::Null,
            1 => json!({ "priority": rng.gen_range(1..10) }),
            _ => json!({
                "name": NAMES.choose(rng).copied().unwrap_or_default(),
                "priority": rng.gen_range(1..10),
            }),
        })
        .collect();
    Value::Array(entries).to_string()
}
