//! Domain types shared by the resolver and the interface adapters.

pub mod input;
pub mod operation;
pub mod payment_method;
pub mod priority;
