//! Adapters between the outside world (files, stdin/stdout) and the domain.

pub mod csv;
pub mod json;
