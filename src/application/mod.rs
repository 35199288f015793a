//! Application layer containing the resolver that turns a merchant priority
//! list into checkout operations.
//!
//! Everything here is synchronous and free of I/O so it can run inside the
//! function host on the checkout hot path.

pub mod resolver;
