pub mod application;
pub mod domain;
pub mod error;
pub mod interfaces;
pub mod logging;

pub use application::resolver::{PriorityResolver, resolve, run, try_resolve};
