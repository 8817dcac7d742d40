//! Request and response models mirroring the upstream API schemas.
//!
//! Field names follow the camelCase spelling of the specification document.
//! Query types render themselves to URL query pairs; list parameters repeat
//! the key for every value.

mod builds;
mod tests_api;

pub use builds::*;
pub use tests_api::*;
