//! Signup-Forms-Validation Core
//!
//! Pure predicate functions used by the registration rule table.
//! Every function here is stateless and deterministic; callers pair them
//! with their own static messages.

pub mod date;
pub mod email;
pub mod numeric;
pub mod password;
pub mod string;

// Re-export all validators
pub use date::*;
pub use email::*;
pub use numeric::*;
pub use password::*;
pub use string::*;
