pub mod optional;
pub mod error;
mod nullable;

#[cfg(feature = "serde")]
mod serde_impls;

pub use error::{Error, InvalidArgument};
pub use optional::Optional;
