use thiserror::Error;

/// A precondition violation at the nullable boundary: an argument or a callback result was `None` where a value
/// was required.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Error)]
pub enum InvalidArgument {
  #[error("{argument} cannot be null")]
  Null { argument: &'static str },
  #[error("{argument} cannot return null")]
  NullReturn { argument: &'static str },
}
impl InvalidArgument {
  #[inline]
  pub(crate) fn null(argument: &'static str) -> Self {
    #[cfg(feature = "tracing")]
    tracing::debug!(argument, "rejected null argument");
    Self::Null { argument }
  }
  #[inline]
  pub(crate) fn null_return(argument: &'static str) -> Self {
    #[cfg(feature = "tracing")]
    tracing::debug!(argument, "rejected null callback result");
    Self::NullReturn { argument }
  }

  /// Name of the offending argument.
  #[inline]
  pub fn argument(&self) -> &'static str {
    match *self {
      InvalidArgument::Null { argument } | InvalidArgument::NullReturn { argument } => argument,
    }
  }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
  #[error(transparent)]
  InvalidArgument(#[from] InvalidArgument),
  /// A value was demanded from an absent optional.
  #[error("Expected {message}")]
  MissingElement { message: String },
}
impl Error {
  #[inline]
  pub(crate) fn missing_element(message: impl Into<String>) -> Self {
    Self::MissingElement { message: message.into() }
  }

  #[inline]
  pub fn is_invalid_argument(&self) -> bool { matches!(self, Error::InvalidArgument(_)) }
  #[inline]
  pub fn is_missing_element(&self) -> bool { matches!(self, Error::MissingElement { .. }) }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_invalid_argument_messages() {
    assert_eq!("mapper cannot be null", InvalidArgument::null("mapper").to_string());
    assert_eq!("mapper cannot return null", InvalidArgument::null_return("mapper").to_string());
    assert_eq!("other", InvalidArgument::null("other").argument());
  }

  #[test]
  fn test_error_is_transparent_over_invalid_argument() {
    let error: Error = InvalidArgument::null("predicate").into();
    assert!(error.is_invalid_argument());
    assert!(!error.is_missing_element());
    assert_eq!("predicate cannot be null", error.to_string());
  }

  #[test]
  fn test_missing_element_message() {
    let error = Error::missing_element("value to exist");
    assert!(error.is_missing_element());
    assert_eq!("Expected value to exist", error.to_string());
  }
}
