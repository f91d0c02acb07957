use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::error::Error;

/// A value that is either [present](Optional::Present) or [absent](Optional::Absent).
///
/// An `Optional` is an immutable value: every operation either returns `self` unchanged or creates a new instance.
/// Interop with the nullable representation, [`std::option::Option`], goes through [from_nullable](Self::from_nullable),
/// [or_null](Self::or_null), the `From` conversions, and the `try_` operations.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Optional<T> {
  /// Holds a value.
  Present(T),
  /// Holds nothing.
  Absent,
}

impl<T> Optional<T> {
  #[inline]
  pub const fn present(value: T) -> Self { Self::Present(value) }
  #[inline]
  pub const fn absent() -> Self { Self::Absent }

  /// Creates a present optional if `value` is `Some`, or an absent one if it is `None`.
  #[inline]
  pub fn from_nullable(value: Option<T>) -> Self {
    match value {
      Some(value) => Self::present(value),
      None => Self::absent(),
    }
  }


  #[inline]
  pub const fn is_present(&self) -> bool { matches!(self, Self::Present(_)) }
  #[inline]
  pub const fn is_absent(&self) -> bool { matches!(self, Self::Absent) }

  /// Borrows the value, if present.
  #[inline]
  pub const fn as_ref(&self) -> Optional<&T> {
    match self {
      Self::Present(value) => Optional::Present(value),
      Self::Absent => Optional::Absent,
    }
  }


  /// Returns `self` if present, otherwise `other`.
  #[inline]
  pub fn or(self, other: Optional<T>) -> Self {
    match self {
      Self::Present(_) => self,
      Self::Absent => other,
    }
  }

  /// Returns `self` if present, otherwise the optional created by `other_supplier`. The supplier is only called
  /// when `self` is absent.
  #[inline]
  pub fn or_else(self, other_supplier: impl FnOnce() -> Optional<T>) -> Self {
    match self {
      Self::Present(_) => self,
      Self::Absent => other_supplier(),
    }
  }

  #[inline]
  pub fn or_default(self, default_value: T) -> T {
    match self {
      Self::Present(value) => value,
      Self::Absent => default_value,
    }
  }

  /// Returns the value if present, otherwise the value created by `default_value_supplier`. The supplier is only
  /// called when `self` is absent.
  #[inline]
  pub fn or_get(self, default_value_supplier: impl FnOnce() -> T) -> T {
    match self {
      Self::Present(value) => value,
      Self::Absent => default_value_supplier(),
    }
  }

  /// Returns the value as `Some` if present, or `None` if absent.
  #[inline]
  pub fn or_null(self) -> Option<T> {
    match self {
      Self::Present(value) => Some(value),
      Self::Absent => None,
    }
  }

  /// Returns the value if present, otherwise the error created by `error_supplier`.
  ///
  /// Unstable: may change in a future version.
  #[inline]
  pub fn or_throw<E>(self, error_supplier: impl FnOnce() -> E) -> Result<T, E> {
    match self {
      Self::Present(value) => Ok(value),
      Self::Absent => Err(error_supplier()),
    }
  }

  /// Returns the value if present, otherwise a [missing element](Error::MissingElement) error described as
  /// `Expected {message}`.
  ///
  /// Experimental: may change in a future version.
  #[inline]
  pub fn expect(self, message: &str) -> Result<T, Error> {
    match self {
      Self::Present(value) => Ok(value),
      Self::Absent => Err(Error::missing_element(message)),
    }
  }


  /// Applies `mapper` to the value if present. `mapper` is not called when `self` is absent.
  #[inline]
  pub fn map<M>(self, mapper: impl FnOnce(T) -> M) -> Optional<M> {
    match self {
      Self::Present(value) => Optional::present(mapper(value)),
      Self::Absent => Optional::absent(),
    }
  }

  /// Returns the optional that `mapper` creates from the value if present. `mapper` is not called when `self` is
  /// absent.
  #[inline]
  pub fn flat_map<M>(self, mapper: impl FnOnce(T) -> Optional<M>) -> Optional<M> {
    match self {
      Self::Present(value) => mapper(value),
      Self::Absent => Optional::absent(),
    }
  }

  /// Returns `self` if present and `predicate` matches the value, otherwise an absent optional.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    match self {
      Self::Present(value) => if predicate(&value) { Self::present(value) } else { Self::absent() },
      Self::Absent => Self::absent(),
    }
  }
}

impl<T> Default for Optional<T> {
  #[inline]
  fn default() -> Self { Self::absent() }
}

impl<T> From<Option<T>> for Optional<T> {
  #[inline]
  fn from(value: Option<T>) -> Self { Self::from_nullable(value) }
}

impl<T> From<Optional<T>> for Option<T> {
  #[inline]
  fn from(optional: Optional<T>) -> Self { optional.or_null() }
}


/// A present optional hashes as its value alone; an absent optional hashes as the constant `0`.
impl<T: Hash> Hash for Optional<T> {
  #[inline]
  fn hash<H: Hasher>(&self, state: &mut H) {
    match self {
      Optional::Present(value) => value.hash(state),
      Optional::Absent => 0i32.hash(state),
    }
  }
}

impl<T: Display> Display for Optional<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Optional::Present(value) => write!(f, "Present({})", value),
      Optional::Absent => f.write_str("Absent()"),
    }
  }
}
