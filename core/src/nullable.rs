//! Operations over nullable arguments: `None` stands in for a null argument or a null callback result.
//!
//! Null arguments are rejected with an [invalid argument](InvalidArgument) error before the variant is inspected,
//! so a null argument fails even when the operation would not have used it. A null callback result is only
//! detected when the callback actually runs.

use crate::error::{Error, InvalidArgument};
use crate::optional::Optional;

#[inline]
fn require<T>(value: Option<T>, argument: &'static str) -> Result<T, InvalidArgument> {
  value.ok_or_else(|| InvalidArgument::null(argument))
}

#[inline]
fn require_return<T>(value: Option<T>, argument: &'static str) -> Result<T, InvalidArgument> {
  value.ok_or_else(|| InvalidArgument::null_return(argument))
}

impl<T> Optional<T> {
  /// Creates a present optional, failing if `value` is null.
  #[inline]
  pub fn try_present(value: Option<T>) -> Result<Self, InvalidArgument> {
    let value = require(value, "value")?;
    Ok(Self::present(value))
  }

  /// Converts a nullable host optional. An outer `None` is a null reference and fails; an inner `None` is an empty
  /// host optional and becomes absent.
  #[inline]
  pub fn try_from_host(optional: Option<Option<T>>) -> Result<Self, InvalidArgument> {
    let optional = require(optional, "optional")?;
    Ok(Self::from(optional))
  }


  /// [or](Self::or) with a nullable `other`. An absent `other` is valid; a null `other` is not.
  #[inline]
  pub fn try_or(self, other: Option<Optional<T>>) -> Result<Self, InvalidArgument> {
    let other = require(other, "other")?;
    Ok(self.or(other))
  }

  #[inline]
  pub fn try_or_else<F>(self, other_supplier: Option<F>) -> Result<Self, InvalidArgument> where
    F: FnOnce() -> Option<Optional<T>>
  {
    let other_supplier = require(other_supplier, "other_supplier")?;
    match self {
      Self::Present(_) => Ok(self),
      Self::Absent => require_return(other_supplier(), "other_supplier"),
    }
  }

  #[inline]
  pub fn try_or_default(self, default_value: Option<T>) -> Result<T, InvalidArgument> {
    let default_value = require(default_value, "default_value")?;
    Ok(self.or_default(default_value))
  }

  #[inline]
  pub fn try_or_get<F>(self, default_value_supplier: Option<F>) -> Result<T, InvalidArgument> where
    F: FnOnce() -> Option<T>
  {
    let default_value_supplier = require(default_value_supplier, "default_value_supplier")?;
    match self {
      Self::Present(value) => Ok(value),
      Self::Absent => require_return(default_value_supplier(), "default_value_supplier"),
    }
  }

  /// [or_throw](Self::or_throw) with a nullable supplier. The outer result reports invalid arguments; the inner
  /// result carries the value or the supplied error.
  #[inline]
  pub fn try_or_throw<E, F>(self, error_supplier: Option<F>) -> Result<Result<T, E>, InvalidArgument> where
    F: FnOnce() -> Option<E>
  {
    let error_supplier = require(error_supplier, "error_supplier")?;
    match self {
      Self::Present(value) => Ok(Ok(value)),
      Self::Absent => Ok(Err(require_return(error_supplier(), "error_supplier")?)),
    }
  }

  #[inline]
  pub fn try_expect(self, message: Option<&str>) -> Result<T, Error> {
    let message = require(message, "message")?;
    self.expect(message)
  }


  #[inline]
  pub fn try_map<M, F>(self, mapper: Option<F>) -> Result<Optional<M>, InvalidArgument> where
    F: FnOnce(T) -> Option<M>
  {
    let mapper = require(mapper, "mapper")?;
    match self {
      Self::Present(value) => Ok(Optional::present(require_return(mapper(value), "mapper")?)),
      Self::Absent => Ok(Optional::absent()),
    }
  }

  #[inline]
  pub fn try_flat_map<M, F>(self, mapper: Option<F>) -> Result<Optional<M>, InvalidArgument> where
    F: FnOnce(T) -> Option<Optional<M>>
  {
    let mapper = require(mapper, "mapper")?;
    match self {
      Self::Present(value) => require_return(mapper(value), "mapper"),
      Self::Absent => Ok(Optional::absent()),
    }
  }

  #[inline]
  pub fn try_filter<P>(self, predicate: Option<P>) -> Result<Self, InvalidArgument> where
    P: FnOnce(&T) -> bool
  {
    let predicate = require(predicate, "predicate")?;
    Ok(self.filter(predicate))
  }
}
