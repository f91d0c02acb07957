use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::optional::Optional;

/// Serializes like a nullable value: the value itself when present, `null` when absent.
impl<T: Serialize> Serialize for Optional<T> {
  #[inline]
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.as_ref().or_null().serialize(serializer)
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
  #[inline]
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Option::<T>::deserialize(deserializer).map(Optional::from_nullable)
  }
}
