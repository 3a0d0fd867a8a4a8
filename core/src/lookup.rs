use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use hashlink::LinkedHashMap;

use crate::opt::Opt;

/// Key lookup on an associative container, yielding an [`Opt`].
///
/// A present key is ok even when the stored value equals `V::default()`;
/// only a missing key — or a missing container, via the `Option` impl — is
/// absent.
pub trait Lookup<K, V> {
  fn lookup(&self, key: &K) -> Opt<&V>;
}

impl<K: Eq + Hash, V, S: BuildHasher> Lookup<K, V> for HashMap<K, V, S> {
  #[inline]
  fn lookup(&self, key: &K) -> Opt<&V> {
    Opt::from_option(self.get(key))
  }
}

impl<K: Ord, V> Lookup<K, V> for BTreeMap<K, V> {
  #[inline]
  fn lookup(&self, key: &K) -> Opt<&V> {
    Opt::from_option(self.get(key))
  }
}

impl<K: Eq + Hash, V, S: BuildHasher> Lookup<K, V> for LinkedHashMap<K, V, S> {
  #[inline]
  fn lookup(&self, key: &K) -> Opt<&V> {
    Opt::from_option(self.get(key))
  }
}

impl<K, V, M: Lookup<K, V>> Lookup<K, V> for Option<&M> {
  #[inline]
  fn lookup(&self, key: &K) -> Opt<&V> {
    match self {
      Some(container) => container.lookup(key),
      None => Opt::none(),
    }
  }
}
