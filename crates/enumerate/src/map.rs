//! The immutable mapping produced by the enum builders.

use std::fmt;
use std::ops::Index;

use indexmap::IndexMap;

/// An immutable mapping from canonical key to an associated value.
///
/// Built by [`constants`](crate::constants), [`ordinals`](crate::ordinals)
/// and [`ordinals_with`](crate::ordinals_with); there is no public
/// constructor and no mutating method, so a mapping can never gain, lose or
/// reassign an entry after it is built. Write attempts fail at compile
/// time:
///
/// ```compile_fail
/// let dialog = enumerate::constants([("SHOW", true), ("HIDE", false)]);
/// dialog.insert("SHOW", false);
/// ```
///
/// Entries iterate in first-insertion order. When two input keys
/// canonicalize to the same key the last value wins and the key keeps its
/// original position; the collision is reported as a `tracing` debug event.
#[derive(Clone, PartialEq, Eq)]
pub struct EnumMap<V> {
	entries: IndexMap<Box<str>, V>,
}

impl<V> EnumMap<V> {
	/// Collects already-canonicalized entries, last definition winning on
	/// key collisions.
	pub(crate) fn from_canonical_entries<I>(entries: I) -> Self
	where
		I: IntoIterator<Item = (Box<str>, V)>,
	{
		let iter = entries.into_iter();
		let mut collected: IndexMap<Box<str>, V> = IndexMap::with_capacity(iter.size_hint().0);
		for (key, value) in iter {
			if collected.contains_key(&*key) {
				tracing::debug!(key = &*key, "canonical key collision, last definition wins");
			}
			collected.insert(key, value);
		}
		Self { entries: collected }
	}

	/// Returns the value for `key`, if present.
	pub fn get(&self, key: &str) -> Option<&V> {
		self.entries.get(key)
	}

	/// Returns the entry at `index` in insertion order.
	pub fn get_index(&self, index: usize) -> Option<(&str, &V)> {
		self.entries.get_index(index).map(|(key, value)| (key.as_ref(), value))
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
		self.entries.iter().map(|(key, value)| (key.as_ref(), value))
	}

	/// Iterates keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(AsRef::as_ref)
	}

	/// Iterates values in insertion order.
	pub fn values(&self) -> impl Iterator<Item = &V> {
		self.entries.values()
	}
}

impl<V> Index<&str> for EnumMap<V> {
	type Output = V;

	/// # Panics
	///
	/// Panics if `key` is not in the mapping. Use [`EnumMap::get`] for a
	/// fallible lookup.
	fn index(&self, key: &str) -> &V {
		self.get(key)
			.unwrap_or_else(|| panic!("no entry for key {key:?}"))
	}
}

impl<V: fmt::Debug> fmt::Debug for EnumMap<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

#[cfg(feature = "serde")]
impl<V: serde::Serialize> serde::Serialize for EnumMap<V> {
	/// Serializes as a map in insertion order. There is no `Deserialize`
	/// counterpart; construction flows only through the builders so keys
	/// stay canonical.
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_map(self.iter())
	}
}
