//! Ordinal mappings derived from an ordered list of names.

use crate::format::format_key;
use crate::map::EnumMap;

/// Builds an immutable mapping from canonicalized name to its zero-based
/// position in the input.
///
/// ```
/// use enumerate::ordinals;
///
/// let cardinals = ordinals(["North", "East", "South", "West"]);
/// assert_eq!(cardinals["NORTH"], 0);
/// assert_eq!(cardinals["WEST"], 3);
/// ```
pub fn ordinals<K, I>(names: I) -> EnumMap<usize>
where
	I: IntoIterator<Item = K>,
	K: AsRef<str>,
{
	ordinals_with(names, |index, _| index)
}

/// Builds an immutable mapping from canonicalized name to
/// `value_fn(index, name)`.
///
/// `index` is the name's zero-based position in input order and `name` the
/// original, non-canonicalized string. [`ordinals`] is the identity-on-index
/// form of this constructor.
pub fn ordinals_with<K, V, I, F>(names: I, mut value_fn: F) -> EnumMap<V>
where
	I: IntoIterator<Item = K>,
	K: AsRef<str>,
	F: FnMut(usize, &str) -> V,
{
	EnumMap::from_canonical_entries(names.into_iter().enumerate().map(move |(index, name)| {
		let raw = name.as_ref();
		(format_key(raw).into_boxed_str(), value_fn(index, raw))
	}))
}

#[cfg(test)]
mod tests {
	use super::{ordinals, ordinals_with};

	#[test]
	fn test_default_value_is_the_index() {
		let cardinals = ordinals(["North", "East", "South", "West"]);

		assert_eq!(cardinals["NORTH"], 0);
		assert_eq!(cardinals["EAST"], 1);
		assert_eq!(cardinals["SOUTH"], 2);
		assert_eq!(cardinals["WEST"], 3);
	}

	/// Index assignment follows input order exactly.
	#[test]
	fn test_order_is_significant() {
		let reversed = ordinals(["West", "South", "East", "North"]);

		assert_eq!(reversed["WEST"], 0);
		assert_eq!(reversed["NORTH"], 3);
	}

	/// The value function sees the original name, not the canonical key.
	#[test]
	fn test_value_fn_receives_index_and_original_name() {
		let labeled = ordinals_with(["North", "NorthEast"], |index, name| {
			format!("{index}:{name}")
		});

		assert_eq!(labeled["NORTH"], "0:North");
		assert_eq!(labeled["NORTH_EAST"], "1:NorthEast");
	}

	#[test]
	fn test_empty_sequence_builds_empty_map() {
		let empty = ordinals(Vec::<String>::new());
		assert!(empty.is_empty());
	}
}
