//! Named constants with canonicalized keys.

use crate::format::format_key;
use crate::map::EnumMap;

/// Builds an immutable mapping of named constants.
///
/// Every key is canonicalized with [`format_key`]; values are kept
/// unchanged. Accepts any iterable of pairs, so both literal arrays and
/// existing maps work:
///
/// ```
/// use enumerate::constants;
///
/// let dialog = constants([("SHOW", true), ("HIDE", false)]);
/// assert!(dialog["SHOW"]);
/// assert!(!dialog["HIDE"]);
/// ```
pub fn constants<K, V, I>(entries: I) -> EnumMap<V>
where
	I: IntoIterator<Item = (K, V)>,
	K: AsRef<str>,
{
	EnumMap::from_canonical_entries(
		entries
			.into_iter()
			.map(|(key, value)| (format_key(key.as_ref()).into_boxed_str(), value)),
	)
}
