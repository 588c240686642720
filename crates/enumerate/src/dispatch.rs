//! Dispatch over named functions.

use std::fmt;

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors from [`DispatchMap::lookup`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DispatchError {
	/// The requested name has no mapped function and no fallback was
	/// configured.
	#[error("function ({name}) is not in the map and there is no fallback defined")]
	Unmapped { name: String },
}

/// An immutable table of named functions with an optional fallback.
///
/// Keys are used verbatim - dispatch names are arbitrary caller-chosen
/// tokens, so unlike [`constants`](crate::constants) they are never
/// canonicalized. The table is exposed only through lookup methods; there
/// is no way to add, remove or replace an entry after construction.
pub struct DispatchMap<F> {
	table: FxHashMap<Box<str>, F>,
	fallback: Option<F>,
}

/// Builds a [`DispatchMap`] from name/function pairs, without a fallback.
///
/// Chain [`DispatchMap::with_fallback`] to configure one:
///
/// ```
/// use enumerate::function_map;
///
/// let handlers = function_map([("upper", |s: &str| s.to_uppercase())]);
/// let f = handlers.lookup("upper").unwrap();
/// assert_eq!(f("testing"), "TESTING");
/// ```
pub fn function_map<K, F, I>(entries: I) -> DispatchMap<F>
where
	I: IntoIterator<Item = (K, F)>,
	K: AsRef<str>,
{
	let table: FxHashMap<Box<str>, F> = entries
		.into_iter()
		.map(|(name, func)| (Box::from(name.as_ref()), func))
		.collect();
	DispatchMap { table, fallback: None }
}

impl<F> DispatchMap<F> {
	/// Sets the fallback returned for names that are not in the table.
	pub fn with_fallback(mut self, fallback: F) -> Self {
		self.fallback = Some(fallback);
		self
	}

	/// Selects the function registered for `name`.
	///
	/// Falls back to the configured fallback for unregistered names, and
	/// fails with [`DispatchError::Unmapped`] when there is none. The
	/// selected function is returned, never invoked.
	pub fn lookup(&self, name: &str) -> Result<&F, DispatchError> {
		self.table
			.get(name)
			.or(self.fallback.as_ref())
			.ok_or_else(|| DispatchError::Unmapped { name: name.to_owned() })
	}

	/// Returns the function registered for exactly `name`, ignoring the
	/// fallback.
	pub fn get(&self, name: &str) -> Option<&F> {
		self.table.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.table.contains_key(name)
	}

	pub fn fallback(&self) -> Option<&F> {
		self.fallback.as_ref()
	}

	pub fn len(&self) -> usize {
		self.table.len()
	}

	pub fn is_empty(&self) -> bool {
		self.table.is_empty()
	}
}

impl<F> fmt::Debug for DispatchMap<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DispatchMap")
			.field("len", &self.table.len())
			.field("has_fallback", &self.fallback.is_some())
			.finish_non_exhaustive()
	}
}
