//! Key canonicalization.
//!
//! Every mapping produced by [`constants`](crate::constants) and
//! [`ordinals`](crate::ordinals) is keyed by the canonical
//! uppercase-with-underscores form of the caller's key, computed by
//! [`format_key`].

/// Canonicalizes a key into uppercase-with-underscores form.
///
/// A key containing no lowercase ASCII letter is considered already
/// canonical (or not letter-based) and is returned unchanged. Otherwise an
/// underscore is inserted before every ASCII uppercase letter, the whole
/// string is uppercased, and a single leading underscore is stripped so
/// that keys starting with an uppercase letter do not gain one.
///
/// The transform is gated on the whole key, and each ASCII uppercase letter
/// is prefixed independently, so runs of uppercase letters fan out:
/// `"ABCdef"` becomes `"A_B_CDEF"`.
///
/// # Examples
///
/// ```
/// use enumerate::format_key;
///
/// assert_eq!(format_key("showDialog"), "SHOW_DIALOG");
/// assert_eq!(format_key("SHOW_DIALOG"), "SHOW_DIALOG");
/// assert_eq!(format_key("123-456"), "123-456");
/// ```
pub fn format_key(key: &str) -> String {
	if !key.bytes().any(|b| b.is_ascii_lowercase()) {
		return key.to_owned();
	}

	let mut formatted = String::with_capacity(key.len() + key.len() / 2);
	for ch in key.chars() {
		if ch.is_ascii_uppercase() {
			formatted.push('_');
		}
		formatted.extend(ch.to_uppercase());
	}
	if formatted.starts_with('_') {
		formatted.remove(0);
	}
	formatted
}

#[cfg(test)]
mod tests {
	use super::format_key;

	#[test]
	fn test_canonical_keys_pass_through() {
		assert_eq!(format_key("SHOW"), "SHOW");
		assert_eq!(format_key("SHOW_DIALOG"), "SHOW_DIALOG");
		assert_eq!(format_key("NORTH_WEST"), "NORTH_WEST");
	}

	#[test]
	fn test_camel_case_is_split() {
		assert_eq!(format_key("showDialog"), "SHOW_DIALOG");
		assert_eq!(format_key("hideDialog"), "HIDE_DIALOG");
		assert_eq!(format_key("NorthWest"), "NORTH_WEST");
	}

	#[test]
	fn test_single_lowercase_word() {
		assert_eq!(format_key("show"), "SHOW");
		assert_eq!(format_key("x"), "X");
	}

	/// Keys without letters never match the lowercase gate and come back
	/// untouched, symbols and all.
	#[test]
	fn test_non_letter_keys_pass_through() {
		assert_eq!(format_key("123-456"), "123-456");
		assert_eq!(format_key(""), "");
		assert_eq!(format_key("__"), "__");
	}

	/// Each uppercase letter in a run gets its own underscore; only the
	/// leading one is stripped.
	#[test]
	fn test_uppercase_runs_fan_out() {
		assert_eq!(format_key("ABCdef"), "A_B_CDEF");
		assert_eq!(format_key("xYZ"), "X_Y_Z");
	}

	#[test]
	fn test_leading_underscore_is_absorbed() {
		assert_eq!(format_key("_showDialog"), "SHOW_DIALOG");
		assert_eq!(format_key("_show"), "SHOW");
	}

	#[test]
	fn test_digits_inside_keys_are_kept() {
		assert_eq!(format_key("http2Server"), "HTTP2_SERVER");
	}
}
