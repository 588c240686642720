//! Immutable enumeration-like lookup structures.
//!
//! Three constructors, each producing a structure that is built once from
//! its input and never mutated afterwards:
//!
//! - [`constants`] - named constants with canonicalized keys
//! - [`function_map`] - dispatch over named functions, with an optional
//!   fallback
//! - [`ordinals`] / [`ordinals_with`] - mappings derived from an ordered
//!   list of names, valued by position
//!
//! All three canonicalize or copy their input keys up front; the produced
//! [`EnumMap`] and [`DispatchMap`] expose read access only.
//!
//! # Examples
//!
//! ```
//! use enumerate::{constants, ordinals};
//!
//! let dialog = constants([("showDialog", true), ("hideDialog", false)]);
//! assert!(dialog["SHOW_DIALOG"]);
//! assert!(!dialog["HIDE_DIALOG"]);
//!
//! let cardinals = ordinals(["North", "East", "South", "West"]);
//! assert_eq!(cardinals["EAST"], 1);
//! ```

pub mod constants;
pub mod dispatch;
pub mod format;
pub mod map;
pub mod ordinals;

pub use constants::constants;
pub use dispatch::{DispatchError, DispatchMap, function_map};
pub use format::format_key;
pub use map::EnumMap;
pub use ordinals::{ordinals, ordinals_with};
