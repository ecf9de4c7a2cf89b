//! Best-effort parsing and ordering for messy, human-written version labels.
//!
//! ## Motivation
//!
//! Release tags and build labels in the wild rarely follow a single
//! schema. Numbers, date stamps, and maturity qualifiers like `alpha`,
//! `rc`, or `snapshot` appear in any combination and order, separated by
//! whatever the author had at hand. This crate accepts *any* such label,
//! never fails, and defines a total ordering that approximates the human
//! intuition of "newer versus older":
//!
//! - Release numbers compare first, with trailing zeroes trimmed, so
//!   `1`, `1.0`, and `1.0.0` rank equal.
//! - An embedded date stamp (`20230115`, `20230115123059`) compares next,
//!   when both labels carry one.
//! - Pre-release qualifiers compare last, by a fixed maturity order
//!   `dev < snapshot < alpha < beta < stable < final < fixed < milestone
//!   < rc < ga < release`, with synonym spellings normalized (`a1` ranks
//!   as `alpha1`, `c2` as `rc2`) and an unqualified label outranking any
//!   qualified build of the same numbers.
//!
//! It is neither a semver implementation nor a validator: build-metadata
//! precedence, constraint matching, and well-formedness checks are out of
//! scope.
//!
//! ## Examples
//!
//! ```rust
//! let released = anyver::parse("1.4");
//! let candidate = anyver::parse("1.4-RC2");
//!
//! assert!(candidate.lt(&released));
//! assert!(released.eq(&anyver::parse("1.4.0")));
//! assert_eq!(candidate.qualifiers()[0].name(), "rc");
//!
//! let mut versions = vec![
//!     anyver::parse("1.0"),
//!     anyver::parse("1.0-alpha"),
//!     anyver::parse("0.9.9"),
//!     anyver::parse("1.0-rc2"),
//! ];
//! versions.sort_by(|a, b| a.compare(b));
//!
//! let sorted: Vec<_> = versions.iter().map(|v| v.as_str()).collect();
//! assert_eq!(sorted, ["0.9.9", "1.0-alpha", "1.0-rc2", "1.0"]);
//! ```
//!
//! The empty label is the "no version" sentinel: it parses fine and can
//! be compared, but every relational helper involving it returns false,
//! including equality with itself.
//!
//! ```rust
//! let unset = anyver::parse("");
//! assert!(!unset.eq(&unset));
//! assert!(!unset.lt(&anyver::parse("1.0")));
//! ```
#![deny(
    bad_style,
    const_err,
    dead_code,
    improper_ctypes,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    private_in_public,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    unused,
    while_true
)]

pub use anyver_parser::VersionBuilder;
pub use anyver_version::{Qualifier, Qualifiers, Release, Version};

/// Parse a string slice into a [`Version`].
///
/// Parsing never fails: any input, including malformed, empty, or
/// non-ASCII text, produces some version.
///
/// ## Examples
///
/// ```rust
/// let version = anyver::parse("2.1_rc3");
/// assert_eq!(version.release(), &[2, 1]);
/// assert_eq!(version.qualifiers()[0].name(), "rc");
/// assert_eq!(version.qualifiers()[0].number(), 3);
///
/// let version = anyver::parse("7.3-20230115");
/// assert_eq!(version.date(), Some("20230115000000"));
/// ```
pub fn parse(input: &str) -> Version {
    Version::parse(input)
}

/// Parse a string slice into a custom [`VersionBuilder`].
///
/// Use this to parse into your own type, or to probe a label without
/// building a full [`Version`].
///
/// ## Examples
///
/// ```rust
/// use anyver::VersionBuilder;
///
/// /// True when the label carries any pre-release qualifier.
/// struct IsPreRelease(bool);
///
/// impl VersionBuilder for IsPreRelease {
///     type Out = bool;
///
///     fn new() -> Self {
///         IsPreRelease(false)
///     }
///
///     fn add_qualifier(&mut self, _name: &str, _number: u64) {
///         self.0 = true;
///     }
///
///     fn build(self) -> Self::Out {
///         self.0
///     }
/// }
///
/// assert!(anyver::parse_into::<IsPreRelease>("1.2.3-pre"));
/// assert!(!anyver::parse_into::<IsPreRelease>("1.2.3"));
/// ```
pub fn parse_into<V>(input: &str) -> V::Out
where
    V: VersionBuilder,
{
    anyver_parser::parse::<V>(input)
}
