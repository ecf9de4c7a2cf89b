//! Version value type for the anyver parser.
//!
//! Companion version struct for the anyver_parser crate. A [`Version`]
//! keeps the original label verbatim next to its classified parts:
//! release numbers (trailing zeroes trimmed), an optional embedded date
//! stamp, and the ordered pre-release qualifiers. Two versions order by
//! release numbers first, then date, then qualifiers.
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

use std::{
    cmp::Ordering,
    fmt::{self, Display},
};

#[cfg(feature = "parser")]
use std::{convert::Infallible, str::FromStr};

mod components;
pub use components::{Qualifier, Qualifiers, Release};

/// Represents a parsed, human-written version label.
///
/// A `Version` is produced once by parsing and is immutable afterwards;
/// changing a version means parsing a new label. It holds no shared
/// state, so values can be copied and read from any number of threads.
///
/// The empty label parses into the sentinel "no version": it can still be
/// passed around and compared with [`Version::compare`], but every
/// relational helper involving it returns `false`, including
/// [`Version::eq`] on itself.
///
/// ## Examples
///
/// ```rust
/// # use anyver_version::Version;
/// let version = Version::parse("1.4.0-RC2");
/// assert_eq!(version.as_str(), "1.4.0-RC2");
/// assert_eq!(version.release(), &[1, 4]);
/// assert_eq!(version.qualifiers()[0].name(), "rc");
/// assert_eq!(version.qualifiers()[0].number(), 2);
///
/// let version = Version::parse("7.3-20230115");
/// assert_eq!(version.release(), &[7, 3]);
/// assert_eq!(version.date(), Some("20230115000000"));
/// ```
#[derive(Debug, Clone)]
pub struct Version {
    text: String,
    release: Release,
    date: Option<String>,
    qualifiers: Qualifiers,
}

impl Version {
    /// Constructs the empty version, the "no version" sentinel.
    ///
    /// ## Examples
    ///
    /// ```
    /// # use anyver_version::Version;
    /// let version = Version::empty();
    /// assert!(version.is_empty());
    /// assert_eq!(version.as_str(), "");
    /// ```
    pub const fn empty() -> Self {
        Version {
            text: String::new(),
            release: Release::empty(),
            date: None,
            qualifiers: Qualifiers::empty(),
        }
    }

    /// Parse a string slice into a Version.
    ///
    /// Parsing never fails: any input, including malformed, empty, or
    /// non-ASCII text, produces some version. For the grammar, see
    /// [`anyver_parser::parse`].
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use anyver_version::Version;
    /// let version = Version::parse("1.0_rc2");
    /// assert_eq!(version.release(), &[1]);
    /// assert_eq!(version.qualifiers()[0].name(), "rc");
    ///
    /// let version = Version::parse("total nonsense");
    /// assert!(version.release().is_empty());
    /// assert_eq!(version.as_str(), "total nonsense");
    /// ```
    #[cfg(feature = "parser")]
    pub fn parse(input: &str) -> Self {
        anyver_parser::parse::<Self>(input)
    }

    /// The original label, verbatim
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The release numbers, trailing zeroes trimmed
    pub fn release(&self) -> &[u64] {
        &self.release
    }

    /// The embedded date stamp, normalized to 14 digits
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// The pre-release qualifiers, in source order
    pub fn qualifiers(&self) -> &[Qualifier] {
        &self.qualifiers
    }

    /// Returns true if this is the "no version" sentinel parsed from the
    /// empty label.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns true if the label carries any pre-release qualifier.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use anyver_version::Version;
    /// assert!(Version::parse("1.0-beta").is_pre_release());
    /// assert!(!Version::parse("1.0").is_pre_release());
    /// ```
    pub fn is_pre_release(&self) -> bool {
        !self.qualifiers.is_empty()
    }

    /// Compare two versions.
    ///
    /// The tiers apply in order and the first one that does not tie wins:
    ///
    /// 1. Release numbers, element-wise; when the common prefix ties, the
    ///    version with more numbers is greater.
    /// 2. The date stamps, but only when both versions have one.
    /// 3. The qualifiers, pairwise; a missing entry ranks like an
    ///    explicit `release` qualifier, so an unqualified version
    ///    outranks its alpha/beta/rc/snapshot builds.
    ///
    /// This is a best-effort ordering over arbitrary labels, not a semver
    /// precedence; it stays comparable (and merely coarse) for inputs the
    /// grammar was never meant for.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use anyver_version::Version;
    /// use std::cmp::Ordering;
    ///
    /// let stable = Version::parse("1.4");
    /// let candidate = Version::parse("1.4-rc2");
    /// assert_eq!(candidate.compare(&stable), Ordering::Less);
    /// assert_eq!(stable.compare(&Version::parse("1.4.0")), Ordering::Equal);
    /// ```
    pub fn compare(&self, other: &Self) -> Ordering {
        self.release
            .cmp(&other.release)
            .then_with(|| self.compare_date(other))
            .then_with(|| self.qualifiers.compare(&other.qualifiers))
    }

    fn compare_date(&self, other: &Self) -> Ordering {
        match (&self.date, &other.date) {
            // both stamps are 14 digits, string order is date order
            (Some(lhs), Some(rhs)) => lhs.cmp(rhs),
            _ => Ordering::Equal,
        }
    }

    fn comparable(&self, other: &Self) -> bool {
        !self.text.is_empty() && !other.text.is_empty()
    }

    /// Returns true if this version is older than the other.
    ///
    /// Returns false whenever either version is the empty sentinel.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use anyver_version::Version;
    /// assert!(Version::parse("1.0-beta").lt(&Version::parse("1.0")));
    /// assert!(!Version::parse("").lt(&Version::parse("1.0")));
    /// ```
    pub fn lt(&self, other: &Self) -> bool {
        self.comparable(other) && self.compare(other) == Ordering::Less
    }

    /// Returns true if this version is older than or ranks equal to the
    /// other.
    ///
    /// Returns false whenever either version is the empty sentinel.
    pub fn lte(&self, other: &Self) -> bool {
        self.comparable(other) && self.compare(other) != Ordering::Greater
    }

    /// Returns true if this version is newer than the other.
    ///
    /// Returns false whenever either version is the empty sentinel.
    pub fn gt(&self, other: &Self) -> bool {
        self.comparable(other) && self.compare(other) == Ordering::Greater
    }

    /// Returns true if this version is newer than or ranks equal to the
    /// other.
    ///
    /// Returns false whenever either version is the empty sentinel.
    pub fn gte(&self, other: &Self) -> bool {
        self.comparable(other) && self.compare(other) != Ordering::Less
    }

    /// Returns true if both versions rank equal.
    ///
    /// Returns false whenever either version is the empty sentinel, so
    /// the sentinel is not even equal to itself.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use anyver_version::Version;
    /// assert!(Version::parse("1.0").eq(&Version::parse("1.0.0")));
    ///
    /// let unset = Version::parse("");
    /// assert!(!unset.eq(&unset));
    /// ```
    pub fn eq(&self, other: &Self) -> bool {
        self.comparable(other) && self.compare(other) == Ordering::Equal
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::empty()
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.text)
    }
}

#[cfg(feature = "parser")]
impl From<&str> for Version {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

#[cfg(feature = "parser")]
impl FromStr for Version {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(input))
    }
}

#[cfg(feature = "parser")]
impl anyver_parser::VersionBuilder for Version {
    type Out = Self;

    fn new() -> Self {
        Version::empty()
    }

    fn set_original(&mut self, text: &str) {
        self.text = text.to_owned();
    }

    fn add_release(&mut self, num: u64) {
        self.release.push(num);
    }

    fn set_date(&mut self, date: &str) {
        self.date = Some(date.to_owned());
    }

    fn add_qualifier(&mut self, name: &str, number: u64) {
        self.qualifiers.push(Qualifier::new(name, number));
    }

    fn build(self) -> Self::Out {
        self
    }
}

#[cfg(all(feature = "serde", feature = "parser"))]
use serde::de::{self, Deserialize, Deserializer, Visitor};
#[cfg(feature = "serde")]
use serde::ser::{Serialize, Serializer};

#[cfg(feature = "serde")]
impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(all(feature = "serde", feature = "parser"))]
impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor;

        impl<'de> Visitor<'de> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a version string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Version::parse(v))
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}
