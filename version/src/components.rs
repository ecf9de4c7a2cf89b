use std::{cmp::Ordering, ops::Deref};

/// The release numbers of a version.
///
/// Trailing zero-valued numbers are trimmed during parsing, so the
/// sequence is either empty or ends in a nonzero number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Release {
    numbers: Vec<u64>,
}

impl Release {
    /// Constructs an empty release sequence
    pub const fn empty() -> Self {
        Self {
            numbers: Vec::new(),
        }
    }

    /// Returns an iterator over the release numbers
    pub fn iter(&self) -> impl Iterator<Item = &u64> + '_ {
        self.numbers.iter()
    }

    pub(crate) fn push(&mut self, num: u64) {
        self.numbers.push(num);
    }
}

impl Deref for Release {
    type Target = [u64];

    fn deref(&self) -> &Self::Target {
        &self.numbers[..]
    }
}

impl AsRef<[u64]> for Release {
    fn as_ref(&self) -> &[u64] {
        &self.numbers[..]
    }
}

impl From<Vec<u64>> for Release {
    fn from(numbers: Vec<u64>) -> Self {
        Self { numbers }
    }
}

impl PartialOrd for Release {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Release {
    /// Element-wise over the common prefix; when that ties, the sequence
    /// with more numbers remaining is greater.
    fn cmp(&self, other: &Self) -> Ordering {
        ReleaseCmp {
            lhs: self.numbers.iter(),
            rhs: other.numbers.iter(),
        }
        .find(|c| *c != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
    }
}

struct ReleaseCmp<I, J> {
    lhs: I,
    rhs: J,
}

impl<'a, I, J> Iterator for ReleaseCmp<I, J>
where
    I: Iterator<Item = &'a u64>,
    J: Iterator<Item = &'a u64>,
{
    type Item = Ordering;

    fn next(&mut self) -> Option<Self::Item> {
        match (self.lhs.next(), self.rhs.next()) {
            (None, None) => None,
            (Some(_), None) => Some(Ordering::Greater),
            (None, Some(_)) => Some(Ordering::Less),
            (Some(a), Some(b)) => Some(a.cmp(b)),
        }
    }
}

/// A single pre-release qualifier: a name plus an optional numeric suffix.
///
/// The name is the canonical spelling of a known qualifier (`alpha`,
/// `rc`, ...) or the literal lowercase token text for anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Qualifier {
    name: String,
    number: u64,
}

impl Qualifier {
    /// Constructs a qualifier from a name and its numeric suffix.
    pub fn new(name: impl Into<String>, number: u64) -> Self {
        Self {
            name: name.into(),
            number,
        }
    }

    /// The qualifier name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The numeric suffix, 0 when none was attached
    pub fn number(&self) -> u64 {
        self.number
    }

    fn rank(&self) -> (&str, u64) {
        (rank_of(&self.name), self.number)
    }
}

/// Maps a canonical qualifier name to its sortable rank string.
///
/// Unlisted names rank by their own literal text, so unknown qualifiers
/// order per ordinary string comparison, against each other as well as
/// against the two-digit ranks of the known names.
fn rank_of(name: &str) -> &str {
    match name {
        "dev" => "00",
        "snapshot" => "01",
        "alpha" => "02",
        "beta" => "03",
        "stable" => "04",
        "final" => "05",
        "fixed" => "06",
        "milestone" => "07",
        "rc" => "08",
        "ga" => "09",
        "release" => "10",
        unlisted => unlisted,
    }
}

// a missing qualifier ranks like an explicit `release`
const UNQUALIFIED: (&str, u64) = ("10", 0);

/// The ordered pre-release qualifiers of a version, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Qualifiers {
    entries: Vec<Qualifier>,
}

impl Qualifiers {
    /// Constructs an empty qualifier sequence
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns an iterator over the qualifiers
    pub fn iter(&self) -> impl Iterator<Item = &Qualifier> + '_ {
        self.entries.iter()
    }

    pub(crate) fn push(&mut self, qualifier: Qualifier) {
        self.entries.push(qualifier);
    }

    /// Pairwise rank comparison up to the longer sequence, the shorter
    /// side padded with the synthetic `release` qualifier.
    ///
    /// Not an `Ord` impl: distinct names can share a rank, which would be
    /// inconsistent with the structural equality used in tests.
    pub(crate) fn compare(&self, other: &Self) -> Ordering {
        QualifierCmp {
            lhs: self.entries.iter(),
            rhs: other.entries.iter(),
        }
        .find(|c| *c != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
    }
}

impl Deref for Qualifiers {
    type Target = [Qualifier];

    fn deref(&self) -> &Self::Target {
        &self.entries[..]
    }
}

impl AsRef<[Qualifier]> for Qualifiers {
    fn as_ref(&self) -> &[Qualifier] {
        &self.entries[..]
    }
}

impl From<Vec<Qualifier>> for Qualifiers {
    fn from(entries: Vec<Qualifier>) -> Self {
        Self { entries }
    }
}

fn padded(qualifier: Option<&Qualifier>) -> (&str, u64) {
    qualifier.map_or(UNQUALIFIED, Qualifier::rank)
}

struct QualifierCmp<I, J> {
    lhs: I,
    rhs: J,
}

impl<'a, I, J> Iterator for QualifierCmp<I, J>
where
    I: Iterator<Item = &'a Qualifier>,
    J: Iterator<Item = &'a Qualifier>,
{
    type Item = Ordering;

    fn next(&mut self) -> Option<Self::Item> {
        match (self.lhs.next(), self.rhs.next()) {
            (None, None) => None,
            (lhs, rhs) => Some(padded(lhs).cmp(&padded(rhs))),
        }
    }
}
