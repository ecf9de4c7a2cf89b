//! Tolerant parser for arbitrary, human-written version labels.
//!
//! Unlike a semver parser, this parser accepts *any* input and never fails.
//! It splits a label into digit runs, letter runs, and `_`/`-` section
//! markers, then classifies every run as a release number, an embedded
//! date stamp, or a pre-release qualifier.
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

use once_cell::sync::Lazy;
use regex::Regex;

/// Parse a string slice into any type that implements [`VersionBuilder`].
///
/// Parsing never fails. Malformed, empty, or non-ASCII input produces a
/// version built from whatever tokens survive; there is no rejection path.
///
/// The input is lowercased, split into digit runs, letter runs, and the
/// section markers `_` and `-` (all other separator characters are
/// discarded), and classified in a single left-to-right pass:
///
/// - A marker ends the leading release-number section.
/// - A digit run shaped like a `YYYYMMDD[HH[MM[SS]]]` date stamp (years
///   2010 through 2029) becomes the version date, padded to 14 digits.
/// - While still in the release section, a digit run extends the release
///   numbers. Trailing zero-valued numbers are trimmed afterwards, so
///   `1.0.0`, `1.0`, and `1` all build the same release sequence.
/// - Everything else is a pre-release qualifier. Synonym spellings are
///   normalized (`a` to `alpha`, `c` to `rc`, and so on), and a directly
///   following standalone digit run is consumed as the qualifier's number
///   (`rc2` and `rc.2` both build the qualifier `rc` with number 2).
///
/// ## Examples
///
/// ```rust
/// use anyver_parser::{parse, VersionBuilder};
///
/// /// Collects only the (trimmed) release numbers of a label.
/// #[derive(Debug, Default)]
/// struct ReleaseNumbers(Vec<u64>);
///
/// impl VersionBuilder for ReleaseNumbers {
///     type Out = Vec<u64>;
///
///     fn new() -> Self {
///         Self::default()
///     }
///
///     fn add_release(&mut self, num: u64) {
///         self.0.push(num);
///     }
///
///     fn build(self) -> Self::Out {
///         self.0
///     }
/// }
///
/// assert_eq!(parse::<ReleaseNumbers>("1.2.3-rc1"), vec![1, 2, 3]);
/// assert_eq!(parse::<ReleaseNumbers>("1.0.0"), vec![1]);
/// assert_eq!(parse::<ReleaseNumbers>("0.0.0"), Vec::<u64>::new());
/// assert_eq!(parse::<ReleaseNumbers>("not a version"), Vec::<u64>::new());
/// ```
pub fn parse<V>(input: &str) -> V::Out
where
    V: VersionBuilder,
{
    let mut version = V::new();
    version.set_original(input);

    let lowered = input.to_lowercase();
    let tokens = lex(&lowered).collect::<Vec<_>>();

    let mut release: Vec<u64> = Vec::new();
    let mut in_release_section = true;

    let mut idx = 0;
    while idx < tokens.len() {
        let token = tokens[idx];
        let text = token.span.at(&lowered);
        idx += 1;

        if let Token::Marker = token.token {
            in_release_section = false;
            continue;
        }

        if is_date_stamp(text) {
            // a later date stamp replaces an earlier one
            version.set_date(&normalize_date(text));
            in_release_section = false;
            continue;
        }

        if in_release_section {
            match text.parse::<u64>() {
                Ok(num) => {
                    release.push(num);
                    continue;
                }
                // also reached by digit runs too large for u64
                Err(_) => in_release_section = false,
            }
        }

        let name = canonical(text).unwrap_or(text);
        let mut number = 0;
        // a qualifier that is itself numeric never takes a suffix
        if name.parse::<u64>().is_err() {
            if let Some(next) = tokens.get(idx) {
                let next_text = next.span.at(&lowered);
                if !is_date_stamp(next_text) {
                    if let Ok(num) = next_text.parse::<u64>() {
                        number = num;
                        idx += 1;
                    }
                }
            }
        }
        version.add_qualifier(name, number);
    }

    trim_trailing_zeroes(&mut release);
    for num in release {
        version.add_release(num);
    }

    version.build()
}

/// Trait to abstract over version building.
///
/// The parser reports everything it classifies to a builder, so callers can
/// build a full version record or a throwaway probe without paying for the
/// parts they do not keep.
///
/// Every event method has a default implementation that does nothing, and
/// parsing never fails, so an implementation only keeps what it needs.
///
/// ## Example
///
/// ```rust
/// # use anyver_parser::VersionBuilder;
/// /// True when the label carries any pre-release qualifier.
/// struct HasQualifiers(bool);
///
/// impl VersionBuilder for HasQualifiers {
///     type Out = bool;
///
///     fn new() -> Self {
///         HasQualifiers(false)
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
/// fn is_tagged(v: &str) -> bool {
///     anyver_parser::parse::<HasQualifiers>(v)
/// }
///
/// assert!(is_tagged("1.2.3-alpha"));
/// assert!(is_tagged("1.2.3.rc1"));
/// assert!(!is_tagged("1.2.3"));
/// ```
pub trait VersionBuilder {
    /// The return type of the final version.
    type Out;

    /// Construct a new version builder.
    ///
    /// The function must not fail and the version (if returned from
    /// [`VersionBuilder::build`] at this point) should represent the
    /// empty version.
    fn new() -> Self;

    /// Set the original input, verbatim and before lowercasing.
    ///
    /// Called exactly once, before any other event method.
    #[allow(unused)]
    fn set_original(&mut self, text: &str) {}

    /// Add the next release number.
    ///
    /// Trailing zero-valued numbers have already been trimmed, so for a
    /// label like `1.0.0` this is called once with `1`, and for `0.0.0`
    /// it is not called at all.
    ///
    /// This method might be called multiple times, or not at all.
    #[allow(unused)]
    fn add_release(&mut self, num: u64) {}

    /// Set the embedded date stamp, normalized to 14 digits
    /// (`YYYYMMDDHHMMSS`, right-padded with zeroes).
    ///
    /// When a label carries several date-shaped runs, this is called once
    /// per run and the last call wins.
    #[allow(unused)]
    fn set_date(&mut self, date: &str) {}

    /// Add a pre-release qualifier.
    ///
    /// The name is either the canonical form of a known qualifier
    /// (for example `alpha` for the spelling `a`) or the literal lowercase
    /// token text. The number is 0 unless a standalone digit run directly
    /// followed the qualifier.
    ///
    /// This method might be called multiple times, in source order.
    #[allow(unused)]
    fn add_qualifier(&mut self, name: &str, number: u64) {}

    /// Construct the final version.
    fn build(self) -> Self::Out;
}

/// Digit runs shaped like `YYYYMMDD`, `YYYYMMDDHH`, `YYYYMMDDHHMM`, or
/// `YYYYMMDDHHMMSS` with years 2010 through 2029 are dates. Everything
/// else is not, no matter how plausible.
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^20[12]\d(0[1-9]|1[012])(0[1-9]|[12]\d|3[01])(\d{2}){0,3}$")
        .expect("date pattern is valid")
});

fn is_date_stamp(text: &str) -> bool {
    DATE_PATTERN.is_match(text)
}

fn normalize_date(stamp: &str) -> String {
    format!("{:0<14}", stamp)
}

/// Maps synonym qualifier spellings to their canonical name.
/// Unlisted spellings pass through as their own qualifier name.
fn canonical(token: &str) -> Option<&'static str> {
    match token {
        "dev" | "develop" => Some("dev"),
        "snapshot" => Some("snapshot"),
        "a" | "alpha" => Some("alpha"),
        "b" | "beta" => Some("beta"),
        "stable" => Some("stable"),
        "final" => Some("final"),
        "fixed" => Some("fixed"),
        "m" => Some("milestone"),
        "c" | "rc" => Some("rc"),
        "ga" => Some("ga"),
        "r" | "release" => Some("release"),
        _ => None,
    }
}

fn trim_trailing_zeroes(release: &mut Vec<u64>) {
    let len = release.iter().rposition(|&num| num != 0).map_or(0, |i| i + 1);
    release.truncate(len);
}

fn lex(input: &str) -> Lexer<'_> {
    Lexer::new(input)
}

#[derive(Debug)]
struct Lexer<'input> {
    end: usize,
    chars: std::str::CharIndices<'input>,
    peeked: Option<(usize, char)>,
}

impl<'input> Lexer<'input> {
    fn new(input: &'input str) -> Lexer<'input> {
        Lexer {
            end: input.len(),
            chars: input.char_indices(),
            peeked: None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Token {
    /// maximal run of ascii digits
    Numeric,
    /// maximal run of lowercase ascii letters
    Alpha,
    /// a single literal `_` or `-`, ends the release section
    Marker,
}

impl<'input> Iterator for Lexer<'input> {
    type Item = TokenSpan;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (start, c) = match self.peeked.take() {
                Some(peeked) => peeked,
                None => self.chars.next()?,
            };

            let (end, token) = match c {
                '0'..='9' => match self.chars.find(|(_, c)| !c.is_ascii_digit()) {
                    Some((j, c)) => {
                        self.peeked = Some((j, c));
                        (j, Token::Numeric)
                    }
                    None => (self.end, Token::Numeric),
                },
                'a'..='z' => match self.chars.find(|(_, c)| !c.is_ascii_lowercase()) {
                    Some((j, c)) => {
                        self.peeked = Some((j, c));
                        (j, Token::Alpha)
                    }
                    None => (self.end, Token::Alpha),
                },
                '_' | '-' => (start + 1, Token::Marker),
                // every other character separates runs and is discarded
                _ => continue,
            };

            return Some(TokenSpan::new(token, start, end));
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct TokenSpan {
    token: Token,
    span: Span,
}

impl TokenSpan {
    fn new(token: Token, start: usize, end: usize) -> Self {
        Self {
            token,
            span: Span { start, end },
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
}

impl Span {
    fn at<'input>(&self, input: &'input str) -> &'input str {
        &input[self.start..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    /// Record of every event the parser emits, for asserting on the
    /// classification directly.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct Recorded {
        original: String,
        release: Vec<u64>,
        date: Option<String>,
        qualifiers: Vec<(String, u64)>,
    }

    impl VersionBuilder for Recorded {
        type Out = Self;

        fn new() -> Self {
            Self::default()
        }

        fn set_original(&mut self, text: &str) {
            self.original = text.to_string();
        }

        fn add_release(&mut self, num: u64) {
            self.release.push(num);
        }

        fn set_date(&mut self, date: &str) {
            self.date = Some(date.to_string());
        }

        fn add_qualifier(&mut self, name: &str, number: u64) {
            self.qualifiers.push((name.to_string(), number));
        }

        fn build(self) -> Self {
            self
        }
    }

    fn recorded(input: &str) -> Recorded {
        parse::<Recorded>(input)
    }

    fn qualifiers(input: &str) -> Vec<(String, u64)> {
        recorded(input).qualifiers
    }

    fn tokens(input: &str) -> Vec<String> {
        lex(input).map(|t| t.span.at(input).to_string()).collect()
    }

    #[test]
    fn test_lex_digit_runs() {
        assert_eq!(tokens("1.22.333"), vec!["1", "22", "333"]);
    }

    #[test]
    fn test_lex_markers() {
        assert_eq!(tokens("1.0-rc2"), vec!["1", "0", "-", "rc", "2"]);
        assert_eq!(tokens("2021_05_alpha"), vec!["2021", "_", "05", "_", "alpha"]);
        assert_eq!(tokens("--"), vec!["-", "-"]);
    }

    #[test]
    fn test_lex_category_change_splits_runs() {
        assert_eq!(tokens("1a2"), vec!["1", "a", "2"]);
        assert_eq!(tokens("rc1"), vec!["rc", "1"]);
    }

    #[test]
    fn test_lex_discards_other_separators() {
        assert_eq!(tokens("1 2\t3"), vec!["1", "2", "3"]);
        assert_eq!(tokens("1+2!3"), vec!["1", "2", "3"]);
        assert_eq!(tokens("ä1.2ß"), vec!["1", "2"]);
    }

    #[test]
    fn test_lex_empty() {
        assert_eq!(tokens(""), Vec::<String>::new());
    }

    #[test_case("20230115")]
    #[test_case("2023011512")]
    #[test_case("202301151230")]
    #[test_case("20230115123059")]
    #[test_case("20100101")]
    #[test_case("20291231")]
    #[test_case("2023011599"; "hour group is not range checked")]
    fn test_date_stamp(input: &str) {
        assert!(is_date_stamp(input));
    }

    #[test_case("" ; "empty")]
    #[test_case("2023"; "too short")]
    #[test_case("202301151"; "odd length")]
    #[test_case("20230115123059123"; "too long")]
    #[test_case("20091231"; "year before 2010")]
    #[test_case("20300115"; "year after 2029")]
    #[test_case("20231315"; "month 13")]
    #[test_case("20230132"; "day 32")]
    #[test_case("20230100"; "day 0")]
    #[test_case("alpha"; "letters")]
    fn test_not_a_date_stamp(input: &str) {
        assert!(!is_date_stamp(input));
    }

    #[test_case("1.2.3", &[1, 2, 3]; "plain triple")]
    #[test_case("1.0.0", &[1]; "trailing zeroes trimmed")]
    #[test_case("1.0", &[1]; "trailing zero trimmed")]
    #[test_case("1", &[1]; "single number")]
    #[test_case("0.0.0", &[]; "all zeroes trim to empty")]
    #[test_case("0", &[]; "zero trims to empty")]
    #[test_case("1.0.2.0", &[1, 0, 2]; "inner zero survives")]
    #[test_case("5 4 3", &[5, 4, 3]; "noise separators keep the release section open")]
    #[test_case("", &[]; "empty input")]
    fn test_release_numbers(input: &str, expected: &[u64]) {
        assert_eq!(recorded(input).release, expected);
    }

    #[test]
    fn test_qualifier_with_attached_number() {
        assert_eq!(qualifiers("1.2.3-alpha1"), vec![("alpha".to_string(), 1)]);
    }

    #[test]
    fn test_qualifier_with_standalone_number() {
        assert_eq!(qualifiers("1.0_rc.2"), vec![("rc".to_string(), 2)]);
    }

    #[test]
    fn test_qualifier_aliases() {
        assert_eq!(qualifiers("1.0-a1"), qualifiers("1.0-alpha1"));
        assert_eq!(qualifiers("1.0-c3"), qualifiers("1.0-rc3"));
        assert_eq!(qualifiers("1.0-m2"), vec![("milestone".to_string(), 2)]);
        assert_eq!(qualifiers("1.0-r"), vec![("release".to_string(), 0)]);
    }

    #[test]
    fn test_unknown_qualifier_passes_through() {
        assert_eq!(qualifiers("1.0-nightly7"), vec![("nightly".to_string(), 7)]);
    }

    #[test]
    fn test_numeric_qualifier_takes_no_suffix() {
        // after a marker the numbers are qualifiers of their own
        assert_eq!(
            qualifiers("1-2.3"),
            vec![("2".to_string(), 0), ("3".to_string(), 0)]
        );
    }

    #[test]
    fn test_qualifier_number_skips_date_stamps() {
        let version = recorded("1.0-alpha.20230115");
        assert_eq!(version.qualifiers, vec![("alpha".to_string(), 0)]);
        assert_eq!(version.date.as_deref(), Some("20230115000000"));
    }

    #[test]
    fn test_date_inside_release_section() {
        let version = recorded("1.0.20230115");
        assert_eq!(version.release, vec![1]);
        assert_eq!(version.date.as_deref(), Some("20230115000000"));
    }

    #[test]
    fn test_full_date_stamp_is_not_padded() {
        let version = recorded("1.2.3.20230115120000");
        assert_eq!(version.release, vec![1, 2, 3]);
        assert_eq!(version.date.as_deref(), Some("20230115120000"));
    }

    #[test]
    fn test_last_date_stamp_wins() {
        let version = recorded("20230115.20240229");
        assert_eq!(version.date.as_deref(), Some("20240229000000"));
    }

    #[test]
    fn test_date_ends_release_section() {
        let version = recorded("1.20230115.2");
        assert_eq!(version.release, vec![1]);
        assert_eq!(version.qualifiers, vec![("2".to_string(), 0)]);
    }

    #[test]
    fn test_oversized_number_becomes_qualifier() {
        assert_eq!(
            qualifiers("1.0.99999999999999999999999.7"),
            vec![("99999999999999999999999".to_string(), 7)]
        );
    }

    #[test]
    fn test_original_is_kept_verbatim() {
        let version = recorded("1.0-RC1");
        assert_eq!(version.original, "1.0-RC1");
        assert_eq!(version.qualifiers, vec![("rc".to_string(), 1)]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(recorded(""), Recorded::default());
    }
}
