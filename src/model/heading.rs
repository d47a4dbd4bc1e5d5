//! Heading types and heading-number ordering.

use super::{Table, TablePreset};
use std::cmp::Ordering;
use std::fmt;

/// A free-text section, saved as Markdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownHeading {
    /// Dotted heading number (e.g., "1.2")
    pub number: String,

    /// Heading title
    pub title: String,

    /// Markdown body
    pub content: String,
}

impl MarkdownHeading {
    /// Create a markdown heading.
    pub fn new(
        number: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// A heading with number, title and content all blank.
    ///
    /// Empty headings stay editable but are never exported.
    pub fn is_empty(&self) -> bool {
        self.number.trim().is_empty()
            && self.title.trim().is_empty()
            && self.content.trim().is_empty()
    }
}

/// A section whose content is a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableHeading {
    /// Dotted heading number (e.g., "3.1")
    pub number: String,

    /// Heading title
    pub title: String,

    /// Table content, header row first
    pub table: Table,
}

impl TableHeading {
    /// Create an untitled heading with a preset table.
    pub fn new(preset: TablePreset) -> Self {
        Self {
            number: String::new(),
            title: String::new(),
            table: Table::from_preset(preset),
        }
    }

    /// Create a table heading from its parts.
    pub fn with_table(number: impl Into<String>, title: impl Into<String>, table: Table) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            table,
        }
    }
}

/// A borrowed heading of either kind, as it appears in export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading<'a> {
    /// Free-text heading
    Markdown(&'a MarkdownHeading),
    /// Table heading
    Table(&'a TableHeading),
}

impl<'a> Heading<'a> {
    /// Get the heading number.
    pub fn number(&self) -> &'a str {
        match *self {
            Heading::Markdown(h) => &h.number,
            Heading::Table(h) => &h.number,
        }
    }

    /// Get the heading title.
    pub fn title(&self) -> &'a str {
        match *self {
            Heading::Markdown(h) => &h.title,
            Heading::Table(h) => &h.title,
        }
    }

    /// Get the ordering key of the heading number.
    pub fn sort_key(&self) -> SortKey {
        SortKey::parse(self.number())
    }

    /// Whether the heading would be left out of an export.
    ///
    /// Only markdown headings can be empty; tables are always kept.
    pub fn is_empty(&self) -> bool {
        match self {
            Heading::Markdown(h) => h.is_empty(),
            Heading::Table(_) => false,
        }
    }
}

/// Ordering key derived from a dotted heading number.
///
/// Numbers whose segments all parse as integers order by their integer
/// segments (`2 < 2.1 < 2.10 < 10`). Anything else orders after every
/// numeric key, and such keys are all equal to each other.
// Variant order is the sort order: numeric keys before unparsed ones.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SortKey {
    /// Integer segments of a well-formed number
    Numeric(Vec<NumberSegment>),
    /// Empty or non-numeric number
    Unparsed,
}

impl SortKey {
    /// Parse a heading number into its ordering key.
    ///
    /// Blank segments are skipped, so `"1..2"` and `"1.2."` order like `"1.2"`.
    pub fn parse(number: &str) -> Self {
        let segments: Option<Vec<NumberSegment>> = number
            .split('.')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(NumberSegment::parse)
            .collect();

        match segments {
            Some(segments) if !segments.is_empty() => SortKey::Numeric(segments),
            _ => SortKey::Unparsed,
        }
    }

    /// Check if the number parsed as integer segments.
    pub fn is_numeric(&self) -> bool {
        matches!(self, SortKey::Numeric(_))
    }

    /// Number of segments (0 for unparsed numbers).
    pub fn depth(&self) -> usize {
        match self {
            SortKey::Numeric(segments) => segments.len(),
            SortKey::Unparsed => 0,
        }
    }
}

/// One integer segment of a heading number, of any length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumberSegment {
    negative: bool,
    /// Decimal digits without leading zeros, empty for zero
    digits: String,
}

impl NumberSegment {
    /// Parse an optionally signed run of ASCII digits.
    pub fn parse(text: &str) -> Option<Self> {
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let digits = digits.trim_start_matches('0');
        Some(Self {
            negative: negative && !digits.is_empty(),
            digits: digits.to_string(),
        })
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl Ord for NumberSegment {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl PartialOrd for NumberSegment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<i64> for NumberSegment {
    fn from(value: i64) -> Self {
        let digits = value.unsigned_abs().to_string();
        let digits = digits.trim_start_matches('0');
        Self {
            negative: value < 0,
            digits: digits.to_string(),
        }
    }
}

impl fmt::Display for NumberSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        if self.digits.is_empty() {
            f.write_str("0")
        } else {
            f.write_str(&self.digits)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(segments: &[i64]) -> SortKey {
        SortKey::Numeric(segments.iter().map(|&s| NumberSegment::from(s)).collect())
    }

    #[test]
    fn test_markdown_heading_empty() {
        assert!(MarkdownHeading::default().is_empty());
        assert!(MarkdownHeading::new("", "", " ").is_empty());
        assert!(MarkdownHeading::new(" ", "\t", "\n").is_empty());
        assert!(!MarkdownHeading::new("0", "", "").is_empty());
        assert!(!MarkdownHeading::new("", "Title", "").is_empty());
    }

    #[test]
    fn test_table_heading_never_empty() {
        let heading = TableHeading::with_table("", "", Table::new());
        assert!(!Heading::Table(&heading).is_empty());
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("1"), numeric(&[1]));
        assert_eq!(SortKey::parse("2.10"), numeric(&[2, 10]));
        assert_eq!(SortKey::parse("1..2."), numeric(&[1, 2]));
        assert_eq!(SortKey::parse(" 3 . 4 "), numeric(&[3, 4]));
        assert_eq!(SortKey::parse("abc"), SortKey::Unparsed);
        assert_eq!(SortKey::parse("1.a"), SortKey::Unparsed);
        assert_eq!(SortKey::parse(""), SortKey::Unparsed);
        assert_eq!(SortKey::parse("..."), SortKey::Unparsed);
    }

    #[test]
    fn test_sort_key_order() {
        let mut numbers = vec!["2.10", "2.1", "10", "abc", "2"];
        numbers.sort_by_key(|n| SortKey::parse(n));
        assert_eq!(numbers, vec!["2", "2.1", "2.10", "10", "abc"]);
    }

    #[test]
    fn test_unparsed_keys_are_equal_and_last() {
        assert_eq!(
            SortKey::parse("abc").cmp(&SortKey::parse("")),
            Ordering::Equal
        );
        assert!(SortKey::parse("999999999") < SortKey::parse("x"));
        assert!(SortKey::parse("-1") < SortKey::parse("0"));
    }

    #[test]
    fn test_long_segments_stay_numeric() {
        let big = SortKey::parse("99999999999999999999");
        assert!(big.is_numeric());
        assert!(SortKey::parse("100") < big);
        assert!(big < SortKey::parse("abc"));
        assert!(SortKey::parse("1.99999999999999999999") < SortKey::parse("2"));
        assert!(SortKey::parse("-99999999999999999999") < SortKey::parse("-1"));
    }

    #[test]
    fn test_number_segment() {
        assert_eq!(NumberSegment::parse("007"), Some(NumberSegment::from(7)));
        assert_eq!(NumberSegment::parse("-0"), Some(NumberSegment::from(0)));
        assert_eq!(NumberSegment::parse("+12"), Some(NumberSegment::from(12)));
        assert_eq!(NumberSegment::parse("-"), None);
        assert_eq!(NumberSegment::parse("1e3"), None);
        assert!(NumberSegment::from(-3) < NumberSegment::from(-2));
        assert!(NumberSegment::from(9) < NumberSegment::from(10));
        assert_eq!(NumberSegment::from(-40).to_string(), "-40");
        assert_eq!(NumberSegment::parse("000").unwrap().to_string(), "0");
    }

    #[test]
    fn test_sort_key_depth() {
        assert_eq!(SortKey::parse("1.2.3").depth(), 3);
        assert_eq!(SortKey::parse("x").depth(), 0);
        assert!(SortKey::parse("4").is_numeric());
    }

    #[test]
    fn test_heading_accessors() {
        let md = MarkdownHeading::new("1.1", "Scope", "text");
        let heading = Heading::Markdown(&md);
        assert_eq!(heading.number(), "1.1");
        assert_eq!(heading.title(), "Scope");
        assert_eq!(heading.sort_key(), numeric(&[1, 1]));
    }
}
