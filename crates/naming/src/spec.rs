use crate::error::{Error, ErrorKind};
use crate::sanitize::sanitize_title;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

/// Combined-field grammar: a mandatory six-digit code, optionally followed
/// by a hyphen and a free-text title. Surrounding whitespace is ignored.
/// The `s` flag lets titles span pasted line breaks.
static SPEC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\s*(\d{6})(?:-(.+))?\s*$").expect("valid pattern"));

/// Validated configuration for one renaming pass.
///
/// Parsed from a single `CODE[-TITLE]` input string via [`FromStr`] — the
/// sole gate: a `NamingSpec` cannot exist with an unvalidated code.
/// Numbering options default to `start_number = 1` and `pad_width = 0`
/// (no padding) and are adjusted with the `with_*` builders.
///
/// Rendering is a pure function of the spec and its arguments. Holding
/// `start_number` and `pad_width` fixed across one batch, distinct sequence
/// numbers always yield distinct names, so a batch with dense unique
/// positions can never produce a filename collision.
///
/// ```
/// use batchname_naming::NamingSpec;
///
/// let spec: NamingSpec = "252798-AppleWatch".parse().unwrap();
/// assert_eq!(spec.render_name(1, ".JPG"), "252798-1-AppleWatch.JPG");
/// assert_eq!(spec.render_archive_name(), "252798-AppleWatch.zip");
///
/// let untitled: NamingSpec = "252798".parse().unwrap();
/// assert_eq!(untitled.render_name(2, ".pdf"), "252798-2.pdf");
/// assert_eq!(untitled.render_archive_name(), "252798.zip");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingSpec {
    code: String,
    title: Option<String>,
    start_number: i64,
    pad_width: usize,
}

impl FromStr for NamingSpec {
    type Err = Error;

    /// Parses the combined `CODE[-TITLE]` field.
    ///
    /// Total over its grammar: a present title is never silently dropped.
    /// Rejections distinguish blank input ([`ErrorKind::MissingCode`]) from
    /// a non-six-digit code ([`ErrorKind::MalformedCode`]) and from a
    /// dangling separator ([`ErrorKind::EmptyTitle`]).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            exn::bail!(ErrorKind::MissingCode);
        }
        let Some(captures) = SPEC_PATTERN.captures(s) else {
            // Classify the failure: everything before the first separator is
            // what the user offered as a code.
            let offered = trimmed.split_once('-').map_or(trimmed, |(code, _)| code);
            if offered.len() == 6 && offered.chars().all(|c| c.is_ascii_digit()) {
                // Code fine, so the title half must be the problem ("123456-").
                exn::bail!(ErrorKind::EmptyTitle);
            }
            exn::bail!(ErrorKind::MalformedCode(offered.trim().to_string()));
        };
        let code = captures[1].to_string();
        // Greedy capture keeps trailing whitespace; titles are stored trimmed.
        let title = match captures.get(2).map(|m| m.as_str().trim()) {
            Some("") => exn::bail!(ErrorKind::EmptyTitle),
            Some(title) => Some(title.to_string()),
            None => None,
        };
        Ok(Self { code, title, start_number: 1, pad_width: 0 })
    }
}

impl NamingSpec {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn start_number(&self) -> i64 {
        self.start_number
    }

    pub fn pad_width(&self) -> usize {
        self.pad_width
    }

    /// Sequence number assigned to the item at position 1.
    pub fn with_start_number(mut self, start_number: i64) -> Self {
        self.start_number = start_number;
        self
    }

    /// Zero-padding width for rendered sequence numbers; 0 disables padding.
    pub fn with_pad_width(mut self, pad_width: usize) -> Self {
        self.pad_width = pad_width;
        self
    }

    /// Replaces the title with its [`sanitize_title`] normalization.
    ///
    /// Opt-in: by default titles render verbatim, as the original tool wrote
    /// them. A spec without a title is returned unchanged (the fallback
    /// token is for titles that sanitize away, not for absent ones).
    pub fn slugged(mut self) -> Self {
        self.title = self.title.map(|title| sanitize_title(&title));
        self
    }

    /// Sequence number for an item at the given 1-based position:
    /// `start_number + position - 1`.
    pub fn sequence_number(&self, position: usize) -> i64 {
        self.start_number + position as i64 - 1
    }

    /// Renders one output filename:
    /// `{code}-{number}-{title}{extension}`, the title segment omitted when
    /// the spec has none. The extension arrives with its leading dot (or
    /// empty) and keeps the case it was uploaded with.
    pub fn render_name(&self, sequence_number: i64, extension: &str) -> String {
        let number = self.format_number(sequence_number);
        match &self.title {
            Some(title) => format!("{}-{number}-{title}{extension}", self.code),
            None => format!("{}-{number}{extension}", self.code),
        }
    }

    /// Suggested filename for the packaged archive:
    /// `{code}-{title}.zip`, or `{code}.zip` without a title.
    pub fn render_archive_name(&self) -> String {
        match &self.title {
            Some(title) => format!("{}-{title}.zip", self.code),
            None => format!("{}.zip", self.code),
        }
    }

    fn format_number(&self, sequence_number: i64) -> String {
        if self.pad_width > 0 {
            format!("{sequence_number:0width$}", width = self.pad_width)
        } else {
            sequence_number.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::ops::Deref;

    #[test]
    fn parses_code_and_title() {
        let spec: NamingSpec = "252798-AppleWatch".parse().unwrap();
        assert_eq!(spec.code(), "252798");
        assert_eq!(spec.title(), Some("AppleWatch"));
        assert_eq!(spec.start_number(), 1);
        assert_eq!(spec.pad_width(), 0);
    }

    #[test]
    fn parses_code_without_title() {
        let spec: NamingSpec = "252798".parse().unwrap();
        assert_eq!(spec.code(), "252798");
        assert_eq!(spec.title(), None);
    }

    #[test]
    fn tolerates_surrounding_whitespace_and_trims_title() {
        let spec: NamingSpec = "  252798-Apple Watch  ".parse().unwrap();
        assert_eq!(spec.code(), "252798");
        assert_eq!(spec.title(), Some("Apple Watch"));
    }

    #[test]
    fn keeps_hyphenated_titles_whole() {
        // Only the first separator splits; the title may itself contain '-'.
        let spec: NamingSpec = "252798-montre-connectée".parse().unwrap();
        assert_eq!(spec.title(), Some("montre-connectée"));
    }

    #[test]
    fn accepts_titles_with_embedded_line_breaks() {
        // Pasted input can carry a line break mid-title; that is a present
        // title, not a dangling separator.
        let spec: NamingSpec = "252798-a\nb".parse().unwrap();
        assert_eq!(spec.title(), Some("a\nb"));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_input_reports_missing_code(#[case] input: &str) {
        let error = input.parse::<NamingSpec>().unwrap_err();
        assert!(matches!(error.deref(), ErrorKind::MissingCode));
    }

    #[rstest]
    #[case("AB1234-x", "AB1234")]
    #[case("12345", "12345")]
    #[case("1234567", "1234567")]
    #[case("25279a", "25279a")]
    #[case("code-title", "code")]
    #[case("252798 - title", "252798")]
    fn bad_codes_report_malformed(#[case] input: &str, #[case] offered: &str) {
        let error = input.parse::<NamingSpec>().unwrap_err();
        assert!(matches!(error.deref(), ErrorKind::MalformedCode(code) if code == offered));
    }

    #[rstest]
    #[case("252798-")]
    #[case("252798-   ")]
    fn dangling_separator_reports_empty_title(#[case] input: &str) {
        let error = input.parse::<NamingSpec>().unwrap_err();
        assert!(matches!(error.deref(), ErrorKind::EmptyTitle));
    }

    #[test]
    fn renders_titled_names() {
        let spec: NamingSpec = "252798-AppleWatch".parse().unwrap();
        assert_eq!(spec.render_name(1, ".JPG"), "252798-1-AppleWatch.JPG");
        assert_eq!(spec.render_name(2, ".pdf"), "252798-2-AppleWatch.pdf");
        assert_eq!(spec.render_archive_name(), "252798-AppleWatch.zip");
    }

    #[test]
    fn renders_untitled_names() {
        let spec: NamingSpec = "252798".parse().unwrap();
        assert_eq!(spec.render_name(1, ".JPG"), "252798-1.JPG");
        assert_eq!(spec.render_name(2, ".pdf"), "252798-2.pdf");
        assert_eq!(spec.render_archive_name(), "252798.zip");
    }

    #[rstest]
    #[case(0, 7, "7")]
    #[case(3, 7, "007")]
    #[case(3, 1234, "1234")]
    #[case(2, 10, "10")]
    fn pads_sequence_numbers(#[case] width: usize, #[case] number: i64, #[case] rendered: &str) {
        let spec = "252798".parse::<NamingSpec>().unwrap().with_pad_width(width);
        assert_eq!(spec.render_name(number, ""), format!("252798-{rendered}"));
    }

    #[test]
    fn start_number_offsets_positions() {
        let spec = "252798".parse::<NamingSpec>().unwrap().with_start_number(10);
        assert_eq!(spec.sequence_number(1), 10);
        assert_eq!(spec.sequence_number(3), 12);
    }

    #[test]
    fn slugged_normalizes_the_title() {
        let spec = "252798-Café   Mañana!!".parse::<NamingSpec>().unwrap().slugged();
        assert_eq!(spec.title(), Some("cafe-manana"));
        assert_eq!(spec.render_archive_name(), "252798-cafe-manana.zip");
    }

    #[test]
    fn slugged_leaves_absent_titles_absent() {
        let spec = "252798".parse::<NamingSpec>().unwrap().slugged();
        assert_eq!(spec.title(), None);
    }

    #[test]
    fn rendering_is_deterministic() {
        let spec = "252798-AppleWatch".parse::<NamingSpec>().unwrap().with_pad_width(4);
        assert_eq!(spec.render_name(12, ".png"), spec.render_name(12, ".png"));
    }

    #[test]
    fn distinct_sequence_numbers_never_collide() {
        let spec = "252798-AppleWatch".parse::<NamingSpec>().unwrap().with_start_number(-3).with_pad_width(2);
        let names: std::collections::HashSet<String> =
            (1..=200).map(|position| spec.render_name(spec.sequence_number(position), ".png")).collect();
        assert_eq!(names.len(), 200);
    }
}
