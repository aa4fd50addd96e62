//! Filename normalization and validation.
//!
//! Disambiguated names look like `report (2).txt`: the canonical stem, a
//! space, a parenthesized counter and the original extension. The helpers
//! here recognize that shape strictly so that legitimate names containing
//! parentheses or digits are never rewritten.

use std::borrow::Cow;
use std::ffi::OsString;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Characters that may not appear in a file name.
pub const RESERVED_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

const SEPARATORS: [char; 2] = ['/', '\\'];

/// Strip a trailing ` (N)` disambiguation suffix from a name or path.
///
/// The suffix is recognized only when the last parenthesized group holds
/// nothing but ASCII digits and is followed by nothing but whitespace up to
/// the extension (or the end of the string). Whitespace around the group is
/// absorbed. Anything else is returned untouched, as is any input where
/// stripping would leave the final name without content before the suffix.
///
/// The result never carries a recognized suffix, so `unsuffix` is idempotent.
///
/// ```
/// use fileops::fs::unsuffix;
///
/// assert_eq!(unsuffix("/test/message (2).txt"), "/test/message.txt");
/// assert_eq!(unsuffix("notes (draft).txt"), "notes (draft).txt");
/// ```
pub fn unsuffix(name: &str) -> Cow<'_, str> {
    let mut current = Cow::Borrowed(name);

    while let Some(range) = suffix_range(&current) {
        let mut stripped = String::with_capacity(current.len() - range.len());
        stripped.push_str(&current[..range.start]);
        stripped.push_str(&current[range.end..]);
        current = Cow::Owned(stripped);
    }

    current
}

/// Byte range of the removable suffix (including absorbed whitespace), if any.
fn suffix_range(name: &str) -> Option<Range<usize>> {
    let close = name.rfind(')')?;
    let open = name[..close].rfind('(')?;

    let digits = &name[open + 1..close];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // Only whitespace may sit between ')' and the extension separator.
    let after = &name[close + 1..];
    let tail_len = after.find('.').unwrap_or(after.len());
    if !after[..tail_len].chars().all(char::is_whitespace) {
        return None;
    }

    let start = name[..open].trim_end().len();
    let end = close + 1 + tail_len;

    // Never leave a blank name behind.
    if start == 0 || name[..start].ends_with(&SEPARATORS[..]) {
        return None;
    }

    Some(start..end)
}

/// Build the `n`-th candidate name, e.g. `report (3).txt`.
pub fn format_candidate(stem: &str, n: u32, extension: Option<&str>) -> String {
    match extension {
        Some(ext) => format!("{} ({}).{}", stem, n, ext),
        None => format!("{} ({})", stem, n),
    }
}

/// Return the first reserved character in `name`, scanning left to right.
///
/// Only the name itself is checked, so pass a file name rather than a path.
pub fn first_illegal_char(name: &str) -> Option<char> {
    name.chars().find(|c| RESERVED_CHARS.contains(c))
}

/// Build the path `path` would have after renaming its stem to `new_name`.
///
/// The original extension is kept.
pub fn rename_path(path: &Path, new_name: &str) -> PathBuf {
    let mut file_name = OsString::from(new_name);
    if let Some(ext) = path.extension() {
        file_name.push(".");
        file_name.push(ext);
    }
    path.with_file_name(file_name)
}

/// Reserved-character check with a configurable character set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameValidator {
    reserved: Vec<char>,
}

impl Default for NameValidator {
    fn default() -> Self {
        Self {
            reserved: RESERVED_CHARS.to_vec(),
        }
    }
}

impl NameValidator {
    /// Create a validator using the default reserved characters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator that also rejects `extra` characters.
    pub fn with_extra_chars<I: IntoIterator<Item = char>>(extra: I) -> Self {
        let mut validator = Self::default();
        for c in extra {
            if !validator.reserved.contains(&c) {
                validator.reserved.push(c);
            }
        }
        validator
    }

    /// The characters this validator rejects.
    pub fn reserved(&self) -> &[char] {
        &self.reserved
    }

    /// Return the first reserved character in `name`, scanning left to right.
    pub fn first_illegal_char(&self, name: &str) -> Option<char> {
        name.chars().find(|c| self.reserved.contains(c))
    }

    /// Reject `name` if it contains a reserved character.
    pub fn validate(&self, name: &str) -> Result<()> {
        match self.first_illegal_char(name) {
            Some(ch) => Err(Error::InvalidName {
                name: name.to_string(),
                ch,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsuffix_simple() {
        assert_eq!(unsuffix("/test/message (2).txt"), "/test/message.txt");
        assert_eq!(unsuffix("report (10).pdf"), "report.pdf");
    }

    #[test]
    fn test_unsuffix_keeps_non_numeric_parens() {
        let path = "test123/configs (it should not erase this set of parens)/startup.cfg";
        assert_eq!(unsuffix(path), path);
    }

    #[test]
    fn test_unsuffix_no_parens() {
        let path = "what/about/a path that/has no/parens at all/nor a file/extension";
        assert_eq!(unsuffix(path), path);
    }

    #[test]
    fn test_unsuffix_absorbs_whitespace() {
        assert_eq!(
            unsuffix("/test/message     (123123123)   .txt"),
            "/test/message.txt"
        );
        assert_eq!(unsuffix("/test/message (4539347)   .txt"), "/test/message.txt");
        assert_eq!(unsuffix("/test/message\t(5)\t.txt"), "/test/message.txt");
    }

    #[test]
    fn test_unsuffix_not_last_before_extension() {
        let path = "/test/message (37)  d .txt";
        assert_eq!(unsuffix(path), path);
    }

    #[test]
    fn test_unsuffix_without_extension() {
        assert_eq!(unsuffix("/test/message (145)"), "/test/message");
        assert_eq!(unsuffix("/test/message   (3475)    "), "/test/message");

        let path = "/test/message     (648189)      asdf      ";
        assert_eq!(unsuffix(path), path);
    }

    #[test]
    fn test_unsuffix_refuses_blank_names() {
        for name in [
            "    (2345)            ",
            "           (4789)",
            "(5453)            ",
            "(12).txt",
            "/dir/ (3).txt",
        ] {
            assert_eq!(unsuffix(name), name);
        }
    }

    #[test]
    fn test_unsuffix_empty_parens_are_not_a_suffix() {
        assert_eq!(unsuffix("file ().txt"), "file ().txt");
    }

    #[test]
    fn test_unsuffix_only_last_group_considered() {
        assert_eq!(unsuffix("mix (a) (3).txt"), "mix (a).txt");
        assert_eq!(unsuffix("mix (3) (a).txt"), "mix (3) (a).txt");
    }

    #[test]
    fn test_unsuffix_multi_dot_extension() {
        assert_eq!(unsuffix("archive.tar (2).gz"), "archive.tar.gz");
        assert_eq!(unsuffix("archive (2).tar.gz"), "archive.tar.gz");
    }

    #[test]
    fn test_unsuffix_is_idempotent() {
        for name in [
            "a (1) (2).txt",
            "/test/message (2).txt",
            "    (2345)            ",
            " (1) (2)",
            "x (37)  d .txt",
            "plain",
        ] {
            let once = unsuffix(name).into_owned();
            assert_eq!(unsuffix(&once), once, "input: {:?}", name);
        }
    }

    #[test]
    fn test_unsuffix_round_trip() {
        for (stem, ext) in [("report", Some("txt")), ("notes (draft)", Some("md")), ("bin", None)] {
            let canonical = match ext {
                Some(ext) => format!("{}.{}", stem, ext),
                None => stem.to_string(),
            };
            for n in [2, 3, 17, 1000] {
                let candidate = format_candidate(stem, n, ext);
                assert_eq!(unsuffix(&candidate), canonical);
            }
        }
    }

    #[test]
    fn test_format_candidate() {
        assert_eq!(format_candidate("file", 2, Some("txt")), "file (2).txt");
        assert_eq!(format_candidate("file", 12, None), "file (12)");
    }

    #[test]
    fn test_first_illegal_char() {
        assert_eq!(first_illegal_char("text.txt"), None);
        assert_eq!(first_illegal_char("text|"), Some('|'));
        assert_eq!(first_illegal_char("te?xt.txt"), Some('?'));
        assert_eq!(first_illegal_char("te><t.txt"), Some('>'));
    }

    #[test]
    fn test_validator_extra_chars() {
        let validator = NameValidator::with_extra_chars(['#', '?']);
        assert_eq!(validator.reserved().len(), RESERVED_CHARS.len() + 1);
        assert_eq!(validator.first_illegal_char("a#b"), Some('#'));
        assert!(validator.validate("clean name").is_ok());

        match validator.validate("bad:name") {
            Err(Error::InvalidName { ch, .. }) => assert_eq!(ch, ':'),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_rename_path_keeps_extension() {
        assert_eq!(
            rename_path(Path::new("dir/old.txt"), "new name"),
            PathBuf::from("dir/new name.txt")
        );
        assert_eq!(
            rename_path(Path::new("dir/old"), "new"),
            PathBuf::from("dir/new")
        );
    }
}
