//! Glob-to-regex pattern compilation.
//!
//! Implements shell-style glob patterns over a single path segment:
//! - `*` matches any run of characters except `/`
//! - `?` matches exactly one character except `/`
//! - `{a,b,c}` matches any of the alternatives (nesting supported)
//! - `\` escapes the following metacharacter
//! - a leading `.` is never matched implicitly — `*` skips dotfiles
//!   unless the pattern itself starts with `.`
//!
//! A pattern framed by a repeated non-alphanumeric delimiter, optionally
//! with trailing `i`/`m`/`s` flags (`/^release-\d+$/i`), bypasses glob
//! translation and is compiled as a raw regular expression.

use regex::Regex;

use crate::error::FinderError;

// ---------------------------------------------------------------------------
// Pattern
// ---------------------------------------------------------------------------

/// A compiled single-segment matcher.
///
/// Built once from a glob string ([`Pattern::new`]) or adopted from a
/// pre-built [`Regex`] (`Pattern::from`), and immutable afterwards. Glob
/// patterns match the entire candidate segment; raw and pre-built
/// expressions keep their own anchoring.
///
/// # Example
///
/// ```rust
/// use finder::Pattern;
///
/// let pat = Pattern::new("*.{rs,toml}").unwrap();
/// assert!(pat.matches("main.rs"));
/// assert!(pat.matches("Cargo.toml"));
/// assert!(!pat.matches("main.js"));
/// assert!(!pat.matches(".hidden.rs"));
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    /// Segment indices where the candidate must not start with `.`.
    ///
    /// Semantically a `(?=[^.])` lookahead at each guarded segment start;
    /// the `regex` crate has no lookaround, so the guard lives outside the
    /// expression and is checked in [`Pattern::matches`].
    dot_guards: Vec<usize>,
}

impl Pattern {
    /// Compile a glob string (or delimiter-framed raw expression).
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::InvalidPattern`] when the translated or raw
    /// expression fails to compile — an unclosed `{` group, an unterminated
    /// character class, a malformed raw body.
    pub fn new(pattern: &str) -> Result<Self, FinderError> {
        if let Some((body, flags)) = split_raw(pattern) {
            let expr = if flags.is_empty() {
                body.to_string()
            } else {
                format!("(?{flags}){body}")
            };
            let regex = compile(&expr, pattern)?;
            return Ok(Self {
                regex,
                dot_guards: Vec::new(),
            });
        }

        let (expr, dot_guards) = translate(pattern);
        let regex = compile(&expr, pattern)?;
        Ok(Self { regex, dot_guards })
    }

    /// Test a candidate segment against this pattern.
    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate) && self.dot_guards_hold(candidate)
    }

    /// The compiled expression backing this pattern.
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    /// Verify every guarded segment: the candidate must have a next
    /// character at the segment's start offset, and it must not be `.` —
    /// exactly the `(?=[^.])` assertion, including its empty-rest failure.
    fn dot_guards_hold(&self, candidate: &str) -> bool {
        if self.dot_guards.is_empty() {
            return true;
        }

        let bytes = candidate.as_bytes();
        let mut starts = vec![0usize];
        for (i, b) in bytes.iter().enumerate() {
            if *b == b'/' {
                starts.push(i + 1);
            }
        }

        self.dot_guards.iter().all(|&segment| {
            matches!(
                starts.get(segment).and_then(|&at| bytes.get(at)),
                Some(b) if *b != b'.'
            )
        })
    }
}

/// Adopt a pre-built expression untranslated. The caller asserts it is
/// anchored (`^...$`) if whole-segment matching is intended.
impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self {
            regex,
            dot_guards: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Glob translation
// ---------------------------------------------------------------------------

/// Translate a glob into a regex string plus the guarded segment indices.
///
/// Byte-by-byte state machine: `escaping` consumes exactly one following
/// character, `in_curlies` tracks brace nesting so interior commas are only
/// alternation separators inside an open group, and `first_byte` marks
/// segment starts (pattern start and each position after a literal `/`)
/// where the leading-dot guard applies unless the segment literally starts
/// with `.`.
fn translate(glob: &str) -> (String, Vec<usize>) {
    let mut regex = String::with_capacity(glob.len() + 2);
    let mut dot_guards = Vec::new();
    let mut segment = 0usize;
    let mut first_byte = true;
    let mut escaping = false;
    let mut in_curlies = 0usize;

    regex.push('^');
    for ch in glob.chars() {
        if first_byte {
            if ch != '.' {
                dot_guards.push(segment);
            }
            first_byte = false;
        }
        if ch == '/' {
            first_byte = true;
            segment += 1;
        }

        match ch {
            '.' | '(' | ')' | '|' | '+' | '^' | '$' => {
                regex.push('\\');
                regex.push(ch);
            }
            '*' => regex.push_str(if escaping { r"\*" } else { "[^/]*" }),
            '?' => regex.push_str(if escaping { r"\?" } else { "[^/]" }),
            '{' => {
                if escaping {
                    regex.push_str(r"\{");
                } else {
                    regex.push('(');
                    in_curlies += 1;
                }
            }
            '}' if in_curlies > 0 => {
                if escaping {
                    regex.push('}');
                } else {
                    regex.push(')');
                    in_curlies -= 1;
                }
            }
            ',' if in_curlies > 0 => {
                regex.push(if escaping { ',' } else { '|' });
            }
            '\\' => {
                if escaping {
                    regex.push_str(r"\\");
                    escaping = false;
                } else {
                    escaping = true;
                }
                continue;
            }
            _ => regex.push(ch),
        }
        escaping = false;
    }
    regex.push('$');

    (regex, dot_guards)
}

/// Detect delimiter-framed raw-expression syntax.
///
/// The first character must be non-alphanumeric and not `\`; the string
/// must end with the same delimiter followed only by `i`/`m`/`s` flags, and
/// the delimited body must be non-empty. Returns `(body, flags)`.
fn split_raw(pattern: &str) -> Option<(&str, &str)> {
    let delim = pattern.chars().next()?;
    if delim.is_ascii_alphanumeric() || delim == '\\' {
        return None;
    }

    let rest = &pattern[delim.len_utf8()..];
    let close = rest.rfind(delim)?;
    let body = &rest[..close];
    let flags = &rest[close + delim.len_utf8()..];
    if body.is_empty() || !flags.chars().all(|c| matches!(c, 'i' | 'm' | 's')) {
        return None;
    }

    Some((body, flags))
}

fn compile(expr: &str, pattern: &str) -> Result<Regex, FinderError> {
    Regex::new(expr).map_err(|source| FinderError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn pat(glob: &str) -> Pattern {
        Pattern::new(glob).unwrap()
    }

    #[test]
    fn star_matches_within_segment() {
        let p = pat("*.ext");
        assert!(p.matches("file.ext"));
        assert!(p.matches("a.b.ext"));
        assert!(!p.matches("file2.txt"));
        assert!(!p.matches("dir/file.ext"));
    }

    #[test]
    fn star_never_matches_leading_dot() {
        let p = pat("*");
        assert!(p.matches("file"));
        assert!(!p.matches(".hidden"));
        assert!(!p.matches(""));

        let dotted = pat(".*");
        assert!(dotted.matches(".hidden"));
    }

    #[test]
    fn explicit_dot_prefix_is_literal() {
        let p = pat(".git*");
        assert!(p.matches(".gitignore"));
        assert!(!p.matches("gitignore"));
    }

    #[test]
    fn question_mark_matches_single_char() {
        let p = pat("?at");
        assert!(p.matches("cat"));
        assert!(p.matches("bat"));
        assert!(!p.matches("at"));
        assert!(!p.matches("goat"));
        assert!(!p.matches("/at"));
        // the wildcard could consume `.`, but the segment guard forbids it
        assert!(!p.matches(".at"));
    }

    #[test]
    fn brace_alternation() {
        let p = pat("*.{js,css}");
        assert!(p.matches("app.js"));
        assert!(p.matches("site.css"));
        assert!(!p.matches("index.html"));
    }

    #[test]
    fn nested_braces() {
        let p = pat("{a,{b,c}}d");
        assert!(p.matches("ad"));
        assert!(p.matches("bd"));
        assert!(p.matches("cd"));
        assert!(!p.matches("d"));
    }

    #[test]
    fn comma_outside_braces_is_literal() {
        let p = pat("a,b");
        assert!(p.matches("a,b"));
        assert!(!p.matches("a"));
    }

    #[test]
    fn escaped_wildcards_are_literal() {
        assert!(pat(r"\*").matches("*"));
        assert!(!pat(r"\*").matches("x"));
        assert!(pat(r"\?").matches("?"));
        assert!(pat(r"\{a,b\}").matches("{a,b}"));
        assert!(pat(r"\\").matches("\\"));
    }

    #[test]
    fn regex_metacharacters_are_escaped() {
        assert!(pat("a+b").matches("a+b"));
        assert!(!pat("a+b").matches("aab"));
        assert!(pat("(1)").matches("(1)"));
        assert!(pat("a|b").matches("a|b"));
        assert!(!pat("a|b").matches("a"));
    }

    #[test]
    fn anchored_to_whole_segment() {
        let p = pat("file");
        assert!(p.matches("file"));
        assert!(!p.matches("file1"));
        assert!(!p.matches("afile"));
    }

    #[test]
    fn multi_segment_globs() {
        let p = pat("src/*.js");
        assert!(p.matches("src/app.js"));
        assert!(!p.matches("src/.app.js"));
        assert!(!p.matches("lib/app.js"));
        assert!(!p.matches("src/sub/app.js"));
    }

    #[test]
    fn raw_expression_bypasses_translation() {
        // unanchored: substring semantics, `+` keeps its regex meaning
        let p = pat("/fo+/");
        assert!(p.matches("foo"));
        assert!(p.matches("unfooled"));
        assert!(!p.matches("f"));
    }

    #[test]
    fn raw_expression_flags() {
        let p = pat("/^readme$/i");
        assert!(p.matches("README"));
        assert!(p.matches("ReadMe"));
        assert!(!p.matches("README.md"));
    }

    #[test]
    fn raw_expression_alternate_delimiter() {
        let p = pat("#^a.c$#");
        assert!(p.matches("abc"));
        assert!(!p.matches("ac"));
    }

    #[test]
    fn unterminated_raw_syntax_falls_back_to_glob() {
        // no closing delimiter — `/tmp` is an ordinary (two-segment) glob
        let p = pat("/tmp");
        assert!(p.matches("/tmp"));
        assert!(!p.matches("tmp"));
    }

    #[test]
    fn prebuilt_regex_is_adopted_unchanged() {
        let p = Pattern::from(Regex::new("^release-\\d+$").unwrap());
        assert!(p.matches("release-42"));
        assert!(!p.matches("release-42-rc1"));
        // no implicit leading-dot rule for pre-built expressions
        let dotty = Pattern::from(Regex::new("^\\..*$").unwrap());
        assert!(dotty.matches(".profile"));
    }

    #[test]
    fn invalid_patterns_fail_to_compile() {
        assert!(matches!(
            Pattern::new("{ab"),
            Err(FinderError::InvalidPattern { .. })
        ));
        assert!(matches!(
            Pattern::new("["),
            Err(FinderError::InvalidPattern { .. })
        ));
        assert!(matches!(
            Pattern::new("/+/"),
            Err(FinderError::InvalidPattern { .. })
        ));
    }
}
