//! Title sanitization for rendered filenames.

use rslug::slugify;

/// Substituted when sanitization leaves nothing usable. The original tool is
/// French, hence the token.
pub const FALLBACK_TITLE: &str = "titre";

// Various quotation marks: '"''""„"`«»
// Stripped up front so `"Hello"` slugs to `hello`, not `-hello-`.
const QUOTATION_MARKS: [char; 13] = [
    '\u{0027}', '\u{0022}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{201E}', '\u{201B}', '\u{0060}',
    '\u{00AB}', '\u{00BB}', '\u{2039}', '\u{203A}',
];

/// Normalizes a free-text title into the restricted filename alphabet
/// `[a-z0-9-]`.
///
/// Accented characters fold to their base letters, whitespace runs collapse
/// to single hyphens, anything else outside the alphabet is dropped or
/// hyphenated, repeated hyphens collapse, and leading/trailing hyphens are
/// trimmed. An empty result is replaced by [`FALLBACK_TITLE`], so the
/// function is total and the rendered name never loses its title segment to
/// bad input.
///
/// Idempotent: sanitized output passes through unchanged.
///
/// ```
/// use batchname_naming::sanitize_title;
///
/// assert_eq!(sanitize_title("  Café   Mañana!! "), "cafe-manana");
/// assert_eq!(sanitize_title("????"), "titre");
/// assert_eq!(sanitize_title("cafe-manana"), "cafe-manana");
/// ```
pub fn sanitize_title(title: &str) -> String {
    let folded: String =
        title.chars().filter(|c| !QUOTATION_MARKS.contains(c)).map(fold_diacritic).collect();
    // The final pass pins the output alphabet regardless of slug dialect:
    // keep [a-z0-9], turn everything else into collapsed hyphens.
    let slug = slugify!(&folded).to_lowercase();
    let mut out = String::with_capacity(slug.len());
    let mut pending_hyphen = false;
    for c in slug.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            out.push(c);
            pending_hyphen = false;
        } else {
            pending_hyphen = true;
        }
    }
    if out.is_empty() { FALLBACK_TITLE.to_string() } else { out }
}

/// Folds the common Latin accented characters to their base letters.
///
/// Multi-character expansions (`æ` → `ae`, `ß` → `ss`) go through the
/// returned owned string; everything unrecognized passes through untouched
/// and is left to the alphabet pass above.
fn fold_diacritic(c: char) -> String {
    let folded: &str = match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'Æ' | 'æ' => "ae",
        'Ç' | 'ç' => "c",
        'È' | 'É' | 'Ê' | 'Ë' | 'è' | 'é' | 'ê' | 'ë' => "e",
        'Ì' | 'Í' | 'Î' | 'Ï' | 'ì' | 'í' | 'î' | 'ï' => "i",
        'Ñ' | 'ñ' => "n",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => "o",
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'ù' | 'ú' | 'û' | 'ü' => "u",
        'Ý' | 'ý' | 'ÿ' => "y",
        'Œ' | 'œ' => "oe",
        'ß' => "ss",
        other => return other.to_string(),
    };
    folded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("  Café   Mañana!! ", "cafe-manana")]
    #[case("AppleWatch", "applewatch")]
    #[case("Crème  Brûlée", "creme-brulee")]
    #[case("hello---world", "hello-world")]
    #[case("--edgy--", "edgy")]
    #[case("Œuvre œcuménique", "oeuvre-oecumenique")]
    #[case("Straße", "strasse")]
    #[case("\"Quoted\" title", "quoted-title")]
    #[case("déjà vu 2024", "deja-vu-2024")]
    fn sanitizes_to_restricted_alphabet(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize_title(input), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("!!??..")]
    #[case("---")]
    fn empty_results_use_fallback_token(#[case] input: &str) {
        assert_eq!(sanitize_title(input), FALLBACK_TITLE);
    }

    #[rstest]
    #[case("  Café   Mañana!! ")]
    #[case("AppleWatch")]
    #[case("")]
    #[case("123 456")]
    #[case("already-clean")]
    fn idempotent(#[case] input: &str) {
        let once = sanitize_title(input);
        assert_eq!(sanitize_title(&once), once);
    }

    #[test]
    fn output_alphabet_is_restricted() {
        let out = sanitize_title("Wild 🦀 input / with\\ separators:and*stuff");
        assert!(out.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        assert!(!out.starts_with('-') && !out.ends_with('-'));
    }
}
