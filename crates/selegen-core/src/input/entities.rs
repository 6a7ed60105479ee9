//! HTML character reference decoding for table cells.
//!
//! Named references are resolved against the full HTML entity table and
//! numeric ones (`&#39;`, `&#x27;`) by code point, both through quick-xml.
//! Anything that is not a complete, known reference is left untouched.

use quick_xml::escape::{resolve_html5_entity, unescape_with};

/// Longest reference body we look for; bounds the scan for the closing `;`.
const MAX_REFERENCE_LEN: usize = 32;

/// Decode character references in `text`.
pub fn decode(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let candidate = &rest[amp..];
        match reference(candidate) {
            Some((decoded, consumed)) => {
                out.push_str(&decoded);
                rest = &candidate[consumed..];
            }
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Resolve the reference at the start of `s` (which begins with `&`);
/// returns the replacement text and the number of bytes consumed.
fn reference(s: &str) -> Option<(String, usize)> {
    let body_len = s[1..]
        .char_indices()
        .take(MAX_REFERENCE_LEN + 1)
        .take_while(|&(_, c)| c != '&' && !c.is_whitespace())
        .find(|&(_, c)| c == ';')
        .map(|(i, _)| i)?;
    let body = &s[1..1 + body_len];
    if body.is_empty() {
        return None;
    }
    let consumed = body_len + 2;

    // quick-xml only knows the lowercase hex marker.
    let decoded = match body.strip_prefix("#X") {
        Some(hex) => unescape_with(&format!("&#x{hex};"), resolve_html5_entity)
            .ok()?
            .into_owned(),
        None => unescape_with(&s[..consumed], resolve_html5_entity)
            .ok()?
            .into_owned(),
    };
    Some((decoded, consumed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_named() {
        assert_eq!(decode("&quot;a&quot; &amp;&amp; b &lt; c"), "\"a\" && b < c");
        assert_eq!(decode("caf&eacute;"), "café");
    }

    #[test]
    fn test_decode_symbols_and_greek() {
        assert_eq!(
            decode("&rarr; &alpha; &hearts; &le; &Omega;"),
            "\u{2192} \u{3b1} \u{2665} \u{2264} \u{3a9}"
        );
        assert_eq!(decode("&nbsp;&hellip;"), "\u{a0}\u{2026}");
    }

    #[test]
    fn test_decode_numeric() {
        assert_eq!(decode("it&#39;s"), "it's");
        assert_eq!(decode("&#x41;&#X42;"), "AB");
    }

    #[test]
    fn test_unknown_left_alone() {
        assert_eq!(decode("a & b"), "a & b");
        assert_eq!(decode("&bogus;"), "&bogus;");
        assert_eq!(decode("&amp"), "&amp");
        assert_eq!(decode("x&"), "x&");
        assert_eq!(decode("&;"), "&;");
        assert_eq!(decode("a &b c; d"), "a &b c; d");
    }

    #[test]
    fn test_unknown_does_not_swallow_following_reference() {
        assert_eq!(decode("&bogus&amp;"), "&bogus&");
    }
}
