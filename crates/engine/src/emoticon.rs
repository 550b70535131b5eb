//! Placeholder protection for emoticons.
//!
//! Protected glyphs are swapped for word-character placeholders before any
//! destructive stage runs and swapped back at the very end, so a `:)`
//! survives even when `remove_special_chars` would otherwise erase it.

use crate::catalog::EMOTICONS;

/// Builds the placeholder for the `index`-th protected glyph.
///
/// The code is base-25 over `a..=y`; `z` is reserved as the delimiter, so no
/// placeholder can occur as a substring of another. Placeholders are
/// lowercase, digit-free word characters and therefore inert under every
/// removal stage in any option combination.
pub(crate) fn placeholder(index: usize) -> String {
    let mut code = String::new();
    let mut value = index;
    loop {
        code.insert(0, (b'a' + (value % 25) as u8) as char);
        value /= 25;
        if value == 0 {
            break;
        }
    }
    format!("emoglyphz{code}z")
}

/// A glyph match only counts when the input ends or whitespace follows it.
/// Without the boundary, the `:/` in `https://` would be captured and every
/// URL shredded before the URL stage could see it. A glyph glued to the end
/// of a token (`x.com:(`) still matches and survives the removal of its
/// surroundings.
fn matches_at(rest: &str, glyph: &str) -> bool {
    match rest.strip_prefix(glyph) {
        Some(tail) => tail.chars().next().map_or(true, char::is_whitespace),
        None => false,
    }
}

/// Replaces every catalog emoticon with a positional placeholder and records
/// the glyphs in match order.
///
/// A separating space is inserted where a placeholder would otherwise fuse
/// with the preceding token; glyphs already surrounded by whitespace keep
/// their exact surroundings, which keeps repeated cleaning stable.
pub(crate) fn protect(text: &str) -> (String, Vec<&'static str>) {
    let mut out = String::with_capacity(text.len());
    let mut glyphs: Vec<&'static str> = Vec::new();
    let mut rest = text;
    while let Some(ch) = rest.chars().next() {
        if let Some(&glyph) = EMOTICONS.iter().find(|p| matches_at(rest, p)) {
            if !out.is_empty() && !out.ends_with(|c: char| c.is_whitespace()) {
                out.push(' ');
            }
            out.push_str(&placeholder(glyphs.len()));
            glyphs.push(glyph);
            rest = &rest[glyph.len()..];
        } else {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }
    (out, glyphs)
}

/// Restores protected glyphs in occurrence order.
pub(crate) fn restore(text: &str, glyphs: &[&'static str]) -> String {
    let mut out = text.to_string();
    for (index, glyph) in glyphs.iter().enumerate() {
        out = out.replacen(&placeholder(index), glyph, 1);
    }
    out
}
