//! Input normalization shared by manual entry and OCR transcriptions.
//!
//! `normalize` is total and idempotent: running it on its own output is a no-op.

use unicode_normalization::UnicodeNormalization;

/// Strip whitespace, unify decimal separators and fold OCR look-alikes to ASCII.
///
/// Passes repeat until the text stops changing: NFKC can expand a character
/// into a space plus a combining mark (`¨`), and once the space is gone the
/// mark composes with the letter before it.
pub fn normalize(raw: &str) -> String {
    let mut out = normalize_pass(raw);
    loop {
        let next = normalize_pass(&out);
        if next == out {
            return out;
        }
        out = next;
    }
}

fn normalize_pass(text: &str) -> String {
    text.nfkc()
        .filter(|ch| !ch.is_whitespace())
        .map(fold_char)
        .collect()
}

fn fold_char(ch: char) -> char {
    match ch {
        ',' => '.',
        '\u{2212}' | '\u{2013}' | '\u{2014}' => '-',
        '\u{00D7}' | '\u{00B7}' | '\u{2219}' => '*',
        '\u{00F7}' | ':' => '/',
        other => fold_cyrillic(other).unwrap_or(other),
    }
}

// Cyrillic letters OCR commonly returns in place of the Latin variable.
fn fold_cyrillic(ch: char) -> Option<char> {
    let latin = match ch {
        'а' => 'a',
        'А' => 'A',
        'в' => 'b',
        'В' => 'B',
        'с' => 'c',
        'С' => 'C',
        'е' => 'e',
        'Е' => 'E',
        'н' => 'h',
        'Н' => 'H',
        'к' => 'k',
        'К' => 'K',
        'м' => 'm',
        'М' => 'M',
        'о' => 'o',
        'О' => 'O',
        'р' => 'p',
        'Р' => 'P',
        'т' => 't',
        'Т' => 'T',
        'у' => 'y',
        'У' => 'Y',
        'х' => 'x',
        'Х' => 'X',
        _ => return None,
    };
    Some(latin)
}

/// Collapse adjacent sign pairs (`--`, `+-`, `-+`, `++`) until none remain.
pub fn collapse_signs(text: &str) -> String {
    let mut out = text.to_owned();
    loop {
        let next = out
            .replace("--", "+")
            .replace("+-", "-")
            .replace("-+", "-")
            .replace("++", "+");
        if next == out {
            return out;
        }
        out = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_whitespace_and_commas() {
        assert_eq!(normalize(" 2,5 x +\t3 = 7 "), "2.5x+3=7");
    }

    #[test]
    fn folds_ocr_lookalikes() {
        assert_eq!(normalize("2х − 4 = 0"), "2x-4=0");
        assert_eq!(normalize("３ｘ×２=６"), "3x*2=6");
        assert_eq!(normalize("x ÷ 2 = 1"), "x/2=1");
    }

    #[test]
    fn spacing_marks_compose_after_stripping() {
        let once = normalize("x\u{a8}=1");
        assert_eq!(once, "x\u{308}".nfc().collect::<String>() + "=1");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn collapses_sign_runs() {
        assert_eq!(collapse_signs("3--2"), "3+2");
        assert_eq!(collapse_signs("3+-2"), "3-2");
        assert_eq!(collapse_signs("3-+2"), "3-2");
        assert_eq!(collapse_signs("3---2"), "3-2");
        assert_eq!(collapse_signs("3*-2"), "3*-2");
    }
}
