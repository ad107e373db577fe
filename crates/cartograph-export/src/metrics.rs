//! Text measurement for the PDF base fonts.
//!
//! The report uses the built-in Helvetica faces, which carry no embedded
//! metrics and draw text in WinAnsiEncoding. Advance widths (1/1000 em,
//! from the Adobe AFM files) are tabulated here by WinAnsi code. Text is
//! sanitized to that character set before layout so every measured glyph
//! is one the font can draw.

use serde::{Deserialize, Serialize};

const PT_TO_MM: f32 = 25.4 / 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    Regular,
    Bold,
}

// Advance widths for WinAnsi codes 0x20 through 0xFF. Unassigned codes
// (0x7F, 0x81, 0x8D, 0x8F, 0x90, 0x9D) hold the AFM default and are never
// looked up.
#[rustfmt::skip]
const HELVETICA: [u16; 224] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 350,
    556, 350, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 350, 611, 350,
    350, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 350, 500, 667,
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 224] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 350,
    556, 350, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 350, 611, 350,
    350, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 350, 500, 667,
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

/// WinAnsi code for `ch`, if the base fonts can draw it.
///
/// Printable ASCII and Latin-1 (U+00A0 to U+00FF) map to themselves; the
/// 0x80 to 0x9F block holds the Windows-1252 punctuation and letters.
pub fn win_ansi_code(ch: char) -> Option<u8> {
    let code = match ch {
        ' '..='~' | '\u{a0}'..='\u{ff}' => ch as u32 as u8,
        '\u{20ac}' => 0x80,
        '\u{201a}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201e}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02c6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8a,
        '\u{2039}' => 0x8b,
        '\u{0152}' => 0x8c,
        '\u{017d}' => 0x8e,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02dc}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9a,
        '\u{203a}' => 0x9b,
        '\u{0153}' => 0x9c,
        '\u{017e}' => 0x9e,
        '\u{0178}' => 0x9f,
        _ => return None,
    };
    Some(code)
}

fn advance(ch: char, weight: FontWeight) -> u16 {
    let table = match weight {
        FontWeight::Regular => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };
    // '?' is what sanitize substitutes for anything unencodable.
    let code = win_ansi_code(ch).unwrap_or(b'?');
    table[usize::from(code) - 0x20]
}

/// Rendered width of `text` in millimetres.
pub fn text_width_mm(text: &str, weight: FontWeight, size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(advance(c, weight))).sum();
    units as f32 / 1000.0 * size_pt * PT_TO_MM
}

/// Font size in millimetres.
pub fn size_mm(size_pt: f32) -> f32 {
    size_pt * PT_TO_MM
}

/// Reduce `text` to characters the base fonts can encode.
///
/// WinAnsi characters pass through unchanged. Common look-alikes outside
/// it (minus sign, primes, arrows, typographic spaces) are mapped, control
/// and zero-width characters are dropped, and anything else becomes `?`.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if win_ansi_code(ch).is_some() {
            out.push(ch);
            continue;
        }
        match ch {
            '\t' | '\u{2002}'..='\u{200a}' => out.push(' '),
            '\u{2032}' => out.push('\''),
            '\u{2033}' => out.push('"'),
            '\u{2010}' | '\u{2011}' | '\u{2212}' => out.push('-'),
            '\u{2012}' => out.push('\u{2013}'),
            '\u{2015}' => out.push('\u{2014}'),
            '\u{2192}' => out.push_str("->"),
            c if c.is_control() || c == '\u{200b}' || c == '\u{feff}' => {}
            _ => out.push('?'),
        }
    }
    out
}

/// Break `text` into lines no wider than `max_width_mm`.
///
/// Words are separated by spaces; runs of spaces collapse. A word that does
/// not fit on a line by itself is split between characters. Empty input
/// yields no lines.
pub fn wrap_text(text: &str, weight: FontWeight, size_pt: f32, max_width_mm: f32) -> Vec<String> {
    let space = text_width_mm(" ", weight, size_pt);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;

    for word in text.split(' ').filter(|w| !w.is_empty()) {
        let word_width = text_width_mm(word, weight, size_pt);

        if !current.is_empty() && current_width + space + word_width <= max_width_mm {
            current.push(' ');
            current.push_str(word);
            current_width += space + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if word_width <= max_width_mm {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        current_width = 0.0;
        for ch in word.chars() {
            let ch_width = text_width_mm(ch.encode_utf8(&mut [0; 4]), weight, size_pt);
            if !current.is_empty() && current_width + ch_width > max_width_mm {
                lines.push(std::mem::take(&mut current));
                current_width = 0.0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
