use cartograph_export::metrics::{sanitize, text_width_mm, win_ansi_code, wrap_text, FontWeight};

#[test]
fn width_scales_with_size_and_weight() {
    let regular = text_width_mm("Users", FontWeight::Regular, 10.0);
    let bigger = text_width_mm("Users", FontWeight::Regular, 20.0);
    let bold = text_width_mm("Users", FontWeight::Bold, 10.0);

    assert!((bigger - 2.0 * regular).abs() < 1e-4);
    assert!(bold > regular);
    assert_eq!(text_width_mm("", FontWeight::Regular, 10.0), 0.0);
}

#[test]
fn known_glyph_width() {
    // 'M' is 833/1000 em; at 72 pt one em is 25.4 mm.
    let width = text_width_mm("M", FontWeight::Regular, 72.0);
    assert!((width - 0.833 * 25.4).abs() < 1e-3);
}

#[test]
fn wrap_keeps_short_text_on_one_line() {
    assert_eq!(
        wrap_text("primary key", FontWeight::Regular, 11.0, 100.0),
        vec!["primary key"]
    );
}

#[test]
fn wrap_breaks_between_words() {
    let text = "alpha beta gamma delta epsilon";
    let max = text_width_mm("alpha beta gamma", FontWeight::Regular, 11.0) + 0.1;
    assert_eq!(
        wrap_text(text, FontWeight::Regular, 11.0, max),
        vec!["alpha beta gamma", "delta epsilon"]
    );
}

#[test]
fn wrap_splits_words_longer_than_a_line() {
    let word = "x".repeat(40);
    let max = text_width_mm(&"x".repeat(10), FontWeight::Regular, 11.0) + 0.01;
    let rows = wrap_text(&word, FontWeight::Regular, 11.0, max);

    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.len() == 10));
    assert_eq!(rows.concat(), word);
}

#[test]
fn wrap_of_empty_or_blank_text_is_empty() {
    assert!(wrap_text("", FontWeight::Regular, 11.0, 50.0).is_empty());
    assert!(wrap_text("    ", FontWeight::Regular, 11.0, 50.0).is_empty());
}

#[test]
fn latin1_and_windows_1252_glyphs_have_font_widths() {
    // AFM: eacute 556, degree 400, Euro 556, emdash 1000 (regular).
    let em = |text: &str| text_width_mm(text, FontWeight::Regular, 72.0) / 25.4;
    assert!((em("\u{e9}") - 0.556).abs() < 1e-3);
    assert!((em("\u{b0}") - 0.400).abs() < 1e-3);
    assert!((em("\u{20ac}") - 0.556).abs() < 1e-3);
    assert!((em("\u{2014}") - 1.000).abs() < 1e-3);

    // Bold ucircumflex is 611, wider than the regular 556.
    let bold = text_width_mm("\u{fb}", FontWeight::Bold, 72.0) / 25.4;
    assert!((bold - 0.611).abs() < 1e-3);
}

#[test]
fn win_ansi_codes_follow_windows_1252() {
    assert_eq!(win_ansi_code('A'), Some(0x41));
    assert_eq!(win_ansi_code('\u{e9}'), Some(0xe9));
    assert_eq!(win_ansi_code('\u{20ac}'), Some(0x80));
    assert_eq!(win_ansi_code('\u{2019}'), Some(0x92));
    assert_eq!(win_ansi_code('\u{153}'), Some(0x9c));
    assert_eq!(win_ansi_code('\u{7f}'), None);
    assert_eq!(win_ansi_code('\u{4e2d}'), None);
}

#[test]
fn sanitize_keeps_encodable_text_and_replaces_the_rest() {
    assert_eq!(sanitize("plain ASCII ~"), "plain ASCII ~");
    assert_eq!(sanitize("a\tb"), "a b");
    assert_eq!(sanitize("Caf\u{e9} r\u{e9}gion \u{b0}C"), "Caf\u{e9} r\u{e9}gion \u{b0}C");
    assert_eq!(
        sanitize("\u{2018}x\u{2019} \u{201c}y\u{201d} \u{2013} \u{2022} \u{2026} \u{20ac}5"),
        "\u{2018}x\u{2019} \u{201c}y\u{201d} \u{2013} \u{2022} \u{2026} \u{20ac}5"
    );
    assert_eq!(sanitize("x\u{2212}1 \u{2192} 5\u{2032}"), "x-1 -> 5'");
    assert_eq!(sanitize("\u{4e2d} \u{1f600}"), "? ?");
    assert_eq!(sanitize("zero\u{200b}width\u{7}"), "zerowidth");
}
