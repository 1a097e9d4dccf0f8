use flashpdf_export::metrics::{sanitize, text_width, wrap_text};
use flashpdf_export::styles::FontFace;

#[test]
fn width_scales_with_font_size() {
    let small = text_width("Hello", FontFace::Helvetica, 10.0);
    let large = text_width("Hello", FontFace::Helvetica, 20.0);
    assert!((large - 2.0 * small).abs() < 1e-3);
    assert!(text_width("Hello", FontFace::HelveticaBold, 10.0) > small);
}

#[test]
fn short_text_stays_on_one_line() {
    let lines = wrap_text("a short line", FontFace::Helvetica, 12.0, 400.0);
    assert_eq!(lines, vec!["a short line".to_string()]);
}

#[test]
fn long_text_wraps_within_width() {
    let text = "the quick brown fox jumps over the lazy dog ".repeat(10);
    let lines = wrap_text(&text, FontFace::Helvetica, 12.0, 200.0);

    assert!(lines.len() > 1);
    for line in &lines {
        assert!(text_width(line, FontFace::Helvetica, 12.0) <= 200.0);
    }
    assert_eq!(lines.join(" "), text.trim_end());
}

#[test]
fn oversized_word_is_split() {
    let word = "x".repeat(200);
    let lines = wrap_text(&word, FontFace::Helvetica, 12.0, 100.0);
    assert!(lines.len() > 1);
    assert_eq!(lines.concat(), word);
}

#[test]
fn empty_text_yields_one_empty_line() {
    assert_eq!(wrap_text("", FontFace::Helvetica, 12.0, 100.0), vec![String::new()]);
}

#[test]
fn sanitize_replaces_unsupported_glyphs() {
    assert_eq!(sanitize("caf\u{e9} \u{2022} ok"), "caf\u{e9} \u{2022} ok");
    assert_eq!(sanitize("\u{2714} done\tnow"), "? done now");
}
