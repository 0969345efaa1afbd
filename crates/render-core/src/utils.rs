use encoding_rs::WINDOWS_1252;
use enroll_types::FontStyle;

/// Points per millimetre.
pub const MM_TO_PT: f32 = 72.0 / 25.4;

/// Map a font family and style onto one of the PDF base-14 font names.
///
/// Unknown families fall back to Helvetica, which is also what `Arial`
/// resolves to.
pub fn base14_font_name(family: &str, style: FontStyle) -> &'static str {
    let family = family.trim().to_ascii_lowercase();
    match family.as_str() {
        "times" | "times new roman" | "times-roman" | "serif" => match style {
            FontStyle::Regular => "Times-Roman",
            FontStyle::Bold => "Times-Bold",
            FontStyle::Italic => "Times-Italic",
            FontStyle::BoldItalic => "Times-BoldItalic",
        },
        "courier" | "courier new" | "monospace" => match style {
            FontStyle::Regular => "Courier",
            FontStyle::Bold => "Courier-Bold",
            FontStyle::Italic => "Courier-Oblique",
            FontStyle::BoldItalic => "Courier-BoldOblique",
        },
        "symbol" => "Symbol",
        "zapfdingbats" => "ZapfDingbats",
        _ => match style {
            FontStyle::Regular => "Helvetica",
            FontStyle::Bold => "Helvetica-Bold",
            FontStyle::Italic => "Helvetica-Oblique",
            FontStyle::BoldItalic => "Helvetica-BoldOblique",
        },
    }
}

pub fn mm_to_pt(mm: f32) -> f32 {
    mm * MM_TO_PT
}

/// Convert a top-down Y coordinate to PDF's bottom-up Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Encode text for a WinAnsi (Windows-1252) literal string.
///
/// Characters without a Windows-1252 code, and C1 control characters, become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    let mut buf = [0u8; 4];
    for c in s.chars() {
        if ('\u{80}'..='\u{9f}').contains(&c) {
            out.push(b'?');
            continue;
        }
        let (bytes, _, unmappable) = WINDOWS_1252.encode(c.encode_utf8(&mut buf));
        if unmappable {
            out.push(b'?');
        } else {
            out.extend_from_slice(&bytes);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arial_maps_to_helvetica() {
        assert_eq!(base14_font_name("Arial", FontStyle::Regular), "Helvetica");
        assert_eq!(base14_font_name("arial", FontStyle::BoldItalic), "Helvetica-BoldOblique");
    }

    #[test]
    fn test_times_and_courier() {
        assert_eq!(base14_font_name("Times", FontStyle::Bold), "Times-Bold");
        assert_eq!(base14_font_name("Courier", FontStyle::Italic), "Courier-Oblique");
    }

    #[test]
    fn test_mm_to_pt() {
        assert!((mm_to_pt(25.4) - 72.0).abs() < 1e-4);
        assert!((mm_to_pt(210.0) - 595.2756).abs() < 1e-2);
    }

    #[test]
    fn test_win_ansi_keeps_latin1() {
        assert_eq!(to_win_ansi("aé"), vec![b'a', 0xE9]);
    }

    #[test]
    fn test_win_ansi_uses_windows_1252_codes() {
        assert_eq!(to_win_ansi("5€"), vec![0x35, 0x80]);
        assert_eq!(to_win_ansi("\u{201C}x\u{201D}"), vec![0x93, b'x', 0x94]);
        assert_eq!(to_win_ansi("\u{2013}\u{2014}"), vec![0x96, 0x97]);
    }

    #[test]
    fn test_win_ansi_replaces_unmappable_and_controls() {
        assert_eq!(to_win_ansi("a\u{4E2D}b"), vec![b'a', b'?', b'b']);
        assert_eq!(to_win_ansi("\u{80}\u{81}\u{9F}"), vec![b'?', b'?', b'?']);
    }
}
