//! RTF report document

use super::sections::Section;
use super::ReportHeader;

/// Escape text for an RTF body.
///
/// Printable ASCII passes through; backslash and braces are escaped;
/// newlines become `\line`; everything else is written as signed 16-bit
/// `\uN?` escapes, one per UTF-16 code unit.
pub fn encode_text(input: &str) -> String {
    let text = input.replace("\r\n", "\n").replace('\r', "\n");
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\n' => out.push_str("\\line "),
            '\\' => out.push_str("\\\\"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            ' '..='~' => out.push(ch),
            _ => {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{}?", *unit as i16));
                }
            }
        }
    }
    out
}

pub fn render(header: &ReportHeader, sections: &[Section]) -> String {
    let mut parts = vec![
        "{\\rtf1\\ansi\\deff0".to_string(),
        "{\\fonttbl{\\f0 Arial;}}".to_string(),
        "\\viewkind4\\uc1".to_string(),
        format!("\\pard\\f0\\fs32\\b {}\\b0\\par", encode_text(&header.title)),
    ];

    if !header.subtitle.is_empty() {
        parts.push(format!(
            "\\pard\\sa200\\fs24 {}\\par",
            encode_text(&header.subtitle)
        ));
    }

    for section in sections {
        parts.push(format!(
            "\\pard\\sa200\\fs22\\b {}:\\b0\\par",
            encode_text(&section.label)
        ));
        parts.push(format!(
            "\\pard\\sa100\\fs22 {}\\par",
            encode_text(&section.value)
        ));
    }

    if !header.generated_at.is_empty() {
        parts.push(format!(
            "\\pard\\sa300\\fs18 {}\\par",
            encode_text(&format!("Дата выгрузки: {}", header.generated_at))
        ));
    }

    parts.push("}".to_string());
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_ascii_and_controls() {
        assert_eq!(encode_text("a{b}\\c"), "a\\{b\\}\\\\c");
        assert_eq!(encode_text("one\r\ntwo"), "one\\line two");
    }

    #[test]
    fn test_encode_cyrillic_and_astral() {
        // 'Д' = U+0414 = 1044
        assert_eq!(encode_text("Д"), "\\u1044?");
        // U+00A0 no-break space
        assert_eq!(encode_text("1\u{a0}000"), "1\\u160?000");
        // U+1F600 as a surrogate pair
        assert_eq!(encode_text("😀"), "\\u-10179?\\u-8704?");
    }

    #[test]
    fn test_render_document() {
        let header = ReportHeader {
            title: "Участок 04:01".into(),
            subtitle: String::new(),
            generated_at: "01.02.2026, 10:00:00".into(),
        };
        let sections = vec![Section {
            label: "Region".into(),
            value: "Altai\nnorth".into(),
        }];
        let doc = render(&header, &sections);

        assert!(doc.starts_with("{\\rtf1\\ansi\\deff0\n{\\fonttbl{\\f0 Arial;}}\n"));
        assert!(doc.contains("\\pard\\sa200\\fs22\\b Region:\\b0\\par"));
        assert!(doc.contains("\\pard\\sa100\\fs22 Altai\\line north\\par"));
        assert!(!doc.contains("\\fs24"));
        assert!(doc.contains("01.02.2026, 10:00:00\\par"));
        assert!(doc.ends_with("\n}"));
    }
}
