//! Line scanner for numpy-style docstring sections.

use super::{DocParam, Docstring};

/// Section headers numpydoc defines. Only the first four feed the checks, but
/// recognizing the rest matters for the short-docstring decision.
const KNOWN_SECTIONS: &[&str] = &[
    "Parameters",
    "Returns",
    "Yields",
    "Raises",
    "Receives",
    "Other Parameters",
    "Attributes",
    "Methods",
    "See Also",
    "Notes",
    "Warnings",
    "Warns",
    "References",
    "Examples",
];

/// Strip the common indentation the way `inspect.cleandoc` does: the first
/// line is dedented on its own, the rest lose their shared leading whitespace.
/// Indentation is measured in characters, not bytes; Python whitespace is not
/// always ASCII.
pub fn clean(raw: &str) -> String {
    let lines: Vec<&str> = raw.lines().collect();
    let indent = lines
        .iter()
        .skip(1)
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    let mut cleaned: Vec<String> = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            cleaned.push(line.trim_start().to_string());
        } else {
            cleaned.push(strip_indent(line, indent).trim_end().to_string());
        }
    }

    while cleaned.first().is_some_and(|l| l.is_empty()) {
        cleaned.remove(0);
    }
    while cleaned.last().is_some_and(|l| l.is_empty()) {
        cleaned.pop();
    }
    cleaned.join("\n")
}

/// Drop up to `indent` leading whitespace characters, always splitting on a
/// character boundary.
fn strip_indent(line: &str, indent: usize) -> &str {
    let mut dropped = 0;
    for (offset, c) in line.char_indices() {
        if dropped == indent || !c.is_whitespace() {
            return &line[offset..];
        }
        dropped += 1;
    }
    ""
}

/// A header is a known section name on its own line with a dashed underline
/// beneath it.
fn header_at(lines: &[&str], i: usize) -> Option<&'static str> {
    let name = lines[i].trim();
    let known = KNOWN_SECTIONS.iter().find(|s| **s == name)?;
    let underline = lines.get(i + 1)?.trim();
    if !underline.is_empty() && underline.chars().all(|c| c == '-') {
        Some(known)
    } else {
        None
    }
}

/// `name : type`, `name:type`, or a bare `name` at section level.
fn parse_param_entry(line: &str) -> Option<DocParam> {
    let (name, type_hint) = match line.split_once(':') {
        Some((name, hint)) => (name.trim(), hint.trim()),
        None => (line.trim(), ""),
    };
    if name.is_empty() || name.contains(char::is_whitespace) {
        return None;
    }
    Some(DocParam {
        name: name.to_string(),
        type_hint: type_hint.to_string(),
    })
}

pub fn parse(text: &str) -> Docstring {
    let lines: Vec<&str> = text.lines().collect();
    let mut doc = Docstring::default();

    let mut current: Option<&'static str> = None;
    let mut in_summary = true;
    let mut i = 0;

    while i < lines.len() {
        if let Some(name) = header_at(&lines, i) {
            current = Some(name);
            doc.has_sections = true;
            in_summary = false;
            i += 2;
            continue;
        }

        let line = lines[i];
        let trimmed = line.trim();
        let indented = line.starts_with(char::is_whitespace);

        match current {
            None => {
                if in_summary {
                    if trimmed.is_empty() {
                        in_summary = false;
                    } else {
                        doc.summary.push(trimmed.to_string());
                    }
                } else if !trimmed.is_empty() {
                    doc.has_extended_summary = true;
                }
            }
            Some(section) if !trimmed.is_empty() => match section {
                "Parameters" => {
                    if !indented {
                        if let Some(param) = parse_param_entry(trimmed) {
                            doc.parameters.push(param);
                        }
                    }
                }
                "Returns" => doc.returns.push(trimmed.to_string()),
                "Yields" => doc.yields.push(trimmed.to_string()),
                "Raises" => {
                    // Entry lines name the exception type; indented lines
                    // describe it.
                    if !indented {
                        doc.raises.push(trimmed.to_string());
                    }
                }
                _ => {}
            },
            Some(_) => {}
        }
        i += 1;
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_dedents_body_lines() {
        let raw = "Summary.\n\n    Parameters\n    ----------\n    x : int\n        Desc.\n    ";
        assert_eq!(
            clean(raw),
            "Summary.\n\nParameters\n----------\nx : int\n    Desc."
        );
    }

    #[test]
    fn test_clean_strips_leading_blank_lines() {
        assert_eq!(clean("\n    Summary only.\n    "), "Summary only.");
    }

    #[test]
    fn test_clean_dedents_unicode_whitespace_by_characters() {
        // An em-space is three bytes but one character of indentation.
        let raw = "Summary.\n\u{2003}alpha\n  beta";
        assert_eq!(clean(raw), "Summary.\nalpha\n beta");
    }

    #[test]
    fn test_clean_of_empty_string() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   \n   "), "");
    }

    #[test]
    fn test_param_entry_variants() {
        assert_eq!(
            parse_param_entry("x : int"),
            Some(DocParam {
                name: "x".into(),
                type_hint: "int".into()
            })
        );
        assert_eq!(
            parse_param_entry("x:int"),
            Some(DocParam {
                name: "x".into(),
                type_hint: "int".into()
            })
        );
        assert_eq!(
            parse_param_entry("x"),
            Some(DocParam {
                name: "x".into(),
                type_hint: String::new()
            })
        );
        assert_eq!(parse_param_entry("not a param line"), None);
    }

    #[test]
    fn test_header_requires_underline() {
        assert_eq!(header_at(&["Returns", "-------"], 0), Some("Returns"));
        assert_eq!(header_at(&["Returns", "int"], 0), None);
        assert_eq!(header_at(&["Returns"], 0), None);
        assert_eq!(header_at(&["Something", "-------"], 0), None);
    }

    #[test]
    fn test_raises_entries_are_type_lines_only() {
        let doc = parse("Summary.\n\nRaises\n------\nValueError\n    When bad.\nKeyError\n");
        assert_eq!(doc.raises, vec!["ValueError".to_string(), "KeyError".to_string()]);
    }
}
