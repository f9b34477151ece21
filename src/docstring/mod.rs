//! Sectioned view of a numpy-style docstring.
//!
//! The parser is total: malformed text degrades into emptier sections, never
//! an error. A section that is absent or has no content is treated as not
//! present by the checks.

mod parser;

pub use parser::clean;

use crate::core::args::Arg;

/// One entry of a Parameters section: `name : type` at section level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocParam {
    pub name: String,
    pub type_hint: String,
}

impl DocParam {
    pub fn to_arg(&self) -> Arg {
        Arg::new(self.name.clone(), self.type_hint.clone())
    }
}

/// The parsed docstring structure.
#[derive(Clone, Debug, Default)]
pub struct Docstring {
    pub summary: Vec<String>,
    pub parameters: Vec<DocParam>,
    pub returns: Vec<String>,
    pub yields: Vec<String>,
    pub raises: Vec<String>,
    /// True when any recognized section header appeared, including ones whose
    /// content the checks never look at (Notes, Examples, ...).
    has_sections: bool,
    /// Free text after the summary that belongs to no section.
    has_extended_summary: bool,
}

impl Docstring {
    /// Parse cleaned docstring text into sections.
    pub fn parse(text: &str) -> Self {
        parser::parse(text)
    }

    pub fn has_parameters_section(&self) -> bool {
        !self.parameters.is_empty()
    }

    pub fn has_returns_section(&self) -> bool {
        !self.returns.is_empty()
    }

    pub fn has_yields_section(&self) -> bool {
        !self.yields.is_empty()
    }

    pub fn has_raises_section(&self) -> bool {
        !self.raises.is_empty()
    }

    /// A short docstring is a bare one-line summary: no recognized sections
    /// and no extended description. Empty docstrings are handled before
    /// parsing and never reach this point.
    pub fn is_short(&self) -> bool {
        !self.has_sections && !self.has_extended_summary && self.summary.len() <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_one_line_summary_is_short() {
        let doc = Docstring::parse("Do the thing.");
        assert!(doc.is_short());
        assert!(!doc.has_parameters_section());
        assert!(!doc.has_returns_section());
    }

    #[test]
    fn test_multi_paragraph_without_sections_is_not_short() {
        let doc = Docstring::parse("Summary line.\n\nSome longer explanation\nover two lines.");
        assert!(!doc.is_short());
        assert!(!doc.has_returns_section());
    }

    #[test]
    fn test_any_section_makes_docstring_not_short() {
        let doc = Docstring::parse(indoc! {"
            Summary.

            Notes
            -----
            Some note.
        "});
        assert!(!doc.is_short());
    }

    #[test]
    fn test_full_docstring_sections() {
        let doc = Docstring::parse(indoc! {"
            Add two numbers.

            Parameters
            ----------
            a : int
                First addend.
            b : int
                Second addend.

            Returns
            -------
            int
                The sum.

            Raises
            ------
            ValueError
                If the inputs overflow.
        "});
        assert_eq!(
            doc.parameters,
            vec![
                DocParam {
                    name: "a".into(),
                    type_hint: "int".into()
                },
                DocParam {
                    name: "b".into(),
                    type_hint: "int".into()
                },
            ]
        );
        assert!(doc.has_returns_section());
        assert!(doc.has_raises_section());
        assert!(!doc.has_yields_section());
        assert!(!doc.is_short());
    }

    #[test]
    fn test_parameter_without_type() {
        let doc = Docstring::parse(indoc! {"
            Summary.

            Parameters
            ----------
            verbose
                Whether to log.
        "});
        assert_eq!(
            doc.parameters,
            vec![DocParam {
                name: "verbose".into(),
                type_hint: String::new()
            }]
        );
    }

    #[test]
    fn test_yields_section() {
        let doc = Docstring::parse(indoc! {"
            Iterate.

            Yields
            ------
            int
                The next value.
        "});
        assert!(doc.has_yields_section());
        assert!(!doc.has_returns_section());
    }

    #[test]
    fn test_empty_section_is_not_present() {
        let doc = Docstring::parse("Summary.\n\nReturns\n-------\n");
        assert!(!doc.has_returns_section());
        // The header itself still counts as structure.
        assert!(!doc.is_short());
    }

    #[test]
    fn test_malformed_underline_is_plain_text() {
        let doc = Docstring::parse("Summary.\n\nReturns\nno underline here");
        assert!(!doc.has_returns_section());
        assert!(!doc.is_short());
    }
}
