pub mod args;
pub mod errors;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

/// Stable numeric codes for docstring violations. The numbers are part of the
/// public contract and must not change between releases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum ViolationCode {
    /// Docstring documents fewer parameters than the signature declares.
    FewerArgsInDocstring = 101,
    /// Docstring documents more parameters than the signature declares.
    MoreArgsInDocstring = 102,
    /// Documented and actual parameter sets differ (detailed diff).
    ArgsDiffer = 103,
    /// Same parameters, different order.
    ArgOrderDiffers = 104,
    /// Same parameter names, different type hints.
    TypeHintsDiffer = 105,
    /// Missing "Returns" section despite a returned value or annotation.
    MissingReturnsSection = 201,
    /// "Returns" section present but nothing is returned.
    SpuriousReturnsSection = 202,
    /// `__init__` carries its own docstring instead of the class.
    ConstructorHasDocstring = 301,
    /// Class docstring of a constructor-bearing class has a "Returns" section.
    ReturnsSectionInClassDocstring = 302,
    /// Missing "Yields" section despite a generator return annotation.
    MissingYieldsSectionForAnnotation = 401,
    /// Missing "Yields" section despite yield statements.
    MissingYieldsSectionForYields = 402,
    /// "Yields" section present but no yield or generator annotation.
    SpuriousYieldsSection = 403,
    /// Raise statements present but no "Raises" section.
    UndocumentedRaises = 501,
    /// "Raises" section present but nothing is raised.
    SpuriousRaisesSection = 502,
}

impl ViolationCode {
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// The message body shown after the definition prefix. Codes 1xx start a
    /// fresh sentence (their prefix ends with a colon); the rest continue the
    /// prefix grammatically.
    pub fn description(self) -> &'static str {
        match self {
            ViolationCode::FewerArgsInDocstring => {
                "Docstring contains fewer arguments than in function signature."
            }
            ViolationCode::MoreArgsInDocstring => {
                "Docstring contains more arguments than in function signature."
            }
            ViolationCode::ArgsDiffer => {
                "Docstring arguments are different from function arguments."
            }
            ViolationCode::ArgOrderDiffers => {
                "Arguments are the same in the docstring and the function signature, \
                 but are in a different order."
            }
            ViolationCode::TypeHintsDiffer => {
                "Argument names match, but type hints do not match."
            }
            ViolationCode::MissingReturnsSection => {
                "does not have a \"Returns\" section in the docstring, even though it \
                 returns a value or has a return annotation."
            }
            ViolationCode::SpuriousReturnsSection => {
                "has a \"Returns\" section in the docstring, but there are no return \
                 statements or annotations."
            }
            ViolationCode::ConstructorHasDocstring => {
                "`__init__()` should not have its own docstring; combine it with the \
                 docstring of the class."
            }
            ViolationCode::ReturnsSectionInClassDocstring => {
                "the class docstring does not need a \"Returns\" section, because \
                 `__init__()` cannot return anything."
            }
            ViolationCode::MissingYieldsSectionForAnnotation => {
                "returns a generator, but the docstring does not have a \"Yields\" \
                 section."
            }
            ViolationCode::MissingYieldsSectionForYields => {
                "has \"yield\" statements, but the docstring does not have a \
                 \"Yields\" section."
            }
            ViolationCode::SpuriousYieldsSection => {
                "has a \"Yields\" section in the docstring, but the body does not \
                 have any \"yield\" statements or a generator return annotation."
            }
            ViolationCode::UndocumentedRaises => {
                "has \"raise\" statements, but the docstring does not have a \
                 \"Raises\" section."
            }
            ViolationCode::SpuriousRaisesSection => {
                "has a \"Raises\" section in the docstring, but the body does not \
                 raise anything."
            }
        }
    }
}

impl fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DOC{}", self.as_u16())
    }
}

/// One finding: a stable code, the 1-based source line of the definition under
/// review, a prefix identifying the definition, and an optional detail
/// postfix. Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub code: ViolationCode,
    pub line: usize,
    pub msg_prefix: String,
    pub msg_postfix: String,
}

impl Violation {
    pub fn new(code: ViolationCode, line: usize, msg_prefix: impl Into<String>) -> Self {
        Self {
            code,
            line,
            msg_prefix: msg_prefix.into(),
            msg_postfix: String::new(),
        }
    }

    pub fn with_postfix(
        code: ViolationCode,
        line: usize,
        msg_prefix: impl Into<String>,
        msg_postfix: impl Into<String>,
    ) -> Self {
        Self {
            code,
            line,
            msg_prefix: msg_prefix.into(),
            msg_postfix: msg_postfix.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {}",
            self.code,
            self.msg_prefix,
            self.code.description()
        )?;
        if !self.msg_postfix.is_empty() {
            write!(f, " {}", self.msg_postfix)?;
        }
        Ok(())
    }
}

impl Serialize for Violation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Violation", 3)?;
        state.serialize_field("code", &self.code.as_u16())?;
        state.serialize_field("line", &self.line)?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// All findings for one source file, in traversal order.
#[derive(Clone, Debug, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub violations: Vec<Violation>,
}
