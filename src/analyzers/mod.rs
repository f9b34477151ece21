//! The checker front end: parse one Python source unit, walk it, and collect
//! violations.

pub mod annotation;
pub mod method_type;
pub mod predicates;
pub mod visitor;

use std::path::Path;

use rustpython_parser::ast;

use crate::config::DocguardConfig;
use crate::core::errors::Error;
use crate::core::FileReport;

use visitor::Visitor;

/// A uniform view over sync and async function definitions, so every check is
/// written once. Async definitions follow exactly the same rules.
pub struct FuncDef<'a> {
    pub name: &'a str,
    pub args: &'a ast::Arguments,
    pub body: &'a [ast::Stmt],
    pub decorator_list: &'a [ast::Expr],
    pub returns: Option<&'a ast::Expr>,
    /// Byte offset of the definition header.
    pub start: usize,
}

impl<'a> FuncDef<'a> {
    pub fn from_sync(def: &'a ast::StmtFunctionDef) -> Self {
        Self {
            name: def.name.as_str(),
            args: &def.args,
            body: &def.body,
            decorator_list: &def.decorator_list,
            returns: def.returns.as_deref(),
            start: def.range.start().to_usize(),
        }
    }

    pub fn from_async(def: &'a ast::StmtAsyncFunctionDef) -> Self {
        Self {
            name: def.name.as_str(),
            args: &def.args,
            body: &def.body,
            decorator_list: &def.decorator_list,
            returns: def.returns.as_deref(),
            start: def.range.start().to_usize(),
        }
    }
}

/// Maps byte offsets from AST ranges to 1-based line numbers.
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { line_starts }
    }

    pub fn line_of(&self, offset: usize) -> usize {
        self.line_starts.partition_point(|&start| start <= offset)
    }
}

/// Check one already-loaded source unit. Fails only when the front end
/// rejects the file; the checks themselves never fail.
pub fn check_source(
    source: &str,
    path: &Path,
    config: &DocguardConfig,
) -> Result<FileReport, Error> {
    let module = rustpython_parser::parse(
        source,
        rustpython_parser::Mode::Module,
        &path.display().to_string(),
    )
    .map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let lines = LineIndex::new(source);
    let mut visitor = Visitor::new(config, &lines);
    visitor.check_module(&module);

    Ok(FileReport {
        path: path.to_path_buf(),
        violations: visitor.into_violations(),
    })
}

pub fn check_file(path: &Path, config: &DocguardConfig) -> Result<FileReport, Error> {
    let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    check_source(&source, path, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_index_maps_offsets() {
        let index = LineIndex::new("ab\ncd\n\nef");
        assert_eq!(index.line_of(0), 1);
        assert_eq!(index.line_of(2), 1);
        assert_eq!(index.line_of(3), 2);
        assert_eq!(index.line_of(6), 3);
        assert_eq!(index.line_of(7), 4);
    }

    #[test]
    fn test_line_index_on_empty_source() {
        let index = LineIndex::new("");
        assert_eq!(index.line_of(0), 1);
    }

    #[test]
    fn test_check_source_rejects_syntax_errors() {
        let config = DocguardConfig::default();
        let err = check_source("def f(:\n", Path::new("bad.py"), &config).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_check_source_on_clean_file() {
        let config = DocguardConfig::default();
        let report = check_source("def f():\n    pass\n", Path::new("ok.py"), &config).unwrap();
        assert!(report.violations.is_empty());
    }
}
