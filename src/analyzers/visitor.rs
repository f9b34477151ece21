//! The tree-walking visitor: classifies every definition, reconciles its
//! docstring with its signature and body, and accumulates violations in
//! traversal order.

use std::collections::BTreeSet;

use rustpython_parser::ast;

use crate::config::DocguardConfig;
use crate::core::args::{Arg, ArgList};
use crate::core::{Violation, ViolationCode};
use crate::docstring::{DocParam, Docstring};

use super::annotation;
use super::method_type::detect_method_type;
use super::predicates;
use super::{FuncDef, LineIndex};

/// The innermost enclosing definition, threaded by value through the
/// recursive walk. Only a class parent changes any check's behavior, so a
/// function parent carries no payload.
#[derive(Clone, Copy)]
enum Parent<'a> {
    Module,
    Class(&'a ast::StmtClassDef),
    Function,
}

pub struct Visitor<'a> {
    config: &'a DocguardConfig,
    lines: &'a LineIndex,
    violations: Vec<Violation>,
}

impl<'a> Visitor<'a> {
    pub fn new(config: &'a DocguardConfig, lines: &'a LineIndex) -> Self {
        Self {
            config,
            lines,
            violations: Vec::new(),
        }
    }

    pub fn check_module(&mut self, module: &ast::Mod) {
        if let ast::Mod::Module(m) = module {
            self.walk(&m.body, Parent::Module);
        }
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Depth-first walk. Compound statements are descended with the parent
    /// unchanged, so a definition nested in an `if` at class level is still a
    /// method of that class.
    fn walk(&mut self, stmts: &[ast::Stmt], parent: Parent<'_>) {
        for stmt in stmts {
            match stmt {
                ast::Stmt::FunctionDef(f) => {
                    self.visit_function(&FuncDef::from_sync(f), parent);
                }
                ast::Stmt::AsyncFunctionDef(f) => {
                    self.visit_function(&FuncDef::from_async(f), parent);
                }
                ast::Stmt::ClassDef(c) => {
                    self.walk(&c.body, Parent::Class(c));
                }
                ast::Stmt::If(s) => {
                    self.walk(&s.body, parent);
                    self.walk(&s.orelse, parent);
                }
                ast::Stmt::While(s) => {
                    self.walk(&s.body, parent);
                    self.walk(&s.orelse, parent);
                }
                ast::Stmt::For(s) => {
                    self.walk(&s.body, parent);
                    self.walk(&s.orelse, parent);
                }
                ast::Stmt::AsyncFor(s) => {
                    self.walk(&s.body, parent);
                    self.walk(&s.orelse, parent);
                }
                ast::Stmt::With(s) => self.walk(&s.body, parent),
                ast::Stmt::AsyncWith(s) => self.walk(&s.body, parent),
                ast::Stmt::Try(s) => {
                    self.walk(&s.body, parent);
                    for handler in &s.handlers {
                        let ast::ExceptHandler::ExceptHandler(h) = handler;
                        self.walk(&h.body, parent);
                    }
                    self.walk(&s.orelse, parent);
                    self.walk(&s.finalbody, parent);
                }
                ast::Stmt::TryStar(s) => {
                    self.walk(&s.body, parent);
                    for handler in &s.handlers {
                        let ast::ExceptHandler::ExceptHandler(h) = handler;
                        self.walk(&h.body, parent);
                    }
                    self.walk(&s.orelse, parent);
                    self.walk(&s.finalbody, parent);
                }
                ast::Stmt::Match(s) => {
                    for case in &s.cases {
                        self.walk(&case.body, parent);
                    }
                }
                _ => {}
            }
        }
    }

    fn visit_function(&mut self, def: &FuncDef<'_>, parent: Parent<'_>) {
        let line = self.lines.line_of(def.start);
        let constructor_class = match parent {
            Parent::Class(class) if def.name == "__init__" => Some(class),
            _ => None,
        };

        let mut doc_text = predicates::get_docstring(def.body);
        if let Some(class) = constructor_class {
            if !doc_text.is_empty() {
                self.violations.push(Violation::new(
                    ViolationCode::ConstructorHasDocstring,
                    line,
                    class_prefix(class),
                ));
            }
            // The class docstring is what describes the constructor.
            doc_text = predicates::get_docstring(&class.body);
        }

        // Definitions without docstrings are someone else's concern.
        if !doc_text.is_empty() {
            let doc = Docstring::parse(&doc_text);
            let skip = self.config.skip_checking_short_docstrings && doc.is_short();

            if !skip {
                self.check_arguments(def, parent, &doc, line);
            }
            if let Some(class) = constructor_class {
                // Constructors get their own Returns rule instead of 201/202,
                // even when the class docstring is short.
                self.check_constructor_returns(class, &doc);
            } else if !skip {
                self.check_returns(def, parent, &doc, line);
            }
            if !skip {
                self.check_yields(def, parent, &doc, line);
                if !self.config.skip_checking_raises {
                    self.check_raises(def, parent, &doc, line);
                }
            }
        }

        self.walk(def.body, Parent::Function);
    }

    fn check_arguments(
        &mut self,
        def: &FuncDef<'_>,
        parent: Parent<'_>,
        doc: &Docstring,
        line: usize,
    ) {
        let prefix = msg_prefix(def, parent, true);

        let mut actual = signature_args(def.args);
        let method_type = detect_method_type(def, matches!(parent, Parent::Class(_)));
        if method_type.strips_implicit_first_arg() && !actual.is_empty() {
            actual.remove(0);
        }

        let doc_args = ArgList::new(doc.parameters.iter().map(DocParam::to_arg).collect());
        let func_args = ArgList::new(actual);

        if doc_args.is_empty() && func_args.is_empty() {
            return;
        }

        if doc_args.len() < func_args.len() {
            self.violations.push(Violation::new(
                ViolationCode::FewerArgsInDocstring,
                line,
                prefix.clone(),
            ));
        }
        if doc_args.len() > func_args.len() {
            self.violations.push(Violation::new(
                ViolationCode::MoreArgsInDocstring,
                line,
                prefix.clone(),
            ));
        }

        match diagnose_args(
            &doc_args,
            &func_args,
            self.config.check_type_hint,
            self.config.check_arg_order,
        ) {
            ArgDiagnosis::Match => {}
            ArgDiagnosis::OrderOnly => {
                self.violations.push(Violation::new(
                    ViolationCode::ArgOrderDiffers,
                    line,
                    prefix,
                ));
            }
            ArgDiagnosis::TypeHintsOnly => {
                self.violations.push(Violation::new(
                    ViolationCode::TypeHintsDiffer,
                    line,
                    prefix,
                ));
            }
            ArgDiagnosis::OrderAndTypeHints => {
                self.violations.push(Violation::new(
                    ViolationCode::ArgOrderDiffers,
                    line,
                    prefix.clone(),
                ));
                self.violations.push(Violation::new(
                    ViolationCode::TypeHintsDiffer,
                    line,
                    prefix,
                ));
            }
            ArgDiagnosis::Diff { missing, extra } => {
                let mut parts: Vec<String> = Vec::new();
                if !missing.is_empty() {
                    parts.push(format!(
                        "Arguments in the function signature but not in the docstring: [{}].",
                        join_args(&missing)
                    ));
                }
                if !extra.is_empty() {
                    parts.push(format!(
                        "Arguments in the docstring but not in the function signature: [{}].",
                        join_args(&extra)
                    ));
                }
                self.violations.push(Violation::with_postfix(
                    ViolationCode::ArgsDiffer,
                    line,
                    prefix,
                    parts.join(" "),
                ));
            }
        }
    }

    fn check_returns(
        &mut self,
        def: &FuncDef<'_>,
        parent: Parent<'_>,
        doc: &Docstring,
        line: usize,
    ) {
        let prefix = msg_prefix(def, parent, false);

        let has_return_stmt = predicates::has_return_statements(def.body);
        let has_return_anno = predicates::has_return_annotation(def);
        let has_generator_anno = predicates::has_generator_return_annotation(def);
        let documented = doc.has_returns_section();

        // A generator-typed annotation asks for a Yields section instead.
        if !documented && (has_return_stmt || (has_return_anno && !has_generator_anno)) {
            self.violations.push(Violation::new(
                ViolationCode::MissingReturnsSection,
                line,
                prefix.clone(),
            ));
        }
        if documented && !(has_return_stmt || has_return_anno) {
            self.violations.push(Violation::new(
                ViolationCode::SpuriousReturnsSection,
                line,
                prefix,
            ));
        }
    }

    fn check_constructor_returns(&mut self, class: &ast::StmtClassDef, doc: &Docstring) {
        if doc.has_returns_section() {
            let line = self.lines.line_of(class.range.start().to_usize());
            self.violations.push(Violation::new(
                ViolationCode::ReturnsSectionInClassDocstring,
                line,
                class_prefix(class),
            ));
        }
    }

    fn check_yields(
        &mut self,
        def: &FuncDef<'_>,
        parent: Parent<'_>,
        doc: &Docstring,
        line: usize,
    ) {
        let prefix = msg_prefix(def, parent, false);

        let has_yield = predicates::has_yield_statements(def.body);
        let has_generator_anno = predicates::has_generator_return_annotation(def);
        let documented = doc.has_yields_section();

        if !documented {
            if has_generator_anno {
                self.violations.push(Violation::new(
                    ViolationCode::MissingYieldsSectionForAnnotation,
                    line,
                    prefix.clone(),
                ));
            }
            if has_yield {
                self.violations.push(Violation::new(
                    ViolationCode::MissingYieldsSectionForYields,
                    line,
                    prefix,
                ));
            }
        } else if !has_yield && !has_generator_anno {
            self.violations.push(Violation::new(
                ViolationCode::SpuriousYieldsSection,
                line,
                prefix,
            ));
        }
    }

    fn check_raises(
        &mut self,
        def: &FuncDef<'_>,
        parent: Parent<'_>,
        doc: &Docstring,
        line: usize,
    ) {
        let prefix = msg_prefix(def, parent, false);

        let has_raise = predicates::has_raise_statements(def.body);
        let documented = doc.has_raises_section();

        if has_raise && !documented {
            self.violations.push(Violation::new(
                ViolationCode::UndocumentedRaises,
                line,
                prefix,
            ));
        } else if !has_raise && documented {
            self.violations.push(Violation::new(
                ViolationCode::SpuriousRaisesSection,
                line,
                prefix,
            ));
        }
    }
}

/// Outcome of the argument reconciliation beyond raw counts.
enum ArgDiagnosis {
    Match,
    OrderOnly,
    TypeHintsOnly,
    OrderAndTypeHints,
    Diff {
        /// In the signature but not in the docstring.
        missing: BTreeSet<Arg>,
        /// In the docstring but not in the signature.
        extra: BTreeSet<Arg>,
    },
}

/// The escalating tie-break ladder: strict comparison first, then each
/// relaxation in rank order. The first relaxation that makes the lists equal
/// names the diagnosis; if none does, fall back to the detailed set diff.
fn diagnose_args(
    doc_args: &ArgList,
    func_args: &ArgList,
    check_type_hint: bool,
    check_arg_order: bool,
) -> ArgDiagnosis {
    if doc_args.equals(func_args, check_type_hint, check_arg_order) {
        return ArgDiagnosis::Match;
    }

    let ladder = [
        ((check_type_hint, false), ArgDiagnosis::OrderOnly),
        ((false, check_arg_order), ArgDiagnosis::TypeHintsOnly),
        ((false, false), ArgDiagnosis::OrderAndTypeHints),
    ];
    for ((type_hint, order), diagnosis) in ladder {
        if doc_args.equals(func_args, type_hint, order) {
            return diagnosis;
        }
    }

    ArgDiagnosis::Diff {
        missing: func_args.subtract(doc_args),
        extra: doc_args.subtract(func_args),
    }
}

/// Positional-only, positional, and keyword-only parameters; `*args` and
/// `**kwargs` never need documenting.
fn signature_args(args: &ast::Arguments) -> Vec<Arg> {
    args.posonlyargs
        .iter()
        .chain(&args.args)
        .chain(&args.kwonlyargs)
        .map(|a| {
            let type_hint = a
                .def
                .annotation
                .as_deref()
                .map(annotation::unparse)
                .unwrap_or_default();
            let mut arg = Arg::new(a.def.arg.as_str(), type_hint);
            if let Some(default) = a.default.as_deref() {
                arg = arg.with_default(annotation::unparse(default));
            }
            arg
        })
        .collect()
}

fn msg_prefix(def: &FuncDef<'_>, parent: Parent<'_>, append_colon: bool) -> String {
    let mut prefix = match parent {
        Parent::Class(class) => format!("Method `{}.{}`", class.name, def.name),
        _ => format!("Function `{}`", def.name),
    };
    if append_colon {
        prefix.push(':');
    }
    prefix
}

fn class_prefix(class: &ast::StmtClassDef) -> String {
    format!("Class `{}`:", class.name)
}

fn join_args(args: &BTreeSet<Arg>) -> String {
    args.iter()
        .map(Arg::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
