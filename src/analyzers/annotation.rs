//! Rendering annotation expressions back to source-like strings, and spotting
//! generator-typed annotations.

use rustpython_parser::ast;

/// Type names whose return annotation means "documents its output via Yields,
/// not Returns".
const GENERATOR_TYPE_NAMES: &[&str] = &[
    "Generator",
    "AsyncGenerator",
    "Iterator",
    "AsyncIterator",
    "Iterable",
    "AsyncIterable",
];

/// Render an annotation expression as the string a docstring would spell it.
/// Total over all expression shapes: anything unexpected renders as empty,
/// which degrades into an ordinary type-hint mismatch rather than a failure.
pub fn unparse(expr: &ast::Expr) -> String {
    match expr {
        ast::Expr::Name(name) => name.id.to_string(),
        ast::Expr::Attribute(attr) => {
            let value = unparse(&attr.value);
            if value.is_empty() {
                attr.attr.to_string()
            } else {
                format!("{}.{}", value, attr.attr)
            }
        }
        ast::Expr::Subscript(sub) => {
            format!("{}[{}]", unparse(&sub.value), unparse(&sub.slice))
        }
        ast::Expr::Tuple(tuple) => tuple
            .elts
            .iter()
            .map(unparse)
            .collect::<Vec<_>>()
            .join(", "),
        ast::Expr::List(list) => {
            let inner = list
                .elts
                .iter()
                .map(unparse)
                .collect::<Vec<_>>()
                .join(", ");
            format!("[{}]", inner)
        }
        ast::Expr::BinOp(bin) if matches!(bin.op, ast::Operator::BitOr) => {
            format!("{} | {}", unparse(&bin.left), unparse(&bin.right))
        }
        ast::Expr::Constant(constant) => constant_to_string(&constant.value),
        ast::Expr::Starred(starred) => format!("*{}", unparse(&starred.value)),
        _ => String::new(),
    }
}

fn constant_to_string(value: &ast::Constant) -> String {
    match value {
        // A quoted forward reference; the quotes are not part of the type.
        ast::Constant::Str(s) => s.clone(),
        ast::Constant::None => "None".to_string(),
        ast::Constant::Bool(b) => if *b { "True" } else { "False" }.to_string(),
        ast::Constant::Ellipsis => "...".to_string(),
        ast::Constant::Int(i) => i.to_string(),
        _ => String::new(),
    }
}

/// Whether an annotation denotes a generator/iterator type, in any of its
/// spellings: bare (`Iterator`), subscripted (`Generator[int, None, None]`),
/// dotted (`typing.Generator`, `collections.abc.Iterable[str]`), or quoted
/// inside a string annotation.
pub fn is_generator_annotation(expr: &ast::Expr) -> bool {
    let rendered = unparse(expr);
    let head = rendered.split('[').next().unwrap_or("").trim();
    let last = head.rsplit('.').next().unwrap_or("");
    GENERATOR_TYPE_NAMES.contains(&last)
}
