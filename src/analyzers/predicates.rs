//! Pure predicates over a definition's body: what it returns, yields, and
//! raises, and what its docstring is. All of them are total over every
//! statement shape the grammar permits; unknown shapes simply answer `false`.

use rustpython_parser::ast;

use crate::docstring;

use super::annotation;
use super::FuncDef;

/// Is there a value-bearing `return` anywhere in the body? A bare `return`
/// does not count. Like the original visitor, this descends into nested
/// definitions too.
pub fn has_return_statements(body: &[ast::Stmt]) -> bool {
    any_stmt(body, &mut |stmt| {
        matches!(stmt, ast::Stmt::Return(r) if r.value.is_some())
    })
}

/// Is there a `raise` anywhere in the body, re-raises included?
pub fn has_raise_statements(body: &[ast::Stmt]) -> bool {
    any_stmt(body, &mut |stmt| matches!(stmt, ast::Stmt::Raise(_)))
}

/// Is there a `yield` or `yield from` anywhere in the body? Yields inside
/// lambdas or comprehensions belong to a different scope and do not count.
pub fn has_yield_statements(body: &[ast::Stmt]) -> bool {
    any_stmt(body, &mut |stmt| {
        stmt_exprs(stmt).into_iter().any(contains_yield)
    })
}

pub fn has_return_annotation(def: &FuncDef<'_>) -> bool {
    def.returns.is_some()
}

pub fn has_generator_return_annotation(def: &FuncDef<'_>) -> bool {
    def.returns.is_some_and(annotation::is_generator_annotation)
}

/// The cleaned docstring of a definition body, or empty when there is none.
pub fn get_docstring(body: &[ast::Stmt]) -> String {
    if let Some(ast::Stmt::Expr(expr)) = body.first() {
        if let ast::Expr::Constant(constant) = expr.value.as_ref() {
            if let ast::Constant::Str(s) = &constant.value {
                return docstring::clean(s);
            }
        }
    }
    String::new()
}

/// Depth-first scan over statements, descending into every compound
/// statement, nested definitions included.
fn any_stmt(stmts: &[ast::Stmt], pred: &mut impl FnMut(&ast::Stmt) -> bool) -> bool {
    stmts.iter().any(|stmt| {
        if pred(stmt) {
            return true;
        }
        match stmt {
            ast::Stmt::FunctionDef(f) => any_stmt(&f.body, pred),
            ast::Stmt::AsyncFunctionDef(f) => any_stmt(&f.body, pred),
            ast::Stmt::ClassDef(c) => any_stmt(&c.body, pred),
            ast::Stmt::If(s) => any_stmt(&s.body, pred) || any_stmt(&s.orelse, pred),
            ast::Stmt::While(s) => any_stmt(&s.body, pred) || any_stmt(&s.orelse, pred),
            ast::Stmt::For(s) => any_stmt(&s.body, pred) || any_stmt(&s.orelse, pred),
            ast::Stmt::AsyncFor(s) => any_stmt(&s.body, pred) || any_stmt(&s.orelse, pred),
            ast::Stmt::With(s) => any_stmt(&s.body, pred),
            ast::Stmt::AsyncWith(s) => any_stmt(&s.body, pred),
            ast::Stmt::Try(s) => {
                any_stmt(&s.body, pred)
                    || s.handlers.iter().any(|handler| {
                        let ast::ExceptHandler::ExceptHandler(h) = handler;
                        any_stmt(&h.body, pred)
                    })
                    || any_stmt(&s.orelse, pred)
                    || any_stmt(&s.finalbody, pred)
            }
            ast::Stmt::TryStar(s) => {
                any_stmt(&s.body, pred)
                    || s.handlers.iter().any(|handler| {
                        let ast::ExceptHandler::ExceptHandler(h) = handler;
                        any_stmt(&h.body, pred)
                    })
                    || any_stmt(&s.orelse, pred)
                    || any_stmt(&s.finalbody, pred)
            }
            ast::Stmt::Match(s) => s.cases.iter().any(|case| any_stmt(&case.body, pred)),
            _ => false,
        }
    })
}

/// The expression positions of one statement where a yield can appear:
/// values, targets, branch and loop tests, iterators, context items, assert
/// and raise operands. Bodies are covered by the statement walk itself.
fn stmt_exprs(stmt: &ast::Stmt) -> Vec<&ast::Expr> {
    match stmt {
        ast::Stmt::Expr(s) => vec![&s.value],
        ast::Stmt::Assign(s) => {
            let mut exprs: Vec<&ast::Expr> = s.targets.iter().collect();
            exprs.push(&s.value);
            exprs
        }
        ast::Stmt::AugAssign(s) => vec![&s.target, &s.value],
        ast::Stmt::AnnAssign(s) => {
            let mut exprs: Vec<&ast::Expr> = vec![&s.target];
            exprs.extend(s.value.as_deref());
            exprs
        }
        ast::Stmt::Return(s) => s.value.as_deref().into_iter().collect(),
        ast::Stmt::If(s) => vec![&s.test],
        ast::Stmt::While(s) => vec![&s.test],
        ast::Stmt::For(s) => vec![&s.target, &s.iter],
        ast::Stmt::AsyncFor(s) => vec![&s.target, &s.iter],
        ast::Stmt::With(s) => with_item_exprs(&s.items),
        ast::Stmt::AsyncWith(s) => with_item_exprs(&s.items),
        ast::Stmt::Assert(s) => {
            let mut exprs: Vec<&ast::Expr> = vec![&s.test];
            exprs.extend(s.msg.as_deref());
            exprs
        }
        ast::Stmt::Delete(s) => s.targets.iter().collect(),
        ast::Stmt::Raise(s) => s
            .exc
            .as_deref()
            .into_iter()
            .chain(s.cause.as_deref())
            .collect(),
        ast::Stmt::Match(s) => vec![&s.subject],
        _ => vec![],
    }
}

fn with_item_exprs(items: &[ast::WithItem]) -> Vec<&ast::Expr> {
    items
        .iter()
        .flat_map(|item| std::iter::once(&item.context_expr).chain(item.optional_vars.as_deref()))
        .collect()
}

fn contains_yield(expr: &ast::Expr) -> bool {
    match expr {
        ast::Expr::Yield(_) | ast::Expr::YieldFrom(_) => true,
        ast::Expr::Await(e) => contains_yield(&e.value),
        ast::Expr::BoolOp(e) => e.values.iter().any(contains_yield),
        ast::Expr::BinOp(e) => contains_yield(&e.left) || contains_yield(&e.right),
        ast::Expr::UnaryOp(e) => contains_yield(&e.operand),
        ast::Expr::IfExp(e) => {
            contains_yield(&e.test) || contains_yield(&e.body) || contains_yield(&e.orelse)
        }
        ast::Expr::Compare(e) => {
            contains_yield(&e.left) || e.comparators.iter().any(contains_yield)
        }
        ast::Expr::Call(e) => {
            contains_yield(&e.func)
                || e.args.iter().any(contains_yield)
                || e.keywords.iter().any(|k| contains_yield(&k.value))
        }
        ast::Expr::NamedExpr(e) => contains_yield(&e.value),
        ast::Expr::Tuple(e) => e.elts.iter().any(contains_yield),
        ast::Expr::List(e) => e.elts.iter().any(contains_yield),
        ast::Expr::Set(e) => e.elts.iter().any(contains_yield),
        ast::Expr::Dict(e) => {
            e.keys.iter().flatten().any(contains_yield) || e.values.iter().any(contains_yield)
        }
        ast::Expr::Starred(e) => contains_yield(&e.value),
        ast::Expr::Attribute(e) => contains_yield(&e.value),
        ast::Expr::Subscript(e) => contains_yield(&e.value) || contains_yield(&e.slice),
        // Lambdas and comprehensions are their own scope.
        _ => false,
    }
}
