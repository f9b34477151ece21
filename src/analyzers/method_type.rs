//! Classifying definitions so the argument check knows whether to drop the
//! implicit first parameter.

use rustpython_parser::ast;

use super::FuncDef;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MethodType {
    /// A free function, or one nested inside another function.
    Function,
    InstanceMethod,
    ClassMethod,
    StaticMethod,
    /// `__init__` directly inside a class. Its signature still carries `self`.
    Constructor,
}

impl MethodType {
    /// Instance methods, class methods, and constructors have an implicit
    /// first parameter (`self` or `cls`) that docstrings never document.
    pub fn strips_implicit_first_arg(self) -> bool {
        matches!(
            self,
            MethodType::InstanceMethod | MethodType::ClassMethod | MethodType::Constructor
        )
    }
}

/// Decide the definition kind from decorators and position. Decorators are
/// scanned in full, so `@staticmethod` stacked under other decorators is
/// still found.
pub fn detect_method_type(def: &FuncDef<'_>, in_class: bool) -> MethodType {
    if !in_class {
        return MethodType::Function;
    }
    if has_decorator(def, "staticmethod") {
        MethodType::StaticMethod
    } else if has_decorator(def, "classmethod") {
        MethodType::ClassMethod
    } else if def.name == "__init__" {
        MethodType::Constructor
    } else {
        MethodType::InstanceMethod
    }
}

fn has_decorator(def: &FuncDef<'_>, name: &str) -> bool {
    def.decorator_list
        .iter()
        .any(|d| decorator_name(d) == Some(name))
}

/// The trailing identifier of a decorator expression: `name`, `mod.name`, or
/// `name(...)`. Anything else has no stable name.
fn decorator_name(expr: &ast::Expr) -> Option<&str> {
    match expr {
        ast::Expr::Name(name) => Some(name.id.as_str()),
        ast::Expr::Attribute(attr) => Some(attr.attr.as_str()),
        ast::Expr::Call(call) => decorator_name(&call.func),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustpython_parser::{ast, Parse};

    fn first_func(source: &str) -> ast::StmtFunctionDef {
        let parsed = ast::Suite::parse(source, "<test>").unwrap();
        match &parsed[0] {
            ast::Stmt::FunctionDef(f) => f.clone(),
            _ => panic!("expected function definition"),
        }
    }

    fn classify(source: &str, in_class: bool) -> MethodType {
        let func = first_func(source);
        detect_method_type(&FuncDef::from_sync(&func), in_class)
    }

    #[test]
    fn test_free_function() {
        assert_eq!(classify("def f(x):\n    pass\n", false), MethodType::Function);
    }

    #[test]
    fn test_plain_method_is_instance_method() {
        assert_eq!(
            classify("def f(self, x):\n    pass\n", true),
            MethodType::InstanceMethod
        );
    }

    #[test]
    fn test_classmethod_decorator() {
        assert_eq!(
            classify("@classmethod\ndef f(cls):\n    pass\n", true),
            MethodType::ClassMethod
        );
    }

    #[test]
    fn test_staticmethod_stacked_under_other_decorators() {
        let source = "@functools.cache\n@staticmethod\ndef f(x):\n    pass\n";
        assert_eq!(classify(source, true), MethodType::StaticMethod);
    }

    #[test]
    fn test_constructor_inside_class() {
        assert_eq!(
            classify("def __init__(self):\n    pass\n", true),
            MethodType::Constructor
        );
        assert_eq!(
            classify("def __init__(self):\n    pass\n", false),
            MethodType::Function
        );
    }

    #[test]
    fn test_constructor_strips_implicit_first_arg() {
        assert!(MethodType::Constructor.strips_implicit_first_arg());
        assert!(MethodType::InstanceMethod.strips_implicit_first_arg());
        assert!(MethodType::ClassMethod.strips_implicit_first_arg());
        assert!(!MethodType::StaticMethod.strips_implicit_first_arg());
        assert!(!MethodType::Function.strips_implicit_first_arg());
    }
}
