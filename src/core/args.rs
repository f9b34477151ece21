//! Normalized view of function parameters, shared between the docstring side
//! and the signature side of the argument check.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// One parameter. Identity for hashing, ordering, and set operations is
/// (name, type hint); the default value is informational only and never
/// compared. An empty `type_hint` means the hint is absent.
#[derive(Clone, Debug)]
pub struct Arg {
    pub name: String,
    pub type_hint: String,
    pub default: Option<String>,
}

impl Arg {
    pub fn new(name: impl Into<String>, type_hint: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "parameter names are never empty");
        Self {
            name,
            type_hint: type_hint.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Per-element equality under a mode flag: with `check_type_hint` the
    /// hints must match too, without it only the names are compared.
    pub fn matches(&self, other: &Arg, check_type_hint: bool) -> bool {
        self.name == other.name && (!check_type_hint || self.type_hint == other.type_hint)
    }

    fn key(&self) -> (&str, &str) {
        (&self.name, &self.type_hint)
    }
}

impl PartialEq for Arg {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Arg {}

impl std::hash::Hash for Arg {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Arg {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Arg {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.type_hint.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}: {}", self.name, self.type_hint)
        }
    }
}

/// An ordered parameter list, either from a docstring's Parameters section or
/// from a signature (with the implicit `self`/`cls` already stripped).
#[derive(Clone, Debug, Default)]
pub struct ArgList {
    args: Vec<Arg>,
}

impl ArgList {
    pub fn new(args: Vec<Arg>) -> Self {
        Self { args }
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// Sequence comparison when `order_matters`, set comparison otherwise;
    /// per-element equality is governed by `check_type_hint` in both cases.
    pub fn equals(&self, other: &ArgList, check_type_hint: bool, order_matters: bool) -> bool {
        if order_matters {
            self.args.len() == other.args.len()
                && self
                    .args
                    .iter()
                    .zip(&other.args)
                    .all(|(a, b)| a.matches(b, check_type_hint))
        } else if check_type_hint {
            let lhs: BTreeSet<(&str, &str)> = self.args.iter().map(Arg::key).collect();
            let rhs: BTreeSet<(&str, &str)> = other.args.iter().map(Arg::key).collect();
            lhs == rhs
        } else {
            let lhs: BTreeSet<&str> = self.args.iter().map(|a| a.name.as_str()).collect();
            let rhs: BTreeSet<&str> = other.args.iter().map(|a| a.name.as_str()).collect();
            lhs == rhs
        }
    }

    /// Args present in `self` but absent from `other`, under (name, type hint)
    /// identity. The `BTreeSet` keeps the output sorted for deterministic
    /// messages.
    pub fn subtract(&self, other: &ArgList) -> BTreeSet<Arg> {
        let rhs: BTreeSet<&Arg> = other.args.iter().collect();
        self.args
            .iter()
            .filter(|a| !rhs.contains(a))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn arg(name: &str, hint: &str) -> Arg {
        Arg::new(name, hint)
    }

    #[test]
    fn test_arg_matches_ignores_hint_when_disabled() {
        let a = arg("x", "int");
        let b = arg("x", "str");
        assert!(!a.matches(&b, true));
        assert!(a.matches(&b, false));
    }

    #[test]
    fn test_arg_equality_ignores_default() {
        let a = arg("x", "int");
        let b = arg("x", "int").with_default("3");
        assert_eq!(a, b);
    }

    #[test]
    fn test_display_with_and_without_hint() {
        assert_eq!(arg("x", "int").to_string(), "x: int");
        assert_eq!(arg("x", "").to_string(), "x");
    }

    #[test]
    fn test_equals_ordered() {
        let lhs = ArgList::new(vec![arg("a", "int"), arg("b", "str")]);
        let rhs = ArgList::new(vec![arg("a", "int"), arg("b", "str")]);
        assert!(lhs.equals(&rhs, true, true));
    }

    #[test]
    fn test_equals_detects_order_difference() {
        let lhs = ArgList::new(vec![arg("a", "int"), arg("b", "str")]);
        let rhs = ArgList::new(vec![arg("b", "str"), arg("a", "int")]);
        assert!(!lhs.equals(&rhs, true, true));
        assert!(lhs.equals(&rhs, true, false));
    }

    #[test]
    fn test_equals_detects_hint_difference() {
        let lhs = ArgList::new(vec![arg("a", "int")]);
        let rhs = ArgList::new(vec![arg("a", "float")]);
        assert!(!lhs.equals(&rhs, true, true));
        assert!(lhs.equals(&rhs, false, true));
    }

    #[test]
    fn test_equals_unordered_without_hints_compares_names_only() {
        let lhs = ArgList::new(vec![arg("a", "int"), arg("b", "")]);
        let rhs = ArgList::new(vec![arg("b", "str"), arg("a", "float")]);
        assert!(lhs.equals(&rhs, false, false));
        assert!(!lhs.equals(&rhs, true, false));
    }

    #[test]
    fn test_length_mismatch_is_never_equal() {
        let lhs = ArgList::new(vec![arg("a", "int")]);
        let rhs = ArgList::new(vec![arg("a", "int"), arg("b", "str")]);
        assert!(!lhs.equals(&rhs, false, false));
    }

    #[test]
    fn test_subtract_is_sorted_by_name() {
        let lhs = ArgList::new(vec![arg("z", "int"), arg("a", "str"), arg("m", "")]);
        let rhs = ArgList::new(vec![arg("m", "")]);
        let diff: Vec<String> = lhs.subtract(&rhs).iter().map(Arg::to_string).collect();
        assert_eq!(diff, vec!["a: str".to_string(), "z: int".to_string()]);
    }

    #[test]
    fn test_subtract_distinguishes_hints() {
        let lhs = ArgList::new(vec![arg("x", "int")]);
        let rhs = ArgList::new(vec![arg("x", "str")]);
        assert_eq!(lhs.subtract(&rhs).len(), 1);
    }

    #[test]
    fn test_subtract_round_trip_reconstructs_union() {
        let a = ArgList::new(vec![arg("x", "int"), arg("y", "str"), arg("z", "")]);
        let b = ArgList::new(vec![arg("y", "str"), arg("w", "bool")]);

        let mut rebuilt: BTreeSet<Arg> = a.subtract(&b);
        rebuilt.extend(b.subtract(&a));
        // intersection
        rebuilt.extend(a.args().iter().filter(|x| b.args().contains(x)).cloned());

        let mut union: BTreeSet<Arg> = a.args().iter().cloned().collect();
        union.extend(b.args().iter().cloned());
        assert_eq!(rebuilt, union);
    }

    #[test]
    fn test_empty_lists_are_equal() {
        let lhs = ArgList::default();
        let rhs = ArgList::new(vec![]);
        assert!(lhs.equals(&rhs, true, true));
        assert!(lhs.subtract(&rhs).is_empty());
    }
}
