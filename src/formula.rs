//! LTL formula trees and their rendering to the synthesis engine's text grammar.
//!
//! Formulas are built as trees first and rendered to text once, at the boundary.
//! The rendered grammar is:
//!
//! ```text
//! TRUE  FALSE  name  !f  f & g  f | g  f -> g  f <-> g  next(f)  [](f)  <>(f)  []<>(f)
//! ```
//!
//! # Examples
//!
//! ```
//! use topo_spec::formula::Formula;
//!
//! let f = Formula::always(Formula::implies(
//!     Formula::var("s.r1"),
//!     Formula::or_all([Formula::next(Formula::var("s.r1")), Formula::next(Formula::var("s.r2"))]),
//! ));
//! assert_eq!(f.render(), "[](s.r1 -> (next(s.r1) | next(s.r2)))");
//! ```

use std::fmt;

/// An LTL formula over boolean propositions.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Formula {
    True,
    False,
    Var(String),
    Not(Box<Formula>),
    And(Vec<Formula>),
    Or(Vec<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    Iff(Box<Formula>, Box<Formula>),
    Next(Box<Formula>),
    Always(Box<Formula>),
    Eventually(Box<Formula>),
}

// Constructors
impl Formula {
    pub fn var(name: impl Into<String>) -> Self {
        Formula::Var(name.into())
    }

    /// Negation. Double negations collapse.
    pub fn not(value: Self) -> Self {
        match value {
            Formula::Not(inner) => *inner,
            _ => Formula::Not(Box::new(value)),
        }
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Self::and_all([lhs, rhs])
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Self::or_all([lhs, rhs])
    }

    /// Conjunction of all items.
    ///
    /// Nested conjunctions are flattened. An empty conjunction is `TRUE`,
    /// a singleton is the item itself.
    pub fn and_all(items: impl IntoIterator<Item = Formula>) -> Self {
        let mut flat = Vec::new();
        for item in items {
            match item {
                Formula::And(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => Formula::True,
            1 => flat.pop().unwrap_or(Formula::True),
            _ => Formula::And(flat),
        }
    }

    /// Disjunction of all items.
    ///
    /// Nested disjunctions are flattened. An empty disjunction is `FALSE`,
    /// a singleton is the item itself.
    pub fn or_all(items: impl IntoIterator<Item = Formula>) -> Self {
        let mut flat = Vec::new();
        for item in items {
            match item {
                Formula::Or(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => Formula::False,
            1 => flat.pop().unwrap_or(Formula::False),
            _ => Formula::Or(flat),
        }
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Formula::Implies(Box::new(lhs), Box::new(rhs))
    }

    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Formula::Iff(Box::new(lhs), Box::new(rhs))
    }

    pub fn next(value: Self) -> Self {
        Formula::Next(Box::new(value))
    }

    pub fn always(value: Self) -> Self {
        Formula::Always(Box::new(value))
    }

    pub fn eventually(value: Self) -> Self {
        Formula::Eventually(Box::new(value))
    }

    /// `[]<>(f)`: `f` holds infinitely often.
    pub fn always_eventually(value: Self) -> Self {
        Self::always(Self::eventually(value))
    }
}

// Queries
impl Formula {
    /// Top-level conjuncts, in order.
    ///
    /// A formula that is not a conjunction is its own single conjunct.
    pub fn conjuncts(&self) -> Vec<&Formula> {
        match self {
            Formula::And(items) => items.iter().flat_map(|f| f.conjuncts()).collect(),
            _ => vec![self],
        }
    }

    /// Whether any temporal operator (`next`, `[]`, `<>`) occurs in this formula.
    pub fn is_temporal(&self) -> bool {
        self.any(&|f| matches!(f, Formula::Next(_) | Formula::Always(_) | Formula::Eventually(_)))
    }

    /// Whether `[]` or `<>` occurs in this formula. `next` does not count.
    pub fn has_modality(&self) -> bool {
        self.any(&|f| matches!(f, Formula::Always(_) | Formula::Eventually(_)))
    }

    fn any(&self, pred: &dyn Fn(&Formula) -> bool) -> bool {
        if pred(self) {
            return true;
        }
        match self {
            Formula::True | Formula::False | Formula::Var(_) => false,
            Formula::Not(a) | Formula::Next(a) | Formula::Always(a) | Formula::Eventually(a) => a.any(pred),
            Formula::And(items) | Formula::Or(items) => items.iter().any(|f| f.any(pred)),
            Formula::Implies(a, b) | Formula::Iff(a, b) => a.any(pred) || b.any(pred),
        }
    }

    fn is_binary(&self) -> bool {
        matches!(
            self,
            Formula::And(_) | Formula::Or(_) | Formula::Implies(_, _) | Formula::Iff(_, _)
        )
    }
}

// Rendering
impl Formula {
    /// Renders the formula in the engine grammar, without top-level parentheses.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    /// Renders the formula as one operand of a surrounding conjunction.
    ///
    /// Disjunctions, implications and equivalences are parenthesized;
    /// everything else is rendered as by [`Formula::render`].
    pub fn render_conjunct(&self) -> String {
        match self {
            Formula::Or(_) | Formula::Implies(_, _) | Formula::Iff(_, _) => format!("({})", self.render()),
            _ => self.render(),
        }
    }

    fn write_to(&self, out: &mut String) {
        match self {
            Formula::True => out.push_str("TRUE"),
            Formula::False => out.push_str("FALSE"),
            Formula::Var(name) => out.push_str(name),
            Formula::Not(a) => {
                out.push('!');
                a.write_operand(out);
            }
            Formula::And(items) => Self::write_joined(items, " & ", out),
            Formula::Or(items) => Self::write_joined(items, " | ", out),
            Formula::Implies(a, b) => {
                a.write_operand(out);
                out.push_str(" -> ");
                b.write_operand(out);
            }
            Formula::Iff(a, b) => {
                a.write_operand(out);
                out.push_str(" <-> ");
                b.write_operand(out);
            }
            Formula::Next(a) => {
                out.push_str("next(");
                a.write_to(out);
                out.push(')');
            }
            Formula::Always(a) => {
                out.push_str("[]");
                a.write_temporal_operand(out);
            }
            Formula::Eventually(a) => {
                out.push_str("<>");
                a.write_temporal_operand(out);
            }
        }
    }

    fn write_joined(items: &[Formula], sep: &str, out: &mut String) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                out.push_str(sep);
            }
            item.write_operand(out);
        }
    }

    // Every compound binary operand is parenthesized.
    fn write_operand(&self, out: &mut String) {
        if self.is_binary() {
            out.push('(');
            self.write_to(out);
            out.push(')');
        } else {
            self.write_to(out);
        }
    }

    fn write_temporal_operand(&self, out: &mut String) {
        match self {
            Formula::Always(_) | Formula::Eventually(_) => self.write_to(out),
            _ => {
                out.push('(');
                self.write_to(out);
                out.push(')');
            }
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Renders a list of formulas as a conjunction, one conjunct per line.
pub fn render_conjunction<'a>(items: impl IntoIterator<Item = &'a Formula>) -> String {
    items
        .into_iter()
        .map(|f| f.render_conjunct())
        .collect::<Vec<_>>()
        .join(" & \n")
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn v(name: &str) -> Formula {
        Formula::var(name)
    }

    #[test]
    fn test_and_all_degenerate() {
        assert_eq!(Formula::and_all([]), Formula::True);
        assert_eq!(Formula::and_all([v("a")]), v("a"));
        assert_eq!(Formula::or_all([]), Formula::False);
        assert_eq!(Formula::or_all([v("a")]), v("a"));
    }

    #[test]
    fn test_and_all_flattens() {
        let f = Formula::and_all([Formula::and(v("a"), v("b")), v("c")]);
        assert_eq!(f, Formula::And(vec![v("a"), v("b"), v("c")]));
        assert_eq!(f.conjuncts().len(), 3);
    }

    #[test]
    fn test_double_negation() {
        assert_eq!(Formula::not(Formula::not(v("a"))), v("a"));
    }

    #[test]
    fn test_render_placeholders() {
        assert_eq!(Formula::True.render(), "TRUE");
        assert_eq!(Formula::always(Formula::True).render(), "[](TRUE)");
        assert_eq!(Formula::always_eventually(Formula::True).render(), "[]<>(TRUE)");
    }

    #[test]
    fn test_render_parenthesizes_binary_operands() {
        let f = Formula::or_all([
            Formula::and(v("s.bit0"), Formula::not(v("s.bit1"))),
            Formula::and(Formula::not(v("s.bit0")), v("s.bit1")),
        ]);
        assert_eq!(f.render(), "(s.bit0 & !s.bit1) | (!s.bit0 & s.bit1)");

        let g = Formula::not(Formula::and(v("a"), v("b")));
        assert_eq!(g.render(), "!(a & b)");
    }

    #[test]
    fn test_render_next() {
        let f = Formula::and(Formula::next(v("s.bit0")), Formula::not(Formula::next(v("s.bit1"))));
        assert_eq!(f.render(), "next(s.bit0) & !next(s.bit1)");
    }

    #[test]
    fn test_render_conjunct() {
        assert_eq!(Formula::or(v("a"), v("b")).render_conjunct(), "(a | b)");
        assert_eq!(Formula::and(v("a"), v("b")).render_conjunct(), "a & b");
        assert_eq!(Formula::always(v("a")).render_conjunct(), "[](a)");
    }

    #[test]
    fn test_render_conjunction() {
        let items = [v("a"), Formula::implies(v("b"), v("c"))];
        assert_eq!(render_conjunction(&items), "a & \n(b -> c)");
        assert_eq!(render_conjunction(Vec::<Formula>::new().iter()), "");
    }

    #[test]
    fn test_temporal_queries() {
        assert!(!v("a").is_temporal());
        assert!(Formula::next(v("a")).is_temporal());
        assert!(!Formula::next(v("a")).has_modality());
        assert!(Formula::not(Formula::eventually(v("a"))).has_modality());
    }
}
