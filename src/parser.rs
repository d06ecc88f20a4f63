//! Parser for specification fragment text.
//!
//! Accepts the grammar produced by [`Formula::render`] plus a few common aliases
//! (`true`/`false`, `~` for negation, doubled `&&`/`||`). Operator precedence,
//! tightest first:
//!
//! ```text
//! !  []  <>  next(..)   (prefix)
//! &
//! |
//! ->                    (right-associative)
//! <->
//! ```
//!
//! The grammar lives in `formula.pest`. Nesting is limited to [`MAX_NESTING`]
//! levels, counting parentheses, prefix operators and chained implications.

use log::debug;
use pest::Parser;
use pest_derive::Parser;

use crate::error::{Error, Result};
use crate::formula::Formula;

/// Deepest formula nesting accepted by [`parse`].
pub const MAX_NESTING: usize = 64;

#[derive(Parser)]
#[grammar = "formula.pest"]
struct FormulaParser;

type Pair<'a> = pest::iterators::Pair<'a, Rule>;

fn too_deep(pos: usize) -> Error {
    Error::parse(pos, "nesting too deep")
}

/// Rejects parenthesis nesting beyond [`MAX_NESTING`] before the grammar recurses into it.
fn check_parens(text: &str) -> Result<()> {
    let mut depth = 0usize;
    for (pos, c) in text.char_indices() {
        match c {
            '(' => {
                depth += 1;
                if depth > MAX_NESTING {
                    return Err(too_deep(pos));
                }
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

/// Builds the operands of a binary chain. A chain of `n` operands nests `n - 1` levels.
fn build_chain(pair: Pair<'_>, depth: usize) -> Result<Vec<Formula>> {
    let pos = pair.as_span().start();
    let inner: Vec<Pair<'_>> = pair.into_inner().collect();
    let depth = depth + inner.len().saturating_sub(1);
    if depth > MAX_NESTING {
        return Err(too_deep(pos));
    }
    let items = inner.into_iter().map(|p| build(p, depth)).collect::<Result<Vec<_>>>()?;
    if items.is_empty() {
        return Err(Error::parse(pos, "expected a formula"));
    }
    Ok(items)
}

fn build(pair: Pair<'_>, depth: usize) -> Result<Formula> {
    let pos = pair.as_span().start();

    match pair.as_rule() {
        Rule::formula => match pair.into_inner().next() {
            Some(inner) => build(inner, depth),
            None => Err(Error::parse(pos, "empty formula")),
        },
        Rule::iff => {
            let mut items = build_chain(pair, depth)?.into_iter();
            let first = items.next().ok_or_else(|| Error::parse(pos, "expected a formula"))?;
            Ok(items.fold(first, Formula::iff))
        }
        Rule::implies => {
            let mut items = build_chain(pair, depth)?;
            let mut acc = items.pop().ok_or_else(|| Error::parse(pos, "expected a formula"))?;
            while let Some(lhs) = items.pop() {
                acc = Formula::implies(lhs, acc);
            }
            Ok(acc)
        }
        Rule::disj => Ok(Formula::or_all(build_chain(pair, depth)?)),
        Rule::conj => Ok(Formula::and_all(build_chain(pair, depth)?)),
        Rule::unary => {
            let mut inner: Vec<Pair<'_>> = pair.into_inner().collect();
            let primary = inner.pop().ok_or_else(|| Error::parse(pos, "expected a formula"))?;
            let depth = depth + inner.len();
            if depth > MAX_NESTING {
                return Err(too_deep(pos));
            }
            let mut f = build(primary, depth)?;
            for op in inner.into_iter().rev() {
                f = match op.as_rule() {
                    Rule::not_op => Formula::not(f),
                    Rule::always_op => Formula::always(f),
                    _ => Formula::eventually(f),
                };
            }
            Ok(f)
        }
        Rule::next_expr => {
            if depth + 1 > MAX_NESTING {
                return Err(too_deep(pos));
            }
            match pair.into_inner().next() {
                Some(inner) => Ok(Formula::next(build(inner, depth + 1)?)),
                None => Err(Error::parse(pos, "expected a formula")),
            }
        }
        Rule::true_lit => Ok(Formula::True),
        Rule::false_lit => Ok(Formula::False),
        Rule::ident => Ok(Formula::var(pair.as_str())),
        rule => Err(Error::parse(pos, format!("unexpected {:?}", rule))),
    }
}

/// Parses fragment text into a formula.
///
/// Blank input is an error: callers decide what an empty fragment means.
pub fn parse(text: &str) -> Result<Formula> {
    if text.trim().is_empty() {
        return Err(Error::parse(0, "empty formula"));
    }
    check_parens(text)?;

    let mut pairs = FormulaParser::parse(Rule::formula, text).map_err(|e| {
        let pos = match e.location {
            pest::error::InputLocation::Pos(p) => p,
            pest::error::InputLocation::Span((s, _)) => s,
        };
        Error::parse(pos, e.variant.message())
    })?;
    debug!("parse: {} bytes", text.len());

    match pairs.next() {
        Some(root) => build(root, 0),
        None => Err(Error::parse(0, "empty formula")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn v(name: &str) -> Formula {
        Formula::var(name)
    }

    #[test]
    fn test_parse_atoms() {
        assert_eq!(parse("TRUE").unwrap(), Formula::True);
        assert_eq!(parse("false").unwrap(), Formula::False);
        assert_eq!(parse("  s.r1 ").unwrap(), v("s.r1"));
        assert_eq!(parse("e.person_2").unwrap(), v("e.person_2"));
    }

    #[test]
    fn test_parse_precedence() {
        let f = parse("a & b | c -> d").unwrap();
        let expected = Formula::implies(Formula::or(Formula::and(v("a"), v("b")), v("c")), v("d"));
        assert_eq!(f, expected);
    }

    #[test]
    fn test_parse_implies_right_assoc() {
        let f = parse("a -> b -> c").unwrap();
        assert_eq!(f, Formula::implies(v("a"), Formula::implies(v("b"), v("c"))));
    }

    #[test]
    fn test_parse_temporal() {
        assert_eq!(parse("[](TRUE)").unwrap(), Formula::always(Formula::True));
        assert_eq!(parse("[]<>(TRUE)").unwrap(), Formula::always_eventually(Formula::True));
        assert_eq!(
            parse("[](s.a -> next(!s.b))").unwrap(),
            Formula::always(Formula::implies(v("s.a"), Formula::next(Formula::not(v("s.b")))))
        );
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(parse("~a && b").unwrap(), parse("!a & b").unwrap());
        assert_eq!(parse("a || b").unwrap(), parse("a | b").unwrap());
        assert_eq!(parse("a <-> b").unwrap(), Formula::iff(v("a"), v("b")));
    }

    #[test]
    fn test_parse_multiline_conjunction() {
        let f = parse("s.a & \n[](s.b) & \n[]<>(s.c)").unwrap();
        assert_eq!(f.conjuncts().len(), 3);
    }

    #[test]
    fn test_render_then_parse() {
        let text = "[]((s.bit0 & !s.bit1) -> ((next(s.bit0) & !next(s.bit1)) | (!next(s.bit0) & next(s.bit1))))";
        let f = parse(text).unwrap();
        assert_eq!(f.render(), text);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse(""), Err(Error::Parse { pos: 0, .. })));
        assert!(matches!(parse("   "), Err(Error::Parse { pos: 0, .. })));
        assert!(matches!(parse("(a & b"), Err(Error::Parse { .. })));
        assert!(matches!(parse("a b"), Err(Error::Parse { pos: 2, .. })));
        assert!(matches!(parse("a - b"), Err(Error::Parse { .. })));
        assert!(matches!(parse("a $ b"), Err(Error::Parse { pos: 2, .. })));
        assert!(matches!(parse("next a"), Err(Error::Parse { .. })));
        assert!(matches!(parse("a &"), Err(Error::Parse { .. })));
        assert!(matches!(parse("TRUEx & next"), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_parse_keyword_prefixed_idents() {
        assert_eq!(parse("nextRegion").unwrap(), v("nextRegion"));
        assert_eq!(parse("true_door & next_state").unwrap(), Formula::and(v("true_door"), v("next_state")));
        assert_eq!(parse("next (a)").unwrap(), Formula::next(v("a")));
    }

    fn nested(depth: usize) -> String {
        format!("{}a{}", "(".repeat(depth), ")".repeat(depth))
    }

    #[test]
    fn test_parse_moderate_nesting() {
        assert_eq!(parse(&nested(32)).unwrap(), v("a"));
        assert_eq!(parse(&nested(MAX_NESTING)).unwrap(), v("a"));
        let always = format!("{}a", "[]".repeat(32));
        assert!(parse(&always).unwrap().is_temporal());
    }

    #[test]
    fn test_parse_nesting_too_deep() {
        assert!(matches!(
            parse(&nested(MAX_NESTING + 1)),
            Err(Error::Parse { pos, .. }) if pos == MAX_NESTING
        ));
        for depth in [500, 5_000, 200_000] {
            assert!(matches!(parse(&nested(depth)), Err(Error::Parse { .. })));
        }
        let prefixes = format!("{}a", "!".repeat(10_000));
        assert!(matches!(parse(&prefixes), Err(Error::Parse { .. })));
        let chain = vec!["a"; 10_000].join(" -> ");
        assert!(matches!(parse(&chain), Err(Error::Parse { .. })));
        let nexts = format!("{}a{}", "next(".repeat(1_000), ")".repeat(1_000));
        assert!(matches!(parse(&nexts), Err(Error::Parse { .. })));
    }
}
