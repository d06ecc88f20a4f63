//! Filler conjuncts that make a specification side synthesizable.
//!
//! The synthesis engine needs each side in `initial & safety & liveness` form.
//! A missing class is treated as trivially satisfied and filled with a `TRUE`
//! placeholder of that class:
//!
//! | class    | placeholder  |
//! |----------|--------------|
//! | initial  | `TRUE`       |
//! | safety   | `[](TRUE)`   |
//! | liveness | `[]<>(TRUE)` |

use log::debug;

use crate::classify::conjuncts_by_class;
use crate::error::Result;
use crate::formula::Formula;
use crate::parser::parse;
use crate::types::ConjunctClass;

/// Filler for a blank fragment: all three placeholders.
pub const FULL_FILLER: &str = "TRUE & [](TRUE) & []<>(TRUE)";

/// The trivially true conjunct of the given class.
pub fn placeholder(class: ConjunctClass) -> Formula {
    match class {
        ConjunctClass::Initial => Formula::True,
        ConjunctClass::Safety => Formula::always(Formula::True),
        ConjunctClass::Liveness => Formula::always_eventually(Formula::True),
    }
}

/// Classes with no conjunct in `formula`, in placeholder order.
pub fn missing_classes(formula: &Formula) -> Vec<ConjunctClass> {
    ConjunctClass::ALL
        .into_iter()
        .filter(|&class| conjuncts_by_class(formula, class).is_empty())
        .collect()
}

/// Computes the placeholder conjunction needed to complete a fragment.
///
/// Returns an empty string when the fragment already has every class.
/// Blank fragments are not parsed.
///
/// # Examples
///
/// ```
/// use topo_spec::completion::filler_formula;
///
/// assert_eq!(filler_formula("").unwrap(), "TRUE & [](TRUE) & []<>(TRUE)");
/// assert_eq!(filler_formula("[](s.a -> next(s.b))").unwrap(), "TRUE & []<>(TRUE)");
/// assert_eq!(filler_formula("s.a & [](s.b) & []<>(s.c)").unwrap(), "");
/// ```
pub fn filler_formula(spec_part: &str) -> Result<String> {
    if spec_part.trim().is_empty() {
        debug!("filler: blank fragment");
        return Ok(FULL_FILLER.to_string());
    }

    let formula = parse(spec_part)?;
    let missing = missing_classes(&formula);
    debug!("filler: missing classes {:?}", missing);

    Ok(missing
        .into_iter()
        .map(|class| placeholder(class).render())
        .collect::<Vec<_>>()
        .join(" & "))
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::error::Error;

    #[test]
    fn test_blank() {
        assert_eq!(filler_formula("").unwrap(), "TRUE & [](TRUE) & []<>(TRUE)");
        assert_eq!(filler_formula("  \n\t ").unwrap(), FULL_FILLER);
    }

    #[test]
    fn test_placeholders_render() {
        let rendered: Vec<_> = ConjunctClass::ALL.into_iter().map(|c| placeholder(c).render()).collect();
        assert_eq!(rendered.join(" & "), FULL_FILLER);
    }

    #[test]
    fn test_complete_fragment() {
        let spec = "e.a & \n[](e.a -> next(e.b)) & \n[]<>(e.b)";
        assert_eq!(filler_formula(spec).unwrap(), "");
    }

    #[test]
    fn test_only_safety() {
        assert_eq!(filler_formula("[](s.x -> next(!s.y))").unwrap(), "TRUE & []<>(TRUE)");
    }

    #[test]
    fn test_only_initial() {
        assert_eq!(filler_formula("!s.x").unwrap(), "[](TRUE) & []<>(TRUE)");
    }

    #[test]
    fn test_only_liveness() {
        assert_eq!(filler_formula("[]<>(s.goal)").unwrap(), "TRUE & [](TRUE)");
    }

    #[test]
    fn test_unclassified_conjuncts_count_for_nothing() {
        assert_eq!(filler_formula("<>(s.goal)").unwrap(), FULL_FILLER);
    }

    #[test]
    fn test_parse_error_propagates() {
        assert!(matches!(filler_formula("[](s.x &"), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_missing_classes() {
        let f = parse("s.a & []<>(s.b)").unwrap();
        assert_eq!(missing_classes(&f), vec![ConjunctClass::Safety]);
    }
}
