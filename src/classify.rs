//! Structural classification of specification conjuncts.
//!
//! A GR(1) specification side is a conjunction of
//!
//! - **initial** conjuncts: plain propositional formulas, no temporal operators,
//! - **safety** conjuncts: `[](φ)` where `φ` may mention `next` but not `[]`/`<>`,
//! - **liveness** conjuncts: `[]<>(φ)` where `φ` is propositional.
//!
//! Conjuncts of any other shape are left unclassified.

use crate::formula::Formula;
use crate::types::ConjunctClass;

/// Classifies a single conjunct, or returns `None` if it fits no class.
pub fn classify(conjunct: &Formula) -> Option<ConjunctClass> {
    if !conjunct.is_temporal() {
        return Some(ConjunctClass::Initial);
    }
    match conjunct {
        Formula::Always(body) => match body.as_ref() {
            Formula::Eventually(inner) if !inner.is_temporal() => Some(ConjunctClass::Liveness),
            body if !body.has_modality() => Some(ConjunctClass::Safety),
            _ => None,
        },
        _ => None,
    }
}

/// Returns the top-level conjuncts of `formula` that belong to `class`, in order.
pub fn conjuncts_by_class(formula: &Formula, class: ConjunctClass) -> Vec<&Formula> {
    formula
        .conjuncts()
        .into_iter()
        .filter(|c| classify(c) == Some(class))
        .collect()
}
