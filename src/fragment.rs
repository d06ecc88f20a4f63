//! One side (environment or system) of a specification, in any of its input shapes.

use crate::error::{Error, Result};
use crate::formula::{render_conjunction, Formula};

/// A specification fragment as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecFragment {
    /// Formula text, used verbatim.
    Raw(String),
    /// A single parsed formula.
    Parsed(Formula),
    /// Parsed formulas meant to be conjoined.
    ParsedList(Vec<Formula>),
    /// A list assembled from arbitrary fragments.
    ///
    /// Flattens only if every item is [`SpecFragment::Parsed`].
    List(Vec<SpecFragment>),
}

impl SpecFragment {
    /// Normalizes the fragment to one text string.
    ///
    /// List elements are conjoined with `&`, one per line, each without redundant
    /// top-level parentheses. Fails with [`Error::InvalidInput`] for a
    /// [`SpecFragment::List`] holding anything but parsed formulas.
    pub fn flatten(&self) -> Result<String> {
        match self {
            SpecFragment::Raw(text) => Ok(text.clone()),
            SpecFragment::Parsed(formula) => Ok(formula.render()),
            SpecFragment::ParsedList(formulas) => Ok(render_conjunction(formulas)),
            SpecFragment::List(items) => {
                let formulas = items
                    .iter()
                    .map(|item| match item {
                        SpecFragment::Parsed(formula) => Ok(formula),
                        other => Err(Error::invalid_input(format!(
                            "fragment list must hold only parsed formulas, found {}",
                            other.kind()
                        ))),
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(render_conjunction(formulas))
            }
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            SpecFragment::Raw(_) => "raw text",
            SpecFragment::Parsed(_) => "a parsed formula",
            SpecFragment::ParsedList(_) => "a formula list",
            SpecFragment::List(_) => "a nested list",
        }
    }
}

impl Default for SpecFragment {
    fn default() -> Self {
        SpecFragment::Raw(String::new())
    }
}

impl From<&str> for SpecFragment {
    fn from(text: &str) -> Self {
        SpecFragment::Raw(text.to_string())
    }
}

impl From<String> for SpecFragment {
    fn from(text: String) -> Self {
        SpecFragment::Raw(text)
    }
}

impl From<Formula> for SpecFragment {
    fn from(formula: Formula) -> Self {
        SpecFragment::Parsed(formula)
    }
}

impl From<Vec<Formula>> for SpecFragment {
    fn from(formulas: Vec<Formula>) -> Self {
        SpecFragment::ParsedList(formulas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::parser::parse;

    #[test]
    fn test_flatten_raw() {
        let f = SpecFragment::from("  [](s.a)  ");
        assert_eq!(f.flatten().unwrap(), "  [](s.a)  ");
        assert_eq!(SpecFragment::default().flatten().unwrap(), "");
    }

    #[test]
    fn test_flatten_parsed() {
        let f = SpecFragment::from(parse("(s.a | s.b)").unwrap());
        assert_eq!(f.flatten().unwrap(), "s.a | s.b");
    }

    #[test]
    fn test_flatten_parsed_list() {
        let f = SpecFragment::from(vec![
            parse("s.a").unwrap(),
            parse("[](s.a -> next(s.b))").unwrap(),
            parse("s.c | s.d").unwrap(),
        ]);
        assert_eq!(f.flatten().unwrap(), "s.a & \n[](s.a -> next(s.b)) & \n(s.c | s.d)");
    }

    #[test]
    fn test_flatten_list_of_parsed() {
        let f = SpecFragment::List(vec![
            SpecFragment::Parsed(parse("s.a").unwrap()),
            SpecFragment::Parsed(parse("[]<>(s.b)").unwrap()),
        ]);
        assert_eq!(f.flatten().unwrap(), "s.a & \n[]<>(s.b)");
    }

    #[test]
    fn test_flatten_mixed_list_fails() {
        let f = SpecFragment::List(vec![
            SpecFragment::Raw("s.a".to_string()),
            SpecFragment::Parsed(parse("s.b").unwrap()),
        ]);
        assert!(matches!(f.flatten(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_flatten_nested_list_fails() {
        let f = SpecFragment::List(vec![SpecFragment::ParsedList(vec![Formula::True])]);
        assert!(matches!(f.flatten(), Err(Error::InvalidInput(_))));
    }
}
