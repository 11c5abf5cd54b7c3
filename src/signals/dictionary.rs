use super::matcher::{SignalCategory, SubstringMatcher, WordMatcher};
use crate::error::Result;
use crate::types::config::DictionaryConfig;
use once_cell::sync::OnceCell;

/// Mathematical and scientific libraries. `random` and `itertools` are
/// standard-library modules and match plenty of general-purpose code.
pub const LIBRARY_TERMS: &[&str] = &[
    "numpy",
    "scipy",
    "sympy",
    "pandas",
    "matplotlib",
    "networkx",
    "statsmodels",
    "sklearn",
    "tensorflow",
    "pytorch",
    "jax",
    "theano",
    "cvxpy",
    "numba",
    "sage",
    "gmpy2",
    "mpmath",
    "random",
    "itertools",
];

pub const COMPLEXITY_TERMS: &[&str] = &[
    "dynamic programming",
    "graph",
    "optimization",
    "gradient",
    "convex",
    "neural network",
    "regression",
    "classification",
    "clustering",
    "bayesian",
    "simulation",
    "eigenvalue",
    "sparse",
    "differential",
    "stochastic",
    "combinatorial",
    "cryptography",
    "probabilistic",
    "reinforcement",
    "theory",
];

pub const DOCUMENTATION_TERMS: &[&str] = &[
    "theory",
    "algorithm",
    "proof",
    "complexity",
    "references",
    "equation",
    "formula",
    "notation",
    "background",
    "analysis",
    "derivation",
    "convergence",
    "optimization",
    "statistical",
    "probability",
    "model",
    "objective",
];

static BUILTIN: OnceCell<Dictionaries> = OnceCell::new();

/// Compiled matchers for every signal category. Immutable once built.
#[derive(Debug, Clone)]
pub struct Dictionaries {
    pub libraries: WordMatcher,
    pub complexity: WordMatcher,
    pub documentation: SubstringMatcher,
}

impl Dictionaries {
    /// Built-in dictionaries, compiled on first use and shared for the
    /// lifetime of the process.
    pub fn builtin() -> Result<&'static Dictionaries> {
        BUILTIN.get_or_try_init(|| Self::with_extras(&DictionaryConfig::default()))
    }

    pub fn with_extras(extras: &DictionaryConfig) -> Result<Self> {
        Ok(Self {
            libraries: WordMatcher::new(
                SignalCategory::Library,
                merge_terms(LIBRARY_TERMS, &extras.extra_libraries),
            )?,
            complexity: WordMatcher::new(
                SignalCategory::Complexity,
                merge_terms(COMPLEXITY_TERMS, &extras.extra_complexity),
            )?,
            documentation: SubstringMatcher::new(
                SignalCategory::Documentation,
                merge_terms(DOCUMENTATION_TERMS, &extras.extra_documentation),
            )?,
        })
    }
}

/// Built-ins first, then lowercased extras not already present.
fn merge_terms(builtin: &[&str], extras: &[String]) -> Vec<String> {
    let mut terms: Vec<String> = builtin.iter().map(|term| term.to_string()).collect();
    for extra in extras {
        let term = extra.trim().to_lowercase();
        if !term.is_empty() && !terms.contains(&term) {
            terms.push(term);
        }
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dictionaries_are_shared() {
        let first = Dictionaries::builtin().expect("builtins should compile");
        let second = Dictionaries::builtin().expect("builtins should compile");
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.libraries.terms().len(), LIBRARY_TERMS.len());
        assert_eq!(first.complexity.terms().len(), COMPLEXITY_TERMS.len());
        assert_eq!(first.documentation.terms().len(), DOCUMENTATION_TERMS.len());
    }

    #[test]
    fn extras_are_lowercased_deduplicated_and_appended() {
        let extras = DictionaryConfig {
            extra_libraries: vec!["Polars".to_string(), "numpy".to_string()],
            extra_complexity: vec![" Topology ".to_string()],
            extra_documentation: Vec::new(),
        };
        let dictionaries = Dictionaries::with_extras(&extras).expect("extras should compile");

        let libraries = dictionaries.libraries.terms();
        assert_eq!(libraries.len(), LIBRARY_TERMS.len() + 1);
        assert_eq!(libraries.last().map(String::as_str), Some("polars"));
        assert_eq!(
            dictionaries.complexity.terms().last().map(String::as_str),
            Some("topology")
        );
        assert_eq!(
            dictionaries.complexity.matched_terms("algebraic topology "),
            vec!["topology"]
        );
    }
}
