use crate::error::{Result, TalentError};
use aho_corasick::AhoCorasick;
use regex::RegexSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalCategory {
    Library,
    Complexity,
    Documentation,
}

impl SignalCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            SignalCategory::Library => "library",
            SignalCategory::Complexity => "complexity",
            SignalCategory::Documentation => "documentation",
        }
    }
}

/// One dictionary term found in one entity's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalMatch<'a> {
    pub entity: &'a str,
    pub term: &'a str,
    pub category: SignalCategory,
}

#[derive(Debug, Clone)]
pub struct WordMatcher {
    category: SignalCategory,
    terms: Vec<String>,
    set: RegexSet,
}

impl WordMatcher {
    pub fn new(category: SignalCategory, terms: Vec<String>) -> Result<Self> {
        let set = RegexSet::new(terms.iter().map(|term| word_pattern(term))).map_err(|e| {
            TalentError::DictionaryBuild {
                category: category.as_str(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            category,
            terms,
            set,
        })
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Distinct terms occurring as whole words in `text`, in dictionary order.
    pub fn matched_terms(&self, text: &str) -> Vec<&str> {
        self.set
            .matches(text)
            .into_iter()
            .map(|index| self.terms[index].as_str())
            .collect()
    }

    pub fn scan<'a>(&'a self, entity: &'a str, text: &str) -> Vec<SignalMatch<'a>> {
        self.matched_terms(text)
            .into_iter()
            .map(|term| SignalMatch {
                entity,
                term,
                category: self.category,
            })
            .collect()
    }
}

fn word_pattern(term: &str) -> String {
    format!(r"\b{}\b", regex::escape(term))
}

/// Matches terms anywhere in the haystack, including inside longer words.
#[derive(Debug, Clone)]
pub struct SubstringMatcher {
    terms: Vec<String>,
    automaton: AhoCorasick,
}

impl SubstringMatcher {
    pub fn new(category: SignalCategory, terms: Vec<String>) -> Result<Self> {
        let automaton =
            AhoCorasick::new(&terms).map_err(|e| TalentError::DictionaryBuild {
                category: category.as_str(),
                reason: e.to_string(),
            })?;
        Ok(Self { terms, automaton })
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Distinct terms contained in `text`, in dictionary order.
    pub fn matched_terms(&self, text: &str) -> Vec<&str> {
        let mut seen = vec![false; self.terms.len()];
        for found in self.automaton.find_overlapping_iter(text) {
            seen[found.pattern().as_usize()] = true;
        }
        self.terms
            .iter()
            .zip(seen)
            .filter(|(_, hit)| *hit)
            .map(|(term, _)| term.as_str())
            .collect()
    }
}
