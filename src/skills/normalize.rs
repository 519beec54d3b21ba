// src/skills/normalize.rs

//! Canonical spelling for free-text skill tokens.
//!
//! Resolution order for a trimmed token:
//! 1. case-insensitive alias lookup (`"pytorch"` → `"PyTorch"`),
//! 2. acronym casing of each whitespace- or `/`-separated part,
//! 3. a second alias lookup on the cased result.
//!
//! Every canonical spelling is also an alias of itself, which keeps
//! `normalize(normalize(s)) == normalize(s)`.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static PART_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s/]+").expect("static regex"));

static DEFAULT_NORMALIZER: Lazy<SkillNormalizer> = Lazy::new(SkillNormalizer::default);

/// Alias and acronym tables, as written in config.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillVocabulary {
    /// Alias (any case) → canonical spelling.
    pub aliases: BTreeMap<String, String>,
    /// Entries are compared as stored against the upper-cased part,
    /// so a mixed-case entry such as `Git` never matches.
    pub acronyms: BTreeSet<String>,
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        let aliases = [
            ("pytorch", "PyTorch"),
            ("tensorflow", "TensorFlow"),
            ("scikit-learn", "scikit-learn"),
            ("scikit learn", "scikit-learn"),
            ("power bi", "Power BI"),
            ("powerbi", "Power BI"),
            ("a/b testing", "A/B Testing"),
        ]
        .into_iter()
        .map(|(alias, canonical)| (s!(alias), s!(canonical)))
        .collect();

        let acronyms = ["SQL", "AWS", "GCP", "BI", "NLP", "ETL", "API", "R", "Git", "ML"]
            .into_iter()
            .map(String::from)
            .collect();

        Self { aliases, acronyms }
    }
}

/// Lookup tables built once from a [`SkillVocabulary`].
#[derive(Clone, Debug)]
pub struct SkillNormalizer {
    /// Lower-cased alias → canonical.
    aliases: HashMap<String, String>,
    acronyms: HashSet<String>,
}

impl Default for SkillNormalizer {
    fn default() -> Self {
        Self::new(&SkillVocabulary::default())
    }
}

impl SkillNormalizer {
    pub fn new(vocab: &SkillVocabulary) -> Self {
        let mut aliases: HashMap<String, String> = HashMap::with_capacity(vocab.aliases.len() * 2);

        // Keys that differ only by case: first in sorted order wins
        for (alias, canonical) in &vocab.aliases {
            aliases
                .entry(alias.trim().to_lowercase())
                .or_insert_with(|| s!(canonical.trim()));
        }
        for canonical in vocab.aliases.values() {
            let canonical = canonical.trim();
            aliases
                .entry(canonical.to_lowercase())
                .or_insert_with(|| s!(canonical));
        }
        settle(&mut aliases);

        Self {
            aliases,
            acronyms: vocab.acronyms.iter().cloned().collect(),
        }
    }

    /// Canonical form of `raw`, or `""` for blank input. Never fails.
    pub fn normalize(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return s!();
        }
        if let Some(canonical) = self.alias(trimmed) {
            return s!(canonical);
        }

        let cased = PART_SPLIT
            .split(trimmed)
            .filter(|part| !part.is_empty())
            .map(|part| self.case_part(part))
            .collect::<Vec<_>>()
            .join(" ");
        let cased = s!(cased.trim());

        match self.alias(&cased) {
            Some(canonical) => s!(canonical),
            None => cased,
        }
    }

    pub fn alias(&self, token: &str) -> Option<&str> {
        self.aliases.get(&token.to_lowercase()).map(String::as_str)
    }

    pub fn is_acronym(&self, part: &str) -> bool {
        self.acronyms.contains(&part.to_uppercase())
    }

    fn case_part(&self, part: &str) -> String {
        let upper = part.to_uppercase();
        if self.acronyms.contains(&upper) { upper } else { s!(part) }
    }
}

/// Follow alias chains (`a → b`, `b → c`) so every value is a fixed point.
/// A cycle collapses onto its smallest member, whichever key enters it.
fn settle(aliases: &mut HashMap<String, String>) {
    let mut keys: Vec<String> = aliases.keys().cloned().collect();
    keys.sort();
    for key in keys {
        let Some(start) = aliases.get(&key).cloned() else { continue };
        let value = resolve(aliases, start);
        aliases.insert(key, value);
    }
}

fn resolve(aliases: &HashMap<String, String>, start: String) -> String {
    let mut path: Vec<String> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut value = start;
    loop {
        let key = value.to_lowercase();
        if let Some(&at) = seen.get(&key) {
            return path[at..].iter().min().cloned().unwrap_or(value);
        }
        seen.insert(key.clone(), path.len());
        path.push(value.clone());

        match aliases.get(&key) {
            Some(next) if *next != value => value = next.clone(),
            _ => return value,
        }
    }
}

/// [`SkillNormalizer::normalize`] with the built-in vocabulary.
pub fn normalize(raw: &str) -> String {
    DEFAULT_NORMALIZER.normalize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_chain_is_settled() {
        let mut vocab = SkillVocabulary::default();
        vocab.aliases.insert(s!("k8s"), s!("kube"));
        vocab.aliases.insert(s!("kube"), s!("Kubernetes"));
        let n = SkillNormalizer::new(&vocab);

        assert_eq!(n.normalize("K8S"), "Kubernetes");
        assert_eq!(n.normalize("Kubernetes"), "Kubernetes");
    }

    #[test]
    fn alias_cycle_settles_on_one_member() {
        let mut vocab = SkillVocabulary::default();
        vocab.aliases.insert(s!("machine learning"), s!("ML"));
        vocab.aliases.insert(s!("ml"), s!("Machine Learning"));
        let n = SkillNormalizer::new(&vocab);

        for raw in ["ml", "ML", "machine learning", "Machine Learning"] {
            let once = n.normalize(raw);
            assert_eq!(once, "ML", "{raw}");
            assert_eq!(n.normalize(&once), once);
        }
    }

    #[test]
    fn three_way_cycle_is_stable() {
        let mut vocab = SkillVocabulary::default();
        vocab.aliases.insert(s!("x"), s!("Y"));
        vocab.aliases.insert(s!("y"), s!("Z"));
        vocab.aliases.insert(s!("z"), s!("X"));
        let n = SkillNormalizer::new(&vocab);

        for raw in ["x", "y", "z"] {
            assert_eq!(n.normalize(raw), "X");
        }
    }

    #[test]
    fn canonical_values_resolve_to_themselves() {
        let n = SkillNormalizer::default();
        assert_eq!(n.alias("PYTORCH"), Some("PyTorch"));
        assert_eq!(n.alias("a/b TESTING"), Some("A/B Testing"));
    }

    #[test]
    fn slash_form_of_alias_key_is_idempotent() {
        let once = normalize("power/bi");
        assert_eq!(once, "Power BI");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn mixed_case_acronym_entry_never_matches() {
        let n = SkillNormalizer::default();
        assert!(!n.is_acronym("git"));
        assert!(n.is_acronym("sql"));
        assert_eq!(n.normalize("git"), "git");
    }
}
