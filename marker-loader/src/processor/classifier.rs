//! Coarse classification of marker records.

use std::collections::BTreeSet;

/// Assigns category labels to a marker from its years and text.
///
/// Implementations must be pure: the same input always yields the same labels.
pub trait Classifier: Send + Sync {
    fn classify(&self, years: &[u16], text: Option<&str>) -> BTreeSet<String>;
}

/// Labels markers that mention a year within `start..=end`.
#[derive(Debug, Clone)]
pub struct EraRule {
    pub label: String,
    pub start: u16,
    pub end: u16,
}

impl EraRule {
    pub fn new(label: impl Into<String>, start: u16, end: u16) -> Self {
        Self {
            label: label.into(),
            start,
            end,
        }
    }

    fn matches(&self, years: &[u16]) -> bool {
        years.iter().any(|y| (self.start..=self.end).contains(y))
    }
}

/// Labels markers whose text contains one of `keywords` as a word.
///
/// A keyword also matches its plural with an `s` or `es` suffix.
#[derive(Debug, Clone)]
pub struct SubjectRule {
    pub label: String,
    pub keywords: Vec<String>,
}

impl SubjectRule {
    pub fn new(label: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            label: label.into(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    fn matches(&self, words: &[String]) -> bool {
        words.iter().any(|word| {
            self.keywords.iter().any(|keyword| {
                word == keyword
                    || word
                        .strip_prefix(keyword.as_str())
                        .is_some_and(|rest| rest == "s" || rest == "es")
            })
        })
    }
}

/// Rule-based classifier over historical eras and subject keywords.
///
/// # Example
///
/// ```
/// use marker_loader::processor::{Classifier, RuleClassifier};
///
/// let classifier = RuleClassifier::default();
/// let labels = classifier.classify(&[1862], Some("Confederate fort"));
/// assert!(labels.contains("civil_war"));
/// assert!(labels.contains("military"));
/// ```
#[derive(Debug, Clone)]
pub struct RuleClassifier {
    eras: Vec<EraRule>,
    subjects: Vec<SubjectRule>,
}

impl RuleClassifier {
    pub fn new(eras: Vec<EraRule>, subjects: Vec<SubjectRule>) -> Self {
        Self { eras, subjects }
    }

    fn words(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect()
    }
}

impl Default for RuleClassifier {
    /// Eras of Texas history and common marker subjects.
    fn default() -> Self {
        Self::new(
            vec![
                EraRule::new("spanish_colonial", 1519, 1820),
                EraRule::new("mexican_texas", 1821, 1835),
                EraRule::new("republic_of_texas", 1836, 1845),
                EraRule::new("early_statehood", 1846, 1860),
                EraRule::new("civil_war", 1861, 1865),
                EraRule::new("reconstruction", 1866, 1877),
                EraRule::new("frontier", 1878, 1899),
                EraRule::new("twentieth_century", 1900, 1999),
            ],
            vec![
                SubjectRule::new("religion", &["church", "chapel", "congregation", "parish", "mission"]),
                SubjectRule::new("cemetery", &["cemetery", "burial", "graveyard", "grave"]),
                SubjectRule::new("education", &["school", "college", "academy", "university"]),
                SubjectRule::new("military", &["fort", "battle", "regiment", "army", "soldier"]),
                SubjectRule::new("transportation", &["railroad", "railway", "depot", "bridge"]),
                SubjectRule::new("government", &["courthouse", "county", "capitol"]),
                SubjectRule::new("residence", &["house", "home", "ranch", "homestead"]),
            ],
        )
    }
}

impl Classifier for RuleClassifier {
    fn classify(&self, years: &[u16], text: Option<&str>) -> BTreeSet<String> {
        let mut labels: BTreeSet<String> = self
            .eras
            .iter()
            .filter(|era| era.matches(years))
            .map(|era| era.label.clone())
            .collect();

        if let Some(text) = text {
            let words = Self::words(text);
            labels.extend(
                self.subjects
                    .iter()
                    .filter(|subject| subject.matches(&words))
                    .map(|subject| subject.label.clone()),
            );
        }

        labels
    }
}
