// Keyword-matching heuristics over a loaded plan: subject lookup by course
// name and before/after dependency classification.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::course::Course;
use crate::models::{EducationPlan, Subject};

/// Subjects a course relies on ("before") and subjects relying on it
/// ("after"), formatted as "CODE NAME" entries.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Dependencies {
    pub before: BTreeSet<String>,
    pub after: BTreeSet<String>,
}

impl Dependencies {
    /// Printable "опирается на" list.
    pub fn before_list(&self) -> String {
        self.before.iter().cloned().collect::<Vec<_>>().join(", ")
    }

    /// Printable "выступает опорой для" list.
    pub fn after_list(&self) -> String {
        self.after.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// Lowercased whitespace tokens of a subject name.
fn name_tokens(name: &str) -> BTreeSet<String> {
    name.to_lowercase().split_whitespace().map(str::to_string).collect()
}

/// True when any keyword set is fully contained in the name tokens.
fn any_set_matches(keyword_sets: &[BTreeSet<String>], tokens: &BTreeSet<String>) -> bool {
    keyword_sets.iter().any(|set| set.is_subset(tokens))
}

impl EducationPlan {
    /// Find the subject a course description refers to, by keyword-set
    /// containment over the lowercased tokenized subject name.
    ///
    /// When several subjects match, the LAST one in source-row order wins.
    /// That tie-break is inherited behavior the shipped reports depend on;
    /// do not change it to first-match without checking DESIGN.md.
    pub fn find_subject(&self, keyword_sets: &[BTreeSet<String>]) -> Option<&Subject> {
        let mut result = None;
        for subject in self.subjects.values() {
            if any_set_matches(keyword_sets, &name_tokens(&subject.name)) {
                result = Some(subject);
            }
        }
        result
    }

    /// Classify the other subjects named by the course's link keywords as
    /// strictly before or strictly after the given subject.
    ///
    /// A candidate is "before" when all its semesters end before the
    /// subject's first semester, "after" when they all start after its last.
    /// Overlapping candidates land in neither bucket; this is a keyword
    /// heuristic, not a dependency graph, and misses are accepted.
    pub fn find_dependencies(&self, subject: &Subject, course: &Course) -> Dependencies {
        let mut result = Dependencies::default();
        let (Some(&first), Some(&last)) = (
            subject.semesters.keys().min(),
            subject.semesters.keys().max(),
        ) else {
            return result; // subject without hours spans nothing
        };

        for candidate in self.subjects.values() {
            if candidate.key == subject.key {
                continue;
            }
            if !any_set_matches(&course.links, &name_tokens(&candidate.name)) {
                continue;
            }
            let (Some(&cand_first), Some(&cand_last)) = (
                candidate.semesters.keys().min(),
                candidate.semesters.keys().max(),
            ) else {
                continue;
            };
            let entry = format!("{} {}", candidate.code, candidate.name);
            if cand_last < first {
                result.before.insert(entry);
            } else if last < cand_first {
                result.after.insert(entry);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_lowercased_words() {
        let tokens = name_tokens("Математический Анализ и Логика");
        assert!(tokens.contains("математический"));
        assert!(tokens.contains("и"));
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn containment_requires_whole_set() {
        let tokens = name_tokens("базы данных");
        let matching = vec![BTreeSet::from(["базы".to_string(), "данных".to_string()])];
        let excess = vec![BTreeSet::from([
            "базы".to_string(),
            "данных".to_string(),
            "распределенные".to_string(),
        ])];
        assert!(any_set_matches(&matching, &tokens));
        assert!(!any_set_matches(&excess, &tokens));
    }
}
