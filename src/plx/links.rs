// Link pass: ПланыКомпетенцииДисциплины rows tie subjects to competencies.

use log::debug;

use crate::error::Result;
use crate::models::EducationPlan;
use crate::plx::io::Element;

/// Populate the two-sided subject↔competency references.
///
/// The association rows are the noisiest part of the export:
/// - КодКомпетенции may name a competency row, or one of its indicators —
///   an indicator link counts for the owning competency;
/// - КодСтроки may name a subject row, or a grouping row whose sub-lines
///   carry it as their parent key — a group link applies to every sub-line;
/// - orphaned references to rows that no longer exist are expected and are
///   only counted.
pub fn read_links(plan: &mut EducationPlan, dataset: &Element) -> Result<()> {
    for row in dataset.children_named("ПланыКомпетенцииДисциплины") {
        let subject_key = row.require_attr("КодСтроки")?;
        let competence_key = row.require_attr("КодКомпетенции")?;

        // Subject by key, or every sub-line of a grouping row by parent key.
        let subject_keys: Vec<String> = if plan.subjects.contains_key(subject_key) {
            vec![subject_key.to_string()]
        } else {
            plan.subjects
                .values()
                .filter(|s| s.parent.as_deref() == Some(subject_key))
                .map(|s| s.key.clone())
                .collect()
        };
        if subject_keys.is_empty() {
            debug!("link row for unknown subject {subject_key}, skipped");
            plan.stats.dropped_links += 1;
            continue;
        }

        // Competency by key, or by the key of one of its indicators.
        let resolved = if plan.competencies.contains_key(competence_key) {
            Some(competence_key.to_string())
        } else {
            plan.competencies
                .values()
                .find(|c| c.has_indicator_key(competence_key))
                .map(|c| c.key.clone())
        };
        let Some(competence_key) = resolved else {
            debug!("link row for unknown competence {competence_key}, skipped");
            plan.stats.dropped_links += 1;
            continue;
        };

        let Some(competence_code) = plan
            .competencies
            .by_key(&competence_key)
            .map(|c| c.code.clone())
        else {
            continue;
        };

        let mut subject_codes = Vec::with_capacity(subject_keys.len());
        for key in &subject_keys {
            if let Some(subject) = plan.subjects.by_key_mut(key) {
                subject.competencies.insert(competence_code.clone());
                subject_codes.push(subject.code.clone());
            }
        }
        if let Some(competence) = plan.competencies.by_key_mut(&competence_key) {
            competence.subjects.extend(subject_codes);
        }
    }
    Ok(())
}
