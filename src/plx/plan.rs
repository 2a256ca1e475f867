// Program descriptor and dictionary passes over the dataset rows.

use std::collections::BTreeSet;
use std::path::Path;

use log::{debug, info};

use crate::error::{PlanError, Result};
use crate::models::{
    Competence, Degree, EducationPlan, Indicator, LoadStats, Registry, Subject,
};
use crate::plx::io::{self, Element};
use crate::plx::{hours, links};

/// ТипОбъекта value marking a discipline-group placeholder. Group rows are
/// not real curriculum entities and never enter the dictionaries.
pub const OBJECT_TYPE_GROUP: &str = "5";

/// Child rows of `parent` with the given tag, group placeholders excluded.
/// This is the one extraction pass shared by competencies, indicators and
/// subjects.
pub fn row_elements<'a>(parent: &'a Element, tag: &'a str) -> impl Iterator<Item = &'a Element> {
    parent
        .children_named(tag)
        .filter(|row| row.attr("ТипОбъекта") != Some(OBJECT_TYPE_GROUP))
}

impl EducationPlan {
    /// Read one *.plx export into a fully cross-referenced plan.
    ///
    /// The file is parsed once; hour records and link records are applied in
    /// two post-processing passes after all entities exist. Any missing
    /// required attribute or structural element aborts the load.
    pub fn load(path: &Path) -> Result<EducationPlan> {
        let root = io::parse_file(path)?;
        let dataset = root
            .find("diffgram")
            .ok_or(PlanError::MissingElement("diffgr:diffgram"))?
            .find("dsMMISDB")
            .ok_or(PlanError::MissingElement("dsMMISDB"))?;

        // Program descriptor; a nested ООП row carries the specialization.
        let descriptor = dataset.find("ООП").ok_or(PlanError::MissingElement("ООП"))?;
        let specialization = descriptor.find("ООП");

        let mut plan = EducationPlan {
            code: descriptor.require_attr("Шифр")?.to_string(),
            name: descriptor.require_attr("Название")?.to_string(),
            degree: Degree::from_code(descriptor.require_int_attr("Квалификация")?),
            program: specialization
                .and_then(|s| s.attr("Название"))
                .unwrap_or_default()
                .to_string(),
            competencies: read_competencies(dataset)?,
            subjects: read_subjects(dataset)?,
            stats: LoadStats::default(),
        };

        hours::read_hours(&mut plan, dataset)?;
        links::read_links(&mut plan, dataset)?;

        info!(
            "loaded plan {}: {} competencies, {} subjects ({} hour rows and {} link rows dropped)",
            plan.code,
            plan.competencies.len(),
            plan.subjects.len(),
            plan.stats.dropped_hours,
            plan.stats.dropped_links,
        );
        Ok(plan)
    }
}

fn read_competencies(dataset: &Element) -> Result<Registry<Competence>> {
    let mut registry = Registry::new();
    for row in row_elements(dataset, "ПланыКомпетенции") {
        let competence = Competence {
            key: row.require_attr("Код")?.to_string(),
            code: row.require_attr("ШифрКомпетенции")?.to_string(),
            description: row.require_attr("Наименование")?.to_string(),
            indicators: read_indicators(row)?,
            subjects: BTreeSet::new(),
        };
        debug!("competence {} ({})", competence.code, competence.key);
        registry.insert(competence.key.clone(), competence.code.clone(), competence);
    }
    Ok(registry)
}

/// Indicators are nested rows of the same tag inside their competency row.
fn read_indicators(competence_row: &Element) -> Result<Registry<Indicator>> {
    let mut registry = Registry::new();
    for row in row_elements(competence_row, "ПланыКомпетенции") {
        let indicator = Indicator {
            key: row.require_attr("Код")?.to_string(),
            code: row.require_attr("ШифрКомпетенции")?.to_string(),
            description: row.require_attr("Наименование")?.to_string(),
        };
        registry.insert(indicator.key.clone(), indicator.code.clone(), indicator);
    }
    Ok(registry)
}

fn read_subjects(dataset: &Element) -> Result<Registry<Subject>> {
    let mut registry = Registry::new();
    for row in row_elements(dataset, "ПланыСтроки") {
        let subject = Subject {
            key: row.require_attr("Код")?.to_string(),
            code: row.require_attr("ДисциплинаКод")?.to_string(),
            name: row.require_attr("Дисциплина")?.to_string(),
            parent: row.attr("КодРодителя").map(str::to_string),
            semesters: Default::default(),
            competencies: BTreeSet::new(),
        };
        debug!("subject {} {}", subject.code, subject.name);
        registry.insert(subject.key.clone(), subject.code.clone(), subject);
    }
    Ok(registry)
}
