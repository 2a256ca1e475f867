// Hour-record pass: ПланыНовыеЧасы rows dispatched through the
// СправочникВидыРабот reference table.

use std::collections::HashMap;

use log::{debug, warn};

use crate::error::Result;
use crate::models::{ControlKind, EducationPlan, WorkKind};
use crate::plx::io::Element;

/// КодТипаЧасов for regular workload hours.
const HT_WORK: &str = "1";

/// КодТипаЧасов for the practical-training share, reported separately in
/// newer exports and stored in the `*_pp` fields.
const HT_PRACTICAL_TRAINING: &str = "2";

/// Apply all hour records of the dataset to the plan's subjects.
///
/// Hour records referencing an unknown subject key belong to excluded group
/// placeholders or superseded rows; they are counted and skipped, never an
/// error. Within one (subject, semester, work type) the export emits at most
/// one record, so plain assignment is enough.
pub fn read_hours(plan: &mut EducationPlan, dataset: &Element) -> Result<()> {
    // Work-type code → abbreviation (Лек, Лаб, Пр, КСР, СР, Контроль, За, …).
    let mut abbreviations: HashMap<&str, &str> = HashMap::new();
    for row in dataset.children_named("СправочникВидыРабот") {
        abbreviations.insert(row.require_attr("Код")?, row.require_attr("Аббревиатура")?);
    }

    for row in dataset.children_named("ПланыНовыеЧасы") {
        let hour_type = row.require_attr("КодТипаЧасов")?;
        if hour_type != HT_WORK && hour_type != HT_PRACTICAL_TRAINING {
            continue; // other historical hour layouts carry no workload
        }

        let subject_key = row.require_attr("КодОбъекта")?;
        let work_type = row.require_attr("КодВидаРаботы")?;
        let Some(&abbr) = abbreviations.get(work_type) else {
            warn!("hour row references unknown work type {work_type}, skipped");
            plan.stats.dropped_hours += 1;
            continue;
        };

        let course = row.require_int_attr("Курс")?;
        let term = row.require_int_attr("Семестр")?;
        let quantity = row.require_int_attr("Количество")? as u32;
        let semester = (2 * (course - 1) + term) as u32;

        let Some(subject) = plan.subjects.by_key_mut(subject_key) else {
            debug!("hour row for unknown subject {subject_key}, skipped");
            plan.stats.dropped_hours += 1;
            continue;
        };
        let work = subject.semesters.entry(semester).or_default();

        if let Some(kind) = WorkKind::from_abbr(abbr) {
            if hour_type == HT_PRACTICAL_TRAINING {
                work.set_practical_hours(kind, quantity);
            } else {
                work.set_hours(kind, quantity);
            }
        } else if let Some(control) = ControlKind::from_abbr(abbr) {
            if hour_type == HT_WORK {
                work.control.insert(control);
            }
        } else {
            debug!("work type '{abbr}' carries no hour slot, ignored");
        }
    }
    Ok(())
}
