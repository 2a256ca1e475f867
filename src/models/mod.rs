// Core data model for education plans (*.plx exports).

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;

/// One credit unit (з.е.) equals this many academic hours.
pub const HOURS_PER_CREDIT: u32 = 36;

/// Qualification level of the program descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Degree {
    Bachelor,
    Master,
    Other(i64),
}

impl Degree {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Degree::Bachelor,
            2 => Degree::Master,
            other => Degree::Other(other),
        }
    }
}

/// Taxonomy group of a competency, derived from its code prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Universal,
    GeneralProfessional,
    Professional,
    Other,
}

impl Category {
    pub fn of_code(code: &str) -> Self {
        if code.starts_with("УК-") {
            Category::Universal
        } else if code.starts_with("ОПК") {
            Category::GeneralProfessional
        } else if code.starts_with("ПК") {
            Category::Professional
        } else {
            Category::Other
        }
    }

    /// Display name used in generated documents.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Universal => "Универсальная",
            Category::GeneralProfessional => "Общепрофессиональная",
            Category::Professional => "Профессиональная",
            Category::Other => "",
        }
    }
}

/// Hour-bearing work types from the СправочникВидыРабот reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WorkKind {
    /// Лекции
    Lecture,
    /// Лабораторные работы
    Labwork,
    /// Практические занятия
    Practice,
    /// Контроль самостоятельной работы (КСР)
    Control,
    /// Самостоятельная работа студентов (СРС)
    Homework,
    /// Часы на экзамен
    Exam,
}

impl WorkKind {
    /// Map the reference-table abbreviation to a work kind.
    pub fn from_abbr(abbr: &str) -> Option<Self> {
        match abbr {
            "Лек" => Some(WorkKind::Lecture),
            "Лаб" => Some(WorkKind::Labwork),
            "Пр" => Some(WorkKind::Practice),
            "КСР" => Some(WorkKind::Control),
            "СР" => Some(WorkKind::Homework),
            "Контроль" => Some(WorkKind::Exam),
            _ => None,
        }
    }
}

/// Assessment forms that can apply to a subject in a semester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ControlKind {
    Exam,
    CreditGrade,
    Credit,
    Coursework,
}

impl ControlKind {
    /// Map the reference-table abbreviation to a control kind.
    pub fn from_abbr(abbr: &str) -> Option<Self> {
        match abbr {
            "Эк" => Some(ControlKind::Exam),
            "ЗаО" => Some(ControlKind::CreditGrade),
            "За" => Some(ControlKind::Credit),
            "КП" => Some(ControlKind::Coursework),
            _ => None,
        }
    }

    /// Display name used in generated documents.
    pub fn label(&self) -> &'static str {
        match self {
            ControlKind::Exam => "экзамен",
            ControlKind::CreditGrade => "зачет с оценкой",
            ControlKind::Credit => "зачет",
            ControlKind::Coursework => "курсовой проект",
        }
    }
}

/// Store with two access paths: by row key (primary) and by semantic code
/// (secondary index). Insertion order is preserved so that iteration matches
/// the order of rows in the source file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Registry<T> {
    entries: HashMap<String, T>,
    code_index: HashMap<String, String>,
    order: Vec<String>,
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Registry {
            entries: HashMap::new(),
            code_index: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn insert(&mut self, key: String, code: String, value: T) {
        if !self.entries.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.code_index.insert(code, key.clone());
        self.entries.insert(key, value);
    }

    pub fn by_key(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    pub fn by_key_mut(&mut self, key: &str) -> Option<&mut T> {
        self.entries.get_mut(key)
    }

    pub fn by_code(&self, code: &str) -> Option<&T> {
        self.entries.get(self.code_index.get(code)?)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Values in source-row order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|k| self.entries.get(k))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.values_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Competency indicator (ПланыКомпетенции row nested in its competency).
#[derive(Debug, Clone, Serialize)]
pub struct Indicator {
    pub key: String,
    pub code: String,
    pub description: String,
}

/// Competency (top-level ПланыКомпетенции row).
#[derive(Debug, Clone, Serialize)]
pub struct Competence {
    pub key: String,
    pub code: String,
    pub description: String,
    pub indicators: Registry<Indicator>,
    /// Codes of linked subjects; filled by the link pass.
    pub subjects: BTreeSet<String>,
}

impl Competence {
    pub fn category(&self) -> Category {
        Category::of_code(&self.code)
    }

    /// Does any of this competency's indicators carry the given row key?
    pub fn has_indicator_key(&self, key: &str) -> bool {
        self.indicators.contains_key(key)
    }

    /// Sort key: taxonomy rank first (УК < ОПК < ПК), then the numeric
    /// suffix zero-padded to four digits so that ПК-10 follows ПК-2.
    pub fn sort_key(&self) -> (u8, String) {
        if let Some(suffix) = self.code.strip_prefix("УК-") {
            (1, pad_numeric(suffix))
        } else if let Some(suffix) = self.code.strip_prefix("ОПК-") {
            (2, pad_numeric(suffix))
        } else if let Some(suffix) = self.code.strip_prefix("ПК-") {
            (3, pad_numeric(suffix))
        } else {
            (0, self.code.clone())
        }
    }
}

/// Workload of one subject in one semester. Hour counts come from the
/// ПланыНовыеЧасы records; the `*_pp` fields hold the practical-training
/// share reported under its own hour-type code.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SemesterWork {
    pub lectures: u32,
    pub labworks: u32,
    pub practices: u32,
    pub controls: u32,
    pub homeworks: u32,
    pub exams: u32,
    pub lectures_pp: u32,
    pub labworks_pp: u32,
    pub practices_pp: u32,
    pub controls_pp: u32,
    pub homeworks_pp: u32,
    pub exams_pp: u32,
    /// Assessment forms applying in this semester.
    pub control: BTreeSet<ControlKind>,
}

impl SemesterWork {
    pub fn hours_of(&self, kind: WorkKind) -> u32 {
        match kind {
            WorkKind::Lecture => self.lectures,
            WorkKind::Labwork => self.labworks,
            WorkKind::Practice => self.practices,
            WorkKind::Control => self.controls,
            WorkKind::Homework => self.homeworks,
            WorkKind::Exam => self.exams,
        }
    }

    pub fn set_hours(&mut self, kind: WorkKind, quantity: u32) {
        let slot = match kind {
            WorkKind::Lecture => &mut self.lectures,
            WorkKind::Labwork => &mut self.labworks,
            WorkKind::Practice => &mut self.practices,
            WorkKind::Control => &mut self.controls,
            WorkKind::Homework => &mut self.homeworks,
            WorkKind::Exam => &mut self.exams,
        };
        *slot = quantity;
    }

    pub fn practical_hours_of(&self, kind: WorkKind) -> u32 {
        match kind {
            WorkKind::Lecture => self.lectures_pp,
            WorkKind::Labwork => self.labworks_pp,
            WorkKind::Practice => self.practices_pp,
            WorkKind::Control => self.controls_pp,
            WorkKind::Homework => self.homeworks_pp,
            WorkKind::Exam => self.exams_pp,
        }
    }

    pub fn set_practical_hours(&mut self, kind: WorkKind, quantity: u32) {
        let slot = match kind {
            WorkKind::Lecture => &mut self.lectures_pp,
            WorkKind::Labwork => &mut self.labworks_pp,
            WorkKind::Practice => &mut self.practices_pp,
            WorkKind::Control => &mut self.controls_pp,
            WorkKind::Homework => &mut self.homeworks_pp,
            WorkKind::Exam => &mut self.exams_pp,
        };
        *slot = quantity;
    }

    /// Total regular hours of this semester (practical training excluded).
    pub fn total(&self) -> u32 {
        self.lectures + self.labworks + self.practices + self.controls + self.homeworks + self.exams
    }
}

/// Curriculum line / discipline (ПланыСтроки row).
#[derive(Debug, Clone, Serialize)]
pub struct Subject {
    pub key: String,
    pub code: String,
    pub name: String,
    /// Key of the grouping row this line belongs to, if any.
    pub parent: Option<String>,
    /// Semester number (1-based) → workload.
    pub semesters: BTreeMap<u32, SemesterWork>,
    /// Codes of linked competencies; filled by the link pass.
    pub competencies: BTreeSet<String>,
}

impl Subject {
    /// Sum of hours of one work kind over all semesters.
    pub fn hours_of(&self, kind: WorkKind) -> u32 {
        self.semesters.values().map(|s| s.hours_of(kind)).sum()
    }

    /// Sum of practical-training hours of one work kind over all semesters.
    pub fn practical_hours_of(&self, kind: WorkKind) -> u32 {
        self.semesters.values().map(|s| s.practical_hours_of(kind)).sum()
    }

    /// Total workload in hours over all semesters.
    pub fn total_hours(&self) -> u32 {
        self.semesters.values().map(SemesterWork::total).sum()
    }

    /// Total workload in credit units (з.е.).
    pub fn total_credits(&self) -> u32 {
        self.total_hours() / HOURS_PER_CREDIT
    }

    /// Classroom hours (lectures + seminars + КСР), "—" when zero.
    pub fn classroom_hours(&self) -> String {
        let hours = self.hours_of(WorkKind::Lecture)
            + self.hours_of(WorkKind::Labwork)
            + self.hours_of(WorkKind::Practice)
            + self.hours_of(WorkKind::Control);
        if hours == 0 { "—".to_string() } else { hours.to_string() }
    }

    /// Seminar-type hours (labs + practices), "—" when zero.
    pub fn seminar_hours(&self) -> String {
        let hours = self.hours_of(WorkKind::Labwork) + self.hours_of(WorkKind::Practice);
        if hours == 0 { "—".to_string() } else { hours.to_string() }
    }

    /// Semester numbers as sorted strings.
    pub fn semester_list(&self) -> Vec<String> {
        self.semesters.keys().map(|s| s.to_string()).collect()
    }

    /// Course years the subject spans, as sorted unique strings.
    pub fn course_list(&self) -> Vec<String> {
        let years: BTreeSet<u32> = self.semesters.keys().map(|s| (s + 1) / 2).collect();
        years.iter().map(|y| y.to_string()).collect()
    }

    /// Assessment forms over all semesters as one printable string,
    /// first letter capitalized.
    pub fn controls_label(&self) -> String {
        let labels: BTreeSet<&'static str> = self
            .semesters
            .values()
            .flat_map(|s| s.control.iter().map(ControlKind::label))
            .collect();
        capitalize(&labels.into_iter().collect::<Vec<_>>().join(", "))
    }

    /// Sort key: curriculum-block rank first, then the dot-separated
    /// numeric suffix with every segment zero-padded to four digits.
    pub fn sort_key(&self) -> (u8, String) {
        if let Some(suffix) = self.code.strip_prefix("Б1.О.") {
            (1, pad_segments(suffix))
        } else if let Some(suffix) = self.code.strip_prefix("Б1.В.ДВ.") {
            (3, pad_segments(suffix))
        } else if let Some(suffix) = self.code.strip_prefix("Б1.В.ОД.") {
            (2, pad_segments(suffix))
        } else if let Some(suffix) = self.code.strip_prefix("Б1.В.") {
            (2, pad_segments(suffix))
        } else if let Some(suffix) = self.code.strip_prefix("Б2.") {
            // Practicum codes mix letters into the suffix (Б2.О.01(У) etc.),
            // keep only digits and dots before padding.
            let digits: String = suffix
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            (4, pad_segments(&digits))
        } else if self.code.starts_with("Б3") {
            (5, String::new())
        } else if self.code.starts_with("ФТД") {
            (6, String::new())
        } else {
            (0, self.code.clone())
        }
    }
}

/// Counters for export rows that referenced unknown entities and were
/// skipped. The source format is known to carry orphaned rows, so these are
/// not errors, but they must stay visible.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct LoadStats {
    /// Hour records whose subject key resolved to nothing.
    pub dropped_hours: u32,
    /// Link records whose subject or competency resolved to nothing.
    pub dropped_links: u32,
}

/// Fully cross-referenced education plan. Built once by `EducationPlan::load`
/// and read-only afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct EducationPlan {
    /// Program code (Шифр), e.g. "09.03.03".
    pub code: String,
    /// Program name (Название).
    pub name: String,
    pub degree: Degree,
    /// Specialization name, empty when the export carries none.
    pub program: String,
    pub competencies: Registry<Competence>,
    pub subjects: Registry<Subject>,
    pub stats: LoadStats,
}

impl EducationPlan {
    /// Competencies in report order (taxonomy rank, then numeric suffix).
    pub fn sorted_competencies(&self) -> Vec<&Competence> {
        let mut list: Vec<&Competence> = self.competencies.values().collect();
        list.sort_by_key(|c| c.sort_key());
        list
    }

    /// Subjects in report order (curriculum-block rank, then code suffix).
    pub fn sorted_subjects(&self) -> Vec<&Subject> {
        let mut list: Vec<&Subject> = self.subjects.values().collect();
        list.sort_by_key(|s| s.sort_key());
        list
    }
}

/// Zero-pad a purely numeric suffix to four digits; anything else is
/// compared as a raw string.
fn pad_numeric(suffix: &str) -> String {
    match suffix.parse::<u32>() {
        Ok(n) => format!("{n:04}"),
        Err(_) => suffix.to_string(),
    }
}

/// Pad every dot-separated numeric segment ("10.2" → "0010.0002").
fn pad_segments(suffix: &str) -> String {
    suffix.split('.').map(|s| pad_numeric(s)).collect::<Vec<_>>().join(".")
}

/// Uppercase the first letter (works for Cyrillic).
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_follows_code_prefix() {
        assert_eq!(Category::of_code("УК-1"), Category::Universal);
        assert_eq!(Category::of_code("ОПК-3"), Category::GeneralProfessional);
        assert_eq!(Category::of_code("ПК-5"), Category::Professional);
        assert_eq!(Category::of_code("СК-2"), Category::Other);
        assert_eq!(Category::of_code("УК-1").label(), "Универсальная");
    }

    #[test]
    fn pad_keeps_non_numeric_suffix() {
        assert_eq!(pad_numeric("7"), "0007");
        assert_eq!(pad_numeric("7а"), "7а");
        assert_eq!(pad_segments("10.2"), "0010.0002");
    }

    #[test]
    fn capitalize_handles_cyrillic() {
        assert_eq!(capitalize("экзамен, зачет"), "Экзамен, зачет");
        assert_eq!(capitalize(""), "");
    }
}
