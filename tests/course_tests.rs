use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

use planx::{Course, PlanError};

const COURSE_YAML: &str = r#"
названия:
  - [базы, данных]
  - [базы, данных, знаний]
авторы:
  - Иванов И. И.
год: 2020
цель: Освоение проектирования реляционных баз данных
содержание: Реляционная модель, нормализация, SQL
знать:
  - реляционную модель данных
уметь:
  - составлять запросы на SQL
владеть:
  - средствами СУБД
связи:
  - [информатика]
  - [программирование]
"#;

fn write_course(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("tempfile");
    file.write_all(text.as_bytes()).expect("write");
    file
}

#[test]
fn course_fields_are_read() {
    let file = write_course(COURSE_YAML);
    let course = Course::load(file.path()).expect("load course");

    assert_eq!(course.names.len(), 2);
    let expected: BTreeSet<String> =
        ["базы", "данных"].iter().map(|s| s.to_string()).collect();
    assert_eq!(course.names[0], expected);
    assert_eq!(course.authors, vec!["Иванов И. И."]);
    assert_eq!(course.year, Some(2020));
    assert!(course.goal.as_deref().unwrap_or("").starts_with("Освоение"));
    assert_eq!(course.links.len(), 2);
    assert!(course.links[1].contains("программирование"));
}

#[test]
fn assessment_falls_back_to_default() {
    let file = write_course(COURSE_YAML);
    let course = Course::load(file.path()).expect("load course");
    assert_eq!(course.assessment, "Лабораторные работы, тестовые вопросы");

    let with_assessment = format!("{COURSE_YAML}оценочные средства: Контрольные работы\n");
    let file = write_course(&with_assessment);
    let course = Course::load(file.path()).expect("load course");
    assert_eq!(course.assessment, "Контрольные работы");
}

#[test]
fn missing_names_key_is_a_format_error() {
    let file = write_course("авторы:\n  - Иванов И. И.\n");
    let err = Course::load(file.path()).unwrap_err();
    assert!(matches!(err, PlanError::CourseFormat { .. }));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Course::load(Path::new("/no/such/course.yaml")).unwrap_err();
    assert!(matches!(err, PlanError::CourseIo { .. }));
}
