use std::collections::{BTreeMap, BTreeSet};

use planx::{Competence, Registry, Subject};

fn competence(code: &str) -> Competence {
    Competence {
        key: code.to_string(),
        code: code.to_string(),
        description: String::new(),
        indicators: Registry::new(),
        subjects: BTreeSet::new(),
    }
}

fn subject(code: &str) -> Subject {
    Subject {
        key: code.to_string(),
        code: code.to_string(),
        name: String::new(),
        parent: None,
        semesters: BTreeMap::new(),
        competencies: BTreeSet::new(),
    }
}

#[test]
fn competencies_sort_by_taxonomy_then_number() {
    let mut list = vec![
        competence("ПК-2"),
        competence("УК-3"),
        competence("ОПК-1"),
        competence("УК-1"),
    ];
    list.sort_by_key(Competence::sort_key);
    let codes: Vec<&str> = list.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["УК-1", "УК-3", "ОПК-1", "ПК-2"]);
}

#[test]
fn two_digit_competency_numbers_sort_numerically() {
    let mut list = vec![competence("ПК-10"), competence("ПК-2"), competence("ПК-1")];
    list.sort_by_key(Competence::sort_key);
    let codes: Vec<&str> = list.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["ПК-1", "ПК-2", "ПК-10"]);
}

#[test]
fn subjects_sort_by_curriculum_block() {
    let mut list = vec![
        subject("ФТД.01"),
        subject("Б2.О.01(У)"),
        subject("Б1.В.ДВ.01.01"),
        subject("Б1.О.02"),
        subject("Б3.01"),
        subject("Б1.В.03"),
        subject("Б1.О.01"),
    ];
    list.sort_by_key(Subject::sort_key);
    let codes: Vec<&str> = list.iter().map(|s| s.code.as_str()).collect();
    assert_eq!(
        codes,
        vec![
            "Б1.О.01",
            "Б1.О.02",
            "Б1.В.03",
            "Б1.В.ДВ.01.01",
            "Б2.О.01(У)",
            "Б3.01",
            "ФТД.01",
        ]
    );
}

#[test]
fn multi_digit_subject_indices_keep_numeric_order() {
    let mut list = vec![subject("Б1.О.10"), subject("Б1.О.02"), subject("Б1.О.09")];
    list.sort_by_key(Subject::sort_key);
    let codes: Vec<&str> = list.iter().map(|s| s.code.as_str()).collect();
    assert_eq!(codes, vec!["Б1.О.02", "Б1.О.09", "Б1.О.10"]);
}
