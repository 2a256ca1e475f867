//! Course descriptions: the human-authored *.yaml files that accompany a
//! plan. Only the fields the loader queries are read here; literature
//! lookups and document rendering live outside this crate.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{PlanError, Result};

const DEFAULT_ASSESSMENT: &str = "Лабораторные работы, тестовые вопросы";

/// Raw YAML layout with the Russian keys of the source format.
#[derive(Debug, Deserialize)]
struct CourseFile {
    #[serde(rename = "названия")]
    names: Vec<Vec<String>>,
    #[serde(rename = "авторы", default)]
    authors: Vec<String>,
    #[serde(rename = "год", default)]
    year: Option<i32>,
    #[serde(rename = "цель", default)]
    goal: Option<String>,
    #[serde(rename = "цели", default)]
    goals: Vec<String>,
    #[serde(rename = "содержание", default)]
    content: String,
    #[serde(rename = "знать", default)]
    knowledge: Vec<String>,
    #[serde(rename = "уметь", default)]
    abilities: Vec<String>,
    #[serde(rename = "владеть", default)]
    skills: Vec<String>,
    #[serde(rename = "связи", default)]
    links: Vec<Vec<String>>,
    #[serde(rename = "оценочные средства", default)]
    assessment: Option<String>,
}

/// One course description. `names` identifies the subject in the plan,
/// `links` names the subjects it depends on; both are keyword sets matched
/// against tokenized subject names.
#[derive(Debug, Clone)]
pub struct Course {
    pub names: Vec<BTreeSet<String>>,
    pub authors: Vec<String>,
    pub year: Option<i32>,
    pub goal: Option<String>,
    pub goals: Vec<String>,
    pub content: String,
    pub knowledge: Vec<String>,
    pub abilities: Vec<String>,
    pub skills: Vec<String>,
    pub links: Vec<BTreeSet<String>>,
    pub assessment: String,
}

impl Course {
    /// Read a course description from its YAML file.
    pub fn load(path: &Path) -> Result<Course> {
        let text = fs::read_to_string(path).map_err(|source| PlanError::CourseIo {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: CourseFile =
            serde_yaml::from_str(&text).map_err(|source| PlanError::CourseFormat {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Course {
            names: keyword_sets(raw.names),
            authors: raw.authors,
            year: raw.year,
            goal: raw.goal,
            goals: raw.goals,
            content: raw.content,
            knowledge: raw.knowledge,
            abilities: raw.abilities,
            skills: raw.skills,
            links: keyword_sets(raw.links),
            assessment: raw.assessment.unwrap_or_else(|| DEFAULT_ASSESSMENT.to_string()),
        })
    }
}

fn keyword_sets(lists: Vec<Vec<String>>) -> Vec<BTreeSet<String>> {
    lists.into_iter().map(|words| words.into_iter().collect()).collect()
}
