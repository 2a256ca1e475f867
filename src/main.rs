// --- planx: education-plan reader, competency-matrix output ---

use std::process;

use planx::{EducationPlan, resolve_plan_path};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let json = args.iter().any(|a| a == "--json");
    let files: Vec<&String> = args.iter().skip(1).filter(|a| a.as_str() != "--json").collect();
    if files.len() != 1 {
        eprintln!("Usage:\n\tplanx <education_plan>.plx [--json]");
        process::exit(2);
    }

    let path = match resolve_plan_path(files[0]) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };

    let plan = match EducationPlan::load(&path) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    if json {
        match serde_json::to_string_pretty(&plan) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
        return;
    }

    print_matrix(&plan);
}

/// Competency matrix as tab-separated text: one row per subject, one column
/// per competency, '+' where they are linked.
fn print_matrix(plan: &EducationPlan) {
    let competencies = plan.sorted_competencies();

    let mut header = vec!["".to_string(), "".to_string()];
    header.extend(competencies.iter().map(|c| c.code.clone()));
    println!("{}", header.join("\t"));

    for subject in plan.sorted_subjects() {
        let mut row = vec![subject.code.clone(), subject.name.clone()];
        for competence in &competencies {
            row.push(if subject.competencies.contains(&competence.code) {
                "+".to_string()
            } else {
                String::new()
            });
        }
        println!("{}", row.join("\t"));
    }
}
