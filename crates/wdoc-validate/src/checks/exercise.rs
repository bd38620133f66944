//! Exercise checks.
//!
//! An exercise carries either per-task answers or one exercise-level
//! solution. With a solution present, tasks may omit their answers.

use wdoc_model::{Exercise, is_blank};

use crate::issue::Issue;

pub fn check(exercise: &Exercise) -> Vec<Issue> {
    let mut issues = Vec::new();

    if is_blank(exercise.scenario.as_deref()) {
        issues.push(Issue::ExerciseMissingScenario);
    }

    let has_solution = exercise.has_solution();
    if exercise.tasks.is_empty() && !has_solution {
        issues.push(Issue::ExerciseNoTasks);
    }

    for (index, task) in exercise.tasks.iter().enumerate() {
        let task_number = index + 1;
        if !has_solution && is_blank(task.answer.as_deref()) {
            issues.push(Issue::ExerciseTaskMissingAnswer { task: task_number });
        }
        if is_blank(task.hint.as_deref()) {
            issues.push(Issue::ExerciseTaskMissingHint { task: task_number });
        }
    }

    issues
}
