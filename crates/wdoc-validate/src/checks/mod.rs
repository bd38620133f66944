//! Content check modules.
//!
//! Each module checks one widget kind.

mod command_builder;
mod exercise;
mod quiz;
mod terminal;
mod walkthrough;

use wdoc_model::Widget;

use crate::issue::Issue;

/// Run the checks for the widget's kind.
pub fn run_all(widget: &Widget) -> Vec<Issue> {
    match widget {
        Widget::Quiz(quiz) => quiz::check(quiz),
        Widget::Terminal(terminal) => terminal::check(terminal),
        Widget::CommandBuilder(builder) => command_builder::check(builder),
        Widget::Exercise(exercise) => exercise::check(exercise),
        Widget::CodeWalkthrough(walkthrough) => walkthrough::check(walkthrough),
    }
}
