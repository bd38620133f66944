//! Terminal transcript checks.

use wdoc_model::{Terminal, is_blank};

use crate::issue::Issue;

pub fn check(terminal: &Terminal) -> Vec<Issue> {
    if terminal.steps.is_empty() {
        return vec![Issue::TerminalNoSteps];
    }

    let mut issues = Vec::new();
    for (index, step) in terminal.steps.iter().enumerate() {
        let step_number = index + 1;
        if is_blank(step.command.as_deref()) {
            issues.push(Issue::TerminalStepMissingCommand { step: step_number });
        }
        // Silent commands legitimately print nothing, so this stays a warning.
        if is_blank(step.output.as_deref()) {
            issues.push(Issue::TerminalStepMissingOutput { step: step_number });
        }
        if is_blank(step.narration.as_deref()) {
            issues.push(Issue::TerminalStepMissingNarration { step: step_number });
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use wdoc_model::TerminalStep;

    use super::*;

    #[test]
    fn no_steps() {
        assert_eq!(check(&Terminal::default()), vec![Issue::TerminalNoSteps]);
    }

    #[test]
    fn step_fields() {
        let terminal = Terminal {
            title: Some("Replication status".to_string()),
            steps: vec![
                TerminalStep {
                    command: Some("SHOW REPLICA STATUS\\G".to_string()),
                    output: Some("Replica_IO_Running: Yes".to_string()),
                    narration: Some("Both threads are running.".to_string()),
                },
                TerminalStep {
                    command: None,
                    output: None,
                    narration: Some("Nothing happened.".to_string()),
                },
            ],
        };
        assert_eq!(
            check(&terminal),
            vec![
                Issue::TerminalStepMissingCommand { step: 2 },
                Issue::TerminalStepMissingOutput { step: 2 }
            ]
        );
    }
}
