//! Command builder checks.

use wdoc_model::{CommandBuilder, is_blank};

use crate::issue::Issue;

pub fn check(builder: &CommandBuilder) -> Vec<Issue> {
    let mut issues = Vec::new();

    if is_blank(builder.base.as_deref()) {
        issues.push(Issue::CommandBuilderMissingBase);
    }

    if builder.groups.iter().all(|group| group.options.is_empty()) {
        issues.push(Issue::CommandBuilderNoGroups);
    }

    for (group_index, group) in builder.groups.iter().enumerate() {
        for (option_index, option) in group.options.iter().enumerate() {
            let (group, option_number) = (group_index + 1, option_index + 1);
            if is_blank(option.flag.as_deref()) {
                issues.push(Issue::CommandBuilderOptionMissingFlag {
                    group,
                    option: option_number,
                });
            }
            if is_blank(option.explanation.as_deref()) {
                issues.push(Issue::CommandBuilderOptionMissingExplanation {
                    group,
                    option: option_number,
                });
            }
        }
    }

    issues
}
