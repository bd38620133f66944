//! Code walkthrough checks.
//!
//! Annotation lines are 1-based and must fall inside the listing. Every
//! annotation needs a line and some text.

use std::collections::BTreeSet;

use wdoc_model::{CodeWalkthrough, is_blank};

use crate::issue::Issue;

pub fn check(walkthrough: &CodeWalkthrough) -> Vec<Issue> {
    let mut issues = Vec::new();

    if is_blank(walkthrough.code.as_deref()) {
        issues.push(Issue::WalkthroughMissingCode);
    }
    if is_blank(walkthrough.language.as_deref()) {
        issues.push(Issue::WalkthroughMissingLanguage);
    }

    let line_count = walkthrough.line_count();
    let mut seen = BTreeSet::new();
    for (index, annotation) in walkthrough.annotations.iter().enumerate() {
        let annotation_number = index + 1;
        if is_blank(annotation.text.as_deref()) {
            issues.push(Issue::WalkthroughAnnotationMissingText {
                annotation: annotation_number,
            });
        }
        let Some(span) = annotation.line else {
            issues.push(Issue::WalkthroughAnnotationMissingLine {
                annotation: annotation_number,
            });
            continue;
        };
        let in_range = span.start >= 1 && (span.end as usize) <= line_count;
        if !in_range {
            // Nothing to compare against when the code itself is missing.
            if line_count > 0 {
                issues.push(Issue::WalkthroughAnnotationOutOfRange {
                    annotation: annotation_number,
                    start: span.start,
                    end: span.end,
                    line_count,
                });
            }
            continue;
        }
        if !seen.insert(span.start) {
            issues.push(Issue::WalkthroughDuplicateAnnotation {
                annotation: annotation_number,
                start: span.start,
            });
        }
    }

    issues
}
