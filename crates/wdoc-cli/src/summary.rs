use std::cmp::Ordering;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use wdoc_cli::types::{CheckResult, RenderResult};
use wdoc_model::{IssueSeverity, LintIssue};

pub fn print_render_summary(result: &RenderResult) {
    // Rendered Markdown already went to stdout; keep it clean.
    let Some(output_dir) = &result.output_dir else {
        let invalid = result.invalid_count();
        if invalid > 0 {
            eprintln!("{invalid} widget block(s) had invalid configuration");
        }
        return;
    };
    println!("Output: {}", output_dir.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Document"),
        header_cell("Widgets"),
        header_cell("Invalid"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut total_blocks = 0usize;
    for file in &result.files {
        total_blocks += file.blocks;
        table.add_row(vec![
            document_cell(&file.relative_path, file.blocks),
            count_cell(file.blocks, Color::Green),
            count_cell(file.invalid, Color::Red),
        ]);
    }
    table.add_row(vec![
        total_cell(format!("TOTAL ({} documents)", result.files.len())),
        Cell::new(total_blocks).add_attribute(Attribute::Bold),
        count_cell(result.invalid_count(), Color::Red).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_check_summary(result: &CheckResult) {
    println!("Docs: {}", result.docs_root.display());
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Document"),
        header_cell("Widgets"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for report in &result.reports {
        table.add_row(vec![
            document_cell(&report.document, report.blocks),
            count_cell(report.blocks, Color::Green),
            count_cell(report.error_count(), Color::Red),
            count_cell(report.warning_count(), Color::Yellow),
        ]);
    }
    let summary = &result.summary;
    table.add_row(vec![
        total_cell(format!("TOTAL ({} documents)", summary.documents)),
        Cell::new(summary.blocks).add_attribute(Attribute::Bold),
        count_cell(summary.total_errors, Color::Red).add_attribute(Attribute::Bold),
        count_cell(summary.total_warnings, Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_issue_table(result);
}

fn print_issue_table(result: &CheckResult) {
    let mut issues: Vec<&LintIssue> = result
        .reports
        .iter()
        .flat_map(|report| report.issues.iter())
        .collect();
    if issues.is_empty() {
        return;
    }
    issues.sort_by(|a, b| {
        let severity = severity_rank(b.severity).cmp(&severity_rank(a.severity));
        if severity != Ordering::Equal {
            return severity;
        }
        a.document
            .cmp(&b.document)
            .then(a.line.cmp(&b.line))
            .then(a.code.cmp(&b.code))
    });
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Document"),
        header_cell("Line"),
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("Widget"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Center);
    for issue in issues {
        table.add_row(vec![
            Cell::new(&issue.document),
            issue.line.map_or_else(|| dim_cell("-"), Cell::new),
            severity_cell(issue.severity),
            Cell::new(&issue.code).fg(severity_color(issue.severity)),
            issue
                .kind
                .map_or_else(|| dim_cell("-"), |kind| Cell::new(kind.as_str())),
            Cell::new(&issue.message),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Percentage(60)),
        ColumnConstraint::LowerBoundary(Width::Fixed(9)),
    ]);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Fixed(7)),
            ColumnConstraint::UpperBoundary(Width::Fixed(18)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    match severity {
        IssueSeverity::Error => Cell::new(severity.label())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        IssueSeverity::Warning => Cell::new(severity.label()).fg(Color::Yellow),
    }
}

fn severity_rank(severity: IssueSeverity) -> u8 {
    match severity {
        IssueSeverity::Error => 2,
        IssueSeverity::Warning => 1,
    }
}

fn severity_color(severity: IssueSeverity) -> Color {
    match severity {
        IssueSeverity::Error => Color::Red,
        IssueSeverity::Warning => Color::Yellow,
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn total_cell(label: String) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Documents without widgets are dimmed.
fn document_cell(path: &str, blocks: usize) -> Cell {
    if blocks == 0 {
        dim_cell(path)
    } else {
        Cell::new(path).fg(Color::Blue)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
