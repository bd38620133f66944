use std::path::Path;

use comfy_table::Table;

use wdoc_cli::pipeline::Overrides;
use wdoc_cli::types::{CheckRequest, RenderRequest};
use wdoc_model::WidgetKind;

use crate::cli::{CheckArgs, RenderArgs, ScanArgs};
use crate::summary::apply_table_style;

pub fn run_kinds() {
    let mut table = Table::new();
    table.set_header(vec!["Fence", "Title", "Description"]);
    apply_table_style(&mut table);
    for kind in WidgetKind::ALL {
        table.add_row(vec![kind.as_str(), kind.default_title(), kind.description()]);
    }
    println!("{table}");
}

pub fn check_request(args: &CheckArgs, config: Option<&Path>) -> CheckRequest {
    CheckRequest {
        docs: args.docs.clone(),
        config: config.map(Path::to_path_buf),
        report: args.report.clone(),
        overrides: Overrides {
            warnings_as_errors: args.warnings_as_errors,
            no_navigation: args.no_navigation,
            ..scan_overrides(&args.scan)
        },
    }
}

pub fn render_request(args: &RenderArgs, config: Option<&Path>) -> RenderRequest {
    RenderRequest {
        docs: args.docs.clone(),
        config: config.map(Path::to_path_buf),
        output_dir: args.output_dir.clone(),
        stdout: args.stdout,
        overrides: scan_overrides(&args.scan),
    }
}

fn scan_overrides(scan: &ScanArgs) -> Overrides {
    Overrides {
        kinds: scan.kinds.iter().copied().map(WidgetKind::from).collect(),
        include_nested: scan.include_nested,
        ..Overrides::default()
    }
}
