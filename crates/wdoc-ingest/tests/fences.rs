//! End-to-end scanning over a realistic lesson.

use wdoc_ingest::{ConfigOutcome, ScanOptions, parse_config, scan_fences};
use wdoc_model::WidgetKind;

const LESSON: &str = r#"# MySQL Backup and Recovery

Logical backups are taken with `mysqldump`.

```terminal
title: Taking a consistent dump
steps:
  - command: mysqldump --single-transaction shop > shop.sql
    output: ""
    narration: InnoDB tables are dumped from one snapshot.
```

```bash
# a plain shell block
mysql shop < shop.sql
```

```quiz
question: Which flag avoids locking InnoDB tables?
type: multiple-choice
options:
  - text: --single-transaction
    correct: true
    feedback: It reads from one consistent snapshot.
  - text: --lock-all-tables
    feedback: That takes a global read lock.
```

```exercise
title: Point-in-time recovery
scenario: [unterminated
```

**Previous:** [InnoDB Recovery](innodb-recovery.md) | **Next:** [Scaling](scaling.md)
"#;

#[test]
fn scans_every_widget_in_order() {
    let scan = scan_fences(LESSON, &ScanOptions::default());
    let kinds: Vec<WidgetKind> = scan.blocks.iter().map(|block| block.kind).collect();
    assert_eq!(
        kinds,
        [WidgetKind::Terminal, WidgetKind::Quiz, WidgetKind::Exercise]
    );
    assert!(scan.unclosed.is_empty());
    assert_eq!(scan.blocks[0].start_line, 5);
}

#[test]
fn parses_bodies_into_configs() {
    let scan = scan_fences(LESSON, &ScanOptions::default());
    let outcomes: Vec<ConfigOutcome> = scan
        .blocks
        .iter()
        .map(|block| parse_config(&block.body))
        .collect();

    let terminal = outcomes[0].value().unwrap();
    assert_eq!(terminal["title"], "Taking a consistent dump");
    assert_eq!(terminal["steps"][0]["output"], "");

    let quiz = outcomes[1].value().unwrap();
    assert_eq!(quiz["options"].as_array().unwrap().len(), 2);

    assert!(outcomes[2].is_invalid());
}

#[test]
fn navigation_links_are_found() {
    let links = wdoc_ingest::extract_nav_links(LESSON);
    let targets: Vec<&str> = links.iter().map(|link| link.target.as_str()).collect();
    assert_eq!(targets, ["innodb-recovery.md", "scaling.md"]);
}
