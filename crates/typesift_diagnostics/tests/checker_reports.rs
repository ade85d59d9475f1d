//! End-to-end tests over reports in the type-checker's native JSON shape.

use typesift_diagnostics::{
    difference, format_report_with_header, render_error, DiagnosticReport, UnitType,
};

const INCOMPATIBLE: &str = r#"{
  "flowVersion": "0.98.1",
  "passed": false,
  "errors": [
    {
      "kind": "infer",
      "level": "error",
      "suppressions": [],
      "message": [
        {
          "context": "const n: number = \"three\";",
          "descr": "string",
          "type": "Blame",
          "loc": {
            "source": "/app/src/index.js",
            "type": "SourceFile",
            "start": {"line": 3, "column": 19, "offset": 40},
            "end": {"line": 3, "column": 25, "offset": 47}
          },
          "path": "/app/src/index.js",
          "line": 3,
          "endline": 3,
          "start": 19,
          "end": 25
        },
        {
          "context": null,
          "descr": "This type is incompatible with",
          "type": "Comment",
          "path": "",
          "line": 0,
          "endline": 0,
          "start": 1,
          "end": 0
        },
        {
          "context": "const n: number = \"three\";",
          "descr": "number",
          "type": "Blame",
          "loc": {
            "source": "/app/src/index.js",
            "type": "SourceFile",
            "start": {"line": 3, "column": 10, "offset": 31},
            "end": {"line": 3, "column": 15, "offset": 37}
          }
        }
      ]
    }
  ]
}"#;

const LIBRARY_ERROR: &str = r#"{
  "flowVersion": "0.98.1",
  "passed": false,
  "errors": [
    {
      "kind": "infer",
      "level": "error",
      "message": [
        {
          "context": "declare var x: Undefined;",
          "descr": "Could not resolve name",
          "type": "Blame",
          "loc": {
            "source": "/app/flow-typed/lib.js",
            "type": "LibFile",
            "start": {"line": 1, "column": 16, "offset": 15},
            "end": {"line": 1, "column": 24, "offset": 24}
          }
        }
      ]
    }
  ]
}"#;

fn parse(json: &str) -> DiagnosticReport {
    serde_json::from_str(json).expect("fixture should parse")
}

#[test]
fn renders_incompatible_type_error() {
    let report = parse(INCOMPATIBLE);
    assert_eq!(report.errors[0].message[1].unit_type, UnitType::Comment);

    let expected = [
        "1 error".to_string(),
        "/app/src/index.js:3".to_string(),
        "  3: const n: number = \"three\";".to_string(),
        format!("{}^^^^^^^ string. This type is incompatible with", " ".repeat(23)),
        "  3: const n: number = \"three\";".to_string(),
        format!("{}^^^^^^ number", " ".repeat(14)),
    ]
    .join("\n");
    assert_eq!(format_report_with_header(&report).unwrap(), expected);
}

#[test]
fn renders_library_error_with_classification() {
    let report = parse(LIBRARY_ERROR);
    let text = render_error(&report.errors[0]).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "/app/flow-typed/lib.js:1");
    assert_eq!(lines[1], "  1: declare var x: Undefined;");
    assert_eq!(lines[2], format!("{}^^^^^^^^^ Library type error:", " ".repeat(20)));
    assert_eq!(lines[3], "  1: declare var x: Undefined;");
    assert!(lines[4].ends_with("^^^^^^^^^ Could not resolve name"));
    assert_eq!(lines.len(), 5);
}

#[test]
fn difference_surfaces_only_new_errors() {
    let baseline = parse(INCOMPATIBLE);
    let mut current = parse(INCOMPATIBLE);
    current.errors.extend(parse(LIBRARY_ERROR).errors);
    current.tool_version = "0.99.0".to_string();

    let diff = difference(&current, &baseline);
    assert_eq!(diff.error_count(), 1);
    assert_eq!(diff.errors[0].message[0].text, "Could not resolve name");
    assert_eq!(diff.tool_version, "0.99.0");
    assert!(format_report_with_header(&diff).unwrap().starts_with("1 error\n"));
}

#[test]
fn no_new_errors_renders_no_errors() {
    let report = parse(INCOMPATIBLE);
    let diff = difference(&report, &report);
    assert_eq!(format_report_with_header(&diff).unwrap(), "No errors");
}

#[test]
fn serialized_report_loads_back() {
    let report = parse(INCOMPATIBLE);
    let json = serde_json::to_string(&report).unwrap();
    assert_eq!(parse(&json), report);
}
