//! Tests for coversheet assembly.

use blueprint_model::{LookupRow, Pru};
use blueprint_transform::{
    TransformError, build_coversheet, find_report_pru, render_coversheet_html, select_family_rows,
};

fn lookup_row(line: u64, first: &str, pru: &str, clinician: &str) -> LookupRow {
    let fields = [
        "Smith",
        first,
        "1980-01-02 00:00:00",
        "F",
        "123 456 7890",
        pru,
        "S19-001",
        "2019-05-01 10:30:00",
        "Blood",
        "2019-04-30 09:00:00",
        "",
        clinician,
        "Guy's Hospital<br>London",
    ];
    LookupRow::new(line, fields.iter().map(|f| (*f).to_string()).collect())
}

fn lookup() -> Vec<LookupRow> {
    vec![
        lookup_row(2, "Jane", "123456:01", "Dr A"),
        lookup_row(3, "Ann", "777777:01", "Dr C"),
        lookup_row(4, "Bo & Co", "123456:02", "Dr B"),
    ]
}

#[test]
fn test_family_rows_match_on_prefix() {
    let rows = select_family_rows(&lookup(), "123456");
    let lines: Vec<u64> = rows.iter().map(|row| row.line).collect();
    assert_eq!(lines, vec![2, 4]);
}

#[test]
fn test_missing_family_is_an_error() {
    let err = build_coversheet(&lookup(), &Pru::new("555555:01"), "2020-07-03").unwrap_err();
    assert!(matches!(err, TransformError::NoLookupRows { ref family } if family == "555555"));
    assert_eq!(
        err.to_string(),
        "no data found for patients matching family id: 555555"
    );
}

#[test]
fn test_report_text_to_rendered_coversheet() {
    let text = "WES report\nPatient ID: 123456:01\nRelated: 123456:02\n";
    let pru = find_report_pru(text).expect("pru in text");
    let sheet = build_coversheet(&lookup(), &pru, "2020-07-03").unwrap();
    assert_eq!(sheet.clinician, "Dr A");

    let template = "<p>{{ clinician }}</p>\n<p>{{ address }}</p>\n<p>{{ todays_date }}</p>\n<table>\n{{ patients }}</table>\n";
    let html = render_coversheet_html(template, &sheet);

    insta::assert_snapshot!(html.trim_end(), @r"
    <p>Dr A</p>
    <p>Guy's Hospital<br>London</p>
    <p>2020-07-03</p>
    <table>
    <tr><td>Jane Smith</td><td>1980-01-02</td><td>123456:01</td><td>1234567890</td><td>S19-001 Blood</td><td>2019-05-01</td><td>2019-04-30</td><td>F</td></tr>
    <tr><td>Bo &amp; Co Smith</td><td>1980-01-02</td><td>123456:02</td><td>1234567890</td><td>S19-001 Blood</td><td>2019-05-01</td><td>2019-04-30</td><td>F</td></tr>
    </table>
    ");
}
