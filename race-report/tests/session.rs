// End-to-end tests: build a race folder on disk and generate its report
use race_report::{
    generate_report, FileAccessPolicy, LapResult, ReportConfig, ReportError, Session,
    SessionFiles, SortOrder,
};
use std::fs;
use tempfile::TempDir;

fn race_folder(abbreviations: &str, start: &str, end: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("abbreviations.txt"), abbreviations).unwrap();
    fs::write(dir.path().join("start.log"), start).unwrap();
    fs::write(dir.path().join("end.log"), end).unwrap();
    dir
}

fn monaco() -> TempDir {
    race_folder(
        "SVF_Sebastian Vettel_FERRARI\n\
         LHM_Lewis Hamilton_MERCEDES\n\
         VBM_Valtteri Bottas_MERCEDES\n\
         KRF_Kimi Räikkönen_FERRARI\n",
        "LHM2018-05-24_12:18:20.125\n\
         SVF2018-05-24_12:02:58.917\n\
         VBM2018-05-24_12:00:00.000\n\
         KRF2018-05-24_12:03:01.250\n",
        "SVF2018-05-24_12:04:03.332\n\
         VBM2018-05-24_12:01:12.434\n\
         LHM2018-05-24_12:11:32.585\n\
         KRF2018-05-24_12:04:13.889\n",
    )
}

#[test]
fn single_driver_report() {
    let dir = race_folder(
        "SVF_Sebastian Vettel_FERRARI\n",
        "SVF2023-05-24_12:00:00.000000\n",
        "SVF2023-05-24_12:01:30.123456\n",
    );

    let report = generate_report(dir.path(), &ReportConfig::default()).unwrap();
    assert_eq!(report.to_string(), "1. Sebastian Vettel | FERRARI | 0:01:30.123456\n");
}

#[test]
fn ranks_ascending_with_negative_lap_last() {
    let dir = monaco();
    let report = generate_report(dir.path(), &ReportConfig::default()).unwrap();

    assert_eq!(
        report.lines(),
        vec![
            "1. Sebastian Vettel | FERRARI | 0:01:04.415000",
            "2. Valtteri Bottas | MERCEDES | 0:01:12.434000",
            "3. Kimi Räikkönen | FERRARI | 0:01:12.639000",
            "4. Lewis Hamilton | MERCEDES | X NEGATIVE TIME",
        ]
    );
}

#[test]
fn descending_order() {
    let dir = monaco();
    let config = ReportConfig::new().with_order(SortOrder::Descending);
    let report = generate_report(dir.path(), &config).unwrap();

    let names: Vec<&str> = report.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Lewis Hamilton", "Kimi Räikkönen", "Valtteri Bottas", "Sebastian Vettel"]
    );
    assert_eq!(report.entries[0].best_lap, LapResult::Negative);
}

#[test]
fn focus_driver_by_name() {
    let dir = monaco();
    let config = ReportConfig::new().with_focus("Bottas");
    let report = generate_report(dir.path(), &config).unwrap();

    assert_eq!(report.to_string(), "1. Valtteri Bottas | MERCEDES | 0:01:12.434000\n");
}

#[test]
fn focus_driver_not_found() {
    let dir = monaco();
    let config = ReportConfig::new().with_focus("Fernando Alonso");

    match generate_report(dir.path(), &config) {
        Err(ReportError::DriverNotFound(query)) => assert_eq!(query, "Fernando Alonso"),
        other => panic!("expected DriverNotFound, got {:?}", other),
    }
}

#[test]
fn blank_focus_reports_every_driver() {
    let dir = monaco();
    let config = ReportConfig::new().with_focus("");
    let report = generate_report(dir.path(), &config).unwrap();

    assert_eq!(report.len(), 4);
}

#[test]
fn pipeline_is_idempotent() {
    let dir = monaco();
    let config = ReportConfig::default();

    let first = generate_report(dir.path(), &config).unwrap();
    let second = generate_report(dir.path(), &config).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn separator_after_fifteenth_driver() {
    let mut abbreviations = String::new();
    let mut start = String::new();
    let mut end = String::new();
    for i in 0..20 {
        let abbr = format!("D{:02}", i);
        abbreviations.push_str(&format!("{}_Driver {}_TEAM {}\n", abbr, i, i % 5));
        start.push_str(&format!("{}2018-05-24_12:00:00.000\n", abbr));
        end.push_str(&format!("{}2018-05-24_12:01:{:02}.000\n", abbr, i));
    }
    let dir = race_folder(&abbreviations, &start, &end);

    let lines = generate_report(dir.path(), &ReportConfig::default())
        .unwrap()
        .lines();

    assert_eq!(lines.len(), 21);
    assert_eq!(lines[0], "1. Driver 0 | TEAM 0 | 0:01:00");
    assert_eq!(lines[14], "15. Driver 14 | TEAM 4 | 0:01:14");
    assert_eq!(lines[15], "-".repeat(70));
    assert_eq!(lines[16], "16. Driver 15 | TEAM 0 | 0:01:15");
}

#[test]
fn blank_trailing_lines_are_ignored() {
    let dir = race_folder(
        "SVF_Sebastian Vettel_FERRARI\n\n",
        "SVF2018-05-24_12:02:58.917\n\n",
        "SVF2018-05-24_12:04:03.332\n",
    );

    let report = generate_report(dir.path(), &ReportConfig::default()).unwrap();
    assert_eq!(report.len(), 1);
}

#[test]
fn missing_start_log_cascades_to_missing_field() {
    let dir = monaco();
    fs::remove_file(dir.path().join("start.log")).unwrap();

    match generate_report(dir.path(), &ReportConfig::default()) {
        Err(ReportError::MissingField { abbreviation, field }) => {
            assert_eq!(abbreviation, "SVF");
            assert_eq!(field, "start time");
        }
        other => panic!("expected MissingField, got {:?}", other),
    }
}

#[test]
fn missing_start_log_strict() {
    let dir = monaco();
    fs::remove_file(dir.path().join("start.log")).unwrap();
    let config = ReportConfig::new().with_file_policy(FileAccessPolicy::Strict);

    match generate_report(dir.path(), &config) {
        Err(ReportError::FileAccess { path, .. }) => {
            assert_eq!(path, dir.path().join("start.log"))
        }
        other => panic!("expected FileAccess, got {:?}", other),
    }
}

#[test]
fn unknown_driver_in_end_log() {
    let dir = race_folder(
        "SVF_Sebastian Vettel_FERRARI\n",
        "SVF2018-05-24_12:02:58.917\n",
        "SVF2018-05-24_12:04:03.332\nXXX2018-05-24_12:04:03.332\n",
    );

    assert!(matches!(
        generate_report(dir.path(), &ReportConfig::default()),
        Err(ReportError::UnknownDriver(abbr)) if abbr == "XXX"
    ));
}

#[test]
fn malformed_abbreviation_line() {
    let dir = race_folder("SVF Sebastian Vettel FERRARI\n", "", "");

    assert!(matches!(
        generate_report(dir.path(), &ReportConfig::default()),
        Err(ReportError::MalformedLine { .. })
    ));
}

#[test]
fn bad_timestamp() {
    let dir = race_folder(
        "SVF_Sebastian Vettel_FERRARI\n",
        "SVF2018-05-24 12:02:58.917\n",
        "SVF2018-05-24_12:04:03.332\n",
    );

    assert!(matches!(
        generate_report(dir.path(), &ReportConfig::default()),
        Err(ReportError::TimestampFormat { .. })
    ));
}

#[test]
fn custom_file_names() {
    let dir = tempfile::tempdir().unwrap();
    let write = |name: &str, content: &str| fs::write(dir.path().join(name), content).unwrap();
    write("drivers.txt", "SVF_Sebastian Vettel_FERRARI\n");
    write("q1_start.log", "SVF2018-05-24_12:02:58.917\n");
    write("q1_end.log", "SVF2018-05-24_12:04:03.332\n");

    let config = ReportConfig::new().with_files(SessionFiles {
        abbreviations: "drivers.txt".into(),
        start: "q1_start.log".into(),
        end: "q1_end.log".into(),
    });
    let session = Session::load(dir.path(), &config).unwrap();

    assert_eq!(session.store().len(), 1);
    assert_eq!(
        session.report().unwrap().entries[0].best_lap.to_string(),
        "0:01:04.415000"
    );
}
