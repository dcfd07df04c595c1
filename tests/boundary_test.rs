use rc_publish::boundary::BoundaryWarning;
use rc_publish::domain::scan_candidates;
use rc_publish::ui;

#[test]
fn test_ignored_tag_display() {
    let warning = BoundaryWarning::IgnoredTag {
        tag: "2508.rc1".to_string(),
        reason: "suffix 'rc1' is not a candidate number".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("2508.rc1"),
        "Message should contain the tag, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("not a candidate number"),
        "Message should contain the reason, got: {}",
        display_msg
    );
}

#[test]
fn test_output_sink_missing_display() {
    let display_msg = BoundaryWarning::OutputSinkMissing.to_string();
    assert!(display_msg.contains("GITHUB_OUTPUT"));
}

#[test]
fn test_scan_warns_for_semver_like_tags() {
    let scan = scan_candidates("2508", ["2508.1.0", "2508.2"]);
    assert_eq!(scan.numbers, vec![2]);
    assert_eq!(
        scan.ignored,
        vec![BoundaryWarning::IgnoredTag {
            tag: "2508.1.0".to_string(),
            reason: "has more than two segments".to_string(),
        }]
    );
}

#[test]
fn test_scan_is_silent_for_foreign_tags() {
    let scan = scan_candidates("2508", ["v1.2.3", "2509.1", "latest"]);
    assert!(scan.numbers.is_empty());
    assert!(scan.ignored.is_empty());
}

#[test]
fn test_warning_formatter() {
    let text = ui::format_boundary_warning(&BoundaryWarning::OutputSinkMissing);
    assert!(text.contains("WARNING"));
    assert!(text.contains("GITHUB_OUTPUT"));
}
