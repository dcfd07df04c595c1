use rc_publish::domain::{next_candidate, next_candidate_number, ReleaseIdentifier};

fn id(s: &str) -> ReleaseIdentifier {
    ReleaseIdentifier::new(s).unwrap()
}

#[test]
fn test_scenarios() {
    let cases: Vec<(&str, Vec<&str>, &str)> = vec![
        ("2508", vec!["2508.1", "2508.2", "2508.3"], "2508.4"),
        ("2509", vec![], "2509.1"),
        ("2508", vec!["2508.1", "2508.x", "2509.1"], "2508.2"),
        ("2508", vec!["2508.1", "2508.18446744073709551615"], "2508.2"),
    ];

    for (identifier, tags, expected) in cases {
        assert_eq!(
            next_candidate(&id(identifier), &tags).name(),
            expected,
            "identifier {} with tags {:?}",
            identifier,
            tags
        );
    }
}

#[test]
fn test_result_is_max_plus_one_regardless_of_order() {
    let sets: Vec<Vec<u64>> = vec![vec![3, 1, 2], vec![10, 2], vec![1], vec![5, 5, 4], vec![42, 7, 19]];

    for numbers in sets {
        let tags: Vec<String> = numbers.iter().map(|n| format!("2508.{}", n)).collect();
        let max = numbers.iter().copied().max().unwrap();
        assert_eq!(next_candidate_number("2508", &tags), max + 1);

        let mut reversed = tags.clone();
        reversed.reverse();
        assert_eq!(next_candidate_number("2508", &reversed), max + 1);
    }
}

#[test]
fn test_noise_never_changes_result() {
    let base = ["2508.4", "2508.2"];
    let noise = [
        "2508.4.1", "2508.rc5", "2508.", "2509.99", "v2508.9", "25089.1", "release-2508.8",
    ];

    let with_noise: Vec<&str> = base.iter().chain(noise.iter()).copied().collect();
    assert_eq!(next_candidate_number("2508", base), 5);
    assert_eq!(next_candidate_number("2508", with_noise), 5);
    assert_eq!(next_candidate_number("2508", noise), 1);
}

#[test]
fn test_input_tags_are_not_consumed_or_mutated() {
    let tags = vec!["2508.1".to_string(), "2508.2".to_string()];
    let before = tags.clone();
    let _ = next_candidate_number("2508", &tags);
    assert_eq!(tags, before);
}
