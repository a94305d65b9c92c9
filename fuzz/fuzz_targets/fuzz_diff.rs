#![no_main]
use configdiff::reports::{create_reporter_with_options, ReportConfig};
use configdiff::{diff_configs, ConfigFormat, ReportFormat};
use libfuzzer_sys::fuzz_target;

/// Split the input in two, decode both halves as YAML and render the diff.
fuzz_target!(|data: &[u8]| {
    let mid = data.len() / 2;
    let (Ok(left), Ok(right)) = (
        configdiff::decode(&data[..mid], ConfigFormat::Yaml),
        configdiff::decode(&data[mid..], ConfigFormat::Yaml),
    ) else {
        return;
    };

    let result = diff_configs(&left.entries, &right.entries);
    assert_eq!(
        result.key_count(),
        left.entries
            .keys()
            .chain(right.entries.keys().filter(|k| !left.entries.contains_key(*k)))
            .count()
    );
    for format in [ReportFormat::Summary, ReportFormat::Json] {
        let _ = create_reporter_with_options(format, false)
            .generate_diff_report(&result, &ReportConfig::default());
    }
});
