#[cfg(feature = "serde")]
#[test]
fn test_report_json() {
    use gring::{harness::*, rings::NmodRing};

    let report = assert_ring_laws(&NmodRing::new(31).unwrap(), 10);
    let json = report.to_json().unwrap();
    assert!(json.contains("\"ring\": \"Integers mod 31 (nmod)\""));

    let report2: RingReport = serde_json::from_str(&json).unwrap();
    assert_eq!(report, report2);
}

#[cfg(feature = "serde")]
#[test]
fn test_settings_json() {
    use gring::harness::*;
    use std::io::{Read, Seek, SeekFrom, Write};

    let settings = HarnessSettingsBuilder::default()
        .iterations(3)
        .seed(17)
        .build()
        .unwrap();

    let mut file = tempfile::tempfile().unwrap();
    serde_json::to_writer(&mut file, &settings).unwrap();
    file.flush().unwrap();

    file.seek(SeekFrom::Start(0)).unwrap();
    let mut text = String::new();
    file.read_to_string(&mut text).unwrap();
    let settings2: HarnessSettings = serde_json::from_str(&text).unwrap();
    assert_eq!(settings, settings2);
    assert!(RingTester::new(settings2).is_ok());
}
