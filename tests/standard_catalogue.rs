use gring::{harness::*, io::ConfigurablePrintTarget};

fn scaled_catalogue(divisor: u64) -> Vec<(SupportedRing, u64)> {
    standard_catalogue()
        .unwrap()
        .into_iter()
        .map(|(ring, n)| (ring, (n / divisor).max(1)))
        .collect()
}

#[test]
fn test_scaled_standard_catalogue() {
    let mut tester = RingTester::new(HarnessSettings::default()).unwrap();
    tester.print_to_buffer();

    let catalogue = scaled_catalogue(100);
    let reports = run_catalogue(&mut tester, &catalogue).unwrap();
    assert_eq!(reports.len(), catalogue.len());

    for ((ring, _), report) in catalogue.iter().zip(&reports) {
        assert_eq!(ring.description(), report.ring);
    }

    let output = tester.get_print_buffer().unwrap();
    assert_eq!(output.matches("Tests finished in").count(), catalogue.len());
}

// the full run takes minutes in debug builds
#[cfg(feature = "bench")]
#[test]
fn test_full_standard_catalogue() {
    let mut tester = RingTester::new(HarnessSettings::default()).unwrap();
    let catalogue = standard_catalogue().unwrap();
    run_catalogue(&mut tester, &catalogue).unwrap();
}
