use super::*;
use crate::algebra::{ContextError, Ring};
use crate::rings::*;
use enum_dispatch::*;

/// The contexts shipped with the crate, as one closed type.
#[enum_dispatch(RingUnderTest)]
#[derive(Debug, Clone, PartialEq)]
pub enum SupportedRing {
    IntegerRing(IntegerRing),
    RationalField(RationalField),
    NmodRing(NmodRing),
    RealBallField(RealBallField),
    RationalMatrixRing(MatrixRing<RationalField>),
    NmodMatrixRing(MatrixRing<NmodRing>),
    IntegerPolynomialRing(PolynomialRing<IntegerRing>),
    NmodPolynomialRing(PolynomialRing<NmodRing>),
}

/// A context the tester can be pointed at without knowing its element
/// type.
#[enum_dispatch]
pub trait RingUnderTest {
    fn description(&self) -> String;
    fn run_laws(&self, tester: &mut RingTester) -> Result<RingReport, HarnessError>;
}

impl<R: Ring> RingUnderTest for R {
    fn description(&self) -> String {
        self.describe().to_string()
    }

    fn run_laws(&self, tester: &mut RingTester) -> Result<RingReport, HarnessError> {
        tester.test_ring(self)
    }
}

/// Contexts and iteration counts of the standard conformance run.
pub fn standard_catalogue() -> Result<Vec<(SupportedRing, u64)>, ContextError> {
    let qq = RationalField::with_size_limit(1000)?;
    let zz = IntegerRing::with_size_limit(1000)?;
    let z107 = NmodRing::new(107)?;

    Ok(vec![
        (qq.clone().into(), 10000),
        (MatrixRing::new(qq, 4).into(), 10),
        (z107.clone().into(), 1000),
        (MatrixRing::new(z107.clone(), 10).into(), 10),
        (MatrixRing::new(z107.clone(), 4).into(), 1000),
        (RealBallField::new().into(), 100),
        (zz.clone().into(), 1000),
        (PolynomialRing::with_degree_limit(zz, 20).into(), 100),
        (PolynomialRing::with_degree_limit(z107, 20).into(), 100),
    ])
}

/// Runs every entry with its own iteration count, stopping at the first
/// violation.
pub fn run_catalogue(
    tester: &mut RingTester,
    catalogue: &[(SupportedRing, u64)],
) -> Result<Vec<RingReport>, HarnessError> {
    let saved = tester.settings().iterations;
    let mut reports = Vec::with_capacity(catalogue.len());
    for (ring, iterations) in catalogue {
        tester.set_iterations(*iterations);
        let result = ring.run_laws(tester);
        if result.is_err() {
            tester.set_iterations(saved);
        }
        reports.push(result?);
    }
    tester.set_iterations(saved);
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ConfigurablePrintTarget;

    #[test]
    fn test_standard_catalogue() {
        let catalogue = standard_catalogue().unwrap();
        assert_eq!(catalogue.len(), 9);
        assert_eq!(
            catalogue[0].0.description(),
            "Rational field (fmpq) with size limit 1000 bits"
        );
        assert_eq!(catalogue[0].1, 10000);
        assert!(matches!(catalogue[3].0, SupportedRing::NmodMatrixRing(ref m) if m.dim() == 10));
    }

    #[test]
    fn test_run_scaled_catalogue() {
        let scaled: Vec<(SupportedRing, u64)> = standard_catalogue()
            .unwrap()
            .into_iter()
            .map(|(ring, n)| (ring, (n / 1000).max(1)))
            .collect();

        let settings = HarnessSettings {
            iterations: 77,
            ..HarnessSettings::default()
        };
        let mut tester = RingTester::new(settings).unwrap();
        tester.print_to_sink();
        let reports = run_catalogue(&mut tester, &scaled).unwrap();

        assert_eq!(reports.len(), scaled.len());
        assert_eq!(reports[0].laws[0].iterations, 10);
        assert_eq!(reports[2].laws[0].iterations, 1);
        assert_eq!(tester.settings().iterations, 77);
    }
}
