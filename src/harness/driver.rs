use super::report::{DOUBLE_RULE, SINGLE_RULE};
use super::*;
use crate::algebra::*;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use std::io::Write;
use std::time::Instant;

/// Runs the law catalogue against rings and reports per-law outcome
/// counts.
///
/// The tester owns its random state, seeded from
/// [`HarnessSettings::seed`], so two testers with equal settings draw the
/// same operands.  Progress is written to a configurable print target,
/// stdout by default.
#[derive(Debug)]
pub struct RingTester {
    settings: HarnessSettings,
    state: RandState,
    stream: PrintTarget,
}

impl RingTester {
    pub fn new(settings: HarnessSettings) -> Result<Self, HarnessError> {
        settings.validate()?;
        let state = rand_state(settings.seed);
        Ok(Self {
            settings,
            state,
            stream: PrintTarget::default(),
        })
    }

    pub fn settings(&self) -> &HarnessSettings {
        &self.settings
    }

    pub fn set_iterations(&mut self, iterations: u64) {
        self.settings.iterations = iterations;
    }

    /// Runs every law that applies to the flags of `ring`, in catalogue
    /// order.  Stops at the first violation.
    pub fn test_ring<R: Ring>(&mut self, ring: &R) -> Result<RingReport, HarnessError> {
        let description = ring.describe().to_string();
        writeln!(self.stream, "{}", DOUBLE_RULE)?;
        writeln!(self.stream, "Testing {}", description)?;
        writeln!(self.stream, "{}", SINGLE_RULE)?;

        let start = Instant::now();
        let flags = ring.flags();
        let mut laws = Vec::new();
        for law in catalogue::<R>() {
            if law.applies(flags) {
                laws.push(self.test_law(ring, &law)?);
            }
        }
        let elapsed = start.elapsed();

        writeln!(self.stream, "{}", SINGLE_RULE)?;
        writeln!(self.stream, "Tests finished in {:.3e}s", elapsed.as_secs_f64())?;
        writeln!(self.stream, "{}", DOUBLE_RULE)?;
        self.stream.flush()?;

        Ok(RingReport {
            ring: description,
            laws,
            elapsed,
        })
    }

    /// Runs a single law for the configured number of iterations.
    pub fn test_law<R: Ring>(&mut self, ring: &R, law: &Law<R>) -> Result<LawReport, HarnessError> {
        let mut report = LawReport::new(law.name);
        let start = Instant::now();

        for iteration in 0..self.settings.iterations {
            let mut env = LawEnv::new(&mut self.state, &self.settings);
            let status = (law.check)(ring, &mut env);
            let dump = env.dump;

            report.iterations += 1;
            if status.is_success() {
                report.success += 1;
            }
            if status.has_domain() {
                report.domain += 1;
            }
            if status.has_unable() {
                report.unable += 1;
            }

            if status.is_wrong() {
                writeln!(self.stream, "{} ... FAIL", law.name)?;
                write!(self.stream, "{}", dump)?;
                self.stream.flush()?;
                return Err(HarnessError::LawViolation {
                    ring: ring.describe().to_string(),
                    law: law.name.to_string(),
                    iteration,
                    dump,
                });
            }
            if self.settings.verbose {
                writeln!(self.stream, "{} [{}]: {}", law.name, iteration, status)?;
                write!(self.stream, "{}", dump)?;
            }
        }

        report.elapsed = start.elapsed();
        writeln!(self.stream, "{}", report)?;
        Ok(report)
    }
}

impl ConfigurablePrintTarget for RingTester {
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
    fn print_target(&mut self) -> &dyn Write {
        self.stream.print_target()
    }
}

/// Runs the whole catalogue on `ring` with default settings and
/// `iterations` iterations per law, without printing.
///
/// # Panics
/// On any law violation, with the operand dump in the message.
pub fn assert_ring_laws<R: Ring>(ring: &R, iterations: u64) -> RingReport {
    let settings = HarnessSettings {
        iterations,
        ..HarnessSettings::default()
    };
    let result = RingTester::new(settings).and_then(|mut tester| {
        tester.print_to_sink();
        tester.test_ring(ring)
    });
    match result {
        Ok(report) => report,
        Err(e) => panic!("{}", e),
    }
}
