// ============================================================================
// Console Session
// Interactive calculate loop wired to the factory and evaluation context
// ============================================================================

use super::prompter::{Command, Prompter, FIRST_OPERAND_PROMPT, SECOND_OPERAND_PROMPT};
use crate::domain::{CalculatorConfig, CalculatorResult};
use crate::engine::{EvaluationContext, OperationFactory};
use crate::interfaces::ResultObserver;
use parking_lot::{Mutex, MutexGuard};
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// Cloneable handle to one output sink.
///
/// The prompter and the [`ConsoleObserver`] each hold a clone, so prompts and
/// results land in the same stream in the order they were written.
#[derive(Debug, Default)]
pub struct SharedWriter<W> {
    inner: Arc<Mutex<W>>,
}

impl<W> SharedWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { inner: Arc::new(Mutex::new(writer)) }
    }

    /// Exclusive access to the underlying sink
    pub fn lock(&self) -> MutexGuard<'_, W> {
        self.inner.lock()
    }
}

impl<W> Clone for SharedWriter<W> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<W: Write> Write for SharedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.lock().flush()
    }
}

/// Observer that prints each result as `Result: <value>`
pub struct ConsoleObserver<W> {
    out: SharedWriter<W>,
}

impl<W> ConsoleObserver<W> {
    pub fn new(out: SharedWriter<W>) -> Self {
        Self { out }
    }
}

impl<W: Write + Send> ResultObserver for ConsoleObserver<W> {
    fn update_result(&self, value: Decimal) {
        let mut out = self.out.lock();
        if let Err(err) = writeln!(out, "Result: {}", value).and_then(|()| out.flush()) {
            tracing::warn!(error = %err, "Failed to print result");
        }
    }
}

/// Counters reported when a session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Calculations that produced a result
    pub calculations: usize,
    /// Calculations rejected with an error
    pub errors: usize,
}

/// Ask for whichever configuration options were not supplied up front.
///
/// Returns `Ok(None)` if the input ends before both options are known.
pub fn configure<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    precision: Option<u32>,
    allow_negative_results: Option<bool>,
) -> io::Result<Option<CalculatorConfig>> {
    let precision = match precision {
        Some(precision) => precision,
        None => match prompter.read_precision()? {
            Some(precision) => precision,
            None => return Ok(None),
        },
    };

    let allow_negative_results = match allow_negative_results {
        Some(allow) => allow,
        None => match prompter.read_allow_negative()? {
            Some(allow) => allow,
            None => return Ok(None),
        },
    };

    CalculatorConfig::new(precision, allow_negative_results)
        .map(Some)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))
}

/// Prompt loop: operator, first operand, second operand, result.
///
/// Calculation errors are printed as `Error: <message>` and the loop moves on
/// to the next operator prompt. The loop ends on `exit` or end of input.
pub struct ConsoleSession<R, W> {
    prompter: Prompter<R, W>,
    factory: OperationFactory,
    context: EvaluationContext,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(
        prompter: Prompter<R, W>,
        config: CalculatorConfig,
        observer: Arc<dyn ResultObserver>,
    ) -> Self {
        Self {
            prompter,
            factory: OperationFactory::new(Arc::new(config)),
            context: EvaluationContext::new(observer),
        }
    }

    /// Run until `exit` or end of input
    pub fn run(&mut self) -> io::Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        loop {
            let symbol = match self.prompter.read_command()? {
                Some(Command::Operator(symbol)) => symbol,
                Some(Command::Exit) => {
                    self.prompter.say("Exiting the calculator.")?;
                    break;
                },
                None => break,
            };

            match self.step(&symbol)? {
                Some(Ok(_)) => summary.calculations += 1,
                Some(Err(err)) => {
                    tracing::warn!(%symbol, error = %err, "Calculation rejected");
                    self.prompter.say(&format!("Error: {}", err))?;
                    summary.errors += 1;
                },
                None => break,
            }
        }

        tracing::debug!(
            calculations = summary.calculations,
            errors = summary.errors,
            "Console session finished"
        );

        Ok(summary)
    }

    /// One calculation. `Ok(None)` means the input ended mid-way.
    fn step(&mut self, symbol: &str) -> io::Result<Option<CalculatorResult<Decimal>>> {
        let operation = match self.factory.create_operation(symbol) {
            Ok(operation) => operation,
            Err(err) => return Ok(Some(Err(err))),
        };

        let Some(first) = self.prompter.read_operand(FIRST_OPERAND_PROMPT)? else {
            return Ok(None);
        };
        self.context.set_input(first, operation);

        let Some(second) = self.prompter.read_operand(SECOND_OPERAND_PROMPT)? else {
            return Ok(None);
        };

        Ok(Some(self.context.calculate(second)))
    }

    /// The underlying prompter
    pub fn prompter(&self) -> &Prompter<R, W> {
        &self.prompter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::prompter::OPERATION_PROMPT;
    use crate::interfaces::RecordingObserver;
    use std::io::Cursor;
    use std::str::FromStr;

    type Scripted = Prompter<Cursor<Vec<u8>>, Vec<u8>>;

    fn scripted(input: &str) -> Scripted {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn run(
        config: CalculatorConfig,
        input: &str,
    ) -> (SessionSummary, Arc<RecordingObserver>, String) {
        let observer = Arc::new(RecordingObserver::new());
        let mut session = ConsoleSession::new(scripted(input), config, observer.clone());
        let summary = session.run().unwrap();
        let output = String::from_utf8(session.prompter().writer().clone()).unwrap();
        (summary, observer, output)
    }

    #[test]
    fn test_session_calculates_until_exit() {
        let config = CalculatorConfig::strict(2).unwrap();
        let (summary, observer, output) = run(config, "+\n3.001\n4,004\n/\n1\n8\nexit\n");

        assert_eq!(summary, SessionSummary { calculations: 2, errors: 0 });
        assert_eq!(
            observer.results(),
            vec![
                Decimal::from_str("7.00").unwrap(),
                Decimal::from_str("0.13").unwrap()
            ]
        );
        assert!(output.ends_with("Exiting the calculator.\n"));
    }

    #[test]
    fn test_console_observer_shares_prompt_stream() {
        let out = SharedWriter::new(Vec::new());
        let input = Cursor::new(b"+\n3.001\n4.004\n/\n1\n0\nexit\n".to_vec());
        let prompter = Prompter::new(input, out.clone());
        let observer = Arc::new(ConsoleObserver::new(out.clone()));
        let config = CalculatorConfig::strict(2).unwrap();
        let mut session = ConsoleSession::new(prompter, config, observer);

        session.run().unwrap();

        let output = String::from_utf8(out.lock().clone()).unwrap();
        let result_at = output.find("Result: 7.00\n").unwrap();
        let next_prompt_at = output[result_at..].find(OPERATION_PROMPT).unwrap() + result_at;
        assert!(output[..result_at].ends_with(SECOND_OPERAND_PROMPT));
        assert!(output[next_prompt_at..].contains("Error: Cannot divide by zero."));
        assert_eq!(output.matches("Result: ").count(), 1);
    }

    #[test]
    fn test_session_reports_errors_and_continues() {
        let config = CalculatorConfig::strict(0).unwrap();
        let (summary, observer, output) = run(config, "%\n/\n1\n0\n-\n2\n5\n*\n2\n3\nEXIT\n");

        assert_eq!(summary, SessionSummary { calculations: 1, errors: 3 });
        assert_eq!(observer.results(), vec![Decimal::from(6)]);
        assert!(output.contains("Error: Unknown operation: %"));
        assert!(output.contains("Error: Cannot divide by zero."));
        assert!(output.contains("Error: Negative results are not allowed."));
    }

    #[test]
    fn test_unknown_operation_skips_operand_prompts() {
        let config = CalculatorConfig::permissive(2).unwrap();
        let (_, _, output) = run(config, "add\nexit\n");

        assert!(!output.contains(FIRST_OPERAND_PROMPT));
        assert_eq!(output.matches(OPERATION_PROMPT).count(), 2);
    }

    #[test]
    fn test_session_ends_on_end_of_input() {
        let config = CalculatorConfig::permissive(2).unwrap();
        let (summary, observer, output) = run(config, "*\n2\n");

        assert_eq!(summary, SessionSummary::default());
        assert!(observer.is_empty());
        assert!(!output.contains("Exiting"));
    }

    #[test]
    fn test_configure_prompts_for_missing_options() {
        let mut prompter = scripted("3\ny\n");
        let config = configure(&mut prompter, None, None).unwrap().unwrap();
        assert_eq!(config, CalculatorConfig::new(3, true).unwrap());

        let mut prompter = scripted("");
        let config = configure(&mut prompter, Some(1), Some(false)).unwrap().unwrap();
        assert_eq!(config, CalculatorConfig::new(1, false).unwrap());

        let mut prompter = scripted("2\n");
        assert_eq!(configure(&mut prompter, None, None).unwrap(), None);
    }

    #[test]
    fn test_configure_rejects_out_of_range_precision() {
        let mut prompter = scripted("");
        let err = configure(&mut prompter, Some(99), Some(true)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
