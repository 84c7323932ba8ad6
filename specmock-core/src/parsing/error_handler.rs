use std::sync::Mutex;

use crate::error::ParsingProblem;
use crate::spec::SpecificationPointer;

/// Sink for recoverable specification defects. Reporting never fails and
/// never halts parsing; the document-parsing pipeline inspects the
/// accumulated problems afterwards and decides whether they are fatal.
///
/// One handler may be shared by many concurrent parses, so implementations
/// must be safe for concurrent use.
pub trait ParsingErrorHandler: Send + Sync {
    fn report_error(&self, message: &str, pointer: &SpecificationPointer);
}

/// Default handler: accumulates problems in document order.
#[derive(Debug, Default)]
pub struct ParsingErrorCollector {
    problems: Mutex<Vec<ParsingProblem>>,
}

impl ParsingErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn problems(&self) -> Vec<ParsingProblem> {
        self.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Reporting must not fail, so a poisoned lock is recovered rather than
    // propagated.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ParsingProblem>> {
        self.problems
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ParsingErrorHandler for ParsingErrorCollector {
    fn report_error(&self, message: &str, pointer: &SpecificationPointer) {
        self.lock().push(ParsingProblem::new(pointer.path(), message));
    }
}
