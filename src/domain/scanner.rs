/// Receives the decoded payload of a scanned code, e.g. to open it as a URL.
pub trait CodeHandler {
    type Output;

    fn handle(&mut self, payload: &str) -> Self::Output;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// The next detected code is handed to the handler.
    Armed,
    /// A code has been handled; detections are ignored until `rearm`.
    Handling,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ScanOutcome<T> {
    Handled(T),
    Ignored,
}

/// Edge-triggered latch in front of a `CodeHandler`.
///
/// The camera reports one callback per detected code, often many per second for
/// the same code. Only the first detection after arming reaches the handler; the
/// latch then stays in `Handling` until the consumer explicitly calls `rearm`.
#[derive(Debug)]
pub struct Scanner<H: CodeHandler> {
    handler: H,
    state: ScanState,
}

impl<H: CodeHandler> Scanner<H> {
    pub fn new(handler: H) -> Self {
        Self { handler, state: ScanState::Armed }
    }

    pub fn on_code_detected(&mut self, payload: &str) -> ScanOutcome<H::Output> {
        match self.state {
            ScanState::Armed => {
                self.state = ScanState::Handling;
                log::debug!("Scanned code accepted: '{}'.", payload);
                ScanOutcome::Handled(self.handler.handle(payload))
            }
            ScanState::Handling => {
                log::debug!("Scanned code ignored while handling a previous scan: '{}'.", payload);
                ScanOutcome::Ignored
            }
        }
    }

    pub fn rearm(&mut self) {
        self.state = ScanState::Armed;
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }
}
