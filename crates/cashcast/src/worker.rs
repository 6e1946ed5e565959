//! Background worker for running simulations without blocking the host.
//!
//! The engine itself is synchronous and side-effect free; this module owns
//! the offload boundary. Only immutable messages cross it: a run request,
//! periodic progress notifications, a final result, or an error.
//! Cancellation is coarse: the flag stops progress forwarding and skips
//! queued requests, but a run already inside the daily loop finishes.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};

use cashcast_core::model::{
    CounterfactualResult, RuntimeOptions, SimulationConfig, SimulationResult,
};
use cashcast_core::simulation::{simulate_counterfactual, simulate_with_options};

/// Request sent to the background worker.
#[derive(Debug)]
pub enum SimulationRequest {
    /// Run a single deterministic simulation.
    Run {
        config: SimulationConfig,
        options: RuntimeOptions,
    },
    /// Run the simulation plus its no-shocks counterfactual.
    RunCounterfactual {
        config: SimulationConfig,
        options: RuntimeOptions,
    },
    /// Coarse cancellation of whatever is queued.
    Cancel,
    /// Graceful shutdown.
    Shutdown,
}

/// Response from the background worker.
#[derive(Debug)]
pub enum SimulationResponse {
    /// Progress update, roughly every 50 simulated days.
    Progress { day: u32, total_days: u32 },
    /// Single simulation completed (boxed to keep the enum small).
    Complete(Box<SimulationResult>),
    /// Counterfactual pair completed.
    CounterfactualComplete(Box<CounterfactualResult>),
    /// A request was skipped due to cancellation.
    Cancelled,
    /// The run failed before any day executed.
    Error(String),
}

/// Runs simulations on a dedicated thread, exchanging messages over mpsc
/// channels.
pub struct SimulationWorker {
    request_tx: Sender<SimulationRequest>,
    response_rx: Receiver<SimulationResponse>,
    cancel_flag: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl SimulationWorker {
    /// Spawn the worker thread.
    pub fn new() -> Self {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();
        let cancel_flag = Arc::new(AtomicBool::new(false));

        let ctx = WorkerContext {
            response_tx,
            cancel_flag: cancel_flag.clone(),
        };

        let thread = thread::spawn(move || {
            ctx.run(request_rx);
        });

        Self {
            request_tx,
            response_rx,
            cancel_flag,
            thread: Some(thread),
        }
    }

    /// Send a request to the worker. Clears any pending cancellation.
    pub fn send(&self, request: SimulationRequest) -> bool {
        if !matches!(request, SimulationRequest::Cancel) {
            self.cancel_flag.store(false, Ordering::SeqCst);
        }
        self.request_tx.send(request).is_ok()
    }

    /// Block until the next response. `None` means the worker thread died.
    pub fn recv(&self) -> Option<SimulationResponse> {
        self.response_rx.recv().ok()
    }

    /// Non-blocking receive for polling hosts.
    pub fn try_recv(&self) -> Option<SimulationResponse> {
        self.response_rx.try_recv().ok()
    }

    /// Request coarse cancellation.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::SeqCst);
    }

    /// Ask the worker thread to exit after draining its queue.
    pub fn shutdown(&self) {
        let _ = self.request_tx.send(SimulationRequest::Shutdown);
    }
}

impl Default for SimulationWorker {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SimulationWorker {
    fn drop(&mut self) {
        self.shutdown();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// State owned by the background thread.
struct WorkerContext {
    response_tx: Sender<SimulationResponse>,
    cancel_flag: Arc<AtomicBool>,
}

impl WorkerContext {
    fn run(&self, request_rx: Receiver<SimulationRequest>) {
        while let Ok(request) = request_rx.recv() {
            match request {
                SimulationRequest::Shutdown => break,

                SimulationRequest::Cancel => {
                    self.cancel_flag.store(true, Ordering::SeqCst);
                    let _ = self.response_tx.send(SimulationResponse::Cancelled);
                }

                SimulationRequest::Run { config, options } => {
                    tracing::info!(scenario = %config.name, "starting simulation");
                    if self.cancel_flag.load(Ordering::SeqCst) {
                        let _ = self.response_tx.send(SimulationResponse::Cancelled);
                        continue;
                    }

                    let mut forward = self.progress_forwarder();
                    match simulate_with_options(&config, &options, Some(&mut forward)) {
                        Ok(result) => {
                            let _ = self
                                .response_tx
                                .send(SimulationResponse::Complete(Box::new(result)));
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "simulation failed");
                            let _ = self
                                .response_tx
                                .send(SimulationResponse::Error(e.to_string()));
                        }
                    }
                }

                SimulationRequest::RunCounterfactual { config, options } => {
                    tracing::info!(scenario = %config.name, "starting counterfactual pair");
                    if self.cancel_flag.load(Ordering::SeqCst) {
                        let _ = self.response_tx.send(SimulationResponse::Cancelled);
                        continue;
                    }

                    let mut forward = self.progress_forwarder();
                    match simulate_counterfactual(&config, &options, Some(&mut forward)) {
                        Ok(result) => {
                            let _ = self
                                .response_tx
                                .send(SimulationResponse::CounterfactualComplete(Box::new(result)));
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "counterfactual failed");
                            let _ = self
                                .response_tx
                                .send(SimulationResponse::Error(e.to_string()));
                        }
                    }
                }
            }
        }
    }

    /// Progress callback forwarding (day, total) over the response channel,
    /// muted once cancellation is requested.
    fn progress_forwarder(&self) -> impl FnMut(u32, u32) + Send + use<> {
        let tx = self.response_tx.clone();
        let cancel = self.cancel_flag.clone();
        move |day, total_days| {
            if !cancel.load(Ordering::SeqCst) {
                let _ = tx.send(SimulationResponse::Progress { day, total_days });
            }
        }
    }
}
