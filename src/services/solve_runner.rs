use crate::config::SolverConfig;
use crate::engines::generation::evolution_engine::{CancellationToken, EvolutionEngine, SolveReport};
use crate::engines::generation::progress::{ChannelProgressCallback, ProgressMessage};
use crate::engines::kinematics::Arm;
use crate::error::SpatialArmError;
use crate::types::Pose;
use std::sync::mpsc::{channel, Receiver};
use std::thread::{self, JoinHandle};

/// Runs a solve on a background thread so the caller's loop stays responsive
pub struct SolveRunner {
    handle: Option<JoinHandle<SolveReport>>,
    progress_rx: Receiver<ProgressMessage>,
    cancel: CancellationToken,
}

impl SolveRunner {
    /// Start a solve reporting every generation
    pub fn start(arm: Arm, config: SolverConfig, target: Pose) -> Result<Self, SpatialArmError> {
        Self::start_with_interval(arm, config, target, 1)
    }

    /// Start a solve reporting every `interval` generations.
    ///
    /// The configuration is validated before the thread is spawned.
    pub fn start_with_interval(
        arm: Arm,
        config: SolverConfig,
        target: Pose,
        interval: usize,
    ) -> Result<Self, SpatialArmError> {
        let mut engine = EvolutionEngine::new(arm, config)?;

        let (progress_tx, progress_rx) = channel();
        let cancel = CancellationToken::new();
        let cancel_clone = cancel.clone();

        let handle = thread::Builder::new()
            .name("ik-solver".to_string())
            .spawn(move || {
                log::debug!("Solver thread started");
                let callback = ChannelProgressCallback::new(progress_tx).with_interval(interval);
                engine.run(target, callback, &cancel_clone)
            })?;

        Ok(Self {
            handle: Some(handle),
            progress_rx,
            cancel,
        })
    }

    /// Poll for progress updates (non-blocking)
    pub fn poll_progress(&mut self) -> Option<ProgressMessage> {
        self.progress_rx.try_recv().ok()
    }

    /// Every update received so far
    pub fn drain_progress(&mut self) -> Vec<ProgressMessage> {
        self.progress_rx.try_iter().collect()
    }

    pub fn is_finished(&self) -> bool {
        self.handle
            .as_ref()
            .map(|handle| handle.is_finished())
            .unwrap_or(true)
    }

    /// Report of a finished solve; `None` while running or once already taken
    pub fn try_get_results(&mut self) -> Option<Result<SolveReport, SpatialArmError>> {
        let handle = self.handle.take()?;
        if handle.is_finished() {
            Some(Self::join(handle))
        } else {
            // Not finished yet, put handle back
            self.handle = Some(handle);
            None
        }
    }

    /// Block until the solve ends
    pub fn wait(mut self) -> Result<SolveReport, SpatialArmError> {
        match self.handle.take() {
            Some(handle) => Self::join(handle),
            None => Err(SpatialArmError::Solver("Results already taken".to_string())),
        }
    }

    /// Cancel the running solve; it stops at the next generation boundary
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    fn join(handle: JoinHandle<SolveReport>) -> Result<SolveReport, SpatialArmError> {
        handle
            .join()
            .map_err(|_| SpatialArmError::Solver("Solver thread panicked".to_string()))
    }
}

impl Drop for SolveRunner {
    fn drop(&mut self) {
        self.cancel();
    }
}
