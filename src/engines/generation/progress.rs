use super::evolution_engine::ProgressCallback;
use super::genome::Genome;
use serde::Serialize;
use std::sync::mpsc::Sender;

/// Logs the best candidate every `interval` generations
pub struct ConsoleProgressCallback {
    interval: usize,
}

impl ConsoleProgressCallback {
    pub fn new(interval: usize) -> Self {
        Self {
            interval: interval.max(1),
        }
    }
}

impl Default for ConsoleProgressCallback {
    fn default() -> Self {
        Self::new(10)
    }
}

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_complete(&mut self, generation: usize, best: &Genome, best_fitness: f64) {
        if generation % self.interval != 0 {
            return;
        }

        let angles = best
            .angles()
            .iter()
            .map(|link| format!("({:.1}°, {:.1}°)", link.theta, link.gamma))
            .collect::<Vec<_>>()
            .join(" ");
        log::info!(
            "Generation {} best distance {:.4} angles {}",
            generation + 1,
            best_fitness,
            angles
        );
    }
}

/// Messages sent to a consumer on another thread
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ProgressMessage {
    GenerationStart(usize),
    GenerationComplete {
        generation: usize,
        best: Genome,
        best_fitness: f64,
    },
}

/// Forwards progress over a channel, optionally only every `interval` generations
pub struct ChannelProgressCallback {
    sender: Sender<ProgressMessage>,
    interval: usize,
    notify_start: bool,
}

impl ChannelProgressCallback {
    pub fn new(sender: Sender<ProgressMessage>) -> Self {
        Self {
            sender,
            interval: 1,
            notify_start: false,
        }
    }

    pub fn with_interval(mut self, interval: usize) -> Self {
        self.interval = interval.max(1);
        self
    }

    pub fn with_start_notifications(mut self, notify_start: bool) -> Self {
        self.notify_start = notify_start;
        self
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        if self.notify_start && generation % self.interval == 0 {
            let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
        }
    }

    fn on_generation_complete(&mut self, generation: usize, best: &Genome, best_fitness: f64) {
        if generation % self.interval != 0 {
            return;
        }
        // Receiver may be gone; the solve keeps going regardless
        let _ = self.sender.send(ProgressMessage::GenerationComplete {
            generation,
            best: *best,
            best_fitness,
        });
    }
}
