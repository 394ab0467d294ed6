use crate::prediction_smoother::config::SmootherConfig;
use crate::prediction_smoother::error::SmootherError;
use crate::prediction_smoother::observation::{Label, Observation};
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmootherState {
    Empty,
    Tracking,
}

/// Turns a noisy stream of per-frame top classifications into one stable label.
///
/// Observations above the admission threshold enter a bounded FIFO window and the
/// most frequent label in that window becomes the current best. Labels that tie
/// on count are resolved in favour of the one seen most recently.
///
/// A smoother has a single writer. Callers classifying frames concurrently must
/// funnel the results through one queue or lock before calling [`admit`].
///
/// [`admit`]: PredictionSmoother::admit
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionSmoother {
    config: SmootherConfig,
    history: VecDeque<Observation>,
    current_best: Option<Label>,
}

impl Default for PredictionSmoother {
    fn default() -> Self {
        let config = SmootherConfig::default();
        Self {
            history: VecDeque::with_capacity(config.window_size),
            config,
            current_best: None,
        }
    }
}

impl PredictionSmoother {
    pub fn new(config: SmootherConfig) -> Result<Self, SmootherError> {
        config.validate()?;

        Ok(Self {
            history: VecDeque::with_capacity(config.window_size),
            config,
            current_best: None,
        })
    }

    pub fn admit(&mut self, observation: Observation) -> Result<Option<Label>, SmootherError> {
        observation.validate()?;

        if observation.confidence <= self.config.admission_threshold {
            return Ok(self.current_best.clone());
        }

        while self.history.len() >= self.config.window_size {
            self.history.pop_front();
        }
        self.history.push_back(observation);

        self.current_best = self.vote();

        Ok(self.current_best.clone())
    }

    pub fn current(&self) -> Option<Label> {
        self.current_best.clone()
    }

    #[allow(dead_code)]
    pub fn reset(&mut self) {
        self.history.clear();
        self.current_best = None;
    }

    #[allow(dead_code)]
    pub fn state(&self) -> SmootherState {
        match self.current_best {
            Some(_) => SmootherState::Tracking,
            None => SmootherState::Empty,
        }
    }

    /// Admitted observations, oldest first.
    #[allow(dead_code)]
    pub fn history(&self) -> impl Iterator<Item = &Observation> {
        self.history.iter()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn config(&self) -> &SmootherConfig {
        &self.config
    }

    pub fn tally(&self) -> HashMap<&str, usize> {
        let mut tally = HashMap::new();
        for observation in &self.history {
            *tally.entry(observation.label.as_str()).or_insert(0) += 1;
        }
        tally
    }

    fn vote(&self) -> Option<Label> {
        let tally = self.tally();

        let mut best: Option<(&str, usize)> = None;

        // Walking the window oldest to newest with `>=` lets the latest
        // occurrence win among labels tied on count.
        for observation in &self.history {
            let label = observation.label.as_str();
            let count = tally.get(label).copied().unwrap_or(0);
            match best {
                Some((_, max)) if count < max => {}
                _ => best = Some((label, count)),
            }
        }

        best.map(|(label, _)| label.to_string())
    }
}
