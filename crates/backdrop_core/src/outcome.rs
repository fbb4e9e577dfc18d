//! Per-slide outcomes and batch reports.

use derive_getters::Getters;

/// How a single slide ended.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OutcomeStatus {
    /// Generated and stored
    Generated {
        /// URL of the stored background
        image_url: String,
    },
    /// Any failure along the way
    Failed {
        /// Client-facing error message
        error: String,
    },
}

/// Result of one slide within a batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, derive_new::new)]
pub struct SlideOutcome {
    /// Zero-based position in the batch
    slide_index: usize,
    /// Requested trope key, as sent by the client
    #[new(into)]
    trope_id: String,
    /// Success or failure
    status: OutcomeStatus,
}

impl SlideOutcome {
    /// Records a stored background.
    pub fn generated(
        slide_index: usize,
        trope_id: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self::new(
            slide_index,
            trope_id,
            OutcomeStatus::Generated {
                image_url: image_url.into(),
            },
        )
    }

    /// Records a failure.
    pub fn failed(slide_index: usize, trope_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self::new(
            slide_index,
            trope_id,
            OutcomeStatus::Failed {
                error: error.into(),
            },
        )
    }

    /// Whether the slide was generated and stored.
    pub fn is_success(&self) -> bool {
        matches!(self.status, OutcomeStatus::Generated { .. })
    }

    /// URL of the stored background, if any.
    pub fn image_url(&self) -> Option<&str> {
        match &self.status {
            OutcomeStatus::Generated { image_url } => Some(image_url),
            OutcomeStatus::Failed { .. } => None,
        }
    }

    /// Error message, if the slide failed.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            OutcomeStatus::Generated { .. } => None,
            OutcomeStatus::Failed { error } => Some(error),
        }
    }
}

/// Aggregate result of a batch, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct BatchReport {
    /// One outcome per requested trope
    outcomes: Vec<SlideOutcome>,
    /// Number of requested tropes
    total: usize,
}

impl BatchReport {
    /// Starts an empty report for a batch of `total` slides.
    pub fn new(total: usize) -> Self {
        Self {
            outcomes: Vec::with_capacity(total),
            total,
        }
    }

    /// Appends the next outcome.
    pub fn record(&mut self, outcome: SlideOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of outcomes that succeeded.
    pub fn successful(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of outcomes that failed.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.successful()
    }
}
