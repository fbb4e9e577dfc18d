//! Single-slide and batch generation.

use backdrop_core::{
    BatchReport, GeneratedImage, GenerationParams, ReferenceSource, SlideOutcome, SlideRequest,
    StoredImage,
};
use backdrop_error::{BackdropResult, ValidationError};
use backdrop_interface::{ImageBackend, ImageStore};
use backdrop_media::ReferencePreparer;
use backdrop_prompts::PromptCatalog;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

/// Generates carousel backgrounds.
///
/// Slides are processed strictly one after another. Every slide gets its own
/// backend session, started right before its generation call, and a freshly
/// prepared copy of the reference cover.
///
/// Safe to share behind an `Arc` across concurrent requests: sessions are
/// created per call and never stored here.
#[derive(Debug)]
pub struct CarouselGenerator<B: ImageBackend, S: ImageStore> {
    backend: B,
    store: S,
    catalog: Arc<PromptCatalog>,
    preparer: ReferencePreparer,
    reference: Option<ReferenceSource>,
    params: GenerationParams,
}

impl<B: ImageBackend, S: ImageStore> CarouselGenerator<B, S> {
    /// Creates a generator with default parameters and no configured cover.
    pub fn new(backend: B, store: S, catalog: Arc<PromptCatalog>) -> Self {
        Self {
            backend,
            store,
            catalog,
            preparer: ReferencePreparer::new(),
            reference: None,
            params: GenerationParams::default(),
        }
    }

    /// Sets the cover used by [`run_single`](Self::run_single) and [`run_batch`](Self::run_batch).
    pub fn with_reference(mut self, reference: ReferenceSource) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Sets the parameters sent with every generation call.
    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Returns the prompt catalog.
    pub fn catalog(&self) -> &PromptCatalog {
        &self.catalog
    }

    /// Returns the configured cover, if any.
    pub fn reference(&self) -> Option<&ReferenceSource> {
        self.reference.as_ref()
    }

    /// Returns the generation parameters.
    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Returns the image backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the output store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Generates and stores one slide using the configured cover.
    ///
    /// # Errors
    ///
    /// Returns the first failure along the way: a `Validation` error without
    /// a configured cover, `Decode`, `Service`, `EmptyGeneration` or `Write`.
    #[instrument(skip(self), fields(trope_id = %request.trope_id(), slide_index = request.slide_index()))]
    pub async fn run_single(&self, request: &SlideRequest) -> BackdropResult<StoredImage> {
        info!(
            "Generating background for slide {} (trope: {})",
            request.slide_number(),
            request.trope_id()
        );

        let start = Instant::now();
        let result = self.generate_slide(request).await;
        match &result {
            Ok(stored) => info!(
                url = %stored.url(),
                duration_ms = start.elapsed().as_millis(),
                "Slide generated"
            ),
            Err(e) => error!(
                error = %e,
                duration_ms = start.elapsed().as_millis(),
                "Slide generation failed"
            ),
        }
        result
    }

    /// Generates and stores every trope in order, one slide per entry.
    ///
    /// A failing slide is recorded and the batch moves on; the report always
    /// has one outcome per input, in input order.
    #[instrument(skip(self, trope_ids), fields(total = trope_ids.len()))]
    pub async fn run_batch<T: AsRef<str>>(&self, trope_ids: &[T]) -> BatchReport {
        let total = trope_ids.len();
        let mut report = BatchReport::new(total);

        for (slide_index, trope_id) in trope_ids.iter().enumerate() {
            let trope_id = trope_id.as_ref();
            info!("Processing {}/{}: {}", slide_index + 1, total, trope_id);

            let request = SlideRequest::new(trope_id, slide_index);
            let outcome = match self.generate_slide(&request).await {
                Ok(stored) => SlideOutcome::generated(slide_index, trope_id, stored.url().as_str()),
                Err(e) => {
                    warn!(slide_index, trope_id, error = %e, "Slide failed, continuing batch");
                    SlideOutcome::failed(slide_index, trope_id, e.summary())
                }
            };
            report.record(outcome);
        }

        info!(
            total,
            successful = report.successful(),
            failed = report.failed(),
            "Batch complete"
        );
        report
    }

    /// Generates one background from an explicit cover without storing it.
    ///
    /// Used for per-request cover uploads.
    #[instrument(skip(self, reference), fields(reference = %reference.describe()))]
    pub async fn render(
        &self,
        trope_id: &str,
        reference: &ReferenceSource,
    ) -> BackdropResult<GeneratedImage> {
        self.produce(trope_id, Some(reference)).await
    }

    async fn generate_slide(&self, request: &SlideRequest) -> BackdropResult<StoredImage> {
        let image = self
            .produce(request.trope_id(), self.reference.as_ref())
            .await?;
        self.store
            .persist(&image, *request.slide_index(), request.trope_id())
            .await
    }

    /// Prompt lookup, session reset, cover preparation and one generation call.
    async fn produce(
        &self,
        trope_id: &str,
        reference: Option<&ReferenceSource>,
    ) -> BackdropResult<GeneratedImage> {
        let prompt = self.catalog.lookup(trope_id);
        if !self.catalog.contains(trope_id) {
            debug!(trope_id, "Unknown trope, using fallback prompt");
        }

        let session = self.backend.new_session();

        let source =
            reference.ok_or_else(|| ValidationError::new("No reference cover configured"))?;
        let reference = self.preparer.prepare(source).await?;

        self.backend
            .generate(session, prompt, reference, &self.params)
            .await
    }
}
