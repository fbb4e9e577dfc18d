//! Test utilities for generation tests.
//!
//! Provides a scripted image backend that records every session and call, and
//! a store that always fails.

use async_trait::async_trait;
use backdrop_core::{GeneratedImage, GenerationParams, ReferenceImage, StoredImage};
use backdrop_error::{
    BackdropResult, EmptyGenerationError, ServiceError, ServiceErrorKind, WriteError,
    WriteErrorKind,
};
use backdrop_interface::{ImageBackend, ImageStore};
use image::{ImageFormat, Rgb, RgbImage};
use std::collections::VecDeque;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

/// What the mock backend does on a given call.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockBehavior {
    /// Return a generated image
    Succeed,
    /// Return no image
    Empty,
    /// Fail with an HTTP status
    HttpStatus(u16),
}

/// Something the mock backend observed, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockEvent {
    /// `new_session` returned session `id`
    SessionStarted(usize),
    /// `generate` ran in session `session` with `prompt`
    Generated {
        /// Session the call ran in
        session: usize,
        /// Prompt text received
        prompt: String,
        /// Width of the reference received
        reference_width: u32,
    },
}

/// Session handle issued by [`MockBackend`].
#[derive(Debug)]
pub struct MockSession {
    id: usize,
}

/// Scripted backend. Calls beyond the script succeed.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    events: Arc<Mutex<Vec<MockEvent>>>,
    script: Arc<Mutex<VecDeque<MockBehavior>>>,
    sessions: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose n-th generate call follows the n-th behavior.
    pub fn scripted(behaviors: Vec<MockBehavior>) -> Self {
        let backend = Self::default();
        *backend.script.lock().expect("script lock") = behaviors.into();
        backend
    }

    pub fn events(&self) -> Vec<MockEvent> {
        self.events.lock().expect("events lock").clone()
    }

    pub fn session_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, MockEvent::SessionStarted(_)))
            .count()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                MockEvent::Generated { prompt, .. } => Some(prompt),
                MockEvent::SessionStarted(_) => None,
            })
            .collect()
    }
}

#[async_trait]
impl ImageBackend for MockBackend {
    type Session = MockSession;

    fn new_session(&self) -> MockSession {
        let mut sessions = self.sessions.lock().expect("sessions lock");
        let id = *sessions;
        *sessions += 1;
        self.events
            .lock()
            .expect("events lock")
            .push(MockEvent::SessionStarted(id));
        MockSession { id }
    }

    async fn generate(
        &self,
        session: MockSession,
        prompt: &str,
        reference: ReferenceImage,
        _params: &GenerationParams,
    ) -> BackdropResult<GeneratedImage> {
        self.events
            .lock()
            .expect("events lock")
            .push(MockEvent::Generated {
                session: session.id,
                prompt: prompt.to_string(),
                reference_width: *reference.width(),
            });

        let behavior = self
            .script
            .lock()
            .expect("script lock")
            .pop_front()
            .unwrap_or(MockBehavior::Succeed);

        match behavior {
            MockBehavior::Succeed => Ok(GeneratedImage::new(png_bytes(4, 5), 4, 5)),
            MockBehavior::Empty => Err(EmptyGenerationError::new("No image generated").into()),
            MockBehavior::HttpStatus(status_code) => {
                Err(ServiceError::new(ServiceErrorKind::HttpStatus {
                    status_code,
                    message: "mock failure".to_string(),
                })
                .into())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-image-v1"
    }
}

/// Store that rejects every write.
#[derive(Debug, Clone, Default)]
pub struct FailingStore;

#[async_trait]
impl ImageStore for FailingStore {
    async fn persist(
        &self,
        _image: &GeneratedImage,
        slide_index: usize,
        trope_id: &str,
    ) -> BackdropResult<StoredImage> {
        Err(WriteError::new(WriteErrorKind::Write {
            path: format!("slide_{}_{}.png", slide_index + 1, trope_id),
            message: "No space left on device".to_string(),
        })
        .into())
    }

    async fn load(&self, file_name: &str) -> BackdropResult<Vec<u8>> {
        Err(WriteError::new(WriteErrorKind::NotFound(file_name.to_string())).into())
    }
}

/// A real PNG of the given size.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_pixel(width, height, Rgb([180, 10, 10]));
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .expect("encode png fixture");
    buffer.into_inner()
}
