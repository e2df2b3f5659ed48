//! Scripted mock gateway for pipeline testing.
//!
//! Tests queue one response per expected external call and assert on the
//! recorded call order afterwards, without making actual API calls.

use async_trait::async_trait;
use murillo_core::{AspectRatio, MediaData};
use murillo_error::{GatewayError, GatewayErrorKind, MurilloResult};
use murillo_gateway::{Clock, ModelGateway, VideoJob, VideoJobStatus};
use serde_json::Value as JsonValue;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One recorded external call with the arguments the gateway saw.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum CallRecord {
    Structured {
        system: String,
        prompt: String,
        schema: JsonValue,
        parts: usize,
        temperature: Option<f32>,
    },
    Text {
        system: String,
        prompt: String,
    },
    Image {
        prompt: String,
        aspect: AspectRatio,
    },
    Mutate {
        instruction: String,
    },
    StartVideo {
        prompt: String,
    },
    PollVideo,
}

impl CallRecord {
    /// Short label for call-order assertions.
    pub fn label(&self) -> &'static str {
        match self {
            CallRecord::Structured { .. } => "structured",
            CallRecord::Text { .. } => "text",
            CallRecord::Image { .. } => "image",
            CallRecord::Mutate { .. } => "mutate",
            CallRecord::StartVideo { .. } => "start_video",
            CallRecord::PollVideo => "poll_video",
        }
    }
}

#[derive(Default)]
struct Inner {
    structured: Mutex<VecDeque<Result<JsonValue, GatewayErrorKind>>>,
    text: Mutex<VecDeque<Result<String, GatewayErrorKind>>>,
    images: Mutex<VecDeque<Result<MediaData, GatewayErrorKind>>>,
    mutations: Mutex<VecDeque<Result<MediaData, GatewayErrorKind>>>,
    polls: Mutex<VecDeque<VideoJobStatus>>,
    calls: Mutex<Vec<CallRecord>>,
}

/// Gateway mock with per-capability response queues and a shared call log.
///
/// Clones share state, so a test can hand a clone to the pipeline and keep
/// the original for assertions.
#[derive(Clone, Default)]
pub struct MockGateway {
    inner: Arc<Inner>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful structured response.
    pub fn push_structured(&self, value: JsonValue) -> &Self {
        self.inner.structured.lock().unwrap().push_back(Ok(value));
        self
    }

    /// Queue a failing structured response.
    pub fn fail_structured(&self, error: GatewayErrorKind) -> &Self {
        self.inner.structured.lock().unwrap().push_back(Err(error));
        self
    }

    /// Queue a successful plain-text response.
    pub fn push_text(&self, text: impl Into<String>) -> &Self {
        self.inner.text.lock().unwrap().push_back(Ok(text.into()));
        self
    }

    /// Queue a successful image response.
    pub fn push_image(&self, image: MediaData) -> &Self {
        self.inner.images.lock().unwrap().push_back(Ok(image));
        self
    }

    /// Queue a failing image response.
    #[allow(dead_code)]
    pub fn fail_image(&self, error: GatewayErrorKind) -> &Self {
        self.inner.images.lock().unwrap().push_back(Err(error));
        self
    }

    /// Queue a successful image mutation response.
    #[allow(dead_code)]
    pub fn push_mutation(&self, image: MediaData) -> &Self {
        self.inner.mutations.lock().unwrap().push_back(Ok(image));
        self
    }

    /// Queue one video poll result.
    #[allow(dead_code)]
    pub fn push_poll(&self, done: bool, video_uri: Option<&str>) -> &Self {
        self.inner.polls.lock().unwrap().push_back(VideoJobStatus {
            done,
            video_uri: video_uri.map(str::to_string),
        });
        self
    }

    /// Every call recorded so far, in order.
    pub fn calls(&self) -> Vec<CallRecord> {
        self.inner.calls.lock().unwrap().clone()
    }

    /// Call labels in order, for compact order assertions.
    pub fn call_labels(&self) -> Vec<&'static str> {
        self.calls().iter().map(CallRecord::label).collect()
    }

    fn record(&self, call: CallRecord) {
        self.inner.calls.lock().unwrap().push(call);
    }

    fn take<T>(
        queue: &Mutex<VecDeque<Result<T, GatewayErrorKind>>>,
        capability: &str,
    ) -> MurilloResult<T> {
        match queue.lock().unwrap().pop_front() {
            Some(Ok(value)) => Ok(value),
            Some(Err(kind)) => Err(GatewayError::new(kind).into()),
            None => Err(GatewayError::new(GatewayErrorKind::Transport(format!(
                "mock {capability} queue exhausted: unexpected extra call"
            )))
            .into()),
        }
    }
}

#[async_trait]
impl ModelGateway for MockGateway {
    async fn generate_structured(
        &self,
        system_instruction: &str,
        prompt: &str,
        schema: &JsonValue,
        parts: &[MediaData],
        temperature: Option<f32>,
    ) -> MurilloResult<JsonValue> {
        self.record(CallRecord::Structured {
            system: system_instruction.to_string(),
            prompt: prompt.to_string(),
            schema: schema.clone(),
            parts: parts.len(),
            temperature,
        });
        Self::take(&self.inner.structured, "structured")
    }

    async fn generate_text(
        &self,
        system_instruction: &str,
        prompt: &str,
        _temperature: Option<f32>,
    ) -> MurilloResult<String> {
        self.record(CallRecord::Text {
            system: system_instruction.to_string(),
            prompt: prompt.to_string(),
        });
        Self::take(&self.inner.text, "text")
    }

    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> MurilloResult<MediaData> {
        self.record(CallRecord::Image {
            prompt: prompt.to_string(),
            aspect: aspect_ratio,
        });
        Self::take(&self.inner.images, "image")
    }

    async fn mutate_image(&self, _image: &MediaData, instruction: &str) -> MurilloResult<MediaData> {
        self.record(CallRecord::Mutate {
            instruction: instruction.to_string(),
        });
        Self::take(&self.inner.mutations, "mutation")
    }

    async fn start_video_job(&self, _image: &MediaData, prompt: &str) -> MurilloResult<VideoJob> {
        self.record(CallRecord::StartVideo {
            prompt: prompt.to_string(),
        });
        Ok(VideoJob {
            operation_name: "operations/mock-video".to_string(),
        })
    }

    async fn poll_video_job(&self, _job: &VideoJob) -> MurilloResult<VideoJobStatus> {
        self.record(CallRecord::PollVideo);
        match self.inner.polls.lock().unwrap().pop_front() {
            Some(status) => Ok(status),
            None => Err(GatewayError::new(GatewayErrorKind::Transport(
                "mock poll queue exhausted: unexpected extra poll".to_string(),
            ))
            .into()),
        }
    }
}

/// Clock that records requested sleeps and returns immediately.
#[derive(Clone, Default)]
pub struct TestClock {
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl TestClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every sleep requested so far, in order.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

#[async_trait]
impl Clock for TestClock {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}
