//! Poll-to-completion loop for video generation jobs.

use crate::{Clock, ModelGateway, VideoJob};
use murillo_error::{GatewayError, GatewayErrorKind, MurilloResult};
use std::time::Duration;

/// Fixed interval between polls of a running video job.
pub const VIDEO_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Drive a video job to completion, returning the download URI.
///
/// Polls at [`VIDEO_POLL_INTERVAL`] on the injected clock until the job
/// reports done. A terminal response without a playable URI fails with
/// `VideoGenerationFailed`.
#[tracing::instrument(skip(gateway, clock), fields(operation = %job.operation_name))]
pub async fn await_video_completion<G, C>(
    gateway: &G,
    clock: &C,
    job: &VideoJob,
) -> MurilloResult<String>
where
    G: ModelGateway + ?Sized,
    C: Clock + ?Sized,
{
    loop {
        let status = gateway.poll_video_job(job).await?;
        if status.done {
            return status.video_uri.ok_or_else(|| {
                GatewayError::new(GatewayErrorKind::VideoGenerationFailed(
                    "job completed without a download link".to_string(),
                ))
                .into()
            });
        }
        tracing::debug!("Video job still running, sleeping before next poll");
        clock.sleep(VIDEO_POLL_INTERVAL).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{VideoJobStatus, traits::ModelGateway};
    use async_trait::async_trait;
    use murillo_core::{AspectRatio, MediaData};
    use serde_json::Value as JsonValue;
    use std::sync::Mutex;

    /// Gateway stub that yields a scripted sequence of poll results.
    struct PollingStub {
        polls: Mutex<Vec<VideoJobStatus>>,
    }

    #[async_trait]
    impl ModelGateway for PollingStub {
        async fn generate_structured(
            &self,
            _: &str,
            _: &str,
            _: &JsonValue,
            _: &[MediaData],
            _: Option<f32>,
        ) -> MurilloResult<JsonValue> {
            unimplemented!("not used in poll tests")
        }

        async fn generate_text(&self, _: &str, _: &str, _: Option<f32>) -> MurilloResult<String> {
            unimplemented!("not used in poll tests")
        }

        async fn generate_image(&self, _: &str, _: AspectRatio) -> MurilloResult<MediaData> {
            unimplemented!("not used in poll tests")
        }

        async fn mutate_image(&self, _: &MediaData, _: &str) -> MurilloResult<MediaData> {
            unimplemented!("not used in poll tests")
        }

        async fn start_video_job(&self, _: &MediaData, _: &str) -> MurilloResult<VideoJob> {
            unimplemented!("not used in poll tests")
        }

        async fn poll_video_job(&self, _: &VideoJob) -> MurilloResult<VideoJobStatus> {
            Ok(self.polls.lock().unwrap().remove(0))
        }
    }

    /// Clock that records requested sleeps instead of waiting.
    #[derive(Default)]
    struct RecordingClock {
        sleeps: Mutex<Vec<Duration>>,
    }

    #[async_trait]
    impl Clock for RecordingClock {
        async fn sleep(&self, duration: Duration) {
            self.sleeps.lock().unwrap().push(duration);
        }
    }

    fn job() -> VideoJob {
        VideoJob {
            operation_name: "operations/test".to_string(),
        }
    }

    #[tokio::test]
    async fn polls_until_done_with_fixed_interval() {
        let gateway = PollingStub {
            polls: Mutex::new(vec![
                VideoJobStatus {
                    done: false,
                    video_uri: None,
                },
                VideoJobStatus {
                    done: false,
                    video_uri: None,
                },
                VideoJobStatus {
                    done: true,
                    video_uri: Some("https://video.example/clip.mp4".to_string()),
                },
            ]),
        };
        let clock = RecordingClock::default();

        let uri = await_video_completion(&gateway, &clock, &job())
            .await
            .unwrap();
        assert_eq!(uri, "https://video.example/clip.mp4");

        let sleeps = clock.sleeps.lock().unwrap();
        assert_eq!(sleeps.as_slice(), &[VIDEO_POLL_INTERVAL; 2]);
    }

    #[tokio::test]
    async fn done_without_uri_fails() {
        let gateway = PollingStub {
            polls: Mutex::new(vec![VideoJobStatus {
                done: true,
                video_uri: None,
            }]),
        };
        let clock = RecordingClock::default();

        let err = await_video_completion(&gateway, &clock, &job())
            .await
            .unwrap_err();
        assert!(format!("{}", err).contains("Video generation failed"));
    }
}
