//! Pest detection flow: image selection, the simulated analysis task, and
//! the mock results it yields.

use base64::{engine::general_purpose, Engine as _};
use futures::future::{abortable, AbortHandle, Abortable, FutureExt, LocalBoxFuture};
use serde::Deserialize;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn badge_class(self) -> &'static str {
        match self {
            Severity::High => "badge badge-danger",
            Severity::Medium => "badge badge-warning",
            Severity::Low => "badge badge-success",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Urgency {
    Immediate,
    #[serde(rename = "Within 3 days")]
    WithinThreeDays,
    #[serde(rename = "Within a week")]
    WithinAWeek,
}

impl Urgency {
    pub fn label(self) -> &'static str {
        match self {
            Urgency::Immediate => "Immediate",
            Urgency::WithinThreeDays => "Within 3 days",
            Urgency::WithinAWeek => "Within a week",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Urgency::Immediate => "⚡",
            Urgency::WithinThreeDays | Urgency::WithinAWeek => "⏱",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetectionResult {
    pub pest: String,
    pub confidence: u8,
    pub severity: Severity,
    pub treatment: String,
    pub prevention: Vec<String>,
    pub urgency: Urgency,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PestContent {
    pub results: Vec<DetectionResult>,
    pub tips: Vec<String>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PreviewError {
    #[error("not an image: {0:?}")]
    NotAnImage(String),
    #[error("file is empty")]
    Empty,
}

/// A picked image held in memory as a `data:` URL. Never uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePreview {
    pub name: String,
    pub data_url: String,
}

impl ImagePreview {
    pub fn from_bytes(name: &str, mime_type: &str, bytes: &[u8]) -> Result<Self, PreviewError> {
        let mime_type = mime_type.trim().to_ascii_lowercase();
        if !mime_type.starts_with("image/") {
            return Err(PreviewError::NotAnImage(mime_type));
        }
        if bytes.is_empty() {
            return Err(PreviewError::Empty);
        }
        let data = general_purpose::STANDARD.encode(bytes);
        Ok(Self {
            name: name.to_string(),
            data_url: format!("data:{mime_type};base64,{data}"),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Empty,
    Ready,
    Analyzing,
    Complete,
}

/// Identifies one analysis run so a completion can only land on the run that
/// started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PestDetection {
    image: Option<ImagePreview>,
    phase: Phase,
    results: Vec<DetectionResult>,
    runs: u64,
}

impl PestDetection {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn image(&self) -> Option<&ImagePreview> {
        self.image.as_ref()
    }

    pub fn results(&self) -> &[DetectionResult] {
        &self.results
    }

    pub fn is_analyzing(&self) -> bool {
        self.phase == Phase::Analyzing
    }

    /// A new image always discards earlier results and any run in flight.
    pub fn select_image(&mut self, image: ImagePreview) {
        self.image = Some(image);
        self.results.clear();
        self.phase = Phase::Ready;
        self.runs += 1;
    }

    pub fn remove_image(&mut self) {
        self.image = None;
        self.results.clear();
        self.phase = Phase::Empty;
        self.runs += 1;
    }

    /// Starts a run. Returns `None` with no image or while a run is active.
    pub fn begin_analysis(&mut self) -> Option<Ticket> {
        if self.image.is_none() || self.phase == Phase::Analyzing {
            return None;
        }
        self.runs += 1;
        self.phase = Phase::Analyzing;
        self.results.clear();
        Some(Ticket(self.runs))
    }

    /// Applies results for the run `ticket` started. Stale or repeated
    /// completions are rejected.
    pub fn complete(&mut self, ticket: Ticket, results: Vec<DetectionResult>) -> bool {
        if self.phase != Phase::Analyzing || ticket.0 != self.runs {
            return false;
        }
        self.results = results;
        self.phase = Phase::Complete;
        true
    }

    /// Abandons the run in flight, going back to `Ready`.
    pub fn abandon(&mut self) {
        if self.phase == Phase::Analyzing {
            self.phase = Phase::Ready;
            self.runs += 1;
        }
    }
}

/// Handle to a scheduled analysis. Dropping it cancels the task.
#[derive(Debug)]
pub struct AnalysisHandle(AbortHandle);

impl AnalysisHandle {
    pub fn cancel(&self) {
        self.0.abort();
    }
}

impl Drop for AnalysisHandle {
    fn drop(&mut self) {
        self.0.abort();
    }
}

pub type AnalysisTask = Abortable<LocalBoxFuture<'static, Vec<DetectionResult>>>;

/// Schedules the stand-in for a classification call: after `delay` the task
/// yields `results`, unless the handle was cancelled or dropped first.
pub fn schedule_analysis(
    delay: Duration,
    results: Vec<DetectionResult>,
) -> (AnalysisTask, AnalysisHandle) {
    let work = async move {
        sleep(delay).await;
        results
    };
    let (task, handle) = abortable(work.boxed_local());
    (task, AnalysisHandle(handle))
}

/// The run a screen is waiting on. Clones share one slot, so the screen's
/// teardown hook and its spawned completion see the same run.
#[derive(Debug, Clone, Default)]
pub struct AnalysisSlot(Rc<RefCell<Option<(Ticket, AnalysisHandle)>>>);

impl AnalysisSlot {
    /// Holds a new run. A run still held is cancelled.
    pub fn hold(&self, ticket: Ticket, handle: AnalysisHandle) {
        let previous = self.0.borrow_mut().replace((ticket, handle));
        if let Some((_, handle)) = previous {
            handle.cancel();
        }
    }

    /// Cancels the held run, if any. Returns whether one was held.
    pub fn cancel(&self) -> bool {
        match self.0.borrow_mut().take() {
            Some((_, handle)) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    /// Releases the run `ticket` once its task has yielded. A newer run
    /// stays held.
    pub fn finish(&self, ticket: Ticket) {
        let mut slot = self.0.borrow_mut();
        if matches!(slot.as_ref(), Some((held, _)) if *held == ticket) {
            slot.take();
        }
    }

    pub fn is_holding(&self) -> bool {
        self.0.borrow().is_some()
    }
}

async fn sleep(delay: Duration) {
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(delay).await;
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(delay).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aphids() -> DetectionResult {
        DetectionResult {
            pest: "Aphids".into(),
            confidence: 92,
            severity: Severity::Medium,
            treatment: "Neem oil".into(),
            prevention: vec!["Ladybugs".into()],
            urgency: Urgency::WithinThreeDays,
        }
    }

    fn preview() -> ImagePreview {
        ImagePreview::from_bytes("leaf.jpg", "image/jpeg", &[0xFF, 0xD8, 0xFF]).unwrap()
    }

    #[test]
    fn preview_is_a_data_url() {
        let p = ImagePreview::from_bytes("leaf.png", "Image/PNG", b"abc").unwrap();
        assert_eq!(p.data_url, "data:image/png;base64,YWJj");
    }

    #[test]
    fn preview_rejects_non_images() {
        assert_eq!(
            ImagePreview::from_bytes("notes.pdf", "application/pdf", b"%PDF"),
            Err(PreviewError::NotAnImage("application/pdf".into()))
        );
        assert_eq!(ImagePreview::from_bytes("x.png", "image/png", b""), Err(PreviewError::Empty));
    }

    #[test]
    fn selecting_an_image_makes_it_ready_without_results() {
        let mut flow = PestDetection::default();
        assert_eq!(flow.phase(), Phase::Empty);
        flow.select_image(preview());
        assert_eq!(flow.phase(), Phase::Ready);
        assert!(flow.results().is_empty());
    }

    #[test]
    fn analysis_needs_an_image() {
        let mut flow = PestDetection::default();
        assert!(flow.begin_analysis().is_none());
    }

    #[test]
    fn completion_lands_exactly_once() {
        let mut flow = PestDetection::default();
        flow.select_image(preview());
        let ticket = flow.begin_analysis().unwrap();
        assert!(flow.is_analyzing());
        assert!(flow.begin_analysis().is_none());

        assert!(flow.complete(ticket, vec![aphids()]));
        assert_eq!(flow.phase(), Phase::Complete);
        assert_eq!(flow.results().len(), 1);
        assert!(!flow.complete(ticket, vec![aphids(), aphids()]));
        assert_eq!(flow.results().len(), 1);
    }

    #[test]
    fn new_image_invalidates_run_in_flight() {
        let mut flow = PestDetection::default();
        flow.select_image(preview());
        let ticket = flow.begin_analysis().unwrap();
        flow.select_image(preview());
        assert!(!flow.complete(ticket, vec![aphids()]));
        assert_eq!(flow.phase(), Phase::Ready);
    }

    #[test]
    fn reanalysis_after_completion() {
        let mut flow = PestDetection::default();
        flow.select_image(preview());
        let first = flow.begin_analysis().unwrap();
        flow.complete(first, vec![aphids()]);
        let second = flow.begin_analysis().unwrap();
        assert!(flow.results().is_empty());
        assert!(!flow.complete(first, vec![]));
        assert!(flow.complete(second, vec![]));
    }

    #[test]
    fn remove_image_resets() {
        let mut flow = PestDetection::default();
        flow.select_image(preview());
        let ticket = flow.begin_analysis().unwrap();
        flow.remove_image();
        assert_eq!(flow.phase(), Phase::Empty);
        assert!(flow.image().is_none());
        assert!(!flow.complete(ticket, vec![aphids()]));
    }

    #[tokio::test(start_paused = true)]
    async fn scheduled_analysis_yields_after_delay() {
        let started = tokio::time::Instant::now();
        let (task, _handle) = schedule_analysis(Duration::from_millis(3000), vec![aphids()]);
        let results = task.await.expect("task was not cancelled");
        assert!(started.elapsed() >= Duration::from_millis(3000));
        assert_eq!(results, vec![aphids()]);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_handle_cancels_analysis() {
        let (task, handle) = schedule_analysis(Duration::from_millis(3000), vec![aphids()]);
        drop(handle);
        assert!(task.await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_mid_flight() {
        let (task, handle) = schedule_analysis(Duration::from_millis(3000), vec![aphids()]);
        let cancel_early = async {
            tokio::time::sleep(Duration::from_millis(1000)).await;
            handle.cancel();
        };
        let (outcome, ()) = tokio::join!(task, cancel_early);
        assert!(outcome.is_err());
    }

    /// Mirrors the screen: the spawned completion only applies results when
    /// the task yields.
    async fn drive(
        flow: &mut PestDetection,
        ticket: Ticket,
        task: AnalysisTask,
        slot: &AnalysisSlot,
    ) {
        if let Ok(results) = task.await {
            slot.finish(ticket);
            flow.complete(ticket, results);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_with_run_in_flight_never_completes() {
        let mut flow = PestDetection::default();
        flow.select_image(preview());
        let ticket = flow.begin_analysis().unwrap();
        let slot = AnalysisSlot::default();
        let (task, handle) = schedule_analysis(Duration::from_millis(3000), vec![aphids()]);
        slot.hold(ticket, handle);

        let teardown = slot.clone();
        let unmount = async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            assert!(teardown.cancel());
        };
        let ((), ()) = tokio::join!(drive(&mut flow, ticket, task, &slot), unmount);
        tokio::time::advance(Duration::from_millis(5000)).await;

        assert_eq!(flow.phase(), Phase::Analyzing);
        assert!(flow.results().is_empty());
        assert!(!slot.is_holding());
    }

    #[tokio::test(start_paused = true)]
    async fn finished_run_releases_the_slot() {
        let mut flow = PestDetection::default();
        flow.select_image(preview());
        let ticket = flow.begin_analysis().unwrap();
        let slot = AnalysisSlot::default();
        let (task, handle) = schedule_analysis(Duration::from_millis(3000), vec![aphids()]);
        slot.hold(ticket, handle);

        drive(&mut flow, ticket, task, &slot).await;
        assert_eq!(flow.phase(), Phase::Complete);
        assert!(!slot.is_holding());
        assert!(!slot.cancel());
    }

    #[tokio::test(start_paused = true)]
    async fn holding_a_new_run_cancels_the_old_one() {
        let mut flow = PestDetection::default();
        flow.select_image(preview());
        let first = flow.begin_analysis().unwrap();
        let slot = AnalysisSlot::default();
        let (old_task, old_handle) = schedule_analysis(Duration::from_millis(3000), vec![aphids()]);
        slot.hold(first, old_handle);

        flow.abandon();
        let second = flow.begin_analysis().unwrap();
        let (_new_task, new_handle) = schedule_analysis(Duration::from_millis(3000), vec![]);
        slot.hold(second, new_handle);

        assert!(old_task.await.is_err());
        slot.finish(first);
        assert!(slot.is_holding());
    }
}
