//! Fixed-cadence analysis scheduling over the live video feed.
//!
//! A recurring timer attempts an analysis cycle every few seconds. At most
//! one cycle is ever in flight (ticks that land mid-cycle are dropped, not
//! queued), and once a subject has been fully analyzed no further full
//! cycle runs until that subject leaves the frame.
//!
//! The in-flight flag is a `tokio::sync::Mutex` held for the whole cycle:
//! `try_lock` is the synchronous check-and-set, and the guard's drop is the
//! guaranteed release on every exit path, including errors.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::time::MissedTickBehavior;

use crate::config::{ClassificationConfig, SchedulerConfig};
use crate::perception::{crop_subject, FaceDetector, StyleClassifier, VideoSource};
use crate::suggestions;
use crate::types::{
    AnalysisResult, Detection, OccasionCategory, ScoredLabel, StyleCategory, StyleClassification,
};

/// How a single scheduler tick resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A cycle was already in flight; this tick was dropped
    Busy,
    /// The current subject is already fully analyzed; nothing to do
    AlreadyAnalyzed,
    /// The video source has no frame yet
    NotReady,
    /// Detection ran and found nobody; the published result was cleared
    NoSubject,
    /// Detection succeeded but the style model is not loaded yet
    Partial,
    /// The full two-stage analysis finished and was published
    Complete,
    /// A perception call failed; the cycle was a no-op
    Failed,
}

/// Drives the two-stage perception pipeline on a fixed cadence.
pub struct AnalysisScheduler {
    video: Arc<dyn VideoSource>,
    detector: Arc<dyn FaceDetector>,
    classifier: Arc<dyn StyleClassifier>,
    config: SchedulerConfig,
    classification: ClassificationConfig,

    /// In-flight guard; held for the full duration of one cycle.
    cycle_lock: Mutex<()>,
    /// Set after a full analysis; cleared when the subject disappears.
    completed: AtomicBool,
    results: watch::Sender<Option<AnalysisResult>>,
}

impl AnalysisScheduler {
    pub fn new(
        video: Arc<dyn VideoSource>,
        detector: Arc<dyn FaceDetector>,
        classifier: Arc<dyn StyleClassifier>,
        config: SchedulerConfig,
        classification: ClassificationConfig,
    ) -> Self {
        let (results, _) = watch::channel(None);
        Self {
            video,
            detector,
            classifier,
            config,
            classification,
            cycle_lock: Mutex::new(()),
            completed: AtomicBool::new(false),
            results,
        }
    }

    /// Observe published analysis results.
    ///
    /// `None` means no subject is currently present.
    pub fn subscribe(&self) -> watch::Receiver<Option<AnalysisResult>> {
        self.results.subscribe()
    }

    /// Run the timer loop until the owning task is dropped or aborted.
    ///
    /// Ticks that would overlap a long-running cycle are skipped, never
    /// queued.
    pub async fn run(self: Arc<Self>) {
        let mut interval = tokio::time::interval(Duration::from_millis(self.config.interval_ms));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tracing::info!(
            "Analysis scheduler running (every {} ms)",
            self.config.interval_ms
        );
        loop {
            interval.tick().await;
            let outcome = self.tick().await;
            tracing::trace!("Cycle tick: {outcome:?}");
        }
    }

    /// Attempt one analysis cycle.
    pub async fn tick(&self) -> TickOutcome {
        // Synchronous check-and-set: a cycle in flight rejects this tick.
        let Ok(_cycle) = self.cycle_lock.try_lock() else {
            return TickOutcome::Busy;
        };

        if self.completed.load(Ordering::SeqCst) {
            return TickOutcome::AlreadyAnalyzed;
        }

        let Some(frame) = self.video.current_frame() else {
            return TickOutcome::NotReady;
        };

        let detections = match self.detector.detect(&frame).await {
            Ok(detections) => detections,
            Err(e) => {
                tracing::warn!("Detection failed, skipping cycle: {e}");
                return TickOutcome::Failed;
            }
        };

        let Some(primary) = select_primary(detections) else {
            // Subject gone: clear the result and re-arm full analysis.
            self.results.send_replace(None);
            self.completed.store(false, Ordering::SeqCst);
            return TickOutcome::NoSubject;
        };

        // Two-phase publication: demographics first, style when ready.
        self.results.send_replace(Some(AnalysisResult::DetectedOnly {
            detection: primary.clone(),
        }));

        if !self.classifier.is_ready() {
            tracing::debug!("Style model not loaded yet, deferring classification");
            return TickOutcome::Partial;
        }

        let crop = crop_subject(&frame, &primary.region, self.config.crop_margin);

        let style_labels: Vec<String> = StyleCategory::ALL
            .iter()
            .map(|c| c.prompt().to_string())
            .collect();
        let occasion_labels: Vec<String> = OccasionCategory::ALL
            .iter()
            .map(|c| c.prompt().to_string())
            .collect();

        let (style_scores, occasion_scores) = match tokio::try_join!(
            self.classifier.classify(&crop, &style_labels),
            self.classifier.classify(&crop, &occasion_labels),
        ) {
            Ok(pair) => pair,
            Err(e) => {
                tracing::warn!("Classification failed, skipping cycle: {e}");
                return TickOutcome::Failed;
            }
        };

        let classification = StyleClassification {
            styles: collect_labels(
                style_scores,
                StyleCategory::from_prompt,
                self.classification.max_styles,
            ),
            occasions: collect_labels(
                occasion_scores,
                OccasionCategory::from_prompt,
                self.classification.max_occasions,
            ),
        };
        let suggestions = suggestions::synthesize(&primary, &classification);

        self.results.send_replace(Some(AnalysisResult::FullyAnalyzed {
            detection: primary,
            classification,
            suggestions,
        }));
        self.completed.store(true, Ordering::SeqCst);
        TickOutcome::Complete
    }
}

/// Pick the highest-confidence subject.
///
/// The detector's output order is not trusted; ties keep the earlier
/// detection.
fn select_primary(detections: Vec<Detection>) -> Option<Detection> {
    let mut detections = detections.into_iter();
    let mut primary = detections.next()?;
    for candidate in detections {
        if candidate.score > primary.score {
            primary = candidate;
        }
    }
    Some(primary)
}

/// Parse, sort descending, and truncate classifier scores.
fn collect_labels<T: Copy>(
    scores: Vec<(String, f32)>,
    parse: impl Fn(&str) -> Option<T>,
    limit: usize,
) -> Vec<ScoredLabel<T>> {
    let mut labels: Vec<ScoredLabel<T>> = scores
        .into_iter()
        .filter_map(|(label, score)| parse(&label).map(|label| ScoredLabel { label, score }))
        .collect();
    labels.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    labels.truncate(limit);
    labels
}
