//! Comparison orchestration: two frames, one classifier, one verdict.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use vmatch_capture::SlotController;
use vmatch_classify::FrameClassifier;
use vmatch_models::{top_label, ComparisonReport, Verdict};

use crate::error::{CompareError, CompareResult};
use crate::extractor::extract_frame;

/// Drives classification of both slots' frames and derives the
/// verdict.
///
/// The classifier is attached once at startup (after the model loads)
/// and held for the page's lifetime. Until then every compare request
/// fails with [`CompareError::ModelUnavailable`] without touching
/// either slot's surface.
#[derive(Default)]
pub struct ComparisonOrchestrator {
    classifier: Option<Arc<dyn FrameClassifier>>,
}

impl ComparisonOrchestrator {
    /// An orchestrator with no model loaded yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classifier(classifier: Arc<dyn FrameClassifier>) -> Self {
        Self {
            classifier: Some(classifier),
        }
    }

    /// Attach the loaded model.
    pub fn set_classifier(&mut self, classifier: Arc<dyn FrameClassifier>) {
        self.classifier = Some(classifier);
    }

    pub fn is_model_loaded(&self) -> bool {
        self.classifier.is_some()
    }

    /// Compare the two slots' current frames by top-1 label equality.
    ///
    /// Preconditions: the model is loaded and both slots are ready.
    /// The result is computed fresh on every call; nothing is
    /// persisted beyond the returned report and a tracing record of
    /// both prediction sequences.
    pub async fn compare(
        &self,
        slot_a: &SlotController,
        slot_b: &SlotController,
    ) -> CompareResult<ComparisonReport> {
        let Some(classifier) = self.classifier.as_ref() else {
            warn!("compare requested before classifier model loaded");
            return Err(CompareError::ModelUnavailable);
        };

        for slot in [slot_a, slot_b] {
            if !slot.is_ready() {
                return Err(CompareError::SlotNotReady(slot.id()));
            }
        }

        let frame_a = extract_frame(slot_a.surface())?;
        let frame_b = extract_frame(slot_b.surface())?;

        let (predictions_a, predictions_b) = tokio::join!(
            classifier.classify(&frame_a),
            classifier.classify(&frame_b),
        );
        let predictions_a = predictions_a?;
        let predictions_b = predictions_b?;

        info!(slot = %slot_a.id(), predictions = ?predictions_a, "classified frame");
        info!(slot = %slot_b.id(), predictions = ?predictions_b, "classified frame");

        let label_a = top_label(&predictions_a).to_string();
        let label_b = top_label(&predictions_b).to_string();
        let verdict = Verdict::from_labels(&label_a, &label_b);
        info!(%label_a, %label_b, verdict = %verdict, "comparison complete");

        Ok(ComparisonReport {
            verdict,
            label_a,
            label_b,
            predictions_a,
            predictions_b,
            compared_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use vmatch_capture::{
        CameraDevice, CaptureError, CaptureResult, MediaStream, RecorderFactory,
        StreamConstraints, StreamRecorder, VideoSurface,
    };
    use vmatch_classify::{ClassifyResult, FrameClassifier};
    use vmatch_models::{Prediction, RasterFrame, RecordedClip, SlotId, UploadedFile};

    use super::*;

    /// Surface whose frames carry a tag byte so the stub classifier
    /// can tell the two slots apart regardless of call order.
    struct TaggedSurface {
        tag: u8,
        reads: Arc<AtomicUsize>,
    }

    impl VideoSurface for TaggedSurface {
        fn show_live(&mut self) {}
        fn assign_file(&mut self, _file: &UploadedFile) {}
        fn assign_clip(&mut self, _clip: &RecordedClip) {}
        fn clear(&mut self) {}

        fn frame_size(&self) -> (u32, u32) {
            (2, 2)
        }

        fn read_frame(&self) -> RasterFrame {
            self.reads.fetch_add(1, Ordering::SeqCst);
            RasterFrame::new(2, 2, vec![self.tag; 16])
        }
    }

    struct NoCamera;

    #[async_trait]
    impl CameraDevice for NoCamera {
        async fn request_stream(
            &self,
            _constraints: &StreamConstraints,
        ) -> CaptureResult<Box<dyn MediaStream>> {
            Err(CaptureError::CameraUnavailable("not wired in tests".into()))
        }
    }

    struct NoRecorders;

    impl RecorderFactory for NoRecorders {
        fn create_recorder(&self, _stream: &dyn MediaStream) -> Box<dyn StreamRecorder> {
            unreachable!("tests never record")
        }
    }

    /// Classifier returning a scripted sequence per frame tag.
    struct StubClassifier {
        by_tag: HashMap<u8, Vec<Prediction>>,
    }

    #[async_trait]
    impl FrameClassifier for StubClassifier {
        async fn classify(&self, frame: &RasterFrame) -> ClassifyResult<Vec<Prediction>> {
            let tag = frame.pixels.first().copied().unwrap_or(0);
            Ok(self.by_tag.get(&tag).cloned().unwrap_or_default())
        }
    }

    struct Fixture {
        slot_a: SlotController,
        slot_b: SlotController,
        reads_a: Arc<AtomicUsize>,
        reads_b: Arc<AtomicUsize>,
    }

    fn ready_slots() -> Fixture {
        let reads_a = Arc::new(AtomicUsize::new(0));
        let reads_b = Arc::new(AtomicUsize::new(0));
        let mut slot_a = SlotController::new(
            SlotId::A,
            Box::new(TaggedSurface {
                tag: 1,
                reads: reads_a.clone(),
            }),
            Arc::new(NoCamera),
            Arc::new(NoRecorders),
        );
        let mut slot_b = SlotController::new(
            SlotId::B,
            Box::new(TaggedSurface {
                tag: 2,
                reads: reads_b.clone(),
            }),
            Arc::new(NoCamera),
            Arc::new(NoRecorders),
        );
        slot_a.upload_file(UploadedFile::new("a.mp4"));
        slot_b.upload_file(UploadedFile::new("b.mp4"));
        Fixture {
            slot_a,
            slot_b,
            reads_a,
            reads_b,
        }
    }

    fn classifier(label_a: &[Prediction], label_b: &[Prediction]) -> Arc<StubClassifier> {
        let mut by_tag = HashMap::new();
        by_tag.insert(1, label_a.to_vec());
        by_tag.insert(2, label_b.to_vec());
        Arc::new(StubClassifier { by_tag })
    }

    #[tokio::test]
    async fn same_top_label_is_match() {
        let f = ready_slots();
        let orchestrator = ComparisonOrchestrator::with_classifier(classifier(
            &[Prediction::new("cat", 0.9), Prediction::new("dog", 0.1)],
            &[Prediction::new("cat", 0.7)],
        ));

        let report = orchestrator.compare(&f.slot_a, &f.slot_b).await.unwrap();
        assert_eq!(report.verdict, Verdict::Match);
        assert_eq!(report.label_a, "cat");
        assert_eq!(report.label_b, "cat");
        assert_eq!(report.predictions_a.len(), 2);
    }

    #[tokio::test]
    async fn different_top_labels_are_no_match() {
        let f = ready_slots();
        let orchestrator = ComparisonOrchestrator::with_classifier(classifier(
            &[Prediction::new("cat", 0.9)],
            &[Prediction::new("dog", 0.8)],
        ));

        let report = orchestrator.compare(&f.slot_a, &f.slot_b).await.unwrap();
        assert_eq!(report.verdict, Verdict::NoMatch);
    }

    #[tokio::test]
    async fn two_empty_sequences_match_as_unknown() {
        // Known edge case: no predictions on either side compares two
        // "Unknown" sentinels, which are equal.
        let f = ready_slots();
        let orchestrator = ComparisonOrchestrator::with_classifier(classifier(&[], &[]));

        let report = orchestrator.compare(&f.slot_a, &f.slot_b).await.unwrap();
        assert_eq!(report.verdict, Verdict::Match);
        assert_eq!(report.label_a, "Unknown");
        assert_eq!(report.label_b, "Unknown");
    }

    #[tokio::test]
    async fn one_empty_sequence_is_no_match() {
        let f = ready_slots();
        let orchestrator = ComparisonOrchestrator::with_classifier(classifier(
            &[Prediction::new("cat", 0.9)],
            &[],
        ));

        let report = orchestrator.compare(&f.slot_a, &f.slot_b).await.unwrap();
        assert_eq!(report.verdict, Verdict::NoMatch);
        assert_eq!(report.label_b, "Unknown");
    }

    #[tokio::test]
    async fn unloaded_model_fails_without_extraction() {
        let f = ready_slots();
        let orchestrator = ComparisonOrchestrator::new();
        assert!(!orchestrator.is_model_loaded());

        let result = orchestrator.compare(&f.slot_a, &f.slot_b).await;
        assert!(matches!(result, Err(CompareError::ModelUnavailable)));
        assert_eq!(f.reads_a.load(Ordering::SeqCst), 0);
        assert_eq!(f.reads_b.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn not_ready_slot_is_rejected() {
        let f = ready_slots();
        let reads = Arc::new(AtomicUsize::new(0));
        let not_ready = SlotController::new(
            SlotId::B,
            Box::new(TaggedSurface {
                tag: 2,
                reads: reads.clone(),
            }),
            Arc::new(NoCamera),
            Arc::new(NoRecorders),
        );
        let orchestrator = ComparisonOrchestrator::with_classifier(classifier(&[], &[]));

        let result = orchestrator.compare(&f.slot_a, &not_ready).await;
        assert!(matches!(result, Err(CompareError::SlotNotReady(SlotId::B))));
        assert_eq!(f.reads_a.load(Ordering::SeqCst), 0);
    }
}
