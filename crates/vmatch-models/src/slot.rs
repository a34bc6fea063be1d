//! Capture slot identity, phases, and control-state outputs.
//!
//! A slot is one of the two independent video-source tracks compared
//! against each other. Button enabled/disabled states are modeled as
//! data here; the host UI renders them.

use serde::{Deserialize, Serialize};

use crate::source::SourceKind;

/// Identity of one of the two capture slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotId {
    A,
    B,
}

impl SlotId {
    /// The other slot.
    pub fn other(self) -> Self {
        match self {
            SlotId::A => SlotId::B,
            SlotId::B => SlotId::A,
        }
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotId::A => write!(f, "a"),
            SlotId::B => write!(f, "b"),
        }
    }
}

/// Phase of the per-slot capture state machine.
///
/// A finalized source (uploaded or recorded) is `Idle` phase with a
/// non-`None` [`SourceKind`]; a live preview is `CameraActive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotPhase {
    #[default]
    Idle,
    CameraActive,
    Recording,
}

/// Label shown on the capture button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureLabel {
    #[default]
    Record,
    StopRecording,
}

/// Enabled/disabled outputs for one slot's camera controls.
///
/// The upload input and video element are always interactive and carry
/// no state here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    /// "Start camera" button
    pub start_enabled: bool,
    /// "Stop camera" button
    pub stop_enabled: bool,
    /// Capture (record/stop-recording) button
    pub capture_enabled: bool,
    /// Current capture button label
    pub capture_label: CaptureLabel,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            start_enabled: true,
            stop_enabled: false,
            capture_enabled: false,
            capture_label: CaptureLabel::Record,
        }
    }
}

impl ControlState {
    /// Controls while a live camera stream is assigned.
    pub fn camera_active() -> Self {
        Self {
            start_enabled: false,
            stop_enabled: true,
            capture_enabled: true,
            capture_label: CaptureLabel::Record,
        }
    }

    /// Controls while a recording is in progress.
    pub fn recording() -> Self {
        Self {
            capture_label: CaptureLabel::StopRecording,
            ..Self::camera_active()
        }
    }
}

/// Snapshot of one slot's observable state.
///
/// Emitted after every state-changing operation so the readiness
/// coordinator and the host UI can react.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSnapshot {
    /// Which slot this describes
    pub slot: SlotId,
    /// Current state-machine phase
    pub phase: SlotPhase,
    /// Kind of source currently assigned, if any
    pub source_kind: SourceKind,
    /// True iff the slot holds a finalized, playable, non-live source
    pub ready: bool,
    /// Current button outputs
    pub controls: ControlState,
}
