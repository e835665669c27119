//! Typed planner errors.
//!
//! `PlanError` represents pre-flight failures only. Runtime terminations
//! (no plan, budget exhaustion, action-model contract violations) are
//! expressed via [`crate::search::TerminationReasonV1`] inside a
//! [`crate::search::PlanResult`].

/// Which of the two caller-supplied states failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateRole {
    Initial,
    Goal,
}

impl std::fmt::Display for StateRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initial => f.write_str("initial"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Typed failure for pre-flight planner validation.
///
/// These errors are returned before search begins; no nodes are created.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// A state's length differs from the action model's descriptor.
    #[error("{role} state has {actual} slots but the descriptor declares {expected}")]
    StateLengthMismatch {
        role: StateRole,
        expected: usize,
        actual: usize,
    },
    /// The initial state carries the don't-care sentinel.
    #[error("initial state slot {slot} holds negative value {value}")]
    NegativeInitialValue { slot: usize, value: i32 },
    /// A policy budget is unusable.
    #[error("invalid planner policy: {detail}")]
    InvalidPolicy { detail: String },
}
