//! Integration tests for the scoring engine
//!
//! Tests are organized by topic:
//! - `properties` - Score bounds, neutral baseline, weight linearity, window clamps
//! - `regimes` - Regime table ordering and monotonic transitions
//! - `scenarios` - Scenario additivity and score clamping
//! - `end_to_end` - Full snapshots over small fixed collections

mod end_to_end;
mod scenarios;
