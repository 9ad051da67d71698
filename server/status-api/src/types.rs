//! Response types specific to the HTTP surface.

use serde::Serialize;

/// Body of the per-service health probe.
#[derive(Debug, Serialize)]
pub struct HealthReply {
  pub status: &'static str,
  pub service: &'static str,
}
