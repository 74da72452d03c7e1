use async_trait::async_trait;

use crate::{vote::VoteReport, Result};

/// Outbound port for publishing a closed window's results.
///
/// Discord is the first implementation (an interaction follow-up message);
/// the core only ever calls it once per window, from the window's own task.
#[async_trait]
pub trait ReportSink: Send + Sync {
    async fn publish(&self, report: VoteReport) -> Result<()>;
}
