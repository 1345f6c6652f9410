use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct AuditEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AuditEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load, returning the rendered report.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting audit...");

        tracing::debug!("Reading inventory...");
        let input = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded {} units and {} categories (profile '{}')",
            input.units.len(),
            input.categories.len(),
            input.profile_name
        );

        tracing::debug!("Auditing...");
        let report = self.pipeline.transform(input).await?;
        if let Some(gaps) = &report.gaps {
            let gap_containers: usize = gaps.iter().map(|result| result.missing.len()).sum();
            tracing::info!("Gap audit: {} containers with missing slots", gap_containers);
        }
        if let Some(conflicts) = &report.conflicts {
            tracing::info!("Condition guard: {} mixed containers", conflicts.conflicts.len());
        }

        tracing::debug!("Rendering report...");
        self.pipeline.load(report).await
    }
}
