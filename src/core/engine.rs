use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ScoreboardEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ScoreboardEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs the single forward pass: list domains and their checklists,
    /// score them, render and persist the report.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Loading domains and checklists...");
        let checklists = self.pipeline.extract().await?;
        tracing::info!("Loaded {} domains", checklists.len());

        tracing::info!("Scoring readiness...");
        let records = self.pipeline.transform(checklists).await?;
        tracing::info!("Scored {} domains", records.len());

        tracing::info!("Writing scoreboard...");
        let output_path = self.pipeline.load(records).await?;
        tracing::info!("Scoreboard saved to: {}", output_path);

        Ok(output_path)
    }
}
