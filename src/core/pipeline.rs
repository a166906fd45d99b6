use crate::core::{
    Checklist, ChecklistOutcome, ConfigProvider, DomainChecklist, Pipeline, ReadinessRecord,
    Storage,
};
use crate::domain::model::is_complete;
use crate::utils::error::{Result, ScoreboardError};
use chrono::Local;

pub struct ScoreboardPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ScoreboardPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    async fn load_checklist(&self, domain: &str) -> Result<ChecklistOutcome> {
        let path = format!("{}/docs/CHECKLIST.json", domain);

        if !self.storage.exists(&path).await {
            tracing::debug!("Domain '{}' has no checklist at {}", domain, path);
            return Ok(ChecklistOutcome::Absent);
        }

        let raw = self.storage.read_file(&path).await?;
        // A typed parse doubles as the shape check: anything that is not a
        // mapping of mappings fails here instead of being coerced.
        let checklist: Checklist =
            serde_json::from_slice(&raw).map_err(|source| ScoreboardError::ChecklistFormatError {
                domain: domain.to_string(),
                source,
            })?;

        Ok(ChecklistOutcome::Present(checklist))
    }
}

/// Item counts over all sections: (total, complete).
fn score_checklist(checklist: &Checklist) -> (usize, usize) {
    let total = checklist.values().map(|items| items.len()).sum();
    let ok = checklist
        .values()
        .flat_map(|items| items.values())
        .filter(|value| is_complete(value))
        .count();
    (total, ok)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Renders the Markdown scoreboard: title, table header, one row per record
/// in input order, single trailing newline.
pub fn render_scoreboard(records: &[ReadinessRecord]) -> String {
    let mut lines = vec![
        "# Domain Readiness Scoreboard\n".to_string(),
        "| Domain | Readiness % | Last Audit | Notes |".to_string(),
        "|--------|-------------|------------|-------|".to_string(),
    ];

    for record in records {
        lines.push(format!(
            "| {} | {} | {} | {} |",
            record.domain,
            record.percent_cell(),
            record.audit_date.format("%Y-%m-%d"),
            record.notes_cell()
        ));
    }

    lines.join("\n") + "\n"
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ScoreboardPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<DomainChecklist>> {
        let domains_path = self.config.domains_file();

        if !self.storage.exists(domains_path).await {
            return Err(ScoreboardError::MissingInputError {
                path: domains_path.to_string(),
            });
        }

        let raw = self.storage.read_file(domains_path).await?;
        let text = String::from_utf8_lossy(&raw);

        let mut checklists = Vec::new();
        for line in text.lines() {
            let domain = line.trim();
            if domain.is_empty() {
                continue;
            }
            tracing::debug!("Loading checklist for domain '{}'", domain);
            let outcome = self.load_checklist(domain).await?;
            checklists.push(DomainChecklist {
                domain: domain.to_string(),
                outcome,
            });
        }

        Ok(checklists)
    }

    async fn transform(&self, data: Vec<DomainChecklist>) -> Result<Vec<ReadinessRecord>> {
        let today = Local::now().date_naive();
        let mut records = Vec::with_capacity(data.len());

        for DomainChecklist { domain, outcome } in data {
            let record = match outcome {
                ChecklistOutcome::Absent => ReadinessRecord {
                    domain,
                    percent: 0.0,
                    total_items: 0,
                    audit_date: today,
                    notes: "no checklist".to_string(),
                },
                ChecklistOutcome::Present(checklist) => {
                    let (total, ok) = score_checklist(&checklist);
                    let percent = if total > 0 {
                        round_one_decimal(100.0 * ok as f64 / total as f64)
                    } else {
                        0.0
                    };
                    ReadinessRecord {
                        domain,
                        percent,
                        total_items: total,
                        audit_date: today,
                        notes: String::new(),
                    }
                }
            };
            records.push(record);
        }

        Ok(records)
    }

    async fn load(&self, records: Vec<ReadinessRecord>) -> Result<String> {
        let report = render_scoreboard(&records);
        let output_path = self.config.output_file();

        tracing::debug!(
            "Writing scoreboard with {} rows to {}",
            records.len(),
            output_path
        );
        self.storage
            .write_file(output_path, report.as_bytes())
            .await?;

        Ok(output_path.to_string())
    }
}
