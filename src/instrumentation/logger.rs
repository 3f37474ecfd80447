use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// One retrieve→generate round trip (one author, or the sole section of the
/// single-section variants).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionLog {
    pub label: String,
    pub search_latency_ms: u64,
    pub num_results: u32,
    pub llm_latency_ms: u64,
    pub generated_chars: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunLog {
    pub id: String,
    pub timestamp: String,
    pub term: String,
    pub variant: String,
    pub sections: Vec<SectionLog>,
    pub warnings: Vec<String>,
    pub total_latency_ms: u64,
}

impl RunLog {
    pub fn summary(&self) -> String {
        format!(
            "Sections: {} | Search results: {} | Total latency: {:.1}s | Warnings: {}",
            self.sections.len(),
            self.sections.iter().map(|s| s.num_results).sum::<u32>(),
            self.total_latency_ms as f64 / 1000.0,
            self.warnings.len(),
        )
    }
}

pub struct RunLogger {
    dir: PathBuf,
}

impl RunLogger {
    pub fn new(dir: &str) -> Result<Self> {
        let dir = PathBuf::from(dir);
        fs::create_dir_all(&dir).context("Failed to create logs directory")?;
        Ok(Self { dir })
    }

    pub fn write(&self, run_log: &RunLog) -> Result<()> {
        let path = self.dir.join("runs.jsonl");
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .context("Failed to open log file")?;

        let json = serde_json::to_string(run_log).context("Failed to serialize run log")?;
        writeln!(file, "{}", json).context("Failed to write log")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_sections_results_and_warnings() {
        let log = RunLog {
            id: "x".into(),
            timestamp: "t".into(),
            term: "Interés".into(),
            variant: "by-author".into(),
            sections: vec![
                SectionLog {
                    label: "Ludwig von Mises".into(),
                    search_latency_ms: 120,
                    num_results: 4,
                    llm_latency_ms: 900,
                    generated_chars: 350,
                },
                SectionLog {
                    label: "Friedrich Hayek".into(),
                    search_latency_ms: 130,
                    num_results: 6,
                    llm_latency_ms: 800,
                    generated_chars: 280,
                },
            ],
            warnings: vec!["w".into()],
            total_latency_ms: 2100,
        };
        assert_eq!(
            log.summary(),
            "Sections: 2 | Search results: 10 | Total latency: 2.1s | Warnings: 1"
        );
    }
}
