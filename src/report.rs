use anyhow::{Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;

use crate::city::{CityLabel, resolve_city};

pub const DEFAULT_OUTPUT_DIR: &str = "output";

const HEAVY_RULE_WIDTH: usize = 80;
const LIGHT_RULE_WIDTH: usize = 50;
const FORBIDDEN_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Persists finished runs as plain-text reports under one directory.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedReport {
    pub path: PathBuf,
    pub city: CityLabel,
    pub bytes: usize,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn save(&self, request: &str, answer: &str, transcript: &[String]) -> Result<SavedReport> {
        self.save_at(request, answer, transcript, local_now())
    }

    fn save_at(
        &self,
        request: &str,
        answer: &str,
        transcript: &[String],
        now: OffsetDateTime,
    ) -> Result<SavedReport> {
        fs::create_dir_all(&self.output_dir).map_err(|err| {
            anyhow!(
                "Failed to create output directory {}: {err}",
                self.output_dir.display()
            )
        })?;

        let city = resolve_city(request, answer, transcript);
        let path = self.output_dir.join(report_filename(now, city.as_str()));
        let content = format_report(request, answer, transcript, city.as_str(), now);
        fs::write(&path, &content)
            .map_err(|err| anyhow!("Failed to save report {}: {err}", path.display()))?;

        Ok(SavedReport {
            path,
            city,
            bytes: content.len(),
        })
    }

    /// Saved `.txt` reports, newest first by filename.
    pub fn list_saved_reports(&self) -> Result<Vec<PathBuf>> {
        if !self.output_dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.output_dir).map_err(|err| {
            anyhow!(
                "Failed to read output directory {}: {err}",
                self.output_dir.display()
            )
        })?;

        let mut reports = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|err| anyhow!("Failed to read output directory entry: {err}"))?
                .path();
            if path.extension().is_some_and(|ext| ext == "txt") {
                reports.push(path);
            }
        }
        reports.sort_by(|a, b| b.cmp(a));
        Ok(reports)
    }
}

pub fn sanitize_city(city: &str) -> String {
    city.chars()
        .filter(|c| !FORBIDDEN_FILENAME_CHARS.contains(c))
        .collect()
}

pub fn report_filename(now: OffsetDateTime, city: &str) -> String {
    format!("{}_{}.txt", compact_timestamp(now, "_"), sanitize_city(city))
}

pub fn format_report(
    request: &str,
    answer: &str,
    transcript: &[String],
    city: &str,
    now: OffsetDateTime,
) -> String {
    let heavy = "=".repeat(HEAVY_RULE_WIDTH);
    let light = "-".repeat(LIGHT_RULE_WIDTH);
    let display_time = display_timestamp(now);

    let mut lines = vec![
        heavy.clone(),
        "🌍 Smart Travel Assistant - Query Results Report".to_string(),
        heavy.clone(),
        format!("📅 Query Time: {display_time}"),
        format!("🏙️  Query City: {city}"),
        format!("🔍 Query ID: {}", compact_timestamp(now, "")),
        String::new(),
        "📝 User Request:".to_string(),
        light.clone(),
        request.to_string(),
        String::new(),
        "✅ Final Answer:".to_string(),
        light.clone(),
        answer.to_string(),
        String::new(),
        "🔄 Detailed Execution Process:".to_string(),
        light,
    ];

    for (index, entry) in transcript.iter().enumerate() {
        lines.push(format!("[Step {}] {entry}", index + 1));
        lines.push(String::new());
    }

    lines.extend([
        heavy.clone(),
        "📊 Report Statistics:".to_string(),
        format!("   • Total execution steps: {}", transcript.len()),
        format!("   • Report generation time: {display_time}"),
        heavy.clone(),
        "🎯 Smart Travel Assistant - Making Travel Smarter".to_string(),
        heavy,
    ]);

    lines.join("\n")
}

fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

fn compact_timestamp(now: OffsetDateTime, separator: &str) -> String {
    format!(
        "{:04}{:02}{:02}{separator}{:02}{:02}{:02}",
        now.year(),
        u8::from(now.month()),
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    )
}

fn display_timestamp(now: OffsetDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        now.year(),
        u8::from(now.month()),
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    )
}
