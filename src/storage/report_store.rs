//! Technique report history.
//!
//! Append-only with capped retention: after every save only the most recent
//! `max_reports` entries remain.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::exercises::Exercise;
use crate::storage::database::DatabaseError;
use crate::technique::{MetricStatus, TechniqueMetric, TechniqueReport};

/// Metric as kept in history (without the insight text).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSummary {
    pub label: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub status: MetricStatus,
}

impl From<&TechniqueMetric> for MetricSummary {
    fn from(metric: &TechniqueMetric) -> Self {
        Self {
            label: metric.label.clone(),
            value: metric.value,
            unit: metric.unit.clone(),
            status: metric.status,
        }
    }
}

/// A saved technique report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredReport {
    pub id: Uuid,
    pub exercise_id: String,
    pub exercise_name: String,
    pub score: u8,
    pub verdict: String,
    pub focus_areas: Vec<String>,
    pub metrics: Vec<MetricSummary>,
    pub frame_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Store for the technique report history.
pub struct ReportStore<'a> {
    conn: &'a Connection,
    max_reports: usize,
}

impl<'a> ReportStore<'a> {
    /// Create a store keeping at most `max_reports` reports (minimum 1).
    pub fn new(conn: &'a Connection, max_reports: usize) -> Self {
        Self {
            conn,
            max_reports: max_reports.max(1),
        }
    }

    /// Append a report and drop everything beyond the retention cap.
    pub fn save(
        &self,
        exercise: &Exercise,
        report: &TechniqueReport,
    ) -> Result<StoredReport, DatabaseError> {
        let stored = StoredReport {
            id: Uuid::new_v4(),
            exercise_id: exercise.id.clone(),
            exercise_name: exercise.display_name().to_string(),
            score: report.score,
            verdict: report.verdict.text().to_string(),
            focus_areas: report.focus_areas.clone(),
            metrics: report.metrics.iter().map(MetricSummary::from).collect(),
            frame_count: report.frame_count,
            created_at: Utc::now(),
        };

        let focus_json = serde_json::to_string(&stored.focus_areas)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;
        let metrics_json = serde_json::to_string(&stored.metrics)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;

        self.conn
            .execute(
                "INSERT INTO technique_reports
                 (id, exercise_id, exercise_name, score, verdict, focus_areas_json,
                  metrics_json, frame_count, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    stored.id.to_string(),
                    stored.exercise_id,
                    stored.exercise_name,
                    stored.score as i64,
                    stored.verdict,
                    focus_json,
                    metrics_json,
                    stored.frame_count as i64,
                    stored.created_at.to_rfc3339(),
                ],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let pruned = self.prune()?;
        if pruned > 0 {
            tracing::debug!("Pruned {} old technique reports", pruned);
        }

        Ok(stored)
    }

    /// Most recent reports, newest first.
    pub fn list_recent(&self, limit: usize) -> Result<Vec<StoredReport>, DatabaseError> {
        self.query(
            "SELECT id, exercise_id, exercise_name, score, verdict, focus_areas_json,
                    metrics_json, frame_count, created_at
             FROM technique_reports ORDER BY rowid DESC LIMIT ?1",
            params![limit as i64],
        )
    }

    /// All kept reports for one exercise, newest first.
    pub fn for_exercise(&self, exercise_id: &str) -> Result<Vec<StoredReport>, DatabaseError> {
        self.query(
            "SELECT id, exercise_id, exercise_name, score, verdict, focus_areas_json,
                    metrics_json, frame_count, created_at
             FROM technique_reports WHERE exercise_id = ?1 ORDER BY rowid DESC",
            params![exercise_id],
        )
    }

    /// Fetch a single report.
    pub fn get(&self, id: &Uuid) -> Result<Option<StoredReport>, DatabaseError> {
        let row = self
            .conn
            .query_row(
                "SELECT id, exercise_id, exercise_name, score, verdict, focus_areas_json,
                        metrics_json, frame_count, created_at
                 FROM technique_reports WHERE id = ?1",
                params![id.to_string()],
                ReportRow::from_row,
            )
            .optional()
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        row.map(ReportRow::into_report).transpose()
    }

    /// Number of reports currently kept.
    pub fn count(&self) -> Result<usize, DatabaseError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM technique_reports", [], |row| row.get(0))
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        Ok(count as usize)
    }

    /// Delete the whole history.
    pub fn clear(&self) -> Result<usize, DatabaseError> {
        self.conn
            .execute("DELETE FROM technique_reports", [])
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))
    }

    fn prune(&self) -> Result<usize, DatabaseError> {
        self.conn
            .execute(
                "DELETE FROM technique_reports WHERE rowid NOT IN
                 (SELECT rowid FROM technique_reports ORDER BY rowid DESC LIMIT ?1)",
                params![self.max_reports as i64],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))
    }

    fn query(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<StoredReport>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map(params, ReportRow::from_row)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut reports = Vec::new();
        for row in rows {
            let row = row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
            reports.push(row.into_report()?);
        }

        Ok(reports)
    }
}

/// Raw column values of a `technique_reports` row.
struct ReportRow {
    id: String,
    exercise_id: String,
    exercise_name: String,
    score: i64,
    verdict: String,
    focus_areas_json: String,
    metrics_json: String,
    frame_count: i64,
    created_at: String,
}

impl ReportRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            exercise_id: row.get(1)?,
            exercise_name: row.get(2)?,
            score: row.get(3)?,
            verdict: row.get(4)?,
            focus_areas_json: row.get(5)?,
            metrics_json: row.get(6)?,
            frame_count: row.get(7)?,
            created_at: row.get(8)?,
        })
    }

    fn into_report(self) -> Result<StoredReport, DatabaseError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| DatabaseError::DeserializationError(format!("Invalid report id: {}", e)))?;

        let score = u8::try_from(self.score).map_err(|_| {
            DatabaseError::DeserializationError(format!("Invalid score: {}", self.score))
        })?;

        let focus_areas: Vec<String> = serde_json::from_str(&self.focus_areas_json)
            .map_err(|e| DatabaseError::DeserializationError(e.to_string()))?;

        let metrics: Vec<MetricSummary> = serde_json::from_str(&self.metrics_json)
            .map_err(|e| DatabaseError::DeserializationError(e.to_string()))?;

        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                DatabaseError::DeserializationError(format!("Invalid created_at date: {}", e))
            })?;

        Ok(StoredReport {
            id,
            exercise_id: self.exercise_id,
            exercise_name: self.exercise_name,
            score,
            verdict: self.verdict,
            focus_areas,
            metrics,
            frame_count: self.frame_count.max(0) as usize,
            created_at,
        })
    }
}
