//! Workout log storage.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::database::DatabaseError;

/// One performed set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    pub reps: u32,
    /// Load in kilograms; 0 for bodyweight.
    pub weight: f32,
}

impl SetEntry {
    pub fn new(reps: u32, weight: f32) -> Self {
        Self { reps, weight }
    }

    /// Parse the `<reps>x<weight>` shorthand, e.g. `8x60` or `12x0`.
    pub fn parse(text: &str) -> Option<Self> {
        let (reps, weight) = text.split_once(['x', 'X'])?;
        let reps = reps.trim().parse().ok()?;
        let weight: f32 = weight.trim().parse().ok()?;
        if !weight.is_finite() || weight < 0.0 {
            return None;
        }
        Some(Self { reps, weight })
    }

    /// Reps times load.
    pub fn volume(&self) -> f32 {
        self.reps as f32 * self.weight
    }
}

/// A logged workout for a single exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub exercise_id: String,
    pub sets: Vec<SetEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Technique score attached when the set was logged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_score: Option<u8>,
    /// Focus areas of the attached technique report.
    #[serde(default)]
    pub ai_tips: Vec<String>,
}

impl WorkoutLog {
    /// New log entry dated now.
    pub fn new(exercise_id: impl Into<String>, sets: Vec<SetEntry>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: Utc::now(),
            exercise_id: exercise_id.into(),
            sets,
            notes: None,
            ai_score: None,
            ai_tips: Vec::new(),
        }
    }

    pub fn total_reps(&self) -> u32 {
        self.sets.iter().map(|set| set.reps).sum()
    }

    pub fn total_volume(&self) -> f32 {
        self.sets.iter().map(SetEntry::volume).sum()
    }
}

/// Store for workout log entries.
pub struct WorkoutStore<'a> {
    conn: &'a Connection,
}

impl<'a> WorkoutStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a log entry.
    pub fn insert(&self, log: &WorkoutLog) -> Result<(), DatabaseError> {
        let sets_json = serde_json::to_string(&log.sets)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;
        let tips_json = serde_json::to_string(&log.ai_tips)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;

        self.conn
            .execute(
                "INSERT INTO workout_logs (id, date, exercise_id, sets_json, notes, ai_score, ai_tips_json)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    log.id.to_string(),
                    log.date.to_rfc3339(),
                    log.exercise_id,
                    sets_json,
                    log.notes,
                    log.ai_score.map(i64::from),
                    tips_json,
                ],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    /// All log entries, newest first.
    pub fn list(&self) -> Result<Vec<WorkoutLog>, DatabaseError> {
        self.query(
            "SELECT id, date, exercise_id, sets_json, notes, ai_score, ai_tips_json
             FROM workout_logs ORDER BY date DESC, rowid DESC",
            params![],
        )
    }

    /// Log entries for one exercise, newest first.
    pub fn for_exercise(&self, exercise_id: &str) -> Result<Vec<WorkoutLog>, DatabaseError> {
        self.query(
            "SELECT id, date, exercise_id, sets_json, notes, ai_score, ai_tips_json
             FROM workout_logs WHERE exercise_id = ?1 ORDER BY date DESC, rowid DESC",
            params![exercise_id],
        )
    }

    /// Delete a log entry.
    pub fn delete(&self, id: &Uuid) -> Result<(), DatabaseError> {
        let deleted = self
            .conn
            .execute("DELETE FROM workout_logs WHERE id = ?1", params![id.to_string()])
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        if deleted == 0 {
            return Err(DatabaseError::NotFound(format!("Workout log {}", id)));
        }
        Ok(())
    }

    fn query(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<WorkoutLog>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map(params, |row| {
                Ok(WorkoutRow {
                    id: row.get(0)?,
                    date: row.get(1)?,
                    exercise_id: row.get(2)?,
                    sets_json: row.get(3)?,
                    notes: row.get(4)?,
                    ai_score: row.get(5)?,
                    ai_tips_json: row.get(6)?,
                })
            })
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut logs = Vec::new();
        for row in rows {
            let row = row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
            logs.push(row.into_log()?);
        }

        Ok(logs)
    }
}

/// Raw column values of a `workout_logs` row.
struct WorkoutRow {
    id: String,
    date: String,
    exercise_id: String,
    sets_json: String,
    notes: Option<String>,
    ai_score: Option<i64>,
    ai_tips_json: Option<String>,
}

impl WorkoutRow {
    fn into_log(self) -> Result<WorkoutLog, DatabaseError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| DatabaseError::DeserializationError(format!("Invalid log id: {}", e)))?;

        let date = DateTime::parse_from_rfc3339(&self.date)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| DatabaseError::DeserializationError(format!("Invalid date: {}", e)))?;

        let sets: Vec<SetEntry> = serde_json::from_str(&self.sets_json)
            .map_err(|e| DatabaseError::DeserializationError(e.to_string()))?;

        let ai_tips: Vec<String> = match self.ai_tips_json {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| DatabaseError::DeserializationError(e.to_string()))?,
            None => Vec::new(),
        };

        let ai_score = self
            .ai_score
            .map(|score| {
                u8::try_from(score).map_err(|_| {
                    DatabaseError::DeserializationError(format!("Invalid ai_score: {}", score))
                })
            })
            .transpose()?;

        Ok(WorkoutLog {
            id,
            date,
            exercise_id: self.exercise_id,
            sets,
            notes: self.notes,
            ai_score,
            ai_tips,
        })
    }
}
