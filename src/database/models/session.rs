use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub lecturer_info: Option<String>,
    pub date_info: Option<String>,
    pub begin_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub updated_at: DateTime<Utc>,
    pub updated_by: Uuid,
    pub is_active: bool,
}

/// Temporal status of a session relative to its begin/end dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    NotStarted,
    InProgress,
    Finished,
}

impl SessionStatus {
    /// Derive the status from optional begin/end dates at instant `now`.
    /// Both boundary instants count as in-progress.
    pub fn derive(
        begin_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        match (begin_date, end_date) {
            (None, None) => SessionStatus::NotStarted,
            (Some(begin), None) => {
                if now < begin {
                    SessionStatus::NotStarted
                } else {
                    SessionStatus::InProgress
                }
            }
            (None, Some(end)) => {
                if now > end {
                    SessionStatus::Finished
                } else {
                    SessionStatus::InProgress
                }
            }
            (Some(begin), Some(end)) => {
                if now < begin {
                    SessionStatus::NotStarted
                } else if now <= end {
                    SessionStatus::InProgress
                } else {
                    SessionStatus::Finished
                }
            }
        }
    }
}

/// Session list/detail row joined with its course and lecture count
#[derive(Debug, Clone, FromRow)]
pub struct SessionDetailRow {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub lecturer_info: Option<String>,
    pub date_info: Option<String>,
    pub begin_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub course_name: String,
    pub lecture_count: i64,
    pub created_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub updated_at: DateTime<Utc>,
    pub updated_by: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionDetail {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub lecturer_info: Option<String>,
    pub date_info: Option<String>,
    pub begin_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub course_name: String,
    pub course_status: SessionStatus,
    pub lecture_count: i64,
    pub created_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub updated_at: DateTime<Utc>,
    pub updated_by: Uuid,
}

impl SessionDetailRow {
    pub fn into_detail(self, now: DateTime<Utc>) -> SessionDetail {
        let course_status = SessionStatus::derive(self.begin_date, self.end_date, now);
        SessionDetail {
            id: self.id,
            course_id: self.course_id,
            title: self.title,
            description: self.description,
            lecturer_info: self.lecturer_info,
            date_info: self.date_info,
            begin_date: self.begin_date,
            end_date: self.end_date,
            course_name: self.course_name,
            course_status,
            lecture_count: self.lecture_count,
            created_at: self.created_at,
            created_by: self.created_by,
            updated_at: self.updated_at,
            updated_by: self.updated_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(offset_hours: i64, now: DateTime<Utc>) -> DateTime<Utc> {
        now + Duration::hours(offset_hours)
    }

    #[test]
    fn no_dates_means_not_started() {
        let now = Utc::now();
        assert_eq!(SessionStatus::derive(None, None, now), SessionStatus::NotStarted);
    }

    #[test]
    fn begin_only() {
        let now = Utc::now();
        assert_eq!(
            SessionStatus::derive(Some(at(1, now)), None, now),
            SessionStatus::NotStarted
        );
        assert_eq!(
            SessionStatus::derive(Some(at(-1, now)), None, now),
            SessionStatus::InProgress
        );
        // The begin instant itself is already in progress
        assert_eq!(
            SessionStatus::derive(Some(now), None, now),
            SessionStatus::InProgress
        );
    }

    #[test]
    fn end_only() {
        let now = Utc::now();
        assert_eq!(
            SessionStatus::derive(None, Some(at(-1, now)), now),
            SessionStatus::Finished
        );
        assert_eq!(
            SessionStatus::derive(None, Some(at(1, now)), now),
            SessionStatus::InProgress
        );
        // The end instant itself is still in progress
        assert_eq!(
            SessionStatus::derive(None, Some(now), now),
            SessionStatus::InProgress
        );
    }

    #[test]
    fn both_dates() {
        let now = Utc::now();
        assert_eq!(
            SessionStatus::derive(Some(at(1, now)), Some(at(2, now)), now),
            SessionStatus::NotStarted
        );
        assert_eq!(
            SessionStatus::derive(Some(at(-1, now)), Some(at(1, now)), now),
            SessionStatus::InProgress
        );
        assert_eq!(
            SessionStatus::derive(Some(at(-2, now)), Some(at(-1, now)), now),
            SessionStatus::Finished
        );
        assert_eq!(
            SessionStatus::derive(Some(now), Some(now), now),
            SessionStatus::InProgress
        );
    }

    #[test]
    fn status_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&SessionStatus::NotStarted).unwrap(),
            "\"NOT_STARTED\""
        );
        assert_eq!(
            serde_json::to_string(&SessionStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        assert_eq!(
            serde_json::to_string(&SessionStatus::Finished).unwrap(),
            "\"FINISHED\""
        );
    }
}
