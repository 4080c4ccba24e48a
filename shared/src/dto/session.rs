//! # Session Data Transfer Objects
//!
//! Scheduled class sessions as returned by the timetable API.

use serde::{Deserialize, Serialize};

/// Teacher owning a session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Teacher {
    pub id: i64,
    pub username: String,
}

/// Room a session takes place in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Room {
    pub id: i64,
    /// Human-facing room code, e.g. `"B204"`
    pub room_id: String,
}

/// Kind of class session.
///
/// The wire values are the short labels the timetable uses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SessionType {
    #[serde(rename = "Cour")]
    Lecture,
    #[serde(rename = "TD")]
    Tutorial,
    #[serde(rename = "TP")]
    Lab,
}

impl SessionType {
    /// Label shown in the type badge
    pub fn label(&self) -> &'static str {
        match self {
            SessionType::Lecture => "Cour",
            SessionType::Tutorial => "TD",
            SessionType::Lab => "TP",
        }
    }
}

/// A scheduled class occurrence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub id: i64,
    pub week_day: String,
    pub starting_time: String,
    pub ending_time: String,
    /// Subject taught in this session
    pub module: String,
    pub teacher: Teacher,
    pub room: Room,
    pub session_type: SessionType,
}

impl Session {
    /// `"Monday, 08:00 - 10:00"`
    pub fn date_range(&self) -> String {
        crate::utils::format_session_date(&self.week_day, &self.starting_time, &self.ending_time)
    }
}
