use crate::metrics::CompletionStats;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_COLORS: [&str; 8] = [
    "#ef4444", "#f97316", "#eab308", "#22c55e", "#06b6d4", "#3b82f6", "#8b5cf6", "#ec4899",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitType {
    Avoid,
    Build,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekdays,
    Custom,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryDetail {
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub habit_type: HabitType,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default)]
    pub days_of_week: Vec<u8>,
    pub created_at: String,
    // Keyed by YYYY-MM-DD; the key enforces one entry per habit per date.
    #[serde(default)]
    pub entries: BTreeMap<String, EntryDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub next_id: u64,
    #[serde(default)]
    pub habits: BTreeMap<String, Habit>,
}

impl AppData {
    pub fn allocate_id(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateHabitRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub habit_type: HabitType,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default)]
    pub days_of_week: Vec<u8>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateHabitRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub habit_type: Option<HabitType>,
    pub category: Option<String>,
    pub color: Option<String>,
    pub frequency: Option<Frequency>,
    pub days_of_week: Option<Vec<u8>>,
}

#[derive(Debug, Deserialize)]
pub struct CheckInRequest {
    #[serde(default)]
    pub date: Option<String>,
    pub completed: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct JournalQuery {
    pub count: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CalendarQuery {
    pub month: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub habit_id: String,
    pub date: String,
    pub completed: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HabitSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub habit_type: HabitType,
    pub category: String,
    pub color: String,
    pub frequency: Frequency,
    pub days_of_week: Vec<u8>,
    pub created_at: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub completion_rate: f64,
    pub last_30_days: CompletionStats,
    pub scheduled_today: bool,
    pub completed_today: bool,
    pub notes_today: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JournalDay {
    pub date: String,
    pub has_entry: bool,
    pub completed: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JournalResponse {
    pub habit_id: String,
    pub days: Vec<JournalDay>,
}

#[derive(Debug, Serialize)]
pub struct CalendarDay {
    pub date: String,
    pub scheduled: bool,
    pub completed: bool,
    pub has_notes: bool,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub habit_id: String,
    pub month: String,
    pub days: Vec<CalendarDay>,
}

#[derive(Debug, Serialize)]
pub struct WindowSummary {
    pub completed: u32,
    pub scheduled: u32,
    pub rate: f64,
}

#[derive(Debug, Serialize)]
pub struct TodayStatus {
    pub id: String,
    pub name: String,
    pub color: String,
    pub scheduled: bool,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub habit_count: usize,
    pub best_streak: u32,
    pub last_7_days: WindowSummary,
    pub last_30_days: WindowSummary,
    pub today: Vec<TodayStatus>,
}
