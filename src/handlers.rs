use crate::date::{format_local_date, local_today, parse_local_date, today_string};
use crate::errors::AppError;
use crate::metrics::{
    completion_stats_at, current_streak_at, is_scheduled_date, longest_streak_at,
    recent_scheduled_dates_at, CompletionStats, STATS_WINDOW_DAYS,
};
use crate::models::{
    AppData, CalendarDay, CalendarQuery, CalendarResponse, CheckInRequest, CreateHabitRequest,
    EntryDetail, EntryResponse, Habit, HabitSummary, InsightsResponse, JournalDay, JournalQuery,
    JournalResponse, TodayStatus, UpdateHabitRequest, WindowSummary, DEFAULT_COLORS,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{Datelike, NaiveDate};

const DEFAULT_JOURNAL_DAYS: usize = 7;
const MAX_JOURNAL_DAYS: usize = 90;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(&today_string(), data.habits.len()))
}

pub async fn list_habits(State(state): State<AppState>) -> Result<Json<Vec<HabitSummary>>, AppError> {
    let today = local_today();
    let data = state.data.lock().await;
    let summaries = sorted_habits(&data)
        .into_iter()
        .map(|habit| summarize(today, habit))
        .collect();
    Ok(Json(summaries))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<CreateHabitRequest>,
) -> Result<Json<HabitSummary>, AppError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("habit name must not be empty"));
    }
    let days_of_week = normalize_days(payload.days_of_week)?;

    let today = local_today();
    let mut data = state.data.lock().await;

    let color = match payload.color {
        Some(color) if !color.trim().is_empty() => color,
        _ => DEFAULT_COLORS[data.habits.len() % DEFAULT_COLORS.len()].to_string(),
    };

    let habit = Habit {
        id: data.allocate_id(),
        name: name.to_string(),
        description: payload.description,
        habit_type: payload.habit_type,
        category: payload.category,
        color,
        frequency: payload.frequency,
        days_of_week,
        created_at: format_local_date(today),
        entries: Default::default(),
    };

    let summary = summarize(today, &habit);
    data.habits.insert(habit.id.clone(), habit);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(summary))
}

pub async fn update_habit(
    State(state): State<AppState>,
    Path(habit_id): Path<String>,
    Json(payload): Json<UpdateHabitRequest>,
) -> Result<Json<HabitSummary>, AppError> {
    let days_of_week = payload.days_of_week.map(normalize_days).transpose()?;

    let today = local_today();
    let mut data = state.data.lock().await;
    let habit = data
        .habits
        .get_mut(&habit_id)
        .ok_or_else(|| AppError::not_found(format!("no habit with id {habit_id}")))?;

    if let Some(name) = payload.name {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::bad_request("habit name must not be empty"));
        }
        habit.name = name;
    }
    if let Some(description) = payload.description {
        habit.description = description;
    }
    if let Some(habit_type) = payload.habit_type {
        habit.habit_type = habit_type;
    }
    if let Some(category) = payload.category {
        habit.category = category;
    }
    if let Some(color) = payload.color {
        habit.color = color;
    }
    if let Some(frequency) = payload.frequency {
        habit.frequency = frequency;
    }
    if let Some(days) = days_of_week {
        habit.days_of_week = days;
    }

    let summary = summarize(today, habit);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(summary))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(habit_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    if data.habits.remove(&habit_id).is_none() {
        return Err(AppError::not_found(format!("no habit with id {habit_id}")));
    }
    persist_data(&state.data_path, &data).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn check_in(
    State(state): State<AppState>,
    Path(habit_id): Path<String>,
    Json(payload): Json<CheckInRequest>,
) -> Result<Json<EntryResponse>, AppError> {
    let date = match payload.date.as_deref() {
        Some(raw) => parse_local_date(raw)
            .map_err(|_| AppError::bad_request(format!("invalid date '{raw}', expected YYYY-MM-DD")))?,
        None => local_today(),
    };
    let date_key = format_local_date(date);

    let mut data = state.data.lock().await;
    let habit = data
        .habits
        .get_mut(&habit_id)
        .ok_or_else(|| AppError::not_found(format!("no habit with id {habit_id}")))?;

    let entry = EntryDetail {
        completed: payload.completed,
        notes: payload.notes.filter(|notes| !notes.trim().is_empty()),
    };
    let response = EntryResponse {
        habit_id: habit_id.clone(),
        date: date_key.clone(),
        completed: entry.completed,
        notes: entry.notes.clone(),
    };
    habit.entries.insert(date_key, entry);

    persist_data(&state.data_path, &data).await?;

    Ok(Json(response))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path((habit_id, date)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let date = parse_local_date(&date)
        .map_err(|_| AppError::bad_request(format!("invalid date '{date}', expected YYYY-MM-DD")))?;
    let date_key = format_local_date(date);

    let mut data = state.data.lock().await;
    let habit = data
        .habits
        .get_mut(&habit_id)
        .ok_or_else(|| AppError::not_found(format!("no habit with id {habit_id}")))?;
    if habit.entries.remove(&date_key).is_none() {
        return Err(AppError::not_found(format!("no entry for {date_key}")));
    }

    persist_data(&state.data_path, &data).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn journal(
    State(state): State<AppState>,
    Path(habit_id): Path<String>,
    Query(query): Query<JournalQuery>,
) -> Result<Json<JournalResponse>, AppError> {
    let count = query
        .count
        .unwrap_or(DEFAULT_JOURNAL_DAYS)
        .min(MAX_JOURNAL_DAYS);

    let today = local_today();
    let data = state.data.lock().await;
    let habit = data
        .habits
        .get(&habit_id)
        .ok_or_else(|| AppError::not_found(format!("no habit with id {habit_id}")))?;

    let days = recent_scheduled_dates_at(today, habit, count)
        .into_iter()
        .map(|date| {
            let entry = habit.entries.get(&date);
            JournalDay {
                has_entry: entry.is_some(),
                completed: entry.is_some_and(|entry| entry.completed),
                notes: entry.and_then(|entry| entry.notes.clone()),
                date,
            }
        })
        .collect();

    Ok(Json(JournalResponse { habit_id, days }))
}

pub async fn calendar(
    State(state): State<AppState>,
    Path(habit_id): Path<String>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let today = local_today();
    let month = match query.month {
        Some(raw) => raw,
        None => format!("{:04}-{:02}", today.year(), today.month()),
    };
    let first = parse_local_date(&format!("{month}-01"))
        .map_err(|_| AppError::bad_request(format!("invalid month '{month}', expected YYYY-MM")))?;

    let data = state.data.lock().await;
    let habit = data
        .habits
        .get(&habit_id)
        .ok_or_else(|| AppError::not_found(format!("no habit with id {habit_id}")))?;

    let days = month_days(first)
        .map(|date| {
            let key = format_local_date(date);
            let entry = habit.entries.get(&key);
            CalendarDay {
                scheduled: is_scheduled_date(habit, date),
                completed: entry.is_some_and(|entry| entry.completed),
                has_notes: entry.is_some_and(|entry| entry.notes.is_some()),
                date: key,
            }
        })
        .collect();

    Ok(Json(CalendarResponse {
        habit_id,
        month,
        days,
    }))
}

pub async fn insights(State(state): State<AppState>) -> Result<Json<InsightsResponse>, AppError> {
    let today = local_today();
    let data = state.data.lock().await;
    let habits = sorted_habits(&data);

    let mut best_streak = 0;
    let mut week = CompletionStats::default();
    let mut month = CompletionStats::default();
    let mut today_statuses = Vec::with_capacity(habits.len());
    let today_key = format_local_date(today);

    for habit in &habits {
        best_streak = best_streak.max(longest_streak_at(today, habit));

        let week_stats = completion_stats_at(today, habit, 7);
        week.completed += week_stats.completed;
        week.scheduled += week_stats.scheduled;

        let month_stats = completion_stats_at(today, habit, STATS_WINDOW_DAYS);
        month.completed += month_stats.completed;
        month.scheduled += month_stats.scheduled;

        today_statuses.push(TodayStatus {
            id: habit.id.clone(),
            name: habit.name.clone(),
            color: habit.color.clone(),
            scheduled: is_scheduled_date(habit, today),
            completed: habit
                .entries
                .get(&today_key)
                .is_some_and(|entry| entry.completed),
        });
    }

    Ok(Json(InsightsResponse {
        habit_count: habits.len(),
        best_streak,
        last_7_days: window_summary(week),
        last_30_days: window_summary(month),
        today: today_statuses,
    }))
}

fn summarize(today: NaiveDate, habit: &Habit) -> HabitSummary {
    let today_key = format_local_date(today);
    let today_entry = habit.entries.get(&today_key);
    let last_30_days = completion_stats_at(today, habit, STATS_WINDOW_DAYS);
    HabitSummary {
        id: habit.id.clone(),
        name: habit.name.clone(),
        description: habit.description.clone(),
        habit_type: habit.habit_type,
        category: habit.category.clone(),
        color: habit.color.clone(),
        frequency: habit.frequency,
        days_of_week: habit.days_of_week.clone(),
        created_at: habit.created_at.clone(),
        current_streak: current_streak_at(today, habit),
        longest_streak: longest_streak_at(today, habit),
        completion_rate: last_30_days.rate(),
        last_30_days,
        scheduled_today: is_scheduled_date(habit, today),
        completed_today: today_entry.is_some_and(|entry| entry.completed),
        notes_today: today_entry.and_then(|entry| entry.notes.clone()),
    }
}

fn window_summary(stats: CompletionStats) -> WindowSummary {
    WindowSummary {
        completed: stats.completed,
        scheduled: stats.scheduled,
        rate: stats.rate(),
    }
}

fn normalize_days(mut days: Vec<u8>) -> Result<Vec<u8>, AppError> {
    if days.iter().any(|day| *day > 6) {
        return Err(AppError::bad_request(
            "days_of_week values must be between 0 (Sunday) and 6 (Saturday)",
        ));
    }
    days.sort_unstable();
    days.dedup();
    Ok(days)
}

fn sorted_habits(data: &AppData) -> Vec<&Habit> {
    let mut habits: Vec<&Habit> = data.habits.values().collect();
    habits.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| numeric_id(&b.id).cmp(&numeric_id(&a.id)))
    });
    habits
}

fn numeric_id(id: &str) -> u64 {
    id.parse().unwrap_or(0)
}

fn month_days(first: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let year = first.year();
    let month = first.month();
    (1..=31).filter_map(move |day| NaiveDate::from_ymd_opt(year, month, day))
}
