use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct HabitSummary {
    id: String,
    name: String,
    #[serde(rename = "type")]
    habit_type: String,
    frequency: String,
    days_of_week: Vec<u8>,
    current_streak: u32,
    longest_streak: u32,
    completion_rate: f64,
    scheduled_today: bool,
    completed_today: bool,
}

#[derive(Debug, Deserialize)]
struct JournalDay {
    date: String,
    has_entry: bool,
    completed: bool,
    notes: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JournalResponse {
    days: Vec<JournalDay>,
}

#[derive(Debug, Deserialize)]
struct InsightsResponse {
    habit_count: usize,
    best_streak: u32,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("habit_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/habits")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_habit_tracker"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn create_habit(client: &Client, base_url: &str, body: serde_json::Value) -> HabitSummary {
    client
        .post(format!("{base_url}/api/habits"))
        .json(&body)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn list_habits(client: &Client, base_url: &str) -> Vec<HabitSummary> {
    client
        .get(format!("{base_url}/api/habits"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_create_habit_appears_in_list_with_zero_streak() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created = create_habit(
        &client,
        &server.base_url,
        serde_json::json!({
            "name": "Morning Run",
            "type": "build",
            "category": "Fitness",
            "frequency": "daily"
        }),
    )
    .await;

    assert_eq!(created.name, "Morning Run");
    assert_eq!(created.habit_type, "build");
    assert_eq!(created.frequency, "daily");
    assert_eq!(created.current_streak, 0);
    assert_eq!(created.longest_streak, 0);
    assert_eq!(created.completion_rate, 0.0);
    assert!(created.scheduled_today);
    assert!(!created.completed_today);

    let habits = list_habits(&client, &server.base_url).await;
    assert!(habits.iter().any(|habit| habit.id == created.id));
}

#[tokio::test]
async fn http_check_in_starts_a_streak() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created = create_habit(
        &client,
        &server.base_url,
        serde_json::json!({
            "name": "Meditate",
            "type": "build",
            "frequency": "daily"
        }),
    )
    .await;

    let response = client
        .post(format!(
            "{}/api/habits/{}/checkin",
            server.base_url, created.id
        ))
        .json(&serde_json::json!({ "completed": true }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let habits = list_habits(&client, &server.base_url).await;
    let habit = habits.iter().find(|habit| habit.id == created.id).unwrap();
    assert!(habit.completed_today);
    assert_eq!(habit.current_streak, 1);
    assert_eq!(habit.longest_streak, 1);

    // Checking in again with completed=false is an upsert, not an append.
    let response = client
        .post(format!(
            "{}/api/habits/{}/checkin",
            server.base_url, created.id
        ))
        .json(&serde_json::json!({ "completed": false }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let habits = list_habits(&client, &server.base_url).await;
    let habit = habits.iter().find(|habit| habit.id == created.id).unwrap();
    assert!(!habit.completed_today);
    assert_eq!(habit.current_streak, 0);
}

#[tokio::test]
async fn http_journal_returns_saved_notes() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created = create_habit(
        &client,
        &server.base_url,
        serde_json::json!({
            "name": "Read",
            "type": "build",
            "frequency": "daily"
        }),
    )
    .await;

    let response = client
        .post(format!(
            "{}/api/habits/{}/checkin",
            server.base_url, created.id
        ))
        .json(&serde_json::json!({ "completed": true, "notes": "two chapters" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let journal: JournalResponse = client
        .get(format!(
            "{}/api/habits/{}/journal?count=3",
            server.base_url, created.id
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(journal.days.len(), 3);
    let today = &journal.days[0];
    assert!(today.has_entry);
    assert!(today.completed);
    assert_eq!(today.notes.as_deref(), Some("two chapters"));
    // Older scheduled days have no entries yet.
    assert!(!journal.days[1].has_entry);
    assert!(journal.days[0].date > journal.days[1].date);
}

#[tokio::test]
async fn http_rejects_invalid_habits_and_dates() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/habits", server.base_url))
        .json(&serde_json::json!({ "name": "   ", "type": "build" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client
        .post(format!("{}/api/habits", server.base_url))
        .json(&serde_json::json!({
            "name": "Stretch",
            "type": "build",
            "frequency": "custom",
            "days_of_week": [1, 9]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let created = create_habit(
        &client,
        &server.base_url,
        serde_json::json!({ "name": "Stretch", "type": "build" }),
    )
    .await;
    let response = client
        .post(format!(
            "{}/api/habits/{}/checkin",
            server.base_url, created.id
        ))
        .json(&serde_json::json!({ "completed": true, "date": "01/12/2026" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_unknown_habit_is_not_found() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/habits/999999/checkin", server.base_url))
        .json(&serde_json::json!({ "completed": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .delete(format!("{}/api/habits/999999", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_weekday_schedule_is_enforced_in_responses() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created = create_habit(
        &client,
        &server.base_url,
        serde_json::json!({
            "name": "Standup Prep",
            "type": "build",
            "frequency": "weekdays",
            "days_of_week": [0, 6]
        }),
    )
    .await;

    // The stored custom days are irrelevant for weekday habits.
    assert_eq!(created.frequency, "weekdays");
    assert_eq!(created.days_of_week, vec![0, 6]);

    let journal: JournalResponse = client
        .get(format!(
            "{}/api/habits/{}/journal?count=10",
            server.base_url, created.id
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // Ten most recent scheduled days span exactly two work weeks, and none
    // of them falls on a weekend.
    assert_eq!(journal.days.len(), 10);
    for day in &journal.days {
        let date = chrono::NaiveDate::parse_from_str(&day.date, "%Y-%m-%d").unwrap();
        let weekday = chrono::Datelike::weekday(&date).num_days_from_sunday();
        assert!((1..=5).contains(&weekday), "unexpected weekend day {date}");
    }
}

#[tokio::test]
async fn http_delete_removes_habit_and_insights_track_count() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created = create_habit(
        &client,
        &server.base_url,
        serde_json::json!({ "name": "Floss", "type": "build" }),
    )
    .await;

    let before: InsightsResponse = client
        .get(format!("{}/api/insights", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(before.habit_count >= 1);

    let response = client
        .delete(format!("{}/api/habits/{}", server.base_url, created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let after: InsightsResponse = client
        .get(format!("{}/api/insights", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(after.habit_count, before.habit_count - 1);
    assert!(after.best_streak <= before.best_streak);

    let habits = list_habits(&client, &server.base_url).await;
    assert!(habits.iter().all(|habit| habit.id != created.id));
}
