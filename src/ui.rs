pub fn render_index(date: &str, habit_count: usize) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{COUNT}}", &habit_count.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f4f6f3;
      --bg-2: #d9e7d6;
      --ink: #24302a;
      --accent: #2d7a4b;
      --accent-2: #35506b;
      --danger: #c63b2b;
      --muted: #6b7268;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 24px 60px rgba(53, 80, 107, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e8f0e4 60%, #f2f4ef 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      justify-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
      font-size: 1rem;
    }

    .insights {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(53, 80, 107, 0.08);
      display: grid;
      gap: 8px;
      align-content: start;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b918a;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.flame {
      color: var(--accent);
    }

    .bar {
      height: 8px;
      border-radius: 999px;
      background: rgba(53, 80, 107, 0.12);
      overflow: hidden;
    }

    .bar span {
      display: block;
      height: 100%;
      background: var(--accent);
      border-radius: 999px;
      transition: width 300ms ease;
    }

    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(270px, 1fr));
      gap: 16px;
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(53, 80, 107, 0.08);
      border-top: 4px solid var(--accent);
      display: grid;
      gap: 12px;
      align-content: start;
    }

    .card h3 {
      margin: 0;
      font-size: 1.15rem;
      display: flex;
      align-items: center;
      gap: 8px;
    }

    .chip {
      font-size: 0.72rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      padding: 3px 10px;
      border-radius: 999px;
      background: rgba(53, 80, 107, 0.1);
      color: var(--accent-2);
    }

    .chip.avoid {
      background: rgba(198, 59, 43, 0.12);
      color: var(--danger);
    }

    .card .desc {
      margin: 0;
      color: var(--muted);
      font-size: 0.9rem;
      min-height: 1.1em;
    }

    .card .schedule {
      font-size: 0.8rem;
      color: #8b918a;
    }

    .figures {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 8px;
      font-size: 0.9rem;
    }

    .figures b {
      font-size: 1.2rem;
      color: var(--accent-2);
    }

    .card-actions {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font-size: 0.9rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-done {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(45, 122, 75, 0.3);
    }

    .btn-done.undone {
      background: var(--accent-2);
      box-shadow: 0 10px 24px rgba(53, 80, 107, 0.3);
    }

    .btn-quiet {
      background: rgba(53, 80, 107, 0.08);
      color: var(--accent-2);
    }

    .btn-danger {
      background: rgba(198, 59, 43, 0.1);
      color: var(--danger);
    }

    .rest {
      font-size: 0.82rem;
      color: #8b918a;
      align-self: center;
    }

    .journal {
      border-top: 1px dashed rgba(53, 80, 107, 0.2);
      padding-top: 10px;
      display: grid;
      gap: 8px;
    }

    .journal-day {
      display: grid;
      grid-template-columns: auto auto 1fr auto;
      gap: 8px;
      align-items: center;
      font-size: 0.85rem;
    }

    .journal-day input {
      border: 1px solid rgba(53, 80, 107, 0.18);
      border-radius: 10px;
      padding: 6px 10px;
      font: inherit;
      font-size: 0.82rem;
    }

    .journal-day .mark {
      width: 1.2em;
      text-align: center;
      color: var(--accent);
      font-weight: 700;
    }

    .journal-day .mark.missed {
      color: #b7bdb5;
    }

    form.add {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(53, 80, 107, 0.08);
      display: grid;
      gap: 12px;
    }

    form.add h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    .field-row {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 10px;
    }

    form.add input[type="text"],
    form.add select {
      border: 1px solid rgba(53, 80, 107, 0.18);
      border-radius: 12px;
      padding: 10px 12px;
      font: inherit;
      width: 100%;
    }

    .days {
      display: none;
      gap: 8px;
      flex-wrap: wrap;
      font-size: 0.85rem;
    }

    .days.visible {
      display: flex;
    }

    .days label {
      display: inline-flex;
      align-items: center;
      gap: 4px;
      background: rgba(53, 80, 107, 0.06);
      border-radius: 999px;
      padding: 5px 10px;
    }

    .form-actions {
      display: flex;
      gap: 8px;
    }

    .btn-primary {
      background: var(--accent);
      color: white;
    }

    .status {
      font-size: 0.95rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .status[data-type="ok"] {
      color: var(--accent);
    }

    .empty {
      text-align: center;
      color: var(--muted);
      padding: 24px 0;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Habit Tracker</h1>
        <p class="subtitle">{{COUNT}} habit(s) &middot; {{DATE}}</p>
      </div>
    </header>

    <section class="insights" id="insights">
      <div class="stat">
        <span class="label">This week</span>
        <span class="value" id="week-value">0 / 0</span>
        <div class="bar"><span id="week-bar" style="width: 0%"></span></div>
      </div>
      <div class="stat">
        <span class="label">Last 30 days</span>
        <span class="value" id="month-value">0%</span>
        <div class="bar"><span id="month-bar" style="width: 0%"></span></div>
      </div>
      <div class="stat">
        <span class="label">Best streak</span>
        <span class="value flame" id="best-streak">0</span>
      </div>
    </section>

    <section class="cards" id="cards">
      <p class="empty">Loading habits&hellip;</p>
    </section>

    <form class="add" id="habit-form">
      <h2 id="form-title">Add a habit</h2>
      <div class="field-row">
        <input type="text" id="f-name" placeholder="Name (e.g. No Smoking)" required />
        <input type="text" id="f-category" placeholder="Category (e.g. Health)" />
      </div>
      <input type="text" id="f-description" placeholder="Description" />
      <div class="field-row">
        <select id="f-type">
          <option value="build">Build a habit</option>
          <option value="avoid">Avoid a habit</option>
        </select>
        <select id="f-frequency">
          <option value="daily">Every day</option>
          <option value="weekdays">Weekdays</option>
          <option value="custom">Custom days</option>
        </select>
      </div>
      <div class="days" id="f-days">
        <label><input type="checkbox" value="0" />Sun</label>
        <label><input type="checkbox" value="1" />Mon</label>
        <label><input type="checkbox" value="2" />Tue</label>
        <label><input type="checkbox" value="3" />Wed</label>
        <label><input type="checkbox" value="4" />Thu</label>
        <label><input type="checkbox" value="5" />Fri</label>
        <label><input type="checkbox" value="6" />Sat</label>
      </div>
      <div class="form-actions">
        <button class="btn-primary" id="form-submit" type="submit">Add habit</button>
        <button class="btn-quiet" id="form-cancel" type="button" hidden>Cancel</button>
      </div>
    </form>

    <div class="status" id="status"></div>
  </main>

  <script>
    const cardsEl = document.getElementById('cards');
    const statusEl = document.getElementById('status');
    const weekValue = document.getElementById('week-value');
    const weekBar = document.getElementById('week-bar');
    const monthValue = document.getElementById('month-value');
    const monthBar = document.getElementById('month-bar');
    const bestStreak = document.getElementById('best-streak');
    const form = document.getElementById('habit-form');
    const formTitle = document.getElementById('form-title');
    const formSubmit = document.getElementById('form-submit');
    const formCancel = document.getElementById('form-cancel');
    const fName = document.getElementById('f-name');
    const fCategory = document.getElementById('f-category');
    const fDescription = document.getElementById('f-description');
    const fType = document.getElementById('f-type');
    const fFrequency = document.getElementById('f-frequency');
    const fDays = document.getElementById('f-days');

    const DAY_NAMES = ['Sun', 'Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat'];

    let habits = [];
    let editingId = null;
    let openJournal = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const esc = (text) =>
      String(text ?? '').replace(/[&<>"']/g, (ch) => ({
        '&': '&amp;',
        '<': '&lt;',
        '>': '&gt;',
        '"': '&quot;',
        "'": '&#39;'
      })[ch]);

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || `Request failed (${res.status})`);
      }
      if (res.status === 204) {
        return null;
      }
      return res.json();
    };

    const scheduleLabel = (habit) => {
      if (habit.frequency === 'weekdays') {
        return 'Weekdays';
      }
      if (habit.days_of_week.length && habit.days_of_week.length < 7) {
        return habit.days_of_week.map((day) => DAY_NAMES[day]).join(', ');
      }
      return 'Every day';
    };

    const renderInsights = (insights) => {
      const week = insights.last_7_days;
      weekValue.textContent = `${week.completed} / ${week.scheduled}`;
      weekBar.style.width = `${Math.round(week.rate)}%`;
      const month = insights.last_30_days;
      monthValue.textContent = `${Math.round(month.rate)}%`;
      monthBar.style.width = `${Math.round(month.rate)}%`;
      bestStreak.textContent = insights.best_streak;
    };

    const journalHtml = (days) =>
      days
        .map((day) => `
          <div class="journal-day" data-date="${day.date}">
            <span>${day.date.slice(5)}</span>
            <span class="mark ${day.completed ? '' : 'missed'}">${day.completed ? '&#10003;' : '&middot;'}</span>
            <input type="text" placeholder="Notes" value="${esc(day.notes ?? '')}" />
            <button class="btn-quiet" type="button" data-save="${day.date}" data-completed="${day.completed}">Save</button>
          </div>`)
        .join('');

    const cardHtml = (habit) => {
      const rate = Math.round(habit.completion_rate);
      const doneToday = habit.completed_today;
      const checkIn = habit.scheduled_today
        ? `<button class="btn-done ${doneToday ? 'undone' : ''}" data-checkin="${habit.id}">
             ${doneToday ? 'Undo today' : 'Done today'}
           </button>`
        : '<span class="rest">Rest day</span>';
      return `
        <article class="card" style="border-top-color: ${esc(habit.color)}">
          <h3>${esc(habit.name)}
            <span class="chip ${habit.type}">${habit.type}</span>
          </h3>
          <p class="desc">${esc(habit.description)}</p>
          <span class="schedule">${scheduleLabel(habit)}${habit.category ? ' &middot; ' + esc(habit.category) : ''}</span>
          <div class="figures">
            <span>Streak <b>${habit.current_streak}</b></span>
            <span>Best <b>${habit.longest_streak}</b></span>
            <span>30 days <b>${habit.last_30_days.completed}/${habit.last_30_days.scheduled}</b></span>
            <span>Rate <b>${rate}%</b></span>
          </div>
          <div class="bar"><span style="width: ${rate}%"></span></div>
          <div class="card-actions">
            ${checkIn}
            <button class="btn-quiet" data-journal="${habit.id}">Journal</button>
            <button class="btn-quiet" data-edit="${habit.id}">Edit</button>
            <button class="btn-danger" data-delete="${habit.id}">Delete</button>
          </div>
          <div class="journal" data-journal-panel="${habit.id}" hidden></div>
        </article>`;
    };

    const renderHabits = () => {
      if (!habits.length) {
        cardsEl.innerHTML = '<p class="empty">No habits yet. Add your first one below.</p>';
        return;
      }
      cardsEl.innerHTML = habits.map(cardHtml).join('');
      if (openJournal) {
        const panel = cardsEl.querySelector(`[data-journal-panel="${openJournal}"]`);
        if (panel) {
          loadJournal(openJournal, panel).catch((err) => setStatus(err.message, 'error'));
        }
      }
    };

    const loadHabits = async () => {
      habits = await api('/api/habits');
      renderHabits();
    };

    const loadInsights = async () => {
      renderInsights(await api('/api/insights'));
    };

    const refresh = async () => {
      await Promise.all([loadHabits(), loadInsights()]);
    };

    const loadJournal = async (habitId, panel) => {
      const journal = await api(`/api/habits/${habitId}/journal?count=7`);
      panel.innerHTML = journalHtml(journal.days);
      panel.hidden = false;
    };

    const checkIn = async (habitId, body) => {
      await api(`/api/habits/${habitId}/checkin`, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      await refresh();
    };

    const resetForm = () => {
      editingId = null;
      form.reset();
      fDays.classList.remove('visible');
      fDays.querySelectorAll('input').forEach((box) => (box.checked = false));
      formTitle.textContent = 'Add a habit';
      formSubmit.textContent = 'Add habit';
      formCancel.hidden = true;
    };

    const startEdit = (habit) => {
      editingId = habit.id;
      fName.value = habit.name;
      fCategory.value = habit.category;
      fDescription.value = habit.description;
      fType.value = habit.type;
      fFrequency.value = habit.frequency;
      fDays.classList.toggle('visible', habit.frequency === 'custom');
      fDays.querySelectorAll('input').forEach((box) => {
        box.checked = habit.days_of_week.includes(Number(box.value));
      });
      formTitle.textContent = `Edit "${habit.name}"`;
      formSubmit.textContent = 'Save changes';
      formCancel.hidden = false;
      fName.focus();
    };

    fFrequency.addEventListener('change', () => {
      fDays.classList.toggle('visible', fFrequency.value === 'custom');
    });

    formCancel.addEventListener('click', resetForm);

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      const days = Array.from(fDays.querySelectorAll('input:checked')).map((box) =>
        Number(box.value)
      );
      const body = {
        name: fName.value,
        description: fDescription.value,
        type: fType.value,
        category: fCategory.value,
        frequency: fFrequency.value,
        days_of_week: fFrequency.value === 'custom' ? days : []
      };
      const request = editingId
        ? api(`/api/habits/${editingId}`, {
            method: 'PUT',
            headers: { 'content-type': 'application/json' },
            body: JSON.stringify(body)
          })
        : api('/api/habits', {
            method: 'POST',
            headers: { 'content-type': 'application/json' },
            body: JSON.stringify(body)
          });
      request
        .then(async () => {
          resetForm();
          await refresh();
          setStatus('Saved', 'ok');
          setTimeout(() => setStatus('', ''), 1200);
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    cardsEl.addEventListener('click', (event) => {
      const button = event.target.closest('button');
      if (!button) {
        return;
      }

      if (button.dataset.checkin) {
        const habit = habits.find((item) => item.id === button.dataset.checkin);
        checkIn(habit.id, {
          completed: !habit.completed_today,
          notes: habit.notes_today ?? null
        }).catch((err) => setStatus(err.message, 'error'));
        return;
      }

      if (button.dataset.journal) {
        const habitId = button.dataset.journal;
        const panel = cardsEl.querySelector(`[data-journal-panel="${habitId}"]`);
        if (!panel.hidden) {
          panel.hidden = true;
          openJournal = null;
          return;
        }
        openJournal = habitId;
        loadJournal(habitId, panel).catch((err) => setStatus(err.message, 'error'));
        return;
      }

      if (button.dataset.save) {
        const panel = button.closest('[data-journal-panel]');
        const habitId = panel.dataset.journalPanel;
        const row = button.closest('.journal-day');
        const notes = row.querySelector('input').value;
        checkIn(habitId, {
          date: button.dataset.save,
          completed: button.dataset.completed === 'true',
          notes
        }).catch((err) => setStatus(err.message, 'error'));
        return;
      }

      if (button.dataset.edit) {
        const habit = habits.find((item) => item.id === button.dataset.edit);
        startEdit(habit);
        return;
      }

      if (button.dataset.delete) {
        api(`/api/habits/${button.dataset.delete}`, { method: 'DELETE' })
          .then(refresh)
          .then(() => setStatus('Habit deleted', 'ok'))
          .catch((err) => setStatus(err.message, 'error'));
      }
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
