use crate::models::{DashboardView, HabitView};
use std::fmt::Write;

/// Renders the full page. `draft` pre-fills the add input after a rejected submit.
pub fn render_index(view: &DashboardView, draft: &str) -> String {
    let habits = if view.habits.is_empty() {
        EMPTY_STATE.to_string()
    } else {
        let rows: String = view.habits.iter().map(render_habit).collect();
        format!(r#"<div class="habits-list">{rows}</div>"#)
    };

    INDEX_HTML
        .replace("{{TODAY}}", &view.today.to_string())
        .replace("{{RATE}}", &view.stats.today_completion_rate.to_string())
        .replace("{{ACTIVE}}", &view.stats.active_habits.to_string())
        .replace("{{TOTAL}}", &view.stats.total_completions.to_string())
        .replace("{{LONGEST}}", &view.stats.longest_streak.to_string())
        .replace("{{DRAFT}}", &escape_html(draft))
        .replace("{{QUOTE_TEXT}}", &escape_html(view.quote.text))
        .replace("{{QUOTE_AUTHOR}}", &escape_html(view.quote.author))
        .replace("{{HABITS}}", &habits)
}

fn render_habit(habit: &HabitView) -> String {
    let id = escape_html(habit.id.as_str());
    let checked = if habit.completed_today { " checked" } else { "" };

    let mut strip = String::new();
    for day in &habit.last_7_days {
        let class = if day.completed { "calendar-day completed" } else { "calendar-day" };
        let _ = write!(strip, r#"<div class="{class}" title="{}"></div>"#, day.date);
    }

    let badge = if habit.streak > 0 {
        format!(r#"<span class="streak-badge">{} day streak</span>"#, habit.streak)
    } else {
        String::new()
    };

    format!(
        r#"
      <div class="habit-item">
        <form class="habit-info" method="post" action="/habits/{id}/toggle">
          <input type="checkbox" class="habit-checkbox" aria-label="Done today"{checked} onchange="this.form.submit()" />
          <span class="habit-name">{name}</span>
        </form>
        <div class="habit-streak">
          <div class="calendar-grid">{strip}</div>
          {badge}
          <form method="post" action="/habits/{id}/delete">
            <button class="btn btn-danger" type="submit">Delete</button>
          </form>
        </div>
      </div>"#,
        name = escape_html(&habit.name),
    )
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '{' => escaped.push_str("&#123;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const EMPTY_STATE: &str = r#"<div class="empty-state">
        <p>No habits yet. Start building your discipline by adding your first habit!</p>
      </div>"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Discipline Dashboard</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --done: #2d7a4b;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5f5c57;
    }

    .stats-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat-card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat-card .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat-card .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .habits-section {
      display: grid;
      gap: 16px;
    }

    .add-habit-form {
      display: flex;
      gap: 12px;
    }

    .add-habit-form input {
      flex: 1;
      border-radius: 999px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      padding: 14px 18px;
      font: inherit;
    }

    .btn {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      color: white;
    }

    .btn-primary {
      background: var(--accent);
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    .btn-danger {
      background: var(--accent-2);
      padding: 8px 14px;
    }

    .empty-state {
      text-align: center;
      color: #6f6a65;
      padding: 24px;
    }

    .habits-list {
      display: grid;
      gap: 12px;
    }

    .habit-item {
      background: white;
      border-radius: 18px;
      padding: 14px 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .habit-info {
      display: flex;
      align-items: center;
      gap: 12px;
      margin: 0;
    }

    .habit-checkbox {
      width: 22px;
      height: 22px;
      accent-color: var(--done);
    }

    .habit-name {
      font-weight: 600;
    }

    .habit-streak {
      display: flex;
      align-items: center;
      gap: 12px;
    }

    .habit-streak form {
      margin: 0;
    }

    .calendar-grid {
      display: grid;
      grid-template-columns: repeat(7, 14px);
      gap: 4px;
    }

    .calendar-day {
      width: 14px;
      height: 14px;
      border-radius: 4px;
      background: rgba(47, 72, 88, 0.12);
    }

    .calendar-day.completed {
      background: var(--done);
    }

    .streak-badge {
      font-size: 0.85rem;
      font-weight: 600;
      color: var(--accent);
    }

    .quotes-section {
      border-left: 4px solid var(--accent);
      padding: 8px 18px;
    }

    .quote {
      font-family: "Fraunces", "Georgia", serif;
      font-size: 1.2rem;
    }

    .quote-author {
      margin-top: 6px;
      color: #6f6a65;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      .add-habit-form {
        flex-direction: column;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Discipline Dashboard</h1>
      <p class="subtitle">Build habits. Track progress. Stay disciplined.</p>
    </header>

    <section class="stats-grid">
      <div class="stat-card">
        <span class="label">Today's Progress</span>
        <span id="rate" class="value">{{RATE}}%</span>
      </div>
      <div class="stat-card">
        <span class="label">Active Habits</span>
        <span id="active" class="value">{{ACTIVE}}</span>
      </div>
      <div class="stat-card">
        <span class="label">Total Completions</span>
        <span id="total" class="value">{{TOTAL}}</span>
      </div>
      <div class="stat-card">
        <span class="label">Longest Streak</span>
        <span id="longest" class="value">{{LONGEST}}</span>
      </div>
    </section>

    <section class="habits-section">
      <h2>Daily Habits</h2>
      <form class="add-habit-form" method="post" action="/habits">
        <input type="text" name="name" value="{{DRAFT}}" placeholder="Add a new habit (e.g., Exercise, Read, Meditate)" />
        <button type="submit" class="btn btn-primary">Add Habit</button>
      </form>
      {{HABITS}}
    </section>

    <section class="quotes-section">
      <div class="quote">&ldquo;{{QUOTE_TEXT}}&rdquo;</div>
      <div class="quote-author">{{QUOTE_AUTHOR}}</div>
    </section>

    <p class="hint">Completions are kept per calendar day ({{TODAY}}, server time).</p>
  </main>
</body>
</html>
"#;
