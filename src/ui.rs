use crate::errors::AppError;
use crate::models::{ChartView, ViewMode};

pub fn render_index(view: &ChartView) -> Result<String, AppError> {
    // Keep the embedded JSON from closing the script tag early.
    let view_json = serde_json::to_string(view)?.replace("</", "<\\/");
    let active = |mode: ViewMode| if view.mode == mode { "active" } else { "" };

    Ok(INDEX_HTML
        .replace("{{DAILY_ACTIVE}}", active(ViewMode::Daily))
        .replace("{{WEEKLY_ACTIVE}}", active(ViewMode::Weekly))
        .replace("{{SERIES}}", view.series_name)
        .replace("{{TREND}}", view.trend.label.as_str())
        .replace("{{TREND_COLOR}}", view.trend.label.color())
        .replace("{{CHANGE}}", &format_change(view.trend.change_percent))
        .replace("{{TOTAL}}", &view.summary.total_records.to_string())
        .replace("{{AVERAGE}}", &view.summary.daily_average.to_string())
        .replace("{{MAX}}", &view.summary.max_daily.to_string())
        .replace("{{VIEW_JSON}}", &view_json))
}

fn format_change(change: Option<f64>) -> String {
    match change {
        Some(change) if change > 0.0 => format!("(+{change:.1}%)"),
        Some(change) => format!("({change:.1}%)"),
        None => String::new(),
    }
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>User Growth</title>
  <style>
    :root {
      --ink: #1f2937;
      --muted: #6b7280;
      --line: #3b82f6;
      --panel: #f9fafb;
    }

    body {
      margin: 0;
      padding: 24px;
      background: white;
      color: var(--ink);
      font-family: system-ui, "Segoe UI", sans-serif;
    }

    .app {
      max-width: 960px;
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: 1.6rem;
    }

    .tabs {
      display: flex;
      gap: 12px;
    }

    .tabs form {
      margin: 0;
    }

    .tab {
      border: none;
      border-radius: 8px;
      padding: 8px 16px;
      font-size: 0.95rem;
      cursor: pointer;
      background: #e5e7eb;
      color: #374151;
    }

    .tab.active {
      background: #2563eb;
      color: white;
    }

    .trend {
      background: var(--panel);
      border-radius: 8px;
      padding: 16px;
      display: flex;
      align-items: center;
      gap: 10px;
    }

    .badge {
      color: white;
      font-weight: 700;
      padding: 4px 12px;
      border-radius: 999px;
    }

    .change {
      color: var(--muted);
      font-size: 0.9rem;
    }

    #chart {
      width: 100%;
      height: 384px;
      display: block;
    }

    .chart-line {
      fill: none;
      stroke: var(--line);
      stroke-width: 3;
    }

    .chart-point {
      fill: var(--line);
      stroke: white;
      stroke-width: 2;
    }

    .chart-grid {
      stroke: #e5e7eb;
      stroke-dasharray: 3 3;
    }

    .chart-label {
      fill: var(--muted);
      font-size: 12px;
    }

    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    .card {
      border-radius: 8px;
      padding: 16px;
    }

    .card h4 {
      margin: 0 0 6px;
      font-size: 0.95rem;
    }

    .card p {
      margin: 0;
      font-size: 1.6rem;
      font-weight: 700;
    }

    .card.total { background: #eff6ff; color: #1d4ed8; }
    .card.average { background: #f0fdf4; color: #15803d; }
    .card.max { background: #faf5ff; color: #7e22ce; }

    .status[data-type="error"] {
      color: #c63b2b;
    }
  </style>
</head>
<body>
  <main class="app">
    <h1>User growth</h1>

    <nav class="tabs">
      <form method="post" action="/mode/daily">
        <button class="tab {{DAILY_ACTIVE}}" type="submit" data-mode="daily">Daily view</button>
      </form>
      <form method="post" action="/mode/weekly">
        <button class="tab {{WEEKLY_ACTIVE}}" type="submit" data-mode="weekly">Weekly view</button>
      </form>
    </nav>

    <section class="trend">
      <span>Trend:</span>
      <span id="trend" class="badge" style="background-color: {{TREND_COLOR}}">{{TREND}}</span>
      <span id="change" class="change">{{CHANGE}}</span>
    </section>

    <section>
      <svg id="chart" viewBox="0 0 900 384" role="img" aria-label="{{SERIES}}"></svg>
    </section>

    <section class="cards">
      <div class="card total">
        <h4>Records</h4>
        <p id="total">{{TOTAL}}</p>
      </div>
      <div class="card average">
        <h4>Average per day</h4>
        <p id="average">{{AVERAGE}}</p>
      </div>
      <div class="card max">
        <h4>Best day</h4>
        <p id="max">{{MAX}}</p>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const TREND_COLORS = {
      'insufficient-data': '#666666',
      rising: '#22c55e',
      falling: '#ef4444',
      flat: '#f59e0b'
    };

    const chartEl = document.getElementById('chart');
    const trendEl = document.getElementById('trend');
    const changeEl = document.getElementById('change');
    const statusEl = document.getElementById('status');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    let view = {{VIEW_JSON}};

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const formatNumber = (value) => Number(value).toLocaleString();

    const renderChart = () => {
      const points = view.points.map((point) => ({
        label: point[view.x_key],
        value: point[view.y_key]
      }));
      if (!points.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data</text>';
        return;
      }

      const width = 900;
      const height = 384;
      const left = 64;
      const right = 30;
      const top = 10;
      const bottom = 80;

      const max = Math.max(...points.map((point) => point.value), 1);
      const xStep = points.length > 1 ? (width - left - right) / (points.length - 1) : 0;
      const x = (index) => left + index * xStep;
      const y = (value) => height - bottom - (value / max) * (height - top - bottom);

      let grid = '';
      for (let i = 0; i <= 4; i += 1) {
        const value = (max * i) / 4;
        grid += `<line class="chart-grid" x1="${left}" y1="${y(value)}" x2="${width - right}" y2="${y(value)}" />`;
        grid += `<text class="chart-label" x="${left - 8}" y="${y(value) + 4}" text-anchor="end">${formatNumber(Math.round(value))}</text>`;
      }

      const path = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.value).toFixed(2)}`)
        .join(' ');

      const circles = points
        .map((point, index) =>
          `<circle class="chart-point" cx="${x(index)}" cy="${y(point.value)}" r="6"><title>${view.tooltip_prefix} ${point.label}: ${formatNumber(point.value)}</title></circle>`)
        .join('');

      const labels = points
        .map((point, index) => {
          const lx = x(index);
          const ly = height - bottom + 16;
          return `<text class="chart-label" x="${lx}" y="${ly}" text-anchor="end" transform="rotate(-45 ${lx} ${ly})">${point.label}</text>`;
        })
        .join('');

      chartEl.setAttribute('aria-label', view.series_name);
      chartEl.innerHTML = `${grid}<path class="chart-line" d="${path}" />${circles}${labels}`;
    };

    const renderView = () => {
      tabs.forEach((button) => button.classList.toggle('active', button.dataset.mode === view.mode));

      const trend = view.trend;
      trendEl.textContent = trend.label;
      trendEl.style.backgroundColor = TREND_COLORS[trend.label];
      if (trend.change_percent === null) {
        changeEl.textContent = '';
      } else {
        const sign = trend.change_percent > 0 ? '+' : '';
        changeEl.textContent = `(${sign}${trend.change_percent.toFixed(1)}%)`;
      }

      document.getElementById('total').textContent = formatNumber(view.summary.total_records);
      document.getElementById('average').textContent = formatNumber(view.summary.daily_average);
      document.getElementById('max').textContent = formatNumber(view.summary.max_daily);
      renderChart();
    };

    const selectMode = async (mode) => {
      const res = await fetch('/api/mode', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ mode })
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      view = await res.json();
      // The mode lives in this page's URL so other visitors keep theirs.
      history.replaceState(null, '', `/?mode=${view.mode}`);
      setStatus('', '');
      renderView();
    };

    tabs.forEach((button) => {
      button.form.addEventListener('submit', (event) => {
        event.preventDefault();
        selectMode(button.dataset.mode).catch((err) => setStatus(err.message, 'error'));
      });
    });

    renderView();
  </script>
</body>
</html>
"#;
