//! Server-rendered dashboard HTML.
//!
//! Pure string shaping over the derived view model. The page re-triggers
//! the tick loop itself via a refresh directive; error pages keep the
//! directive so the next tick retries, except the fatal missing-game-id
//! page which stops the loop.

use crate::domain::view::GameView;

const TITLE: &str = "Whist Game Viewer";

const STYLE: &str = "body{font-family:sans-serif;margin:2rem auto;max-width:60rem;padding:0 1rem}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ccc;padding:0.3rem 0.6rem;text-align:center}\
tr.total{font-weight:bold;background:#f5f5f5}\
.badge{display:inline-block;background:#e6f4e6;border-radius:0.5rem;padding:0.2rem 0.6rem}\
.note{background:#eef3fb;border-radius:0.5rem;padding:0.4rem 0.8rem;margin:0.5rem 0}\
.metrics{display:flex;gap:2rem;margin:0.5rem 0}\
.metric span{display:block;color:#666;font-size:0.8rem}\
.metric b{font-size:1.6rem}\
footer{text-align:center;font-size:0.75rem;color:gray;margin-top:2rem}";

pub fn render_dashboard(view: &GameView, game_id: &str, refresh_secs: u64) -> String {
    let mut body = header(game_id, refresh_secs);

    body.push_str(&format!("<h2>{}</h2>\n", escape(&view.banner.headline())));
    if let Some(special) = view.banner.special {
        body.push_str(&format!("<div class=\"note\">ℹ️ {special}</div>\n"));
    }
    if let Some(dealer) = &view.dealer {
        body.push_str(&format!(
            "<div class=\"badge\">🤚 Dealer: {}</div>\n",
            escape(dealer)
        ));
    }

    if let Some(pending) = &view.pending_guesses {
        body.push_str("<h3>🤔 Guesses</h3>\n<div class=\"metrics\">\n");
        for entry in pending {
            body.push_str(&format!(
                "<div class=\"metric\"><span>{}</span><b>{}</b></div>\n",
                escape(&entry.player),
                entry.guess
            ));
        }
        body.push_str("</div>\n");
    }

    if let Some(outcome) = &view.outcome {
        body.push_str(&format!(
            "<h2>{} wins with {} points!</h2>\n<h2>🏆 Final Rankings</h2>\n<ul>\n",
            escape(&outcome.winner),
            outcome.winner_score
        ));
        for row in &outcome.standings {
            body.push_str(&format!(
                "<li><strong>{}. {}</strong> – {} points</li>\n",
                row.rank,
                escape(&row.player),
                row.score
            ));
        }
        body.push_str("</ul>\n");
    }

    body.push_str(&score_table(view));
    body.push_str(&format!(
        "<footer>Game ID: {}</footer>\n",
        escape(game_id)
    ));

    page(Some(refresh_secs), &body)
}

pub fn render_waiting(message: &str, game_id: &str, refresh_secs: u64) -> String {
    let mut body = header(game_id, refresh_secs);
    body.push_str(&format!("<div class=\"note\">{}</div>\n", escape(message)));
    body.push_str(&format!(
        "<footer>Game ID: {}</footer>\n",
        escape(game_id)
    ));
    page(Some(refresh_secs), &body)
}

/// Error page. With `refresh_secs` the page keeps retrying on the next
/// tick; without it (missing game id) the loop stops here.
pub fn render_error(detail: &str, refresh_secs: Option<u64>) -> String {
    let mut body = format!("<h1>{TITLE}</h1>\n");
    body.push_str(&format!("<div class=\"note\">⚠️ {}</div>\n", escape(detail)));
    page(refresh_secs, &body)
}

fn header(game_id: &str, refresh_secs: u64) -> String {
    format!(
        "<h1>{TITLE}</h1>\n<p>Updates every {refresh_secs} seconds 🔄 \
<a href=\"?game_id={}\">Update now 🔄</a></p>\n",
        escape(game_id)
    )
}

fn score_table(view: &GameView) -> String {
    let mut html = String::from("<table>\n<thead>\n<tr><th></th>");
    for player in &view.table.players {
        html.push_str(&format!("<th colspan=\"2\">{}</th>", escape(player)));
    }
    html.push_str("</tr>\n<tr><th></th>");
    for _ in &view.table.players {
        html.push_str("<th>Guess</th><th>Score</th>");
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in &view.table.rows {
        html.push_str(&format!("<tr><td>{}</td>", escape(&row.label)));
        for cells in &row.cells {
            let guess = cells
                .guess
                .map_or_else(|| "—".to_string(), |g| g.to_string());
            let score = cells.score.map_or_else(String::new, |s| s.to_string());
            html.push_str(&format!("<td>{guess}</td><td>{score}</td>"));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("<tr class=\"total\"><td>Total</td>");
    for total in &view.table.totals {
        html.push_str(&format!("<td></td><td>{total}</td>"));
    }
    html.push_str("</tr>\n</tbody>\n</table>\n");
    html
}

fn page(refresh_secs: Option<u64>, body: &str) -> String {
    let refresh = refresh_secs
        .map(|secs| format!("<meta http-equiv=\"refresh\" content=\"{secs}\">\n"))
        .unwrap_or_default();
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n{refresh}\
<title>{TITLE}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
