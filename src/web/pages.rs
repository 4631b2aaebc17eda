//! Static HTML pages served by the web interface.

use std::sync::Arc;

use axum::{extract::State, response::Html};

use super::server::AppState;

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let options: String = state
        .supported_languages
        .iter()
        .map(|code| format!("<option>{}</option>", escape(code)))
        .collect();
    Html(INDEX_HTML.replace("{{language_options}}", &options))
}

pub async fn about(State(state): State<Arc<AppState>>) -> Html<String> {
    let languages: Vec<String> = state.supported_languages.iter().map(|c| escape(c)).collect();
    Html(ABOUT_HTML.replace("{{languages}}", &languages.join(", ")))
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Multilingual QA</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 860px; margin: 2rem auto; padding: 0 1rem; color: #222; }
  h1 { font-size: 1.6rem; }
  section { border: 1px solid #ddd; border-radius: 8px; padding: 1rem; margin-bottom: 1.5rem; }
  input, textarea, select { width: 100%; box-sizing: border-box; padding: .5rem; margin: .25rem 0 .75rem; }
  button { padding: .5rem 1.2rem; cursor: pointer; }
  .result { border-top: 1px solid #eee; padding: .75rem 0; }
  .meta { color: #666; font-size: .85rem; }
  .error { color: #b00020; }
  nav a { margin-right: 1rem; }
</style>
</head>
<body>
<nav><a href="/">Ask</a><a href="/about">About</a></nav>
<h1>Multilingual Question Answering</h1>

<section>
  <h2>Ask a question</h2>
  <input id="question" placeholder="Ask in any language...">
  <button id="ask-btn">Ask</button>
  <p id="ask-message"></p>
  <div id="results"></div>
</section>

<section>
  <h2>Add knowledge</h2>
  <select id="language">{{language_options}}</select>
  <input id="new-question" placeholder="Question">
  <textarea id="new-answer" rows="3" placeholder="Answer"></textarea>
  <input id="category" placeholder="Category (default: General)">
  <button id="add-btn">Add</button>
  <p id="add-message"></p>
</section>

<section>
  <h2>Statistics</h2>
  <button id="stats-btn">Refresh</button>
  <pre id="stats"></pre>
</section>

<script>
const el = (id) => document.getElementById(id);

function escapeHtml(s) {
  return String(s).replace(/[&<>"']/g, (c) => ({'&':'&amp;','<':'&lt;','>':'&gt;','"':'&quot;',"'":'&#39;'}[c]));
}

async function postJson(url, body) {
  const resp = await fetch(url, { method: 'POST', headers: { 'Content-Type': 'application/json' }, body: JSON.stringify(body) });
  return { ok: resp.ok, data: await resp.json() };
}

el('ask-btn').onclick = async () => {
  const { ok, data } = await postJson('/ask', { question: el('question').value });
  el('results').innerHTML = '';
  if (!ok) { el('ask-message').innerHTML = `<span class="error">${escapeHtml(data.error)}</span>`; return; }
  el('ask-message').textContent = data.message;
  for (const r of data.results) {
    el('results').insertAdjacentHTML('beforeend',
      `<div class="result"><div class="meta">[${escapeHtml(r.language)}] ${escapeHtml(r.category)} &middot; score ${r.similarity_score.toFixed(3)}</div>
       <strong>${escapeHtml(r.question)}</strong><p>${escapeHtml(r.answer)}</p></div>`);
  }
};

el('add-btn').onclick = async () => {
  const { ok, data } = await postJson('/add', {
    language: el('language').value,
    question: el('new-question').value,
    answer: el('new-answer').value,
    category: el('category').value || 'General',
  });
  el('add-message').innerHTML = ok ? escapeHtml(data.message) : `<span class="error">${escapeHtml(data.error)}</span>`;
};

el('stats-btn').onclick = async () => {
  const resp = await fetch('/stats');
  el('stats').textContent = JSON.stringify(await resp.json(), null, 2);
};
</script>
</body>
</html>
"#;

const ABOUT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>About - Multilingual QA</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 860px; margin: 2rem auto; padding: 0 1rem; color: #222; }
</style>
</head>
<body>
<p><a href="/">&larr; Back</a></p>
<h1>About</h1>
<p>Questions can be asked in any language and are matched against a small multilingual
knowledge base of question/answer pairs.</p>
<p>Matching uses a lexical word-overlap (Jaccard) score between the question and each stored
question and answer. It is a placeholder for a language-agnostic embedding model: only shared
words count, so cross-lingual matches happen only where vocabulary overlaps.</p>
<p>Supported languages for new entries: {{languages}}.</p>
</body>
</html>
"#;
