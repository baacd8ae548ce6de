use axum::response::Html;

use crate::render::{escape, layout};
use crate::screening::service::ScreeningOutcome;
use crate::screening::summary::DashboardSummary;
use crate::store::StoredScreening;

const EMPTY_FIELD: &str = "—";

pub fn home_page() -> Html<String> {
    layout(
        "AI Resume Screening System",
        r#"<header>
  <h1>AI Resume Screening System</h1>
  <p>Screen resumes from text, PDFs and images, scored on a 0–100 scale.</p>
</header>
<main>
  <div class="card">
    <h2>About</h2>
    <p>Key details are extracted from each resume, scored, and stored for review.</p>
    <p><a href="/results" class="btn">View Results Dashboard</a></p>
  </div>
  <div class="card">
    <h2>Screen Text</h2>
    <p>Paste resume text in the browser, or send a <strong>POST</strong> to <code>/screen-resume</code> with a JSON body:</p>
    <pre>{
  "resume_text": "Experienced Python developer with MCA degree and 2 years of SQL experience"
}</pre>
    <p><a href="/screen-resume" class="btn">Try Text Screening</a></p>
  </div>
  <div class="card">
    <h2>Upload a Resume (PDF or Image)</h2>
    <form action="/upload-resume" method="post" enctype="multipart/form-data">
      <p><input type="file" name="resume_file" accept=".pdf,.png,.jpg,.jpeg" /></p>
      <button type="submit" class="btn">Upload &amp; Screen</button>
    </form>
    <p>Supported: PDF, PNG, JPG, JPEG.</p>
  </div>
</main>"#,
    )
}

pub fn screen_form_page() -> Html<String> {
    layout(
        "Paste Resume Text",
        r#"<main>
  <h1>Paste Resume Text</h1>
  <form action="/screen-resume" method="post">
    <textarea name="resume_text" placeholder="Paste resume text here..."></textarea><br>
    <button type="submit" class="btn">Screen Resume</button>
  </form>
</main>"#,
    )
}

pub fn result_page(outcome: &ScreeningOutcome) -> Html<String> {
    let data = &outcome.data;
    let body = format!(
        r#"<main>
  <h1>Screening Result</h1>
  <div class="card">
    <p><strong>Skills:</strong> {skills}</p>
    <p><strong>Experience:</strong> {years} years</p>
    <p><strong>Education:</strong> {education}</p>
    <p><strong>Score:</strong> {score}</p>
    <p><strong>Decision:</strong> {decision}</p>
  </div>
  <p><a href="/results">View All Results</a></p>
</main>"#,
        skills = or_dash(&data.skills.join(", ")),
        years = data.experience_years,
        education = or_dash(&data.education),
        score = outcome.score,
        decision = outcome.decision,
    );
    layout("Screening Result", &body)
}

pub fn dashboard_page(summary: &DashboardSummary, screenings: &[StoredScreening]) -> Html<String> {
    let rows = if screenings.is_empty() {
        r#"<tr><td colspan="6">No resumes screened yet.</td></tr>"#.to_string()
    } else {
        screenings.iter().map(dashboard_row).collect::<Vec<_>>().join("\n")
    };

    let body = format!(
        r#"<h1 style="text-align:center;">Resume Screening Results</h1>
<div class="summary">
  <div><h2>{total}</h2><p>Total Resumes</p></div>
  <div><h2>{average:.1}</h2><p>Average Score</p></div>
  <div><h2>{shortlisted}</h2><p>Shortlisted</p></div>
  <div><h2>{ratio:.1}%</h2><p>Shortlist Ratio</p></div>
</div>
<table>
  <tr>
    <th>ID</th>
    <th>Skills</th>
    <th>Experience (Years)</th>
    <th>Education</th>
    <th>Score</th>
    <th>Decision</th>
  </tr>
{rows}
</table>"#,
        total = summary.total,
        average = summary.average_score,
        shortlisted = summary.shortlisted,
        ratio = summary.shortlist_ratio,
    );
    layout("Resume Screening Results", &body)
}

fn dashboard_row(screening: &StoredScreening) -> String {
    let document = &screening.document;
    format!(
        "  <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        screening.id,
        escape(&document.data.skills.join(", ")),
        document.data.experience_years,
        escape(&document.data.education),
        document.score,
        document.decision,
    )
}

pub fn error_page(message: &str, back: &str) -> Html<String> {
    let body = format!(
        r#"<main>
  <p class="error"><strong>Error:</strong> {}</p>
  <p><a href="{}">Go back</a></p>
</main>"#,
        escape(message),
        escape(back),
    );
    layout("Error", &body)
}

/// Escapes `text`, or shows a dash when it is empty.
fn or_dash(text: &str) -> String {
    if text.trim().is_empty() {
        EMPTY_FIELD.to_string()
    } else {
        escape(text)
    }
}
