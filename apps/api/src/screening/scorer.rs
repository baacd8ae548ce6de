//! Suitability scoring: a pure, deterministic mapping from an `AttributeRecord`
//! to a score and a shortlist/reject decision.
//!
//! Two policies live behind the `Scorer` trait:
//! - `BreadthScorer` (default): rewards the number of skills, capped at 100.
//! - `NamedSkillScorer`: rewards Python and SQL by name plus a breadth bonus.
//!
//! `AppState` holds an `Arc<dyn Scorer>`, chosen at startup via `SCORING_POLICY`.

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

use crate::screening::attributes::AttributeRecord;

/// Scores at or above this value are shortlisted.
pub const SHORTLIST_THRESHOLD: u32 = 60;

/// Ceiling applied by the breadth policy.
pub const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Shortlist,
    Reject,
}

impl Decision {
    pub fn for_score(score: u32) -> Self {
        if score >= SHORTLIST_THRESHOLD {
            Decision::Shortlist
        } else {
            Decision::Reject
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Shortlist => "shortlist",
            Decision::Reject => "reject",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Decision {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "shortlist" => Ok(Decision::Shortlist),
            "reject" => Ok(Decision::Reject),
            other => bail!("unknown decision '{other}'"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32,
    pub decision: Decision,
}

impl ScoreResult {
    /// The only constructor, so the decision always agrees with the threshold.
    pub fn from_score(score: u32) -> Self {
        Self {
            score,
            decision: Decision::for_score(score),
        }
    }
}

/// A scoring policy. Implementations must be total and side-effect free.
pub trait Scorer: Send + Sync {
    fn score(&self, record: &AttributeRecord) -> ScoreResult;

    /// Short identifier for logs.
    fn name(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// BreadthScorer (default policy)
// ────────────────────────────────────────────────────────────────────────────

const POINTS_PER_SKILL: u32 = 5;
const POINTS_PER_YEAR: u32 = 10;
const MAX_COUNTED_YEARS: u32 = 3;

/// Breadth-weighted policy.
///
/// - 5 points per skill entry, whatever its type
/// - 10 points per year of experience, only the first 3 years count
/// - education: 20 if it contains "mca", else 10 if it contains "bca"
/// - total capped at 100
pub struct BreadthScorer;

impl BreadthScorer {
    fn education_points(education: &str) -> u32 {
        let education = education.to_lowercase();
        if education.contains("mca") {
            20
        } else if education.contains("bca") {
            10
        } else {
            0
        }
    }
}

impl Scorer for BreadthScorer {
    fn score(&self, record: &AttributeRecord) -> ScoreResult {
        let skill_count = u32::try_from(record.skill_count()).unwrap_or(u32::MAX);
        let skill_score = skill_count.saturating_mul(POINTS_PER_SKILL);
        let experience_score = record.experience_years().min(MAX_COUNTED_YEARS) * POINTS_PER_YEAR;
        let education_score = Self::education_points(&record.education());

        let total = skill_score
            .saturating_add(experience_score)
            .saturating_add(education_score)
            .min(MAX_SCORE);
        ScoreResult::from_score(total)
    }

    fn name(&self) -> &'static str {
        "breadth"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// NamedSkillScorer (alternate policy)
// ────────────────────────────────────────────────────────────────────────────

const CORE_SKILLS: [(&str, u32); 2] = [("python", 30), ("sql", 20)];
const RECOGNIZED_DEGREES: [&str; 3] = ["mca", "btech", "msc"];
const MAX_EXPERIENCE_POINTS: u32 = 30;
const DEGREE_POINTS: u32 = 20;

/// Named-skill policy.
///
/// - +30 for "python", +20 for "sql" (exact match after trim/lower-case)
/// - +5 for every other string skill
/// - 10 points per year, at most 30
/// - +20 when education is exactly one of mca, btech, msc
///
/// No ceiling: a long skill list can push the score past 100.
pub struct NamedSkillScorer;

impl Scorer for NamedSkillScorer {
    fn score(&self, record: &AttributeRecord) -> ScoreResult {
        let skills: Vec<String> = record.text_skills().collect();

        let mut core_present = 0usize;
        let mut total = 0u32;
        for (skill, points) in CORE_SKILLS {
            if skills.iter().any(|s| s == skill) {
                core_present += 1;
                total += points;
            }
        }

        let extra_skills =
            u32::try_from(skills.len().saturating_sub(core_present)).unwrap_or(u32::MAX);
        total = total.saturating_add(extra_skills.saturating_mul(POINTS_PER_SKILL));

        let experience = record
            .experience_years()
            .saturating_mul(POINTS_PER_YEAR)
            .min(MAX_EXPERIENCE_POINTS);
        total = total.saturating_add(experience);

        let education = record.education().trim().to_lowercase();
        if RECOGNIZED_DEGREES.contains(&education.as_str()) {
            total = total.saturating_add(DEGREE_POINTS);
        }

        ScoreResult::from_score(total)
    }

    fn name(&self) -> &'static str {
        "named-skill"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Policy selection
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringPolicy {
    #[default]
    Breadth,
    NamedSkill,
}

impl ScoringPolicy {
    pub fn scorer(self) -> Box<dyn Scorer> {
        match self {
            ScoringPolicy::Breadth => Box::new(BreadthScorer),
            ScoringPolicy::NamedSkill => Box::new(NamedSkillScorer),
        }
    }
}

impl FromStr for ScoringPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "breadth" => Ok(ScoringPolicy::Breadth),
            "named-skill" | "named_skill" => Ok(ScoringPolicy::NamedSkill),
            other => bail!("SCORING_POLICY must be 'breadth' or 'named-skill', got '{other}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::{json, Value};

    fn record(value: Value) -> AttributeRecord {
        AttributeRecord::from_object(value.as_object().unwrap())
    }

    fn breadth(value: Value) -> ScoreResult {
        BreadthScorer.score(&record(value))
    }

    fn named(value: Value) -> ScoreResult {
        NamedSkillScorer.score(&record(value))
    }

    // ── Breadth policy ──────────────────────────────────────────────────────

    #[test]
    fn test_breadth_empty_record_rejects() {
        let result = breadth(json!({"skills": [], "experience_years": 0, "education": ""}));
        assert_eq!(result, ScoreResult { score: 0, decision: Decision::Reject });
    }

    #[test]
    fn test_breadth_two_skills_mca() {
        // 10 + 20 + 20
        let result = breadth(json!({
            "skills": ["python", "sql"], "experience_years": 2, "education": "mca"
        }));
        assert_eq!(result, ScoreResult { score: 50, decision: Decision::Reject });
    }

    #[test]
    fn test_breadth_four_skills_shortlists() {
        // 20 + 30 + 20
        let result = breadth(json!({
            "skills": ["python", "sql", "excel", "aws"], "experience_years": 5, "education": "mca"
        }));
        assert_eq!(result, ScoreResult { score: 70, decision: Decision::Shortlist });
    }

    #[test]
    fn test_breadth_mca_outranks_bca() {
        let both = breadth(json!({"education": "BCA, then MCA"}));
        assert_eq!(both.score, 20);
        let bca = breadth(json!({"education": "Bachelor (BCA)"}));
        assert_eq!(bca.score, 10);
        let other = breadth(json!({"education": "B.Sc"}));
        assert_eq!(other.score, 0);
    }

    #[test]
    fn test_breadth_caps_at_100() {
        let skills: Vec<String> = (0..40).map(|i| format!("skill{i}")).collect();
        let result = breadth(json!({"skills": skills, "experience_years": 10, "education": "MCA"}));
        assert_eq!(result.score, MAX_SCORE);
        assert_eq!(result.decision, Decision::Shortlist);
    }

    #[test]
    fn test_breadth_counts_non_string_skills() {
        let result = breadth(json!({"skills": ["rust", 7, null]}));
        assert_eq!(result.score, 15);
    }

    #[test]
    fn test_breadth_malformed_experience_is_zero() {
        for raw in [json!("lots"), json!(null), json!(-2), json!({"years": 4})] {
            let result = breadth(json!({"skills": ["a"], "experience_years": raw}));
            assert_eq!(result.score, 5);
        }
    }

    #[test]
    fn test_breadth_threshold_boundary() {
        // 6 skills (30) + 3 years (30) = 60
        let at = breadth(json!({"skills": ["a", "b", "c", "d", "e", "f"], "experience_years": 3}));
        assert_eq!(at, ScoreResult { score: 60, decision: Decision::Shortlist });
        // 5 skills (25) + 3 years (30) = 55
        let below = breadth(json!({"skills": ["a", "b", "c", "d", "e"], "experience_years": 3}));
        assert_eq!(below.decision, Decision::Reject);
    }

    // ── Named-skill policy ──────────────────────────────────────────────────

    #[test]
    fn test_named_python_sql_mca() {
        // 30 + 20 + 0 + 20 + 20
        let result = named(json!({
            "skills": ["python", "sql"], "experience_years": 2, "education": "mca"
        }));
        assert_eq!(result, ScoreResult { score: 90, decision: Decision::Shortlist });
    }

    #[test]
    fn test_named_empty_record_rejects() {
        let result = named(json!({"skills": [], "experience_years": 0, "education": ""}));
        assert_eq!(result, ScoreResult { score: 0, decision: Decision::Reject });
    }

    #[test]
    fn test_named_matches_exactly_after_normalizing() {
        let result = named(json!({"skills": ["  Python ", "PostgreSQL"]}));
        // python (30) + one extra skill (5); "postgresql" is not "sql"
        assert_eq!(result.score, 35);
    }

    #[test]
    fn test_named_breadth_bonus_without_core_skills() {
        let result = named(json!({"skills": ["excel", "aws", "go"]}));
        assert_eq!(result.score, 15);
    }

    #[test]
    fn test_named_ignores_non_string_skills() {
        let result = named(json!({"skills": ["python", 1, null, ["sql"]]}));
        assert_eq!(result.score, 30);
    }

    #[test]
    fn test_named_education_exact_match_only() {
        assert_eq!(named(json!({"education": " BTech "})).score, 20);
        assert_eq!(named(json!({"education": "MSc"})).score, 20);
        assert_eq!(named(json!({"education": "MCA from Pune University"})).score, 0);
        assert_eq!(named(json!({"education": "bca"})).score, 0);
    }

    #[test]
    fn test_named_has_no_ceiling() {
        let mut skills = vec!["python".to_string(), "sql".to_string()];
        skills.extend((0..20).map(|i| format!("tool{i}")));
        let result = named(json!({"skills": skills, "experience_years": 5, "education": "msc"}));
        // 50 + 100 + 30 + 20
        assert_eq!(result.score, 200);
        assert_eq!(result.decision, Decision::Shortlist);
    }

    #[test]
    fn test_named_negative_experience_clamped() {
        assert_eq!(named(json!({"experience_years": -3})).score, 0);
    }

    // ── Policy selection ────────────────────────────────────────────────────

    #[test]
    fn test_policy_parsing() {
        assert_eq!("breadth".parse::<ScoringPolicy>().unwrap(), ScoringPolicy::Breadth);
        assert_eq!(" Named-Skill ".parse::<ScoringPolicy>().unwrap(), ScoringPolicy::NamedSkill);
        assert!("weighted".parse::<ScoringPolicy>().is_err());
        assert_eq!(ScoringPolicy::default().scorer().name(), "breadth");
        assert_eq!(ScoringPolicy::NamedSkill.scorer().name(), "named-skill");
    }

    #[test]
    fn test_decision_round_trips_through_text() {
        for decision in [Decision::Shortlist, Decision::Reject] {
            assert_eq!(decision.as_str().parse::<Decision>().unwrap(), decision);
        }
        assert_eq!(serde_json::to_value(Decision::Shortlist).unwrap(), json!("shortlist"));
        assert!("maybe".parse::<Decision>().is_err());
    }

    // ── Properties ──────────────────────────────────────────────────────────

    fn skill_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            4 => "[a-zA-Z ]{0,12}".prop_map(Value::from),
            1 => Just(Value::from("python")),
            1 => Just(Value::from("SQL")),
            1 => any::<i64>().prop_map(Value::from),
            1 => Just(Value::Null),
        ]
    }

    fn years_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            any::<i64>().prop_map(Value::from),
            any::<f64>().prop_map(|f| serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number)),
            "[0-9 -]{0,6}".prop_map(Value::from),
            Just(Value::Null),
            Just(Value::Bool(true)),
        ]
    }

    fn education_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::from("mca")),
            Just(Value::from("BCA")),
            Just(Value::from(" btech ")),
            "[a-zA-Z .]{0,20}".prop_map(Value::from),
            Just(Value::Null),
            any::<u16>().prop_map(Value::from),
        ]
    }

    fn record_strategy() -> impl Strategy<Value = AttributeRecord> {
        (
            prop::collection::vec(skill_value(), 0..30),
            years_value(),
            education_value(),
        )
            .prop_map(|(skills, years, education)| {
                record(json!({"skills": skills, "experience_years": years, "education": education}))
            })
    }

    /// Rebuilds `r` from its normalized form, optionally with one more skill.
    fn rebuilt(r: &AttributeRecord, extra: Option<Value>) -> AttributeRecord {
        let mut skills: Vec<Value> = r.normalized().skills.into_iter().map(Value::from).collect();
        skills.extend(extra);
        record(json!({
            "skills": skills,
            "experience_years": r.experience_years(),
            "education": r.education(),
        }))
    }

    proptest! {
        #[test]
        fn breadth_score_is_bounded(r in record_strategy()) {
            prop_assert!(BreadthScorer.score(&r).score <= MAX_SCORE);
        }

        #[test]
        fn decision_agrees_with_threshold(r in record_strategy()) {
            for scorer in [ScoringPolicy::Breadth.scorer(), ScoringPolicy::NamedSkill.scorer()] {
                let result = scorer.score(&r);
                prop_assert_eq!(
                    result.decision == Decision::Shortlist,
                    result.score >= SHORTLIST_THRESHOLD
                );
            }
        }

        #[test]
        fn scoring_is_idempotent(r in record_strategy()) {
            prop_assert_eq!(BreadthScorer.score(&r), BreadthScorer.score(&r));
            prop_assert_eq!(NamedSkillScorer.score(&r), NamedSkillScorer.score(&r));
        }

        #[test]
        fn adding_a_skill_never_lowers_the_score(r in record_strategy(), extra in skill_value()) {
            let base = rebuilt(&r, None);
            let grown = rebuilt(&r, Some(extra));
            prop_assert!(BreadthScorer.score(&grown).score >= BreadthScorer.score(&base).score);
            prop_assert!(NamedSkillScorer.score(&grown).score >= NamedSkillScorer.score(&base).score);
        }

        #[test]
        fn experience_contribution_is_capped(years in 3u32..10_000) {
            let capped = record(json!({"experience_years": 3}));
            let more = record(json!({"experience_years": years}));
            prop_assert_eq!(BreadthScorer.score(&capped), BreadthScorer.score(&more));
            prop_assert_eq!(NamedSkillScorer.score(&capped), NamedSkillScorer.score(&more));
        }
    }
}
