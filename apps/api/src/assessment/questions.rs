//! Question Set — the fixed, ordered list of assessment prompts.
//!
//! A question's identity is its position in this list; the scoring
//! contract depends on `QUESTION_COUNT` staying in sync with it.

use serde::Serialize;

/// Inclusive rating scale bounds (1 = strong no / no risk, 10 = strong yes / high risk).
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 10;

/// Section a question belongs to. Used for grouping in the questions
/// endpoint; has no effect on scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    JobSecurity,
    ManagerTeam,
    CareerGrowth,
    Wellbeing,
    ExitReadiness,
    Automation,
}

#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub text: &'static str,
    pub category: Category,
}

const fn q(text: &'static str, category: Category) -> Question {
    Question { text, category }
}

/// The full assessment, in presentation order.
pub const QUESTIONS: &[Question] = &[
    // Job security
    q(
        "Has your company announced any recent layoffs or restructuring?",
        Category::JobSecurity,
    ),
    q(
        "Have any colleagues in your team been let go recently?",
        Category::JobSecurity,
    ),
    q("Has your department’s budget been cut?", Category::JobSecurity),
    q(
        "Has there been a reduction in your workload?",
        Category::JobSecurity,
    ),
    q(
        "Have your responsibilities been reassigned to others or automated?",
        Category::JobSecurity,
    ),
    q(
        "Are you hearing more rumors than usual about organizational changes?",
        Category::JobSecurity,
    ),
    // Manager & team behaviour
    q(
        "Has your manager stopped giving you feedback or coaching?",
        Category::ManagerTeam,
    ),
    q(
        "Have you been left out of important meetings or communications?",
        Category::ManagerTeam,
    ),
    q(
        "Are you receiving fewer new projects or responsibilities than before?",
        Category::ManagerTeam,
    ),
    q(
        "Has your performance been questioned recently (formally or informally)?",
        Category::ManagerTeam,
    ),
    q(
        "Do you feel your work is being overly scrutinized or micromanaged?",
        Category::ManagerTeam,
    ),
    q(
        "Do you sense tension or awkwardness when you interact with your manager?",
        Category::ManagerTeam,
    ),
    // Career growth & motivation
    q(
        "Have you been passed over for a promotion or raise you were expecting?",
        Category::CareerGrowth,
    ),
    q(
        "Do you feel like you’re no longer growing or learning in your role?",
        Category::CareerGrowth,
    ),
    q("Have you lost interest in your work?", Category::CareerGrowth),
    q(
        "Are you working in the same role for more than 3 years with no progression?",
        Category::CareerGrowth,
    ),
    q(
        "Have you recently considered studying or switching industries?",
        Category::CareerGrowth,
    ),
    // Mental & emotional health
    q(
        "Do you feel anxious or stressed most days before starting work?",
        Category::Wellbeing,
    ),
    q(
        "Do you feel physically or emotionally exhausted after work?",
        Category::Wellbeing,
    ),
    q(
        "Have you felt dread about going to work for several weeks?",
        Category::Wellbeing,
    ),
    q(
        "Do you feel disconnected or unmotivated at work?",
        Category::Wellbeing,
    ),
    // Personal readiness to leave
    q(
        "Have you updated your CV in the last 3 months?",
        Category::ExitReadiness,
    ),
    q(
        "Are you currently applying for other jobs or thinking about it often?",
        Category::ExitReadiness,
    ),
    q(
        "Do you have savings or a financial cushion to survive a few months without work?",
        Category::ExitReadiness,
    ),
    q(
        "Have you spoken to a recruiter or mentor about changing roles recently?",
        Category::ExitReadiness,
    ),
    // Automation exposure
    q(
        "Do you feel your job could be done by AI or automation within 2 years?",
        Category::Automation,
    ),
];

/// Number of ratings a submission must carry.
pub const QUESTION_COUNT: usize = QUESTIONS.len();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_count_is_26() {
        assert_eq!(QUESTION_COUNT, 26);
    }

    #[test]
    fn test_no_question_is_empty() {
        assert!(QUESTIONS.iter().all(|q| !q.text.trim().is_empty()));
    }

    #[test]
    fn test_every_category_is_represented() {
        for cat in [
            Category::JobSecurity,
            Category::ManagerTeam,
            Category::CareerGrowth,
            Category::Wellbeing,
            Category::ExitReadiness,
            Category::Automation,
        ] {
            assert!(
                QUESTIONS.iter().any(|q| q.category == cat),
                "no questions in {cat:?}"
            );
        }
    }

    #[test]
    fn test_rating_scale_bounds() {
        assert_eq!(MIN_RATING, 1);
        assert_eq!(MAX_RATING, 10);
    }
}
