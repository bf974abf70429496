//! 評価結果の端末表示

use skill_gap_common::{render_view, Evaluation};

pub const NO_MATCH_MESSAGE: &str = "⚠ 指定した分野と職種に一致する職種が見つかりません";
pub const INCOMPLETE_MESSAGE: &str = "分野と職種を選択してください";
pub const NO_PROGRAM_MESSAGE: &str = "ℹ プログラム未選択のため比較は行いません";

pub fn render_evaluation(evaluation: &Evaluation) -> String {
    match evaluation {
        Evaluation::Incomplete => format!("{}\n", INCOMPLETE_MESSAGE),
        Evaluation::NoMatch => format!("{}\n", NO_MATCH_MESSAGE),
        Evaluation::Matches(views) => {
            let mut out = String::new();
            if views.iter().any(|v| v.comparison.is_none()) {
                out.push_str(NO_PROGRAM_MESSAGE);
                out.push_str("\n\n");
            }
            for view in views {
                out.push_str(&render_view(view));
                out.push_str("---\n");
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skill_gap_common::{evaluate, JobRecord, ProgramSkillRecord, Selection};

    fn jobs() -> Vec<JobRecord> {
        vec![JobRecord {
            field: Some("Engineering".into()),
            job_title: Some("Backend Developer".into()),
            technical_skills_raw: Some("Python".into()),
            general_skills_raw: Some("Teamwork".into()),
        }]
    }

    #[test]
    fn test_render_no_match() {
        assert!(render_evaluation(&Evaluation::NoMatch).contains(NO_MATCH_MESSAGE));
    }

    #[test]
    fn test_render_without_program_is_informational() {
        let sel = Selection::new(Some("Engineering".into()), Some("Backend Developer".into()), None);
        let text = render_evaluation(&evaluate(&jobs(), &[], &sel));
        assert!(text.starts_with(NO_PROGRAM_MESSAGE));
        assert!(!text.contains(NO_MATCH_MESSAGE));
        assert!(text.contains("Technical Skills:\n  - Python"));
    }

    #[test]
    fn test_no_program_notice_shown_once() {
        let mut rows = jobs();
        let second = JobRecord {
            technical_skills_raw: Some("Go".into()),
            ..rows[0].clone()
        };
        rows.push(second);

        let sel = Selection::new(Some("Engineering".into()), Some("Backend Developer".into()), None);
        let text = render_evaluation(&evaluate(&rows, &[], &sel));
        assert_eq!(text.matches(NO_PROGRAM_MESSAGE).count(), 1);
        assert_eq!(text.matches("Skills for: Backend Developer").count(), 2);
        assert!(!text.to_lowercase().contains("comparison skipped"));
    }

    #[test]
    fn test_render_with_program() {
        let programs = vec![ProgramSkillRecord {
            program_unit: Some("CS101".into()),
            skill: Some("python".into()),
        }];
        let sel = Selection::new(
            Some("Engineering".into()),
            Some("Backend Developer".into()),
            Some("CS101".into()),
        );
        let text = render_evaluation(&evaluate(&jobs(), &programs, &sel));
        assert!(!text.contains(NO_PROGRAM_MESSAGE));
        assert!(text.contains("Missing Skills (Required but not taught):\n  - Teamwork"));
    }
}
