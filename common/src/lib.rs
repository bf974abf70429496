//! Skill Gap Common Library
//!
//! 職種の必要スキルとプログラムの教授スキルを突き合わせるコア。
//! I/Oを持たず、読み込み済みのテーブルと選択状態だけを受け取る。

pub mod types;
pub mod error;
pub mod table;
pub mod normalizer;
pub mod filter;
pub mod comparator;
pub mod report;
pub mod view;
pub mod export;

pub use types::{ComparisonResult, JobColumn, JobRecord, ProgramSkillRecord, Selection, SkillToken};
pub use error::{Error, Result};
pub use table::{jobs_from_table, program_skills_from_table, RawTable};
pub use normalizer::{normalize, normalize_token, title_case};
pub use filter::{filter_jobs, filter_program_skills, list_distinct, list_job_titles, list_program_units};
pub use comparator::compare;
pub use report::{compose_report, report_file_name, REPORT_MIME_TYPE};
pub use view::{evaluate, render_view, Evaluation, JobSkillView};
