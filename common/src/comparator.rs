//! 必要スキルと教授スキルの突き合わせ

use crate::types::{ComparisonResult, SkillToken};
use std::collections::BTreeSet;

/// 必要スキル（技術 ∪ 汎用）と教授スキルを比較する
///
/// 空集合を含むどの入力に対しても全域的に定義される。
/// matched/missing は required を、matched/extra は taught を分割する。
pub fn compare(
    required_tech: &[SkillToken],
    required_general: &[SkillToken],
    taught: &BTreeSet<SkillToken>,
) -> ComparisonResult {
    let required: BTreeSet<SkillToken> = required_tech
        .iter()
        .chain(required_general)
        .cloned()
        .collect();

    let (matched, missing): (BTreeSet<SkillToken>, BTreeSet<SkillToken>) =
        required.iter().cloned().partition(|skill| taught.contains(skill));

    let extra = taught.difference(&required).cloned().collect();

    ComparisonResult { matched, missing, extra }
}
