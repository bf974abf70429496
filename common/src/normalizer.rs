//! スキル文字列の正規化
//!
//! カンマ区切りの自由記述を `SkillToken` の列に変換する。

use crate::types::SkillToken;

/// カンマ区切りのスキル文字列を正規化する
///
/// - 分割順を保持
/// - 空セル（`None`）は空の列
/// - 前後空白除去後に空となる要素は捨てる
pub fn normalize(raw: Option<&str>) -> Vec<SkillToken> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.split(',')
        .map(SkillToken::new)
        .filter(|token| !token.is_empty())
        .collect()
}

/// 単一セルを正規化する（分割しない）
pub fn normalize_token(raw: &str) -> SkillToken {
    SkillToken::new(raw)
}

/// 表示用のタイトルケース
///
/// 大文字小文字の区別がない文字（記号・数字・漢字など）の直後を単語の先頭とみなす
/// （`node.js` → `Node.Js`、`python入門a` → `Python入門A`）。
pub fn title_case(token: &SkillToken) -> String {
    let mut result = String::with_capacity(token.as_str().len());
    let mut prev_cased = false;

    for c in token.as_str().chars() {
        if is_cased(c) {
            if prev_cased {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            prev_cased = true;
        } else {
            result.push(c);
            prev_cased = false;
        }
    }

    result
}

fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase()
}
