//! 類似語の提案（完全一致で見つからなかったときのみ使う）

use strsim::normalized_levenshtein;

/// 提案の最大件数
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;
/// 提案に含める類似度の下限
pub const DEFAULT_MIN_SIMILARITY: f64 = 0.6;

/// 0.0〜1.0 の正規化済み類似度
///
/// 正規化レーベンシュタイン距離（`1 - 編集距離 / 長い方の文字数`）。
/// 例: "aple" と "apple" は 1 文字の挿入で 0.8、同一文字列は 1.0。
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b)
}

/// `query` に近い候補を類似度の高い順に最大 `max_results` 件返します。
///
/// 同点の場合は `candidates` の順序を保つ。状態は一切変更しない。
pub fn suggest<'a, I>(query: &str, candidates: I, max_results: usize, min_similarity: f64) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<(f64, &str)> = candidates
        .into_iter()
        .map(|candidate| (similarity(query, candidate), candidate))
        .filter(|(score, _)| score.is_finite() && *score >= min_similarity)
        .collect();

    // sort_by は安定ソート
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    scored
        .into_iter()
        .take(max_results)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
