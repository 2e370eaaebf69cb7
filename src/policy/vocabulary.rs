// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mooring-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mooring and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Keyword vocabulary driving semantic branch classification.
//!
//! The term sets are configuration, not constants: they can be replaced
//! wholesale (e.g. for localization) or injected as fixtures in tests. The
//! built-in default covers the English and Chinese wording the stock node
//! palette produces.

use std::fmt;

use serde::Deserialize;
use smol_str::SmolStr;

/// Positive/negative term sets scanned against node text.
///
/// Terms are matched as case-insensitive substrings; they are normalized to
/// lowercase at construction so lookups stay allocation-free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchVocabulary {
    positive: Vec<SmolStr>,
    negative: Vec<SmolStr>,
}

impl BranchVocabulary {
    pub fn new<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        Self {
            positive: normalize_terms(positive),
            negative: normalize_terms(negative),
        }
    }

    pub fn from_json(text: &str) -> Result<Self, VocabularyError> {
        let doc: VocabularyDoc =
            serde_json::from_str(text).map_err(|source| VocabularyError::Json { source })?;
        Ok(Self::new(doc.positive, doc.negative))
    }

    pub fn positive_terms(&self) -> &[SmolStr] {
        &self.positive
    }

    pub fn negative_terms(&self) -> &[SmolStr] {
        &self.negative
    }

    /// True if any positive term occurs in `text`. Expects lower-cased text.
    pub fn has_positive(&self, text: &str) -> bool {
        self.positive.iter().any(|term| text.contains(term.as_str()))
    }

    /// True if any negative term occurs in `text`. Expects lower-cased text.
    pub fn has_negative(&self, text: &str) -> bool {
        self.negative.iter().any(|term| text.contains(term.as_str()))
    }
}

impl Default for BranchVocabulary {
    fn default() -> Self {
        Self::new(
            [
                "success",
                "completed",
                "complete",
                "continue",
                "execute",
                "generate",
                "save",
                "confirm",
                "approved",
                "done",
                "pass",
                "成功",
                "完成",
                "继续",
                "执行",
                "生成",
                "保存",
                "确认",
                "通过",
            ],
            [
                "failure",
                "failed",
                "error",
                "skip",
                "cancel",
                "reject",
                "rollback",
                "retry",
                "warning",
                "abort",
                "timeout",
                "失败",
                "错误",
                "跳过",
                "取消",
                "拒绝",
                "回滚",
                "重试",
                "警告",
                "异常",
                "中断",
            ],
        )
    }
}

#[derive(Debug, Deserialize)]
struct VocabularyDoc {
    #[serde(default)]
    positive: Vec<SmolStr>,
    #[serde(default)]
    negative: Vec<SmolStr>,
}

fn normalize_terms<T>(terms: T) -> Vec<SmolStr>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    terms
        .into_iter()
        .filter_map(|term| {
            let term = term.as_ref().trim().to_lowercase();
            if term.is_empty() {
                None
            } else {
                Some(SmolStr::new(term))
            }
        })
        .collect()
}

#[derive(Debug)]
pub enum VocabularyError {
    Json { source: serde_json::Error },
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { source } => write!(f, "json error in vocabulary: {source}"),
        }
    }
}

impl std::error::Error for VocabularyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BranchVocabulary;

    #[test]
    fn default_vocabulary_covers_both_scripts() {
        let vocabulary = BranchVocabulary::default();
        assert!(vocabulary.has_positive("执行完成"));
        assert!(vocabulary.has_positive("task completed"));
        assert!(vocabulary.has_negative("处理失败"));
        assert!(vocabulary.has_negative("unexpected error"));
        assert!(!vocabulary.has_negative("执行完成"));
    }

    #[test]
    fn terms_are_normalized_to_lowercase() {
        let vocabulary = BranchVocabulary::new(["  OK  ", ""], ["BAD"]);
        assert_eq!(vocabulary.positive_terms().len(), 1);
        assert_eq!(vocabulary.positive_terms()[0], "ok");
        assert!(vocabulary.has_positive("all ok here"));
        assert!(vocabulary.has_negative("bad sign"));
    }

    #[test]
    fn loads_from_json_with_missing_sets_defaulting_to_empty() {
        let vocabulary =
            BranchVocabulary::from_json(r#"{ "positive": ["ready"] }"#).expect("parse");
        assert!(vocabulary.has_positive("ready to go"));
        assert!(vocabulary.negative_terms().is_empty());

        assert!(BranchVocabulary::from_json("not json").is_err());
    }
}
