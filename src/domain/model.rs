use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const NAME_NOT_FOUND: &str = "Name not found";
pub const H_INDEX_NOT_FOUND: &str = "H-Index not found";
pub const I10_INDEX_NOT_FOUND: &str = "i10-Index not found";
pub const NO_TITLE: &str = "No Title";
pub const NO_LINK: &str = "#";
pub const NO_CITATIONS: &str = "0";
pub const UNKNOWN_YEAR: &str = "Unknown Year";

/// 單一學者頁面的擷取結果。欄位找不到時一律以預設值補上，結構永遠完整。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Citations")]
    pub total_citations: u64,
    #[serde(rename = "H_Index")]
    pub h_index: String,
    #[serde(rename = "i10_Index")]
    pub i10_index: String,
    #[serde(rename = "Yearly_Citations")]
    pub yearly_citations: BTreeMap<String, u64>,
    #[serde(rename = "Papers")]
    pub papers: Vec<PaperRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    pub title: String,
    pub link: String,
    pub citations: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub error: String,
}

/// 每個輸入來源恰好對應一個項目。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileOutcome {
    Profile(ProfileRecord),
    Error(ErrorRecord),
}

impl ProfileOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, ProfileOutcome::Error(_))
    }

    pub fn as_profile(&self) -> Option<&ProfileRecord> {
        match self {
            ProfileOutcome::Profile(profile) => Some(profile),
            ProfileOutcome::Error(_) => None,
        }
    }
}

pub type BatchResult = Vec<ProfileOutcome>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub papers: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[ProfileOutcome]) -> Self {
        let succeeded = results.iter().filter(|r| !r.is_error()).count();
        let papers = results
            .iter()
            .filter_map(ProfileOutcome::as_profile)
            .map(|p| p.papers.len())
            .sum();

        Self {
            total: results.len(),
            succeeded,
            failed: results.len() - succeeded,
            papers,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub results: BatchResult,
    pub json_output: String,
    pub csv_output: String,
    pub summary: BatchSummary,
}
