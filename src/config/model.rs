use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::batch::DEFAULT_WORKERS;

/// Disclaimer attached to runs over automatically corrected dataset
/// variants.
pub const AUTOCORRECT_NOTICE: &str = "This dataset has been corrected using an automated system \
    without human input. The correction does not imply the presence or absence of batch effects \
    in the original data. The user is solely responsible for assessing batch effects (e.g. by \
    using our assessment tools) and deciding whether or not to use the corrected data, which may \
    or may not have mitigated some useful biological information along with any technical \
    artifacts.";

fn default_marker() -> String {
    "MBATCH_SUCCESS.txt".to_string()
}

fn default_archive() -> String {
    "ResultSet.zip".to_string()
}

fn default_run_label() -> String {
    "Data Run".to_string()
}

fn default_level_labels() -> Vec<String> {
    [
        "Version",
        "Program",
        "Disease",
        "Workflow",
        "Data Type",
        "Algorithm",
        "Diagram Type",
        "Sub-Type",
    ]
    .map(str::to_string)
    .to_vec()
}

fn default_diagram_path() -> Vec<String> {
    [
        "current",
        "TCGA",
        "KIRC",
        "methylation",
        "All-original",
        "PCA",
        "BatchId",
        "ManyToMany",
        "PCAValues",
    ]
    .map(str::to_string)
    .to_vec()
}

fn default_workers() -> usize {
    DEFAULT_WORKERS
}

fn default_notice_variants() -> Vec<String> {
    [
        "EB_withPara",
        "EB_withNonpara",
        "MP_overall",
        "MP_batch",
        "ANOVA_adj",
        "ANOVA_unadj",
        "RBN_Replicates",
        "RBN_Pseudoreps",
        "EBN_Plus",
    ]
    .map(str::to_string)
    .to_vec()
}

fn default_notice_text() -> String {
    AUTOCORRECT_NOTICE.to_string()
}

/// Run configuration, loaded from `navindex.toml` and overridden by CLI
/// flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Marker filename signalling an archived dataset directory.
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Archive filename expected alongside the marker.
    #[serde(default = "default_archive")]
    pub archive: String,

    /// Label used for the run node itself.
    #[serde(default = "default_run_label")]
    pub run_label: String,

    /// Labels per tree depth; depths past the list use the diagram label.
    #[serde(default = "default_level_labels")]
    pub labels: Vec<String>,

    /// Child-name selectors a client pre-selects; `*` entries resolve at
    /// build time.
    #[serde(default = "default_diagram_path")]
    pub default_path: Vec<String>,

    /// Worker-pool size for the per-dataset batch.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Tooltip table path.
    #[serde(default)]
    pub tooltips: Option<PathBuf>,

    /// External archiver command line.
    #[serde(default)]
    pub archiver: Option<String>,

    #[serde(default)]
    pub notice: NoticeConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            archive: default_archive(),
            run_label: default_run_label(),
            labels: default_level_labels(),
            default_path: default_diagram_path(),
            workers: default_workers(),
            tooltips: None,
            archiver: None,
            notice: NoticeConfig::default(),
        }
    }
}

/// Auto-correction disclaimer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NoticeConfig {
    /// Dataset variants that get the disclaimer.
    #[serde(default = "default_notice_variants")]
    pub variants: Vec<String>,

    /// Disclaimer text.
    #[serde(default = "default_notice_text")]
    pub text: String,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            variants: default_notice_variants(),
            text: default_notice_text(),
        }
    }
}

impl NoticeConfig {
    /// Notice for a dataset variant: the disclaimer when the variant is in
    /// the configured list, the empty string otherwise.
    #[must_use]
    pub fn for_variant(&self, variant: Option<&str>) -> String {
        variant
            .filter(|v| self.variants.iter().any(|known| known == v))
            .map_or_else(String::new, |_| self.text.clone())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
