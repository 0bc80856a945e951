//! Fixed catalog of diagram-recognition rules.
//!
//! Each diagram family produced by the analysis pipeline is identified by
//! its filename shape. Rules are checked in table order and a filename
//! matches at most one rule; companion derivation is a pure string rewrite
//! over the matched file's archive-relative location and never touches the
//! file system.

use std::collections::BTreeSet;

use regex::Regex;

/// Run summary image recognized directly under an archive root.
pub const RUN_INFO_IMAGE: &str = "RunInfo.png";
/// Dispersion-criterion overview table recognized directly under an archive
/// root.
pub const DSC_OVERVIEW_TABLE: &str = "DSCOverview.tsv";
/// Algorithm name for the run summary image.
pub const STANDARDIZED_DATA: &str = "Standardized Data";
/// Algorithm name for the dispersion-criterion overview.
pub const DSC: &str = "DSC";

/// What a rule match means for further descent below the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The matched algorithm owns the directory's subtree; do not descend.
    Stop,
    /// Descend anyway when sibling subdirectories exist, because nested
    /// per-subtype outputs coexist with the matched overview file.
    ContinueIfSubdirs,
}

#[derive(Debug)]
enum Matcher {
    Exact(&'static str),
    ExactNoCase(&'static str),
    Pattern(Regex),
}

impl Matcher {
    fn matches(&self, filename: &str) -> bool {
        match self {
            Self::Exact(name) => filename == *name,
            Self::ExactNoCase(name) => filename.eq_ignore_ascii_case(name),
            Self::Pattern(pattern) => pattern.is_match(filename),
        }
    }
}

/// One recognition rule: filename shape, algorithm name, companion-file
/// derivation and termination class.
#[derive(Debug)]
pub struct DiagramRule {
    pub algorithm: &'static str,
    pub termination: Termination,
    matcher: Matcher,
    replacements: &'static [(&'static str, &'static str)],
    siblings: &'static [&'static str],
}

impl DiagramRule {
    fn matches(&self, filename: &str) -> bool {
        self.matcher.matches(filename)
    }

    /// Derives the companion-file locations for a matched diagram. The
    /// results are advisory; the consumer tolerates absent files.
    #[must_use]
    pub fn companions(&self, internal_location: &str) -> BTreeSet<String> {
        let mut others = BTreeSet::new();
        for (from, to) in self.replacements {
            others.insert(internal_location.replace(from, to));
        }
        for sibling in self.siblings {
            others.insert(sibling_location(internal_location, sibling));
        }
        others
    }
}

fn sibling_location(internal_location: &str, name: &str) -> String {
    internal_location
        .rsplit_once('/')
        .map_or_else(|| name.to_string(), |(parent, _)| format!("{parent}/{name}"))
}

/// The ordered rule table, compiled once and shared read-only.
#[derive(Debug)]
pub struct DiagramCatalog {
    rules: Vec<DiagramRule>,
}

impl Default for DiagramCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramCatalog {
    #[must_use]
    pub fn new() -> Self {
        let rules = vec![
            DiagramRule {
                algorithm: "Boxplot",
                termination: Termination::Stop,
                matcher: pattern(r"^BoxPlot_.*_BoxData-.*\.tsv$"),
                replacements: &[("_BoxData-", "_Annotations-"), ("_BoxData-", "_Histogram-")],
                siblings: &[],
            },
            DiagramRule {
                algorithm: "MutBatch",
                termination: Termination::Stop,
                matcher: pattern(r"^FullMutCounts_.*\.PNG$"),
                replacements: &[("_Diagram.PNG", ".tsv")],
                siblings: &["callReference.tsv"],
            },
            DiagramRule {
                algorithm: "PCA",
                termination: Termination::Stop,
                matcher: Matcher::Exact("PCAValues.tsv"),
                replacements: &[],
                siblings: &["PCAAnnotations.tsv"],
            },
            DiagramRule {
                algorithm: "HierarchicalClustering",
                termination: Termination::Stop,
                matcher: Matcher::Exact("HCData.tsv"),
                replacements: &[],
                siblings: &["HCOrder.tsv"],
            },
            DiagramRule {
                algorithm: "SupervisedClustering",
                termination: Termination::Stop,
                matcher: pattern(r"^SupervisedClust_Diagram-.*\.png$"),
                replacements: &[("_Diagram-", "_Legend-")],
                siblings: &[],
            },
            DiagramRule {
                algorithm: "CDP",
                termination: Termination::Stop,
                matcher: pattern(r"^CDP_Plot_.*_Diagram\.(?:png|PNG)$"),
                replacements: &[],
                siblings: &[],
            },
            DiagramRule {
                algorithm: "NGCHM",
                termination: Termination::Stop,
                matcher: pattern(r"^.*_ngchm\.ngchm$"),
                replacements: &[],
                siblings: &[],
            },
            DiagramRule {
                algorithm: STANDARDIZED_DATA,
                termination: Termination::Stop,
                matcher: Matcher::ExactNoCase(RUN_INFO_IMAGE),
                replacements: &[],
                siblings: &["RunInfo.tsv", "release.tsv"],
            },
            DiagramRule {
                algorithm: DSC,
                termination: Termination::ContinueIfSubdirs,
                matcher: Matcher::Exact(DSC_OVERVIEW_TABLE),
                replacements: &[],
                siblings: &[],
            },
        ];
        Self { rules }
    }

    /// First rule matching the filename, in table order.
    #[must_use]
    pub fn classify(&self, filename: &str) -> Option<&DiagramRule> {
        self.rules.iter().find(|rule| rule.matches(filename))
    }
}

fn pattern(source: &str) -> Matcher {
    Matcher::Pattern(Regex::new(source).expect("valid diagram pattern"))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
