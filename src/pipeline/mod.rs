//! Page rewrite pipeline.
//!
//! The five content updates are independent rewrite passes applied in fixed
//! order, each consuming the page the previous one left behind. A pass never
//! fails: every rewrite rule inside it records how many locations it changed,
//! and the runner turns zero-hit rules into warnings or a hard error
//! depending on the configured policy.

pub mod transform;

use crate::cli::Unmatched;
use crate::document::Page;
use crate::error::RetouchError;
use crate::{debug, log};

pub use transform::{JohorCard, LinkedinButtons, MapLinks, Watermarks, WfhCard};

// =============================================================================
// Pass seam
// =============================================================================

/// A single rewrite pass over the page.
pub trait Rewrite {
    /// Short name used in reports.
    fn name(&self) -> &'static str;

    /// One-line progress description.
    fn summary(&self) -> &'static str;

    /// Apply the pass, editing the page in place. Rules that find no target
    /// record zero hits; nothing here aborts the run.
    fn apply(&self, page: &Page) -> PassReport;
}

/// Outcome of one rewrite rule within a pass.
#[derive(Debug, Clone)]
pub struct RuleOutcome {
    /// What the rule was looking for.
    pub target: String,
    /// Locations changed in the page.
    pub hits: usize,
}

/// Per-pass application report.
#[derive(Debug, Clone)]
pub struct PassReport {
    pass: &'static str,
    rules: Vec<RuleOutcome>,
}

impl PassReport {
    pub fn new(pass: &'static str) -> Self {
        Self {
            pass,
            rules: Vec::new(),
        }
    }

    /// Record one rule's hit count.
    pub fn record(&mut self, target: impl Into<String>, hits: usize) {
        self.rules.push(RuleOutcome {
            target: target.into(),
            hits,
        });
    }

    pub fn pass(&self) -> &'static str {
        self.pass
    }

    pub fn rules(&self) -> &[RuleOutcome] {
        &self.rules
    }

    /// Total locations changed by this pass.
    pub fn total_hits(&self) -> usize {
        self.rules.iter().map(|rule| rule.hits).sum()
    }

    /// Rules that changed nothing, qualified with the pass name.
    pub fn unmatched(&self) -> impl Iterator<Item = String> + '_ {
        self.rules
            .iter()
            .filter(|rule| rule.hits == 0)
            .map(|rule| format!("{}: {}", self.pass, rule.target))
    }
}

// =============================================================================
// Runner
// =============================================================================

/// The five passes in application order.
pub fn passes() -> [Box<dyn Rewrite>; 5] {
    [
        Box::new(Watermarks),
        Box::new(MapLinks),
        Box::new(JohorCard),
        Box::new(WfhCard),
        Box::new(LinkedinButtons),
    ]
}

/// Run every pass in order and enforce the unmatched-rule policy.
pub fn run(page: &Page, policy: Unmatched) -> Result<Vec<PassReport>, RetouchError> {
    let passes = passes();
    let total = passes.len();
    let mut reports = Vec::with_capacity(total);

    for (i, pass) in passes.iter().enumerate() {
        log!("pass"; "{}/{} {}", i + 1, total, pass.summary());
        let report = pass.apply(page);
        debug!("pass"; "{}: {} edit(s)", pass.name(), report.total_hits());
        reports.push(report);
    }

    let unmatched: Vec<String> = reports.iter().flat_map(PassReport::unmatched).collect();
    match policy {
        Unmatched::Silent => {}
        Unmatched::Warn => {
            for rule in &unmatched {
                log!("warn"; "no match for {rule}");
            }
        }
        Unmatched::Strict => {
            if !unmatched.is_empty() {
                return Err(RetouchError::Unmatched(unmatched));
            }
        }
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_run_in_fixed_order() {
        let page = Page::parse("<html><head></head><body></body></html>");
        let reports = run(&page, Unmatched::Silent).unwrap();
        let order: Vec<&str> = reports.iter().map(PassReport::pass).collect();
        assert_eq!(
            order,
            ["watermark", "map-links", "johor-card", "wfh-card", "linkedin"]
        );
    }

    #[test]
    fn test_strict_policy_fails_on_a_page_missing_everything() {
        let page = Page::parse("<html><head></head><body></body></html>");
        let err = run(&page, Unmatched::Strict).unwrap_err();
        match err {
            RetouchError::Unmatched(rules) => {
                // 13 watermark rules, 7 map rules, Johor, WFH, 6 LinkedIn rules
                assert_eq!(rules.len(), 28);
                assert!(rules.iter().any(|rule| rule.contains("about-tp.html")));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_warn_policy_still_succeeds() {
        let page = Page::parse("<html><head></head><body></body></html>");
        let reports = run(&page, Unmatched::Warn).unwrap();
        assert_eq!(reports.len(), 5);
        assert_eq!(reports.iter().map(PassReport::total_hits).sum::<usize>(), 0);
    }

    #[test]
    fn test_report_tracks_unmatched_rules() {
        let mut report = PassReport::new("demo");
        report.record("found", 2);
        report.record("missing", 0);
        assert_eq!(report.total_hits(), 2);
        let unmatched: Vec<String> = report.unmatched().collect();
        assert_eq!(unmatched, ["demo: missing"]);
    }
}
