//! Work-from-home card: Interpreter job link.

use crate::document::{self, Page};
use crate::pipeline::{PassReport, Rewrite};
use crate::rules::{WFH_HEADING, WFH_JOB_URL};

pub struct WfhCard;

impl Rewrite for WfhCard {
    fn name(&self) -> &'static str {
        "wfh-card"
    }

    fn summary(&self) -> &'static str {
        "adding the Interpreter job link to the work-from-home card"
    }

    fn apply(&self, page: &Page) -> PassReport {
        let mut report = PassReport::new(self.name());
        let mut hits = 0;

        for heading in page.select_all("h3.office-name") {
            if heading.as_node().text_contents().trim() != WFH_HEADING {
                continue;
            }
            let Some(list) = document::next_sibling_element(heading.as_node(), "ul") else {
                continue;
            };
            let link = format!(
                r#"<a href="{WFH_JOB_URL}" target="_blank" rel="noopener noreferrer" class="office-map-btn">💼 Interpreter Job</a>"#
            );
            document::insert_fragment_after(&list, &link);
            hits += 1;
        }

        report.record(WFH_HEADING, hits);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpreter_link_is_appended_after_the_list() {
        // the heading carries an extra attribute; lookup is by class and text
        let page = Page::parse(
            r#"<html><body><div class="office-card"><h3 class="office-name" id="wfh">居家办公</h3><ul class="office-features"><li>灵活</li></ul></div></body></html>"#,
        );
        let report = WfhCard.apply(&page);
        assert_eq!(report.total_hits(), 1);

        let link = page.select_all("div.office-card a.office-map-btn").remove(0);
        assert_eq!(link.attributes.borrow().get("href"), Some(WFH_JOB_URL));
        assert_eq!(link.as_node().text_contents(), "💼 Interpreter Job");
        // the feature list itself is untouched
        assert!(page.to_html().unwrap().contains("<li>灵活</li>"));
    }

    #[test]
    fn test_missing_card_degrades_to_zero_hits() {
        let page = Page::parse("<html><body></body></html>");
        let report = WfhCard.apply(&page);
        assert_eq!(report.total_hits(), 0);
    }
}
