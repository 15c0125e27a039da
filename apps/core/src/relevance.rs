use std::collections::BTreeSet;

use crate::model::KnowledgeItem;

// Weights in hundredths.
const TITLE_POINTS: u32 = 50;
const CATEGORY_POINTS: u32 = 30;
const TAG_POINTS: u32 = 20;
const TERM_IN_TITLE_POINTS: u32 = 10;
const TERM_IN_TAGS_POINTS: u32 = 5;

pub const MAX_POINTS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Relevance(u32);

impl Relevance {
    pub fn points(self) -> u32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / MAX_POINTS as f64
    }

    pub fn exceeds(self, threshold: f64) -> bool {
        self.as_f64() > threshold
    }
}

/// Lower-cased query words worth matching on their own: anything longer than
/// two characters, or a capitalised word such as a product or team name.
pub fn search_terms(query: &str) -> BTreeSet<String> {
    query
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| {
            word.chars().count() > 2 || word.chars().next().is_some_and(char::is_uppercase)
        })
        .map(str::to_lowercase)
        .collect()
}

pub fn score(query: &str, item: &KnowledgeItem) -> f64 {
    score_with_terms(query, &search_terms(query), item).as_f64()
}

/// Case-insensitive containment scoring: whole query in title (+0.5), in
/// category (+0.3), in each tag (+0.2 per tag), then per search term in title
/// (+0.1) and in any tag (+0.05). Capped at 1.0.
pub fn score_with_terms(query: &str, terms: &BTreeSet<String>, item: &KnowledgeItem) -> Relevance {
    let query = query.to_lowercase();
    if query.is_empty() {
        return Relevance::default();
    }

    let title = item.title.to_lowercase();
    let category = item.category.to_lowercase();
    let tags: Vec<String> = item.tags.iter().map(|tag| tag.to_lowercase()).collect();

    let mut points = 0;
    if title.contains(&query) {
        points += TITLE_POINTS;
    }
    if category.contains(&query) {
        points += CATEGORY_POINTS;
    }
    points += TAG_POINTS * tags.iter().filter(|tag| tag.contains(&query)).count() as u32;

    for term in terms {
        if title.contains(term.as_str()) {
            points += TERM_IN_TITLE_POINTS;
        }
        if tags.iter().any(|tag| tag.contains(term.as_str())) {
            points += TERM_IN_TAGS_POINTS;
        }
    }

    Relevance(points.min(MAX_POINTS))
}

#[cfg(test)]
mod tests {
    use super::{score, score_with_terms, search_terms, Relevance};
    use crate::model::KnowledgeItem;

    fn deployment() -> KnowledgeItem {
        KnowledgeItem::new(
            "Deployment best practices",
            "DevOps",
            "server.rack",
            &["deployment", "devops", "best practices", "ci/cd"],
        )
    }

    #[test]
    fn extracts_long_and_capitalised_terms() {
        let terms = search_terms("set up SSO on AWS for me");
        let expected: Vec<&str> = vec!["aws", "for", "set", "sso"];
        assert_eq!(terms.iter().map(String::as_str).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn exact_title_scores_title_and_terms() {
        // 0.5 title + 3 terms * (0.1 title + 0.05 tag)
        let s = score("deployment best practices", &deployment());
        assert!((s - 0.95).abs() < 1e-6, "{s}");
    }

    #[test]
    fn category_and_tag_hits_accumulate() {
        // "devops": category 0.3 + tag 0.2 + term tag 0.05
        let s = score("DevOps", &deployment());
        assert!((s - 0.55).abs() < 1e-6, "{s}");
    }

    #[test]
    fn score_is_capped_at_one() {
        let item = KnowledgeItem::new(
            "Automation",
            "Automation",
            "gear",
            &["automation", "automation rules", "auto automation"],
        );
        assert_eq!(score("automation", &item), 1.0);
    }

    #[test]
    fn unrelated_query_scores_zero() {
        assert_eq!(score("zebra", &deployment()), 0.0);
        assert_eq!(score("", &deployment()), 0.0);
    }

    #[test]
    fn threshold_is_strict() {
        let terms = search_terms("xx");
        let item = KnowledgeItem::new("t", "xx-cat", "i", &[]);
        let relevance = score_with_terms("xx", &terms, &item);
        assert_eq!(relevance.points(), 30);
        assert!(!relevance.exceeds(0.3));
        assert!(relevance.exceeds(0.29));
        assert!(Relevance::default() < relevance);
    }

    #[test]
    fn threshold_between_hundredths_is_not_rounded() {
        let relevance = Relevance(31);
        assert!(relevance.exceeds(0.305));
        assert!(!Relevance(30).exceeds(0.305));
        assert!(!relevance.exceeds(0.31));
    }
}
