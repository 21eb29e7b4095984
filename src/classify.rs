//! Static URL classification: extension buckets and vulnerability-parameter
//! heuristics. Pure set-membership lookups, no network involved.

use rustc_hash::FxHashSet;
use std::fmt;
use url::Url;

use crate::constants::rules;
use crate::wayback::dedup_preserve_order;

/// Classification tag attached to a URL. A URL may carry any subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Json,
    Js,
    Php,
    OpenRedirect,
    Xss,
}

impl Category {
    /// Stable short name, used in output file names.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Json => "json",
            Category::Js => "js",
            Category::Php => "php",
            Category::OpenRedirect => "openredirect",
            Category::Xss => "xss",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable rule tables, built once at startup and passed by reference.
#[derive(Debug)]
pub struct RuleTables {
    extensions: Vec<(&'static str, Category)>,
    open_redirect_params: FxHashSet<&'static str>,
    xss_params: FxHashSet<&'static str>,
}

impl Default for RuleTables {
    fn default() -> Self {
        let extensions = rules::EXTENSIONS
            .iter()
            .map(|(ext, name)| {
                let category = match *name {
                    "json" => Category::Json,
                    "js" => Category::Js,
                    "php" => Category::Php,
                    other => unreachable!("unknown extension category: {other}"),
                };
                (*ext, category)
            })
            .collect();

        Self {
            extensions,
            open_redirect_params: rules::OPEN_REDIRECT_PARAMS.iter().copied().collect(),
            xss_params: rules::XSS_PARAMS.iter().copied().collect(),
        }
    }
}

/// Classify a single URL against the rule tables.
///
/// Extension matching is a case-insensitive suffix check on the path, first
/// matching extension wins. Parameter matching is a case-insensitive
/// intersection of the query-parameter names with each keyword set. URLs
/// that fail to parse get no tags.
pub fn classify(url: &str, tables: &RuleTables) -> Vec<Category> {
    let Ok(parsed) = Url::parse(url) else {
        return Vec::new();
    };

    let mut tags = Vec::new();

    let path = parsed.path().to_lowercase();
    for (ext, category) in &tables.extensions {
        if path.ends_with(*ext) {
            tags.push(*category);
            break;
        }
    }

    let param_names: FxHashSet<String> = parsed
        .query_pairs()
        .map(|(key, _)| key.to_lowercase())
        .collect();

    if !param_names.is_empty() {
        if param_names
            .iter()
            .any(|name| tables.open_redirect_params.contains(name.as_str()))
        {
            tags.push(Category::OpenRedirect);
        }
        if param_names
            .iter()
            .any(|name| tables.xss_params.contains(name.as_str()))
        {
            tags.push(Category::Xss);
        }
    }

    tags
}

/// Per-category URL lists, each deduplicated in first-seen order.
#[derive(Debug, Default)]
pub struct Categorized {
    pub json: Vec<String>,
    pub js: Vec<String>,
    pub php: Vec<String>,
    pub open_redirect: Vec<String>,
    pub xss: Vec<String>,
}

impl Categorized {
    /// Category lists paired with their stable names, in report order.
    pub fn as_named_lists(&self) -> [(Category, &Vec<String>); 5] {
        [
            (Category::Json, &self.json),
            (Category::Js, &self.js),
            (Category::Php, &self.php),
            (Category::OpenRedirect, &self.open_redirect),
            (Category::Xss, &self.xss),
        ]
    }
}

/// Run every URL through the classifier and bucket the results.
pub fn categorize(urls: &[String], tables: &RuleTables) -> Categorized {
    let mut categorized = Categorized::default();

    for url in urls {
        for tag in classify(url, tables) {
            match tag {
                Category::Json => categorized.json.push(url.clone()),
                Category::Js => categorized.js.push(url.clone()),
                Category::Php => categorized.php.push(url.clone()),
                Category::OpenRedirect => categorized.open_redirect.push(url.clone()),
                Category::Xss => categorized.xss.push(url.clone()),
            }
        }
    }

    categorized.json = dedup_preserve_order(categorized.json);
    categorized.js = dedup_preserve_order(categorized.js);
    categorized.php = dedup_preserve_order(categorized.php);
    categorized.open_redirect = dedup_preserve_order(categorized.open_redirect);
    categorized.xss = dedup_preserve_order(categorized.xss);

    categorized
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    fn tables() -> RuleTables {
        RuleTables::default()
    }

    #[test]
    fn test_classify__extension_match() {
        assert_eq!(
            classify("http://a/y.json", &tables()),
            vec![Category::Json]
        );
        assert_eq!(classify("http://a/app.JS", &tables()), vec![Category::Js]);
        assert_eq!(
            classify("http://a/index.php", &tables()),
            vec![Category::Php]
        );
        assert!(classify("http://a/readme.txt", &tables()).is_empty());
    }

    #[test]
    fn test_classify__open_redirect_params() {
        assert_eq!(
            classify("http://a/z?go=http://evil", &tables()),
            vec![Category::OpenRedirect]
        );
        // Case-insensitive on parameter names
        assert_eq!(
            classify("http://a/z?ReturnUrl=/home", &tables()),
            vec![Category::OpenRedirect]
        );
    }

    #[test]
    fn test_classify__xss_params() {
        assert_eq!(
            classify("http://a/x?id=1", &tables()),
            vec![Category::Xss]
        );
        assert_eq!(
            classify("http://a/x?Q=term", &tables()),
            vec![Category::Xss]
        );
    }

    #[test]
    fn test_classify__multiple_tags() {
        let tags = classify("http://a/page.php?redirect=/x&search=y", &tables());
        assert_eq!(tags, vec![Category::Php, Category::OpenRedirect, Category::Xss]);
    }

    #[test]
    fn test_classify__no_query_no_param_tags() {
        assert!(classify("http://a/plain", &tables()).is_empty());
    }

    #[test]
    fn test_classify__unparseable_url_gets_no_tags() {
        assert!(classify("not a url", &tables()).is_empty());
    }

    #[test]
    fn test_classify__is_idempotent() {
        let url = "http://a/p.js?next=/x&q=hi";
        assert_eq!(classify(url, &tables()), classify(url, &tables()));
    }

    #[test]
    fn test_classify__blank_param_values_still_count() {
        assert_eq!(
            classify("http://a/x?q", &tables()),
            vec![Category::Xss]
        );
    }

    // Scenario from the recon playbook: three URLs, three distinct buckets.
    #[test]
    fn test_categorize__distinct_buckets() {
        let urls = vec![
            "http://a/x?id=1".to_string(),
            "http://a/y.json".to_string(),
            "http://a/z?go=http://evil".to_string(),
        ];

        let categorized = categorize(&urls, &tables());

        assert_eq!(categorized.json, vec!["http://a/y.json"]);
        assert_eq!(categorized.open_redirect, vec!["http://a/z?go=http://evil"]);
        assert_eq!(categorized.xss, vec!["http://a/x?id=1"]);
        assert!(categorized.js.is_empty());
        assert!(categorized.php.is_empty());
    }

    #[test]
    fn test_categorize__deduplicates_each_bucket() {
        let urls = vec![
            "http://a/y.json".to_string(),
            "http://a/y.json".to_string(),
        ];

        let categorized = categorize(&urls, &tables());
        assert_eq!(categorized.json, vec!["http://a/y.json"]);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(Category::Json.name(), "json");
        assert_eq!(Category::OpenRedirect.name(), "openredirect");
        assert_eq!(Category::Xss.to_string(), "xss");
    }
}
