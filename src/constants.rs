/// Application-wide constants to avoid magic values throughout the codebase.
/// HTTP status code constants
pub mod http_status {
    /// HTTP 200 OK - successful response
    pub const OK: u16 = 200;
    /// HTTP 405 Method Not Allowed - target rejects HEAD
    pub const METHOD_NOT_ALLOWED: u16 = 405;
    /// HTTP 501 Not Implemented - target does not know HEAD
    pub const NOT_IMPLEMENTED: u16 = 501;
}

/// Default configuration values
pub mod defaults {
    /// Default per-request timeout in seconds (CDX queries and probes)
    pub const TIMEOUT_SECONDS: u64 = 60;
    /// Default number of concurrent probe workers
    pub const CONCURRENCY: usize = 20;
    /// Workers are never clamped below this, whatever the caller asks for
    pub const MIN_WORKERS: usize = 4;
    /// Default output directory
    pub const OUTDIR: &str = "wayscan_output";
    /// Status code counted as "alive"
    pub const TARGET_STATUS: u16 = super::http_status::OK;
    /// Redirects followed per request before giving up
    pub const MAX_REDIRECTS: usize = 10;
}

/// Progress reporting cadence
pub mod progress {
    /// Emit a progress snapshot every this many completed probes
    /// (the final completion always reports, regardless of cadence)
    pub const REPORT_EVERY: usize = 100;
}

/// Wayback Machine CDX API
pub mod cdx {
    /// Default CDX index endpoint
    pub const API_ENDPOINT: &str = "https://web.archive.org/cdx/search/cdx";
    /// Field returned per row; also the header token in JSON responses
    pub const FIELD_ORIGINAL: &str = "original";
}

/// User agent sent on every outbound request
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Classification rule tables.
///
/// Membership is checked against lowercased URL paths and query-parameter
/// names, so every entry here is lowercase.
pub mod rules {
    /// Path suffix -> category name. First match wins.
    pub const EXTENSIONS: [(&str, &str); 3] = [(".json", "json"), (".js", "js"), (".php", "php")];

    /// Query-parameter names associated with open-redirect sinks.
    /// Any intersection with a URL's parameter names tags the URL; this is a
    /// deliberately coarse, high-recall heuristic.
    pub const OPEN_REDIRECT_PARAMS: [&str; 24] = [
        "go",
        "return",
        "r_url",
        "returnurl",
        "returnuri",
        "locationurl",
        "goto",
        "return_url",
        "return_uri",
        "ref",
        "referrer",
        "backurl",
        "returnto",
        "successurl",
        "redirect",
        "redirect_url",
        "redirect_uri",
        "redirecturi",
        "redirecturl",
        "url",
        "next",
        "target",
        "site",
        "page",
    ];

    /// Query-parameter names that commonly reflect user input (XSS candidates):
    /// search terms, free-text fields, IDs, and content/format selectors.
    pub const XSS_PARAMS: [&str; 35] = [
        "search",
        "q",
        "query",
        "s",
        "term",
        "keyword",
        "keywords",
        "text",
        "msg",
        "message",
        "title",
        "body",
        "id",
        "itemid",
        "catid",
        "post_id",
        "page_id",
        "user_id",
        "uid",
        "pid",
        "name",
        "value",
        "data",
        "input",
        "output",
        "format",
        "mode",
        "type",
        "html",
        "content",
        "view",
        "section",
        "comment",
        "lang",
        "locale",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_tables_are_lowercase() {
        for (ext, _) in rules::EXTENSIONS {
            assert_eq!(ext, ext.to_lowercase());
        }
        for p in rules::OPEN_REDIRECT_PARAMS {
            assert_eq!(p, p.to_lowercase());
        }
        for p in rules::XSS_PARAMS {
            assert_eq!(p, p.to_lowercase());
        }
    }

    #[test]
    fn test_defaults_are_sane() {
        assert!(defaults::CONCURRENCY >= defaults::MIN_WORKERS);
        assert!(defaults::TIMEOUT_SECONDS > 0);
        assert!(progress::REPORT_EVERY > 0);
        assert_eq!(defaults::TARGET_STATUS, http_status::OK);
    }
}
