//! Tests for static backlink extraction against realistic tool result pages

use backlink_runner::extract_backlinks;

const PAGE_URL: &str = "https://tool.example/backlink-maker";

#[test]
fn result_table_links_survive_navigation_noise() {
    // shaped like the typical tool result page: its own nav plus a table
    // of external "backlink created" rows
    let html = r##"
        <html><body>
            <nav>
                <a href="/">Home</a>
                <a href="/contact">Contact</a>
                <a href="https://tool.example/pricing">Pricing</a>
            </nav>
            <table id="results">
                <tr><td><a href="http://www.web-directory-one.com/example.com">OK</a></td></tr>
                <tr><td><a href="https://statsite.net/www.example.com.html">OK</a></td></tr>
                <tr><td><a href="mailto:support@tool.example">help</a></td></tr>
            </table>
            <footer><a href="#top">Back to top</a></footer>
        </body></html>
    "##;

    let links = extract_backlinks(html, PAGE_URL);
    assert_eq!(
        links,
        vec![
            "http://www.web-directory-one.com/example.com".to_string(),
            "https://statsite.net/www.example.com.html".to_string(),
        ]
    );
}

#[test]
fn self_links_and_pseudo_schemes_are_dropped() {
    let html = r##"
        <a href="https://other.com/y">keep</a>
        <a href="/relative">self via resolution</a>
        <a href="javascript:void(0)">js</a>
        <a href="https://tool.example/self">self</a>
    "##;
    let links = extract_backlinks(html, "https://tool.example/x");
    assert_eq!(links, vec!["https://other.com/y".to_string()]);
}

#[test]
fn relative_hrefs_resolve_with_standard_join_semantics() {
    // a relative path resolves against the page URL's directory, lands on
    // the tool host, and is excluded as a self-link
    let html = r#"
        <a href="results/42.html">self</a>
        <a href="../other.html">self</a>
        <a href="//mirror.example-cdn.com/badge.png.html">foreign</a>
    "#;
    let links = extract_backlinks(html, "https://tool.example/gen/index.html");
    assert_eq!(
        links,
        vec!["https://mirror.example-cdn.com/badge.png.html".to_string()]
    );
}

#[test]
fn duplicate_reports_collapse_to_first_seen() {
    let html = r#"
        <a href="https://b.example/ping">1</a>
        <a href="https://a.example/ping">2</a>
        <a href="https://b.example/ping">3</a>
        <a href="https://b.example/ping?x=1">4</a>
    "#;
    let links = extract_backlinks(html, PAGE_URL);
    assert_eq!(
        links,
        vec![
            "https://b.example/ping".to_string(),
            "https://a.example/ping".to_string(),
            "https://b.example/ping?x=1".to_string(),
        ]
    );
}

#[test]
fn page_with_no_anchors_yields_empty_set() {
    let html = "<html><body><p>Processing... please wait</p></body></html>";
    assert!(extract_backlinks(html, PAGE_URL).is_empty());
}

#[test]
fn malformed_hrefs_never_panic() {
    let html = r#"
        <a href="ht!tp://???">broken</a>
        <a href="   ">blank</a>
        <a href="https://ok.example/fine">fine</a>
    "#;
    let links = extract_backlinks(html, PAGE_URL);
    assert_eq!(links, vec!["https://ok.example/fine".to_string()]);
}
