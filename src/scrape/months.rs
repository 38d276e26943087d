// src/scrape/months.rs
//
// Link Discovery: season index page → month links, each probed once.

use reqwest::Url;
use tracing::{debug, warn};

use crate::core::net::{Fetch, is_success};
use crate::data::MonthLink;
use crate::error::Result;
use crate::specs::month_links::{self, MonthAnchor};

/// Fetch the index page and list its months in page order. Markup anomalies
/// and dead links are logged; only transport errors end the walk.
pub fn discover_month_links(fetch: &dyn Fetch, index_url: &Url, base: &Url) -> Result<Vec<MonthLink>> {
    let doc = fetch.get_text(index_url)?;
    let page = month_links::parse_doc(&doc);
    for a in &page.anomalies {
        warn!("{index_url}: {a}");
    }
    probe_anchors(fetch, base, page.anchors)
}

pub fn probe_anchors(fetch: &dyn Fetch, base: &Url, anchors: Vec<MonthAnchor>) -> Result<Vec<MonthLink>> {
    let mut out = Vec::with_capacity(anchors.len());
    for MonthAnchor { month, href } in anchors {
        let url = match base.join(&href) {
            Ok(u) => u,
            Err(e) => {
                warn!("{month}: cannot resolve {href:?} against {base}: {e}; skipping");
                continue;
            }
        };
        let status = fetch.probe(&url)?;
        let reachable = is_success(status);
        if reachable {
            debug!("{month}: {url}");
        } else {
            warn!("Bad link {url} ({month}): status {status}");
        }
        out.push(MonthLink { month, url, reachable });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::net::testing::StaticFetch;

    const INDEX: &str = "http://br.test/leagues/NBA_2021_games.html";

    // Whitespace sibling after December; January has lost its extension.
    const FILTER: &str = r#"<html><body><div class="filter">
<div class=" current"><a href="/leagues/NBA_2021_games-december.html">December</a></div> <div><a href="/leagues/NBA_2021_games-january">January</a></div><div><a href="/leagues/NBA_2021_games-february.html">February</a></div></div></body></html>"#;

    fn fetch() -> StaticFetch {
        StaticFetch::new()
            .page(INDEX, FILTER)
            .page("http://br.test/leagues/NBA_2021_games-december.html", "<table></table>")
            .page("http://br.test/leagues/NBA_2021_games-february.html", "<table></table>")
    }

    #[test]
    fn malformed_link_is_reported_unreachable_and_walk_continues() {
        let base = Url::parse("http://br.test").unwrap();
        let links = discover_month_links(&fetch(), &Url::parse(INDEX).unwrap(), &base).unwrap();

        let got: Vec<(&str, bool)> = links.iter().map(|l| (l.month.as_str(), l.reachable)).collect();
        assert_eq!(got, vec![("December", true), ("January", false), ("February", true)]);
        assert_eq!(links[1].url.as_str(), "http://br.test/leagues/NBA_2021_games-january");
    }

    #[test]
    fn probing_does_not_download_month_pages() {
        let f = fetch();
        let base = Url::parse("http://br.test").unwrap();
        discover_month_links(&f, &Url::parse(INDEX).unwrap(), &base).unwrap();
        assert_eq!(f.get_count(), 1);
    }

    #[test]
    fn unreachable_index_is_an_error() {
        let base = Url::parse("http://br.test").unwrap();
        let index = Url::parse("http://br.test/leagues/NBA_1900_games.html").unwrap();
        assert!(discover_month_links(&fetch(), &index, &base).is_err());
    }
}
