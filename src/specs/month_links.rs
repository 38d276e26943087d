// src/specs/month_links.rs
use std::fmt;

use scraper::{ElementRef, Html, Node};

use crate::core::html::selector;
use crate::core::sanitize::normalize_ws;

/// Month name and raw href as found; not yet resolved or probed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthAnchor {
    pub month: String,
    pub href: String,
}

/// Markup that deviates from one filter block of `<div><a/></div>` siblings.
/// All of these are recoverable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Anomaly {
    NoFilter,
    ManyFilters(usize),
    EmptyFilter,
    NonContainerSibling(String),
    NoLink(usize),
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::NoFilter => write!(f, "no element with class \"filter\""),
            Anomaly::ManyFilters(n) => write!(
                f, "{n} elements with class \"filter\"; proceeding with the first"
            ),
            Anomaly::EmptyFilter => write!(f, "filter block has no <div> children"),
            Anomaly::NonContainerSibling(what) => write!(
                f, "sibling {what} is not a <div>; skipping and continuing"
            ),
            Anomaly::NoLink(ix) => write!(f, "month container #{ix} holds no usable link; skipping"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonthLinksPage {
    pub anchors: Vec<MonthAnchor>,
    pub anomalies: Vec<Anomaly>,
}

/// Walk the first `.filter` block: start at its first `<div>` and visit every
/// sibling on that level. Each `<div>` sibling contributes its first link.
pub fn parse_doc(doc: &str) -> MonthLinksPage {
    let html = Html::parse_document(doc);
    let mut out = MonthLinksPage::default();

    let filters: Vec<ElementRef> = html.select(&selector(".filter")).collect();
    match filters.len() {
        0 => {
            out.anomalies.push(Anomaly::NoFilter);
            return out;
        }
        1 => {}
        n => out.anomalies.push(Anomaly::ManyFilters(n)),
    }

    let Some(first_div) = filters[0].select(&selector("div")).next() else {
        out.anomalies.push(Anomaly::EmptyFilter);
        return out;
    };

    let link = selector("a");
    let mut container_ix = 0usize;
    let mut node = Some(*first_div);
    while let Some(n) = node {
        node = n.next_sibling();

        match ElementRef::wrap(n) {
            Some(el) if el.value().name() == "div" => {
                container_ix += 1;
                let anchor = el.select(&link).next().and_then(|a| {
                    let href = a.value().attr("href")?;
                    Some(MonthAnchor {
                        month: normalize_ws(&a.text().collect::<String>()),
                        href: s!(href.trim()),
                    })
                });
                match anchor {
                    Some(a) => out.anchors.push(a),
                    None => out.anomalies.push(Anomaly::NoLink(container_ix)),
                }
            }
            Some(el) => out.anomalies.push(
                Anomaly::NonContainerSibling(format!("<{}>", el.value().name()))
            ),
            None => out.anomalies.push(Anomaly::NonContainerSibling(describe(n.value()))),
        }
    }
    out
}

fn describe(node: &Node) -> String {
    match node {
        Node::Text(t) => format!("text {:?}", &**t),
        Node::Comment(_) => s!("comment"),
        _ => s!("node"),
    }
}
