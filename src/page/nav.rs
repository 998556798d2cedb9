//! Bootstrap navbar construction.
//!
//! Every factory here is pure and returns a finished subtree; only [`build`]
//! touches a [`Document`]. The class names, ids and `aria-*` wiring follow
//! Bootstrap 4's navbar markup, which the stylesheet and the Bootstrap
//! scripts rely on verbatim.

use crate::{
    config::{Category, SiteInfo, SubCategory},
    dom::{Document, Element},
    node,
    page::scroll::TRANSPARENT_CLASS,
};

/// Id of the navbar root, targeted by the scroll reactor.
pub const NAV_ID: &str = "mainNav";
/// Id of the collapsible section the toggler opens.
pub const CONTENT_ID: &str = "navbarContent";
pub const BRAND_HEIGHT: &str = "30px";
pub const PLACEHOLDER_HREF: &str = "#";

/// Static links on the right-hand side, as `(label, href)`.
pub const AUTH_LINKS: [(&str, &str); 2] = [("Register", "/register"), ("Login", "/login")];

/// Builds the navbar and inserts it as the first child of the document body.
pub fn build<'d>(
    document: &'d mut Document,
    site: &SiteInfo,
    logo_url: &str,
    categories: &[Category],
) -> &'d Element {
    document.prepend_child(navbar(site, logo_url, categories))
}

pub fn navbar(site: &SiteInfo, logo_url: &str, categories: &[Category]) -> Element {
    let mut root = node! { nav, id = NAV_ID, class = "navbar navbar-expand-lg navbar-dark fixed-top" =>
        node! { div, class = "container" =>
            brand(site, logo_url),
            toggle(),
            node! { div, class = "collapse navbar-collapse", id = CONTENT_ID =>
                node! { ul, class = "navbar-nav mr-auto" => category_list(categories) },
                node! { ul, class = "navbar-nav ml-auto" => auth_links() },
            },
        },
    };
    // Unscrolled pages start transparent.
    root.add_class(TRANSPARENT_CLASS);
    root
}

pub fn brand(site: &SiteInfo, logo_url: &str) -> Element {
    brand_with_height(site, logo_url, BRAND_HEIGHT)
}

pub fn brand_with_height(site: &SiteInfo, logo_url: &str, height: &str) -> Element {
    let href = site.brand_url().unwrap_or(PLACEHOLDER_HREF);
    if logo_url.is_empty() {
        node! { a, class = "navbar-brand", href = href => site.name.as_str() }
    } else {
        node! { a, class = "navbar-brand", href = href =>
            node! { img, src = logo_url, alt = site.name.as_str(), height = height },
        }
    }
}

/// The hamburger button that expands [`CONTENT_ID`] on narrow screens.
pub fn toggle() -> Element {
    node! { button,
        class = "navbar-toggler",
        r#type = "button",
        data_toggle = "collapse",
        data_target = format!("#{CONTENT_ID}"),
        aria_controls = CONTENT_ID,
        aria_expanded = "false",
        aria_label = "Toggle navigation" =>
        node! { span, class = "navbar-toggler-icon" },
    }
}

/// One entry per category in input order, except that a category with both a
/// url and subcategories yields two (see [`dropdown_item`]).
pub fn category_list(categories: &[Category]) -> Vec<Element> {
    let mut items = Vec::with_capacity(categories.len());
    for category in categories {
        let url = category.url().unwrap_or_default();
        if category.subcategories.is_empty() {
            items.push(plain_item(&category.name, url));
        } else {
            items.extend(dropdown_item(&category.name, url, &category.subcategories));
        }
    }
    items
}

pub fn plain_item(name: &str, url: &str) -> Element {
    node! { li, class = "nav-item" =>
        node! { a, class = "nav-link", href = href_or_placeholder(url) => name },
    }
}

/// A dropdown list item labelled by `name`.
///
/// With a non-empty `url` the toggle stays blank and a plain `name -> url`
/// item is emitted right before the dropdown, so the result has two entries.
pub fn dropdown_item(name: &str, url: &str, subcategories: &[SubCategory]) -> Vec<Element> {
    let toggle_id = format!("{name}-dropdown");
    let mut toggle = node! { a,
        class = "nav-link dropdown-toggle",
        href = PLACEHOLDER_HREF,
        id = toggle_id.as_str(),
        role = "button",
        data_toggle = "dropdown",
        aria_haspopup = "true",
        aria_expanded = "false",
    };

    let mut items = Vec::with_capacity(2);
    if url.is_empty() {
        toggle = toggle.child(name);
    } else {
        items.push(plain_item(name, url));
    }

    let links: Vec<Element> = subcategories
        .iter()
        .map(|sub| {
            node! { a, class = "dropdown-item", href = href_or_placeholder(&sub.url) =>
                sub.name.as_str()
            }
        })
        .collect();
    let menu = node! { div, class = "dropdown-menu", aria_labelledby = toggle_id.as_str() => links };

    items.push(node! { li, class = "nav-item dropdown" => toggle, menu });
    items
}

pub fn auth_links() -> Vec<Element> {
    AUTH_LINKS
        .iter()
        .map(|(label, href)| plain_item(label, href))
        .collect()
}

fn href_or_placeholder(url: &str) -> &str {
    if url.is_empty() { PLACEHOLDER_HREF } else { url }
}
