pub mod nav;
pub mod scroll;

use crate::{CSS, config::Config, dom::escape_html};

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@4.6.2/dist/css/bootstrap.min.css";
const JQUERY_JS: &str = "https://cdn.jsdelivr.net/npm/jquery@3.5.1/dist/jquery.slim.min.js";
const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@4.6.2/dist/js/bootstrap.bundle.min.js";

/// A site whose pages all start with the same navbar.
pub struct Site {
    config: Config,
    navbar: String,
}

impl Site {
    pub fn new(config: Config) -> Self {
        let navbar = nav::navbar(&config.site, config.logo_url(), &config.categories).to_string();
        Self { config, navbar }
    }

    pub fn navbar(&self) -> &str {
        &self.navbar
    }

    /// Page title for `path`, or `None` when nothing in the navbar links there.
    pub fn title_for(&self, path: &str) -> Option<&str> {
        if path == "/" || path.is_empty() {
            return Some(&self.config.site.name);
        }
        if self.config.site.brand_url() == Some(path) {
            return Some(&self.config.site.name);
        }
        for category in &self.config.categories {
            if category.url() == Some(path) {
                return Some(&category.name);
            }
            if let Some(sub) = category.subcategories.iter().find(|sub| sub.url == path) {
                return Some(&sub.name);
            }
        }
        nav::AUTH_LINKS
            .iter()
            .find(|(_, href)| *href == path)
            .map(|(label, _)| *label)
    }

    pub fn render(&self, path: &str) -> Option<String> {
        let title = self.title_for(path)?;
        Some(self.render_page(title))
    }

    fn render_page(&self, title: &str) -> String {
        let site_name = escape_html(&self.config.site.name);
        let title = escape_html(title);
        let navbar = &self.navbar;
        let script = scroll::SCROLL_SCRIPT.as_str();
        format!(
            r#"<!DOCTYPE html>
<html lang="en-US">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {site_name}</title>
<meta property="og:title" content="{title}" />
<link rel="stylesheet" href="{BOOTSTRAP_CSS}" />
<style>
{CSS}
</style>
</head>
<body>
{navbar}
<main class="container page-content">
<h1>{title}</h1>
</main>
<script src="{JQUERY_JS}"></script>
<script src="{BOOTSTRAP_JS}"></script>
<script>
{script}
</script>
</body>
</html>
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Category, SiteInfo, SubCategory};
    use pretty_assertions::assert_eq;

    fn site() -> Site {
        Site::new(Config {
            bind:       None,
            logo_url:   None,
            site:       SiteInfo::new("Acme", "/home"),
            categories: vec![
                Category::new("Products", "/products", vec![]),
                Category::new("Services", "", vec![
                    SubCategory::new("Consulting", "/c"),
                    SubCategory::new("Support", "/s"),
                ]),
            ],
        })
    }

    #[test]
    fn routes_follow_navbar_links() {
        let site = site();
        assert_eq!(site.title_for("/"), Some("Acme"));
        assert_eq!(site.title_for("/home"), Some("Acme"));
        assert_eq!(site.title_for("/products"), Some("Products"));
        assert_eq!(site.title_for("/s"), Some("Support"));
        assert_eq!(site.title_for("/login"), Some("Login"));
        assert_eq!(site.title_for("/register"), Some("Register"));
        assert_eq!(site.title_for("/nowhere"), None);
        assert_eq!(site.render("/nowhere"), None);
    }

    #[test]
    fn empty_category_url_is_not_a_route() {
        let site = site();
        assert_eq!(site.title_for("#"), None);
    }

    #[test]
    fn navbar_is_first_in_body() {
        let html = site().render("/products").unwrap();
        let body = html.split("<body>").nth(1).unwrap();
        assert!(body.trim_start().starts_with(r#"<nav id="mainNav""#));
        assert!(html.contains("<title>Products | Acme</title>"));
        assert!(html.contains("<h1>Products</h1>"));
        assert!(html.contains("window.addEventListener('scroll', onScroll);"));
        assert!(html.contains(BOOTSTRAP_CSS));
    }

    #[test]
    fn titles_are_escaped() {
        let site = Site::new(Config {
            site: SiteInfo::new("A & B", ""),
            ..Config::default()
        });
        let html = site.render("/").unwrap();
        assert!(html.contains("<h1>A &amp; B</h1>"));
        assert!(site.navbar().contains(r##"<a class="navbar-brand" href="#">A &amp; B</a>"##));
    }
}
