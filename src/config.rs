use std::path::{Path, PathBuf};

use eyre::{Context, eyre};
use serde::Deserialize;

use crate::NAME;

pub const DEFAULT_BIND: &str = "0.0.0.0:8000";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub bind:       Option<String>,
    /// Brand image. Empty or missing renders the site name instead.
    pub logo_url:   Option<String>,
    pub site:       SiteInfo,
    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SiteInfo {
    pub name:      String,
    pub brand_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub name:          String,
    pub url:           Option<String>,
    #[serde(default)]
    pub subcategories: Vec<SubCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubCategory {
    pub name: String,
    pub url:  String,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Config {
    pub fn bind(&self) -> &str {
        non_empty(&self.bind).unwrap_or(DEFAULT_BIND)
    }

    pub fn logo_url(&self) -> &str {
        non_empty(&self.logo_url).unwrap_or_default()
    }
}

impl SiteInfo {
    pub fn new(name: impl Into<String>, brand_url: impl Into<String>) -> Self {
        Self {
            name:      name.into(),
            brand_url: Some(brand_url.into()),
        }
    }

    pub fn brand_url(&self) -> Option<&str> {
        non_empty(&self.brand_url)
    }
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        subcategories: Vec<SubCategory>,
    ) -> Self {
        Self {
            name: name.into(),
            url: Some(url.into()),
            subcategories,
        }
    }

    pub fn url(&self) -> Option<&str> {
        non_empty(&self.url)
    }
}

impl SubCategory {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url:  url.into(),
        }
    }
}

/// `$CONFIG_DIR/navbar-site/config.toml`
pub fn default_path() -> eyre::Result<PathBuf> {
    let dir = dirs::config_dir().ok_or_else(|| eyre!("System should have a config directory"))?;
    Ok(dir.join(NAME).join("config.toml"))
}

pub fn load_config(path: impl AsRef<Path>) -> eyre::Result<Config> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).context(format!("Failed to read {path:?} to string"))?;
    parse(&contents).context(format!("Failed to parse {path:?}"))
}

pub fn parse(contents: &str) -> eyre::Result<Config> {
    let config = toml::from_str(contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"
        bind = "127.0.0.1:9000"
        logo_url = "/static/logo.png"

        [site]
        name = "Acme"
        brand_url = "/home"

        [[categories]]
        name = "Products"
        url = "/products"

        [[categories]]
        name = "Services"
        subcategories = [
            { name = "Consulting", url = "/c" },
            { name = "Support", url = "/s" },
        ]
    "#;

    #[test]
    fn parses_full_config() {
        let config = parse(SAMPLE).unwrap();
        assert_eq!(config.bind(), "127.0.0.1:9000");
        assert_eq!(config.logo_url(), "/static/logo.png");
        assert_eq!(config.site, SiteInfo::new("Acme", "/home"));
        assert_eq!(
            config.categories,
            vec![
                Category::new("Products", "/products", vec![]),
                Category {
                    name:          "Services".into(),
                    url:           None,
                    subcategories: vec![
                        SubCategory::new("Consulting", "/c"),
                        SubCategory::new("Support", "/s"),
                    ],
                },
            ]
        );
    }

    #[test]
    fn optional_fields_default() {
        let config = parse("[site]\nname = \"Acme\"\n").unwrap();
        assert_eq!(config.bind(), DEFAULT_BIND);
        assert_eq!(config.logo_url(), "");
        assert_eq!(config.site.brand_url(), None);
        assert!(config.categories.is_empty());
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let config = parse(
            r#"
            bind = ""
            logo_url = ""
            [site]
            name = "Acme"
            brand_url = ""
            [[categories]]
            name = "Blog"
            url = ""
            "#,
        )
        .unwrap();
        assert_eq!(config.bind(), DEFAULT_BIND);
        assert_eq!(config.logo_url(), "");
        assert_eq!(config.site.brand_url(), None);
        assert_eq!(config.categories[0].url(), None);
    }

    #[test]
    fn missing_site_is_an_error() {
        assert!(parse("bind = \"0.0.0.0:1\"").is_err());
    }

    #[test]
    fn load_config_reports_missing_file() {
        let err = load_config("/definitely/not/here/config.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
