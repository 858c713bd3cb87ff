//! Site metadata and the author's current role.
//!
//! The values are compiled in and never change at runtime; templates and
//! head/meta generators read them through [`app_config`].

use serde::Serialize;

/// Site-wide metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    pub site_name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub author: &'static str,
    pub locale: &'static str,
    #[serde(rename = "currentRole")]
    pub current_role: CurrentRole,
}

/// Where the author currently works.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentRole {
    pub title: &'static str,
    pub org: &'static str,
    pub org_url: &'static str,
    pub summary: &'static str,
}

/// The site configuration.
pub static APP_CONFIG: SiteConfig = SiteConfig {
    site_name: "KGDEV.me",
    title: "Kieran Gray",
    description: "Kieran Gray dev blog",
    author: "Kieran Gray",
    locale: "en",
    current_role: CurrentRole {
        title: "Software Engineer",
        org: "Prima Assicurazioni",
        org_url: "https://helloprima.com",
        summary: "Building Elixir services (plus a bit of Elm) in insurance. \
                  Sharpening my skills in Elixir, event sourcing, and DDD as I go.",
    },
};

/// Read access to [`APP_CONFIG`].
pub fn app_config() -> &'static SiteConfig {
    &APP_CONFIG
}
