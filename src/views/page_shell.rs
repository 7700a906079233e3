use chrono::Datelike;
use dioxus::prelude::*;

use crate::components::{IconPair, ThemeToggle};
use crate::configs::SiteConfig;
use crate::content::ContentIndex;
use crate::routes::Route;
use crate::utils::{rhythm, scale, ThemeState, ThemeStore};

/// Which heading the header renders: the landing page gets the large
/// variant, every other route the compact one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingVariant {
    Primary,
    Secondary,
}

impl HeadingVariant {
    /// Pure selection rule: only the root path gets the primary heading.
    pub fn select(pathname: &str, root_path: &str) -> Self {
        if pathname == root_path {
            HeadingVariant::Primary
        } else {
            HeadingVariant::Secondary
        }
    }

    /// Style preset for the variant's heading element.
    pub fn style(self) -> String {
        match self {
            HeadingVariant::Primary => format!(
                "{};margin-bottom:{};margin-top:0;",
                scale(1.0).css(),
                rhythm(1.5),
            ),
            HeadingVariant::Secondary => {
                "font-family:Montserrat,sans-serif;margin-top:0;".to_string()
            }
        }
    }
}

#[component]
fn Heading(variant: HeadingVariant, title: String) -> Element {
    match variant {
        HeadingVariant::Primary => rsx! {
            h1 { style: variant.style(),
                Link { to: Route::Home, {title} }
            }
        },
        HeadingVariant::Secondary => rsx! {
            h3 { style: variant.style(),
                Link { to: Route::Home, {title} }
            }
        },
    }
}

#[component]
pub fn PageShell() -> Element {
    let route = use_route::<Route>();
    let config = use_context::<SiteConfig>();
    let content = use_context::<ContentIndex>();
    let store = use_context::<ThemeStore>();
    let mut theme = use_context::<Signal<ThemeState>>();

    let pathname = route.to_string();
    let variant = HeadingVariant::select(&pathname, &config.root_path());
    let title = content.site.title.clone().unwrap_or_default();
    let year = chrono::Local::now().year();

    let container_style = format!(
        "margin-left:auto;margin-right:auto;max-width:{};padding:{} {};",
        rhythm(24.0),
        rhythm(1.5),
        rhythm(0.75),
    );

    rsx! {
        div {
            style: container_style,
            header {
                class: "shell-header",
                style: "display:flex;align-items:center;justify-content:space-between;margin-bottom:2.625rem;",
                Heading { variant, title }
                ThemeToggle {
                    checked: theme().is_dark,
                    icons: IconPair::moon_and_sun(),
                    onchange: move |_| {
                        let next = store.toggle(theme());
                        theme.set(next);
                    },
                }
            }
            main { Outlet::<Route> {} }
            footer {
                "© {year}, Built with "
                a { href: "https://dioxuslabs.com", "Dioxus" }
            }
        }
    }
}
