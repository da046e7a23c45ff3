//! Server-rendered pages. Markup lives in `templates/` and is rendered by
//! minijinja with HTML auto-escaping (every template name ends in `.html`).

use std::sync::LazyLock;

use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

use crate::{consts::APP_NAME, errors::Result};

pub mod catalog;
pub mod create;
pub mod invitation;
pub mod pages;

const TEMPLATE_SOURCES: [(&str, &str); 8] = [
    ("layout.html", include_str!("../../templates/layout.html")),
    ("forms.html", include_str!("../../templates/forms.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("about.html", include_str!("../../templates/about.html")),
    ("not_found.html", include_str!("../../templates/not_found.html")),
    ("gallery.html", include_str!("../../templates/gallery.html")),
    ("create.html", include_str!("../../templates/create.html")),
    ("invitation.html", include_str!("../../templates/invitation.html")),
];

static TEMPLATES: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();
    env.set_loader(|name| {
        Ok(TEMPLATE_SOURCES
            .iter()
            .find(|(template, _)| *template == name)
            .map(|(_, source)| source.to_string()))
    });
    env.add_global("app_name", APP_NAME);
    env
});

/// Renders `name` with `ctx`. Pages extending `layout.html` expect `title`
/// and `active` (the nav path to highlight) in the context.
pub fn render<S: Serialize>(name: &str, ctx: S) -> Result<Html<String>> {
    let template = TEMPLATES.get_template(name)?;
    Ok(Html(template.render(ctx)?))
}

#[cfg(test)]
mod tests {
    use minijinja::context;

    use super::*;

    #[test]
    fn layout_marks_active_link() {
        let Html(page) = render(
            "not_found.html",
            context! { title => "Templates", active => "/templates" },
        )
        .unwrap();

        assert!(page.contains("<a href=\"/templates\" class=\"active\">Templates</a>"));
        assert!(page.contains("<a href=\"/about\">About</a>"));
        assert!(page.contains("<title>Templates | EventCraft Pro</title>"));
    }

    #[test]
    fn every_template_parses() {
        for (name, _) in TEMPLATE_SOURCES {
            TEMPLATES.get_template(name).unwrap();
        }
    }

    #[test]
    fn values_are_escaped() {
        let Html(page) = render(
            "not_found.html",
            context! { title => "<b>x & y", active => "" },
        )
        .unwrap();

        assert!(page.contains("<title>&lt;b&gt;x &amp; y | EventCraft Pro</title>"));
        assert!(!page.contains("<b>x"));
    }
}
