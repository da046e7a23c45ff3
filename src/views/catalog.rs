use axum::response::Html;
use minijinja::context;
use serde::Serialize;

use super::render;
use crate::{
    errors::Result,
    models::template::{FILTER_GROUPS, Template, toggle_tag},
};

/// Query string (with its leading `?`) for a search and tag selection, or
/// an empty string when nothing is filtered.
pub fn templates_query(search: &str, tags: &[String]) -> String {
    let mut params = Vec::new();
    if !search.is_empty() {
        params.push(format!("search={}", urlencoding::encode(search)));
    }
    if !tags.is_empty() {
        params.push(format!("tags={}", urlencoding::encode(&tags.join(","))));
    }
    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}

#[derive(Serialize, Debug)]
struct FilterBadge {
    tag: &'static str,
    selected: bool,
    /// Gallery query with this tag toggled.
    query: String,
}

#[derive(Serialize, Debug)]
struct FilterGroupView {
    name: &'static str,
    badges: Vec<FilterBadge>,
}

fn filter_groups(search: &str, selected: &[String]) -> Vec<FilterGroupView> {
    FILTER_GROUPS
        .iter()
        .map(|group| FilterGroupView {
            name: group.name,
            badges: group
                .tags
                .iter()
                .map(|&tag| FilterBadge {
                    tag,
                    selected: selected.iter().any(|s| s == tag),
                    query: templates_query(search, &toggle_tag(selected, tag)),
                })
                .collect(),
        })
        .collect()
}

pub fn gallery(search: &str, selected: &[String], templates: &[&Template]) -> Result<Html<String>> {
    render(
        "gallery.html",
        context! {
            title => "Templates",
            active => "/templates",
            search => search,
            tags => selected.join(","),
            groups => filter_groups(search, selected),
            cards => templates,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::template::list_templates;

    #[test]
    fn query_encodes_search_and_tags() {
        assert_eq!(templates_query("", &[]), "");
        assert_eq!(
            templates_query("baby shower", &["Baby Shower".to_string(), "Fun".to_string()]),
            "?search=baby%20shower&tags=Baby%20Shower%2CFun"
        );
    }

    #[test]
    fn selected_badge_links_toggle_off() {
        let selected = vec!["Modern".to_string()];
        let templates: Vec<&Template> = list_templates().iter().collect();
        let Html(page) = gallery("", &selected, &templates).unwrap();

        assert!(page.contains("<a class=\"badge selected\" href=\"/templates\">Modern</a>"));
        assert!(page.contains("href=\"/templates?tags=Modern%2CFun\">Fun</a>"));
        assert!(page.contains("/create?template=6"));
        assert!(page.contains("style=\"background:#FFD700\""));
    }

    #[test]
    fn search_is_kept_in_badge_links() {
        let Html(page) = gallery("gala", &[], &[]).unwrap();
        assert!(page.contains("href=\"/templates?search=gala&amp;tags=Hindu\">Hindu</a>"));
    }

    #[test]
    fn empty_result_offers_clear_filters() {
        let Html(page) = gallery("zzz", &[], &[]).unwrap();
        assert!(page.contains("No templates found matching your criteria"));
        assert!(page.contains("Clear Filters"));
        assert!(page.contains("value=\"zzz\""));
    }
}
