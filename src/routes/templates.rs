use axum::{extract::Query, response::Html};

use crate::{
    errors::Result,
    models::template::{filter_templates, list_templates},
    views,
};

#[derive(serde::Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct TemplateQuery {
    pub search: String,
    /// Comma separated tag names.
    pub tags: String,
}

impl TemplateQuery {
    pub fn selected_tags(&self) -> Vec<String> {
        let mut selected: Vec<String> = Vec::new();
        for tag in self.tags.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if !selected.iter().any(|s| s == tag) {
                selected.push(tag.to_string());
            }
        }
        selected
    }
}

pub async fn browse_templates(Query(query): Query<TemplateQuery>) -> Result<Html<String>> {
    let selected = query.selected_tags();
    let search = query.search.trim();
    let templates = filter_templates(list_templates(), search, &selected);
    views::catalog::gallery(search, &selected, &templates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_split_trimmed_and_deduplicated() {
        let query = TemplateQuery {
            search: String::new(),
            tags: " Modern,,Baby Shower,Modern ".into(),
        };
        assert_eq!(query.selected_tags(), vec!["Modern", "Baby Shower"]);
        assert!(TemplateQuery::default().selected_tags().is_empty());
    }
}
