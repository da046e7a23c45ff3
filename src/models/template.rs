use serde::Serialize;

/// Religion tag that matches every selected filter.
pub const RELIGION_ALL: &str = "All";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: u32,
    pub name: &'static str,
    pub category: &'static str,
    pub theme: &'static str,
    pub religion_tag: &'static str,
    pub preview_image_ref: &'static str,
    pub color_swatch: [&'static str; 3],
}

#[derive(Serialize, Debug, Clone, Copy)]
pub struct FilterGroup {
    pub name: &'static str,
    pub tags: &'static [&'static str],
}

pub const FILTER_GROUPS: [FilterGroup; 3] = [
    FilterGroup {
        name: "religion",
        tags: &["Hindu", "Muslim", "Christian", "Jewish", "Buddhist"],
    },
    FilterGroup {
        name: "theme",
        tags: &["Modern", "Classic", "Minimal", "Elegant", "Fun"],
    },
    FilterGroup {
        name: "event",
        tags: &[
            "Wedding",
            "Birthday",
            "Anniversary",
            "Baby Shower",
            "Corporate",
            "Graduation",
        ],
    },
];

static CATALOG: [Template; 6] = [
    Template {
        id: 1,
        name: "Elegant Wedding",
        category: "Wedding",
        theme: "Classic",
        religion_tag: "Hindu",
        preview_image_ref: "https://images.unsplash.com/photo-1519225421980-715cb0215aed?w=400&h=300&fit=crop",
        color_swatch: ["#FFB6C1", "#FFF", "#D4AF37"],
    },
    Template {
        id: 2,
        name: "Modern Birthday",
        category: "Birthday",
        theme: "Modern",
        religion_tag: "Christian",
        preview_image_ref: "https://images.unsplash.com/photo-1530103862676-de8c9debad1d?w=400&h=300&fit=crop",
        color_swatch: ["#FF69B4", "#87CEEB", "#FFF"],
    },
    Template {
        id: 3,
        name: "Baby Shower Bliss",
        category: "Baby Shower",
        theme: "Minimal",
        religion_tag: "Muslim",
        preview_image_ref: "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=400&h=300&fit=crop",
        color_swatch: ["#FFB6C1", "#E6E6FA", "#FFF"],
    },
    Template {
        id: 4,
        name: "Corporate Excellence",
        category: "Corporate",
        theme: "Professional",
        religion_tag: RELIGION_ALL,
        preview_image_ref: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=300&fit=crop",
        color_swatch: ["#4169E1", "#FFF", "#C0C0C0"],
    },
    Template {
        id: 5,
        name: "Anniversary Romance",
        category: "Anniversary",
        theme: "Elegant",
        religion_tag: "Christian",
        preview_image_ref: "https://images.unsplash.com/photo-1464366400600-7168b8af9bc3?w=400&h=300&fit=crop",
        color_swatch: ["#DC143C", "#FFB6C1", "#FFF"],
    },
    Template {
        id: 6,
        name: "Graduation Pride",
        category: "Graduation",
        theme: "Modern",
        religion_tag: RELIGION_ALL,
        preview_image_ref: "https://images.unsplash.com/photo-1523050854058-8df90110c9d1?w=400&h=300&fit=crop",
        color_swatch: ["#FFD700", "#000080", "#FFF"],
    },
];

pub fn list_templates() -> &'static [Template] {
    &CATALOG
}

pub fn find_template(id: u32) -> Option<&'static Template> {
    CATALOG.iter().find(|template| template.id == id)
}

impl Template {
    fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }

    fn matches_tag(&self, tag: &str) -> bool {
        self.category == tag
            || self.theme == tag
            || self.religion_tag == tag
            || self.religion_tag == RELIGION_ALL
    }
}

/// Keeps templates whose name or category contains `search` (ignoring case)
/// and, when any tags are selected, that carry at least one of them.
pub fn filter_templates<'a>(
    all: &'a [Template],
    search: &str,
    selected_tags: &[String],
) -> Vec<&'a Template> {
    let needle = search.to_lowercase();
    all.iter()
        .filter(|template| template.matches_search(&needle))
        .filter(|template| {
            selected_tags.is_empty() || selected_tags.iter().any(|tag| template.matches_tag(tag))
        })
        .collect()
}

pub fn toggle_tag(selected: &[String], tag: &str) -> Vec<String> {
    if selected.iter().any(|t| t == tag) {
        selected.iter().filter(|t| *t != tag).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(tag.to_string());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn ids(templates: &[&Template]) -> Vec<u32> {
        templates.iter().map(|t| t.id).collect()
    }

    #[test]
    fn empty_filter_returns_catalog_in_order() {
        let all = list_templates();
        let filtered = filter_templates(all, "", &[]);
        assert_eq!(ids(&filtered), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn search_matches_name_or_category_ignoring_case() {
        let all = list_templates();
        for search in ["wedding", "BIRTH", "shower", "pride", "excel", "zzz", "e"] {
            let filtered = filter_templates(all, search, &[]);
            let needle = search.to_lowercase();
            for template in all {
                let expected = template.name.to_lowercase().contains(&needle)
                    || template.category.to_lowercase().contains(&needle);
                assert_eq!(
                    filtered.iter().any(|t| t.id == template.id),
                    expected,
                    "search {search:?} on template {}",
                    template.id
                );
            }
        }
    }

    #[test]
    fn tag_filter_always_keeps_all_religion_templates() {
        let filtered = filter_templates(list_templates(), "", &tags(&["Hindu"]));
        assert_eq!(ids(&filtered), vec![1, 4, 6]);
    }

    #[test]
    fn tag_filter_matches_category_and_theme() {
        let filtered = filter_templates(list_templates(), "", &tags(&["Baby Shower", "Elegant"]));
        assert_eq!(ids(&filtered), vec![3, 4, 5, 6]);
    }

    #[test]
    fn search_and_tags_combine() {
        let filtered = filter_templates(list_templates(), "modern", &tags(&["Christian"]));
        assert_eq!(ids(&filtered), vec![2]);
    }

    #[test]
    fn toggle_tag_adds_then_removes() {
        let once = toggle_tag(&[], "Modern");
        assert_eq!(once, tags(&["Modern"]));
        let twice = toggle_tag(&once, "Fun");
        assert_eq!(twice, tags(&["Modern", "Fun"]));
        assert_eq!(toggle_tag(&twice, "Modern"), tags(&["Fun"]));
    }

    #[test]
    fn catalog_ids_are_unique() {
        let all = list_templates();
        for template in all {
            assert_eq!(find_template(template.id), Some(template));
        }
        assert_eq!(find_template(42), None);
    }
}
