use axum::response::Html;
use minijinja::context;

use super::render;
use crate::errors::Result;

pub fn home() -> Result<Html<String>> {
    render("home.html", context! { title => "Home", active => "/" })
}

pub fn about() -> Result<Html<String>> {
    render("about.html", context! { title => "About", active => "/about" })
}

pub fn page_not_found() -> Result<Html<String>> {
    render(
        "not_found.html",
        context! { title => "Page Not Found", active => "" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_pages_highlight_their_nav_entry() {
        let Html(home) = home().unwrap();
        assert!(home.contains("<a href=\"/\" class=\"active\">Home</a>"));
        assert!(home.contains("Why Choose EventCraft Pro?"));

        let Html(about) = about().unwrap();
        assert!(about.contains("<a href=\"/about\" class=\"active\">About</a>"));
        assert!(about.contains("Mobile Friendly"));

        let Html(missing) = page_not_found().unwrap();
        assert!(missing.contains("Return Home"));
        assert!(!missing.contains("class=\"active\""));
    }
}
