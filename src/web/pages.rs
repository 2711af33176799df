//! Error pages for the public redirect path.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Template for every redirect error page.
///
/// Renders `templates/error_page.html`. All fields are HTML-escaped, so a
/// path segment echoed back in `code` cannot inject markup.
#[derive(Template, WebTemplate)]
#[template(path = "error_page.html")]
pub struct ErrorPage {
    pub title: &'static str,
    pub icon: &'static str,
    pub heading: &'static str,
    pub message: &'static str,
    pub code: Option<String>,
    pub action_label: &'static str,
}

/// 404 page for a path segment that is not a well-formed code.
pub fn invalid_link(code: &str) -> Response {
    let page = ErrorPage {
        title: "Invalid link",
        icon: "⚠️",
        heading: "Invalid link",
        message: "This short link is not valid. Codes are 6 to 8 letters or digits.",
        code: Some(code.to_owned()),
        action_label: "Go to homepage",
    };

    (StatusCode::NOT_FOUND, page).into_response()
}

/// 404 page for a well-formed code with no link behind it.
pub fn link_not_found(code: &str) -> Response {
    let page = ErrorPage {
        title: "Link not found",
        icon: "🔍",
        heading: "Link not found",
        message: "This short link does not exist or has been deleted.",
        code: Some(code.to_owned()),
        action_label: "Create a new link",
    };

    (StatusCode::NOT_FOUND, page).into_response()
}

/// 500 page shown when the link store fails during a redirect.
pub fn server_error() -> Response {
    let page = ErrorPage {
        title: "Server error",
        icon: "💥",
        heading: "Something went wrong",
        message: "We could not resolve this link right now. Please try again later.",
        code: None,
        action_label: "Go to homepage",
    };

    (StatusCode::INTERNAL_SERVER_ERROR, page).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_escapes_code() {
        let page = ErrorPage {
            title: "Invalid link",
            icon: "!",
            heading: "Invalid link",
            message: "bad",
            code: Some("<script>".to_string()),
            action_label: "Home",
        };

        let html = page.render().unwrap();
        assert!(html.contains("&#60;script&#62;") || html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_page_without_code() {
        let page = ErrorPage {
            title: "Server error",
            icon: "!",
            heading: "Something went wrong",
            message: "later",
            code: None,
            action_label: "Home",
        };

        let html = page.render().unwrap();
        assert!(html.contains("Something went wrong"));
        assert!(!html.contains("<code>"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(invalid_link("abc").status(), StatusCode::NOT_FOUND);
        assert_eq!(link_not_found("AbC123").status(), StatusCode::NOT_FOUND);
        assert_eq!(server_error().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
