//! Inline stroke icons for the theme toggle.
//!
//! The toggle carries a placeholder `<i data-feather="..">` element which is
//! later replaced with the matching inline SVG. Only the two glyphs the
//! toggle needs are known here.

pub const ICON_ATTR: &str = "data-feather";

/// Elements whose strokes take part in the draw-in/draw-out animation.
pub const STROKE_SELECTOR: &str = "path, line, circle, polyline";

const SUN_BODY: &str = concat!(
    r#"<circle cx="12" cy="12" r="5"></circle>"#,
    r#"<line x1="12" y1="1" x2="12" y2="3"></line>"#,
    r#"<line x1="12" y1="21" x2="12" y2="23"></line>"#,
    r#"<line x1="4.22" y1="4.22" x2="5.64" y2="5.64"></line>"#,
    r#"<line x1="18.36" y1="18.36" x2="19.78" y2="19.78"></line>"#,
    r#"<line x1="1" y1="12" x2="3" y2="12"></line>"#,
    r#"<line x1="21" y1="12" x2="23" y2="12"></line>"#,
    r#"<line x1="4.22" y1="19.78" x2="5.64" y2="18.36"></line>"#,
    r#"<line x1="18.36" y1="5.64" x2="19.78" y2="4.22"></line>"#
);

const MOON_BODY: &str = r#"<path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"></path>"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Sun,
    Moon,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Sun => "sun",
            Icon::Moon => "moon",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "sun" => Some(Icon::Sun),
            "moon" => Some(Icon::Moon),
            _ => None,
        }
    }

    /// Markup placed inside the toggle before replacement.
    pub fn placeholder(self) -> String {
        format!(r#"<i {}="{}"></i>"#, ICON_ATTR, self.name())
    }

    /// Inline SVG rendering of the icon.
    pub fn svg(self) -> String {
        let body = match self {
            Icon::Sun => SUN_BODY,
            Icon::Moon => MOON_BODY,
        };
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" "#,
                r#"fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" "#,
                r#"stroke-linejoin="round" class="feather feather-{}">{}</svg>"#
            ),
            self.name(),
            body
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_names_icon() {
        assert_eq!(Icon::Sun.placeholder(), r#"<i data-feather="sun"></i>"#);
        assert_eq!(Icon::Moon.placeholder(), r#"<i data-feather="moon"></i>"#);
    }

    #[test]
    fn test_svg_is_stroke_based() {
        let sun = Icon::Sun.svg();
        assert!(sun.starts_with("<svg"));
        assert!(sun.contains(r#"stroke="currentColor""#));
        assert!(sun.contains("feather-sun"));
        assert_eq!(sun.matches("<line").count(), 8);

        let moon = Icon::Moon.svg();
        assert!(moon.contains("feather-moon"));
        assert!(moon.contains("<path"));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Icon::from_name("sun"), Some(Icon::Sun));
        assert_eq!(Icon::from_name(" moon "), Some(Icon::Moon));
        assert_eq!(Icon::from_name("star"), None);
    }
}
