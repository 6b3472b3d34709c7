//! Anchor classification and scroll offset math for in-page navigation.
//!
//! Two handlers deal with anchor clicks: the primary navigation links
//! (class `nav-link`) and a generic handler for every other `href="#..."`
//! link. [`AnchorRoute::classify`] decides which one owns a click so that
//! a single link never scrolls twice.

/// Extra space left between the sticky header and the scrolled-to section
pub const HEADER_CLEARANCE: f64 = 20.0;

/// Class that marks a primary navigation link
pub const NAV_LINK_CLASS: &str = "nav-link";

/// Compute the document offset to scroll to so the target clears the header.
pub fn scroll_target(target_top: f64, header_height: f64) -> f64 {
    scroll_target_with_clearance(target_top, header_height, HEADER_CLEARANCE)
}

/// Same as [`scroll_target`] with a configurable clearance.
pub fn scroll_target_with_clearance(target_top: f64, header_height: f64, clearance: f64) -> f64 {
    target_top - header_height - clearance
}

/// Parsed form of an anchor `href` attribute
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnchorHref {
    /// The bare `#` placeholder
    Bare,
    /// `#section-id`; holds the id without the leading `#`
    Fragment(String),
    /// Anything that does not start with `#`
    Other(String),
}

impl AnchorHref {
    pub fn parse(href: &str) -> Self {
        match href.strip_prefix('#') {
            Some("") => AnchorHref::Bare,
            Some(id) => AnchorHref::Fragment(id.to_string()),
            None => AnchorHref::Other(href.to_string()),
        }
    }

    /// CSS selector for the referenced element, if any
    pub fn selector(&self) -> Option<String> {
        match self {
            AnchorHref::Fragment(id) => Some(format!("#{}", id)),
            _ => None,
        }
    }
}

/// Which handler a link belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkOwner {
    /// Primary navigation link
    Navigation,
    /// Any other anchor on the page
    Generic,
}

impl LinkOwner {
    /// Derive the owner from a link's class attribute.
    pub fn from_class_list(classes: &str) -> Self {
        if classes.split_whitespace().any(|c| c == NAV_LINK_CLASS) {
            LinkOwner::Navigation
        } else {
            LinkOwner::Generic
        }
    }
}

/// What a click on an anchor should do
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnchorRoute {
    /// Navigation link: prevent default, scroll if the target exists, close the mobile menu
    NavScroll { selector: Option<String> },
    /// Generic in-page link: prevent default and scroll if the target exists
    SmoothScroll { selector: String },
    /// Let the browser (or another handler) deal with it
    Skip,
}

impl AnchorRoute {
    pub fn classify(href: &str, owner: LinkOwner) -> Self {
        let parsed = AnchorHref::parse(href);
        match owner {
            LinkOwner::Navigation => AnchorRoute::NavScroll {
                selector: parsed.selector(),
            },
            LinkOwner::Generic => match parsed {
                AnchorHref::Fragment(id) => AnchorRoute::SmoothScroll {
                    selector: format!("#{}", id),
                },
                AnchorHref::Bare | AnchorHref::Other(_) => AnchorRoute::Skip,
            },
        }
    }

    /// Whether the browser's default navigation must be suppressed
    pub fn prevents_default(&self) -> bool {
        !matches!(self, AnchorRoute::Skip)
    }

    /// Whether handling this click closes the mobile menu
    pub fn closes_menu(&self) -> bool {
        matches!(self, AnchorRoute::NavScroll { .. })
    }

    pub fn selector(&self) -> Option<&str> {
        match self {
            AnchorRoute::NavScroll { selector } => selector.as_deref(),
            AnchorRoute::SmoothScroll { selector } => Some(selector),
            AnchorRoute::Skip => None,
        }
    }

    /// Turn the route into concrete effects once the target lookup is done.
    ///
    /// `target_top` is `None` when the referenced element does not exist.
    pub fn plan(&self, target_top: Option<f64>, header_height: f64, clearance: f64) -> ScrollPlan {
        let scroll_to = match self {
            AnchorRoute::Skip => None,
            _ => target_top
                .map(|top| scroll_target_with_clearance(top, header_height, clearance)),
        };
        ScrollPlan {
            prevent_default: self.prevents_default(),
            scroll_to,
            close_menu: self.closes_menu(),
        }
    }
}

/// Effects of one anchor click
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollPlan {
    pub prevent_default: bool,
    /// Smooth-scroll destination; `None` means no scroll
    pub scroll_to: Option<f64>,
    pub close_menu: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_target_subtracts_header_and_clearance() {
        assert_eq!(scroll_target(1000.0, 70.0), 910.0);
        assert_eq!(scroll_target(0.0, 70.0), -90.0);
        assert_eq!(scroll_target_with_clearance(500.0, 60.0, 0.0), 440.0);
    }

    #[test]
    fn test_parse_href() {
        assert_eq!(AnchorHref::parse("#"), AnchorHref::Bare);
        assert_eq!(
            AnchorHref::parse("#pricing"),
            AnchorHref::Fragment("pricing".to_string())
        );
        assert_eq!(
            AnchorHref::parse("https://envirie.com"),
            AnchorHref::Other("https://envirie.com".to_string())
        );
        assert_eq!(AnchorHref::Bare.selector(), None);
    }

    #[test]
    fn test_owner_from_class_list() {
        assert_eq!(
            LinkOwner::from_class_list("nav-link active"),
            LinkOwner::Navigation
        );
        assert_eq!(LinkOwner::from_class_list("nav-linker"), LinkOwner::Generic);
        assert_eq!(LinkOwner::from_class_list(""), LinkOwner::Generic);
    }

    #[test]
    fn test_generic_handler_skips_bare_and_nav_links() {
        assert_eq!(
            AnchorRoute::classify("#", LinkOwner::Generic),
            AnchorRoute::Skip
        );
        // A nav link is never routed to the generic smooth scroll
        let route = AnchorRoute::classify("#features", LinkOwner::Navigation);
        assert!(matches!(route, AnchorRoute::NavScroll { .. }));
        assert!(route.closes_menu());
    }

    #[test]
    fn test_generic_fragment_scrolls_without_closing_menu() {
        let route = AnchorRoute::classify("#how-it-works", LinkOwner::Generic);
        assert_eq!(
            route,
            AnchorRoute::SmoothScroll {
                selector: "#how-it-works".to_string()
            }
        );
        assert!(route.prevents_default());
        assert!(!route.closes_menu());
    }

    #[test]
    fn test_plan_for_missing_target() {
        let nav = AnchorRoute::classify("#missing", LinkOwner::Navigation);
        let plan = nav.plan(None, 70.0, HEADER_CLEARANCE);
        assert_eq!(plan.scroll_to, None);
        assert!(plan.close_menu);

        let generic = AnchorRoute::classify("#missing", LinkOwner::Generic);
        let plan = generic.plan(None, 70.0, HEADER_CLEARANCE);
        assert_eq!(plan.scroll_to, None);
        assert!(plan.prevent_default);
        assert!(!plan.close_menu);
    }

    #[test]
    fn test_plan_for_skip_never_scrolls() {
        let plan = AnchorRoute::Skip.plan(Some(400.0), 70.0, HEADER_CLEARANCE);
        assert_eq!(
            plan,
            ScrollPlan {
                prevent_default: false,
                scroll_to: None,
                close_menu: false,
            }
        );
    }

    #[test]
    fn test_nav_link_with_bare_href_still_prevents_default() {
        let route = AnchorRoute::classify("#", LinkOwner::Navigation);
        assert_eq!(route, AnchorRoute::NavScroll { selector: None });
        assert!(route.prevents_default());
    }
}
