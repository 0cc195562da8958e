//! This file defines the templates and a convenience function for creating the navigation bar.

use maud::{Markup, html};

use crate::endpoints;

/// Template for a link in the navigation bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "block py-2 px-3 text-white border-b-2 border-orange-400 lg:p-0"
        } else {
            "block py-2 px-3 text-white opacity-80 hover:opacity-100 lg:p-0"
        };

        html!( a href=(self.url) class=(style) { (self.title) } )
    }
}

pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
}

impl NavBar<'_> {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> NavBar<'_> {
        let links = vec![Link {
            url: endpoints::DASHBOARD_VIEW,
            title: "Listagem",
            is_current: active_endpoint == endpoints::DASHBOARD_VIEW,
        }];

        NavBar { links }
    }

    pub fn into_html(self) -> Markup {
        html!(
            nav class="bg-indigo-700"
            {
                div
                    class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto px-4 py-8"
                {
                    a
                        href=(endpoints::ROOT)
                        class="self-center text-2xl font-semibold whitespace-nowrap text-white"
                    {
                        "GoFinances"
                    }

                    ul class="flex gap-8 font-medium"
                    {
                        @for link in self.links {
                            li { (link.into_html()) }
                        }
                    }
                }
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::endpoints;

    use super::NavBar;

    #[test]
    fn marks_current_link() {
        let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();
        let html = Html::parse_fragment(&nav_bar.into_string());
        let selector = Selector::parse("ul a").unwrap();
        let links: Vec<_> = html.select(&selector).collect();

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].value().attr("href"), Some(endpoints::DASHBOARD_VIEW));
        assert!(
            links[0]
                .value()
                .attr("class")
                .unwrap()
                .contains("border-orange-400")
        );
    }
}
