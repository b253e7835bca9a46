//! Plain-text rendering of a search view.

use std::fmt::Write;

use crate::app::SearchView;
use crate::domain::{ImageFallback, PageNav, Product};
use crate::ports::ImageProbe;

/// Label of the search action for the current loading state.
pub fn search_action_label(loading: bool) -> &'static str {
    if loading { "Loading..." } else { "Search" }
}

/// Image source to display for `product`, probing it when it is not blank.
pub fn card_image<'a, P: ImageProbe>(
    product: &'a Product,
    images: &'a ImageFallback,
    probe: &P,
) -> &'a str {
    let initial = images.initial(&product.image);
    if initial == images.fallback() {
        return initial;
    }
    images.resolve(&product.image, !probe.loads(initial))
}

/// Render every branch of `view` that is currently visible.
pub fn render_view<P: ImageProbe>(
    view: &SearchView<'_>,
    images: &ImageFallback,
    probe: &P,
) -> String {
    let mut out = String::new();

    if view.loading {
        let _ = writeln!(out, "{}", search_action_label(true));
    }
    if let Some(error) = view.error {
        let _ = writeln!(out, "❌ {}", error);
    }
    if let Some(notice) = &view.empty_notice {
        let _ = writeln!(out, "{}", notice);
    }

    for product in view.cards {
        let _ = writeln!(out);
        out.push_str(&render_card(product, card_image(product, images, probe)));
    }

    if let Some(nav) = &view.pagination {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", render_nav(nav));
    }

    out
}

fn render_card(product: &Product, image: &str) -> String {
    format!(
        "#{}  {}\n    {}\n    {}\n    Image: {}\n",
        product.id,
        product.title,
        product.display_category(),
        product.display_price(),
        image
    )
}

/// One-line pagination bar. Disabled controls are shown in parentheses.
pub fn render_nav(nav: &PageNav) -> String {
    let mut parts = Vec::with_capacity(nav.total + 2);
    parts.push(control("‹ Previous", nav.previous.is_some()));
    for page in nav.pages() {
        if page == nav.current {
            parts.push(format!("[{page}]"));
        } else {
            parts.push(page.to_string());
        }
    }
    parts.push(control("Next ›", nav.next.is_some()));
    parts.join("  ")
}

fn control(label: &str, enabled: bool) -> String {
    if enabled { label.to_string() } else { format!("({label})") }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SearchController;
    use crate::ports::NoopImageProbe;
    use crate::testing::{FakeImageProbe, FakeProductApi, sample_products};

    fn images() -> ImageFallback {
        ImageFallback::new("/fallback.jpg")
    }

    #[test]
    fn action_label_reflects_loading() {
        assert_eq!(search_action_label(true), "Loading...");
        assert_eq!(search_action_label(false), "Search");
    }

    #[test]
    fn renders_cards_and_nav() {
        let mut controller =
            SearchController::new(FakeProductApi::returning(sample_products(7)));
        controller.search("smartphones").unwrap();

        let out = render_view(&controller.view(), &images(), &NoopImageProbe);
        assert!(out.contains("#1  Product 1"));
        assert!(out.contains("Smartphones"));
        assert!(out.contains("$10.00"));
        assert!(out.contains("#5  Product 5"));
        assert!(!out.contains("#6  Product 6"));
        assert!(out.contains("(‹ Previous)  [1]  2  Next ›"));
    }

    #[test]
    fn broken_image_uses_fallback() {
        let mut products = sample_products(2);
        products[1].image = String::new();
        let mut controller = SearchController::new(FakeProductApi::returning(products));
        controller.search("laptops").unwrap();

        let probe = FakeImageProbe::with_broken(["https://cdn.example.com/1.jpg"]);
        let out = render_view(&controller.view(), &images(), &probe);
        assert_eq!(out.matches("Image: /fallback.jpg").count(), 2);
    }

    #[test]
    fn renders_error_with_notice() {
        let mut controller = SearchController::new(FakeProductApi::failing());
        let _ = controller.search("laptops");

        let out = render_view(&controller.view(), &images(), &NoopImageProbe);
        assert!(out.contains("❌ Failed to fetch products"));
        assert!(out.contains("No products found for \"laptops\""));
    }

    #[test]
    fn last_page_disables_next() {
        let nav = PageNav::for_results(12, 3).unwrap();
        assert_eq!(render_nav(&nav), "‹ Previous  1  2  [3]  (Next ›)");
    }
}
