//! Pure node builders for catalog records and view chrome.
//!
//! Nothing here touches the presentation root or the network.

use crate::api::{Category, Product};

use super::node::ViewNode;

pub const PRODUCT_CARD: &str = "product-card";
pub const CATEGORY_CARD: &str = "category-card";
pub const PRODUCT_DETAIL: &str = "product-detail";
pub const PLACEHOLDER: &str = "placeholder";
pub const LOADING: &str = "loading";
pub const SEARCH_FORM: &str = "search-form";
pub const CATEGORIES_BUTTON: &str = "categories-button";

pub fn product_card(product: &Product) -> ViewNode {
    let image = ViewNode::new("a").attr("href", format!("/?id={}", product.id)).child(
        ViewNode::new("img")
            .attr("src", product.image.as_str())
            .attr("alt", "Product image"),
    );

    let content = ViewNode::new("div")
        .class("content")
        .child(
            ViewNode::new("div")
                .class("price-line")
                .child(ViewNode::new("span").class("price").text(product.price.as_str()))
                .child(ViewNode::new("span").class("currency").text("kr.-")),
        )
        .child(
            ViewNode::new("div")
                .class("title-line")
                .child(ViewNode::new("span").class("title").text(product.title.as_str()))
                .child(
                    ViewNode::new("a")
                        .class("category-title")
                        .attr("href", format!("/?category={}", product.category_id))
                        .text(product.category_title.as_str()),
                ),
        );

    ViewNode::new("div").class(PRODUCT_CARD).child(
        ViewNode::new("li")
            .class("result")
            .child(ViewNode::new("span").class("image").child(image))
            .child(content),
    )
}

pub fn category_card(category: &Category) -> ViewNode {
    ViewNode::new("div").class(CATEGORY_CARD).child(
        ViewNode::new("li").class("result").child(
            ViewNode::new("a")
                .class("title")
                .attr("href", format!("/?category={}", category.id))
                .text(category.title.as_str()),
        ),
    )
}

pub fn product_detail(product: &Product) -> ViewNode {
    let mut detail = ViewNode::new("div").class(PRODUCT_DETAIL);
    if !product.image.is_empty() {
        detail = detail.child(
            ViewNode::new("img")
                .class("product-image")
                .attr("src", product.image.as_str()),
        );
    }

    detail.child(
        ViewNode::new("div")
            .class("info")
            .child(ViewNode::new("h1").class("product-title").text(product.title.as_str()))
            .child(
                ViewNode::new("div")
                    .class("category-and-price")
                    .child(
                        ViewNode::new("p")
                            .class("category-title")
                            .text(format!("Category: {}", product.category_title)),
                    )
                    .child(
                        ViewNode::new("p")
                            .class("price")
                            .text(format!("Price: {} kr.-", product.price)),
                    ),
            )
            .child(
                ViewNode::new("p")
                    .class("description")
                    .text(product.description.as_str()),
            ),
    )
}

pub fn heading(text: impl Into<String>) -> ViewNode {
    ViewNode::new("h1").class("heading").text(text)
}

/// Empty container that cards are appended into.
pub fn list(class: &str) -> ViewNode {
    ViewNode::new("ul").class(class)
}

pub fn search_form(value: &str) -> ViewNode {
    ViewNode::new("form")
        .class(SEARCH_FORM)
        .child(ViewNode::new("label").text("Search: "))
        .child(
            ViewNode::new("input")
                .attr("value", value)
                .attr("placeholder", "Search term"),
        )
        .child(ViewNode::new("button").text("Search"))
}

pub fn categories_button() -> ViewNode {
    ViewNode::new("button")
        .class(CATEGORIES_BUTTON)
        .text("View all categories")
}

/// The single "nothing to show" node, used for empty results and fetch
/// failures alike.
pub fn placeholder(message: impl Into<String>) -> ViewNode {
    ViewNode::new("p").class(PLACEHOLDER).text(message)
}

pub fn loading() -> ViewNode {
    ViewNode::new("div").class(LOADING).text("Fetching data...")
}
