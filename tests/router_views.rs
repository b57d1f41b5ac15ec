mod common;

use common::{card_count, child_texts, product, router_at, stocked_catalog, Call, FakeCatalog, Method};
use storefront::route::ViewKind;
use storefront::view::Marker;

const FRONTPAGE: [Marker; 5] = [
    Marker::Heading,
    Marker::ProductList,
    Marker::CategoriesButton,
    Marker::CategoriesHeading,
    Marker::CategoryList,
];

#[tokio::test]
async fn frontpage_renders_products_then_categories() {
    let catalog = stocked_catalog();
    let router = router_at("/", catalog.clone());

    router.route().await;

    assert_eq!(router.root().markers(), FRONTPAGE.to_vec());
    assert_eq!(card_count(router.root(), Marker::ProductList), 2);
    assert_eq!(card_count(router.root(), Marker::CategoryList), 3);
    assert_eq!(catalog.calls(), vec![Call::Frontpage, Call::Categories]);
}

#[tokio::test]
async fn frontpage_keeps_catalog_order() {
    let catalog = stocked_catalog();
    let router = router_at("/", catalog);
    router.route().await;

    let titles: Vec<String> = child_texts(router.root(), Marker::CategoryList);
    assert_eq!(titles, vec!["Shoes", "Lighting", "Garden"]);
}

#[tokio::test]
async fn failed_fetch_shows_placeholder_and_view_continues() {
    let catalog = FakeCatalog::new();
    catalog.with_categories(vec![common::category("7", "Shoes")]);
    let router = router_at("/", catalog);

    router.route().await;

    let products = router.root().query(Marker::ProductList).unwrap();
    assert_eq!(products.children.len(), 1);
    assert!(products.children[0].has_class("placeholder"));
    assert_eq!(card_count(router.root(), Marker::CategoryList), 1);
}

#[tokio::test]
async fn product_detail_fetches_related_after_product() {
    let catalog = stocked_catalog();
    let router = router_at("/?id=42", catalog.clone());

    router.route().await;

    assert_eq!(
        catalog.calls(),
        vec![
            Call::ProductById("42".into()),
            Call::ProductsByCategory("7".into(), 3),
        ]
    );
    let block = router.root().query(Marker::DetailBlock).unwrap();
    assert!(block.find_class("product-detail").is_some());
    assert_eq!(
        router.root().query(Marker::RelatedHeading).unwrap().text.as_deref(),
        Some("More from Category 7")
    );
    assert_eq!(card_count(router.root(), Marker::RelatedList), 2);
    assert_eq!(router.root().count(Marker::Loading), 0);
}

#[tokio::test]
async fn missing_product_shows_placeholder_without_related_fetch() {
    let catalog = stocked_catalog();
    let router = router_at("/?id=404", catalog.clone());

    router.route().await;

    assert_eq!(catalog.calls(), vec![Call::ProductById("404".into())]);
    let block = router.root().query(Marker::DetailBlock).unwrap();
    assert_eq!(
        block.find_class("placeholder").and_then(|p| p.text.as_deref()),
        Some("No product found.")
    );
    assert_eq!(router.root().count(Marker::RelatedList), 0);
    assert_eq!(router.root().count(Marker::Loading), 0);
}

#[tokio::test]
async fn product_id_wins_over_search() {
    let catalog = stocked_catalog();
    let router = router_at("/?id=42&search=x&category=7", catalog.clone());

    router.route().await;

    assert_eq!(catalog.calls()[0], Call::ProductById("42".into()));
    assert_eq!(catalog.count(Method::Search), 0);
    assert_eq!(router.fragments(ViewKind::ProductDetail).len(), 3);
}

#[tokio::test]
async fn category_search_shows_name_and_empty_placeholder() {
    let catalog = stocked_catalog();
    catalog.with_search_default(Some(Vec::new()));
    let router = router_at("/?category=7&search=shoe", catalog.clone());

    router.route().await;

    assert_eq!(
        catalog.calls(),
        vec![
            Call::CategoryName("7".into()),
            Call::Search("shoe".into(), Some("7".into())),
        ]
    );
    assert_eq!(
        router.root().query(Marker::Heading).unwrap().text.as_deref(),
        Some("Shoes")
    );
    let results = router.root().query(Marker::Results).unwrap();
    assert_eq!(
        results.find_class("placeholder").and_then(|p| p.text.as_deref()),
        Some("No results for shoe")
    );
    let form = router.search_form().unwrap();
    assert_eq!(form.value(), "shoe");
    assert!(!form.is_disabled());
}

#[tokio::test]
async fn category_listing_uses_category_limit() {
    let catalog = stocked_catalog();
    let router = router_at("/?category=7", catalog.clone());

    router.route().await;

    assert_eq!(
        catalog.calls(),
        vec![
            Call::CategoryName("7".into()),
            Call::ProductsByCategory("7".into(), 12),
        ]
    );
    assert_eq!(
        router.root().markers(),
        vec![Marker::Heading, Marker::SearchForm, Marker::ProductList]
    );
    assert_eq!(card_count(router.root(), Marker::ProductList), 2);
}

#[tokio::test]
async fn unknown_category_name_falls_back() {
    let catalog = stocked_catalog();
    let router = router_at("/?category=99", catalog);

    router.route().await;

    assert_eq!(
        router.root().query(Marker::Heading).unwrap().text.as_deref(),
        Some("Unknown category")
    );
    let list = router.root().query(Marker::ProductList).unwrap();
    assert!(list.children[0].has_class("placeholder"));
}

#[tokio::test]
async fn categories_flag_with_category_lists_the_category() {
    let catalog = stocked_catalog();
    let router = router_at("/?category=7&categories=1", catalog.clone());

    router.route().await;

    assert_eq!(router.fragments(ViewKind::CategoryOnly).len(), 3);
    assert_eq!(catalog.count(Method::Categories), 0);
}

#[tokio::test]
async fn routing_twice_does_not_duplicate_fragments() {
    let catalog = stocked_catalog();
    let router = router_at("/", catalog);

    router.route().await;
    router.route().await;

    assert_eq!(router.root().markers(), FRONTPAGE.to_vec());
    assert_eq!(card_count(router.root(), Marker::ProductList), 2);
}

#[tokio::test]
async fn every_view_pair_tears_down_completely() {
    let locations = [
        ("/?id=42", ViewKind::ProductDetail),
        ("/?category=7&search=shoe", ViewKind::CategoryWithSearch),
        ("/?category=7", ViewKind::CategoryOnly),
        ("/?categories=1", ViewKind::AllCategories),
        ("/", ViewKind::Frontpage),
    ];

    for (first, first_kind) in locations {
        for (second, second_kind) in locations {
            if first_kind == second_kind {
                continue;
            }
            let fresh = router_at(second, stocked_catalog());
            fresh.route().await;

            let router = router_at(first, stocked_catalog());
            router.route().await;
            router.navigate(second).await;

            assert_eq!(
                router.root().markers(),
                fresh.root().markers(),
                "{first} -> {second}"
            );
            assert!(
                router.fragments(first_kind).is_empty(),
                "{first} fragments left after {second}"
            );
            assert_eq!(
                router.fragments(second_kind).len(),
                router.root().markers().len()
            );
        }
    }
}

#[tokio::test]
async fn view_all_categories_then_back_restores_frontpage() {
    let catalog = stocked_catalog();
    let router = router_at("/", catalog);
    router.route().await;

    assert!(router.show_all_categories().await);
    assert_eq!(router.history().location(), "/?categories=1");
    assert_eq!(
        router.root().markers(),
        vec![Marker::CategoriesHeading, Marker::CategoryList]
    );
    assert!(router.fragments(ViewKind::Frontpage).is_empty());

    assert!(router.history().back().await);
    assert_eq!(router.history().location(), "/");
    assert_eq!(router.root().markers(), FRONTPAGE.to_vec());
    assert!(router.fragments(ViewKind::AllCategories).is_empty());

    assert!(router.history().forward().await);
    assert_eq!(
        router.root().markers(),
        vec![Marker::CategoriesHeading, Marker::CategoryList]
    );
}

#[tokio::test]
async fn categories_button_only_exists_on_frontpage() {
    let catalog = stocked_catalog();
    let router = router_at("/?category=7", catalog);
    router.route().await;

    assert!(!router.show_all_categories().await);
    assert_eq!(router.history().entries(), vec!["/?category=7"]);
}

#[tokio::test]
async fn late_detail_result_is_discarded_after_navigation() {
    let catalog = stocked_catalog();
    catalog.gate(Method::ProductById);
    let router = router_at("/?id=42", catalog.clone());

    let pending = tokio::spawn({
        let router = router.clone();
        async move { router.route().await }
    });
    catalog.wait_for(Method::ProductById, 1).await;
    assert_eq!(router.root().count(Marker::Loading), 1);

    router.navigate("/").await;
    catalog.release(Method::ProductById, 1);
    pending.await.unwrap();

    assert_eq!(router.root().markers(), FRONTPAGE.to_vec());
    assert_eq!(catalog.count(Method::ProductsByCategory), 0);
    assert!(router.fragments(ViewKind::ProductDetail).is_empty());
}

#[tokio::test]
async fn late_frontpage_products_do_not_leak_into_category_view() {
    let catalog = stocked_catalog();
    catalog.gate(Method::Frontpage);
    let router = router_at("/", catalog.clone());

    let pending = tokio::spawn({
        let router = router.clone();
        async move { router.route().await }
    });
    catalog.wait_for(Method::Frontpage, 1).await;

    router.navigate("/?category=8").await;
    catalog.with_frontpage(vec![product("5", "Late", "8")]);
    catalog.release(Method::Frontpage, 1);
    pending.await.unwrap();

    assert_eq!(
        router.root().markers(),
        vec![Marker::Heading, Marker::SearchForm, Marker::ProductList]
    );
    assert!(!router
        .root()
        .snapshot()
        .fragments()
        .iter()
        .any(|f| f.node.text_content().contains("Late")));
    // The stale controller stops before asking for categories.
    assert_eq!(catalog.count(Method::Categories), 0);
}
