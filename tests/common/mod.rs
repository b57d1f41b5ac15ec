//! Shared test utilities and a scripted in-memory catalog.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Semaphore;

use storefront::api::{CatalogApi, Category, CategoryName, Product};
use storefront::config::CatalogConfig;
use storefront::history::NavigationHistory;
use storefront::router::Router;
use storefront::view::{Marker, PresentationRoot, ViewNode};

/// One recorded catalog call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ProductById(String),
    Frontpage,
    ProductsByCategory(String, u32),
    Categories,
    CategoryName(String),
    Search(String, Option<String>),
}

impl Call {
    pub fn method(&self) -> Method {
        match self {
            Call::ProductById(_) => Method::ProductById,
            Call::Frontpage => Method::Frontpage,
            Call::ProductsByCategory(..) => Method::ProductsByCategory,
            Call::Categories => Method::Categories,
            Call::CategoryName(_) => Method::CategoryName,
            Call::Search(..) => Method::Search,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    ProductById,
    Frontpage,
    ProductsByCategory,
    Categories,
    CategoryName,
    Search,
}

/// Catalog whose answers are scripted per test.
///
/// Unscripted lookups answer `None`, except searches which fall back to
/// `search_default`. A gated method parks every call until the test hands
/// out permits with [`FakeCatalog::release`].
#[derive(Default)]
pub struct FakeCatalog {
    products: Mutex<HashMap<String, Product>>,
    frontpage: Mutex<Option<Vec<Product>>>,
    by_category: Mutex<HashMap<String, Vec<Product>>>,
    categories: Mutex<Option<Vec<Category>>>,
    names: Mutex<HashMap<String, String>>,
    search_queue: Mutex<VecDeque<Option<Vec<Product>>>>,
    search_default: Mutex<Option<Vec<Product>>>,
    gates: Mutex<HashMap<Method, Arc<Semaphore>>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeCatalog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_product(&self, product: Product) -> &Self {
        self.products.lock().insert(product.id.clone(), product);
        self
    }

    pub fn with_frontpage(&self, products: Vec<Product>) -> &Self {
        *self.frontpage.lock() = Some(products);
        self
    }

    pub fn with_category_products(&self, category_id: &str, products: Vec<Product>) -> &Self {
        self.by_category
            .lock()
            .insert(category_id.to_string(), products);
        self
    }

    pub fn with_categories(&self, categories: Vec<Category>) -> &Self {
        *self.categories.lock() = Some(categories);
        self
    }

    pub fn with_category_name(&self, category_id: &str, name: &str) -> &Self {
        self.names
            .lock()
            .insert(category_id.to_string(), name.to_string());
        self
    }

    /// Answer for the next search call; queued answers are used in order.
    pub fn queue_search(&self, results: Option<Vec<Product>>) -> &Self {
        self.search_queue.lock().push_back(results);
        self
    }

    /// Answer for searches once the queue is empty.
    pub fn with_search_default(&self, results: Option<Vec<Product>>) -> &Self {
        *self.search_default.lock() = results;
        self
    }

    /// Parks every future call of `method` until released.
    pub fn gate(&self, method: Method) {
        self.gates
            .lock()
            .insert(method, Arc::new(Semaphore::new(0)));
    }

    /// Lets `count` parked (or future) calls of `method` through.
    pub fn release(&self, method: Method, count: usize) {
        if let Some(gate) = self.gates.lock().get(&method) {
            gate.add_permits(count);
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn count(&self, method: Method) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| call.method() == method)
            .count()
    }

    /// Yields until `method` has been called `count` times.
    pub async fn wait_for(&self, method: Method, count: usize) {
        for _ in 0..1000 {
            if self.count(method) >= count {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!(
            "{:?} called {} times, expected {}",
            method,
            self.count(method),
            count
        );
    }

    async fn enter(&self, call: Call) {
        let method = call.method();
        self.calls.lock().push(call);
        let gate = self.gates.lock().get(&method).cloned();
        if let Some(gate) = gate {
            gate.acquire()
                .await
                .expect("gate semaphore closed")
                .forget();
        }
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn get_product_by_id(&self, id: &str) -> Option<Product> {
        self.enter(Call::ProductById(id.to_string())).await;
        self.products.lock().get(id).cloned()
    }

    async fn get_frontpage_products(&self) -> Option<Vec<Product>> {
        self.enter(Call::Frontpage).await;
        self.frontpage.lock().clone()
    }

    async fn get_products_by_category(&self, category_id: &str, limit: u32) -> Option<Vec<Product>> {
        self.enter(Call::ProductsByCategory(category_id.to_string(), limit))
            .await;
        self.by_category.lock().get(category_id).cloned()
    }

    async fn get_categories(&self) -> Option<Vec<Category>> {
        self.enter(Call::Categories).await;
        self.categories.lock().clone()
    }

    async fn get_category_name(&self, category_id: &str) -> Option<CategoryName> {
        self.enter(Call::CategoryName(category_id.to_string())).await;
        self.names
            .lock()
            .get(category_id)
            .map(|name| CategoryName { name: name.clone() })
    }

    async fn search_products(&self, query: &str, category_id: Option<&str>) -> Option<Vec<Product>> {
        self.enter(Call::Search(
            query.to_string(),
            category_id.map(str::to_string),
        ))
        .await;
        let queued = self.search_queue.lock().pop_front();
        match queued {
            Some(results) => results,
            None => self.search_default.lock().clone(),
        }
    }
}

pub fn product(id: &str, title: &str, category_id: &str) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        price: "1000".to_string(),
        description: format!("About {title}"),
        image: format!("https://img.example/{id}.png"),
        category_id: category_id.to_string(),
        category_title: format!("Category {category_id}"),
    }
}

pub fn category(id: &str, title: &str) -> Category {
    Category {
        id: id.to_string(),
        title: title.to_string(),
    }
}

/// A catalog with a little of everything.
pub fn stocked_catalog() -> Arc<FakeCatalog> {
    let catalog = FakeCatalog::new();
    catalog
        .with_frontpage(vec![product("1", "Boot", "7"), product("2", "Lamp", "8")])
        .with_categories(vec![
            category("7", "Shoes"),
            category("8", "Lighting"),
            category("9", "Garden"),
        ])
        .with_category_name("7", "Shoes")
        .with_category_products("7", vec![product("1", "Boot", "7"), product("3", "Sandal", "7")])
        .with_product(product("42", "Running shoe", "7"))
        .with_search_default(Some(vec![product("3", "Sandal", "7")]));
    catalog
}

pub fn router_at(location: &str, catalog: Arc<FakeCatalog>) -> Router {
    Router::new(
        catalog,
        PresentationRoot::new(),
        NavigationHistory::new(location),
        CatalogConfig::default(),
    )
}

/// Texts of the direct children of the first fragment carrying `marker`.
pub fn child_texts(root: &PresentationRoot, marker: Marker) -> Vec<String> {
    root.query(marker)
        .map(|node| node.children.iter().map(ViewNode::text_content).collect())
        .unwrap_or_default()
}

/// Number of product cards in the first fragment carrying `marker`.
pub fn card_count(root: &PresentationRoot, marker: Marker) -> usize {
    root.query(marker)
        .map(|node| node.count_children("product-card") + node.count_children("category-card"))
        .unwrap_or(0)
}
