use chrono::Utc;
use dioxus::prelude::*;
use std::rc::Rc;

use crate::listing::LoadLatency;
use crate::services::{fetch_with_retry, CatalogSource, Product, RetryPolicy};
use crate::utils::validation::{parse_amount, parse_count};
use crate::utils::FetchState;

/// Cover used for products created in the admin dashboard
pub const DEFAULT_IMAGE: &str = "/assets/default-book.svg";

/// Raw admin form input, one string per field
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub stock: String,
}

/// Validated form contents
#[derive(Clone, Debug, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductFormError {
    /// A required field was left blank
    MissingField(&'static str),
    InvalidPrice(String),
    InvalidStock(String),
    NotFound(u32),
    /// Edits arrived before the catalog finished loading
    NotLoaded,
}

impl std::fmt::Display for ProductFormError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ProductFormError::MissingField(field) => write!(f, "Please fill in the {} field", field),
            ProductFormError::InvalidPrice(input) => {
                write!(f, "Price must be a non-negative number, got '{}'", input)
            }
            ProductFormError::InvalidStock(input) => {
                write!(f, "Stock must be a non-negative whole number, got '{}'", input)
            }
            ProductFormError::NotFound(id) => write!(f, "Product {} no longer exists", id),
            ProductFormError::NotLoaded => write!(f, "The catalog has not loaded yet"),
        }
    }
}

impl std::error::Error for ProductFormError {}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            category: product.category.clone(),
            stock: product.stock.to_string(),
        }
    }

    pub fn validate(&self) -> Result<ProductDraft, ProductFormError> {
        for (field, value) in [
            ("name", &self.name),
            ("description", &self.description),
            ("price", &self.price),
            ("category", &self.category),
            ("stock", &self.stock),
        ] {
            if value.trim().is_empty() {
                return Err(ProductFormError::MissingField(field));
            }
        }

        let price = parse_amount(&self.price)
            .ok_or_else(|| ProductFormError::InvalidPrice(self.price.clone()))?;
        let stock = parse_count(&self.stock)
            .ok_or_else(|| ProductFormError::InvalidStock(self.stock.clone()))?;

        Ok(ProductDraft {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            category: self.category.trim().to_string(),
            stock,
        })
    }
}

/// Next free id: one past the largest in use
pub fn next_product_id(products: &[Product]) -> u32 {
    products.iter().map(|p| p.id).max().map_or(1, |max| max.saturating_add(1))
}

pub fn insert_product(products: &mut Vec<Product>, draft: ProductDraft) -> u32 {
    let now = Utc::now();
    let id = next_product_id(products);
    products.push(Product {
        id,
        name: draft.name,
        description: draft.description,
        price: draft.price,
        category: draft.category,
        stock: draft.stock,
        image: Some(DEFAULT_IMAGE.to_string()),
        created_at: Some(now),
        updated_at: Some(now),
    });
    id
}

pub fn update_product(products: &mut [Product], id: u32, draft: ProductDraft) -> Result<(), ProductFormError> {
    let product = products
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(ProductFormError::NotFound(id))?;

    product.name = draft.name;
    product.description = draft.description;
    product.price = draft.price;
    product.category = draft.category;
    product.stock = draft.stock;
    product.updated_at = Some(Utc::now());
    Ok(())
}

pub fn remove_product(products: &mut Vec<Product>, id: u32) -> bool {
    let before = products.len();
    products.retain(|p| p.id != id);
    products.len() != before
}

// =============================================================================
// Store handle
// =============================================================================

/// Catalog state handed to components through context
#[derive(Clone, Copy, PartialEq)]
pub struct CatalogStore {
    pub state: Signal<FetchState<Vec<Product>>>,
    source: Signal<Rc<dyn CatalogSource>>,
    latency: Signal<Rc<dyn LoadLatency>>,
    retry: Signal<RetryPolicy>,
}

impl CatalogStore {
    pub fn new(source: Rc<dyn CatalogSource>, latency: Rc<dyn LoadLatency>, retry: RetryPolicy) -> Self {
        Self {
            state: Signal::new(FetchState::Idle),
            source: Signal::new(source),
            latency: Signal::new(latency),
            retry: Signal::new(retry),
        }
    }

    /// (Re)load the catalog from the source, retrying per policy
    pub async fn refresh(mut self) {
        if self.state.peek().is_loading() {
            log::debug!("Catalog fetch already in flight");
            return;
        }

        self.state.set(FetchState::Loading);
        let source = Rc::clone(&*self.source.peek());
        let latency = Rc::clone(&*self.latency.peek());
        let policy = *self.retry.peek();

        let result = fetch_with_retry(source.as_ref(), policy, latency.as_ref()).await;
        self.state.set(result.into());
    }

    /// Loaded products, empty while loading or failed
    pub fn products(&self) -> Vec<Product> {
        self.state.read().data().cloned().unwrap_or_default()
    }

    pub fn find(&self, id: u32) -> Option<Product> {
        self.state
            .read()
            .data()
            .and_then(|products| products.iter().find(|p| p.id == id).cloned())
    }

    pub fn add(&mut self, form: &ProductForm) -> Result<u32, ProductFormError> {
        let draft = form.validate()?;
        let mut state = self.state.write();
        let products = state.data_mut().ok_or(ProductFormError::NotLoaded)?;
        let id = insert_product(products, draft);
        log::info!("Added product {}", id);
        Ok(id)
    }

    pub fn update(&mut self, id: u32, form: &ProductForm) -> Result<(), ProductFormError> {
        let draft = form.validate()?;
        let mut state = self.state.write();
        let products = state.data_mut().ok_or(ProductFormError::NotLoaded)?;
        update_product(products, id, draft)?;
        log::info!("Updated product {}", id);
        Ok(())
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let removed = self
            .state
            .write()
            .data_mut()
            .is_some_and(|products| remove_product(products, id));
        if removed {
            log::info!("Removed product {}", id);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock_catalog::generate_catalog;

    fn filled_form() -> ProductForm {
        ProductForm {
            name: "Dune".to_string(),
            description: "Spice and sand".to_string(),
            price: "9.99".to_string(),
            category: "Fiction".to_string(),
            stock: "12".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let draft = filled_form().validate().expect("form is complete");
        assert_eq!(draft.price, 9.99);
        assert_eq!(draft.stock, 12);
    }

    #[test]
    fn test_missing_field() {
        let form = ProductForm { category: "  ".to_string(), ..filled_form() };
        assert_eq!(form.validate(), Err(ProductFormError::MissingField("category")));
        assert_eq!(ProductForm::default().validate(), Err(ProductFormError::MissingField("name")));
    }

    #[test]
    fn test_bad_numbers() {
        let form = ProductForm { price: "-2".to_string(), ..filled_form() };
        assert!(matches!(form.validate(), Err(ProductFormError::InvalidPrice(_))));

        let form = ProductForm { stock: "1.5".to_string(), ..filled_form() };
        assert!(matches!(form.validate(), Err(ProductFormError::InvalidStock(_))));
    }

    #[test]
    fn test_form_from_product_round_trips() {
        let product = &generate_catalog(1, 1)[0];
        let draft = ProductForm::from_product(product).validate().expect("seed product is valid");
        assert_eq!(draft.name, product.name);
        assert_eq!(draft.price, product.price);
        assert_eq!(draft.stock, product.stock);
    }

    #[test]
    fn test_insert_uses_next_id() {
        let mut products = generate_catalog(10, 1);
        products.retain(|p| p.id != 4);
        let draft = filled_form().validate().expect("form is complete");

        let id = insert_product(&mut products, draft);
        assert_eq!(id, 11);
        let added = products.last().expect("product was pushed");
        assert_eq!(added.name, "Dune");
        assert!(added.created_at.is_some());
        assert_eq!(next_product_id(&[]), 1);
    }

    #[test]
    fn test_update_and_remove() {
        let mut products = generate_catalog(5, 1);
        let draft = filled_form().validate().expect("form is complete");

        update_product(&mut products, 3, draft.clone()).expect("product 3 exists");
        assert_eq!(products[2].name, "Dune");
        assert!(products[2].updated_at.is_some());
        assert_eq!(update_product(&mut products, 42, draft), Err(ProductFormError::NotFound(42)));

        assert!(remove_product(&mut products, 3));
        assert!(!remove_product(&mut products, 3));
        assert_eq!(products.len(), 4);
    }
}
