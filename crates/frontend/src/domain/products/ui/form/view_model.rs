//! ViewModel for the product form
//!
//! Form fields are individual RwSignals for THAW two-way binding; parsing and
//! validation happen on the plain `ProductFormData` snapshot.

use contracts::domain::products::{CreateProductDto, Product};
use leptos::prelude::*;

/// Raw field values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFormData {
    pub title: String,
    pub price: String,
    pub description: String,
    pub category_id: String,
    pub image: String,
}

impl ProductFormData {
    pub fn from_product(p: &Product) -> Self {
        Self {
            title: p.title.clone(),
            price: p.price.to_string(),
            description: p.description.clone(),
            category_id: p.category.id.to_string(),
            image: p.thumbnail().unwrap_or_default().to_string(),
        }
    }

    /// Parse into a payload, or the first validation message.
    pub fn validate(&self) -> Result<CreateProductDto, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required".to_string());
        }

        let price: f64 = self
            .price
            .trim()
            .replace(',', ".")
            .parse()
            .map_err(|_| "Price must be a number".to_string())?;
        if !price.is_finite() || price <= 0.0 {
            return Err("Price must be greater than zero".to_string());
        }

        let category_id: i64 = self
            .category_id
            .trim()
            .parse()
            .map_err(|_| "Category must be a numeric id".to_string())?;
        if category_id <= 0 {
            return Err("Category must be a positive id".to_string());
        }

        let image = self.image.trim();
        if !(image.starts_with("http://") || image.starts_with("https://")) {
            return Err("Image must be an http(s) URL".to_string());
        }

        Ok(CreateProductDto {
            title: title.to_string(),
            price,
            description: self.description.trim().to_string(),
            category_id,
            images: vec![image.to_string()],
        })
    }
}

#[derive(Clone, Copy)]
pub struct ProductFormVm {
    pub title: RwSignal<String>,
    pub price: RwSignal<String>,
    pub description: RwSignal<String>,
    pub category_id: RwSignal<String>,
    pub image: RwSignal<String>,

    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ProductFormVm {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            category_id: RwSignal::new(String::new()),
            image: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn load(&self, data: ProductFormData) {
        self.title.set(data.title);
        self.price.set(data.price);
        self.description.set(data.description);
        self.category_id.set(data.category_id);
        self.image.set(data.image);
        self.error.set(None);
    }

    pub fn snapshot(&self) -> ProductFormData {
        ProductFormData {
            title: self.title.get_untracked(),
            price: self.price.get_untracked(),
            description: self.description.get_untracked(),
            category_id: self.category_id.get_untracked(),
            image: self.image.get_untracked(),
        }
    }

    pub fn reset(&self) {
        self.load(ProductFormData::default());
    }
}

impl Default for ProductFormVm {
    fn default() -> Self {
        Self::new()
    }
}
