use serde::{Deserialize, Serialize};

// ============================================================================
// Category
// ============================================================================

/// Категория товара (вложена в ответ API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

// ============================================================================
// Product
// ============================================================================

/// Товар в том виде, в котором его отдаёт удалённый API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// First image, used as the list thumbnail.
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

// ============================================================================
// Write DTOs
// ============================================================================

/// DTO для создания товара
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProductDto {
    pub title: String,
    pub price: f64,
    pub description: String,
    #[serde(rename = "categoryId")]
    pub category_id: i64,
    pub images: Vec<String>,
}

/// DTO для частичного обновления товара
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProductDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "categoryId", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl From<CreateProductDto> for UpdateProductDto {
    fn from(dto: CreateProductDto) -> Self {
        Self {
            title: Some(dto.title),
            price: Some(dto.price),
            description: Some(dto.description),
            category_id: Some(dto.category_id),
            images: Some(dto.images),
        }
    }
}

/// Тело ответа на DELETE /products/{id}
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResult {
    /// `true` только если сервер подтвердил удаление
    #[serde(default)]
    pub rta: bool,
}
