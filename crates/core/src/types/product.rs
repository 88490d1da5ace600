//! The narrow product record the cart consumes.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::price::Price;

/// Errors that can occur when validating a [`ProductSummary`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// The product has no usable title.
    #[error("product {0} is missing a title")]
    MissingTitle(ProductId),
    /// The product has no thumbnail reference.
    #[error("product {0} is missing a thumbnail")]
    MissingThumbnail(ProductId),
}

/// The subset of a product record that the cart needs.
///
/// The product collaborator returns much wider records (brand, rating,
/// stock, discount, ...); the cart snapshots exactly these four fields at
/// add time and never re-syncs them. Deserialization ignores the extra
/// fields, reports missing required fields by name, and re-validates, so a
/// malformed record fails fast instead of becoming a malformed line item.
///
/// ## Examples
///
/// ```
/// use driftwood_core::ProductSummary;
///
/// let record = r#"{
///     "id": 1,
///     "title": "Essence Mascara",
///     "price": 9.99,
///     "thumbnail": "https://cdn.example.com/1/thumb.jpg",
///     "brand": "Essence",
///     "stock": 99
/// }"#;
///
/// let product: ProductSummary = serde_json::from_str(record).unwrap();
/// assert_eq!(product.title(), "Essence Mascara");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedProduct")]
pub struct ProductSummary {
    id: ProductId,
    title: String,
    price: Price,
    thumbnail: String,
}

impl ProductSummary {
    /// Create a validated `ProductSummary`.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::MissingTitle`] if the title is empty or
    /// blank, and [`ProductError::MissingThumbnail`] if the thumbnail
    /// reference is empty.
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: Price,
        thumbnail: impl Into<String>,
    ) -> Result<Self, ProductError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ProductError::MissingTitle(id));
        }

        let thumbnail = thumbnail.into();
        if thumbnail.is_empty() {
            return Err(ProductError::MissingThumbnail(id));
        }

        Ok(Self {
            id,
            title,
            price,
            thumbnail,
        })
    }

    /// The product's unique identifier.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.id
    }

    /// The display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The current unit price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// An opaque reference to the product's thumbnail image.
    #[must_use]
    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }
}

/// Wire shape for [`ProductSummary`], before validation.
#[derive(Deserialize)]
struct UncheckedProduct {
    id: ProductId,
    title: String,
    price: Price,
    thumbnail: String,
}

impl TryFrom<UncheckedProduct> for ProductSummary {
    type Error = ProductError;

    fn try_from(raw: UncheckedProduct) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.title, raw.price, raw.thumbnail)
    }
}
