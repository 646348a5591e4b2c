// src/catalog/catalog_structs.rs

use serde::{Deserialize, Serialize};

/// Maximum description length shown on a listing card.
pub const CARD_DESCRIPTION_LIMIT: usize = 120;

/// One product as served by the catalog API.
///
/// The shape is the catalog's contract, not ours; it is mirrored here as
/// opaquely as possible. Fields the catalog occasionally omits default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    #[serde(default)]
    pub warranty_information: String,
    #[serde(default)]
    pub shipping_information: String,
    #[serde(default)]
    pub availability_status: String,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub return_policy: String,
    #[serde(default)]
    pub minimum_order_quantity: i64,
    #[serde(default)]
    pub meta: Option<ProductMeta>,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub reviewer_name: String,
    #[serde(default)]
    pub reviewer_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMeta {
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub barcode: String,
    #[serde(default)]
    pub qr_code: String,
}

/// The catalog's paging envelope for the product collection.
#[derive(Debug, Deserialize)]
pub struct ProductsPage {
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub skip: i64,
    #[serde(default)]
    pub limit: i64,
}

/// Card summary for the listing grid: display fields only, with the
/// description truncated.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub discount_percentage: f64,
    pub rating: f64,
    pub brand: Option<String>,
    pub category: String,
    pub thumbnail: String,
    pub stock: i64,
}

impl ProductCard {
    pub fn from_product(p: &Product) -> Self {
        Self {
            id: p.id,
            title: p.title.clone(),
            description: truncate_description(&p.description, CARD_DESCRIPTION_LIMIT),
            price: p.price,
            discount_percentage: p.discount_percentage,
            rating: p.rating,
            brand: p.brand.clone(),
            category: p.category.clone(),
            thumbnail: p.thumbnail.clone(),
            stock: p.stock,
        }
    }
}

#[derive(Serialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductCard>,
    pub count: usize,
    pub total: i64,
}

/// Detail view: the full catalog product plus the computed display
/// fields the detail page needs.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<i64>,
    pub in_stock: bool,
}

impl ProductDetail {
    pub fn from_product(product: Product) -> Self {
        let original_price = original_price(product.price, product.discount_percentage);
        let in_stock = product.stock > 0;
        Self {
            product,
            original_price,
            in_stock,
        }
    }
}

/// Pre-discount display price, recovered by inverting the discount
/// percentage. The catalog sends the discounted price; the detail page
/// shows the struck-through original next to it.
pub fn original_price(price: f64, discount_percentage: f64) -> Option<i64> {
    if discount_percentage > 0.0 {
        Some((price * (100.0 + discount_percentage) / 100.0).round() as i64)
    } else {
        None
    }
}

/// Truncate on a character boundary, appending an ellipsis when cut.
pub fn truncate_description(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    format!("{}…", cut.trim_end())
}

/// Case-insensitive substring filter over title and description.
pub fn filter_products(products: Vec<Product>, query: &str) -> Vec<Product> {
    let needle = query.to_lowercase();
    products
        .into_iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed-down sample of a real catalog payload.
    const PRODUCT_JSON: &str = r#"{
        "id": 1,
        "title": "Essence Mascara Lash Princess",
        "description": "The Essence Mascara Lash Princess is a popular mascara known for its volumizing and lengthening effects.",
        "category": "beauty",
        "price": 9.99,
        "discountPercentage": 7.17,
        "rating": 4.94,
        "stock": 5,
        "tags": ["beauty", "mascara"],
        "brand": "Essence",
        "sku": "RCH45Q1A",
        "weight": 2,
        "dimensions": { "width": 23.17, "height": 14.43, "depth": 28.01 },
        "warrantyInformation": "1 month warranty",
        "shippingInformation": "Ships in 1 month",
        "availabilityStatus": "Low Stock",
        "reviews": [
            {
                "rating": 2,
                "comment": "Very unhappy with my purchase!",
                "date": "2024-05-23T08:56:21.618Z",
                "reviewerName": "John Doe",
                "reviewerEmail": "john.doe@x.dummyjson.com"
            }
        ],
        "returnPolicy": "30 days return policy",
        "minimumOrderQuantity": 24,
        "meta": {
            "createdAt": "2024-05-23T08:56:21.618Z",
            "updatedAt": "2024-05-23T08:56:21.618Z",
            "barcode": "9164035109868",
            "qrCode": "https://assets.dummyjson.com/public/qr-code.png"
        },
        "thumbnail": "https://cdn.dummyjson.com/products/images/beauty/thumbnail.png",
        "images": ["https://cdn.dummyjson.com/products/images/beauty/1.png"]
    }"#;

    fn sample_product() -> Product {
        serde_json::from_str(PRODUCT_JSON).unwrap()
    }

    #[test]
    fn catalog_product_deserializes() {
        let p = sample_product();
        assert_eq!(p.id, 1);
        assert_eq!(p.brand.as_deref(), Some("Essence"));
        assert_eq!(p.discount_percentage, 7.17);
        assert_eq!(p.reviews.len(), 1);
        assert_eq!(p.reviews[0].reviewer_name, "John Doe");
        assert_eq!(p.dimensions.as_ref().unwrap().width, 23.17);
        assert_eq!(p.meta.as_ref().unwrap().barcode, "9164035109868");
    }

    #[test]
    fn absent_optional_catalog_fields_default() {
        // Some catalog entries carry no brand, reviews or meta.
        let p: Product =
            serde_json::from_str(r#"{"id": 2, "title": "Plain Soap", "price": 2.5}"#).unwrap();
        assert_eq!(p.brand, None);
        assert!(p.reviews.is_empty());
        assert!(p.meta.is_none());
        assert_eq!(p.stock, 0);
    }

    #[test]
    fn short_descriptions_are_left_alone() {
        assert_eq!(truncate_description("short", 120), "short");
    }

    #[test]
    fn long_descriptions_are_cut_with_ellipsis() {
        let long = "a".repeat(200);
        let cut = truncate_description(&long, 120);
        assert_eq!(cut.chars().count(), 121);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn truncation_respects_character_boundaries() {
        let text = "café ".repeat(50);
        let cut = truncate_description(&text, 120);
        assert!(cut.chars().count() <= 121);
    }

    #[test]
    fn card_truncates_description() {
        let mut p = sample_product();
        p.description = "x".repeat(300);
        let card = ProductCard::from_product(&p);
        assert_eq!(card.description.chars().count(), 121);
        assert_eq!(card.id, 1);
        assert_eq!(card.thumbnail, p.thumbnail);
    }

    #[test]
    fn filter_matches_title_and_description_case_insensitively() {
        let mut other = sample_product();
        other.id = 2;
        other.title = "Red Lipstick".to_string();
        other.description = "A classic shade.".to_string();
        let products = vec![sample_product(), other];

        let by_title = filter_products(products.clone(), "MASCARA");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, 1);

        let by_description = filter_products(products.clone(), "classic shade");
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id, 2);

        assert!(filter_products(products, "granite").is_empty());
    }

    #[test]
    fn original_price_inverts_the_discount() {
        // round(9.99 * 107.17 / 100) = round(10.706...) = 11
        assert_eq!(original_price(9.99, 7.17), Some(11));
        assert_eq!(original_price(9.99, 0.0), None);
    }

    #[test]
    fn detail_carries_computed_display_fields() {
        let detail = ProductDetail::from_product(sample_product());
        let value = serde_json::to_value(&detail).unwrap();
        // Flattened catalog fields and computed ones side by side.
        assert_eq!(value["title"], "Essence Mascara Lash Princess");
        assert_eq!(value["originalPrice"], 11);
        assert_eq!(value["inStock"], true);
        assert_eq!(value["discountPercentage"], 7.17);
    }

    #[test]
    fn detail_omits_original_price_without_discount() {
        let mut p = sample_product();
        p.discount_percentage = 0.0;
        p.stock = 0;
        let value = serde_json::to_value(&ProductDetail::from_product(p)).unwrap();
        assert!(value.get("originalPrice").is_none());
        assert_eq!(value["inStock"], false);
    }
}
