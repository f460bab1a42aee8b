use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult, Entity};

use crate::name::ProductName;

/// Optional pricing metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PricingMetadata {
    pub base_price: Option<u64>, // Price in smallest currency unit (e.g., cents)
    pub currency: Option<String>, // ISO currency code (e.g., "USD", "EUR")
}

impl PricingMetadata {
    pub fn new(base_price: u64, currency: impl Into<String>) -> Self {
        Self {
            base_price: Some(base_price),
            currency: Some(currency.into()),
        }
    }
}

/// A catalog item.
///
/// Products are immutable values once built; the store replaces whole records
/// instead of editing fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    name: ProductName,
    description: String,
    pricing: PricingMetadata,
}

/// Unchecked wire form; deserialized products go through [`Product::new`]
/// and [`Product::with_pricing`].
#[derive(Deserialize)]
struct ProductRecord {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    pricing: PricingMetadata,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Product::new(record.name, record.description)?.with_pricing(record.pricing)
    }
}

impl Product {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            name: ProductName::new(name)?,
            description: description.into(),
            pricing: PricingMetadata::default(),
        })
    }

    pub fn with_pricing(mut self, pricing: PricingMetadata) -> DomainResult<Self> {
        if pricing.base_price.is_some() && pricing.currency.is_none() {
            return Err(DomainError::validation("price requires a currency"));
        }
        self.pricing = pricing;
        Ok(self)
    }

    pub fn name(&self) -> &ProductName {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn pricing(&self) -> &PricingMetadata {
        &self.pricing
    }
}

impl Entity for Product {
    type Id = ProductName;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_has_no_pricing() {
        let product = Product::new("Widget", "A small widget").unwrap();
        assert_eq!(product.name().as_str(), "Widget");
        assert_eq!(product.description(), "A small widget");
        assert_eq!(product.pricing(), &PricingMetadata::default());
    }

    #[test]
    fn new_product_rejects_empty_name() {
        let err = Product::new("   ", "").unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn price_without_currency_is_rejected() {
        let pricing = PricingMetadata {
            base_price: Some(1299),
            currency: None,
        };
        let err = Product::new("Widget", "").unwrap().with_pricing(pricing).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn identity_is_the_case_insensitive_name() {
        let a = Product::new("Widget", "first").unwrap();
        let b = Product::new("WIDGET", "second").unwrap();
        assert_eq!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn serializes_name_as_plain_string() {
        let product = Product::new("Widget", "A small widget")
            .unwrap()
            .with_pricing(PricingMetadata::new(1299, "USD"))
            .unwrap();

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["pricing"]["base_price"], 1299);
        assert_eq!(json["pricing"]["currency"], "USD");

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn deserialize_rejects_price_without_currency() {
        let err = serde_json::from_str::<Product>(r#"{"name":"X","pricing":{"base_price":5}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("price requires a currency"));
    }

    #[test]
    fn deserialize_rejects_blank_name() {
        assert!(serde_json::from_str::<Product>(r#"{"name":" "}"#).is_err());
    }

    #[test]
    fn missing_optional_fields_default_on_deserialize() {
        let product: Product = serde_json::from_str(r#"{"name":"Gadget"}"#).unwrap();
        assert_eq!(product.description(), "");
        assert_eq!(product.pricing(), &PricingMetadata::default());
    }
}
