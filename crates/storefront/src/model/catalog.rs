use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use super::{Product, ProductId};
use crate::catalog_actor::CatalogError;

/// The fixed set of purchasable products.
///
/// Validated once in [`Catalog::new`] and read-only afterwards. Served by the
/// catalog actor, see [`impl ActorState for Catalog`](#impl-ActorState-for-Catalog).
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids, negative prices and malformed currencies.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());

        for (position, product) in products.iter().enumerate() {
            if product.price < Decimal::ZERO {
                return Err(CatalogError::InvalidPrice {
                    id: product.id.clone(),
                    price: product.price,
                });
            }
            if !is_currency_code(&product.currency) {
                return Err(CatalogError::InvalidCurrency {
                    id: product.id.clone(),
                    currency: product.currency.clone(),
                });
            }
            if index.insert(product.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }

        Ok(Self { products, index })
    }

    /// Every product, in the order the catalog was built with.
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    pub fn get_by_id(&self, id: &ProductId) -> Result<&Product, CatalogError> {
        self.index
            .get(id)
            .map(|&position| &self.products[position])
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct currencies offered, sorted.
    pub fn currencies(&self) -> Vec<&str> {
        let set: HashSet<&str> = self.products.iter().map(|p| p.currency.as_str()).collect();
        let mut currencies: Vec<&str> = set.into_iter().collect();
        currencies.sort_unstable();
        currencies
    }
}

/// Seed products the storefront starts with when no catalog is configured.
pub fn default_products() -> Vec<Product> {
    vec![
        Product::new("p1", "T-shirt", Decimal::new(25, 0), "EUR"),
        Product::new("p2", "Hoodie", Decimal::new(60, 0), "EUR"),
        Product::new("p3", "Cap", Decimal::new(15, 0), "EUR"),
    ]
}

fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_seed_catalog() {
        let catalog = Catalog::new(default_products()).unwrap();

        let ids: Vec<&str> = catalog.list_all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
        assert_eq!(catalog.get_by_id(&"p2".into()).unwrap().price, dec!(60));
        assert_eq!(catalog.currencies(), vec!["EUR"]);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_empty_catalog_is_allowed() {
        let catalog = Catalog::new(Vec::new()).unwrap();

        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.currencies().is_empty());
    }

    #[test]
    fn test_get_by_id_not_found() {
        let catalog = Catalog::new(default_products()).unwrap();

        let err = catalog.get_by_id(&"P1".into()).unwrap_err();
        assert_eq!(err, CatalogError::NotFound("P1".into()));
        assert_eq!(err.to_string(), r#"Product with ID "P1" not found"#);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let products = vec![
            Product::new("p1", "A", dec!(1), "EUR"),
            Product::new("p1", "B", dec!(2), "EUR"),
        ];

        assert_eq!(
            Catalog::new(products).unwrap_err(),
            CatalogError::DuplicateId("p1".into())
        );
    }

    #[test]
    fn test_rejects_negative_price() {
        let products = vec![Product::new("p1", "A", dec!(-0.01), "EUR")];

        assert!(matches!(
            Catalog::new(products),
            Err(CatalogError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_currency() {
        for currency in ["eur", "EURO", "E1R", ""] {
            let products = vec![Product::new("p1", "A", dec!(1), currency)];
            assert!(
                matches!(Catalog::new(products), Err(CatalogError::InvalidCurrency { .. })),
                "{currency} should be rejected"
            );
        }
    }

    #[test]
    fn test_free_products_are_allowed() {
        let catalog = Catalog::new(vec![Product::new("gift", "Sticker", dec!(0), "USD")]).unwrap();
        assert_eq!(catalog.len(), 1);
    }
}
