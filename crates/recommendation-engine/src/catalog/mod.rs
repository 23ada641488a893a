//! Immutable product catalog
//!
//! Two hand-authored tables populated once at startup:
//! - `products` - core payment methods
//! - `addons` - optional feature enhancements
//!
//! Lookups resolve against products first, then add-ons. The shipped data
//! keeps the two namespaces disjoint (verified by tests), so the precedence
//! only matters for hypothetical collisions.

pub mod addons;
pub mod products;

use lazy_static::lazy_static;
use shared_types::ProductRecord;

lazy_static! {
    static ref CATALOG: Catalog = Catalog::build();
}

/// Process-wide catalog instance. Read-only after first access; safe for
/// unsynchronized concurrent reads.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

pub struct Catalog {
    products: Vec<ProductRecord>,
    addons: Vec<ProductRecord>,
}

impl Catalog {
    fn build() -> Self {
        Self {
            products: products::core_products(),
            addons: addons::feature_addons(),
        }
    }

    /// Resolve a name to its record, products before add-ons
    pub fn lookup(&self, name: &str) -> Option<&ProductRecord> {
        self.products
            .iter()
            .find(|p| p.name == name)
            .or_else(|| self.addons.iter().find(|a| a.name == name))
    }

    /// Core payment methods in catalog order
    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    /// Feature add-ons in catalog order
    pub fn addons(&self) -> &[ProductRecord] {
        &self.addons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_product_names_are_unique() {
        let catalog = catalog();
        let mut seen = HashSet::new();
        for record in catalog.products() {
            assert!(
                seen.insert(record.name.as_str()),
                "duplicate product name: {}",
                record.name
            );
        }
    }

    #[test]
    fn test_addon_names_are_unique() {
        let catalog = catalog();
        let mut seen = HashSet::new();
        for record in catalog.addons() {
            assert!(
                seen.insert(record.name.as_str()),
                "duplicate add-on name: {}",
                record.name
            );
        }
    }

    #[test]
    fn test_namespaces_are_disjoint() {
        // Products-first lookup would silently shadow a colliding add-on;
        // the shipped tables must never collide.
        let catalog = catalog();
        let product_names: HashSet<_> =
            catalog.products().iter().map(|p| p.name.as_str()).collect();
        for addon in catalog.addons() {
            assert!(
                !product_names.contains(addon.name.as_str()),
                "add-on {} shadows a core product",
                addon.name
            );
        }
    }

    #[test]
    fn test_lookup_resolves_products_and_addons() {
        let catalog = catalog();
        assert!(catalog.lookup("UPI").is_some());
        assert!(catalog.lookup("Quick Pay").is_some());
        assert!(catalog.lookup("Carrier Pigeon").is_none());
    }

    #[test]
    fn test_lookup_returns_matching_record() {
        let record = catalog().lookup("Payouts").unwrap();
        assert_eq!(record.name, "Payouts");
        assert!(!record.api_operations.is_empty());
    }

    #[test]
    fn test_catalog_sizes() {
        let catalog = catalog();
        assert_eq!(catalog.products().len(), 7);
        assert_eq!(catalog.addons().len(), 24);
    }

    #[test]
    fn test_every_record_has_docs_link() {
        let catalog = catalog();
        for record in catalog.products().iter().chain(catalog.addons()) {
            assert!(
                record.docs_link.is_some(),
                "{} is missing its docs link",
                record.name
            );
        }
    }
}
