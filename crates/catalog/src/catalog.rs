use serde::{Deserialize, Serialize};

use vitrine_core::{CatalogError, CatalogResult, CategoryId, Entity, ensure_unique_ids};

use crate::category::Category;
use crate::product::Product;

/// A catalog as written in a document, before any validation.
///
/// Ids are kept as plain strings so that [`CatalogDocument::into_catalog`]
/// can report blank ids, duplicates and blank names as their own error kinds
/// rather than as parse failures.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct CatalogDocument(Vec<CategoryDocument>);

#[derive(Debug, Clone, Deserialize)]
struct CategoryDocument {
    id: String,
    title: String,
    emoji: String,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    products: Vec<Product>,
}

impl CatalogDocument {
    /// Validate the document into a [`Catalog`].
    pub fn into_catalog(self) -> CatalogResult<Catalog> {
        let categories = self
            .0
            .into_iter()
            .map(|raw| {
                let mut category = Category::new(CategoryId::new(raw.id)?, raw.title, raw.emoji)
                    .with_products(raw.products);
                if let Some(icon) = raw.icon {
                    category = category.with_icon(icon);
                }
                Ok(category)
            })
            .collect::<CatalogResult<Vec<_>>>()?;

        Catalog::new(categories)
    }
}

/// The full ordered set of categories.
///
/// Construction validates the catalog once; afterwards it is immutable.
/// Deserialization goes through the same validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDocument", into = "Vec<Category>")]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog, failing fast on duplicate category ids or blank
    /// product names.
    pub fn new(categories: Vec<Category>) -> CatalogResult<Self> {
        ensure_unique_ids(&categories, |id| CatalogError::DuplicateCategory(id.clone()))?;

        for category in &categories {
            for (position, product) in category.products().iter().enumerate() {
                if product.name().trim().is_empty() {
                    return Err(CatalogError::validation(format!(
                        "product #{position} in category '{}' has a blank name",
                        category.id()
                    )));
                }
            }
        }

        Ok(Self { categories })
    }

    /// Parse and validate a JSON category array.
    ///
    /// Only malformed JSON is reported as [`CatalogError::Parse`]; invalid
    /// content keeps its own error kind.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|e| CatalogError::parse(e.to_string()))?;
        let catalog = document.into_catalog()?;
        tracing::debug!(
            categories = catalog.len(),
            products = catalog.product_count(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn get(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id() == id)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn product_count(&self) -> usize {
        self.categories.iter().map(|c| c.products().len()).sum()
    }
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = CatalogError;

    fn try_from(value: CatalogDocument) -> Result<Self, Self::Error> {
        value.into_catalog()
    }
}

impl From<Catalog> for Vec<Category> {
    fn from(value: Catalog) -> Self {
        value.categories
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Category;
    type IntoIter = core::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> CategoryId {
        CategoryId::new(s).unwrap()
    }

    fn category(s: &str) -> Category {
        Category::new(id(s), s.to_uppercase(), "🍵")
    }

    #[test]
    fn keeps_category_order() {
        let catalog = Catalog::new(vec![category("green"), category("black"), category("herbal")])
            .unwrap();

        let ids: Vec<_> = catalog.iter().map(|c| c.id().as_str()).collect();
        assert_eq!(ids, vec!["green", "black", "herbal"]);
        assert_eq!(catalog.get(&id("black")).map(Category::title), Some("BLACK"));
        assert!(catalog.get(&id("oolong")).is_none());
    }

    #[test]
    fn rejects_duplicate_category_ids() {
        let err = Catalog::new(vec![category("green"), category("green")]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateCategory(id("green")));
    }

    #[test]
    fn rejects_blank_product_names() {
        let bad = category("green")
            .with_product(Product::new("Sencha"))
            .with_product(Product::new("  "));

        let err = Catalog::new(vec![bad]).unwrap_err();
        match err {
            CatalogError::Validation(msg) => {
                assert!(msg.contains("#1"));
                assert!(msg.contains("'green'"));
            }
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.product_count(), 0);
    }

    #[test]
    fn from_json_validates() {
        let err = Catalog::from_json(
            r#"[
                { "id": "a", "title": "A", "emoji": "" },
                { "id": "a", "title": "A again", "emoji": "" }
            ]"#,
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateCategory(id("a")));

        let err = Catalog::from_json(r#"[{ "id": "  ", "title": "A", "emoji": "" }]"#).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidId(_)));

        let err = Catalog::from_json(
            r#"[{ "id": "a", "title": "A", "emoji": "", "products": [{ "name": "" }] }]"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Validation(msg) if msg.contains("'a'")));

        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn serde_deserialization_validates_the_same_way() {
        let err = serde_json::from_str::<Catalog>(
            r#"[{ "id": "a", "title": "A", "emoji": "" }, { "id": "a", "title": "B", "emoji": "" }]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate category identity: a"));
    }

    #[test]
    fn from_json_counts_products() {
        let catalog = Catalog::from_json(
            r#"[
                { "id": "a", "title": "A", "emoji": "", "products": [{ "name": "x" }, { "name": "y" }] },
                { "id": "b", "title": "B", "emoji": "", "products": [{ "name": "z", "prices": [] }] }
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.product_count(), 3);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a catalog built from distinct ids always validates and
            /// serializes back to the same category sequence.
            #[test]
            fn distinct_ids_round_trip_through_json(
                ids in proptest::collection::btree_set("[a-z]{1,12}", 0..16)
            ) {
                let categories: Vec<_> = ids.iter().map(|s| category(s)).collect();
                let catalog = Catalog::new(categories.clone()).unwrap();

                let json = serde_json::to_string(&catalog).unwrap();
                let reloaded = Catalog::from_json(&json).unwrap();

                prop_assert_eq!(reloaded.categories(), categories.as_slice());
            }
        }
    }
}
