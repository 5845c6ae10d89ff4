//! Knowledge-base listing from `/user/knowledge/fetch`.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// Number of titles shown per category on the dashboard.
pub const ARTICLES_PER_CATEGORY: usize = 3;

/// A knowledge-base article summary.
#[allow(dead_code)] // Full backend payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KnowledgeArticle {
    pub id: i64,
    #[serde(default)]
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub updated_at: Option<i64>,
}

/// Articles grouped by category, in the order the backend lists them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KnowledgeBase {
    categories: Vec<(String, Vec<KnowledgeArticle>)>,
}

impl KnowledgeBase {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[KnowledgeArticle])> {
        self.categories
            .iter()
            .map(|(category, articles)| (category.as_str(), articles.as_slice()))
    }
}

impl FromIterator<(String, Vec<KnowledgeArticle>)> for KnowledgeBase {
    fn from_iter<I: IntoIterator<Item = (String, Vec<KnowledgeArticle>)>>(iter: I) -> Self {
        Self {
            categories: iter.into_iter().collect(),
        }
    }
}

impl<'de> Deserialize<'de> for KnowledgeBase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CategoryVisitor;

        impl<'de> Visitor<'de> for CategoryVisitor {
            type Value = KnowledgeBase;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category to articles")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut categories = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    categories.push(entry);
                }
                Ok(KnowledgeBase { categories })
            }
        }

        deserializer.deserialize_map(CategoryVisitor)
    }
}

/// Categories with at most [`ARTICLES_PER_CATEGORY`] articles each.
pub fn featured(base: &KnowledgeBase) -> impl Iterator<Item = (&str, &[KnowledgeArticle])> {
    base.iter().map(|(category, articles)| {
        let shown = articles.len().min(ARTICLES_PER_CATEGORY);
        (category, &articles[..shown])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_limits_articles_in_backend_order() {
        let base: KnowledgeBase = serde_json::from_str(
            r#"{
                "Setup": [
                    {"id": 1, "category": "Setup", "title": "a", "updated_at": 1},
                    {"id": 2, "category": "Setup", "title": "b", "updated_at": 1},
                    {"id": 3, "category": "Setup", "title": "c", "updated_at": 1},
                    {"id": 4, "category": "Setup", "title": "d", "updated_at": 1}
                ],
                "Billing": [{"id": 5, "category": "Billing", "title": "e", "updated_at": 1}]
            }"#,
        )
        .unwrap();

        let shown: Vec<(&str, usize)> = featured(&base).map(|(c, a)| (c, a.len())).collect();
        assert_eq!(shown, [("Setup", 3), ("Billing", 1)]);
    }

    #[test]
    fn test_empty_base() {
        assert_eq!(featured(&KnowledgeBase::default()).count(), 0);
    }
}
