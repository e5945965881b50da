use intake_core::models::assessment::{
    AssessmentCategory, AssessmentDefinition, AssessmentOption, AssessmentPage, AssessmentQuery,
};
use intake_core::reference;

use crate::BoxFuture;
use crate::error::ServiceError;

/// Source of standardized assessment definitions.
pub trait AssessmentCatalog: Send + Sync {
    fn list(&self) -> BoxFuture<'_, Result<Vec<AssessmentDefinition>, ServiceError>>;

    /// Paged keyword search. Pages are 1-based; a page past the end is empty
    /// but still reports the total match count.
    fn search(&self, query: &AssessmentQuery) -> BoxFuture<'_, Result<AssessmentPage, ServiceError>>;

    /// Autocomplete entries for a keyword.
    fn options(&self, keyword: &str) -> BoxFuture<'_, Result<Vec<AssessmentOption>, ServiceError>>;

    fn get(&self, id: u32) -> BoxFuture<'_, Result<AssessmentDefinition, ServiceError>>;

    fn by_category(
        &self,
        category: AssessmentCategory,
    ) -> BoxFuture<'_, Result<Vec<AssessmentDefinition>, ServiceError>>;
}

/// Catalog holding a fixed list of definitions, by default the standard five.
#[derive(Debug, Clone)]
pub struct StaticAssessmentCatalog {
    assessments: Vec<AssessmentDefinition>,
}

impl Default for StaticAssessmentCatalog {
    fn default() -> Self {
        Self::new(reference::standard_assessments().to_vec())
    }
}

impl StaticAssessmentCatalog {
    pub fn new(assessments: Vec<AssessmentDefinition>) -> Self {
        Self { assessments }
    }

    fn page(&self, query: &AssessmentQuery) -> AssessmentPage {
        let matching: Vec<&AssessmentDefinition> = self
            .assessments
            .iter()
            .filter(|a| a.matches_keyword(&query.keyword))
            .filter(|a| query.category.is_none_or(|c| a.category == c))
            .collect();

        let page = query.page.max(1);
        let start = (page - 1).saturating_mul(query.page_size);
        let data = matching
            .iter()
            .skip(start)
            .take(query.page_size)
            .map(|a| (*a).clone())
            .collect();

        AssessmentPage {
            data,
            total_count: matching.len(),
            page,
            page_number: page,
        }
    }
}

impl AssessmentCatalog for StaticAssessmentCatalog {
    fn list(&self) -> BoxFuture<'_, Result<Vec<AssessmentDefinition>, ServiceError>> {
        Box::pin(async move { Ok(self.assessments.clone()) })
    }

    fn search(&self, query: &AssessmentQuery) -> BoxFuture<'_, Result<AssessmentPage, ServiceError>> {
        let page = self.page(query);
        Box::pin(async move { Ok(page) })
    }

    fn options(&self, keyword: &str) -> BoxFuture<'_, Result<Vec<AssessmentOption>, ServiceError>> {
        let options = self
            .assessments
            .iter()
            .filter(|a| a.matches_keyword(keyword))
            .map(AssessmentOption::from)
            .collect();
        Box::pin(async move { Ok(options) })
    }

    fn get(&self, id: u32) -> BoxFuture<'_, Result<AssessmentDefinition, ServiceError>> {
        Box::pin(async move {
            self.assessments
                .iter()
                .find(|a| a.id == id)
                .cloned()
                .ok_or(ServiceError::AssessmentNotFound(id))
        })
    }

    fn by_category(
        &self,
        category: AssessmentCategory,
    ) -> BoxFuture<'_, Result<Vec<AssessmentDefinition>, ServiceError>> {
        Box::pin(async move {
            Ok(self
                .assessments
                .iter()
                .filter(|a| a.category == category)
                .cloned()
                .collect())
        })
    }
}
