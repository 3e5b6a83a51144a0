//! High-level intake facade used by the CLI.

use super::error::CommerceError;
use super::gateway::CommerceGateway;
use super::models::{CategoryOrBrand, FilterOptions};

/// Loads the option lists the filter panel offers.
pub struct CatalogIntake<'client, Gateway>
where
    Gateway: CommerceGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> CatalogIntake<'client, Gateway>
where
    Gateway: CommerceGateway,
{
    /// Create a new intake facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Load every category and every brand page.
    ///
    /// Brand pages are requested while the previous response advertises a
    /// next page, and never more than the first response's page count.
    ///
    /// # Errors
    ///
    /// Propagates the first gateway failure; partial results are discarded.
    pub async fn load_filter_options(&self) -> Result<FilterOptions, CommerceError> {
        let categories = self.client.categories().await?.data;
        let brands = self.load_all_brands().await?;
        tracing::debug!(
            categories = categories.len(),
            brands = brands.len(),
            "loaded filter options"
        );
        Ok(FilterOptions { categories, brands })
    }

    async fn load_all_brands(&self) -> Result<Vec<CategoryOrBrand>, CommerceError> {
        let first = self.client.brands(None).await?;
        let page_limit = first.metadata.number_of_pages;
        let mut requests = 1_u32;
        let mut next = first.metadata.following_page();
        let mut brands = first.data;

        while let Some(page) = next {
            if requests >= page_limit {
                tracing::warn!(page, page_limit, "brand listing advertised too many pages");
                break;
            }
            let response = self.client.brands(Some(page)).await?;
            requests = requests.saturating_add(1);
            next = response
                .metadata
                .following_page()
                .filter(|following| *following > page);
            brands.extend(response.data);
        }

        Ok(brands)
    }
}
