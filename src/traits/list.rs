//! List trait for fetching cursor-paged collections.

use async_trait::async_trait;

use crate::client::LakeClient;
use crate::error::Result;
use crate::pagination::{Page, PaginationParams};

/// Page size used by [`List::list_all`].
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Maximum pages to fetch (safety limit).
const MAX_PAGES: u32 = 1000;

/// List resources with cursor pagination.
///
/// Implement this trait for resource types that can be listed with
/// optional filtering. Pages are chained through the opaque
/// `next_offset` cursor.
///
/// # Example
///
/// ```ignore
/// use lakeapi::{ActionRun, ActionRunListQuery, LakeClient, List, PaginationParams};
///
/// let client = LakeClient::from_env()?;
/// let query = ActionRunListQuery::new("repo1");
///
/// // Fetch a single page
/// let page = ActionRun::list_page(&client, &query, &PaginationParams::new(None, Some(50))).await?;
///
/// // Fetch all pages
/// let all_runs = ActionRun::list_all(&client, &query).await?;
/// ```
#[async_trait]
pub trait List: Sized + Send {
    /// Scope and filter parameters.
    type Query: Send + Sync;

    /// List one page of resources matching the query.
    ///
    /// # Arguments
    ///
    /// * `client` - The lakeFS API client
    /// * `query` - Scope (repository, run) and filters
    /// * `params` - Cursor and page size
    ///
    /// # Errors
    ///
    /// Returns an error if validation or the request fails.
    async fn list_page(
        client: &LakeClient,
        query: &Self::Query,
        params: &PaginationParams,
    ) -> Result<Page<Self>>;

    /// List all resources matching the query (follows every cursor).
    ///
    /// Pages are requested with [`DEFAULT_PAGE_SIZE`] items each.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    async fn list_all(client: &LakeClient, query: &Self::Query) -> Result<Vec<Self>> {
        Self::list_all_with_page_size(client, query, DEFAULT_PAGE_SIZE).await
    }

    /// List all resources matching the query, `page_size` items per request.
    ///
    /// Stops when the server reports no more results, when the cursor
    /// stops advancing, or after a fixed number of pages.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `page_size` exceeds the API maximum,
    /// or an error if any page request fails.
    async fn list_all_with_page_size(
        client: &LakeClient,
        query: &Self::Query,
        page_size: u32,
    ) -> Result<Vec<Self>> {
        let mut all_items = Vec::new();
        let mut params = PaginationParams::new(None, Some(page_size));
        let mut pages = 0;

        loop {
            let page = Self::list_page(client, query, &params).await?;
            pages += 1;

            let has_more = page.has_more();
            let next = page.next_cursor().map(str::to_string);
            all_items.extend(page.results);

            let Some(next) = next else {
                if has_more {
                    tracing::warn!(
                        "Server reported more results without a cursor, stopping pagination"
                    );
                }
                break;
            };

            if params.after.as_deref() == Some(next.as_str()) {
                tracing::warn!(cursor = %next, "Cursor did not advance, stopping pagination");
                break;
            }

            // Safety limit to prevent infinite loops
            if pages >= MAX_PAGES {
                tracing::warn!(
                    "Reached pagination limit of {} pages, stopping",
                    MAX_PAGES
                );
                break;
            }

            params.after = Some(next);
        }

        Ok(all_items)
    }
}
