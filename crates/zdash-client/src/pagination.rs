use std::future::Future;
use std::num::NonZeroU32;

use crate::{Error, Result};

/// Items requested per page; also the largest `limit` the API accepts
pub const PAGE_SIZE: u32 = 100;

const DEFAULT_PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(PAGE_SIZE) {
    Some(size) => size,
    None => panic!("PAGE_SIZE must be non-zero"),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: NonZeroU32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(page_size: u32) -> Result<Self> {
        NonZeroU32::new(page_size)
            .map(|page_size| Self { page_size })
            .ok_or(Error::InvalidPageSize)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size.get()
    }
}

/// Offset/limit window of one page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u64,
    pub limit: u32,
}

impl PageRequest {
    pub fn nth(page_index: u64, page_size: u32) -> Self {
        Self {
            offset: page_index * u64::from(page_size),
            limit: page_size,
        }
    }
}

/// Every item of a collection plus how many page requests it took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched<T> {
    pub items: Vec<T>,
    pub requests: usize,
}

/// Request pages sequentially until one comes back shorter than the page
/// size, concatenating items in arrival order.
///
/// A collection whose size is an exact multiple of the page size costs one
/// extra, empty request. The first failed page aborts the whole fetch and
/// the items gathered so far are dropped.
pub async fn fetch_all_pages<T, F, Fut>(
    resource: &str,
    pagination: Pagination,
    mut fetch_page: F,
) -> Result<Fetched<T>>
where
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    let page_size = pagination.page_size();
    let mut items = Vec::new();
    let mut page_index: u64 = 0;

    loop {
        let request = PageRequest::nth(page_index, page_size);
        let page = match fetch_page(request).await {
            Ok(page) => page,
            Err(err) => {
                tracing::debug!(resource, offset = request.offset, error = %err, "page request failed");
                return Err(err);
            }
        };
        page_index += 1;

        let received = page.len();
        tracing::debug!(resource, offset = request.offset, received, "fetched page");
        items.extend(page);

        if received < page_size as usize {
            break;
        }
    }

    tracing::info!(
        resource,
        items = items.len(),
        requests = page_index,
        "fetched all pages"
    );

    Ok(Fetched {
        items,
        requests: page_index as usize,
    })
}
