use serde::Deserialize;

/// Default page size, matching the list views of the original board UI.
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
    pub size: Option<usize>,
}

#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

/// Slice `items` into 1-based page `page` of `size` elements.
/// Page 0 is clamped to 1; pages past the end yield an empty slice.
pub fn paginate<T: Clone>(items: &[T], page: usize, size: usize) -> Page<T> {
    let size = if size == 0 { DEFAULT_PAGE_SIZE } else { size };
    let page = page.max(1);
    let total_count = items.len();
    let total_pages = total_count.div_ceil(size);

    let start = (page - 1).saturating_mul(size);
    let slice = if start >= total_count {
        Vec::new()
    } else {
        items[start..(start + size).min(total_count)].to_vec()
    };

    Page {
        items: slice,
        page,
        total_pages,
        total_count,
    }
}
