use serde::Serialize;

/// One page of results together with the metadata a client needs to
/// navigate the full set.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub data: Vec<T>,
    /// 1-based page number this envelope holds.
    pub page: usize,
    /// Requested page size.
    pub limit: usize,
    /// Count of all matching records across every page.
    pub total: usize,
    /// Never zero: an empty result set still reports one page.
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, page: usize, limit: usize, total: usize) -> Self {
        let total_pages = total.div_ceil(limit).max(1);

        Self {
            data,
            page,
            limit,
            total,
            total_pages,
        }
    }
}
