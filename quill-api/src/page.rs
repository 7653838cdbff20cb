pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PageRequest {
    /// 1-based
    #[serde(default = "first_page")]
    pub page: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn first_page() -> usize {
    1
}

fn default_limit() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for PageRequest {
    fn default() -> PageRequest {
        PageRequest {
            page: first_page(),
            limit: default_limit(),
        }
    }
}

impl PageRequest {
    pub fn new(page: usize, limit: usize) -> PageRequest {
        PageRequest { page, limit }.clamped()
    }

    /// Zero values are bumped to 1, so that `skip` and `Pagination::pages`
    /// are always defined
    pub fn clamped(self) -> PageRequest {
        PageRequest {
            page: self.page.max(1),
            limit: self.limit.max(1),
        }
    }

    pub fn skip(&self) -> usize {
        let this = self.clamped();
        (this.page - 1).saturating_mul(this.limit)
    }

    pub fn take(&self) -> usize {
        self.clamped().limit
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Pagination {
    pub total: usize,
    pub pages: usize,
    pub page: usize,
    pub limit: usize,
}

impl Pagination {
    pub fn new(total: usize, req: PageRequest) -> Pagination {
        let req = req.clamped();
        Pagination {
            total,
            pages: total / req.limit + usize::from(total % req.limit != 0),
            page: req.page,
            limit: req.limit,
        }
    }
}
