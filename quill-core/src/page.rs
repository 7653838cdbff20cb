use crate::api::{PageRequest, Pagination};

/// The requested page out of an already-ordered list
pub fn paginate<T>(items: &[T], req: PageRequest) -> (&[T], Pagination) {
    let skip = req.skip().min(items.len());
    let end = skip.saturating_add(req.take()).min(items.len());
    (&items[skip..end], Pagination::new(items.len(), req))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages() {
        let items = (0..45).collect::<Vec<u32>>();
        let (page, info) = paginate(&items, PageRequest::new(1, 20));
        assert_eq!(page, &items[0..20]);
        assert_eq!(info.pages, 3);

        let (page, _) = paginate(&items, PageRequest::new(3, 20));
        assert_eq!(page, &items[40..45]);

        let (page, info) = paginate(&items, PageRequest::new(7, 20));
        assert!(page.is_empty());
        assert_eq!(info.page, 7);
        assert_eq!(info.total, 45);
    }
}
