use serde::{Deserialize, Serialize};

/// Pagination envelope used by every listing endpoint of the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_pages: u32,
    pub total_elements: u64,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

impl<T> Page<T> {
    pub fn is_last(&self) -> bool {
        self.total_pages == 0 || self.number + 1 >= self.total_pages
    }
}

/// `page`/`size` query parameters. Pages are zero-based.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    pub fn next(self) -> Self {
        Self { page: self.page + 1, ..self }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_envelope() {
        let page: Page<u32> = serde_json::from_value(serde_json::json!({
            "content": [1, 2, 3],
            "totalPages": 2,
            "totalElements": 13,
            "number": 0,
            "size": 10
        }))
        .unwrap();

        assert_eq!(page.content.len(), 3);
        assert!(!page.is_last());
        assert_eq!(PageRequest::default().next(), PageRequest::new(1, 10));
    }
}
