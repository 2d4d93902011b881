use serde::{Deserialize, Serialize};

use super::error::ViewError;

/// Запрошенная страница: номер с 1 и размер страницы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageSpec {
    pub page_index: usize,
    pub page_size: usize,
}

impl PageSpec {
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size,
        }
    }

    pub fn first(page_size: usize) -> Self {
        Self::new(1, page_size)
    }

    /// Номер страницы, приведённый к диапазону `[1, total_pages]`
    pub fn clamped_index(&self, total_records: usize) -> Result<usize, ViewError> {
        let pages = total_pages(total_records, self.page_size)?;
        Ok(self.page_index.clamp(1, pages))
    }
}

/// Количество страниц; для пустого набора всегда 1
pub fn total_pages(total_records: usize, page_size: usize) -> Result<usize, ViewError> {
    if page_size == 0 {
        return Err(ViewError::InvalidPageSize(page_size));
    }
    Ok(total_records.div_ceil(page_size).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), Ok(1));
        assert_eq!(total_pages(10, 10), Ok(1));
        assert_eq!(total_pages(11, 10), Ok(2));
        assert_eq!(total_pages(42, 10), Ok(5));
    }

    #[test]
    fn test_total_pages_rejects_zero_page_size() {
        assert_eq!(total_pages(5, 0), Err(ViewError::InvalidPageSize(0)));
    }

    #[test]
    fn test_clamped_index() {
        assert_eq!(PageSpec::new(0, 10).clamped_index(25), Ok(1));
        assert_eq!(PageSpec::new(4, 10).clamped_index(25), Ok(3));
        assert_eq!(PageSpec::new(2, 10).clamped_index(25), Ok(2));
        assert_eq!(PageSpec::new(5, 10).clamped_index(0), Ok(1));
    }
}
