use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    /// Pages are 1-based; sizes must be positive and bounded
    pub fn validate_page_request(page: i64, size: i64, max_page_size: u32) -> Result<(), AppError> {
        if page < 1 {
            return Err(AppError::InvalidInput(format!(
                "Page must be at least 1 (got {})",
                page
            )));
        }
        if size < 1 {
            return Err(AppError::InvalidInput(format!(
                "Page size must be at least 1 (got {})",
                size
            )));
        }
        if size > i64::from(max_page_size) {
            return Err(AppError::ValidationError(format!(
                "Page size cannot exceed {}",
                max_page_size
            )));
        }
        if page > i64::from(u32::MAX) {
            return Err(AppError::ValidationError("Page number is too large".to_string()));
        }
        if (page - 1).checked_mul(size).is_none() {
            return Err(AppError::ValidationError(format!(
                "Page {} of size {} is beyond the addressable range",
                page, size
            )));
        }
        Ok(())
    }
}
