use serde::Deserialize;
use validator::Validate;

/// Form payload for creating a new enduro
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEnduroRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Location must be between 1 and 255 characters"
    ))]
    pub location: String,

    #[validate(length(min = 1, max = 64, message = "Date is required"))]
    pub date: String,

    #[validate(custom(function = "validate_start_time"))]
    pub start_time: String,
}

/// Form payload for updating an enduro. The edit form always posts the full
/// record, so every field is required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEnduroRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 1, max = 255))]
    pub location: String,

    #[validate(length(min = 1, max = 64))]
    pub date: String,

    #[validate(custom(function = "validate_start_time"))]
    pub start_time: String,
}

fn validate_start_time(value: &str) -> Result<(), validator::ValidationError> {
    match chrono::NaiveTime::parse_from_str(value, "%H:%M") {
        Ok(_) => Ok(()),
        Err(_) => Err(validator::ValidationError::new("invalid_start_time")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(start_time: &str) -> CreateEnduroRequest {
        CreateEnduroRequest {
            name: "Trilha Norte".into(),
            location: "Serra".into(),
            date: "2026-05-01".into(),
            start_time: start_time.into(),
        }
    }

    #[test]
    fn accepts_hh_mm_start_time() {
        assert!(request("08:00").validate().is_ok());
    }

    #[test]
    fn rejects_malformed_start_time() {
        assert!(request("8 o'clock").validate().is_err());
        assert!(request("25:00").validate().is_err());
    }
}
