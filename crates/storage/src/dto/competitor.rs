use serde::Deserialize;
use validator::Validate;

/// Form payload for entering a competitor into an enduro
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCompetitorRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(min = 1, max = 32, message = "Plate is required"))]
    pub plate: String,

    pub category_id: i64,
}

/// Form payload for updating a competitor
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCompetitorRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 1, max = 32))]
    pub plate: String,

    pub category_id: i64,
}
