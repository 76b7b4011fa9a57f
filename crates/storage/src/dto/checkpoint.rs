use serde::Deserialize;
use validator::Validate;

/// Form payload for creating a checkpoint. The name doubles as the column
/// added to the timing table, so it is restricted to characters that survive
/// as a quoted SQL identifier.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCheckpointRequest {
    #[validate(length(
        min = 1,
        max = 64,
        message = "Checkpoint name must be between 1 and 64 characters"
    ))]
    #[validate(custom(function = "validate_checkpoint_name"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "Reference time must not be negative"))]
    pub reference_time: f64,
}

fn validate_checkpoint_name(name: &str) -> Result<(), validator::ValidationError> {
    let is_valid = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == ' ');

    if is_valid {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_checkpoint_name"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str) -> CreateCheckpointRequest {
        CreateCheckpointRequest {
            name: name.into(),
            reference_time: 125.0,
        }
    }

    #[test]
    fn accepts_plain_names() {
        assert!(request("CP1").validate().is_ok());
        assert!(request("Rio Claro 2").validate().is_ok());
    }

    #[test]
    fn rejects_names_unfit_for_a_column() {
        assert!(request("cp\"; DROP TABLE").validate().is_err());
        assert!(request("").validate().is_err());
    }

    #[test]
    fn rejects_negative_reference_time() {
        let mut req = request("CP1");
        req.reference_time = -1.0;
        assert!(req.validate().is_err());
    }
}
