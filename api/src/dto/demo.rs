use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddressDto {
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 4, max = 12, message = "Postal code must be 4-12 characters"))]
    pub postal_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Email format is invalid"))]
    pub email: String,
    #[validate(range(min = 18, max = 130, message = "Age must be between 18 and 130"))]
    pub age: u32,
    #[validate(nested)]
    pub address: AddressDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub email: String,
    pub request_id: Option<String>,
}
