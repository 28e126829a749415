use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::api::dto::validation::{DataValidationError, FromPayload, as_object, required};
use crate::domain::models::account::{Account, AccountData};

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountDTO {
    #[schema(examples(1))]
    id: Option<i64>,
    #[schema(examples("Jane Doe"))]
    name: String,
    #[schema(examples("jane@example.com"))]
    email: String,
    #[schema(examples("1 Main St"))]
    address: String,
    #[schema(examples("555-0100"))]
    phone_number: String,
}

/// Request body of `POST /accounts` and `PUT /accounts/{id}`.
#[derive(Debug, PartialEq, Eq, ToSchema)]
pub struct AccountPayloadDTO {
    #[schema(examples("Jane Doe"))]
    pub name: String,

    #[schema(examples("jane@example.com"))]
    pub email: String,

    #[schema(examples("1 Main St"))]
    pub address: String,

    #[schema(examples("555-0100"))]
    pub phone_number: String,
}

impl FromPayload for AccountPayloadDTO {
    fn deserialize(data: Value) -> Result<Self, DataValidationError> {
        let mut map = as_object(data)?;

        Ok(AccountPayloadDTO {
            name: required(&mut map, "name")?,
            email: required(&mut map, "email")?,
            address: required(&mut map, "address")?,
            phone_number: required(&mut map, "phone_number")?,
        })
    }
}

impl From<Account> for AccountDTO {
    fn from(val: Account) -> Self {
        AccountDTO {
            id: val.id,
            name: val.name,
            email: val.email,
            address: val.address,
            phone_number: val.phone_number,
        }
    }
}

impl From<AccountPayloadDTO> for AccountData {
    fn from(payload: AccountPayloadDTO) -> Self {
        AccountData {
            name: payload.name,
            email: payload.email,
            address: payload.address,
            phone_number: payload.phone_number,
        }
    }
}
