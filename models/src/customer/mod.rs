//! Customer resource.

pub mod request;

pub use request::{CustomerFilter, CustomerRequest};

use crate::api_object::ApiObject;
use crate::date_format;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A customer as returned by `/customers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    #[serde(with = "date_format")]
    pub date_created: NaiveDate,
    pub name: String,
    pub cpf_cnpj: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_emails: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub municipal_inscription: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_inscription: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
}

impl ApiObject for Customer {}
