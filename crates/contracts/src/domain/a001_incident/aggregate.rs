use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::ValidationError;

// ============================================================================
// Nested records
// ============================================================================

/// One contact channel attached to an incident. Incidents carry zero or
/// more of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDetail {
    #[serde(rename = "Contact_Type")]
    pub contact_type: String,
    #[serde(rename = "Contact")]
    pub contact: String,
    #[serde(rename = "Create_Dtm", with = "crate::shared::datetime")]
    pub create_dtm: DateTime<Utc>,
    #[serde(rename = "Create_By")]
    pub create_by: String,
}

/// A subscribed product on the defaulting account. `Region` and `Province`
/// are the only optional fields in the whole payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetail {
    #[serde(rename = "Product_Label")]
    pub product_label: String,
    #[serde(rename = "Customer_Ref")]
    pub customer_ref: String,
    #[serde(rename = "Product_Seq")]
    pub product_seq: i64,
    #[serde(rename = "Equipment_Ownership")]
    pub equipment_ownership: String,
    #[serde(rename = "Product_Id")]
    pub product_id: String,
    #[serde(rename = "Product_Name")]
    pub product_name: String,
    #[serde(rename = "Product_Status")]
    pub product_status: String,
    #[serde(rename = "Effective_Dtm", with = "crate::shared::datetime")]
    pub effective_dtm: DateTime<Utc>,
    #[serde(rename = "Service_Address")]
    pub service_address: String,
    #[serde(rename = "Cat")]
    pub cat: String,
    #[serde(rename = "Db_Cpe_Status")]
    pub db_cpe_status: String,
    #[serde(rename = "Received_List_Cpe_Status")]
    pub received_list_cpe_status: String,
    #[serde(rename = "Service_Type")]
    pub service_type: String,
    #[serde(rename = "Region", default)]
    pub region: Option<String>,
    #[serde(rename = "Province", default)]
    pub province: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDetail {
    #[serde(rename = "Customer_Name")]
    pub customer_name: String,
    #[serde(rename = "Company_Name")]
    pub company_name: String,
    #[serde(rename = "Company_Registry_Number")]
    pub company_registry_number: String,
    #[serde(rename = "Full_Address")]
    pub full_address: String,
    #[serde(rename = "Zip_Code")]
    pub zip_code: String,
    #[serde(rename = "Customer_Type_Name")]
    pub customer_type_name: String,
    #[serde(rename = "Nic")]
    pub nic: String,
    #[serde(rename = "Customer_Type_Id")]
    pub customer_type_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountDetail {
    #[serde(rename = "Account_Status")]
    pub account_status: String,
    #[serde(rename = "Acc_Effective_Dtm", with = "crate::shared::datetime")]
    pub acc_effective_dtm: DateTime<Utc>,
    #[serde(rename = "Acc_Activate_Date", with = "crate::shared::datetime")]
    pub acc_activate_date: DateTime<Utc>,
    #[serde(rename = "Credit_Class_Id")]
    pub credit_class_id: String,
    #[serde(rename = "Credit_Class_Name")]
    pub credit_class_name: String,
    #[serde(rename = "Billing_Centre")]
    pub billing_centre: String,
    #[serde(rename = "Customer_Segment")]
    pub customer_segment: String,
    #[serde(rename = "Mobile_Contact_Tel")]
    pub mobile_contact_tel: String,
    #[serde(rename = "Daytime_Contact_Tel")]
    pub daytime_contact_tel: String,
    #[serde(rename = "Email_Address")]
    pub email_address: String,
    #[serde(rename = "Last_Rated_Dtm", with = "crate::shared::datetime")]
    pub last_rated_dtm: DateTime<Utc>,
}

/// Last billing and payment events seen for the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastAction {
    #[serde(rename = "Billed_Seq")]
    pub billed_seq: i64,
    #[serde(rename = "Billed_Created", with = "crate::shared::datetime")]
    pub billed_created: DateTime<Utc>,
    #[serde(rename = "Payment_Seq")]
    pub payment_seq: i64,
    #[serde(rename = "Payment_Created", with = "crate::shared::datetime")]
    pub payment_created: DateTime<Utc>,
}

// Upstream sends these two in caps; preserved as-is on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketingDetail {
    #[serde(rename = "ACCOUNT_MANAGER")]
    pub account_manager: String,
    #[serde(rename = "CONSUMER_MARKET")]
    pub consumer_market: String,
    #[serde(rename = "Informed_To")]
    pub informed_to: String,
    #[serde(rename = "Informed_On", with = "crate::shared::datetime")]
    pub informed_on: DateTime<Utc>,
}

// ============================================================================
// Aggregate root
// ============================================================================

/// A customer service/billing incident, the sole managed entity.
///
/// `Incident_Id` is the business identifier and is unique in the store.
/// `updatedAt` is accepted on the wire but always overwritten with server
/// time when the record is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incident {
    #[serde(rename = "Incident_Id")]
    pub incident_id: i64,
    #[serde(rename = "Account_Num")]
    pub account_num: String,
    #[serde(rename = "Arrears")]
    pub arrears: f64,
    #[serde(rename = "Created_By")]
    pub created_by: String,
    #[serde(rename = "Created_Dtm", with = "crate::shared::datetime")]
    pub created_dtm: DateTime<Utc>,
    #[serde(rename = "Incident_Status")]
    pub incident_status: String,
    #[serde(rename = "Incident_Status_Dtm", with = "crate::shared::datetime")]
    pub incident_status_dtm: DateTime<Utc>,
    #[serde(rename = "Status_Description")]
    pub status_description: String,
    #[serde(rename = "File_Name_Dump")]
    pub file_name_dump: String,
    #[serde(rename = "Batch_Id")]
    pub batch_id: String,
    #[serde(rename = "Batch_Id_Tag_Dtm", with = "crate::shared::datetime")]
    pub batch_id_tag_dtm: DateTime<Utc>,
    #[serde(rename = "External_Data_Update_On", with = "crate::shared::datetime")]
    pub external_data_update_on: DateTime<Utc>,
    #[serde(rename = "Filtered_Reason")]
    pub filtered_reason: String,
    #[serde(rename = "Export_On", with = "crate::shared::datetime")]
    pub export_on: DateTime<Utc>,
    #[serde(rename = "File_Name_Rejected")]
    pub file_name_rejected: String,
    #[serde(rename = "Rejected_Reason")]
    pub rejected_reason: String,
    #[serde(rename = "Incident_Forwarded_By")]
    pub incident_forwarded_by: String,
    #[serde(rename = "Incident_Forwarded_On", with = "crate::shared::datetime")]
    pub incident_forwarded_on: DateTime<Utc>,
    #[serde(rename = "Contact_Details")]
    pub contact_details: Vec<ContactDetail>,
    #[serde(rename = "Product_Details")]
    pub product_details: Vec<ProductDetail>,
    #[serde(rename = "Customer_Details")]
    pub customer_details: CustomerDetail,
    #[serde(rename = "Account_Details")]
    pub account_details: AccountDetail,
    #[serde(rename = "Last_Actions")]
    pub last_actions: LastAction,
    #[serde(rename = "Marketing_Details")]
    pub marketing_details: MarketingDetail,
    #[serde(rename = "Action")]
    pub action: String,
    #[serde(rename = "Validity_period")]
    pub validity_period: i64,
    #[serde(rename = "Remark")]
    pub remark: String,
    #[serde(rename = "updatedAt", with = "crate::shared::datetime")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "Rejected_By")]
    pub rejected_by: String,
    #[serde(rename = "Rejected_Dtm", with = "crate::shared::datetime")]
    pub rejected_dtm: DateTime<Utc>,
    #[serde(rename = "Arrears_Band")]
    pub arrears_band: String,
    #[serde(rename = "Source_Type")]
    pub source_type: String,
}

impl Incident {
    /// Validate a raw payload against the incident schema and build the
    /// aggregate. All violations are collected before reporting.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        super::schema::validate(value)
    }
}
