//! Declarative schema for the incident payload.
//!
//! The tables below mirror the wire contract field for field. Validation
//! walks the raw JSON against them and reports every violation at once;
//! only a clean payload is handed to serde for construction.

use serde_json::Value;

use super::aggregate::Incident;
use crate::shared::validation::{check_object, FieldError, FieldKind, FieldSpec, ValidationError};

use crate::shared::validation::FieldKind::{DateTime, Float, Int, Str};

const INCIDENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("Incident_Id", Int),
    FieldSpec::required("Account_Num", Str),
    FieldSpec::required("Arrears", Float),
    FieldSpec::required("Created_By", Str),
    FieldSpec::required("Created_Dtm", DateTime),
    FieldSpec::required("Incident_Status", Str),
    FieldSpec::required("Incident_Status_Dtm", DateTime),
    FieldSpec::required("Status_Description", Str),
    FieldSpec::required("File_Name_Dump", Str),
    FieldSpec::required("Batch_Id", Str),
    FieldSpec::required("Batch_Id_Tag_Dtm", DateTime),
    FieldSpec::required("External_Data_Update_On", DateTime),
    FieldSpec::required("Filtered_Reason", Str),
    FieldSpec::required("Export_On", DateTime),
    FieldSpec::required("File_Name_Rejected", Str),
    FieldSpec::required("Rejected_Reason", Str),
    FieldSpec::required("Incident_Forwarded_By", Str),
    FieldSpec::required("Incident_Forwarded_On", DateTime),
    FieldSpec::required("Action", Str),
    FieldSpec::required("Validity_period", Int),
    FieldSpec::required("Remark", Str),
    FieldSpec::required("updatedAt", DateTime),
    FieldSpec::required("Rejected_By", Str),
    FieldSpec::required("Rejected_Dtm", DateTime),
    FieldSpec::required("Arrears_Band", Str),
    FieldSpec::required("Source_Type", Str),
];

const CONTACT_DETAIL_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("Contact_Type", Str),
    FieldSpec::required("Contact", Str),
    FieldSpec::required("Create_Dtm", DateTime),
    FieldSpec::required("Create_By", Str),
];

const PRODUCT_DETAIL_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("Product_Label", Str),
    FieldSpec::required("Customer_Ref", Str),
    FieldSpec::required("Product_Seq", Int),
    FieldSpec::required("Equipment_Ownership", Str),
    FieldSpec::required("Product_Id", Str),
    FieldSpec::required("Product_Name", Str),
    FieldSpec::required("Product_Status", Str),
    FieldSpec::required("Effective_Dtm", DateTime),
    FieldSpec::required("Service_Address", Str),
    FieldSpec::required("Cat", Str),
    FieldSpec::required("Db_Cpe_Status", Str),
    FieldSpec::required("Received_List_Cpe_Status", Str),
    FieldSpec::required("Service_Type", Str),
    FieldSpec::optional("Region", Str),
    FieldSpec::optional("Province", Str),
];

const CUSTOMER_DETAIL_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("Customer_Name", Str),
    FieldSpec::required("Company_Name", Str),
    FieldSpec::required("Company_Registry_Number", Str),
    FieldSpec::required("Full_Address", Str),
    FieldSpec::required("Zip_Code", Str),
    FieldSpec::required("Customer_Type_Name", Str),
    FieldSpec::required("Nic", Str),
    FieldSpec::required("Customer_Type_Id", Str),
];

const ACCOUNT_DETAIL_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("Account_Status", Str),
    FieldSpec::required("Acc_Effective_Dtm", DateTime),
    FieldSpec::required("Acc_Activate_Date", DateTime),
    FieldSpec::required("Credit_Class_Id", Str),
    FieldSpec::required("Credit_Class_Name", Str),
    FieldSpec::required("Billing_Centre", Str),
    FieldSpec::required("Customer_Segment", Str),
    FieldSpec::required("Mobile_Contact_Tel", Str),
    FieldSpec::required("Daytime_Contact_Tel", Str),
    FieldSpec::required("Email_Address", Str),
    FieldSpec::required("Last_Rated_Dtm", DateTime),
];

const LAST_ACTION_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("Billed_Seq", Int),
    FieldSpec::required("Billed_Created", DateTime),
    FieldSpec::required("Payment_Seq", Int),
    FieldSpec::required("Payment_Created", DateTime),
];

const MARKETING_DETAIL_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("ACCOUNT_MANAGER", Str),
    FieldSpec::required("CONSUMER_MARKET", Str),
    FieldSpec::required("Informed_To", Str),
    FieldSpec::required("Informed_On", DateTime),
];

/// Validate a raw JSON payload and build the [`Incident`] aggregate.
///
/// Scalars, the four required nested objects and the two nested sequences
/// are all checked; errors accumulate across the whole payload.
pub fn validate(value: &Value) -> Result<Incident, ValidationError> {
    let Some(map) = value.as_object() else {
        return Err(ValidationError::single("payload", "expected a JSON object"));
    };

    let mut errors = Vec::new();
    check_object(&mut errors, "", map, INCIDENT_FIELDS);

    check_nested_object(&mut errors, map, "Customer_Details", CUSTOMER_DETAIL_FIELDS);
    check_nested_object(&mut errors, map, "Account_Details", ACCOUNT_DETAIL_FIELDS);
    check_nested_object(&mut errors, map, "Last_Actions", LAST_ACTION_FIELDS);
    check_nested_object(&mut errors, map, "Marketing_Details", MARKETING_DETAIL_FIELDS);

    check_nested_sequence(&mut errors, map, "Contact_Details", CONTACT_DETAIL_FIELDS);
    check_nested_sequence(&mut errors, map, "Product_Details", PRODUCT_DETAIL_FIELDS);

    if !errors.is_empty() {
        return Err(ValidationError { errors });
    }

    // The walk above guarantees shape, so this only fails on payloads that
    // slipped past it; surface those as validation errors too.
    serde_json::from_value(value.clone())
        .map_err(|e| ValidationError::single("payload", e.to_string()))
}

fn check_nested_object(
    errors: &mut Vec<FieldError>,
    map: &serde_json::Map<String, Value>,
    name: &str,
    specs: &[FieldSpec],
) {
    match map.get(name) {
        None | Some(Value::Null) => errors.push(FieldError::new(name, "field required")),
        Some(Value::Object(nested)) => check_object(errors, name, nested, specs),
        Some(_) => errors.push(FieldError::new(name, "expected a JSON object")),
    }
}

fn check_nested_sequence(
    errors: &mut Vec<FieldError>,
    map: &serde_json::Map<String, Value>,
    name: &str,
    specs: &[FieldSpec],
) {
    match map.get(name) {
        None | Some(Value::Null) => errors.push(FieldError::new(name, "field required")),
        Some(Value::Array(items)) => {
            for (index, item) in items.iter().enumerate() {
                let path = format!("{name}[{index}]");
                match item.as_object() {
                    Some(nested) => check_object(errors, &path, nested, specs),
                    None => errors.push(FieldError::new(path, "expected a JSON object")),
                }
            }
        }
        Some(_) => errors.push(FieldError::new(name, "expected a JSON array")),
    }
}
