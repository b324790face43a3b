//! Shared fixtures for unit tests.

use contracts::domain::a001_incident::Incident;
use serde_json::{json, Value};

/// Full valid incident payload, as upstream sends it.
pub fn sample_payload() -> Value {
    json!({
        "Incident_Id": 16,
        "Account_Num": "ACC12345",
        "Arrears": 15000.75,
        "Created_By": "User123",
        "Created_Dtm": "2024-12-01 10:00:00",
        "Incident_Status": "Open No Agent",
        "Incident_Status_Dtm": "2024-12-01 10:05:00",
        "Status_Description": "Pending review",
        "File_Name_Dump": "incident_file_1.txt",
        "Batch_Id": "01",
        "Batch_Id_Tag_Dtm": "2024-12-01 11:00:00",
        "External_Data_Update_On": "2024-12-02 08:00:00",
        "Filtered_Reason": "Duplicate data",
        "Export_On": "2024-12-03 10:00:00",
        "File_Name_Rejected": "rejected_file_1.txt",
        "Rejected_Reason": "Invalid data provided",
        "Incident_Forwarded_By": "Admin123",
        "Incident_Forwarded_On": "2024-12-03 12:00:00",
        "Contact_Details": [
            {
                "Contact_Type": "Land",
                "Contact": "0111234567",
                "Create_Dtm": "2024-12-01 09:10:00",
                "Create_By": "User123"
            }
        ],
        "Product_Details": [
            {
                "Product_Label": "ProductA",
                "Customer_Ref": "CUST001",
                "Product_Seq": 1,
                "Equipment_Ownership": "Owned",
                "Product_Id": "PROD001",
                "Product_Name": "WidgetX",
                "Product_Status": "OK",
                "Effective_Dtm": "2024-11-01 00:00:00",
                "Service_Address": "123 Street Name, City",
                "Cat": "Category1",
                "Db_Cpe_Status": "Online",
                "Received_List_Cpe_Status": "Delivered",
                "Service_Type": "Standard",
                "Region": "",
                "Province": ""
            }
        ],
        "Customer_Details": {
            "Customer_Name": "John Doe",
            "Company_Name": "Doe Inc.",
            "Company_Registry_Number": "REG12345",
            "Full_Address": "456 Business St, City, Country",
            "Zip_Code": "12345",
            "Customer_Type_Name": "Corporate",
            "Nic": "123456789V",
            "Customer_Type_Id": "CORP"
        },
        "Account_Details": {
            "Account_Status": "Active",
            "Acc_Effective_Dtm": "2024-01-01 00:00:00",
            "Acc_Activate_Date": "2024-01-02 00:00:00",
            "Credit_Class_Id": "CLASS01",
            "Credit_Class_Name": "Premium",
            "Billing_Centre": "Centre1",
            "Customer_Segment": "SegmentA",
            "Mobile_Contact_Tel": "9876543210",
            "Daytime_Contact_Tel": "1234567890",
            "Email_Address": "john.doe@example.com",
            "Last_Rated_Dtm": "2024-11-30 18:00:00"
        },
        "Last_Actions": {
            "Billed_Seq": 1001,
            "Billed_Created": "2024-12-01 12:00:00",
            "Payment_Seq": 2002,
            "Payment_Created": "2024-12-02 09:30:00"
        },
        "Marketing_Details": {
            "ACCOUNT_MANAGER": "Jane Smith",
            "CONSUMER_MARKET": "Retail",
            "Informed_To": "MarketingDept@example.com",
            "Informed_On": "2024-12-02 10:30:00"
        },
        "Action": "aaa",
        "Validity_period": 6,
        "Remark": "abcdefgh",
        "updatedAt": "2025-01-14T09:38:37.843Z",
        "Rejected_By": "Admin123",
        "Rejected_Dtm": "2025-01-14T09:38:37.833Z",
        "Arrears_Band": "AB-10_25",
        "Source_Type": "Product Terminate"
    })
}

pub fn sample_incident() -> Incident {
    Incident::from_value(&sample_payload()).expect("sample payload must validate")
}
