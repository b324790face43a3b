use contracts::domain::a001_incident::Incident;
use mongodb::bson::{self, doc, Bson, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::Collection;
use thiserror::Error;

/// MongoDB server error code for a unique-index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("incident store is unavailable")]
    Unavailable,
    #[error("incident {0} already exists")]
    Duplicate(i64),
    #[error("failed to encode incident: {0}")]
    Encode(#[from] bson::ser::Error),
    #[error("store error: {0}")]
    Backend(#[from] mongodb::error::Error),
}

/// Result of an update attempt. `Unchanged` means the record exists but the
/// incoming values matched what was stored; callers treat it as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    Unchanged,
    NotFound,
}

/// Handle to the `incidents` collection.
///
/// Two states: `Ready` after a successful startup connect, `Unavailable`
/// otherwise. There is no automatic retry; an unavailable store stays
/// unavailable for the life of the process.
#[derive(Clone)]
pub struct IncidentStore {
    collection: Option<Collection<Document>>,
}

impl IncidentStore {
    pub fn ready(collection: Collection<Document>) -> Self {
        Self {
            collection: Some(collection),
        }
    }

    pub fn unavailable() -> Self {
        Self { collection: None }
    }

    pub fn is_ready(&self) -> bool {
        self.collection.is_some()
    }

    fn collection(&self) -> Result<&Collection<Document>, StoreError> {
        self.collection.as_ref().ok_or(StoreError::Unavailable)
    }

    /// Insert a new incident. Returns the store-generated document
    /// reference (ObjectId hex), not the business identifier.
    pub async fn create(&self, incident: &Incident) -> Result<String, StoreError> {
        let collection = self.collection()?;
        let document = to_write_document(incident)?;
        match collection.insert_one(document, None).await {
            Ok(result) => Ok(result
                .inserted_id
                .as_object_id()
                .map(|id| id.to_hex())
                .unwrap_or_else(|| result.inserted_id.to_string())),
            Err(e) if is_duplicate_key(&e) => Err(StoreError::Duplicate(incident.incident_id)),
            Err(e) => Err(StoreError::Backend(e)),
        }
    }

    /// Replace all fields of an existing incident. Existence is checked
    /// first, so `NotFound` is authoritative and distinct from a no-op
    /// replace (`Unchanged`).
    pub async fn update(
        &self,
        incident_id: i64,
        incident: &Incident,
    ) -> Result<UpdateOutcome, StoreError> {
        let collection = self.collection()?;
        let filter = doc! { "Incident_Id": incident_id };

        if collection.find_one(filter.clone(), None).await?.is_none() {
            return Ok(UpdateOutcome::NotFound);
        }

        let document = to_write_document(incident)?;
        let result = collection
            .update_one(filter, doc! { "$set": document }, None)
            .await?;

        Ok(if result.modified_count > 0 {
            UpdateOutcome::Updated
        } else {
            UpdateOutcome::Unchanged
        })
    }
}

/// Flatten the incident for storage and stamp `updatedAt` with server time.
/// The client-supplied value never reaches the collection.
fn to_write_document(incident: &Incident) -> Result<Document, bson::ser::Error> {
    let mut document = bson::to_document(incident)?;
    document.insert("updatedAt", Bson::DateTime(bson::DateTime::now()));
    Ok(document)
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match &*error.kind {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}
