use contracts::domain::a001_incident::Incident;

use super::repository::{IncidentStore, StoreError, UpdateOutcome};

/// Insert a new incident, returning the store-generated reference.
pub async fn create(store: &IncidentStore, incident: &Incident) -> Result<String, StoreError> {
    let reference = store.create(incident).await?;
    tracing::info!(
        incident_id = incident.incident_id,
        reference = %reference,
        "Incident created successfully"
    );
    Ok(reference)
}

/// Full-document update keyed by `Incident_Id`.
pub async fn update(
    store: &IncidentStore,
    incident_id: i64,
    incident: &Incident,
) -> Result<UpdateOutcome, StoreError> {
    let outcome = store.update(incident_id, incident).await?;
    match outcome {
        UpdateOutcome::NotFound => {
            tracing::warn!(incident_id, "Incident not found");
        }
        UpdateOutcome::Updated | UpdateOutcome::Unchanged => {
            tracing::info!(incident_id, ?outcome, "Incident updated successfully");
        }
    }
    Ok(outcome)
}
