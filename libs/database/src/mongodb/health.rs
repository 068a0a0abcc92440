use mongodb::{Database, bson::doc};

/// Round-trip a `ping` command against the catalog database.
///
/// Returns the driver error text on failure so it can be reported by the
/// readiness endpoint.
pub async fn ping(db: &Database) -> Result<(), String> {
    db.run_command(doc! { "ping": 1 })
        .await
        .map(|_| ())
        .map_err(|e| e.to_string())
}
