use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RmResponse {
    removed: i64,
}

/// Delete a user. Tasks that pointed at them keep running unassigned.
pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.db.delete_user(id).await?;
    tracing::info!(user_id = id, "user removed");
    output(&RmResponse { removed: id }, flags.format)
}
