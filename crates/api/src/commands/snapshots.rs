//! Save and resume in-progress registrations

use eventreg_domain::{RegistrationState, SavedRegistration, SnapshotToken};
use tracing::info;

use crate::utils::command_helpers::execute_with_string_error;
use crate::AppContext;

/// Persist the current wizard state; returns the resume token.
pub async fn save_registration(ctx: &AppContext) -> Result<String, String> {
    execute_with_string_error("snapshots::save", move || async move {
        let state = ctx.wizard.lock().await.snapshot();
        let token = ctx.store.save(&state).await?;
        info!(token = %token, step = %state.step, "registration snapshot saved");
        Ok(token.to_string())
    })
    .await
}

/// Overwrite the registration saved under `token` with the current state.
pub async fn update_registration(ctx: &AppContext, token: String) -> Result<(), String> {
    execute_with_string_error("snapshots::update", move || async move {
        let state = ctx.wizard.lock().await.snapshot();
        ctx.store.update(&SnapshotToken::from(token), &state).await
    })
    .await
}

/// Saved registrations, newest first.
pub async fn list_registrations(ctx: &AppContext) -> Result<Vec<SavedRegistration>, String> {
    execute_with_string_error("snapshots::list", move || async move { ctx.store.list().await })
        .await
}

/// Replace the current wizard state with a saved one.
pub async fn load_registration(
    ctx: &AppContext,
    token: String,
) -> Result<RegistrationState, String> {
    execute_with_string_error("snapshots::load", move || async move {
        let state = ctx.store.load(&SnapshotToken::from(token)).await?;
        let mut wizard = ctx.wizard.lock().await;
        wizard.restore(state);
        Ok(wizard.snapshot())
    })
    .await
}

pub async fn delete_registration(ctx: &AppContext, token: String) -> Result<(), String> {
    execute_with_string_error("snapshots::delete", move || async move {
        ctx.store.delete(&SnapshotToken::from(token)).await
    })
    .await
}
