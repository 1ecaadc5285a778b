use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::analyze::extract::extract_text_off_thread;
use crate::errors::AppError;
use crate::matching::guidance::{advice, GuidanceTier};
use crate::matching::resume::match_resume;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RoleSummary {
    pub role: String,
    pub skills: Vec<String>,
}

/// GET /api/v1/roles
/// Role names and their skill checklists, in catalog order.
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<Vec<RoleSummary>> {
    Json(
        state
            .roles
            .roles()
            .iter()
            .map(|r| RoleSummary {
                role: r.role.clone(),
                skills: r.skills.clone(),
            })
            .collect(),
    )
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub role: String,
    pub percent: u8,
    pub tier: GuidanceTier,
    pub advice: String,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// POST /api/v1/resume/analyze
/// Multipart form: `file` (the resume PDF) and `role` (a catalog role name).
/// Extracts the resume text, partitions the role's checklist against it, and
/// attaches the guidance tier and advice line.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut file: Option<Vec<u8>> = None;
    let mut role_name: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("unreadable file field: {e}")))?;
                file = Some(bytes.to_vec());
            }
            Some("role") => {
                role_name = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::Validation(format!("unreadable role field: {e}")))?,
                );
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| AppError::Validation("missing 'file' field".to_string()))?;
    let role_name =
        role_name.ok_or_else(|| AppError::Validation("missing 'role' field".to_string()))?;

    let role = state
        .roles
        .get(&role_name)
        .ok_or_else(|| AppError::NotFound(format!("Unknown role '{role_name}'")))?;

    let resume_text = extract_text_off_thread(file).await?;
    let result = match_resume(&resume_text, role);
    let tier = GuidanceTier::classify(result.percent);

    info!(
        "Resume analyzed against '{}': {}% ({} matched, {} missing)",
        role.role,
        result.percent,
        result.matched.len(),
        result.missing.len()
    );

    Ok(Json(AnalyzeResponse {
        role: role.role.clone(),
        percent: result.percent,
        tier,
        advice: advice(tier, &result.missing),
        matched: result.matched,
        missing: result.missing,
    }))
}
