//! # OpenAPI Document
//!
//! Generated from the handler annotations via utoipa and served at
//! `/api-docs/openapi.json`.

use utoipa::OpenApi;

use crate::routes::{assignments, cycles, disputes, templates};

/// The API document.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cadence Performance API",
        description = "Appraisal workflow: templates, cycles, bulk assignment, disputes."
    ),
    paths(
        templates::create_template,
        templates::list_templates,
        templates::toggle_template,
        cycles::create_cycle,
        cycles::list_cycles,
        cycles::get_cycle,
        cycles::edit_cycle,
        cycles::activate_cycle,
        cycles::close_cycle,
        cycles::archive_cycle,
        cycles::list_cycle_assignments,
        assignments::bulk_assign,
        disputes::file_dispute,
        disputes::get_dispute,
        disputes::review_dispute,
        disputes::resolve_dispute,
    ),
    components(schemas(
        templates::ToggleTemplateRequest,
        assignments::BulkAssignRequest,
        disputes::FileDisputeRequest,
        disputes::ResolveDisputeRequest,
    )),
    tags(
        (name = "templates", description = "Evaluation template management"),
        (name = "cycles", description = "Cycle lifecycle"),
        (name = "assignments", description = "Bulk assignment"),
        (name = "disputes", description = "Dispute resolution"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_builds_and_lists_routes() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("/performance/assignments/bulk"));
        assert!(json.contains("/performance/disputes/{dispute_id}/resolve"));
    }
}
