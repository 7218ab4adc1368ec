mod helpers;

use hangar_core::{ControlMessage, DeployCommand};
use hangar_mcp::tools::deploy::{DeployParams, execute};
use helpers::{
    CountingCatalog, DownCatalog, FailingSink, RecordingSink, get_text, is_error, is_success,
    sample_catalog,
};
use serde_json::json;

fn params(value: serde_json::Value) -> DeployParams {
    serde_json::from_value(value).expect("params should deserialize")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_deploy_with_explicit_template_id() {
        let catalog = CountingCatalog::new(sample_catalog());
        let sink = RecordingSink::new();
        let params = params(json!({
            "user_id": "u1",
            "template_id": "tpl-mongo",
            "creds": {"root_password": "hunter2"}
        }));

        let result = execute(&catalog, &sink, params).await;

        assert!(is_success(&result));
        let text = get_text(&result);
        assert!(text.contains("tpl-mongo"));
        assert!(text.contains("u1"));
        assert_eq!(catalog.lookup_count(), 0);
        assert_eq!(
            sink.messages(),
            vec![ControlMessage::Deploy(DeployCommand {
                user_id: "u1".to_string(),
                template_id: "tpl-mongo".to_string(),
                creds: json!({"root_password": "hunter2"}),
            })]
        );
    }

    #[tokio::test]
    async fn test_deploy_by_name_match() {
        let catalog = sample_catalog();
        let sink = RecordingSink::new();
        let params = params(json!({
            "user_id": "u1",
            "name": "gpt",
            "creds": {}
        }));

        let result = execute(&catalog, &sink, params).await;

        assert!(is_success(&result));
        let text = get_text(&result);
        assert!(text.contains("Basic GPT Server"));
        assert!(text.contains("tpl-gpt"));
        assert!(text.contains("matched name 'gpt'"));
        assert_eq!(
            sink.messages(),
            vec![ControlMessage::Deploy(DeployCommand {
                user_id: "u1".to_string(),
                template_id: "tpl-gpt".to_string(),
                creds: json!({}),
            })]
        );
    }

    #[tokio::test]
    async fn test_deploy_unknown_name_reports_not_found() {
        let catalog = sample_catalog();
        let sink = RecordingSink::new();
        let params = params(json!({
            "user_id": "u1",
            "name": "nonexistent",
            "creds": {}
        }));

        let result = execute(&catalog, &sink, params).await;

        assert!(is_error(&result));
        let text = get_text(&result);
        assert!(text.contains("No template found matching name: nonexistent"));
        assert!(text.contains("list_templates"));
        assert!(sink.messages().is_empty());
    }

    #[tokio::test]
    async fn test_deploy_ambiguous_name_uses_first_catalog_entry() {
        let catalog = hangar_core::StaticCatalog::new(vec![
            hangar_core::Template::new("tpl-mongo", "MongoDB Server"),
            hangar_core::Template::new("tpl-express", "Mongo Express"),
        ]);
        let sink = RecordingSink::new();
        let params = params(json!({
            "user_id": "u1",
            "name": "mongo",
            "creds": {}
        }));

        let result = execute(&catalog, &sink, params).await;

        assert!(is_success(&result));
        assert!(get_text(&result).contains("tpl-mongo"));
    }

    #[tokio::test]
    async fn test_deploy_without_template_id_or_name() {
        let catalog = sample_catalog();
        let sink = RecordingSink::new();
        let params = params(json!({
            "user_id": "u1",
            "creds": {}
        }));

        let result = execute(&catalog, &sink, params).await;

        assert!(is_error(&result));
        let text = get_text(&result);
        assert!(text.contains("Invalid deploy request"));
        assert!(text.contains("template_id"));
        assert!(sink.messages().is_empty());
    }

    #[tokio::test]
    async fn test_deploy_without_user_id() {
        let catalog = sample_catalog();
        let sink = RecordingSink::new();
        let params = params(json!({
            "template_id": "tpl-gpt",
            "creds": {}
        }));

        let result = execute(&catalog, &sink, params).await;

        assert!(is_error(&result));
        let text = get_text(&result);
        assert!(text.contains("user_id"));
        assert!(text.contains("field is required"));
    }

    #[tokio::test]
    async fn test_deploy_reports_every_violation_at_once() {
        let catalog = sample_catalog();
        let sink = RecordingSink::new();
        let params = params(json!({}));

        let result = execute(&catalog, &sink, params).await;

        assert!(is_error(&result));
        let text = get_text(&result);
        assert!(text.contains("user_id"));
        assert!(text.contains("template_id"));
        assert!(text.contains("creds"));
    }

    #[tokio::test]
    async fn test_deploy_wrong_typed_template_id_falls_back_to_name() {
        let catalog = sample_catalog();
        let sink = RecordingSink::new();
        let params = params(json!({
            "user_id": "u1",
            "template_id": 42,
            "name": "mongo",
            "creds": {}
        }));

        let result = execute(&catalog, &sink, params).await;

        assert!(is_success(&result));
        assert!(get_text(&result).contains("tpl-mongo"));
    }

    #[tokio::test]
    async fn test_deploy_reports_sink_failure() {
        let catalog = sample_catalog();
        let params = params(json!({
            "user_id": "u1",
            "template_id": "tpl-gpt",
            "creds": {}
        }));

        let result = execute(&catalog, &FailingSink, params).await;

        assert!(is_error(&result));
        let text = get_text(&result);
        assert!(text.contains("Deployment was not dispatched"));
        assert!(text.contains("backend down"));
    }

    #[tokio::test]
    async fn test_deploy_reports_unreachable_catalog() {
        let sink = RecordingSink::new();
        let params = params(json!({
            "user_id": "u1",
            "name": "gpt",
            "creds": {}
        }));

        let result = execute(&DownCatalog, &sink, params).await;

        assert!(is_error(&result));
        let text = get_text(&result);
        assert!(text.contains("could not be reached"));
        assert!(sink.messages().is_empty());
    }
}
