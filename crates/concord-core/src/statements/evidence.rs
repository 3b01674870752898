use serde::{Deserialize, Serialize};

use super::context::WorldContext;

/// One piece of provenance: a sentence read from a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    /// Reader that produced the statement (e.g. "eidos", "hume").
    pub source_api: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    /// Context the reader attached to this sentence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<WorldContext>,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub annotations: serde_json::Value,
}

impl Evidence {
    pub fn new(source_api: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source_api: source_api.into(),
            text: text.into(),
            document_id: None,
            context: None,
            annotations: serde_json::Value::Null,
        }
    }

    pub fn with_document(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = Some(document_id.into());
        self
    }

    pub fn with_context(mut self, context: WorldContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Whether this evidence claims a usable context.
    pub fn has_context(&self) -> bool {
        self.context.as_ref().is_some_and(WorldContext::is_present)
    }

    /// A copy with the context removed.
    pub fn without_context(&self) -> Self {
        Self {
            context: None,
            ..self.clone()
        }
    }
}
