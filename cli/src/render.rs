//! Rendering paths for terminal and JSON output.

use anchorpath_registry::RegistrySnapshot;
use anchorpath_types::{Path, Role, Token};
use serde::Serialize;

/// One path element as printed in JSON output.
#[derive(Debug, Serialize)]
pub struct StepView {
    pub token: Token,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

pub fn label(snapshot: &RegistrySnapshot, token: &Token) -> String {
    snapshot
        .symbol_of(token)
        .map(str::to_string)
        .unwrap_or_else(|| token.to_string())
}

/// One `role label` line per element; `no path` for the empty path.
pub fn render_text(snapshot: &RegistrySnapshot, path: &Path) -> String {
    if path.is_empty() {
        return "no path".to_string();
    }
    path.iter()
        .map(|step| {
            let role = match step.role {
                Role::Token => "token",
                Role::Anchor => "anchor",
            };
            format!("{role:<6} {}", label(snapshot, &step.token))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(snapshot: &RegistrySnapshot, path: &Path) -> serde_json::Result<String> {
    let steps: Vec<StepView> = path
        .iter()
        .map(|step| StepView {
            token: step.token,
            role: step.role,
            symbol: snapshot.symbol_of(&step.token).map(str::to_string),
        })
        .collect();
    serde_json::to_string_pretty(&steps)
}
