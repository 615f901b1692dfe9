//! Installed-application catalog.
//!
//! Parses `flatpak list` output into descriptors and sorts them for stable
//! presentation. Malformed records are dropped, never fatal.

use serde::Serialize;

/// One installed Flatpak application.
///
/// `app_id` is the stable key for all store operations; `name` is for humans
/// only and may repeat across different ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppDescriptor {
    pub name: String,
    pub app_id: String,
}

/// Parse `flatpak list --columns=name,application` output.
///
/// Records are tab-separated, one per line; the first two fields are
/// (display name, application id). Lines with fewer than two fields are
/// dropped. The result is sorted ascending by (name, id) so duplicate
/// display names keep a deterministic order.
#[must_use]
pub fn parse_app_list(text: &str) -> Vec<AppDescriptor> {
    let mut apps: Vec<AppDescriptor> = text
        .lines()
        .filter_map(|line| {
            let mut fields = line.split('\t');
            let name = fields.next()?.to_string();
            let app_id = fields.next()?.to_string();
            Some(AppDescriptor { name, app_id })
        })
        .collect();
    apps.sort_by(|a, b| (&a.name, &a.app_id).cmp(&(&b.name, &b.app_id)));
    apps
}
