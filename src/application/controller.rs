//! The settings controller — selection, edit buffer, apply, and reset.
//!
//! One controller owns one selection and one edit buffer. Every method takes
//! `&mut self`, so the borrow checker enforces the single-operation-at-a-time
//! model: a store call can never interleave with another mutation of the
//! buffer. Only `launch` is fire-and-forget.

use std::collections::HashMap;

use crate::application::ports::OverrideStore;
use crate::domain::registry::SCALING_VARIABLES;
use crate::domain::{ControllerError, OverrideSnapshot, registry};

/// Where the controller currently is in its selection lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NoSelection,
    SelectionPending,
    SelectionReady,
    Applying,
    Resetting,
}

/// Result of an [`SettingsController::apply`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// This many variables were written to the store.
    Applied(usize),
    /// Every buffer entry was blank; the store was not invoked.
    NothingToApply,
}

/// Result of a [`SettingsController::reset`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// All managed variables were unset.
    Reset,
    /// The confirmation gate was not passed; the store was not invoked.
    Declined,
}

/// Orchestrates selection, snapshot queries, edit-buffer reconciliation,
/// apply, and reset against an [`OverrideStore`].
pub struct SettingsController<S> {
    store: S,
    phase: Phase,
    selection: Option<String>,
    snapshot: OverrideSnapshot,
    buffer: HashMap<&'static str, String>,
}

impl<S: OverrideStore> SettingsController<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            phase: Phase::NoSelection,
            selection: None,
            snapshot: OverrideSnapshot::default(),
            buffer: HashMap::new(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// The latest snapshot. Raw text is the store's listing verbatim, or an
    /// explanatory error string if the last query failed.
    #[must_use]
    pub fn snapshot(&self) -> &OverrideSnapshot {
        &self.snapshot
    }

    /// Current buffer value for a managed variable. Every registry variable
    /// has an entry once a selection is ready; unset ones are blank.
    #[must_use]
    pub fn buffer_value(&self, name: &str) -> Option<&str> {
        self.buffer.get(name).map(String::as_str)
    }

    /// Select an application and query its overrides.
    ///
    /// Any previous edit buffer is discarded unconditionally — unsaved edits
    /// never survive a selection change. A failed query does not fail the
    /// selection: the snapshot's raw text becomes the error message and the
    /// buffer is seeded blank, so the user can still apply fresh values.
    pub async fn select(&mut self, app_id: &str) {
        self.selection = Some(app_id.to_string());
        self.buffer.clear();
        self.phase = Phase::SelectionPending;
        self.query_selection().await;
    }

    /// Overwrite one buffer entry with free text.
    ///
    /// Values are opaque strings here; the store and the launched application
    /// interpret them.
    ///
    /// # Errors
    ///
    /// [`ControllerError::NoSelection`] without an active selection,
    /// [`ControllerError::UnknownVariable`] for names outside the registry.
    pub fn set_entry(&mut self, name: &str, value: &str) -> Result<(), ControllerError> {
        if self.selection.is_none() {
            return Err(ControllerError::NoSelection);
        }
        let var = registry::find(name).ok_or_else(|| ControllerError::UnknownVariable {
            name: name.to_string(),
            valid: registry::valid_names(),
        })?;
        self.buffer.insert(var.name, value.to_string());
        Ok(())
    }

    /// Write every non-blank buffer entry to the store, in registry order.
    ///
    /// Non-atomic and fail-fast: the first store failure aborts the remaining
    /// writes and is surfaced with the failing variable's name, leaving a
    /// partially-applied state for the caller to re-query. After a fully
    /// successful pass the snapshot and buffer are refreshed from the store —
    /// ground truth wins over the in-memory buffer.
    ///
    /// # Errors
    ///
    /// [`ControllerError::NoSelection`] without an active selection, or the
    /// first store failure.
    pub async fn apply(&mut self) -> Result<ApplyOutcome, ControllerError> {
        let app_id = self
            .selection
            .clone()
            .ok_or(ControllerError::NoSelection)?;

        let pending: Vec<(&'static str, String)> = SCALING_VARIABLES
            .iter()
            .filter_map(|var| {
                let value = self.buffer.get(var.name)?.trim();
                (!value.is_empty()).then(|| (var.name, value.to_string()))
            })
            .collect();
        if pending.is_empty() {
            return Ok(ApplyOutcome::NothingToApply);
        }

        self.phase = Phase::Applying;
        let mut written = 0;
        for (name, value) in &pending {
            if let Err(e) = self.store.set_override(&app_id, name, value).await {
                self.phase = Phase::SelectionReady;
                return Err(e.into());
            }
            written += 1;
        }

        self.query_selection().await;
        Ok(ApplyOutcome::Applied(written))
    }

    /// Unset every managed variable for the selected application.
    ///
    /// Gated on an explicit confirmation signal: without it, no store call is
    /// made and the buffer is untouched. Same fail-fast contract as
    /// [`SettingsController::apply`]; each successfully unset variable has
    /// its buffer entry blanked immediately, and a fully successful pass is
    /// followed by a ground-truth re-query.
    ///
    /// # Errors
    ///
    /// [`ControllerError::NoSelection`] without an active selection, or the
    /// first store failure.
    pub async fn reset(&mut self, confirmed: bool) -> Result<ResetOutcome, ControllerError> {
        let app_id = self
            .selection
            .clone()
            .ok_or(ControllerError::NoSelection)?;
        if !confirmed {
            return Ok(ResetOutcome::Declined);
        }

        self.phase = Phase::Resetting;
        for var in &SCALING_VARIABLES {
            if let Err(e) = self.store.unset_override(&app_id, var.name).await {
                self.phase = Phase::SelectionReady;
                return Err(e.into());
            }
            self.buffer.insert(var.name, String::new());
        }

        self.query_selection().await;
        Ok(ResetOutcome::Reset)
    }

    /// Launch the selected application fire-and-forget.
    ///
    /// # Errors
    ///
    /// [`ControllerError::NoSelection`] without an active selection, or a
    /// store error if the process could not be started.
    pub fn launch(&self) -> Result<(), ControllerError> {
        let app_id = self.selection.as_deref().ok_or(ControllerError::NoSelection)?;
        self.store.run(app_id)?;
        Ok(())
    }

    /// Re-query the store and rebuild snapshot and buffer for the current
    /// selection. The buffer gets one entry per registry variable: the
    /// queried value where present, blank otherwise.
    async fn query_selection(&mut self) {
        let Some(app_id) = self.selection.clone() else {
            return;
        };
        self.snapshot = match self.store.show_overrides(&app_id).await {
            Ok(raw) => OverrideSnapshot::from_raw(raw),
            Err(e) => OverrideSnapshot::from_error(format!("Error retrieving overrides: {e}")),
        };
        self.buffer = SCALING_VARIABLES
            .iter()
            .map(|var| {
                let value = self.snapshot.mapping.get(var.name).cloned().unwrap_or_default();
                (var.name, value)
            })
            .collect();
        self.phase = Phase::SelectionReady;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::cell::RefCell;

    use crate::domain::StoreError;

    use super::*;

    /// Scripted store double: serves a fixed override listing and records
    /// every write in call order. `fail_on` makes the nth write (1-based)
    /// fail.
    struct StoreSpy {
        listing: RefCell<String>,
        writes: RefCell<Vec<String>>,
        fail_on: Option<usize>,
        query_fails: bool,
    }

    impl StoreSpy {
        fn with_listing(listing: &str) -> Self {
            Self {
                listing: RefCell::new(listing.to_string()),
                writes: RefCell::new(Vec::new()),
                fail_on: None,
                query_fails: false,
            }
        }

        fn failing_queries() -> Self {
            let mut spy = Self::with_listing("");
            spy.query_fails = true;
            spy
        }

        fn writes(&self) -> Vec<String> {
            self.writes.borrow().clone()
        }
    }

    impl OverrideStore for &StoreSpy {
        async fn list_apps(&self) -> Result<String, StoreError> {
            unreachable!("not expected")
        }

        async fn show_overrides(&self, _app_id: &str) -> Result<String, StoreError> {
            if self.query_fails {
                return Err(StoreError::QueryFailed("permission denied".into()));
            }
            Ok(self.listing.borrow().clone())
        }

        async fn set_override(
            &self,
            _app_id: &str,
            name: &str,
            value: &str,
        ) -> Result<(), StoreError> {
            let n = self.writes.borrow().len() + 1;
            if self.fail_on == Some(n) {
                return Err(StoreError::WriteFailed {
                    name: name.to_string(),
                    reason: "disk full".into(),
                });
            }
            self.writes.borrow_mut().push(format!("set {name}={value}"));
            // Mirror the write into the listing so re-queries see ground truth.
            self.listing
                .borrow_mut()
                .push_str(&format!("--env={name}={value}\n"));
            Ok(())
        }

        async fn unset_override(&self, _app_id: &str, name: &str) -> Result<(), StoreError> {
            let n = self.writes.borrow().len() + 1;
            if self.fail_on == Some(n) {
                return Err(StoreError::WriteFailed {
                    name: name.to_string(),
                    reason: "disk full".into(),
                });
            }
            self.writes.borrow_mut().push(format!("unset {name}"));
            Ok(())
        }

        fn run(&self, app_id: &str) -> Result<(), StoreError> {
            self.writes.borrow_mut().push(format!("run {app_id}"));
            Ok(())
        }
    }

    #[tokio::test]
    async fn select_seeds_buffer_from_store_listing() {
        let store = StoreSpy::with_listing("--env=GDK_SCALE=2\n--env=GDK_DPI_SCALE=1.5\n");
        let mut ctl = SettingsController::new(&store);
        ctl.select("org.gimp.GIMP").await;

        assert_eq!(ctl.phase(), Phase::SelectionReady);
        assert_eq!(ctl.buffer_value("GDK_SCALE"), Some("2"));
        assert_eq!(ctl.buffer_value("GDK_DPI_SCALE"), Some("1.5"));
        // Unset variables are present but blank, one row per registry entry.
        assert_eq!(ctl.buffer_value("QT_FONT_DPI"), Some(""));
    }

    #[tokio::test]
    async fn failed_query_degrades_to_editable_blank_buffer() {
        let store = StoreSpy::failing_queries();
        let mut ctl = SettingsController::new(&store);
        ctl.select("org.gimp.GIMP").await;

        assert_eq!(ctl.phase(), Phase::SelectionReady);
        assert!(ctl.snapshot().raw.contains("Error retrieving overrides"));
        assert_eq!(ctl.buffer_value("GDK_SCALE"), Some(""));
        // The user can still stage and apply fresh values.
        ctl.set_entry("GDK_SCALE", "2").expect("entry accepted");
    }

    #[tokio::test]
    async fn reselect_discards_previous_edits() {
        let store = StoreSpy::with_listing("");
        let mut ctl = SettingsController::new(&store);
        ctl.select("org.gimp.GIMP").await;
        ctl.set_entry("GDK_SCALE", "3").expect("entry accepted");

        ctl.select("org.inkscape.Inkscape").await;
        assert_eq!(ctl.buffer_value("GDK_SCALE"), Some(""));
    }

    #[tokio::test]
    async fn apply_without_selection_fails() {
        let store = StoreSpy::with_listing("");
        let mut ctl = SettingsController::new(&store);
        let err = ctl.apply().await.expect_err("expected Err");
        assert!(matches!(err, ControllerError::NoSelection));
        assert!(store.writes().is_empty());
    }

    #[tokio::test]
    async fn apply_with_all_blank_entries_is_nothing_to_apply() {
        let store = StoreSpy::with_listing("");
        let mut ctl = SettingsController::new(&store);
        ctl.select("org.gimp.GIMP").await;
        ctl.set_entry("GDK_SCALE", "   ").expect("entry accepted");

        let outcome = ctl.apply().await.expect("apply");
        assert_eq!(outcome, ApplyOutcome::NothingToApply);
        assert!(store.writes().is_empty());
    }

    #[tokio::test]
    async fn apply_writes_only_non_blank_entries_and_counts_them() {
        let store = StoreSpy::with_listing("--env=GDK_SCALE=2\n--env=GDK_DPI_SCALE=1.5\n");
        let mut ctl = SettingsController::new(&store);
        ctl.select("org.gimp.GIMP").await;
        ctl.set_entry("GDK_SCALE", "3").expect("entry accepted");
        ctl.set_entry("GDK_DPI_SCALE", "").expect("entry accepted");

        let outcome = ctl.apply().await.expect("apply");
        assert_eq!(outcome, ApplyOutcome::Applied(1));
        assert_eq!(store.writes(), ["set GDK_SCALE=3"]);
    }

    #[tokio::test]
    async fn apply_trims_values_before_writing() {
        let store = StoreSpy::with_listing("");
        let mut ctl = SettingsController::new(&store);
        ctl.select("org.gimp.GIMP").await;
        ctl.set_entry("QT_FONT_DPI", " 144 ").expect("entry accepted");

        ctl.apply().await.expect("apply");
        assert_eq!(store.writes(), ["set QT_FONT_DPI=144"]);
    }

    #[tokio::test]
    async fn apply_follows_registry_order() {
        let store = StoreSpy::with_listing("");
        let mut ctl = SettingsController::new(&store);
        ctl.select("org.gimp.GIMP").await;
        // Staged out of registry order on purpose.
        ctl.set_entry("GNOME_DESKTOP_SCALE_FACTOR", "2").expect("entry accepted");
        ctl.set_entry("GDK_SCALE", "2").expect("entry accepted");

        ctl.apply().await.expect("apply");
        assert_eq!(
            store.writes(),
            ["set GDK_SCALE=2", "set GNOME_DESKTOP_SCALE_FACTOR=2"]
        );
    }

    #[tokio::test]
    async fn apply_aborts_on_first_write_failure() {
        let mut store = StoreSpy::with_listing("");
        store.fail_on = Some(3);
        let mut ctl = SettingsController::new(&store);
        ctl.select("org.gimp.GIMP").await;
        for name in [
            "GDK_SCALE",
            "GDK_DPI_SCALE",
            "QT_SCALE_FACTOR",
            "QT_FONT_DPI",
            "QT_AUTO_SCREEN_SCALE_FACTOR",
        ] {
            ctl.set_entry(name, "1").expect("entry accepted");
        }

        let err = ctl.apply().await.expect_err("expected Err");
        // Exactly the first two writes landed; the third failed and the
        // fourth and fifth were never attempted.
        assert_eq!(store.writes().len(), 2);
        assert!(err.to_string().contains("QT_SCALE_FACTOR"), "got: {err}");
        assert_eq!(ctl.phase(), Phase::SelectionReady);
    }

    #[tokio::test]
    async fn successful_apply_requeries_ground_truth() {
        let store = StoreSpy::with_listing("");
        let mut ctl = SettingsController::new(&store);
        ctl.select("org.gimp.GIMP").await;
        ctl.set_entry("GDK_SCALE", "2").expect("entry accepted");

        ctl.apply().await.expect("apply");
        // Snapshot and buffer now reflect the store, not the stale buffer.
        assert!(ctl.snapshot().raw.contains("--env=GDK_SCALE=2"));
        assert_eq!(ctl.buffer_value("GDK_SCALE"), Some("2"));
        assert_eq!(ctl.phase(), Phase::SelectionReady);
    }

    #[tokio::test]
    async fn unconfirmed_reset_makes_no_store_calls() {
        let store = StoreSpy::with_listing("--env=GDK_SCALE=2\n");
        let mut ctl = SettingsController::new(&store);
        ctl.select("org.gimp.GIMP").await;

        let outcome = ctl.reset(false).await.expect("reset");
        assert_eq!(outcome, ResetOutcome::Declined);
        assert!(store.writes().is_empty());
        assert_eq!(ctl.buffer_value("GDK_SCALE"), Some("2"));
    }

    #[tokio::test]
    async fn confirmed_reset_unsets_every_registry_variable() {
        let store = StoreSpy::with_listing("--env=GDK_SCALE=2\n");
        let mut ctl = SettingsController::new(&store);
        ctl.select("org.gimp.GIMP").await;

        let outcome = ctl.reset(true).await.expect("reset");
        assert_eq!(outcome, ResetOutcome::Reset);
        let writes = store.writes();
        assert_eq!(writes.len(), SCALING_VARIABLES.len());
        assert_eq!(writes[0], "unset GDK_SCALE");
        assert_eq!(ctl.phase(), Phase::SelectionReady);
    }

    #[tokio::test]
    async fn reset_aborts_on_first_unset_failure() {
        let mut store = StoreSpy::with_listing("");
        store.fail_on = Some(2);
        let mut ctl = SettingsController::new(&store);
        ctl.select("org.gimp.GIMP").await;

        let err = ctl.reset(true).await.expect_err("expected Err");
        assert_eq!(store.writes(), ["unset GDK_SCALE"]);
        assert!(err.to_string().contains("GDK_DPI_SCALE"), "got: {err}");
    }

    #[tokio::test]
    async fn launch_without_selection_fails_with_no_store_calls() {
        let store = StoreSpy::with_listing("");
        let ctl = SettingsController::new(&store);
        let err = ctl.launch().expect_err("expected Err");
        assert!(matches!(err, ControllerError::NoSelection));
        assert!(store.writes().is_empty());
    }

    #[tokio::test]
    async fn launch_runs_the_selected_app() {
        let store = StoreSpy::with_listing("");
        let mut ctl = SettingsController::new(&store);
        ctl.select("org.gimp.GIMP").await;
        ctl.launch().expect("launch");
        assert!(store.writes().contains(&"run org.gimp.GIMP".to_string()));
    }

    #[tokio::test]
    async fn unknown_variable_is_rejected_with_the_valid_list() {
        let store = StoreSpy::with_listing("");
        let mut ctl = SettingsController::new(&store);
        ctl.select("org.gimp.GIMP").await;
        let err = ctl.set_entry("PATH", "/tmp").expect_err("expected Err");
        let msg = err.to_string();
        assert!(msg.contains("PATH"));
        assert!(msg.contains("GDK_SCALE"), "should list valid names: {msg}");
        assert!(store.writes().is_empty());
    }
}
