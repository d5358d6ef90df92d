//! Persisted timer selection
//!
//! This module re-exports the shared `TimerStore` type and provides
//! persistence and editing for it. The store only remembers *which* timer is
//! selected and whether the compact widget is shown; the engine stays the
//! single owner of runtime state.

mod error;

pub use error::StoreError;
pub use tempo_types::TimerStore;

use tempo_types::TimerConfig;

use crate::timer::validate;

const APP_NAME: &str = "tempo";
const CONFIG_NAME: &str = "timer";

/// Extension trait for TimerStore persistence and editing
pub trait TimerStoreExt: Sized {
    /// Load the store, falling back to defaults if none exists yet
    fn load() -> Result<Self, StoreError>;
    fn save(&self) -> Result<(), StoreError>;

    /// Replace the selected config. Rejected configs leave the store untouched.
    fn select(&mut self, config: TimerConfig) -> Result<(), StoreError>;

    /// Apply `edit` to a copy of the selection and keep it if it validates.
    fn edit_selected<F>(&mut self, edit: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut TimerConfig);

    /// Turn a selected Tabata into a custom timer (returns false if it wasn't Tabata)
    fn reclassify_selected_as_custom(&mut self) -> bool;

    fn set_show_widget(&mut self, show: bool);
}

impl TimerStoreExt for TimerStore {
    fn load() -> Result<Self, StoreError> {
        let store: TimerStore = confy::load(APP_NAME, CONFIG_NAME).map_err(StoreError::Load)?;
        if let Err(e) = validate(&store.selected) {
            tracing::warn!(error = %e, "Stored timer is invalid, using preset");
            return Ok(TimerStore {
                selected: TimerConfig::preset(store.selected.discipline),
                ..store
            });
        }
        Ok(store)
    }

    fn save(&self) -> Result<(), StoreError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(StoreError::Save)?;
        tracing::debug!(discipline = %self.selected.discipline, "Timer store saved");
        Ok(())
    }

    fn select(&mut self, config: TimerConfig) -> Result<(), StoreError> {
        validate(&config)?;
        self.selected = config;
        Ok(())
    }

    fn edit_selected<F>(&mut self, edit: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut TimerConfig),
    {
        let mut config = self.selected;
        edit(&mut config);
        self.select(config)
    }

    fn reclassify_selected_as_custom(&mut self) -> bool {
        self.selected.reclassify_as_custom()
    }

    fn set_show_widget(&mut self, show: bool) {
        self.show_widget = show;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempo_types::TimerDiscipline;

    #[test]
    fn default_store_selects_tabata_without_widget() {
        let store = TimerStore::default();
        assert_eq!(store.selected, TimerConfig::tabata());
        assert!(!store.show_widget);
    }

    #[test]
    fn select_rejects_invalid_config() {
        let mut store = TimerStore::default();
        let mut bad = TimerConfig::preset(TimerDiscipline::Countdown);
        bad.set_duration_seconds(0);

        assert!(matches!(store.select(bad), Err(StoreError::Invalid(_))));
        assert_eq!(store.selected, TimerConfig::tabata());
    }

    #[test]
    fn editing_tabata_keeps_discipline_until_reclassified() {
        let mut store = TimerStore::default();
        store.edit_selected(|cfg| cfg.set_effort_seconds(40)).unwrap();
        assert_eq!(store.selected.discipline, TimerDiscipline::Tabata);
        assert_eq!(store.selected.effort_seconds, 40);

        assert!(store.reclassify_selected_as_custom());
        assert_eq!(store.selected.discipline, TimerDiscipline::Custom);
        assert!(!store.reclassify_selected_as_custom());
    }

    #[test]
    fn failed_edit_leaves_selection() {
        let mut store = TimerStore::default();
        let result = store.edit_selected(|cfg| cfg.set_total_rounds(0));
        assert!(result.is_err());
        assert_eq!(store.selected.total_rounds, 8);
    }

    #[test]
    fn widget_flag_toggles() {
        let mut store = TimerStore::default();
        store.set_show_widget(true);
        assert!(store.show_widget);
    }
}
