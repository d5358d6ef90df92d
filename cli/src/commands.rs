use tempo_core::{StoreError, TimerConfig, TimerDiscipline, TimerStore, TimerStoreExt};

/// Per-run overrides from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOverrides {
    pub discipline: Option<TimerDiscipline>,
    pub effort: Option<u32>,
    pub rest: Option<u32>,
    pub duration: Option<u32>,
    pub rounds: Option<u32>,
}

/// Apply overrides on top of the stored selection.
///
/// Picking a different discipline starts from its preset. Changing any
/// timing of a Tabata turns it into a custom timer, mirroring what editing
/// it by hand does.
pub fn build_config(store: &mut TimerStore, overrides: &RunOverrides) -> Result<TimerConfig, String> {
    if let Some(discipline) = overrides.discipline {
        if discipline != store.selected.discipline {
            store
                .select(TimerConfig::preset(discipline))
                .map_err(store_error)?;
        }
    }

    let before = store.selected;
    store
        .edit_selected(|cfg| {
            if let Some(secs) = overrides.effort {
                cfg.set_effort_seconds(secs);
            }
            if let Some(secs) = overrides.rest {
                cfg.set_rest_seconds(secs);
            }
            if let Some(secs) = overrides.duration {
                cfg.set_duration_seconds(secs);
            }
            if let Some(rounds) = overrides.rounds {
                cfg.set_total_rounds(rounds);
            }
        })
        .map_err(store_error)?;

    let timings_changed = store.selected.effort_seconds != before.effort_seconds
        || store.selected.rest_seconds != before.rest_seconds
        || store.selected.total_rounds != before.total_rounds;
    if timings_changed && store.reclassify_selected_as_custom() {
        tracing::info!("Edited Tabata reclassified as custom");
    }

    Ok(store.selected)
}

fn store_error(err: StoreError) -> String {
    match &err {
        StoreError::Invalid(inner) => format!("{err}: {inner}"),
        _ => err.to_string(),
    }
}

pub fn show_config(store: &TimerStore) {
    let cfg = &store.selected;
    println!("{:<16} {}", "Discipline", cfg.discipline);
    if cfg.discipline.is_interval() {
        println!("{:<16} {}s", "Effort", cfg.effort_seconds);
        println!("{:<16} {}s", "Rest", cfg.effective_rest_seconds());
        println!("{:<16} {}", "Rounds", cfg.total_rounds);
    }
    if matches!(cfg.discipline, TimerDiscipline::Countdown | TimerDiscipline::Amrap) {
        println!("{:<16} {}s", "Duration", cfg.duration_seconds);
    }
    println!("{:<16} {}", "Show widget", if store.show_widget { "on" } else { "off" });
}

pub fn select_discipline(store: &mut TimerStore, discipline: TimerDiscipline) -> Result<(), String> {
    store
        .select(TimerConfig::preset(discipline))
        .map_err(store_error)?;
    store.save().map_err(store_error)?;
    println!("Selected {}", discipline);
    Ok(())
}

pub fn set_widget(store: &mut TimerStore, show: bool) -> Result<(), String> {
    store.set_show_widget(show);
    store.save().map_err(store_error)?;
    println!("Widget {}", if show { "on" } else { "off" });
    Ok(())
}
