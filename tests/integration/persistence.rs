//! End-to-end persistence: train, save, reload, train again

use tempfile::TempDir;

use concierge::fs::history::{HistoryStore, DEFAULT_HISTORY_FILE};
use concierge::history::TuningParams;
use concierge::tasks::training_tasks;
use concierge::trainer::run_session;

use crate::helpers::{CannedRecommender, MEDIOCRE_REPLY, STRONG_REPLY};

#[test]
fn test_best_params_carry_across_sessions() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(DEFAULT_HISTORY_FILE);
    let tasks = training_tasks();

    // First run: fresh store, default params, mediocre results.
    {
        let store = HistoryStore::new(&path);
        let mut history = store.load();
        assert!(history.is_empty());

        let params = history.best_params_or_default();
        assert_eq!(params, TuningParams::default());

        let record = run_session(
            &CannedRecommender::new(MEDIOCRE_REPLY),
            &tasks,
            2,
            TuningParams {
                beam_width: 3,
                ..params
            },
        );
        assert!(history.record_session(record));
        store.save(&history);
    }

    // Second run: the reloaded store hands back the winning params.
    {
        let store = HistoryStore::new(&path);
        let mut history = store.load();
        assert_eq!(history.total_sessions, 1);
        assert!(history.best_score > 0.0);

        let params = history.best_params_or_default();
        assert_eq!(params.beam_width, 3);

        let record = run_session(&CannedRecommender::new(STRONG_REPLY), &tasks, 2, params);
        let improved = history.record_session(record);
        assert!(improved, "the strong reply should beat the mediocre one");
        store.save(&history);
    }

    // Final state on disk is consistent.
    let final_history = HistoryStore::new(&path).load();
    assert_eq!(final_history.total_sessions, 2);
    assert_eq!(final_history.history.len(), 2);
    assert!(final_history.best_score_consistent());
    assert!(final_history.history[1].best_score_updated);
    assert_eq!(final_history.best_params_or_default().beam_width, 3);
}

#[test]
fn test_checkpoint_file_wire_format() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(DEFAULT_HISTORY_FILE);
    let tasks = training_tasks();

    let store = HistoryStore::new(&path);
    let mut history = store.load();
    let record = run_session(
        &CannedRecommender::new(STRONG_REPLY),
        &tasks,
        1,
        TuningParams::default(),
    );
    history.record_session(record);
    store.save(&history);

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert!(value["history"].is_array());
    assert_eq!(value["history"].as_array().unwrap().len(), 1);
    assert!(value["best_score"].is_number());
    assert!(value["last_updated"].is_string());
    assert_eq!(value["total_sessions"], 1);

    let session = &value["history"][0];
    for field in [
        "timestamp",
        "duration_seconds",
        "iterations",
        "scores",
        "average_score",
        "best_score_updated",
        "task_count",
        "params",
    ] {
        assert!(
            session.get(field).is_some(),
            "session record missing field {field}"
        );
    }

    // Pretty-printed output, as the file is meant to be human-inspectable.
    assert!(raw.contains('\n'));
}

#[test]
fn test_corrupted_checkpoint_restarts_cleanly() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(DEFAULT_HISTORY_FILE);

    std::fs::write(&path, "{\"history\": [{\"broken\":").unwrap();

    let store = HistoryStore::new(&path);
    let mut history = store.load();
    assert!(history.is_empty());
    assert_eq!(history.best_params_or_default(), TuningParams::default());

    // Training proceeds as a fresh run and overwrites the bad file.
    let record = run_session(
        &CannedRecommender::new(MEDIOCRE_REPLY),
        &training_tasks(),
        1,
        TuningParams::default(),
    );
    history.record_session(record);
    store.save(&history);

    let reloaded = HistoryStore::new(&path).load();
    assert_eq!(reloaded.total_sessions, 1);
    assert!(reloaded.best_score_consistent());
}
