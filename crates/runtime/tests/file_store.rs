mod common;

use std::fs;
use std::sync::Arc;

use warband_core::{BattleConfig, SquadId};
use warband_runtime::{
    Effect, FileStore, ReportRepository, RepositoryError, SquadRepository, TransactionalStore,
};

use common::{bundled_arena, squad, unit};

#[test]
fn world_survives_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("world.json");

    let committed = {
        let store = Arc::new(FileStore::open(&path).unwrap());
        let arena = bundled_arena(store, BattleConfig::with_seed(11));
        let squads = arena.squads().unwrap();
        arena
            .battle(squads[0].squad.id, squads[1].squad.id)
            .unwrap()
    };

    let reopened = FileStore::open(&path).unwrap();
    let report = reopened.latest_report().unwrap().expect("report persisted");
    assert_eq!(report.id, committed.receipt.report);
    assert_eq!(report.content, committed.outcome.content());
    assert!(reopened.squad(committed.outcome.loser).unwrap().is_none());
    assert_eq!(
        reopened.squad(committed.outcome.winner).unwrap().map(|s| s.level),
        Some(committed.receipt.winner_level)
    );
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn failed_transaction_leaves_the_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("world.json");
    let store = FileStore::open(&path).unwrap();
    let a = store.insert_squad(&squad("Alpha", vec![unit("Ana", "Swift")])).unwrap();
    let before = fs::read(&path).unwrap();

    let result = store.run_in_transaction(&[
        Effect::IncrementSquadLevel(a),
        Effect::DeleteSquad(SquadId(77)),
    ]);

    assert!(matches!(
        result,
        Err(RepositoryError::SquadNotFound(SquadId(77)))
    ));
    assert_eq!(fs::read(&path).unwrap(), before);
    assert_eq!(store.squad(a).unwrap().map(|s| s.level), Some(1));
}

#[test]
fn missing_file_reads_as_an_empty_world() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("nested").join("world.json")).unwrap();

    assert!(store.list_squads().unwrap().is_empty());
    assert!(store.latest_report().unwrap().is_none());
}
