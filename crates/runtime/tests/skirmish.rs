mod common;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use warband_core::{BattleConfig, PcgRng, RngOracle, SquadId};
use warband_runtime::{Arena, ArenaError, InMemoryStore, ReportRepository, SquadRepository};

use common::{arena, bundled_arena, squad, unit};

#[tokio::test]
async fn skirmish_waits_for_enough_squads() {
    let store = Arc::new(InMemoryStore::new());
    store.insert_squad(&squad("Lonely", vec![unit("Solo", "Slow")])).unwrap();
    let arena = arena(store.clone(), None);

    assert_eq!(arena.select_contenders().unwrap(), None);
    assert!(arena.run_skirmish().await.unwrap().is_none());
    assert_eq!(store.report_count().unwrap(), 0);
}

#[tokio::test]
async fn concurrent_skirmishes_never_share_a_squad() {
    let store = Arc::new(InMemoryStore::new());
    let arena = bundled_arena(store.clone(), BattleConfig::default());
    assert_eq!(arena.squads().unwrap().len(), 4);

    let (left, right) = tokio::join!(arena.run_skirmish(), arena.run_skirmish());
    let left = left.unwrap().expect("first pair");
    let right = right.unwrap().expect("second pair");

    let fighters: HashSet<_> = [
        left.outcome.winner,
        left.outcome.loser,
        right.outcome.winner,
        right.outcome.loser,
    ]
    .into_iter()
    .collect();
    assert_eq!(fighters.len(), 4);
    assert_eq!(store.report_count().unwrap(), 2);
    assert_eq!(arena.squads().unwrap().len(), 2);
}

#[tokio::test]
async fn latest_report_follows_the_newest_commit() {
    let store = Arc::new(InMemoryStore::new());
    let arena = bundled_arena(store, BattleConfig::default());
    assert!(arena.latest_report().unwrap().is_none());

    let first = arena.run_skirmish().await.unwrap().expect("pair available");
    let second = arena.run_skirmish().await.unwrap().expect("pair available");

    let latest = arena.latest_report().unwrap().expect("report exists");
    assert_ne!(first.receipt.report, second.receipt.report);
    assert_eq!(latest.winner_name, second.outcome.winner_name);
    assert_eq!(latest.loser_name, second.outcome.loser_name);
    assert_eq!(latest.content, second.outcome.content());
}

#[tokio::test]
async fn cleanup_removes_only_empty_squads() {
    let store = Arc::new(InMemoryStore::new());
    let keep = store.insert_squad(&squad("Keep", vec![unit("K", "Slow")])).unwrap();
    let empty_a = store.insert_squad(&squad("Hollow", Vec::new())).unwrap();
    let empty_b = store.insert_squad(&squad("Vacant", Vec::new())).unwrap();
    let arena = arena(store.clone(), None);

    let removed = arena.cleanup_empty_squads().unwrap();

    let removed: Vec<_> = removed.iter().map(|s| s.id).collect();
    assert_eq!(removed, [empty_a, empty_b]);
    let remaining: Vec<_> = arena.squads().unwrap().iter().map(|s| s.squad.id).collect();
    assert_eq!(remaining, [keep]);
    assert!(arena.cleanup_empty_squads().unwrap().is_empty());
}

/// Blocks the battle worker on every draw so a battle stays in flight.
struct SluggishRng(Duration);

impl RngOracle for SluggishRng {
    fn next_u32(&self, seed: u64) -> u32 {
        std::thread::sleep(self.0);
        PcgRng.next_u32(seed)
    }
}

fn sluggish() -> Option<Arc<dyn RngOracle>> {
    Some(Arc::new(SluggishRng(Duration::from_millis(100))))
}

/// Polls until matchmaking sees a free pair again.
async fn wait_for_pair(arena: &Arena) -> (SquadId, SquadId) {
    for _ in 0..200 {
        if let Some(pair) = arena.select_contenders().unwrap() {
            return pair;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("squads were never released");
}

#[tokio::test]
async fn abandoned_skirmish_holds_its_squads_until_committed() {
    let store = Arc::new(InMemoryStore::new());
    for (name, race) in [("Alpha", "Swift"), ("Bravo", "Slow"), ("Charlie", "Slow")] {
        store.insert_squad(&squad(name, vec![unit(name, race)])).unwrap();
    }
    let arena = arena(store.clone(), sluggish());

    let abandoned = tokio::time::timeout(Duration::from_millis(20), arena.run_skirmish()).await;
    assert!(abandoned.is_err());

    // the battle is still running on its worker with two of three squads
    assert_eq!(arena.select_contenders().unwrap(), None);
    assert_eq!(store.report_count().unwrap(), 0);

    wait_for_pair(&arena).await;
    assert_eq!(store.report_count().unwrap(), 1);
    assert_eq!(arena.squads().unwrap().len(), 2);
}

#[tokio::test]
async fn explicit_battle_runs_on_a_worker_and_blocks_its_squads() {
    let store = Arc::new(InMemoryStore::new());
    let a = store.insert_squad(&squad("Alpha", vec![unit("Ana", "Swift")])).unwrap();
    let b = store.insert_squad(&squad("Bravo", vec![unit("Bo", "Slow")])).unwrap();
    let c = store.insert_squad(&squad("Charlie", vec![unit("Cy", "Slow")])).unwrap();
    let arena = arena(store.clone(), sluggish());

    let abandoned =
        tokio::time::timeout(Duration::from_millis(20), arena.run_battle(a, b)).await;
    assert!(abandoned.is_err());
    assert!(matches!(
        arena.run_battle(c, a).await,
        Err(ArenaError::SquadBusy(busy)) if busy == a
    ));

    wait_for_pair(&arena).await;
    assert_eq!(store.report_count().unwrap(), 1);

    let survivor = arena.squads().unwrap()[0].squad.id;
    let summary = arena.run_battle(survivor, c).await.unwrap();
    assert_eq!(store.report_count().unwrap(), 2);
    assert_eq!(arena.squads().unwrap().len(), 1);
    assert_eq!(
        arena.latest_report().unwrap().map(|view| view.winner_name),
        Some(summary.outcome.winner_name)
    );
}
