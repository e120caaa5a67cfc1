use crate::{
    ConsignmentRepository, InMemoryRepository,
    proto::{Consignment, Container},
};
use futures::future::join_all;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread::scope;

fn consignment(id: &str, weight: i32) -> Consignment {
    Consignment {
        id: id.to_string(),
        weight,
        ..Default::default()
    }
}

async fn run_list_all_starts_empty<R>(repository: &R)
where
    R: ConsignmentRepository,
{
    assert!(repository.list_all().await.is_empty());
}

async fn run_create_returns_input_unchanged<R>(repository: &R)
where
    R: ConsignmentRepository,
{
    let request = Consignment {
        id: "A".to_string(),
        description: "Pallets of tinned fruit".to_string(),
        weight: 10,
        containers: vec![Container {
            id: "C1".to_string(),
            customer_id: "cust-7".to_string(),
            origin: "Manchester, United Kingdom".to_string(),
            user_id: "user-3".to_string(),
        }],
        vessel_id: "vessel001".to_string(),
    };

    let stored = repository.create(request.clone()).await.unwrap();
    assert_eq!(stored, request);
    assert_eq!(repository.list_all().await, vec![request]);
}

async fn run_create_preserves_order<R>(repository: &R)
where
    R: ConsignmentRepository,
{
    let c1 = consignment("c1", 1);
    let c2 = consignment("c2", 2);

    repository.create(c1.clone()).await.unwrap();
    repository.create(c2.clone()).await.unwrap();

    assert_eq!(repository.list_all().await, vec![c1, c2]);
}

async fn run_duplicate_ids_are_kept<R>(repository: &R)
where
    R: ConsignmentRepository,
{
    repository.create(consignment("dup", 1)).await.unwrap();
    repository.create(consignment("dup", 2)).await.unwrap();

    let weights: Vec<_> = repository
        .list_all()
        .await
        .into_iter()
        .map(|c| c.weight)
        .collect();
    assert_eq!(weights, vec![1, 2]);
}

async fn run_snapshot_is_detached<R>(repository: &R)
where
    R: ConsignmentRepository,
{
    repository.create(consignment("a", 1)).await.unwrap();

    let mut snapshot = repository.list_all().await;
    snapshot.clear();
    snapshot.push(consignment("injected", 99));

    repository.create(consignment("b", 2)).await.unwrap();

    let ids: Vec<_> = repository
        .list_all()
        .await
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(snapshot, vec![consignment("injected", 99)]);
}

async fn run_concurrent_creates_are_not_lost<R>(repository: Arc<R>, count: usize)
where
    R: ConsignmentRepository + 'static,
{
    let handles = (0..count).map(|i| {
        let repository = Arc::clone(&repository);
        tokio::spawn(async move {
            repository
                .create(consignment(&format!("id-{i}"), i as i32))
                .await
        })
    });

    for result in join_all(handles).await {
        result.unwrap().unwrap();
    }

    let stored = repository.list_all().await;
    assert_eq!(stored.len(), count);

    let ids: HashSet<_> = stored.into_iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), count);
    for i in 0..count {
        assert!(ids.contains(&format!("id-{i}")));
    }
}

#[tokio::test]
async fn memory_list_all_starts_empty() {
    run_list_all_starts_empty(&InMemoryRepository::new()).await;
}

#[tokio::test]
async fn memory_create_returns_input_unchanged() {
    run_create_returns_input_unchanged(&InMemoryRepository::new()).await;
}

#[tokio::test]
async fn memory_create_preserves_order() {
    run_create_preserves_order(&InMemoryRepository::new()).await;
}

#[tokio::test]
async fn memory_duplicate_ids_are_kept() {
    run_duplicate_ids_are_kept(&InMemoryRepository::new()).await;
}

#[tokio::test]
async fn memory_snapshot_is_detached() {
    run_snapshot_is_detached(&InMemoryRepository::new()).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn memory_concurrent_creates_are_not_lost() {
    run_concurrent_creates_are_not_lost(Arc::new(InMemoryRepository::new()), 1000).await;
}

#[test]
fn memory_threaded_inserts_are_not_lost() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 500;

    let repository = InMemoryRepository::with_capacity(THREADS * PER_THREAD);
    scope(|s| {
        for t in 0..THREADS {
            let repository = &repository;
            s.spawn(move || {
                for i in 0..PER_THREAD {
                    repository.insert(consignment(&format!("{t}-{i}"), i as i32));
                }
            });
        }
    });

    assert_eq!(repository.len(), THREADS * PER_THREAD);
    let ids: HashSet<_> = repository.snapshot().into_iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), THREADS * PER_THREAD);
}

#[test]
fn memory_snapshots_only_observe_whole_appends() {
    const TOTAL: usize = 2000;

    let repository = InMemoryRepository::new();
    scope(|s| {
        s.spawn(|| {
            for i in 0..TOTAL {
                repository.insert(consignment(&i.to_string(), i as i32));
            }
        });

        for _ in 0..4 {
            s.spawn(|| {
                let mut last_len = 0;
                while last_len < TOTAL {
                    let snapshot = repository.snapshot();
                    // Every snapshot is a prefix of the append log.
                    for (i, c) in snapshot.iter().enumerate() {
                        assert_eq!(c.weight, i as i32);
                        assert_eq!(c.id, i.to_string());
                    }
                    assert!(snapshot.len() >= last_len);
                    last_len = snapshot.len();
                }
            });
        }
    });

    assert_eq!(repository.len(), TOTAL);
}

#[test]
fn memory_is_empty_tracks_inserts() {
    let repository = InMemoryRepository::new();
    assert!(repository.is_empty());
    repository.insert(consignment("a", 1));
    assert!(!repository.is_empty());
    assert_eq!(repository.len(), 1);
}
