/// List Resources Flow Test
///
/// Tests pagination end to end:
/// Paginator → Page envelope → Fan-out detail fetches → Ordered page

#[path = "../common/mod.rs"]
mod common;
use common::{client_for, TestCatalog, TestUpstream};
use futures::StreamExt;
use pokedex_domain::{DomainError, ListRequest, ResourceKind};
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn test_list_natures_in_pages_of_ten() {
    let upstream = TestUpstream::start().await;
    let client = client_for(&upstream);
    let cancel = CancellationToken::new();

    let mut paginator = client.list_natures(ListRequest::new(10)).unwrap();
    let mut sizes = Vec::new();
    let mut names = Vec::new();

    while let Some(page) = paginator.next(&cancel).await.unwrap() {
        sizes.push(page.len());
        names.extend(page.into_iter().map(|n| n.name));
    }

    assert_eq!(sizes, vec![10, 10, 5]);
    assert_eq!(names, TestCatalog::NATURES.to_vec());
    assert!(paginator.is_exhausted());
    assert_eq!(paginator.offset(), 25);

    // Terminal state is sticky and makes no further requests.
    let before = upstream.total_hits();
    assert!(paginator.next(&cancel).await.unwrap().is_none());
    assert_eq!(upstream.total_hits(), before);
}

#[tokio::test]
async fn test_page_requests_use_offset_and_limit() {
    let upstream = TestUpstream::start().await;
    let client = client_for(&upstream);
    let cancel = CancellationToken::new();

    let mut paginator = client.list_stats(ListRequest::new(3)).unwrap();
    while paginator.next(&cancel).await.unwrap().is_some() {}

    assert_eq!(upstream.hits("/stat?offset=0&limit=3"), 1);
    assert_eq!(upstream.hits("/stat?offset=3&limit=3"), 1);
    assert_eq!(upstream.hits("/stat?offset=6&limit=3"), 1);
    assert_eq!(upstream.hits("/stat?offset=8&limit=3"), 1);
    assert_eq!(upstream.detail_hits(ResourceKind::Stat), 8);
}

#[tokio::test]
async fn test_second_walk_is_served_from_cache() {
    let upstream = TestUpstream::start().await;
    let client = client_for(&upstream);
    let cancel = CancellationToken::new();

    for _ in 0..2 {
        let mut paginator = client.list_pokemon(ListRequest::new(5)).unwrap();
        while paginator.next(&cancel).await.unwrap().is_some() {}
    }

    assert_eq!(upstream.detail_hits(ResourceKind::Pokemon), TestCatalog::POKEMON.len());
    assert_eq!(upstream.hits("/pokemon/charmander"), 1);
}

#[tokio::test]
async fn test_stream_of_pages() {
    let upstream = TestUpstream::start().await;
    let client = client_for(&upstream);

    let pages: Vec<_> = client
        .list_stats(ListRequest::new(3))
        .unwrap()
        .into_stream(CancellationToken::new())
        .collect()
        .await;

    let sizes: Vec<usize> = pages.into_iter().map(|p| p.unwrap().len()).collect();
    assert_eq!(sizes, vec![3, 3, 2]);
}

#[tokio::test]
async fn test_failed_detail_fails_page_and_retry_resumes() {
    let upstream = TestUpstream::builder()
        .failing_times(ResourceKind::Nature, "timid", 503, 1)
        .start()
        .await;
    let client = client_for(&upstream);
    let cancel = CancellationToken::new();

    let mut paginator = client.list_natures(ListRequest::new(10)).unwrap();

    let err = paginator.next(&cancel).await.unwrap_err();
    assert!(matches!(err, DomainError::UnexpectedStatus { status: 503, .. }));
    assert_eq!(paginator.offset(), 0);

    // Same page again; the upstream has recovered.
    let page = paginator.next(&cancel).await.unwrap().unwrap();
    assert_eq!(page.len(), 10);
    assert_eq!(page[0].name, "hardy");
    assert_eq!(page[4].name, "timid");
    assert_eq!(paginator.offset(), 10);
}

#[tokio::test]
async fn test_details_of_a_page_are_fetched_concurrently() {
    let upstream = TestUpstream::builder()
        .with_detail_delay(Duration::from_millis(200))
        .start()
        .await;
    let client = client_for(&upstream);

    let mut paginator = client.list_natures(ListRequest::new(10)).unwrap();
    let start = Instant::now();
    let page = paginator
        .next(&CancellationToken::new())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(page.len(), 10);
    // Ten sequential fetches would take at least two seconds.
    assert!(
        start.elapsed() < Duration::from_millis(1500),
        "page took {:?}",
        start.elapsed()
    );
}

#[tokio::test]
async fn test_cancelled_page_keeps_cursor() {
    let upstream = TestUpstream::builder()
        .with_detail_delay(Duration::from_secs(30))
        .start()
        .await;
    let client = client_for(&upstream);
    let mut paginator = client.list_natures(ListRequest::new(5)).unwrap();

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let result = tokio::time::timeout(Duration::from_secs(5), paginator.next(&cancel))
        .await
        .expect("cancelled page must return promptly");

    assert_eq!(result, Err(DomainError::Cancelled));
    assert_eq!(paginator.offset(), 0);
    assert!(!paginator.is_exhausted());
}

#[tokio::test]
async fn test_zero_page_size_is_rejected() {
    let upstream = TestUpstream::start().await;
    let client = client_for(&upstream);

    let result = client.list_natures(ListRequest::new(0));

    assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
    assert_eq!(upstream.total_hits(), 0);
}
