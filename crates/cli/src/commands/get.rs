use super::Summary;
use pokedex_domain::{GetRequest, Resource, ResourceKind};
use pokedex_infrastructure::PokedexClient;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Numeric references are ids, anything else is a name.
pub fn parse_reference(reference: &str) -> GetRequest {
    match reference.parse::<u32>() {
        Ok(id) => GetRequest::by_id(id),
        Err(_) => GetRequest::by_name(reference),
    }
}

pub async fn run(
    client: &PokedexClient,
    kind: ResourceKind,
    reference: &str,
    repeat: u32,
    cancel: &CancellationToken,
) -> anyhow::Result<()> {
    let request = parse_reference(reference);

    match kind {
        ResourceKind::Nature => {
            fetch_and_print::<pokedex_domain::Nature>(client, request, repeat, cancel).await
        }
        ResourceKind::Pokemon => {
            fetch_and_print::<pokedex_domain::Pokemon>(client, request, repeat, cancel).await
        }
        ResourceKind::Stat => {
            fetch_and_print::<pokedex_domain::Stat>(client, request, repeat, cancel).await
        }
    }
}

async fn fetch_and_print<T>(
    client: &PokedexClient,
    request: GetRequest,
    repeat: u32,
    cancel: &CancellationToken,
) -> anyhow::Result<()>
where
    T: Resource + Serialize + Summary,
{
    let resource: T = client.get(request.clone(), cancel).await?;
    println!("{}", serde_json::to_string_pretty(&resource)?);

    if repeat == 0 {
        return Ok(());
    }

    for i in 1..=repeat {
        let cached: T = client.get(request.clone(), cancel).await?;
        println!("cached {i} id: {} name: {}", cached.id(), cached.name());
    }

    let stats = client.cache_stats();
    debug!(?stats, "Cache stats after repeated gets");
    println!(
        "cache: entries={} cost={}B hits={} misses={} hit_rate={:.2}",
        stats.entries,
        stats.cost,
        stats.hits,
        stats.misses,
        stats.hit_rate()
    );

    Ok(())
}
