use super::Summary;
use pokedex_application::pagination::Paginator;
use pokedex_domain::{ListRequest, ResourceKind};
use pokedex_infrastructure::PokedexClient;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub async fn run(
    client: &PokedexClient,
    kind: ResourceKind,
    page_size: u32,
    max_pages: Option<usize>,
    cancel: &CancellationToken,
) -> anyhow::Result<()> {
    let request = ListRequest::new(page_size);

    match kind {
        ResourceKind::Nature => walk(client.list_natures(request)?, max_pages, cancel).await,
        ResourceKind::Pokemon => walk(client.list_pokemon(request)?, max_pages, cancel).await,
        ResourceKind::Stat => walk(client.list_stats(request)?, max_pages, cancel).await,
    }
}

async fn walk<T>(
    mut paginator: Paginator<T>,
    max_pages: Option<usize>,
    cancel: &CancellationToken,
) -> anyhow::Result<()>
where
    T: Summary + Send + 'static,
{
    let mut pages = 0;
    let mut items = 0;

    while max_pages.map_or(true, |max| pages < max) {
        let start = paginator.offset();
        let Some(page) = paginator.next(cancel).await? else {
            break;
        };
        pages += 1;
        items += page.len();

        println!("page {pages} (offset {start})");
        for item in &page {
            println!("{:>6}  {}", item.id(), item.name());
        }
    }

    info!(
        pages,
        items,
        exhausted = paginator.is_exhausted(),
        "Listing finished"
    );

    Ok(())
}
