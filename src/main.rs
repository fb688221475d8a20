use chrono::NaiveDate;
use magazine_catalog::lifecycle::{setup_tracing, CatalogConfig, CatalogSystem};
use magazine_catalog::model::{EditionIndex, Magazine, MagazineCollection, Periodicity, SortKey};
use tracing::{info, Instrument};

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, String> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| format!("Invalid date {}-{}-{}", year, month, day))
}

fn print_section(title: &str, body: impl std::fmt::Display) {
    println!("\n=== {} ===", title);
    println!("{}", body);
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = CatalogConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting magazine catalog demo");

    // Local collection, mutated directly
    let mut collection = MagazineCollection::new();
    collection.add_defaults();
    collection.add_magazines([
        Magazine::new("World of Science", Periodicity::Monthly, date(2024, 3, 1)?, 20000).map_err(|e| e.to_string())?,
        Magazine::new("Techno", Periodicity::Weekly, date(2024, 2, 15)?, 15000).map_err(|e| e.to_string())?,
    ]);

    print_section("Collection", &collection);
    print_section("Collection (short)", collection.to_short_string());

    collection.sort_by_name();
    print_section("Sorted by name", collection.to_short_string());

    collection.sort_by_release_date();
    print_section("Sorted by release date", collection.to_short_string());

    collection.sort_by_circulation();
    print_section("Sorted by circulation", collection.to_short_string());

    println!("\nMaximum magazine rating: {:.2}", collection.max_rating());

    println!("\nMonthly magazines:");
    for magazine in collection.monthly_magazines() {
        println!("{}", magazine.to_short_string());
    }

    println!("\nMagazines rated 4.0 or higher:");
    for magazine in collection.magazines_with_rating_at_least(4.0) {
        println!("{}", magazine.to_short_string());
    }

    // Same collection, owned by the catalog actor
    let system = CatalogSystem::new(&config);

    let span = tracing::info_span!("catalog_demo");
    async {
        let id = system
            .client
            .create_catalog("Demo", collection.magazines().to_vec())
            .await
            .map_err(|e| e.to_string())?;

        system
            .client
            .add_magazines(id, vec![Magazine::from_defaults(system.defaults())])
            .await
            .map_err(|e| e.to_string())?;
        system.client.sort(id, SortKey::Name).await.map_err(|e| e.to_string())?;

        let max = system.client.max_rating(id).await.map_err(|e| e.to_string())?;
        let weekly = system
            .client
            .magazines_with_periodicity(id, Periodicity::Weekly)
            .await
            .map_err(|e| e.to_string())?;
        info!(%id, max_rating = max, weekly = weekly.len(), "Catalog queried");

        if let Some(catalog) = system.client.get(id).await.map_err(|e| e.to_string())? {
            print_section("Catalog sorted by name", catalog.magazines.to_short_string());
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;

    // Edition lookups
    let index = EditionIndex::generate(10);
    println!("\n=== Edition lookups ===");
    for probe in index.probe_editions() {
        println!(
            "{}: in list: {}, by key: {}, by value: {}, by description: {}",
            probe.name(),
            index.contains_edition(&probe),
            index.contains_key(&probe),
            index.contains_magazine(&Magazine::from_edition(probe.clone(), Periodicity::Monthly)),
            index.contains_description(&probe.to_string())
        );
    }

    info!("Demo completed successfully");
    Ok(())
}
