// Criterion benchmarks for HomeMatch

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use homematch::core::{MatchingEngine, score, SEARCH_TOLERANCE};
use homematch::models::{BuyerProfile, Listing, ListingFilters};
use rand::rngs::StdRng;
use rand::SeedableRng;

const CATEGORIES: [&str; 5] = ["house", "apartment", "townhouse", "vacant land", "commercial"];

fn create_listing(id: usize) -> Listing {
    let price = 400_000.0 + (id % 120) as f64 * 10_000.0;
    Listing::new(id.to_string(), price, CATEGORIES[id % CATEGORIES.len()])
        .with_title(format!("Listing {}", id))
        .with_address(format!("{} Harbour Street, Wellington", id))
}

fn create_profile() -> BuyerProfile {
    BuyerProfile::new(900_000.0, 72.0)
}

fn bench_score(c: &mut Criterion) {
    let profile = create_profile();
    let listing = create_listing(42);

    c.bench_function("score_listing", |b| {
        b.iter(|| score(black_box(&profile), black_box(&listing), black_box(SEARCH_TOLERANCE)));
    });
}

fn bench_rank(c: &mut Criterion) {
    let engine = MatchingEngine::default();
    let profile = create_profile();

    let mut group = c.benchmark_group("rank");

    for listing_count in [10, 100, 1000, 10000].iter() {
        let listings: Vec<Listing> = (0..*listing_count).map(create_listing).collect();

        group.bench_with_input(
            BenchmarkId::new("unfiltered", listing_count),
            listing_count,
            |b, _| {
                b.iter(|| {
                    engine.rank(
                        black_box(&profile),
                        black_box(&listings),
                        black_box(&ListingFilters::default()),
                        black_box(SEARCH_TOLERANCE),
                    )
                });
            },
        );

        let filters = ListingFilters::default().category("house").free_text("harbour");
        group.bench_with_input(
            BenchmarkId::new("filtered", listing_count),
            listing_count,
            |b, _| {
                b.iter(|| {
                    engine.rank(
                        black_box(&profile),
                        black_box(&listings),
                        black_box(&filters),
                        black_box(SEARCH_TOLERANCE),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_suggest(c: &mut Criterion) {
    let engine = MatchingEngine::default();
    let profile = create_profile();
    let mut rng = StdRng::seed_from_u64(7);

    c.bench_function("suggest_3", |b| {
        b.iter(|| engine.suggest_with_rng(black_box(&profile), black_box(Some(3)), &mut rng));
    });
}

criterion_group!(
    benches,
    bench_score,
    bench_rank,
    bench_suggest
);

criterion_main!(benches);
