criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        sampling_five_card_evaluation,
        sampling_seven_card_exhaustive,
        sampling_seven_card_lookup,
        exhausting_five_card_hands,
        dealing_river_runout,
        expanding_wide_range,
        simulating_heads_up_equity,
}

fn sampling_five_card_evaluation(c: &mut criterion::Criterion) {
    let hand = Deck::new().deal(5, &mut SmallRng::seed_from_u64(0));
    c.bench_function("evaluate a 5-card Hand", |b| {
        b.iter(|| Strength::from(Evaluator::from(hand)))
    });
}

fn sampling_seven_card_exhaustive(c: &mut criterion::Criterion) {
    let hand = Deck::new().deal(7, &mut SmallRng::seed_from_u64(0));
    c.bench_function("evaluate a 7-card Hand by its 21 subsets", |b| {
        b.iter(|| Exhaustive.lookup(hand))
    });
}

fn sampling_seven_card_lookup(c: &mut criterion::Criterion) {
    let ref five = Table::five();
    let hand = Deck::new().deal(7, &mut SmallRng::seed_from_u64(0));
    c.bench_function("look up a 7-card Hand in the 5-card Table", |b| {
        b.iter(|| five.best(hand))
    });
}

fn exhausting_five_card_hands(c: &mut criterion::Criterion) {
    c.bench_function("exhaust all 5-card Hands", |b| {
        b.iter(|| HandIterator::from((5, Hand::empty())).count())
    });
}

fn dealing_river_runout(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let dead = Deck::new().deal(4, rng);
    c.bench_function("deal a 5-card runout around 4 dead cards", |b| {
        b.iter(|| Deck::from(dead).deal(5, rng))
    });
}

fn expanding_wide_range(c: &mut criterion::Criterion) {
    c.bench_function("expand a wide Range", |b| {
        b.iter(|| Range::parse("AA KK QQ JJ TT 99 AK AQ AJ AT KQs KJs QJs JTs T9s 98s 87s 76s"))
    });
}

fn simulating_heads_up_equity(c: &mut criterion::Criterion) {
    let ranges = vec![
        Range::try_from("AA KK QQ AKs").unwrap(),
        Range::try_from("JTs T9s 98s 87s").unwrap(),
    ];
    let simulation = Simulation::from(ranges).iterations(1_000).seed(0);
    c.bench_function("simulate 1,000 heads-up showdowns", |b| {
        b.iter(|| simulation.run(&Exhaustive))
    });
}

use rand::SeedableRng;
use rand::rngs::SmallRng;
use shortdeck::cards::*;
use shortdeck::equity::*;
use shortdeck::lookup::*;
use shortdeck::ranges::*;
