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
        parsing_decklist,
        dealing_session,
        revealing_pile,
        cycling_dig_and_pass,
        resolving_strikes,
        serializing_session,
}

const DECK: &str = "\
40 Forest
20 Island
10 Sol Ring
10 Arcane Signet
10 Curse of Opulence
10 Mind Stone";

fn setup() -> Setup {
    Setup {
        names: vec!["Ada".to_string(), "Grace".to_string(), "Barbara".to_string()],
        cards: Decklist::parse(DECK).cards(),
        seed: Some(0),
        auto_pass: false,
    }
}

fn parsing_decklist(c: &mut criterion::Criterion) {
    c.bench_function("parse a 100-card Decklist", |b| {
        b.iter(|| Decklist::parse(DECK).cards())
    });
}

fn dealing_session(c: &mut criterion::Criterion) {
    c.bench_function("deal a 3-seat Session", |b| {
        b.iter(|| Session::deal(setup()))
    });
}

fn revealing_pile(c: &mut criterion::Criterion) {
    let pile = Pile::from(Decklist::parse(DECK).cards());
    c.bench_function("reveal a Pile three at a time", |b| {
        b.iter(|| {
            let mut pile = pile.clone();
            while !pile.is_empty() {
                let shown = pile.reveal(3);
                pile.record(&shown);
            }
        })
    });
}

fn cycling_dig_and_pass(c: &mut criterion::Criterion) {
    c.bench_function("dig and pass through a whole Pile", |b| {
        b.iter(|| {
            let mut session = Session::deal(setup());
            let mut die = Loaded::from(vec![1, 2, 3, 4, 5]);
            while !session.pile().is_empty() {
                let _ = session.roll(None, &mut die);
                let _ = session.pass(None);
            }
            session.log().len()
        })
    });
}

fn resolving_strikes(c: &mut criterion::Criterion) {
    c.bench_function("strike and choose through a whole Pile", |b| {
        b.iter(|| {
            let mut session = Session::deal(setup());
            let mut die = Loaded::from(6);
            while !session.pile().is_empty() {
                if let Ok(Outcome::Strike { choices, .. }) = session.roll(None, &mut die) {
                    let _ = session.choose(None, choices[0].id());
                }
                let _ = session.pass(None);
            }
            session.audit().is_ok()
        })
    });
}

fn serializing_session(c: &mut criterion::Criterion) {
    let mut session = Session::deal(setup());
    let mut die = Dice::seeded(1);
    for _ in 0..60 {
        if let Ok(Outcome::Strike { choices, .. }) = session.roll(None, &mut die) {
            let _ = session.choose(None, choices[0].id());
        }
        let _ = session.pass(None);
    }
    c.bench_function("serialize a Session with a long log", |b| {
        b.iter(|| serde_json::to_string(&session).map(|s| s.len()))
    });
}

use roll4treasure::Unique;
use roll4treasure::cards::*;
use roll4treasure::gameplay::*;
