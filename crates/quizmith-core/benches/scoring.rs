use criterion::{black_box, criterion_group, criterion_main, Criterion};
use indexmap::IndexMap;

use quizmith_core::loader::resolve_profile_in;
use quizmith_core::model::{ProfileConfig, Response, ResultsConfig};
use quizmith_core::session::QuizSession;

fn session_with(responses: usize, topics: usize) -> QuizSession {
    let mut session = QuizSession::new();
    for i in 0..responses {
        session.add_response(Response {
            question_id: format!("q{i}"),
            answer_id: format!("q{i}a1"),
            weight: (i % 5 + 1) as u32,
            topic: format!("Topic {}", i % topics),
        });
    }
    session
}

fn results_config(profiles: usize) -> ResultsConfig {
    let mut map = IndexMap::new();
    for i in 0..profiles {
        let min = (i * 10) as u32;
        map.insert(
            format!("profile_{i}"),
            ProfileConfig {
                name: format!("Profile {i}"),
                description: String::new(),
                score_range: [min, min + 9],
                characteristics: vec![],
            },
        );
    }
    ResultsConfig { profiles: map }
}

fn bench_calculate_results(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_results");

    for (responses, topics) in [(10, 5), (100, 10), (1000, 10)] {
        let session = session_with(responses, topics);
        group.bench_function(format!("n={responses},topics={topics}"), |b| {
            b.iter(|| black_box(&session).calculate_results())
        });
    }

    group.finish();
}

fn bench_resolve_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_profile");
    let results = results_config(20);

    group.bench_function("first_range", |b| {
        b.iter(|| resolve_profile_in(black_box(&results), black_box(3)))
    });
    group.bench_function("last_range", |b| {
        b.iter(|| resolve_profile_in(black_box(&results), black_box(195)))
    });

    group.finish();
}

criterion_group!(benches, bench_calculate_results, bench_resolve_profile);
criterion_main!(benches);
