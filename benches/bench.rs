// Criterion benchmarks for Nutrient Attention

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nutrient_attention::core::{questionnaire, score_breakdown};
use nutrient_attention::models::{
    AnswerRecord, AssessmentRequest, DairyIntake, DietPattern, Digestion, Fatigue, HairSkin,
    OilyFishFrequency, RedMeatFrequency, Sex, SunExposure, Supplements,
};
use nutrient_attention::{assess, assess_with_breakdown};
use validator::Validate;

fn create_answers(id: usize) -> AnswerRecord {
    AnswerRecord {
        age: 16 + (id % 60) as u16,
        sex: if id % 2 == 0 { Sex::Female } else { Sex::Male },
        diet_pattern: DietPattern::ALL[id % 3],
        fruit_veg_servings: (id % 16) as f64,
        dairy_intake: DairyIntake::ALL[id % 3],
        red_meat_frequency: RedMeatFrequency::ALL[(id / 3) % 3],
        oily_fish_frequency: OilyFishFrequency::ALL[(id / 2) % 3],
        sun_exposure: SunExposure::ALL[(id / 5) % 3],
        fatigue: Fatigue::ALL[id % 3],
        hair_skin: HairSkin::ALL[(id / 7) % 3],
        digestion: Digestion::ALL[(id / 11) % 3],
        supplements: Supplements::ALL[(id / 13) % 3],
    }
}

fn bench_score_breakdown(c: &mut Criterion) {
    let answers = create_answers(7);

    c.bench_function("score_breakdown", |b| {
        b.iter(|| score_breakdown(black_box(&answers)));
    });
}

fn bench_assess(c: &mut Criterion) {
    let mut group = c.benchmark_group("assess");

    for count in [1, 10, 100, 1000].iter() {
        let batch: Vec<AnswerRecord> = (0..*count).map(create_answers).collect();

        group.bench_with_input(BenchmarkId::new("batch", count), count, |b, _| {
            b.iter(|| {
                let results: Vec<_> = batch.iter().map(assess).collect();
                black_box(results)
            });
        });
    }

    group.finish();
}

fn bench_request_pipeline(c: &mut Criterion) {
    let request = AssessmentRequest::from(&create_answers(42));

    c.bench_function("validate_convert_assess", |b| {
        b.iter(|| {
            let request = black_box(&request);
            if request.validate().is_err() {
                return None;
            }
            AnswerRecord::try_from(request)
                .ok()
                .map(|answers| assess_with_breakdown(&answers))
        });
    });
}

fn bench_questionnaire(c: &mut Criterion) {
    c.bench_function("questionnaire_schema", |b| {
        b.iter(|| black_box(questionnaire()));
    });
}

criterion_group!(
    benches,
    bench_score_breakdown,
    bench_assess,
    bench_request_pipeline,
    bench_questionnaire
);

criterion_main!(benches);
