use criterion::{black_box, criterion_group, criterion_main, Criterion};
use text_analyzer::LexiconAnalyzer;
use text_features::{classify_question_type, CellValue, FeatureExtractor, TaskType, TextDataset};

const QUESTIONS: &[&str] = &[
    "How many people attended?",
    "What year did it happen?",
    "Who is there when it rains?",
    "Name the capital of France.",
    "To whom should I address this?",
];

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_question_type", |b| {
        b.iter(|| {
            for q in QUESTIONS {
                black_box(classify_question_type(black_box(q)));
            }
        })
    });
}

fn bench_extract(c: &mut Criterion) {
    let rows = (0..200).map(|i| {
        vec![
            CellValue::from("Mary did not enjoy the trip to Paris, but the food was great."),
            CellValue::from(QUESTIONS[i % QUESTIONS.len()]),
            CellValue::from("answer"),
        ]
    });
    let dataset = TextDataset::from_rows(["context", "questions", "answers"], rows)
        .expect("valid dataset");
    let extractor = FeatureExtractor::new(LexiconAnalyzer::default());

    c.bench_function("extract_question_answering_200", |b| {
        b.iter(|| {
            extractor
                .extract(black_box(&dataset), "answers", TaskType::QuestionAnswering)
                .expect("extraction succeeds")
        })
    });
}

criterion_group!(benches, bench_classify, bench_extract);
criterion_main!(benches);
