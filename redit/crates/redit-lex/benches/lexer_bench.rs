//! Lexer Benchmarks
//!
//! Measures tokenizer throughput on typical R source.
//! Run with: `cargo bench --package redit-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use redit_lex::{Lexer, ReservedWords, Tokenizer};
use redit_util::Span;

const SCRIPT: &str = r#"
# Fit a model per group and collect the coefficients
library(stats)

fit_groups <- function(df, formula, ..., min_rows = 10L) {
    groups <- split(df, df$group)
    out <- vector("list", length(groups))
    for (i in seq_along(groups)) {
        g <- groups[[i]]
        if (nrow(g) < min_rows) next
        model <- lm(formula, data = g, ...)
        out[[i]] <- coef(model) %*% diag(2) * 1.5e-3
    }
    names(out) <- names(groups)
    Filter(Negate(is.null), out) |> do.call(what = rbind)
}

`odd name` <- c(TRUE, FALSE, NA, 0xFF, 2i, Inf)
message('done: ', sum(!is.na(`odd name`)), "\n")
"#;

fn lexer_token_count(source: &str) -> usize {
    // Lexer implements Iterator, so we can use it directly
    Lexer::new(source, ReservedWords::r_language()).count()
}

fn bench_lexer_script(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");
    group.throughput(Throughput::Bytes(SCRIPT.len() as u64));

    group.bench_function("simple_assign", |b| {
        b.iter(|| lexer_token_count(black_box("x <- 42")))
    });

    group.bench_function("script", |b| {
        b.iter(|| lexer_token_count(black_box(SCRIPT)))
    });

    group.finish();
}

fn bench_lexer_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_large");

    let source = SCRIPT.repeat(200);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("full_scan", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    let tokenizer = Tokenizer::r_language();
    let window = Span::new(source.len() / 2, source.len() / 2 + 512);
    group.bench_function("window_512", |b| {
        b.iter(|| tokenizer.tokens_in(black_box(&source), window).count())
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| lexer_token_count(black_box("s <- \"hello\"")))
    });

    group.bench_function("escaped_string", |b| {
        let source = r#"s <- "a \"quoted\" word with \\ backslashes and a tab\t""#;
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.bench_function("unterminated", |b| {
        let source = format!("'{}", "x".repeat(4096));
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| {
        b.iter(|| lexer_token_count(black_box("x <- 123456L")))
    });

    group.bench_function("double", |b| {
        b.iter(|| lexer_token_count(black_box("x <- 3.14159e-10")))
    });

    group.bench_function("hex", |b| {
        b.iter(|| lexer_token_count(black_box("x <- 0xDEADBEEF")))
    });

    group.finish();
}

fn bench_lexer_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_words");

    group.bench_function("reserved", |b| {
        b.iter(|| lexer_token_count(black_box("if (TRUE) NULL else NA_real_")))
    });

    group.bench_function("dotted", |b| {
        b.iter(|| lexer_token_count(black_box("is.na(x) && !is.null(y.value)")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_script,
    bench_lexer_large,
    bench_lexer_strings,
    bench_lexer_numbers,
    bench_lexer_words
);
criterion_main!(benches);
