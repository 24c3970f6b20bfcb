//! Lexer Benchmarks
//!
//! Run with: `cargo bench --package asnc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use asnc_lex::Lexer;
use asnc_util::Handler;

const MODULE: &str = r#"
PKIX1Explicit88 { iso(1) identified-organization(3) dod(6) internet(1)
  security(5) mechanisms(5) pkix(7) id-mod(0) id-pkix1-explicit(18) }

DEFINITIONS EXPLICIT TAGS ::=

BEGIN

-- EXPORTS ALL --

Certificate ::= SEQUENCE {
    tbsCertificate       TBSCertificate,
    signatureAlgorithm   AlgorithmIdentifier,
    signature            BIT STRING }

TBSCertificate ::= SEQUENCE {
    version         [0]  Version DEFAULT v1,
    serialNumber         CertificateSerialNumber,
    validity             Validity,
    extensions      [3]  Extensions OPTIONAL,
    ...,
    [[ issuerUniqueID  [1]  IMPLICIT UniqueIdentifier OPTIONAL ]]
    }

/* nested /* block */ comment */
Version ::= INTEGER { v1(0), v2(1), v3(2) }
Ratio ::= REAL (0.0 .. 1.5e3)
Extensions ::= SEQUENCE SIZE (1..MAX) OF Extension

END
"#;

fn lexer_token_count(source: &str) -> usize {
    let handler = Handler::new();
    Lexer::from_source(source, &handler).count()
}

fn bench_lexer_module(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");
    group.throughput(Throughput::Bytes(MODULE.len() as u64));

    group.bench_function("header", |b| {
        b.iter(|| lexer_token_count(black_box("Mod DEFINITIONS ::= BEGIN END")))
    });

    group.bench_function("pkix_module", |b| {
        b.iter(|| lexer_token_count(black_box(MODULE)))
    });

    group.finish();
}

fn bench_lexer_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_large");
    let source = MODULE.repeat(200);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("repeated_module", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

fn bench_numbers(c: &mut Criterion) {
    let source = (0..2000)
        .map(|i| format!("{} -{}.{}e-{} ", i, i, i % 97, i % 30))
        .collect::<String>();

    c.bench_function("numbers", |b| b.iter(|| lexer_token_count(black_box(&source))));
}

criterion_group!(benches, bench_lexer_module, bench_lexer_large, bench_numbers);
criterion_main!(benches);
