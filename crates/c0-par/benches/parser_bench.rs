//! Parser benchmarks.
//!
//! Run with: `cargo bench --package c0-par`

use c0_lex::Lexer;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn parse_source(source: &str) -> c0_par::Ast {
    let tokens = Lexer::new(source).all_tokens().unwrap();
    c0_par::parse(&tokens).unwrap()
}

fn bench_parser_declarations(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_declarations");

    let source = "int a = 1; double b = 2.5; char c = 'x'; const int d = 4;";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("declarations", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_function_body(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_function_body");

    let source = r#"
        int fib(int n) {
            if (n < 2) {
                return n;
            }
            return fib(n - 1) + fib(n - 2);
        }
    "#;
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("fibonacci", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_control_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_control_flow");

    let source = r#"
        int process(int n) {
            int sum;
            sum = 0;
            for (i = 0; i < n; i = i + 1) {
                switch (i) {
                    case 0: sum = sum + 1;
                    case 1: sum = sum + 2;
                    default: sum = sum + i;
                }
            }
            while (sum > 1000) {
                sum = sum / 2;
            }
            do {
                sum = sum - 1;
            } while (sum > 0);
            return sum;
        }
    "#;
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("control_flow", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_expressions(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_expressions");

    let source = "int x = (1 + 2) * 3 - 4 / (5 + 6) + (double) 7 * -8;";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("nested_expressions", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_whole_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_whole_program");

    let source = r#"
        int total;
        const int LIMIT = 100;

        int square(int x) {
            return x * x;
        }

        void report(int n) {
            print("n = ", n, ", square = ", square(n));
        }

        int main() {
            int i;
            total = 0;
            for (i = 0; i < LIMIT; i = i + 1) {
                total = total + square(i);
            }
            report(total);
            return 0;
        }
    "#;
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("whole_program", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

criterion_group!(
    benches,
    bench_parser_declarations,
    bench_parser_function_body,
    bench_parser_control_flow,
    bench_parser_expressions,
    bench_parser_whole_program,
);
criterion_main!(benches);
