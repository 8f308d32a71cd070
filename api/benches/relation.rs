use criterion::{criterion_group, criterion_main, Criterion};
use pedeval::algebra::prelude::*;
use pedeval::algebra::secp256r1::SECP256R1Scalar;
use pedeval::crypto::relation::LinearRelation;
use pedeval::parameters::reference_polynomials;
use pedeval::proofs::{prove_relation, verify_relation_proof};
use pedeval::setup::SECP256R1PublicParams;

fn relation_bench(c: &mut Criterion) {
    let mut prng = test_rng();
    let params = SECP256R1PublicParams::new(&mut prng).unwrap();
    let polys = reference_polynomials::<SECP256R1Scalar>();

    let mut single_group = c.benchmark_group("relation");
    single_group.sample_size(10);

    single_group.bench_function("derive generators".to_string(), |b| {
        b.iter(|| SECP256R1PublicParams::from_seed(*params.seed()).unwrap())
    });

    single_group.bench_function("prove".to_string(), |b| {
        b.iter(|| {
            prove_relation(&params, &polys, LinearRelation::scaled_sum, &mut prng).unwrap()
        })
    });

    let (proof, _) =
        prove_relation(&params, &polys, LinearRelation::scaled_sum, &mut test_rng()).unwrap();
    single_group.bench_function("verify".to_string(), |b| {
        b.iter(|| verify_relation_proof(&params, &proof, LinearRelation::scaled_sum))
    });

    single_group.finish();
}

criterion_group!(benches, relation_bench);
criterion_main!(benches);
