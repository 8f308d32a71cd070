use pedeval::algebra::prelude::*;
use pedeval::algebra::secp256r1::{SECP256R1Scalar, SECP256R1G1};
use pedeval::crypto::polynomial::Polynomial;
use pedeval::crypto::relation::LinearRelation;
use pedeval::parameters::reference_polynomials;
use pedeval::proofs::{check_relation_proof, prove_relation};
use pedeval::setup::{SECP256R1PublicParams, SEED_LEN};
use rand_chacha::ChaChaRng;
use std::error::Error;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(
    name = "pedeval-demo",
    about = "Commit to f, g and h, open them at a Fiat-Shamir challenge u, and check u*f(u) + g(u) = h(u).",
    rename_all = "kebab-case"
)]
struct Options {
    /// Hex-encoded 32-byte seed for the generators. Random when omitted.
    #[structopt(long)]
    seed: Option<String>,

    /// Use the reference polynomials (the default).
    #[structopt(long)]
    reference: bool,

    /// Coefficients of f, lowest degree first, e.g. 4,2,6
    #[structopt(long, use_delimiter = true)]
    poly_f: Option<Vec<u64>>,

    /// Coefficients of g
    #[structopt(long, use_delimiter = true)]
    poly_g: Option<Vec<u64>>,

    /// Coefficients of h
    #[structopt(long, use_delimiter = true)]
    poly_h: Option<Vec<u64>>,
}

fn parse_seed(
    seed: Option<&str>,
    prng: &mut ChaChaRng,
) -> Result<[u8; SEED_LEN], Box<dyn Error>> {
    match seed {
        Some(hex_seed) => {
            let bytes = hex::decode(hex_seed)?;
            let seed: [u8; SEED_LEN] = bytes
                .as_slice()
                .try_into()
                .map_err(|_| format!("the seed must be {} bytes", SEED_LEN))?;
            Ok(seed)
        }
        None => {
            let mut seed = [0u8; SEED_LEN];
            prng.try_fill_bytes(&mut seed)?;
            Ok(seed)
        }
    }
}

fn polynomial(
    name: &str,
    coeffs: &[u64],
) -> Result<Polynomial<SECP256R1Scalar>, Box<dyn Error>> {
    let coeffs: Vec<SECP256R1Scalar> =
        coeffs.iter().map(|c| SECP256R1Scalar::from(*c)).collect();
    Polynomial::from_slice(&coeffs).map_err(|e| format!("{}: {}", name, e).into())
}

fn select_polynomials(
    options: &Options,
) -> Result<[Polynomial<SECP256R1Scalar>; 3], Box<dyn Error>> {
    match (&options.poly_f, &options.poly_g, &options.poly_h) {
        (None, None, None) => Ok(reference_polynomials()),
        (Some(_), Some(_), Some(_)) if options.reference => {
            Err("--reference cannot be combined with custom polynomials".into())
        }
        (Some(f), Some(g), Some(h)) => Ok([
            polynomial("f", f)?,
            polynomial("g", g)?,
            polynomial("h", h)?,
        ]),
        _ => Err("--poly-f, --poly-g and --poly-h must be given together".into()),
    }
}

fn run(options: Options) -> Result<(), Box<dyn Error>> {
    let mut prng = ChaChaRng::from_entropy();
    let seed = parse_seed(options.seed.as_deref(), &mut prng)?;
    let polys = select_polynomials(&options)?;

    let params = SECP256R1PublicParams::from_seed(seed)?;
    println!("seed: {}", hex::encode(params.seed()));
    println!("G: {}", hex::encode(params.gens().G.to_compressed_bytes()));
    println!("B: {}", hex::encode(params.gens().B.to_compressed_bytes()));

    let (proof, u) = prove_relation(&params, &polys, LinearRelation::scaled_sum, &mut prng)?;
    println!("u: {:?}", u);

    let report =
        check_relation_proof::<SECP256R1G1, _>(&params, &proof, LinearRelation::scaled_sum);
    for (name, (opening, ok)) in ["f", "g", "h"]
        .iter()
        .zip(proof.openings.iter().zip(report.openings.iter()))
    {
        println!(
            "{}(u) = {:?}: opening {}",
            name,
            opening.evaluated_value,
            if *ok { "verified" } else { "rejected" }
        );
    }
    println!(
        "u*f(u) + g(u) = h(u): {}",
        if report.relation { "holds" } else { "does not hold" }
    );
    Ok(())
}

fn main() {
    let options = Options::from_args();
    if let Err(e) = run(options) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
