use crate::deduce::{Deduction, DeductionError};
use crate::gum::{ContentKind, Machine, ALL_KINDS};
use crate::search::{Configuration, SearchError};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

mod deduce;
mod gum;
mod purchase;
mod search;

const SEED_VARIABLE: &str = "GUMBALL_SEED";

#[derive(Debug, PartialEq)]
pub enum PuzzleError {
    Search(SearchError),
    Deduction(DeductionError),
}

impl From<SearchError> for PuzzleError {
    fn from(err: SearchError) -> Self {
        PuzzleError::Search(err)
    }
}

impl From<DeductionError> for PuzzleError {
    fn from(err: DeductionError) -> Self {
        PuzzleError::Deduction(err)
    }
}

pub struct Solution {
    pub configuration: Configuration,
    pub purchased_from: Machine,
    pub deduction: Deduction,
}

fn solve<R: Rng>(rng: &mut R) -> Result<Solution, PuzzleError> {
    solve_with(&ALL_KINDS, rng)
}

// Nothing is bought unless a configuration was found.
fn solve_with<R: Rng>(kinds: &[ContentKind], rng: &mut R) -> Result<Solution, PuzzleError> {
    let configuration = search::find_configuration(kinds)?;

    let purchased_from = configuration[search::PURCHASE_SLOT];
    let drawn = purchase::buy_gum(&purchased_from, rng);
    let deduction = deduce::deduce(drawn, &configuration)?;

    Ok(Solution {
        configuration,
        purchased_from,
        deduction,
    })
}

fn print_solution(solution: &Solution) {
    println!("Found a valid machine configuration:");
    for machine in &solution.configuration {
        println!("- Machine labelled {:<15} actually holds: {}", format!("\"{}\"", machine.label), machine.actual);
    }

    println!("\nBuying a gumball from the \"{}\" machine...", solution.purchased_from.label);
    println!("Result: got a gumball that is {}", solution.deduction.drawn);

    println!("\nDeducing the contents of every machine:");
    print!("{}", solution.deduction);
}

fn failure_message(err: &PuzzleError) -> String {
    match err {
        PuzzleError::Search(SearchError::NoValidConfiguration { checked }) => {
            format!("Couldn't find a valid configuration ({} candidates checked)", checked)
        }
        PuzzleError::Deduction(DeductionError::ImpossibleDraw(kind)) => {
            format!("Couldn't deduce anything: a gumball can't be {}", kind)
        }
        PuzzleError::Deduction(DeductionError::Ambiguous { label, candidates }) => {
            format!("Couldn't deduce the \"{}\" machine: it could hold any of {:?}", label, candidates)
        }
        PuzzleError::Deduction(DeductionError::Contradiction { label }) => {
            format!("Couldn't deduce the \"{}\" machine: nothing is left for it", label)
        }
    }
}

fn get_seed() -> u64 {
    if let Ok(value) = env::var(SEED_VARIABLE) {
        match value.trim().parse() {
            Ok(seed) => return seed,
            Err(err) => warn!("Ignoring {}={:?}: {}", SEED_VARIABLE, value, err),
        }
    }

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() ^ u64::from(elapsed.subsec_nanos()))
        .unwrap_or_default()
}

fn main() {
    env_logger::init();

    let seed = get_seed();
    info!("random seed: {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    match solve(&mut rng) {
        Ok(solution) => print_solution(&solution),
        Err(err) => println!("{}", failure_message(&err)),
    }
}
