//! Runs the exercises and prints what they produce.

use std::error::Error;

use clap::{Parser, Subcommand};
use study_collection::challenges::pointers;
use study_collection::collections::contiguous::SliceView;
use study_collection::collections::linked::IntLinkedList;
use study_collection::tour::interfaces::{self, Human, Robot, SelfIdentifier};
use study_collection::tour::structs::Vertex;
use study_collection::util::error::ExerciseError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "study-collection")]
#[command(about = "Runs the study exercises")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a linked list, then delete from it
    Linked {
        /// Values to add, in order
        #[arg(short, long, num_args = 1.., default_values_t = [10, 20, 30])]
        values: Vec<i64>,

        /// Values to delete afterwards, in order
        #[arg(short, long, num_args = 1.., default_values_t = [20])]
        delete: Vec<i64>,
    },

    /// Swap two numbers through references
    Swap {
        #[arg(default_value_t = 5, allow_negative_numbers = true)]
        a: i64,

        #[arg(default_value_t = 10, allow_negative_numbers = true)]
        b: i64,
    },

    /// Double every element of a five element array
    Double {
        #[arg(num_args = 5, default_values_t = [1, 2, 3, 4, 5], allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Reslice a buffer and watch the length and capacity
    Slices,

    /// Print some struct literals
    Structs,

    /// Let a human and a robot introduce themselves
    Interfaces,

    /// Run every exercise with its default input
    All,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("study_collection=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::All) {
        Commands::Linked { values, delete } => linked(&values, &delete),
        Commands::Swap { a, b } => swap(a, b),
        Commands::Double { values } => {
            let arr: [i64; 5] = values
                .try_into()
                .map_err(|_| "double takes exactly five values")?;
            double(arr)?
        },
        Commands::Slices => slices()?,
        Commands::Structs => structs(),
        Commands::Interfaces => introductions(),
        Commands::All => {
            linked(&[10, 20, 30], &[20]);
            swap(5, 10);
            double([1, 2, 3, 4, 5])?;
            slices()?;
            structs();
            introductions();
        },
    }

    Ok(())
}

fn linked(values: &[i64], delete: &[i64]) {
    info!("Running linked list exercise");

    let mut list = IntLinkedList::new();
    for &value in values {
        list.add(value);
    }
    list.print();

    for value in delete {
        if list.delete(value).is_none() {
            warn!("{value} isn't in the list, nothing was deleted");
        }
        list.print();
    }
}

fn swap(mut a: i64, mut b: i64) {
    info!("Running swap exercise");

    println!("Before Swap: a = {a} b = {b}");
    pointers::swap(&mut a, &mut b);
    println!("After Swap: a = {a} b = {b}");
}

fn double(mut arr: [i64; 5]) -> Result<(), ExerciseError> {
    info!("Running double array exercise");

    println!("Original Array: {arr:?}");
    pointers::try_double_array(&mut arr).inspect_err(|error| warn!("{error}"))?;
    println!("Modified Array: {arr:?}");
    Ok(())
}

fn slices() -> Result<(), ExerciseError> {
    info!("Running slices exercise");

    let primes = [2, 3, 5, 7, 11, 13];
    let s = SliceView::new(&primes);
    println!("{}", s.describe());

    let s = s.try_reslice(..0)?;
    println!("{}", s.describe());

    let s = s.try_reslice(..4)?;
    println!("{}", s.describe());

    let s = s.try_reslice(2..)?;
    println!("{}", s.describe());

    let nums = [2, 4, 6, 8, 10];
    for (i, v) in nums.iter().enumerate() {
        println!("Value at {i} is {v}");
    }
    Ok(())
}

fn structs() {
    info!("Running structs exercise");

    let v = Vertex::new(1, 2);
    let v1 = Vertex { x: 1, y: 2 };
    let v2 = Vertex { x: 1, ..Default::default() };
    let v3 = Vertex::default();
    let p = Box::new(Vertex::new(1, 2));

    println!("{}", v.x);
    println!("{v1} {v2} {v3} &{p}");
}

fn introductions() {
    info!("Running interfaces exercise");

    let h = Human { name: String::from("John Smith") };
    let r = Robot { serial_number: 4269 };

    let entities: Vec<Box<dyn SelfIdentifier>> = vec![Box::new(h), Box::new(r)];
    for line in interfaces::introduce_all(&entities) {
        println!("{line}");
    }
}
