use crate::demo;

use bits::{find_bit_index, more_than_one, BitField};
use clap::{Parser, Subcommand};
use log::{error, warn};
use spatial::options::DEFAULT_BIN_SIZE;

use std::num::ParseIntError;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Log debug output
    #[clap(short, long)]
    pub verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the index of the set bit of single-hot values (decimal, 0x hex or 0b binary)
    Bit {
        #[clap(required = true)]
        values: Vec<String>,
    },
    /// Print the cells occupied in a node's child bit field
    Decode { field: String },
    /// Generate a star system and query it through the spatial tree
    World(WorldArgs),
}

#[derive(clap::Args, Debug)]
pub struct WorldArgs {
    /// Seed of the generated system
    #[clap(long, default_value_t = 3)]
    pub seed: u64,

    /// Upper bound on the number of planets
    #[clap(long, default_value_t = 40)]
    pub planets: u64,

    /// Upper bound on the number of moons per planet
    #[clap(long, default_value_t = 100)]
    pub moons: u64,

    /// Upper bound on the number of asteroids
    #[clap(long, default_value_t = 1_000_000)]
    pub asteroids: u64,

    /// Items per leaf before it is subdivided
    #[clap(long, default_value_t = DEFAULT_BIN_SIZE)]
    pub bin_size: usize,

    /// Number of nearest neighbours to report
    #[clap(short, long, default_value_t = 10)]
    pub k: usize,

    /// Half the edge length, in AU, of the region searched around the search origin
    #[clap(long, default_value_t = 1.0)]
    pub radius: f64,
}

pub fn cmdline(args: Args) {
    match args.command {
        Command::Bit { values } => {
            for s in values {
                match parse_u64(&s) {
                    Ok(v) => {
                        if v == 0 || more_than_one(v) {
                            warn!("{:#x} does not have exactly one bit set", v);
                        }
                        println!("{:#018x} -> {}", v, find_bit_index(v));
                    }
                    Err(e) => error!("could not parse {:?}: {}", s, e),
                }
            }
        }
        Command::Decode { field } => match parse_u64(&field) {
            Ok(v) => {
                let field = BitField(v);
                let cells: Vec<String> = field.map(|c| format!("{}{}", c.0, c)).collect();
                println!("{} cells: {}", field.popcnt(), cells.join(" "));
                println!("{}", field);
            }
            Err(e) => error!("could not parse {:?}: {}", field, e),
        },
        Command::World(world_args) => demo::world(&world_args),
    }
}

/// Parses an unsigned integer written in decimal, or in hex or binary with a `0x` or `0b` prefix.
fn parse_u64(s: &str) -> Result<u64, ParseIntError> {
    let s = s.trim().replace('_', "");
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else if let Some(bin) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
        u64::from_str_radix(bin, 2)
    } else {
        s.parse()
    }
}
