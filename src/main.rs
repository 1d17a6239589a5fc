//! Ripple8 - CLI Entry Point
//!
//! Commands:
//! - `ripple8 add <A> <B>` - Add two 8-bit binary numbers through the gate-level adder
//! - `ripple8 table <GATE>` - Print the truth table of a gate
//! - `ripple8 demo` - Run the classic demonstration additions

use clap::{Parser, Subcommand};
use ripple8::{add_bytes, Byte, Gate};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "ripple8")]
#[command(version = "0.1.0")]
#[command(about = "A gate-level combinational logic simulator of an 8-bit ripple-carry adder")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two 8-bit binary numbers
    Add {
        /// First operand, 8 binary digits (optional 0b prefix)
        a: String,
        /// Second operand, 8 binary digits (optional 0b prefix)
        b: String,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the truth table of a gate
    Table {
        /// Gate name: xor, and, or
        gate: String,
    },
    /// Run the built-in demonstration additions
    Demo,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Add { a, b, json }) => {
            add_command(&a, &b, json);
        }
        Some(Commands::Table { gate }) => {
            table_command(&gate);
        }
        Some(Commands::Demo) => {
            run_demo();
        }
        None => {
            println!("ripple8 v0.1.0");
            println!("An 8-bit ripple-carry adder simulator");
            println!();
            println!("Use --help for available commands");
        }
    }
}

/// JSON shape of an addition result.
#[derive(Serialize)]
struct AddOutput {
    a: String,
    b: String,
    sum: String,
    carry: u8,
    value: u16,
}

fn add_command(a: &str, b: &str, json: bool) {
    let a = parse_operand(a);
    let b = parse_operand(b);

    let (sum, carry) = add_bytes(&a, &b);
    let value = carry.to_u8() as u16 * 256 + sum.to_u8() as u16;

    if json {
        let output = AddOutput {
            a: a.to_bit_string(),
            b: b.to_bit_string(),
            sum: sum.to_bit_string(),
            carry: carry.to_u8(),
            value,
        };
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("❌ Failed to serialize result: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("  {} ({})", a, a.to_u8());
        println!("+ {} ({})", b, b.to_u8());
        println!("= {} ({}), carry {}", sum, sum.to_u8(), carry);
        if carry.is_one() {
            println!();
            println!("⚠️  Overflow: 9-bit value is {}", value);
        }
    }
}

fn parse_operand(s: &str) -> Byte {
    match Byte::parse(s) {
        Ok(byte) => byte,
        Err(e) => {
            eprintln!("❌ Invalid operand '{}': {}", s, e);
            std::process::exit(1);
        }
    }
}

fn table_command(name: &str) {
    let gate = match name.to_ascii_lowercase().as_str() {
        "xor" => Gate::Xor,
        "and" => Gate::And,
        "or" => Gate::Or,
        _ => {
            eprintln!("❌ Unknown gate '{}' (expected xor, and, or)", name);
            std::process::exit(1);
        }
    };

    println!("a b | {}", gate);
    println!("----+----");
    for (a, b, out) in gate.truth_table() {
        println!("{} {} |  {}", a, b, out);
    }
}

fn run_demo() {
    println!("━━━ Demonstration additions ━━━");
    println!();

    for (a, b) in [(1u8, 2u8), (161, 149), (129, 131)] {
        let x = Byte::from_u8(a);
        let y = Byte::from_u8(b);
        let (sum, carry) = add_bytes(&x, &y);
        let value = carry.to_u8() as u16 * 256 + sum.to_u8() as u16;

        println!("{:>3} + {:>3}: {} + {}", a, b, x, y);
        println!("         = {} carry {} ({})", sum, carry, value);
        println!();
    }
}
