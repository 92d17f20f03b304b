//! slabcut - CLI tool to split a measured slab into instructed cut lengths.

use anyhow::Result;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use slabcut_core::{
    allocate, calculate, compute_marks,
    config::{sanitize_identifier_prefix, DEFAULT_IDENTIFIER_PREFIX, MAX_GUIDES},
    validate_request, Configuration, RawRequest, DEFAULT_CUT_LOSS_MM,
};

/// Split a measured slab into 2-3 instructed cut lengths, spreading the
/// saw-kerf loss and leftover evenly, and print the marking report.
#[derive(Parser, Debug)]
#[command(name = "slabcut")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Measured slab length in millimeters (raw text, validated by the engine)
    #[arg(short, long)]
    slab: String,

    /// Instructed guide length in millimeters (repeat up to three times)
    #[arg(short, long)]
    guide: Vec<String>,

    /// Heat code fragment printed before the dash
    #[arg(long, default_value = "")]
    code_front: String,

    /// Heat code fragment printed after the dash
    #[arg(long, default_value = "")]
    code_back: String,

    /// Material lost to the saw kerf per cut, in millimeters
    #[arg(short, long, default_value_t = DEFAULT_CUT_LOSS_MM)]
    loss: f64,

    /// Round every displayed value to a whole millimeter
    #[arg(long)]
    round: bool,

    /// Omit the " mm" unit suffix from the report
    #[arg(long)]
    no_unit: bool,

    /// Print the marking visualization before the cut lengths
    #[arg(long)]
    swap: bool,

    /// Prefix for the heat code line (alphanumeric only)
    #[arg(long, default_value = DEFAULT_IDENTIFIER_PREFIX)]
    prefix: String,

    /// Output intermediate results as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if args.guide.len() > MAX_GUIDES {
        anyhow::bail!("At most {MAX_GUIDES} guide lengths are supported");
    }
    if args.loss <= 0.0 {
        anyhow::bail!("Cut loss must be positive, got {}", args.loss);
    }

    let mut raw = RawRequest::new(args.slab);
    for (slot, guide) in args.guide.into_iter().enumerate() {
        raw.set_guide(slot, guide);
    }
    raw.code_front = args.code_front;
    raw.code_back = args.code_back;

    let config = Configuration {
        cut_loss: args.loss,
        round_to_integer: args.round,
        hide_unit_suffix: args.no_unit,
        swap_section_order: args.swap,
        identifier_prefix: sanitize_identifier_prefix(&args.prefix),
    };

    // Debug mode dumps the intermediate values instead of the report.
    if args.debug {
        let request = match validate_request(&raw) {
            Ok(request) => request,
            Err(err) => {
                warn!("{err}");
                println!("{}", err.user_message());
                return Ok(());
            }
        };
        let alloc = allocate(&request, config.cut_loss);
        let marks = compute_marks(&alloc, config.cut_loss);
        let dump = serde_json::json!({
            "request": request,
            "allocation": alloc,
            "marking": marks,
        });
        println!("{}", serde_json::to_string_pretty(&dump)?);
        return Ok(());
    }

    debug!("calculating with cut loss {} mm", config.cut_loss);

    // Engine failures are operator-facing text, shown in place of the report.
    match calculate(&raw, &config) {
        Ok(report) => println!("{report}"),
        Err(err) => {
            warn!("{err}");
            println!("{}", err.user_message());
        }
    }

    Ok(())
}
