use adif_processor::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(&args) {
        Ok(code) => process::exit(code),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("ADIF Processor - Amateur Radio Logbook Cleaner");
    println!("==============================================");
    println!();
    println!("Parse, sanitize, validate and deduplicate ADIF logbooks, optionally");
    println!("unrolling multi-park POTA contacts into one record per park pairing.");
    println!();
    println!("USAGE:");
    println!("    adif-processor <COMMAND> [OPTIONS] <INPUT>...");
    println!();
    println!("COMMANDS:");
    println!("    process     Run the pipeline and write ADIF or JSON output");
    println!("    lint        Structurally check raw ADIF text");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Clean a log and write ADIF to stdout:");
    println!("    adif-processor process log.adi");
    println!();
    println!("    # Merge activation logs, unroll park references, write a JSON report:");
    println!("    adif-processor process 'activations/*.adi' --mode pota \\");
    println!("                           --morph pota-refs --format json --pretty -o report.json");
    println!();
    println!("    # Check a log before upload:");
    println!("    adif-processor lint --mode pota log.adi");
    println!();
    println!("For detailed help on any command, use:");
    println!("    adif-processor <COMMAND> --help");
}
