use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use mmusim::mmu::{Mmu, MmuConfig, MmuError, MmuEvent, MmuObserver, MmuStats, ReplacementPolicy};
use mmusim::trace::{self, TraceRecord};

#[derive(Parser)]
#[command(author, version, about = "mmusim - replay a memory trace through a simulated MMU")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a trace with one replacement policy
    Run {
        /// Trace file of `<hex address> <R|W>` lines
        trace_file: PathBuf,

        /// Number of physical frames
        frames: usize,

        /// Replacement policy: rand, lru or clock
        #[arg(value_parser = parse_policy)]
        policy: ReplacementPolicy,

        /// Output mode
        #[arg(value_enum, default_value_t = Mode::Quiet)]
        mode: Mode,

        /// Seed for the random policy
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the counters as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay a trace with every policy and compare the counters
    Compare {
        /// Trace file of `<hex address> <R|W>` lines
        trace_file: PathBuf,

        /// Number of physical frames
        frames: usize,

        /// Seed for the random policy
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// First arguments that clap handles itself; anything else is a bare `run` invocation
const EXPLICIT_COMMANDS: [&str; 3] = ["run", "compare", "help"];

fn parse_policy(s: &str) -> std::result::Result<ReplacementPolicy, MmuError> {
    s.parse()
}

/// Route `mmusim <trace_file> <frames> <policy> ...` to the `run` subcommand
fn with_default_command(mut args: Vec<OsString>) -> Vec<OsString> {
    let explicit = match args.get(1).and_then(|arg| arg.to_str()) {
        Some(first) => first.starts_with('-') || EXPLICIT_COMMANDS.contains(&first),
        None => true,
    };
    if !explicit {
        args.insert(1, OsString::from("run"));
    }
    args
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Quiet,
    Debug,
}

/// Prints every MMU event to stdout
struct PrintObserver;

impl MmuObserver for PrintObserver {
    fn on_event(&mut self, event: &MmuEvent) {
        match event {
            MmuEvent::Hit { page, kind } => println!("DEBUG: Access {} page {}", kind, page),
            MmuEvent::Fault { page, .. } => println!("DEBUG: Page fault at page {}", page),
            MmuEvent::UseBitCleared { page, .. } => {
                println!("DEBUG: Clear use bit for page {}", page)
            }
            MmuEvent::Evicted { page, dirty, .. } => {
                if *dirty {
                    println!("DEBUG: Write page {} to disk", page);
                }
                println!("DEBUG: Evict page {}", page);
            }
            MmuEvent::Loaded { page, frame } => {
                println!("DEBUG: Load page {} into frame {}", page, frame)
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse_from(with_default_command(std::env::args_os().collect()));

    match cli.command {
        Commands::Run {
            trace_file,
            frames,
            policy,
            mode,
            seed,
            json,
        } => {
            let records = load_trace(&trace_file)?;
            let config = build_config(frames, policy, seed);
            let mut mmu = Mmu::new(config).context("Invalid MMU configuration")?;
            if mode == Mode::Debug {
                mmu.set_observer(Box::new(PrintObserver));
            }

            let events = trace::replay(&mut mmu, &records);
            let stats = mmu.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print_report(frames, events, &stats);
            }
        }
        Commands::Compare {
            trace_file,
            frames,
            seed,
        } => {
            let records = load_trace(&trace_file)?;
            println!("total memory frames:  {}", frames);
            println!("events in trace:      {}", records.len());
            println!();
            println!(
                "{:<8} {:>12} {:>12} {:>12} {:>10}",
                "policy", "faults", "disk reads", "disk writes", "fault rate"
            );
            let policies = [
                ReplacementPolicy::Random,
                ReplacementPolicy::Lru,
                ReplacementPolicy::Clock,
            ];
            for policy in policies {
                let mut mmu = Mmu::new(build_config(frames, policy, seed))
                    .context("Invalid MMU configuration")?;
                trace::replay(&mut mmu, &records);
                let stats = mmu.stats();
                println!(
                    "{:<8} {:>12} {:>12} {:>12} {:>10.4}",
                    policy.to_string(),
                    stats.page_faults,
                    stats.disk_reads,
                    stats.disk_writes,
                    stats.fault_rate()
                );
            }
        }
    }

    Ok(())
}

fn load_trace(path: &Path) -> Result<Vec<TraceRecord>> {
    trace::parse_trace_file(path)
        .with_context(|| format!("Failed to read trace {}", path.display()))
}

fn build_config(frames: usize, policy: ReplacementPolicy, seed: Option<u64>) -> MmuConfig {
    let config = MmuConfig::new(frames, policy);
    match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}

fn print_report(frames: usize, events: usize, stats: &MmuStats) {
    println!("total memory frames:  {}", frames);
    println!("events in trace:      {}", events);
    println!("total disk reads:     {}", stats.disk_reads);
    println!("total disk writes:    {}", stats.disk_writes);
    println!("page fault rate:      {:.4}", stats.fault_rate());
}
