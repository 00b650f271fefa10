mod process;
mod rand_generator;
mod scheduler;
mod stats;
mod utils;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use process::Process;
use rand_generator::RandGenerator;
use scheduler::FcfsScheduler;
use stats::{summarize, Summary};
use utils::{assign_bursts, read_input_file};

fn parse_args() -> (String, String, bool) {
    let matches = Command::new("fcfs-sched")
        .about("Cycle-driven FCFS CPU scheduling simulator")
        .arg(
            Arg::new("inputfile")
                .help("process description file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("rfile")
                .long("rfile")
                .default_value("random-numbers")
                .help("random number feed for CPU burst generation"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("print per-cycle process states"),
        )
        .get_matches();

    (
        matches.get_one::<String>("inputfile").unwrap().clone(),
        matches.get_one::<String>("rfile").unwrap().clone(),
        matches.get_flag("verbose"),
    )
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let (inputfile, rfile, verbose) = parse_args();

    let mut processes = read_input_file(&inputfile)?;
    let randgen = RandGenerator::from_file(&rfile)?;
    assign_bursts(&mut processes, &randgen);

    print_input(&processes);
    println!("\n-------------------------------- FCFS Scheduler --------------------------------");

    let mut sim = FcfsScheduler::new(processes);
    if verbose {
        println!("\nStarting Simulation...");
        while !sim.is_complete() {
            let cycle = sim.current_cycle();
            sim.tick();
            // state fields are settled before bookkeeping, so the post-tick
            // snapshot is the states the processes held during this cycle
            println!("Cycle {} ------------------------------------", cycle);
            for p in sim.processes() {
                println!("Process {}: {}", p.id, p.state);
            }
        }
        println!("---------------------------\nFCFS Scheduling Simulation Ended.");
    } else {
        sim.run();
    }

    print_final(&sim);
    print_process_specifics(sim.processes());
    print_summary(&summarize(
        sim.processes(),
        sim.final_finishing_time(),
        sim.blocked_cycles(),
    ));
    println!("------------------------------------------------------------------------------------");

    Ok(())
}

// echoes the input in original order
fn print_input(processes: &[Process]) {
    print!("Input: {}", processes.len());
    for p in processes {
        print!(
            " ({} {} {} {})",
            p.arrival, p.upper_bound, p.cpu_time, p.multiplier
        );
    }
    println!();
}

// echoes the input sorted by actual finish order
fn print_final(sim: &FcfsScheduler) {
    print!("\nThe (sorted) input is: {}", sim.processes().len());
    for &i in sim.finished_order() {
        let p = &sim.processes()[i];
        print!(
            " ( {} {} {} {})",
            p.arrival, p.upper_bound, p.cpu_time, p.multiplier
        );
    }
    println!();
}

fn print_process_specifics(processes: &[Process]) {
    println!();
    for p in processes {
        println!("Process {}:", p.id);
        println!(
            "\t(A,B,C,M) = ({},{},{},{})",
            p.arrival, p.upper_bound, p.cpu_time, p.multiplier
        );
        println!("\tFinishing time: {}", p.finishing_time);
        println!("\tTurnaround time: {}", p.turnaround());
        println!("\tI/O time: {}", p.total_io_blocked_time);
        println!("\tWaiting time: {}", p.total_waiting_time);
        println!();
    }
}

fn print_summary(summary: &Summary) {
    println!("Summary Data:");
    println!("\tFinishing time: {}", summary.finishing_time);
    println!("\tCPU Utilisation: {:.6}", summary.cpu_utilization);
    println!("\tI/O Utilisation: {:.6}", summary.io_utilization);
    println!(
        "\tThroughput: {:.6} processes per hundred cycles",
        summary.throughput
    );
    println!("\tAverage turnaround time: {:.6}", summary.avg_turnaround_time);
    println!("\tAverage waiting time: {:.6}", summary.avg_waiting_time);
}
