use crate::process::Process;
use crate::rand_generator::RandGenerator;
use anyhow::{bail, Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::debug;

// The input file carries the process count followed by one parenthesized
// (A B C M) tuple per process: arrival time, burst upper bound, total CPU
// time, I/O multiplier. Tuples are whitespace separated and may span lines.
pub fn parse_input(contents: &str) -> Result<Vec<Process>> {
    let count: usize = contents
        .split_whitespace()
        .next()
        .context("input is empty")?
        .parse()
        .context("process count is not an integer")?;

    let tuple_re = Regex::new(r"\(\s*(\d+)\s+(\d+)\s+(\d+)\s+(\d+)\s*\)").unwrap();
    let mut processes = Vec::new();
    for (id, cap) in tuple_re.captures_iter(contents).enumerate() {
        let arrival: usize = cap[1].parse()?;
        let upper_bound: usize = cap[2].parse()?;
        let cpu_time: usize = cap[3].parse()?;
        let multiplier: usize = cap[4].parse()?;

        // the burst modulus needs a positive bound, and a zero-CPU process
        // could never satisfy the termination condition
        if upper_bound == 0 {
            bail!("process {id}: burst upper bound must be at least 1");
        }
        if cpu_time == 0 {
            bail!("process {id}: total CPU time must be at least 1");
        }
        processes.push(Process::new(id, arrival, upper_bound, cpu_time, multiplier));
    }

    if processes.len() != count {
        bail!(
            "input declares {} processes but contains {}",
            count,
            processes.len()
        );
    }
    Ok(processes)
}

pub fn read_input_file(path: impl AsRef<Path>) -> Result<Vec<Process>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to open input file {}", path.display()))?;
    let processes = parse_input(&contents)?;
    debug!(count = processes.len(), file = %path.display(), "loaded process list");
    Ok(processes)
}

/// Draw each process's CPU burst and fix the derived I/O burst. One draw per
/// process, before the simulation starts.
pub fn assign_bursts(processes: &mut [Process], randgen: &RandGenerator) {
    for p in processes.iter_mut() {
        let burst = randgen.burst(p.upper_bound, p.id);
        p.set_bursts(burst);
        debug!(process = p.id, cpu_burst = burst, io_burst = p.io_burst, "assigned bursts");
    }
}
