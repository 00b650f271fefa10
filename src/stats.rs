use crate::process::Process;

/// Aggregate metrics over a finished simulation.
#[derive(Debug)]
pub struct Summary {
    pub finishing_time: usize,
    pub cpu_utilization: f64,
    pub io_utilization: f64,
    /// Completed processes per hundred cycles.
    pub throughput: f64,
    pub avg_turnaround_time: f64,
    pub avg_waiting_time: f64,
}

/// Reduce the finished process table to the summary metrics. Blocked cycles
/// come from the scheduler's counter rather than being re-derived here.
///
/// A zero-length simulation has no meaningful rates: the utilization and
/// throughput figures come out as NaN instead of a fake zero, and likewise
/// the averages over an empty process set.
pub fn summarize(
    processes: &[Process],
    final_finishing_time: usize,
    blocked_cycles: usize,
) -> Summary {
    let mut total_cpu = 0;
    let mut total_waiting = 0;
    let mut total_turnaround = 0;
    for p in processes {
        total_cpu += p.total_cpu_run_time;
        total_waiting += p.total_waiting_time;
        total_turnaround += p.turnaround();
    }

    let count = processes.len();
    let length = final_finishing_time as f64;
    let (cpu_utilization, io_utilization, throughput) = if final_finishing_time == 0 {
        (f64::NAN, f64::NAN, f64::NAN)
    } else {
        (
            total_cpu as f64 / length,
            blocked_cycles as f64 / length,
            100.0 * count as f64 / length,
        )
    };
    let (avg_turnaround_time, avg_waiting_time) = if count == 0 {
        (f64::NAN, f64::NAN)
    } else {
        (
            total_turnaround as f64 / count as f64,
            total_waiting as f64 / count as f64,
        )
    };

    Summary {
        finishing_time: final_finishing_time,
        cpu_utilization,
        io_utilization,
        throughput,
        avg_turnaround_time,
        avg_waiting_time,
    }
}
