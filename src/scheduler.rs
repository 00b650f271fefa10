use crate::process::{Process, State};

/// Cycle-stepped FCFS simulation over an owned process table.
///
/// The scheduler is the sole mutator of the table while the run is in
/// progress; once `is_complete` holds, the accessors expose the finished
/// records, the finish order, and the clock for reporting.
pub struct FcfsScheduler {
    processes: Vec<Process>,
    current_cycle: usize,
    finished_order: Vec<usize>,
    blocked_cycles: usize,
}

impl FcfsScheduler {
    pub fn new(processes: Vec<Process>) -> Self {
        FcfsScheduler {
            processes,
            current_cycle: 0,
            finished_order: Vec::new(),
            blocked_cycles: 0,
        }
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Indices of terminated processes, in the order they finished.
    pub fn finished_order(&self) -> &[usize] {
        &self.finished_order
    }

    pub fn blocked_cycles(&self) -> usize {
        self.blocked_cycles
    }

    pub fn current_cycle(&self) -> usize {
        self.current_cycle
    }

    /// Last cycle in which any work happened. Only meaningful once the
    /// simulation is complete; the clock is one past it when the loop exits.
    /// An empty process table completes without a single tick and reports 0.
    pub fn final_finishing_time(&self) -> usize {
        self.current_cycle.saturating_sub(1)
    }

    pub fn is_complete(&self) -> bool {
        self.finished_order.len() == self.processes.len()
    }

    /// Run to completion. Terminates because a running process's remaining
    /// CPU demand strictly decreases every cycle it holds the CPU.
    pub fn run(&mut self) {
        while !self.is_complete() {
            self.tick();
        }
    }

    /// One cycle. Transitions are decided against the state the table had
    /// when the cycle began; bookkeeping then runs on the settled states, so
    /// a process dispatched this cycle is charged for its first cycle of
    /// work, and a process leaving I/O is dispatchable without an idle gap.
    pub fn tick(&mut self) {
        let cycle = self.current_cycle;

        // new arrivals become ready
        for p in self.processes.iter_mut() {
            if p.state == State::Unstarted && p.arrival == cycle {
                p.state = State::Ready;
                p.current_waiting_time = 0;
            }
        }

        // finished I/O bursts become ready
        for p in self.processes.iter_mut() {
            if p.state == State::Blocked && p.remaining_io_burst == 0 {
                p.state = State::Ready;
                p.current_waiting_time = 0;
            }
        }

        // settle the process on the CPU: done, out of burst, or keeps going
        let mut cpu_busy = false;
        let mut finished = None;
        for (i, p) in self.processes.iter_mut().enumerate() {
            if p.state != State::Running {
                continue;
            }
            if p.total_cpu_run_time == p.cpu_time {
                p.state = State::Terminated;
                p.finishing_time = cycle;
                finished = Some(i);
            } else if p.remaining_cpu_burst == 0 {
                p.state = State::Blocked;
                p.remaining_io_burst = p.io_burst;
            } else {
                cpu_busy = true;
            }
            break;
        }
        if let Some(i) = finished {
            self.finished_order.push(i);
        }

        if !cpu_busy {
            self.dispatch();
        }

        // charge every process for the cycle it is about to spend
        for p in self.processes.iter_mut() {
            match p.state {
                State::Running => {
                    p.total_cpu_run_time += 1;
                    p.remaining_cpu_burst -= 1;
                }
                State::Blocked => {
                    p.total_io_blocked_time += 1;
                    // a zero-length I/O burst (multiplier 0) still costs this
                    // one blocked cycle before the process is ready again
                    p.remaining_io_burst = p.remaining_io_burst.saturating_sub(1);
                    self.blocked_cycles += 1;
                }
                State::Ready => {
                    p.current_waiting_time += 1;
                    p.total_waiting_time += 1;
                }
                State::Unstarted | State::Terminated => {}
            }
        }

        self.current_cycle += 1;
    }

    // FCFS: the ready process that has waited longest gets the CPU and a
    // fresh CPU burst; ties go to the lowest id via scan order.
    fn dispatch(&mut self) {
        let mut chosen = None;
        let mut max_wait = 0;
        for (i, p) in self.processes.iter().enumerate() {
            if p.state != State::Ready {
                continue;
            }
            if chosen.is_none() || p.current_waiting_time > max_wait {
                chosen = Some(i);
                max_wait = p.current_waiting_time;
            }
        }
        if let Some(i) = chosen {
            let p = &mut self.processes[i];
            p.state = State::Running;
            p.remaining_cpu_burst = p.cpu_burst;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proc(
        id: usize,
        arrival: usize,
        upper_bound: usize,
        cpu_time: usize,
        multiplier: usize,
        cpu_burst: usize,
    ) -> Process {
        let mut p = Process::new(id, arrival, upper_bound, cpu_time, multiplier);
        p.set_bursts(cpu_burst);
        p
    }

    #[test]
    fn single_process_runs_to_completion() {
        let mut sim = FcfsScheduler::new(vec![proc(0, 0, 10, 3, 2, 3)]);
        sim.run();

        let p = &sim.processes()[0];
        assert_eq!(p.state, State::Terminated);
        assert_eq!(p.finishing_time, 3);
        assert_eq!(p.turnaround(), 3);
        assert_eq!(p.total_cpu_run_time, 3);
        assert_eq!(p.total_waiting_time, 0);
        assert_eq!(sim.final_finishing_time(), 3);
        assert_eq!(sim.finished_order(), &[0]);
    }

    #[test]
    fn lower_id_wins_the_dispatch_tie_at_equal_wait() {
        let mut sim = FcfsScheduler::new(vec![
            proc(0, 0, 10, 2, 1, 2),
            proc(1, 0, 10, 2, 1, 2),
        ]);
        sim.tick();
        assert_eq!(sim.processes()[0].state, State::Running);
        assert_eq!(sim.processes()[1].state, State::Ready);
        assert_eq!(sim.processes()[1].total_waiting_time, 1);

        sim.run();
        assert_eq!(sim.finished_order(), &[0, 1]);
    }

    #[test]
    fn multi_burst_process_round_trips_through_io() {
        // two CPU bursts of 2 around one I/O burst of 2
        let mut sim = FcfsScheduler::new(vec![proc(0, 0, 10, 4, 1, 2)]);
        let mut saw_blocked = false;
        while !sim.is_complete() {
            sim.tick();
            if sim.processes()[0].state == State::Blocked {
                saw_blocked = true;
            }
        }

        let p = &sim.processes()[0];
        assert!(saw_blocked);
        assert_eq!(p.total_io_blocked_time, p.io_burst);
        assert_eq!(p.total_cpu_run_time, 4);
        assert_eq!(p.finishing_time, 6);
    }

    #[test]
    fn at_most_one_process_runs_per_cycle() {
        let mut sim = FcfsScheduler::new(vec![
            proc(0, 0, 5, 6, 2, 3),
            proc(1, 1, 5, 4, 1, 2),
            proc(2, 3, 5, 5, 3, 1),
        ]);
        while !sim.is_complete() {
            sim.tick();
            let running = sim
                .processes()
                .iter()
                .filter(|p| p.state == State::Running)
                .count();
            assert!(running <= 1);
            for p in sim.processes() {
                assert!(p.total_cpu_run_time <= p.cpu_time);
            }
        }
    }

    #[test]
    fn cpu_time_is_fully_consumed_exactly_at_termination() {
        let mut sim = FcfsScheduler::new(vec![
            proc(0, 0, 5, 5, 2, 2),
            proc(1, 2, 5, 3, 1, 3),
        ]);
        sim.run();

        assert_eq!(sim.finished_order().len(), 2);
        for p in sim.processes() {
            assert_eq!(p.state, State::Terminated);
            assert_eq!(p.total_cpu_run_time, p.cpu_time);
        }
        // finish order agrees with finishing times
        let times: Vec<usize> = sim
            .finished_order()
            .iter()
            .map(|&i| sim.processes()[i].finishing_time)
            .collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn late_arrival_stays_unstarted_until_its_cycle() {
        let mut sim = FcfsScheduler::new(vec![proc(0, 3, 10, 2, 1, 2)]);
        sim.tick();
        sim.tick();
        sim.tick();
        assert_eq!(sim.processes()[0].state, State::Unstarted);
        assert_eq!(sim.processes()[0].total_waiting_time, 0);

        // cycle 3: arrives, is dispatched, and is charged its first cycle
        sim.tick();
        assert_eq!(sim.processes()[0].state, State::Running);
        assert_eq!(sim.processes()[0].total_cpu_run_time, 1);

        sim.run();
        assert_eq!(sim.processes()[0].finishing_time, 5);
        assert_eq!(sim.processes()[0].turnaround(), 2);
    }

    #[test]
    fn empty_process_table_completes_immediately() {
        let mut sim = FcfsScheduler::new(Vec::new());
        assert!(sim.is_complete());
        sim.run();
        assert_eq!(sim.current_cycle(), 0);
        assert_eq!(sim.final_finishing_time(), 0);
    }

    #[test]
    fn identical_inputs_give_identical_final_states() {
        let build = || {
            vec![
                proc(0, 0, 10, 5, 2, 2),
                proc(1, 2, 10, 3, 1, 3),
                proc(2, 2, 10, 4, 3, 2),
            ]
        };
        let mut a = FcfsScheduler::new(build());
        let mut b = FcfsScheduler::new(build());
        a.run();
        b.run();

        assert_eq!(a.processes(), b.processes());
        assert_eq!(a.finished_order(), b.finished_order());
        assert_eq!(a.current_cycle(), b.current_cycle());
        assert_eq!(a.blocked_cycles(), b.blocked_cycles());
    }
}
