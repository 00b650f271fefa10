use std::fmt;

/// Lifecycle of a simulated process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Unstarted,
    Ready,
    Running,
    Blocked,
    Terminated,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::Unstarted => "UNSTARTED",
            State::Ready => "READY",
            State::Running => "RUNNING",
            State::Blocked => "BLOCKED",
            State::Terminated => "TERMINATED",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub id: usize,
    pub arrival: usize,     // A
    pub upper_bound: usize, // B
    pub cpu_time: usize,    // C
    pub multiplier: usize,  // M

    pub cpu_burst: usize,
    pub io_burst: usize,

    pub state: State,
    pub remaining_cpu_burst: usize,
    pub remaining_io_burst: usize,
    pub current_waiting_time: usize,

    pub total_cpu_run_time: usize,
    pub total_io_blocked_time: usize,
    pub total_waiting_time: usize,
    pub finishing_time: usize,
}

impl Process {
    pub fn new(
        id: usize,
        arrival: usize,
        upper_bound: usize,
        cpu_time: usize,
        multiplier: usize,
    ) -> Process {
        Process {
            id,
            arrival,
            upper_bound,
            cpu_time,
            multiplier,
            cpu_burst: 0,
            io_burst: 0,
            state: State::Unstarted,
            remaining_cpu_burst: 0,
            remaining_io_burst: 0,
            current_waiting_time: 0,
            total_cpu_run_time: 0,
            total_io_blocked_time: 0,
            total_waiting_time: 0,
            finishing_time: 0,
        }
    }

    /// Fix the burst lengths once the generator has drawn for this process.
    pub fn set_bursts(&mut self, cpu_burst: usize) {
        self.cpu_burst = cpu_burst;
        self.io_burst = cpu_burst * self.multiplier;
        self.remaining_cpu_burst = self.cpu_burst;
        self.remaining_io_burst = self.io_burst;
    }

    pub fn turnaround(&self) -> usize {
        self.finishing_time - self.arrival
    }
}
