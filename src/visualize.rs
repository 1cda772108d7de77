use std::{
    io::{Stdout, Write},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use crossterm::{cursor, queue, terminal};

use crate::{
    error::{MazeError, Result},
    maze::Grid,
};

/// Receives a snapshot of the grid after every mutating step of a generator or solver.
/// Implementations must not assume anything about the algorithm that produced the snapshot.
pub trait Visualizer {
    fn render(&mut self, grid: &Grid, delay: Duration);
}

/// Discards every snapshot. Used for tests and profiling.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopVisualizer;

impl Visualizer for NoopVisualizer {
    fn render(&mut self, _grid: &Grid, _delay: Duration) {}
}

/// Redraws the whole grid on the terminal and sleeps for the step delay.
pub struct TerminalVisualizer {
    stdout: Stdout,
}

impl TerminalVisualizer {
    pub fn new() -> Self {
        Self {
            stdout: std::io::stdout(),
        }
    }

    fn draw(&mut self, grid: &Grid) -> std::io::Result<()> {
        queue!(
            self.stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;
        write!(self.stdout, "{}", grid)?;
        self.stdout.flush()
    }
}

impl Default for TerminalVisualizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualizer for TerminalVisualizer {
    fn render(&mut self, grid: &Grid, delay: Duration) {
        // A broken terminal must not abort the algorithm that is driving the animation
        if let Err(err) = self.draw(grid) {
            tracing::warn!("[visualize] failed to draw grid: {}", err);
        }
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Per-step hook handed to every generator and solver.
///
/// Forwards grid snapshots to the visualizer and reports whether the run was cancelled
/// through the shared flag.
pub struct Stepper<'a> {
    visualizer: &'a mut dyn Visualizer,
    delay: Duration,
    cancel: Option<Arc<AtomicBool>>,
    steps: usize,
}

impl<'a> Stepper<'a> {
    pub fn new(visualizer: &'a mut dyn Visualizer, delay: Duration) -> Self {
        Self {
            visualizer,
            delay,
            cancel: None,
            steps: 0,
        }
    }

    /// Attach a flag that aborts the run once it is set to true.
    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Returns `Err(Cancelled)` when the cancellation flag has been raised.
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(MazeError::Cancelled)
        } else {
            Ok(())
        }
    }

    pub fn render(&mut self, grid: &Grid) {
        self.steps += 1;
        self.visualizer.render(grid, self.delay);
    }

    /// Number of snapshots rendered so far.
    pub fn steps(&self) -> usize {
        self.steps
    }
}


#[cfg(test)]
mod tests {
    use super::{test_utils::CancelAfter, *};
    use crate::maze::Cell;

    #[derive(Default)]
    struct Recorder {
        snapshots: Vec<String>,
    }

    impl Visualizer for Recorder {
        fn render(&mut self, grid: &Grid, _delay: Duration) {
            self.snapshots.push(grid.to_text());
        }
    }

    #[test]
    fn test_stepper_forwards_snapshots() {
        let mut recorder = Recorder::default();
        let mut grid = Grid::new(3, 1, Cell::Wall);
        {
            let mut stepper = Stepper::new(&mut recorder, Duration::ZERO);
            stepper.render(&grid);
            grid[(1, 0)] = Cell::Empty;
            stepper.render(&grid);
            assert_eq!(stepper.steps(), 2);
        }
        assert_eq!(recorder.snapshots, vec!["###", "# #"]);
    }

    #[test]
    fn test_stepper_cancellation() {
        let mut visualizer = NoopVisualizer;
        let cancel = Arc::new(AtomicBool::new(false));
        let stepper = Stepper::new(&mut visualizer, Duration::ZERO).with_cancel(cancel.clone());
        assert!(stepper.check().is_ok());
        cancel.store(true, Ordering::Relaxed);
        assert_eq!(stepper.check(), Err(MazeError::Cancelled));
    }

    #[test]
    fn test_cancel_raised_from_render() {
        let cancel = Arc::new(AtomicBool::new(false));
        let mut visualizer = CancelAfter::new(2, cancel.clone());
        let mut stepper = Stepper::new(&mut visualizer, Duration::ZERO).with_cancel(cancel);
        let grid = Grid::new(3, 3, Cell::Wall);
        stepper.render(&grid);
        assert!(stepper.check().is_ok());
        stepper.render(&grid);
        assert_eq!(stepper.check(), Err(MazeError::Cancelled));
    }
}
