//! Periodic tasks driven by the GTK main loop.
//!
//! The overlay runs two independent timers: a fast one that advances the
//! rainbow hue and a slower one that refreshes the clock text. Both fire on
//! the UI thread and can be started, restarted and stopped on their own.

use std::time::Duration;

use relm4::gtk::glib::{self, ControlFlow, SourceId};
use tracing::debug;

/// Default period of the rainbow color tick.
pub const COLOR_TICK: Duration = Duration::from_millis(80);

/// Default period of the clock text tick.
pub const TIME_TICK: Duration = Duration::from_millis(200);

/// Periods for the two overlay timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickPeriods {
    /// How often the hue advances while the rainbow effect is on.
    pub color: Duration,
    /// How often the clock text is refreshed.
    pub time: Duration,
}

impl Default for TickPeriods {
    fn default() -> Self {
        Self {
            color: COLOR_TICK,
            time: TIME_TICK,
        }
    }
}

/// How a task has to change to match whether it should be running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskChange {
    /// Idle but wanted.
    Start,
    /// Running but no longer wanted.
    Stop,
    /// Already in the wanted state.
    Keep,
}

impl TaskChange {
    /// Change needed to go from `running` to `wanted`.
    pub fn between(running: bool, wanted: bool) -> Self {
        match (running, wanted) {
            (false, true) => TaskChange::Start,
            (true, false) => TaskChange::Stop,
            _ => TaskChange::Keep,
        }
    }
}

/// A repeating callback on the thread-default main context.
///
/// At most one timer source is live per task. Starting a running task
/// replaces its source, and dropping the task removes it.
#[derive(Debug)]
pub struct PeriodicTask {
    name: &'static str,
    period: Duration,
    source: Option<SourceId>,
}

impl PeriodicTask {
    /// Creates an idle task. Nothing is scheduled until [`start`](Self::start).
    pub fn new(name: &'static str, period: Duration) -> Self {
        Self {
            name,
            period,
            source: None,
        }
    }

    /// Schedules `tick` to run every period, replacing any running source.
    ///
    /// Must be called from the thread that owns the default main context.
    pub fn start<F>(&mut self, mut tick: F)
    where
        F: FnMut() + 'static,
    {
        self.stop();
        debug!(task = self.name, period_ms = self.period.as_millis(), "starting periodic task");

        let source = glib::timeout_add_local(self.period, move || {
            tick();
            ControlFlow::Continue
        });
        self.source = Some(source);
    }

    /// Removes the scheduled source. Stopping an idle task does nothing.
    pub fn stop(&mut self) {
        if let Some(source) = self.source.take() {
            debug!(task = self.name, "stopping periodic task");
            source.remove();
        }
    }

    /// Current period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether a timer source is currently scheduled.
    pub fn is_running(&self) -> bool {
        self.source.is_some()
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The overlay's pair of independently controlled timers.
#[derive(Debug)]
pub struct Scheduler {
    /// Rainbow hue tick.
    pub color: PeriodicTask,
    /// Clock text tick.
    pub time: PeriodicTask,
}

impl Scheduler {
    /// Creates both tasks idle with the given periods.
    pub fn new(periods: TickPeriods) -> Self {
        Self {
            color: PeriodicTask::new("color", periods.color),
            time: PeriodicTask::new("time", periods.time),
        }
    }

    /// Stops both tasks.
    pub fn stop_all(&mut self) {
        self.color.stop();
        self.time.stop();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::{
        cell::Cell,
        rc::Rc,
        sync::{Mutex, PoisonError},
        time::Instant,
    };

    use super::*;

    // Only one thread at a time may own the default main context.
    static MAIN_CONTEXT: Mutex<()> = Mutex::new(());

    fn counting(ticks: &Rc<Cell<u32>>) -> impl FnMut() + 'static {
        let ticks = Rc::clone(ticks);
        move || ticks.set(ticks.get() + 1)
    }

    fn iterate_until(context: &glib::MainContext, mut done: impl FnMut() -> bool) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !done() {
            assert!(Instant::now() < deadline, "timed out waiting for ticks");
            context.iteration(true);
        }
    }

    fn fast_periods() -> TickPeriods {
        TickPeriods {
            color: Duration::from_millis(5),
            time: Duration::from_millis(10),
        }
    }

    #[test]
    fn default_periods() {
        let periods = TickPeriods::default();

        assert_eq!(periods.color, Duration::from_millis(80));
        assert_eq!(periods.time, Duration::from_millis(200));
    }

    #[test]
    fn new_tasks_are_idle() {
        let scheduler = Scheduler::new(TickPeriods::default());

        assert!(!scheduler.color.is_running());
        assert!(!scheduler.time.is_running());
        assert_eq!(scheduler.color.period(), COLOR_TICK);
        assert_eq!(scheduler.time.period(), TIME_TICK);
    }

    #[test]
    fn stopping_idle_tasks_is_a_no_op() {
        let mut scheduler = Scheduler::new(TickPeriods::default());

        scheduler.color.stop();
        scheduler.stop_all();

        assert!(!scheduler.color.is_running());
        assert!(!scheduler.time.is_running());
    }

    #[test]
    fn task_change_follows_wanted_state() {
        assert_eq!(TaskChange::between(false, true), TaskChange::Start);
        assert_eq!(TaskChange::between(true, false), TaskChange::Stop);
        assert_eq!(TaskChange::between(true, true), TaskChange::Keep);
        assert_eq!(TaskChange::between(false, false), TaskChange::Keep);
    }

    #[test]
    fn tasks_tick_and_stop_independently() {
        let _lock = MAIN_CONTEXT.lock().unwrap_or_else(PoisonError::into_inner);
        let context = glib::MainContext::default();
        let _owner = context.acquire().unwrap();

        let mut scheduler = Scheduler::new(fast_periods());
        let color_ticks = Rc::new(Cell::new(0));
        let time_ticks = Rc::new(Cell::new(0));

        scheduler.color.start(counting(&color_ticks));
        scheduler.time.start(counting(&time_ticks));
        iterate_until(&context, || color_ticks.get() > 0 && time_ticks.get() > 0);

        scheduler.color.stop();
        assert!(!scheduler.color.is_running());
        assert!(scheduler.time.is_running());

        let color_at_stop = color_ticks.get();
        let time_at_stop = time_ticks.get();
        iterate_until(&context, || time_ticks.get() >= time_at_stop + 3);

        assert_eq!(color_ticks.get(), color_at_stop);

        scheduler.stop_all();
    }

    #[test]
    fn restart_replaces_previous_source() {
        let _lock = MAIN_CONTEXT.lock().unwrap_or_else(PoisonError::into_inner);
        let context = glib::MainContext::default();
        let _owner = context.acquire().unwrap();

        let mut task = PeriodicTask::new("color", Duration::from_millis(5));
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        task.start(counting(&first));
        iterate_until(&context, || first.get() > 0);

        task.start(counting(&second));
        // The old callback is released as soon as its source is removed.
        assert_eq!(Rc::strong_count(&first), 1);
        assert_eq!(Rc::strong_count(&second), 2);

        let first_at_restart = first.get();
        iterate_until(&context, || second.get() >= 3);

        assert_eq!(first.get(), first_at_restart);
        assert!(task.is_running());

        task.stop();
        assert_eq!(Rc::strong_count(&second), 1);
    }

    #[test]
    fn dropping_a_task_removes_its_source() {
        let _lock = MAIN_CONTEXT.lock().unwrap_or_else(PoisonError::into_inner);
        let context = glib::MainContext::default();
        let _owner = context.acquire().unwrap();

        let ticks = Rc::new(Cell::new(0));
        let mut task = PeriodicTask::new("time", Duration::from_millis(5));
        task.start(counting(&ticks));
        iterate_until(&context, || ticks.get() > 0);

        drop(task);

        assert_eq!(Rc::strong_count(&ticks), 1);
    }
}
