//! Unit test modules.

mod axis_ticks_test;
mod goal_progress_test;
mod period_filter_test;
mod series_test;
