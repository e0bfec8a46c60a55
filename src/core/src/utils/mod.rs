use log::debug;
use std::time::Instant;

pub struct TimeEstimation;

impl TimeEstimation {
    /// Runs the function and returns its result together with the elapsed
    /// wall-clock milliseconds.
    pub fn estimate<T, F: FnOnce() -> T>(function: F) -> (T, u32) {
        let now = Instant::now();

        let result = function();

        (result, now.elapsed().as_millis() as u32)
    }
}

pub struct Logging;

impl Logging {
    pub fn estimate_result<T, F: FnOnce() -> T>(function: F, message: &str) -> T {
        let (result, estimated) = TimeEstimation::estimate(function);

        debug!("{}: {} ms", message, estimated);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_returns_the_function_result() {
        let (result, _) = TimeEstimation::estimate(|| 21 * 2);

        assert_eq!(result, 42);
    }

    #[test]
    fn estimate_result_passes_the_value_through() {
        let result = Logging::estimate_result(|| String::from("done"), "test run");

        assert_eq!(result, "done");
    }
}
