use std::io::Write;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use crate::enums::proxy_outcome::ProxyOutcome;
use crate::structs::analysis_query::AnalysisQuery;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL: Duration = Duration::from_millis(150);

/// Stderr progress line for one `fetch` call: which query is in flight and
/// how much of the timeout budget it has used so far.
pub struct AnalysisSpinner {
    label: String,
    budget: Duration,
    started: Instant,
    ticker: Option<(oneshot::Sender<()>, JoinHandle<()>)>,
}

impl AnalysisSpinner {
    pub fn new(query: &AnalysisQuery, budget: Duration) -> Self {
        Self {
            label: format!("Analyzing '{}' (limit {})", query.topic(), query.limit()),
            budget,
            started: Instant::now(),
            ticker: None,
        }
    }

    pub fn start(&mut self) {
        let (stop_tx, mut stop_rx) = oneshot::channel();
        let label = self.label.clone();
        let budget = self.budget;
        self.started = Instant::now();
        let started = self.started;

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(FRAME_INTERVAL);
            for frame in FRAMES.iter().cycle() {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r{}", progress_line(&label, frame, started.elapsed(), budget));
                        let _ = std::io::stderr().flush();
                    }
                    _ = &mut stop_rx => break,
                }
            }
        });

        self.ticker = Some((stop_tx, handle));
    }

    /// Stops the animation and replaces it with a one-line summary of `outcome`.
    pub async fn finish(&mut self, outcome: &ProxyOutcome) {
        if let Some((stop_tx, handle)) = self.ticker.take() {
            let _ = stop_tx.send(());
            let _ = handle.await;
        }

        eprintln!("\r\x1b[K{}", summary_line(&self.label, outcome, self.started.elapsed(), self.budget));
        let _ = std::io::stderr().flush();
    }
}

fn progress_line(label: &str, frame: &str, elapsed: Duration, budget: Duration) -> String {
    format!("{} {} {:.1}s / {}s ", label, frame, elapsed.as_secs_f64(), budget.as_secs())
}

fn summary_line(label: &str, outcome: &ProxyOutcome, elapsed: Duration, budget: Duration) -> String {
    match outcome {
        ProxyOutcome::Success(result) => format!(
            "✅ {}: {} fields in {:.2}s of {}s",
            label, result.len(), elapsed.as_secs_f64(), budget.as_secs()
        ),
        ProxyOutcome::Failure(reason) => format!("❌ {}: {} ({:.2}s)", label, reason, elapsed.as_secs_f64()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::analysis_result::AnalysisResult;

    #[test]
    fn label_names_the_query() {
        let query = AnalysisQuery::new("  crude oil ", 25).unwrap();

        let spinner = AnalysisSpinner::new(&query, Duration::from_secs(10));

        assert_eq!(spinner.label, "Analyzing 'crude oil' (limit 25)");
    }

    #[test]
    fn progress_shows_elapsed_against_budget() {
        let line = progress_line("Analyzing 'gold' (limit 10)", "⠙", Duration::from_millis(1300), Duration::from_secs(10));

        assert_eq!(line, "Analyzing 'gold' (limit 10) ⠙ 1.3s / 10s ");
    }

    #[test]
    fn summary_reports_fields_or_reason() {
        let result: AnalysisResult = serde_json::from_str(r#"{"topic": "gold", "posts": []}"#).unwrap();
        let success = summary_line("gold", &ProxyOutcome::Success(result), Duration::from_millis(500), Duration::from_secs(10));
        assert_eq!(success, "✅ gold: 2 fields in 0.50s of 10s");

        let failure = summary_line(
            "gold",
            &ProxyOutcome::failure("network error: timeout after 10000ms"),
            Duration::from_secs(10),
            Duration::from_secs(10),
        );
        assert_eq!(failure, "❌ gold: network error: timeout after 10000ms (10.00s)");
    }

    #[tokio::test]
    async fn finish_stops_the_ticker() {
        let query = AnalysisQuery::new("gold", 10).unwrap();
        let mut spinner = AnalysisSpinner::new(&query, Duration::from_secs(1));

        spinner.start();
        spinner.finish(&ProxyOutcome::failure("cancelled")).await;

        assert!(spinner.ticker.is_none());
    }
}
