use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Trade setup shown on the technical analysis page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalAnalysisReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub analysis_date: NaiveDate,
    pub signals_detected: Vec<String>,
    pub entry: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub risk_reward: String,
}

// Fixed content; nothing here is computed.
static SAMPLE_REPORT: Lazy<TechnicalAnalysisReport> = Lazy::new(|| {
    let date = NaiveDate::from_ymd_opt(2023, 7, 31).unwrap_or(NaiveDate::MIN);

    TechnicalAnalysisReport {
        start_date: date,
        end_date: date,
        analysis_date: date,
        signals_detected: vec![
            "RSI crossover above 50".to_string(),
            "MACD bullish crossover".to_string(),
            "20-Day MA rising".to_string(),
            "Bullish engulfing".to_string(),
        ],
        entry: 1985.0,
        stop_loss: 1945.0,
        take_profit: 2040.0,
        risk_reward: "50:140".to_string(),
    }
});

impl TechnicalAnalysisReport {
    pub fn current() -> &'static TechnicalAnalysisReport {
        &SAMPLE_REPORT
    }
}
