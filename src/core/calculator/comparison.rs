/// Planned (or estimated) hours versus actual logged hours.
///
/// `remaining` and `rate` are only defined when something was planned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub planned: f64,
    pub actual: f64,
    pub remaining: Option<f64>,
    /// Consumption rate in percent.
    pub rate: Option<f64>,
    pub is_overrun: bool,
}

impl Comparison {
    pub fn calculate(planned: f64, actual: f64) -> Self {
        if planned > 0.0 {
            let remaining = planned - actual;
            Self {
                planned,
                actual,
                remaining: Some(remaining),
                rate: Some(actual / planned * 100.0),
                is_overrun: remaining < 0.0,
            }
        } else {
            Self {
                planned,
                actual,
                remaining: None,
                rate: None,
                is_overrun: false,
            }
        }
    }

    /// Display strings for (planned, actual, remaining, rate).
    pub fn display(&self) -> (String, String, String, String) {
        let planned = hours_or_dash(self.planned);
        let actual = hours_or_dash(self.actual);
        let remaining = self
            .remaining
            .map(|r| format!("{r:.1}h"))
            .unwrap_or_else(|| "-".into());
        let rate = self
            .rate
            .map(|r| format!("{r:.0}%"))
            .unwrap_or_else(|| "-".into());
        (planned, actual, remaining, rate)
    }
}

fn hours_or_dash(h: f64) -> String {
    if h > 0.0 {
        format!("{h:.1}h")
    } else {
        "-".into()
    }
}
