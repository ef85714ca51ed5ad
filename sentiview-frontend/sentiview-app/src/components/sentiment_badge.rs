use leptos::prelude::*;
use sentiview_api_types::Sentiment;

/// Classification of a product's aggregate review sentiment, derived from
/// the stored percentages at render time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum SentimentSummary {
    Positive(f64),
    Negative(f64),
    Mixed,
    NoData,
}

impl SentimentSummary {
    // The positive check must stay first: negative only gets a look once
    // positive is ruled out.
    pub(crate) fn new(sentiment: &Sentiment) -> Self {
        let total = sentiment.positive + sentiment.neutral + sentiment.negative;
        if total == 0.0 {
            SentimentSummary::NoData
        } else if sentiment.positive > 60.0 {
            SentimentSummary::Positive(sentiment.positive)
        } else if sentiment.negative > 40.0 {
            SentimentSummary::Negative(sentiment.negative)
        } else {
            SentimentSummary::Mixed
        }
    }
}

#[component]
pub fn SentimentBadge(sentiment: Sentiment) -> impl IntoView {
    let base = "px-2 py-0.5 rounded-full text-xs font-medium border w-fit";
    match SentimentSummary::new(&sentiment) {
        SentimentSummary::Positive(percent) => view! {
            <span class=format!("{base} bg-green-500/10 border-green-500/20 text-green-400")>
                {format!("{}% Positive", percent.round() as i64)}
            </span>
        }
        .into_any(),
        SentimentSummary::Negative(percent) => view! {
            <span class=format!("{base} bg-red-500/10 border-red-500/20 text-red-400")>
                {format!("{}% Negative", percent.round() as i64)}
            </span>
        }
        .into_any(),
        SentimentSummary::Mixed => view! {
            <span class=format!("{base} bg-yellow-500/10 border-yellow-500/20 text-yellow-400")>
                "Mixed Reviews"
            </span>
        }
        .into_any(),
        SentimentSummary::NoData => view! {
            <span class=format!(
                "{base} bg-white/5 border-white/10 text-[color:var(--color-text-muted)]",
            )>"No sentiment data"</span>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentiment(positive: f64, neutral: f64, negative: f64) -> Sentiment {
        Sentiment {
            positive,
            neutral,
            negative,
        }
    }

    #[test]
    fn mostly_positive_reads_positive() {
        assert_eq!(
            SentimentSummary::new(&sentiment(70.0, 20.0, 10.0)),
            SentimentSummary::Positive(70.0)
        );
    }

    #[test]
    fn mostly_negative_reads_negative() {
        assert_eq!(
            SentimentSummary::new(&sentiment(30.0, 20.0, 50.0)),
            SentimentSummary::Negative(50.0)
        );
    }

    #[test]
    fn middling_split_reads_mixed() {
        assert_eq!(
            SentimentSummary::new(&sentiment(50.0, 30.0, 20.0)),
            SentimentSummary::Mixed
        );
    }

    #[test]
    fn all_zero_means_no_data() {
        assert_eq!(
            SentimentSummary::new(&sentiment(0.0, 0.0, 0.0)),
            SentimentSummary::NoData
        );
    }

    #[test]
    fn positive_wins_the_tie_break() {
        // junk data where both thresholds hold still reads positive
        assert_eq!(
            SentimentSummary::new(&sentiment(65.0, 0.0, 45.0)),
            SentimentSummary::Positive(65.0)
        );
    }

    #[test]
    fn boundary_values_fall_through_to_mixed() {
        assert_eq!(
            SentimentSummary::new(&sentiment(60.0, 0.0, 40.0)),
            SentimentSummary::Mixed
        );
    }
}
