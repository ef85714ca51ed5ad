use icondata as i;
use leptos::prelude::*;
use leptos_icons::*;

/// Breaks a 0-5 rating into full/half/empty star counts, always five symbols
/// total. A fractional part of at least one half earns the half star.
pub(crate) fn star_counts(rating: f64) -> (u8, bool, u8) {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as u8;
    let half = rating - rating.floor() >= 0.5;
    let empty = 5 - full - u8::from(half);
    (full, half, empty)
}

#[component]
pub fn StarRating(rating: f64) -> impl IntoView {
    let (full, half, empty) = star_counts(rating);
    view! {
        <span
            class="flex flex-row items-center gap-0.5 text-amber-400"
            aria-label=format!("{rating:.1} out of 5")
        >
            {(0..full)
                .map(|_| view! { <Icon icon=i::BsStarFill width="1em" height="1em" /> })
                .collect::<Vec<_>>()}
            {half.then(|| view! { <Icon icon=i::BsStarHalf width="1em" height="1em" /> })}
            {(0..empty)
                .map(|_| view! { <Icon icon=i::BsStar width="1em" height="1em" /> })
                .collect::<Vec<_>>()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_rating_into_five_symbols() {
        assert_eq!(star_counts(3.7), (3, true, 1));
        assert_eq!(star_counts(4.2), (4, false, 1));
        assert_eq!(star_counts(5.0), (5, false, 0));
        assert_eq!(star_counts(0.0), (0, false, 5));
        assert_eq!(star_counts(2.5), (2, true, 2));
    }

    #[test]
    fn out_of_range_ratings_are_clamped() {
        assert_eq!(star_counts(6.3), (5, false, 0));
        assert_eq!(star_counts(-1.0), (0, false, 5));
    }
}
