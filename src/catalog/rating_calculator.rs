use crate::models::{Rating, Review};

/// Compute the aggregate rating for a review sequence
///
/// Takes the arithmetic mean of the review ordinals and rounds it half
/// away from zero, then converts back to a [`Rating`]. An empty sequence
/// yields `NotRated`; the normal path always has at least one review,
/// since a review is appended before aggregation.
pub fn average_rating(reviews: &[Review]) -> Rating {
    if reviews.is_empty() {
        return Rating::NotRated;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating().ordinal())).sum();
    let mean = f64::from(sum) / reviews.len() as f64;
    // mean of ordinals in 0..=5 rounds back into 0..=5
    Rating::from_ordinal(mean.round() as u8).unwrap_or(Rating::NotRated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reviews(ordinals: &[u8]) -> Vec<Review> {
        ordinals
            .iter()
            .map(|&n| Review::new(Rating::from_ordinal(n).unwrap(), ""))
            .collect()
    }

    #[test]
    fn test_empty_sequence_is_not_rated() {
        assert_eq!(average_rating(&[]), Rating::NotRated);
    }

    #[test]
    fn test_single_review() {
        assert_eq!(average_rating(&reviews(&[5])), Rating::FiveStar);
    }

    #[test]
    fn test_mean_rounds_up_at_two_thirds() {
        // mean of [4,2,4,4,5,3] = 22/6 = 3.67 -> 4
        assert_eq!(average_rating(&reviews(&[4, 2, 4, 4, 5, 3])), Rating::FourStar);
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        // mean of [3,4] = 3.5 -> 4
        assert_eq!(average_rating(&reviews(&[3, 4])), Rating::FourStar);
    }

    #[test]
    fn test_mean_rounds_down_below_midpoint() {
        // mean of [2,3,3] = 2.67 -> 3; mean of [2,2,3] = 2.33 -> 2
        assert_eq!(average_rating(&reviews(&[2, 3, 3])), Rating::ThreeStar);
        assert_eq!(average_rating(&reviews(&[2, 2, 3])), Rating::TwoStar);
    }
}
