use std::cmp::Ordering;

use crate::models::{RatedRestaurant, Restaurant};

/// Compare two restaurants by rating, best first: higher average, then more ratings
fn compare_by_rating(a: &Restaurant, b: &Restaurant) -> Ordering {
    b.average_rating()
        .total_cmp(&a.average_rating())
        .then_with(|| b.rating_count().cmp(&a.rating_count()))
}

/// Rank rated restaurants (average above 0) best first.
///
/// The sort is stable, so restaurants that compare equal keep the order of
/// `restaurants`.
pub fn rank_by_average<'a, I>(restaurants: I) -> Vec<&'a Restaurant>
where
    I: IntoIterator<Item = &'a Restaurant>,
{
    let mut ranked: Vec<&Restaurant> = restaurants
        .into_iter()
        .filter(|restaurant| restaurant.is_rated())
        .collect();
    ranked.sort_by(|a, b| compare_by_rating(a, b));
    ranked
}

/// The single best rated restaurant.
///
/// A later candidate replaces the current best only when strictly better, so
/// on a full tie the first one in iteration order wins.
pub fn best_rated<'a, I>(restaurants: I) -> Option<&'a Restaurant>
where
    I: IntoIterator<Item = &'a Restaurant>,
{
    restaurants
        .into_iter()
        .filter(|restaurant| restaurant.is_rated())
        .fold(None::<&'a Restaurant>, |best, candidate| match best {
            Some(current) if compare_by_rating(candidate, current) != Ordering::Less => {
                Some(current)
            }
            _ => Some(candidate),
        })
}

impl From<&Restaurant> for RatedRestaurant {
    fn from(restaurant: &Restaurant) -> Self {
        RatedRestaurant {
            name: restaurant.name.clone(),
            average_rating: restaurant.average_rating(),
            rating_count: restaurant.rating_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_rated(name: &str, ratings: &[i32]) -> Restaurant {
        let mut restaurant = Restaurant::new(name.to_string(), "Pizza".to_string());
        for &rating in ratings {
            restaurant.add_rating(rating);
        }
        restaurant
    }

    fn names(restaurants: &[&Restaurant]) -> Vec<String> {
        restaurants.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_rank_by_average_descending() {
        let restaurants = vec![
            create_rated("A", &[2]),
            create_rated("B", &[5, 4]),
            create_rated("C", &[3, 4]),
        ];
        let ranked = rank_by_average(&restaurants);
        assert_eq!(names(&ranked), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_rank_excludes_unrated_and_zero_average() {
        let restaurants = vec![
            create_rated("A", &[]),
            create_rated("B", &[0, 0]),
            create_rated("C", &[1]),
        ];
        let ranked = rank_by_average(&restaurants);
        assert_eq!(names(&ranked), vec!["C"]);
    }

    #[test]
    fn test_rank_tie_prefers_more_ratings() {
        let restaurants = vec![create_rated("R1", &[5, 3]), create_rated("R2", &[4, 4, 4])];
        let ranked = rank_by_average(&restaurants);
        assert_eq!(names(&ranked), vec!["R2", "R1"]);
    }

    #[test]
    fn test_rank_full_tie_keeps_input_order() {
        let restaurants = vec![
            create_rated("Zeta", &[4]),
            create_rated("Alpha", &[4]),
            create_rated("Mid", &[4]),
        ];
        let ranked = rank_by_average(&restaurants);
        assert_eq!(names(&ranked), vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_best_rated() {
        let restaurants = vec![
            create_rated("A", &[3]),
            create_rated("B", &[5, 4]),
            create_rated("C", &[]),
        ];
        assert_eq!(best_rated(&restaurants).map(|r| r.name.as_str()), Some("B"));
    }

    #[test]
    fn test_best_rated_full_tie_keeps_first() {
        let restaurants = vec![create_rated("A", &[4, 4]), create_rated("B", &[4, 4])];
        assert_eq!(best_rated(&restaurants).map(|r| r.name.as_str()), Some("A"));
    }

    #[test]
    fn test_best_rated_none_when_unrated() {
        let restaurants = vec![create_rated("A", &[]), create_rated("B", &[0])];
        assert!(best_rated(&restaurants).is_none());
    }

    #[test]
    fn test_rated_restaurant_from() {
        let restaurant = create_rated("R1", &[5, 3]);
        let rated = RatedRestaurant::from(&restaurant);
        assert_eq!(rated.name, "R1");
        assert_eq!(rated.average_rating, 4.0);
        assert_eq!(rated.rating_count, 2);
    }
}
