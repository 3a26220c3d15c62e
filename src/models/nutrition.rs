//! Shared nutrition data structure
//!
//! Used by table records, match results, and meal totals.

use serde::{Deserialize, Serialize};

/// Macronutrients for one serving of a dish
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64, // kcal
    pub protein: f64,  // grams
    pub carbs: f64,    // grams
    pub fat: f64,      // grams
}

impl Nutrition {
    /// Create a new Nutrition with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Add another nutrition to this one
    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_of_empty_is_zero() {
        let total: Nutrition = Vec::<Nutrition>::new().into_iter().sum();
        assert_eq!(total, Nutrition::zero());
    }

    #[test]
    fn test_sum_adds_each_field() {
        let idli = Nutrition { calories: 39.0, protein: 2.0, carbs: 8.0, fat: 0.1 };
        let pizza = Nutrition { calories: 266.0, protein: 11.0, carbs: 33.0, fat: 10.0 };
        let total: Nutrition = vec![idli, pizza].into_iter().sum();
        assert_eq!(total.calories, 305.0);
        assert_eq!(total.protein, 13.0);
        assert_eq!(total.carbs, 41.0);
        assert!((total.fat - 10.1).abs() < 1e-9);
    }
}
