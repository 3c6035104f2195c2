use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    error::{AppError, AppResult},
    models::{Product, RecommendationResponse, CATALOG},
};

pub const ALGORITHM: &str = "mock_content_based";

const MIN_RECOMMENDATIONS: usize = 3;
const MAX_RECOMMENDATIONS: usize = 5;
const MIN_SCORE: f64 = 0.70;
const MAX_SCORE: f64 = 0.95;

/// Generates mock personalized recommendations for a user
///
/// The generator is seeded with the user ID, so the same user always gets the
/// same products and score. ChaCha output is stable across platforms and
/// releases, which makes this reproducible across processes too.
///
/// Draw order is fixed: sample size, then products, then score.
pub fn get_recommendations(user_id: i64) -> AppResult<RecommendationResponse> {
    recommend_from(&CATALOG, user_id)
}

fn recommend_from(catalog: &[Product], user_id: i64) -> AppResult<RecommendationResponse> {
    if catalog.len() < MAX_RECOMMENDATIONS {
        return Err(AppError::Internal(format!(
            "Failed to generate recommendations: catalog has only {} products",
            catalog.len()
        )));
    }

    // Two's-complement reinterpretation keeps negative IDs distinct
    let mut rng = ChaCha8Rng::seed_from_u64(user_id as u64);

    let count = rng.gen_range(MIN_RECOMMENDATIONS..=MAX_RECOMMENDATIONS);
    let recommendations: Vec<Product> = catalog.choose_multiple(&mut rng, count).cloned().collect();
    let score: f64 = rng.gen_range(MIN_SCORE..=MAX_SCORE);

    Ok(RecommendationResponse {
        recommendations,
        personalization_score: (score * 100.0).round() / 100.0,
        user_id,
        algorithm: ALGORITHM,
        total_products: catalog.len(),
    })
}
