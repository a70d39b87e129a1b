//! Random resource-allocation split

use rand::rngs::StdRng;
use rand::Rng;

use cloud_insights_types::{CategoryShare, CATEGORY_NAMES};

/// Produce the four category shares, values uniform in [0, 100)
///
/// The set is rebuilt wholesale; nothing carries over from the previous
/// refresh and no smoothing is applied.
pub fn split_categories(rng: &mut StdRng) -> Vec<CategoryShare> {
    CATEGORY_NAMES
        .iter()
        .map(|&name| CategoryShare::new(name, rng.gen_range(0..100)))
        .collect()
}

/// Holder for the current allocation split
pub struct CategorySource {
    shares: Vec<CategoryShare>,
}

impl CategorySource {
    pub fn new(rng: &mut StdRng) -> Self {
        Self {
            shares: split_categories(rng),
        }
    }

    pub fn shares(&self) -> &[CategoryShare] {
        &self.shares
    }

    /// Discard the current split and draw a new one
    pub fn regenerate(&mut self, rng: &mut StdRng) {
        self.shares = split_categories(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloud_insights_types::CategoryName;
    use rand::SeedableRng;

    #[test]
    fn test_always_four_fixed_names_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let shares = split_categories(&mut rng);
            assert_eq!(shares.len(), 4);
            let names: Vec<CategoryName> = shares.iter().map(|s| s.name).collect();
            assert_eq!(names, CATEGORY_NAMES.to_vec());
            for share in &shares {
                assert!(share.value < 100, "share {} out of range", share.value);
            }
        }
    }

    #[test]
    fn test_regenerate_replaces_wholesale() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut source = CategorySource::new(&mut rng);
        let before = source.shares().to_vec();

        // A handful of redraws must produce at least one different split
        let mut changed = false;
        for _ in 0..10 {
            source.regenerate(&mut rng);
            if source.shares() != before.as_slice() {
                changed = true;
                break;
            }
        }
        assert!(changed, "regeneration never changed the split");
    }
}
