//! Bucketed classification over an ordered list of upper bounds.

/// Ordered `(upper bound, label)` lookup with a mandatory catch-all.
///
/// The catch-all plays the role of an infinite upper bound, so every finite
/// value maps to a label and a table without one cannot be constructed.
#[derive(Clone, Debug)]
pub struct ThresholdTable<T> {
    buckets: Vec<(f64, T)>,
    fallback: T,
}

impl<T> ThresholdTable<T> {
    /// Builds a table from `(upper bound, label)` buckets plus the label used
    /// once every bound is exceeded. Buckets are sorted by ascending bound,
    /// so callers may list them in any order.
    pub fn new(mut buckets: Vec<(f64, T)>, fallback: T) -> Self {
        buckets.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { buckets, fallback }
    }

    /// Label of the first bucket whose bound strictly exceeds `value`.
    ///
    /// A value sitting exactly on a bound belongs to the bucket above it.
    pub fn classify(&self, value: f64) -> &T {
        self.buckets
            .iter()
            .find(|(bound, _)| value < *bound)
            .map(|(_, label)| label)
            .unwrap_or(&self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grades() -> ThresholdTable<&'static str> {
        ThresholdTable::new(vec![(10.0, "low"), (20.0, "mid")], "high")
    }

    #[test]
    fn picks_first_bucket_above_value() {
        let table = grades();
        assert_eq!(*table.classify(3.0), "low");
        assert_eq!(*table.classify(15.0), "mid");
    }

    #[test]
    fn bound_itself_belongs_to_the_next_bucket() {
        let table = grades();
        assert_eq!(*table.classify(10.0), "mid");
        assert_eq!(*table.classify(20.0), "high");
    }

    #[test]
    fn values_past_every_bound_hit_the_fallback() {
        let table = grades();
        assert_eq!(*table.classify(1000.0), "high");
    }

    #[test]
    fn bucket_order_does_not_matter() {
        let table = ThresholdTable::new(vec![(20.0, "mid"), (10.0, "low")], "high");
        assert_eq!(*table.classify(5.0), "low");
        assert_eq!(*table.classify(12.0), "mid");
    }

    #[test]
    fn empty_table_always_answers_the_fallback() {
        let table: ThresholdTable<&str> = ThresholdTable::new(vec![], "only");
        assert_eq!(*table.classify(f64::MIN), "only");
        assert_eq!(*table.classify(f64::MAX), "only");
    }
}
