use rand::Rng;

/// Pick one label from `(label, weight)` pairs with probability proportional
/// to its weight.
///
/// Walks the cumulative weight sum and returns the first label whose
/// cumulative weight reaches the draw; the last label doubles as the fallback
/// if floating-point rounding leaves the draw unmatched.
///
/// # Panics
///
/// Panics if `items` is empty. Callers supply fixed non-empty tables, so an
/// empty slice is a programming error, not a runtime condition.
pub fn weighted_choice<'a, T>(rng: &mut impl Rng, items: &'a [(T, f64)]) -> &'a T {
    assert!(!items.is_empty(), "weighted_choice requires at least one item");

    let total: f64 = items.iter().map(|(_, weight)| weight).sum();
    let draw = rng.gen::<f64>() * total;

    let mut cumulative = 0.0;
    for (label, weight) in items {
        cumulative += weight;
        if cumulative >= draw {
            return label;
        }
    }
    &items[items.len() - 1].0
}

/// Pick one element uniformly at random.
///
/// # Panics
///
/// Panics if `items` is empty.
pub fn uniform_choice<'a, T>(rng: &mut impl Rng, items: &'a [T]) -> &'a T {
    assert!(!items.is_empty(), "uniform_choice requires at least one item");
    &items[rng.gen_range(0..items.len())]
}
