//! Display names for search results.
//!
//! A product whose name is shared by another product in the same result set is
//! shown as `"<producer><separator><name>"`; otherwise it is shown by its name
//! alone. Counting happens over the filtered set handed in, never the whole
//! catalog.

use std::collections::HashMap;

use crate::product::Product;

/// Display name of `product` given how many products in scope carry its exact name.
pub(crate) fn display_name(product: &Product, occurrences: usize, separator: &str) -> String {
    if occurrences > 1 {
        format!("{}{}{}", product.producer(), separator, product.name())
    } else {
        product.name().to_string()
    }
}

/// Resolve display names for a filtered set of products.
pub(crate) fn resolve_display_names<'a>(
    products: &'a [&'a Product],
    separator: &'a str,
) -> impl Iterator<Item = String> + 'a {
    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    for product in products {
        *occurrences.entry(product.name()).or_insert(0) += 1;
    }

    products.iter().map(move |product| {
        let count = occurrences.get(product.name()).copied().unwrap_or(0);
        display_name(product, count, separator)
    })
}
