//! Product Catalog
//!
//! Static menu content for the landing page, one section per category.

use crate::models::Product;

/// A menu section: anchor id, heading, and its product cards.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    /// Anchor id, also the smooth-scroll target (`#burgers` etc.)
    pub id: &'static str,
    pub title: &'static str,
    pub products: &'static [Product],
}

pub const CATEGORIES: &[Category] = &[
    Category {
        id: "burgers",
        title: "Burgers",
        products: &[
            Product { name: "Classic Burger", price_text: "$8.50", image: "images/classic-burger.jpg" },
            Product { name: "Double Cheese Burger", price_text: "$10.99", image: "images/double-cheese.jpg" },
            Product { name: "Spicy Chicken Burger", price_text: "$9.25", image: "images/spicy-chicken.jpg" },
        ],
    },
    Category {
        id: "pizza",
        title: "Pizza",
        products: &[
            Product { name: "Margherita", price_text: "$11.00", image: "images/margherita.jpg" },
            Product { name: "Pepperoni Pizza", price_text: "$12.99", image: "images/pepperoni.jpg" },
            Product { name: "BBQ Chicken Pizza", price_text: "$13.50", image: "images/bbq-chicken.jpg" },
        ],
    },
    Category {
        id: "tacos",
        title: "Tacos",
        products: &[
            Product { name: "Beef Taco", price_text: "$4.25", image: "images/beef-taco.jpg" },
            Product { name: "Fish Taco", price_text: "$5.00", image: "images/fish-taco.jpg" },
            Product { name: "Veggie Taco", price_text: "$3.75", image: "images/veggie-taco.jpg" },
        ],
    },
    Category {
        id: "desserts",
        title: "Desserts",
        products: &[
            Product { name: "Chocolate Lava Cake", price_text: "$6.50", image: "images/lava-cake.jpg" },
            Product { name: "Strawberry Cheesecake", price_text: "$6.00", image: "images/cheesecake.jpg" },
            Product { name: "Ice Cream Sundae", price_text: "$4.75", image: "images/sundae.jpg" },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::parse_price;

    #[test]
    fn test_catalog_prices_parse_to_positive_amounts() {
        for category in CATEGORIES {
            for product in category.products {
                assert!(
                    parse_price(product.price_text) > 0.0,
                    "{} has unparseable price {:?}",
                    product.name,
                    product.price_text
                );
            }
        }
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let mut names: Vec<&str> = CATEGORIES
            .iter()
            .flat_map(|c| c.products.iter().map(|p| p.name))
            .collect();
        let before = names.len();
        names.sort_unstable();
        names.dedup();
        // duplicate names would silently merge in the cart
        assert_eq!(names.len(), before);
    }
}
